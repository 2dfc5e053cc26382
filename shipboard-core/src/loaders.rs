//! The vessel and cargo board loaders.
//!
//! Each loader fetches its collection once and appends one row per record to
//! its own table, converting records one at a time in server order. Failures
//! of any kind are logged and swallowed. A record that cannot be converted (or
//! a row the table refuses) stops the board there; rows already appended stay.
//! Nothing is retried.

use crate::error::{Result, ShipBrokerError};
use crate::http_api_client::ShipBrokerHttpClient;
use crate::models::{Cargo, Vessel};
use crate::render::ToRow;
use crate::table::{Page, TableSink};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The page has no table for this board; no request was made.
    Skipped,
    Loaded { rows: usize },
    /// `rows` counts what was appended before the failure.
    Failed { rows: usize, reason: String },
}

impl LoadOutcome {
    pub fn rows(&self) -> usize {
        match self {
            LoadOutcome::Loaded { rows } | LoadOutcome::Failed { rows, .. } => *rows,
            LoadOutcome::Skipped => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub vessels: LoadOutcome,
    pub cargoes: LoadOutcome,
}

impl LoadReport {
    pub fn total_rows(&self) -> usize {
        self.vessels.rows() + self.cargoes.rows()
    }
}

pub async fn load_vessels<S: TableSink + ?Sized>(
    client: &ShipBrokerHttpClient,
    table: Option<&mut S>,
) -> LoadOutcome {
    load_board::<Vessel, _, _>("vessels", table, client.list_vessels()).await
}

pub async fn load_cargoes<S: TableSink + ?Sized>(
    client: &ShipBrokerHttpClient,
    table: Option<&mut S>,
) -> LoadOutcome {
    load_board::<Cargo, _, _>("cargoes", table, client.list_cargoes()).await
}

/// Run both loaders concurrently against whichever tables the page has.
pub async fn load_page(client: &ShipBrokerHttpClient, page: &mut Page) -> LoadReport {
    let Page { vessels, cargoes } = page;
    let (vessels, cargoes) = futures::join!(
        load_vessels(client, vessels.as_mut()),
        load_cargoes(client, cargoes.as_mut()),
    );
    LoadReport { vessels, cargoes }
}

async fn load_board<R, S, F>(board: &str, table: Option<&mut S>, fetch: F) -> LoadOutcome
where
    R: ToRow + DeserializeOwned,
    S: TableSink + ?Sized,
    F: Future<Output = Result<Vec<Value>>>,
{
    // The fetch future is lazy, so dropping it here means no request goes out.
    let Some(table) = table else {
        info!("⏭️  No {} table on page, skipping", board);
        return LoadOutcome::Skipped;
    };

    let records = match fetch.await {
        Ok(records) => records,
        Err(e) => return failed(board, 0, e),
    };

    let mut rows = 0;
    for (index, value) in records.into_iter().enumerate() {
        let record: R = match serde_json::from_value(value) {
            Ok(record) => record,
            Err(e) => {
                error!("❌ {} record {} is not renderable", board, index);
                return failed(board, rows, ShipBrokerError::Decode(e));
            }
        };
        if let Err(e) = table.append_row(record.to_row()) {
            return failed(board, rows, e);
        }
        rows += 1;
    }

    info!("✅ Appended {} {} rows", rows, board);
    LoadOutcome::Loaded { rows }
}

fn failed(board: &str, rows: usize, e: ShipBrokerError) -> LoadOutcome {
    error!("❌ Error loading {} after {} rows: {}", board, rows, e);
    LoadOutcome::Failed {
        rows,
        reason: e.to_string(),
    }
}
