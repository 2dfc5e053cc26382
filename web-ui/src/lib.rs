//! Browser entry point for the vessel and cargo boards.
//!
//! On DOM-ready each board looks up its table element by id and, if the page
//! has one, fetches its collection from the page's own origin and appends the
//! rows. The two boards run independently of each other.

use shipboard_core::LoadOutcome;

mod wasm_utils;

#[cfg(target_arch = "wasm32")]
mod dom_table;

/// Send a loader's outcome to the diagnostic channel (the browser console).
/// Returns the line that was written, if any.
pub fn report_outcome(board: &str, outcome: &LoadOutcome) -> Option<String> {
    match outcome {
        LoadOutcome::Loaded { rows } => {
            let line = format!("✅ {}: {} rows", board, rows);
            wasm_utils::console_log(&line);
            Some(line)
        }
        LoadOutcome::Failed { rows, reason } => {
            let line = format!("Error: {} stopped after {} rows: {}", board, rows, reason);
            wasm_utils::console_error(&line);
            Some(line)
        }
        LoadOutcome::Skipped => None,
    }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{dom_table::DomTable, report_outcome, wasm_utils};
    use shipboard_core::{
        load_cargoes, load_vessels, ShipBrokerHttpClient, CARGOES_TABLE_ID, VESSELS_TABLE_ID,
    };
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{Document, DocumentReadyState};

    /// Called once from the page's HTML.
    #[wasm_bindgen]
    pub fn start() -> Result<(), JsValue> {
        wasm_utils::set_panic_hook();

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let origin = window.location().origin()?;

        if document.ready_state() == DocumentReadyState::Loading {
            let doc = document.clone();
            let on_ready = Closure::once_into_js(move || run_boards(&doc, &origin));
            document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        } else {
            run_boards(&document, &origin);
        }
        Ok(())
    }

    fn run_boards(document: &Document, origin: &str) {
        let client = ShipBrokerHttpClient::new(origin);

        if let Some(element) = document.get_element_by_id(VESSELS_TABLE_ID) {
            let mut table = DomTable::new(document.clone(), element);
            let client = client.clone();
            wasm_utils::spawn_async(async move {
                let outcome = load_vessels(&client, Some(&mut table)).await;
                report_outcome("vessels", &outcome);
            });
        }

        if let Some(element) = document.get_element_by_id(CARGOES_TABLE_ID) {
            let mut table = DomTable::new(document.clone(), element);
            wasm_utils::spawn_async(async move {
                let outcome = load_cargoes(&client, Some(&mut table)).await;
                report_outcome("cargoes", &outcome);
            });
        }
    }
}
