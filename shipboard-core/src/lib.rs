pub mod models;
pub mod render;
pub mod table;

// API access and loading
pub mod error;
pub mod http_api_client;
pub mod loaders;

// Configuration
pub mod config;

pub use config::Config;
pub use error::{Result, ShipBrokerError};
pub use http_api_client::ShipBrokerHttpClient;
pub use loaders::{load_cargoes, load_page, load_vessels, LoadOutcome, LoadReport};
pub use models::{Cargo, Rate, Vessel};
pub use render::{OutputFormat, Row, ToRow, PLACEHOLDER};
pub use table::{Page, PageKind, Table, TableSink, CARGOES_TABLE_ID, VESSELS_TABLE_ID};
