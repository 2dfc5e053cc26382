use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShipBrokerError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Server error: {status}")]
    ServerError { status: u16 },
    #[error("Table error: {0}")]
    Table(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ShipBrokerError>;
