use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed parsing menu config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate menu item name: {0}")]
    DuplicateName(String),

    #[error("Invalid price {price} for {name}")]
    InvalidPrice { name: String, price: f64 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
