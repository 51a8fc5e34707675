use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CatalogError: {0}")]
    Custom(String),
}
