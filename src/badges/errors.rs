use thiserror::Error;

#[derive(Debug, Error)]
pub enum BadgeError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Category error: {0}")]
    Category(String),

    #[error("Repository error: {0}")]
    Repository(String),
}
