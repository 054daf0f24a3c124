use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("duplicate catalog name: {name}")]
    DuplicateCatalogName { name: String },
    #[error("unknown severity: {value}")]
    UnknownSeverity { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
