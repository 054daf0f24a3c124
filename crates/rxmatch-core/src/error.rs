use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("too many medications: {count} given, at most {limit} allowed")]
    TooManyMedications { count: usize, limit: usize },

    #[error("interaction source failed for {drug}: {source}")]
    Source {
        drug: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl CoreError {
    pub(crate) fn from_source<E>(drug: &str, error: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Source {
            drug: drug.to_string(),
            source: error.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
