use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("malformed JSON: {0}")]
    Json(String),

    #[error("transaction record must be a JSON object")]
    NotAnObject,

    #[error("record has no string TransactionType")]
    MissingTransactionType,
}

impl From<serde_json::Error> for TransactionError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
