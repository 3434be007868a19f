use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Data transaksi tidak lengkap.")]
    IncompleteData,

    #[error("Format data tidak valid: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("unknown time zone {name}: {reason}")]
    InvalidTimeZone { name: String, reason: String },
}
