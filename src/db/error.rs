use thiserror::Error;

/// Failures surfaced by [`VocabStore`](super::VocabStore).
///
/// `StorageUnavailable` is only produced while opening or initializing the
/// store and means the process cannot continue. The other two variants
/// describe a single failed operation; the store stays usable afterwards.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {context}")]
    StorageUnavailable {
        context: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    #[error("write failed: {context}")]
    WriteFailed {
        context: &'static str,
        #[source]
        source: rusqlite::Error,
    },
    #[error("read failed: {context}")]
    ReadFailed {
        context: &'static str,
        #[source]
        source: rusqlite::Error,
    },
}

impl StoreError {
    pub(crate) fn unavailable(context: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| StoreError::StorageUnavailable { context, source }
    }

    pub(crate) fn write(context: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| StoreError::WriteFailed { context, source }
    }

    pub(crate) fn read(context: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| StoreError::ReadFailed { context, source }
    }

    /// Stable short code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::StorageUnavailable { .. } => "storage_unavailable",
            StoreError::WriteFailed { .. } => "write_failed",
            StoreError::ReadFailed { .. } => "read_failed",
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
