use std::time::Duration;

use thiserror::Error;

/// Failures reported by a blob uploader.
#[derive(Error, Debug)]
pub enum UploadError {
    /// File exceeds the uploader's per-file size limit.
    ///
    /// Surfaces to clients as 413 Payload Too Large.
    #[error("File '{file_name}' is {size} bytes, exceeding the {limit} byte limit")]
    TooLarge {
        file_name: String,
        size: usize,
        limit: usize,
    },

    /// Upload did not complete within the uploader's time limit.
    #[error("Upload of '{file_name}' did not finish within {timeout:?}")]
    TimedOut { file_name: String, timeout: Duration },

    /// Storage backend rejected or failed the write.
    #[error("Failed to upload file '{file_name}': {source}")]
    Backend {
        file_name: String,
        #[source]
        source: object_store::Error,
    },
}

impl UploadError {
    /// Returns true if the upload was rejected because of its size.
    pub fn is_size_limit(&self) -> bool {
        matches!(self, Self::TooLarge { .. })
    }
}
