//! Blob uploads for board documents and room images.
//!
//! The submission pipeline only sees the [`BlobUploader`] trait so tests can swap the
//! Azure-backed store for an in-memory one.

pub mod azure;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use bytes::Bytes;
use object_store::{
    path::Path, Attribute, AttributeValue, Attributes, ObjectStore, PutOptions, PutPayload,
};
use url::Url;
use uuid::Uuid;

use crate::server::{
    config::Config,
    error::{config::ConfigError, upload::UploadError, AppError},
    service::upload::azure::AzureConnectionString,
};

/// Content type recorded on every stored blob, whatever was uploaded.
pub const BLOB_CONTENT_TYPE: &str = "image/jpeg";

/// Stores a file and returns the public URL it can be fetched from.
#[async_trait]
pub trait BlobUploader: Send + Sync {
    /// Uploads `bytes` under a fresh unique name derived from `original_name`.
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored blob
    /// - `Err(UploadError::TooLarge)` - File exceeds the per-file size limit
    /// - `Err(UploadError::TimedOut)` - Backend did not acknowledge the write in time
    /// - `Err(UploadError::Backend)` - Backend rejected or failed the write
    async fn upload(&self, bytes: Bytes, original_name: &str) -> Result<String, UploadError>;
}

/// Per-file limits enforced before and during an upload.
#[derive(Debug, Clone, Copy)]
pub struct UploadLimits {
    pub max_file_bytes: usize,
    pub timeout: Duration,
}

impl UploadLimits {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_file_bytes: config.max_file_bytes,
            timeout: config.upload_timeout,
        }
    }
}

/// [`BlobUploader`] writing to any `object_store` backend.
pub struct ObjectStoreUploader {
    store: Arc<dyn ObjectStore>,
    /// URL prefix under which stored blobs are publicly reachable.
    public_base_url: Url,
    limits: UploadLimits,
}

impl ObjectStoreUploader {
    /// Creates an uploader for `store`.
    ///
    /// # Returns
    /// - `Ok(ObjectStoreUploader)` - Uploader ready for use
    /// - `Err(ConfigError::InvalidConnectionString)` - `public_base_url` cannot have path
    ///   segments appended (e.g. a `mailto:` URL)
    pub fn new(
        store: Arc<dyn ObjectStore>,
        public_base_url: Url,
        limits: UploadLimits,
    ) -> Result<Self, ConfigError> {
        if public_base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidConnectionString(format!(
                "blob URL '{}' cannot be used as a base URL",
                public_base_url
            )));
        }

        Ok(Self {
            store,
            public_base_url,
            limits,
        })
    }

    /// Creates an uploader for the Azure container named in `config`.
    ///
    /// # Returns
    /// - `Ok(ObjectStoreUploader)` - Azure client built
    /// - `Err(AppError::ConfigErr)` - Connection string is malformed
    /// - `Err(AppError::ObjectStoreErr)` - Azure client could not be constructed
    pub fn azure(config: &Config) -> Result<Self, AppError> {
        let connection = AzureConnectionString::parse(&config.azure_connection_string)?;
        let store = connection.build_store(&config.azure_container_name)?;

        let container_url = connection.container_url(&config.azure_container_name);
        let public_base_url = Url::parse(&container_url).map_err(|e| {
            ConfigError::InvalidConnectionString(format!(
                "blob URL '{}' is not valid: {}",
                container_url, e
            ))
        })?;

        Ok(Self::new(
            Arc::new(store),
            public_base_url,
            UploadLimits::from_config(config),
        )?)
    }

    /// Public URL of the blob named `blob_name`.
    fn url_for(&self, blob_name: &str) -> String {
        let mut url = self.public_base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(blob_name);
        }
        url.to_string()
    }
}

#[async_trait]
impl BlobUploader for ObjectStoreUploader {
    async fn upload(&self, bytes: Bytes, original_name: &str) -> Result<String, UploadError> {
        let size = bytes.len();
        if size > self.limits.max_file_bytes {
            return Err(UploadError::TooLarge {
                file_name: original_name.to_string(),
                size,
                limit: self.limits.max_file_bytes,
            });
        }

        let blob_name = format!("{}-{}", Uuid::new_v4(), original_name);
        // A single path part, so a '/' in the client's file name never creates a prefix.
        let location = Path::from_iter([blob_name.as_str()]);

        let mut attributes = Attributes::new();
        attributes.insert(
            Attribute::ContentType,
            AttributeValue::from(BLOB_CONTENT_TYPE),
        );
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        let put = self
            .store
            .put_opts(&location, PutPayload::from_bytes(bytes), options);

        match tokio::time::timeout(self.limits.timeout, put).await {
            Err(_) => Err(UploadError::TimedOut {
                file_name: original_name.to_string(),
                timeout: self.limits.timeout,
            }),
            Ok(Err(source)) => Err(UploadError::Backend {
                file_name: original_name.to_string(),
                source,
            }),
            Ok(Ok(_)) => {
                tracing::debug!("Stored {} ({} bytes)", location, size);
                Ok(self.url_for(&blob_name))
            }
        }
    }
}
