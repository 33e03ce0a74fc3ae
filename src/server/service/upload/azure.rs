//! Azure Blob Storage connection strings.

use object_store::azure::{MicrosoftAzure, MicrosoftAzureBuilder};

use crate::server::error::config::ConfigError;

const DEFAULT_PROTOCOL: &str = "https";
const DEFAULT_ENDPOINT_SUFFIX: &str = "core.windows.net";

/// Components of an Azure storage account connection string, e.g.
/// `AccountName=acct;AccountKey=...;EndpointSuffix=core.windows.net`.
#[derive(Debug, Clone, PartialEq)]
pub struct AzureConnectionString {
    pub account_name: String,
    pub account_key: String,
    pub protocol: String,
    pub endpoint_suffix: String,
    /// Explicit `BlobEndpoint`, used by emulators and custom domains.
    pub blob_endpoint: Option<String>,
}

impl AzureConnectionString {
    /// Parses a `Key=Value;Key=Value` connection string.
    ///
    /// Keys are matched case-insensitively; unknown keys are ignored. Values may
    /// themselves contain `=` (base64 account keys end in padding).
    ///
    /// # Returns
    /// - `Ok(AzureConnectionString)` - Account name and key present
    /// - `Err(ConfigError::InvalidConnectionString)` - Malformed pair or missing account
    ///   name or key
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let mut account_name = None;
        let mut account_key = None;
        let mut protocol = None;
        let mut endpoint_suffix = None;
        let mut blob_endpoint = None;

        let pairs = raw.split(';').map(str::trim).filter(|pair| !pair.is_empty());

        for (index, pair) in pairs.enumerate() {
            // Report the position only: a mangled pair may hold part of the account key.
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                ConfigError::InvalidConnectionString(format!(
                    "component {} is not a Key=Value pair",
                    index + 1
                ))
            })?;
            let value = value.trim().to_string();

            match key.trim().to_ascii_lowercase().as_str() {
                "accountname" => account_name = Some(value),
                "accountkey" => account_key = Some(value),
                "defaultendpointsprotocol" => protocol = Some(value),
                "endpointsuffix" => endpoint_suffix = Some(value),
                "blobendpoint" => blob_endpoint = Some(value.trim_end_matches('/').to_string()),
                _ => {}
            }
        }

        Ok(Self {
            account_name: account_name.ok_or_else(|| {
                ConfigError::InvalidConnectionString("missing AccountName".to_string())
            })?,
            account_key: account_key.ok_or_else(|| {
                ConfigError::InvalidConnectionString("missing AccountKey".to_string())
            })?,
            protocol: protocol.unwrap_or_else(|| DEFAULT_PROTOCOL.to_string()),
            endpoint_suffix: endpoint_suffix.unwrap_or_else(|| DEFAULT_ENDPOINT_SUFFIX.to_string()),
            blob_endpoint,
        })
    }

    /// Base URL of the account's blob service, without a trailing slash.
    pub fn blob_service_url(&self) -> String {
        match &self.blob_endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!(
                "{}://{}.blob.{}",
                self.protocol, self.account_name, self.endpoint_suffix
            ),
        }
    }

    /// Public URL prefix of blobs stored in `container`.
    pub fn container_url(&self, container: &str) -> String {
        format!("{}/{}", self.blob_service_url(), container)
    }

    /// Builds an `object_store` client for `container`.
    pub fn build_store(&self, container: &str) -> Result<MicrosoftAzure, object_store::Error> {
        let mut builder = MicrosoftAzureBuilder::new()
            .with_account(&self.account_name)
            .with_access_key(&self.account_key)
            .with_container_name(container);

        if self.blob_endpoint.is_some() || self.endpoint_suffix != DEFAULT_ENDPOINT_SUFFIX {
            builder = builder
                .with_endpoint(self.blob_service_url())
                .with_allow_http(self.blob_service_url().starts_with("http://"));
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_connection_string() {
        let parsed = AzureConnectionString::parse(concat!(
            "DefaultEndpointsProtocol=https;AccountName=schools;",
            "AccountKey=c2VjcmV0a2V5==;EndpointSuffix=core.windows.net",
        ))
        .unwrap();

        assert_eq!(parsed.account_name, "schools");
        assert_eq!(parsed.account_key, "c2VjcmV0a2V5==");
        assert_eq!(
            parsed.container_url("inspections"),
            "https://schools.blob.core.windows.net/inspections"
        );
    }

    #[test]
    fn defaults_protocol_and_suffix() {
        let parsed =
            AzureConnectionString::parse("AccountName=schools;AccountKey=a2V5;").unwrap();

        assert_eq!(parsed.protocol, "https");
        assert_eq!(parsed.endpoint_suffix, "core.windows.net");
        assert!(parsed.blob_endpoint.is_none());
    }

    #[test]
    fn prefers_explicit_blob_endpoint() {
        let parsed = AzureConnectionString::parse(concat!(
            "AccountName=devstoreaccount1;AccountKey=a2V5;",
            "BlobEndpoint=http://127.0.0.1:10000/devstoreaccount1/",
        ))
        .unwrap();

        assert_eq!(
            parsed.container_url("inspections"),
            "http://127.0.0.1:10000/devstoreaccount1/inspections"
        );
    }

    #[test]
    fn rejects_missing_account_key() {
        let result =
            AzureConnectionString::parse("AccountName=schools;EndpointSuffix=core.windows.net");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidConnectionString(reason)) if reason.contains("AccountKey")
        ));
    }

    #[test]
    fn malformed_pair_error_does_not_echo_secret() {
        let result = AzureConnectionString::parse(
            "AccountName=schools;AccountKeyc2VjcmV0a2V5;EndpointSuffix=x",
        );

        match result {
            Err(ConfigError::InvalidConnectionString(reason)) => {
                assert_eq!(reason, "component 2 is not a Key=Value pair");
                assert!(!reason.contains("c2Vj"));
            }
            other => panic!("expected InvalidConnectionString, got {:?}", other),
        }
    }

    #[test]
    fn rejects_pair_without_separator() {
        let result = AzureConnectionString::parse("AccountName=schools;garbage");

        assert!(matches!(result, Err(ConfigError::InvalidConnectionString(_))));
    }
}
