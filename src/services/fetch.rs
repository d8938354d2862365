// SPDX-License-Identifier: MIT

//! Byte-fetching capability.
//!
//! The resolver only needs "URL in, bytes out, or a failure with status".
//! Keeping that behind a trait lets the acquisition chain run against
//! counting stubs in tests; the real implementation wraps
//! `reqwest::Client`.

use std::future::Future;

use crate::error::MapError;

/// URL → bytes capability consumed by the content resolver.
pub trait ByteSource {
    /// Fetch the resource at `url`, failing with `HttpFailure` on a
    /// non-success status and `Fetch` on transport errors.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, MapError>> + Send;
}

/// HTTP implementation over `reqwest`.
#[derive(Clone, Default)]
pub struct HttpByteSource {
    http: reqwest::Client,
}

impl HttpByteSource {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl ByteSource for HttpByteSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, MapError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| MapError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(MapError::HttpFailure(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| MapError::Fetch(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
