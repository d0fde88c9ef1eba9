/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::{ApiClient, ApiRequest, Creds};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Handle passed to every photo operation.
///
/// Cloning is cheap and clones share the underlying HTTP connection pool.
/// Nothing is kept between calls, so one client can be used from many tasks.
#[derive(Debug, Clone)]
pub struct Client {
    api_client: Arc<ApiClient>,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self {
            api_client: Arc::new(ApiClient::new(creds)),
        }
    }

    /// Client for an endpoint other than the public Flickr one
    pub fn with_endpoint(creds: Creds, endpoint: &str) -> Result<Self, FlickrError> {
        Ok(Self {
            api_client: Arc::new(ApiClient::with_endpoint(creds, endpoint)?),
        })
    }

    /// Sends a request for a method this crate has no wrapper for
    pub async fn post<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, FlickrError> {
        self.api_client.post(request).await
    }
}
