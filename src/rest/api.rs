/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::oauth;
use crate::rest::request::ApiRequest;
use log::{debug, warn};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

// Root Flickr REST API
pub const API_ENDPOINT: &str = "https://api.flickr.com/services/rest/";

/// Directly communicates with the API.
#[derive(Clone)]
pub struct ApiClient {
    creds: Creds,
    endpoint: String,
    https_client: reqwest::Client,
}

impl ApiClient {
    /// Creates a new client for the public REST endpoint
    pub fn new(creds: Creds) -> Self {
        Self {
            creds,
            endpoint: API_ENDPOINT.to_string(),
            https_client: reqwest::Client::new(),
        }
    }

    /// Creates a new client that talks to a different endpoint
    pub fn with_endpoint(creds: Creds, endpoint: &str) -> Result<Self, FlickrError> {
        Ok(Self {
            creds,
            endpoint: Url::parse(endpoint)?.to_string(),
            https_client: reqwest::Client::new(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Signs and posts the request, then decodes the response body into `T`
    pub async fn post<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, FlickrError> {
        let method = request.method().to_string();
        let req_url = Url::parse(&self.endpoint)?;
        let mut params = request.into_params();
        oauth::sign_params(&self.creds, "POST", &req_url, &mut params)?;

        debug!("Calling {} at {}", method, req_url);
        let body = self
            .https_client
            .post(req_url)
            .form(&params)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        decode_response(&method, &body)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("creds", &self.creds)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Checks the `<rsp>` envelope and decodes the payload from the same body
pub(crate) fn decode_response<T: DeserializeOwned>(
    method: &str,
    body: &str,
) -> Result<T, FlickrError> {
    let envelope: BasicResponse = quick_xml::de::from_str(body).map_err(|err| {
        warn!("Api Malformed Err for {}: {:?}", method, err);
        FlickrError::ApiResponseMalformed(err)
    })?;

    if !envelope.is_ok() {
        let err = envelope.error.unwrap_or_default();
        warn!("{} failed with code {}: {}", method, err.code, err.message);
        return Err(FlickrError::ApiResponse(err.code, err.message));
    }

    quick_xml::de::from_str(body).map_err(|err| {
        warn!("Api Malformed Err for {}: {:?}", method, err);
        FlickrError::ApiResponseMalformed(err)
    })
}

/// OAuth1 credentials.
///
/// The API key alone allows public reads. Mutating calls need the full set:
/// API secret plus an access token/secret with the right permission level
/// (`write`, or `delete` for deleting photos).
#[derive(Default, Clone)]
pub struct Creds {
    pub(crate) consumer_api_key: String,
    pub(crate) consumer_api_secret: Option<String>,
    pub(crate) access_token: Option<String>,
    pub(crate) token_secret: Option<String>,
}

impl Creds {
    pub fn from_tokens(
        api_key: &str,
        api_secret: Option<&str>,
        access_token: Option<&str>,
        token_secret: Option<&str>,
    ) -> Self {
        Self {
            consumer_api_key: api_key.into(),
            consumer_api_secret: api_secret.map(Into::into),
            access_token: access_token.map(Into::into),
            token_secret: token_secret.map(Into::into),
        }
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("consumer_api_key", &"xxx")
            .field("consumer_api_secret", &"xxx")
            .field("access_token", &"xxx")
            .field("token_secret", &"xxx")
            .finish()
    }
}

/// The `<rsp>` envelope every response is wrapped in.
///
/// Operations that only report success or failure return this as is.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct BasicResponse {
    #[serde(rename = "@stat")]
    pub status: String,

    #[serde(default, rename = "err")]
    pub error: Option<ResponseError>,
}

impl BasicResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Failure details carried in `<err code="" msg=""/>`
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ResponseError {
    #[serde(rename = "@code")]
    pub code: u32,

    #[serde(rename = "@msg")]
    pub message: String,
}
