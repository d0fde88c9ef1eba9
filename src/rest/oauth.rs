/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::api::Creds;
use crate::rest::errors::FlickrError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::Url;
use urlencoding::encode;

type HmacSha1 = Hmac<Sha1>;

/// Adds the OAuth1 (HMAC-SHA1) parameters and signature to `params`.
///
/// Credentials without a consumer secret can only make public reads, those
/// requests just carry the `api_key`.
pub(crate) fn sign_params(
    creds: &Creds,
    http_method: &str,
    url: &Url,
    params: &mut Vec<(String, String)>,
) -> Result<(), FlickrError> {
    let Some(consumer_secret) = creds.consumer_api_secret.as_deref() else {
        params.push(("api_key".to_string(), creds.consumer_api_key.clone()));
        return Ok(());
    };

    params.push(("oauth_consumer_key".to_string(), creds.consumer_api_key.clone()));
    params.push(("oauth_nonce".to_string(), nonce()));
    params.push(("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()));
    params.push(("oauth_timestamp".to_string(), Utc::now().timestamp().to_string()));
    params.push(("oauth_version".to_string(), "1.0".to_string()));
    if let Some(token) = creds.access_token.as_deref() {
        params.push(("oauth_token".to_string(), token.to_string()));
    }

    let base = signature_base_string(http_method, url, params);
    let signature = hmac_sha1_signature(
        &base,
        consumer_secret,
        creds.token_secret.as_deref().unwrap_or(""),
    )?;
    params.push(("oauth_signature".to_string(), signature));
    Ok(())
}

// RFC 5849 section 3.4.1
pub(crate) fn signature_base_string(
    http_method: &str,
    url: &Url,
    params: &[(String, String)],
) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k).into_owned(), encode(v).into_owned()))
        .collect();
    encoded.sort();
    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    // Query and fragment are never part of the base url
    let base_url = format!("{}{}", url.origin().ascii_serialization(), url.path());
    format!(
        "{}&{}&{}",
        http_method.to_ascii_uppercase(),
        encode(&base_url),
        encode(&normalized)
    )
}

pub(crate) fn hmac_sha1_signature(
    base: &str,
    consumer_secret: &str,
    token_secret: &str,
) -> Result<String, FlickrError> {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| FlickrError::Auth(e.to_string()))?;
    mac.update(base.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

fn nonce() -> String {
    format!("{:016x}{:016x}", rand::random::<u64>(), rand::random::<u64>())
}
