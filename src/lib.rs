/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr Photos
//!
//! Client for the `flickr.photos` part of the Flickr REST API.
//!
//! For further details on the API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Photo information and available sizes
//! - Photo search
//! - Setting permissions and dates, adding tags, deleting
//! - [`rest::Client::post`] for sending any other method through the same
//!   signing and response handling
//!
//! *The Flickr API uses OAuth1. This library handles the request signing.
//! Getting the Access Token/Secret is left up to the consumer of this library*
//!
//! Each call is a single request. There is no caching, retrying or paging;
//! loop over `page` yourself if you need more than one page of results.
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using the API**
//!
//! ```rust,no_run
//! use flickr_photos::rest::{
//!     add_tags, search, Client, Creds, FlickrError, PhotoSearchRequest, SortOrder,
//! };
//!
//! async fn tag_sunsets(
//!     api_key: &str,
//!     api_secret: &str,
//!     access_token: &str,
//!     access_token_secret: &str,
//! ) -> Result<(), FlickrError> {
//!     let client = Client::new(Creds::from_tokens(
//!         api_key,
//!         Some(api_secret),
//!         Some(access_token),
//!         Some(access_token_secret),
//!     ));
//!
//!     let query = PhotoSearchRequest {
//!         text: "sunset".to_string(),
//!         per_page: 10,
//!         ..Default::default()
//!     }
//!     .sorted_by(SortOrder::InterestingnessDesc);
//!
//!     let photos = search(&client, &query).await?;
//!     for photo in photos.photos {
//!         add_tags(&client, &photo.id, &["sunset", "sky"]).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod rest;
