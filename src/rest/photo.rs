/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::parsers::{from_flag, parse_flag, parse_number, parse_unix_time};
use crate::rest::{ApiRequest, BasicResponse, Client, PrivacyType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Holds information returned from `flickr.photos.getInfo`.
///
/// See [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.getInfo.html) for more
/// details on the individual fields.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PhotoInfo {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default, rename = "@secret")]
    pub secret: String,

    #[serde(default, rename = "@server")]
    pub server: String,

    #[serde(default, rename = "@farm")]
    pub farm: String,

    #[serde(default, rename = "@dateuploaded")]
    pub date_uploaded: String,

    #[serde(default, rename = "@isfavorite", deserialize_with = "from_flag")]
    pub is_favorite: bool,

    #[serde(default, rename = "@license")]
    pub license: String,

    /// One less than the level used on upload: 0 = safe, 1 = moderate,
    /// 2 = restricted. See [`PhotoInfo::upload_safety_level`].
    #[serde(default, rename = "@safety_level")]
    pub safety_level: i32,

    #[serde(default, rename = "@rotation")]
    pub rotation: i32,

    #[serde(default, rename = "@originalsecret")]
    pub original_secret: String,

    #[serde(default, rename = "@originalformat")]
    pub original_format: String,

    #[serde(default, rename = "@views")]
    pub views: u64,

    #[serde(default, rename = "@media")]
    pub media: String,

    #[serde(default)]
    pub owner: Owner,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub dates: Dates,

    #[serde(default)]
    pub permissions: Permissions,

    #[serde(default)]
    pub editability: Editability,

    #[serde(default, rename = "publiceditability")]
    pub public_editability: Editability,

    #[serde(default)]
    pub usage: Usage,

    #[serde(default)]
    pub comments: u32,

    #[serde(default, deserialize_with = "from_tag_list")]
    pub tags: Vec<Tag>,

    #[serde(default, deserialize_with = "from_url_list")]
    pub urls: Vec<PhotoUrl>,
}

impl PhotoInfo {
    /// The safety level on the scale used when uploading (1 = safe,
    /// 2 = moderate, 3 = restricted)
    pub fn upload_safety_level(&self) -> i32 {
        self.safety_level + 1
    }

    pub fn date_uploaded(&self) -> Result<Option<DateTime<Utc>>, FlickrError> {
        parse_unix_time("dateuploaded", &self.date_uploaded)
    }
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Owner {
    #[serde(default, rename = "@nsid")]
    pub nsid: String,

    #[serde(default, rename = "@username")]
    pub username: String,

    #[serde(default, rename = "@realname")]
    pub realname: String,

    #[serde(default, rename = "@location")]
    pub location: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Visibility {
    #[serde(default, rename = "@ispublic", deserialize_with = "from_flag")]
    pub is_public: bool,

    #[serde(default, rename = "@isfriend", deserialize_with = "from_flag")]
    pub is_friend: bool,

    #[serde(default, rename = "@isfamily", deserialize_with = "from_flag")]
    pub is_family: bool,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Dates {
    #[serde(default, rename = "@posted")]
    pub posted: String,

    #[serde(default, rename = "@taken")]
    pub taken: String,

    #[serde(default, rename = "@takengranularity")]
    pub taken_granularity: String,

    #[serde(default, rename = "@takenunknown")]
    pub taken_unknown: String,

    #[serde(default, rename = "@lastupdate")]
    pub last_update: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Permissions {
    #[serde(default, rename = "@permcomment")]
    pub perm_comment: String,

    #[serde(default, rename = "@permaddmeta")]
    pub perm_add_meta: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Editability {
    #[serde(default, rename = "@cancomment")]
    pub can_comment: String,

    #[serde(default, rename = "@canaddmeta")]
    pub can_add_meta: String,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct Usage {
    #[serde(default, rename = "@candownload")]
    pub can_download: String,

    #[serde(default, rename = "@canblog")]
    pub can_blog: String,

    #[serde(default, rename = "@canprint")]
    pub can_print: String,

    #[serde(default, rename = "@canshare")]
    pub can_share: String,
}

impl Usage {
    pub fn can_download(&self) -> Result<bool, FlickrError> {
        parse_flag("candownload", &self.can_download)
    }

    pub fn can_blog(&self) -> Result<bool, FlickrError> {
        parse_flag("canblog", &self.can_blog)
    }

    pub fn can_print(&self) -> Result<bool, FlickrError> {
        parse_flag("canprint", &self.can_print)
    }

    pub fn can_share(&self) -> Result<bool, FlickrError> {
        parse_flag("canshare", &self.can_share)
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Tag {
    #[serde(default, rename = "@id")]
    pub id: String,

    #[serde(default, rename = "@author")]
    pub author: String,

    /// Tag as the user typed it
    #[serde(default, rename = "@raw")]
    pub raw: String,

    /// Normalized tag
    #[serde(default, rename = "$text")]
    pub value: String,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PhotoUrl {
    #[serde(default, rename = "@type")]
    pub url_type: String,

    #[serde(default, rename = "$text")]
    pub url: String,
}

/// One available size of a photo as returned by `flickr.photos.getSizes`
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
pub struct PhotoDownloadInfo {
    #[serde(default, rename = "@label")]
    pub label: String,

    #[serde(default, rename = "@width")]
    pub width: String,

    #[serde(default, rename = "@height")]
    pub height: String,

    /// Direct link to the image file
    #[serde(default, rename = "@source")]
    pub source: String,

    /// Flickr page for this size
    #[serde(default, rename = "@url")]
    pub url: String,

    #[serde(default, rename = "@media")]
    pub media: String,
}

impl PhotoDownloadInfo {
    pub fn width(&self) -> Result<Option<u32>, FlickrError> {
        parse_number("width", &self.width)
    }

    pub fn height(&self) -> Result<Option<u32>, FlickrError> {
        parse_number("height", &self.height)
    }
}

pub fn get_sizes_request(photo_id: &str) -> ApiRequest {
    ApiRequest::builder("flickr.photos.getSizes")
        .arg("photo_id", photo_id)
        .build()
}

/// Returns every size the photo can be downloaded at
pub async fn get_sizes(
    client: &Client,
    photo_id: &str,
) -> Result<Vec<PhotoDownloadInfo>, FlickrError> {
    client
        .post::<SizesResponse>(get_sizes_request(photo_id))
        .await
        .map(|v| v.sizes.size)
}

pub fn set_perms_request(
    photo_id: &str,
    is_public: PrivacyType,
    is_friend: PrivacyType,
    is_family: PrivacyType,
) -> ApiRequest {
    ApiRequest::builder("flickr.photos.setPerms")
        .arg("photo_id", photo_id)
        .arg("is_public", u8::from(is_public).to_string())
        .arg("is_friend", u8::from(is_friend).to_string())
        .arg("is_family", u8::from(is_family).to_string())
        .build()
}

/// Sets who can see the photo. Requires `write` permission.
pub async fn set_perms(
    client: &Client,
    photo_id: &str,
    is_public: PrivacyType,
    is_friend: PrivacyType,
    is_family: PrivacyType,
) -> Result<BasicResponse, FlickrError> {
    client
        .post(set_perms_request(photo_id, is_public, is_friend, is_family))
        .await
}

pub fn delete_request(photo_id: &str) -> ApiRequest {
    ApiRequest::builder("flickr.photos.delete")
        .arg("photo_id", photo_id)
        .build()
}

/// Deletes the photo. Requires `delete` permission.
pub async fn delete(client: &Client, photo_id: &str) -> Result<BasicResponse, FlickrError> {
    client.post(delete_request(photo_id)).await
}

pub fn get_info_request(photo_id: &str, secret: &str) -> ApiRequest {
    ApiRequest::builder("flickr.photos.getInfo")
        .arg("photo_id", photo_id)
        .opt_str("secret", secret)
        .build()
}

/// Returns information for the photo.
///
/// Passing the photo `secret` skips the permission check, an empty secret
/// leaves it out.
pub async fn get_info(client: &Client, photo_id: &str, secret: &str) -> Result<PhotoInfo, FlickrError> {
    client
        .post::<PhotoInfoResponse>(get_info_request(photo_id, secret))
        .await
        .map(|v| v.photo)
}

pub fn set_dates_request(photo_id: &str, date_posted: &str, date_taken: &str) -> ApiRequest {
    ApiRequest::builder("flickr.photos.setDates")
        .arg("photo_id", photo_id)
        .opt_str("date_posted", date_posted)
        .opt_str("date_taken", date_taken)
        .build()
}

/// Sets the posted (unix timestamp) and/or taken (mysql datetime) dates.
/// Either may be "" to leave it unchanged. Requires `write` permission.
pub async fn set_dates(
    client: &Client,
    photo_id: &str,
    date_posted: &str,
    date_taken: &str,
) -> Result<BasicResponse, FlickrError> {
    client
        .post(set_dates_request(photo_id, date_posted, date_taken))
        .await
}

pub fn add_tags_request<S: AsRef<str>>(photo_id: &str, tags: &[S]) -> ApiRequest {
    let tags = tags.iter().map(|t| t.as_ref()).collect::<Vec<_>>().join(",");
    ApiRequest::builder("flickr.photos.addTags")
        .arg("photo_id", photo_id)
        .arg("tags", tags)
        .build()
}

/// Adds tags to an existing photo. Requires `write` permission.
pub async fn add_tags<S: AsRef<str>>(
    client: &Client,
    photo_id: &str,
    tags: &[S],
) -> Result<BasicResponse, FlickrError> {
    client.post(add_tags_request(photo_id, tags)).await
}

#[derive(Deserialize, Debug, Default)]
struct TagList {
    #[serde(default)]
    tag: Vec<Tag>,
}

fn from_tag_list<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(TagList::deserialize(deserializer)?.tag)
}

#[derive(Deserialize, Debug, Default)]
struct UrlList {
    #[serde(default)]
    url: Vec<PhotoUrl>,
}

fn from_url_list<'de, D>(deserializer: D) -> Result<Vec<PhotoUrl>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(UrlList::deserialize(deserializer)?.url)
}

// Expected response for a request to get photo info
#[derive(Deserialize, Debug)]
struct PhotoInfoResponse {
    photo: PhotoInfo,
}

// Expected response for a request to get photo sizes
#[derive(Deserialize, Debug)]
struct SizesResponse {
    sizes: Sizes,
}

#[derive(Deserialize, Debug)]
struct Sizes {
    #[serde(default)]
    size: Vec<PhotoDownloadInfo>,
}
