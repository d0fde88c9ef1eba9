/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::parsers::{from_empty_str_to_none, parse_flag, parse_number, parse_unix_time};
use crate::rest::{ApiRequest, Client, MediaFilter, SizeSuffix, SortOrder};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use strum::IntoEnumIterator;

/// Every value `extras` accepts
pub const ALL_EXTRAS: &[&str] = &[
    "description",
    "license",
    "date_upload",
    "date_taken",
    "owner_name",
    "icon_server",
    "original_format",
    "last_update",
    "geo",
    "tags",
    "machine_tags",
    "o_dims",
    "views",
    "media",
    "path_alias",
    "url_sq",
    "url_t",
    "url_s",
    "url_q",
    "url_m",
    "url_n",
    "url_z",
    "url_c",
    "url_l",
    "url_o",
];

/// Query for `flickr.photos.search`.
///
/// Every field is optional. Empty strings, empty lists and zero numbers are
/// left out of the request so the API default applies. That also means a
/// latitude, longitude or page of exactly zero can't be asked for.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PhotoSearchRequest {
    pub text: String,
    pub sort: String,
    pub license: Vec<String>,
    pub content_types: Vec<String>,
    pub media: String,
    pub lat: f64,
    pub lon: f64,
    pub extras: Vec<String>,
    pub radius: f64,
    /// First page is 1
    pub page: u32,
    /// Max 500
    pub per_page: u32,
}

impl PhotoSearchRequest {
    pub fn sorted_by(mut self, sort: SortOrder) -> Self {
        let sort: &'static str = sort.into();
        self.sort = sort.to_string();
        self
    }

    pub fn with_media(mut self, media: MediaFilter) -> Self {
        let media: &'static str = media.into();
        self.media = media.to_string();
        self
    }
}

/// One page of search results
#[derive(Deserialize, Debug, Default, Clone)]
pub struct Photos {
    #[serde(default, rename = "@page")]
    pub page: String,

    #[serde(default, rename = "@pages")]
    pub pages: String,

    #[serde(default, rename = "@perpage")]
    pub per_page: String,

    #[serde(default, rename = "@total")]
    pub total: String,

    #[serde(default, rename = "photo")]
    pub photos: Vec<PhotoSearchItem>,
}

impl Photos {
    pub fn page(&self) -> Result<Option<u32>, FlickrError> {
        parse_number("page", &self.page)
    }

    pub fn pages(&self) -> Result<Option<u32>, FlickrError> {
        parse_number("pages", &self.pages)
    }

    pub fn per_page(&self) -> Result<Option<u32>, FlickrError> {
        parse_number("perpage", &self.per_page)
    }

    pub fn total(&self) -> Result<Option<u64>, FlickrError> {
        parse_number("total", &self.total)
    }
}

/// A search hit. Which fields are filled in depends on the `extras` asked
/// for; everything stays as the string the API sent.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct PhotoSearchItem {
    #[serde(default, rename = "@id")]
    pub id: String,
    #[serde(default, rename = "@owner")]
    pub owner: String,
    #[serde(default, rename = "@secret")]
    pub secret: String,
    #[serde(default, rename = "@server")]
    pub server: String,
    #[serde(default, rename = "@farm")]
    pub farm: String,
    #[serde(default, rename = "@title")]
    pub title: String,
    #[serde(default, rename = "@ispublic")]
    pub is_public: String,
    #[serde(default, rename = "@isfriend")]
    pub is_friend: String,
    #[serde(default, rename = "@isfamily")]
    pub is_family: String,
    #[serde(default, rename = "@license")]
    pub license: String,
    #[serde(default, rename = "@o_width")]
    pub o_width: String,
    #[serde(default, rename = "@o_height")]
    pub o_height: String,
    #[serde(default, rename = "@dateupload")]
    pub date_upload: String,
    #[serde(default, rename = "@lastupdate")]
    pub last_update: String,
    #[serde(default, rename = "@datetaken")]
    pub date_taken: String,
    #[serde(default, rename = "@datetakengranularity")]
    pub date_taken_granularity: String,
    #[serde(default, rename = "@datetakenunknown")]
    pub date_taken_unknown: String,
    #[serde(default, rename = "@ownername")]
    pub owner_name: String,
    #[serde(default, rename = "@iconserver")]
    pub icon_server: String,
    #[serde(default, rename = "@iconfarm")]
    pub icon_farm: String,
    #[serde(default, rename = "@views")]
    pub views: String,
    #[serde(default, rename = "@tags")]
    pub tags: String,
    #[serde(default, rename = "@machine_tags")]
    pub machine_tags: String,
    #[serde(default, rename = "@originalsecret")]
    pub original_secret: String,
    #[serde(default, rename = "@originalformat")]
    pub original_format: String,
    #[serde(default, rename = "@latitude")]
    pub latitude: String,
    #[serde(default, rename = "@longitude")]
    pub longitude: String,
    #[serde(default, rename = "@accuracy")]
    pub accuracy: String,
    #[serde(default, rename = "@context")]
    pub context: String,
    #[serde(default, rename = "@media")]
    pub media: String,
    #[serde(default, rename = "@media_status")]
    pub media_status: String,
    #[serde(default, rename = "@pathalias")]
    pub path_alias: String,
    #[serde(default)]
    pub description: String,

    // Size variants
    #[serde(default, rename = "@url_sq", deserialize_with = "from_empty_str_to_none")]
    pub url_sq: Option<String>,
    #[serde(default, rename = "@height_sq", deserialize_with = "from_empty_str_to_none")]
    pub height_sq: Option<String>,
    #[serde(default, rename = "@width_sq", deserialize_with = "from_empty_str_to_none")]
    pub width_sq: Option<String>,
    #[serde(default, rename = "@url_t", deserialize_with = "from_empty_str_to_none")]
    pub url_t: Option<String>,
    #[serde(default, rename = "@height_t", deserialize_with = "from_empty_str_to_none")]
    pub height_t: Option<String>,
    #[serde(default, rename = "@width_t", deserialize_with = "from_empty_str_to_none")]
    pub width_t: Option<String>,
    #[serde(default, rename = "@url_s", deserialize_with = "from_empty_str_to_none")]
    pub url_s: Option<String>,
    #[serde(default, rename = "@height_s", deserialize_with = "from_empty_str_to_none")]
    pub height_s: Option<String>,
    #[serde(default, rename = "@width_s", deserialize_with = "from_empty_str_to_none")]
    pub width_s: Option<String>,
    #[serde(default, rename = "@url_q", deserialize_with = "from_empty_str_to_none")]
    pub url_q: Option<String>,
    #[serde(default, rename = "@height_q", deserialize_with = "from_empty_str_to_none")]
    pub height_q: Option<String>,
    #[serde(default, rename = "@width_q", deserialize_with = "from_empty_str_to_none")]
    pub width_q: Option<String>,
    #[serde(default, rename = "@url_m", deserialize_with = "from_empty_str_to_none")]
    pub url_m: Option<String>,
    #[serde(default, rename = "@height_m", deserialize_with = "from_empty_str_to_none")]
    pub height_m: Option<String>,
    #[serde(default, rename = "@width_m", deserialize_with = "from_empty_str_to_none")]
    pub width_m: Option<String>,
    #[serde(default, rename = "@url_n", deserialize_with = "from_empty_str_to_none")]
    pub url_n: Option<String>,
    #[serde(default, rename = "@height_n", deserialize_with = "from_empty_str_to_none")]
    pub height_n: Option<String>,
    #[serde(default, rename = "@width_n", deserialize_with = "from_empty_str_to_none")]
    pub width_n: Option<String>,
    #[serde(default, rename = "@url_z", deserialize_with = "from_empty_str_to_none")]
    pub url_z: Option<String>,
    #[serde(default, rename = "@height_z", deserialize_with = "from_empty_str_to_none")]
    pub height_z: Option<String>,
    #[serde(default, rename = "@width_z", deserialize_with = "from_empty_str_to_none")]
    pub width_z: Option<String>,
    #[serde(default, rename = "@url_c", deserialize_with = "from_empty_str_to_none")]
    pub url_c: Option<String>,
    #[serde(default, rename = "@height_c", deserialize_with = "from_empty_str_to_none")]
    pub height_c: Option<String>,
    #[serde(default, rename = "@width_c", deserialize_with = "from_empty_str_to_none")]
    pub width_c: Option<String>,
    #[serde(default, rename = "@url_l", deserialize_with = "from_empty_str_to_none")]
    pub url_l: Option<String>,
    #[serde(default, rename = "@height_l", deserialize_with = "from_empty_str_to_none")]
    pub height_l: Option<String>,
    #[serde(default, rename = "@width_l", deserialize_with = "from_empty_str_to_none")]
    pub width_l: Option<String>,
    #[serde(default, rename = "@url_o", deserialize_with = "from_empty_str_to_none")]
    pub url_o: Option<String>,
    #[serde(default, rename = "@height_o", deserialize_with = "from_empty_str_to_none")]
    pub height_o: Option<String>,
    #[serde(default, rename = "@width_o", deserialize_with = "from_empty_str_to_none")]
    pub width_o: Option<String>,
}

/// View of one `url_*`/`width_*`/`height_*` group of a [`PhotoSearchItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeVariant<'a> {
    pub suffix: SizeSuffix,
    pub url: &'a str,
    pub width: Option<&'a str>,
    pub height: Option<&'a str>,
}

impl PhotoSearchItem {
    pub fn is_public(&self) -> Result<bool, FlickrError> {
        parse_flag("ispublic", &self.is_public)
    }

    pub fn is_friend(&self) -> Result<bool, FlickrError> {
        parse_flag("isfriend", &self.is_friend)
    }

    pub fn is_family(&self) -> Result<bool, FlickrError> {
        parse_flag("isfamily", &self.is_family)
    }

    pub fn views(&self) -> Result<Option<u64>, FlickrError> {
        parse_number("views", &self.views)
    }

    pub fn date_upload(&self) -> Result<Option<DateTime<Utc>>, FlickrError> {
        parse_unix_time("dateupload", &self.date_upload)
    }

    pub fn last_update(&self) -> Result<Option<DateTime<Utc>>, FlickrError> {
        parse_unix_time("lastupdate", &self.last_update)
    }

    /// Returns the size variant if the API sent a url for it
    pub fn size_variant(&self, suffix: SizeSuffix) -> Option<SizeVariant<'_>> {
        use SizeSuffix as S;
        let (url, width, height) = match suffix {
            S::Sq => (&self.url_sq, &self.width_sq, &self.height_sq),
            S::T => (&self.url_t, &self.width_t, &self.height_t),
            S::S => (&self.url_s, &self.width_s, &self.height_s),
            S::Q => (&self.url_q, &self.width_q, &self.height_q),
            S::M => (&self.url_m, &self.width_m, &self.height_m),
            S::N => (&self.url_n, &self.width_n, &self.height_n),
            S::Z => (&self.url_z, &self.width_z, &self.height_z),
            S::C => (&self.url_c, &self.width_c, &self.height_c),
            S::L => (&self.url_l, &self.width_l, &self.height_l),
            S::O => (&self.url_o, &self.width_o, &self.height_o),
        };
        url.as_deref().map(|url| SizeVariant {
            suffix,
            url,
            width: width.as_deref(),
            height: height.as_deref(),
        })
    }

    /// All size variants present, smallest suffix order first
    pub fn size_variants(&self) -> Vec<SizeVariant<'_>> {
        SizeSuffix::iter()
            .filter_map(|suffix| self.size_variant(suffix))
            .collect()
    }
}

pub fn search_request(req: &PhotoSearchRequest) -> ApiRequest {
    ApiRequest::builder("flickr.photos.search")
        .opt_str("text", &req.text)
        .opt_str("sort", &req.sort)
        .opt_list("license", req.license.as_slice())
        .opt_list("content_types", req.content_types.as_slice())
        .opt_str("media", &req.media)
        .opt_float("lat", req.lat)
        .opt_float("lon", req.lon)
        .opt_list("extras", req.extras.as_slice())
        .opt_float("radius", req.radius)
        .opt_int("page", req.page)
        .opt_int("per_page", req.per_page)
        .build()
}

/// Returns one page of photos matching the query
pub async fn search(client: &Client, req: &PhotoSearchRequest) -> Result<Photos, FlickrError> {
    client
        .post::<SearchResponse>(search_request(req))
        .await
        .map(|v| v.photos)
}

// Expected response for a search request
#[derive(Deserialize, Debug)]
struct SearchResponse {
    photos: Photos,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rest::api::decode_response;

    const SEARCH_BODY: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
  <photos page="2" pages="89" perpage="2" total="177">
    <photo id="2636" owner="47058503995@N01" secret="a123456" server="2" farm="1" title="test_04" ispublic="1" isfriend="0" isfamily="0" views="12" dateupload="1100897479" url_sq="https://live.staticflickr.com/2/2636_a123456_s.jpg" height_sq="75" width_sq="75" url_o="https://live.staticflickr.com/2/2636_b_o.jpg" height_o="1200" width_o="1600">
      <description>first</description>
    </photo>
    <photo id="2635" owner="47058503995@N01" secret="b123456" server="2" farm="1" title="test_03" ispublic="0" isfriend="1" isfamily="1" url_m="" />
  </photos>
</rsp>"#;

    #[test]
    fn decode_search() {
        let resp: SearchResponse = decode_response("flickr.photos.search", SEARCH_BODY).unwrap();
        let photos = resp.photos;
        assert_eq!(photos.page().unwrap(), Some(2));
        assert_eq!(photos.pages().unwrap(), Some(89));
        assert_eq!(photos.per_page().unwrap(), Some(2));
        assert_eq!(photos.total().unwrap(), Some(177));
        assert_eq!(photos.photos.len(), 2);

        let first = &photos.photos[0];
        assert_eq!(first.id, "2636");
        assert_eq!(first.title, "test_04");
        assert_eq!(first.description, "first");
        assert!(first.is_public().unwrap());
        assert!(!first.is_friend().unwrap());
        assert_eq!(first.views().unwrap(), Some(12));
        assert_eq!(first.date_upload().unwrap().unwrap().timestamp(), 1100897479);
        assert_eq!(first.url_s, None);

        let variants = first.size_variants();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].suffix, SizeSuffix::Sq);
        assert_eq!(variants[0].width, Some("75"));
        assert_eq!(variants[1].suffix, SizeSuffix::O);
        assert_eq!(variants[1].url, "https://live.staticflickr.com/2/2636_b_o.jpg");
        assert_eq!(variants[1].height, Some("1200"));

        let second = &photos.photos[1];
        assert!(second.is_family().unwrap());
        assert_eq!(second.views().unwrap(), None);
        assert_eq!(second.url_m, None);
        assert!(second.size_variants().is_empty());
    }

    #[test]
    fn decode_empty_search() {
        let body = r#"<rsp stat="ok"><photos page="1" pages="0" perpage="100" total="0" /></rsp>"#;
        let resp: SearchResponse = decode_response("flickr.photos.search", body).unwrap();
        assert!(resp.photos.photos.is_empty());
        assert_eq!(resp.photos.total().unwrap(), Some(0));
    }

    #[test]
    fn default_request_only_sends_method() {
        let req = search_request(&PhotoSearchRequest::default());
        let args: Vec<_> = req.args().collect();
        assert_eq!(args, vec![("method", "flickr.photos.search")]);
    }

    #[test]
    fn full_request() {
        let query = PhotoSearchRequest {
            text: "golden gate".to_string(),
            license: vec!["4".to_string(), "5".to_string()],
            content_types: vec!["1".to_string()],
            lat: 37.8199,
            lon: -122.4783,
            radius: 5.0,
            extras: vec!["url_s".to_string(), "views".to_string()],
            page: 2,
            per_page: 50,
            ..Default::default()
        }
        .sorted_by(SortOrder::InterestingnessDesc)
        .with_media(MediaFilter::Photos);

        let req = search_request(&query);
        let args: Vec<_> = req.args().collect();
        assert_eq!(
            args,
            vec![
                ("method", "flickr.photos.search"),
                ("text", "golden gate"),
                ("sort", "interestingness-desc"),
                ("license", "4,5"),
                ("content_types", "1"),
                ("media", "photos"),
                ("lat", "37.8199"),
                ("lon", "-122.4783"),
                ("extras", "url_s,views"),
                ("radius", "5"),
                ("page", "2"),
                ("per_page", "50"),
            ]
        );
    }

    #[test]
    fn extras_cover_every_size() {
        for suffix in SizeSuffix::iter() {
            let suffix: &str = suffix.into();
            assert!(ALL_EXTRAS.contains(&format!("url_{suffix}").as_str()));
        }
    }
}
