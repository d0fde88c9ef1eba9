/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

#[cfg(test)]
mod test {
    use flickr_photos::rest::{
        add_tags_request, delete_request, get_info_request, get_sizes_request, search_request,
        set_dates_request, set_perms_request, ApiRequest, PhotoSearchRequest, PrivacyType,
    };

    #[test]
    fn method_names() {
        let expected: Vec<(ApiRequest, &str)> = vec![
            (get_sizes_request("1"), "flickr.photos.getSizes"),
            (
                set_perms_request("1", PrivacyType::Yes, PrivacyType::Yes, PrivacyType::Yes),
                "flickr.photos.setPerms",
            ),
            (delete_request("1"), "flickr.photos.delete"),
            (get_info_request("1", ""), "flickr.photos.getInfo"),
            (set_dates_request("1", "", ""), "flickr.photos.setDates"),
            (add_tags_request("1", &["x"]), "flickr.photos.addTags"),
            (
                search_request(&PhotoSearchRequest::default()),
                "flickr.photos.search",
            ),
        ];
        for (req, method) in expected {
            assert_eq!(req.method(), method);
            assert_eq!(req.arg("method"), Some(method));
            assert_eq!(req.args().next(), Some(("method", method)));
        }
    }

    #[test]
    fn add_tags_comma_joins() {
        let req = add_tags_request("1", &["a", "b", "c"]);
        assert_eq!(req.arg("tags"), Some("a,b,c"));
        assert_eq!(req.arg("photo_id"), Some("1"));
    }

    #[test]
    fn get_info_secret() {
        assert_eq!(get_info_request("1", "").arg("secret"), None);
        assert_eq!(get_info_request("1", "s3cr3t").arg("secret"), Some("s3cr3t"));
    }

    #[test]
    fn set_perms_sends_defaults() {
        let req = set_perms_request("1", PrivacyType::No, PrivacyType::No, PrivacyType::No);
        let args: Vec<_> = req.args().collect();
        assert_eq!(
            args,
            vec![
                ("method", "flickr.photos.setPerms"),
                ("photo_id", "1"),
                ("is_public", "0"),
                ("is_friend", "0"),
                ("is_family", "0"),
            ]
        );
    }

    #[test]
    fn search_zero_values_are_omitted() {
        let query = PhotoSearchRequest {
            lat: 0.0,
            lon: 0.0,
            radius: 0.0,
            page: 0,
            per_page: 0,
            ..Default::default()
        };
        let req = search_request(&query);
        for key in ["lat", "lon", "radius", "page", "per_page"] {
            assert_eq!(req.arg(key), None, "{key} should be omitted");
        }
    }

    #[test]
    fn search_empty_lists_are_omitted() {
        let req = search_request(&PhotoSearchRequest::default());
        for key in ["license", "content_types", "extras", "text", "sort", "media"] {
            assert_eq!(req.arg(key), None, "{key} should be omitted");
        }
    }

    #[test]
    fn search_lists_keep_order() {
        let query = PhotoSearchRequest {
            license: vec!["7".into(), "1".into(), "4".into()],
            content_types: vec!["3".into(), "1".into()],
            extras: vec!["views".into(), "geo".into()],
            ..Default::default()
        };
        let req = search_request(&query);
        assert_eq!(req.arg("license"), Some("7,1,4"));
        assert_eq!(req.arg("content_types"), Some("3,1"));
        assert_eq!(req.arg("extras"), Some("views,geo"));
    }

    #[test]
    fn search_pagination() {
        let query = PhotoSearchRequest {
            page: 2,
            per_page: 50,
            ..Default::default()
        };
        let req = search_request(&query);
        assert_eq!(req.arg("page"), Some("2"));
        assert_eq!(req.arg("per_page"), Some("50"));
    }

    #[test]
    fn search_geo() {
        let query = PhotoSearchRequest {
            lat: 51.5,
            lon: -0.125,
            radius: 2.5,
            ..Default::default()
        };
        let req = search_request(&query);
        assert_eq!(req.arg("lat"), Some("51.5"));
        assert_eq!(req.arg("lon"), Some("-0.125"));
        assert_eq!(req.arg("radius"), Some("2.5"));
    }
}
