/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

/// A finished call to the REST endpoint: the remote method name plus the
/// arguments that will be sent with it.
///
/// Built with [`ApiRequest::builder`]. Once built the argument list can't
/// change, so the same request can be inspected, signed and sent without any
/// shared state between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: &'static str,
    args: Vec<(&'static str, String)>,
}

impl ApiRequest {
    pub fn builder(method: &'static str) -> RequestBuilder {
        RequestBuilder {
            method,
            args: Vec::new(),
        }
    }

    /// Remote method name, e.g. `flickr.photos.getInfo`
    pub fn method(&self) -> &str {
        self.method
    }

    /// Value of the named argument if it will be sent
    pub fn arg(&self, key: &str) -> Option<&str> {
        if key == "method" {
            return Some(self.method);
        }
        self.args
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All arguments in wire order, `method` first
    pub fn args(&self) -> impl Iterator<Item = (&str, &str)> {
        std::iter::once(("method", self.method))
            .chain(self.args.iter().map(|(k, v)| (*k, v.as_str())))
    }

    pub(crate) fn into_params(self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.args.len() + 1);
        params.push(("method".to_string(), self.method.to_string()));
        params.extend(self.args.into_iter().map(|(k, v)| (k.to_string(), v)));
        params
    }
}

/// Collects the arguments for an [`ApiRequest`].
///
/// The `opt_*` setters skip values that hold their "absent" sentinel (empty
/// string, empty list, zero) so the remote default applies.
#[derive(Debug)]
pub struct RequestBuilder {
    method: &'static str,
    args: Vec<(&'static str, String)>,
}

impl RequestBuilder {
    /// Always sends the argument
    pub fn arg(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.args.push((key, value.into()));
        self
    }

    pub fn opt_str(self, key: &'static str, value: &str) -> Self {
        if value.is_empty() {
            return self;
        }
        self.arg(key, value)
    }

    /// Comma joins the values in order
    pub fn opt_list<S: AsRef<str>>(self, key: &'static str, values: &[S]) -> Self {
        if values.is_empty() {
            return self;
        }
        let joined = values
            .iter()
            .map(|v| v.as_ref())
            .collect::<Vec<_>>()
            .join(",");
        self.arg(key, joined)
    }

    pub fn opt_float(self, key: &'static str, value: f64) -> Self {
        if value == 0.0 {
            return self;
        }
        self.arg(key, value.to_string())
    }

    pub fn opt_int(self, key: &'static str, value: u32) -> Self {
        if value == 0 {
            return self;
        }
        self.arg(key, value.to_string())
    }

    pub fn build(self) -> ApiRequest {
        ApiRequest {
            method: self.method,
            args: self.args,
        }
    }
}
