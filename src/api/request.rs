//! Request descriptors
//!
//! A [`RequestDescriptor`] is built per call by a resource client and handed
//! to the [`Connection`](super::Connection), which turns it into one HTTP
//! request.

use super::params::Params;
use std::fmt;

/// HTTP verbs used by the OCS API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Everything needed to issue one OCS call
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path relative to the API root, e.g. `v1.php/cloud/users/alice`
    pub path: String,
    pub query: Params,
    pub form: Option<Params>,
    /// Header overrides, applied after the default headers
    pub headers: Vec<(String, String)>,
    /// Send basic-auth credentials
    pub auth: bool,
}

impl RequestDescriptor {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Params::new(),
            form: None,
            headers: Vec::new(),
            auth: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    /// Form-encoded body
    pub fn form(mut self, form: Params) -> Self {
        self.form = Some(form);
        self
    }

    /// Add or replace a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Send the request without basic-auth credentials
    pub fn without_auth(mut self) -> Self {
        self.auth = false;
        self
    }
}
