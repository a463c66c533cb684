//! OCS response envelope
//!
//! Every OCS endpoint answers with the same XML shape:
//!
//! ```xml
//! <ocs>
//!   <meta>
//!     <status>ok</status>
//!     <statuscode>100</statuscode>
//!     <message>OK</message>
//!   </meta>
//!   <data>...</data>
//! </ocs>
//! ```
//!
//! [`Envelope::parse`] turns that body into status, status code, message and
//! a nested [`DataMap`]. Status codes are exposed verbatim; what counts as
//! success differs between endpoint families and is left to the caller.

use super::error::{ApiError, Result};
use roxmltree::{Document, Node};
use serde::Serialize;
use std::collections::BTreeMap;

/// Tag OCS uses for the entries of a list
const LIST_ENTRY_TAG: &str = "element";

/// HTTP status and body as received from the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

pub type DataMap = BTreeMap<String, DataValue>;

/// A node of the `data` subtree: a leaf's text, or a map of its children
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DataValue {
    Text(String),
    Map(DataMap),
}

impl DataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DataValue::Text(text) => Some(text),
            DataValue::Map(_) => None,
        }
    }

    pub fn as_map(&self) -> Option<&DataMap> {
        match self {
            DataValue::Map(map) => Some(map),
            DataValue::Text(_) => None,
        }
    }

    /// Child value by tag, for map values
    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.as_map().and_then(|map| map.get(key))
    }
}

/// Parsed OCS response
#[derive(Debug, Clone, Serialize)]
pub struct Envelope {
    status: String,
    #[serde(rename = "statuscode")]
    status_code: i64,
    message: Option<String>,
    data: Option<DataMap>,
    #[serde(skip)]
    raw: RawResponse,
}

impl Envelope {
    /// Parse a raw response into an envelope.
    ///
    /// Fails with [`ApiError::EnvelopeParse`] when the body is not XML or
    /// the root has no `meta` child. The error keeps the raw body.
    pub fn parse(raw: RawResponse) -> Result<Self> {
        let parsed = {
            let doc = match Document::parse(&raw.body) {
                Ok(doc) => doc,
                Err(e) => return Err(parse_error(&raw, format!("invalid XML: {}", e))),
            };
            let root = doc.root_element();

            match child_element(root, "meta") {
                None => Err(format!("<{}> has no <meta> element", root.tag_name().name())),
                Some(meta) => {
                    let status = child_element(meta, "status").map(text_content).unwrap_or_default();
                    let status_code = child_element(meta, "statuscode")
                        .map(|node| leading_int(&text_content(node)))
                        .unwrap_or(0);
                    let message = child_element(meta, "message").map(text_content);
                    let data = child_element(root, "data").and_then(data_map);
                    Ok((status, status_code, message, data))
                }
            }
        };

        match parsed {
            Ok((status, status_code, message, data)) => Ok(Self {
                status,
                status_code,
                message,
                data,
                raw,
            }),
            Err(reason) => Err(parse_error(&raw, reason)),
        }
    }

    /// Status string, usually `ok` or `failure`
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// OCS status code as sent by the server; non-numeric codes read as 0
    pub fn status_code(&self) -> i64 {
        self.status_code
    }

    /// Data subtree, `None` when the server sent no data elements.
    ///
    /// A `data` element holding only text is read with [`Envelope::data_text`].
    pub fn data(&self) -> Option<&DataMap> {
        self.data.as_ref()
    }

    /// Text of a `data` element without element children, e.g.
    /// `<data>42</data>`; `None` when `data` is absent, empty or nested
    pub fn data_text(&self) -> Option<String> {
        let doc = Document::parse(&self.raw.body).ok()?;
        let data = child_element(doc.root_element(), "data")?;
        if has_element_children(data) {
            return None;
        }
        let text = text_content(data);
        if text.trim().is_empty() { None } else { Some(text) }
    }

    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    pub fn http_status(&self) -> u16 {
        self.raw.status
    }

    pub fn raw_response(&self) -> &RawResponse {
        &self.raw
    }

    /// Top-level data value by tag
    pub fn data_value(&self, key: &str) -> Option<&DataValue> {
        self.data.as_ref().and_then(|data| data.get(key))
    }

    /// Every `<element>` entry under `data/<key>`, in document order.
    ///
    /// The [`DataMap`] keeps one value per tag, so lists such as
    /// `<users><element>a</element><element>b</element></users>` must be
    /// read through here.
    pub fn data_list(&self, key: &str) -> Vec<String> {
        self.data_list_at(&[key])
    }

    /// Every `<element>` entry below `data` followed by `path`; an empty
    /// path reads entries placed directly under `data`
    pub fn data_list_at(&self, path: &[&str]) -> Vec<String> {
        let Ok(doc) = Document::parse(&self.raw.body) else {
            return Vec::new();
        };

        let mut node = child_element(doc.root_element(), "data");
        for tag in path {
            node = node.and_then(|parent| child_element(parent, tag));
        }

        node.map(|list| {
            list.children()
                .filter(|entry| entry.is_element() && entry.has_tag_name(LIST_ENTRY_TAG))
                .map(text_content)
                .collect()
        })
        .unwrap_or_default()
    }
}

fn parse_error(raw: &RawResponse, reason: String) -> ApiError {
    log::warn!("Failed parsing OCS response (HTTP {}): {}", raw.status, reason);
    ApiError::EnvelopeParse {
        reason,
        status: raw.status,
        raw_body: raw.body.clone(),
    }
}

fn child_element<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.has_tag_name(tag))
}

fn text_content(node: Node) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}

fn has_element_children(node: Node) -> bool {
    node.children().any(|child| child.is_element())
}

/// `None` for a `data` element without element children
fn data_map(data: Node) -> Option<DataMap> {
    if !has_element_children(data) {
        return None;
    }
    Some(element_map(data))
}

fn element_map(node: Node) -> DataMap {
    let mut map = DataMap::new();
    for child in node.children().filter(|child| child.is_element()) {
        let value = if has_element_children(child) {
            DataValue::Map(element_map(child))
        } else {
            DataValue::Text(text_content(child))
        };
        // later siblings with the same tag overwrite earlier ones
        map.insert(child.tag_name().name().to_string(), value);
    }
    map
}

/// Leading integer of `text`, 0 when there is none
fn leading_int(text: &str) -> i64 {
    let text = text.trim();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|n| sign * n).unwrap_or(0)
}
