//! Navigation over a decoded response document.
//!
//! An [`XmlNode`] is a read-only view of one value in an
//! [`XmlDocument`](crate::xml::XmlDocument) together with its dotted path
//! from the document root. Searches return new views into the same
//! document; nothing is copied until a coercion is requested.
//!
//! # Overview
//!
//! - [`XmlNode::find_by_key`]: every descendant with a given tag, at any depth
//! - [`XmlNode::find_by_path`]: the values at a dotted path starting at a
//!   direct child
//! - [`XmlNode::find_by_full_path`]: the same, with a path from the document root
//! - [`XmlNode::leaf_nodes`] / [`XmlNode::leaf_paths`]: every scalar below the node
//! - `text`, `to_int`, `to_float`, `to_bool`, `to_time`, `to_struct`: coercions
//! - [`XmlNode::to_xml`]: the subtree written back out as XML
//!
//! A repeated tag fans out: a search that reaches a list yields one node per
//! element, all sharing the same path.
//!
//! # Example
//!
//! ```rust
//! use mws_api::xml::XmlDocument;
//!
//! let doc = XmlDocument::parse(br#"
//!     <GetServiceStatusResponse>
//!       <GetServiceStatusResult>
//!         <Status>GREEN_I</Status>
//!         <Messages>
//!           <Message><Locale>en_US</Locale><Text>one</Text></Message>
//!           <Message><Locale>en_UK</Locale><Text>two</Text></Message>
//!         </Messages>
//!       </GetServiceStatusResult>
//!     </GetServiceStatusResponse>"#).unwrap();
//!
//! let messages = doc.root().find_by_key("Messages");
//! let locales = messages[0].find_by_path("Message.Locale");
//! assert_eq!(locales.len(), 2);
//! assert_eq!(locales[1].text().unwrap(), "en_UK");
//! assert_eq!(
//!     locales[1].path(),
//!     "GetServiceStatusResponse.GetServiceStatusResult.Messages.Message.Locale"
//! );
//! ```

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::xml::document::{XmlValue, ATTRIBUTE_PREFIX, TEXT_KEY};
use crate::xml::errors::XmlError;

/// A view of one value in a decoded document and its dotted path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XmlNode<'a> {
    value: &'a XmlValue,
    path: String,
}

impl<'a> XmlNode<'a> {
    /// Creates a view of `value` located at `path`.
    #[must_use]
    pub fn new(value: &'a XmlValue, path: impl Into<String>) -> Self {
        Self {
            value,
            path: path.into(),
        }
    }

    /// Returns the underlying value.
    #[must_use]
    pub const fn value(&self) -> &'a XmlValue {
        self.value
    }

    /// Returns the dotted path from the document root; empty for the root.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the last segment of the path; empty for the root.
    #[must_use]
    pub fn current_key(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or("")
    }

    /// Returns `true` unless the node holds attributes or child elements.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !matches!(self.value, XmlValue::Map(_))
    }

    /// Returns the tags of the node's child elements in document order.
    ///
    /// Attribute keys and `#text` are not tags and are left out. Empty for
    /// leaves.
    #[must_use]
    pub fn elements(&self) -> Vec<&'a str> {
        match self.value {
            XmlValue::Map(entries) => entries
                .iter()
                .map(|(key, _)| key.as_str())
                .filter(|key| is_tag(key))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Returns every descendant keyed `key`, at any depth, in document order.
    ///
    /// Matches nested inside other matches are returned too. Attribute keys
    /// (`-Name`) can be searched like tags.
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Vec<Self> {
        let mut found = Vec::new();
        collect_by_key(self.value, &self.path, key, &mut found);
        found
    }

    /// Returns the descendants keyed by the last of `keys` whose path below
    /// this node passes through the other keys, in order.
    ///
    /// `find_by_keys(&["Message", "Text"])` finds `Message.Text` and
    /// `Message.Body.Text` but not `Other.Text`.
    #[must_use]
    pub fn find_by_keys(&self, keys: &[&str]) -> Vec<Self> {
        let Some(last) = keys.last() else {
            return Vec::new();
        };

        self.find_by_key(last)
            .into_iter()
            .filter(|node| {
                let relative = self
                    .relative_path(&node.path)
                    .unwrap_or(node.path.as_str());
                let mut wanted = keys.iter().peekable();
                for segment in relative.split('.') {
                    if wanted.peek().is_some_and(|key| **key == segment) {
                        wanted.next();
                    }
                }
                wanted.peek().is_none()
            })
            .collect()
    }

    /// Returns the values at `path`, a dotted path whose first segment is a
    /// direct child of this node.
    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Vec<Self> {
        if path.is_empty() {
            return Vec::new();
        }

        let mut current = vec![self.value];
        for segment in path.split('.') {
            let mut next = Vec::new();
            for value in current {
                if let Some(child) = value.get(segment) {
                    push_flattened(child, &mut next);
                }
            }
            if next.is_empty() {
                return Vec::new();
            }
            current = next;
        }

        let full_path = join_path(&self.path, path);
        current
            .into_iter()
            .map(|value| Self::new(value, full_path.clone()))
            .collect()
    }

    /// Returns the values at `full_path`, a dotted path from the document root.
    ///
    /// Paths outside this node's subtree find nothing.
    #[must_use]
    pub fn find_by_full_path(&self, full_path: &str) -> Vec<Self> {
        self.relative_path(full_path)
            .map_or_else(Vec::new, |relative| self.find_by_path(relative))
    }

    /// Returns every scalar below this node with its full path. Empty for leaves.
    #[must_use]
    pub fn leaf_nodes(&self) -> Vec<Self> {
        let mut leaves = Vec::new();
        if !self.is_leaf() {
            collect_leaves(self.value, &self.path, &mut leaves);
        }
        leaves
    }

    /// Returns the paths of [`XmlNode::leaf_nodes`].
    ///
    /// Paths carry no list index: every element of a repeated tag reports
    /// the same path, once per leaf.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<String> {
        self.leaf_nodes().into_iter().map(|node| node.path).collect()
    }

    /// Returns the scalar text.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::NotAScalar`] if the node holds attributes or children.
    pub fn text(&self) -> Result<&'a str, XmlError> {
        self.value.as_text().ok_or_else(|| XmlError::NotAScalar {
            path: self.path.clone(),
        })
    }

    /// Parses the scalar as a signed integer.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::NotAScalar`] or [`XmlError::InvalidValue`].
    pub fn to_int(&self) -> Result<i64, XmlError> {
        let text = self.text()?;
        text.parse().map_err(|_| self.invalid("int", text))
    }

    /// Parses the scalar as a float.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::NotAScalar`] or [`XmlError::InvalidValue`].
    pub fn to_float(&self) -> Result<f64, XmlError> {
        let text = self.text()?;
        text.parse().map_err(|_| self.invalid("float", text))
    }

    /// Parses the scalar as a boolean.
    ///
    /// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
    /// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::NotAScalar`] or [`XmlError::InvalidValue`].
    pub fn to_bool(&self) -> Result<bool, XmlError> {
        match self.text()? {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            other => Err(self.invalid("bool", other)),
        }
    }

    /// Parses the scalar as an RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::NotAScalar`] or [`XmlError::InvalidValue`].
    pub fn to_time(&self) -> Result<DateTime<Utc>, XmlError> {
        let text = self.text()?;
        DateTime::parse_from_rfc3339(text)
            .map(|time| time.with_timezone(&Utc))
            .map_err(|_| self.invalid("time", text))
    }

    /// Writes the subtree back out as XML.
    ///
    /// The root tag is the node's own key. The document root has no key, so
    /// its only child becomes the root tag; with several children they are
    /// wrapped in `<doc>`. `-Name` keys become attributes, `#text` becomes
    /// text and repeated tags are written once per element.
    ///
    /// ```rust
    /// use mws_api::xml::XmlDocument;
    ///
    /// let doc = XmlDocument::parse(br#"<R><MessageId SKU="24">173</MessageId></R>"#).unwrap();
    /// let id = &doc.root().find_by_key("MessageId")[0];
    /// assert_eq!(id.to_xml(), r#"<MessageId SKU="24">173</MessageId>"#);
    /// ```
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        let key = self.current_key();
        if !key.is_empty() {
            write_element(&mut out, key, self.value);
            return out;
        }

        match self.value {
            XmlValue::Map(entries) if entries.len() == 1 && is_tag(&entries[0].0) => {
                write_element(&mut out, &entries[0].0, &entries[0].1);
            }
            value => write_element(&mut out, "doc", value),
        }
        out
    }

    /// Returns the subtree as JSON, see [`XmlValue::to_json`].
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        self.value.to_json()
    }

    /// Decodes the node's map into `T`.
    ///
    /// Fields are matched by key: child tags by name, attributes as `-Name`,
    /// text next to attributes as `#text`. Every scalar is a string.
    ///
    /// ```rust
    /// use mws_api::xml::XmlDocument;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct MessageId {
    ///     #[serde(rename = "-SKU")]
    ///     sku: String,
    ///     #[serde(rename = "#text")]
    ///     id: String,
    /// }
    ///
    /// let doc = XmlDocument::parse(br#"<R><MessageId SKU="24478624">173964729</MessageId></R>"#).unwrap();
    /// let message: MessageId = doc.root().find_by_key("MessageId")[0].to_struct().unwrap();
    /// assert_eq!(message.sku, "24478624");
    /// assert_eq!(message.id, "173964729");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`XmlError::NotAMap`] for leaves and [`XmlError::Decode`] if the
    /// map does not fit `T`.
    pub fn to_struct<T: DeserializeOwned>(&self) -> Result<T, XmlError> {
        if self.is_leaf() {
            return Err(XmlError::NotAMap {
                path: self.path.clone(),
            });
        }
        serde_json::from_value(self.to_json()).map_err(|source| XmlError::Decode {
            path: self.path.clone(),
            source,
        })
    }

    fn relative_path<'p>(&self, full_path: &'p str) -> Option<&'p str> {
        if self.path.is_empty() {
            return Some(full_path);
        }
        full_path
            .strip_prefix(self.path.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
    }

    fn invalid(&self, target: &'static str, value: &str) -> XmlError {
        XmlError::InvalidValue {
            path: self.path.clone(),
            target,
            value: value.to_string(),
        }
    }
}

fn is_tag(key: &str) -> bool {
    !key.starts_with(ATTRIBUTE_PREFIX) && key != TEXT_KEY
}

fn write_element(out: &mut String, tag: &str, value: &XmlValue) {
    match value {
        XmlValue::Text(text) if text.is_empty() => {
            out.push_str(&format!("<{tag}/>"));
        }
        XmlValue::Text(text) => {
            out.push_str(&format!("<{tag}>{}</{tag}>", escape(text)));
        }
        XmlValue::List(items) => {
            for item in items {
                write_element(out, tag, item);
            }
        }
        XmlValue::Map(entries) => {
            out.push('<');
            out.push_str(tag);
            for (key, value) in entries {
                let attribute = key.strip_prefix(ATTRIBUTE_PREFIX).zip(value.as_text());
                if let Some((name, text)) = attribute {
                    out.push_str(&format!(" {name}=\"{}\"", escape(text)));
                }
            }

            let mut content = String::new();
            for (key, value) in entries {
                if key == TEXT_KEY {
                    content.push_str(&escape(value.as_text().unwrap_or_default()));
                } else if is_tag(key) {
                    write_element(&mut content, key, value);
                }
            }

            if content.is_empty() {
                out.push_str("/>");
            } else {
                out.push('>');
                out.push_str(&content);
                out.push_str(&format!("</{tag}>"));
            }
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            other => escaped.push(other),
        }
    }
    escaped
}

fn join_path(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

fn push_flattened<'a>(value: &'a XmlValue, out: &mut Vec<&'a XmlValue>) {
    match value {
        XmlValue::List(items) => out.extend(items.iter()),
        other => out.push(other),
    }
}

fn collect_by_key<'a>(value: &'a XmlValue, path: &str, key: &str, out: &mut Vec<XmlNode<'a>>) {
    match value {
        XmlValue::Map(entries) => {
            for (name, child) in entries {
                let child_path = join_path(path, name);
                if name == key {
                    let mut matches = Vec::new();
                    push_flattened(child, &mut matches);
                    out.extend(
                        matches
                            .into_iter()
                            .map(|value| XmlNode::new(value, child_path.clone())),
                    );
                }
                collect_by_key(child, &child_path, key, out);
            }
        }
        XmlValue::List(items) => {
            for item in items {
                collect_by_key(item, path, key, out);
            }
        }
        XmlValue::Text(_) => {}
    }
}

fn collect_leaves<'a>(value: &'a XmlValue, path: &str, out: &mut Vec<XmlNode<'a>>) {
    match value {
        XmlValue::Map(entries) => {
            for (name, child) in entries {
                collect_leaves(child, &join_path(path, name), out);
            }
        }
        XmlValue::List(items) => {
            for item in items {
                collect_leaves(item, path, out);
            }
        }
        XmlValue::Text(_) => out.push(XmlNode::new(value, path)),
    }
}
