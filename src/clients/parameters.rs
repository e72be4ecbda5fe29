//! Request parameters.
//!
//! Operations describe their inputs as a [`Parameters`] bag of logical,
//! possibly list-valued or nested, [`ParamValue`]s. Before a request is
//! signed the bag is *structured* into dotted wire keys and *normalized*
//! into string-valued [`QueryParams`], whose key order is the order used
//! both for the signature and for the request body.
//!
//! # Example
//!
//! ```rust
//! use mws_api::{ParamValue, Parameters};
//!
//! let params = Parameters::new()
//!     .with("Action", "GetMatchingProduct")
//!     .with("ASINList", vec!["B00001", "B00002"])
//!     .structure("ASINList", &["ASIN"]);
//!
//! let query = params.normalize().unwrap();
//! assert_eq!(
//!     query.encode(),
//!     "ASINList.ASIN.1=B00001&ASINList.ASIN.2=B00002&Action=GetMatchingProduct"
//! );
//! ```

use std::collections::btree_map;
use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};

use crate::clients::errors::ParameterError;

/// A logical parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum ParamValue {
    /// Sent as `true` / `false`.
    Bool(bool),
    /// Sent in decimal.
    Int(i64),
    /// Sent with two decimal places.
    Float32(f32),
    /// Sent with two decimal places.
    Float(f64),
    /// Sent unchanged.
    Str(String),
    /// Sent as RFC 3339 UTC with whole seconds, e.g. `2015-10-20T22:46:07Z`.
    Timestamp(DateTime<Utc>),
    /// Must be structured into `base.suffix.N` keys before sending.
    List(Vec<ParamValue>),
    /// Must be structured into `base.suffix.Key` keys before sending.
    Nested(Parameters),
}

impl ParamValue {
    /// Returns the lowercase name of the value's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float32(_) => "float32",
            Self::Float(_) => "float64",
            Self::Str(_) => "string",
            Self::Timestamp(_) => "timestamp",
            Self::List(_) => "list",
            Self::Nested(_) => "nested",
        }
    }

    /// Returns the wire representation of a scalar, or `None` for lists and
    /// nested bags.
    #[must_use]
    pub fn to_wire(&self) -> Option<String> {
        match self {
            Self::Bool(value) => Some(value.to_string()),
            Self::Int(value) => Some(value.to_string()),
            Self::Float32(value) => Some(format!("{value:.2}")),
            Self::Float(value) => Some(format!("{value:.2}")),
            Self::Str(value) => Some(value.clone()),
            Self::Timestamp(value) => Some(format_timestamp(value)),
            Self::List(_) | Self::Nested(_) => None,
        }
    }
}

/// Formats a timestamp the way MWS expects it: UTC, whole seconds, `Z` suffix.
#[must_use]
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f32> for ParamValue {
    fn from(value: f32) -> Self {
        Self::Float32(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<DateTime<FixedOffset>> for ParamValue {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Timestamp(value.with_timezone(&Utc))
    }
}

impl From<Parameters> for ParamValue {
    fn from(value: Parameters) -> Self {
        Self::Nested(value)
    }
}

impl<T: Into<Self>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> FromIterator<T> for ParamValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

/// A bag of logical request parameters.
///
/// Keys are unique; inserting an existing key replaces its value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Parameters(BTreeMap<String, ParamValue>);

impl Parameters {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bag with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Removes and returns the value for `key`.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamValue> {
        self.0.iter()
    }

    /// Returns the union of both bags; on collision `other` wins.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Flattens the value under `base` into dotted wire keys.
    ///
    /// With `prefix = base.suffix1...suffixN`:
    ///
    /// - a nested bag becomes `prefix.Key` for each inner key
    /// - a list becomes `prefix.1`, `prefix.2`, ... in list order
    /// - a scalar is moved to `prefix`
    ///
    /// `base` itself is removed. A missing `base` leaves the bag unchanged.
    ///
    /// ```rust
    /// use mws_api::Parameters;
    ///
    /// let params = Parameters::new()
    ///     .with("L", vec!["a", "b", "c"])
    ///     .structure("L", &["x"]);
    /// assert_eq!(params.normalize().unwrap().encode(), "L.x.1=a&L.x.2=b&L.x.3=c");
    /// ```
    #[must_use]
    pub fn structure(mut self, base: &str, suffixes: &[&str]) -> Self {
        let Some(value) = self.0.remove(base) else {
            return self;
        };

        let prefix = std::iter::once(base)
            .chain(suffixes.iter().copied())
            .collect::<Vec<_>>()
            .join(".");

        match value {
            ParamValue::Nested(inner) => {
                for (key, value) in inner.0 {
                    self.0.insert(format!("{prefix}.{key}"), value);
                }
            }
            ParamValue::List(items) => {
                for (index, value) in items.into_iter().enumerate() {
                    self.0.insert(format!("{prefix}.{}", index + 1), value);
                }
            }
            scalar => {
                self.0.insert(prefix, scalar);
            }
        }
        self
    }

    /// Keeps only the optional parameters named in `accept_keys`.
    ///
    /// Keys are compared after upper-casing their first letter, and the
    /// returned bag uses that form, so `itemCondition` is accepted as
    /// `ItemCondition`.
    #[must_use]
    pub fn select(&self, accept_keys: &[&str]) -> Self {
        self.0
            .iter()
            .filter_map(|(key, value)| {
                let key = title_case(key);
                accept_keys
                    .contains(&key.as_str())
                    .then(|| (key, value.clone()))
            })
            .collect()
    }

    /// Converts every value to its wire string.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::UnsupportedType`] for the first list or
    /// nested value; no partial result is produced.
    pub fn normalize(&self) -> Result<QueryParams, ParameterError> {
        self.0
            .iter()
            .map(|(key, value)| {
                value
                    .to_wire()
                    .map(|wire| (key.clone(), wire))
                    .ok_or_else(|| ParameterError::UnsupportedType {
                        key: key.clone(),
                        type_name: value.type_name(),
                    })
            })
            .collect()
    }
}

fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Parameters {
    type Item = (String, ParamValue);
    type IntoIter = btree_map::IntoIter<String, ParamValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Normalized, string-valued query parameters in canonical (byte-wise
/// lexicographic) key order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the parameters in canonical order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    /// Encodes the parameters as `key=value` pairs joined by `&`.
    ///
    /// Everything but `A-Z a-z 0-9 - _ . ~` is percent-encoded; a space
    /// becomes `%20`, never `+`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_structure_missing_key_is_noop() {
        let params = Parameters::new().with("A", 1).with("B", "b");
        assert_eq!(params.clone().structure("Missing", &["x"]), params);
        assert_eq!(params.clone().structure("Missing", &[]), params);
    }

    #[test]
    fn test_structure_list_is_one_based_and_ordered() {
        let params = Parameters::new()
            .with("L", vec!["a", "b", "c"])
            .structure("L", &["x"]);

        let expected: Parameters = [("L.x.1", "a"), ("L.x.2", "b"), ("L.x.3", "c")]
            .into_iter()
            .collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn test_structure_nested_bag() {
        let inner = Parameters::new().with("Amount", 10).with("Currency", "USD");
        let params = Parameters::new()
            .with("Price", inner)
            .structure("Price", &["Listing"]);

        assert_eq!(params.get("Price.Listing.Amount"), Some(&ParamValue::Int(10)));
        assert_eq!(
            params.get("Price.Listing.Currency"),
            Some(&ParamValue::Str("USD".to_string()))
        );
        assert!(!params.contains_key("Price"));
    }

    #[test]
    fn test_structure_nested_bag_without_suffix() {
        let inner = Parameters::new().with("K", "v");
        let params = Parameters::new().with("Base", inner).structure("Base", &[]);
        assert_eq!(params.get("Base.K"), Some(&ParamValue::Str("v".to_string())));
    }

    #[test]
    fn test_structure_scalar_is_moved_under_suffix() {
        let params = Parameters::new().with("Id", "X1").structure("Id", &["Value"]);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("Id.Value"), Some(&ParamValue::Str("X1".to_string())));
    }

    #[test]
    fn test_merge_second_bag_wins() {
        let first = Parameters::new().with("A", 1).with("B", 2);
        let second = Parameters::new().with("B", 3).with("C", 4);
        let merged = first.merge(second);

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("B"), Some(&ParamValue::Int(3)));
    }

    #[test]
    fn test_select_filters_and_title_cases_keys() {
        let optional = Parameters::new()
            .with("itemCondition", "New")
            .with("ExcludeMe", true)
            .with("Unknown", "dropped");
        let selected = optional.select(&["ItemCondition", "ExcludeMe"]);

        assert_eq!(selected.len(), 2);
        assert_eq!(
            selected.get("ItemCondition"),
            Some(&ParamValue::Str("New".to_string()))
        );
        assert_eq!(selected.get("ExcludeMe"), Some(&ParamValue::Bool(true)));
    }

    #[test]
    fn test_normalize_formats_scalars() {
        let timestamp = Utc.with_ymd_and_hms(2015, 10, 20, 22, 46, 7).unwrap();
        let params = Parameters::new()
            .with("bool", true)
            .with("int", 12)
            .with("float", 1.1)
            .with("rounded", 1.111)
            .with("float32", 2.5_f32)
            .with("string", "a b")
            .with("time", timestamp);
        let query = params.normalize().unwrap();

        assert_eq!(query.get("bool"), Some("true"));
        assert_eq!(query.get("int"), Some("12"));
        assert_eq!(query.get("float"), Some("1.10"));
        assert_eq!(query.get("rounded"), Some("1.11"));
        assert_eq!(query.get("float32"), Some("2.50"));
        assert_eq!(query.get("string"), Some("a b"));
        assert_eq!(query.get("time"), Some("2015-10-20T22:46:07Z"));
    }

    #[test]
    fn test_normalize_converts_offsets_to_utc() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2015, 10, 21, 0, 46, 7).unwrap();
        let query = Parameters::new().with("t", local).normalize().unwrap();
        assert_eq!(query.get("t"), Some("2015-10-20T22:46:07Z"));
    }

    #[test]
    fn test_normalize_rejects_unstructured_list() {
        let params = Parameters::new().with("ok", "fine").with("k", vec![1, 2]);
        let err = params.normalize().unwrap_err();
        assert_eq!(
            err,
            ParameterError::UnsupportedType {
                key: "k".to_string(),
                type_name: "list",
            }
        );
        assert!(err.to_string().contains("list"));
    }

    #[test]
    fn test_normalize_rejects_nested_bag() {
        let params = Parameters::new().with("n", Parameters::new().with("a", 1));
        assert!(matches!(
            params.normalize(),
            Err(ParameterError::UnsupportedType {
                type_name: "nested",
                ..
            })
        ));
    }

    #[test]
    fn test_normalize_round_trips_scalars() {
        let timestamp = Utc.with_ymd_and_hms(2020, 2, 29, 12, 0, 59).unwrap();
        let query = Parameters::new()
            .with("b", false)
            .with("i", -42_i64)
            .with("f", 12.34567)
            .with("s", "text")
            .with("t", timestamp)
            .normalize()
            .unwrap();

        assert!(!query.get("b").unwrap().parse::<bool>().unwrap());
        assert_eq!(query.get("i").unwrap().parse::<i64>().unwrap(), -42);
        let float: f64 = query.get("f").unwrap().parse().unwrap();
        assert!((float - 12.34567).abs() < 0.005);
        assert_eq!(query.get("s"), Some("text"));
        let parsed = DateTime::parse_from_rfc3339(query.get("t").unwrap()).unwrap();
        assert_eq!(parsed.with_timezone(&Utc), timestamp);
    }

    #[test]
    fn test_encode_uses_percent_twenty_for_spaces() {
        let query: QueryParams = [("key1", "a b c")].into_iter().collect();
        assert_eq!(query.encode(), "key1=a%20b%20c");
    }

    #[test]
    fn test_encode_sorts_keys_and_escapes_reserved_characters() {
        let query: QueryParams = [
            ("Timestamp", "2015-10-20T22:46:07Z"),
            ("AWSAccessKeyId", "AccessKey"),
            ("ASINList.ASIN.1", "ASIN"),
            ("Action", "a+b/c=d~e"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            query.encode(),
            "ASINList.ASIN.1=ASIN&AWSAccessKeyId=AccessKey&Action=a%2Bb%2Fc%3Dd~e&Timestamp=2015-10-20T22%3A46%3A07Z"
        );
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(QueryParams::new().encode(), "");
    }
}
