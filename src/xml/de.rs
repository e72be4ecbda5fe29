//! Serde helpers for fields decoded through [`XmlNode::to_struct`](crate::xml::XmlNode::to_struct).
//!
//! A tag that appears once decodes as a single value and a repeated tag as
//! a list, so list-typed fields need to accept both. Wrapper elements such as
//! `<Products><Product/>...</Products>` also need their inner tag unwrapped.

use std::fmt::{self, Display};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::de::{self, Error as _, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::xml::document::{ATTRIBUTE_PREFIX, TEXT_KEY};

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

struct WrappedVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for WrappedVisitor<T> {
    type Value = Vec<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a wrapper element")
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Vec::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut items = Vec::new();
        while let Some(key) = map.next_key::<String>()? {
            if key.starts_with(ATTRIBUTE_PREFIX) || key == TEXT_KEY {
                map.next_value::<IgnoredAny>()?;
            } else {
                items.extend(Vec::from(map.next_value::<OneOrMany<T>>()?));
            }
        }
        Ok(items)
    }
}

/// Decodes a value that may be a single item or a list of items.
///
/// # Errors
///
/// Fails when the value is neither a `T` nor a list of `T`.
pub fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    OneOrMany::deserialize(deserializer).map(Vec::from)
}

/// Decodes a wrapper element holding one or more items under a single tag.
///
/// An empty wrapper (`<Products/>`) decodes as an empty list. Attributes
/// and text on the wrapper are skipped.
///
/// # Errors
///
/// Fails when the wrapper's children are not `T`.
pub fn wrapped_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_any(WrappedVisitor(PhantomData))
}

/// Decodes a scalar's text with [`FromStr`], e.g. `<Rank>7</Rank>` as an integer.
///
/// # Errors
///
/// Fails when the value is not text or the text does not parse.
pub fn from_text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let text = String::deserialize(deserializer)?;
    text.trim().parse().map_err(D::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XmlDocument;

    #[derive(Debug, Deserialize, PartialEq, Eq)]
    struct Rank {
        #[serde(rename = "Rank", deserialize_with = "from_text")]
        rank: i64,
    }

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(rename = "Item", default, deserialize_with = "one_or_many")]
        items: Vec<String>,
        #[serde(rename = "Ranks", default, deserialize_with = "wrapped_list")]
        ranks: Vec<Rank>,
    }

    fn decode(xml: &str) -> Holder {
        let doc = XmlDocument::parse_str(xml).unwrap();
        doc.root().find_by_key("Holder")[0].to_struct().unwrap()
    }

    #[test]
    fn test_single_item_becomes_list() {
        let holder = decode("<Holder><Item>a</Item></Holder>");
        assert_eq!(holder.items, vec!["a"]);
        assert!(holder.ranks.is_empty());
    }

    #[test]
    fn test_repeated_items_keep_order() {
        let holder = decode("<Holder><Item>a</Item><Item>b</Item></Holder>");
        assert_eq!(holder.items, vec!["a", "b"]);
    }

    #[test]
    fn test_wrapped_list_unwraps_inner_tag() {
        let holder = decode(
            "<Holder><Ranks><SalesRank><Rank>1</Rank></SalesRank><SalesRank><Rank>7</Rank></SalesRank></Ranks></Holder>",
        );
        assert_eq!(
            holder.ranks,
            vec![
                Rank { rank: 1 },
                Rank { rank: 7 }
            ]
        );
    }

    #[test]
    fn test_from_text_rejects_non_numeric() {
        let doc = XmlDocument::parse_str("<Holder><Ranks><SalesRank><Rank>high</Rank></SalesRank></Ranks></Holder>").unwrap();
        let result: Result<Holder, _> = doc.root().find_by_key("Holder")[0].to_struct();
        assert!(result.is_err());
    }

    #[test]
    fn test_wrapped_list_skips_wrapper_attributes() {
        let holder = decode(
            r#"<Holder><Ranks count="2">total<SalesRank><Rank>1</Rank></SalesRank><SalesRank><Rank>7</Rank></SalesRank></Ranks></Holder>"#,
        );
        assert_eq!(holder.ranks, vec![Rank { rank: 1 }, Rank { rank: 7 }]);

        let holder = decode(r#"<Holder><Ranks count="0"/></Holder>"#);
        assert!(holder.ranks.is_empty());
    }

    #[test]
    fn test_empty_wrapper_is_empty_list() {
        let holder = decode("<Holder><Item>a</Item><Ranks/></Holder>");
        assert!(holder.ranks.is_empty());
    }
}
