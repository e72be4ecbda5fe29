//! MWS API sections.
//!
//! Every MWS API section (Products, Orders, Reports, ...) is versioned
//! independently and served under its own path: `/{name}/{version}`.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// An MWS API section together with the version this crate speaks.
///
/// # Example
///
/// ```rust
/// use mws_api::ApiSection;
///
/// assert_eq!(ApiSection::Products.version(), "2011-10-01");
/// assert_eq!(ApiSection::Products.path(), "/Products/2011-10-01");
///
/// let section: ApiSection = "Orders".parse().unwrap();
/// assert_eq!(section, ApiSection::Orders);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiSection {
    /// Products API, version 2011-10-01.
    Products,
    /// Orders API, version 2013-09-01.
    Orders,
    /// Reports API, version 2009-01-01.
    Reports,
    /// Any other section. Either part may be empty.
    Custom {
        /// Section name, first path segment.
        name: String,
        /// Section version, second path segment.
        version: String,
    },
}

impl ApiSection {
    /// Returns the section name used as the first path segment.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Products => "Products",
            Self::Orders => "Orders",
            Self::Reports => "Reports",
            Self::Custom { name, .. } => name,
        }
    }

    /// Returns the API version sent as the `Version` parameter.
    #[must_use]
    pub fn version(&self) -> &str {
        match self {
            Self::Products => "2011-10-01",
            Self::Orders => "2013-09-01",
            Self::Reports => "2009-01-01",
            Self::Custom { version, .. } => version,
        }
    }

    /// Returns the request path, skipping empty segments.
    ///
    /// ```rust
    /// use mws_api::ApiSection;
    ///
    /// let section = ApiSection::Custom { name: "Test".into(), version: String::new() };
    /// assert_eq!(section.path(), "/Test");
    /// ```
    #[must_use]
    pub fn path(&self) -> String {
        [self.name(), self.version()]
            .iter()
            .filter(|segment| !segment.is_empty())
            .fold(String::new(), |mut path, segment| {
                path.push('/');
                path.push_str(segment);
                path
            })
    }
}

impl fmt::Display for ApiSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.version())
    }
}

impl FromStr for ApiSection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Products" => Ok(Self::Products),
            "Orders" => Ok(Self::Orders),
            "Reports" => Ok(Self::Reports),
            _ => Err(ConfigError::InvalidApiSection {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(name: &str, version: &str) -> ApiSection {
        ApiSection::Custom {
            name: name.to_string(),
            version: version.to_string(),
        }
    }

    #[test]
    fn test_known_section_versions() {
        assert_eq!(ApiSection::Products.version(), "2011-10-01");
        assert_eq!(ApiSection::Orders.version(), "2013-09-01");
        assert_eq!(ApiSection::Reports.version(), "2009-01-01");
    }

    #[test]
    fn test_path_joins_name_and_version() {
        assert_eq!(custom("Test", "V1").path(), "/Test/V1");
        assert_eq!(ApiSection::Orders.path(), "/Orders/2013-09-01");
    }

    #[test]
    fn test_path_skips_empty_segments() {
        assert_eq!(custom("Test", "").path(), "/Test");
        assert_eq!(custom("", "V1").path(), "/V1");
        assert_eq!(custom("", "").path(), "");
    }

    #[test]
    fn test_parse_known_sections() {
        assert_eq!("Reports".parse::<ApiSection>().unwrap(), ApiSection::Reports);
        assert!(matches!(
            "Feeds".parse::<ApiSection>(),
            Err(ConfigError::InvalidApiSection { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(ApiSection::Products.to_string(), "Products 2011-10-01");
    }
}
