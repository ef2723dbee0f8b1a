//! Tag groups and their default render order.

use std::fmt;
use std::str::FromStr;

/// A category of head tags rendered together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    Title,
    Meta,
    Og,
    Twitter,
    Link,
    JsonLd,
}

impl Group {
    /// Default render order.
    pub const DEFAULT_ORDER: [Group; 6] = [
        Group::Title,
        Group::Meta,
        Group::Og,
        Group::Twitter,
        Group::Link,
        Group::JsonLd,
    ];

    /// Group name as used in ordering strategies and config files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Meta => "meta",
            Self::Og => "og",
            Self::Twitter => "twitter",
            Self::Link => "link",
            Self::JsonLd => "json-ld",
        }
    }

    /// Whether entries are addressed by a semantic key (meta name, og property, link rel).
    ///
    /// `title` and `json-ld` are plain ordered sequences.
    pub const fn is_keyed(self) -> bool {
        matches!(self, Self::Meta | Self::Og | Self::Twitter | Self::Link)
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized group name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGroup(pub String);

impl fmt::Display for UnknownGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown group `{}`", self.0)
    }
}

impl std::error::Error for UnknownGroup {}

impl FromStr for Group {
    type Err = UnknownGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "meta" => Ok(Self::Meta),
            "og" => Ok(Self::Og),
            "twitter" => Ok(Self::Twitter),
            "link" => Ok(Self::Link),
            "json-ld" => Ok(Self::JsonLd),
            _ => Err(UnknownGroup(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for group in Group::DEFAULT_ORDER {
            assert_eq!(group.as_str().parse::<Group>(), Ok(group));
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!("jsonld".parse::<Group>(), Err(UnknownGroup("jsonld".into())));
        assert_eq!("Title".parse::<Group>(), Err(UnknownGroup("Title".into())));
    }

    #[test]
    fn test_keyed_groups() {
        assert!(!Group::Title.is_keyed());
        assert!(!Group::JsonLd.is_keyed());
        assert!(Group::Meta.is_keyed());
        assert!(Group::Link.is_keyed());
    }
}
