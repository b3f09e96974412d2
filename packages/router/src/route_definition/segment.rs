use std::collections::BTreeMap;

use tracing::error;
use urlencoding::{decode, encode};

/// A single piece of a route pattern, i.e. the value between two `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PathSegment {
    /// Matches its text exactly.
    Fixed(String),
    /// Matches any non-empty value and captures it under the key.
    Parameter(String),
}

impl PathSegment {
    fn parse(raw: &str) -> Self {
        match raw.strip_prefix(':') {
            Some(key) if !key.is_empty() => Self::Parameter(key.to_string()),
            _ => Self::Fixed(raw.to_string()),
        }
    }
}

/// A parsed route pattern.
///
/// Patterns are split on every `/`, so `/` is `["", ""]` and `/blog/:id` is
/// `["", "blog", ":id"]`. A pattern without parameters only ever matches its own text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoutePattern {
    raw: String,
    segments: Vec<PathSegment>,
}

impl RoutePattern {
    pub(crate) fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = raw.split('/').map(PathSegment::parse).collect();
        Self { raw, segments }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.raw
    }

    pub(crate) fn has_parameters(&self) -> bool {
        self.parameter_keys().next().is_some()
    }

    pub(crate) fn parameter_keys(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            PathSegment::Parameter(key) => Some(key.as_str()),
            PathSegment::Fixed(_) => None,
        })
    }

    /// Match a normalized `path` against the pattern, returning the captured parameters.
    pub(crate) fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        if !self.has_parameters() {
            return (self.raw == path).then(BTreeMap::new);
        }

        let values: Vec<_> = path.split('/').collect();
        if values.len() != self.segments.len() {
            return None;
        }

        let mut parameters = BTreeMap::new();
        for (segment, value) in self.segments.iter().zip(values) {
            match segment {
                PathSegment::Fixed(fixed) if fixed == value => {}
                PathSegment::Fixed(_) => return None,
                PathSegment::Parameter(_) if value.is_empty() => return None,
                PathSegment::Parameter(key) => {
                    let value = match decode(value) {
                        Ok(decoded) => decoded.into_owned(),
                        Err(_) => {
                            error!(r#"failed to decode parameter value: "{value}""#);
                            value.to_string()
                        }
                    };
                    parameters.insert(key.clone(), value);
                }
            }
        }

        Some(parameters)
    }

    /// Build a concrete path by filling every parameter segment from `parameters`.
    ///
    /// Values are percent-encoded. Returns the first missing key as the error.
    pub(crate) fn interpolate<K, V>(&self, parameters: &[(K, V)]) -> Result<String, String>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                PathSegment::Fixed(fixed) => parts.push(fixed.clone()),
                PathSegment::Parameter(key) => {
                    let value = parameters
                        .iter()
                        .find(|(k, _)| k.as_ref() == key)
                        .map(|(_, v)| encode(v.as_ref()).into_owned())
                        .ok_or_else(|| key.clone())?;
                    parts.push(value);
                }
            }
        }

        Ok(parts.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_pattern_matches_exactly() {
        let pattern = RoutePattern::parse("/randomjokes");

        assert_eq!(pattern.matches("/randomjokes"), Some(BTreeMap::new()));
        assert_eq!(pattern.matches("/randomjokes/"), None);
        assert_eq!(pattern.matches("/RandomJokes"), None);
        assert_eq!(pattern.matches("/randomjokesbytype"), None);
    }

    #[test]
    fn root_pattern() {
        let pattern = RoutePattern::parse("/");

        assert!(!pattern.has_parameters());
        assert_eq!(pattern.matches("/"), Some(BTreeMap::new()));
        assert_eq!(pattern.matches(""), None);
    }

    #[test]
    fn parameter_pattern_captures_and_decodes() {
        let pattern = RoutePattern::parse("/jokes/:kind");

        let captured = pattern.matches("/jokes/knock%20knock").unwrap();
        assert_eq!(captured.get("kind").map(String::as_str), Some("knock knock"));

        assert_eq!(pattern.matches("/jokes/"), None);
        assert_eq!(pattern.matches("/jokes"), None);
        assert_eq!(pattern.matches("/jokes/a/b"), None);
        assert_eq!(pattern.matches("/puns/general"), None);
    }

    #[test]
    fn lone_colon_is_fixed() {
        let pattern = RoutePattern::parse("/:");
        assert!(!pattern.has_parameters());
        assert_eq!(pattern.matches("/:"), Some(BTreeMap::new()));
    }

    #[test]
    fn interpolate_fixed() {
        let pattern = RoutePattern::parse("/randomjokesbytype");
        assert_eq!(
            pattern.interpolate::<&str, &str>(&[]),
            Ok(String::from("/randomjokesbytype"))
        );
    }

    #[test]
    fn interpolate_root() {
        let pattern = RoutePattern::parse("/");
        assert_eq!(pattern.interpolate::<&str, &str>(&[]), Ok(String::from("/")));
    }

    #[test]
    fn interpolate_parameters() {
        let pattern = RoutePattern::parse("/jokes/:kind/:id");
        assert_eq!(
            pattern.interpolate(&[("id", "7"), ("kind", "knock knock"), ("unused", "x")]),
            Ok(String::from("/jokes/knock%20knock/7"))
        );
    }

    #[test]
    fn interpolate_missing_parameter() {
        let pattern = RoutePattern::parse("/jokes/:kind");
        assert_eq!(
            pattern.interpolate(&[("id", "7")]),
            Err(String::from("kind"))
        );
    }
}
