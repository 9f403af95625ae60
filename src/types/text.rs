//! Source text that is either a single string or a set of plural forms.

use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Text of a source string.
///
/// Serializes to whichever JSON shape it was built from:
///
/// ```json
/// "text": "Not all videos are shown to users. See more"
/// ```
///
/// or, keyed by plural category:
///
/// ```json
/// "text": { "one": "string", "other": "strings" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceStringText {
    /// A single string
    Plain(String),
    /// Plural forms keyed by CLDR category (`zero`, `one`, `two`, `few`, `many`, `other`)
    Plural(BTreeMap<String, String>),
}

impl SourceStringText {
    /// Build plural text from `(category, text)` pairs
    pub fn plural<K, V, I>(forms: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Plural(
            forms
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Whether there is no text at all
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Plain(text) => text.is_empty(),
            Self::Plural(forms) => forms.is_empty(),
        }
    }

    /// Whether this holds plural forms
    pub fn is_plural(&self) -> bool {
        matches!(self, Self::Plural(_))
    }

    /// The plain string, if this is not plural text
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            Self::Plain(text) => Some(text),
            Self::Plural(_) => None,
        }
    }

    /// The form for a plural category, if this is plural text
    pub fn form(&self, category: &str) -> Option<&str> {
        match self {
            Self::Plain(_) => None,
            Self::Plural(forms) => forms.get(category).map(String::as_str),
        }
    }
}

impl Default for SourceStringText {
    fn default() -> Self {
        Self::Plain(String::new())
    }
}

impl From<String> for SourceStringText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

impl From<&str> for SourceStringText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<BTreeMap<String, String>> for SourceStringText {
    fn from(forms: BTreeMap<String, String>) -> Self {
        Self::Plural(forms)
    }
}

impl TryFrom<serde_json::Value> for SourceStringText {
    type Error = ValidationError;

    /// Accepts a JSON string or an object whose values are all strings.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        let invalid = ValidationError::InvalidType {
            field: "text",
            expected: "a string or map of strings",
        };

        match value {
            serde_json::Value::String(text) => Ok(Self::Plain(text)),
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| match v {
                    serde_json::Value::String(s) => Ok((k, s)),
                    _ => Err(invalid.clone()),
                })
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Self::Plural),
            _ => Err(invalid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_keeps_shape() {
        let plain = SourceStringText::from("hello");
        assert_eq!(serde_json::to_value(&plain).unwrap(), json!("hello"));

        let plural = SourceStringText::plural([("one", "string"), ("other", "strings")]);
        assert_eq!(
            serde_json::to_value(&plural).unwrap(),
            json!({"one": "string", "other": "strings"})
        );
    }

    #[test]
    fn test_deserialize_both_shapes() {
        let plain: SourceStringText = serde_json::from_value(json!("hi")).unwrap();
        assert_eq!(plain.as_plain(), Some("hi"));

        let plural: SourceStringText =
            serde_json::from_value(json!({"one": "file", "other": "files"})).unwrap();
        assert!(plural.is_plural());
        assert_eq!(plural.form("other"), Some("files"));
        assert_eq!(plural.form("few"), None);
    }

    #[test]
    fn test_deserialize_rejects_numbers() {
        assert!(serde_json::from_value::<SourceStringText>(json!(42)).is_err());
    }

    #[test]
    fn test_try_from_value() {
        assert_eq!(
            SourceStringText::try_from(json!("x")).unwrap(),
            SourceStringText::Plain("x".into())
        );
        assert!(SourceStringText::try_from(json!({})).unwrap().is_empty());

        let err = SourceStringText::try_from(json!(42)).unwrap_err();
        assert_eq!(err.to_string(), "text must be a string or map of strings");

        let err = SourceStringText::try_from(json!({"one": 1})).unwrap_err();
        assert_eq!(err.field(), Some("text"));
    }

    #[test]
    fn test_is_empty() {
        assert!(SourceStringText::default().is_empty());
        assert!(SourceStringText::Plural(BTreeMap::new()).is_empty());
        assert!(!SourceStringText::from("a").is_empty());
    }
}
