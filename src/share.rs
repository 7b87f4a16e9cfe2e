// File: src/share.rs
use crate::core::types::Scheme;

/// A `(scheme, text)` pair encoded as `lang=..&text=..`, so a calculation
/// can be reproduced from a link.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareQuery {
    pub scheme: Scheme,
    pub text: String,
}

impl ShareQuery {
    pub fn new(scheme: Scheme, text: impl Into<String>) -> Self {
        Self { scheme, text: text.into() }
    }

    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("lang", self.scheme.key())
            .append_pair("text", &self.text)
            .finish()
    }

    /// Parses a query string. Never fails: an absent or unrecognised `lang`
    /// selects Hebrew and an absent `text` is empty. Later duplicates win.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut parsed = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "lang" => {
                    parsed.scheme = match value.as_ref() {
                        "english" => Scheme::English,
                        _ => Scheme::Hebrew,
                    }
                }
                "text" => parsed.text = value.into_owned(),
                _ => {}
            }
        }
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_lang_and_text() {
        let q = ShareQuery::new(Scheme::English, "Hello World & more");
        assert_eq!(q.to_query(), "lang=english&text=Hello+World+%26+more");
    }

    #[test]
    fn hebrew_text_survives_a_link() {
        let q = ShareQuery::new(Scheme::Hebrew, "בראשית ברא");
        assert_eq!(ShareQuery::from_query(&q.to_query()), q);
    }

    #[test]
    fn missing_params_fall_back_to_hebrew_and_empty() {
        assert_eq!(ShareQuery::from_query(""), ShareQuery::default());
        assert_eq!(ShareQuery::from_query("?text=abc").scheme, Scheme::Hebrew);
        assert_eq!(ShareQuery::from_query("lang=klingon&text=x").scheme, Scheme::Hebrew);
    }

    #[test]
    fn leading_question_mark_and_percent_escapes() {
        let q = ShareQuery::from_query("?lang=english&text=a%20b+c");
        assert_eq!(q, ShareQuery::new(Scheme::English, "a b c"));
    }
}
