//! Tag cleanup.
//!
//! Tags reach us as a proper list, as a one-element list holding a
//! JSON-encoded array, or as a single string that is either JSON or a comma
//! list. All shapes normalize to trimmed, non-empty strings.

use crate::models::RawTags;

/// Most tags an article may carry.
pub const MAX_TAGS: usize = 10;

/// Normalize any API tag shape to a clean list.
pub fn normalize(raw: &RawTags) -> Vec<String> {
    match raw {
        RawTags::Missing => Vec::new(),
        RawTags::Text(text) => normalize_str(text),
        RawTags::List(items) if items.len() == 1 => normalize_str(&items[0]),
        RawTags::List(items) => clean(items.iter().map(String::as_str)),
    }
}

/// Normalize one string: a JSON array, a comma-separated list, or a lone tag.
pub fn normalize_str(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.starts_with('[') {
        match serde_json::from_str::<Vec<serde_json::Value>>(trimmed) {
            Ok(values) => {
                let strings: Vec<String> = values
                    .into_iter()
                    .filter_map(|value| match value {
                        serde_json::Value::String(s) => Some(s),
                        serde_json::Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .collect();
                return clean(strings.iter().map(String::as_str));
            },
            Err(err) => {
                tracing::debug!(%err, text = trimmed, "tag payload is not valid JSON");
            },
        }
    }

    clean(trimmed.split(','))
}

fn clean<'a>(pieces: impl Iterator<Item = &'a str>) -> Vec<String> {
    pieces
        .map(|piece| piece.trim().trim_matches(|c: char| matches!(c, '[' | ']' | '"')).trim())
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Comma-joined tags for a `keywords` meta tag.
pub fn keywords(tags: &[String]) -> String {
    tags.join(",")
}

/// Tag list being edited in the admin article form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<String>,
}

impl TagSet {
    /// Start from an existing record's tags.
    pub fn from_raw(raw: &RawTags) -> Self {
        let mut set = TagSet::default();
        for tag in normalize(raw) {
            set.add(&tag);
        }
        set
    }

    /// Add a tag. Returns `false` when it is blank, already present, or the
    /// set is full.
    pub fn add(&mut self, value: &str) -> bool {
        let tag = value.trim();
        if tag.is_empty() || self.tags.len() >= MAX_TAGS || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Remove and return the tag at `index`, e.g. to move it back into the
    /// input box for editing.
    pub fn take(&mut self, index: usize) -> Option<String> {
        (index < self.tags.len()).then(|| self.tags.remove(index))
    }

    /// Drop the last tag (backspace on an empty input).
    pub fn pop(&mut self) -> Option<String> {
        self.tags.pop()
    }

    /// Current tags in insertion order.
    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }

    /// JSON array sent in the multipart `tags` field.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.tags).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> RawTags {
        RawTags::List(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn clean_list_is_unchanged() {
        let tags = list(&["cinema", "kerala", "ott"]);
        assert_eq!(normalize(&tags), vec!["cinema", "kerala", "ott"]);
        let again = RawTags::List(normalize(&tags));
        assert_eq!(normalize(&again), normalize(&tags));
    }

    #[test]
    fn single_clean_tag_is_unchanged() {
        assert_eq!(normalize(&list(&["cinema"])), vec!["cinema"]);
    }

    #[test]
    fn json_array_wrapped_in_list() {
        assert_eq!(normalize(&list(&[r#"["a","b"]"#])), vec!["a", "b"]);
    }

    #[test]
    fn comma_string() {
        assert_eq!(normalize(&RawTags::Text("a, b ,c".into())), vec!["a", "b", "c"]);
    }

    #[test]
    fn json_string_and_missing() {
        assert_eq!(normalize(&RawTags::Text(r#"[" x ", "", "y"]"#.into())), vec!["x", "y"]);
        assert!(normalize(&RawTags::Missing).is_empty());
        assert!(normalize(&RawTags::Text("   ".into())).is_empty());
    }

    #[test]
    fn broken_json_falls_back_to_commas() {
        assert_eq!(normalize(&list(&[r#"["a","b""#])), vec!["a", "b"]);
    }

    #[test]
    fn list_items_are_trimmed_and_blank_dropped() {
        assert_eq!(normalize(&list(&[" a ", "", "b"])), vec!["a", "b"]);
    }

    #[test]
    fn tag_set_rules() {
        let mut set = TagSet::from_raw(&RawTags::Text("a,b".into()));
        assert!(!set.add("a"));
        assert!(!set.add("   "));
        assert!(set.add(" c "));
        assert_eq!(set.as_slice(), ["a", "b", "c"]);
        assert_eq!(set.take(1).as_deref(), Some("b"));
        assert_eq!(set.take(9), None);
        assert_eq!(set.pop().as_deref(), Some("c"));
        assert_eq!(set.to_json(), r#"["a"]"#);

        let mut full = TagSet::default();
        for i in 0..MAX_TAGS {
            assert!(full.add(&format!("t{i}")));
        }
        assert!(!full.add("overflow"));
    }

    #[test]
    fn keywords_join() {
        assert_eq!(keywords(&["a".into(), "b".into()]), "a,b");
    }
}
