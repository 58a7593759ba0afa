//! Records returned by the content API.
//!
//! The API is loose about types (ids arrive as numbers or strings, flags as
//! booleans or `"true"`/`"Active"`), so the lenient deserializers below are
//! applied at the field level instead of failing a whole listing.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::dates::parse_timestamp;

/// Server-assigned record id, kept as text so both numeric and string ids
/// survive a round trip into URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Int(i64),
            Float(f64),
            Text(String),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Int(n) => RecordId(n.to_string()),
            Repr::Float(n) => RecordId(n.to_string()),
            Repr::Text(s) => RecordId(s),
        })
    }
}

fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Bool(bool),
        Int(i64),
        Text(String),
        Null,
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Bool(b) => b,
        Repr::Int(n) => n != 0,
        Repr::Text(s) => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "active" | "1" | "yes")
        },
        Repr::Null => false,
    })
}

fn de_order<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Int(i64),
        Float(f64),
        Text(String),
        Null,
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Int(n) => n,
        Repr::Float(n) => n as i64,
        Repr::Text(s) => s.trim().parse().unwrap_or(i64::MAX),
        Repr::Null => i64::MAX,
    })
}

/// Tag payload as the API actually sends it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTags {
    /// A JSON array of strings. May hold a single JSON-encoded array.
    List(Vec<String>),
    /// One string: JSON-encoded array, comma list or a lone tag.
    Text(String),
    /// Field absent or `null`.
    #[default]
    Missing,
}

/// Article-like record shared by the news, cinema, meet-the-person, more-news
/// and trending collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Server id.
    pub id: RecordId,
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// URL key, unique within the record's category.
    #[serde(default)]
    pub slug: String,
    /// Server-relative image path.
    #[serde(default)]
    pub image: Option<String>,
    /// HTML body.
    #[serde(default)]
    pub content: String,
    /// Byline.
    #[serde(default)]
    pub author: Option<String>,
    /// Editorial date.
    #[serde(default)]
    pub date: Option<String>,
    /// Publication date used by some collections instead of `date`.
    #[serde(default)]
    pub published_date: Option<String>,
    /// Creation timestamp, the sort key for full-collection listings.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Whether the record also shows in the trending strip.
    #[serde(default, deserialize_with = "de_flag")]
    pub trending: bool,
    /// Tags in whatever shape the API stored them.
    #[serde(default)]
    pub tags: RawTags,
}

impl ArticleRecord {
    /// The date shown to readers: `date`, else `published_date`.
    pub fn display_date_raw(&self) -> Option<&str> {
        self.date
            .as_deref()
            .or(self.published_date.as_deref())
            .filter(|value| !value.trim().is_empty())
    }
}

/// Paginated listing envelope: `{ page, limit, total, items }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// 1-based page number the server answered for.
    #[serde(default = "default_page")]
    pub page: usize,
    /// Page size chosen by the server.
    #[serde(default = "default_limit")]
    pub limit: usize,
    /// Number of records matching the listing.
    #[serde(default)]
    pub total: usize,
    /// Records on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// Page size the API uses when it does not say otherwise.
pub const DEFAULT_PAGE_LIMIT: usize = 12;

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    DEFAULT_PAGE_LIMIT
}

impl<T> Paginated<T> {
    /// Envelope used in place of a failed page fetch.
    pub fn empty() -> Self {
        Paginated {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            total: 0,
            items: Vec::new(),
        }
    }

    /// `ceil(total / limit)`, 0 for an empty listing.
    pub fn total_pages(&self) -> usize {
        crate::pagination::total_pages(self.total, self.limit)
    }
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Home page hero banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    /// Server id.
    pub id: RecordId,
    /// Admin-facing title.
    #[serde(default)]
    pub title: String,
    /// Server-relative image path.
    #[serde(default)]
    pub image: Option<String>,
    /// Optional click-through target.
    #[serde(default)]
    pub link: Option<String>,
    /// `Active` or `Inactive`.
    #[serde(default)]
    pub status: Option<String>,
}

impl Banner {
    /// Whether the banner is switched on. Missing status counts as active.
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .map(|status| status.trim().eq_ignore_ascii_case("active"))
            .unwrap_or(true)
    }
}

/// One line of the scrolling flash-news ticker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlashNews {
    /// Server id.
    pub id: RecordId,
    /// Headline text.
    #[serde(default)]
    pub title: String,
    /// `active` / `inactive`, compared case-insensitively.
    #[serde(default)]
    pub status: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Promotional video.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Teaser {
    /// Server id.
    pub id: RecordId,
    /// Title shown under the thumbnail.
    #[serde(default)]
    pub video_title: String,
    /// YouTube URL in any of its common shapes.
    #[serde(default)]
    pub video_url: String,
    /// Whether the teaser is published.
    #[serde(default, deserialize_with = "de_flag")]
    pub active_inactive: bool,
    /// Publication date.
    #[serde(default)]
    pub published_date: Option<String>,
    /// Explicit thumbnail overriding the YouTube one.
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Square or banner advertisement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advertisement {
    /// Server id.
    pub id: RecordId,
    /// Admin-facing title.
    #[serde(default)]
    pub title: String,
    /// Server-relative image path.
    #[serde(default)]
    pub image: Option<String>,
    /// Optional click-through target.
    #[serde(default)]
    pub link: Option<String>,
    /// Placement page label, e.g. `Home` or `Cinema News`.
    #[serde(default)]
    pub page_type: Option<String>,
    /// Manual display order, ascending. Unparseable orders sort last.
    #[serde(default = "default_order", deserialize_with = "de_order")]
    pub order: i64,
    /// Enabled flag.
    #[serde(default, deserialize_with = "de_flag")]
    pub status: bool,
    /// Whether a "Contact Us" button is overlaid.
    #[serde(default, deserialize_with = "de_flag")]
    pub show_contact: bool,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_order() -> i64 {
    i64::MAX
}

impl Default for Advertisement {
    fn default() -> Self {
        Advertisement {
            id: RecordId::default(),
            title: String::new(),
            image: None,
            link: None,
            page_type: None,
            order: default_order(),
            status: false,
            show_contact: false,
            created_at: None,
        }
    }
}

/// Successful response of `POST /admin/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token attached to every admin request.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Usually `bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Records that carry a creation timestamp.
pub trait Timestamped {
    /// Raw creation timestamp, if any.
    fn created_at(&self) -> Option<&str>;

    /// Parsed creation timestamp.
    fn created_time(&self) -> Option<DateTime<Utc>> {
        self.created_at().and_then(parse_timestamp)
    }
}

impl Timestamped for ArticleRecord {
    fn created_at(&self) -> Option<&str> {
        self.created_at
            .as_deref()
            .or(self.published_date.as_deref())
            .or(self.date.as_deref())
    }
}

impl Timestamped for FlashNews {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

impl Timestamped for Teaser {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref().or(self.published_date.as_deref())
    }
}

impl Timestamped for Advertisement {
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
}

/// Sort newest first by creation time. Records without a parseable
/// timestamp keep their relative order at the end.
pub fn sort_newest_first<T: Timestamped>(items: &mut [T]) {
    items.sort_by(|a, b| match (a.created_time(), b.created_time()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn article_tolerates_missing_fields_and_numeric_id() {
        let record: ArticleRecord = serde_json::from_value(json!({
            "id": 42,
            "title": "Launch",
            "slug": "launch",
            "trending": "true",
            "tags": ["[\"a\",\"b\"]"]
        }))
        .expect("decode");
        assert_eq!(record.id.to_string(), "42");
        assert!(record.trending);
        assert_eq!(record.tags, RawTags::List(vec!["[\"a\",\"b\"]".to_string()]));
        assert_eq!(record.author, None);
        assert_eq!(record.content, "");
    }

    #[test]
    fn tags_accept_string_and_null() {
        let text: ArticleRecord =
            serde_json::from_value(json!({"id": "x", "tags": "a, b"})).expect("decode");
        assert_eq!(text.tags, RawTags::Text("a, b".into()));

        let null: ArticleRecord =
            serde_json::from_value(json!({"id": "x", "tags": null})).expect("decode");
        assert_eq!(null.tags, RawTags::Missing);
    }

    #[test]
    fn paginated_defaults_and_total_pages() {
        let page: Paginated<ArticleRecord> =
            serde_json::from_value(json!({"total": 25, "items": []})).expect("decode");
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 12);
        assert_eq!(page.total_pages(), 3);
        assert_eq!(Paginated::<ArticleRecord>::empty().total_pages(), 0);
    }

    #[test]
    fn advertisement_flags_and_order_are_lenient() {
        let ad: Advertisement = serde_json::from_value(json!({
            "id": 1,
            "page_type": "Home",
            "order": "2",
            "status": "true",
            "show_contact": 0
        }))
        .expect("decode");
        assert_eq!(ad.order, 2);
        assert!(ad.status);
        assert!(!ad.show_contact);

        let unordered: Advertisement =
            serde_json::from_value(json!({"id": 2, "order": "first"})).expect("decode");
        assert_eq!(unordered.order, i64::MAX);
    }

    #[test]
    fn advertisement_default_order_matches_missing_order() {
        let decoded: Advertisement = serde_json::from_value(json!({"id": 3})).expect("decode");
        assert_eq!(decoded.order, Advertisement::default().order);
        assert_eq!(Advertisement::default().order, i64::MAX);
    }

    #[test]
    fn banner_status_defaults_to_active() {
        let banner = Banner::default();
        assert!(banner.is_active());
        let off = Banner {
            status: Some("Inactive".into()),
            ..Banner::default()
        };
        assert!(!off.is_active());
    }

    #[test]
    fn newest_first_puts_undated_records_last() {
        let mut items = vec![
            ArticleRecord {
                id: "old".into(),
                created_at: Some("2024-01-01T10:00:00".into()),
                ..ArticleRecord::default()
            },
            ArticleRecord {
                id: "undated".into(),
                ..ArticleRecord::default()
            },
            ArticleRecord {
                id: "new".into(),
                created_at: Some("2024-03-05T08:00:00Z".into()),
                ..ArticleRecord::default()
            },
        ];
        sort_newest_first(&mut items);
        let ids: Vec<_> = items.iter().map(|item| item.id.to_string()).collect();
        assert_eq!(ids, ["new", "old", "undated"]);
    }
}
