//! Admin form drafts: validation before any request is made, and the text
//! parts of the multipart body sent once validation passes.

use std::collections::BTreeMap;

use crate::{
    ads::{AdShape, PlacementPage},
    dates::{date_to_iso, input_date},
    media::is_youtube_url,
    models::{Advertisement, ArticleRecord, Banner, FlashNews, Teaser},
    tags::TagSet,
};

/// Largest accepted image upload (5 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 5 * 1024 * 1024;

/// What a rich-text editor leaves behind when emptied.
const EMPTY_EDITOR_BODY: &str = "<p><br></p>";

/// Normalize free text into a URL slug: lowercase, spaces to `-`, anything
/// outside `[a-z0-9-]` dropped, dash runs collapsed.
pub fn format_slug(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_space = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            slug.push('-');
            pending_space = false;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            slug.push(ch);
        }
    }

    let mut collapsed = String::with_capacity(slug.len());
    for ch in slug.chars() {
        if ch == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(ch);
    }
    collapsed
}

/// Image orientation read from its pixel dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Wider than tall.
    Landscape,
    /// Taller than wide.
    Portrait,
    /// Equal sides.
    Square,
}

impl Orientation {
    /// Classify `width x height`.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        match width.cmp(&height) {
            std::cmp::Ordering::Greater => Orientation::Landscape,
            std::cmp::Ordering::Less => Orientation::Portrait,
            std::cmp::Ordering::Equal => Orientation::Square,
        }
    }
}

/// Check a picked image before it is previewed or uploaded.
pub fn check_upload(size_bytes: u64, orientation: Orientation, require_landscape: bool) -> Result<(), String> {
    if size_bytes > MAX_UPLOAD_BYTES {
        return Err("Image must be under 5MB.".to_string());
    }
    if require_landscape && orientation != Orientation::Landscape {
        return Err("Please upload a landscape image.".to_string());
    }
    Ok(())
}

/// Validation messages keyed by form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    /// Record a message for `field`. The first message wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    /// Message for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Fields with errors, in name order.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.keys().copied()
    }

    /// Clear the message of one field once the user edits it.
    pub fn clear(&mut self, field: &str) {
        self.errors.remove(field);
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

fn flag(value: bool) -> String {
    value.to_string()
}

fn status_label(active: bool) -> String {
    if active { "Active" } else { "Inactive" }.to_string()
}

/// A draft that can be encoded as multipart text fields. Any image part is
/// appended by the caller.
pub trait MultipartDraft {
    /// Check required fields.
    fn validate(&self) -> Result<(), FieldErrors>;

    /// `(name, value)` pairs for the multipart body.
    fn text_fields(&self) -> Vec<(&'static str, String)>;
}

/// Article form shared by the four article collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleDraft {
    /// Headline.
    pub title: String,
    /// URL key, already passed through [`format_slug`] while typing.
    pub slug: String,
    /// Byline.
    pub author: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// HTML body.
    pub content: String,
    /// Also list under trending.
    pub trending: bool,
    /// Tags being edited.
    pub tags: TagSet,
    /// A new file is selected or the record already has an image.
    pub has_image: bool,
}

impl ArticleDraft {
    /// Prefill from an existing record for editing.
    pub fn from_record(record: &ArticleRecord) -> Self {
        ArticleDraft {
            title: record.title.clone(),
            slug: record.slug.clone(),
            author: record.author.clone().unwrap_or_default(),
            date: record
                .display_date_raw()
                .and_then(input_date)
                .unwrap_or_default(),
            content: record.content.clone(),
            trending: record.trending,
            tags: TagSet::from_raw(&record.tags),
            has_image: record.image.as_deref().is_some_and(|image| !image.trim().is_empty()),
        }
    }
}

impl MultipartDraft for ArticleDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, "title", &self.title, "Title is required");
        require(&mut errors, "slug", &self.slug, "Slug is required");
        require(&mut errors, "author", &self.author, "Author is required");
        require(&mut errors, "date", &self.date, "Published date is required");
        if !self.date.trim().is_empty() && date_to_iso(&self.date).is_none() {
            errors.add("date", "Published date is invalid");
        }
        let content = self.content.trim();
        if content.is_empty() || content == EMPTY_EDITOR_BODY {
            errors.add("content", "Content is required");
        }
        if !self.has_image {
            errors.add("image", "Image is required.");
        }
        errors.into_result()
    }

    fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.trim().to_string()),
            ("slug", format_slug(&self.slug)),
            ("author", self.author.trim().to_string()),
            ("content", self.content.clone()),
            ("date", date_to_iso(&self.date).unwrap_or_default()),
            ("trending", flag(self.trending)),
            ("tags", self.tags.to_json()),
        ]
    }
}

/// Home banner form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerDraft {
    /// Admin-facing title.
    pub title: String,
    /// Shown on the home page.
    pub active: bool,
    /// A new file is selected or the banner already has an image.
    pub has_image: bool,
}

impl Default for BannerDraft {
    fn default() -> Self {
        BannerDraft {
            title: String::new(),
            active: true,
            has_image: false,
        }
    }
}

impl BannerDraft {
    /// Prefill from an existing banner.
    pub fn from_record(banner: &Banner) -> Self {
        BannerDraft {
            title: banner.title.clone(),
            active: banner.is_active(),
            has_image: banner.image.is_some(),
        }
    }
}

impl MultipartDraft for BannerDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, "title", &self.title, "Title is required.");
        if !self.has_image {
            errors.add("image", "Banner image is required.");
        }
        errors.into_result()
    }

    fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![("title", self.title.trim().to_string()), ("status", status_label(self.active))]
    }
}

/// Flash-news form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashNewsDraft {
    /// Ticker text.
    pub title: String,
    /// Shown in the ticker.
    pub active: bool,
}

impl Default for FlashNewsDraft {
    fn default() -> Self {
        FlashNewsDraft {
            title: String::new(),
            active: true,
        }
    }
}

impl FlashNewsDraft {
    /// Prefill from an existing headline.
    pub fn from_record(item: &FlashNews) -> Self {
        FlashNewsDraft {
            title: item.title.clone(),
            active: item
                .status
                .as_deref()
                .map_or(true, |status| status.trim().eq_ignore_ascii_case("active")),
        }
    }
}

impl MultipartDraft for FlashNewsDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, "title", &self.title, "Title is required.");
        errors.into_result()
    }

    fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![("title", self.title.trim().to_string()), ("status", status_label(self.active))]
    }
}

/// Square or banner advertisement form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvertisementDraft {
    /// Which collection the ad goes to.
    pub shape: AdShape,
    /// Admin-facing title.
    pub title: String,
    /// Placement page.
    pub page: PlacementPage,
    /// Display order as typed.
    pub order: String,
    /// Click-through target.
    pub link: String,
    /// Enabled.
    pub active: bool,
    /// Overlay a "Contact Us" button.
    pub show_contact: bool,
    /// A new file is selected or the ad already has an image.
    pub has_image: bool,
    /// Creation timestamp, sent only when creating.
    pub created_at: Option<String>,
}

impl AdvertisementDraft {
    /// Blank form for a new ad.
    pub fn new(shape: AdShape) -> Self {
        AdvertisementDraft {
            shape,
            title: String::new(),
            page: PlacementPage::Home,
            order: String::new(),
            link: String::new(),
            active: true,
            show_contact: false,
            has_image: false,
            created_at: None,
        }
    }

    /// Prefill from an existing ad.
    pub fn from_record(shape: AdShape, ad: &Advertisement) -> Self {
        AdvertisementDraft {
            shape,
            title: ad.title.clone(),
            page: ad
                .page_type
                .as_deref()
                .and_then(PlacementPage::from_label)
                .unwrap_or(PlacementPage::Home),
            order: if ad.order == i64::MAX { String::new() } else { ad.order.to_string() },
            link: ad.link.clone().unwrap_or_default(),
            active: ad.status,
            show_contact: ad.show_contact,
            has_image: ad.image.is_some(),
            created_at: None,
        }
    }
}

impl MultipartDraft for AdvertisementDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, "title", &self.title, "Title is required.");
        if !self.has_image {
            errors.add("image", "An image is required.");
        }
        require(&mut errors, "order", &self.order, "Order is required.");
        if !self.order.trim().is_empty() && self.order.trim().parse::<i64>().is_err() {
            errors.add("order", "Order must be a whole number.");
        }
        errors.into_result()
    }

    fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("title", self.title.trim().to_string()),
            ("page_type", self.page.label().to_string()),
            ("order", self.order.trim().to_string()),
            ("link", self.link.trim().to_string()),
            ("status", flag(self.active)),
            ("show_contact", flag(self.show_contact)),
        ];
        if let Some(created_at) = &self.created_at {
            fields.push(("created_at", created_at.clone()));
        }
        fields
    }
}

/// Teaser/promo video form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeaserDraft {
    /// Title under the thumbnail.
    pub title: String,
    /// YouTube link.
    pub url: String,
    /// Published.
    pub active: bool,
    /// `YYYY-MM-DD`.
    pub published_date: String,
}

impl Default for TeaserDraft {
    fn default() -> Self {
        TeaserDraft {
            title: String::new(),
            url: String::new(),
            active: true,
            published_date: String::new(),
        }
    }
}

impl TeaserDraft {
    /// Prefill from an existing teaser.
    pub fn from_record(teaser: &Teaser) -> Self {
        TeaserDraft {
            title: teaser.video_title.clone(),
            url: teaser.video_url.clone(),
            active: teaser.active_inactive,
            published_date: teaser
                .published_date
                .as_deref()
                .and_then(input_date)
                .unwrap_or_default(),
        }
    }
}

impl MultipartDraft for TeaserDraft {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, "title", &self.title, "Title is required.");
        if self.url.trim().is_empty() {
            errors.add("url", "YouTube URL is required.");
        } else if !is_youtube_url(&self.url) {
            errors.add("url", "Please enter a valid YouTube URL.");
        }
        require(&mut errors, "published_date", &self.published_date, "Published date is required.");
        if !self.published_date.trim().is_empty() && input_date(&self.published_date).is_none() {
            errors.add("published_date", "Published date is invalid.");
        }
        errors.into_result()
    }

    fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("video_title", self.title.trim().to_string()),
            ("video_url", self.url.trim().to_string()),
            ("active_inactive", flag(self.active)),
            (
                "published_date",
                input_date(&self.published_date).unwrap_or_else(|| self.published_date.trim().to_string()),
            ),
        ]
    }
}

/// Admin login form. Sent form-encoded, not multipart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    /// Account name.
    pub username: String,
    /// Password.
    pub password: String,
}

impl LoginDraft {
    /// Both fields are required.
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        require(&mut errors, "username", &self.username, "Username is required");
        require(&mut errors, "password", &self.password, "Password is required");
        errors.into_result()
    }

    /// `application/x-www-form-urlencoded` body.
    pub fn form_body(&self) -> String {
        format!(
            "username={}&password={}",
            urlencoding::encode(self.username.trim()),
            urlencoding::encode(&self.password)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawTags;

    fn field<'a>(fields: &'a [(&'static str, String)], name: &str) -> Option<&'a str> {
        fields.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    #[test]
    fn slug_formatting() {
        assert_eq!(format_slug("  Hello World  "), "hello-world");
        assert_eq!(format_slug("Mohanlal's New Film!!"), "mohanlals-new-film");
        assert_eq!(format_slug("a -- b"), "a-b");
        assert_eq!(format_slug("ഹലോ film"), "-film");
        assert_eq!(format_slug(""), "");
    }

    #[test]
    fn orientation_and_upload_checks() {
        assert_eq!(Orientation::from_dimensions(1600, 900), Orientation::Landscape);
        assert_eq!(Orientation::from_dimensions(900, 1600), Orientation::Portrait);
        assert_eq!(Orientation::from_dimensions(500, 500), Orientation::Square);

        assert!(check_upload(1024, Orientation::Landscape, true).is_ok());
        assert!(check_upload(1024, Orientation::Square, false).is_ok());
        assert_eq!(
            check_upload(1024, Orientation::Portrait, true),
            Err("Please upload a landscape image.".to_string())
        );
        assert!(check_upload(MAX_UPLOAD_BYTES + 1, Orientation::Landscape, true).is_err());
    }

    #[test]
    fn empty_article_reports_every_field() {
        let errors = ArticleDraft::default().validate().unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, ["author", "content", "date", "image", "slug", "title"]);
    }

    #[test]
    fn emptied_editor_counts_as_missing_content() {
        let draft = ArticleDraft {
            title: "t".into(),
            slug: "t".into(),
            author: "a".into(),
            date: "2024-01-05".into(),
            content: "<p><br></p>".into(),
            has_image: true,
            ..ArticleDraft::default()
        };
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get("content"), Some("Content is required"));
        assert_eq!(errors.fields().count(), 1);
    }

    #[test]
    fn article_multipart_fields() {
        let mut tags = TagSet::default();
        tags.add("kerala");
        let draft = ArticleDraft {
            title: " Title ".into(),
            slug: "My Slug".into(),
            author: "Desk".into(),
            date: "2024-01-05".into(),
            content: "<p>x</p>".into(),
            trending: true,
            tags,
            has_image: true,
        };
        assert!(draft.validate().is_ok());
        let fields = draft.text_fields();
        assert_eq!(field(&fields, "title"), Some("Title"));
        assert_eq!(field(&fields, "slug"), Some("my-slug"));
        assert_eq!(field(&fields, "date"), Some("2024-01-05T00:00:00.000Z"));
        assert_eq!(field(&fields, "trending"), Some("true"));
        assert_eq!(field(&fields, "tags"), Some(r#"["kerala"]"#));
    }

    #[test]
    fn article_prefill_from_record() {
        let record = ArticleRecord {
            title: "T".into(),
            date: Some("2024-03-01T00:00:00Z".into()),
            image: Some("uploads/a.jpg".into()),
            tags: RawTags::Text("a,b".into()),
            ..ArticleRecord::default()
        };
        let draft = ArticleDraft::from_record(&record);
        assert_eq!(draft.date, "2024-03-01");
        assert!(draft.has_image);
        assert_eq!(draft.tags.as_slice(), ["a", "b"]);
    }

    #[test]
    fn banner_and_flash_status_labels() {
        let banner = BannerDraft {
            title: "Onam".into(),
            active: false,
            has_image: true,
        };
        assert_eq!(field(&banner.text_fields(), "status"), Some("Inactive"));
        assert!(BannerDraft::default().validate().is_err());

        let flash = FlashNewsDraft::from_record(&FlashNews {
            title: "Breaking".into(),
            status: Some("inactive".into()),
            ..FlashNews::default()
        });
        assert!(!flash.active);
        assert_eq!(field(&flash.text_fields(), "status"), Some("Inactive"));
        assert_eq!(
            FlashNewsDraft::default().validate().unwrap_err().get("title"),
            Some("Title is required.")
        );
    }

    #[test]
    fn advertisement_fields_and_order_validation() {
        let mut draft = AdvertisementDraft::new(AdShape::Square);
        draft.title = "Jewellers".into();
        draft.page = PlacementPage::CinemaNews;
        draft.order = "x".into();
        draft.has_image = true;
        assert_eq!(
            draft.validate().unwrap_err().get("order"),
            Some("Order must be a whole number.")
        );

        draft.order = "2".into();
        draft.created_at = Some("2024-01-05T00:00:00.000Z".into());
        assert!(draft.validate().is_ok());
        let fields = draft.text_fields();
        assert_eq!(field(&fields, "page_type"), Some("Cinema News"));
        assert_eq!(field(&fields, "status"), Some("true"));
        assert_eq!(field(&fields, "show_contact"), Some("false"));
        assert_eq!(field(&fields, "created_at"), Some("2024-01-05T00:00:00.000Z"));

        let edit = AdvertisementDraft::from_record(AdShape::Banner, &Advertisement::default());
        assert_eq!(edit.order, "");
        assert_eq!(field(&edit.text_fields(), "created_at"), None);
    }

    #[test]
    fn teaser_requires_youtube_url() {
        let mut draft = TeaserDraft {
            title: "Trailer".into(),
            url: "https://vimeo.com/1".into(),
            published_date: "2024-02-01".into(),
            ..TeaserDraft::default()
        };
        assert_eq!(
            draft.validate().unwrap_err().get("url"),
            Some("Please enter a valid YouTube URL.")
        );
        draft.url = "https://youtu.be/dQw4w9WgXcQ".into();
        assert!(draft.validate().is_ok());
        let fields = draft.text_fields();
        assert_eq!(field(&fields, "active_inactive"), Some("true"));
        assert_eq!(field(&fields, "published_date"), Some("2024-02-01"));
    }

    #[test]
    fn login_validation_and_body() {
        assert_eq!(LoginDraft::default().validate().unwrap_err().fields().count(), 2);
        let draft = LoginDraft {
            username: "editor".into(),
            password: "p@ss word".into(),
        };
        assert!(draft.validate().is_ok());
        assert_eq!(draft.form_body(), "username=editor&password=p%40ss%20word");
    }

    #[test]
    fn clearing_a_field_error() {
        let mut errors = FieldErrors::default();
        errors.add("title", "first");
        errors.add("title", "second");
        assert_eq!(errors.get("title"), Some("first"));
        errors.clear("title");
        assert!(errors.is_empty());
    }
}
