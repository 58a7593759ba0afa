//! Plain-text previews of article HTML for cards and share/SEO metadata,
//! plus the cleaned body injected into the detail page.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker appended to truncated previews.
pub const ELLIPSIS: char = '…';

/// Preview length used on article cards.
pub const CARD_PREVIEW_CHARS: usize = 140;

/// Length used for `description` / `og:description` meta tags.
pub const META_DESCRIPTION_CHARS: usize = 160;

/// Length used in share dialogs.
pub const SHARE_DESCRIPTION_CHARS: usize = 120;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

// A short leading "LABEL:" such as "NEWS:" or "EXCLUSIVE:".
static LABEL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^:.!?<>]{1,40}:(?:\s+|$)").expect("valid label regex"));

/// Entity-decoded, tag-free, whitespace-collapsed text of `html`.
pub fn plain_text(html: &str) -> String {
    let decoded = html_escape::decode_html_entities(html);
    let stripped = TAG_RE.replace_all(&decoded, " ");
    collapse_whitespace(&stripped)
}

/// Card/share preview: [`plain_text`] without a leading label, cut to
/// `limit` characters with an ellipsis when longer.
pub fn summarize(html: &str, limit: usize) -> String {
    let text = plain_text(html);
    let text = LABEL_RE.replace(&text, "");
    truncate_chars(text.trim(), limit)
}

/// Cut `text` to at most `limit` characters, appending [`ELLIPSIS`] when
/// anything was removed. Counts characters, never bytes.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        None => text.to_string(),
        Some((byte_idx, _)) => {
            let mut out = text[..byte_idx].trim_end().to_string();
            out.push(ELLIPSIS);
            out
        },
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_youtube_embed(src: &str) -> bool {
    let src = src.trim();
    ["https://www.youtube.com/embed/", "https://youtube.com/embed/", "https://www.youtube-nocookie.com/embed/"]
        .iter()
        .any(|prefix| src.starts_with(prefix))
}

/// Article body ready for `innerHTML`: entities decoded (the editor stores
/// some bodies escaped), whitespace collapsed, and the markup cleaned of
/// scripts, handlers and foreign iframes. YouTube embeds survive.
pub fn sanitize_body(html: &str) -> String {
    let decoded = html_escape::decode_html_entities(html);
    let collapsed = collapse_whitespace(&decoded);
    if collapsed.is_empty() {
        return String::new();
    }

    ammonia::Builder::default()
        .add_tags(["iframe"])
        .add_tag_attributes("iframe", ["src", "allowfullscreen", "frameborder", "width", "height"])
        .add_generic_attributes(["class"])
        .attribute_filter(|element, attribute, value| {
            if element == "iframe" && attribute == "src" && !is_youtube_embed(value) {
                None
            } else {
                Some(Cow::Borrowed(value))
            }
        })
        .clean(&collapsed)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_tags_and_truncation() {
        assert_eq!(summarize("<p>NEWS: Hello <b>world</b></p>", 5), "Hello…");
    }

    #[test]
    fn short_text_is_not_marked() {
        assert_eq!(summarize("<p>Hello</p>", 5), "Hello");
        assert_eq!(summarize("", 10), "");
    }

    #[test]
    fn entities_are_decoded_before_stripping() {
        assert_eq!(plain_text("Tom &amp; Jerry&nbsp;&lt;b&gt;live&lt;/b&gt;"), "Tom & Jerry live");
    }

    #[test]
    fn sentence_with_colon_late_is_kept() {
        let html = "<p>The director said this week that the film: arrives soon.</p>";
        assert_eq!(
            summarize(html, 200),
            "The director said this week that the film: arrives soon."
        );
    }

    #[test]
    fn only_first_label_is_removed() {
        assert_eq!(summarize("BREAKING: UPDATE: done", 100), "UPDATE: done");
    }

    #[test]
    fn multibyte_text_truncates_on_char_boundary() {
        let text = "മലയാളം സിനിമ വാർത്ത";
        assert_eq!(summarize(text, 6), "മലയാളം…");
        assert_eq!(truncate_chars(text, 100), text);
    }

    #[test]
    fn whitespace_is_collapsed() {
        assert_eq!(plain_text("<p>a\n\n  b</p><p>c</p>"), "a b c");
    }

    #[test]
    fn body_is_sanitized() {
        let html = r#"<p onclick="x()">Hi<script>alert(1)</script></p><iframe src="https://evil.example/x"></iframe>"#;
        let clean = sanitize_body(html);
        assert!(clean.contains("<p>Hi</p>"));
        assert!(!clean.contains("script"));
        assert!(!clean.contains("onclick"));
        assert!(!clean.contains("evil.example"));
    }

    #[test]
    fn youtube_embed_survives() {
        let html = r#"<iframe class="ql-video" src="https://www.youtube.com/embed/abcdefghijk" allowfullscreen="true"></iframe>"#;
        let clean = sanitize_body(html);
        assert!(clean.contains("https://www.youtube.com/embed/abcdefghijk"));
    }

    #[test]
    fn escaped_body_is_decoded() {
        assert_eq!(sanitize_body("&lt;p&gt;Hello&lt;/p&gt;"), "<p>Hello</p>");
    }
}
