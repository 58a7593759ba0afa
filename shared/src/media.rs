//! Image and video URL helpers.

use once_cell::sync::Lazy;
use regex::Regex;

static YOUTUBE_PATTERNS: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"[?&]v=([^&#]+)").expect("watch pattern"),
        Regex::new(r"youtu\.be/([^?&/#]+)").expect("short link pattern"),
        Regex::new(r"/embed/([^?&/#]+)").expect("embed pattern"),
    ]
});

static BARE_VIDEO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Za-z0-9_-]{11})").expect("bare id pattern"));

static STRICT_YOUTUBE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:https?://)?(?:www\.)?(?:youtube\.com/(?:[^/\s]+/\S+/|(?:v|e(?:mbed)?)/|\S*?[?&]v=)|youtu\.be/)([A-Za-z0-9_-]{11})",
    )
    .expect("strict youtube pattern")
});

/// Absolute URL for a server-relative image path.
///
/// Windows-style separators from the upload store are turned into `/`;
/// values that are already absolute pass through untouched.
pub fn image_url(base: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("data:") {
        return Some(path.to_string());
    }
    let normalized = path.replace('\\', "/");
    Some(crate::endpoints::join(base, &normalized))
}

/// Video id from any of the YouTube URL shapes editors paste.
pub fn youtube_id(url: &str) -> Option<String> {
    let url = url.trim();
    if url.is_empty() {
        return None;
    }
    for pattern in YOUTUBE_PATTERNS.iter() {
        if let Some(id) = pattern.captures(url).and_then(|caps| caps.get(1)) {
            return Some(id.as_str().to_string());
        }
    }
    let bare = BARE_VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string());
    if bare.is_none() {
        tracing::warn!(url, "unable to parse YouTube id");
    }
    bare
}

/// Video id of a well-formed YouTube URL. Used to validate the teaser form,
/// so bare ids and foreign hosts are rejected.
pub fn strict_youtube_id(url: &str) -> Option<String> {
    STRICT_YOUTUBE_URL
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
}

/// Whether `url` is a YouTube link the teaser form accepts.
pub fn is_youtube_url(url: &str) -> bool {
    strict_youtube_id(url).is_some()
}

/// High-quality thumbnail for a video id.
pub fn youtube_thumbnail(id: &str) -> String {
    format!("https://img.youtube.com/vi/{id}/hqdefault.jpg")
}

/// Autoplaying embed used by the video modal.
pub fn youtube_embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}?autoplay=1&rel=0")
}

/// Canonical watch URL, used to prefill the teaser edit form.
pub fn youtube_watch_url(id: &str) -> String {
    format!("https://www.youtube.com/watch?v={id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://api.example";

    #[test]
    fn image_paths_are_normalized() {
        assert_eq!(
            image_url(BASE, r"uploads\news\a.jpg").as_deref(),
            Some("http://api.example/uploads/news/a.jpg")
        );
        assert_eq!(
            image_url("http://api.example/", "/uploads/b.png").as_deref(),
            Some("http://api.example/uploads/b.png")
        );
        assert_eq!(
            image_url(BASE, "https://cdn.example/c.jpg").as_deref(),
            Some("https://cdn.example/c.jpg")
        );
        assert_eq!(image_url(BASE, "  "), None);
    }

    #[test]
    fn youtube_ids_from_common_shapes() {
        let id = "dQw4w9WgXcQ";
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=10",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "dQw4w9WgXcQ",
        ] {
            assert_eq!(youtube_id(url).as_deref(), Some(id), "{url}");
        }
        assert_eq!(youtube_id(""), None);
        assert_eq!(youtube_id("not a video"), None);
    }

    #[test]
    fn strict_form_validation() {
        assert!(is_youtube_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(is_youtube_url("youtu.be/dQw4w9WgXcQ"));
        assert!(is_youtube_url("https://youtube.com/embed/dQw4w9WgXcQ"));
        assert!(!is_youtube_url("dQw4w9WgXcQ"));
        assert!(!is_youtube_url("https://vimeo.com/123456"));
        assert!(!is_youtube_url("https://youtu.be/short"));
    }

    #[test]
    fn derived_urls() {
        assert_eq!(youtube_thumbnail("abc"), "https://img.youtube.com/vi/abc/hqdefault.jpg");
        assert_eq!(youtube_embed_url("abc"), "https://www.youtube.com/embed/abc?autoplay=1&rel=0");
        assert_eq!(youtube_watch_url("abc"), "https://www.youtube.com/watch?v=abc");
    }
}
