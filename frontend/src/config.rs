//! Build-time and site-wide settings.

use hmedia_shared::media;

/// Content API base URL, read at compile time from `HMEDIA_API_BASE`.
pub const API_BASE: &str = match option_env!("HMEDIA_API_BASE") {
    Some(url) => url,
    None => "http://hmedia-api.channelhmedia.in",
};

pub const SITE_NAME: &str = "Channel H Media";

/// Used when `window.location` is unavailable.
pub const SITE_ORIGIN_FALLBACK: &str = "https://channelhmedia.in";

pub const DEFAULT_DESCRIPTION: &str =
    "Channel H Media brings you the latest Malayalam news, cinema updates, interviews and \
     exclusive teasers.";

pub const DEFAULT_OG_IMAGE: &str = "/logo.png";

/// Advertising enquiries, the target of every "Contact Us" button on ads.
pub const CONTACT_EMAIL: &str = "hmediachannel@gmail.com";

/// General contact address listed in the footer.
pub const SITE_CONTACT_EMAIL: &str = "admin@channelhmedia.in";

pub const YOUTUBE_CHANNEL: &str = "https://www.youtube.com/@ChannelHmediaOfficial";
pub const FACEBOOK_PAGE: &str = "https://www.facebook.com/channelhmedia";
pub const INSTAGRAM_PAGE: &str = "https://www.instagram.com/channel_hmedia";

/// Client-side page size of the Latest News listing.
pub const LATEST_NEWS_PER_PAGE: usize = 9;

/// Rows per page in admin tables.
pub const ADMIN_PAGE_SIZE: usize = 10;

/// `localStorage` key holding the admin bearer token.
pub const TOKEN_STORAGE_KEY: &str = "access_token";

/// Absolute URL of a server-relative upload path.
pub fn image_url(path: Option<&str>) -> Option<String> {
    path.and_then(|path| media::image_url(API_BASE, path))
}

/// Origin of the page as the reader sees it, used for share links.
pub fn site_origin() -> String {
    web_sys::window()
        .and_then(|win| win.location().origin().ok())
        .filter(|origin| !origin.is_empty() && origin != "null")
        .unwrap_or_else(|| SITE_ORIGIN_FALLBACK.to_string())
}
