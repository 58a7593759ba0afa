//! Path table of the content API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Form-encoded login.
pub const LOGIN_PATH: &str = "/admin/login";

/// Token revocation.
pub const LOGOUT_PATH: &str = "/admin/logout";

/// Join a base URL and an API path with exactly one `/` between them.
pub fn join(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{base}/{path}")
}

/// Every collection the API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    /// Latest news articles.
    News,
    /// Cinema news articles.
    CinemaNews,
    /// Extra stories shown under "More".
    MoreNews,
    /// Interviews.
    MeetPerson,
    /// Articles flagged as trending.
    TrendingNews,
    /// Promotional videos.
    TeaserAndPromo,
    /// Home page hero banners.
    Banner,
    /// Ticker headlines.
    FlashNews,
    /// Full-width advertisements.
    BannerAds,
    /// Sidebar advertisements.
    SquareAds,
}

impl Collection {
    /// All collections, in the order the CLI lists them.
    pub const ALL: [Collection; 10] = [
        Collection::News,
        Collection::CinemaNews,
        Collection::MoreNews,
        Collection::MeetPerson,
        Collection::TrendingNews,
        Collection::TeaserAndPromo,
        Collection::Banner,
        Collection::FlashNews,
        Collection::BannerAds,
        Collection::SquareAds,
    ];

    /// URL segment of the collection.
    pub fn segment(self) -> &'static str {
        match self {
            Collection::News => "news",
            Collection::CinemaNews => "cinema-news",
            Collection::MoreNews => "more-news",
            Collection::MeetPerson => "meet-person",
            Collection::TrendingNews => "trending-news",
            Collection::TeaserAndPromo => "teaser-and-promo",
            Collection::Banner => "banner",
            Collection::FlashNews => "flash-news",
            Collection::BannerAds => "banner-ads",
            Collection::SquareAds => "square-ads",
        }
    }

    /// Parse a URL segment.
    pub fn from_segment(segment: &str) -> Option<Self> {
        let segment = segment.trim().trim_matches('/');
        Self::ALL.into_iter().find(|c| c.segment() == segment)
    }

    /// Whether the listing endpoints return article-like records.
    pub fn is_article(self) -> bool {
        matches!(
            self,
            Collection::News
                | Collection::CinemaNews
                | Collection::MoreNews
                | Collection::MeetPerson
                | Collection::TrendingNews
        )
    }

    /// Whether the API offers `/limit` and `/paginate` variants.
    pub fn is_paginated(self) -> bool {
        self.is_article() || self == Collection::TeaserAndPromo
    }

    /// Full collection.
    pub fn list_path(self) -> String {
        format!("/{}/", self.segment())
    }

    /// Most recent handful, used by home page sections.
    pub fn limit_path(self) -> String {
        format!("/{}/limit", self.segment())
    }

    /// Server-paginated listing.
    pub fn paginate_path(self, page: usize) -> String {
        format!("/{}/paginate?page={}", self.segment(), page.max(1))
    }

    /// Create endpoint (also the admin listing for some collections).
    ///
    /// The API is inconsistent about trailing slashes; these paths match
    /// what it routes without a redirect.
    pub fn admin_path(self) -> String {
        match self {
            Collection::News | Collection::Banner | Collection::TeaserAndPromo => {
                format!("/admin/{}", self.segment())
            },
            other => format!("/admin/{}/", other.segment()),
        }
    }

    /// Update/delete endpoint for one record.
    pub fn admin_item_path(self, id: &str) -> String {
        let id = urlencoding::encode(id.trim());
        format!("/admin/{}/{}", self.segment(), id)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_triplet() {
        let c = Collection::CinemaNews;
        assert_eq!(c.list_path(), "/cinema-news/");
        assert_eq!(c.limit_path(), "/cinema-news/limit");
        assert_eq!(c.paginate_path(3), "/cinema-news/paginate?page=3");
        assert_eq!(c.paginate_path(0), "/cinema-news/paginate?page=1");
    }

    #[test]
    fn admin_paths() {
        assert_eq!(Collection::News.admin_path(), "/admin/news");
        assert_eq!(Collection::MeetPerson.admin_path(), "/admin/meet-person/");
        assert_eq!(Collection::SquareAds.admin_path(), "/admin/square-ads/");
        assert_eq!(Collection::TrendingNews.admin_item_path("7"), "/admin/trending-news/7");
        assert_eq!(Collection::Banner.admin_item_path("a b"), "/admin/banner/a%20b");
    }

    #[test]
    fn segments_round_trip() {
        for c in Collection::ALL {
            assert_eq!(Collection::from_segment(c.segment()), Some(c));
            assert_eq!(c.to_string(), c.segment());
        }
        assert_eq!(Collection::from_segment("/banner-ads/"), Some(Collection::BannerAds));
        assert_eq!(Collection::from_segment("videos"), None);
        assert!(Collection::TeaserAndPromo.is_paginated());
        assert!(!Collection::Banner.is_paginated());
    }

    #[test]
    fn join_handles_slashes() {
        assert_eq!(join("http://a/", "/news/"), "http://a/news/");
        assert_eq!(join("http://a", "news"), "http://a/news");
        assert_eq!(join("http://a/", ""), "http://a");
    }
}
