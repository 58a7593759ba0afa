//! Article categories as they appear in reader-facing URLs.

use std::fmt;

use crate::endpoints::Collection;

/// Category segment of `/:category/:slug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleCategory {
    /// `news`
    LatestNews,
    /// `cinema-news`
    CinemaNews,
    /// `meet-person`
    MeetPerson,
    /// `more-news`
    MoreNews,
    /// `trending-news`
    TrendingNews,
}

impl ArticleCategory {
    /// Every routable category.
    pub const ALL: [ArticleCategory; 5] = [
        ArticleCategory::LatestNews,
        ArticleCategory::CinemaNews,
        ArticleCategory::MeetPerson,
        ArticleCategory::MoreNews,
        ArticleCategory::TrendingNews,
    ];

    /// Resolve a URL token. Anything outside the fixed table is `None`, and
    /// callers render the not-found route without fetching.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.token() == token)
    }

    /// Token used in article URLs.
    pub fn token(self) -> &'static str {
        match self {
            ArticleCategory::LatestNews => "news",
            ArticleCategory::CinemaNews => "cinema-news",
            ArticleCategory::MeetPerson => "meet-person",
            ArticleCategory::MoreNews => "more-news",
            ArticleCategory::TrendingNews => "trending-news",
        }
    }

    /// API collection holding the category's records.
    pub fn collection(self) -> Collection {
        match self {
            ArticleCategory::LatestNews => Collection::News,
            ArticleCategory::CinemaNews => Collection::CinemaNews,
            ArticleCategory::MeetPerson => Collection::MeetPerson,
            ArticleCategory::MoreNews => Collection::MoreNews,
            ArticleCategory::TrendingNews => Collection::TrendingNews,
        }
    }

    /// API resource segment.
    pub fn resource(self) -> &'static str {
        self.collection().segment()
    }

    /// Single-record lookup path.
    pub fn detail_path(self, slug: &str) -> String {
        format!("/{}/api/{}", self.resource(), urlencoding::encode(slug.trim()))
    }

    /// Section heading.
    pub fn label(self) -> &'static str {
        match self {
            ArticleCategory::LatestNews => "Latest News",
            ArticleCategory::CinemaNews => "Cinema News",
            ArticleCategory::MeetPerson => "Meet The Person",
            ArticleCategory::MoreNews => "More News",
            ArticleCategory::TrendingNews => "Trending News",
        }
    }

    /// Reader listing page of the category. Trending has none of its own.
    pub fn listing_route(self) -> Option<&'static str> {
        match self {
            ArticleCategory::LatestNews => Some("/latestnews"),
            ArticleCategory::CinemaNews => Some("/cinemanews"),
            ArticleCategory::MeetPerson => Some("/meettheperson"),
            ArticleCategory::MoreNews => Some("/more"),
            ArticleCategory::TrendingNews => None,
        }
    }

    /// Reader URL path of one article.
    pub fn article_path(self, slug: &str) -> String {
        format!("/{}/{}", self.token(), slug.trim())
    }
}

impl fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens_resolve() {
        for category in ArticleCategory::ALL {
            assert_eq!(ArticleCategory::from_token(category.token()), Some(category));
        }
        assert_eq!(
            ArticleCategory::from_token("cinema-news").map(ArticleCategory::resource),
            Some("cinema-news")
        );
        assert_eq!(ArticleCategory::LatestNews.resource(), "news");
    }

    #[test]
    fn unknown_tokens_do_not_resolve() {
        for token in ["unknown-category", "latest-news", "", "News", "teaser-and-promo"] {
            assert_eq!(ArticleCategory::from_token(token), None, "{token}");
        }
    }

    #[test]
    fn paths() {
        assert_eq!(ArticleCategory::MeetPerson.detail_path("a-chat"), "/meet-person/api/a-chat");
        assert_eq!(ArticleCategory::MoreNews.article_path("x"), "/more-news/x");
        assert_eq!(ArticleCategory::TrendingNews.listing_route(), None);
    }
}
