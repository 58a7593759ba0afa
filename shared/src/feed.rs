//! Derived views over fetched collections: the flash-news ticker, teaser
//! cards and the admin dashboard summary.

use crate::{
    dates::display_date,
    media::{youtube_id, youtube_thumbnail},
    models::{sort_newest_first, ArticleRecord, FlashNews, Teaser},
};

/// Articles listed under "recent" on the dashboard.
pub const RECENT_ARTICLES: usize = 3;

/// Ticker lines: active headlines, newest first.
pub fn active_flash_news(items: Vec<FlashNews>) -> Vec<FlashNews> {
    let mut active: Vec<FlashNews> = items
        .into_iter()
        .filter(|item| {
            item.status
                .as_deref()
                .is_some_and(|status| status.trim().eq_ignore_ascii_case("active"))
        })
        .collect();
    sort_newest_first(&mut active);
    active
}

/// Render-ready teaser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeaserCard {
    /// Title under the thumbnail.
    pub title: String,
    /// YouTube id; `None` when the URL could not be parsed.
    pub video_id: Option<String>,
    /// Explicit thumbnail, else the YouTube one.
    pub thumbnail: Option<String>,
    /// Reader-facing publication date.
    pub date: Option<String>,
}

impl TeaserCard {
    /// Resolve the video id and thumbnail of a teaser.
    pub fn from_teaser(teaser: &Teaser) -> Self {
        let video_id = youtube_id(&teaser.video_url);
        let thumbnail = teaser
            .thumbnail
            .clone()
            .filter(|thumbnail| !thumbnail.trim().is_empty())
            .or_else(|| video_id.as_deref().map(youtube_thumbnail));
        TeaserCard {
            title: teaser.video_title.clone(),
            video_id,
            thumbnail,
            date: teaser.published_date.as_deref().and_then(display_date),
        }
    }

    /// Whether the card can open the player.
    pub fn is_playable(&self) -> bool {
        self.video_id.is_some()
    }
}

/// Collections fetched for the dashboard. A failed fetch is an empty list.
#[derive(Debug, Clone, Default)]
pub struct DashboardInput {
    /// Latest news.
    pub latest: Vec<ArticleRecord>,
    /// Cinema news.
    pub cinema: Vec<ArticleRecord>,
    /// Meet the person.
    pub meet: Vec<ArticleRecord>,
    /// More news.
    pub more: Vec<ArticleRecord>,
    /// Number of teasers.
    pub teasers: usize,
    /// Number of home banners.
    pub banners: usize,
}

/// Dashboard counters and the most recent articles across collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    /// `(label, count)` in display order.
    pub counts: Vec<(&'static str, usize)>,
    /// Newest articles from the four article collections.
    pub recent: Vec<ArticleRecord>,
}

impl DashboardStats {
    /// Summarize fetched collections.
    pub fn collect(input: DashboardInput) -> Self {
        let counts = vec![
            ("Latest News", input.latest.len()),
            ("Cinema News", input.cinema.len()),
            ("Meet Person", input.meet.len()),
            ("More News", input.more.len()),
            ("Teasers", input.teasers),
            ("Banners", input.banners),
        ];

        let mut recent: Vec<ArticleRecord> = input
            .latest
            .into_iter()
            .chain(input.cinema)
            .chain(input.meet)
            .chain(input.more)
            .collect();
        sort_newest_first(&mut recent);
        recent.truncate(RECENT_ARTICLES);

        DashboardStats { counts, recent }
    }

    /// Largest counter, used to scale the bar chart.
    pub fn max_count(&self) -> usize {
        self.counts.iter().map(|(_, count)| *count).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flash(id: &str, status: Option<&str>, created_at: &str) -> FlashNews {
        FlashNews {
            id: id.into(),
            title: id.to_string(),
            status: status.map(str::to_string),
            created_at: Some(created_at.to_string()),
        }
    }

    fn article(id: &str, created_at: &str) -> ArticleRecord {
        ArticleRecord {
            id: id.into(),
            created_at: Some(created_at.to_string()),
            ..ArticleRecord::default()
        }
    }

    #[test]
    fn ticker_keeps_active_newest_first() {
        let items = vec![
            flash("old", Some("Active"), "2024-01-01T00:00:00Z"),
            flash("off", Some("inactive"), "2024-06-01T00:00:00Z"),
            flash("none", None, "2024-06-01T00:00:00Z"),
            flash("new", Some("ACTIVE"), "2024-05-01T00:00:00Z"),
        ];
        let ids: Vec<_> = active_flash_news(items).into_iter().map(|i| i.title).collect();
        assert_eq!(ids, ["new", "old"]);
    }

    #[test]
    fn teaser_card_resolution() {
        let teaser = Teaser {
            video_title: "Trailer".into(),
            video_url: "https://youtu.be/dQw4w9WgXcQ".into(),
            published_date: Some("2024-01-05".into()),
            ..Teaser::default()
        };
        let card = TeaserCard::from_teaser(&teaser);
        assert_eq!(card.video_id.as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(
            card.thumbnail.as_deref(),
            Some("https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg")
        );
        assert_eq!(card.date.as_deref(), Some("Jan 5 2024"));

        let broken = TeaserCard::from_teaser(&Teaser {
            video_url: "n/a".into(),
            thumbnail: Some("https://cdn/x.jpg".into()),
            ..Teaser::default()
        });
        assert!(!broken.is_playable());
        assert_eq!(broken.thumbnail.as_deref(), Some("https://cdn/x.jpg"));
    }

    #[test]
    fn dashboard_counts_and_recent() {
        let stats = DashboardStats::collect(DashboardInput {
            latest: vec![article("l1", "2024-01-01T00:00:00Z"), article("l2", "2024-04-01T00:00:00Z")],
            cinema: vec![article("c1", "2024-03-01T00:00:00Z")],
            meet: vec![],
            more: vec![article("m1", "2024-02-01T00:00:00Z")],
            teasers: 7,
            banners: 2,
        });
        assert_eq!(stats.counts[0], ("Latest News", 2));
        assert_eq!(stats.counts[4], ("Teasers", 7));
        assert_eq!(stats.max_count(), 7);
        let ids: Vec<_> = stats.recent.iter().map(|a| a.id.to_string()).collect();
        assert_eq!(ids, ["l2", "c1", "m1"]);
    }
}
