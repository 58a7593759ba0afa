//! Advertisement placement: which ads a page shows, in which order.

use std::fmt;

use serde::Serialize;

use crate::{endpoints::Collection, media::image_url, models::Advertisement};

/// Link value meaning "not clickable".
pub const NO_LINK: &str = "#";

/// Ad format, each with its own collection and per-page cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdShape {
    /// Sidebar tiles.
    Square,
    /// Full-width carousel slides.
    Banner,
}

impl AdShape {
    /// Most ads of this shape on one page.
    pub fn cap(self) -> usize {
        match self {
            AdShape::Square => 3,
            AdShape::Banner => 5,
        }
    }

    /// Collection the ads are stored in.
    pub fn collection(self) -> Collection {
        match self {
            AdShape::Square => Collection::SquareAds,
            AdShape::Banner => Collection::BannerAds,
        }
    }

    /// Whether uploads must be landscape.
    pub fn requires_landscape(self) -> bool {
        self == AdShape::Banner
    }

    /// Admin-facing name.
    pub fn label(self) -> &'static str {
        match self {
            AdShape::Square => "Square Ad",
            AdShape::Banner => "Banner Ad",
        }
    }

    /// Parse `square` / `banner`, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "square" => Some(AdShape::Square),
            "banner" => Some(AdShape::Banner),
            _ => None,
        }
    }
}

/// Pages an ad can be placed on. The label is what the admin form stores in
/// `page_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementPage {
    /// Home page.
    Home,
    /// Latest News listing.
    LatestNews,
    /// Cinema News listing.
    CinemaNews,
    /// Meet The Person listing.
    MeetThePerson,
    /// More News listing.
    MoreNews,
    /// Article detail pages.
    NewsDetail,
}

impl PlacementPage {
    /// Options of the admin page-type selector.
    pub const ALL: [PlacementPage; 6] = [
        PlacementPage::Home,
        PlacementPage::LatestNews,
        PlacementPage::CinemaNews,
        PlacementPage::MeetThePerson,
        PlacementPage::MoreNews,
        PlacementPage::NewsDetail,
    ];

    /// Stored `page_type` value.
    pub fn label(self) -> &'static str {
        match self {
            PlacementPage::Home => "Home",
            PlacementPage::LatestNews => "Latest News",
            PlacementPage::CinemaNews => "Cinema News",
            PlacementPage::MeetThePerson => "Meet The Person",
            PlacementPage::MoreNews => "More News",
            PlacementPage::NewsDetail => "News Detail",
        }
    }

    /// Case-insensitive lookup by label.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|page| page.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for PlacementPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ads for `page_name`: enabled ones whose `page_type` matches
/// case-insensitively, ascending by `order` (ties keep API order), at most
/// `shape.cap()` of them.
pub fn select_for_page<'a>(
    ads: &'a [Advertisement],
    page_name: &str,
    shape: AdShape,
) -> Vec<&'a Advertisement> {
    let mut selected = eligible(ads, page_name);
    selected.truncate(shape.cap());
    selected
}

fn eligible<'a>(ads: &'a [Advertisement], page_name: &str) -> Vec<&'a Advertisement> {
    let page_name = page_name.trim();
    let mut selected: Vec<&Advertisement> = ads
        .iter()
        .filter(|ad| {
            ad.status
                && ad
                    .page_type
                    .as_deref()
                    .is_some_and(|page_type| page_type.trim().eq_ignore_ascii_case(page_name))
        })
        .collect();
    selected.sort_by_key(|ad| ad.order);
    selected
}

/// Render-ready ad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdSlot {
    /// Admin-facing title, used as alt text.
    pub title: String,
    /// Absolute image URL.
    pub image: String,
    /// Click-through target; `None` renders a plain image.
    pub link: Option<String>,
    /// Whether the "Contact Us" button is overlaid.
    pub show_contact: bool,
}

impl AdSlot {
    /// Build the view of one ad. Ads without an image have nothing to show.
    pub fn from_ad(base: &str, ad: &Advertisement) -> Option<Self> {
        let image = image_url(base, ad.image.as_deref()?)?;
        let link = ad
            .link
            .as_deref()
            .map(str::trim)
            .filter(|link| !link.is_empty() && *link != NO_LINK)
            .map(str::to_string);
        Some(AdSlot {
            title: ad.title.clone(),
            image,
            link,
            show_contact: ad.show_contact,
        })
    }
}

/// Render-ready ads for `page`. Ads without an image are skipped before the
/// cap applies, so the next eligible ad takes their place.
pub fn slots_for_page(
    base: &str,
    ads: &[Advertisement],
    page: PlacementPage,
    shape: AdShape,
) -> Vec<AdSlot> {
    eligible(ads, page.label())
        .into_iter()
        .filter_map(|ad| AdSlot::from_ad(base, ad))
        .take(shape.cap())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ad(id: &str, page_type: &str, status: bool, order: i64) -> Advertisement {
        Advertisement {
            id: id.into(),
            title: format!("ad {id}"),
            image: Some(format!("uploads\\ads\\{id}.jpg")),
            page_type: Some(page_type.to_string()),
            status,
            order,
            ..Advertisement::default()
        }
    }

    #[test]
    fn filters_inactive_and_other_pages() {
        let ads = vec![
            ad("a", "Home", true, 2),
            ad("b", "Home", false, 1),
            ad("c", "Cinema News", true, 1),
        ];
        let selected = select_for_page(&ads, "home", AdShape::Square);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id.to_string(), "a");
        assert_eq!(selected[0].order, 2);
    }

    #[test]
    fn sorts_by_order_and_caps_per_shape() {
        let ads: Vec<_> = (0..8).rev().map(|i| ad(&i.to_string(), "News Detail", true, i)).collect();
        let square: Vec<_> = select_for_page(&ads, "news detail", AdShape::Square)
            .iter()
            .map(|ad| ad.order)
            .collect();
        assert_eq!(square, vec![0, 1, 2]);
        assert_eq!(select_for_page(&ads, "News Detail", AdShape::Banner).len(), 5);
    }

    #[test]
    fn equal_orders_keep_api_order() {
        let ads = vec![ad("x", "Home", true, 1), ad("y", "Home", true, 1)];
        let ids: Vec<_> = select_for_page(&ads, "Home", AdShape::Banner)
            .iter()
            .map(|ad| ad.id.to_string())
            .collect();
        assert_eq!(ids, ["x", "y"]);
    }

    #[test]
    fn missing_page_type_never_matches() {
        let mut untyped = ad("z", "", true, 0);
        untyped.page_type = None;
        assert!(select_for_page(&[untyped], "", AdShape::Square).is_empty());
    }

    #[test]
    fn slot_view() {
        let mut home = ad("a", "Home", true, 1);
        home.link = Some("#".into());
        home.show_contact = true;
        let slots = slots_for_page("http://api", &[home], PlacementPage::Home, AdShape::Square);
        assert_eq!(slots, vec![AdSlot {
            title: "ad a".into(),
            image: "http://api/uploads/ads/a.jpg".into(),
            link: None,
            show_contact: true,
        }]);
    }

    #[test]
    fn imageless_ads_do_not_use_up_the_cap() {
        let mut ads: Vec<_> = (0..4).map(|i| ad(&i.to_string(), "Home", true, i)).collect();
        ads[0].image = None;
        ads[1].image = Some("  ".into());
        let titles: Vec<_> = slots_for_page("http://api", &ads, PlacementPage::Home, AdShape::Square)
            .into_iter()
            .map(|slot| slot.title)
            .collect();
        assert_eq!(titles, ["ad 2", "ad 3"]);

        let mut with_gap: Vec<_> = (0..7).map(|i| ad(&i.to_string(), "Home", true, i)).collect();
        with_gap[2].image = None;
        let shown = slots_for_page("http://api", &with_gap, PlacementPage::Home, AdShape::Banner);
        assert_eq!(shown.len(), 5);
        assert_eq!(shown[4].title, "ad 5");
    }

    #[test]
    fn labels_and_shapes() {
        assert_eq!(PlacementPage::from_label("meet the person"), Some(PlacementPage::MeetThePerson));
        assert_eq!(PlacementPage::from_label("Sidebar"), None);
        assert_eq!(AdShape::parse("Banner"), Some(AdShape::Banner));
        assert_eq!(AdShape::Square.collection(), Collection::SquareAds);
        assert!(AdShape::Banner.requires_landscape());
    }
}
