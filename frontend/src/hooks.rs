use hmedia_shared::{
    ads::{slots_for_page, AdShape, AdSlot, PlacementPage},
    pagination::{self, parse_page_param, resolve_navigation, PageNav},
    Advertisement, ApiError,
};
use serde::{Deserialize, Serialize};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::{use_location, use_navigator, use_route};

use crate::{api, config::API_BASE, router::Route};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct PageQuery {
    #[serde(default)]
    page: Option<String>,
}

#[derive(Serialize)]
struct PageTarget {
    page: usize,
}

/// The `?page=` of the current URL. Missing, zero and non-numeric values
/// read as page 1.
#[hook]
pub fn use_page_param() -> usize {
    let location = use_location();
    let raw = location
        .as_ref()
        .and_then(|loc| loc.query::<PageQuery>().ok())
        .and_then(|query| query.page);
    parse_page_param(raw.as_deref())
}

/// Callbacks that move the current route to another page number.
#[derive(Clone, PartialEq)]
pub struct PageNavigation {
    /// Push a history entry for `?page=n`.
    pub push: Callback<usize>,
    /// Replace the current entry, for correcting out-of-range pages.
    pub replace: Callback<usize>,
}

/// Push and replace callbacks for the current route's `?page=`.
#[hook]
pub fn use_page_navigation() -> PageNavigation {
    let navigator = use_navigator();
    let route = use_route::<Route>();

    let push = {
        let navigator = navigator.clone();
        let route = route.clone();
        Callback::from(move |page: usize| {
            if let (Some(nav), Some(route)) = (navigator.as_ref(), route.as_ref()) {
                let _ = nav.push_with_query(route, &PageTarget {
                    page,
                });
            }
        })
    };

    let replace = Callback::from(move |page: usize| {
        if let (Some(nav), Some(route)) = (navigator.as_ref(), route.as_ref()) {
            let _ = nav.replace_with_query(route, &PageTarget {
                page,
            });
        }
    });

    PageNavigation {
        push,
        replace,
    }
}

/// Paginate a vector held by the component itself (admin tables).
#[hook]
pub fn use_pagination<T>(
    items: Vec<T>,
    items_per_page: usize,
) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let per_page = items_per_page.max(1);
    let total_pages = pagination::total_pages(items.len(), per_page);
    let current_page = use_state(|| 1usize);

    {
        let current_page = current_page.clone();
        use_effect_with(total_pages, move |total| {
            let safe_page = pagination::clamp_page(*current_page, *total);
            if safe_page != *current_page {
                current_page.set(safe_page);
            }
            || ()
        });
    }

    let memoized_slice = {
        let current_snapshot = *current_page;
        use_memo((items, current_snapshot, per_page), move |(items, page, per_page)| {
            pagination::paginate(items, *page, *per_page).items.to_vec()
        })
    };

    let visible_items = (*memoized_slice).clone();
    let visible_page = pagination::clamp_page(*current_page, total_pages);
    let go_to_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            if let Some(next_page) = resolve_navigation(*current_page, total_pages, PageNav::Goto(page)) {
                current_page.set(next_page);
                // The URL does not change here, so `use_scroll_to_top` stays quiet.
                scroll_window_to_top();
            }
        })
    };

    (visible_items, visible_page, total_pages, go_to_page)
}

/// Scroll the viewport to the top whenever the route or its query changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();
    let key = location
        .as_ref()
        .map(|loc| format!("{}{}", loc.path(), loc.query_str()))
        .unwrap_or_default();

    use_effect_with(key, move |_| {
        scroll_window_to_top();
        || ()
    });
}

/// Smooth-scroll the window back to the top of the page.
pub fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Square and banner ads placed on one reader page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageAds {
    /// Sidebar tiles, at most three.
    pub square: Vec<AdSlot>,
    /// Carousel slides, at most five.
    pub banner: Vec<AdSlot>,
}

/// Fetch both ad collections and keep the ones placed on `page`. A failed
/// fetch leaves that shape empty.
#[hook]
pub fn use_page_ads(page: PlacementPage) -> PageAds {
    let ads = use_state(PageAds::default);

    {
        let ads = ads.clone();
        use_effect_with(page, move |page| {
            let page = *page;
            wasm_bindgen_futures::spawn_local(async move {
                let (square, banner) =
                    futures::join!(api::fetch_ads(AdShape::Square), api::fetch_ads(AdShape::Banner));
                let place = |result: Result<Vec<Advertisement>, ApiError>, shape: AdShape| match result {
                    Ok(list) => slots_for_page(API_BASE, &list, page, shape),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch {} ads: {}", shape.label(), e).into(),
                        );
                        Vec::new()
                    },
                };
                ads.set(PageAds {
                    square: place(square, AdShape::Square),
                    banner: place(banner, AdShape::Banner),
                });
            });
            || ()
        });
    }

    (*ads).clone()
}
