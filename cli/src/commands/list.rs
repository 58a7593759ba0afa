use anyhow::Result;
use hmedia_shared::{
    ads::AdShape,
    endpoints::Collection,
    models::{sort_newest_first, Paginated},
    pagination::{paginate, server_redirect_target, PageView},
};
use serde::Serialize;
use serde_json::Value;

use super::to_json;
use crate::client::ContentClient;

#[derive(Debug, Serialize)]
struct Listing<'a, T> {
    collection: Collection,
    total: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<PageInfo>,
    items: &'a [T],
}

#[derive(Debug, Serialize)]
struct PageInfo {
    current: usize,
    total_pages: usize,
    per_page: usize,
    /// `server` when the API sliced the page, `local` otherwise.
    source: &'static str,
}

/// List a collection, optionally one page of it.
pub async fn run(
    client: &ContentClient,
    collection: Collection,
    page: Option<usize>,
    per_page: usize,
) -> Result<Value> {
    match collection {
        Collection::News
        | Collection::CinemaNews
        | Collection::MoreNews
        | Collection::MeetPerson
        | Collection::TrendingNews => match page {
            Some(page) => {
                let mut fetched = client.article_page(collection, page).await?;
                if let Some(last) = server_redirect_target(page, fetched.total_pages()) {
                    tracing::info!("page {page} of {collection} is past the end, showing page {last}");
                    fetched = client.article_page(collection, last).await?;
                }
                server_listing(collection, &fetched)
            },
            None => full_listing(collection, &client.articles(collection).await?),
        },
        Collection::TeaserAndPromo => match page {
            Some(page) => {
                let mut fetched = client.teaser_page(page).await?;
                if let Some(last) = server_redirect_target(page, fetched.total_pages()) {
                    tracing::info!("page {page} of {collection} is past the end, showing page {last}");
                    fetched = client.teaser_page(last).await?;
                }
                server_listing(collection, &fetched)
            },
            None => full_listing(collection, &client.teasers().await?),
        },
        Collection::Banner => {
            let banners = client.banners().await?;
            local_listing(collection, &banners, page, per_page)
        },
        Collection::FlashNews => {
            let mut items = client.flash_news().await?;
            sort_newest_first(&mut items);
            local_listing(collection, &items, page, per_page)
        },
        Collection::BannerAds | Collection::SquareAds => {
            let shape = if collection == Collection::BannerAds {
                AdShape::Banner
            } else {
                AdShape::Square
            };
            let mut items = client.ads(shape).await?;
            sort_newest_first(&mut items);
            local_listing(collection, &items, page, per_page)
        },
    }
}

fn full_listing<T: Serialize>(collection: Collection, items: &[T]) -> Result<Value> {
    to_json(&Listing {
        collection,
        total: items.len(),
        page: None,
        items,
    })
}

fn server_listing<T: Serialize>(collection: Collection, fetched: &Paginated<T>) -> Result<Value> {
    let view = PageView::from_server(fetched);
    to_json(&Listing {
        collection,
        total: fetched.total,
        page: Some(PageInfo {
            current: view.current_page,
            total_pages: view.total_pages,
            per_page: fetched.limit,
            source: "server",
        }),
        items: view.items,
    })
}

fn local_listing<T: Serialize>(
    collection: Collection,
    items: &[T],
    page: Option<usize>,
    per_page: usize,
) -> Result<Value> {
    let Some(page) = page else {
        return full_listing(collection, items);
    };
    let view = paginate(items, page, per_page);
    to_json(&Listing {
        collection,
        total: items.len(),
        page: Some(PageInfo {
            current: view.current_page,
            total_pages: view.total_pages,
            per_page: per_page.max(1),
            source: "local",
        }),
        items: view.items,
    })
}
