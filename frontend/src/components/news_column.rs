use hmedia_shared::{dates::display_date, summary::summarize, ArticleCategory, ArticleRecord};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{config::image_url, i18n::current::news_column as t, router::Route};

const SKELETON_ROWS: usize = 5;
/// The "View More" link only shows once a column is full.
const VIEW_MORE_THRESHOLD: usize = 5;
const PREVIEW_CHARS: usize = 70;
const TRENDING_PREVIEW_CHARS: usize = 40;

#[derive(Properties, PartialEq)]
pub struct NewsColumnProps {
    pub title: AttrValue,
    pub category: ArticleCategory,
    pub items: Vec<ArticleRecord>,
    #[prop_or(false)]
    pub loading: bool,
}

#[function_component(NewsColumn)]
pub fn news_column(props: &NewsColumnProps) -> Html {
    let category = props.category;
    let trending = category == ArticleCategory::TrendingNews;
    let preview_chars = if trending { TRENDING_PREVIEW_CHARS } else { PREVIEW_CHARS };

    let view_more = Route::listing(category)
        .filter(|_| !props.loading && props.items.len() >= VIEW_MORE_THRESHOLD);

    html! {
        <div class="flex flex-col">
            <h2 class="mb-6 border-b-2 border-red-600 pb-2 text-lg font-black uppercase text-gray-900 sm:text-xl md:text-2xl">
                { props.title.clone() }
            </h2>
            <div class="space-y-4 sm:space-y-5">
                if props.loading {
                    { for (0..SKELETON_ROWS).map(|index| html! { <SkeletonRow key={index} /> }) }
                } else {
                    { for props.items.iter().map(|item| {
                        let preview = summarize(&item.content, preview_chars);
                        let date = item.display_date_raw().and_then(display_date);
                        html! {
                            <Link<Route>
                                key={item.slug.clone()}
                                to={Route::article(category, &item.slug)}
                                classes={classes!("group", "flex", "items-start", "gap-3", "sm:gap-4")}
                            >
                                <div class="h-20 w-32 flex-shrink-0 overflow-hidden rounded-lg bg-gray-100 sm:h-24 sm:w-28 md:h-20 md:w-32">
                                    if let Some(src) = image_url(item.image.as_deref()) {
                                        <img
                                            src={src}
                                            alt={item.title.clone()}
                                            loading="lazy"
                                            class="h-full w-full object-fill transition-transform duration-300 group-hover:scale-110"
                                        />
                                    }
                                </div>
                                <div class="min-w-0 flex-1">
                                    <h3 class="line-clamp-2 text-base font-semibold leading-snug text-gray-800 transition-colors group-hover:text-red-600 sm:font-bold md:text-[18px]">
                                        { &item.title }
                                    </h3>
                                    if !preview.is_empty() {
                                        <div class="mt-1.5 text-xs leading-relaxed text-black sm:text-sm">{ preview }</div>
                                    }
                                    if let Some(date) = date {
                                        <p class="mt-1 text-[10px] text-gray-500 sm:text-xs">{ date }</p>
                                    }
                                </div>
                            </Link<Route>>
                        }
                    }) }
                }
            </div>
            if let Some(route) = view_more {
                <div class="mt-6 text-center">
                    <Link<Route>
                        to={route}
                        classes={classes!("group", "inline-flex", "items-center", "gap-2", "text-sm", "font-bold", "text-red-600", "transition-colors", "hover:text-gray-900")}
                    >
                        { t::VIEW_MORE }
                        <span class="transition-transform group-hover:translate-x-1" aria-hidden="true">{"→"}</span>
                    </Link<Route>>
                </div>
            }
        </div>
    }
}

#[function_component(SkeletonRow)]
fn skeleton_row() -> Html {
    html! {
        <div class="flex animate-pulse items-start gap-3 sm:gap-4">
            <div class="h-20 w-24 flex-shrink-0 rounded-lg bg-gray-300 sm:h-24 sm:w-28 md:h-20 md:w-32"></div>
            <div class="flex-1 space-y-2">
                <div class="h-4 w-3/4 rounded bg-gray-300 sm:h-5"></div>
                <div class="h-3 w-full rounded bg-gray-300 sm:h-4"></div>
                <div class="h-3 w-1/2 rounded bg-gray-300 sm:h-4"></div>
            </div>
        </div>
    }
}
