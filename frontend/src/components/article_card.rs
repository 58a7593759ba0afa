use hmedia_shared::{
    dates::display_date,
    summary::{summarize, CARD_PREVIEW_CHARS},
    ArticleCategory, ArticleRecord,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{config::image_url, router::Route};

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleCardProps {
    pub article: ArticleRecord,
    pub category: ArticleCategory,
}

#[function_component(ArticleCard)]
pub fn article_card(props: &ArticleCardProps) -> Html {
    let article = &props.article;
    let detail_route = Route::article(props.category, &article.slug);
    let preview = summarize(&article.content, CARD_PREVIEW_CHARS);
    let date = article.display_date_raw().and_then(display_date);

    html! {
        <Link<Route> to={detail_route} classes={classes!("group", "flex", "flex-col", "gap-3", "mb-5")}>
            <div class="relative aspect-video overflow-hidden rounded-lg bg-gray-100">
                if let Some(src) = image_url(article.image.as_deref()) {
                    <img
                        src={src}
                        alt={article.title.clone()}
                        loading="lazy"
                        class="h-full w-full object-fill transition-transform duration-500 group-hover:scale-105"
                    />
                }
            </div>
            <div>
                <h3 class="line-clamp-2 text-base font-bold leading-snug transition-colors group-hover:text-red-600 md:text-[18px]">
                    { &article.title }
                </h3>
                if !preview.is_empty() {
                    <p class="mt-1.5 line-clamp-2 text-xs leading-relaxed text-black sm:text-sm">{ preview }</p>
                }
                if let Some(date) = date {
                    <p class="mt-2 text-xs text-gray-500">{ date }</p>
                }
            </div>
        </Link<Route>>
    }
}

/// Grey placeholder with the card's proportions.
#[function_component(ArticleCardSkeleton)]
pub fn article_card_skeleton() -> Html {
    html! {
        <div class="mb-5 flex animate-pulse flex-col gap-3">
            <div class="aspect-video rounded-lg bg-gray-300"></div>
            <div class="mt-1 space-y-2.5">
                <div class="h-5 w-3/4 rounded bg-gray-300"></div>
                <div class="h-4 w-full rounded bg-gray-300"></div>
                <div class="h-4 w-5/6 rounded bg-gray-300"></div>
                <div class="mt-2 h-3 w-1/3 rounded bg-gray-300"></div>
            </div>
        </div>
    }
}
