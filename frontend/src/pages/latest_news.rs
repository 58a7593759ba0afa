use hmedia_shared::{
    ads::PlacementPage,
    endpoints::Collection,
    models::sort_newest_first,
    pagination::paginate,
    ArticleCategory, ArticleRecord,
};
use yew::prelude::*;

use crate::{
    api,
    components::{
        ad_list::AdList,
        article_card::ArticleCard,
        full_width_ad::FullWidthAd,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
    },
    config::LATEST_NEWS_PER_PAGE,
    hooks::{use_page_ads, use_page_navigation, use_page_param},
    i18n::current::listing_page as t,
    seo,
};

/// Latest News: the whole collection is fetched once, newest first, and
/// paged in the browser.
#[function_component(LatestNewsPage)]
pub fn latest_news_page() -> Html {
    let articles = use_state(Vec::<ArticleRecord>::new);
    let loading = use_state(|| true);
    let requested_page = use_page_param();
    let navigation = use_page_navigation();
    let ads = use_page_ads(PlacementPage::LatestNews);

    use_effect_with((), |_| {
        seo::apply_default_seo(ArticleCategory::LatestNews.label(), "/latestnews");
        || ()
    });

    {
        let articles = articles.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_articles(Collection::News).await {
                    Ok(mut data) => {
                        sort_newest_first(&mut data);
                        articles.set(data);
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch latest news: {}", e).into(),
                        );
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen={true} /> };
    }

    let view = paginate(articles.as_slice(), requested_page, LATEST_NEWS_PER_PAGE);

    html! {
        <main class="min-h-screen bg-gray-50 text-gray-900">
            <div class="container mx-auto grid grid-cols-1 gap-10 px-4 py-8 lg:grid-cols-12">
                <div class="flex flex-col gap-10 lg:col-span-9">
                    <h2 class="mb-6 border-b-2 border-red-600 pb-2 text-lg font-black uppercase sm:text-xl md:text-2xl">
                        { ArticleCategory::LatestNews.label() }
                    </h2>
                    if view.items.is_empty() {
                        <p class="text-center text-gray-500">{ t::EMPTY }</p>
                    } else {
                        <div class="grid gap-3 md:grid-cols-3">
                            { for view.items.iter().map(|article| html! {
                                <ArticleCard
                                    key={article.id.to_string()}
                                    article={article.clone()}
                                    category={ArticleCategory::LatestNews}
                                />
                            }) }
                        </div>
                    }
                    <Pagination
                        current_page={view.current_page}
                        total_pages={view.total_pages}
                        on_page_change={navigation.push.clone()}
                    />
                    <FullWidthAd ads={ads.banner.clone()} />
                </div>
                <aside class="space-y-8 self-start lg:sticky lg:top-24 lg:col-span-3">
                    <AdList ads={ads.square.clone()} />
                </aside>
            </div>
        </main>
    }
}
