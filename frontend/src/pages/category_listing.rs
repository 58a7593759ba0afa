use hmedia_shared::{
    ads::PlacementPage,
    models::Paginated,
    pagination::{server_redirect_target, PageView},
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
    hooks::{use_page_ads, use_page_navigation, use_page_param},
    i18n::current::listing_page as t,
    seo,
};

fn placement(category: ArticleCategory) -> PlacementPage {
    match category {
        ArticleCategory::CinemaNews => PlacementPage::CinemaNews,
        ArticleCategory::MeetPerson => PlacementPage::MeetThePerson,
        ArticleCategory::MoreNews => PlacementPage::MoreNews,
        ArticleCategory::LatestNews | ArticleCategory::TrendingNews => PlacementPage::LatestNews,
    }
}

#[derive(Properties, PartialEq)]
pub struct CategoryListingProps {
    pub category: ArticleCategory,
}

/// Server-paginated listing used by Cinema News, Meet The Person and More
/// News. Each page change is one request for that page.
#[function_component(CategoryListingPage)]
pub fn category_listing_page(props: &CategoryListingProps) -> Html {
    let category = props.category;
    let page = use_state(Paginated::<ArticleRecord>::empty);
    let loading = use_state(|| true);
    let requested_page = use_page_param();
    let navigation = use_page_navigation();
    let ads = use_page_ads(placement(category));

    use_effect_with(category, |category| {
        let path = category.listing_route().unwrap_or("/");
        seo::apply_default_seo(category.label(), path);
        || ()
    });

    {
        let page = page.clone();
        let loading = loading.clone();
        let replace = navigation.replace.clone();
        use_effect_with((category, requested_page), move |(category, requested)| {
            let category = *category;
            let requested = *requested;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_article_page(category.collection(), requested).await {
                    Ok(data) => {
                        let redirect = server_redirect_target(requested, data.total_pages());
                        page.set(data);
                        if let Some(last) = redirect {
                            replace.emit(last);
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch {}: {}", category.label(), e).into(),
                        );
                        page.set(Paginated::empty());
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

    let view = PageView::from_server(&*page);

    html! {
        <main class="min-h-screen bg-gray-50 text-gray-900">
            <div class="container mx-auto grid grid-cols-1 gap-10 px-4 py-8 lg:grid-cols-12">
                <div class="flex flex-col gap-10 lg:col-span-9">
                    <h2 class="mb-6 border-b-2 border-red-600 pb-2 text-lg font-black uppercase sm:text-xl md:text-2xl">
                        { category.label() }
                    </h2>
                    if view.items.is_empty() {
                        <p class="text-center text-gray-500">{ t::EMPTY }</p>
                    } else {
                        <div class="grid gap-3 md:grid-cols-3">
                            { for view.items.iter().map(|article| html! {
                                <ArticleCard key={article.id.to_string()} article={article.clone()} {category} />
                            }) }
                        </div>
                    }
                    if view.shows_control() {
                        <Pagination
                            current_page={view.current_page}
                            total_pages={view.total_pages}
                            on_page_change={navigation.push.clone()}
                        />
                    }
                    <FullWidthAd ads={ads.banner.clone()} />
                </div>
                <aside class="space-y-8 self-start lg:sticky lg:top-24 lg:col-span-3">
                    <AdList ads={ads.square.clone()} />
                </aside>
            </div>
        </main>
    }
}
