use hmedia_shared::{
    ads::PlacementPage,
    endpoints::Collection,
    feed::TeaserCard,
    ApiError, ArticleCategory, ArticleRecord, Banner,
};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{
    api,
    components::{
        ad_list::AdList,
        article_card::{ArticleCard, ArticleCardSkeleton},
        full_width_ad::FullWidthAd,
        hero::Hero,
        news_column::NewsColumn,
        video_card::VideoCard,
        video_modal::VideoModal,
    },
    hooks::use_page_ads,
    i18n::current::home_page as t,
    router::Route,
    seo,
};

const HOME_TEASERS: usize = 4;

/// A home section: its records and whether its request is still in flight.
#[derive(Clone, PartialEq)]
struct Section<T> {
    items: Vec<T>,
    loading: bool,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Section {
            items: Vec::new(),
            loading: true,
        }
    }
}

fn settle<T>(section: &UseStateHandle<Section<T>>, result: Result<Vec<T>, ApiError>, label: &str) {
    let items = result.unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Failed to fetch {}: {}", label, e).into());
        Vec::new()
    });
    section.set(Section {
        items,
        loading: false,
    });
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let latest = use_state(Section::<ArticleRecord>::default);
    let trending = use_state(Section::<ArticleRecord>::default);
    let cinema = use_state(Section::<ArticleRecord>::default);
    let meet = use_state(Section::<ArticleRecord>::default);
    let more = use_state(Section::<ArticleRecord>::default);
    let banners = use_state(Section::<Banner>::default);
    let teasers = use_state(Section::<TeaserCard>::default);
    let ads = use_page_ads(PlacementPage::Home);
    let playing = use_state(|| None::<String>);

    use_effect_with((), |_| {
        seo::apply_default_seo(t::SEO_TITLE, "/");
        || ()
    });

    {
        let latest = latest.clone();
        let trending = trending.clone();
        let cinema = cinema.clone();
        let meet = meet.clone();
        let more = more.clone();
        let banners = banners.clone();
        let teasers = teasers.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                // Every section settles on its own; one failure leaves the
                // others untouched.
                futures::join!(
                    async {
                        let result = api::fetch_articles_limit(Collection::News).await;
                        settle(&latest, result, "latest news")
                    },
                    async {
                        let result = api::fetch_articles_limit(Collection::TrendingNews).await;
                        settle(&trending, result, "trending news")
                    },
                    async {
                        let result = api::fetch_articles_limit(Collection::CinemaNews).await;
                        settle(&cinema, result, "cinema news")
                    },
                    async {
                        let result = api::fetch_articles_limit(Collection::MeetPerson).await;
                        settle(&meet, result, "meet the person")
                    },
                    async {
                        let result = api::fetch_articles_limit(Collection::MoreNews).await;
                        settle(&more, result, "more news")
                    },
                    async { settle(&banners, api::fetch_banners().await, "banners") },
                    async {
                        let result = api::fetch_teasers_limit().await.map(|items| {
                            items.iter().map(TeaserCard::from_teaser).collect::<Vec<_>>()
                        });
                        settle(&teasers, result, "teasers")
                    },
                );
            });
            || ()
        });
    }

    let on_play = {
        let playing = playing.clone();
        Callback::from(move |id: String| playing.set(Some(id)))
    };
    let on_close = {
        let playing = playing.clone();
        Callback::from(move |_| playing.set(None))
    };

    let article_grid = |section: &Section<ArticleRecord>, category: ArticleCategory| {
        if section.loading {
            html! {
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    { for (0..4).map(|index| html! { <ArticleCardSkeleton key={index} /> }) }
                </div>
            }
        } else {
            html! {
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4">
                    { for section.items.iter().map(|article| html! {
                        <ArticleCard key={article.slug.clone()} article={article.clone()} {category} />
                    }) }
                </div>
            }
        }
    };

    html! {
        <main class="min-h-screen bg-gray-50 text-gray-900">
            <section class="container mx-auto px-4 py-8">
                <div class="grid grid-cols-1 items-start gap-3 xl:grid-cols-4">
                    <div class="xl:col-span-3">
                        if banners.loading {
                            <div class="aspect-[16/7] w-full animate-pulse rounded-lg bg-gray-300" />
                        } else {
                            <Hero banners={banners.items.clone()} />
                        }
                    </div>
                    <div class="hidden xl:block">
                        <h2 class="mb-4 border-b-2 border-red-600 pb-2 text-lg font-black uppercase">
                            { t::TRAILERS }
                        </h2>
                        { for teasers.items.iter().take(2).enumerate().map(|(index, card)| html! {
                            <VideoCard key={index} card={card.clone()} on_play={on_play.clone()} />
                        }) }
                    </div>
                </div>
            </section>

            <section class="w-full">
                <div class="container mx-auto grid grid-cols-1 gap-4 px-4 lg:grid-cols-2 xl:grid-cols-3">
                    <NewsColumn
                        title={t::LATEST_NEWS}
                        category={ArticleCategory::LatestNews}
                        items={latest.items.clone()}
                        loading={latest.loading}
                    />
                    <NewsColumn
                        title={t::CINEMA_NEWS}
                        category={ArticleCategory::CinemaNews}
                        items={cinema.items.clone()}
                        loading={cinema.loading}
                    />
                    <NewsColumn
                        title={t::MEET_THE_PERSON}
                        category={ArticleCategory::MeetPerson}
                        items={meet.items.clone()}
                        loading={meet.loading}
                    />
                </div>
            </section>

            <div class="container mx-auto mt-10 grid grid-cols-1 gap-10 px-4 lg:grid-cols-12">
                <div class="flex flex-col gap-8 lg:col-span-9">
                    <section>
                        <SectionTitle title={t::TRAILERS} more={Some(Route::Teasers)} />
                        <div class="grid grid-cols-1 gap-6 sm:grid-cols-2">
                            { for teasers.items.iter().take(HOME_TEASERS).enumerate().map(|(index, card)| html! {
                                <VideoCard key={index} card={card.clone()} on_play={on_play.clone()} />
                            }) }
                        </div>
                    </section>

                    <FullWidthAd ads={ads.banner.clone()} />

                    <section>
                        <SectionTitle title={t::TRENDING_NEWS} more={None::<Route>} />
                        { article_grid(&trending, ArticleCategory::TrendingNews) }
                    </section>

                    <section>
                        <SectionTitle title={t::MORE_NEWS} more={Some(Route::MoreNews)} />
                        { article_grid(&more, ArticleCategory::MoreNews) }
                    </section>
                </div>
                <aside class="space-y-8 self-start lg:sticky lg:top-24 lg:col-span-3">
                    <AdList ads={ads.square.clone()} />
                </aside>
            </div>

            <VideoModal video_id={(*playing).clone()} {on_close} />
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct SectionTitleProps {
    title: AttrValue,
    more: Option<Route>,
}

#[function_component(SectionTitle)]
fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class="mb-6 flex items-end justify-between border-b-2 border-red-600 pb-2">
            <h2 class="text-lg font-black uppercase sm:text-xl md:text-2xl">{ props.title.clone() }</h2>
            if let Some(route) = props.more.clone() {
                <Link<Route> to={route} classes={classes!("text-sm", "font-bold", "text-red-600", "hover:text-gray-900")}>
                    { t::VIEW_MORE }{" →"}
                </Link<Route>>
            }
        </div>
    }
}
