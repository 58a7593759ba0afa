use hmedia_shared::{
    dates::input_date,
    endpoints::Collection,
    feed::{DashboardInput, DashboardStats},
    ApiError,
};
use yew::prelude::*;

use crate::{api, config::image_url, i18n::current::dashboard as t, seo};

fn or_empty<T>(result: Result<Vec<T>, ApiError>, label: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("Failed to fetch {}: {}", label, e).into());
        Vec::new()
    })
}

const CARD_TONES: [&str; 6] = [
    "bg-blue-500",
    "bg-purple-500",
    "bg-green-500",
    "bg-orange-500",
    "bg-rose-500",
    "bg-yellow-500",
];

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let stats = use_state(|| DashboardStats::collect(DashboardInput::default()));
    let loading = use_state(|| true);

    {
        let stats = stats.clone();
        let loading = loading.clone();
        use_effect_with((), move |_| {
            seo::set_document_title(t::PAGE_TITLE);
            wasm_bindgen_futures::spawn_local(async move {
                let (latest, cinema, meet, more, teasers, banners) = futures::join!(
                    api::fetch_articles(Collection::News),
                    api::fetch_articles(Collection::CinemaNews),
                    api::fetch_articles(Collection::MeetPerson),
                    api::fetch_articles(Collection::MoreNews),
                    api::fetch_teasers(),
                    api::fetch_banners(),
                );
                stats.set(DashboardStats::collect(DashboardInput {
                    latest: or_empty(latest, "latest news"),
                    cinema: or_empty(cinema, "cinema news"),
                    meet: or_empty(meet, "meet the person"),
                    more: or_empty(more, "more news"),
                    teasers: or_empty(teasers, "teasers").len(),
                    banners: or_empty(banners, "banners").len(),
                }));
                loading.set(false);
            });
            || ()
        });
    }

    let max = stats.max_count().max(1);

    html! {
        <div class="space-y-8">
            <h1 class="text-2xl font-bold">{ t::HEADING }</h1>

            <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 xl:grid-cols-3">
                { for stats.counts.iter().zip(CARD_TONES).map(|((label, count), tone)| html! {
                    <div key={*label} class="flex items-center gap-4 rounded-xl bg-gray-800 p-5 shadow">
                        <div class={classes!("h-12", "w-12", "rounded-lg", tone)} aria-hidden="true" />
                        <div>
                            <p class="text-3xl font-bold">
                                if *loading { {"—"} } else { { *count } }
                            </p>
                            <h3 class="text-sm text-gray-400">{ *label }</h3>
                        </div>
                    </div>
                }) }
            </div>

            <div class="grid grid-cols-1 gap-6 xl:grid-cols-2">
                <section class="rounded-xl bg-gray-800 p-6 shadow">
                    <h3 class="mb-4 text-lg font-semibold">{ t::RECENT_NEWS }</h3>
                    if stats.recent.is_empty() && !*loading {
                        <p class="text-sm text-gray-400">{ t::NO_RECENT }</p>
                    }
                    <ul class="space-y-4">
                        { for stats.recent.iter().map(|article| {
                            let published = article.display_date_raw().and_then(input_date);
                            html! {
                                <li key={article.id.to_string()} class="flex items-center gap-4">
                                    if let Some(src) = image_url(article.image.as_deref()) {
                                        <img src={src} alt={article.title.clone()} class="h-14 w-20 shrink-0 rounded object-cover" />
                                    } else {
                                        <div class="h-14 w-20 shrink-0 rounded bg-gray-700" />
                                    }
                                    <div class="min-w-0 flex-1">
                                        <h4 class="truncate font-medium">{ &article.title }</h4>
                                        if let Some(published) = published {
                                            <p class="text-xs text-gray-400">{ t::PUBLISHED }{" "}{ published }</p>
                                        }
                                    </div>
                                    <span class="rounded-full bg-green-900/60 px-2.5 py-1 text-xs font-semibold text-green-300">
                                        { t::LIVE }
                                    </span>
                                </li>
                            }
                        }) }
                    </ul>
                </section>

                <section class="rounded-xl bg-gray-800 p-6 shadow">
                    <h3 class="mb-4 text-lg font-semibold">{ t::OVERVIEW }</h3>
                    <div class="flex h-64 items-end gap-3" role="img" aria-label={t::OVERVIEW}>
                        { for stats.counts.iter().map(|(label, count)| {
                            let height = format!("height: {}%", count * 100 / max);
                            html! {
                                <div key={*label} class="flex h-full flex-1 flex-col items-center justify-end gap-2">
                                    <span class="text-xs text-gray-300">{ *count }</span>
                                    <div class="w-full rounded-t bg-blue-500 transition-all" style={height} />
                                    <span class="text-center text-[11px] leading-tight text-gray-400">{ *label }</span>
                                </div>
                            }
                        }) }
                    </div>
                </section>
            </div>
        </div>
    }
}
