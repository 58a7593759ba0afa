use hmedia_shared::{feed::active_flash_news, FlashNews};
use yew::prelude::*;

use crate::{api, i18n::current::flash_news as t};

/// Scrolling ticker of active flash-news headlines. Loads on its own so
/// every public page shows it without the page fetching anything.
#[function_component(FlashNewsTicker)]
pub fn flash_news_ticker() -> Html {
    let items = use_state(Vec::<FlashNews>::new);

    {
        let items = items.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_flash_news().await {
                    Ok(data) => items.set(active_flash_news(data)),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch flash news: {}", e).into(),
                        );
                    },
                }
            });
            || ()
        });
    }

    if items.is_empty() {
        return html! {
            <div class="bg-red-600 py-2 text-center text-xs font-bold leading-tight text-white sm:text-sm">
                { t::LOADING }
            </div>
        };
    }

    // Rendered twice so the marquee loops without a gap.
    let doubled = items.iter().chain(items.iter());

    html! {
        <div class="bg-red-600">
            <div class="container relative mx-auto flex items-center overflow-hidden py-2 text-white">
                <div class="mx-2 rounded-md bg-gray-900 px-2 py-2 text-xs font-semibold uppercase text-white shadow-md sm:mx-4 sm:px-4 sm:text-sm">
                    { t::LABEL }
                </div>
                <div class="relative flex-1 overflow-hidden">
                    <div class="hm-marquee flex gap-12 whitespace-nowrap">
                        { for doubled.enumerate().map(|(index, item)| html! {
                            <span key={index} class="flex items-center gap-2 text-sm font-bold leading-tight text-white/90 sm:text-lg">
                                <span class="text-yellow-300" aria-hidden="true">{"⚡"}</span>
                                { &item.title }
                            </span>
                        }) }
                    </div>
                </div>
            </div>
            <style>{ MARQUEE_CSS }</style>
        </div>
    }
}

const MARQUEE_CSS: &str = ".hm-marquee{display:inline-flex;animation:hm-marquee 40s linear \
                           infinite}.hm-marquee:hover{animation-play-state:paused}@keyframes \
                           hm-marquee{0%{transform:translateX(0%)}100%{transform:translateX(-50%)}}";
