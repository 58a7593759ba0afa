use hmedia_shared::{
    feed::TeaserCard,
    models::Paginated,
    pagination::{server_redirect_target, PageView},
    Teaser,
};
use yew::prelude::*;

use crate::{
    api,
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
        video_card::VideoCard,
        video_modal::VideoModal,
    },
    hooks::{use_page_navigation, use_page_param},
    i18n::current::teasers_page as t,
    seo,
};

#[function_component(TeasersPage)]
pub fn teasers_page() -> Html {
    let page = use_state(Paginated::<Teaser>::empty);
    let loading = use_state(|| true);
    let playing = use_state(|| None::<String>);
    let requested_page = use_page_param();
    let navigation = use_page_navigation();

    use_effect_with((), |_| {
        seo::apply_default_seo(t::TITLE, "/teaserandpromo");
        || ()
    });

    {
        let page = page.clone();
        let loading = loading.clone();
        let replace = navigation.replace.clone();
        use_effect_with(requested_page, move |requested| {
            let requested = *requested;
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_teaser_page(requested).await {
                    Ok(data) => {
                        let redirect = server_redirect_target(requested, data.total_pages());
                        page.set(data);
                        if let Some(last) = redirect {
                            replace.emit(last);
                        }
                    },
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch teasers: {}", e).into(),
                        );
                        page.set(Paginated::empty());
                    },
                }
                loading.set(false);
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

    if *loading {
        return html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen={true} /> };
    }

    let view = PageView::from_server(&*page);
    let cards: Vec<TeaserCard> = view.items.iter().map(TeaserCard::from_teaser).collect();

    html! {
        <main class="min-h-screen bg-gray-50 text-gray-900">
            <div class="container mx-auto px-4 py-12">
                <h2 class="mb-16 border-b-2 border-red-600 pb-2 text-lg font-black uppercase sm:text-xl md:text-2xl">
                    { t::TITLE }
                </h2>
                if cards.is_empty() {
                    <p class="text-center text-gray-500">{ t::EMPTY }</p>
                } else {
                    <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
                        { for cards.into_iter().enumerate().map(|(index, card)| html! {
                            <VideoCard key={index} {card} on_play={on_play.clone()} />
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
            </div>
            <VideoModal video_id={(*playing).clone()} {on_close} />
        </main>
    }
}
