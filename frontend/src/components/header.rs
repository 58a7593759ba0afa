use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    config::{FACEBOOK_PAGE, INSTAGRAM_PAGE, YOUTUBE_CHANNEL},
    i18n::current::header as t,
    router::Route,
};

const NAV_ITEMS: [(&str, Route); 6] = [
    (t::NAV_HOME, Route::Home),
    (t::NAV_LATEST, Route::LatestNews),
    (t::NAV_CINEMA, Route::CinemaNews),
    (t::NAV_MEET, Route::MeetThePerson),
    (t::NAV_TEASERS, Route::Teasers),
    (t::NAV_MORE, Route::MoreNews),
];

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    let menu_open = use_state(|| false);

    // Close the mobile menu after navigating.
    {
        let menu_open = menu_open.clone();
        use_effect_with(route.clone(), move |_| {
            menu_open.set(false);
            || ()
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let nav_link = |(label, target): &(&'static str, Route), mobile: bool| {
        let active = route.as_ref() == Some(target);
        let classes = classes!(
            "font-semibold",
            "uppercase",
            "transition-colors",
            "hover:text-red-600",
            if mobile { "block py-3 text-base border-b border-gray-100" } else { "text-sm" },
            if active { "text-red-600" } else { "text-gray-800" }
        );
        html! {
            <Link<Route> to={target.clone()} {classes}>{ *label }</Link<Route>>
        }
    };

    html! {
        <header class="sticky top-0 z-30 border-b border-gray-200 bg-white shadow-sm">
            <div class="container mx-auto flex items-center justify-between gap-6 px-4 py-3">
                <Link<Route> to={Route::Home} classes={classes!("flex", "items-center", "gap-2")}>
                    <img src="/logo.png" alt={t::BRAND_NAME} class="h-10 w-auto" />
                    <span class="sr-only">{ t::BRAND_NAME }</span>
                </Link<Route>>

                <nav class="hidden items-center gap-6 lg:flex" aria-label={t::NAV_MAIN_ARIA}>
                    { for NAV_ITEMS.iter().map(|item| nav_link(item, false)) }
                </nav>

                <div class="hidden items-center gap-4 lg:flex">
                    <SocialLinks />
                    <a
                        href={YOUTUBE_CHANNEL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="rounded-lg bg-red-600 px-4 py-2 text-sm font-semibold text-white transition hover:bg-gray-900"
                    >
                        { t::SUBSCRIBE }
                    </a>
                </div>

                <button
                    type="button"
                    class="inline-flex h-10 w-10 items-center justify-center rounded-lg text-2xl text-gray-800 lg:hidden"
                    aria-label={if *menu_open { t::CLOSE_MENU_ARIA } else { t::OPEN_MENU_ARIA }}
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            if *menu_open {
                <nav class="border-t border-gray-200 bg-white px-4 pb-4 lg:hidden" aria-label={t::MOBILE_NAV_ARIA}>
                    { for NAV_ITEMS.iter().map(|item| nav_link(item, true)) }
                    <div class="mt-4 flex items-center gap-4">
                        <SocialLinks />
                    </div>
                    <a
                        href={YOUTUBE_CHANNEL}
                        target="_blank"
                        rel="noopener noreferrer"
                        class="mt-4 block rounded-lg bg-red-600 px-4 py-2 text-center text-sm font-semibold text-white"
                    >
                        { t::SUBSCRIBE }
                    </a>
                </nav>
            }
        </header>
    }
}

#[function_component(SocialLinks)]
pub fn social_links() -> Html {
    let link_classes = classes!(
        "text-sm",
        "font-semibold",
        "text-gray-600",
        "transition",
        "hover:scale-110",
        "hover:text-red-600"
    );
    html! {
        <>
            <a href={FACEBOOK_PAGE} target="_blank" rel="noopener noreferrer" class={link_classes.clone()}>
                { t::FACEBOOK }
            </a>
            <a href={INSTAGRAM_PAGE} target="_blank" rel="noopener noreferrer" class={link_classes.clone()}>
                { t::INSTAGRAM }
            </a>
        </>
    }
}
