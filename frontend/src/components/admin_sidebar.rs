use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    auth::{AuthAction, AuthContext},
    components::confirm_dialog::ConfirmDialog,
    i18n::current::admin_sidebar as t,
    router::Route,
};

const NAV_ITEMS: [(&str, Route); 11] = [
    (t::DASHBOARD, Route::AdminDashboard),
    (t::HOME_BANNER, Route::AdminBanners),
    (t::FLASH_NEWS, Route::AdminFlashNews),
    (t::TRENDING_NEWS, Route::AdminTrending),
    (t::LATEST_NEWS, Route::AdminLatestNews),
    (t::CINEMA_NEWS, Route::AdminCinemaNews),
    (t::MEET_THE_PERSON, Route::AdminMeetThePerson),
    (t::TEASER_AND_PROMO, Route::AdminTeasers),
    (t::MORE_NEWS, Route::AdminMoreNews),
    (t::ADVERTISEMENT, Route::AdminAdvertisements),
    (t::VIEW_SITE, Route::Home),
];

#[function_component(AdminSidebar)]
pub fn admin_sidebar() -> Html {
    let auth = use_context::<AuthContext>();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let confirm_open = use_state(|| false);
    let logging_out = use_state(|| false);

    let open_confirm = {
        let confirm_open = confirm_open.clone();
        Callback::from(move |_: MouseEvent| confirm_open.set(true))
    };
    let close_confirm = {
        let confirm_open = confirm_open.clone();
        Callback::from(move |_| confirm_open.set(false))
    };

    let logout = {
        let auth = auth.clone();
        let confirm_open = confirm_open.clone();
        let logging_out = logging_out.clone();
        Callback::from(move |_| {
            let Some(auth) = auth.clone() else {
                return;
            };
            let confirm_open = confirm_open.clone();
            let logging_out = logging_out.clone();
            let navigator = navigator.clone();
            logging_out.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(client) = auth.client() {
                    if let Err(e) = client.logout().await {
                        web_sys::console::error_1(&format!("Logout failed: {}", e).into());
                    }
                }
                auth.dispatch(AuthAction::SignOut);
                logging_out.set(false);
                confirm_open.set(false);
                if let Some(nav) = navigator {
                    nav.replace(&Route::AdminLogin);
                }
            });
        })
    };

    html! {
        <>
            <aside class="flex w-16 flex-shrink-0 flex-col border-r border-gray-800 bg-gray-950 md:w-64">
                <div class="border-b border-gray-800 p-4">
                    <Link<Route> to={Route::AdminDashboard} classes={classes!("block", "text-lg", "font-black", "text-white")}>
                        <span class="hidden md:inline">{ t::BRAND }</span>
                        <span class="md:hidden">{ "H" }</span>
                    </Link<Route>>
                </div>
                <nav class="flex-1 space-y-1 overflow-y-auto p-2" aria-label={t::NAV_ARIA}>
                    { for NAV_ITEMS.iter().map(|(label, target)| {
                        let active = route.as_ref() == Some(target);
                        let classes = classes!(
                            "flex",
                            "items-center",
                            "gap-3",
                            "rounded-lg",
                            "px-3",
                            "py-2.5",
                            "text-sm",
                            "font-medium",
                            "transition-colors",
                            if active {
                                "bg-red-600 text-white"
                            } else {
                                "text-gray-400 hover:bg-gray-800 hover:text-white"
                            }
                        );
                        html! {
                            <Link<Route> to={target.clone()} {classes}>
                                <span class="md:hidden" aria-hidden="true">{ label.chars().next().unwrap_or('•') }</span>
                                <span class="hidden md:inline">{ *label }</span>
                            </Link<Route>>
                        }
                    }) }
                </nav>
                <div class="border-t border-gray-800 p-4">
                    <button
                        type="button"
                        onclick={open_confirm}
                        class="flex w-full items-center gap-3 rounded-lg px-3 py-3 font-medium text-gray-400 transition-colors hover:bg-red-500/10 hover:text-red-400"
                    >
                        { t::LOGOUT }
                    </button>
                </div>
            </aside>
            <ConfirmDialog
                open={*confirm_open}
                on_close={close_confirm}
                on_confirm={logout}
                title={t::LOGOUT_TITLE}
                message={t::LOGOUT_MESSAGE}
                confirm_text={t::LOGOUT}
                confirming={*logging_out}
            />
        </>
    }
}
