//! Channel H Media reader site and admin console.

mod api;
mod auth;
mod components;
mod config;
/// Routing, pagination and page-level data hooks.
pub mod hooks;
mod i18n;
mod pages;
mod router;
mod seo;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <auth::AuthProvider>
            <router::AppRouter />
        </auth::AuthProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
