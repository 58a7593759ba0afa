use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route, seo};

#[derive(Properties, PartialEq)]
struct NotFoundViewProps {
    title: AttrValue,
    message: AttrValue,
}

#[function_component(NotFoundView)]
fn not_found_view(props: &NotFoundViewProps) -> Html {
    html! {
        <main class="flex min-h-screen items-center justify-center bg-gray-50 p-4">
            <div class="space-y-6 rounded-lg bg-white p-12 text-center shadow-xl">
                <p class="text-6xl font-black text-red-600" aria-hidden="true">{"?"}</p>
                <h1 class="text-4xl font-extrabold text-gray-900">{ props.title.clone() }</h1>
                <p class="text-gray-600">{ props.message.clone() }</p>
                <Link<Route>
                    to={Route::Home}
                    classes={classes!("inline-block", "rounded-lg", "bg-red-600", "px-6", "py-3", "font-bold", "text-white", "transition", "hover:bg-gray-900")}
                >
                    { t::BACK_HOME }
                </Link<Route>>
            </div>
        </main>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    use_effect_with((), |_| {
        seo::set_document_title(t::PAGE_TITLE);
        || ()
    });

    html! { <NotFoundView title={t::PAGE_TITLE} message={t::PAGE_MESSAGE} /> }
}

/// Shown by the article page when the record is missing or could not be
/// loaded.
#[function_component(MissingArticle)]
pub fn missing_article() -> Html {
    html! { <NotFoundView title={t::ARTICLE_TITLE} message={t::ARTICLE_MESSAGE} /> }
}
