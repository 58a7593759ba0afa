use hmedia_shared::{
    forms::{FieldErrors, LoginDraft},
    ApiError,
};
use yew::prelude::*;
use yew_router::prelude::*;

use super::{error_attr, input_value, Field, INPUT_CLASSES};
use crate::{
    api,
    auth::{AuthAction, AuthContext},
    i18n::current::login_page as t,
    router::Route,
    seo,
};

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let auth = use_context::<AuthContext>();
    let navigator = use_navigator();
    let draft = use_state(LoginDraft::default);
    let errors = use_state(FieldErrors::default);
    let server_error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    use_effect_with((), |_| {
        seo::set_document_title(t::PAGE_TITLE);
        || ()
    });

    let signed_in = auth.as_ref().is_some_and(|auth| auth.is_signed_in());
    if signed_in {
        return html! { <Redirect<Route> to={Route::AdminDashboard} /> };
    }

    let on_username = {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                let mut next = (*draft).clone();
                next.username = value;
                draft.set(next);
                let mut cleared = (*errors).clone();
                cleared.clear("username");
                errors.set(cleared);
            }
        })
    };

    let on_password = {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                let mut next = (*draft).clone();
                next.password = value;
                draft.set(next);
                let mut cleared = (*errors).clone();
                cleared.clear("password");
                errors.set(cleared);
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let server_error = server_error.clone();
        let submitting = submitting.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }
            server_error.set(None);
            if let Err(found) = draft.validate() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::default());

            let draft = (*draft).clone();
            let server_error = server_error.clone();
            let submitting = submitting.clone();
            let auth = auth.clone();
            let navigator = navigator.clone();
            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::login(&draft).await {
                    Ok(token) => {
                        if let Some(auth) = auth.as_ref() {
                            auth.dispatch(AuthAction::SignIn(token));
                        }
                        if let Some(navigator) = navigator.as_ref() {
                            navigator.replace(&Route::AdminDashboard);
                        }
                    },
                    Err(ApiError::Unauthorized) => {
                        server_error.set(Some(t::INVALID_CREDENTIALS.to_string()));
                    },
                    Err(e) => {
                        web_sys::console::error_1(&format!("Login failed: {}", e).into());
                        server_error.set(Some(e.user_message(t::GENERIC_FAILURE)));
                    },
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <main class="flex min-h-screen items-center justify-center bg-gray-900 px-4 text-white">
            <form
                class="w-full max-w-sm space-y-5 rounded-xl bg-gray-800 p-8 shadow-2xl"
                {onsubmit}
                novalidate=true
            >
                <div class="flex justify-center">
                    <img src="/images/logo/logo1.png" alt={t::LOGO_ALT} width="100" height="50" />
                </div>
                <h1 class="text-center text-xl font-bold">{ t::HEADING }</h1>
                <Field label={t::USERNAME} error={error_attr(errors.get("username"))}>
                    <input
                        type="text"
                        autocomplete="username"
                        placeholder={t::USERNAME_PLACEHOLDER}
                        class={INPUT_CLASSES}
                        value={draft.username.clone()}
                        oninput={on_username}
                    />
                </Field>
                <Field label={t::PASSWORD} error={error_attr(errors.get("password"))}>
                    <input
                        type="password"
                        autocomplete="current-password"
                        placeholder={t::PASSWORD_PLACEHOLDER}
                        class={INPUT_CLASSES}
                        value={draft.password.clone()}
                        oninput={on_password}
                    />
                </Field>
                if let Some(message) = (*server_error).clone() {
                    <p class="rounded-lg bg-red-900/50 px-3 py-2 text-sm text-red-300" role="alert">{ message }</p>
                }
                <button
                    type="submit"
                    disabled={*submitting}
                    class="w-full cursor-pointer rounded-lg bg-red-600 py-3 font-semibold text-white transition hover:bg-red-700 disabled:cursor-not-allowed disabled:opacity-60"
                >
                    if *submitting { { t::SIGNING_IN } } else { { t::SIGN_IN } }
                </button>
            </form>
        </main>
    }
}
