use gloo_timers::future::TimeoutFuture;
use hmedia_shared::share::{facebook_share_url, whatsapp_share_url};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Node};
use yew::prelude::*;

use crate::i18n::current::share as t;

const INSTAGRAM_URL: &str = "https://www.instagram.com/";

#[derive(Properties, PartialEq)]
pub struct ShareButtonsProps {
    pub title: AttrValue,
    /// Plain-text teaser included in the WhatsApp message.
    pub description: AttrValue,
    /// Public article URL.
    pub url: AttrValue,
}

async fn write_clipboard(text: &str) -> bool {
    let Some(win) = window() else {
        return false;
    };
    let navigator = win.navigator();
    let Ok(clipboard) = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")) else {
        return false;
    };
    if clipboard.is_undefined() || clipboard.is_null() {
        return false;
    }
    let Ok(write_text) = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText")) else {
        return false;
    };
    let Some(write_fn) = write_text.dyn_ref::<js_sys::Function>() else {
        return false;
    };
    let Ok(promise_value) = write_fn.call1(&clipboard, &JsValue::from_str(text)) else {
        return false;
    };
    match promise_value.dyn_into::<js_sys::Promise>() {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise).await.is_ok(),
        Err(_) => false,
    }
}

fn open_in_new_tab(url: &str) {
    if let Some(win) = window() {
        let _ = win.open_with_url_and_target(url, "_blank");
    }
}

/// Share dropdown: Facebook, WhatsApp, Instagram (copies the link first,
/// since Instagram has no share URL) and copy-link.
#[function_component(ShareButtons)]
pub fn share_buttons(props: &ShareButtonsProps) -> Html {
    let is_open = use_state(|| false);
    let copied = use_state(|| false);
    let wrapper_ref = use_node_ref();

    {
        let is_open = is_open.clone();
        let wrapper_ref = wrapper_ref.clone();
        use_effect_with(*is_open, move |open| {
            let listener_opt = if *open {
                let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
                    let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = wrapper_ref
                        .cast::<Node>()
                        .is_some_and(|wrapper| wrapper.contains(target.as_ref()));
                    if !inside {
                        is_open.set(false);
                    }
                }) as Box<dyn FnMut(_)>);
                if let Some(doc) = window().and_then(|win| win.document()) {
                    let _ = doc.add_event_listener_with_callback(
                        "mousedown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                Some(listener)
            } else {
                None
            };

            move || {
                if let Some(listener) = listener_opt {
                    if let Some(doc) = window().and_then(|win| win.document()) {
                        let _ = doc.remove_event_listener_with_callback(
                            "mousedown",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            }
        });
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let copy_then = |then_open: Option<&'static str>| {
        let copied = copied.clone();
        let url = props.url.to_string();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let url = url.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if write_clipboard(&url).await {
                    copied.set(true);
                    if let Some(target) = then_open {
                        open_in_new_tab(target);
                    }
                    TimeoutFuture::new(2000).await;
                    copied.set(false);
                } else {
                    web_sys::console::error_1(&"Copy failed".into());
                    if let Some(target) = then_open {
                        open_in_new_tab(target);
                    }
                }
            });
        })
    };

    let facebook = facebook_share_url(&props.url);
    let whatsapp = whatsapp_share_url(&props.title, &props.description, &props.url);

    let item_classes = classes!(
        "flex",
        "w-full",
        "items-center",
        "gap-3",
        "px-4",
        "py-3",
        "text-left",
        "text-sm",
        "font-medium",
        "text-gray-800",
        "transition",
        "hover:text-white"
    );

    html! {
        <div class="relative" ref={wrapper_ref}>
            <button
                type="button"
                onclick={toggle}
                class="flex items-center rounded-lg bg-red-600 px-4 py-2 font-semibold text-white transition hover:bg-gray-900"
            >
                { t::SHARE }
            </button>
            if *is_open {
                <div class="absolute bottom-full right-0 z-50 mb-3 w-72 overflow-hidden rounded-xl border bg-white shadow-xl">
                    <a
                        href={facebook}
                        target="_blank"
                        rel="noopener noreferrer"
                        class={classes!(item_classes.clone(), "hover:bg-blue-700")}
                    >
                        { t::FACEBOOK }
                    </a>
                    <a
                        href={whatsapp}
                        target="_blank"
                        rel="noopener noreferrer"
                        class={classes!(item_classes.clone(), "hover:bg-green-500")}
                    >
                        { t::WHATSAPP }
                    </a>
                    <button
                        type="button"
                        onclick={copy_then(Some(INSTAGRAM_URL))}
                        class={classes!(item_classes.clone(), "hover:bg-pink-600")}
                    >
                        { t::INSTAGRAM }
                    </button>
                    <button
                        type="button"
                        onclick={copy_then(None)}
                        class={classes!(item_classes.clone(), "hover:bg-gray-900")}
                    >
                        { if *copied { t::COPIED } else { t::COPY_LINK } }
                    </button>
                </div>
            }
        </div>
    }
}
