use hmedia_shared::media::youtube_embed_url;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, KeyboardEvent};
use yew::prelude::*;

use crate::i18n::current::video_modal as t;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    /// Video to play; `None` keeps the modal closed.
    pub video_id: Option<String>,
    pub on_close: Callback<()>,
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|win| win.document()).and_then(|doc| doc.body()) else {
        return;
    };
    let classes = body.class_list();
    let _ = if locked {
        classes.add_1("overflow-hidden")
    } else {
        classes.remove_1("overflow-hidden")
    };
}

/// Autoplaying YouTube player over a dimmed page. Closes on backdrop click,
/// the close button or Escape.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let is_open = props.video_id.is_some();

    {
        let on_close = props.on_close.clone();
        use_effect_with(is_open, move |is_open| {
            let keydown_listener_opt = if *is_open {
                set_body_scroll_locked(true);
                let listener = Closure::wrap(Box::new(move |event: KeyboardEvent| {
                    if event.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(_)>);
                if let Some(win) = window() {
                    let _ = win.add_event_listener_with_callback(
                        "keydown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                Some(listener)
            } else {
                None
            };

            move || {
                set_body_scroll_locked(false);
                if let Some(listener) = keydown_listener_opt {
                    if let Some(win) = window() {
                        let _ = win.remove_event_listener_with_callback(
                            "keydown",
                            listener.as_ref().unchecked_ref(),
                        );
                    }
                }
            }
        });
    }

    let Some(video_id) = props.video_id.as_deref() else {
        return Html::default();
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4 backdrop-blur-sm"
            onclick={close.clone()}
        >
            <div class="relative aspect-video w-full max-w-4xl rounded-lg bg-black shadow-2xl" onclick={stop}>
                <button
                    type="button"
                    onclick={close}
                    class="absolute -right-3 -top-3 z-10 rounded-full bg-white p-1.5 text-black transition-transform hover:scale-110 hover:bg-gray-200"
                    aria-label={t::CLOSE_ARIA}
                >
                    {"✕"}
                </button>
                <iframe
                    class="h-full w-full rounded-lg"
                    src={youtube_embed_url(video_id)}
                    title={t::PLAYER_TITLE}
                    frameborder="0"
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                    allowfullscreen=true
                />
            </div>
        </div>
    }
}
