use yew::prelude::*;

use crate::{
    components::loading_spinner::{LoadingSpinner, SpinnerSize},
    i18n::current::confirm_dialog as t,
};

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub on_confirm: Callback<()>,
    #[prop_or(AttrValue::Static(t::DEFAULT_TITLE))]
    pub title: AttrValue,
    #[prop_or(AttrValue::Static(t::DEFAULT_MESSAGE))]
    pub message: AttrValue,
    #[prop_or(AttrValue::Static(t::DEFAULT_CONFIRM))]
    pub confirm_text: AttrValue,
    /// Disables both buttons while the confirmed action runs.
    #[prop_or(false)]
    pub confirming: bool,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.open {
        return Html::default();
    }

    let close = {
        let on_close = props.on_close.clone();
        let confirming = props.confirming;
        Callback::from(move |_: MouseEvent| {
            if !confirming {
                on_close.emit(());
            }
        })
    };
    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/60 p-4 backdrop-blur-sm"
            onclick={close.clone()}
        >
            <div
                class="w-full max-w-xl rounded-lg border border-gray-700 bg-gray-800 text-white shadow-sm"
                onclick={stop}
                role="dialog"
                aria-modal="true"
            >
                <div class="flex items-center justify-between border-b border-gray-700 p-5">
                    <h2 class="flex items-center gap-3 text-xl font-bold">
                        <span class="text-yellow-400" aria-hidden="true">{"⚠"}</span>
                        { props.title.clone() }
                    </h2>
                    <button
                        type="button"
                        onclick={close.clone()}
                        class="rounded-full p-1 hover:bg-gray-700"
                        aria-label={t::CLOSE_ARIA}
                    >
                        {"✕"}
                    </button>
                </div>
                <div class="p-6">
                    <p class="text-gray-300">{ props.message.clone() }</p>
                </div>
                <div class="flex items-center justify-end gap-4 border-t border-gray-700 p-5">
                    <button
                        type="button"
                        onclick={close}
                        disabled={props.confirming}
                        class="rounded-lg px-4 py-2 text-sm font-medium text-gray-300 transition-colors hover:bg-gray-700 disabled:cursor-not-allowed disabled:opacity-50"
                    >
                        { t::CANCEL }
                    </button>
                    <button
                        type="button"
                        onclick={confirm}
                        disabled={props.confirming}
                        class="flex w-28 items-center justify-center rounded-lg bg-red-600 px-6 py-2 text-sm font-semibold text-white transition-colors hover:bg-red-700 disabled:cursor-wait disabled:bg-red-400"
                    >
                        if props.confirming {
                            <LoadingSpinner size={SpinnerSize::Small} />
                        } else {
                            { props.confirm_text.clone() }
                        }
                    </button>
                </div>
            </div>
        </div>
    }
}
