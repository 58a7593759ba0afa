use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::i18n::current::error_banner as t;

/// Tone of a banner. Admin screens reuse the banner for success notices.
#[derive(Clone, Copy, PartialEq, Default)]
pub enum BannerKind {
    #[default]
    Error,
    Success,
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub kind: BannerKind,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let auto_timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { 3000 } else { 0 })
    };

    {
        let is_open = is_open.clone();
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
        });
    }

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(
            (*is_open, props.auto_dismiss, props.message.clone()),
            move |(visible, auto_dismiss, _message)| {
                if *auto_dismiss && *visible {
                    auto_timeout.reset();
                } else {
                    auto_timeout.cancel();
                }
            },
        );
    }

    if props.message.trim().is_empty() {
        return Html::default();
    }

    let (icon, title, tone) = match props.kind {
        BannerKind::Error => ("⚠️", t::TITLE, "bg-red-50 text-red-800 border-red-200"),
        BannerKind::Success => ("✓", t::SUCCESS_TITLE, "bg-green-50 text-green-800 border-green-200"),
    };

    let mut wrapper_classes = classes!(
        "flex",
        "items-start",
        "gap-3",
        "rounded-xl",
        "border",
        "px-5",
        "py-4",
        "text-sm",
        "shadow-lg",
        "transition-all",
        "duration-300",
        "ease-out",
        "overflow-hidden",
        "w-full",
        "max-w-2xl",
        tone
    );

    if *is_open {
        wrapper_classes.push("opacity-100 translate-y-0 max-h-48");
    } else {
        wrapper_classes.push("opacity-0 -translate-y-2 pointer-events-none max-h-0");
    }

    let close_button = {
        let dismiss = dismiss.clone();
        Callback::from(move |_| dismiss.emit(()))
    };

    html! {
        <div class={wrapper_classes} role="alert" aria-live="assertive">
            <span class="text-xl" aria-hidden="true">{ icon }</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ title }</p>
                <p>{ props.message.clone() }</p>
            </div>
            <button
                type="button"
                class="ml-4 inline-flex h-8 w-8 items-center justify-center rounded-full text-lg transition hover:bg-black/10"
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
