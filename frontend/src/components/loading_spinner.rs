use yew::prelude::*;

use crate::i18n::current::common as t;

#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn dimension(self) -> u32 {
        match self {
            SpinnerSize::Small => 20,
            SpinnerSize::Medium => 36,
            SpinnerSize::Large => 52,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    #[prop_or(false)]
    pub fullscreen: bool,
    /// Caption under the spinner, e.g. "Loading flash news...".
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!(
        "width:{0}px;height:{0}px;",
        props.size.dimension()
    );
    let label = props.label.clone().unwrap_or_else(|| AttrValue::from(t::LOADING));

    let spinner = html! {
        <div
            class={classes!("flex", "flex-col", "items-center", "justify-center", "gap-3", "p-6")}
            role="status"
            aria-live="polite"
            aria-busy="true"
        >
            <div
                style={spinner_style}
                class={classes!(
                    "rounded-full",
                    "border-4",
                    "border-gray-200",
                    "border-t-red-600",
                    "animate-spin"
                )}
            />
            if props.label.is_some() {
                <span class="text-sm text-gray-500">{ label }</span>
            } else {
                <span class="sr-only">{ label }</span>
            }
        </div>
    };

    if props.fullscreen {
        html! {
            <div
                class={classes!(
                    "fixed",
                    "inset-0",
                    "z-40",
                    "flex",
                    "items-center",
                    "justify-center",
                    "bg-black/30"
                )}
            >
                { spinner }
            </div>
        }
    } else {
        spinner
    }
}
