use hmedia_shared::Banner;
use yew::prelude::*;
use yew_hooks::prelude::use_interval;

use crate::{config::image_url, i18n::current::hero as t};

const ROTATE_MS: u32 = 5000;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub banners: Vec<Banner>,
}

/// Cross-fading carousel of active home banners.
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let slides: Vec<(String, String)> = props
        .banners
        .iter()
        .filter(|banner| banner.is_active())
        .filter_map(|banner| {
            let src = image_url(banner.image.as_deref())?;
            let alt = if banner.title.trim().is_empty() {
                t::BANNER_ALT.to_string()
            } else {
                banner.title.clone()
            };
            Some((src, alt))
        })
        .collect();

    let active = use_state(|| 0usize);
    let count = slides.len();

    {
        let active = active.clone();
        use_interval(
            move || {
                if count > 1 {
                    active.set((*active + 1) % count);
                }
            },
            if count > 1 { ROTATE_MS } else { 0 },
        );
    }

    if count == 0 {
        return Html::default();
    }

    let current = (*active).min(count - 1);
    let select = |index: usize| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(index))
    };

    html! {
        <section class="relative grid h-full w-full overflow-hidden rounded-lg text-white">
            { for slides.iter().enumerate().map(|(index, (src, alt))| {
                let opacity = if index == current { "opacity-100" } else { "opacity-0 pointer-events-none" };
                html! {
                    <img
                        key={index}
                        src={src.clone()}
                        alt={alt.clone()}
                        class={classes!(
                            "col-start-1",
                            "row-start-1",
                            "h-full",
                            "w-full",
                            "rounded-lg",
                            "object-fill",
                            "transition-opacity",
                            "duration-700",
                            opacity
                        )}
                    />
                }
            }) }
            if count > 1 {
                <div class="absolute bottom-3 left-1/2 flex -translate-x-1/2 gap-2">
                    { for (0..count).map(|index| html! {
                        <button
                            key={index}
                            type="button"
                            aria-label={crate::i18n::fill_one(t::GOTO_SLIDE_TEMPLATE, index + 1)}
                            class={classes!(
                                "h-2.5",
                                "w-2.5",
                                "rounded-full",
                                if index == current { "bg-white" } else { "bg-white/50" }
                            )}
                            onclick={select(index)}
                        />
                    }) }
                </div>
            }
        </section>
    }
}
