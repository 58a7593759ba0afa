use hmedia_shared::ads::AdSlot;
use yew::prelude::*;
use yew_hooks::prelude::use_interval;

use crate::{components::ad_list::ContactButton, i18n::current::ads as t};

const ROTATE_MS: u32 = 4000;

#[derive(Properties, PartialEq)]
pub struct FullWidthAdProps {
    pub ads: Vec<AdSlot>,
}

/// Banner ads rotating in a full-width strip.
#[function_component(FullWidthAd)]
pub fn full_width_ad(props: &FullWidthAdProps) -> Html {
    let active = use_state(|| 0usize);
    let count = props.ads.len();

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

    html! {
        <section class="w-full lg:py-8">
            <div class="relative overflow-hidden rounded-lg">
                { for props.ads.iter().enumerate().map(|(index, ad)| {
                    let visibility = if index == current { "block" } else { "hidden" };
                    let image = html! {
                        <img src={ad.image.clone()} alt={t::ALT} class="h-auto w-full object-cover" />
                    };
                    html! {
                        <div key={index} class={classes!("relative", "w-full", visibility)}>
                            if let Some(link) = ad.link.clone() {
                                <a href={link} class="block">{ image }</a>
                            } else {
                                { image }
                            }
                            if ad.show_contact {
                                <ContactButton class={classes!("absolute", "bottom-8", "right-1", "md:bottom-16", "md:right-2")} />
                            }
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
