use hmedia_shared::ads::AdSlot;
use yew::prelude::*;

use crate::{config::CONTACT_EMAIL, i18n::current::ads as t};

#[derive(Properties, PartialEq)]
pub struct AdListProps {
    pub ads: Vec<AdSlot>,
}

/// Square ads stacked in a sidebar column.
#[function_component(AdList)]
pub fn ad_list(props: &AdListProps) -> Html {
    if props.ads.is_empty() {
        return Html::default();
    }

    html! {
        <div class="grid grid-cols-1 gap-4 md:grid-cols-3 lg:grid-cols-1">
            { for props.ads.iter().enumerate().map(|(index, ad)| html! {
                <SquareAd key={index} ad={ad.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SquareAdProps {
    ad: AdSlot,
}

#[function_component(SquareAd)]
fn square_ad(props: &SquareAdProps) -> Html {
    let ad = &props.ad;
    let body = html! {
        <div class="relative h-full w-full">
            <img src={ad.image.clone()} alt={t::ALT} loading="lazy" class="h-full w-full rounded-lg object-cover" />
            if ad.show_contact {
                <ContactButton
                    class={classes!("absolute", "bottom-2", "left-1/2", "-translate-x-1/2", "sm:bottom-3", "xl:bottom-4")}
                />
            }
        </div>
    };

    match ad.link.as_ref() {
        Some(link) => html! {
            <a href={link.clone()} target="_blank" rel="noopener noreferrer" class="relative block">{ body }</a>
        },
        None => html! { <div class="relative block">{ body }</div> },
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactButtonProps {
    #[prop_or_default]
    pub class: Classes,
}

/// "Contact Us" mail link laid over an ad.
#[function_component(ContactButton)]
pub fn contact_button(props: &ContactButtonProps) -> Html {
    html! {
        <a
            href={format!("mailto:{}", CONTACT_EMAIL)}
            class={classes!(
                "whitespace-nowrap",
                "rounded-lg",
                "bg-red-600",
                "px-3",
                "py-1.5",
                "text-xs",
                "font-semibold",
                "text-white",
                "shadow-lg",
                "transition",
                "hover:bg-gray-900",
                "sm:px-4",
                "sm:text-sm",
                props.class.clone()
            )}
        >
            { t::CONTACT_US }
        </a>
    }
}
