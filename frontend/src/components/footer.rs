use yew::prelude::*;

use crate::{
    config::{FACEBOOK_PAGE, INSTAGRAM_PAGE, SITE_CONTACT_EMAIL, YOUTUBE_CHANNEL},
    i18n::{current::footer as t, fill_one},
};

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let social_classes = "text-white transition hover:scale-110 hover:text-yellow-400";

    html! {
        <footer class="mt-16 bg-gray-900 text-gray-400">
            <div class="container mx-auto px-4">
                <div class="flex flex-col items-center justify-between gap-4 py-8 text-center text-xs lg:flex-row">
                    <div class="flex flex-col items-center gap-4 md:flex-row md:gap-10">
                        <nav class="flex items-center gap-6" aria-label={t::SOCIAL_ARIA}>
                            <a href={FACEBOOK_PAGE} target="_blank" rel="noopener noreferrer" class={social_classes}>
                                { "Facebook" }
                            </a>
                            <a href={INSTAGRAM_PAGE} target="_blank" rel="noopener noreferrer" class={social_classes}>
                                { "Instagram" }
                            </a>
                            <a href={YOUTUBE_CHANNEL} target="_blank" rel="noopener noreferrer" class={social_classes}>
                                { "YouTube" }
                            </a>
                        </nav>
                        <div class="flex items-center">
                            <span class="text-sm text-white md:text-base">{ t::CONTACT_LABEL }</span>
                            <a
                                href={format!("mailto:{}", SITE_CONTACT_EMAIL)}
                                class="ml-2 text-sm text-yellow-400 hover:underline md:text-base"
                            >
                                { SITE_CONTACT_EMAIL }
                            </a>
                        </div>
                    </div>
                    <p class="text-center lg:text-right">
                        { fill_one(t::COPYRIGHT_TEMPLATE, current_year()) }
                    </p>
                </div>
            </div>
        </footer>
    }
}
