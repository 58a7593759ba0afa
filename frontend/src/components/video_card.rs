use hmedia_shared::feed::TeaserCard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub card: TeaserCard,
    /// Receives the YouTube id when the card is clicked.
    pub on_play: Callback<String>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let image_failed = use_state(|| false);
    let card = &props.card;

    let onclick = {
        let on_play = props.on_play.clone();
        let video_id = card.video_id.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(id) = video_id.clone() {
                on_play.emit(id);
            }
        })
    };
    let onerror = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| image_failed.set(true))
    };

    let thumbnail = card.thumbnail.clone().filter(|_| !*image_failed);

    html! {
        <div
            class={classes!(
                "group",
                "mb-8",
                "flex",
                "flex-col",
                "gap-3",
                if card.is_playable() { "cursor-pointer" } else { "cursor-default" }
            )}
            {onclick}
        >
            <div class="relative aspect-video overflow-hidden rounded-lg">
                if let Some(src) = thumbnail {
                    <img
                        src={src}
                        alt={card.title.clone()}
                        loading="lazy"
                        {onerror}
                        class="h-full w-full object-cover transition-transform duration-500 group-hover:scale-105"
                    />
                } else {
                    <div class="flex h-full w-full items-center justify-center bg-gray-200" />
                }
                <div class="absolute inset-0 flex items-center justify-center transition-all duration-300 group-hover:bg-black/50">
                    <PlayIcon />
                </div>
            </div>
            <div>
                <h3 class="mt-1 line-clamp-2 text-lg font-bold transition-colors group-hover:text-red-600">
                    { &card.title }
                </h3>
                if let Some(date) = card.date.clone() {
                    <p class="mt-2 text-xs text-gray-500">{ date }</p>
                }
            </div>
        </div>
    }
}

#[function_component(PlayIcon)]
fn play_icon() -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width="50"
            height="50"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="1.5"
            class="text-red-600 drop-shadow-lg transition-all duration-300 group-hover:scale-110 group-hover:text-white"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="10" />
            <polygon points="10 8 16 12 10 16 10 8" />
        </svg>
    }
}
