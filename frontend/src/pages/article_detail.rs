use hmedia_shared::{
    ads::PlacementPage,
    dates::display_date,
    share::article_url,
    summary::{sanitize_body, summarize, SHARE_DESCRIPTION_CHARS},
    tags, ArticleCategory, ArticleRecord,
};
use yew::prelude::*;

use crate::{
    api,
    components::{
        ad_list::AdList,
        full_width_ad::FullWidthAd,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        raw_html::RawHtml,
        share_buttons::ShareButtons,
    },
    config,
    hooks::use_page_ads,
    i18n::current::article_detail as t,
    pages::not_found::MissingArticle,
    seo,
};

#[derive(Properties, Clone, PartialEq)]
pub struct ArticleDetailProps {
    pub category: ArticleCategory,
    pub slug: String,
}

#[function_component(ArticleDetailPage)]
pub fn article_detail_page(props: &ArticleDetailProps) -> Html {
    let article = use_state(|| None::<ArticleRecord>);
    let loading = use_state(|| true);
    let ads = use_page_ads(PlacementPage::NewsDetail);

    {
        let article = article.clone();
        let loading = loading.clone();
        use_effect_with((props.category, props.slug.clone()), move |(category, slug)| {
            let category = *category;
            let slug = slug.clone();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let fetched = api::fetch_article(category, &slug).await;
                if let Some(record) = fetched.as_ref() {
                    seo::apply_article_seo(category, record);
                }
                article.set(fetched);
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <LoadingSpinner size={SpinnerSize::Large} fullscreen={true} /> };
    }

    let Some(article) = (*article).clone() else {
        return html! { <MissingArticle /> };
    };

    let body = sanitize_body(&article.content);
    let share_url = article_url(&config::site_origin(), props.category, &article.slug);
    let share_description = summarize(&article.content, SHARE_DESCRIPTION_CHARS);
    let date = article.display_date_raw().and_then(display_date);
    let tag_list = tags::normalize(&article.tags);
    let author = article.author.clone().filter(|author| !author.trim().is_empty());

    html! {
        <main class="min-h-screen bg-gray-50 text-[#141414]">
            <div class="container mx-auto grid grid-cols-1 gap-10 px-4 py-10 lg:grid-cols-12">
                <div class="lg:col-span-9">
                    <header class="mb-6">
                        <p class="mb-2 text-xs font-bold uppercase tracking-wide text-red-600">
                            { props.category.label() }
                        </p>
                        <h1 class="mb-4 text-xl font-extrabold md:text-3xl">{ &article.title }</h1>
                        <div class="flex flex-wrap items-center gap-4 text-sm text-gray-600">
                            if let Some(author) = author {
                                <span>
                                    <span class="sr-only">{ t::BY }</span>
                                    { author }
                                </span>
                            }
                            if let Some(date) = date {
                                <span>{ date }</span>
                            }
                        </div>
                    </header>

                    if let Some(src) = config::image_url(article.image.as_deref()) {
                        <div class="mb-8 aspect-video overflow-hidden rounded-lg">
                            <img src={src} alt={article.title.clone()} class="h-full w-full object-cover" />
                        </div>
                    }

                    <RawHtml
                        html={body}
                        class={classes!("article-content", "w-full", "text-sm", "text-gray-700", "sm:text-lg")}
                    />

                    if !tag_list.is_empty() {
                        <ul class="mt-8 flex flex-wrap gap-2" aria-label={t::TAGS_ARIA}>
                            { for tag_list.iter().map(|tag| html! {
                                <li key={tag.clone()} class="rounded-full bg-gray-200 px-3 py-1 text-xs font-semibold text-gray-700">
                                    { format!("#{}", tag) }
                                </li>
                            }) }
                        </ul>
                    }

                    <div class="mt-10 flex justify-end">
                        <ShareButtons
                            title={article.title.clone()}
                            description={share_description}
                            url={share_url}
                        />
                    </div>

                    <div class="mt-10">
                        <FullWidthAd ads={ads.banner.clone()} />
                    </div>
                </div>
                <aside class="space-y-8 self-start lg:sticky lg:top-24 lg:col-span-3">
                    <AdList ads={ads.square.clone()} />
                </aside>
            </div>
        </main>
    }
}
