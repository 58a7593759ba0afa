use hmedia_shared::{
    dates::input_date, endpoints::Collection, models::sort_newest_first, ApiError, ArticleRecord,
};
use yew::prelude::*;

use super::{use_admin_records, use_admin_session, AdminTable, NoticeSlot, PageHeader};
use crate::{
    api,
    components::confirm_dialog::ConfirmDialog,
    config::{image_url, ADMIN_PAGE_SIZE},
    hooks::use_pagination,
    i18n::current::admin_trending as t,
    seo,
};

/// Trending articles are flagged from the article forms; this screen only
/// removes them from the strip and previews their images.
#[function_component(AdminTrendingPage)]
pub fn admin_trending_page() -> Html {
    let session = use_admin_session();
    let records = use_admin_records("trending news", (), |_| async move {
        let mut items = api::fetch_articles(Collection::TrendingNews).await?;
        sort_newest_first(&mut items);
        Ok::<_, ApiError>(items)
    });
    let (visible, current_page, total_pages, go_to_page) =
        use_pagination(records.items.clone(), ADMIN_PAGE_SIZE);
    let pending_remove = use_state(|| None::<ArticleRecord>);
    let removing = use_state(|| false);
    let preview = use_state(|| None::<String>);

    use_effect_with((), |_| {
        seo::set_document_title(t::PAGE_TITLE);
        || ()
    });

    let confirm_remove = {
        let session = session.clone();
        let pending_remove = pending_remove.clone();
        let removing = removing.clone();
        let reload = records.reload.clone();
        Callback::from(move |_| {
            let Some(record) = (*pending_remove).clone() else {
                return;
            };
            let Some(client) = session.client.clone() else {
                session.fail(&ApiError::Unauthorized, t::REMOVE_FAILED);
                return;
            };
            let session = session.clone();
            let pending_remove = pending_remove.clone();
            let removing = removing.clone();
            let reload = reload.clone();
            removing.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match client.delete(Collection::TrendingNews, &record.id.to_string()).await {
                    Ok(()) => {
                        session.succeed(t::REMOVED);
                        reload.emit(());
                    },
                    Err(e) => session.fail(&e, t::REMOVE_FAILED),
                }
                pending_remove.set(None);
                removing.set(false);
            });
        })
    };

    let close_remove = {
        let pending_remove = pending_remove.clone();
        Callback::from(move |_| pending_remove.set(None))
    };

    let close_preview = {
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| preview.set(None))
    };

    let rows = html! {
        { for visible.iter().map(|record| {
            let image = image_url(record.image.as_deref());
            let on_view = {
                let preview = preview.clone();
                let image = image.clone();
                Callback::from(move |_: MouseEvent| preview.set(image.clone()))
            };
            let on_remove = {
                let pending_remove = pending_remove.clone();
                let record = record.clone();
                Callback::from(move |_: MouseEvent| pending_remove.set(Some(record.clone())))
            };
            let date = record
                .display_date_raw()
                .and_then(input_date)
                .unwrap_or_else(|| "-".to_string());
            html! {
                <tr key={record.id.to_string()} class="hover:bg-gray-800">
                    { super::thumbnail_cell(image.clone(), &record.title) }
                    <td class="max-w-md px-4 py-3">
                        <p class="line-clamp-2 font-medium" title={record.title.clone()}>{ &record.title }</p>
                    </td>
                    <td class="whitespace-nowrap px-4 py-3 text-gray-300">{ date }</td>
                    <td class="px-4 py-3">
                        <div class="flex gap-2">
                            <button
                                type="button"
                                class="rounded-md px-3 py-1.5 text-blue-400 transition hover:bg-gray-700 disabled:opacity-40"
                                title={t::VIEW_IMAGE}
                                disabled={image.is_none()}
                                onclick={on_view}
                            >
                                { t::VIEW_IMAGE }
                            </button>
                            <button
                                type="button"
                                class="rounded-md px-3 py-1.5 text-red-400 transition hover:bg-gray-700"
                                title={t::REMOVE_TITLE}
                                onclick={on_remove}
                            >
                                { t::REMOVE }
                            </button>
                        </div>
                    </td>
                </tr>
            }
        }) }
    };

    html! {
        <div>
            <PageHeader title={t::HEADING} subtitle={AttrValue::Static(t::SUBTITLE)} />
            <NoticeSlot notice={session.notice.clone()} />
            <AdminTable
                headers={vec![t::COL_IMAGE, t::COL_TITLE, t::COL_DATE, t::COL_ACTIONS]}
                loading={records.loading}
                {rows}
                empty={records.items.is_empty()}
                {current_page}
                {total_pages}
                on_page_change={go_to_page}
            />
            <ConfirmDialog
                open={pending_remove.is_some()}
                on_close={close_remove}
                on_confirm={confirm_remove}
                title={t::REMOVE_TITLE}
                message={t::REMOVE_MESSAGE}
                confirm_text={t::REMOVE}
                confirming={*removing}
            />
            if let Some(src) = (*preview).clone() {
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4" onclick={close_preview.clone()}>
                    <div class="relative" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                        <button
                            type="button"
                            class="absolute -right-3 -top-3 h-8 w-8 rounded-full bg-white text-lg text-gray-900 shadow"
                            aria-label={t::CLOSE_PREVIEW}
                            onclick={close_preview}
                        >
                            {"×"}
                        </button>
                        <img src={src} alt={t::PREVIEW_ALT} class="max-h-[80vh] max-w-[90vw] rounded-lg object-contain" />
                    </div>
                </div>
            }
        </div>
    }
}
