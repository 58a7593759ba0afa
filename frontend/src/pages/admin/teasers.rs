use hmedia_shared::{
    endpoints::Collection,
    feed::TeaserCard,
    forms::{FieldErrors, MultipartDraft, TeaserDraft},
    media::youtube_watch_url,
    models::sort_newest_first,
    ApiError, Teaser,
};
use yew::prelude::*;

use super::{
    actions_cell, checkbox_value, error_attr, input_value, status_cell, thumbnail_cell,
    use_admin_records, use_admin_session, AdminTable, Field, FormModal, NoticeSlot, PageHeader,
    SubmitButton, INPUT_CLASSES,
};
use crate::{
    api,
    components::confirm_dialog::ConfirmDialog,
    config::ADMIN_PAGE_SIZE,
    hooks::use_pagination,
    i18n::current::admin_teasers as t,
    seo,
};

#[function_component(AdminTeasersPage)]
pub fn admin_teasers_page() -> Html {
    let session = use_admin_session();
    let records = use_admin_records("teasers", (), |_| async move {
        let mut items = api::fetch_teasers().await?;
        sort_newest_first(&mut items);
        Ok::<_, ApiError>(items)
    });
    let (visible, current_page, total_pages, go_to_page) =
        use_pagination(records.items.clone(), ADMIN_PAGE_SIZE);
    // Outer `None`: form closed. `Some(None)`: creating.
    let editing = use_state(|| None::<Option<Teaser>>);
    let submitting = use_state(|| false);
    let server_error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<Teaser>);
    let deleting = use_state(|| false);

    use_effect_with((), |_| {
        seo::set_document_title(t::PAGE_TITLE);
        || ()
    });

    let open_create = {
        let editing = editing.clone();
        let server_error = server_error.clone();
        Callback::from(move |_| {
            server_error.set(None);
            editing.set(Some(None));
        })
    };

    let close_form = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(None))
    };

    let on_submit = {
        let editing = editing.clone();
        let session = session.clone();
        let submitting = submitting.clone();
        let server_error = server_error.clone();
        let reload = records.reload.clone();
        Callback::from(move |draft: TeaserDraft| {
            let Some(client) = session.client.clone() else {
                session.fail(&ApiError::Unauthorized, t::SAVE_FAILED);
                return;
            };
            let target = (*editing)
                .as_ref()
                .and_then(|current| current.as_ref())
                .map(|teaser| teaser.id.to_string());
            let editing = editing.clone();
            let session = session.clone();
            let submitting = submitting.clone();
            let server_error = server_error.clone();
            let reload = reload.clone();
            submitting.set(true);
            server_error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let (result, fallback) = match target.as_deref() {
                    Some(id) => (
                        client.update(Collection::TeaserAndPromo, id, &draft, None).await,
                        t::UPDATE_FAILED,
                    ),
                    None => (
                        client.create(Collection::TeaserAndPromo, &draft, None).await,
                        t::ADD_FAILED,
                    ),
                };
                match result {
                    Ok(()) => {
                        session.succeed(if target.is_some() { t::UPDATED } else { t::CREATED });
                        editing.set(None);
                        reload.emit(());
                    },
                    Err(ApiError::Unauthorized) => session.fail(&ApiError::Unauthorized, fallback),
                    Err(e) => server_error.set(Some(e.user_message(fallback))),
                }
                submitting.set(false);
            });
        })
    };

    let confirm_delete = {
        let session = session.clone();
        let pending_delete = pending_delete.clone();
        let deleting = deleting.clone();
        let reload = records.reload.clone();
        Callback::from(move |_| {
            let Some(teaser) = (*pending_delete).clone() else {
                return;
            };
            let Some(client) = session.client.clone() else {
                session.fail(&ApiError::Unauthorized, t::DELETE_FAILED);
                return;
            };
            let session = session.clone();
            let pending_delete = pending_delete.clone();
            let deleting = deleting.clone();
            let reload = reload.clone();
            deleting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match client.delete(Collection::TeaserAndPromo, &teaser.id.to_string()).await {
                    Ok(()) => {
                        session.succeed(t::DELETED);
                        reload.emit(());
                    },
                    Err(e) => session.fail(&e, t::DELETE_FAILED),
                }
                pending_delete.set(None);
                deleting.set(false);
            });
        })
    };

    let close_delete = {
        let pending_delete = pending_delete.clone();
        Callback::from(move |_| pending_delete.set(None))
    };

    let first_index = (current_page.max(1) - 1) * ADMIN_PAGE_SIZE;
    let rows = html! {
        { for visible.iter().enumerate().map(|(index, teaser)| {
            let on_edit = {
                let editing = editing.clone();
                let server_error = server_error.clone();
                let teaser = teaser.clone();
                Callback::from(move |_: MouseEvent| {
                    server_error.set(None);
                    editing.set(Some(Some(teaser.clone())));
                })
            };
            let on_delete = {
                let pending_delete = pending_delete.clone();
                let teaser = teaser.clone();
                Callback::from(move |_: MouseEvent| pending_delete.set(Some(teaser.clone())))
            };
            let card = TeaserCard::from_teaser(teaser);
            let watch = card.video_id.as_deref().map(youtube_watch_url);
            html! {
                <tr key={teaser.id.to_string()} class="hover:bg-gray-800">
                    <td class="px-4 py-3 text-gray-400">{ first_index + index + 1 }</td>
                    { thumbnail_cell(card.thumbnail.clone(), &card.title) }
                    <td class="max-w-xs px-4 py-3">
                        <p class="truncate font-medium">{ &card.title }</p>
                        if let Some(watch) = watch {
                            <a href={watch} target="_blank" rel="noopener noreferrer" class="text-xs text-blue-400 hover:underline">
                                { t::WATCH }
                            </a>
                        }
                    </td>
                    <td class="whitespace-nowrap px-4 py-3 text-gray-300">
                        { card.date.clone().unwrap_or_else(|| t::NO_DATE.to_string()) }
                    </td>
                    { status_cell(teaser.active_inactive) }
                    { actions_cell(Some(on_edit), on_delete) }
                </tr>
            }
        }) }
    };

    let (form_title, form_key) = match &*editing {
        Some(Some(teaser)) => (t::EDIT_TITLE, teaser.id.to_string()),
        _ => (t::ADD_TITLE, String::from("new")),
    };

    html! {
        <div>
            <PageHeader
                title={t::HEADING}
                subtitle={AttrValue::Static(t::SUBTITLE)}
                add={(AttrValue::Static(t::ADD_BUTTON), open_create)}
            />
            <NoticeSlot notice={session.notice.clone()} />
            <AdminTable
                headers={vec![t::COL_INDEX, t::COL_THUMBNAIL, t::COL_TITLE, t::COL_DATE, t::COL_STATUS, t::COL_ACTIONS]}
                loading={records.loading}
                {rows}
                empty={records.items.is_empty()}
                {current_page}
                {total_pages}
                on_page_change={go_to_page}
            />
            <FormModal open={editing.is_some()} title={form_title} on_close={close_form}>
                if let Some(initial) = (*editing).clone() {
                    <TeaserForm
                        key={form_key}
                        {initial}
                        server_error={(*server_error).clone()}
                        submitting={*submitting}
                        {on_submit}
                    />
                }
            </FormModal>
            <ConfirmDialog
                open={pending_delete.is_some()}
                on_close={close_delete}
                on_confirm={confirm_delete}
                title={t::DELETE_TITLE}
                confirming={*deleting}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TeaserFormProps {
    initial: Option<Teaser>,
    server_error: Option<String>,
    submitting: bool,
    on_submit: Callback<TeaserDraft>,
}

#[function_component(TeaserForm)]
fn teaser_form(props: &TeaserFormProps) -> Html {
    let draft = {
        let initial = props.initial.clone();
        use_state(move || initial.as_ref().map(TeaserDraft::from_record).unwrap_or_default())
    };
    let errors = use_state(FieldErrors::default);

    let set_text = |field: &'static str, apply: fn(&mut TeaserDraft, String)| {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                let mut next = (*draft).clone();
                apply(&mut next, value);
                draft.set(next);
                let mut cleared = (*errors).clone();
                cleared.clear(field);
                errors.set(cleared);
            }
        })
    };
    let on_title = set_text("title", |draft, value| draft.title = value);
    let on_url = set_text("url", |draft, value| draft.url = value);
    let on_date = set_text("published_date", |draft, value| draft.published_date = value);

    let on_active = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            if let Some(active) = checkbox_value(&event) {
                let mut next = (*draft).clone();
                next.active = active;
                draft.set(next);
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        let submitting = props.submitting;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if submitting {
                return;
            }
            match draft.validate() {
                Ok(()) => {
                    errors.set(FieldErrors::default());
                    on_submit.emit((*draft).clone());
                },
                Err(found) => errors.set(found),
            }
        })
    };

    let submit_label = if props.initial.is_some() { t::SAVE_BUTTON } else { t::ADD_VIDEO };

    html! {
        <form class="space-y-5" {onsubmit} novalidate=true>
            <Field label={t::FIELD_TITLE} error={error_attr(errors.get("title"))}>
                <input type="text" class={INPUT_CLASSES} value={draft.title.clone()} oninput={on_title} />
            </Field>
            <Field label={t::FIELD_URL} error={error_attr(errors.get("url"))}>
                <input
                    type="url"
                    class={INPUT_CLASSES}
                    placeholder="https://www.youtube.com/watch?v="
                    value={draft.url.clone()}
                    oninput={on_url}
                />
            </Field>
            <Field label={t::FIELD_DATE} error={error_attr(errors.get("published_date"))}>
                <input type="date" class={INPUT_CLASSES} value={draft.published_date.clone()} oninput={on_date} />
            </Field>
            <label class="flex items-center gap-3 text-sm text-gray-300">
                <input type="checkbox" class="h-4 w-4 accent-red-600" checked={draft.active} onchange={on_active} />
                { t::FIELD_ACTIVE }
            </label>
            if let Some(message) = props.server_error.clone() {
                <p class="rounded-lg bg-red-900/50 px-3 py-2 text-sm text-red-300" role="alert">{ message }</p>
            }
            <SubmitButton label={submit_label} submitting={props.submitting} />
        </form>
    }
}
