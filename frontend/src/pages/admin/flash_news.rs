use hmedia_shared::{
    endpoints::Collection,
    forms::{FieldErrors, FlashNewsDraft, MultipartDraft},
    models::sort_newest_first,
    ApiError, FlashNews,
};
use yew::prelude::*;

use super::{
    actions_cell, checkbox_value, error_attr, input_value, status_cell, use_admin_records,
    use_admin_session, AdminTable, Field, FormModal, NoticeSlot, PageHeader, SubmitButton,
    INPUT_CLASSES,
};
use crate::{
    api,
    components::confirm_dialog::ConfirmDialog,
    config::ADMIN_PAGE_SIZE,
    hooks::use_pagination,
    i18n::current::admin_flash_news as t,
    seo,
};

#[function_component(AdminFlashNewsPage)]
pub fn admin_flash_news_page() -> Html {
    let session = use_admin_session();
    let records = use_admin_records("flash news", (), |_| async move {
        let mut items = api::fetch_flash_news().await?;
        sort_newest_first(&mut items);
        Ok::<_, ApiError>(items)
    });
    let (visible, current_page, total_pages, go_to_page) =
        use_pagination(records.items.clone(), ADMIN_PAGE_SIZE);
    // Outer `None`: form closed. `Some(None)`: creating.
    let editing = use_state(|| None::<Option<FlashNews>>);
    let submitting = use_state(|| false);
    let server_error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<FlashNews>);
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
        Callback::from(move |draft: FlashNewsDraft| {
            let Some(client) = session.client.clone() else {
                session.fail(&ApiError::Unauthorized, t::SAVE_FAILED);
                return;
            };
            let target = (*editing)
                .as_ref()
                .and_then(|current| current.as_ref())
                .map(|item| item.id.to_string());
            let editing = editing.clone();
            let session = session.clone();
            let submitting = submitting.clone();
            let server_error = server_error.clone();
            let reload = reload.clone();
            submitting.set(true);
            server_error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match target.as_deref() {
                    Some(id) => client.update(Collection::FlashNews, id, &draft, None).await,
                    None => client.create(Collection::FlashNews, &draft, None).await,
                };
                match result {
                    Ok(()) => {
                        session.succeed(if target.is_some() { t::UPDATED } else { t::CREATED });
                        editing.set(None);
                        reload.emit(());
                    },
                    Err(ApiError::Unauthorized) => session.fail(&ApiError::Unauthorized, t::SAVE_FAILED),
                    Err(e) => server_error.set(Some(e.user_message(t::SAVE_FAILED))),
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
            let Some(item) = (*pending_delete).clone() else {
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
                match client.delete(Collection::FlashNews, &item.id.to_string()).await {
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
        { for visible.iter().enumerate().map(|(index, item)| {
            let on_edit = {
                let editing = editing.clone();
                let server_error = server_error.clone();
                let item = item.clone();
                Callback::from(move |_: MouseEvent| {
                    server_error.set(None);
                    editing.set(Some(Some(item.clone())));
                })
            };
            let on_delete = {
                let pending_delete = pending_delete.clone();
                let item = item.clone();
                Callback::from(move |_: MouseEvent| pending_delete.set(Some(item.clone())))
            };
            let active = FlashNewsDraft::from_record(item).active;
            html! {
                <tr key={item.id.to_string()} class="hover:bg-gray-800">
                    <td class="px-4 py-3 text-gray-400">{ first_index + index + 1 }</td>
                    <td class="max-w-xl px-4 py-3 font-medium">{ &item.title }</td>
                    { status_cell(active) }
                    { actions_cell(Some(on_edit), on_delete) }
                </tr>
            }
        }) }
    };

    let (form_title, form_key) = match &*editing {
        Some(Some(item)) => (t::EDIT_TITLE, item.id.to_string()),
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
                headers={vec![t::COL_INDEX, t::COL_TITLE, t::COL_STATUS, t::COL_ACTIONS]}
                loading={records.loading}
                {rows}
                empty={records.items.is_empty()}
                {current_page}
                {total_pages}
                on_page_change={go_to_page}
            />
            <FormModal open={editing.is_some()} title={form_title} on_close={close_form}>
                if let Some(initial) = (*editing).clone() {
                    <FlashNewsForm
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
                message={t::DELETE_MESSAGE}
                confirming={*deleting}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct FlashNewsFormProps {
    initial: Option<FlashNews>,
    server_error: Option<String>,
    submitting: bool,
    on_submit: Callback<FlashNewsDraft>,
}

#[function_component(FlashNewsForm)]
fn flash_news_form(props: &FlashNewsFormProps) -> Html {
    let draft = {
        let initial = props.initial.clone();
        use_state(move || initial.as_ref().map(FlashNewsDraft::from_record).unwrap_or_default())
    };
    let errors = use_state(FieldErrors::default);

    let on_title = {
        let draft = draft.clone();
        let errors = errors.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                let mut next = (*draft).clone();
                next.title = value;
                draft.set(next);
                errors.set(FieldErrors::default());
            }
        })
    };
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
                Ok(()) => on_submit.emit((*draft).clone()),
                Err(found) => errors.set(found),
            }
        })
    };

    let submit_label = if props.initial.is_some() { t::SAVE_BUTTON } else { t::ADD_BUTTON_SHORT };

    html! {
        <form class="space-y-5" {onsubmit} novalidate=true>
            <Field label={t::FIELD_TITLE} error={error_attr(errors.get("title"))}>
                <input type="text" class={INPUT_CLASSES} placeholder={t::TITLE_PLACEHOLDER} value={draft.title.clone()} oninput={on_title} />
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
