use hmedia_shared::{
    ads::{AdShape, PlacementPage},
    forms::{AdvertisementDraft, FieldErrors, MultipartDraft},
    models::{sort_newest_first, Timestamped},
    Advertisement, ApiError,
};
use web_sys::{File, HtmlSelectElement};
use yew::prelude::*;

use super::{
    actions_cell, checkbox_value, error_attr, input_value, status_cell, thumbnail_cell,
    use_admin_records, use_admin_session, AdminTable, Field, FormModal, NoticeSlot, PageHeader,
    SubmitButton, INPUT_CLASSES,
};
use crate::{
    api,
    components::{confirm_dialog::ConfirmDialog, image_picker::ImagePicker},
    config::{image_url, ADMIN_PAGE_SIZE},
    hooks::use_pagination,
    i18n::{current::admin_ads as t, fill_one},
    seo,
};

/// An ad together with the collection it lives in.
#[derive(Clone, PartialEq)]
struct AdRow {
    shape: AdShape,
    ad: Advertisement,
}

impl Timestamped for AdRow {
    fn created_at(&self) -> Option<&str> {
        self.ad.created_at()
    }
}

async fn fetch_all_ads() -> Result<Vec<AdRow>, ApiError> {
    let (banners, squares) = futures::join!(api::fetch_ads(AdShape::Banner), api::fetch_ads(AdShape::Square));
    let mut rows = Vec::new();
    for (shape, result) in [(AdShape::Banner, banners), (AdShape::Square, squares)] {
        match result {
            Ok(ads) => rows.extend(ads.into_iter().map(|ad| AdRow { shape, ad })),
            Err(e) => web_sys::console::error_1(
                &format!("Failed to fetch {}s: {}", shape.label().to_lowercase(), e).into(),
            ),
        }
    }
    sort_newest_first(&mut rows);
    Ok(rows)
}

fn select_value(event: &Event) -> Option<String> {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
}

/// Form state: which shape is being edited and the record, if any.
#[derive(Clone, PartialEq)]
enum Editing {
    Closed,
    ChoosingShape,
    Open(AdShape, Option<Advertisement>),
}

#[function_component(AdminAdvertisementsPage)]
pub fn admin_advertisements_page() -> Html {
    let session = use_admin_session();
    let records = use_admin_records("advertisements", (), |_| fetch_all_ads());
    let filter = use_state(|| None::<String>);

    let page_types: Vec<String> = {
        let mut seen: Vec<String> = Vec::new();
        for row in &records.items {
            if let Some(page_type) = row.ad.page_type.as_deref() {
                if !seen.iter().any(|known| known == page_type) {
                    seen.push(page_type.to_string());
                }
            }
        }
        seen
    };
    let filtered: Vec<AdRow> = records
        .items
        .iter()
        .filter(|row| {
            (*filter)
                .as_deref()
                .map_or(true, |wanted| row.ad.page_type.as_deref() == Some(wanted))
        })
        .cloned()
        .collect();
    let filtered_empty = filtered.is_empty();
    let (visible, current_page, total_pages, go_to_page) = use_pagination(filtered, ADMIN_PAGE_SIZE);

    let editing = use_state(|| Editing::Closed);
    let submitting = use_state(|| false);
    let server_error = use_state(|| None::<String>);
    let pending_delete = use_state(|| None::<AdRow>);
    let deleting = use_state(|| false);

    use_effect_with((), |_| {
        seo::set_document_title(t::PAGE_TITLE);
        || ()
    });

    let on_filter = {
        let filter = filter.clone();
        let go_to_page = go_to_page.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                filter.set((value != t::FILTER_ALL).then_some(value));
                go_to_page.emit(1);
            }
        })
    };

    let open_create = {
        let editing = editing.clone();
        let server_error = server_error.clone();
        Callback::from(move |_| {
            server_error.set(None);
            editing.set(Editing::ChoosingShape);
        })
    };

    let choose_shape = {
        let editing = editing.clone();
        move |shape: AdShape| {
            let editing = editing.clone();
            Callback::from(move |_: MouseEvent| editing.set(Editing::Open(shape, None)))
        }
    };

    let close_form = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(Editing::Closed))
    };

    let on_submit = {
        let editing = editing.clone();
        let session = session.clone();
        let submitting = submitting.clone();
        let server_error = server_error.clone();
        let reload = records.reload.clone();
        Callback::from(move |(draft, image): (AdvertisementDraft, Option<File>)| {
            let Some(client) = session.client.clone() else {
                session.fail(&ApiError::Unauthorized, t::SAVE_FAILED);
                return;
            };
            let target = match &*editing {
                Editing::Open(_, Some(ad)) => Some(ad.id.to_string()),
                _ => None,
            };
            let collection = draft.shape.collection();
            let editing = editing.clone();
            let session = session.clone();
            let submitting = submitting.clone();
            let server_error = server_error.clone();
            let reload = reload.clone();
            submitting.set(true);
            server_error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match target.as_deref() {
                    Some(id) => client.update(collection, id, &draft, image.as_ref()).await,
                    None => {
                        let draft = AdvertisementDraft {
                            created_at: Some(String::from(js_sys::Date::new_0().to_iso_string())),
                            ..draft
                        };
                        client.create(collection, &draft, image.as_ref()).await
                    },
                };
                match result {
                    Ok(()) => {
                        session.succeed(if target.is_some() { t::UPDATED } else { t::CREATED });
                        editing.set(Editing::Closed);
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
            let Some(row) = (*pending_delete).clone() else {
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
                match client.delete(row.shape.collection(), &row.ad.id.to_string()).await {
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
        { for visible.iter().enumerate().map(|(index, row)| {
            let on_edit = {
                let editing = editing.clone();
                let server_error = server_error.clone();
                let row = row.clone();
                Callback::from(move |_: MouseEvent| {
                    server_error.set(None);
                    editing.set(Editing::Open(row.shape, Some(row.ad.clone())));
                })
            };
            let on_delete = {
                let pending_delete = pending_delete.clone();
                let row = row.clone();
                Callback::from(move |_: MouseEvent| pending_delete.set(Some(row.clone())))
            };
            let ad = &row.ad;
            let order = if ad.order == i64::MAX { String::from("-") } else { ad.order.to_string() };
            html! {
                <tr key={format!("{}-{}", row.shape.collection(), ad.id)} class="hover:bg-gray-800">
                    <td class="px-4 py-3 text-gray-400">{ first_index + index + 1 }</td>
                    { thumbnail_cell(image_url(ad.image.as_deref()), &ad.title) }
                    <td class="max-w-xs truncate px-4 py-3 font-medium">{ &ad.title }</td>
                    <td class="px-4 py-3 text-gray-300">{ ad.page_type.clone().unwrap_or_default() }</td>
                    <td class="px-4 py-3">
                        <span class="rounded-full bg-gray-700 px-2.5 py-1 text-xs font-semibold text-gray-200">
                            { row.shape.label() }
                        </span>
                    </td>
                    <td class="px-4 py-3 text-center text-gray-300">{ order }</td>
                    { status_cell(ad.status) }
                    { actions_cell(Some(on_edit), on_delete) }
                </tr>
            }
        }) }
    };

    let current_filter = (*filter).clone().unwrap_or_else(|| t::FILTER_ALL.to_string());
    let (form_open, form_title, form_body) = match (*editing).clone() {
        Editing::Closed => (false, AttrValue::Static(t::ADD_TITLE), Html::default()),
        Editing::ChoosingShape => (
            true,
            AttrValue::Static(t::CHOOSE_TITLE),
            html! {
                <div class="grid gap-4">
                    <button
                        type="button"
                        class="rounded-lg border border-gray-700 p-4 text-left transition hover:border-red-600"
                        onclick={choose_shape(AdShape::Banner)}
                    >
                        <span class="block font-semibold">{ AdShape::Banner.label() }</span>
                        <span class="text-sm text-gray-400">{ t::BANNER_HINT }</span>
                    </button>
                    <button
                        type="button"
                        class="rounded-lg border border-gray-700 p-4 text-left transition hover:border-red-600"
                        onclick={choose_shape(AdShape::Square)}
                    >
                        <span class="block font-semibold">{ AdShape::Square.label() }</span>
                        <span class="text-sm text-gray-400">{ t::SQUARE_HINT }</span>
                    </button>
                </div>
            },
        ),
        Editing::Open(shape, initial) => {
            let (title, key) = match initial.as_ref() {
                Some(ad) => (t::EDIT_TITLE_TEMPLATE, format!("{}-{}", shape.collection(), ad.id)),
                None => (t::ADD_TITLE_TEMPLATE, format!("{}-new", shape.collection())),
            };
            (
                true,
                AttrValue::from(fill_one(title, shape.label())),
                html! {
                    <AdvertisementForm
                        key={key}
                        {shape}
                        {initial}
                        server_error={(*server_error).clone()}
                        submitting={*submitting}
                        on_submit={on_submit.clone()}
                    />
                },
            )
        },
    };

    html! {
        <div>
            <PageHeader
                title={t::HEADING}
                subtitle={AttrValue::Static(t::SUBTITLE)}
                add={(AttrValue::Static(t::ADD_BUTTON), open_create)}
            >
                <label class="flex items-center gap-2 text-sm text-gray-300">
                    { t::FILTER_LABEL }
                    <select class={INPUT_CLASSES} onchange={on_filter}>
                        <option value={t::FILTER_ALL} selected={current_filter == t::FILTER_ALL}>{ t::FILTER_ALL }</option>
                        { for page_types.iter().map(|page_type| html! {
                            <option key={page_type.clone()} value={page_type.clone()} selected={current_filter == *page_type}>
                                { page_type }
                            </option>
                        }) }
                    </select>
                </label>
            </PageHeader>
            <NoticeSlot notice={session.notice.clone()} />
            <AdminTable
                headers={vec![
                    t::COL_INDEX, t::COL_IMAGE, t::COL_TITLE, t::COL_PAGE, t::COL_TYPE,
                    t::COL_ORDER, t::COL_STATUS, t::COL_ACTIONS,
                ]}
                loading={records.loading}
                {rows}
                empty={filtered_empty}
                {current_page}
                {total_pages}
                on_page_change={go_to_page}
            />
            <FormModal open={form_open} title={form_title} on_close={close_form}>
                { form_body }
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
struct AdvertisementFormProps {
    shape: AdShape,
    initial: Option<Advertisement>,
    server_error: Option<String>,
    submitting: bool,
    on_submit: Callback<(AdvertisementDraft, Option<File>)>,
}

#[function_component(AdvertisementForm)]
fn advertisement_form(props: &AdvertisementFormProps) -> Html {
    let shape = props.shape;
    let had_image = props.initial.as_ref().is_some_and(|ad| ad.image.is_some());
    let draft = {
        let initial = props.initial.clone();
        use_state(move || match initial {
            Some(ad) => AdvertisementDraft::from_record(shape, &ad),
            None => AdvertisementDraft::new(shape),
        })
    };
    let image = use_state(|| None::<File>);
    let errors = use_state(FieldErrors::default);

    let set_text = |field: &'static str, apply: fn(&mut AdvertisementDraft, String)| {
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
    let on_order = set_text("order", |draft, value| draft.order = value);
    let on_link = set_text("link", |draft, value| draft.link = value);

    let on_page = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            if let Some(page) = select_value(&event).as_deref().and_then(PlacementPage::from_label) {
                let mut next = (*draft).clone();
                next.page = page;
                draft.set(next);
            }
        })
    };
    let set_flag = |apply: fn(&mut AdvertisementDraft, bool)| {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            if let Some(checked) = checkbox_value(&event) {
                let mut next = (*draft).clone();
                apply(&mut next, checked);
                draft.set(next);
            }
        })
    };
    let on_active = set_flag(|draft, value| draft.active = value);
    let on_contact = set_flag(|draft, value| draft.show_contact = value);

    let on_image = {
        let draft = draft.clone();
        let image = image.clone();
        Callback::from(move |file: Option<File>| {
            let mut next = (*draft).clone();
            next.has_image = file.is_some() || had_image;
            draft.set(next);
            image.set(file);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let image = image.clone();
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
                    on_submit.emit(((*draft).clone(), (*image).clone()));
                },
                Err(found) => errors.set(found),
            }
        })
    };

    let existing = props
        .initial
        .as_ref()
        .and_then(|ad| image_url(ad.image.as_deref()))
        .map(AttrValue::from);
    let submit_label = if props.initial.is_some() { t::SAVE_BUTTON } else { t::CREATE_BUTTON };

    html! {
        <form class="space-y-5" {onsubmit} novalidate=true>
            <Field label={t::FIELD_TITLE} error={error_attr(errors.get("title"))}>
                <input type="text" class={INPUT_CLASSES} value={draft.title.clone()} oninput={on_title} />
            </Field>
            <Field label={t::FIELD_IMAGE} error={error_attr(errors.get("image"))}>
                <ImagePicker {existing} require_landscape={shape.requires_landscape()} on_change={on_image} />
            </Field>
            <div class="grid grid-cols-2 gap-4">
                <Field label={t::FIELD_PAGE}>
                    <select class={INPUT_CLASSES} onchange={on_page}>
                        { for PlacementPage::ALL.iter().map(|page| html! {
                            <option key={page.label()} value={page.label()} selected={*page == draft.page}>
                                { page.label() }
                            </option>
                        }) }
                    </select>
                </Field>
                <Field label={t::FIELD_ORDER} error={error_attr(errors.get("order"))}>
                    <input type="number" min="0" class={INPUT_CLASSES} value={draft.order.clone()} oninput={on_order} />
                </Field>
            </div>
            <Field label={t::FIELD_LINK}>
                <input type="url" class={INPUT_CLASSES} placeholder="https://" value={draft.link.clone()} oninput={on_link} />
            </Field>
            <div class="flex flex-wrap gap-6">
                <label class="flex items-center gap-3 text-sm text-gray-300">
                    <input type="checkbox" class="h-4 w-4 accent-red-600" checked={draft.active} onchange={on_active} />
                    { t::FIELD_ACTIVE }
                </label>
                <label class="flex items-center gap-3 text-sm text-gray-300">
                    <input type="checkbox" class="h-4 w-4 accent-red-600" checked={draft.show_contact} onchange={on_contact} />
                    { t::FIELD_CONTACT }
                </label>
            </div>
            if let Some(message) = props.server_error.clone() {
                <p class="rounded-lg bg-red-900/50 px-3 py-2 text-sm text-red-300" role="alert">{ message }</p>
            }
            <SubmitButton label={submit_label} submitting={props.submitting} />
        </form>
    }
}
