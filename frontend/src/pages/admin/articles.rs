use hmedia_shared::{
    dates::input_date,
    endpoints::Collection,
    forms::{format_slug, ArticleDraft, FieldErrors, MultipartDraft},
    models::sort_newest_first,
    tags::{TagSet, MAX_TAGS},
    ApiError, ArticleCategory, ArticleRecord,
};
use web_sys::{File, KeyboardEvent};
use yew::prelude::*;

use super::{
    actions_cell, checkbox_value, error_attr, input_value, textarea_value, thumbnail_cell,
    use_admin_records, use_admin_session, AdminTable, Field, NoticeSlot, PageHeader, SubmitButton,
    INPUT_CLASSES,
};
use crate::{
    api,
    components::{confirm_dialog::ConfirmDialog, image_picker::ImagePicker},
    config::{image_url, ADMIN_PAGE_SIZE},
    hooks::{scroll_window_to_top, use_pagination},
    i18n::{current::admin_articles as t, fill_one},
    seo,
};

/// Section name of an article collection, e.g. "Cinema News".
fn section_label(collection: Collection) -> &'static str {
    ArticleCategory::ALL
        .into_iter()
        .find(|category| category.collection() == collection)
        .map(ArticleCategory::label)
        .unwrap_or(t::FALLBACK_SECTION)
}

fn today() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.chars().take(10).collect()
}

#[derive(Clone, PartialEq)]
enum Mode {
    List,
    Create,
    Edit(ArticleRecord),
}

#[derive(Properties, PartialEq)]
pub struct AdminArticlesProps {
    pub collection: Collection,
}

/// Create, edit and delete the records of one article collection.
#[function_component(AdminArticlesPage)]
pub fn admin_articles_page(props: &AdminArticlesProps) -> Html {
    let collection = props.collection;
    let section = section_label(collection);
    let session = use_admin_session();
    let records = use_admin_records(section, collection, |collection| async move {
        let mut items = api::fetch_articles(collection).await?;
        sort_newest_first(&mut items);
        Ok::<_, ApiError>(items)
    });
    let (visible, current_page, total_pages, go_to_page) =
        use_pagination(records.items.clone(), ADMIN_PAGE_SIZE);
    let mode = use_state(|| Mode::List);
    let pending_delete = use_state(|| None::<ArticleRecord>);
    let deleting = use_state(|| false);
    let submitting = use_state(|| false);
    let server_error = use_state(|| None::<String>);

    use_effect_with(collection, move |_| {
        seo::set_document_title(&fill_one(t::PAGE_TITLE_TEMPLATE, section));
        || ()
    });

    let open_create = {
        let mode = mode.clone();
        let server_error = server_error.clone();
        Callback::from(move |_| {
            server_error.set(None);
            mode.set(Mode::Create);
            scroll_window_to_top();
        })
    };

    let back_to_list = {
        let mode = mode.clone();
        let server_error = server_error.clone();
        Callback::from(move |_: MouseEvent| {
            server_error.set(None);
            mode.set(Mode::List);
        })
    };

    let on_submit = {
        let mode = mode.clone();
        let session = session.clone();
        let submitting = submitting.clone();
        let server_error = server_error.clone();
        let reload = records.reload.clone();
        Callback::from(move |(draft, image): (ArticleDraft, Option<File>)| {
            let Some(client) = session.client.clone() else {
                session.fail(&ApiError::Unauthorized, t::SAVE_FAILED);
                return;
            };
            let editing = match &*mode {
                Mode::Edit(record) => Some(record.id.to_string()),
                _ => None,
            };
            let mode = mode.clone();
            let session = session.clone();
            let submitting = submitting.clone();
            let server_error = server_error.clone();
            let reload = reload.clone();
            submitting.set(true);
            server_error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let result = match editing.as_deref() {
                    Some(id) => client.update(collection, id, &draft, image.as_ref()).await,
                    None => client.create(collection, &draft, image.as_ref()).await,
                };
                match result {
                    Ok(()) => {
                        let message = if editing.is_some() { t::UPDATED } else { t::CREATED };
                        session.succeed(fill_one(message, section));
                        mode.set(Mode::List);
                        reload.emit(());
                    },
                    Err(ApiError::Unauthorized) => session.fail(&ApiError::Unauthorized, t::SAVE_FAILED),
                    Err(e) => {
                        web_sys::console::error_1(&format!("Failed to save article: {}", e).into());
                        server_error.set(Some(e.user_message(t::SAVE_FAILED)));
                    },
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
            let Some(record) = (*pending_delete).clone() else {
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
                match client.delete(collection, &record.id.to_string()).await {
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

    if *mode != Mode::List {
        let initial = match &*mode {
            Mode::Edit(record) => Some(record.clone()),
            _ => None,
        };
        let (title_template, button_template) = if initial.is_some() {
            (t::EDIT_TITLE_TEMPLATE, t::UPDATE_BUTTON_TEMPLATE)
        } else {
            (t::ADD_TITLE_TEMPLATE, t::ADD_BUTTON_TEMPLATE)
        };
        let form_key = initial
            .as_ref()
            .map(|record| record.id.to_string())
            .unwrap_or_else(|| "new".to_string());
        return html! {
            <div>
                <div class="mb-6 flex items-center gap-3">
                    <button
                        type="button"
                        class="rounded-full p-2 text-xl text-gray-400 transition hover:bg-gray-800 hover:text-white"
                        aria-label={t::BACK_ARIA}
                        onclick={back_to_list}
                    >
                        {"‹"}
                    </button>
                    <h1 class="text-2xl font-bold">{ fill_one(title_template, section) }</h1>
                </div>
                <ArticleForm
                    key={form_key}
                    {initial}
                    submit_label={fill_one(button_template, section)}
                    server_error={(*server_error).clone()}
                    submitting={*submitting}
                    {on_submit}
                />
            </div>
        };
    }

    let first_index = (current_page.max(1) - 1) * ADMIN_PAGE_SIZE;
    let rows = html! {
        { for visible.iter().enumerate().map(|(index, record)| {
            let on_edit = {
                let mode = mode.clone();
                let server_error = server_error.clone();
                let record = record.clone();
                Callback::from(move |_: MouseEvent| {
                    server_error.set(None);
                    mode.set(Mode::Edit(record.clone()));
                    scroll_window_to_top();
                })
            };
            let on_delete = {
                let pending_delete = pending_delete.clone();
                let record = record.clone();
                Callback::from(move |_: MouseEvent| pending_delete.set(Some(record.clone())))
            };
            let published = record.display_date_raw().and_then(input_date).unwrap_or_default();
            html! {
                <tr key={record.id.to_string()} class="hover:bg-gray-800">
                    <td class="px-4 py-3 text-gray-400">{ first_index + index + 1 }</td>
                    { thumbnail_cell(image_url(record.image.as_deref()), &record.title) }
                    <td class="max-w-xs truncate px-4 py-3 font-medium">{ &record.title }</td>
                    <td class="max-w-xs truncate px-4 py-3 text-gray-300">{ &record.slug }</td>
                    <td class="px-4 py-3 text-gray-300">{ published }</td>
                    { actions_cell(Some(on_edit), on_delete) }
                </tr>
            }
        }) }
    };

    html! {
        <div>
            <PageHeader
                title={section}
                subtitle={AttrValue::from(fill_one(t::SUBTITLE_TEMPLATE, section.to_lowercase()))}
                add={(AttrValue::from(fill_one(t::ADD_BUTTON_TEMPLATE, section)), open_create)}
            />
            <NoticeSlot notice={session.notice.clone()} />
            <AdminTable
                headers={vec![t::COL_INDEX, t::COL_IMAGE, t::COL_TITLE, t::COL_SLUG, t::COL_DATE, t::COL_ACTIONS]}
                loading={records.loading}
                {rows}
                empty={records.items.is_empty()}
                {current_page}
                {total_pages}
                on_page_change={go_to_page}
            />
            <ConfirmDialog
                open={pending_delete.is_some()}
                on_close={close_delete}
                on_confirm={confirm_delete}
                message={t::DELETE_MESSAGE}
                confirming={*deleting}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ArticleFormProps {
    initial: Option<ArticleRecord>,
    submit_label: AttrValue,
    server_error: Option<String>,
    submitting: bool,
    on_submit: Callback<(ArticleDraft, Option<File>)>,
}

#[function_component(ArticleForm)]
fn article_form(props: &ArticleFormProps) -> Html {
    let had_image = props
        .initial
        .as_ref()
        .is_some_and(|record| record.image.as_deref().is_some_and(|image| !image.trim().is_empty()));
    let draft = {
        let initial = props.initial.clone();
        use_state(move || match initial {
            Some(record) => ArticleDraft::from_record(&record),
            None => ArticleDraft {
                date: today(),
                ..ArticleDraft::default()
            },
        })
    };
    let image = use_state(|| None::<File>);
    let errors = use_state(FieldErrors::default);

    // One setter per field; each clears that field's error as the user types.
    let update = {
        let draft = draft.clone();
        let errors = errors.clone();
        move |field: &'static str, apply: fn(&mut ArticleDraft, String)| {
            let draft = draft.clone();
            let errors = errors.clone();
            move |value: String| {
                let mut next = (*draft).clone();
                apply(&mut next, value);
                draft.set(next);
                if errors.get(field).is_some() {
                    let mut cleared = (*errors).clone();
                    cleared.clear(field);
                    errors.set(cleared);
                }
            }
        }
    };

    let on_title = {
        let set = update("title", |draft, value| draft.title = value);
        Callback::from(move |event: InputEvent| input_value(&event).into_iter().for_each(&set))
    };
    let on_slug = {
        let set = update("slug", |draft, value| draft.slug = format_slug(&value));
        Callback::from(move |event: InputEvent| input_value(&event).into_iter().for_each(&set))
    };
    let on_author = {
        let set = update("author", |draft, value| draft.author = value);
        Callback::from(move |event: InputEvent| input_value(&event).into_iter().for_each(&set))
    };
    let on_date = {
        let set = update("date", |draft, value| draft.date = value);
        Callback::from(move |event: InputEvent| input_value(&event).into_iter().for_each(&set))
    };
    let on_content = {
        let set = update("content", |draft, value| draft.content = value);
        Callback::from(move |event: InputEvent| textarea_value(&event).into_iter().for_each(&set))
    };
    let on_trending = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            if let Some(checked) = checkbox_value(&event) {
                let mut next = (*draft).clone();
                next.trending = checked;
                draft.set(next);
            }
        })
    };
    let on_tags = {
        let draft = draft.clone();
        Callback::from(move |tags: TagSet| {
            let mut next = (*draft).clone();
            next.tags = tags;
            draft.set(next);
        })
    };
    let on_image = {
        let draft = draft.clone();
        let image = image.clone();
        let errors = errors.clone();
        Callback::from(move |file: Option<File>| {
            let mut next = (*draft).clone();
            next.has_image = file.is_some() || had_image;
            draft.set(next);
            if file.is_some() {
                let mut cleared = (*errors).clone();
                cleared.clear("image");
                errors.set(cleared);
            }
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
        .and_then(|record| image_url(record.image.as_deref()))
        .map(AttrValue::from);

    html! {
        <form class="max-w-4xl space-y-6 rounded-xl bg-gray-800 p-6 shadow" {onsubmit} novalidate=true>
            <Field label={t::FIELD_TITLE} error={error_attr(errors.get("title"))}>
                <input type="text" class={INPUT_CLASSES} placeholder={t::TITLE_PLACEHOLDER} value={draft.title.clone()} oninput={on_title} />
            </Field>
            <Field label={t::FIELD_SLUG} error={error_attr(errors.get("slug"))}>
                <input type="text" class={INPUT_CLASSES} placeholder={t::SLUG_PLACEHOLDER} value={draft.slug.clone()} oninput={on_slug} />
            </Field>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                <Field label={t::FIELD_AUTHOR} error={error_attr(errors.get("author"))}>
                    <input type="text" class={INPUT_CLASSES} placeholder={t::AUTHOR_PLACEHOLDER} value={draft.author.clone()} oninput={on_author} />
                </Field>
                <Field label={t::FIELD_DATE} error={error_attr(errors.get("date"))}>
                    <input type="date" class={INPUT_CLASSES} value={draft.date.clone()} oninput={on_date} />
                </Field>
            </div>
            <Field label={t::FIELD_IMAGE} error={error_attr(errors.get("image"))}>
                <ImagePicker {existing} require_landscape={true} on_change={on_image} />
            </Field>
            <Field label={t::FIELD_CONTENT} error={error_attr(errors.get("content"))}>
                <textarea
                    rows="16"
                    class={classes!(INPUT_CLASSES, "font-mono", "text-sm")}
                    placeholder={t::CONTENT_PLACEHOLDER}
                    value={draft.content.clone()}
                    oninput={on_content}
                />
            </Field>
            <TagEditor tags={draft.tags.clone()} on_change={on_tags} />
            <label class="flex items-center gap-3 text-sm text-gray-300">
                <input type="checkbox" class="h-4 w-4 accent-red-600" checked={draft.trending} onchange={on_trending} />
                { t::FIELD_TRENDING }
            </label>
            if let Some(message) = props.server_error.clone() {
                <p class="rounded-lg bg-red-900/50 px-3 py-2 text-sm text-red-300" role="alert">{ message }</p>
            }
            <SubmitButton label={props.submit_label.clone()} submitting={props.submitting} />
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct TagEditorProps {
    tags: TagSet,
    on_change: Callback<TagSet>,
}

/// Chip input: Enter or comma adds, Backspace on an empty box drops the last
/// tag, clicking a chip moves it back into the box.
#[function_component(TagEditor)]
fn tag_editor(props: &TagEditorProps) -> Html {
    let pending = use_state(String::new);

    let oninput = {
        let pending = pending.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = input_value(&event) {
                pending.set(value);
            }
        })
    };

    let onkeydown = {
        let pending = pending.clone();
        let tags = props.tags.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: KeyboardEvent| {
            let key = event.key();
            if key == "Enter" || key == "," {
                event.prevent_default();
                let mut next = tags.clone();
                if next.add(&pending) {
                    on_change.emit(next);
                    pending.set(String::new());
                }
            } else if key == "Backspace" && pending.is_empty() {
                let mut next = tags.clone();
                if next.pop().is_some() {
                    on_change.emit(next);
                }
            }
        })
    };

    let full = props.tags.as_slice().len() >= MAX_TAGS;

    html! {
        <div class="space-y-1.5">
            <span class="text-sm font-medium text-gray-300">{ t::FIELD_TAGS }</span>
            <div class="flex flex-wrap items-center gap-2 rounded-lg border border-gray-700 bg-gray-800 px-3 py-2">
                { for props.tags.as_slice().iter().enumerate().map(|(index, tag)| {
                    let on_edit = {
                        let tags = props.tags.clone();
                        let on_change = props.on_change.clone();
                        let pending = pending.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = tags.clone();
                            if let Some(taken) = next.take(index) {
                                pending.set(taken);
                                on_change.emit(next);
                            }
                        })
                    };
                    let on_remove = {
                        let tags = props.tags.clone();
                        let on_change = props.on_change.clone();
                        Callback::from(move |_: MouseEvent| {
                            let mut next = tags.clone();
                            if next.take(index).is_some() {
                                on_change.emit(next);
                            }
                        })
                    };
                    html! {
                        <span key={tag.clone()} class="inline-flex items-center gap-1 rounded-full bg-red-600/20 px-3 py-1 text-sm text-red-200">
                            <button type="button" class="hover:underline" title={t::EDIT_TAG} onclick={on_edit}>{ tag }</button>
                            <button type="button" class="text-red-300 hover:text-white" aria-label={t::REMOVE_TAG} onclick={on_remove}>{"×"}</button>
                        </span>
                    }
                }) }
                <input
                    type="text"
                    class="min-w-[8rem] flex-1 bg-transparent text-white focus:outline-none disabled:opacity-50"
                    placeholder={if full { t::TAGS_FULL } else { t::TAGS_PLACEHOLDER }}
                    disabled={full}
                    value={(*pending).clone()}
                    {oninput}
                    {onkeydown}
                />
            </div>
            <p class="text-xs text-gray-400">{ fill_one(t::TAGS_HINT_TEMPLATE, MAX_TAGS) }</p>
        </div>
    }
}

