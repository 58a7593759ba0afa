//! Admin console screens and the widgets they share.
//!
//! Every screen follows the same cycle: load the collection, show it in a
//! paginated table, mutate through the session's [`AdminClient`], then load
//! again. A request refused with 401 signs the session out, which sends the
//! guard back to the login screen.

pub mod advertisements;
pub mod articles;
pub mod banners;
pub mod dashboard;
pub mod flash_news;
pub mod login;
pub mod teasers;
pub mod trending;

use std::future::Future;

use hmedia_shared::ApiError;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api::AdminClient,
    auth::{AuthAction, AuthContext},
    components::{
        error_banner::{BannerKind, ErrorBanner},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
    },
    i18n::current::admin_common as t,
};

/// Outcome of the last mutation, shown above the table.
#[derive(Clone, PartialEq)]
pub struct Notice {
    pub kind: BannerKind,
    pub message: String,
}

/// Signed-in admin capability plus the notice slot of the current screen.
#[derive(Clone)]
pub struct AdminSession {
    pub client: Option<AdminClient>,
    pub notice: UseStateHandle<Option<Notice>>,
    auth: Option<AuthContext>,
}

impl AdminSession {
    pub fn succeed(&self, message: impl Into<String>) {
        self.notice.set(Some(Notice {
            kind: BannerKind::Success,
            message: message.into(),
        }));
    }

    /// Report a failed write. A rejected token ends the session instead.
    pub fn fail(&self, error: &ApiError, fallback: &str) {
        web_sys::console::error_1(&format!("Admin request failed: {}", error).into());
        if matches!(error, ApiError::Unauthorized) {
            if let Some(auth) = self.auth.as_ref() {
                auth.dispatch(AuthAction::SignOut);
            }
            return;
        }
        self.notice.set(Some(Notice {
            kind: BannerKind::Error,
            message: error.user_message(fallback),
        }));
    }
}

#[hook]
pub fn use_admin_session() -> AdminSession {
    let auth = use_context::<AuthContext>();
    let notice = use_state(|| None::<Notice>);
    AdminSession {
        client: auth.as_ref().and_then(|auth| auth.client()),
        notice,
        auth,
    }
}

/// Records of one admin screen and a way to load them again.
pub struct AdminRecords<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub reload: Callback<()>,
}

/// Load records whenever `deps` change or `reload` is emitted. Failed loads
/// are logged and leave the table empty.
#[hook]
pub fn use_admin_records<T, D, F, Fut>(label: &'static str, deps: D, fetch: F) -> AdminRecords<T>
where
    T: Clone + 'static,
    D: Clone + PartialEq + 'static,
    F: FnOnce(D) -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
{
    let items = use_state(Vec::<T>::new);
    let loading = use_state(|| true);
    let revision = use_state(|| 0u32);

    {
        let items = items.clone();
        let loading = loading.clone();
        use_effect_with((deps, *revision), move |(deps, _)| {
            let request = fetch(deps.clone());
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match request.await {
                    Ok(records) => items.set(records),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("Failed to fetch {}: {}", label, e).into(),
                        );
                        items.set(Vec::new());
                    },
                }
                loading.set(false);
            });
            || ()
        });
    }

    let reload = {
        let revision = revision.clone();
        Callback::from(move |_| revision.set(revision.wrapping_add(1)))
    };

    AdminRecords {
        items: (*items).clone(),
        loading: *loading,
        reload,
    }
}

/// Text of the input that fired `event`.
pub fn input_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.value())
}

pub fn textarea_value(event: &InputEvent) -> Option<String> {
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

pub fn checkbox_value(event: &Event) -> Option<bool> {
    event
        .target_dyn_into::<HtmlInputElement>()
        .map(|input| input.checked())
}

pub const INPUT_CLASSES: &str = "w-full rounded-lg border border-gray-700 bg-gray-800 px-3 py-2 text-white focus:border-red-600 focus:outline-none";

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Label and handler of the "add" button, when the screen creates records.
    #[prop_or_default]
    pub add: Option<(AttrValue, Callback<()>)>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <div class="mb-6 flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
            <div>
                <h1 class="text-2xl font-bold">{ props.title.clone() }</h1>
                if let Some(subtitle) = props.subtitle.clone() {
                    <p class="mt-1 text-sm text-gray-400">{ subtitle }</p>
                }
            </div>
            <div class="flex flex-wrap items-center gap-3">
                { props.children.clone() }
                if let Some((label, on_add)) = props.add.clone() {
                    <button
                        type="button"
                        class="inline-flex items-center gap-2 rounded-lg bg-red-600 px-4 py-2 font-semibold text-white transition hover:bg-red-700"
                        onclick={Callback::from(move |_| on_add.emit(()))}
                    >
                        {"+ "}{ label }
                    </button>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeSlotProps {
    pub notice: UseStateHandle<Option<Notice>>,
}

#[function_component(NoticeSlot)]
pub fn notice_slot(props: &NoticeSlotProps) -> Html {
    let Some(notice) = (*props.notice).clone() else {
        return Html::default();
    };
    let on_close = {
        let notice = props.notice.clone();
        Callback::from(move |_| notice.set(None))
    };
    html! {
        <div class="mb-4">
            <ErrorBanner message={notice.message} kind={notice.kind} on_close={Some(on_close)} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminTableProps {
    pub headers: Vec<&'static str>,
    pub loading: bool,
    /// Rows of the visible page, each a `<tr>`.
    pub rows: Html,
    pub empty: bool,
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

#[function_component(AdminTable)]
pub fn admin_table(props: &AdminTableProps) -> Html {
    if props.loading {
        return html! {
            <div class="flex justify-center py-16">
                <LoadingSpinner size={SpinnerSize::Large} label={AttrValue::Static(t::LOADING)} />
            </div>
        };
    }

    html! {
        <>
            <div class="overflow-x-auto rounded-lg border border-gray-800 bg-gray-800/60">
                <table class="min-w-full divide-y divide-gray-700 text-sm">
                    <thead class="bg-gray-800">
                        <tr>
                            { for props.headers.iter().map(|header| html! {
                                <th scope="col" class="px-4 py-3 text-left text-xs font-semibold uppercase tracking-wider text-gray-400">
                                    { *header }
                                </th>
                            }) }
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-700">
                        if props.empty {
                            <tr>
                                <td colspan={props.headers.len().to_string()} class="px-4 py-10 text-center text-gray-400">
                                    { t::EMPTY }
                                </td>
                            </tr>
                        } else {
                            { props.rows.clone() }
                        }
                    </tbody>
                </table>
            </div>
            <Pagination
                current_page={props.current_page}
                total_pages={props.total_pages}
                on_page_change={props.on_page_change.clone()}
            />
        </>
    }
}

/// Table cell with a thumbnail, or a dash when the record has no image.
pub fn thumbnail_cell(src: Option<String>, alt: &str) -> Html {
    html! {
        <td class="px-4 py-3">
            if let Some(src) = src {
                <img src={src} alt={alt.to_string()} loading="lazy" class="h-12 w-20 rounded object-cover" />
            } else {
                <span class="text-gray-500">{"-"}</span>
            }
        </td>
    }
}

pub fn status_cell(active: bool) -> Html {
    let (label, tone) = if active {
        (t::ACTIVE, "bg-green-900/60 text-green-300")
    } else {
        (t::INACTIVE, "bg-gray-700 text-gray-300")
    };
    html! {
        <td class="px-4 py-3">
            <span class={classes!("rounded-full", "px-2.5", "py-1", "text-xs", "font-semibold", tone)}>
                { label }
            </span>
        </td>
    }
}

/// Edit and delete buttons. Either may be omitted.
pub fn actions_cell(on_edit: Option<Callback<MouseEvent>>, on_delete: Callback<MouseEvent>) -> Html {
    html! {
        <td class="px-4 py-3 text-right">
            <div class="flex justify-end gap-2">
                if let Some(on_edit) = on_edit {
                    <button
                        type="button"
                        class="rounded-md px-3 py-1.5 text-blue-400 transition hover:bg-gray-700"
                        onclick={on_edit}
                    >
                        { t::EDIT }
                    </button>
                }
                <button
                    type="button"
                    class="rounded-md px-3 py-1.5 text-red-400 transition hover:bg-gray-700"
                    onclick={on_delete}
                >
                    { t::DELETE }
                </button>
            </div>
        </td>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub children: Html,
}

/// Labelled form row with its validation message.
#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    html! {
        <label class="block space-y-1.5">
            <span class="text-sm font-medium text-gray-300">{ props.label.clone() }</span>
            { props.children.clone() }
            if let Some(error) = props.error.clone() {
                <span class="block text-sm text-red-400">{ error }</span>
            }
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct FormModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Html,
}

/// Overlay holding one of the small record forms.
#[function_component(FormModal)]
pub fn form_modal(props: &FormModalProps) -> Html {
    if !props.open {
        return Html::default();
    }
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    html! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/70 p-4" onclick={close.clone()}>
            <div
                class="max-h-[90vh] w-full max-w-lg overflow-y-auto rounded-xl bg-gray-900 p-6 shadow-2xl ring-1 ring-gray-700"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="mb-5 flex items-center justify-between">
                    <h2 class="text-xl font-bold">{ props.title.clone() }</h2>
                    <button
                        type="button"
                        class="rounded-full p-1 text-2xl leading-none text-gray-400 hover:text-white"
                        aria-label={t::CLOSE_ARIA}
                        onclick={close}
                    >
                        {"×"}
                    </button>
                </div>
                { props.children.clone() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub submitting: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    html! {
        <button
            type="submit"
            disabled={props.submitting}
            class="w-full rounded-lg bg-red-600 py-3 font-semibold text-white transition hover:bg-red-700 disabled:cursor-not-allowed disabled:opacity-60"
        >
            if props.submitting {
                { t::SAVING }
            } else {
                { props.label.clone() }
            }
        </button>
    }
}

/// `AttrValue` for an optional field error.
pub fn error_attr(message: Option<&str>) -> Option<AttrValue> {
    message.map(|message| AttrValue::from(message.to_string()))
}
