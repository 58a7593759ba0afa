use hmedia_shared::forms::{check_upload, Orientation};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{File, HtmlImageElement, HtmlInputElement, Url};
use yew::prelude::*;

use crate::i18n::current::image_picker as t;

#[derive(Properties, PartialEq)]
pub struct ImagePickerProps {
    /// Current image of the record being edited.
    #[prop_or_default]
    pub existing: Option<AttrValue>,
    /// Reject portrait and square images.
    #[prop_or(false)]
    pub require_landscape: bool,
    /// Accepted file, or `None` after a rejected pick.
    pub on_change: Callback<Option<File>>,
    /// Validation message owned by the form.
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

/// File input that only hands over images passing the size and orientation
/// rules, with a preview of what will be uploaded.
#[function_component(ImagePicker)]
pub fn image_picker(props: &ImagePickerProps) -> Html {
    let preview = use_state(|| None::<String>);
    let local_error = use_state(|| None::<String>);
    let input_ref = use_node_ref();

    let onchange = {
        let preview = preview.clone();
        let local_error = local_error.clone();
        let on_change = props.on_change.clone();
        let require_landscape = props.require_landscape;
        let input_ref = input_ref.clone();
        Callback::from(move |_: Event| {
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };

            // Size first; orientation needs the decoded image.
            let size = file.size() as u64;
            if let Err(message) = check_upload(size, Orientation::Landscape, false) {
                local_error.set(Some(message));
                input.set_value("");
                on_change.emit(None);
                return;
            }

            let Ok(object_url) = Url::create_object_url_with_blob(&file) else {
                on_change.emit(Some(file));
                return;
            };
            let Ok(probe) = HtmlImageElement::new() else {
                on_change.emit(Some(file));
                return;
            };

            let onload = {
                let probe = probe.clone();
                let preview = preview.clone();
                let local_error = local_error.clone();
                let on_change = on_change.clone();
                let input = input.clone();
                let object_url = object_url.clone();
                Closure::once_into_js(move || {
                    let orientation =
                        Orientation::from_dimensions(probe.natural_width(), probe.natural_height());
                    match check_upload(size, orientation, require_landscape) {
                        Ok(()) => {
                            if let Some(old) = (*preview).as_deref() {
                                let _ = Url::revoke_object_url(old);
                            }
                            local_error.set(None);
                            preview.set(Some(object_url));
                            on_change.emit(Some(file));
                        },
                        Err(message) => {
                            let _ = Url::revoke_object_url(&object_url);
                            local_error.set(Some(message));
                            input.set_value("");
                            on_change.emit(None);
                        },
                    }
                })
            };
            let onerror = {
                let local_error = local_error.clone();
                let on_change = on_change.clone();
                Closure::once_into_js(move || {
                    local_error.set(Some(t::UNREADABLE.to_string()));
                    input.set_value("");
                    on_change.emit(None);
                })
            };

            probe.set_onload(Some(onload.unchecked_ref()));
            probe.set_onerror(Some(onerror.unchecked_ref()));
            probe.set_src(&object_url);
        })
    };

    let shown = (*preview)
        .clone()
        .map(AttrValue::from)
        .or_else(|| props.existing.clone());
    let error = (*local_error).clone().map(AttrValue::from).or_else(|| props.error.clone());

    html! {
        <div class="space-y-2">
            <input
                ref={input_ref}
                type="file"
                accept="image/*"
                {onchange}
                class="block w-full text-sm text-gray-300 file:mr-4 file:rounded-lg file:border-0 file:bg-red-600 file:px-4 file:py-2 file:font-semibold file:text-white hover:file:bg-red-700"
            />
            <p class="text-xs text-gray-400">
                { if props.require_landscape { t::HINT_LANDSCAPE } else { t::HINT } }
            </p>
            if let Some(src) = shown {
                <img src={src} alt={t::PREVIEW_ALT} class="max-h-40 rounded-lg border border-gray-700 object-contain" />
            }
            if let Some(message) = error {
                <p class="text-sm text-red-400">{ message }</p>
            }
        </div>
    }
}
