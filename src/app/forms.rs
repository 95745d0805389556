//! Form plumbing shared by every page that submits multipart data

use leptos::ev::SubmitEvent;
use web_sys::wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

/// The submitted form element and its multipart payload
pub fn submitted_form(ev: &SubmitEvent) -> (HtmlFormElement, FormData) {
    let form = ev
        .target()
        .expect("submit events fire on a form")
        .dyn_into::<HtmlFormElement>()
        .expect("submit events fire on a form");
    let data = FormData::new_with_form(&form).expect("form data from a live form");
    (form, data)
}

/// The name of the file picked in a file input, for the echo line under it
pub fn picked_file_name(ev: &leptos::ev::Event) -> Option<String> {
    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    Some(file.name())
}
