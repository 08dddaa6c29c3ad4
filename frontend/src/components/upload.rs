//! Upload form with client-side checks.
//!
//! Shows the picked file in a status line and runs the submission rules
//! before the browser posts the form. A failed rule cancels the post and
//! raises an alert with the rule's message; otherwise the form submits
//! untouched.

use leptos::*;
use leptos::ev::SubmitEvent;
use web_sys::{Event, HtmlInputElement};

use upload_portal::config::{
    DESCRIPTION_ID, FILE_INFO_ID, FILE_INPUT_ID, LOG_DATETIME_ID, UPLOADER_NAME_ID,
    UPLOAD_ENDPOINT, UPLOAD_FORM_ID,
};
use upload_portal::{accept_attribute, FileStatus, FormState, SelectedFile, Verdict};

#[component]
pub fn UploadForm() -> impl IntoView {
    let file_input = create_node_ref::<html::Input>();
    let log_datetime = create_node_ref::<html::Input>();
    let uploader_name = create_node_ref::<html::Input>();
    let description = create_node_ref::<html::Textarea>();

    let (status, set_status) = create_signal(FileStatus::Empty);

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let next = FileStatus::from_selection(selected_file(&input).as_ref());
        log::debug!("File selection changed: {}", next.text());
        set_status.set(next);
    };

    let on_submit = move |ev: SubmitEvent| {
        let state = FormState {
            file: file_input.get().and_then(|input| selected_file(&input)),
            log_datetime: log_datetime.get().map(|el| el.value()).unwrap_or_default(),
            uploader_name: uploader_name.get().map(|el| el.value()).unwrap_or_default(),
            description: description.get().map(|el| el.value()).unwrap_or_default(),
        };

        match Verdict::evaluate(&state) {
            Verdict::Allow => {
                log::info!("📤 Upload form valid, submitting to {}", UPLOAD_ENDPOINT);
            }
            Verdict::Block(failure) => {
                ev.prevent_default();
                log::warn!("Upload blocked: {}", failure);
                alert(&failure.to_string());
            }
        }
    };

    view! {
        <form
            id=UPLOAD_FORM_ID
            action=UPLOAD_ENDPOINT
            method="post"
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <div class="form-group">
                <label for=FILE_INPUT_ID>"Log file"</label>
                <input
                    type="file"
                    id=FILE_INPUT_ID
                    name="file"
                    accept=accept_attribute()
                    node_ref=file_input
                    on:change=on_file_change
                />
                <div
                    id=FILE_INFO_ID
                    class="file-info"
                    style:color=move || status.with(|s| s.tone().color())
                >
                    {move || status.with(FileStatus::text)}
                </div>
            </div>

            <div class="form-group">
                <label for=LOG_DATETIME_ID>"Log date/time"</label>
                <input
                    type="datetime-local"
                    id=LOG_DATETIME_ID
                    name="log_datetime"
                    node_ref=log_datetime
                />
            </div>

            <div class="form-group">
                <label for=UPLOADER_NAME_ID>"Uploader name"</label>
                <input
                    type="text"
                    id=UPLOADER_NAME_ID
                    name="uploader_name"
                    node_ref=uploader_name
                />
            </div>

            <div class="form-group">
                <label for=DESCRIPTION_ID>"Description (optional)"</label>
                <textarea
                    id=DESCRIPTION_ID
                    name="description"
                    rows="3"
                    node_ref=description
                ></textarea>
            </div>

            <button type="submit" class="upload-button">"Upload"</button>
        </form>
    }
}

/// First file of a picker, if any.
fn selected_file(input: &HtmlInputElement) -> Option<SelectedFile> {
    let file = input.files()?.get(0)?;
    Some(SelectedFile::new(file.name(), file.size() as u64))
}

/// Blocking browser alert.
fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::error!("Failed to show alert: {:?}", e);
    }
}
