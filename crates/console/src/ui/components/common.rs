use dioxus::prelude::*;
use mediadmin_domain::{FieldKind, FieldSpec, RelationOption};

use crate::application::resource::ImagePreview;

/// Centered dialog with a title bar and a close button
#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "modal",
                div {
                    class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        title: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body", {children} }
            }
        }
    }
}

/// Inline error with an optional retry action
#[component]
pub fn ErrorBanner(message: String, on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            span { "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

#[component]
pub fn Spinner(label: String) -> Element {
    rsx! {
        div {
            class: "page-status",
            div { class: "spinner" }
            span { "{label}" }
        }
    }
}

/// Labelled input for one scalar schema field, with a cover preview under
/// URL fields
#[component]
pub fn FieldInput(
    field: FieldSpec,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] preview: ImagePreview,
) -> Element {
    // URL whose image failed to load
    let mut broken = use_signal(|| None::<String>);
    let key = field.key;
    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };
    let input_type = match field.kind {
        FieldKind::Url => "url",
        _ => "text",
    };

    let preview_view = match preview {
        ImagePreview::Hidden => rsx! {},
        ImagePreview::Image(url) if broken.read().as_deref() != Some(url.as_str()) => {
            let failed = url.clone();
            rsx! {
                div {
                    class: "image-preview",
                    span { class: "field-label", "Image preview" }
                    img {
                        src: "{url}",
                        alt: "Cover preview",
                        onerror: move |_| broken.set(Some(failed.clone())),
                    }
                }
            }
        }
        ImagePreview::Image(_) | ImagePreview::Placeholder => rsx! {
            div {
                class: "image-preview",
                span { class: "field-label", "Image preview" }
                div { class: "image-placeholder", "No preview" }
            }
        },
    };

    rsx! {
        div {
            class: "field",
            label { class: "field-label", r#for: "{key}", "{label}" }
            if field.kind == FieldKind::TextArea {
                textarea {
                    id: "{key}",
                    class: "field-input",
                    rows: "4",
                    placeholder: field.placeholder,
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
            } else {
                input {
                    id: "{key}",
                    class: "field-input",
                    r#type: input_type,
                    placeholder: field.placeholder,
                    value: "{value}",
                    oninput: move |evt| on_input.call(evt.value()),
                }
            }
            {preview_view}
        }
    }
}

/// Select over relation options; the empty choice means "none"
#[component]
pub fn RelationSelect(
    label: String,
    placeholder: String,
    selected: Option<i64>,
    options: Vec<RelationOption>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "field",
            label { class: "field-label", "{label}" }
            select {
                class: "field-input",
                onchange: move |evt| on_select.call(evt.value()),
                option { value: "", selected: selected.is_none(), "{placeholder}" }
                for choice in options {
                    option {
                        key: "{choice.id}",
                        value: "{choice.id}",
                        selected: selected == Some(choice.id),
                        "{choice.name}"
                    }
                }
            }
        }
    }
}
