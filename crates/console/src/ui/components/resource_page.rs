//! Generic catalog page: card grid, pagination, form dialog, detail dialog
//!
//! All state lives in one `Signal<ResourcePageState<R>>`; the handlers only
//! flip local state or hand the signal to the page's [`ResourceManager`].

use dioxus::prelude::*;
use mediadmin_domain::FieldSpec;

use crate::application::api::Api;
use crate::application::resource::{
    ActiveView, Card, DetailRow, DetailView, ImagePreview, Listing, PageControls,
    ResourceManager, ResourcePageState,
};
use crate::ui::components::{ErrorBanner, FieldInput, Modal, RelationSelect, Spinner};
use crate::ui::services::{use_services, ManagedResource};

type PageSignal<R> = Signal<ResourcePageState<R>>;

/// Renders the CRUD page for `R`. Call it from a route component.
pub fn resource_page<R: ManagedResource>() -> Element {
    let services = use_services();
    let manager = use_hook(|| R::manager(&services));
    let mut state = use_signal(ResourcePageState::<R>::default);

    let loader = manager.clone();
    use_hook(move || {
        let mut page = state;
        spawn(async move {
            loader.load_relation_options(&mut page).await;
            loader.refresh(&mut page).await;
        })
    });

    let schema = R::schema();
    let (listing, view, active) = {
        let snapshot = state.read();
        (
            snapshot.listing.listing().clone(),
            snapshot.list_view(),
            snapshot.active_view(),
        )
    };

    let body = match listing {
        Listing::Loading => rsx! {
            Spinner { label: format!("Loading {}...", schema.plural.to_lowercase()) }
        },
        Listing::Failed(message) => {
            let retry = manager.clone();
            rsx! {
                ErrorBanner {
                    message,
                    on_retry: move |_| {
                        let manager = retry.clone();
                        let mut page = state;
                        spawn(async move { manager.refresh(&mut page).await });
                    },
                }
            }
        }
        Listing::Loaded(_) if view.is_empty() => {
            let message = view.empty_message();
            rsx! {
                div { class: "empty-state", "{message}" }
            }
        }
        Listing::Loaded(_) => rsx! {
            div {
                class: "card-grid",
                {view.cards.iter().map(|card| card_view(card, state))}
            }
        },
    };

    let controls = view.controls;
    let dialog = match active {
        ActiveView::List => rsx! {},
        ActiveView::Form { edit } => form_dialog(state, manager.clone(), edit),
        ActiveView::Detail => detail_dialog(state, manager.clone()),
    };

    let create_manager = manager.clone();
    let open_create = move |_: MouseEvent| {
        state.write().open_create();
        let manager = create_manager.clone();
        let mut page = state;
        spawn(async move { manager.load_relation_options(&mut page).await });
    };

    let plural = schema.plural;
    let label = schema.kind.label();
    rsx! {
        div {
            class: "resource-page",
            div {
                class: "page-header",
                h1 { "{plural}" }
                button { class: "btn btn-primary", onclick: open_create, "Add {label}" }
            }
            {body}
            if controls.visible {
                {pagination(controls, state, manager.clone())}
            }
            {dialog}
        }
    }
}

fn card_view<R: ManagedResource>(card: &Card<R>, mut state: PageSignal<R>) -> Element {
    let id = card.item.id().to_string();
    let heading = card.heading.clone();
    let view_item = card.item.clone();
    let edit_item = card.item.clone();

    rsx! {
        div {
            key: "{id}",
            class: "card",
            if let Some(url) = card.image_url.clone() {
                img { class: "card-image", src: "{url}", alt: "{heading}" }
            }
            div {
                class: "card-body",
                h3 { class: "card-title", "{heading}" }
                if let Some(subheading) = card.subheading.clone() {
                    p { class: "card-subtitle", "{subheading}" }
                }
                if let Some(badge) = card.badge.clone() {
                    span { class: "badge", "{badge}" }
                }
                if let Some(created) = card.created.clone() {
                    p { class: "card-meta", "Added {created}" }
                }
            }
            div {
                class: "card-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| state.write().open_detail(view_item.clone()),
                    "View"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| state.write().open_edit(edit_item.clone()),
                    "Edit"
                }
            }
        }
    }
}

fn pagination<R: ManagedResource>(
    controls: PageControls,
    state: PageSignal<R>,
    manager: ResourceManager<R, Api>,
) -> Element {
    let page = controls.page;
    let prev = controls.prev_page();
    let next = controls.next_page();
    let prev_manager = manager.clone();

    rsx! {
        div {
            class: "pagination",
            button {
                class: "btn btn-secondary",
                disabled: !controls.prev_enabled,
                onclick: move |_| {
                    if let Some(target) = prev {
                        go_to_page(prev_manager.clone(), state, target);
                    }
                },
                "Previous"
            }
            span { class: "page-indicator", "Page {page}" }
            button {
                class: "btn btn-secondary",
                disabled: !controls.next_enabled,
                onclick: move |_| go_to_page(manager.clone(), state, next),
                "Next"
            }
        }
    }
}

fn go_to_page<R: ManagedResource>(
    manager: ResourceManager<R, Api>,
    mut state: PageSignal<R>,
    page: u32,
) {
    spawn(async move { manager.change_page(&mut state, page).await });
}

fn form_dialog<R: ManagedResource>(
    mut state: PageSignal<R>,
    manager: ResourceManager<R, Api>,
    edit: bool,
) -> Element {
    let schema = R::schema();
    let (values, relation_id, options, error, submitting) = {
        let snapshot = state.read();
        let form = &snapshot.form;
        let values: Vec<(FieldSpec, String, ImagePreview)> = schema
            .fields
            .iter()
            .map(|field| (*field, form.field(field.key), form.image_preview(field)))
            .collect();
        (
            values,
            form.relation_id(),
            form.options().to_vec(),
            form.error().map(str::to_string),
            form.is_submitting(),
        )
    };

    let title = if edit {
        format!("Edit {}", schema.kind.label())
    } else {
        format!("Add {}", schema.kind.label())
    };
    let submit_label = match (submitting, edit) {
        (true, _) => "Saving...",
        (false, true) => "Update",
        (false, false) => "Create",
    };

    rsx! {
        Modal {
            title,
            on_close: move |_| state.write().close_form(),
            if let Some(message) = error {
                ErrorBanner { message }
            }
            for (field, value, preview) in values {
                FieldInput {
                    key: "{field.key}",
                    field,
                    value,
                    preview,
                    on_input: move |value: String| state.write().form.set_field(field.key, value),
                }
            }
            if let Some(relation) = schema.relation {
                RelationSelect {
                    label: relation.label.to_string(),
                    placeholder: format!("Select a {}", relation.label.to_lowercase()),
                    selected: relation_id,
                    options,
                    on_select: move |raw: String| state.write().form.select_relation(&raw),
                }
            }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: submitting,
                    onclick: move |_| state.write().close_form(),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: submitting,
                    onclick: move |_| {
                        let manager = manager.clone();
                        let mut page = state;
                        spawn(async move {
                            manager.submit(&mut page).await;
                        });
                    },
                    "{submit_label}"
                }
            }
        }
    }
}

fn detail_dialog<R: ManagedResource>(
    mut state: PageSignal<R>,
    manager: ResourceManager<R, Api>,
) -> Element {
    let schema = R::schema();
    let snapshot = {
        let page = state.read();
        page.controller.selected().map(|item| {
            (
                DetailView::of(item),
                page.delete.is_confirming(),
                page.delete.is_deleting(),
                page.delete.error().map(str::to_string),
            )
        })
    };
    let Some((detail, confirming, deleting, error)) = snapshot else {
        return rsx! {};
    };
    let DetailView {
        heading,
        image_url,
        rows,
    } = detail;

    let singular = schema.singular;
    let delete_label = if deleting { "Deleting..." } else { "Delete" };

    rsx! {
        Modal {
            title: heading,
            on_close: move |_| state.write().close_detail(),
            if let Some(url) = image_url {
                img { class: "detail-image", src: "{url}" }
            }
            dl {
                class: "detail-rows",
                {rows.into_iter().map(detail_row)}
            }
            if let Some(message) = error {
                ErrorBanner { message }
            }
            if confirming {
                div {
                    class: "confirm-panel",
                    p { "Delete this {singular}? This cannot be undone." }
                    div {
                        class: "modal-actions",
                        button {
                            class: "btn btn-secondary",
                            disabled: deleting,
                            onclick: move |_| state.write().delete.cancel(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-danger",
                            disabled: deleting,
                            onclick: move |_| {
                                let manager = manager.clone();
                                let mut page = state;
                                spawn(async move {
                                    manager.confirm_delete(&mut page).await;
                                });
                            },
                            "{delete_label}"
                        }
                    }
                }
            } else {
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| state.write().delete.request(),
                        "Delete"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| state.write().edit_selected(),
                        "Edit"
                    }
                }
            }
        }
    }
}

fn detail_row(row: DetailRow) -> Element {
    let DetailRow { label, value } = row;
    rsx! {
        div {
            key: "{label}",
            class: "detail-row",
            dt { "{label}" }
            dd { "{value}" }
        }
    }
}
