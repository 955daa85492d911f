//! Comment and review boards

use dioxus::prelude::*;
use mediadmin_domain::FieldSpec;

use crate::application::api::Api;
use crate::application::feedback::{FeedbackBoard, FeedbackEntry, FeedbackManager};
use crate::application::resource::Listing;
use crate::ui::components::{ErrorBanner, FieldInput, RelationSelect, Spinner};
use crate::ui::services::{use_services, ManagedFeedback};

type BoardSignal<R> = Signal<FeedbackBoard<R>>;

/// Renders the feedback board for `R`. Call it from a route component.
pub fn feedback_page<R: ManagedFeedback>() -> Element {
    let services = use_services();
    let manager = use_hook(|| R::manager(&services));
    let mut state = use_signal(FeedbackBoard::<R>::default);

    let loader = manager.clone();
    use_hook(move || {
        let mut board = state;
        spawn(async move {
            loader.load_parents(&mut board).await;
            loader.refresh(&mut board).await;
        })
    });

    let schema = R::schema();
    let parent_label = schema.relation.map(|r| r.label).unwrap_or("Parent");
    let (listing, entries, filter, parents, composing, empty_message) = {
        let board = state.read();
        (
            board.listing.listing().clone(),
            board.entries(),
            board.filter(),
            board.parents().to_vec(),
            board.is_composing(),
            board.empty_message(),
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
                        let mut board = state;
                        spawn(async move { manager.refresh(&mut board).await });
                    },
                }
            }
        }
        Listing::Loaded(_) if entries.is_empty() => rsx! {
            div { class: "empty-state", "{empty_message}" }
        },
        Listing::Loaded(_) => rsx! {
            div {
                class: "feedback-list",
                {entries.into_iter().map(|entry| entry_view(entry, state, manager.clone()))}
            }
        },
    };

    let composer = if composing {
        compose_form(state, manager.clone())
    } else {
        rsx! {}
    };

    let filter_manager = manager.clone();
    let plural = schema.plural;
    let label = schema.kind.label();
    rsx! {
        div {
            class: "feedback-page",
            div {
                class: "page-header",
                h1 { "{plural}" }
                button {
                    class: "btn btn-primary",
                    disabled: composing,
                    onclick: move |_| state.write().start_compose(),
                    "Add {label}"
                }
            }
            div {
                class: "filter-panel",
                RelationSelect {
                    label: format!("Filter by {parent_label}"),
                    placeholder: format!("All {}s", parent_label.to_lowercase()),
                    selected: filter,
                    options: parents,
                    on_select: move |raw: String| {
                        let manager = filter_manager.clone();
                        let mut board = state;
                        let parent_id = raw.trim().parse::<i64>().ok();
                        spawn(async move { manager.set_filter(&mut board, parent_id).await });
                    },
                }
            }
            {composer}
            {body}
        }
    }
}

fn compose_form<R: ManagedFeedback>(
    mut state: BoardSignal<R>,
    manager: FeedbackManager<R, Api>,
) -> Element {
    let schema = R::schema();
    let (values, relation_id, options, error, submitting, edit) = {
        let board = state.read();
        let form = &board.form;
        let values: Vec<(FieldSpec, String)> = schema
            .fields
            .iter()
            .map(|field| (*field, form.field(field.key)))
            .collect();
        (
            values,
            form.relation_id(),
            form.options().to_vec(),
            form.error().map(str::to_string),
            form.is_submitting(),
            form.is_edit(),
        )
    };

    let title = if edit {
        format!("Edit {}", schema.kind.label())
    } else {
        format!("Add New {}", schema.kind.label())
    };
    let submit_label = match (submitting, edit) {
        (true, _) => "Saving...",
        (false, true) => "Update",
        (false, false) => "Submit",
    };

    rsx! {
        div {
            class: "compose-card",
            h2 { class: "compose-title", "{title}" }
            if let Some(message) = error {
                ErrorBanner { message }
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
            for (field, value) in values {
                FieldInput {
                    key: "{field.key}",
                    field,
                    value,
                    on_input: move |value: String| state.write().form.set_field(field.key, value),
                }
            }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: submitting,
                    onclick: move |_| state.write().cancel_compose(),
                    "Cancel"
                }
                button {
                    class: "btn btn-primary",
                    disabled: submitting,
                    onclick: move |_| {
                        let manager = manager.clone();
                        let mut board = state;
                        spawn(async move {
                            manager.submit(&mut board).await;
                        });
                    },
                    "{submit_label}"
                }
            }
        }
    }
}

fn entry_view<R: ManagedFeedback>(
    entry: FeedbackEntry<R>,
    mut state: BoardSignal<R>,
    manager: FeedbackManager<R, Api>,
) -> Element {
    let id = entry.item.id();
    let (confirming, deleting, error) = {
        let board = state.read();
        let pending = board.pending_delete() == Some(id);
        (
            pending && board.delete.is_confirming(),
            pending && board.delete.is_deleting(),
            board
                .delete
                .error()
                .filter(|_| pending)
                .map(str::to_string),
        )
    };
    let FeedbackEntry {
        item,
        heading,
        group,
        body,
        cover_image,
        updated,
    } = entry;
    let delete_label = if deleting { "Deleting..." } else { "Confirm delete" };

    rsx! {
        div {
            key: "{id}",
            class: "feedback-card",
            div {
                class: "feedback-header",
                div {
                    class: "feedback-heading",
                    h3 { class: "card-title", "{heading}" }
                    span { class: "badge", "{group}" }
                    span { class: "card-meta", "{updated}" }
                }
                if let Some(url) = cover_image {
                    img { class: "feedback-cover", src: "{url}", alt: "{heading}" }
                }
            }
            p { class: "feedback-body", "{body}" }
            if let Some(message) = error {
                ErrorBanner { message }
            }
            if confirming {
                div {
                    class: "confirm-panel",
                    button {
                        class: "btn btn-secondary",
                        disabled: deleting,
                        onclick: move |_| state.write().cancel_delete(),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: deleting,
                        onclick: move |_| {
                            let manager = manager.clone();
                            let mut board = state;
                            spawn(async move {
                                manager.confirm_delete(&mut board).await;
                            });
                        },
                        "{delete_label}"
                    }
                }
            } else {
                div {
                    class: "card-actions",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| state.write().start_edit(&item),
                        "Edit"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: move |_| state.write().request_delete(id),
                        "Delete"
                    }
                }
            }
        }
    }
}
