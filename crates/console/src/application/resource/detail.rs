//! Detail dialog: read-only rows plus the guarded delete

use mediadmin_domain::common::format_display_date;
use mediadmin_domain::{Resource, ResourceDraft, ResourceSchema};

use crate::application::ServiceError;

/// One labelled value in the detail dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Read-only presentation of one item
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub heading: String,
    pub image_url: Option<String>,
    pub rows: Vec<DetailRow>,
}

impl DetailView {
    pub fn of<R: Resource>(item: &R) -> Self {
        let schema = R::schema();
        let draft = item.draft();

        let mut rows: Vec<DetailRow> = schema
            .fields
            .iter()
            .filter(|f| f.key != "imageUrl")
            .map(|f| DetailRow {
                label: f.label,
                value: draft.field(f.key),
            })
            .collect();

        if let Some(relation) = schema.relation {
            let value = item
                .relation()
                .map(|r| r.name.clone())
                .or_else(|| draft.relation_id().map(|id| format!("#{id}")))
                .unwrap_or_else(|| "-".to_string());
            rows.push(DetailRow {
                label: relation.label,
                value,
            });
        }

        let stamps = item.timestamps();
        if !stamps.created_at.is_empty() {
            rows.push(DetailRow {
                label: "Created",
                value: format_display_date(&stamps.created_at),
            });
        }
        if !stamps.updated_at.is_empty() {
            rows.push(DetailRow {
                label: "Updated",
                value: format_display_date(&stamps.updated_at),
            });
        }

        Self {
            heading: item.heading(),
            image_url: item.image_url().map(str::to_string),
            rows,
        }
    }
}

/// Two-step delete: request shows a confirm panel, confirm sends one DELETE.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    confirming: bool,
    deleting: bool,
    error: Option<String>,
}

impl DeleteConfirmation {
    pub fn request(&mut self) {
        self.confirming = true;
        self.error = None;
    }

    /// Closes the panel without touching the network. Ignored while deleting.
    pub fn cancel(&mut self) {
        if !self.deleting {
            self.confirming = false;
            self.error = None;
        }
    }

    /// Returns true exactly once per confirmation while no delete is running.
    pub fn begin_delete(&mut self) -> bool {
        if !self.confirming || self.deleting {
            return false;
        }
        self.deleting = true;
        self.error = None;
        true
    }

    /// Returns true on success. On failure the panel stays open for a retry.
    pub fn finish_delete(
        &mut self,
        result: Result<(), ServiceError>,
        schema: &ResourceSchema,
    ) -> bool {
        self.deleting = false;
        match result {
            Ok(()) => {
                self.confirming = false;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Deleting {} failed", schema.singular);
                self.error = Some(e.user_message(&schema.delete_fallback()));
                false
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
