//! Comment and review board state
//!
//! One list of feedback entries, optionally narrowed to a single film or song,
//! with an inline compose form and a per-entry delete confirmation.

use mediadmin_domain::common::format_display_date;
use mediadmin_domain::{Feedback, RelationOption};

use crate::application::resource::{DeleteConfirmation, FormState, ListingState};

/// Card model for one feedback entry
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackEntry<R> {
    pub item: R,
    pub heading: String,
    pub group: String,
    pub body: String,
    pub cover_image: Option<String>,
    pub updated: String,
}

impl<R: Feedback> FeedbackEntry<R> {
    pub fn of(item: &R) -> Self {
        let target = item.target();
        Self {
            heading: item.heading(),
            group: target
                .and_then(|t| t.group.as_ref())
                .map(|g| g.name.clone())
                .unwrap_or_else(|| "Uncategorized".to_string()),
            body: item.body().to_string(),
            cover_image: target
                .and_then(|t| t.cover_image.clone())
                .filter(|url| !url.trim().is_empty()),
            updated: format_display_date(&item.timestamps().updated_at),
            item: item.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackBoard<R: Feedback> {
    filter: Option<i64>,
    pub listing: ListingState<R>,
    parents: Vec<RelationOption>,
    pub form: FormState<R>,
    composing: bool,
    pending_delete: Option<R::Id>,
    pub delete: DeleteConfirmation,
}

impl<R: Feedback> Default for FeedbackBoard<R> {
    fn default() -> Self {
        Self {
            filter: None,
            listing: ListingState::default(),
            parents: Vec::new(),
            form: FormState::default(),
            composing: false,
            pending_delete: None,
            delete: DeleteConfirmation::default(),
        }
    }
}

impl<R: Feedback> FeedbackBoard<R> {
    /// Parent id the list is narrowed to, if any
    pub fn filter(&self) -> Option<i64> {
        self.filter
    }

    /// Returns true when the filter actually changed and a refetch is due
    pub fn set_filter(&mut self, parent_id: Option<i64>) -> bool {
        if self.filter == parent_id {
            return false;
        }
        self.filter = parent_id;
        true
    }

    /// `<select>` variant of [`Self::set_filter`]; an empty value clears it
    pub fn select_filter(&mut self, raw: &str) -> bool {
        self.set_filter(raw.trim().parse::<i64>().ok())
    }

    pub fn parents(&self) -> &[RelationOption] {
        &self.parents
    }

    pub fn set_parents(&mut self, parents: Vec<RelationOption>) {
        self.form.set_options(parents.clone());
        self.parents = parents;
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    /// Opens an empty form. The parent defaults to the active filter.
    pub fn start_compose(&mut self) {
        self.form.open_create(self.parents.clone());
        if self.filter.is_some() {
            self.form.set_relation(self.filter);
        }
        self.composing = true;
    }

    pub fn start_edit(&mut self, item: &R) {
        self.form.open_edit(item, self.parents.clone());
        self.composing = true;
    }

    pub fn cancel_compose(&mut self) {
        if !self.form.is_submitting() {
            self.composing = false;
        }
    }

    pub fn on_submitted(&mut self) {
        self.composing = false;
    }

    /// Shows the confirm panel for one entry
    pub fn request_delete(&mut self, id: R::Id) {
        if self.delete.is_deleting() {
            return;
        }
        self.pending_delete = Some(id);
        self.delete.request();
    }

    pub fn cancel_delete(&mut self) {
        self.delete.cancel();
        if !self.delete.is_confirming() {
            self.pending_delete = None;
        }
    }

    pub fn pending_delete(&self) -> Option<R::Id> {
        self.pending_delete
    }

    pub fn on_deleted(&mut self) {
        self.pending_delete = None;
    }

    pub fn entries(&self) -> Vec<FeedbackEntry<R>> {
        self.listing.items().iter().map(FeedbackEntry::of).collect()
    }

    pub fn empty_message(&self) -> String {
        let plural = R::schema().plural.to_lowercase();
        match self.filter {
            Some(_) => format!(
                "No {plural} for this {} yet.",
                R::PARENT_SEGMENT
            ),
            None => format!("No {plural} yet."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mediadmin_domain::{Comment, CommentId, FeedbackTarget, FilmId, RelationSummary, Timestamps};

    fn comment(id: i64, film: i64) -> Comment {
        Comment {
            id: CommentId::new(id),
            comment: format!("Comment {id}"),
            film_id: FilmId::new(film),
            film: Some(FeedbackTarget {
                id: film,
                title: "Heat".into(),
                cover_image: Some("  ".into()),
                group: Some(RelationSummary {
                    id: 1,
                    name: "Crime".into(),
                }),
            }),
            timestamps: Timestamps::default(),
        }
    }

    fn parents() -> Vec<RelationOption> {
        vec![
            RelationOption {
                id: 4,
                name: "Heat".into(),
            },
            RelationOption {
                id: 9,
                name: "Alien".into(),
            },
        ]
    }

    #[test]
    fn compose_defaults_the_parent_to_the_filter() {
        let mut board = FeedbackBoard::<Comment>::default();
        board.set_parents(parents());
        board.set_filter(Some(9));
        board.start_compose();

        assert!(board.is_composing());
        assert_eq!(board.form.relation_id(), Some(9));
        assert_eq!(board.form.field("comment"), "");
    }

    #[test]
    fn compose_without_filter_picks_the_first_parent() {
        let mut board = FeedbackBoard::<Comment>::default();
        board.set_parents(parents());
        board.start_compose();
        assert_eq!(board.form.relation_id(), Some(4));
    }

    #[test]
    fn filter_change_is_reported_once() {
        let mut board = FeedbackBoard::<Comment>::default();
        assert!(board.select_filter("4"));
        assert!(!board.set_filter(Some(4)));
        assert!(board.select_filter(""));
        assert_eq!(board.filter(), None);
    }

    #[test]
    fn cancelling_a_delete_forgets_the_target() {
        let mut board = FeedbackBoard::<Comment>::default();
        board.request_delete(CommentId::new(3));
        assert_eq!(board.pending_delete(), Some(CommentId::new(3)));
        assert!(board.delete.is_confirming());

        board.cancel_delete();
        assert_eq!(board.pending_delete(), None);
        assert!(!board.delete.is_confirming());
    }

    #[test]
    fn entry_shows_the_parent_grouping() {
        let entry = FeedbackEntry::of(&comment(1, 4));
        assert_eq!(entry.heading, "Heat");
        assert_eq!(entry.group, "Crime");
        assert_eq!(entry.body, "Comment 1");
        assert_eq!(entry.cover_image, None);
    }

    #[test]
    fn empty_message_mentions_the_filter() {
        let mut board = FeedbackBoard::<Comment>::default();
        assert_eq!(board.empty_message(), "No comments yet.");
        board.set_filter(Some(4));
        assert_eq!(board.empty_message(), "No comments for this film yet.");
    }
}
