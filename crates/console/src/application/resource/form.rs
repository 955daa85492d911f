//! Create/edit form state

use mediadmin_domain::common::is_http_url;
use mediadmin_domain::{FieldKind, FieldSpec, RelationOption, Resource, ResourceDraft};

use crate::application::ServiceError;

/// A validated request the form wants sent
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<R: Resource> {
    Create(R::Draft),
    Update(R::Id, R::Draft),
}

/// What a URL field shows beneath its input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImagePreview {
    #[default]
    Hidden,
    Image(String),
    /// Something is typed but it cannot be loaded as an image
    Placeholder,
}

impl ImagePreview {
    pub fn for_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            Self::Hidden
        } else if is_http_url(value) {
            Self::Image(value.to_string())
        } else {
            Self::Placeholder
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<R: Resource> {
    draft: R::Draft,
    editing: Option<R::Id>,
    options: Vec<RelationOption>,
    error: Option<String>,
    submitting: bool,
}

impl<R: Resource> Default for FormState<R> {
    fn default() -> Self {
        Self {
            draft: R::Draft::default(),
            editing: None,
            options: Vec::new(),
            error: None,
            submitting: false,
        }
    }
}

impl<R: Resource> FormState<R> {
    /// Resets to empty values. The relation defaults to the first option.
    pub fn open_create(&mut self, options: Vec<RelationOption>) {
        *self = Self {
            options,
            ..Self::default()
        };
        self.default_relation();
    }

    /// Seeds every field from `item`; a missing relation falls back to the
    /// first option.
    pub fn open_edit(&mut self, item: &R, options: Vec<RelationOption>) {
        *self = Self {
            draft: item.draft(),
            editing: Some(item.id()),
            options,
            ..Self::default()
        };
        self.default_relation();
    }

    /// Replaces the relation choices, e.g. once they finish loading
    pub fn set_options(&mut self, options: Vec<RelationOption>) {
        self.options = options;
        self.default_relation();
    }

    fn default_relation(&mut self) {
        if R::schema().relation.is_some() && self.draft.relation_id().is_none() {
            let first = self.options.first().map(|o| o.id);
            self.draft.set_relation_id(first);
        }
    }

    pub fn set_field(&mut self, key: &str, value: String) {
        self.draft.set_field(key, value);
    }

    pub fn set_relation(&mut self, id: Option<i64>) {
        self.draft.set_relation_id(id);
    }

    /// Sets the relation from a `<select>` value; anything unparseable clears it
    pub fn select_relation(&mut self, raw: &str) {
        self.set_relation(raw.trim().parse::<i64>().ok());
    }

    /// Validates and marks the form in flight.
    ///
    /// Returns `None` while a submission is already running or when validation
    /// fails; in the latter case the message is shown inline.
    pub fn begin_submit(&mut self) -> Option<Submission<R>> {
        if self.submitting {
            return None;
        }
        if let Err(e) = self.draft.validate() {
            self.error = Some(e.to_string());
            return None;
        }
        self.error = None;
        self.submitting = true;
        Some(match self.editing {
            Some(id) => Submission::Update(id, self.draft.clone()),
            None => Submission::Create(self.draft.clone()),
        })
    }

    /// Records the outcome of the request. Returns true on success; on failure
    /// the form stays open with the server's message or a fallback.
    pub fn finish_submit(&mut self, result: Result<(), ServiceError>) -> bool {
        self.submitting = false;
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Saving {} failed", R::schema().singular);
                self.error = Some(e.user_message(&R::schema().save_fallback()));
                false
            }
        }
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn field(&self, key: &str) -> String {
        self.draft.field(key)
    }

    pub fn relation_id(&self) -> Option<i64> {
        self.draft.relation_id()
    }

    /// Live preview for `field`, following what has been typed so far
    pub fn image_preview(&self, field: &FieldSpec) -> ImagePreview {
        match field.kind {
            FieldKind::Url => ImagePreview::for_value(&self.draft.field(field.key)),
            _ => ImagePreview::Hidden,
        }
    }

    pub fn options(&self) -> &[RelationOption] {
        &self.options
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::ApiError;
    use mediadmin_domain::{
        CategoryId, RelationSummary, Song, SongDraft, SongId, Timestamps,
    };

    fn options() -> Vec<RelationOption> {
        vec![
            RelationOption {
                id: 5,
                name: "Folk".into(),
            },
            RelationOption {
                id: 6,
                name: "Jazz".into(),
            },
        ]
    }

    fn song() -> Song {
        Song {
            id: SongId::new(1),
            title: "Blue".into(),
            artist: "Joni Mitchell".into(),
            category_id: Some(CategoryId::new(6)),
            category: Some(RelationSummary {
                id: 6,
                name: "Jazz".into(),
            }),
            image_url: Some("https://img.example.com/blue.jpg".into()),
            timestamps: Timestamps::default(),
        }
    }

    #[test]
    fn create_starts_empty_with_first_option() {
        let mut form = FormState::<Song>::default();
        form.open_create(options());
        assert_eq!(form.field("title"), "");
        assert_eq!(form.relation_id(), Some(5));
        assert!(!form.is_edit());
    }

    #[test]
    fn create_without_options_has_no_relation() {
        let mut form = FormState::<Song>::default();
        form.open_create(Vec::new());
        assert_eq!(form.relation_id(), None);

        form.set_options(options());
        assert_eq!(form.relation_id(), Some(5));
    }

    #[test]
    fn reopening_create_does_not_leak_previous_values() {
        let mut form = FormState::<Song>::default();
        form.open_edit(&song(), options());
        form.open_create(options());
        assert_eq!(form.draft(), &SongDraft {
            category_id: Some(CategoryId::new(5)),
            ..SongDraft::default()
        });

        form.set_field("title", "Draft".into());
        form.open_create(options());
        assert_eq!(form.field("title"), "");
    }

    #[test]
    fn edit_is_seeded_from_the_item() {
        let mut form = FormState::<Song>::default();
        form.open_edit(&song(), options());
        assert_eq!(form.draft(), &song().draft());
        assert_eq!(form.relation_id(), Some(6));
        assert!(form.is_edit());
    }

    #[test]
    fn invalid_draft_is_not_submitted() {
        let mut form = FormState::<Song>::default();
        form.open_create(options());
        assert!(form.begin_submit().is_none());
        assert_eq!(form.error(), Some("Title is required"));
        assert!(!form.is_submitting());
    }

    #[test]
    fn in_flight_guard_blocks_second_submit() {
        let mut form = FormState::<Song>::default();
        form.open_edit(&song(), options());

        let first = form.begin_submit();
        assert!(matches!(first, Some(Submission::Update(id, _)) if id == SongId::new(1)));
        assert!(form.begin_submit().is_none());

        assert!(form.finish_submit(Ok(())));
        assert!(!form.is_submitting());
    }

    #[test]
    fn server_failure_keeps_the_form_with_a_message() {
        let mut form = FormState::<Song>::default();
        form.open_edit(&song(), options());
        form.begin_submit();

        let ok = form.finish_submit(Err(ApiError::http(422, "Title taken").into()));
        assert!(!ok);
        assert_eq!(form.error(), Some("Title taken"));

        form.begin_submit();
        form.finish_submit(Err(ApiError::RequestFailed("offline".into()).into()));
        assert_eq!(form.error(), Some("An error occurred while saving the song"));
        assert_eq!(form.field("title"), "Blue");
    }

    #[test]
    fn select_relation_parses_the_option_value() {
        let mut form = FormState::<Song>::default();
        form.open_create(options());
        form.select_relation("6");
        assert_eq!(form.relation_id(), Some(6));
        form.select_relation("");
        assert_eq!(form.relation_id(), None);
    }

    #[test]
    fn cover_preview_follows_the_typed_url() {
        let schema = Song::schema();
        let image = schema
            .fields
            .iter()
            .find(|f| f.kind == FieldKind::Url)
            .unwrap();
        let title = schema.fields.iter().find(|f| f.key == "title").unwrap();

        let mut form = FormState::<Song>::default();
        form.open_create(options());
        assert_eq!(form.image_preview(image), ImagePreview::Hidden);

        form.set_field(image.key, "img.example.com/cover".into());
        assert_eq!(form.image_preview(image), ImagePreview::Placeholder);

        form.set_field(image.key, " https://img.example.com/cover.jpg ".into());
        assert_eq!(
            form.image_preview(image),
            ImagePreview::Image("https://img.example.com/cover.jpg".into())
        );

        form.set_field(title.key, "https://not-an-image-field".into());
        assert_eq!(form.image_preview(title), ImagePreview::Hidden);
    }

    #[test]
    fn edit_shows_the_stored_cover() {
        let schema = Song::schema();
        let image = schema
            .fields
            .iter()
            .find(|f| f.kind == FieldKind::Url)
            .unwrap();

        let mut form = FormState::<Song>::default();
        form.open_edit(&song(), options());
        assert_eq!(
            form.image_preview(image),
            ImagePreview::Image("https://img.example.com/blue.jpg".into())
        );
    }
}
