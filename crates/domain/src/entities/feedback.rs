//! Feedback entities - free-text notes attached to a catalog entry
//!
//! Two flavours share one shape: comments hang off a film, reviews ("ulasan")
//! hang off a song. Both embed a summary of their parent so the list can show
//! the cover and grouping without another request.

use serde::{Deserialize, Serialize};

use crate::ids::{CommentId, FilmId, ReviewId, SongId};
use crate::resource::{
    FieldKind, FieldSpec, RelationSpec, RelationSummary, Resource, ResourceDraft, ResourceKind,
    ResourceSchema, Timestamps,
};

/// A read model whose items belong to exactly one parent catalog entry
pub trait Feedback: Resource {
    /// Route segment of the parent filter endpoint (`/api/{path}/{segment}/{id}`)
    const PARENT_SEGMENT: &'static str;

    fn parent_id(&self) -> i64;

    fn body(&self) -> &str;

    fn target(&self) -> Option<&FeedbackTarget>;
}

/// Embedded summary of the film or song a feedback entry belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTarget {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Genre of a film or category of a song
    #[serde(default, alias = "genre", alias = "category")]
    pub group: Option<RelationSummary>,
}

const COMMENT_FIELDS: &[FieldSpec] = &[FieldSpec {
    key: "comment",
    label: "Comment",
    kind: FieldKind::TextArea,
    required: true,
    placeholder: "Write a comment...",
}];

pub static COMMENT_SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Comment,
    path: "comment",
    singular: "comment",
    plural: "Comments",
    fields: COMMENT_FIELDS,
    relation: Some(RelationSpec {
        key: "filmId",
        label: "Film",
        endpoint: "films",
    }),
};

const REVIEW_FIELDS: &[FieldSpec] = &[FieldSpec {
    key: "ulasan",
    label: "Review",
    kind: FieldKind::TextArea,
    required: true,
    placeholder: "Write a review...",
}];

pub static REVIEW_SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Review,
    path: "ulasan",
    singular: "review",
    plural: "Reviews",
    fields: REVIEW_FIELDS,
    relation: Some(RelationSpec {
        key: "songId",
        label: "Song",
        endpoint: "songs",
    }),
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    #[serde(default)]
    pub comment: String,
    pub film_id: FilmId,
    #[serde(default)]
    pub film: Option<FeedbackTarget>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDraft {
    pub film_id: Option<FilmId>,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    #[serde(default)]
    pub ulasan: String,
    pub song_id: SongId,
    #[serde(default)]
    pub song: Option<FeedbackTarget>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDraft {
    pub song_id: Option<SongId>,
    pub ulasan: String,
}

fn target_heading(target: Option<&FeedbackTarget>, fallback: &str, id: i64) -> String {
    match target {
        Some(t) if !t.title.trim().is_empty() => t.title.clone(),
        _ => format!("{fallback} #{id}"),
    }
}

impl Resource for Comment {
    type Id = CommentId;
    type Draft = CommentDraft;

    fn schema() -> &'static ResourceSchema {
        &COMMENT_SCHEMA
    }

    fn id(&self) -> CommentId {
        self.id
    }

    fn draft(&self) -> CommentDraft {
        CommentDraft {
            film_id: Some(self.film_id),
            comment: self.comment.clone(),
        }
    }

    fn heading(&self) -> String {
        target_heading(self.film.as_ref(), "Film", self.film_id.get())
    }

    fn subheading(&self) -> Option<String> {
        Some(self.comment.clone())
    }

    fn relation(&self) -> Option<&RelationSummary> {
        self.film.as_ref().and_then(|f| f.group.as_ref())
    }

    fn image_url(&self) -> Option<&str> {
        self.film.as_ref().and_then(|f| f.cover_image.as_deref())
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

impl Feedback for Comment {
    const PARENT_SEGMENT: &'static str = "film";

    fn parent_id(&self) -> i64 {
        self.film_id.get()
    }

    fn body(&self) -> &str {
        &self.comment
    }

    fn target(&self) -> Option<&FeedbackTarget> {
        self.film.as_ref()
    }
}

impl ResourceDraft for CommentDraft {
    fn schema() -> &'static ResourceSchema {
        &COMMENT_SCHEMA
    }

    fn field(&self, key: &str) -> String {
        match key {
            "comment" => self.comment.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        if key == "comment" {
            self.comment = value;
        }
    }

    fn relation_id(&self) -> Option<i64> {
        self.film_id.map(FilmId::get)
    }

    fn set_relation_id(&mut self, id: Option<i64>) {
        self.film_id = id.map(FilmId::new);
    }
}

impl Resource for Review {
    type Id = ReviewId;
    type Draft = ReviewDraft;

    fn schema() -> &'static ResourceSchema {
        &REVIEW_SCHEMA
    }

    fn id(&self) -> ReviewId {
        self.id
    }

    fn draft(&self) -> ReviewDraft {
        ReviewDraft {
            song_id: Some(self.song_id),
            ulasan: self.ulasan.clone(),
        }
    }

    fn heading(&self) -> String {
        target_heading(self.song.as_ref(), "Song", self.song_id.get())
    }

    fn subheading(&self) -> Option<String> {
        Some(self.ulasan.clone())
    }

    fn relation(&self) -> Option<&RelationSummary> {
        self.song.as_ref().and_then(|s| s.group.as_ref())
    }

    fn image_url(&self) -> Option<&str> {
        self.song.as_ref().and_then(|s| s.cover_image.as_deref())
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

impl Feedback for Review {
    const PARENT_SEGMENT: &'static str = "song";

    fn parent_id(&self) -> i64 {
        self.song_id.get()
    }

    fn body(&self) -> &str {
        &self.ulasan
    }

    fn target(&self) -> Option<&FeedbackTarget> {
        self.song.as_ref()
    }
}

impl ResourceDraft for ReviewDraft {
    fn schema() -> &'static ResourceSchema {
        &REVIEW_SCHEMA
    }

    fn field(&self, key: &str) -> String {
        match key {
            "ulasan" => self.ulasan.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        if key == "ulasan" {
            self.ulasan = value;
        }
    }

    fn relation_id(&self) -> Option<i64> {
        self.song_id.map(SongId::get)
    }

    fn set_relation_id(&mut self, id: Option<i64>) {
        self.song_id = id.map(SongId::new);
    }
}
