//! Catalog domain for the mediadmin console
//!
//! Read models, write models (drafts) and the resource schema that drives the
//! generic CRUD screens. No I/O lives here.

pub mod common;
pub mod entities;
pub mod error;
pub mod ids;
pub mod resource;

pub use entities::{
    Category, CategoryDraft, Comment, CommentDraft, Feedback, FeedbackTarget, Film, FilmDraft,
    Genre, GenreDraft, Review, ReviewDraft, Song, SongDraft, CATEGORY_SCHEMA, COMMENT_SCHEMA,
    FILM_SCHEMA, GENRE_SCHEMA, REVIEW_SCHEMA, SONG_SCHEMA,
};
pub use error::DomainError;
pub use ids::{CategoryId, CommentId, FilmId, GenreId, ReviewId, SongId};
pub use resource::{
    validate_fields, FieldKind, FieldSpec, RelationOption, RelationSpec, RelationSummary,
    Resource, ResourceDraft, ResourceKind, ResourceSchema, Timestamps,
};
