//! Domain entities - the catalog records the console manages

mod category;
mod feedback;
mod film;
mod genre;
mod song;

pub use category::{Category, CategoryDraft, CATEGORY_SCHEMA};
pub use feedback::{
    Comment, CommentDraft, Feedback, FeedbackTarget, Review, ReviewDraft, COMMENT_SCHEMA,
    REVIEW_SCHEMA,
};
pub use film::{Film, FilmDraft, FILM_SCHEMA};
pub use genre::{Genre, GenreDraft, GENRE_SCHEMA};
pub use song::{Song, SongDraft, SONG_SCHEMA};
