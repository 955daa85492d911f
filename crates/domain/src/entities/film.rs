//! Film entity - a catalog entry filed under a genre
//!
//! Read: `{ id, title, director, genre_id, genre: {id, name}, image_url, ... }`.
//! Write: `{ title, director, genreId, imageUrl }`.

use serde::{Deserialize, Serialize};

use crate::common::none_if_blank;
use crate::ids::{FilmId, GenreId};
use crate::resource::{
    FieldKind, FieldSpec, RelationSpec, RelationSummary, Resource, ResourceDraft, ResourceKind,
    ResourceSchema, Timestamps,
};

const FILM_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "title",
        label: "Title",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Film title",
    },
    FieldSpec {
        key: "director",
        label: "Director",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Director name",
    },
    FieldSpec {
        key: "imageUrl",
        label: "Image URL",
        kind: FieldKind::Url,
        required: false,
        placeholder: "https://example.com/poster.jpg",
    },
];

pub static FILM_SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Film,
    path: "films",
    singular: "film",
    plural: "Films",
    fields: FILM_FIELDS,
    relation: Some(RelationSpec {
        key: "genreId",
        label: "Genre",
        endpoint: "genre",
    }),
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: FilmId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub genre_id: Option<GenreId>,
    #[serde(default)]
    pub genre: Option<RelationSummary>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmDraft {
    pub title: String,
    pub director: String,
    pub genre_id: Option<GenreId>,
    pub image_url: String,
}

impl Resource for Film {
    type Id = FilmId;
    type Draft = FilmDraft;

    fn schema() -> &'static ResourceSchema {
        &FILM_SCHEMA
    }

    fn id(&self) -> FilmId {
        self.id
    }

    fn draft(&self) -> FilmDraft {
        FilmDraft {
            title: self.title.clone(),
            director: self.director.clone(),
            genre_id: self
                .genre_id
                .or_else(|| self.genre.as_ref().map(|g| GenreId::new(g.id))),
            image_url: self.image_url.clone().unwrap_or_default(),
        }
    }

    fn heading(&self) -> String {
        self.title.clone()
    }

    fn subheading(&self) -> Option<String> {
        none_if_blank(&self.director).map(|d| format!("Directed by {d}"))
    }

    fn relation(&self) -> Option<&RelationSummary> {
        self.genre.as_ref()
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().and_then(none_if_blank)
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

impl ResourceDraft for FilmDraft {
    fn schema() -> &'static ResourceSchema {
        &FILM_SCHEMA
    }

    fn field(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "director" => self.director.clone(),
            "imageUrl" => self.image_url.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "director" => self.director = value,
            "imageUrl" => self.image_url = value,
            _ => {}
        }
    }

    fn relation_id(&self) -> Option<i64> {
        self.genre_id.map(GenreId::get)
    }

    fn set_relation_id(&mut self, id: Option<i64>) {
        self.genre_id = id.map(GenreId::new);
    }
}
