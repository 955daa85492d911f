//! Song entity - a catalog entry filed under a category
//!
//! Read model as the API returns it:
//!
//! ```json
//! { "id": 1, "title": "Blue", "artist": "Joni Mitchell", "category_id": 2,
//!   "category": { "id": 2, "name": "Folk" }, "image_url": "https://...",
//!   "created_at": "...", "updated_at": "..." }
//! ```
//!
//! Write body: `{ "title", "artist", "categoryId", "imageUrl" }`.

use serde::{Deserialize, Serialize};

use crate::common::none_if_blank;
use crate::ids::{CategoryId, SongId};
use crate::resource::{
    FieldKind, FieldSpec, RelationSpec, RelationSummary, Resource, ResourceDraft, ResourceKind,
    ResourceSchema, Timestamps,
};

const SONG_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "title",
        label: "Title",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Song title",
    },
    FieldSpec {
        key: "artist",
        label: "Artist",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Artist name",
    },
    FieldSpec {
        key: "imageUrl",
        label: "Image URL",
        kind: FieldKind::Url,
        required: false,
        placeholder: "https://example.com/cover.jpg",
    },
];

pub static SONG_SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Song,
    path: "songs",
    singular: "song",
    plural: "Songs",
    fields: SONG_FIELDS,
    relation: Some(RelationSpec {
        key: "categoryId",
        label: "Category",
        endpoint: "category",
    }),
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub artist: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Embedded parent, present when the backend joins it
    #[serde(default)]
    pub category: Option<RelationSummary>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDraft {
    pub title: String,
    pub artist: String,
    pub category_id: Option<CategoryId>,
    pub image_url: String,
}

impl Resource for Song {
    type Id = SongId;
    type Draft = SongDraft;

    fn schema() -> &'static ResourceSchema {
        &SONG_SCHEMA
    }

    fn id(&self) -> SongId {
        self.id
    }

    fn draft(&self) -> SongDraft {
        SongDraft {
            title: self.title.clone(),
            artist: self.artist.clone(),
            category_id: self
                .category_id
                .or_else(|| self.category.as_ref().map(|c| CategoryId::new(c.id))),
            image_url: self.image_url.clone().unwrap_or_default(),
        }
    }

    fn heading(&self) -> String {
        self.title.clone()
    }

    fn subheading(&self) -> Option<String> {
        none_if_blank(&self.artist).map(str::to_string)
    }

    fn relation(&self) -> Option<&RelationSummary> {
        self.category.as_ref()
    }

    fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref().and_then(none_if_blank)
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

impl ResourceDraft for SongDraft {
    fn schema() -> &'static ResourceSchema {
        &SONG_SCHEMA
    }

    fn field(&self, key: &str) -> String {
        match key {
            "title" => self.title.clone(),
            "artist" => self.artist.clone(),
            "imageUrl" => self.image_url.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "artist" => self.artist = value,
            "imageUrl" => self.image_url = value,
            _ => {}
        }
    }

    fn relation_id(&self) -> Option<i64> {
        self.category_id.map(CategoryId::get)
    }

    fn set_relation_id(&mut self, id: Option<i64>) {
        self.category_id = id.map(CategoryId::new);
    }
}
