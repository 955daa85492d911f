//! Genre entity - the grouping films are filed under

use serde::{Deserialize, Serialize};

use crate::common::none_if_blank;
use crate::ids::GenreId;
use crate::resource::{
    FieldKind, FieldSpec, Resource, ResourceDraft, ResourceKind, ResourceSchema, Timestamps,
};

const GENRE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Genre name",
    },
    FieldSpec {
        key: "description",
        label: "Description",
        kind: FieldKind::TextArea,
        required: false,
        placeholder: "Short description",
    },
];

pub static GENRE_SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Genre,
    path: "genre",
    singular: "genre",
    plural: "Genres",
    fields: GENRE_FIELDS,
    relation: None,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenreDraft {
    pub name: String,
    pub description: String,
}

impl Resource for Genre {
    type Id = GenreId;
    type Draft = GenreDraft;

    fn schema() -> &'static ResourceSchema {
        &GENRE_SCHEMA
    }

    fn id(&self) -> GenreId {
        self.id
    }

    fn draft(&self) -> GenreDraft {
        GenreDraft {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }

    fn heading(&self) -> String {
        self.name.clone()
    }

    fn subheading(&self) -> Option<String> {
        self.description
            .as_deref()
            .and_then(none_if_blank)
            .map(str::to_string)
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }
}

impl ResourceDraft for GenreDraft {
    fn schema() -> &'static ResourceSchema {
        &GENRE_SCHEMA
    }

    fn field(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "name" => self.name = value,
            "description" => self.description = value,
            _ => {}
        }
    }
}
