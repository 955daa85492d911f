//! Category entity - the grouping songs are filed under
//!
//! The backend names the description column `deskripsi` on both the read and
//! the write side; `description` is accepted on read as well.

use serde::{Deserialize, Serialize};

use crate::common::none_if_blank;
use crate::ids::CategoryId;
use crate::resource::{
    FieldKind, FieldSpec, Resource, ResourceDraft, ResourceKind, ResourceSchema, Timestamps,
};

const CATEGORY_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "name",
        label: "Name",
        kind: FieldKind::Text,
        required: true,
        placeholder: "Category name",
    },
    FieldSpec {
        key: "deskripsi",
        label: "Description",
        kind: FieldKind::TextArea,
        required: false,
        placeholder: "What belongs in this category",
    },
];

pub static CATEGORY_SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Category,
    path: "category",
    singular: "category",
    plural: "Categories",
    fields: CATEGORY_FIELDS,
    relation: None,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "deskripsi", alias = "description")]
    pub description: Option<String>,
    /// Owner reference; displayed only
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub name: String,
    #[serde(rename = "deskripsi")]
    pub description: String,
}

impl Resource for Category {
    type Id = CategoryId;
    type Draft = CategoryDraft;

    fn schema() -> &'static ResourceSchema {
        &CATEGORY_SCHEMA
    }

    fn id(&self) -> CategoryId {
        self.id
    }

    fn draft(&self) -> CategoryDraft {
        CategoryDraft {
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

impl ResourceDraft for CategoryDraft {
    fn schema() -> &'static ResourceSchema {
        &CATEGORY_SCHEMA
    }

    fn field(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "deskripsi" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, key: &str, value: String) {
        match key {
            "name" => self.name = value,
            "deskripsi" => self.description = value,
            _ => {}
        }
    }
}
