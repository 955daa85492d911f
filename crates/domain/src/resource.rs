//! Resource schema - the per-resource endpoint and field configuration
//!
//! Every catalog entity (song, category, film, genre, comment, review) is
//! described once by a [`ResourceSchema`]: where it lives on the REST API, how
//! it is labelled, and which form fields its write model carries. The console
//! renders and validates forms from this description instead of hand-writing a
//! form per entity.
//!
//! Read models and write models are deliberately separate types: the backend
//! returns snake_case fields (`category_id`) and an embedded relation summary,
//! while it accepts camelCase bodies (`categoryId`). [`Resource::draft`] is the
//! single mapping point from one to the other.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::common::{is_blank, is_http_url};
use crate::error::DomainError;

/// The kinds of resources the console manages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Song,
    Category,
    Film,
    Genre,
    Comment,
    Review,
}

impl ResourceKind {
    /// Human readable singular label
    pub fn label(self) -> &'static str {
        match self {
            Self::Song => "Song",
            Self::Category => "Category",
            Self::Film => "Film",
            Self::Genre => "Genre",
            Self::Comment => "Comment",
            Self::Review => "Review",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a scalar form field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single line text input
    Text,
    /// Multi-line text input
    TextArea,
    /// Optional http(s) link, e.g. a cover image
    Url,
}

/// One owned (scalar) field of a write model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Wire name in the write model (camelCase)
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

/// The foreign key of a write model and where its options come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelationSpec {
    /// Wire name in the write model (camelCase), e.g. `categoryId`
    pub key: &'static str,
    pub label: &'static str,
    /// Path segment listing the parent resource, e.g. `category`
    pub endpoint: &'static str,
}

impl RelationSpec {
    /// Path listing every selectable parent (unpaginated)
    pub fn options_path(&self) -> String {
        format!("/api/{}", self.endpoint)
    }
}

/// Endpoint and field configuration for one resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSchema {
    pub kind: ResourceKind,
    /// REST path segment under `/api`
    pub path: &'static str,
    /// Lower-case singular noun used in messages ("song")
    pub singular: &'static str,
    /// Title-case plural used in headings ("Songs")
    pub plural: &'static str,
    pub fields: &'static [FieldSpec],
    pub relation: Option<RelationSpec>,
}

impl ResourceSchema {
    pub fn collection_path(&self) -> String {
        format!("/api/{}", self.path)
    }

    pub fn page_path(&self, page: u32, limit: u32) -> String {
        format!("/api/{}?page={}&limit={}", self.path, page, limit)
    }

    pub fn item_path(&self, id: impl fmt::Display) -> String {
        format!("/api/{}/{}", self.path, id)
    }

    /// Path listing the entries attached to one parent, e.g. `/api/comment/film/3`
    pub fn parent_path(&self, segment: &str, parent_id: i64) -> String {
        format!("/api/{}/{}/{}", self.path, segment, parent_id)
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Message shown when a save fails without a server-provided reason
    pub fn save_fallback(&self) -> String {
        format!("An error occurred while saving the {}", self.singular)
    }

    /// Message shown when a delete fails without a server-provided reason
    pub fn delete_fallback(&self) -> String {
        format!("Failed to delete {}", self.singular)
    }

    /// Message shown when a list fetch fails without a server-provided reason
    pub fn load_fallback(&self) -> String {
        format!("Failed to load {}", self.plural.to_lowercase())
    }
}

/// Server-timestamps of a read model, kept as the raw strings the API sent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timestamps {
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Embedded `{id, name}` summary of a parent resource in a read model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationSummary {
    pub id: i64,
    #[serde(alias = "title")]
    pub name: String,
}

/// One selectable parent in a relation selector
///
/// Groupings carry a `name`, catalog entries a `title`; both deserialize here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationOption {
    pub id: i64,
    #[serde(alias = "title")]
    pub name: String,
}

/// A read model the console can list, show, edit and delete
pub trait Resource:
    Clone + PartialEq + fmt::Debug + DeserializeOwned + Send + Sync + 'static
{
    type Id: Copy + Eq + fmt::Display + fmt::Debug + Into<i64> + Send + Sync + 'static;
    type Draft: ResourceDraft;

    fn schema() -> &'static ResourceSchema;

    fn id(&self) -> Self::Id;

    /// Write model holding exactly this item's current values
    fn draft(&self) -> Self::Draft;

    /// Card and dialog heading
    fn heading(&self) -> String;

    /// Secondary line under the heading
    fn subheading(&self) -> Option<String> {
        None
    }

    fn relation(&self) -> Option<&RelationSummary> {
        None
    }

    fn image_url(&self) -> Option<&str> {
        None
    }

    fn timestamps(&self) -> &Timestamps;
}

/// A write model submitted as a full-field JSON body (POST create / PUT replace)
pub trait ResourceDraft:
    Clone + PartialEq + Default + fmt::Debug + Serialize + Send + Sync + 'static
{
    fn schema() -> &'static ResourceSchema;

    /// Current value of a scalar field by wire key (empty for unknown keys)
    fn field(&self, key: &str) -> String;

    /// Sets a scalar field by wire key; unknown keys are ignored
    fn set_field(&mut self, key: &str, value: String);

    fn relation_id(&self) -> Option<i64> {
        None
    }

    fn set_relation_id(&mut self, _id: Option<i64>) {}

    /// Client-side validation run before any request is made
    fn validate(&self) -> Result<(), DomainError> {
        validate_fields(Self::schema(), self)
    }
}

/// Checks a draft against its schema.
///
/// Required text must be non-blank, URL fields must be empty or look like an
/// http(s) link, and a declared relation must be selected. The first failure
/// wins so the message can be shown inline.
pub fn validate_fields<D: ResourceDraft + ?Sized>(
    schema: &ResourceSchema,
    draft: &D,
) -> Result<(), DomainError> {
    for field in schema.fields {
        let value = draft.field(field.key);
        if field.required && is_blank(&value) {
            return Err(DomainError::validation(format!("{} is required", field.label)));
        }
        if field.kind == FieldKind::Url && !is_blank(&value) && !is_http_url(&value) {
            return Err(DomainError::validation(format!(
                "{} must be a valid URL (e.g., start with http)",
                field.label
            )));
        }
    }

    if let Some(relation) = schema.relation {
        if draft.relation_id().is_none() {
            return Err(DomainError::validation(format!(
                "Please select a {}",
                relation.label
            )));
        }
    }

    Ok(())
}
