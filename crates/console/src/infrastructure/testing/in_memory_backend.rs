//! A `RawApiPort` that keeps the catalog in memory
//!
//! It follows the same REST contract as the real backend:
//! - lists are plain arrays, newest first, paged with `?page=&limit=`
//! - write bodies are camelCase and stored snake_case
//! - read models embed their parent (`category`, `genre`, `film`, `song`)
//! - unknown ids answer 404 with a `message`

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use serde_json::{json, Map, Value};

use crate::ports::outbound::{ApiError, RawApiPort};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: CallMethod,
    pub path: String,
    pub body: Option<Value>,
}

/// How one table links to its parent
struct TableSpec {
    name: &'static str,
    singular: &'static str,
    /// (foreign key column, parent table, embedded field name)
    parent: Option<(&'static str, &'static str, &'static str)>,
}

const TABLES: &[TableSpec] = &[
    TableSpec {
        name: "category",
        singular: "Category",
        parent: None,
    },
    TableSpec {
        name: "genre",
        singular: "Genre",
        parent: None,
    },
    TableSpec {
        name: "songs",
        singular: "Song",
        parent: Some(("category_id", "category", "category")),
    },
    TableSpec {
        name: "films",
        singular: "Film",
        parent: Some(("genre_id", "genre", "genre")),
    },
    TableSpec {
        name: "comment",
        singular: "Comment",
        parent: Some(("film_id", "films", "film")),
    },
    TableSpec {
        name: "ulasan",
        singular: "Review",
        parent: Some(("song_id", "songs", "song")),
    },
];

fn table_spec(name: &str) -> Option<&'static TableSpec> {
    TABLES.iter().find(|t| t.name == name)
}

#[derive(Default)]
struct Store {
    tables: BTreeMap<&'static str, BTreeMap<i64, Map<String, Value>>>,
    next_id: i64,
    calls: Vec<RecordedCall>,
}

/// Parsed request target
enum Target<'a> {
    Collection {
        table: &'static TableSpec,
        page: Option<(usize, usize)>,
    },
    Item {
        table: &'static TableSpec,
        id: i64,
    },
    ByParent {
        table: &'static TableSpec,
        parent_id: i64,
    },
    Unknown(&'a str),
}

#[derive(Default)]
pub struct InMemoryBackend {
    store: Mutex<Store>,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, ApiError> {
        self.store
            .lock()
            .map_err(|_| ApiError::RequestFailed("in-memory backend unavailable".into()))
    }

    /// Inserts a row directly (snake_case or camelCase keys) and returns its id.
    pub fn insert(&self, table: &str, row: Value) -> Result<i64, ApiError> {
        let mut store = self.lock()?;
        let spec = table_spec(table).ok_or_else(|| not_found_path(table))?;
        store.create(spec, &row)
    }

    /// Every call made through the port, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().map(|s| s.calls.clone()).unwrap_or_default()
    }

    pub fn count_calls(&self, method: CallMethod) -> usize {
        self.calls().iter().filter(|c| c.method == method).count()
    }

    pub fn clear_calls(&self) {
        if let Ok(mut store) = self.lock() {
            store.calls.clear();
        }
    }

    /// Number of rows stored in `table`
    pub fn len(&self, table: &str) -> usize {
        self.lock()
            .ok()
            .and_then(|s| s.tables.get(table).map(BTreeMap::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, table: &str) -> bool {
        self.len(table) == 0
    }

    fn handle(
        &self,
        method: CallMethod,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let mut store = self.lock()?;
        store.calls.push(RecordedCall {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });

        match (method, parse_target(path)?) {
            (CallMethod::Get, Target::Collection { table, page }) => Ok(store.list(table, page)),
            (CallMethod::Get, Target::Item { table, id }) => store.get(table, id),
            (CallMethod::Get, Target::ByParent { table, parent_id }) => {
                Ok(store.list_by_parent(table, parent_id))
            }
            (CallMethod::Post, Target::Collection { table, .. }) => {
                let body = body.ok_or_else(|| bad_request("Request body is required"))?;
                let id = store.create(table, body)?;
                store.get(table, id)
            }
            (CallMethod::Put, Target::Item { table, id }) => {
                let body = body.ok_or_else(|| bad_request("Request body is required"))?;
                store.update(table, id, body)?;
                store.get(table, id)
            }
            (CallMethod::Delete, Target::Item { table, id }) => {
                store.delete(table, id)?;
                Ok(json!({ "message": format!("{} deleted", table.singular) }))
            }
            (_, Target::Unknown(p)) => Err(not_found_path(p)),
            _ => Err(ApiError::http(405, "Method not allowed")),
        }
    }
}

impl Store {
    fn rows(&self, table: &str) -> impl Iterator<Item = &Map<String, Value>> {
        // Newest first
        self.tables
            .get(table)
            .into_iter()
            .flat_map(|rows| rows.values().rev())
    }

    fn list(&self, table: &TableSpec, page: Option<(usize, usize)>) -> Value {
        let rows = self.rows(table.name).map(|row| self.embed(table, row));
        let rows: Vec<Value> = match page {
            Some((page, limit)) => rows
                .skip(page.saturating_sub(1).saturating_mul(limit))
                .take(limit)
                .collect(),
            None => rows.collect(),
        };
        Value::Array(rows)
    }

    fn list_by_parent(&self, table: &TableSpec, parent_id: i64) -> Value {
        let Some((fk, _, _)) = table.parent else {
            return Value::Array(Vec::new());
        };
        Value::Array(
            self.rows(table.name)
                .filter(|row| row.get(fk).and_then(Value::as_i64) == Some(parent_id))
                .map(|row| self.embed(table, row))
                .collect(),
        )
    }

    fn get(&self, table: &TableSpec, id: i64) -> Result<Value, ApiError> {
        self.tables
            .get(table.name)
            .and_then(|rows| rows.get(&id))
            .map(|row| self.embed(table, row))
            .ok_or_else(|| not_found(table))
    }

    fn create(&mut self, table: &'static TableSpec, body: &Value) -> Result<i64, ApiError> {
        let mut row = snake_case_object(body)?;
        self.check_parent(table, &row)?;

        self.next_id += 1;
        let id = self.next_id;
        let now = Utc::now().to_rfc3339();
        row.insert("id".into(), json!(id));
        row.entry("created_at").or_insert_with(|| json!(now));
        row.entry("updated_at").or_insert_with(|| json!(now));

        self.tables.entry(table.name).or_default().insert(id, row);
        Ok(id)
    }

    fn update(&mut self, table: &TableSpec, id: i64, body: &Value) -> Result<(), ApiError> {
        let fields = snake_case_object(body)?;
        self.check_parent(table, &fields)?;

        let row = self
            .tables
            .get_mut(table.name)
            .and_then(|rows| rows.get_mut(&id))
            .ok_or_else(|| not_found(table))?;

        for (key, value) in fields {
            if !matches!(key.as_str(), "id" | "created_at" | "updated_at") {
                row.insert(key, value);
            }
        }
        row.insert("updated_at".into(), json!(Utc::now().to_rfc3339()));
        Ok(())
    }

    fn delete(&mut self, table: &TableSpec, id: i64) -> Result<(), ApiError> {
        self.tables
            .get_mut(table.name)
            .and_then(|rows| rows.remove(&id))
            .map(|_| ())
            .ok_or_else(|| not_found(table))
    }

    fn check_parent(&self, table: &TableSpec, row: &Map<String, Value>) -> Result<(), ApiError> {
        let Some((fk, parent_table, _)) = table.parent else {
            return Ok(());
        };
        let Some(value) = row.get(fk) else {
            return Ok(());
        };
        let exists = value
            .as_i64()
            .and_then(|id| self.tables.get(parent_table).map(|rows| rows.contains_key(&id)))
            .unwrap_or(false);
        if exists {
            Ok(())
        } else {
            let parent = table_spec(parent_table).map_or("Parent", |p| p.singular);
            Err(bad_request(&format!("{parent} not found")))
        }
    }

    /// Row plus its embedded parent summary
    fn embed(&self, table: &TableSpec, row: &Map<String, Value>) -> Value {
        let mut out = row.clone();
        if let Some((fk, parent_table, field)) = table.parent {
            let parent = row
                .get(fk)
                .and_then(Value::as_i64)
                .and_then(|id| self.tables.get(parent_table)?.get(&id))
                .map(|p| self.summary(parent_table, p))
                .unwrap_or(Value::Null);
            out.insert(field.into(), parent);
        }
        Value::Object(out)
    }

    /// Embedded form of a parent row
    fn summary(&self, table: &str, row: &Map<String, Value>) -> Value {
        let id = row.get("id").cloned().unwrap_or(Value::Null);
        match table {
            "category" | "genre" => json!({
                "id": id,
                "name": row.get("name").cloned().unwrap_or(Value::Null),
            }),
            _ => {
                // A catalog entry: title, cover and its own grouping
                let mut summary = json!({
                    "id": id,
                    "title": row.get("title").cloned().unwrap_or(Value::Null),
                    "cover_image": row.get("image_url").cloned().unwrap_or(Value::Null),
                });
                if let (Some(spec), Value::Object(map)) = (table_spec(table), &mut summary) {
                    if let Some((fk, grouping, field)) = spec.parent {
                        let group = row
                            .get(fk)
                            .and_then(Value::as_i64)
                            .and_then(|gid| self.tables.get(grouping)?.get(&gid))
                            .map(|g| self.summary(grouping, g))
                            .unwrap_or(Value::Null);
                        map.insert(field.into(), group);
                    }
                }
                summary
            }
        }
    }
}

fn parse_target(path: &str) -> Result<Target<'_>, ApiError> {
    let (path_part, query) = match path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (path, None),
    };
    let Some(rest) = path_part.strip_prefix("/api/") else {
        return Ok(Target::Unknown(path));
    };
    let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

    let Some(table) = segments.first().and_then(|name| table_spec(name)) else {
        return Ok(Target::Unknown(path));
    };

    match segments.as_slice() {
        [_] => Ok(Target::Collection {
            table,
            page: query.and_then(parse_page),
        }),
        [_, id] => Ok(Target::Item {
            table,
            id: parse_id(id)?,
        }),
        [_, _, parent_id] if table.parent.is_some() => Ok(Target::ByParent {
            table,
            parent_id: parse_id(parent_id)?,
        }),
        _ => Ok(Target::Unknown(path)),
    }
}

fn parse_page(query: &str) -> Option<(usize, usize)> {
    let mut page = 1usize;
    let mut limit = None;
    for pair in query.split('&') {
        match pair.split_once('=') {
            Some(("page", v)) => page = v.parse().ok().filter(|p: &usize| *p > 0)?,
            Some(("limit", v)) => limit = v.parse().ok().filter(|l: &usize| *l > 0),
            _ => {}
        }
    }
    limit.map(|limit| (page, limit))
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| bad_request(&format!("Invalid id: {raw}")))
}

/// `categoryId` -> `category_id`; snake_case keys pass through
fn snake_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn snake_case_object(body: &Value) -> Result<Map<String, Value>, ApiError> {
    let Value::Object(map) = body else {
        return Err(bad_request("Request body must be a JSON object"));
    };
    Ok(map
        .iter()
        .map(|(k, v)| (snake_case(k), v.clone()))
        .collect())
}

fn bad_request(message: &str) -> ApiError {
    ApiError::http(400, message)
}

fn not_found(table: &TableSpec) -> ApiError {
    ApiError::http(404, format!("{} not found", table.singular))
}

fn not_found_path(path: &str) -> ApiError {
    ApiError::http(404, format!("No route for {path}"))
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl RawApiPort for InMemoryBackend {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        self.handle(CallMethod::Get, path, None)
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.handle(CallMethod::Post, path, Some(body))
    }

    async fn post_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.handle(CallMethod::Post, path, Some(body)).map(|_| ())
    }

    async fn put_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.handle(CallMethod::Put, path, Some(body))
    }

    async fn put_no_response_json(&self, path: &str, body: &Value) -> Result<(), ApiError> {
        self.handle(CallMethod::Put, path, Some(body)).map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.handle(CallMethod::Delete, path, None).map(|_| ())
    }
}
