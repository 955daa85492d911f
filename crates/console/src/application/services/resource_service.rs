//! Resource Service - REST operations for one catalog resource
//!
//! One generic service covers every resource; the per-resource differences
//! (path, write model, relation endpoint) come from the resource schema.

use std::marker::PhantomData;

use mediadmin_domain::{Feedback, RelationOption, Resource};

use crate::application::ServiceError;
use crate::ports::outbound::ApiPort;

/// REST access for resource type `R`
pub struct ResourceService<R, A> {
    api: A,
    _resource: PhantomData<fn() -> R>,
}

impl<R, A: Clone> Clone for ResourceService<R, A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource, A: ApiPort> ResourceService<R, A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    /// `GET /api/{path}?page={page}&limit={limit}`
    pub async fn list_page(&self, page: u32, limit: u32) -> Result<Vec<R>, ServiceError> {
        let path = R::schema().page_path(page, limit);
        tracing::debug!(%path, "Fetching page");
        Ok(self.api.get(&path).await?)
    }

    /// `GET /api/{path}` (unpaginated)
    pub async fn list_all(&self) -> Result<Vec<R>, ServiceError> {
        Ok(self.api.get(&R::schema().collection_path()).await?)
    }

    /// `GET /api/{path}/{id}`
    pub async fn get(&self, id: R::Id) -> Result<R, ServiceError> {
        Ok(self.api.get(&R::schema().item_path(id)).await?)
    }

    /// `POST /api/{path}` with the full write model
    pub async fn create(&self, draft: &R::Draft) -> Result<(), ServiceError> {
        let path = R::schema().collection_path();
        tracing::debug!(%path, "Creating {}", R::schema().singular);
        self.api.post_no_response(&path, draft).await?;
        Ok(())
    }

    /// `PUT /api/{path}/{id}` replacing every field
    pub async fn update(&self, id: R::Id, draft: &R::Draft) -> Result<(), ServiceError> {
        let path = R::schema().item_path(id);
        tracing::debug!(%path, "Updating {}", R::schema().singular);
        self.api.put_no_response(&path, draft).await?;
        Ok(())
    }

    /// `DELETE /api/{path}/{id}`
    pub async fn delete(&self, id: R::Id) -> Result<(), ServiceError> {
        let path = R::schema().item_path(id);
        tracing::debug!(%path, "Deleting {}", R::schema().singular);
        self.api.delete(&path).await?;
        Ok(())
    }

    /// Selectable parents for the relation field; empty when the resource has none
    pub async fn relation_options(&self) -> Result<Vec<RelationOption>, ServiceError> {
        match R::schema().relation {
            Some(relation) => Ok(self.api.get(&relation.options_path()).await?),
            None => Ok(Vec::new()),
        }
    }
}

impl<R: Feedback, A: ApiPort> ResourceService<R, A> {
    /// `GET /api/{path}/{segment}/{parent_id}`
    pub async fn list_for_parent(&self, parent_id: i64) -> Result<Vec<R>, ServiceError> {
        let path = R::schema().parent_path(R::PARENT_SEGMENT, parent_id);
        tracing::debug!(%path, "Fetching entries for parent");
        Ok(self.api.get(&path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::api::Api;
    use crate::ports::outbound::{ApiError, MockRawApiPort};
    use mediadmin_domain::{
        Category, CategoryDraft, CategoryId, Comment, Song, SongDraft, SongId,
    };
    use mockall::predicate::eq;
    use serde_json::json;
    use std::sync::Arc;

    fn service<R: Resource>(raw: MockRawApiPort) -> ResourceService<R, Api> {
        ResourceService::new(Api::new(Arc::new(raw)))
    }

    #[tokio::test]
    async fn list_page_requests_page_and_limit() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .with(eq("/api/category?page=2&limit=10"))
            .times(1)
            .returning(|_| Ok(json!([])));

        let categories = service::<Category>(raw).list_page(2, 10).await.unwrap();
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn create_posts_the_camel_case_body() {
        let mut raw = MockRawApiPort::new();
        raw.expect_post_no_response_json()
            .withf(|path, body| {
                path == "/api/songs"
                    && body
                        == &json!({
                            "title": "Blue",
                            "artist": "Joni Mitchell",
                            "categoryId": 2,
                            "imageUrl": ""
                        })
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let draft = SongDraft {
            title: "Blue".into(),
            artist: "Joni Mitchell".into(),
            category_id: Some(CategoryId::new(2)),
            image_url: String::new(),
        };
        service::<Song>(raw).create(&draft).await.unwrap();
    }

    #[tokio::test]
    async fn update_puts_to_the_item_path() {
        let mut raw = MockRawApiPort::new();
        raw.expect_put_no_response_json()
            .withf(|path, body| path == "/api/category/3" && body["deskripsi"] == "Swing")
            .times(1)
            .returning(|_, _| Ok(()));

        let draft = CategoryDraft {
            name: "Jazz".into(),
            description: "Swing".into(),
        };
        service::<Category>(raw)
            .update(CategoryId::new(3), &draft)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_surfaces_server_errors() {
        let mut raw = MockRawApiPort::new();
        raw.expect_delete()
            .with(eq("/api/songs/99"))
            .times(1)
            .returning(|_| Err(ApiError::http(404, "Song not found")));

        let err = service::<Song>(raw).delete(SongId::new(99)).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.user_message("Failed to delete song"), "Song not found");
    }

    #[tokio::test]
    async fn relation_options_come_from_the_parent_endpoint() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .with(eq("/api/category"))
            .times(1)
            .returning(|_| Ok(json!([{ "id": 1, "name": "Folk", "deskripsi": null }])));

        let options = service::<Song>(raw).relation_options().await.unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].name, "Folk");
    }

    #[tokio::test]
    async fn resources_without_relation_skip_the_request() {
        let raw = MockRawApiPort::new();
        let options = service::<Category>(raw).relation_options().await.unwrap();
        assert!(options.is_empty());
    }

    #[tokio::test]
    async fn feedback_can_be_filtered_by_parent() {
        let mut raw = MockRawApiPort::new();
        raw.expect_get_json()
            .with(eq("/api/comment/film/4"))
            .times(1)
            .returning(|_| {
                Ok(json!([{ "id": 1, "comment": "Tense", "film_id": 4 }]))
            });

        let comments = service::<Comment>(raw).list_for_parent(4).await.unwrap();
        assert_eq!(comments[0].comment, "Tense");
    }
}
