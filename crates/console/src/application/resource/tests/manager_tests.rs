use serde_json::json;

use super::*;
use crate::application::resource::{ActiveView, Listing, StateCell};
use crate::infrastructure::testing::CallMethod;
use crate::ports::outbound::{ApiError, MockRawApiPort};
use mediadmin_domain::{Category, Song};

#[tokio::test]
async fn create_then_refetch_shows_the_new_item() {
    let backend = backend();
    let folk = backend
        .insert("category", json!({ "name": "Folk" }))
        .unwrap();
    let manager = manager::<Song>(backend.clone(), 10);
    let mut state = page::<Song>();

    manager.refresh(&mut state).await;
    manager.load_relation_options(&mut state).await;
    state.update_state(|s| {
        s.open_create();
        s.form.set_field("title", "Blue".into());
        s.form.set_field("artist", "Joni Mitchell".into());
    });
    assert_eq!(state.read_state(|s| s.form.relation_id()), Some(folk));

    assert!(manager.submit(&mut state).await);

    state.read_state(|s| {
        assert_eq!(s.active_view(), ActiveView::List);
        let items = s.listing.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Blue");
        assert_eq!(items[0].category.as_ref().map(|c| c.name.as_str()), Some("Folk"));
    });

    let calls = backend.calls();
    let post = calls
        .iter()
        .position(|c| c.method == CallMethod::Post)
        .unwrap();
    let last_get = calls
        .iter()
        .rposition(|c| c.method == CallMethod::Get)
        .unwrap();
    assert!(last_get > post, "refetch must follow the mutation");
    assert_eq!(calls[last_get].path, "/api/songs?page=1&limit=10");
}

#[tokio::test]
async fn edit_prepopulates_and_update_is_visible_after_refetch() {
    let backend = backend();
    backend
        .insert("category", json!({ "name": "Jazz", "deskripsi": "Swing" }))
        .unwrap();
    let manager = manager::<Category>(backend.clone(), 10);
    let mut state = page::<Category>();
    manager.refresh(&mut state).await;

    let item = state.read_state(|s| s.listing.items()[0].clone());
    state.update_state(|s| s.open_edit(item.clone()));
    state.read_state(|s| {
        assert_eq!(s.form.field("name"), "Jazz");
        assert_eq!(s.form.field("deskripsi"), "Swing");
        assert_eq!(s.active_view(), ActiveView::Form { edit: true });
    });

    state.update_state(|s| s.form.set_field("deskripsi", "Bebop".into()));
    assert!(manager.submit(&mut state).await);

    let put = backend
        .calls()
        .into_iter()
        .find(|c| c.method == CallMethod::Put)
        .unwrap();
    assert_eq!(put.path, format!("/api/category/{}", item.id));
    assert_eq!(put.body, Some(json!({ "name": "Jazz", "deskripsi": "Bebop" })));

    state.read_state(|s| {
        assert_eq!(s.listing.items()[0].description.as_deref(), Some("Bebop"));
        assert!(s.controller.selected().is_none());
    });
}

#[tokio::test]
async fn validation_failure_makes_no_network_call() {
    let mut raw = MockRawApiPort::new();
    raw.expect_post_no_response_json().never();
    raw.expect_put_no_response_json().never();
    let manager = manager::<Category>(Arc::new(raw), 10);
    let mut state = page::<Category>();

    state.update_state(|s| s.open_create());
    assert!(!manager.submit(&mut state).await);

    state.read_state(|s| {
        assert_eq!(s.form.error(), Some("Name is required"));
        assert!(s.controller.is_form_open());
    });
}

#[tokio::test]
async fn server_rejection_keeps_the_form_open() {
    let mut raw = MockRawApiPort::new();
    raw.expect_post_no_response_json()
        .times(1)
        .returning(|_, _| Err(ApiError::http(409, "Category already exists")));
    raw.expect_get_json().never();
    let manager = manager::<Category>(Arc::new(raw), 10);
    let mut state = page::<Category>();

    state.update_state(|s| {
        s.open_create();
        s.form.set_field("name", "Jazz".into());
    });
    assert!(!manager.submit(&mut state).await);

    state.read_state(|s| {
        assert_eq!(s.form.error(), Some("Category already exists"));
        assert!(!s.form.is_submitting());
        assert_eq!(s.active_view(), ActiveView::Form { edit: false });
        assert_eq!(s.form.field("name"), "Jazz");
    });
}

#[tokio::test]
async fn next_past_the_end_renders_empty_state() {
    let backend = backend();
    for i in 1..=10 {
        backend
            .insert("category", json!({ "name": format!("Category {i}") }))
            .unwrap();
    }
    let manager = manager::<Category>(backend.clone(), 10);
    let mut state = page::<Category>();

    manager.refresh(&mut state).await;
    assert_eq!(state.read_state(|s| s.listing.items().len()), 10);

    let next = state.read_state(|s| s.page_controls().next_page());
    manager.change_page(&mut state, next).await;

    assert_eq!(
        backend.calls().last().map(|c| c.path.clone()),
        Some("/api/category?page=2&limit=10".to_string())
    );
    state.read_state(|s| {
        assert_eq!(s.listing.listing(), &Listing::Loaded(Vec::new()));
        let view = s.list_view();
        assert!(view.is_empty());
        assert!(view.controls.prev_enabled);
        assert!(view.controls.visible);
    });
}

#[tokio::test]
async fn failed_fetch_is_reported_not_swallowed() {
    let mut raw = MockRawApiPort::new();
    raw.expect_get_json()
        .times(1)
        .returning(|_| Err(ApiError::RequestFailed("connection refused".into())));
    let manager = manager::<Song>(Arc::new(raw), 10);
    let mut state = page::<Song>();

    manager.refresh(&mut state).await;

    assert_eq!(
        state.read_state(|s| s.listing.error().map(str::to_string)),
        Some("Failed to load songs".to_string())
    );
}

#[tokio::test]
async fn opening_create_twice_yields_empty_fields() {
    let backend = backend();
    backend
        .insert("category", json!({ "name": "Folk", "deskripsi": "Acoustic" }))
        .unwrap();
    let manager = manager::<Category>(backend, 10);
    let mut state = page::<Category>();
    manager.refresh(&mut state).await;

    let item = state.read_state(|s| s.listing.items()[0].clone());
    state.update_state(|s| {
        s.open_detail(item.clone());
        s.edit_selected();
        s.close_form();
        s.open_create();
    });
    assert_eq!(state.read_state(|s| s.form.field("name")), "");

    state.update_state(|s| {
        s.form.set_field("name", "typed but abandoned".into());
        s.close_form();
        s.open_create();
    });
    state.read_state(|s| {
        assert_eq!(s.form.field("name"), "");
        assert_eq!(s.form.field("deskripsi"), "");
    });
}
