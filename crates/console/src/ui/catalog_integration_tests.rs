//! End-to-end page flows over the seeded in-memory catalog, wired the same
//! way the binary wires them.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use mediadmin_domain::{Category, Film, Resource, Review, Song};
use mockall::Sequence;
use serde_json::json;

use crate::application::api::Api;
use crate::application::feedback::FeedbackBoard;
use crate::application::resource::{Listing, ResourcePageState, StateCell};
use crate::application::services::{ResourceService, SessionService};
use crate::infrastructure::platform::MemoryStorageProvider;
use crate::infrastructure::testing::{fixtures, CallMethod, InMemoryBackend};
use crate::ports::outbound::{AuthPort, MockRawApiPort, RawApiPort};
use crate::ui::{ManagedFeedback, ManagedResource, Services};

fn seeded_services(page_limit: u32) -> (Arc<InMemoryBackend>, Services) {
    let backend = Arc::new(InMemoryBackend::new());
    fixtures::seed_catalog(&backend).expect("seed");
    let auth: Arc<dyn AuthPort> = Arc::new(SessionService::new(MemoryStorageProvider::default()));
    auth.sign_in("token-123");
    let raw: Arc<dyn RawApiPort> = backend.clone();
    (backend, Services::new(Api::new(raw), auth, page_limit))
}

fn page<R: Resource>() -> Rc<RefCell<ResourcePageState<R>>> {
    Rc::new(RefCell::new(ResourcePageState::default()))
}

#[tokio::test]
async fn paging_through_songs_ends_on_an_empty_page() {
    let (backend, services) = seeded_services(3);
    let manager = Song::manager(&services);
    let mut state = page::<Song>();

    manager.refresh(&mut state).await;
    let titles: Vec<String> = state.read_state(|s| {
        s.listing.items().iter().map(|song| song.title.clone()).collect()
    });
    assert_eq!(titles, ["Take Five", "So What", "Pink Moon"]);

    manager.change_page(&mut state, 2).await;
    assert_eq!(state.read_state(|s| s.listing.items().len()), 1);

    manager.change_page(&mut state, 3).await;
    state.read_state(|s| {
        let view = s.list_view();
        assert!(view.is_empty());
        assert_eq!(view.empty_message(), "No more songs on this page.");
        assert_eq!(view.controls.prev_page(), Some(2));
    });

    let paths: Vec<String> = backend.calls().into_iter().map(|c| c.path).collect();
    assert_eq!(
        paths,
        [
            "/api/songs?page=1&limit=3",
            "/api/songs?page=2&limit=3",
            "/api/songs?page=3&limit=3",
        ]
    );
}

#[tokio::test]
async fn new_film_shows_its_genre_on_the_card() {
    let (_backend, services) = seeded_services(10);
    let manager = Film::manager(&services);
    let mut state = page::<Film>();
    manager.refresh(&mut state).await;
    manager.load_relation_options(&mut state).await;

    let sci_fi = state.read_state(|s| {
        s.options
            .iter()
            .find(|o| o.name == "Science Fiction")
            .map(|o| o.id)
    });
    assert!(sci_fi.is_some());

    state.update_state(|s| {
        s.open_create();
        s.form.set_field("title", "Stalker".into());
        s.form.set_field("director", "Andrei Tarkovsky".into());
        s.form.set_relation(sci_fi);
    });
    assert!(manager.submit(&mut state).await);

    state.read_state(|s| {
        let view = s.list_view();
        let card = &view.cards[0];
        assert_eq!(card.heading, "Stalker");
        assert_eq!(card.subheading.as_deref(), Some("Directed by Andrei Tarkovsky"));
        assert_eq!(card.badge.as_deref(), Some("Science Fiction"));
        assert!(card.image_url.is_none());
    });
}

#[tokio::test]
async fn malformed_cover_url_is_caught_before_sending() {
    let (backend, services) = seeded_services(10);
    let manager = Song::manager(&services);
    let mut state = page::<Song>();
    manager.load_relation_options(&mut state).await;

    state.update_state(|s| {
        s.open_create();
        s.form.set_field("title", "Autumn Leaves".into());
        s.form.set_field("artist", "Cannonball Adderley".into());
        s.form.set_field("imageUrl", "ftp://covers/autumn.png".into());
    });
    assert!(!manager.submit(&mut state).await);

    assert_eq!(backend.count_calls(CallMethod::Post), 0);
    assert_eq!(
        state.read_state(|s| s.form.error().map(str::to_string)),
        Some("Image URL must be a valid URL (e.g., start with http)".to_string())
    );
}

#[tokio::test]
async fn review_written_under_a_filter_lands_on_that_song() {
    let (backend, services) = seeded_services(10);
    let manager = Review::manager(&services);
    let mut state = Rc::new(RefCell::new(FeedbackBoard::<Review>::default()));

    manager.load_parents(&mut state).await;
    manager.refresh(&mut state).await;
    assert_eq!(state.read_state(|b| b.listing.items().len()), 2);

    let so_what = state.read_state(|b| {
        b.parents()
            .iter()
            .find(|p| p.name == "So What")
            .map(|p| p.id)
    });
    manager.set_filter(&mut state, so_what).await;
    assert_eq!(
        state.read_state(|b| b.empty_message()),
        "No reviews for this song yet."
    );

    state.update_state(|b| {
        b.start_compose();
        b.form.set_field("ulasan", "Modal jazz at its coolest.".into());
    });
    assert!(manager.submit(&mut state).await);

    state.read_state(|b| {
        let entries = b.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].heading, "So What");
        assert_eq!(entries[0].group, "Jazz");
        assert_eq!(entries[0].body, "Modal jazz at its coolest.");
    });
    assert_eq!(backend.len("ulasan"), 3);
}

#[tokio::test]
async fn failed_list_can_be_retried() {
    let mut raw = MockRawApiPort::new();
    let mut seq = Sequence::new();
    raw.expect_get_json()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(fixtures::api_request_failed("connection reset")));
    raw.expect_get_json()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(json!([])));

    let auth: Arc<dyn AuthPort> = Arc::new(SessionService::new(MemoryStorageProvider::default()));
    let services = Services::new(Api::new(Arc::new(raw)), auth, 10);
    let manager = Film::manager(&services);
    let mut state = page::<Film>();

    manager.refresh(&mut state).await;
    assert_eq!(
        state.read_state(|s| s.listing.listing().clone()),
        Listing::Failed("Failed to load films".to_string())
    );

    manager.refresh(&mut state).await;
    state.read_state(|s| {
        assert_eq!(s.listing.listing(), &Listing::Loaded(Vec::new()));
        assert_eq!(
            s.list_view().empty_message(),
            "No films yet. Create the first one!"
        );
    });
}

#[tokio::test]
async fn edited_category_reads_back_with_the_new_values() {
    let (backend, services) = seeded_services(10);
    let manager = Category::manager(&services);
    let mut state = page::<Category>();
    manager.refresh(&mut state).await;

    let jazz = state.read_state(|s| {
        s.listing
            .items()
            .iter()
            .find(|c| c.name == "Jazz")
            .cloned()
    });
    let jazz = jazz.expect("seeded jazz category");

    state.update_state(|s| {
        s.open_edit(jazz.clone());
        s.form.set_field("name", "Modern Jazz".into());
    });
    state.read_state(|s| assert_eq!(s.form.field("deskripsi"), "Swing, bebop and beyond"));
    assert!(manager.submit(&mut state).await);

    let raw: Arc<dyn RawApiPort> = backend.clone();
    let stored = ResourceService::<Category, Api>::new(Api::new(raw))
        .get(jazz.id)
        .await
        .expect("category detail");
    assert_eq!(stored.id, jazz.id);
    assert_eq!(stored.name, "Modern Jazz");
    assert_eq!(stored.description.as_deref(), Some("Swing, bebop and beyond"));
    assert_eq!(stored.timestamps.created_at, jazz.timestamps.created_at);

    let listed = state.read_state(|s| s.listing.items().iter().any(|c| c.id == jazz.id));
    assert!(listed);
}
