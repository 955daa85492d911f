//! Page-flow tests for the resource manager.
//!
//! Tests cover:
//! - refetch ordering after create, update and delete
//! - validation failures never reaching the network
//! - the delete confirmation issuing exactly one DELETE
//! - paging past the end rendering the empty state

mod manager_tests;

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use mediadmin_domain::Resource;

use super::{ResourceManager, ResourcePageState};
use crate::application::api::Api;
use crate::application::services::ResourceService;
use crate::infrastructure::testing::InMemoryBackend;
use crate::ports::outbound::RawApiPort;

type Page<R> = Rc<RefCell<ResourcePageState<R>>>;

fn page<R: Resource>() -> Page<R> {
    Rc::new(RefCell::new(ResourcePageState::default()))
}

fn manager<R: Resource>(raw: Arc<dyn RawApiPort>, limit: u32) -> ResourceManager<R, Api> {
    ResourceManager::new(ResourceService::new(Api::new(raw)), limit)
}

fn backend() -> Arc<InMemoryBackend> {
    Arc::new(InMemoryBackend::new())
}
