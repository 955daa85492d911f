//! Service bundle for the UI
//!
//! Built once by the composition root (`main.rs`) and handed to Dioxus as
//! context. Pages reach their manager through [`ManagedResource`] or
//! [`ManagedFeedback`], so one generic page serves every resource.

use std::sync::Arc;

use dioxus::prelude::*;
use mediadmin_domain::{Category, Comment, Feedback, Film, Genre, Resource, Review, Song};

use crate::application::api::Api;
use crate::application::feedback::FeedbackManager;
use crate::application::resource::ResourceManager;
use crate::application::services::ResourceService;
use crate::ports::outbound::AuthPort;

#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthPort>,
    pub songs: ResourceManager<Song, Api>,
    pub categories: ResourceManager<Category, Api>,
    pub films: ResourceManager<Film, Api>,
    pub genres: ResourceManager<Genre, Api>,
    pub comments: FeedbackManager<Comment, Api>,
    pub reviews: FeedbackManager<Review, Api>,
}

impl Services {
    pub fn new(api: Api, auth: Arc<dyn AuthPort>, page_limit: u32) -> Self {
        Self {
            auth,
            songs: ResourceManager::new(ResourceService::new(api.clone()), page_limit),
            categories: ResourceManager::new(ResourceService::new(api.clone()), page_limit),
            films: ResourceManager::new(ResourceService::new(api.clone()), page_limit),
            genres: ResourceManager::new(ResourceService::new(api.clone()), page_limit),
            comments: FeedbackManager::new(ResourceService::new(api.clone())),
            reviews: FeedbackManager::new(ResourceService::new(api)),
        }
    }
}

/// Hook to access the service bundle from context
pub fn use_services() -> Services {
    use_context::<Services>()
}

/// A catalog resource with its own paginated CRUD page
pub trait ManagedResource: Resource {
    fn manager(services: &Services) -> ResourceManager<Self, Api>;
}

impl ManagedResource for Song {
    fn manager(services: &Services) -> ResourceManager<Self, Api> {
        services.songs.clone()
    }
}

impl ManagedResource for Category {
    fn manager(services: &Services) -> ResourceManager<Self, Api> {
        services.categories.clone()
    }
}

impl ManagedResource for Film {
    fn manager(services: &Services) -> ResourceManager<Self, Api> {
        services.films.clone()
    }
}

impl ManagedResource for Genre {
    fn manager(services: &Services) -> ResourceManager<Self, Api> {
        services.genres.clone()
    }
}

/// A feedback resource with its own board page
pub trait ManagedFeedback: Feedback {
    fn manager(services: &Services) -> FeedbackManager<Self, Api>;
}

impl ManagedFeedback for Comment {
    fn manager(services: &Services) -> FeedbackManager<Self, Api> {
        services.comments.clone()
    }
}

impl ManagedFeedback for Review {
    fn manager(services: &Services) -> FeedbackManager<Self, Api> {
        services.reviews.clone()
    }
}
