//! Feedback board flows: filtering, composing and deleting, each followed by a refetch

use mediadmin_domain::Feedback;

use super::FeedbackBoard;
use crate::application::resource::{StateCell, Submission};
use crate::application::services::ResourceService;
use crate::ports::outbound::ApiPort;

/// Sequences the network calls of a feedback board; refetches always follow
/// the mutation they reflect.
pub struct FeedbackManager<R, A> {
    service: ResourceService<R, A>,
}

impl<R, A: Clone> Clone for FeedbackManager<R, A> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<R: Feedback, A: ApiPort> FeedbackManager<R, A> {
    pub fn new(service: ResourceService<R, A>) -> Self {
        Self { service }
    }

    /// Fetches every entry, or only the filtered parent's entries
    pub async fn refresh<C: StateCell<FeedbackBoard<R>>>(&self, state: &mut C) {
        let (ticket, filter) = state.update_state(|b| (b.listing.begin(1), b.filter()));

        let result = match filter {
            Some(parent_id) => self.service.list_for_parent(parent_id).await,
            None => self.service.list_all().await,
        }
        .map_err(|e| {
            tracing::warn!(error = %e, ?filter, "Listing {} failed", R::schema().plural);
            e.user_message(&R::schema().load_fallback())
        });

        state.update_state(|b| b.listing.apply(ticket, result));
    }

    /// Loads the films or songs used by the filter and the form selector
    pub async fn load_parents<C: StateCell<FeedbackBoard<R>>>(&self, state: &mut C) {
        match self.service.relation_options().await {
            Ok(parents) => state.update_state(|b| b.set_parents(parents)),
            Err(e) => tracing::warn!(error = %e, "Loading feedback parents failed"),
        }
    }

    pub async fn set_filter<C: StateCell<FeedbackBoard<R>>>(
        &self,
        state: &mut C,
        parent_id: Option<i64>,
    ) {
        if state.update_state(|b| b.set_filter(parent_id)) {
            self.refresh(state).await;
        }
    }

    /// Submits the compose form. Returns true when the write succeeded.
    pub async fn submit<C: StateCell<FeedbackBoard<R>>>(&self, state: &mut C) -> bool {
        let Some(submission) = state.update_state(|b| b.form.begin_submit()) else {
            return false;
        };

        let result = match &submission {
            Submission::Create(draft) => self.service.create(draft).await,
            Submission::Update(id, draft) => self.service.update(*id, draft).await,
        };

        let saved = state.update_state(|b| b.form.finish_submit(result));
        if saved {
            tracing::info!("Saved {}", R::schema().singular);
            state.update_state(|b| b.on_submitted());
            self.refresh(state).await;
        }
        saved
    }

    /// Deletes the entry awaiting confirmation. Returns true on success.
    pub async fn confirm_delete<C: StateCell<FeedbackBoard<R>>>(&self, state: &mut C) -> bool {
        let target = state.update_state(|b| {
            let id = b.pending_delete()?;
            b.delete.begin_delete().then_some(id)
        });
        let Some(id) = target else {
            return false;
        };

        let result = self.service.delete(id).await;

        let deleted = state.update_state(|b| b.delete.finish_delete(result, R::schema()));
        if deleted {
            tracing::info!(%id, "Deleted {}", R::schema().singular);
            state.update_state(|b| b.on_deleted());
            self.refresh(state).await;
        }
        deleted
    }
}
