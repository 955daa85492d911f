//! The composed resource page and the async flows that drive it

use mediadmin_domain::{RelationOption, Resource};

use super::{
    ActiveView, DeleteConfirmation, FormState, ListView, ListingState, PageControls,
    ResourceController, StateCell, Submission,
};
use crate::application::services::ResourceService;
use crate::ports::outbound::ApiPort;

/// Everything one resource screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePageState<R: Resource> {
    pub controller: ResourceController<R>,
    pub listing: ListingState<R>,
    pub form: FormState<R>,
    pub delete: DeleteConfirmation,
    /// Last loaded relation choices, reused by every form opening
    pub options: Vec<RelationOption>,
}

impl<R: Resource> Default for ResourcePageState<R> {
    fn default() -> Self {
        Self {
            controller: ResourceController::default(),
            listing: ListingState::default(),
            form: FormState::default(),
            delete: DeleteConfirmation::default(),
            options: Vec::new(),
        }
    }
}

impl<R: Resource> ResourcePageState<R> {
    pub fn open_create(&mut self) {
        self.controller.open_create();
        self.form.open_create(self.options.clone());
        self.delete.reset();
    }

    pub fn open_edit(&mut self, item: R) {
        self.form.open_edit(&item, self.options.clone());
        self.controller.open_edit(item);
        self.delete.reset();
    }

    pub fn open_detail(&mut self, item: R) {
        self.controller.open_detail(item);
        self.delete.reset();
    }

    /// Edit the item currently shown in the detail dialog
    pub fn edit_selected(&mut self) {
        if let Some(item) = self.controller.selected().cloned() {
            self.open_edit(item);
        }
    }

    pub fn close_form(&mut self) {
        if !self.form.is_submitting() {
            self.controller.close_form();
        }
    }

    pub fn close_detail(&mut self) {
        if !self.delete.is_deleting() {
            self.controller.close_detail();
            self.delete.reset();
        }
    }

    pub fn active_view(&self) -> ActiveView {
        self.controller.active_view()
    }

    pub fn list_view(&self) -> ListView<R> {
        ListView::new(self.listing.items(), self.controller.current_page())
    }

    pub fn page_controls(&self) -> PageControls {
        PageControls::new(
            self.controller.current_page(),
            self.listing.items().len(),
        )
    }

    fn set_options(&mut self, options: Vec<RelationOption>) {
        self.form.set_options(options.clone());
        self.options = options;
    }
}

/// Sequences the network calls of one resource page.
///
/// Every mutation is awaited before the refetch starts, so the list always
/// reflects the write that just finished.
pub struct ResourceManager<R, A> {
    service: ResourceService<R, A>,
    page_limit: u32,
}

impl<R, A: Clone> Clone for ResourceManager<R, A> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            page_limit: self.page_limit,
        }
    }
}

impl<R: Resource, A: ApiPort> ResourceManager<R, A> {
    pub fn new(service: ResourceService<R, A>, page_limit: u32) -> Self {
        Self {
            service,
            page_limit: page_limit.max(1),
        }
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    /// Fetches the controller's current page
    pub async fn refresh<C: StateCell<ResourcePageState<R>>>(&self, state: &mut C) {
        let ticket = state.update_state(|s| {
            let page = s.controller.current_page();
            s.listing.begin(page)
        });

        let result = self
            .service
            .list_page(ticket.page, self.page_limit)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, page = ticket.page, "Listing {} failed", R::schema().plural);
                e.user_message(&R::schema().load_fallback())
            });

        state.update_state(|s| s.listing.apply(ticket, result));
    }

    /// Loads the choices for the relation selector, if the resource has one
    pub async fn load_relation_options<C: StateCell<ResourcePageState<R>>>(&self, state: &mut C) {
        if R::schema().relation.is_none() {
            return;
        }
        match self.service.relation_options().await {
            Ok(options) => state.update_state(|s| s.set_options(options)),
            Err(e) => tracing::warn!(error = %e, "Loading relation options failed"),
        }
    }

    pub async fn change_page<C: StateCell<ResourcePageState<R>>>(&self, state: &mut C, page: u32) {
        state.update_state(|s| s.controller.change_page(page));
        self.refresh(state).await;
    }

    /// Submits the open form. Returns true when the write succeeded.
    pub async fn submit<C: StateCell<ResourcePageState<R>>>(&self, state: &mut C) -> bool {
        let Some(submission) = state.update_state(|s| s.form.begin_submit()) else {
            return false;
        };

        let result = match &submission {
            Submission::Create(draft) => self.service.create(draft).await,
            Submission::Update(id, draft) => self.service.update(*id, draft).await,
        };

        let saved = state.update_state(|s| s.form.finish_submit(result));
        if saved {
            tracing::info!("Saved {}", R::schema().singular);
            state.update_state(|s| s.controller.on_form_submitted());
            self.refresh(state).await;
        }
        saved
    }

    /// Deletes the selected item after confirmation. Returns true on success.
    pub async fn confirm_delete<C: StateCell<ResourcePageState<R>>>(&self, state: &mut C) -> bool {
        let target = state.update_state(|s| {
            let id = s.controller.selected().map(Resource::id)?;
            s.delete.begin_delete().then_some(id)
        });
        let Some(id) = target else {
            return false;
        };

        let result = self.service.delete(id).await;

        let deleted = state.update_state(|s| s.delete.finish_delete(result, R::schema()));
        if deleted {
            tracing::info!(%id, "Deleted {}", R::schema().singular);
            state.update_state(|s| s.controller.on_delete_confirmed());
            self.refresh(state).await;
        }
        deleted
    }
}
