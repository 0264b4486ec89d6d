//! Model page: the host that owns selection and talks to the data service.
//!
//! The page embeds a [`VersionNavigator`], turns its events into page state
//! (selection, pending delete confirmation, pending navigation) and runs
//! the delete flows against a [`DataService`].

mod details;

pub use details::{
    details_table, format_count, DetailRow, DownloadLink, GalleryAlign, GalleryLayout,
    ReviewPrefill,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{ModelShareError, Result};
use crate::models::{
    Model, ModelVersion, Review, ReviewFilter, ReviewQuery, ReviewSort, UserId, VersionId,
};
use crate::navigator::{
    EventLog, Measure, MenuAction, NavigatorEvent, NavigatorStyle, ScrollDirection,
    ScrollPosition, ScrollRequest, VersionListView, VersionNavigator,
};
use crate::routes::Route;
use crate::store::DataService;

/// Result of the delete-model flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ModelDeleteOutcome {
    /// Deleted; leave the page.
    Redirect { route: Route },
    /// Not deleted; show the message.
    Failed { message: String },
}

pub struct ModelPage<M> {
    model: Model,
    viewer: Option<UserId>,
    selected: Option<VersionId>,
    pending_delete: Option<VersionId>,
    pending_navigation: Option<Route>,
    review_query: ReviewQuery,
    last_error: Option<String>,
    navigator: VersionNavigator<M>,
}

impl<M: Measure> ModelPage<M> {
    /// Open the page for `model` as seen by `viewer`. The latest version is
    /// selected initially.
    pub fn new(model: Model, viewer: Option<UserId>, measure: M) -> Self {
        Self::with_style(model, viewer, NavigatorStyle::default(), measure)
    }

    pub fn with_style(
        model: Model,
        viewer: Option<UserId>,
        style: NavigatorStyle,
        measure: M,
    ) -> Self {
        let selected = model.latest_version().map(|v| v.id);
        let review_query = ReviewQuery::new(model.id);
        Self {
            model,
            viewer,
            selected,
            pending_delete: None,
            pending_navigation: None,
            review_query,
            last_error: None,
            navigator: VersionNavigator::with_style(style, measure),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn is_owner(&self) -> bool {
        self.viewer == Some(self.model.user.id)
    }

    pub fn selected(&self) -> Option<VersionId> {
        self.selected
    }

    pub fn selected_version(&self) -> Option<&ModelVersion> {
        self.selected.and_then(|id| self.model.version(id))
    }

    pub fn latest_version(&self) -> Option<&ModelVersion> {
        self.model.latest_version()
    }

    pub fn pending_delete(&self) -> Option<VersionId> {
        self.pending_delete
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Navigation requested by the last interaction, if any.
    pub fn take_navigation(&mut self) -> Option<Route> {
        self.pending_navigation.take()
    }

    // ========================================
    // Version list
    // ========================================

    pub fn render_versions(&self) -> VersionListView {
        self.navigator
            .render(&self.model.model_versions, self.selected, self.is_owner())
    }

    pub fn activate_version(&mut self, version_id: VersionId) -> bool {
        let mut log = EventLog::default();
        let handled = self
            .navigator
            .activate(&self.model.model_versions, version_id, &mut log);
        self.apply_all(log);
        handled
    }

    pub fn activate_menu_action(&mut self, version_id: VersionId, action: MenuAction) -> bool {
        let mut log = EventLog::default();
        let handled = self.navigator.activate_menu_action(
            &self.model.model_versions,
            version_id,
            action,
            self.is_owner(),
            &mut log,
        );
        self.apply_all(log);
        handled
    }

    pub fn page_versions(&mut self, direction: ScrollDirection) -> Option<ScrollRequest> {
        let mut log = EventLog::default();
        let request = self.navigator.page(direction, &mut log);
        self.apply_all(log);
        request
    }

    pub fn on_versions_scrolled(&mut self, position: ScrollPosition) {
        self.navigator.on_scroll_position_change(position);
    }

    fn apply_all(&mut self, log: EventLog) {
        for event in log.into_events() {
            self.apply(event);
        }
    }

    /// Fold one navigator event into page state.
    pub fn apply(&mut self, event: NavigatorEvent) {
        match event {
            NavigatorEvent::VersionSelected { version } => {
                debug!("Selected version {}", version.id);
                self.selected = Some(version.id);
            }
            NavigatorEvent::DeleteRequested { version_id } => {
                self.pending_delete = Some(version_id);
            }
            NavigatorEvent::Navigate { route, .. } => {
                self.pending_navigation = Some(route);
            }
            // The rendering host performs the scroll and reports back.
            NavigatorEvent::Scroll { .. } => {}
        }
    }

    // ========================================
    // Version deletion
    // ========================================

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Confirm the pending version deletion.
    ///
    /// Returns the deleted id, or `None` when nothing was pending. On
    /// failure the version list is left untouched and the message is kept
    /// in [`Self::last_error`].
    pub async fn confirm_delete_version<S>(&mut self, service: &S) -> Result<Option<VersionId>>
    where
        S: DataService + ?Sized,
    {
        let Some(version_id) = self.pending_delete.take() else {
            return Ok(None);
        };

        match service.delete_model_version(version_id).await {
            Ok(deleted) => {
                self.model.model_versions.retain(|v| v.id != deleted);
                if self.selected == Some(deleted) {
                    self.selected = self.model.latest_version().map(|v| v.id);
                }
                self.last_error = None;
                info!("Version {} deleted from model {}", deleted, self.model.id);
                Ok(Some(deleted))
            }
            Err(e) => {
                warn!("Failed to delete version {}: {}", version_id, e);
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    // ========================================
    // Model actions
    // ========================================

    /// Edit-model route, offered to the owner only.
    pub fn edit_model_route(&self) -> Option<Route> {
        self.is_owner().then_some(Route::EditModel {
            model_id: self.model.id,
        })
    }

    pub async fn delete_model<S>(&mut self, service: &S) -> ModelDeleteOutcome
    where
        S: DataService + ?Sized,
    {
        let result = if self.is_owner() {
            service.delete_model(self.model.id).await
        } else {
            Err(ModelShareError::Validation {
                field: "model".to_string(),
                message: "only the owner can delete this model".to_string(),
            })
        };

        match result {
            Ok(_) => {
                info!("Model {} deleted", self.model.id);
                self.pending_navigation = Some(Route::Home);
                ModelDeleteOutcome::Redirect { route: Route::Home }
            }
            Err(e) => {
                let message = format!("An error occurred while deleting the model: {}", e);
                warn!("{}", message);
                self.last_error = Some(message.clone());
                ModelDeleteOutcome::Failed { message }
            }
        }
    }

    // ========================================
    // Derived display data
    // ========================================

    pub fn details(&self) -> Vec<DetailRow> {
        details_table(&self.model)
    }

    /// Download button for the latest version.
    pub fn download(&self) -> Option<DownloadLink> {
        self.latest_version().map(DownloadLink::for_version)
    }

    /// Gallery layout for the latest version's images.
    pub fn gallery(&self) -> GalleryLayout {
        GalleryLayout::for_image_count(self.latest_version().map_or(0, |v| v.images.len()))
    }

    pub fn review_prefill(&self) -> ReviewPrefill {
        ReviewPrefill::for_model(&self.model)
    }

    // ========================================
    // Reviews
    // ========================================

    pub fn review_query(&self) -> &ReviewQuery {
        &self.review_query
    }

    pub fn set_review_filters(&mut self, filters: Vec<ReviewFilter>) {
        self.review_query.filter_by = filters;
    }

    pub fn set_review_sort(&mut self, sort: ReviewSort) {
        self.review_query.sort = sort;
    }

    pub async fn load_reviews<S>(&self, service: &S) -> Result<Vec<Review>>
    where
        S: DataService + ?Sized,
    {
        service.list_reviews(&self.review_query).await
    }
}

/// `"{n} total reviews"` summary line.
pub fn review_count_label(count: usize) -> String {
    format!("{} total reviews", format_count(count as u64))
}
