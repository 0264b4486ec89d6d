//! Version navigator: the horizontally scrollable version selector.
//!
//! The navigator derives a [`VersionListView`] from an immutable snapshot of
//! a model's versions, and turns activations into host events:
//!
//! - activating a version with no files navigates to the completion wizard
//!   at the files step;
//! - otherwise, activating a version with no posts navigates to the wizard
//!   at the posts step;
//! - otherwise the host's `on_version_click` runs exactly once.
//!
//! Menu actions are terminal: they never fall through to selection
//! dispatch. Scroll state is the only state the navigator owns; selection
//! belongs to the host.
//!
//! # Example
//!
//! ```rust,ignore
//! use modelshare_core::navigator::{EventLog, Extents, VersionNavigator};
//!
//! let navigator = VersionNavigator::new(Extents::new(900.0, 400.0));
//! let view = navigator.render(&model.model_versions, Some(2), true);
//!
//! let mut events = EventLog::default();
//! navigator.activate(&model.model_versions, 1, &mut events);
//! ```

mod completeness;
mod menu;
mod scroll;
mod style;
mod view;

pub use completeness::{is_incomplete, Completeness};
pub use menu::{can_delete, entries as menu_entries, MenuAction, MenuEntry};
pub use scroll::{
    Extents, Measure, ScrollAffordances, ScrollBehavior, ScrollDirection, ScrollPosition,
    ScrollRequest,
};
pub use style::{ButtonVariant, ColorScheme, NavigatorStyle};
pub use view::{VersionItemView, VersionListView};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::models::{ModelVersion, VersionId};
use crate::routes::Route;

/// Receiver of navigator signals.
///
/// All calls are fire-and-forget; the navigator never waits on the host.
pub trait NavigatorHost {
    /// A complete version was activated.
    fn on_version_click(&mut self, version: &ModelVersion);

    /// The delete menu entry was activated for a version.
    fn on_delete_click(&mut self, version_id: VersionId);

    /// Full-page navigation.
    fn navigate(&mut self, route: Route);

    /// Move the viewport. Hosts without a scrollable surface may ignore it.
    fn scroll_by(&mut self, _request: ScrollRequest) {}
}

/// A navigator signal captured as data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavigatorEvent {
    VersionSelected { version: ModelVersion },
    #[serde(rename_all = "camelCase")]
    DeleteRequested { version_id: VersionId },
    Navigate { route: Route, path: String },
    Scroll { request: ScrollRequest },
}

/// Host that records every signal in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<NavigatorEvent>,
}

impl EventLog {
    pub fn events(&self) -> &[NavigatorEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, NavigatorEvent> {
        self.events.drain(..)
    }

    pub fn into_events(self) -> Vec<NavigatorEvent> {
        self.events
    }
}

impl NavigatorHost for EventLog {
    fn on_version_click(&mut self, version: &ModelVersion) {
        self.events.push(NavigatorEvent::VersionSelected {
            version: version.clone(),
        });
    }

    fn on_delete_click(&mut self, version_id: VersionId) {
        self.events.push(NavigatorEvent::DeleteRequested { version_id });
    }

    fn navigate(&mut self, route: Route) {
        let path = route.path();
        self.events.push(NavigatorEvent::Navigate { route, path });
    }

    fn scroll_by(&mut self, request: ScrollRequest) {
        self.events.push(NavigatorEvent::Scroll { request });
    }
}

/// The version selector.
///
/// One instance corresponds to one mounted list; dropping it discards the
/// scroll offset.
#[derive(Debug, Clone)]
pub struct VersionNavigator<M> {
    style: NavigatorStyle,
    measure: M,
    position: ScrollPosition,
}

impl<M: Measure> VersionNavigator<M> {
    /// Create a navigator with the default style.
    pub fn new(measure: M) -> Self {
        Self::with_style(NavigatorStyle::default(), measure)
    }

    pub fn with_style(style: NavigatorStyle, measure: M) -> Self {
        Self {
            style,
            measure,
            position: ScrollPosition::default(),
        }
    }

    pub fn style(&self) -> &NavigatorStyle {
        &self.style
    }

    pub fn scroll_position(&self) -> ScrollPosition {
        self.position
    }

    /// Record the offset reported by the host after any scroll.
    pub fn on_scroll_position_change(&mut self, position: ScrollPosition) {
        self.position = position;
    }

    /// Paging affordances for the current offset and a fresh measurement.
    pub fn affordances(&self) -> ScrollAffordances {
        ScrollAffordances::derive(self.position, self.measure.extents())
    }

    /// Derive the list view.
    ///
    /// An empty snapshot renders nothing: no items and no paging controls.
    pub fn render(
        &self,
        versions: &[ModelVersion],
        selected: Option<VersionId>,
        show_menu: bool,
    ) -> VersionListView {
        if versions.is_empty() {
            return VersionListView {
                spacing: self.style.item_spacing,
                ..VersionListView::default()
            };
        }
        warn_on_duplicate_ids(versions);

        let affordances = self.affordances();
        let items = versions
            .iter()
            .map(|version| {
                let active = selected == Some(version.id);
                let completeness = Completeness::of(version);
                let show_warning = completeness.is_incomplete();
                VersionItemView {
                    id: version.id,
                    label: version.name.clone(),
                    active,
                    completeness,
                    show_warning,
                    variant: self.style.variant(active),
                    color: self.style.color(active).to_string(),
                    warning_color: show_warning.then(|| self.style.warning_color.clone()),
                    menu: show_menu.then(|| menu::entries(version, versions.len())),
                }
            })
            .collect();

        VersionListView {
            items,
            show_left_arrow: affordances.can_scroll_left,
            show_right_arrow: affordances.can_scroll_right,
            spacing: self.style.item_spacing,
        }
    }

    /// Activate the version control for `version_id`.
    ///
    /// Returns `false` when the id is not in the snapshot; nothing is
    /// emitted in that case.
    pub fn activate<H>(&self, versions: &[ModelVersion], version_id: VersionId, host: &mut H) -> bool
    where
        H: NavigatorHost + ?Sized,
    {
        let Some(version) = find(versions, version_id) else {
            debug!("Activation ignored: version {} not in list", version_id);
            return false;
        };

        match Completeness::of(version).wizard_step() {
            Some(step) => {
                debug!(
                    "Version {} is incomplete, redirecting to wizard step {}",
                    version.id,
                    step.number()
                );
                host.navigate(Route::Wizard {
                    model_id: version.model_id,
                    version_id: version.id,
                    step,
                });
            }
            None => host.on_version_click(version),
        }
        true
    }

    /// Activate a menu entry of `version_id`.
    ///
    /// Menu actions never reach selection dispatch. An action whose entry
    /// is not rendered (menus hidden, or delete on the only version) is
    /// ignored and returns `false`.
    pub fn activate_menu_action<H>(
        &self,
        versions: &[ModelVersion],
        version_id: VersionId,
        action: MenuAction,
        show_menu: bool,
        host: &mut H,
    ) -> bool
    where
        H: NavigatorHost + ?Sized,
    {
        if !show_menu {
            debug!("Menu action {:?} ignored: menus hidden", action);
            return false;
        }
        let Some(version) = find(versions, version_id) else {
            debug!("Menu action ignored: version {} not in list", version_id);
            return false;
        };

        match action {
            MenuAction::DeleteVersion => {
                if !menu::can_delete(versions.len()) {
                    debug!("Delete ignored: version {} is the only version", version_id);
                    return false;
                }
                host.on_delete_click(version.id);
            }
            MenuAction::EditVersion => host.navigate(menu::edit_route(version)),
            MenuAction::EditCarousel => {
                debug!("Edit carousel is not available yet (version {})", version.id);
            }
        }
        true
    }

    /// Page the viewport one step in `direction`.
    ///
    /// Only a visible control can be activated, so paging toward an edge
    /// that is already reached emits nothing.
    pub fn page<H>(&self, direction: ScrollDirection, host: &mut H) -> Option<ScrollRequest>
    where
        H: NavigatorHost + ?Sized,
    {
        let extents = self.measure.extents();
        if !ScrollAffordances::derive(self.position, extents).allows(direction) {
            return None;
        }
        let request = ScrollRequest::page(direction, self.position.x, extents);
        host.scroll_by(request);
        Some(request)
    }
}

fn find(versions: &[ModelVersion], version_id: VersionId) -> Option<&ModelVersion> {
    versions.iter().find(|v| v.id == version_id)
}

/// Duplicate ids violate the caller's contract; report them, don't repair.
fn warn_on_duplicate_ids(versions: &[ModelVersion]) {
    let mut seen = HashSet::with_capacity(versions.len());
    for version in versions {
        if !seen.insert(version.id) {
            warn!("Duplicate model version id {} in navigator input", version.id);
        }
    }
}

/// First duplicated id in a snapshot, if any.
pub fn duplicate_id(versions: &[ModelVersion]) -> Option<VersionId> {
    let mut seen = HashSet::with_capacity(versions.len());
    versions.iter().map(|v| v.id).find(|id| !seen.insert(*id))
}
