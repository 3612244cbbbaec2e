//! Engagement facade: the favorites and comparison managers
//!
//! Wires the shortlist core to notifications, badges, and toggle-control
//! rendering. State mutation never touches controls directly; callers
//! re-render controls from the membership set via [`render_controls`].

use crate::notify::{Badge, Level, NotificationCenter};
use crate::shortlist::{PropertyId, Shortlist, Toggle};
use crate::store::KeyValueStore;

/// Which shortlist a toggle control is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Favorite,
    Compare,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::Favorite => write!(f, "favorite"),
            ActionKind::Compare => write!(f, "compare"),
        }
    }
}

impl std::str::FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "favorite" => Ok(ActionKind::Favorite),
            "compare" => Ok(ActionKind::Compare),
            _ => Err(format!("Invalid action: {}. Use: favorite, compare", s)),
        }
    }
}

/// UI control bound to one property and one action kind. Its `active`
/// flag mirrors membership of that property in the matching shortlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleControl {
    pub property_id: PropertyId,
    pub action: ActionKind,
    pub active: bool,
}

impl ToggleControl {
    pub fn new(property_id: impl Into<PropertyId>, action: ActionKind) -> Self {
        Self {
            property_id: property_id.into(),
            action,
            active: false,
        }
    }
}

/// Set `active` on every control of `action` kind to whether its
/// property is a member. Controls of other kinds are left untouched.
pub fn render_controls(members: &[PropertyId], action: ActionKind, controls: &mut [ToggleControl]) {
    for control in controls.iter_mut().filter(|c| c.action == action) {
        control.active = members.contains(&control.property_id);
    }
}

/// Both shortlists plus the shared notification stack.
pub struct Engagement<S: KeyValueStore> {
    favorites: Shortlist<S>,
    comparison: Shortlist<S>,
    notices: NotificationCenter,
}

impl<S: KeyValueStore> Engagement<S> {
    /// Build from two storage handles. File-backed callers pass two
    /// handles onto the same store file; the shortlists use disjoint
    /// keys.
    pub fn new(favorites_storage: S, comparison_storage: S) -> Self {
        Self {
            favorites: Shortlist::favorites(favorites_storage),
            comparison: Shortlist::comparison(comparison_storage),
            notices: NotificationCenter::new(),
        }
    }

    /// Replace the notification center, e.g. with a short-TTL one.
    pub fn with_notices(mut self, notices: NotificationCenter) -> Self {
        self.notices = notices;
        self
    }

    /// Toggle favorite membership and post the matching notice.
    pub fn toggle_favorite(&mut self, id: &PropertyId) -> Toggle {
        let outcome = self.favorites.toggle(id);
        match &outcome {
            Toggle::Added => {
                self.notices.show("Property added to favorites", Level::Success);
            }
            Toggle::Removed => {
                self.notices.show("Property removed from favorites", Level::Success);
            }
            Toggle::Rejected(reason) => {
                self.notices.show(reason.to_string(), Level::Warning);
            }
        }
        outcome
    }

    /// Toggle comparison membership. At capacity the add is refused and
    /// only a warning notice is posted.
    pub fn toggle_compare(&mut self, id: &PropertyId) -> Toggle {
        let outcome = self.comparison.toggle(id);
        match &outcome {
            Toggle::Added => {
                self.notices.show("Property added to comparison", Level::Success);
            }
            Toggle::Removed => {
                self.notices.show("Property removed from comparison", Level::Success);
            }
            Toggle::Rejected(reason) => {
                self.notices.show(reason.to_string(), Level::Warning);
            }
        }
        outcome
    }

    /// Toggle via a control, keeping its `active` flag in sync. A
    /// rejected toggle leaves the control untouched.
    pub fn handle(&mut self, control: &mut ToggleControl) -> Toggle {
        let outcome = match control.action {
            ActionKind::Favorite => self.toggle_favorite(&control.property_id),
            ActionKind::Compare => self.toggle_compare(&control.property_id),
        };
        match outcome {
            Toggle::Added => control.active = true,
            Toggle::Removed => control.active = false,
            Toggle::Rejected(_) => {}
        }
        outcome
    }

    /// Apply stored membership to every control, as on page load.
    pub fn init_controls(&self, controls: &mut [ToggleControl]) {
        render_controls(&self.favorites.members(), ActionKind::Favorite, controls);
        render_controls(&self.comparison.members(), ActionKind::Compare, controls);
    }

    pub fn favorites_badge(&self) -> Badge {
        Badge::render(self.favorites.len())
    }

    pub fn compare_badge(&self) -> Badge {
        Badge::render(self.comparison.len())
    }

    pub fn favorites(&self) -> &Shortlist<S> {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut Shortlist<S> {
        &mut self.favorites
    }

    pub fn comparison(&self) -> &Shortlist<S> {
        &self.comparison
    }

    pub fn comparison_mut(&mut self) -> &mut Shortlist<S> {
        &mut self.comparison
    }

    pub fn notices(&self) -> &NotificationCenter {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notices
    }
}
