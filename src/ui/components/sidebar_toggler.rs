//! Sidebar toggler component
//!
//! Binds to the sidebar and toggler elements of a [`ViewTree`] and keeps
//! the sidebar's collapsed marker and the toggler's icon label in sync
//! with an owned [`SidebarState`].

use thiserror::Error;

use crate::model::{SidebarState, label_for};
use crate::ui::tree::{ElementId, Role, ViewTree};

/// Errors raised while binding the toggler to a view tree
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindError {
    #[error("{role} not found in view tree")]
    NotFound { role: Role },
}

/// Collapse/expand control bound to one sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarToggler {
    sidebar: ElementId,
    icon: ElementId,
    state: SidebarState,
}

impl SidebarToggler {
    /// Resolve the elements this component drives.
    ///
    /// The initial state is taken from the sidebar's collapsed marker; only
    /// the icon label is written. A tree without a toggler is a valid page
    /// layout and yields `Ok(None)`. A toggler without its sidebar or icon
    /// is reported here rather than on first activation.
    pub fn bind(tree: &mut ViewTree) -> Result<Option<Self>, BindError> {
        let Some(toggler) = tree.query(Role::SidebarToggler) else {
            tracing::debug!("no sidebar toggler in view tree, skipping binding");
            return Ok(None);
        };
        let sidebar = tree.query(Role::Sidebar).ok_or(BindError::NotFound {
            role: Role::Sidebar,
        })?;
        let icon = tree
            .query_within(toggler, Role::Icon)
            .ok_or(BindError::NotFound { role: Role::Icon })?;

        let state = SidebarState::from_collapsed(tree.has_marker(sidebar));
        tree.set_label(icon, label_for(state));
        tracing::debug!(
            ?sidebar,
            ?toggler,
            ?icon,
            collapsed = state.is_collapsed(),
            "sidebar toggler bound"
        );
        Ok(Some(Self {
            sidebar,
            icon,
            state,
        }))
    }

    /// Handle one activation of the toggler control.
    pub fn on_activate(&mut self, tree: &mut ViewTree) {
        let state = self.state.toggle();
        self.sync(tree);
        tracing::info!(collapsed = state.is_collapsed(), "sidebar toggled");
    }

    /// Write marker and label from the current state
    fn sync(&self, tree: &mut ViewTree) {
        tree.set_marker(self.sidebar, self.state.is_collapsed());
        tree.set_label(self.icon, label_for(self.state));
    }

    /// Current state
    pub fn state(&self) -> SidebarState {
        self.state
    }

    /// Sidebar element
    pub fn sidebar(&self) -> ElementId {
        self.sidebar
    }

    /// Icon element inside the toggler
    pub fn icon(&self) -> ElementId {
        self.icon
    }
}
