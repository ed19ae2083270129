//! Application state and sidebar binding

use ratatui::layout::Rect;

use crate::config::Config;
use crate::ui::components::SidebarToggler;
use crate::ui::tree::ViewTree;

/// The main application state
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Runtime configuration
    pub config: Config,
    /// Page elements
    pub tree: ViewTree,
    /// Bound sidebar toggler (None when the page has no toggler)
    pub toggler: Option<SidebarToggler>,
    /// Failure from binding components; stays until the app exits
    pub bind_error: Option<String>,
    /// Set once `mount` has run
    mounted: bool,
    /// Toggler area from the last render, for mouse hit-testing
    pub(crate) toggler_area: Option<Rect>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    /// Construct a new instance of [`App`] with the standard page layout.
    pub fn new(config: Config) -> Self {
        Self::with_tree(config, ViewTree::standard(config.layout))
    }

    /// Construct an [`App`] around an already-built view tree.
    pub fn with_tree(config: Config, tree: ViewTree) -> Self {
        let mut app = Self {
            running: true,
            config,
            tree,
            toggler: None,
            bind_error: None,
            mounted: false,
            toggler_area: None,
        };

        // View tree is complete: bind components
        app.mount();

        app
    }

    /// Bind components to the view tree. Only the first call has an effect.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        match SidebarToggler::bind(&mut self.tree) {
            Ok(toggler) => self.toggler = toggler,
            Err(e) => {
                tracing::error!(error = %e, "failed to bind sidebar toggler");
                self.bind_error = Some(e.to_string());
            }
        }
    }

    /// Has `mount` run?
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Activate the sidebar toggler. No-op when nothing is bound.
    pub fn activate_toggler(&mut self) {
        if let Some(toggler) = self.toggler.as_mut() {
            toggler.on_activate(&mut self.tree);
        }
    }

    /// Is the sidebar collapsed? (false when no toggler is bound)
    pub fn sidebar_collapsed(&self) -> bool {
        self.toggler
            .as_ref()
            .is_some_and(|t| t.state().is_collapsed())
    }

    /// Current toggler icon label, if a toggler is bound
    pub fn toggler_label(&self) -> Option<&str> {
        self.toggler.as_ref().map(|t| self.tree.label(t.icon()))
    }

    /// Set running to false to quit the application.
    pub(crate) fn quit(&mut self) {
        tracing::debug!("quit requested");
        self.running = false;
    }
}
