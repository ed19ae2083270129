//! Host view tree
//!
//! A flat arena of elements addressed by [`ElementId`]. Elements are found
//! by structural [`Role`], the way a page is queried by class name. The
//! collapsed marker lives on the element and is interpreted by the
//! renderer; nothing here knows what it looks like.

use crate::model::NAV_ITEMS;

/// Text of the standard content pane
pub const CONTENT_BODY: &str = "Pick a section from the sidebar.";

/// Structural role of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Collapsible lateral panel
    Sidebar,
    /// Control that collapses/expands the sidebar
    SidebarToggler,
    /// Label-bearing child of the toggler
    Icon,
    /// Navigation entry inside the sidebar
    NavItem,
    /// Main content pane
    Content,
}

impl Role {
    /// Human-readable role name (used in errors and logs)
    pub fn name(self) -> &'static str {
        match self {
            Role::Sidebar => "sidebar",
            Role::SidebarToggler => "sidebar toggler",
            Role::Icon => "toggler icon",
            Role::NavItem => "nav item",
            Role::Content => "content",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Index of an element in its [`ViewTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// A node in the view tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub role: Role,
    pub parent: Option<ElementId>,
    /// Text content (icon identifier, nav title, ...)
    pub label: String,
    /// Collapsed marker
    pub collapsed: bool,
}

/// Which optional elements the standard tree contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Include the sidebar toggler control
    pub toggler: bool,
    /// Include the icon child inside the toggler
    pub icon: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            toggler: true,
            icon: true,
        }
    }
}

impl Layout {
    /// A page without a collapsible sidebar
    pub fn without_toggler() -> Self {
        Self {
            toggler: false,
            icon: false,
        }
    }
}

/// Arena of elements in document order
#[derive(Debug, Clone, Default)]
pub struct ViewTree {
    elements: Vec<Element>,
}

impl ViewTree {
    /// Create an empty tree
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the application's page: sidebar (toggler + nav) and content.
    pub fn standard(layout: Layout) -> Self {
        let mut tree = Self::new();
        let sidebar = tree.push(Role::Sidebar, None);
        if layout.toggler {
            let toggler = tree.push(Role::SidebarToggler, Some(sidebar));
            if layout.icon {
                tree.push(Role::Icon, Some(toggler));
            }
        }
        for item in NAV_ITEMS {
            let id = tree.push(Role::NavItem, Some(sidebar));
            tree.set_label(id, item.title);
        }
        let content = tree.push(Role::Content, None);
        tree.set_label(content, CONTENT_BODY);
        tree
    }

    /// Append an element and return its id
    pub fn push(&mut self, role: Role, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element {
            role,
            parent,
            label: String::new(),
            collapsed: false,
        });
        id
    }

    /// Look up an element
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    /// First element with `role`, in document order
    pub fn query(&self, role: Role) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.role == role)
            .map(ElementId)
    }

    /// First descendant of `ancestor` with `role`
    pub fn query_within(&self, ancestor: ElementId, role: Role) -> Option<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .find(|(i, e)| e.role == role && self.is_descendant(ElementId(*i), ancestor))
            .map(|(i, _)| ElementId(i))
    }

    /// Direct children of `parent`, in document order
    pub fn children(&self, parent: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        self.elements
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.parent == Some(parent))
            .map(|(i, _)| ElementId(i))
    }

    fn is_descendant(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut current = self.get(id).and_then(|e| e.parent);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.get(parent).and_then(|e| e.parent);
        }
        false
    }

    /// Set or clear the collapsed marker
    pub fn set_marker(&mut self, id: ElementId, collapsed: bool) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.collapsed = collapsed;
        }
    }

    /// Is the collapsed marker set? (false for unknown ids)
    pub fn has_marker(&self, id: ElementId) -> bool {
        self.get(id).is_some_and(|e| e.collapsed)
    }

    /// Replace the text content of an element
    pub fn set_label(&mut self, id: ElementId, label: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id.0) {
            element.label = label.into();
        }
    }

    /// Text content of an element ("" for unknown ids)
    pub fn label(&self, id: ElementId) -> &str {
        self.get(id).map_or("", |e| e.label.as_str())
    }
}
