//! Attach rendered fragments to a parent container.

/// Where a fragment goes among its parent's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before every existing child.
    AtStart,
    /// After every existing child.
    AtEnd,
}

/// Parent container holding rendered fragments in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Host {
    id: String,
    children: Vec<String>,
}

impl Host {
    /// Creates an empty host.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
        }
    }

    /// Returns the host identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the attached fragments in display order.
    #[must_use]
    pub fn children(&self) -> &[String] {
        &self.children
    }

    /// Joins the attached fragments, separated by blank lines.
    #[must_use]
    pub fn contents(&self) -> String {
        self.children.join("\n\n")
    }
}

/// Attaches `fragment` to `host` at `position`.
pub fn mount(host: &mut Host, fragment: String, position: InsertPosition) {
    match position {
        InsertPosition::AtStart => host.children.insert(0, fragment),
        InsertPosition::AtEnd => host.children.push(fragment),
    }
}
