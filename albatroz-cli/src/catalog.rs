//! The fixed set of components `albatroz add` knows how to install.

const COMPONENTS: &[&str] = &["Alert", "Button", "Card", "Input"];

/// A cataloged component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    name: &'static str,
}

impl Component {
    /// Display name, also used as the file stem (e.g. `Alert`).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Lower-case identifier used in the remote path (e.g. `alert`).
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }

    /// Destination file name (e.g. `Alert.tsx`).
    pub fn file_name(&self) -> String {
        format!("{}.tsx", self.name)
    }
}

/// Alphabetically sorted component catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    components: Vec<Component>,
}

impl Catalog {
    pub fn new() -> Self {
        let mut components: Vec<Component> =
            COMPONENTS.iter().map(|&name| Component { name }).collect();
        components.sort_by_key(|c| c.name.to_lowercase());
        Self { components }
    }

    /// Case-insensitive lookup of a user-supplied identifier. The identifier
    /// is only lower-cased; surrounding whitespace makes it unknown.
    pub fn lookup(&self, id: &str) -> Option<Component> {
        let id = id.to_lowercase();
        self.components.iter().copied().find(|c| c.slug() == id)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.components.iter().map(Component::name).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
