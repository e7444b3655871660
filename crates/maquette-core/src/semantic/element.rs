//! Diagram element types for the semantic model.

use std::{fmt, path::PathBuf};

use crate::{color::Color, identifier::Id};

/// Icons shipped with the renderer, one per service kind the diagrams use.
///
/// Builtin icons carry no raster asset; they render as a Graphviz shape
/// filled with the service's brand color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinIcon {
    User,
    React,
    Vercel,
    Postgresql,
    Storage,
    Firewall,
    Dns,
    Github,
    GithubActions,
    Opensearch,
}

impl BuiltinIcon {
    /// Stable lowercase name, usable in logs and DOT comments.
    pub fn name(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::React => "react",
            Self::Vercel => "vercel",
            Self::Postgresql => "postgresql",
            Self::Storage => "storage",
            Self::Firewall => "firewall",
            Self::Dns => "dns",
            Self::Github => "github",
            Self::GithubActions => "github_actions",
            Self::Opensearch => "opensearch",
        }
    }

    /// Fill color used when this icon is drawn as a filled shape.
    pub fn fill(&self) -> Color {
        let hex = match self {
            Self::User => "#708090",
            Self::React => "#61dafb",
            Self::Vercel => "#000000",
            Self::Postgresql => "#336791",
            Self::Storage => "#f29111",
            Self::Firewall => "#c0392b",
            Self::Dns => "#e95420",
            Self::Github => "#24292e",
            Self::GithubActions => "#2088ff",
            Self::Opensearch => "#005eb8",
        };
        Color::new(hex).expect("builtin icon palette entries are valid hex colors")
    }
}

impl fmt::Display for BuiltinIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Icon reference carried by a [`Node`].
///
/// Either one of the [`BuiltinIcon`] enumerators or a fixed image-file path
/// for services the builtin set does not cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// A builtin icon, rendered as a styled shape.
    Builtin(BuiltinIcon),
    /// A custom icon image at a fixed path, rendered via the Graphviz
    /// `image` attribute. The file must exist at render time.
    Custom(PathBuf),
}

impl Icon {
    /// Create a custom icon from an image-file path.
    ///
    /// # Examples
    ///
    /// ```
    /// use maquette_core::semantic::Icon;
    ///
    /// let icon = Icon::custom("assets/supabase.png");
    /// ```
    pub fn custom(path: impl Into<PathBuf>) -> Self {
        Self::Custom(path.into())
    }
}

impl From<BuiltinIcon> for Icon {
    fn from(builtin: BuiltinIcon) -> Self {
        Self::Builtin(builtin)
    }
}

/// A diagram leaf node: one labeled system/service icon.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: String,
    icon: Icon,
}

impl Node {
    /// Create a new Node.
    ///
    /// # Arguments
    ///
    /// * `name` - Identifier, unique within the enclosing diagram
    /// * `label` - Display label drawn next to the icon
    /// * `icon` - A [`BuiltinIcon`] or [`Icon::Custom`] reference
    ///
    /// # Examples
    ///
    /// ```
    /// use maquette_core::semantic::{BuiltinIcon, Node};
    ///
    /// let postgres = Node::new("postgres", "PostgreSQL", BuiltinIcon::Postgresql);
    /// assert_eq!(postgres.label(), "PostgreSQL");
    /// ```
    pub fn new(name: &str, label: impl Into<String>, icon: impl Into<Icon>) -> Self {
        Self {
            id: Id::new(name),
            label: label.into(),
            icon: icon.into(),
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Borrow the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow the node's icon reference.
    pub fn icon(&self) -> &Icon {
        &self.icon
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A directed edge between two nodes, carrying an optional text label.
///
/// Edges have no identity beyond their endpoints and no weight; they are
/// declared once and consumed by the renderer.
#[derive(Debug, Clone)]
pub struct Edge {
    source: Id,
    target: Id,
    label: Option<String>,
}

impl Edge {
    /// Create a new Edge between two node Ids with an optional label.
    pub fn new(source: Id, target: Id, label: Option<String>) -> Self {
        Self {
            source,
            target,
            label,
        }
    }

    /// Get the source node Id of this edge.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node Id of this edge.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Borrow the edge label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_from_builtin() {
        let icon: Icon = BuiltinIcon::React.into();
        assert_eq!(icon, Icon::Builtin(BuiltinIcon::React));
    }

    #[test]
    fn test_icon_custom_path() {
        let icon = Icon::custom("assets/claude.png");
        assert_eq!(icon, Icon::Custom(PathBuf::from("assets/claude.png")));
    }

    #[test]
    fn test_builtin_fill_parses() {
        // Every palette entry must be a valid color.
        for builtin in [
            BuiltinIcon::User,
            BuiltinIcon::React,
            BuiltinIcon::Vercel,
            BuiltinIcon::Postgresql,
            BuiltinIcon::Storage,
            BuiltinIcon::Firewall,
            BuiltinIcon::Dns,
            BuiltinIcon::Github,
            BuiltinIcon::GithubActions,
            BuiltinIcon::Opensearch,
        ] {
            let hex = builtin.fill().to_hex();
            assert!(hex.starts_with('#'), "{builtin} fill should be hex");
        }
    }

    #[test]
    fn test_node_accessors() {
        let node = Node::new("users", "Users", BuiltinIcon::User);
        assert_eq!(node.id(), "users");
        assert_eq!(node.label(), "Users");
        assert_eq!(node.icon(), &Icon::Builtin(BuiltinIcon::User));
    }

    #[test]
    fn test_edge_label() {
        let edge = Edge::new(Id::new("a"), Id::new("b"), Some("HTTPS".to_string()));
        assert_eq!(edge.label(), Some("HTTPS"));

        let unlabeled = Edge::new(Id::new("a"), Id::new("b"), None);
        assert_eq!(unlabeled.label(), None);
    }
}
