//! Core diagram structure types.
//!
//! This module contains the container half of the semantic model:
//! - [`Diagram`] - The root type owning nodes, the cluster tree, and edges
//! - [`Cluster`] - A named presentational grouping of nodes and sub-clusters
//! - [`Member`] - One entry in a cluster or at the diagram root
//! - [`Direction`] - Overall layout direction handed to the layout backend

use std::{collections::HashSet, fmt};

use indexmap::IndexMap;
use log::debug;

use crate::{
    identifier::Id,
    semantic::{SemanticError, element::Edge, element::Node},
};

/// Overall flow direction of a rendered diagram.
///
/// Mapped onto the layout backend's `rankdir` attribute; it biases layout,
/// it never affects the graph's meaning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Top-to-bottom layout (default)
    #[default]
    TopToBottom,
    /// Left-to-right layout
    LeftToRight,
}

impl Direction {
    /// The Graphviz `rankdir` value for this direction.
    pub fn rankdir(&self) -> &'static str {
        match self {
            Self::TopToBottom => "TB",
            Self::LeftToRight => "LR",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rankdir())
    }
}

/// One entry in a cluster (or at the diagram root): a node reference or a
/// nested cluster.
#[derive(Debug, Clone)]
pub enum Member {
    /// A reference to a node declared on the diagram.
    Node(Id),
    /// A nested cluster.
    Cluster(Cluster),
}

/// A named grouping container owning node references and nested clusters.
///
/// Clusters are purely presentational: they affect layout grouping, never
/// the meaning of the graph. Membership is explicit: children are added
/// with [`Cluster::add_node`] and [`Cluster::add_cluster`] before the
/// cluster is handed to [`Diagram::add_cluster`], which validates the whole
/// subtree.
///
/// # Examples
///
/// ```
/// use maquette_core::semantic::{BuiltinIcon, Cluster, Diagram, Direction, Node};
///
/// let mut diagram = Diagram::new("demo", "Demo", Direction::TopToBottom);
/// let users = diagram.add_node(Node::new("users", "Users", BuiltinIcon::User)).unwrap();
///
/// let mut group = Cluster::new("edge", "Users & CDN");
/// group.add_node(users);
/// diagram.add_cluster(group).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Cluster {
    id: Id,
    label: String,
    members: Vec<Member>,
}

impl Cluster {
    /// Create a new, empty cluster.
    ///
    /// # Arguments
    ///
    /// * `name` - Identifier, unique among all clusters of a diagram
    /// * `label` - Display label drawn on the cluster box
    pub fn new(name: &str, label: impl Into<String>) -> Self {
        Self {
            id: Id::new(name),
            label: label.into(),
            members: Vec::new(),
        }
    }

    /// Append a node reference to this cluster.
    pub fn add_node(&mut self, node: Id) {
        self.members.push(Member::Node(node));
    }

    /// Append a nested cluster.
    pub fn add_cluster(&mut self, cluster: Cluster) {
        self.members.push(Member::Cluster(cluster));
    }

    /// Get the cluster identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// Borrow the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow the members in declaration order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

/// A complete architecture diagram: node registry, cluster tree, edge list.
///
/// The identifier doubles as the output file stem. Nodes are kept in
/// declaration order (order affects only visual placement, never meaning).
/// All structural invariants are enforced as the diagram is built:
///
/// - node and cluster identifiers are unique within the diagram;
/// - every cluster member references a declared node, at most once overall;
/// - every edge references two already-declared nodes.
///
/// # Examples
///
/// ```
/// use maquette_core::semantic::{BuiltinIcon, Diagram, Direction, Node};
///
/// let mut diagram = Diagram::new("data_flow", "Data Flow", Direction::LeftToRight);
/// let admin = diagram.add_node(Node::new("admin", "Admin User", BuiltinIcon::User)).unwrap();
/// let editor = diagram.add_node(Node::new("editor", "Post Editor", BuiltinIcon::React)).unwrap();
/// diagram.connect(admin, editor, Some("1. Create Post")).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct Diagram {
    id: Id,
    title: String,
    direction: Direction,
    nodes: IndexMap<Id, Node>,
    members: Vec<Member>,
    edges: Vec<Edge>,
    placed: HashSet<Id>,
    cluster_ids: HashSet<Id>,
}

impl Diagram {
    /// Create a new, empty diagram.
    ///
    /// # Arguments
    ///
    /// * `name` - Identifier; also the output file stem
    /// * `title` - Display title drawn above the rendered diagram
    /// * `direction` - Overall layout direction
    pub fn new(name: &str, title: impl Into<String>, direction: Direction) -> Self {
        Self {
            id: Id::new(name),
            title: title.into(),
            direction,
            nodes: IndexMap::new(),
            members: Vec::new(),
            edges: Vec::new(),
            placed: HashSet::new(),
            cluster_ids: HashSet::new(),
        }
    }

    /// Declare a node on this diagram, returning its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SemanticError::DuplicateNode`] if a node with the same
    /// identifier was already declared.
    pub fn add_node(&mut self, node: Node) -> Result<Id, SemanticError> {
        let id = node.id();
        if self.nodes.contains_key(&id) {
            return Err(SemanticError::DuplicateNode(id));
        }
        self.nodes.insert(id, node);
        Ok(id)
    }

    /// Place a fully built cluster at the diagram root.
    ///
    /// The whole subtree is validated: every referenced node must be
    /// declared and not yet placed elsewhere, and cluster identifiers must
    /// be unique across the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`SemanticError::UnknownMember`], [`SemanticError::AlreadyPlaced`],
    /// or [`SemanticError::DuplicateCluster`] on the first violation found.
    pub fn add_cluster(&mut self, cluster: Cluster) -> Result<(), SemanticError> {
        self.claim_members(&cluster)?;
        debug!(
            cluster = cluster.id().to_string(),
            members = cluster.members().len();
            "Cluster placed"
        );
        self.members.push(Member::Cluster(cluster));
        Ok(())
    }

    /// Declare a directed edge between two already-declared nodes.
    ///
    /// # Errors
    ///
    /// Returns [`SemanticError::UnknownNode`] if either endpoint was never
    /// declared on this diagram.
    pub fn connect(
        &mut self,
        source: Id,
        target: Id,
        label: Option<&str>,
    ) -> Result<(), SemanticError> {
        for endpoint in [source, target] {
            if !self.nodes.contains_key(&endpoint) {
                return Err(SemanticError::UnknownNode(endpoint));
            }
        }
        self.edges
            .push(Edge::new(source, target, label.map(str::to_string)));
        Ok(())
    }

    /// Get the diagram identifier (also the output file stem).
    pub fn id(&self) -> Id {
        self.id
    }

    /// Borrow the display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the layout direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Look up a declared node by identifier.
    pub fn node(&self, id: Id) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Iterate over all declared nodes in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Borrow the root members (clusters placed on this diagram).
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Borrow the edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Iterate over declared nodes that no cluster has claimed.
    ///
    /// These render at the diagram root.
    pub fn unplaced_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .values()
            .filter(|node| !self.placed.contains(&node.id()))
    }

    fn claim_members(&mut self, cluster: &Cluster) -> Result<(), SemanticError> {
        if !self.cluster_ids.insert(cluster.id()) {
            return Err(SemanticError::DuplicateCluster(cluster.id()));
        }
        for member in cluster.members() {
            match member {
                Member::Node(id) => {
                    if !self.nodes.contains_key(id) {
                        return Err(SemanticError::UnknownMember {
                            cluster: cluster.id(),
                            node: *id,
                        });
                    }
                    if !self.placed.insert(*id) {
                        return Err(SemanticError::AlreadyPlaced(*id));
                    }
                }
                Member::Cluster(nested) => self.claim_members(nested)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::element::BuiltinIcon;

    fn node(name: &str) -> Node {
        Node::new(name, name.to_uppercase(), BuiltinIcon::User)
    }

    #[test]
    fn test_direction_rankdir() {
        assert_eq!(Direction::TopToBottom.rankdir(), "TB");
        assert_eq!(Direction::LeftToRight.rankdir(), "LR");
        assert_eq!(Direction::default(), Direction::TopToBottom);
    }

    #[test]
    fn test_add_node_preserves_declaration_order() {
        let mut diagram = Diagram::new("d_order", "Order", Direction::TopToBottom);
        for name in ["zeta", "alpha", "mid"] {
            diagram.add_node(node(name)).unwrap();
        }

        let names: Vec<String> = diagram.nodes().map(|n| n.id().to_string()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let mut diagram = Diagram::new("d_dup", "Dup", Direction::TopToBottom);
        let first = diagram.add_node(node("api")).unwrap();
        let err = diagram.add_node(node("api")).unwrap_err();
        assert_eq!(err, SemanticError::DuplicateNode(first));
    }

    #[test]
    fn test_connect_requires_declared_endpoints() {
        let mut diagram = Diagram::new("d_edges", "Edges", Direction::TopToBottom);
        let a = diagram.add_node(node("a")).unwrap();
        let b = diagram.add_node(node("b")).unwrap();
        let ghost = Id::new("ghost");

        diagram.connect(a, b, Some("ok")).unwrap();
        assert_eq!(
            diagram.connect(a, ghost, None).unwrap_err(),
            SemanticError::UnknownNode(ghost)
        );
        assert_eq!(
            diagram.connect(ghost, b, None).unwrap_err(),
            SemanticError::UnknownNode(ghost)
        );
        assert_eq!(diagram.edges().len(), 1);
    }

    #[test]
    fn test_cluster_member_must_be_declared() {
        let mut diagram = Diagram::new("d_members", "Members", Direction::TopToBottom);
        let mut cluster = Cluster::new("group", "Group");
        cluster.add_node(Id::new("undeclared"));

        let err = diagram.add_cluster(cluster).unwrap_err();
        assert_eq!(
            err,
            SemanticError::UnknownMember {
                cluster: Id::new("group"),
                node: Id::new("undeclared"),
            }
        );
    }

    #[test]
    fn test_node_placed_at_most_once() {
        let mut diagram = Diagram::new("d_placed", "Placed", Direction::TopToBottom);
        let shared = diagram.add_node(node("shared")).unwrap();

        let mut first = Cluster::new("first", "First");
        first.add_node(shared);
        diagram.add_cluster(first).unwrap();

        let mut second = Cluster::new("second", "Second");
        second.add_node(shared);
        assert_eq!(
            diagram.add_cluster(second).unwrap_err(),
            SemanticError::AlreadyPlaced(shared)
        );
    }

    #[test]
    fn test_duplicate_cluster_rejected() {
        let mut diagram = Diagram::new("d_clusters", "Clusters", Direction::TopToBottom);
        diagram.add_cluster(Cluster::new("twice", "Twice")).unwrap();
        assert_eq!(
            diagram
                .add_cluster(Cluster::new("twice", "Again"))
                .unwrap_err(),
            SemanticError::DuplicateCluster(Id::new("twice"))
        );
    }

    #[test]
    fn test_nested_cluster_members_are_claimed() {
        let mut diagram = Diagram::new("d_nested", "Nested", Direction::TopToBottom);
        let inner_node = diagram.add_node(node("inner_node")).unwrap();

        let mut inner = Cluster::new("inner", "Inner");
        inner.add_node(inner_node);
        let mut outer = Cluster::new("outer", "Outer");
        outer.add_cluster(inner);
        diagram.add_cluster(outer).unwrap();

        assert_eq!(diagram.unplaced_nodes().count(), 0);
    }

    #[test]
    fn test_unplaced_nodes_render_at_root() {
        let mut diagram = Diagram::new("d_unplaced", "Unplaced", Direction::TopToBottom);
        let placed = diagram.add_node(node("placed")).unwrap();
        diagram.add_node(node("floating")).unwrap();

        let mut cluster = Cluster::new("box", "Box");
        cluster.add_node(placed);
        diagram.add_cluster(cluster).unwrap();

        let unplaced: Vec<String> = diagram
            .unplaced_nodes()
            .map(|n| n.id().to_string())
            .collect();
        assert_eq!(unplaced, ["floating"]);
    }
}
