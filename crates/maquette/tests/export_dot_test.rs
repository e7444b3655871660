//! Integration tests for DOT export.
//!
//! These verify the declarative structure survives into the emitted DOT:
//! nested clusters, icon attributes, edge labels, and layout direction.

use maquette::config::StyleConfig;
use maquette::export::dot::to_dot_string;
use maquette::semantic::{BuiltinIcon, Cluster, Diagram, Direction, Icon, Node};

fn sample_diagram() -> Diagram {
    let mut diagram = Diagram::new(
        "dot_export_sample",
        "Sample Topology",
        Direction::TopToBottom,
    );

    let users = diagram
        .add_node(Node::new("users", "Users", BuiltinIcon::User))
        .unwrap();
    let cdn = diagram
        .add_node(Node::new(
            "cdn",
            "Supabase CDN",
            Icon::custom("assets/supabase.png"),
        ))
        .unwrap();
    let postgres = diagram
        .add_node(Node::new("postgres", "PostgreSQL", BuiltinIcon::Postgresql))
        .unwrap();

    let mut edge_layer = Cluster::new("edge_layer", "Users & CDN");
    edge_layer.add_node(users);
    edge_layer.add_node(cdn);
    diagram.add_cluster(edge_layer).unwrap();

    let mut services = Cluster::new("services", "Core Services");
    let mut database = Cluster::new("database", "Database");
    database.add_node(postgres);
    services.add_cluster(database);
    diagram.add_cluster(services).unwrap();

    diagram.connect(users, cdn, Some("HTTPS")).unwrap();
    diagram.connect(cdn, postgres, None).unwrap();

    diagram
}

#[test]
fn test_dot_contains_digraph_and_direction() {
    let dot = to_dot_string(&sample_diagram(), &StyleConfig::default()).unwrap();

    assert!(dot.contains("digraph"), "should emit a directed graph: {dot}");
    assert!(dot.contains("rankdir"), "should carry rankdir: {dot}");
    assert!(dot.contains("TB"), "top-to-bottom direction: {dot}");
    assert!(dot.contains("\"Sample Topology\""), "graph title: {dot}");
}

#[test]
fn test_dot_left_to_right_direction() {
    let mut diagram = Diagram::new("dot_export_lr", "Flow", Direction::LeftToRight);
    diagram
        .add_node(Node::new("only", "Only", BuiltinIcon::User))
        .unwrap();

    let dot = to_dot_string(&diagram, &StyleConfig::default()).unwrap();
    assert!(dot.contains("LR"), "left-to-right direction: {dot}");
}

#[test]
fn test_dot_nests_clusters() {
    let dot = to_dot_string(&sample_diagram(), &StyleConfig::default()).unwrap();

    assert!(dot.contains("subgraph cluster_edge_layer"), "{dot}");
    assert!(dot.contains("subgraph cluster_services"), "{dot}");
    assert!(dot.contains("subgraph cluster_database"), "{dot}");
    assert!(dot.contains("\"Users & CDN\""), "cluster label: {dot}");

    // The database cluster is nested inside the services cluster.
    let services = dot.find("cluster_services").unwrap();
    let database = dot.find("cluster_database").unwrap();
    assert!(services < database, "nested cluster declared inside parent");
}

#[test]
fn test_dot_builtin_icon_attributes() {
    let dot = to_dot_string(&sample_diagram(), &StyleConfig::default()).unwrap();

    assert!(dot.contains("cylinder"), "postgres renders as cylinder: {dot}");
    assert!(dot.contains("filled"), "builtin icons are filled: {dot}");
    assert!(dot.contains("\"#336791\""), "postgres brand fill: {dot}");
}

#[test]
fn test_dot_custom_icon_attributes() {
    let dot = to_dot_string(&sample_diagram(), &StyleConfig::default()).unwrap();

    assert!(dot.contains("assets/supabase.png"), "{dot}");
    assert!(dot.contains("image"), "{dot}");
    assert!(dot.contains("none"), "custom icons suppress the shape: {dot}");
}

#[test]
fn test_dot_edges_carry_labels() {
    let dot = to_dot_string(&sample_diagram(), &StyleConfig::default()).unwrap();

    assert!(dot.contains("->"), "directed edges: {dot}");
    assert!(dot.contains("\"HTTPS\""), "edge label survives: {dot}");
}

#[test]
fn test_dot_multiline_label_uses_dot_escape() {
    let mut diagram = Diagram::new("dot_export_multiline", "Multiline", Direction::TopToBottom);
    diagram
        .add_node(Node::new(
            "dev_pg",
            "PostgreSQL\n(Free Tier)",
            BuiltinIcon::Postgresql,
        ))
        .unwrap();

    let dot = to_dot_string(&diagram, &StyleConfig::default()).unwrap();
    assert!(dot.contains(r"PostgreSQL\n(Free Tier)"), "{dot}");
    assert!(!dot.contains("PostgreSQL\n(Free"), "no raw newline in DOT");
}

#[test]
fn test_style_background_and_font() {
    let style = StyleConfig::new(Some("#fafafa".to_string()), Some("Helvetica".to_string()));
    let dot = to_dot_string(&sample_diagram(), &style).unwrap();

    assert!(dot.contains("bgcolor"), "{dot}");
    assert!(dot.contains("\"#fafafa\""), "{dot}");
    assert!(dot.contains("\"Helvetica\""), "{dot}");
}

#[test]
fn test_invalid_background_color_is_config_error() {
    let style = StyleConfig::new(Some("not-a-color".to_string()), None);
    let err = to_dot_string(&sample_diagram(), &style).unwrap_err();
    assert!(matches!(err, maquette::MaquetteError::Config(_)));
}
