//! DOT emission for the semantic diagram model.
//!
//! Walks a validated [`Diagram`] into a `dot_structures::Graph`: clusters
//! become nested `cluster_*` subgraphs, builtin icons become shape and fill
//! attributes, custom icons become `image` attributes, and edges keep their
//! labels. The resulting AST is printed to DOT text for the layout backend.

use dot_generator::*;
use dot_structures::*;

use graphviz_rust::printer::{DotPrinter, PrinterContext};
use log::{debug, trace};

use maquette_core::semantic::{self, Diagram, Member};

use crate::{config::StyleConfig, error::MaquetteError};

/// Build the DOT AST for a diagram.
///
/// # Errors
///
/// Returns [`MaquetteError::Config`] if the style carries an invalid
/// background color string.
pub fn to_graph(diagram: &Diagram, style: &StyleConfig) -> Result<Graph, MaquetteError> {
    let mut stmts = vec![
        Stmt::Attribute(Attribute(id!("rankdir"), id!(diagram.direction().rankdir()))),
        Stmt::Attribute(Attribute(id!("label"), quoted(diagram.title()))),
        Stmt::Attribute(attr!("labelloc", "t")),
        Stmt::Attribute(attr!("fontsize", 20)),
    ];

    let background = style.background_color().map_err(MaquetteError::Config)?;
    if let Some(background) = background {
        stmts.push(Stmt::Attribute(Attribute(
            id!("bgcolor"),
            quoted(&background.to_hex()),
        )));
    }
    if let Some(font) = style.font_name() {
        stmts.push(Stmt::Attribute(Attribute(id!("fontname"), quoted(font))));
        stmts.push(Stmt::GAttribute(GraphAttributes::Node(vec![Attribute(
            id!("fontname"),
            quoted(font),
        )])));
        stmts.push(Stmt::GAttribute(GraphAttributes::Edge(vec![Attribute(
            id!("fontname"),
            quoted(font),
        )])));
    }

    for member in diagram.members() {
        stmts.push(member_stmt(diagram, member));
    }
    for node in diagram.unplaced_nodes() {
        stmts.push(node_stmt(node));
    }
    for edge in diagram.edges() {
        stmts.push(edge_stmt(edge));
    }

    debug!(
        diagram = diagram.id().to_string(),
        nodes = diagram.nodes().count(),
        edges = diagram.edges().len();
        "DOT graph assembled"
    );

    Ok(Graph::DiGraph {
        id: id!(diagram.id()),
        strict: false,
        stmts,
    })
}

/// Build a diagram's DOT AST and print it to DOT text.
///
/// # Errors
///
/// Returns [`MaquetteError::Config`] if the style carries an invalid
/// background color string.
pub fn to_dot_string(diagram: &Diagram, style: &StyleConfig) -> Result<String, MaquetteError> {
    let graph = to_graph(diagram, style)?;
    let dot = graph.print(&mut PrinterContext::default());
    trace!(dot = dot.as_str(); "DOT emitted");
    Ok(dot)
}

fn member_stmt(diagram: &Diagram, member: &Member) -> Stmt {
    match member {
        Member::Node(id) => {
            let node = diagram
                .node(*id)
                .expect("cluster members are validated at placement");
            node_stmt(node)
        }
        Member::Cluster(cluster) => cluster_stmt(diagram, cluster),
    }
}

fn cluster_stmt(diagram: &Diagram, cluster: &semantic::Cluster) -> Stmt {
    let mut stmts = vec![
        Stmt::Attribute(Attribute(id!("label"), quoted(cluster.label()))),
        Stmt::Attribute(attr!("style", "rounded")),
        Stmt::Attribute(attr!("labeljust", "l")),
    ];
    for member in cluster.members() {
        stmts.push(member_stmt(diagram, member));
    }
    Stmt::Subgraph(Subgraph {
        id: id!(format!("cluster_{}", cluster.id())),
        stmts,
    })
}

fn node_stmt(node: &semantic::Node) -> Stmt {
    let mut attributes = vec![Attribute(id!("label"), quoted(node.label()))];
    attributes.extend(icon_attributes(node.icon()));
    Stmt::Node(Node {
        id: node_ref(node.id()),
        attributes,
    })
}

fn edge_stmt(edge: &semantic::Edge) -> Stmt {
    let mut attributes = Vec::new();
    if let Some(label) = edge.label() {
        attributes.push(Attribute(id!("label"), quoted(label)));
    }
    Stmt::Edge(Edge {
        ty: EdgeTy::Pair(
            Vertex::N(node_ref(edge.source())),
            Vertex::N(node_ref(edge.target())),
        ),
        attributes,
    })
}

fn icon_attributes(icon: &semantic::Icon) -> Vec<Attribute> {
    match icon {
        semantic::Icon::Builtin(builtin) => {
            let fill = builtin.fill();
            let fontcolor = if fill.is_dark() { "white" } else { "black" };
            vec![
                Attribute(id!("shape"), id!(builtin_shape(*builtin))),
                attr!("style", "filled"),
                Attribute(id!("fillcolor"), quoted(&fill.to_hex())),
                attr!("fontcolor", fontcolor),
            ]
        }
        semantic::Icon::Custom(path) => vec![
            Attribute(id!("image"), quoted(&path.display().to_string())),
            attr!("shape", "none"),
            attr!("labelloc", "b"),
            attr!("height", "1.8"),
            attr!("imagescale", "true"),
        ],
    }
}

fn builtin_shape(builtin: semantic::BuiltinIcon) -> &'static str {
    use semantic::BuiltinIcon::*;
    match builtin {
        User => "ellipse",
        React | Vercel | Github | GithubActions => "box",
        Postgresql | Opensearch => "cylinder",
        Storage => "folder",
        Firewall => "diamond",
        Dns => "hexagon",
    }
}

fn node_ref(id: maquette_core::identifier::Id) -> NodeId {
    NodeId(quoted(&id.to_string()), None)
}

/// Quote a string for use as a DOT attribute value or node identifier.
///
/// Escapes backslashes and double quotes, and turns literal newlines into
/// the DOT `\n` line-break escape.
fn quoted(value: &str) -> Id {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    Id::Escaped(format!("\"{escaped}\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn inner(id: &Id) -> String {
        match id {
            Id::Escaped(s) => s[1..s.len() - 1].to_string(),
            other => panic!("expected escaped id, got {other:?}"),
        }
    }

    #[test]
    fn test_quoted_plain_text() {
        assert_eq!(inner(&quoted("Users & CDN")), "Users & CDN");
    }

    #[test]
    fn test_quoted_escapes_quotes_and_backslashes() {
        assert_eq!(inner(&quoted(r#"say "hi""#)), r#"say \"hi\""#);
        assert_eq!(inner(&quoted(r"a\b")), r"a\\b");
    }

    #[test]
    fn test_quoted_escapes_newlines() {
        // "PostgreSQL\n(Free Tier)" style multi-line labels
        assert_eq!(inner(&quoted("PostgreSQL\n(Free Tier)")), r"PostgreSQL\n(Free Tier)");
    }

    proptest! {
        // Whatever the label, the quoted form must stay inside its quotes:
        // no unescaped quote and no raw newline may survive.
        #[test]
        fn test_quoted_never_breaks_out(label in "\\PC*") {
            let quoted_id = quoted(&label);
            let Id::Escaped(s) = quoted_id else {
                panic!("quoted always produces an escaped id");
            };
            prop_assert!(s.starts_with('"') && s.ends_with('"'));

            let body = &s[1..s.len() - 1];
            prop_assert!(!body.contains('\n'));

            let mut backslashes = 0usize;
            for ch in body.chars() {
                match ch {
                    '\\' => backslashes += 1,
                    '"' => {
                        prop_assert!(backslashes % 2 == 1, "unescaped quote in {s}");
                        backslashes = 0;
                    }
                    _ => backslashes = 0,
                }
            }
        }
    }
}
