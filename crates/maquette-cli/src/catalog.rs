//! The fixed diagram catalog for the Nowhere Land blog platform.
//!
//! Three hand-authored diagrams covering three views of the same system:
//! the full infrastructure topology, the content-creation-to-delivery data
//! flow, and the deployment environments with their CI/CD trigger graph.
//! Each procedure declares nodes and clusters in presentation order, then
//! the edges between them; the model rejects any reference to a node that
//! was not declared first.

use maquette::semantic::{BuiltinIcon, Cluster, Diagram, Direction, Icon, Node, SemanticError};

/// Identifiers of every catalog diagram, in render order.
pub const DIAGRAM_IDS: [&str; 3] = [
    "nowhereland_infrastructure",
    "data_flow",
    "deployment_environments",
];

// Custom icons for services the builtin set does not cover.
fn supabase(name: &str, label: &str) -> Node {
    Node::new(name, label, Icon::custom("assets/supabase.png"))
}

fn claude(name: &str, label: &str) -> Node {
    Node::new(name, label, Icon::custom("assets/claude.png"))
}

/// Build every catalog diagram, in render order.
pub fn all() -> Result<Vec<Diagram>, SemanticError> {
    Ok(vec![
        infrastructure()?,
        data_flow()?,
        deployment_environments()?,
    ])
}

/// The complete infrastructure topology.
pub fn infrastructure() -> Result<Diagram, SemanticError> {
    let mut diagram = Diagram::new(
        "nowhereland_infrastructure",
        "Nowhere Land Blog - Infrastructure Architecture",
        Direction::TopToBottom,
    );

    // Users and CDN layer
    let users = diagram.add_node(Node::new("users", "Users", BuiltinIcon::User))?;
    let cdn = diagram.add_node(supabase("cdn", "Supabase CDN"))?;
    let mut users_cdn = Cluster::new("users_cdn", "Users & CDN");
    users_cdn.add_node(users);
    users_cdn.add_node(cdn);
    diagram.add_cluster(users_cdn)?;

    // Frontend layer
    let nextjs = diagram.add_node(Node::new("nextjs", "Next.js App", BuiltinIcon::React))?;
    let vercel = diagram.add_node(Node::new("vercel", "Vercel Platform", BuiltinIcon::Vercel))?;
    let mut frontend = Cluster::new("frontend", "Frontend (Vercel)");
    frontend.add_node(nextjs);
    frontend.add_node(vercel);
    diagram.add_cluster(frontend)?;

    // API gateway layer
    let supabase_api = diagram.add_node(supabase("supabase_api", "Supabase API Gateway"))?;
    let auth = diagram.add_node(Node::new("auth", "Authentication", BuiltinIcon::Firewall))?;
    let mut api_gateway = Cluster::new("api_gateway", "API Gateway");
    api_gateway.add_node(supabase_api);
    api_gateway.add_node(auth);
    diagram.add_cluster(api_gateway)?;

    // Core services layer, with nested database and edge-function groups
    let postgres = diagram.add_node(Node::new("postgres", "PostgreSQL", BuiltinIcon::Postgresql))?;
    let storage = diagram.add_node(Node::new("storage", "File Storage", BuiltinIcon::Storage))?;
    let mut database = Cluster::new("database", "Database");
    database.add_node(postgres);
    database.add_node(storage);

    let media_fn = diagram.add_node(supabase("media_fn", "Media Transform"))?;
    let ai_fn = diagram.add_node(supabase("ai_fn", "AI Orchestrator"))?;
    let search_fn = diagram.add_node(supabase("search_fn", "Search Service"))?;
    let webhook_fn = diagram.add_node(supabase("webhook_fn", "Webhooks"))?;
    let mut edge_functions = Cluster::new("edge_functions", "Edge Functions (Deno)");
    edge_functions.add_node(media_fn);
    edge_functions.add_node(ai_fn);
    edge_functions.add_node(search_fn);
    edge_functions.add_node(webhook_fn);

    let mut core_services = Cluster::new("core_services", "Core Services");
    core_services.add_cluster(database);
    core_services.add_cluster(edge_functions);
    diagram.add_cluster(core_services)?;

    // External services layer
    let claude_api = diagram.add_node(claude("claude_api", "Claude API (Haiku 3)"))?;
    let mut ai_services = Cluster::new("ai_services", "AI Services");
    ai_services.add_node(claude_api);

    let opensearch = diagram.add_node(Node::new(
        "opensearch",
        "AWS OpenSearch",
        BuiltinIcon::Opensearch,
    ))?;
    let pg_search = diagram.add_node(Node::new(
        "pg_search",
        "PostgreSQL FTS",
        BuiltinIcon::Postgresql,
    ))?;
    let mut search = Cluster::new("search", "Search");
    search.add_node(opensearch);
    search.add_node(pg_search);

    let mut external_services = Cluster::new("external_services", "External Services");
    external_services.add_cluster(ai_services);
    external_services.add_cluster(search);
    diagram.add_cluster(external_services)?;

    // Analytics and monitoring
    let vercel_analytics = diagram.add_node(Node::new(
        "vercel_analytics",
        "Vercel Analytics",
        BuiltinIcon::Vercel,
    ))?;
    let mut analytics = Cluster::new("analytics", "Analytics & Monitoring");
    analytics.add_node(vercel_analytics);
    diagram.add_cluster(analytics)?;

    // Data flow connections
    diagram.connect(users, cdn, Some("HTTPS"))?;
    diagram.connect(cdn, nextjs, Some("Static Assets"))?;
    diagram.connect(nextjs, supabase_api, Some("API Calls"))?;

    diagram.connect(supabase_api, auth, Some("Auth"))?;
    diagram.connect(supabase_api, postgres, Some("Data"))?;
    diagram.connect(supabase_api, storage, Some("Files"))?;

    // Edge function connections
    diagram.connect(supabase_api, media_fn, Some("Process"))?;
    diagram.connect(supabase_api, ai_fn, Some("Generate"))?;
    diagram.connect(supabase_api, search_fn, Some("Search"))?;
    diagram.connect(supabase_api, webhook_fn, Some("Events"))?;

    // AI service connections
    diagram.connect(ai_fn, claude_api, Some("Generate Tags/Abstract"))?;

    // Search connections
    diagram.connect(search_fn, opensearch, Some("Primary"))?;
    diagram.connect(search_fn, pg_search, Some("Fallback"))?;

    // Analytics connections
    diagram.connect(nextjs, vercel_analytics, Some("Metrics"))?;

    Ok(diagram)
}

/// The blog-post creation and serving data flow.
///
/// Edge labels carry an ordered step sequence ("1." through "11."); the
/// numbering documents the logical order and has no runtime meaning.
pub fn data_flow() -> Result<Diagram, SemanticError> {
    let mut diagram = Diagram::new(
        "data_flow",
        "Data Flow - Blog Post Creation & Serving",
        Direction::LeftToRight,
    );

    // Content creation
    let admin = diagram.add_node(Node::new("admin", "Admin User", BuiltinIcon::User))?;
    let write_ui = diagram.add_node(Node::new("write_ui", "Post Editor", BuiltinIcon::React))?;
    let mut content_creation = Cluster::new("content_creation", "Content Creation");
    content_creation.add_node(admin);
    content_creation.add_node(write_ui);
    diagram.add_cluster(content_creation)?;

    // Processing pipeline
    let content_api = diagram.add_node(Node::new("content_api", "Content API", BuiltinIcon::Dns))?;
    let ai_processor = diagram.add_node(supabase("ai_processor", "AI Processing"))?;
    let image_processor = diagram.add_node(supabase("image_processor", "Image Processing"))?;
    let mut processing = Cluster::new("processing_pipeline", "Processing Pipeline");
    processing.add_node(content_api);
    processing.add_node(ai_processor);
    processing.add_node(image_processor);
    diagram.add_cluster(processing)?;

    // Storage layer
    let db = diagram.add_node(Node::new("db", "Database", BuiltinIcon::Postgresql))?;
    let files = diagram.add_node(Node::new("files", "File Storage", BuiltinIcon::Storage))?;
    let search_index = diagram.add_node(Node::new(
        "search_index",
        "Search Index",
        BuiltinIcon::Opensearch,
    ))?;
    let mut storage_indexing = Cluster::new("storage_indexing", "Storage & Indexing");
    storage_indexing.add_node(db);
    storage_indexing.add_node(files);
    storage_indexing.add_node(search_index);
    diagram.add_cluster(storage_indexing)?;

    // Content delivery
    let api = diagram.add_node(Node::new("api", "Public API", BuiltinIcon::Dns))?;
    let cdn_cache = diagram.add_node(supabase("cdn_cache", "CDN Cache"))?;
    let reader = diagram.add_node(Node::new("reader", "Blog Readers", BuiltinIcon::User))?;
    let mut delivery = Cluster::new("content_delivery", "Content Delivery");
    delivery.add_node(api);
    delivery.add_node(cdn_cache);
    delivery.add_node(reader);
    diagram.add_cluster(delivery)?;

    // Data flows
    diagram.connect(admin, write_ui, Some("1. Create Post"))?;
    diagram.connect(write_ui, content_api, Some("2. Submit"))?;
    diagram.connect(content_api, ai_processor, Some("3. Process AI"))?;
    diagram.connect(content_api, image_processor, Some("4. Process Images"))?;

    diagram.connect(ai_processor, db, Some("5. Store Content"))?;
    diagram.connect(image_processor, files, Some("6. Store Files"))?;
    diagram.connect(content_api, search_index, Some("7. Index"))?;

    diagram.connect(reader, api, Some("8. Request"))?;
    diagram.connect(api, db, Some("9. Fetch"))?;
    diagram.connect(api, cdn_cache, Some("10. Cache"))?;
    diagram.connect(cdn_cache, reader, Some("11. Serve"))?;

    Ok(diagram)
}

/// The deployment environments and CI/CD trigger graph.
pub fn deployment_environments() -> Result<Diagram, SemanticError> {
    let mut diagram = Diagram::new(
        "deployment_environments",
        "Deployment Environments",
        Direction::TopToBottom,
    );

    // Development environment
    let dev_frontend =
        diagram.add_node(Node::new("dev_frontend", "localhost:3000", BuiltinIcon::React))?;
    let dev_supabase = diagram.add_node(supabase("dev_supabase", "Supabase Free"))?;
    let dev_pg = diagram.add_node(Node::new(
        "dev_pg",
        "PostgreSQL\n(Free Tier)",
        BuiltinIcon::Postgresql,
    ))?;
    let mut development = Cluster::new("development", "Development Environment");
    development.add_node(dev_frontend);
    development.add_node(dev_supabase);
    development.add_node(dev_pg);
    diagram.add_cluster(development)?;

    // Staging environment
    let staging_vercel = diagram.add_node(Node::new(
        "staging_vercel",
        "staging.nowhereland.com",
        BuiltinIcon::Dns,
    ))?;
    let staging_supabase = diagram.add_node(supabase("staging_supabase", "Supabase Pro"))?;
    let staging_opensearch = diagram.add_node(Node::new(
        "staging_opensearch",
        "OpenSearch t3.small",
        BuiltinIcon::Opensearch,
    ))?;
    let mut staging = Cluster::new("staging", "Staging Environment");
    staging.add_node(staging_vercel);
    staging.add_node(staging_supabase);
    staging.add_node(staging_opensearch);
    diagram.add_cluster(staging)?;

    // Production environment
    let prod_vercel = diagram.add_node(Node::new(
        "prod_vercel",
        "nowhereland.com",
        BuiltinIcon::Dns,
    ))?;
    let prod_supabase = diagram.add_node(supabase("prod_supabase", "Supabase Pro"))?;
    let prod_opensearch = diagram.add_node(Node::new(
        "prod_opensearch",
        "OpenSearch t3.small",
        BuiltinIcon::Opensearch,
    ))?;
    let prod_monitoring = diagram.add_node(Node::new(
        "prod_monitoring",
        "Full Monitoring",
        BuiltinIcon::Vercel,
    ))?;
    let mut production = Cluster::new("production", "Production Environment");
    production.add_node(prod_vercel);
    production.add_node(prod_supabase);
    production.add_node(prod_opensearch);
    production.add_node(prod_monitoring);
    diagram.add_cluster(production)?;

    // CI/CD pipeline
    let github = diagram.add_node(Node::new("github", "GitHub", BuiltinIcon::Github))?;
    let actions = diagram.add_node(Node::new(
        "actions",
        "GitHub Actions",
        BuiltinIcon::GithubActions,
    ))?;
    let mut cicd = Cluster::new("cicd", "CI/CD Pipeline");
    cicd.add_node(github);
    cicd.add_node(actions);
    diagram.add_cluster(cicd)?;

    // Deployment flows
    diagram.connect(github, actions, Some("Push"))?;
    diagram.connect(actions, staging_vercel, Some("Auto Deploy"))?;
    diagram.connect(actions, prod_vercel, Some("Manual Deploy"))?;

    Ok(diagram)
}
