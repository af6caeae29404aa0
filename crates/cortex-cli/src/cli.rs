//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Cortex - organize projects and artifacts, discover fuzzy connections.
#[derive(Debug, Parser)]
#[command(name = "cortex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Database file path
    #[arg(long, global = true, default_value = "cortex.db")]
    pub db: String,

    /// Engine configuration file (TOML: weights and threshold)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage projects
    Project {
        #[command(subcommand)]
        command: ProjectCommand,
    },

    /// Manage artifacts
    Artifact {
        #[command(subcommand)]
        command: ArtifactCommand,
    },

    /// Manage tags
    Tag {
        #[command(subcommand)]
        command: TagCommand,
    },

    /// Discover connections for an artifact
    Connect(ConnectArgs),

    /// Build and inspect the relationship graph
    Graph(GraphArgs),
}

/// Project subcommands.
#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// Create a project
    Create {
        /// Unique project title
        title: String,

        /// Project description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Presentation category (e.g. creative, business, analytical)
        #[arg(long, default_value = "")]
        category: String,
    },

    /// List all projects
    List,

    /// Show one project and its artifacts
    Show {
        /// Project id
        id: i64,
    },

    /// Delete a project and everything it owns
    Delete {
        /// Project id
        id: i64,
    },
}

/// Artifact subcommands.
#[derive(Debug, Subcommand)]
pub enum ArtifactCommand {
    /// Add an artifact to a project
    Add {
        /// Owning project id
        project: i64,

        /// Artifact title
        title: String,

        /// Artifact description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Content body
        #[arg(long, default_value = "")]
        content: String,

        /// Presentation kind (drives node color in the graph)
        #[arg(short, long, default_value = "artifact")]
        kind: String,

        /// Tag labels (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// List artifacts, optionally scoped to one project
    List {
        /// Project id to scope to
        #[arg(long)]
        project: Option<i64>,
    },

    /// Show one artifact with its tags and relationships
    Show {
        /// Artifact id
        id: i64,
    },

    /// Delete an artifact and its relationships
    Delete {
        /// Artifact id
        id: i64,
    },
}

/// Tag subcommands.
#[derive(Debug, Subcommand)]
pub enum TagCommand {
    /// Create a tag
    Create {
        /// Unique tag name
        name: String,
    },

    /// List all tags
    List,

    /// Attach a tag to an artifact (creating the tag if needed)
    Attach {
        /// Artifact id
        artifact: i64,

        /// Tag name
        name: String,
    },

    /// Detach a tag from an artifact
    Detach {
        /// Artifact id
        artifact: i64,

        /// Tag name
        name: String,
    },
}

/// Arguments for the connect command.
#[derive(Debug, Parser)]
pub struct ConnectArgs {
    /// The artifact to find connections for
    pub artifact: i64,

    /// Minimum score (0-100) for a connection; overrides the config value
    #[arg(short, long)]
    pub threshold: Option<f64>,

    /// Scan all artifacts instead of only the artifact's project
    #[arg(long)]
    pub all: bool,

    /// Persist accepted connections as synapse edges
    #[arg(long)]
    pub save: bool,
}

/// Arguments for the graph command.
#[derive(Debug, Parser)]
pub struct GraphArgs {
    /// Scope the graph to one project
    #[arg(long)]
    pub project: Option<i64>,

    /// Emit the graph snapshot as JSON
    #[arg(long)]
    pub json: bool,
}
