//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// ks - Manage the metadata of ksonnet apps
#[derive(Parser, Debug)]
#[command(name = "ks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if started in this directory
    #[arg(short = 'C', long, global = true, env = "KS_DIR")]
    pub dir: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Create a new app
    ///
    /// Lays out .ksonnet/, lib/, components/, environments/default/ and
    /// vendor/, and writes the schema and generated libraries into the
    /// default environment.
    ///
    /// Examples:
    ///   ks init guestbook --api-spec file:swagger.json
    ///   ks init /srv/apps/guestbook --api-spec file:/specs/k8s-1.7.json
    Init {
        /// App directory, relative to the working directory; must not exist
        name: String,

        /// Where to read the cluster schema from
        #[arg(long, value_name = "SOURCE")]
        api_spec: String,
    },

    /// Print the root of the app enclosing the working directory
    Root,

    /// Inspect components
    Component {
        #[command(subcommand)]
        action: ComponentAction,
    },
}

/// Component subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    /// List component files, sorted
    List {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
