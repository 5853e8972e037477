//! Definition of the Clap command line.
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the MIT KEMAR measurements and write the serialized dataset.
    Export(ExportArgs),

    /// Decode, validate, and summarize a serialized dataset.
    Inspect(InspectArgs),
}

#[derive(Debug, Parser)]
pub struct RepoArgs {
    /// Root of the repository to write into.  Defaults to the workspace this binary was built from.
    #[arg(long)]
    pub repo_root: Option<PathBuf>,
}

#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Directory containing the `elev*` directories of the MIT KEMAR "full" set.
    #[arg(long)]
    pub data_dir: PathBuf,

    #[command(flatten)]
    pub repo: RepoArgs,
}

#[derive(Debug, Parser)]
pub struct InspectArgs {
    /// Dataset file to inspect.  Defaults to the exported MIT KEMAR dataset under the repository root.
    #[arg(long)]
    pub path: Option<PathBuf>,

    #[command(flatten)]
    pub repo: RepoArgs,
}

impl RepoArgs {
    pub fn repo_root(&self) -> PathBuf {
        match &self.repo_root {
            Some(r) => r.clone(),
            // we're at crates/data_processor.
            None => PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../.."),
        }
    }
}
