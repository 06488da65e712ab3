use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitgarden")]
#[command(about = "Terminal contribution heatmap for one author across local git repositories")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "Path to the repository list (default: ~/.gitgarden)")]
    pub registry: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find git repositories under a folder and start tracking them
    Add {
        #[arg(help = "Folder to scan recursively for repositories")]
        folder: PathBuf,
    },
    /// Print the tracked repositories
    List,
    /// Render the last six months of commits for one author
    Stats {
        #[arg(long, help = "Author email to count commits for (exact match)")]
        email: String,

        #[arg(long, help = "Output the day-count table as JSON")]
        json: bool,

        #[arg(long, help = "Disable ANSI colors")]
        no_color: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Add { folder } => crate::scan::exec(&self.common, &folder),
            Commands::List => crate::registry::exec_list(&self.common),
            Commands::Stats { email, json, no_color } => {
                crate::heat::exec(&self.common, &email, json, !no_color)
            }
        }
    }
}
