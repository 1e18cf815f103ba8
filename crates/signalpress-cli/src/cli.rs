use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use signalpress_config::Config;
use signalpress_engine::{PipelineOptions, Strategy};

#[derive(Parser, Debug)]
#[command(name = "signalpress", version, about = "Repair and render exported article markdown", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/signalpress/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one markdown file (or `-` for stdin) to HTML
    Render(RenderArgs),

    /// Rejoin broken table rows and print the markdown
    Repair {
        /// Markdown file, or `-` for stdin
        input: PathBuf,
    },

    /// Render every .md file under a directory to <slug>.html
    Batch {
        /// Directory scanned recursively for markdown files
        dir: PathBuf,

        /// Where the HTML files go; falls back to `output_dir` from the config
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,

        #[command(flatten)]
        render: RenderFlags,
    },
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Markdown file, or `-` for stdin
    pub input: PathBuf,

    /// Write the HTML to this file instead of stdout
    #[arg(short, long, value_name = "FILE", conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Write the HTML to <DIR>/<slug>.html
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    #[command(flatten)]
    pub render: RenderFlags,
}

/// Flags that override the `[render]` section of the config.
#[derive(Args, Debug, Default)]
pub struct RenderFlags {
    /// commonmark, blocks or patterns
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Escape HTML found in the markdown
    #[arg(long)]
    pub escape: bool,

    /// Skip the table row repair pass
    #[arg(long)]
    pub no_repair: bool,
}

impl RenderFlags {
    /// Config values with the command-line flags applied on top.
    pub fn resolve(&self, config: &Config) -> PipelineOptions {
        let mut options = config.render;
        if let Some(strategy) = self.strategy {
            options.strategy = strategy;
        }
        if self.escape {
            options.escape_html = true;
        }
        if self.no_repair {
            options.repair_tables = false;
        }
        options
    }
}
