use anyhow::{Context, Result, bail};
use clap::Parser;
use signalpress_config::Config;

mod cli;
mod commands;
mod io;

use cli::{Cli, Command};
use commands::Destination;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Command::Render(args) => {
            let destination = match (args.output, args.out_dir) {
                (Some(file), _) => Destination::File(file),
                (None, Some(dir)) => Destination::Dir(dir),
                (None, None) => Destination::Stdout,
            };
            commands::render(&args.input, destination, args.render.resolve(&config))
        }
        Command::Repair { input } => commands::repair(&input),
        Command::Batch {
            dir,
            out_dir,
            render,
        } => {
            let Some(out_dir) = out_dir.or_else(|| config.output_dir.clone()) else {
                bail!("batch needs --out-dir or output_dir in the config file");
            };
            let report = commands::batch(&dir, &out_dir, render.resolve(&config))?;
            log::info!(
                "rendered {} article(s) into {}",
                report.written.len(),
                out_dir.display()
            );
            if !report.failed.is_empty() {
                bail!("{} article(s) failed to render", report.failed.len());
            }
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    log::debug!("config path: {}", config_path.display());

    let config = Config::load_from_path(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    match config {
        Some(config) => Ok(config),
        None if cli.config.is_some() => bail!("config file not found: {}", config_path.display()),
        None => Ok(Config::default()),
    }
}
