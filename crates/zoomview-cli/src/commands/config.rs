use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use super::load_config;

#[derive(Args)]
pub struct ConfigArgs {
    /// Validate an existing config and print it with defaults filled in
    #[arg(long)]
    pub from: Option<PathBuf>,

    /// Write the config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = load_config(args.from.as_deref())?;
    let text = config.to_toml_string()?;

    match args.output {
        Some(ref path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Config written to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
