use crate::cli::ConfigAction;
use crate::config::Config;
use anyhow::{bail, Context, Result};

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show => {
            if let Some(path) = Config::default_path() {
                println!("# {}", path.display());
            }
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Init { force } => {
            let path = Config::default_path().context("Failed to determine project directories")?;
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            let written = Config::default().save()?;
            println!("Wrote default configuration to {}", written.display());
        }
    }
    Ok(())
}
