use std::path::PathBuf;

use anyhow::{bail, Context};
use colored::Colorize;

use crate::config::Settings;
use crate::io::atomic::atomic_write;

pub fn show(settings: &Settings) -> anyhow::Result<()> {
    print!("{}", settings.to_toml_string()?);
    Ok(())
}

pub fn init(path: Option<PathBuf>, force: bool) -> anyhow::Result<()> {
    let Some(path) = path else {
        bail!("no config path: pass --config FILE (home directory not found)");
    };
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let body = Settings::default().to_toml_string()?;
    atomic_write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    println!("{} wrote {}", "ok:".green().bold(), path.display());
    Ok(())
}
