//- Runtime settings, layered lowest to highest:
//-  - built-in defaults
//-  - `portfolio.toml` in the platform config directory
//-  - `portfolio.toml` in the working directory
//-  - `PORTFOLIO_*` environment variables, `__` between levels
//-    (e.g. `PORTFOLIO_SERVER__PORT=9000`)

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::SiteResult;

const CONFIG_FILE: &str = "portfolio.toml";

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ServerSettings {
    pub host: String,
    pub port: u16,
    /// Worker thread count; actix-web picks one per core when unset
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SiteSettings {
    /// Directory holding the CV and the profile photo
    pub assets_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Settings {
    pub server: ServerSettings,
    pub site: SiteSettings,
}

fn defaults() -> SiteResult<Config> {
    let mut config = Config::default();
    config.set_default("server.host", "127.0.0.1")?;
    config.set_default("server.port", 8080i64)?;
    config.set_default("site.assets_dir", "assets")?;
    Ok(config)
}

/// Platform config file location, e.g. `~/.config/portfolio/portfolio.toml`
pub(crate) fn user_config_file() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "amodu", "portfolio").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Merges `files` in order over the defaults, then `env` over everything.
/// Files that do not exist are skipped.
fn layered(files: &[PathBuf], env: Environment) -> SiteResult<Settings> {
    let mut config = defaults()?;
    for path in files {
        log::debug!("looking for settings in {}", path.display());
        config.merge(File::from(path.as_path()).required(false))?;
    }
    config.merge(env)?;
    Ok(config.try_into()?)
}

impl Settings {
    pub fn load() -> SiteResult<Settings> {
        let mut files: Vec<PathBuf> = user_config_file().into_iter().collect();
        files.push(PathBuf::from(CONFIG_FILE));
        layered(&files, Environment::with_prefix("PORTFOLIO").separator("__"))
    }

    /// Loads from one explicit file on top of the defaults, without the
    /// environment
    pub fn from_file(path: &std::path::Path) -> SiteResult<Settings> {
        let mut config = defaults()?;
        config.merge(File::from(path).required(true))?;
        Ok(config.try_into()?)
    }
}
