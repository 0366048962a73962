use crate::heroes_info::{HeroRoleMap, DEFAULT_HERO_ROLES};
use crate::match_stats::StatsResult;
use config::{Config, Environment, File};
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Runtime settings. Layered: defaults, `Settings.toml` (or the given file),
/// then `DRAFTSTATS_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub data_file: PathBuf,
    pub roles_file: Option<PathBuf>,
    pub results_dir: PathBuf,
    pub log_level: String,
    pub top_edges: usize,
}

impl Settings {
    pub fn load(config_file: Option<&Path>) -> StatsResult<Settings> {
        let builder = Config::builder()
            .set_default("data_file", "data_draft.csv")?
            .set_default("results_dir", "results")?
            .set_default("log_level", "info")?
            .set_default("top_edges", 50)?;
        let builder = match config_file {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("Settings").required(false)),
        };
        let settings: Settings = builder
            .add_source(Environment::with_prefix("DRAFTSTATS"))
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Lane table from `roles_file`, or the built-in one.
    pub fn hero_roles(&self) -> StatsResult<HeroRoleMap> {
        match &self.roles_file {
            Some(path) => HeroRoleMap::init(path),
            None => Ok(DEFAULT_HERO_ROLES.clone()),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
