use std::path::{Path, PathBuf};

use clap::ValueEnum;
use focuskit_instruments::session::NavigationPolicy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;

/// Bumped whenever the on-disk shape changes; every bump adds one step to
/// [`MIGRATIONS`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Rendered plain-text report.
    #[default]
    Text,
    /// The full outcome as JSON.
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocuskitConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Added in v1. Older configs are migrated to `strict`.
    #[serde(default)]
    pub navigation: NavigationPolicy,
    #[serde(default)]
    pub output: OutputFormat,
    pub created_at: jiff::Timestamp,
}

impl Default for FocuskitConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            navigation: NavigationPolicy::default(),
            output: OutputFormat::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("focuskit").join("config.json"))
}

/// An explicit path wins over the platform default.
pub fn resolve_path(explicit: Option<&Path>) -> eyre::Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Load the config at `path`, or defaults if no file exists yet.
pub fn load_config(path: &Path) -> eyre::Result<FocuskitConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(FocuskitConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("cannot read {}: {e}", path.display()))?;
    let upgraded = upgrade(serde_json::from_str(&raw)?)?;
    Ok(serde_json::from_value(upgraded)?)
}

type Migration = fn(&mut Map<String, Value>);

/// `MIGRATIONS[n]` turns a version `n` document into version `n + 1`.
const MIGRATIONS: [Migration; CURRENT_VERSION as usize] = [v0_explicit_preferences];

fn v0_explicit_preferences(fields: &mut Map<String, Value>) {
    fields
        .entry("navigation")
        .or_insert_with(|| Value::from("strict"));
    fields.entry("output").or_insert_with(|| Value::from("text"));
    fields
        .entry("created_at")
        .or_insert_with(|| Value::from(jiff::Timestamp::now().to_string()));
}

/// Bring a raw config document up to [`CURRENT_VERSION`].
fn upgrade(mut document: Value) -> eyre::Result<Value> {
    let stored = document
        .get("config_version")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    if stored > u64::from(CURRENT_VERSION) {
        eyre::bail!(
            "config_version {stored} is newer than this build supports ({CURRENT_VERSION}). \
             Please update focuskit."
        );
    }

    let fields = document
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config must be a JSON object"))?;
    for (from, step) in MIGRATIONS.iter().enumerate().skip(stored as usize) {
        step(fields);
        tracing::info!(from, to = from + 1, "config upgraded");
    }
    fields.insert("config_version".to_string(), Value::from(CURRENT_VERSION));

    Ok(document)
}

/// Persist `config` at `path`, stamped with [`CURRENT_VERSION`].
///
/// The file is staged next to its destination and moved into place, so a
/// reader never sees a half-written config. On Unix it is readable by the
/// owner only.
pub fn save_config(path: &Path, config: &FocuskitConfig) -> eyre::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let stamped = FocuskitConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut staged, &stamped)?;
    staged.as_file().sync_all()?;
    staged.persist(path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
