use crate::error::{PredictorError, Result};
use crate::types::config::PredictorConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "placement.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".placement/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/placement/config.toml";

/// Loads `explicit` alone when given, otherwise merges global, project and
/// local layers found relative to `root`. Missing layers are skipped.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<PredictorConfig> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(PredictorError::ConfigNotFound(path.display().to_string()));
        }
        let cfg = into_config(read_toml_value(path)?)?;
        cfg.validate()?;
        return Ok(cfg);
    }

    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<PredictorConfig> {
    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_CONFIG_FILE))?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg = into_config(merged)?;
    cfg.validate()?;
    Ok(cfg)
}

fn into_config(value: Value) -> Result<PredictorConfig> {
    value
        .try_into()
        .map_err(|e: toml::de::Error| PredictorError::ConfigParse(e.to_string()))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PredictorError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::{MissingFieldPolicy, OutputFormatSetting};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_layers_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert_eq!(cfg.missing_fields(), MissingFieldPolicy::Coerce);
        assert_eq!(cfg.delay_ms(), 0);
    }

    #[test]
    fn load_config_merges_global_project_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[scoring]
missing_fields = "reject"

[output]
format = "json"
delay_ms = 250
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[output]
format = "md"
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".placement")).expect("local dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[output]
delay_ms = 0
"#,
        )
        .expect("local override should write");

        let cfg =
            load_config_with_global(root.path(), Some(&global_path)).expect("load should succeed");

        assert_eq!(cfg.missing_fields(), MissingFieldPolicy::Reject);
        assert_eq!(cfg.format(), Some(OutputFormatSetting::Md));
        assert_eq!(cfg.delay_ms(), 0);
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let missing = dir.path().join("nope.toml");
        let result = load_config(dir.path(), Some(&missing));
        assert!(matches!(result, Err(PredictorError::ConfigNotFound(_))));
    }

    #[test]
    fn explicit_config_ignores_project_layer() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "[scoring]\nmissing_fields = \"reject\"\n",
        )
        .expect("project config should write");
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[output]\ndelay_ms = 5\n").expect("explicit config should write");

        let cfg = load_config(dir.path(), Some(&explicit)).expect("load should succeed");
        assert_eq!(cfg.missing_fields(), MissingFieldPolicy::Coerce);
        assert_eq!(cfg.delay_ms(), 5);
    }

    #[test]
    fn invalid_layer_reports_path() {
        let dir = TempDir::new().expect("temp dir should be created");
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[output\n").expect("config should write");
        let result = load_config_with_global(dir.path(), None);
        assert!(matches!(
            result,
            Err(PredictorError::ConfigParse(message)) if message.contains(DEFAULT_CONFIG_FILE)
        ));
    }
}
