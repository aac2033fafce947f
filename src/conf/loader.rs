use super::model::ConfigurationModel;
use super::paths::resolve_config_path;
use std::fs;
use std::path::Path;

/// Load the user's configuration file, falling back to defaults when absent or invalid.
pub fn load() -> ConfigurationModel {
    match resolve_config_path() {
        Some(path) => load_from(&path),
        None => ConfigurationModel::default(),
    }
}

/// Load a specific configuration file. Problems are reported as warnings and
/// never prevent the shell from starting.
pub fn load_from(path: &Path) -> ConfigurationModel {
    match fs::read_to_string(path) {
        Ok(contents) => match ConfigurationModel::parse(&contents) {
            Ok(mut cfg) => {
                cfg.set_source_path(path.to_path_buf());
                return cfg;
            }
            Err(err) => {
                eprintln!(
                    "Warning: unable to parse config file '{}': {err}",
                    path.display()
                );
            }
        },
        Err(err) => {
            eprintln!(
                "Warning: unable to read config file '{}': {err}",
                path.display()
            );
        }
    }

    ConfigurationModel::default()
}
