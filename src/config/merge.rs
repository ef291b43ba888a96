//! CLI overrides layered on top of file config

use crate::domain::Config;

/// Settings given on the command line. `None` / `false` leave the file
/// config untouched.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub no_shorten_paths: bool,
    pub symptom_labels: Vec<(String, String)>,
}

pub fn merge_cli_with_config(mut config: Config, cli: CliOverrides) -> Config {
    if cli.no_shorten_paths {
        config.shorten_paths = false;
    }
    for (tag, label) in cli.symptom_labels {
        config.symptom_labels.insert(tag, label);
    }
    config
}
