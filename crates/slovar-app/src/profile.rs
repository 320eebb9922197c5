use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use slovar_config::Config;

/// Looked up in the working directory when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "slovar.json";

/// Read a JSON config file, missing sections take their defaults
pub fn read_config_file(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file =
        File::open(path).with_context(|| format!("failed to open config {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

/// Resolve the config: file, then environment, then the command line dictionary path
pub fn load_config(path: Option<&Path>, dictionary: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = match path {
        Some(path) => read_config_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                read_config_file(default_path)?
            } else {
                tracing::info!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                Config::default()
            }
        }
    };

    config.apply_env();

    if let Some(dictionary) = dictionary {
        config.dictionary.path = dictionary.display().to_string();
    }

    Ok(config)
}
