use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// Optional user settings. The rotation threshold is fixed and has no key.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) history_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    pub(crate) fn load() -> Self {
        // Try config locations in order of priority
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match Self::parse(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                    }
                }
            }
        }

        Self::default()
    }

    fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<Config>(content)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/calclog/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("calclog").join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support/calclog/config.toml)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("calclog").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.calclog.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".calclog.toml"));
        }

        paths
    }
}
