//! Configuration and output paths

use std::path::PathBuf;

/// Name used for the configuration directory
const APP_NAME: &str = "posts-contract";

/// Config file looked up in the working directory before the user config dir
pub const LOCAL_CONFIG_FILE: &str = "contract.toml";

/// Get the configuration directory path
///
/// Uses the directories crate for platform-appropriate locations:
/// - Linux: `~/.config/posts-contract/`
/// - macOS: `~/Library/Application Support/posts-contract/`
/// - Windows: `%APPDATA%\posts-contract\`
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the configuration file
///
/// `contract.toml` in the working directory takes precedence when it exists.
pub fn config_path() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    config_dir().map(|dir| dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_ends_in_toml() {
        if let Some(path) = config_path() {
            assert_eq!(path.extension().and_then(|e| e.to_str()), Some("toml"));
        }
    }
}
