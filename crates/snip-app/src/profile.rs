use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snip_config::Config;

/// Root of the persisted state: `%APPDATA%\snipgrab` on Windows,
/// `$XDG_CONFIG_HOME/snipgrab` (or `~/.config/snipgrab`) elsewhere.
/// `SNIPGRAB_CONFIG_DIR` overrides both.
fn config_root() -> PathBuf {
    if let Ok(dir) = env::var("SNIPGRAB_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    let base = if cfg!(windows) {
        env::var("APPDATA")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."))
    } else {
        env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
                PathBuf::from(home).join(".config")
            })
    };

    base.join("snipgrab")
}

fn profiles_dir() -> PathBuf {
    config_root().join("profiles")
}

pub fn history_path() -> PathBuf {
    config_root().join("snip_results.json")
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Initialize user config folders and main profile if missing
pub fn init_user_config() -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir())?;

    let main_profile = profiles_dir().join("main.json");

    if !main_profile.exists() {
        let profile = Profile {
            name: "main".into(),
            value: Config::new(),
        };
        fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
        tracing::info!("Created main profile at {}", main_profile.display());
    }

    Ok(())
}

/// Load a user profile by name, defaulting to main if name not found
pub fn load_user_profile(name: &str) -> anyhow::Result<Config> {
    let profile_file = profiles_dir().join(format!("{name}.json"));

    if profile_file.exists() {
        let data = fs::read_to_string(profile_file)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile.value)
    } else {
        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = profiles_dir().join("main.json");
        if main_file.exists() {
            let data = fs::read_to_string(main_file)?;
            let profile: Profile = serde_json::from_str(&data)?;
            Ok(profile.value)
        } else {
            Ok(Config::new())
        }
    }
}

/// Save the given config back to the named profile
pub fn save_user_profile(name: &str, config: &Config) -> anyhow::Result<()> {
    fs::create_dir_all(profiles_dir())?;

    let profile = Profile {
        name: name.into(),
        value: config.clone(),
    };
    let file = profiles_dir().join(format!("{name}.json"));
    fs::write(&file, serde_json::to_string_pretty(&profile)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use snip_types::EngineKind;

    use super::*;

    #[test]
    fn profile_round_trips_through_disk() {
        let dir = std::env::temp_dir().join(format!("snipgrab-profile-{}", std::process::id()));

        let mut config = Config::default();
        config.ocr.engine = EngineKind::Gemini;
        config.ocr.language = "jpn".to_string();

        let profile = Profile {
            name: "test".into(),
            value: config,
        };
        fs::create_dir_all(&dir).unwrap();
        let file = dir.join("test.json");
        fs::write(&file, serde_json::to_string_pretty(&profile).unwrap()).unwrap();

        let data = fs::read_to_string(&file).unwrap();
        let back: Profile = serde_json::from_str(&data).unwrap();
        assert_eq!(back.name, "test");
        assert_eq!(back.value.ocr.engine, EngineKind::Gemini);
        assert_eq!(back.value.ocr.language, "jpn");

        let _ = fs::remove_dir_all(&dir);
    }
}
