use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use peakly_core::config::Config;

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("peakly").join("config.toml"))
}

pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

/// An explicit path must exist; the default location is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };

    let text = fs::read_to_string(&path).map_err(|err| {
        io::Error::new(err.kind(), format!("{}: {err}", path.display()))
    })?;
    let config = parse_config(&text).map_err(|err| format!("{}: {err}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use peakly_core::catalog::ViewMode;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = parse_config("log_capacity = 50\n").expect("parse");
        assert_eq!(config.log_capacity, 50);
        assert_eq!(config.planner.owner_name, "You (Solo)");
        assert_eq!(config.map.default_filters, vec!["mountain".to_string()]);
    }

    #[test]
    fn map_section_overrides_defaults() {
        let config = parse_config(
            r#"
[planner]
owner_name = "Mountain Explorer"

[map]
default_mode = "personal"
default_filters = []
"#,
        )
        .expect("parse");
        assert_eq!(config.map.default_mode, ViewMode::Personal);
        assert!(config.map.default_filters.is_empty());
        assert_eq!(config.planner.owner_name, "Mountain Explorer");
    }

    #[test]
    fn explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "[map]\ndefault_filters = [\"forest\", \"viewpoint\"]").expect("write");

        let config = load_config(Some(file.path())).expect("load");
        assert_eq!(
            config.map.default_filters,
            vec!["forest".to_string(), "viewpoint".to_string()]
        );
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = load_config(Some(&dir.path().join("absent.toml"))).expect_err("missing");
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "[map\n").expect("write");
        let err = load_config(Some(file.path())).expect_err("invalid");
        assert!(err
            .to_string()
            .contains(&file.path().display().to_string()));
    }
}
