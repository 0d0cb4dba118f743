use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;
use serde_with::{formats::CommaSeparator, serde_as, StringWithSeparator};
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub avatar: AvatarSettings,
    pub trace: TraceSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct AvatarSettings {
    /// Providers in the order they are consulted, e.g. `file_system,auth,gravatar`.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, ProviderKind>")]
    pub providers: Vec<ProviderKind>,
    pub directory: PathBuf,
    pub public_path: String,
    pub gravatar_url: String,
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ProviderKind {
    Auth,
    Gravatar,
    FileSystem,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TraceSettings {
    pub sink: TraceSink,
}

#[derive(Deserialize, Display, Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TraceSink {
    Off,
    Stdout,
    Stderr,
    Tracing,
}

pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|err| config::ConfigError::Message(err.to_string()))?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|_| config::ConfigError::Message("Failed to parse APP_ENVIRONMENT".into()))?;

    load_settings(&config_directory, environment)
}

/// Layers `base.yaml`, `{environment}.yaml` and `CHAT_*` environment variables.
pub fn load_settings(
    config_directory: &Path,
    environment: Environment,
) -> Result<Settings, config::ConfigError> {
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("CHAT")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, Clone, Copy, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const BASE: &str = r#"
avatar:
  providers: "file_system,auth,gravatar"
  directory: "avatars"
  public_path: "/avatars"
  gravatar_url: "//www.gravatar.com/avatar/"
trace:
  sink: "stdout"
"#;

    fn config_dir(files: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn reads_base_settings() {
        let dir = config_dir(&[("base.yaml", BASE)]);

        let settings = load_settings(dir.path(), Environment::Local).unwrap();

        assert_eq!(
            settings.avatar.providers,
            vec![
                ProviderKind::FileSystem,
                ProviderKind::Auth,
                ProviderKind::Gravatar
            ]
        );
        assert_eq!(settings.avatar.directory, PathBuf::from("avatars"));
        assert_eq!(settings.avatar.public_path, "/avatars");
        assert_eq!(settings.trace.sink, TraceSink::Stdout);
    }

    #[test]
    fn environment_file_overrides_base() {
        let dir = config_dir(&[
            ("base.yaml", BASE),
            (
                "production.yaml",
                "avatar:\n  providers: \"auth,gravatar\"\ntrace:\n  sink: \"tracing\"\n",
            ),
        ]);

        let settings = load_settings(dir.path(), Environment::Production).unwrap();

        assert_eq!(
            settings.avatar.providers,
            vec![ProviderKind::Auth, ProviderKind::Gravatar]
        );
        assert_eq!(settings.trace.sink, TraceSink::Tracing);
        assert_eq!(settings.avatar.public_path, "/avatars");
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let dir = config_dir(&[(
            "base.yaml",
            BASE.replace("file_system,auth,gravatar", "auth,carrier_pigeon")
                .as_str(),
        )]);

        assert!(load_settings(dir.path(), Environment::Local).is_err());
    }

    #[test]
    fn missing_base_file_is_an_error() {
        let dir = config_dir(&[]);

        assert!(load_settings(dir.path(), Environment::Local).is_err());
    }

    #[test]
    fn provider_kind_names() {
        assert_eq!(ProviderKind::FileSystem.to_string(), "file_system");
        assert_eq!(
            ProviderKind::from_str("Gravatar").unwrap(),
            ProviderKind::Gravatar
        );
    }

    #[test]
    fn environment_parses_case_insensitively() {
        assert!(matches!(
            Environment::from_str("PRODUCTION"),
            Ok(Environment::Production)
        ));
        assert!(Environment::from_str("staging").is_err());
    }
}
