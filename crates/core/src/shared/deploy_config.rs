use std::path::PathBuf;

use crate::shared::constants::{
    DEFAULT_COMPOSE_COMMAND, DEFAULT_PYTHON, DEFAULT_SCRIPT, INSTALL_URL_ENV, VERSION_PIN_ENV,
};

/// Values consumed by the image build (dependency version pin and the
/// source the install step fetches from).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildEnv {
    pub version_pin: Option<String>,
    pub install_url: Option<String>,
}

impl BuildEnv {
    /// Environment pairs to export to the build step. Unset and empty
    /// values are left out.
    pub fn vars(&self) -> Vec<(String, String)> {
        [
            (VERSION_PIN_ENV, &self.version_pin),
            (INSTALL_URL_ENV, &self.install_url),
        ]
        .into_iter()
        .filter_map(|(name, value)| match value {
            Some(v) if !v.is_empty() => Some((name.to_string(), v.clone())),
            _ => None,
        })
        .collect()
    }
}

/// Everything needed to derive the four step invocations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployConfig {
    /// Compose program, split shell-style (`docker-compose` or `docker compose`).
    pub compose_command: String,
    pub compose_file: Option<PathBuf>,
    /// Working directory for every step. `None` inherits the caller's.
    pub project_dir: Option<PathBuf>,
    /// Script interpreter, split shell-style (e.g. `python3 -u`).
    pub python: String,
    pub script: PathBuf,
    pub build_env: BuildEnv,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            compose_command: DEFAULT_COMPOSE_COMMAND.to_string(),
            compose_file: None,
            project_dir: None,
            python: DEFAULT_PYTHON.to_string(),
            script: PathBuf::from(DEFAULT_SCRIPT),
            build_env: BuildEnv::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_snippet() {
        let config = DeployConfig::default();
        assert_eq!(config.compose_command, "docker-compose");
        assert_eq!(config.python, "python");
        assert_eq!(config.script, PathBuf::from("snap.py"));
        assert!(config.compose_file.is_none());
        assert!(config.project_dir.is_none());
        assert_eq!(config.build_env, BuildEnv::default());
    }

    #[test]
    fn test_build_env_vars_empty_when_unset() {
        assert!(BuildEnv::default().vars().is_empty());
    }

    #[test]
    fn test_build_env_vars_exports_both() {
        let env = BuildEnv {
            version_pin: Some("0.57.3".to_string()),
            install_url: Some("https://pypi.org/simple".to_string()),
        };
        assert_eq!(
            env.vars(),
            vec![
                ("FACEBOUND_VERSION".to_string(), "0.57.3".to_string()),
                (
                    "FACEBOUND_INSTALL_URL".to_string(),
                    "https://pypi.org/simple".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_build_env_vars_skips_empty_values() {
        let env = BuildEnv {
            version_pin: Some(String::new()),
            install_url: Some("https://example.com/wheels".to_string()),
        };
        let vars = env.vars();
        assert_eq!(vars.len(), 1);
        assert_eq!(vars[0].0, "FACEBOUND_INSTALL_URL");
    }
}
