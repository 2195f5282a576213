/*
[INPUT]:  Optional YAML config file and WEBEX_* environment variables
[OUTPUT]: Merged CLI configuration
[POS]:    Configuration layer - credentials and defaults for the webex binary
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::output::OutputFormat;

/// Prefix of environment variables read into [`CliConfig`]
pub const ENV_PREFIX: &str = "WEBEX";

/// Settings shared by every subcommand.
///
/// Sources, lowest precedence first: YAML file, `WEBEX_*` environment
/// variables, command line flags (applied by the caller).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CliConfig {
    /// Bearer token (personal access token, bot or service app token)
    #[serde(default)]
    pub access_token: Option<String>,
    /// API base URL, defaults to `https://webexapis.com/v1/`
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub output: Option<OutputFormat>,
    /// Maximum number of items printed by list commands
    #[serde(default)]
    pub max: Option<u32>,
    #[serde(default)]
    pub org_id: Option<String>,
    /// Integration credentials used to refresh tokens stored in `token_file`
    #[serde(default)]
    pub integration: Option<IntegrationConfig>,
}

/// Integration settings for OAuth token refresh
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntegrationConfig {
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    #[serde(default)]
    pub scopes: Vec<String>,
    /// JSON file holding the current grant; rewritten after a refresh
    pub token_file: PathBuf,
}

fn default_redirect_uri() -> String {
    "http://localhost:6001/redirect".to_string()
}

/// `~/.config/webex/config.yaml` (platform config dir)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("webex").join("config.yaml"))
}

impl CliConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(
                    File::from(path.to_path_buf())
                        .format(FileFormat::Yaml)
                        .required(true),
                );
            }
            None => {
                if let Some(default_path) = default_config_path() {
                    builder = builder.add_source(
                        File::from(default_path)
                            .format(FileFormat::Yaml)
                            .required(false),
                    );
                }
            }
        }

        builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .context("read configuration")?
            .try_deserialize()
            .context("parse configuration")
    }

    /// Apply command line flags on top of file and environment values.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(token) = &cli.token {
            self.access_token = Some(token.clone());
        }
        if let Some(base_url) = &cli.base_url {
            self.base_url = Some(base_url.clone());
        }
        if let Some(output) = cli.output {
            self.output = Some(output);
        }
        if let Some(max) = cli.max {
            self.max = Some(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_yaml_file() {
        let path =
            std::env::temp_dir().join(format!("webex-cli-config-{}.yaml", std::process::id()));
        std::fs::write(
            &path,
            "access_token: from-file\nbase_url: http://127.0.0.1:9/v1\noutput: yaml\nmax: 5\n",
        )
        .unwrap();

        let config = CliConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.access_token.as_deref(), Some("from-file"));
        assert_eq!(config.base_url.as_deref(), Some("http://127.0.0.1:9/v1"));
        assert_eq!(config.output, Some(OutputFormat::Yaml));
        assert_eq!(config.max, Some(5));
        assert!(config.integration.is_none());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("webex-cli-config-does-not-exist.yaml");
        assert!(CliConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn test_flags_override_file_values() {
        use clap::Parser;

        let mut config = CliConfig {
            access_token: Some("from-file".to_string()),
            max: Some(5),
            ..CliConfig::default()
        };
        let cli = Cli::try_parse_from(["webex", "me", "--token", "from-flag"]).unwrap();
        config.apply_cli(&cli);

        assert_eq!(config.access_token.as_deref(), Some("from-flag"));
        assert_eq!(config.max, Some(5));
    }

    #[test]
    fn test_integration_section() {
        let yaml = "integration:\n  client_id: cid\n  client_secret: secret\n  token_file: /tmp/tokens.json\n";
        let config: CliConfig = serde_yaml::from_str(yaml).unwrap();
        let integration = config.integration.unwrap();
        assert_eq!(integration.client_id, "cid");
        assert_eq!(integration.redirect_uri, default_redirect_uri());
        assert!(integration.scopes.is_empty());
    }
}
