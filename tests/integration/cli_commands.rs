//! CLI commands that run without a content API.

use clap::Parser;
use cms_content::cli::{Cli, Commands, ConfigCommands, RunContext};
use cms_content::config::SiteConfig;
use cms_content::ContentError;
use std::path::PathBuf;

fn context(config: SiteConfig) -> RunContext {
    RunContext::with_config(config, PathBuf::from("."), None).unwrap()
}

fn config_with_token() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.api.token = Some("super-secret".to_string());
    config
}

#[test]
fn test_config_show_redacts_token() {
    let output = context(config_with_token())
        .execute(&Commands::Config {
            command: ConfigCommands::Show,
        })
        .unwrap();
    assert!(output.contains("endpoint = \"https://graphql.datocms.com\""));
    assert!(output.contains("***"));
    assert!(!output.contains("super-secret"));
}

#[test]
fn test_config_validate_ok() {
    let output = context(config_with_token())
        .execute(&Commands::Config {
            command: ConfigCommands::Validate,
        })
        .unwrap();
    assert_eq!(output, "Configuration is valid.\n");
}

#[test]
fn test_config_validate_reports_every_problem() {
    let mut config = SiteConfig::default();
    config.api.token_env = "CMS_CONTENT_TEST_UNSET_TOKEN".to_string();
    config.api.endpoint = String::new();
    config.locales.default = "de".to_string();

    let err = context(config)
        .execute(&Commands::Config {
            command: ConfigCommands::Validate,
        })
        .unwrap_err();
    match err {
        ContentError::ConfigError(msg) => {
            assert!(msg.contains("2 problem(s)"), "{}", msg);
            assert!(msg.contains("Endpoint cannot be empty"));
            assert!(msg.contains("locales:"));
        }
        other => panic!("expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_content_commands_need_valid_config() {
    let mut config = SiteConfig::default();
    config.api.token_env = "CMS_CONTENT_TEST_UNSET_TOKEN".to_string();
    let cli = Cli::try_parse_from(["cms-content", "post", "--slug", "hello-world"]).unwrap();

    let err = context(config).execute(&cli.command).unwrap_err();
    assert!(err.to_string().contains("No API token configured"));
}
