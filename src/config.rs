//! Configuration management for the form host.
//!
//! Handles:
//! - Command-line argument parsing
//! - Form directory configuration

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::admission::ValidationMode;
use crate::form::BUILTIN_FORM;

/// Command-line arguments for the form host
#[derive(Debug, Parser)]
#[command(name = "ssfield")]
#[command(about = "Validate text fields and forms from the command line")]
#[command(version)]
pub struct Args {
    /// Extra directory to search for form files
    #[arg(long, global = true, help = "Directory containing *.form.toml files")]
    pub form_dir: Option<PathBuf>,

    /// Log level
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Fill in a form and submit it
    Check {
        /// Form to use
        #[arg(long, default_value = BUILTIN_FORM)]
        form: String,

        /// Field value as ID=VALUE, may be repeated
        #[arg(long = "set", value_name = "ID=VALUE", value_parser = parse_assignment)]
        values: Vec<(String, String)>,

        /// Type values keystroke by keystroke instead of setting them
        #[arg(long)]
        typed: bool,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Simulate typing into a single field
    Type {
        /// Validation mode (name or raw number)
        #[arg(long, default_value = "none")]
        mode: ValidationMode,

        /// Text already in the field
        #[arg(long, default_value = "")]
        initial: String,

        /// Keystrokes to type
        keys: String,
    },

    /// List known forms
    Forms,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((id, value)) if !id.is_empty() => Ok((id.to_string(), value.to_string())),
        _ => Err(format!("expected ID=VALUE, got '{}'", s)),
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Form directories to load, lowest priority first
    pub form_dirs: Vec<PathBuf>,
    pub log_level: String,
    pub command: Command,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let mut form_dirs = Vec::new();

        // Default user config directory
        if let Some(config_dir) = dirs::config_dir() {
            form_dirs.push(config_dir.join("sstextfield").join("forms"));
        }

        // User-specified directory wins over the default
        if let Some(custom_dir) = args.form_dir {
            form_dirs.push(custom_dir);
        }

        Ok(Config {
            form_dirs,
            log_level: args.log_level,
            command: args.command,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_command() {
        let args = Args::try_parse_from([
            "ssfield",
            "check",
            "--set",
            "name=Ada",
            "--set",
            "email=a=b@c.com",
            "--json",
        ])
        .unwrap();

        let config = Config::from_args(args).unwrap();
        assert_eq!(
            config.command,
            Command::Check {
                form: "signup".to_string(),
                values: vec![
                    ("name".to_string(), "Ada".to_string()),
                    ("email".to_string(), "a=b@c.com".to_string()),
                ],
                typed: false,
                json: true,
            }
        );
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_form_dir_is_last() {
        let args =
            Args::try_parse_from(["ssfield", "forms", "--form-dir", "/tmp/forms"]).unwrap();
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.form_dirs.last(), Some(&PathBuf::from("/tmp/forms")));
    }

    #[test]
    fn test_parse_type_command() {
        let args = Args::try_parse_from(["ssfield", "type", "--mode", "4", "12345"]).unwrap();
        assert_eq!(
            args.command,
            Command::Type {
                mode: ValidationMode::NumbersMaxLen4,
                initial: String::new(),
                keys: "12345".to_string(),
            }
        );
    }

    #[test]
    fn test_bad_assignment() {
        assert!(Args::try_parse_from(["ssfield", "check", "--set", "novalue"]).is_err());
        assert!(Args::try_parse_from(["ssfield", "check", "--set", "=x"]).is_err());
    }
}
