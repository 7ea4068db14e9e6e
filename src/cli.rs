//! Command-line host
//!
//! Plays the part of the screen that owns the fields: it feeds edits and
//! values in, submits, and prints whatever state the fields report.

use std::io::Write;

use anyhow::{Context, Result, anyhow};

use crate::admission::ValidationMode;
use crate::config::{Command, Config};
use crate::field::{FieldConfig, TextField};
use crate::form::{Form, FormOutcome, FormRegistry};
use crate::validation::ContentCategory;

/// Parse arguments, set up logging and run the chosen command.
///
/// Returns the process exit code.
pub fn run() -> Result<i32> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_default_env()
        .init();

    let mut out = std::io::stdout().lock();
    execute(&config, &mut out)
}

/// Run the configured command, writing its report to `out`
pub fn execute(config: &Config, out: &mut impl Write) -> Result<i32> {
    let registry = build_registry(config)?;

    match &config.command {
        Command::Check {
            form,
            values,
            typed,
            json,
        } => {
            let def = registry
                .get_form(form)
                .ok_or_else(|| anyhow!("unknown form '{}'", form))?;
            let mut form = Form::from(def);

            for (id, value) in values {
                if *typed {
                    form.type_into(id, value)?;
                } else {
                    form.set_text(id, value)?;
                }
            }

            let outcome = form.submit();
            if *json {
                serde_json::to_writer_pretty(&mut *out, &outcome)
                    .context("failed to write JSON outcome")?;
                writeln!(out)?;
            } else {
                write_outcome(out, &outcome)?;
            }

            Ok(if outcome.success { 0 } else { 1 })
        }
        Command::Type {
            mode,
            initial,
            keys,
        } => {
            simulate_typing(out, *mode, initial, keys)?;
            Ok(0)
        }
        Command::Forms => {
            for name in registry.list_forms() {
                writeln!(out, "{}", name)?;
            }
            Ok(0)
        }
    }
}

/// Built-in form first, then configured directories in priority order
fn build_registry(config: &Config) -> Result<FormRegistry> {
    let mut registry = FormRegistry::with_builtin();
    for dir in &config.form_dirs {
        registry.load_dir(dir)?;
    }
    Ok(registry)
}

fn write_outcome(out: &mut impl Write, outcome: &FormOutcome) -> Result<()> {
    writeln!(out, "{}", outcome.heading)?;
    for field in &outcome.fields {
        let status = if field.verdict.is_valid { "ok" } else { "invalid" };
        write!(
            out,
            "{:<12} {:<8} {:?} [{}, {}, {}]",
            field.id,
            status,
            field.display_text,
            field.placeholder,
            field.capitalization.name(),
            field.keyboard.name()
        )?;
        if let Some(message) = &field.shown_message {
            write!(out, "  {}", message)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "{}: {} [{}]", outcome.title, outcome.message, outcome.button_title)?;
    Ok(())
}

/// Type `keys` into a scratch field one keystroke at a time
fn simulate_typing(
    out: &mut impl Write,
    mode: ValidationMode,
    initial: &str,
    keys: &str,
) -> Result<()> {
    let mut field = TextField::new(FieldConfig::new(mode, ContentCategory::Unspecified));
    field.set_text(initial);

    let mut buf = [0u8; 4];
    for key in keys.chars() {
        let at = field.text().chars().count();
        let accepted = field.propose_edit(at, 0, key.encode_utf8(&mut buf));
        writeln!(
            out,
            "{:?} {}",
            key,
            if accepted { "accepted" } else { "rejected" }
        )?;
    }

    writeln!(out, "text: {:?}", field.text())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_command(command: Command) -> (i32, String) {
        let config = Config {
            form_dirs: Vec::new(),
            log_level: "off".to_string(),
            command,
        };
        let mut out = Vec::new();
        let code = execute(&config, &mut out).expect("execute");
        (code, String::from_utf8(out).expect("utf8 output"))
    }

    #[test]
    fn test_type_command_reports_each_key() {
        let (code, out) = run_command(Command::Type {
            mode: ValidationMode::NumbersMaxLen4,
            initial: "12".to_string(),
            keys: "3x45".to_string(),
        });

        assert_eq!(code, 0);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "'3' accepted",
                "'x' rejected",
                "'4' accepted",
                "'5' rejected",
                "text: \"1234\"",
            ]
        );
    }

    #[test]
    fn test_type_command_keeps_spacing_rule() {
        let (_, out) = run_command(Command::Type {
            mode: ValidationMode::AlphabeticSingleInterWordSpace,
            initial: "Ada".to_string(),
            keys: "  L".to_string(),
        });

        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            ["' ' accepted", "' ' rejected", "'L' accepted", "text: \"Ada L\""]
        );
    }

    #[test]
    fn test_check_command_exit_codes() {
        let (code, out) = run_command(Command::Check {
            form: "signup".to_string(),
            values: vec![("email".to_string(), "nope".to_string())],
            typed: false,
            json: false,
        });
        assert_eq!(code, 1);
        assert!(out.starts_with("Sign up\n"));
        assert!(out.contains("[Name, words, name-phone-pad]"));
        assert!(out.contains("Please enter valid e-mail"));
        assert!(out.ends_with("Error: Fields are not valid! [Try Again]\n"));

        let (code, out) = run_command(Command::Check {
            form: "signup".to_string(),
            values: vec![
                ("name".to_string(), "Ada".to_string()),
                ("email".to_string(), "ada@example.com".to_string()),
                ("password".to_string(), "pw".to_string()),
            ],
            typed: true,
            json: true,
        });
        assert_eq!(code, 0);
        let value: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(value["success"], true);
        assert_eq!(value["fields"][2]["display_text"], "••");
        assert_eq!(value["fields"][1]["is_valid"], true);
        assert_eq!(value["fields"][1]["keyboard"], "email-address");
        assert_eq!(value["heading"], "Sign up");
    }

    #[test]
    fn test_unknown_form_is_error() {
        let config = Config {
            form_dirs: Vec::new(),
            log_level: "off".to_string(),
            command: Command::Check {
                form: "missing".to_string(),
                values: Vec::new(),
                typed: false,
                json: false,
            },
        };
        let err = execute(&config, &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(err.to_string(), "unknown form 'missing'");
    }
}
