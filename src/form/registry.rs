//! Form Registry
//!
//! Simple in-memory registry of named form definitions.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use super::schema::{FormDef, FormFile};
use crate::admission::ValidationMode;
use crate::field::FieldConfig;
use crate::validation::ContentCategory;

/// Name of the form that is always available
pub const BUILTIN_FORM: &str = "signup";

/// File suffix picked up when scanning a directory
pub const FORM_FILE_SUFFIX: &str = ".form.toml";

#[derive(Debug, Clone)]
pub struct FormRegistry {
    forms: HashMap<String, FormDef>,
}

impl Default for FormRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FormRegistry {
    pub fn new() -> Self {
        Self {
            forms: HashMap::new(),
        }
    }

    /// Registry holding only the built-in form
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.add_embedded_signup_form();
        registry
    }

    /// Add a form, replacing any form with the same name
    pub fn add_form(&mut self, form: FormDef) {
        if self.forms.contains_key(&form.name) {
            log::debug!("Form '{}' overridden", form.name);
        }
        self.forms.insert(form.name.clone(), form);
    }

    pub fn get_form(&self, name: &str) -> Option<&FormDef> {
        self.forms.get(name)
    }

    /// List all form names, sorted
    pub fn list_forms(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.forms.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Parse form TOML text and register it, returning the form name
    pub fn add_form_str(&mut self, text: &str) -> Result<String> {
        let file: FormFile = toml::from_str(text).context("invalid form definition")?;
        let form = FormDef::from(file);
        let name = form.name.clone();
        self.add_form(form);
        Ok(name)
    }

    /// Load and register a single form file
    pub fn load_file(&mut self, path: &Path) -> Result<String> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read form file {}", path.display()))?;
        self.add_form_str(&text)
            .with_context(|| format!("failed to load form file {}", path.display()))
    }

    /// Load every `*.form.toml` in `dir`.
    ///
    /// A missing directory loads nothing. Files that fail to parse are
    /// skipped with a warning. Returns the number of forms loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            log::debug!("Form directory {} not present", dir.display());
            return Ok(0);
        }

        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .with_context(|| format!("failed to read form directory {}", dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.ends_with(FORM_FILE_SUFFIX))
            })
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match self.load_file(&path) {
                Ok(name) => {
                    log::info!("Loaded form '{}' from {}", name, path.display());
                    loaded += 1;
                }
                Err(e) => log::warn!("Skipping form file: {:#}", e),
            }
        }

        Ok(loaded)
    }

    /// Add the embedded sign-up form
    pub fn add_embedded_signup_form(&mut self) {
        let embedded_toml = include_str!("../../resources/forms/signup.form.toml");

        if let Err(e) = self.add_form_str(embedded_toml) {
            log::warn!(
                "Failed to parse embedded signup form: {:#}. Using minimal fallback.",
                e
            );
            self.add_minimal_signup_form();
        }
    }

    /// Fallback sign-up form in case the embedded TOML fails to parse
    fn add_minimal_signup_form(&mut self) {
        let fields = vec![
            (
                "name".to_string(),
                FieldConfig::new(ValidationMode::NoValidation, ContentCategory::Name)
                    .with_placeholder("Name"),
            ),
            (
                "email".to_string(),
                FieldConfig::new(ValidationMode::NoValidation, ContentCategory::Email)
                    .with_placeholder("E-mail"),
            ),
            (
                "password".to_string(),
                FieldConfig::new(ValidationMode::NoValidation, ContentCategory::Password)
                    .with_placeholder("Password")
                    .secure(),
            ),
        ];

        self.add_form(FormDef {
            name: BUILTIN_FORM.to_string(),
            title: None,
            fields,
        });
    }
}
