//! Form Schema Types
//!
//! TOML shape of a form definition and its conversion into field configs.

use serde::Deserialize;

use crate::admission::ValidationMode;
use crate::field::{Capitalization, FieldConfig, KeyboardType};
use crate::validation::ContentCategory;

/// Root form file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FormFile {
    pub form: FormMeta,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

/// Form metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FormMeta {
    pub name: String,
    pub title: Option<String>,
}

/// One field as written in a form file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FieldDef {
    pub id: String,
    pub placeholder: Option<String>,
    pub error_message: Option<String>,
    #[serde(default)]
    pub mode: ValidationMode,
    #[serde(default)]
    pub category: ContentCategory,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub capitalization: Capitalization,
    #[serde(default)]
    pub keyboard: KeyboardType,
}

/// Runtime form definition
#[derive(Debug, Clone, PartialEq)]
pub struct FormDef {
    pub name: String,
    pub title: Option<String>,
    pub fields: Vec<(String, FieldConfig)>,
}

impl From<&FieldDef> for FieldConfig {
    fn from(def: &FieldDef) -> Self {
        let defaults = FieldConfig::default();
        Self {
            placeholder: def.placeholder.clone().unwrap_or(defaults.placeholder),
            default_error_message: def
                .error_message
                .clone()
                .unwrap_or(defaults.default_error_message),
            mode: def.mode,
            category: def.category,
            secure: def.secure,
            capitalization: def.capitalization,
            keyboard: def.keyboard,
        }
    }
}

impl From<FormFile> for FormDef {
    fn from(file: FormFile) -> Self {
        let fields = file
            .fields
            .iter()
            .map(|def| (def.id.clone(), FieldConfig::from(def)))
            .collect();

        Self {
            name: file.form.name,
            title: file.form.title,
            fields,
        }
    }
}

impl FormDef {
    pub fn field(&self, id: &str) -> Option<&FieldConfig> {
        self.fields
            .iter()
            .find(|(field_id, _)| field_id == id)
            .map(|(_, config)| config)
    }
}
