//! Form Sessions
//!
//! A live set of fields built from a form definition, and the aggregated
//! outcome of submitting them.

use anyhow::{Result, anyhow};
use serde::Serialize;

use super::schema::FormDef;
use crate::field::{Capitalization, KeyboardType, TextField};
use crate::validation::ValidationVerdict;

/// Per-field result of a submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub id: String,
    pub placeholder: String,
    pub display_text: String,
    pub capitalization: Capitalization,
    pub keyboard: KeyboardType,
    #[serde(flatten)]
    pub verdict: ValidationVerdict,
    /// Message the host shows when the field is invalid
    pub shown_message: Option<String>,
}

/// Form-level result of a submit, ready to show as an alert
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOutcome {
    pub form: String,
    /// Heading the host shows above the fields
    pub heading: String,
    pub success: bool,
    pub title: &'static str,
    pub message: &'static str,
    pub button_title: &'static str,
    pub fields: Vec<FieldReport>,
}

impl FormOutcome {
    fn new(form: String, heading: String, fields: Vec<FieldReport>) -> Self {
        let success = fields.iter().all(|f| f.verdict.is_valid);
        if success {
            Self {
                form,
                heading,
                success,
                title: "Success",
                message: "Fields are valid",
                button_title: "Okay",
                fields,
            }
        } else {
            Self {
                form,
                heading,
                success,
                title: "Error",
                message: "Fields are not valid!",
                button_title: "Try Again",
                fields,
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    name: String,
    title: Option<String>,
    fields: Vec<(String, TextField)>,
}

impl From<&FormDef> for Form {
    fn from(def: &FormDef) -> Self {
        let fields = def
            .fields
            .iter()
            .map(|(id, config)| (id.clone(), TextField::new(config.clone())))
            .collect();

        Self {
            name: def.name.clone(),
            title: def.title.clone(),
            fields,
        }
    }
}

impl Form {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title, falling back to the form name
    pub fn heading(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(id, _)| id.as_str())
    }

    pub fn field(&self, id: &str) -> Option<&TextField> {
        self.fields.iter().find(|(fid, _)| fid == id).map(|(_, f)| f)
    }

    pub fn field_mut(&mut self, id: &str) -> Option<&mut TextField> {
        self.fields
            .iter_mut()
            .find(|(fid, _)| fid == id)
            .map(|(_, f)| f)
    }

    fn require_field(&mut self, id: &str) -> Result<&mut TextField> {
        let form = self.name.clone();
        self.field_mut(id)
            .ok_or_else(|| anyhow!("form '{}' has no field '{}'", form, id))
    }

    /// Set a field's text directly, as pasting a saved value would
    pub fn set_text(&mut self, id: &str, text: &str) -> Result<()> {
        self.require_field(id)?.set_text(text);
        Ok(())
    }

    /// Type into a field keystroke by keystroke, returning the number admitted
    pub fn type_into(&mut self, id: &str, text: &str) -> Result<usize> {
        Ok(self.require_field(id)?.type_str(text))
    }

    /// Validate every field and aggregate the verdicts.
    ///
    /// All fields are checked, so each one updates its own error state.
    pub fn submit(&mut self) -> FormOutcome {
        let reports: Vec<FieldReport> = self
            .fields
            .iter_mut()
            .map(|(id, field)| {
                let verdict = field.validate();
                let config = field.config();
                FieldReport {
                    id: id.clone(),
                    placeholder: config.placeholder.clone(),
                    display_text: field.display_text(),
                    capitalization: config.capitalization,
                    keyboard: config.keyboard,
                    shown_message: field
                        .error_visible()
                        .then(|| field.error_message().to_string()),
                    verdict,
                }
            })
            .collect();

        let outcome = FormOutcome::new(
            self.name.clone(),
            self.heading().to_string(),
            reports,
        );
        log::debug!(
            "Form '{}' submitted: {}",
            self.name,
            if outcome.success { "valid" } else { "invalid" }
        );
        outcome
    }
}
