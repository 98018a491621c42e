//! Form collector
//!
//! [`TemplateForm`] holds raw, user-entered field values. `collect` turns
//! them into a [`TemplateDraft`] and never fails.

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use stk_catalog::PrebuiltTemplate;
use stk_model::{Attribute, TemplateDraft};

/// One editable attribute row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeRow {
    /// Attribute name as typed
    pub name: String,

    /// Catalog type name as typed
    #[serde(rename = "type")]
    pub data_type: String,

    /// Free text, may be empty
    pub description: String,
}

impl AttributeRow {
    /// Row with the given values
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            description: description.into(),
        }
    }

    /// Trimmed attribute, or `None` when name or type is blank
    #[must_use]
    pub fn to_attribute(&self) -> Option<Attribute> {
        let name = self.name.trim();
        let data_type = self.data_type.trim();
        if name.is_empty() || data_type.is_empty() {
            return None;
        }
        Some(Attribute::new(name, data_type).with_description(self.description.trim()))
    }
}

impl From<&Attribute> for AttributeRow {
    fn from(attr: &Attribute) -> Self {
        Self::new(&attr.name, &attr.data_type, &attr.description)
    }
}

/// Raw template form state
///
/// Deserializing a partial form fills missing fields with empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateForm {
    /// Template name field
    pub name: String,

    /// Category field
    pub category: String,

    /// Description field
    pub description: String,

    rows: Vec<AttributeRow>,
}

impl TemplateForm {
    /// Create empty form
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect a draft from the current field values
    ///
    /// Values are trimmed; rows missing a name or type are skipped.
    #[must_use]
    pub fn collect(&self) -> TemplateDraft {
        TemplateDraft {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            description: self.description.trim().to_string(),
            attributes: self
                .rows
                .iter()
                .filter_map(AttributeRow::to_attribute)
                .collect(),
        }
    }

    /// Attribute rows as entered
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[AttributeRow] {
        &self.rows
    }

    /// Append a blank row, returning its index
    pub fn add_row(&mut self) -> usize {
        self.push_row(AttributeRow::default())
    }

    /// Append a filled row, returning its index
    pub fn push_row(&mut self, row: AttributeRow) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Overwrite row `index`
    ///
    /// # Errors
    /// `FormError::NoSuchRow` if `index` is out of range
    pub fn update_row(&mut self, index: usize, row: AttributeRow) -> Result<(), FormError> {
        let len = self.rows.len();
        let slot = self
            .rows
            .get_mut(index)
            .ok_or(FormError::NoSuchRow { index, len })?;
        *slot = row;
        Ok(())
    }

    /// Remove row `index`
    ///
    /// # Errors
    /// `FormError::NoSuchRow` if `index` is out of range
    pub fn remove_row(&mut self, index: usize) -> Result<AttributeRow, FormError> {
        if index >= self.rows.len() {
            return Err(FormError::NoSuchRow {
                index,
                len: self.rows.len(),
            });
        }
        Ok(self.rows.remove(index))
    }

    /// Replace the form with an existing draft
    pub fn load_draft(&mut self, draft: &TemplateDraft) {
        self.name.clone_from(&draft.name);
        self.category.clone_from(&draft.category);
        self.description.clone_from(&draft.description);
        self.rows = draft.attributes.iter().map(AttributeRow::from).collect();
    }

    /// Replace the form with a pre-built template
    pub fn load_prebuilt(&mut self, template: &PrebuiltTemplate) {
        self.load_draft(&template.to_draft());
    }

    /// Clear every field and row
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stk_catalog::find_prebuilt;

    #[test]
    fn collect_trims_and_skips_incomplete_rows() {
        let mut form = TemplateForm::new();
        form.name = "  PumpA ".into();
        form.push_row(AttributeRow::new(" Flow ", " AI_REAL ", " Flow rate "));
        form.push_row(AttributeRow::new("NoType", "  ", "skipped"));
        form.push_row(AttributeRow::new("", "DI_BOOL", "skipped"));
        form.add_row();

        let draft = form.collect();
        assert_eq!(draft.name, "PumpA");
        assert_eq!(draft.category, "");
        assert_eq!(
            draft.attributes,
            vec![Attribute::new("Flow", "AI_REAL").with_description("Flow rate")]
        );
        assert_eq!(form.rows().len(), 4);
    }

    #[test]
    fn partial_form_json_defaults_to_empty_strings() {
        let form: TemplateForm =
            serde_json::from_str(r#"{"name":"PumpA","rows":[{"name":"Flow","type":"AI_REAL"}]}"#)
                .unwrap();
        let draft = form.collect();
        assert_eq!(draft.description, "");
        assert_eq!(draft.attributes[0].description, "");
    }

    #[test]
    fn row_editing() {
        let mut form = TemplateForm::new();
        let index = form.add_row();
        form.update_row(index, AttributeRow::new("Flow", "AI_REAL", ""))
            .unwrap();
        assert_eq!(form.collect().attributes.len(), 1);

        assert_eq!(
            form.update_row(5, AttributeRow::default()),
            Err(FormError::NoSuchRow { index: 5, len: 1 })
        );
        assert_eq!(form.remove_row(0).unwrap().name, "Flow");
        assert!(form.remove_row(0).is_err());
    }

    #[test]
    fn load_prebuilt_then_collect_matches_template() {
        let template = find_prebuilt("valve").unwrap();
        let mut form = TemplateForm::new();
        form.load_prebuilt(template);

        assert_eq!(form.collect(), template.to_draft());

        form.reset();
        assert_eq!(form, TemplateForm::default());
    }
}
