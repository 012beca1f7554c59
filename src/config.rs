use super::*;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// How the wizard treats next/prev clicks that would leave `1..=total_steps`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepBounds {
    /// The step never leaves `1..=total_steps`.
    #[default]
    Clamped,
    /// Plain increment/decrement; step 0 and negative steps are reachable.
    Unbounded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DropdownSelectors {
    /// Native selects to replace.
    pub source: String,
    /// Containers whose open dropdowns are closed by an outside click.
    pub host: String,
    pub root_class: String,
    pub open_class: String,
    pub selected_class: String,
}

impl Default for DropdownSelectors {
    fn default() -> Self {
        Self {
            source: ".form-group--dropdown select".to_string(),
            host: ".form-group--dropdown".to_string(),
            root_class: "dropdown".to_string(),
            open_class: "selecting".to_string(),
            selected_class: "selected".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WizardSelectors {
    pub root: String,
    pub next: String,
    pub prev: String,
    pub counter: String,
    pub instructions: String,
    pub panels: String,
    pub active_class: String,
    /// Container the summary renders into. Unset means the panel of the
    /// last step, `[data-step="<total-steps>"]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub summary_items: String,
    pub summary_text: String,
    pub category_label: String,
    pub institution_title: String,
    pub bags_field: String,
    /// Street, city, zip code, phone, date and hour, in summary order.
    pub pickup_fields: Vec<String>,
    pub comment_field: String,
}

impl Default for WizardSelectors {
    fn default() -> Self {
        Self {
            root: ".form--steps".to_string(),
            next: ".next-step".to_string(),
            prev: ".prev-step".to_string(),
            counter: ".form--steps-counter span".to_string(),
            instructions: ".form--steps-instructions p".to_string(),
            panels: "form > div".to_string(),
            active_class: "active".to_string(),
            summary: None,
            summary_items: "li".to_string(),
            summary_text: ".summary--text".to_string(),
            category_label: ".description".to_string(),
            institution_title: ".title".to_string(),
            bags_field: "quantity".to_string(),
            pickup_fields: [
                "street",
                "city",
                "zipCode",
                "phoneNumber",
                "pickUpDate",
                "pickUpTime",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            comment_field: "pickUpComment".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DeleteModalSelectors {
    pub forms: String,
    pub overlay: String,
    pub content: String,
    pub confirm: String,
    pub cancel: String,
}

impl Default for DeleteModalSelectors {
    fn default() -> Self {
        Self {
            forms: "form.delete-form".to_string(),
            overlay: "#delete-modal".to_string(),
            content: ".modal-content".to_string(),
            confirm: "#confirm-delete".to_string(),
            cancel: "#cancel-delete".to_string(),
        }
    }
}

/// Everything the widgets assume about the page markup.
///
/// Partial TOML documents are merged over [`WidgetConfig::default`]:
///
/// ```toml
/// delete-confirmation = false
/// step-bounds = "unbounded"
///
/// [dropdown]
/// open-class = "is-open"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct WidgetConfig {
    pub dropdown: DropdownSelectors,
    pub wizard: WizardSelectors,
    pub delete_modal: DeleteModalSelectors,
    /// Wire the confirmation modal in front of destructive forms. Pages
    /// without the overlay markup are unaffected either way.
    pub delete_confirmation: bool,
    pub step_bounds: StepBounds,
    pub total_steps: i64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            dropdown: DropdownSelectors::default(),
            wizard: WizardSelectors::default(),
            delete_modal: DeleteModalSelectors::default(),
            delete_confirmation: true,
            step_bounds: StepBounds::default(),
            total_steps: 5,
        }
    }
}

impl WizardSelectors {
    pub fn summary_selector(&self, total_steps: i64) -> String {
        match &self.summary {
            Some(selector) => selector.clone(),
            None => format!("[data-step=\"{total_steps}\"]"),
        }
    }
}

impl WidgetConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(src).map_err(|err| Error::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)
            .map_err(|err| Error::Config(format!("{}: {err}", path.display())))?;
        Self::from_toml_str(&src)
    }

    /// Rejects configurations the widgets cannot work with: unparsable
    /// selectors, empty class names, a wizard without steps.
    pub fn validate(&self) -> Result<()> {
        if self.total_steps < 1 {
            return Err(Error::Config(format!(
                "total-steps must be at least 1, got {}",
                self.total_steps
            )));
        }
        if self.wizard.pickup_fields.len() != 6 {
            return Err(Error::Config(format!(
                "pickup-fields needs 6 names, got {}",
                self.wizard.pickup_fields.len()
            )));
        }

        for (name, class) in [
            ("dropdown.root-class", &self.dropdown.root_class),
            ("dropdown.open-class", &self.dropdown.open_class),
            ("dropdown.selected-class", &self.dropdown.selected_class),
            ("wizard.active-class", &self.wizard.active_class),
        ] {
            if class.trim().is_empty() || class.contains(char::is_whitespace) {
                return Err(Error::Config(format!("{name} is not a class name: {class:?}")));
            }
        }

        let summary = self.wizard.summary_selector(self.total_steps);
        for selector in [
            &self.dropdown.source,
            &self.dropdown.host,
            &self.wizard.root,
            &self.wizard.next,
            &self.wizard.prev,
            &self.wizard.counter,
            &self.wizard.instructions,
            &self.wizard.panels,
            &summary,
            &self.wizard.summary_items,
            &self.wizard.summary_text,
            &self.wizard.category_label,
            &self.wizard.institution_title,
            &self.delete_modal.forms,
            &self.delete_modal.overlay,
            &self.delete_modal.content,
            &self.delete_modal.confirm,
            &self.delete_modal.cancel,
        ] {
            parse_selector_groups(selector)
                .map_err(|err| Error::Config(format!("{selector:?}: {err}")))?;
        }
        Ok(())
    }
}
