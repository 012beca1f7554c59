use super::*;
use crate::dom::{is_checkbox_input, is_form_control, is_radio_input, is_submit_control};
use crate::html::parse_html;
use crate::widgets::{DeleteModal, FormSelect, FormSteps, dismiss_open_dropdowns};

use tracing::{debug, info};

mod actions;
mod assertions;
mod dispatch;

/// A form submission the server would have received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    /// `id` attribute of the submitted form, if it has one.
    pub form_id: Option<String>,
    pub action: String,
    /// Lowercased; `get` when the form does not say.
    pub method: String,
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// One loaded page with every widget wired, driven by simulated user input.
#[derive(Debug, Clone)]
pub struct Page {
    pub(crate) dom: Dom,
    config: WidgetConfig,
    pub(crate) listeners: ListenerStore,
    pub(crate) selects: Vec<FormSelect>,
    pub(crate) wizard: Option<FormSteps>,
    pub(crate) delete_modal: Option<DeleteModal>,
    submissions: Vec<FormSubmission>,
}

impl Page {
    /// Parses `html` and runs the page-load wiring. Widgets whose markup is
    /// absent are simply not installed.
    pub fn load(html: &str, config: WidgetConfig) -> Result<Self> {
        stacker::grow(32 * 1024 * 1024, || Self::load_impl(html, config))
    }

    fn load_impl(html: &str, config: WidgetConfig) -> Result<Self> {
        config.validate()?;
        let dom = parse_html(html)?;
        let mut page = Self {
            dom,
            config,
            listeners: ListenerStore::default(),
            selects: Vec::new(),
            wizard: None,
            delete_modal: None,
            submissions: Vec::new(),
        };
        page.wire()?;
        Ok(page)
    }

    fn wire(&mut self) -> Result<()> {
        self.wire_selects()?;
        self.listeners
            .add(self.dom.root, EventKind::Click, Handler::OutsideClick);
        self.wire_wizard()?;
        self.wire_delete_modal()?;
        info!(
            dropdowns = self.selects.len(),
            wizard = self.wizard.is_some(),
            delete_modal = self.delete_modal.is_some(),
            listeners = self.listeners.len(),
            "page wired"
        );
        Ok(())
    }

    fn wire_selects(&mut self) -> Result<()> {
        for source in self.dom.query_selector_all(&self.config.dropdown.source)? {
            let Some(widget) = FormSelect::build(&mut self.dom, source, &self.config.dropdown)?
            else {
                continue;
            };
            self.listeners.add(
                widget.root,
                EventKind::Click,
                Handler::FormSelect {
                    widget: self.selects.len(),
                },
            );
            self.selects.push(widget);
        }
        Ok(())
    }

    fn wire_wizard(&mut self) -> Result<()> {
        let Some(root) = self.dom.query_selector(&self.config.wizard.root)? else {
            debug!(selector = %self.config.wizard.root, "no wizard on page");
            return Ok(());
        };
        let mut wizard = FormSteps::bind(&self.dom, root, &self.config)?;
        for control in &wizard.next_controls {
            self.listeners
                .add(*control, EventKind::Click, Handler::StepNext);
        }
        for control in &wizard.prev_controls {
            self.listeners
                .add(*control, EventKind::Click, Handler::StepPrev);
        }
        wizard.render(&mut self.dom, &self.config.wizard)?;
        self.wizard = Some(wizard);
        Ok(())
    }

    fn wire_delete_modal(&mut self) -> Result<()> {
        if !self.config.delete_confirmation {
            debug!("delete confirmation disabled");
            return Ok(());
        }
        let Some(modal) = DeleteModal::bind(&self.dom, &self.config.delete_modal)? else {
            return Ok(());
        };
        for form in &modal.forms {
            self.listeners
                .add(*form, EventKind::Submit, Handler::DeleteSubmit);
        }
        if let Some(confirm) = modal.confirm {
            self.listeners
                .add(confirm, EventKind::Click, Handler::DeleteConfirm);
        }
        if let Some(cancel) = modal.cancel {
            self.listeners
                .add(cancel, EventKind::Click, Handler::DeleteCancel);
        }
        self.listeners
            .add(modal.overlay, EventKind::Click, Handler::DeleteOverlay);
        self.delete_modal = Some(modal);
        Ok(())
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn submissions(&self) -> &[FormSubmission] {
        &self.submissions
    }

    pub fn take_submissions(&mut self) -> Vec<FormSubmission> {
        std::mem::take(&mut self.submissions)
    }

    /// Value the custom dropdown's input would submit under `field`.
    pub fn dropdown_value(&self, field: &str) -> Option<&str> {
        let select = self.selects.iter().find(|select| select.field_name == field)?;
        self.dom
            .element(select.input)
            .map(|element| element.value.as_str())
    }

    /// Number of dropdowns currently showing their option list.
    pub fn open_dropdowns(&self) -> usize {
        self.selects
            .iter()
            .filter(|select| select.is_open(&self.dom, &self.config.dropdown))
            .count()
    }

    /// Current wizard step, or `None` when the page has no wizard.
    pub fn wizard_step(&self) -> Option<i64> {
        self.wizard.as_ref().map(|wizard| wizard.current_step)
    }

    /// Summary computed by the latest wizard render.
    pub fn summary(&self) -> Option<&DonationSummary> {
        self.wizard.as_ref().map(|wizard| &wizard.summary)
    }

    pub fn has_pending_deletion(&self) -> bool {
        self.delete_modal
            .as_ref()
            .is_some_and(|modal| modal.pending().is_some())
    }

    /// `action` of the form waiting for confirmation.
    pub fn pending_deletion_action(&self) -> Option<String> {
        let form = self.delete_modal.as_ref()?.pending()?;
        Some(self.dom.attr(form, "action").unwrap_or_default())
    }

    pub fn modal_visible(&self) -> bool {
        self.delete_modal
            .as_ref()
            .is_some_and(|modal| modal.is_visible(&self.dom))
    }

    /// Serialized markup of the whole document.
    pub fn dump(&self) -> String {
        stacker::grow(32 * 1024 * 1024, || self.dom.dump_node(self.dom.root))
    }
}
