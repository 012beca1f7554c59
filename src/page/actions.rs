use super::*;

impl Page {
    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        stacker::grow(32 * 1024 * 1024, || self.click_node(target))
    }

    pub(crate) fn click_node(&mut self, target: NodeId) -> Result<()> {
        if self.is_disabled(target) {
            return Ok(());
        }

        let event = self.dispatch_event(target, EventKind::Click)?;
        if event.default_prevented {
            return Ok(());
        }
        self.run_click_activation(target)
    }

    fn run_click_activation(&mut self, target: NodeId) -> Result<()> {
        if is_checkbox_input(&self.dom, target) {
            let checked = self.dom.checked(target)?;
            return self.dom.set_checked(target, !checked);
        }

        if is_radio_input(&self.dom, target) {
            return self.dom.set_checked(target, true);
        }

        let submitter = if is_submit_control(&self.dom, target) {
            Some(target)
        } else if !is_form_control(&self.dom, target) {
            self.dom
                .find_ancestor_by_tag(target, "button")
                .filter(|button| is_submit_control(&self.dom, *button))
        } else {
            None
        };
        if let Some(submitter) = submitter {
            if self.is_disabled(submitter) {
                return Ok(());
            }
            if let Some(form) = self.dom.find_ancestor_by_tag(submitter, "form") {
                self.request_form_submit(form)?;
            }
            return Ok(());
        }

        if is_form_control(&self.dom, target) {
            return Ok(());
        }
        let label = if self.dom.has_tag(target, "label") {
            Some(target)
        } else {
            self.dom.find_ancestor_by_tag(target, "label")
        };
        if let Some(control) = label.and_then(|label| self.dom.resolve_label_control(label)) {
            return self.click_node(control);
        }
        Ok(())
    }

    /// Submits the form at `selector`, or the form owning the control at
    /// `selector`, through the normal submit event.
    pub fn submit(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let form = self
            .dom
            .closest(target, "form")?
            .ok_or_else(|| Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "form or form control".into(),
                actual: self.dom.tag_name(target).unwrap_or_default().to_string(),
            })?;
        stacker::grow(32 * 1024 * 1024, || self.request_form_submit(form))
    }

    pub(crate) fn request_form_submit(&mut self, form: NodeId) -> Result<()> {
        let event = self.dispatch_event(form, EventKind::Submit)?;
        if event.default_prevented {
            debug!(?form, "submission prevented");
            return Ok(());
        }
        self.record_submission(form)
    }

    pub(crate) fn record_submission(&mut self, form: NodeId) -> Result<()> {
        let submission = FormSubmission {
            form_id: self.dom.attr(form, "id"),
            action: self.dom.attr(form, "action").unwrap_or_default(),
            method: self
                .dom
                .attr(form, "method")
                .map(|method| method.to_ascii_lowercase())
                .unwrap_or_else(|| "get".to_string()),
            fields: self.dom.form_data_entries(form)?,
        };
        info!(
            action = %submission.action,
            method = %submission.method,
            fields = submission.fields.len(),
            "form submitted"
        );
        self.submissions.push(submission);
        Ok(())
    }

    pub fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let tag = self.dom.tag_name(target).unwrap_or_default().to_ascii_lowercase();
        if tag != "input" && tag != "textarea" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: tag,
            });
        }
        if self.is_disabled(target) {
            return Ok(());
        }
        self.dom.set_value(target, text)
    }

    pub fn set_checked(&mut self, selector: &str, checked: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        if !is_checkbox_input(&self.dom, target) && !is_radio_input(&self.dom, target) {
            let actual = match self.dom.attr(target, "type") {
                Some(kind) => format!("{}[type={kind}]", self.dom.tag_name(target).unwrap_or_default()),
                None => self.dom.tag_name(target).unwrap_or_default().to_string(),
            };
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input[type=checkbox|radio]".into(),
                actual,
            });
        }
        if self.is_disabled(target) {
            return Ok(());
        }
        self.dom.set_checked(target, checked)
    }

    /// Disabled form controls, including those inside a disabled fieldset,
    /// ignore user input.
    pub(crate) fn is_disabled(&self, node: NodeId) -> bool {
        if !is_form_control(&self.dom, node) {
            return false;
        }
        if self.dom.element(node).is_some_and(|element| element.disabled) {
            return true;
        }
        self.dom
            .find_ancestor_by_tag(node, "fieldset")
            .and_then(|fieldset| self.dom.element(fieldset))
            .is_some_and(|fieldset| fieldset.disabled)
    }
}
