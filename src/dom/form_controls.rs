use super::*;

fn input_type(element: &Element) -> String {
    element
        .attrs
        .get("type")
        .map(|kind| kind.to_ascii_lowercase())
        .unwrap_or_else(|| "text".to_string())
}

pub(crate) fn is_form_control(dom: &Dom, node_id: NodeId) -> bool {
    let Some(element) = dom.element(node_id) else {
        return false;
    };

    ["input", "select", "textarea", "button"]
        .iter()
        .any(|tag| element.tag_name.eq_ignore_ascii_case(tag))
}

pub(crate) fn is_checkbox_input(dom: &Dom, node_id: NodeId) -> bool {
    dom.element(node_id).is_some_and(|element| {
        element.tag_name.eq_ignore_ascii_case("input") && input_type(element) == "checkbox"
    })
}

pub(crate) fn is_radio_input(dom: &Dom, node_id: NodeId) -> bool {
    dom.element(node_id).is_some_and(|element| {
        element.tag_name.eq_ignore_ascii_case("input") && input_type(element) == "radio"
    })
}

pub(crate) fn is_submit_control(dom: &Dom, node_id: NodeId) -> bool {
    let Some(element) = dom.element(node_id) else {
        return false;
    };

    if element.tag_name.eq_ignore_ascii_case("button") {
        return element
            .attrs
            .get("type")
            .map(|kind| kind.eq_ignore_ascii_case("submit"))
            .unwrap_or(true);
    }

    if element.tag_name.eq_ignore_ascii_case("input") {
        return matches!(input_type(element).as_str(), "submit" | "image");
    }

    false
}

fn is_labelable_control(dom: &Dom, node_id: NodeId) -> bool {
    let Some(element) = dom.element(node_id) else {
        return false;
    };
    if element.tag_name.eq_ignore_ascii_case("input") {
        return input_type(element) != "hidden";
    }
    is_form_control(dom, node_id)
}

impl Dom {
    pub(crate) fn value(&self, node_id: NodeId) -> Result<String> {
        let element = self
            .element(node_id)
            .ok_or_else(|| Error::DomOperation("value target is not an element".into()))?;
        if element.tag_name.eq_ignore_ascii_case("option") {
            return Ok(self.option_value(node_id));
        }
        Ok(element.value.clone())
    }

    pub(crate) fn set_value(&mut self, node_id: NodeId, value: &str) -> Result<()> {
        let is_select = self.has_tag(node_id, "select");
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::DomOperation("value target is not an element".into()))?;
        element.value = value.to_string();
        if is_select {
            self.sync_select_options(node_id, value)?;
        }
        Ok(())
    }

    pub(crate) fn checked(&self, node_id: NodeId) -> Result<bool> {
        self.element(node_id)
            .map(|element| element.checked)
            .ok_or_else(|| Error::DomOperation("checked target is not an element".into()))
    }

    /// Checking a radio button unchecks the other radios sharing its name
    /// inside the same form (or the document when it has no form owner).
    pub(crate) fn set_checked(&mut self, node_id: NodeId, checked: bool) -> Result<()> {
        if checked && is_radio_input(self, node_id) {
            let name = self.attr(node_id, "name").unwrap_or_default();
            if !name.is_empty() {
                let scope = self.find_ancestor_by_tag(node_id, "form").unwrap_or(self.root);
                let mut group = Vec::new();
                self.collect_elements_descendants_dfs(scope, &mut group);
                for other in group {
                    if other != node_id
                        && is_radio_input(self, other)
                        && self.attr(other, "name").as_deref() == Some(name.as_str())
                    {
                        if let Some(element) = self.element_mut(other) {
                            element.checked = false;
                        }
                    }
                }
            }
        }

        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::DomOperation("checked target is not an element".into()))?;
        element.checked = checked;
        Ok(())
    }

    fn option_value(&self, option: NodeId) -> String {
        self.attr(option, "value")
            .unwrap_or_else(|| self.inner_text(option))
    }

    pub(crate) fn select_options(&self, select: NodeId) -> Vec<NodeId> {
        let mut descendants = Vec::new();
        self.collect_elements_descendants_dfs(select, &mut descendants);
        descendants
            .into_iter()
            .filter(|node| self.has_tag(*node, "option"))
            .collect()
    }

    fn sync_select_options(&mut self, select: NodeId, value: &str) -> Result<()> {
        let options = self.select_options(select);
        let selected = options
            .iter()
            .copied()
            .find(|option| self.option_value(*option) == value);
        for option in options {
            if Some(option) == selected {
                self.set_attr(option, "selected", "")?;
            } else {
                self.remove_attr(option, "selected")?;
            }
        }
        Ok(())
    }

    /// Seeds runtime values that the parser cannot know while tags are still
    /// open: textarea text and the initial choice of each select.
    pub(crate) fn initialize_form_control_values(&mut self) -> Result<()> {
        for node in self.all_element_nodes() {
            if self.has_tag(node, "textarea") {
                let text = self.text_content(node);
                let element = self.element_mut(node).ok_or_else(|| {
                    Error::DomOperation("textarea target is not an element".into())
                })?;
                element.value = text;
                continue;
            }

            if self.has_tag(node, "select") {
                let options = self.select_options(node);
                let chosen = options
                    .iter()
                    .copied()
                    .find(|option| self.has_attr(*option, "selected"))
                    .or_else(|| options.first().copied());
                let value = chosen
                    .map(|option| self.option_value(option))
                    .unwrap_or_default();
                let element = self
                    .element_mut(node)
                    .ok_or_else(|| Error::DomOperation("select target is not an element".into()))?;
                element.value = value;
            }
        }
        Ok(())
    }

    pub(crate) fn resolve_label_control(&self, label: NodeId) -> Option<NodeId> {
        if !self.has_tag(label, "label") {
            return None;
        }

        if let Some(target_id) = self.attr(label, "for") {
            if let Some(target) = self.by_id(&target_id) {
                if is_labelable_control(self, target) {
                    return Some(target);
                }
            }
        }

        let mut descendants = Vec::new();
        self.collect_elements_descendants_dfs(label, &mut descendants);
        descendants
            .into_iter()
            .find(|candidate| is_labelable_control(self, *candidate))
    }

    pub(crate) fn form_controls(&self, form: NodeId) -> Vec<NodeId> {
        let mut descendants = Vec::new();
        self.collect_elements_descendants_dfs(form, &mut descendants);
        descendants
            .into_iter()
            .filter(|node| is_form_control(self, *node))
            .collect()
    }

    fn is_successful_control(&self, control: NodeId) -> bool {
        let Some(element) = self.element(control) else {
            return false;
        };
        if element.disabled {
            return false;
        }
        if element.attrs.get("name").is_none_or(|name| name.is_empty()) {
            return false;
        }
        if element.tag_name.eq_ignore_ascii_case("button") {
            return false;
        }
        if element.tag_name.eq_ignore_ascii_case("input") {
            let kind = input_type(element);
            if matches!(
                kind.as_str(),
                "button" | "submit" | "reset" | "file" | "image"
            ) {
                return false;
            }
            if kind == "checkbox" || kind == "radio" {
                return element.checked;
            }
        }
        true
    }

    /// Name/value pairs a browser would send for `form`, in document order.
    pub(crate) fn form_data_entries(&self, form: NodeId) -> Result<Vec<(String, String)>> {
        let mut out = Vec::new();
        for control in self.form_controls(form) {
            if !self.is_successful_control(control) {
                continue;
            }
            let name = self.attr(control, "name").unwrap_or_default();
            let value = if is_checkbox_input(self, control) || is_radio_input(self, control) {
                self.attr(control, "value").unwrap_or_else(|| "on".to_string())
            } else {
                self.value(control)?
            };
            out.push((name, value));
        }
        Ok(out)
    }
}
