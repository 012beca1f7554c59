use super::*;

fn class_tokens(class_attr: Option<&str>) -> Vec<String> {
    class_attr
        .map(|value| value.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}

fn set_class_attr(element: &mut Element, classes: &[String]) {
    element.attrs.insert("class".to_string(), classes.join(" "));
}

fn dataset_key_to_attr_name(key: &str) -> String {
    let mut out = String::from("data-");
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn parse_style_declarations(style_attr: Option<&str>) -> Vec<(String, String)> {
    let Some(raw) = style_attr else {
        return Vec::new();
    };
    raw.split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim().to_ascii_lowercase();
            if name.is_empty() {
                return None;
            }
            Some((name, value.trim().to_string()))
        })
        .collect()
}

fn serialize_style_declarations(decls: &[(String, String)]) -> String {
    decls
        .iter()
        .map(|(name, value)| format!("{name}: {value};"))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Dom {
    pub(crate) fn attr(&self, node_id: NodeId, name: &str) -> Option<String> {
        self.element(node_id)
            .and_then(|e| e.attrs.get(name).cloned())
    }

    pub(crate) fn has_attr(&self, node_id: NodeId, name: &str) -> bool {
        self.element(node_id)
            .is_some_and(|e| e.attrs.contains_key(&name.to_ascii_lowercase()))
    }

    pub(crate) fn set_attr(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let connected = self.is_connected(node_id);
        let lowered = name.to_ascii_lowercase();
        let old_id = {
            let element = self.element_mut(node_id).ok_or_else(|| {
                Error::DomOperation("setAttribute target is not an element".into())
            })?;
            let old_id = element.attrs.get("id").cloned();
            element.attrs.insert(lowered.clone(), value.to_string());
            match lowered.as_str() {
                "value" => element.value = value.to_string(),
                "checked" => element.checked = true,
                "disabled" => element.disabled = true,
                _ => {}
            }
            old_id
        };

        if lowered == "id" && connected {
            if let Some(old) = old_id {
                self.id_index.remove(&old);
            }
            if !value.is_empty() {
                self.id_index.insert(value.to_string(), node_id);
            }
        }
        Ok(())
    }

    pub(crate) fn remove_attr(&mut self, node_id: NodeId, name: &str) -> Result<()> {
        let lowered = name.to_ascii_lowercase();
        let removed = {
            let element = self.element_mut(node_id).ok_or_else(|| {
                Error::DomOperation("removeAttribute target is not an element".into())
            })?;
            let removed = element.attrs.remove(&lowered);
            match lowered.as_str() {
                "value" => element.value.clear(),
                "checked" => element.checked = false,
                "disabled" => element.disabled = false,
                _ => {}
            }
            removed
        };

        if lowered == "id" {
            if let Some(old) = removed {
                self.id_index.remove(&old);
            }
        }
        Ok(())
    }

    pub(crate) fn class_contains(&self, node_id: NodeId, class_name: &str) -> bool {
        self.element(node_id)
            .is_some_and(|element| has_class(element, class_name))
    }

    pub(crate) fn class_add(&mut self, node_id: NodeId, class_name: &str) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::DomOperation("classList target is not an element".into()))?;
        let mut classes = class_tokens(element.attrs.get("class").map(String::as_str));
        if !classes.iter().any(|name| name == class_name) {
            classes.push(class_name.to_string());
        }
        set_class_attr(element, &classes);
        Ok(())
    }

    pub(crate) fn class_remove(&mut self, node_id: NodeId, class_name: &str) -> Result<()> {
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::DomOperation("classList target is not an element".into()))?;
        let mut classes = class_tokens(element.attrs.get("class").map(String::as_str));
        classes.retain(|name| name != class_name);
        set_class_attr(element, &classes);
        Ok(())
    }

    pub(crate) fn class_toggle(&mut self, node_id: NodeId, class_name: &str) -> Result<bool> {
        if self.class_contains(node_id, class_name) {
            self.class_remove(node_id, class_name)?;
            Ok(false)
        } else {
            self.class_add(node_id, class_name)?;
            Ok(true)
        }
    }

    pub(crate) fn dataset_get(&self, node_id: NodeId, key: &str) -> Option<String> {
        self.attr(node_id, &dataset_key_to_attr_name(key))
    }

    pub(crate) fn dataset_set(&mut self, node_id: NodeId, key: &str, value: &str) -> Result<()> {
        self.set_attr(node_id, &dataset_key_to_attr_name(key), value)
    }

    pub(crate) fn style_get(&self, node_id: NodeId, name: &str) -> String {
        let name = name.to_ascii_lowercase();
        parse_style_declarations(self.attr(node_id, "style").as_deref())
            .into_iter()
            .find(|(prop, _)| *prop == name)
            .map(|(_, value)| value)
            .unwrap_or_default()
    }

    pub(crate) fn style_set(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let name = name.to_ascii_lowercase();
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::DomOperation("style target is not an element".into()))?;

        let mut decls = parse_style_declarations(element.attrs.get("style").map(String::as_str));
        if let Some(pos) = decls.iter().position(|(prop, _)| *prop == name) {
            if value.is_empty() {
                decls.remove(pos);
            } else {
                decls[pos].1 = value.to_string();
            }
        } else if !value.is_empty() {
            decls.push((name, value.to_string()));
        }
        element
            .attrs
            .insert("style".to_string(), serialize_style_declarations(&decls));
        Ok(())
    }

    pub(crate) fn hidden(&self, node_id: NodeId) -> bool {
        self.has_attr(node_id, "hidden")
    }

    pub(crate) fn set_hidden(&mut self, node_id: NodeId, hidden: bool) -> Result<()> {
        if hidden {
            self.set_attr(node_id, "hidden", "")
        } else {
            self.remove_attr(node_id, "hidden")
        }
    }
}
