use super::*;

impl Page {
    pub(crate) fn select_one(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    pub(crate) fn node_snippet(&self, node_id: NodeId) -> String {
        truncate_chars(&self.dom.dump_node(node_id), 200)
    }

    fn assertion_failed(
        &self,
        selector: &str,
        target: NodeId,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Error {
        Error::AssertionFailed {
            selector: selector.to_string(),
            expected: expected.into(),
            actual: actual.into(),
            dom_snippet: self.node_snippet(target),
        }
    }

    /// Rendered text with whitespace collapsed.
    pub fn text(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(stacker::grow(32 * 1024 * 1024, || self.dom.inner_text(target)))
    }

    pub fn value(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.dom.value(target)
    }

    pub fn checked(&self, selector: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        self.dom.checked(target)
    }

    pub fn attr(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let target = self.select_one(selector)?;
        Ok(self.dom.attr(target, &name.to_ascii_lowercase()))
    }

    pub fn has_class(&self, selector: &str, class_name: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        Ok(self.dom.class_contains(target, class_name))
    }

    /// True when the element or one of its ancestors carries `hidden` or an
    /// inline `display: none`.
    pub fn is_hidden(&self, selector: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        let mut cursor = Some(target);
        while let Some(node) = cursor {
            if self.dom.element(node).is_some()
                && (self.dom.hidden(node) || self.dom.style_get(node, "display") == "none")
            {
                return Ok(true);
            }
            cursor = self.dom.parent(node);
        }
        Ok(false)
    }

    pub fn exists(&self, selector: &str) -> Result<bool> {
        Ok(self.dom.query_selector(selector)?.is_some())
    }

    pub fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.dom.query_selector_all(selector)?.len())
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = stacker::grow(32 * 1024 * 1024, || self.dom.inner_text(target));
        if actual != expected {
            return Err(self.assertion_failed(selector, target, expected, actual));
        }
        Ok(())
    }

    pub fn assert_value(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.value(target)?;
        if actual != expected {
            return Err(self.assertion_failed(selector, target, expected, actual));
        }
        Ok(())
    }

    pub fn assert_checked(&self, selector: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.checked(target)?;
        if actual != expected {
            return Err(self.assertion_failed(
                selector,
                target,
                expected.to_string(),
                actual.to_string(),
            ));
        }
        Ok(())
    }

    pub fn assert_class(&self, selector: &str, class_name: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.class_contains(target, class_name);
        if actual != expected {
            let describe = |present: bool| {
                if present {
                    format!("class {class_name:?}")
                } else {
                    format!("no class {class_name:?}")
                }
            };
            return Err(self.assertion_failed(selector, target, describe(expected), describe(actual)));
        }
        Ok(())
    }

    pub fn assert_hidden(&self, selector: &str, expected: bool) -> Result<()> {
        let actual = self.is_hidden(selector)?;
        if actual != expected {
            let target = self.select_one(selector)?;
            let describe = |hidden: bool| if hidden { "hidden" } else { "visible" };
            return Err(self.assertion_failed(selector, target, describe(expected), describe(actual)));
        }
        Ok(())
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        let _ = self.select_one(selector)?;
        Ok(())
    }
}
