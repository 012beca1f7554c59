use super::*;

use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SelectOption {
    pub(crate) value: String,
    pub(crate) label: String,
}

/// Custom dropdown standing in for one native `<select>`.
///
/// Rendered markup:
///
/// ```html
/// <div class="dropdown">
///   <div>First label</div>
///   <ul><li data-value="a" class="selected">First label</li>...</ul>
///   <input type="text" name="field" value="a">
/// </div>
/// ```
#[derive(Debug, Clone)]
pub(crate) struct FormSelect {
    pub(crate) field_name: String,
    pub(crate) options: Vec<SelectOption>,
    pub(crate) selected: usize,
    pub(crate) root: NodeId,
    pub(crate) current: NodeId,
    pub(crate) rows: Vec<NodeId>,
    pub(crate) input: NodeId,
}

impl FormSelect {
    /// Replaces `source` with a dropdown. Returns `None` and leaves the page
    /// untouched when the select has nothing to offer or nowhere to go.
    pub(crate) fn build(
        dom: &mut Dom,
        source: NodeId,
        config: &DropdownSelectors,
    ) -> Result<Option<Self>> {
        let field_name = dom.attr(source, "name").unwrap_or_default();
        let options = read_options(dom, source)?;
        if options.is_empty() {
            warn!(field = %field_name, "select has no options; dropdown not built");
            return Ok(None);
        }
        let Some(parent) = dom.parent(source) else {
            warn!(field = %field_name, "select is detached; dropdown not built");
            return Ok(None);
        };

        let root = dom.create_detached_element("div");
        dom.class_add(root, &config.root_class)?;

        let current = dom.create_detached_element("div");
        dom.set_text_content(current, &options[0].label)?;
        dom.append_child(root, current)?;

        let list = dom.create_detached_element("ul");
        let mut rows = Vec::with_capacity(options.len());
        for (index, option) in options.iter().enumerate() {
            let row = dom.create_detached_element("li");
            dom.dataset_set(row, "value", &option.value)?;
            dom.set_text_content(row, &option.label)?;
            if index == 0 {
                dom.class_add(row, &config.selected_class)?;
            }
            dom.append_child(list, row)?;
            rows.push(row);
        }
        dom.append_child(root, list)?;

        let input = dom.create_detached_element("input");
        dom.set_attr(input, "type", "text")?;
        dom.set_attr(input, "name", &field_name)?;
        dom.set_attr(input, "value", &options[0].value)?;
        dom.append_child(root, input)?;

        dom.append_child(parent, root)?;
        dom.remove_node(source)?;

        debug!(field = %field_name, options = options.len(), "dropdown built");
        Ok(Some(Self {
            field_name,
            options,
            selected: 0,
            root,
            current,
            rows,
            input,
        }))
    }

    /// Any click inside the dropdown toggles it open or closed; a click on a
    /// row also makes that row the selection.
    pub(crate) fn handle_click(
        &mut self,
        dom: &mut Dom,
        target: NodeId,
        config: &DropdownSelectors,
    ) -> Result<()> {
        let open = dom.class_toggle(self.root, &config.open_class)?;

        let Some(index) = self
            .rows
            .iter()
            .position(|row| dom.is_inclusive_descendant_of(target, *row))
        else {
            debug!(field = %self.field_name, open, "dropdown toggled");
            return Ok(());
        };
        self.choose(dom, index, config)?;
        debug!(
            field = %self.field_name,
            open,
            value = %self.options[index].value,
            "dropdown option chosen"
        );
        Ok(())
    }

    fn choose(&mut self, dom: &mut Dom, index: usize, config: &DropdownSelectors) -> Result<()> {
        let option = &self.options[index];
        dom.set_value(self.input, &option.value)?;
        dom.set_text_content(self.current, &option.label)?;
        dom.class_remove(self.rows[self.selected], &config.selected_class)?;
        dom.class_add(self.rows[index], &config.selected_class)?;
        self.selected = index;
        Ok(())
    }

    pub(crate) fn is_open(&self, dom: &Dom, config: &DropdownSelectors) -> bool {
        dom.class_contains(self.root, &config.open_class)
    }
}

fn read_options(dom: &Dom, source: NodeId) -> Result<Vec<SelectOption>> {
    dom.select_options(source)
        .into_iter()
        .map(|option| {
            Ok(SelectOption {
                value: dom.value(option)?,
                label: collapse_whitespace(&dom.text_content(option)),
            })
        })
        .collect()
}
