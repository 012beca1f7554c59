use super::*;

impl Dom {
    // Traversals recurse once per nesting level, so deep markup grows the
    // stack in segments instead of overflowing it.
    pub(crate) const TRAVERSAL_STACK_RED_ZONE: usize = 64 * 1024;
    pub(crate) const TRAVERSAL_STACK_SIZE: usize = 32 * 1024 * 1024;

    pub(crate) fn new() -> Self {
        let root = Node {
            parent: None,
            children: Vec::new(),
            node_type: NodeType::Document,
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
            id_index: HashMap::new(),
        }
    }

    fn create_node(&mut self, parent: Option<NodeId>, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent,
            children: Vec::new(),
            node_type,
        });
        if let Some(parent_id) = parent {
            self.nodes[parent_id.0].children.push(id);
        }
        id
    }

    pub(crate) fn create_element(
        &mut self,
        parent: NodeId,
        tag_name: String,
        attrs: HashMap<String, String>,
    ) -> NodeId {
        let value = attrs.get("value").cloned().unwrap_or_default();
        let checked = attrs.contains_key("checked");
        let disabled = attrs.contains_key("disabled");
        let id_attr = attrs.get("id").cloned();
        let element = Element {
            tag_name,
            attrs,
            value,
            checked,
            disabled,
        };
        let id = self.create_node(Some(parent), NodeType::Element(element));
        if let Some(id_attr) = id_attr {
            if self.is_connected(id) {
                self.id_index.entry(id_attr).or_insert(id);
            }
        }
        id
    }

    pub(crate) fn create_detached_element(&mut self, tag_name: &str) -> NodeId {
        let element = Element {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs: HashMap::new(),
            value: String::new(),
            checked: false,
            disabled: false,
        };
        self.create_node(None, NodeType::Element(element))
    }

    pub(crate) fn create_text(&mut self, parent: NodeId, text: String) -> NodeId {
        self.create_node(Some(parent), NodeType::Text(text))
    }

    pub(crate) fn element(&self, node_id: NodeId) -> Option<&Element> {
        match &self.nodes.get(node_id.0)?.node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        match &mut self.nodes.get_mut(node_id.0)?.node_type {
            NodeType::Element(element) => Some(element),
            _ => None,
        }
    }

    pub(crate) fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        self.element(node_id).map(|e| e.tag_name.as_str())
    }

    pub(crate) fn has_tag(&self, node_id: NodeId, tag: &str) -> bool {
        self.tag_name(node_id)
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
    }

    pub(crate) fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes[node_id.0].parent
    }

    pub(crate) fn children(&self, node_id: NodeId) -> &[NodeId] {
        &self.nodes[node_id.0].children
    }

    pub(crate) fn element_children(&self, node_id: NodeId) -> Vec<NodeId> {
        self.children(node_id)
            .iter()
            .copied()
            .filter(|child| self.element(*child).is_some())
            .collect()
    }

    pub(crate) fn previous_element_sibling(&self, node_id: NodeId) -> Option<NodeId> {
        let parent = self.parent(node_id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|child| *child == node_id)?;
        siblings[..pos]
            .iter()
            .rev()
            .copied()
            .find(|sibling| self.element(*sibling).is_some())
    }

    pub(crate) fn is_connected(&self, node_id: NodeId) -> bool {
        node_id == self.root || self.is_descendant_of(node_id, self.root)
    }

    pub(crate) fn is_descendant_of(&self, node_id: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = self.parent(node_id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    pub(crate) fn is_inclusive_descendant_of(&self, node_id: NodeId, ancestor: NodeId) -> bool {
        node_id == ancestor || self.is_descendant_of(node_id, ancestor)
    }

    pub(crate) fn find_ancestor_by_tag(&self, node_id: NodeId, tag: &str) -> Option<NodeId> {
        let mut cursor = self.parent(node_id);
        while let Some(current) = cursor {
            if self.has_tag(current, tag) {
                return Some(current);
            }
            cursor = self.parent(current);
        }
        None
    }

    pub(crate) fn by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    /// Pushes every element below `node_id` in document order, excluding
    /// `node_id` itself.
    pub(crate) fn collect_elements_descendants_dfs(&self, node_id: NodeId, out: &mut Vec<NodeId>) {
        stacker::maybe_grow(Self::TRAVERSAL_STACK_RED_ZONE, Self::TRAVERSAL_STACK_SIZE, || {
            for child in &self.nodes[node_id.0].children {
                if self.element(*child).is_some() {
                    out.push(*child);
                }
                self.collect_elements_descendants_dfs(*child, out);
            }
        })
    }

    pub(crate) fn all_element_nodes(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_elements_descendants_dfs(self.root, &mut out);
        out
    }

    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.element(parent).is_none() && parent != self.root {
            return Err(Error::DomOperation(
                "appendChild target cannot have children".into(),
            ));
        }
        if child == self.root || child == parent || self.is_descendant_of(parent, child) {
            return Err(Error::DomOperation("invalid appendChild node".into()));
        }

        if let Some(old_parent) = self.nodes[child.0].parent {
            self.nodes[old_parent.0].children.retain(|id| *id != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        self.rebuild_id_index();
        Ok(())
    }

    /// Detaches `node_id` from its parent. The node stays in the arena so
    /// ids held by callers remain valid; it is simply no longer connected.
    pub(crate) fn remove_node(&mut self, node_id: NodeId) -> Result<()> {
        if node_id == self.root {
            return Err(Error::DomOperation("cannot remove the document".into()));
        }
        let Some(parent) = self.nodes[node_id.0].parent.take() else {
            return Ok(());
        };
        self.nodes[parent.0].children.retain(|id| *id != node_id);
        self.rebuild_id_index();
        Ok(())
    }

    pub(crate) fn rebuild_id_index(&mut self) {
        let mut index = HashMap::new();
        for node in self.all_element_nodes() {
            if let Some(id) = self.attr(node, "id") {
                if !id.is_empty() {
                    index.entry(id).or_insert(node);
                }
            }
        }
        self.id_index = index;
    }

    pub(crate) fn text_content(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        self.push_text_content(node_id, &mut out);
        out
    }

    fn push_text_content(&self, node_id: NodeId, out: &mut String) {
        stacker::maybe_grow(Self::TRAVERSAL_STACK_RED_ZONE, Self::TRAVERSAL_STACK_SIZE, || {
            match &self.nodes[node_id.0].node_type {
                NodeType::Document | NodeType::Element(_) => {
                    for child in &self.nodes[node_id.0].children {
                        self.push_text_content(*child, out);
                    }
                }
                NodeType::Text(text) => out.push_str(text),
            }
        })
    }

    /// Rendered text approximation: runs of whitespace collapse to a single
    /// space and the ends are trimmed.
    pub(crate) fn inner_text(&self, node_id: NodeId) -> String {
        collapse_whitespace(&self.text_content(node_id))
    }

    pub(crate) fn set_text_content(&mut self, node_id: NodeId, value: &str) -> Result<()> {
        if self.element(node_id).is_none() {
            return Err(Error::DomOperation(
                "textContent target is not an element".into(),
            ));
        }
        let old_children = std::mem::take(&mut self.nodes[node_id.0].children);
        for child in old_children {
            self.nodes[child.0].parent = None;
        }
        if !value.is_empty() {
            self.create_text(node_id, value.to_string());
        }
        self.rebuild_id_index();
        Ok(())
    }
}
