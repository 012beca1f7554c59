use super::*;
use crate::html::is_void_tag;

mod attrs;
mod form_controls;
mod query;
mod tree;

pub(crate) use form_controls::{
    is_checkbox_input, is_form_control, is_radio_input, is_submit_control,
};

pub(crate) fn has_class(element: &Element, class_name: &str) -> bool {
    element
        .attrs
        .get("class")
        .is_some_and(|classes| classes.split_whitespace().any(|name| name == class_name))
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn escape_html_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_html_attr(value: &str) -> String {
    escape_html_text(value).replace('"', "&quot;")
}

impl Dom {
    /// Serializes a subtree back to markup. Attributes are sorted so the
    /// output is stable across runs.
    pub(crate) fn dump_node(&self, node_id: NodeId) -> String {
        let mut out = String::new();
        self.push_dump(node_id, &mut out);
        out
    }

    fn push_dump(&self, node_id: NodeId, out: &mut String) {
        stacker::maybe_grow(Self::TRAVERSAL_STACK_RED_ZONE, Self::TRAVERSAL_STACK_SIZE, || {
            match &self.nodes[node_id.0].node_type {
                NodeType::Document => {
                    for child in &self.nodes[node_id.0].children {
                        self.push_dump(*child, out);
                    }
                }
                NodeType::Text(text) => out.push_str(&escape_html_text(text)),
                NodeType::Element(element) => {
                    out.push('<');
                    out.push_str(&element.tag_name);
                    let mut attrs = element.attrs.iter().collect::<Vec<_>>();
                    attrs.sort_by(|(left, _), (right, _)| left.cmp(right));
                    for (key, value) in attrs {
                        out.push(' ');
                        out.push_str(key);
                        out.push_str("=\"");
                        out.push_str(&escape_html_attr(value));
                        out.push('"');
                    }
                    out.push('>');
                    if is_void_tag(&element.tag_name) {
                        return;
                    }
                    for child in &self.nodes[node_id.0].children {
                        self.push_dump(*child, out);
                    }
                    out.push_str("</");
                    out.push_str(&element.tag_name);
                    out.push('>');
                }
            }
        })
    }
}
