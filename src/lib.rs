//! Behaviour layer for the charity donation site.
//!
//! The site is rendered on the server; this crate wires three widgets onto
//! the resulting document:
//!
//! - a custom dropdown that replaces every `<select>` inside a
//!   `.form-group--dropdown` host,
//! - the five-step donation wizard with its summary step,
//! - the confirmation modal guarding destructive admin forms.
//!
//! [`Page`] is the host: it parses the markup, runs the page-load wiring and
//! then accepts user actions the way a browser would deliver them.
//!
//! ```
//! use donation_widgets::{Page, WidgetConfig};
//!
//! let html = r#"
//!   <form action="/donate" method="post">
//!     <div class="form-group--dropdown">
//!       <select name="city"><option value="waw">Warszawa</option><option value="krk">Kraków</option></select>
//!     </div>
//!   </form>
//! "#;
//! let mut page = Page::load(html, WidgetConfig::default())?;
//! page.click(".dropdown li[data-value='krk']")?;
//! page.assert_value(".dropdown input", "krk")?;
//! # Ok::<(), donation_widgets::Error>(())
//! ```

use std::collections::{HashMap, HashSet};

mod config;
mod dom;
mod events;
mod html;
mod page;
mod selector;
mod widgets;


pub use config::{DeleteModalSelectors, DropdownSelectors, StepBounds, WidgetConfig, WizardSelectors};
pub use page::{FormSubmission, Page};
pub use widgets::DonationSummary;

use events::{DomEvent, EventKind, Handler, ListenerStore};
use selector::{
    SelectorAttrCondition, SelectorCombinator, SelectorPart, SelectorPseudoClass, SelectorStep,
    parse_selector_groups,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("html parse error: {0}")]
    HtmlParse(String),
    #[error("unsupported selector: {0}")]
    UnsupportedSelector(String),
    #[error("selector not found: {0}")]
    SelectorNotFound(String),
    #[error("dom operation failed: {0}")]
    DomOperation(String),
    #[error("invalid widget configuration: {0}")]
    Config(String),
    #[error("type mismatch for {selector}: expected {expected}, actual {actual}")]
    TypeMismatch {
        selector: String,
        expected: String,
        actual: String,
    },
    #[error(
        "assertion failed for {selector}: expected {expected}, actual {actual}, snippet {dom_snippet}"
    )]
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
pub(crate) enum NodeType {
    Document,
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) node_type: NodeType,
}

#[derive(Debug, Clone)]
pub(crate) struct Element {
    pub(crate) tag_name: String,
    pub(crate) attrs: HashMap<String, String>,
    pub(crate) value: String,
    pub(crate) checked: bool,
    pub(crate) disabled: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Dom {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: NodeId,
    pub(crate) id_index: HashMap<String, NodeId>,
}

pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> String {
    let mut out = value.chars().take(max_chars).collect::<String>();
    if value.chars().nth(max_chars).is_some() {
        out.push_str("...");
    }
    out
}
