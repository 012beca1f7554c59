use super::*;

use tracing::debug;

/// Confirmation overlay standing between a destructive form and the server.
#[derive(Debug, Clone)]
pub(crate) struct DeleteModal {
    pub(crate) overlay: NodeId,
    pub(crate) forms: Vec<NodeId>,
    pub(crate) confirm: Option<NodeId>,
    pub(crate) cancel: Option<NodeId>,
    /// The form waiting for confirmation. A second intercepted submit
    /// replaces the first.
    pending: Option<NodeId>,
}

impl DeleteModal {
    /// Returns `None` when the page has no overlay, in which case destructive
    /// forms submit normally.
    pub(crate) fn bind(dom: &Dom, config: &DeleteModalSelectors) -> Result<Option<Self>> {
        let Some(overlay) = dom.query_selector(&config.overlay)? else {
            debug!("no delete overlay on page");
            return Ok(None);
        };
        if dom.query_selector_from(overlay, &config.content)?.is_none() {
            debug!("delete overlay has no content element");
        }
        let modal = Self {
            overlay,
            forms: dom.query_selector_all(&config.forms)?,
            confirm: dom.query_selector(&config.confirm)?,
            cancel: dom.query_selector(&config.cancel)?,
            pending: None,
        };
        debug!(forms = modal.forms.len(), "delete modal bound");
        Ok(Some(modal))
    }

    pub(crate) fn intercept(&mut self, dom: &mut Dom, form: NodeId) -> Result<()> {
        if let Some(previous) = self.pending.replace(form) {
            debug!(?previous, ?form, "pending deletion replaced");
        }
        dom.style_set(self.overlay, "display", "block")
    }

    /// Hands back the pending form, if any, and closes the overlay.
    pub(crate) fn confirm(&mut self, dom: &mut Dom) -> Result<Option<NodeId>> {
        let form = self.pending.take();
        self.hide(dom)?;
        Ok(form)
    }

    pub(crate) fn dismiss(&mut self, dom: &mut Dom) -> Result<()> {
        self.pending = None;
        self.hide(dom)
    }

    fn hide(&self, dom: &mut Dom) -> Result<()> {
        dom.style_set(self.overlay, "display", "none")
    }

    pub(crate) fn pending(&self) -> Option<NodeId> {
        self.pending
    }

    pub(crate) fn is_visible(&self, dom: &Dom) -> bool {
        dom.style_get(self.overlay, "display") == "block"
    }
}
