use super::*;

use tracing::trace;

impl Page {
    /// Delivers `kind` to `target` and then to each ancestor up to the
    /// document, running listeners in registration order at every node.
    pub(crate) fn dispatch_event(&mut self, target: NodeId, kind: EventKind) -> Result<DomEvent> {
        let mut path = vec![target];
        let mut cursor = self.dom.parent(target);
        while let Some(node) = cursor {
            path.push(node);
            cursor = self.dom.parent(node);
        }

        let mut event = DomEvent::new(kind, target);
        for node in path {
            let handlers = self.listeners.handlers(node, kind);
            if handlers.is_empty() {
                continue;
            }
            event.current_target = node;
            for handler in handlers {
                trace!(event = event.kind.as_str(), ?node, ?handler, "running listener");
                self.run_handler(handler, &mut event)?;
            }
        }
        Ok(event)
    }

    fn run_handler(&mut self, handler: Handler, event: &mut DomEvent) -> Result<()> {
        match handler {
            Handler::FormSelect { widget } => {
                let Some(select) = self.selects.get_mut(widget) else {
                    return Ok(());
                };
                select.handle_click(&mut self.dom, event.target, &self.config.dropdown)
            }
            Handler::OutsideClick => {
                dismiss_open_dropdowns(&mut self.dom, event.target, &self.config.dropdown)
            }
            Handler::StepNext | Handler::StepPrev => {
                event.prevent_default();
                let Some(wizard) = self.wizard.as_mut() else {
                    return Ok(());
                };
                if handler == Handler::StepNext {
                    wizard.next(&mut self.dom, &self.config.wizard)
                } else {
                    wizard.prev(&mut self.dom, &self.config.wizard)
                }
            }
            Handler::DeleteSubmit => {
                event.prevent_default();
                match self.delete_modal.as_mut() {
                    Some(modal) => modal.intercept(&mut self.dom, event.current_target),
                    None => Ok(()),
                }
            }
            Handler::DeleteConfirm => {
                let form = match self.delete_modal.as_mut() {
                    Some(modal) => modal.confirm(&mut self.dom)?,
                    None => None,
                };
                match form {
                    // Submitted directly: no submit event, so no second interception.
                    Some(form) => self.record_submission(form),
                    None => {
                        debug!("confirm clicked with nothing pending");
                        Ok(())
                    }
                }
            }
            Handler::DeleteCancel => self.dismiss_delete_modal(),
            Handler::DeleteOverlay => {
                // Clicks on the dialog content bubble here too; only the
                // backdrop itself dismisses.
                if event.target != event.current_target {
                    return Ok(());
                }
                self.dismiss_delete_modal()
            }
        }
    }

    fn dismiss_delete_modal(&mut self) -> Result<()> {
        match self.delete_modal.as_mut() {
            Some(modal) => modal.dismiss(&mut self.dom),
            None => Ok(()),
        }
    }
}
