use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum EventKind {
    Click,
    Submit,
}

impl EventKind {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Submit => "submit",
        }
    }
}

/// A single event travelling from its target up to the document.
#[derive(Debug, Clone)]
pub(crate) struct DomEvent {
    pub(crate) kind: EventKind,
    pub(crate) target: NodeId,
    pub(crate) current_target: NodeId,
    pub(crate) default_prevented: bool,
}

impl DomEvent {
    pub(crate) fn new(kind: EventKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            default_prevented: false,
        }
    }

    pub(crate) fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

/// What a listener does. Every listener the widgets install is one of these,
/// so the page can run them without holding closures over its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handler {
    /// Toggle/choose on the custom dropdown at this index.
    FormSelect { widget: usize },
    /// Document-level dismissal of open dropdowns.
    OutsideClick,
    StepNext,
    StepPrev,
    DeleteSubmit,
    DeleteConfirm,
    DeleteCancel,
    DeleteOverlay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Listener {
    pub(crate) kind: EventKind,
    pub(crate) handler: Handler,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct ListenerStore {
    pub(crate) map: HashMap<NodeId, Vec<Listener>>,
}

impl ListenerStore {
    /// Registering the same handler twice for one node and event is a no-op,
    /// as with `addEventListener` and an identical callback.
    pub(crate) fn add(&mut self, node_id: NodeId, kind: EventKind, handler: Handler) {
        let listeners = self.map.entry(node_id).or_default();
        if listeners
            .iter()
            .any(|existing| existing.kind == kind && existing.handler == handler)
        {
            return;
        }
        listeners.push(Listener { kind, handler });
    }

    pub(crate) fn handlers(&self, node_id: NodeId, kind: EventKind) -> Vec<Handler> {
        self.map
            .get(&node_id)
            .map(|listeners| {
                listeners
                    .iter()
                    .filter(|listener| listener.kind == kind)
                    .map(|listener| listener.handler)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub(crate) fn len(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }
}
