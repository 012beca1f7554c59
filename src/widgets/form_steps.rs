use super::*;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SlideKind {
    Instruction,
    Panel,
}

/// One element that is shown only while the wizard is on its step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Slide {
    pub(crate) node: NodeId,
    /// Parsed `data-step`; slides without one are never active.
    pub(crate) step: Option<i64>,
    pub(crate) kind: SlideKind,
}

/// The multi-step donation form.
#[derive(Debug, Clone)]
pub(crate) struct FormSteps {
    pub(crate) root: NodeId,
    pub(crate) current_step: i64,
    pub(crate) total_steps: i64,
    pub(crate) bounds: StepBounds,
    pub(crate) counter: Option<NodeId>,
    pub(crate) instructions_block: Option<NodeId>,
    pub(crate) slides: Vec<Slide>,
    pub(crate) next_controls: Vec<NodeId>,
    pub(crate) prev_controls: Vec<NodeId>,
    pub(crate) summary: DonationSummary,
}

impl FormSteps {
    pub(crate) fn bind(dom: &Dom, root: NodeId, config: &WidgetConfig) -> Result<Self> {
        let selectors = &config.wizard;
        let instructions = dom.query_selector_all_from(root, &selectors.instructions)?;
        let panels = dom.query_selector_all_from(root, &selectors.panels)?;

        let slide = |node: NodeId, kind: SlideKind| Slide {
            node,
            step: dom
                .dataset_get(node, "step")
                .and_then(|step| step.trim().parse().ok()),
            kind,
        };
        let slides = instructions
            .iter()
            .map(|node| slide(*node, SlideKind::Instruction))
            .chain(panels.iter().map(|node| slide(*node, SlideKind::Panel)))
            .collect::<Vec<_>>();

        // The `p` slides sit in a list inside the instructions block.
        let instructions_block = instructions
            .first()
            .and_then(|first| dom.parent(*first))
            .and_then(|list| dom.parent(list));

        let wizard = Self {
            root,
            current_step: 1,
            total_steps: config.total_steps,
            bounds: config.step_bounds,
            counter: dom.query_selector_from(root, &selectors.counter)?,
            instructions_block,
            slides,
            next_controls: dom.query_selector_all_from(root, &selectors.next)?,
            prev_controls: dom.query_selector_all_from(root, &selectors.prev)?,
            summary: DonationSummary::default(),
        };
        debug!(
            slides = wizard.slides.len(),
            next = wizard.next_controls.len(),
            prev = wizard.prev_controls.len(),
            "wizard bound"
        );
        Ok(wizard)
    }

    pub(crate) fn next(&mut self, dom: &mut Dom, config: &WizardSelectors) -> Result<()> {
        self.move_by(1, dom, config)
    }

    pub(crate) fn prev(&mut self, dom: &mut Dom, config: &WizardSelectors) -> Result<()> {
        self.move_by(-1, dom, config)
    }

    fn move_by(&mut self, delta: i64, dom: &mut Dom, config: &WizardSelectors) -> Result<()> {
        let target = self.current_step + delta;
        self.current_step = match self.bounds {
            StepBounds::Clamped => target.clamp(1, self.total_steps),
            StepBounds::Unbounded => target,
        };
        debug!(step = self.current_step, delta, "wizard step changed");
        self.render(dom, config)
    }

    pub(crate) fn panel_for_step(&self, step: i64) -> Option<NodeId> {
        self.slides
            .iter()
            .find(|slide| slide.kind == SlideKind::Panel && slide.step == Some(step))
            .map(|slide| slide.node)
    }

    /// Brings the page in line with `current_step` and rebuilds the summary.
    pub(crate) fn render(&mut self, dom: &mut Dom, config: &WizardSelectors) -> Result<()> {
        if let Some(counter) = self.counter {
            dom.set_text_content(counter, &self.current_step.to_string())?;
        }

        for slide in &self.slides {
            dom.class_remove(slide.node, &config.active_class)?;
            if slide.step == Some(self.current_step) {
                dom.class_add(slide.node, &config.active_class)?;
            }
        }

        let finished = self.current_step >= self.total_steps;
        if let Some(block) = self.instructions_block {
            dom.set_hidden(block, finished)?;
        }
        if let Some(counter_block) = self.counter.and_then(|counter| dom.parent(counter)) {
            dom.set_hidden(counter_block, finished)?;
        }

        self.summary = DonationSummary::collect(dom, self, config)?;
        match self.summary_container(dom, config)? {
            Some(container) => self.summary.render(dom, container, config)?,
            None => debug!("no summary container; summary not rendered"),
        }
        Ok(())
    }

    fn summary_container(&self, dom: &Dom, config: &WizardSelectors) -> Result<Option<NodeId>> {
        let selector = config.summary_selector(self.total_steps);
        match dom.query_selector_from(self.root, &selector)? {
            Some(container) => Ok(Some(container)),
            None => dom.query_selector(&selector),
        }
    }
}
