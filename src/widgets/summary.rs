use super::*;

/// Read-only projection of what the donor entered on steps 1 to 4.
///
/// Rebuilt from the form controls on every wizard render and never edited in
/// place, so it can't drift from the inputs it mirrors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonationSummary {
    pub categories: Vec<String>,
    pub bags: String,
    pub institution: String,
    pub street: String,
    pub city: String,
    pub zip_code: String,
    pub phone: String,
    pub date: String,
    pub hour: String,
    pub comment: String,
}

impl DonationSummary {
    /// `"3 worki z kategorii: ubrania, zabawki"`
    pub fn bags_sentence(&self) -> String {
        format!(
            "{} worki z kategorii: {}",
            self.bags,
            self.categories.join(", ")
        )
    }

    /// `"Dla organizacji Fundacja X"`
    pub fn institution_sentence(&self) -> String {
        format!("Dla organizacji {}", self.institution)
    }

    /// Values for the nine summary slots, in display order.
    pub fn slots(&self) -> [String; 9] {
        [
            self.bags_sentence(),
            self.institution_sentence(),
            self.street.clone(),
            self.city.clone(),
            self.zip_code.clone(),
            self.phone.clone(),
            self.date.clone(),
            self.hour.clone(),
            self.comment.clone(),
        ]
    }

    pub(crate) fn collect(dom: &Dom, wizard: &FormSteps, config: &WizardSelectors) -> Result<Self> {
        let mut summary = Self::default();

        if let Some(panel) = wizard.panel_for_step(1) {
            for input in checked_inputs(dom, panel)? {
                summary
                    .categories
                    .push(category_label(dom, input, &config.category_label)?);
            }
        }

        if let Some(panel) = wizard.panel_for_step(2) {
            let bags = match named_control(dom, panel, &config.bags_field) {
                Some(control) => Some(control),
                None => dom.query_selector_from(panel, "input")?,
            };
            if let Some(bags) = bags {
                summary.bags = dom.value(bags)?;
            }
        }

        if let Some(panel) = wizard.panel_for_step(3) {
            if let Some(input) = checked_inputs(dom, panel)?.last() {
                summary.institution = institution_title(dom, *input, &config.institution_title)?;
            }
        }

        if let Some(panel) = wizard.panel_for_step(4) {
            let positional = dom.query_selector_all_from(panel, "input")?;
            let mut pickup = Vec::with_capacity(config.pickup_fields.len());
            for (index, name) in config.pickup_fields.iter().enumerate() {
                let control = named_control(dom, panel, name).or(positional.get(index).copied());
                pickup.push(match control {
                    Some(control) => dom.value(control)?,
                    None => String::new(),
                });
            }
            if let [street, city, zip_code, phone, date, hour] = pickup.as_slice() {
                summary.street = street.clone();
                summary.city = city.clone();
                summary.zip_code = zip_code.clone();
                summary.phone = phone.clone();
                summary.date = date.clone();
                summary.hour = hour.clone();
            }

            let comment = match named_control(dom, panel, &config.comment_field) {
                Some(control) => Some(control),
                None => dom.query_selector_from(panel, "textarea")?,
            };
            if let Some(comment) = comment {
                summary.comment = dom.value(comment)?;
            }
        }

        Ok(summary)
    }

    /// Writes the slots into the container's items. The two sentences go into
    /// the item's text element when it has one.
    pub(crate) fn render(
        &self,
        dom: &mut Dom,
        container: NodeId,
        config: &WizardSelectors,
    ) -> Result<()> {
        let items = dom.query_selector_all_from(container, &config.summary_items)?;
        for (index, (item, text)) in items.iter().zip(self.slots()).enumerate() {
            let slot = if index < 2 {
                dom.query_selector_from(*item, &config.summary_text)?
                    .unwrap_or(*item)
            } else {
                *item
            };
            dom.set_text_content(slot, &text)?;
        }
        Ok(())
    }
}

fn checked_inputs(dom: &Dom, panel: NodeId) -> Result<Vec<NodeId>> {
    Ok(dom
        .query_selector_all_from(panel, "input")?
        .into_iter()
        .filter(|input| dom.checked(*input).unwrap_or(false))
        .collect())
}

fn named_control(dom: &Dom, panel: NodeId, name: &str) -> Option<NodeId> {
    dom.form_controls(panel)
        .into_iter()
        .find(|control| dom.attr(*control, "name").as_deref() == Some(name))
}

fn category_label(dom: &Dom, input: NodeId, label_selector: &str) -> Result<String> {
    let label = dom.find_ancestor_by_tag(input, "label");
    if let Some(label) = label {
        if let Some(description) = dom.query_selector_from(label, label_selector)? {
            return Ok(dom.inner_text(description));
        }
    }
    if let Some(text) = dom.dataset_get(input, "label") {
        return Ok(text);
    }
    Ok(label
        .map(|label| dom.inner_text(label))
        .unwrap_or_else(|| dom.value(input).unwrap_or_default()))
}

fn institution_title(dom: &Dom, input: NodeId, title_selector: &str) -> Result<String> {
    let Some(label) = dom.find_ancestor_by_tag(input, "label") else {
        return Ok(String::new());
    };
    Ok(match dom.query_selector_from(label, title_selector)? {
        Some(title) => dom.inner_text(title),
        None => dom.inner_text(label),
    })
}
