use super::*;

use tracing::trace;

/// Closes every open dropdown unless the click landed on a dropdown root,
/// on one of its option rows, or on its current-label div.
pub(crate) fn dismiss_open_dropdowns(
    dom: &mut Dom,
    target: NodeId,
    config: &DropdownSelectors,
) -> Result<()> {
    if is_dropdown_part(dom, target, config) {
        trace!("click inside dropdown; leaving it open");
        return Ok(());
    }

    let dropdown_selector = format!(".{}", config.root_class);
    let mut dropdowns = Vec::new();
    for host in dom.query_selector_all(&config.host)? {
        dropdowns.extend(dom.query_selector_all_from(host, &dropdown_selector)?);
    }
    for dropdown in dropdowns {
        dom.class_remove(dropdown, &config.open_class)?;
    }
    Ok(())
}

fn is_dropdown_part(dom: &Dom, target: NodeId, config: &DropdownSelectors) -> bool {
    let is_dropdown = |node: Option<NodeId>| {
        node.is_some_and(|node| dom.class_contains(node, &config.root_class))
    };

    if is_dropdown(Some(target)) {
        return true;
    }
    let parent = dom.parent(target);
    if dom.has_tag(target, "li") && is_dropdown(parent.and_then(|p| dom.parent(p))) {
        return true;
    }
    dom.has_tag(target, "div") && is_dropdown(parent)
}
