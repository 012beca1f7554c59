use super::*;
use crate::html::parse_html;
use crate::selector::{parse_selector_chain, parse_selector_step, split_selector_groups};

fn ids(dom: &Dom, nodes: Vec<NodeId>) -> Vec<String> {
    nodes
        .into_iter()
        .map(|node| dom.attr(node, "id").unwrap_or_default())
        .collect()
}

const LIST: &str = r#"
    <ul id="list" class="menu">
      <li id="a" class="item first" data-value="waw">Warszawa</li>
      <li id="b" class="item" data-value="krk">Kraków</li>
      <li id="c" class="item selected" data-value="gdn">Gdańsk</li>
    </ul>
    <div id="outer"><p id="p1"><span id="s1">x</span></p></div>
    <form id="f">
      <input id="cb1" type="checkbox" name="categories" checked>
      <input id="cb2" type="checkbox" name="categories">
      <input id="off" type="text" disabled>
    </form>
"#;

#[test]
fn parse_selector_chain_records_combinators() -> Result<()> {
    let parts = parse_selector_chain("form > div .next-step + button")?;
    let combinators = parts.iter().map(|part| part.combinator).collect::<Vec<_>>();
    assert_eq!(
        combinators,
        vec![
            None,
            Some(SelectorCombinator::Child),
            Some(SelectorCombinator::Descendant),
            Some(SelectorCombinator::AdjacentSibling),
        ]
    );
    assert_eq!(parts[0].step.tag.as_deref(), Some("form"));
    assert_eq!(parts[2].step.classes, vec!["next-step".to_string()]);
    Ok(())
}

#[test]
fn parse_selector_step_collects_every_condition() -> Result<()> {
    let step = parse_selector_step("li.item#b[data-value^='k']:not(.selected)")?;
    assert_eq!(step.tag.as_deref(), Some("li"));
    assert_eq!(step.id.as_deref(), Some("b"));
    assert_eq!(step.classes, vec!["item".to_string()]);
    assert_eq!(
        step.attrs,
        vec![SelectorAttrCondition::StartsWith {
            key: "data-value".into(),
            value: "k".into(),
        }]
    );
    assert_eq!(step.pseudo_classes.len(), 1);
    assert!(matches!(step.pseudo_classes[0], SelectorPseudoClass::Not(_)));
    Ok(())
}

#[test]
fn unsupported_selectors_are_rejected() {
    for selector in [
        "",
        "   ",
        "a ~ b",
        "> li",
        "li >",
        "li > > a",
        "ul,",
        ",ul",
        "[data-value",
        "li[data-value='x'",
        "li:hover",
        "li:not()",
        "#",
        ".",
        "a[href|=en]",
    ] {
        assert!(
            parse_selector_groups(selector).is_err(),
            "{selector:?} should be rejected"
        );
    }
}

#[test]
fn split_selector_groups_ignores_commas_inside_values() -> Result<()> {
    let groups = split_selector_groups("li[data-value='a,b'], :not(.x, .y) , p")?;
    assert_eq!(
        groups,
        vec![
            "li[data-value='a,b']".to_string(),
            ":not(.x, .y)".to_string(),
            "p".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn attribute_operators_match_like_css() -> Result<()> {
    let dom = parse_html(LIST)?;
    assert_eq!(ids(&dom, dom.query_selector_all("[data-value]")?), ["a", "b", "c"]);
    assert_eq!(ids(&dom, dom.query_selector_all("li[data-value='krk']")?), ["b"]);
    assert_eq!(ids(&dom, dom.query_selector_all("li[data-value=\"gdn\"]")?), ["c"]);
    assert_eq!(ids(&dom, dom.query_selector_all("li[data-value^=w]")?), ["a"]);
    assert_eq!(ids(&dom, dom.query_selector_all("li[data-value$='n']")?), ["c"]);
    assert_eq!(ids(&dom, dom.query_selector_all("li[class~=first]")?), ["a"]);
    assert!(dom.query_selector_all("li[class~=fir]")?.is_empty());
    Ok(())
}

#[test]
fn combinators_walk_the_tree() -> Result<()> {
    let dom = parse_html(LIST)?;
    assert_eq!(ids(&dom, dom.query_selector_all("ul.menu > li")?), ["a", "b", "c"]);
    assert_eq!(ids(&dom, dom.query_selector_all("#outer span")?), ["s1"]);
    assert!(dom.query_selector_all("#outer > span")?.is_empty());
    assert_eq!(ids(&dom, dom.query_selector_all("#a + li")?), ["b"]);
    assert_eq!(ids(&dom, dom.query_selector_all(".first + .item + li")?), ["c"]);
    Ok(())
}

#[test]
fn pseudo_classes_filter_matches() -> Result<()> {
    let dom = parse_html(LIST)?;
    assert_eq!(ids(&dom, dom.query_selector_all("li:first-child")?), ["a"]);
    assert_eq!(ids(&dom, dom.query_selector_all("li:last-child")?), ["c"]);
    assert_eq!(ids(&dom, dom.query_selector_all("input:checked")?), ["cb1"]);
    assert_eq!(ids(&dom, dom.query_selector_all("input:disabled")?), ["off"]);
    assert_eq!(
        ids(&dom, dom.query_selector_all("li:not(.selected, #a)")?),
        ["b"]
    );
    Ok(())
}

#[test]
fn selector_groups_return_document_order_without_duplicates() -> Result<()> {
    let dom = parse_html(LIST)?;
    assert_eq!(
        ids(&dom, dom.query_selector_all("#c, .item, #a")?),
        ["a", "b", "c"]
    );
    Ok(())
}

#[test]
fn scoped_queries_only_return_descendants() -> Result<()> {
    let dom = parse_html(LIST)?;
    let form = dom.by_id("f").expect("form");
    assert_eq!(
        ids(&dom, dom.query_selector_all_from(form, "input")?),
        ["cb1", "cb2", "off"]
    );
    assert_eq!(dom.query_selector_from(form, "li")?, None);

    let span = dom.by_id("s1").expect("span");
    assert_eq!(dom.closest(span, "div")?, dom.by_id("outer"));
    assert_eq!(dom.closest(span, "span")?, Some(span));
    assert_eq!(dom.closest(span, "form")?, None);
    Ok(())
}

#[test]
fn id_lookup_follows_attribute_changes() -> Result<()> {
    let mut dom = parse_html(LIST)?;
    let a = dom.by_id("a").expect("a");
    dom.set_attr(a, "id", "renamed")?;
    assert_eq!(dom.query_selector("#a")?, None);
    assert_eq!(dom.query_selector("#renamed")?, Some(a));
    Ok(())
}
