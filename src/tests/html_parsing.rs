use super::*;
use crate::html::parse_html;

fn first(dom: &Dom, selector: &str) -> NodeId {
    dom.query_selector(selector)
        .expect("valid selector")
        .unwrap_or_else(|| panic!("{selector} not found"))
}

#[test]
fn character_references_are_decoded_in_text_and_attributes() -> Result<()> {
    let dom = parse_html(
        r#"<p id="t" title="a &amp; b">Fundacja &quot;Bez domu&quot; &ndash; 5&nbsp;zł &#65;&#x42; &unknown; &copy</p>"#,
    )?;
    let p = first(&dom, "#t");
    assert_eq!(dom.attr(p, "title").as_deref(), Some("a & b"));
    assert_eq!(
        dom.text_content(p),
        "Fundacja \"Bez domu\" – 5\u{00A0}zł AB &unknown; ©"
    );
    Ok(())
}

#[test]
fn optional_end_tags_are_implied() -> Result<()> {
    let dom = parse_html(
        r#"
        <ul id="list"><li>one<li>two<li>three</ul>
        <select id="s"><option value="a">A<option value="b">B</select>
        <div id="d"><p>first<p>second<div id="inner">block</div></div>
        "#,
    )?;
    let list = first(&dom, "#list");
    assert_eq!(dom.element_children(list).len(), 3);
    let select = first(&dom, "#s");
    assert_eq!(dom.select_options(select).len(), 2);
    assert_eq!(dom.query_selector_all("#d > p")?.len(), 2);
    assert_eq!(dom.query_selector_all("#d > div")?.len(), 1);
    Ok(())
}

#[test]
fn stray_end_tags_are_ignored_and_open_elements_close_at_eof() -> Result<()> {
    let dom = parse_html("<div id='a'></span><p>text</div></b><section id='open'><i>x")?;
    let a = first(&dom, "#a");
    assert_eq!(dom.inner_text(a), "text");
    let open = first(&dom, "#open");
    assert_eq!(dom.inner_text(open), "x");
    Ok(())
}

#[test]
fn raw_text_elements_keep_markup_as_text() -> Result<()> {
    let dom = parse_html(
        r#"
        <script>if (a < b && c) { el.innerHTML = "<li>"; }</script>
        <textarea name="pickUpComment">Dzwonić &amp; pukać <b>mocno</b></textarea>
        <style>.dropdown > li { color: red; }</style>
        "#,
    )?;
    let script = first(&dom, "script");
    assert_eq!(
        dom.text_content(script),
        r#"if (a < b && c) { el.innerHTML = "<li>"; }"#
    );
    assert!(dom.query_selector("li")?.is_none());
    assert!(dom.query_selector("b")?.is_none());

    let textarea = first(&dom, "textarea");
    assert_eq!(dom.value(textarea)?, "Dzwonić & pukać <b>mocno</b>");
    Ok(())
}

#[test]
fn attributes_are_lowercased_and_first_duplicate_wins() -> Result<()> {
    let dom = parse_html(r#"<INPUT Type="checkbox" NAME=agree name="ignored" checked data-x='1'>"#)?;
    let input = first(&dom, "input");
    assert_eq!(dom.tag_name(input), Some("input"));
    assert_eq!(dom.attr(input, "name").as_deref(), Some("agree"));
    assert_eq!(dom.attr(input, "checked").as_deref(), Some(""));
    assert_eq!(dom.dataset_get(input, "x").as_deref(), Some("1"));
    assert!(dom.checked(input)?);
    Ok(())
}

#[test]
fn void_and_self_closing_tags_do_not_swallow_siblings() -> Result<()> {
    let dom = parse_html(r#"<div id="d"><br><input name="a"/><img src="x.png"><span>after</span></div>"#)?;
    let d = first(&dom, "#d");
    assert_eq!(dom.element_children(d).len(), 4);
    Ok(())
}

#[test]
fn select_value_defaults_to_selected_or_first_option() -> Result<()> {
    let dom = parse_html(
        r#"
        <select id="plain"><option value="waw">Warszawa</option><option value="krk">Kraków</option></select>
        <select id="chosen"><option value="waw">Warszawa</option><option value="krk" selected>Kraków</option></select>
        <select id="textual"><option>  Gdańsk </option></select>
        <select id="empty"></select>
        "#,
    )?;
    assert_eq!(dom.value(first(&dom, "#plain"))?, "waw");
    assert_eq!(dom.value(first(&dom, "#chosen"))?, "krk");
    assert_eq!(dom.value(first(&dom, "#textual"))?, "Gdańsk");
    assert_eq!(dom.value(first(&dom, "#empty"))?, "");
    Ok(())
}

#[test]
fn comments_and_doctype_are_skipped() -> Result<()> {
    let dom = parse_html("<!DOCTYPE html><!-- <p>hidden</p> --><p id='shown'>ok</p>")?;
    assert_eq!(dom.query_selector_all("p")?.len(), 1);
    Ok(())
}

#[test]
fn malformed_markup_is_reported() {
    for html in [
        "<p>before<!-- never closed",
        "<div class=\"open",
        "<script>let a = 1;",
        "<p id='x'",
    ] {
        assert!(
            matches!(parse_html(html), Err(Error::HtmlParse(_))),
            "{html:?} should fail"
        );
    }
}

#[test]
fn dump_node_serializes_with_sorted_attributes() -> Result<()> {
    let dom = parse_html(r#"<div id="d" class="x" data-a="1 &lt; 2">a &amp; b<br></div>"#)?;
    assert_eq!(
        dom.dump_node(first(&dom, "#d")),
        r#"<div class="x" data-a="1 &lt; 2" id="d">a &amp; b<br></div>"#
    );
    Ok(())
}
