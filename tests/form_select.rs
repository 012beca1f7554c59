mod common;

use common::{SEARCH_PAGE, init_tracing};
use donation_widgets::{Page, Result, WidgetConfig};

fn load() -> Result<Page> {
    init_tracing();
    Page::load(SEARCH_PAGE, WidgetConfig::default())
}

#[test]
fn every_select_with_options_becomes_a_dropdown() -> Result<()> {
    let page = load()?;
    assert_eq!(page.count(".dropdown")?, 2);
    assert!(!page.exists("select[name='city']")?);
    assert!(!page.exists("select[name='category']")?);
    // Nothing to offer, so the native control stays.
    assert!(page.exists("#empty-host select[name='empty']")?);

    page.assert_text(".dropdown > div", "Warszawa")?;
    page.assert_value(".dropdown input[name='city']", "waw")?;
    page.assert_value(".dropdown input[name='category']", "clothes")?;
    page.assert_class(".dropdown li[data-value='waw']", "selected", true)?;
    assert_eq!(page.dropdown_value("city"), Some("waw"));
    assert_eq!(page.dropdown_value("empty"), None);
    assert_eq!(page.open_dropdowns(), 0);
    Ok(())
}

#[test]
fn clicking_the_current_label_opens_and_closes() -> Result<()> {
    let mut page = load()?;
    page.click(".dropdown > div")?;
    page.assert_class(".dropdown", "selecting", true)?;
    page.click(".dropdown > div")?;
    page.assert_class(".dropdown", "selecting", false)?;
    Ok(())
}

#[test]
fn choosing_an_option_updates_label_input_and_marker() -> Result<()> {
    let mut page = load()?;
    page.click(".dropdown > div")?;
    page.click(".dropdown li[data-value='krk']")?;

    page.assert_text(".dropdown > div", "Kraków")?;
    page.assert_value(".dropdown input[name='city']", "krk")?;
    page.assert_class(".dropdown li[data-value='krk']", "selected", true)?;
    page.assert_class(".dropdown li[data-value='waw']", "selected", false)?;
    assert_eq!(page.count(".dropdown li.selected")?, 2);
    // The option click toggled the list shut again.
    page.assert_class(".dropdown", "selecting", false)?;
    assert_eq!(page.dropdown_value("city"), Some("krk"));
    assert_eq!(page.dropdown_value("category"), Some("clothes"));
    Ok(())
}

#[test]
fn choosing_the_same_option_twice_changes_nothing_but_the_open_state() -> Result<()> {
    let mut page = load()?;
    page.click(".dropdown li[data-value='gdn']")?;
    let once = page.value(".dropdown input[name='city']")?;
    page.click(".dropdown li[data-value='gdn']")?;
    assert_eq!(page.value(".dropdown input[name='city']")?, once);
    assert_eq!(page.count(".dropdown li.selected")?, 2);
    Ok(())
}

#[test]
fn clicking_outside_closes_every_open_dropdown() -> Result<()> {
    let mut page = load()?;
    page.click(".dropdown > div")?;
    page.click(".dropdown li[data-value='toys']")?;
    assert_eq!(page.open_dropdowns(), 2);

    page.click("#outside")?;
    assert_eq!(page.open_dropdowns(), 0);
    Ok(())
}

#[test]
fn any_click_inside_a_dropdown_toggles_it() -> Result<()> {
    let mut page = load()?;
    page.click(".dropdown > div")?;
    page.click(".dropdown ul")?;
    assert_eq!(page.open_dropdowns(), 0);

    page.click(".dropdown > div")?;
    page.click(".dropdown")?;
    assert_eq!(page.open_dropdowns(), 0);
    page.click(".dropdown")?;
    assert_eq!(page.open_dropdowns(), 1);
    Ok(())
}

#[test]
fn submitted_form_carries_the_dropdown_values() -> Result<()> {
    let mut page = load()?;
    page.click(".dropdown li[data-value='gdn']")?;
    page.click(".dropdown li[data-value='toys']")?;
    page.click("#search-submit")?;

    assert_eq!(page.open_dropdowns(), 0);
    let submissions = page.take_submissions();
    assert_eq!(submissions.len(), 1);
    let search = &submissions[0];
    assert_eq!(search.form_id.as_deref(), Some("search"));
    assert_eq!(search.action, "/institutions");
    assert_eq!(search.method, "get");
    assert_eq!(search.field("city"), Some("gdn"));
    assert_eq!(search.field("category"), Some("toys"));
    assert_eq!(search.field("empty"), Some(""));
    Ok(())
}

#[test]
fn typed_dropdown_input_is_what_gets_reported_and_submitted() -> Result<()> {
    let mut page = load()?;
    page.click(".dropdown li[data-value='krk']")?;
    page.type_text(".dropdown input[name='city']", "poz")?;

    assert_eq!(page.dropdown_value("city"), Some("poz"));
    page.assert_text(".dropdown > div", "Kraków")?;
    page.click("#search-submit")?;
    let submissions = page.take_submissions();
    assert_eq!(submissions[0].field("city"), Some("poz"));
    Ok(())
}

#[test]
fn assert_exists_reports_missing_selectors() -> Result<()> {
    let page = load()?;
    page.assert_exists(".dropdown li[data-value='gdn']")?;
    page.assert_exists("#empty-host select")?;
    assert!(matches!(
        page.assert_exists("select[name='city']"),
        Err(donation_widgets::Error::SelectorNotFound(selector)) if selector == "select[name='city']"
    ));
    Ok(())
}
