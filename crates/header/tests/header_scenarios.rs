use std::cell::RefCell;
use std::rc::Rc;

use headnav_header::dom::{Element, ElementResolver, PANEL_ID_ATTR, Visibility};
use headnav_header::memory::{MemoryDocument, MemoryElement};
use headnav_header::{
    DisplayState, HeaderConfig, HeaderError, HeaderEventKind, HeaderHandles, HeaderOptions, Listener,
    NavigationHeader, NavigationHeaderBuilder, PointerEvent, PointerOutcome, StyleCatalog, StyleError,
};
use serde_json::json;

const PANELS: &[&str] = &["1", "2", "3"];

fn page() -> MemoryDocument {
    MemoryDocument::standard_page("ha-header", PANELS)
}

/// Builds a header that records every event name it emits.
fn recorded_header(document: &MemoryDocument) -> (NavigationHeader<MemoryElement>, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let header = NavigationHeaderBuilder::new(
        HeaderConfig::default()
            .with_id_selector("ha-header")
            .with_nav_style(7)
            .with_sub_nav_style(6),
    )
    .on_any(move |event| sink.borrow_mut().push(event.kind.to_string()))
    .build(document)
    .expect("header builds");
    (header, log)
}

fn visibility_of(document: &MemoryDocument, panel: &str) -> Visibility {
    document.sub_panel(panel).expect("panel exists").visibility()
}

#[test]
fn reference_scenario_round_trips_through_sub_nav() {
    let document = page();
    let (mut header, log) = recorded_header(&document);

    header.show_nav(7).expect("show nav");
    assert_eq!(header.header_class(), "ha-header ha-header-rotateBack");

    header.show_sub_nav("2").expect("show sub nav");
    assert_eq!(header.header_class(), "ha-header ha-header-rotate");
    assert_eq!(visibility_of(&document, "2"), Visibility::Visible);
    assert_eq!(visibility_of(&document, "1"), Visibility::Hidden);
    assert_eq!(visibility_of(&document, "3"), Visibility::Hidden);

    header.hide_sub_nav().expect("hide sub nav");
    assert_eq!(header.header_class(), "ha-header ha-header-rotateBack");

    assert_eq!(*log.borrow(), vec!["initialized", "navShown", "subNavShown", "subNavHidden"]);
}

#[test]
fn every_catalog_index_renders_its_class() {
    let document = page();
    let (mut header, _) = recorded_header(&document);

    for (index, definition) in StyleCatalog::standard().iter() {
        header.show_nav(index).expect("index in range");
        assert_eq!(header.header_class(), format!("ha-header {}", definition.class_name));
        assert_eq!(header.get_options().nav_style, index);
    }
}

#[test]
fn invalid_nav_requests_change_nothing_and_emit_nothing() {
    let document = page();
    let (mut header, log) = recorded_header(&document);
    header.show_nav(3).expect("valid");
    log.borrow_mut().clear();

    for value in [json!("3"), json!(2.5), json!(null), json!([1]), json!(-4)] {
        let err = header.show_nav_value(&value).expect_err("rejected");
        assert!(matches!(err, StyleError::InvalidStyleIndex { .. }), "{value}");
    }
    let err = header.show_nav(StyleCatalog::standard().len()).expect_err("out of range");
    assert!(matches!(err, StyleError::InvalidStyleIndex { .. }));

    assert_eq!(header.header_class(), "ha-header ha-header-show");
    assert_eq!(header.get_options().nav_style, 3);
    assert!(log.borrow().is_empty());
}

#[test]
fn show_nav_is_idempotent() {
    let document = page();
    let (mut once, _) = recorded_header(&document);
    once.show_nav(5).expect("valid");
    let single = (once.header_class(), once.get_options(), once.display_state().clone());

    once.show_nav(5).expect("valid");
    assert_eq!((once.header_class(), once.get_options(), once.display_state().clone()), single);
}

#[test]
fn sub_style_follows_the_nav_style_at_call_time() {
    let document = page();
    let (mut header, _) = recorded_header(&document);

    header.show_nav(1).expect("show");
    header.show_sub_nav(1).expect("numeric ids compare as strings");
    assert_eq!(header.header_class(), "ha-header ha-header-subshow");
    assert_eq!(header.get_options().sub_nav_style, 4);
    assert_eq!(visibility_of(&document, "1"), Visibility::Visible);

    header.show_nav(10).expect("show");
    header.show_sub_nav("3").expect("mapped");
    assert_eq!(header.header_class(), "ha-header ha-header-subfullscreen");
    assert_eq!(visibility_of(&document, "1"), Visibility::Hidden);
    assert_eq!(visibility_of(&document, "3"), Visibility::Visible);
}

#[test]
fn sub_nav_class_for_every_catalog_index() {
    let expected: [(usize, Option<&str>); 12] = [
        (0, Some("ha-header-subshow")),
        (1, Some("ha-header-subshow")),
        (2, Some("ha-header-subshow")),
        (3, None),
        (4, None),
        (5, Some("ha-header-rotate")),
        (6, None),
        (7, Some("ha-header-rotate")),
        (8, Some("ha-header-subfullscreen")),
        (9, Some("ha-header-subfullscreen")),
        (10, Some("ha-header-subfullscreen")),
        (11, None),
    ];
    assert_eq!(expected.len(), StyleCatalog::standard().len());

    for (nav_style, sub_class) in expected {
        let document = page();
        let (mut header, _) = recorded_header(&document);
        header.show_nav(nav_style).expect("index in range");
        let primary_class = header.header_class();

        match sub_class {
            Some(sub_class) => {
                header.show_sub_nav("2").expect("mapped");
                assert_eq!(header.header_class(), format!("ha-header {sub_class}"), "nav style {nav_style}");
                assert_eq!(visibility_of(&document, "2"), Visibility::Visible);
                header.hide_sub_nav().expect("hide");
                assert_eq!(header.header_class(), primary_class);
            }
            None => {
                let err = header.show_sub_nav("2").expect_err("unmapped");
                assert_eq!(err, StyleError::UnmappedSubStyle { nav_style });
                assert_eq!(header.header_class(), primary_class);
            }
        }
    }
}

#[test]
fn unknown_panel_hides_every_panel() {
    let document = page();
    let (mut header, _) = recorded_header(&document);

    header.show_sub_nav("9").expect("mapped style still applies");
    for panel in PANELS {
        assert_eq!(visibility_of(&document, panel), Visibility::Hidden);
    }
    assert_eq!(header.display_state(), &DisplayState::SubShown { panel: "9".into() });
}

#[test]
fn hide_sub_nav_restores_primary_from_any_state() {
    let document = page();
    let (mut header, _) = recorded_header(&document);

    header.hide_sub_nav().expect("hide from primary");
    assert_eq!(header.header_class(), "ha-header ha-header-rotateBack");

    header.show_sub_nav("1").expect("show");
    header.hide_sub_nav().expect("hide");
    header.hide_sub_nav().expect("hide twice");
    assert_eq!(header.header_class(), "ha-header ha-header-rotateBack");
    assert_eq!(header.display_state(), &DisplayState::Primary);
}

#[test]
fn move_listener_is_one_shot_until_leave() {
    let document = page();
    let (mut header, log) = recorded_header(&document);
    let trigger_two = document.nav_trigger("2").expect("trigger");
    let trigger_three = document.nav_trigger("3").expect("trigger");

    let outcome = header
        .handle_pointer(PointerEvent::NavMove { target: trigger_two })
        .expect("move");
    assert_eq!(outcome, PointerOutcome::SubNavShown);
    assert_eq!(header.listeners().nav_move, Listener::Detached);

    let outcome = header
        .handle_pointer(PointerEvent::NavMove {
            target: trigger_three.clone(),
        })
        .expect("move");
    assert_eq!(outcome, PointerOutcome::Ignored);
    assert_eq!(visibility_of(&document, "3"), Visibility::Hidden);

    let outcome = header.handle_pointer(PointerEvent::SubNavLeave).expect("leave");
    assert_eq!(outcome, PointerOutcome::SubNavHidden);
    assert_eq!(header.listeners().nav_move, Listener::Armed);
    assert_eq!(header.header_class(), "ha-header ha-header-rotateBack");

    let outcome = header
        .handle_pointer(PointerEvent::NavMove { target: trigger_three })
        .expect("move");
    assert_eq!(outcome, PointerOutcome::SubNavShown);
    assert_eq!(visibility_of(&document, "3"), Visibility::Visible);

    assert_eq!(
        *log.borrow(),
        vec!["initialized", "subNavShown", "subNavHidden", "subNavShown"]
    );
}

#[test]
fn move_over_trigger_child_does_not_open_sub_nav() {
    let document = page();
    let (mut header, _) = recorded_header(&document);
    let child = document.nav_trigger("1").expect("trigger").children().remove(0);

    let outcome = header.handle_pointer(PointerEvent::NavMove { target: child }).expect("move");
    assert_eq!(outcome, PointerOutcome::Ignored);
    assert!(header.listeners().nav_move.is_armed());
}

#[test]
fn repeated_leave_keeps_a_single_armed_move_listener() {
    let document = page();
    let (mut header, _) = recorded_header(&document);

    header.handle_pointer(PointerEvent::SubNavLeave).expect("leave");
    header.handle_pointer(PointerEvent::SubNavLeave).expect("leave");
    assert_eq!(header.listeners().nav_move, Listener::Armed);

    let trigger = document.nav_trigger("1").expect("trigger");
    header
        .handle_pointer(PointerEvent::NavMove { target: trigger.clone() })
        .expect("move");
    let outcome = header.handle_pointer(PointerEvent::NavMove { target: trigger }).expect("move");
    assert_eq!(outcome, PointerOutcome::Ignored);
}

#[test]
fn construction_fails_fast_on_missing_elements() {
    let document = MemoryDocument::standard_page("ha-header", PANELS);
    let err = NavigationHeader::new(HeaderConfig::default().with_id_selector("site-header"), &document)
        .expect_err("no such header");
    assert!(matches!(err, HeaderError::Config(_)));
    assert!(err.to_string().contains("#site-header"));

    let broken = MemoryDocument::new();
    broken.append(MemoryElement::new("header").with_id("ha-header"));
    broken.append(MemoryElement::new("nav").with_id("ha-header-nav-id"));
    let err = NavigationHeader::new(HeaderConfig::default(), &broken).expect_err("no sub nav bar");
    assert!(err.to_string().contains("#ha-header-subnav-id"));
}

#[test]
fn init_reresolves_and_resets_state() {
    let document = page();
    let other = MemoryDocument::standard_page("site-header", &["a", "b"]);
    let (mut header, log) = recorded_header(&document);
    header.show_sub_nav("1").expect("show");

    header
        .init(HeaderConfig::default().with_id_selector("site-header").with_nav_style(2), &other)
        .expect("re-init");
    assert_eq!(header.display_state(), &DisplayState::Primary);
    assert!(header.listeners().nav_move.is_armed());
    assert_eq!(header.get_options().element, "site-header");
    assert_eq!(header.handles().panels.len(), 2);

    header.show_sub_nav("b").expect("show");
    assert_eq!(header.header_class(), "ha-header ha-header-subshow");
    assert_eq!(log.borrow().last().map(String::as_str), Some("subNavShown"));

    let err = header.init(HeaderConfig::default().with_id_selector("missing"), &other);
    assert!(err.is_err());
    assert_eq!(header.get_options().element, "site-header");
}

#[test]
fn snapshot_is_detached_from_live_state() {
    let document = page();
    let (mut header, _) = recorded_header(&document);
    let before = header.get_options();

    header.show_nav(0).expect("show");
    assert_eq!(before.nav_style, 7);
    assert_eq!(header.get_options().nav_style, 0);
}

#[test]
fn events_carry_the_resulting_snapshot() {
    let document = page();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut header = NavigationHeaderBuilder::new(HeaderConfig::default())
        .on(HeaderEventKind::SubNavShown, move |event| sink.borrow_mut().push(event.clone()))
        .build(&document)
        .expect("builds");

    header.show_nav(10).expect("show");
    header.show_sub_nav("2").expect("show");

    let events = seen.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].options.nav_style, 10);
    assert_eq!(events[0].options.sub_nav_style, 11);
    assert_eq!(events[0].panel.as_deref(), Some("2"));
}

#[test]
fn dispose_detaches_listeners_and_returns_handles() {
    let document = page();
    let (mut header, log) = recorded_header(&document);
    header.show_nav(3).expect("show");

    let handles: HeaderHandles<MemoryElement> = header.dispose();
    assert_eq!(handles.header.class_name(), "ha-header ha-header-show");
    assert_eq!(log.borrow().last().map(String::as_str), Some("disposed"));
}

#[test]
fn prebuilt_handles_skip_resolution() {
    let document = page();
    let handles = HeaderHandles::resolve(&document, &HeaderOptions::default()).expect("resolves");
    let panel_ids: Vec<_> = handles
        .panels
        .iter()
        .filter_map(|panel| panel.attribute(PANEL_ID_ATTR))
        .collect();
    assert_eq!(panel_ids, vec!["1", "2", "3"]);

    let mut header = NavigationHeaderBuilder::new(HeaderConfig::default()).build_with_handles(handles);
    header.show_sub_nav("3").expect("show");
    assert_eq!(
        document.element_by_id("ha-header").expect("header").class_name(),
        "ha-header ha-header-rotate"
    );
}
