//! Scripted pointer/style replays against an in-memory page.

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use headnav_header::dom::{Element, ElementResolver};
use headnav_header::memory::{MemoryDocument, MemoryElement};
use headnav_header::{
    HeaderConfig, HeaderOptions, NavigationHeader, NavigationHeaderBuilder, PointerEvent, StyleError,
};

/// A replay script: an ordered list of steps.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Script {
    pub steps: Vec<Step>,
}

/// One scripted action. Style and panel arguments stay loosely typed so a
/// script can exercise the rejection paths.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    ShowNav(Value),
    ShowSubNav(Value),
    HideSubNav,
    /// Pointer moves over the trigger for this panel (or the bare nav bar
    /// when no such trigger exists).
    Move(Value),
    Leave,
    Dispose,
}

/// Reads a script; `.json` is parsed as JSON, anything else as YAML.
pub fn load_script(path: &Path) -> Result<Script> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read script {}", path.display()))?;
    parse_script(&content, path.extension().and_then(|ext| ext.to_str()) == Some("json"))
        .with_context(|| format!("failed to parse script {}", path.display()))
}

pub fn parse_script(content: &str, is_json: bool) -> Result<Script> {
    let raw: Value = if is_json {
        serde_json::from_str(content)?
    } else {
        serde_yaml::from_str(content)?
    };
    Ok(serde_json::from_value(raw)?)
}

/// Summary printed after the last step.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReplaySummary {
    pub header_class: String,
    pub options: HeaderOptions,
    pub disposed: bool,
    pub errors: usize,
}

/// Builds the standard page for `config`, replays `script`, and writes one
/// JSON line per notification to `out` followed by the summary line.
pub fn run_replay(config: HeaderConfig, panels: &[String], script: &Script, out: &mut dyn Write) -> Result<ReplaySummary> {
    let id_selector = HeaderOptions::resolve(&config).id_selector;
    let panel_refs: Vec<&str> = panels.iter().map(String::as_str).collect();
    let document = MemoryDocument::standard_page(&id_selector, &panel_refs);

    let lines = Rc::new(RefCell::new(Vec::<String>::new()));
    let sink = Rc::clone(&lines);
    let mut header = Some(
        NavigationHeaderBuilder::new(config)
            .on_any(move |event| {
                if let Ok(line) = serde_json::to_string(event) {
                    sink.borrow_mut().push(line);
                }
            })
            .build(&document)?,
    );

    let mut errors = 0usize;
    let mut last_options = header.as_ref().map(NavigationHeader::get_options).unwrap_or_default();
    for (position, step) in script.steps.iter().enumerate() {
        if *step == Step::Dispose {
            if let Some(disposed) = header.take() {
                last_options = disposed.get_options();
                disposed.dispose();
            }
            flush_lines(&lines, out)?;
            continue;
        }
        let Some(active) = header.as_mut() else {
            warn!(step = position, "header disposed; skipping remaining steps");
            break;
        };

        if let Err(error) = apply_step(active, &document, step) {
            errors += 1;
            warn!(step = position, %error, "step had no effect");
        }
        last_options = active.get_options();
        flush_lines(&lines, out)?;
    }

    let header_element = document
        .element_by_id(&id_selector)
        .context("header element vanished from the page")?;
    let summary = ReplaySummary {
        header_class: header_element.class_name(),
        options: last_options,
        disposed: header.is_none(),
        errors,
    };
    writeln!(out, "{}", serde_json::to_string(&summary)?)?;
    Ok(summary)
}

/// Disposal consumes the header and is handled by the caller.
fn apply_step(header: &mut NavigationHeader<MemoryElement>, document: &MemoryDocument, step: &Step) -> Result<(), StyleError> {
    match step {
        Step::ShowNav(value) => header.show_nav_value(value),
        Step::ShowSubNav(value) => header.show_sub_nav(panel_id(value)),
        Step::HideSubNav => header.hide_sub_nav(),
        Step::Move(value) => {
            let target = pointer_target(document, header, &panel_id(value));
            header.handle_pointer(PointerEvent::NavMove { target }).map(|_| ())
        }
        Step::Leave => header.handle_pointer(PointerEvent::SubNavLeave).map(|_| ()),
        Step::Dispose => Ok(()),
    }
}

fn flush_lines(lines: &RefCell<Vec<String>>, out: &mut dyn Write) -> Result<()> {
    for line in lines.borrow_mut().drain(..) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn panel_id(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn pointer_target(document: &MemoryDocument, header: &NavigationHeader<MemoryElement>, panel: &str) -> MemoryElement {
    document.nav_trigger(panel).unwrap_or_else(|| header.handles().nav_bar.clone())
}
