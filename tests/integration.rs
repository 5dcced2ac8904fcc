//! Integration tests for gilt-html.
//!
//! These tests exercise the public API from outside the crate: composing
//! pages from elements and custom components, environment propagation, and
//! stylesheet aggregation on disk.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use gilt_html::elements::*;
use gilt_html::markup::VoidStyle;
use gilt_html::style::{StyleAggregator, StyleConfig, StyleError};
use gilt_html::{
    aggregate_styles, render_html, render_html_with, Component, ComponentCss, Compose,
    Environment, EnvironmentKey, FormDisabled, RenderConfig, Renderer, StyledInstance,
};
use pretty_assertions::assert_eq;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A fresh, empty directory under the system temp dir.
fn scratch_dir(label: &str) -> PathBuf {
    static NEXT: AtomicUsize = AtomicUsize::new(0);
    let dir = std::env::temp_dir().join(format!(
        "gilt-html-it-{}-{}-{}",
        label,
        std::process::id(),
        NEXT.fetch_add(1, Ordering::SeqCst)
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

/// One option of a plan picker: a label followed by its radio.
struct PlanOption {
    value: &'static str,
    title: &'static str,
    checked: bool,
}

impl Compose for PlanOption {
    fn component_type(&self) -> &str {
        "PlanOption"
    }

    fn body(&self, _env: &Environment) -> Component {
        let id = format!("plan-{}", self.value);
        Component::group(vec![
            Component::from(Label::new().with_for(id.clone()).with_child(Text::new(self.title))),
            Component::from(
                Radio::new()
                    .with_name("plan")
                    .with_value(self.value)
                    .with_id(id)
                    .checked(self.checked)
                    .required(true),
            ),
        ])
    }
}

impl ComponentCss for PlanOption {
    fn component_css(&self) -> &str {
        ".plan-option { display: flex; }"
    }
}

/// Wraps its content in a fieldset-like div that disables every control.
struct LockedSection {
    content: Component,
}

impl Compose for LockedSection {
    fn component_type(&self) -> &str {
        "LockedSection"
    }

    fn environment(&self, env: &Environment) -> Environment {
        env.with::<FormDisabled>(true)
    }

    fn body(&self, _env: &Environment) -> Component {
        Div::new()
            .with_class("locked")
            .with_child(self.content.clone())
            .into()
    }
}

// ---------------------------------------------------------------------------
// Radio rendering
// ---------------------------------------------------------------------------

#[test]
fn test_checked_required_autofocus_radio() {
    let radio = Radio::new()
        .with_name("plan")
        .with_value("premium")
        .with_id("plan-premium")
        .checked(true)
        .required(true)
        .autofocus(true);
    assert_eq!(
        render_html(radio).unwrap(),
        r#"<input type="radio" name="plan" value="premium" id="plan-premium" checked required autofocus />"#
    );
}

#[test]
fn test_required_disabled_radio() {
    let radio = Radio::new()
        .with_name("plan")
        .with_value("basic")
        .with_id("plan-basic")
        .required(true)
        .disabled(true);
    assert_eq!(
        render_html(radio).unwrap(),
        r#"<input type="radio" name="plan" value="basic" id="plan-basic" required disabled />"#
    );
}

#[test]
fn test_bare_radio() {
    assert_eq!(render_html(Radio::new()).unwrap(), r#"<input type="radio" />"#);
}

#[test]
fn test_radio_values_escaped() {
    let radio = Radio::new().with_value(r#"a "b" & <c>"#);
    assert_eq!(
        render_html(radio).unwrap(),
        r#"<input type="radio" value="a &quot;b&quot; &amp; &lt;c&gt;" />"#
    );
}

// ---------------------------------------------------------------------------
// Page composition
// ---------------------------------------------------------------------------

#[test]
fn test_plan_picker_page() {
    let page = Div::new().with_class("plans").with_children([
        Component::compose(PlanOption {
            value: "basic",
            title: "Basic",
            checked: false,
        }),
        Component::compose(PlanOption {
            value: "premium",
            title: "Premium",
            checked: true,
        }),
    ]);

    insta::assert_snapshot!(
        render_html(page).unwrap(),
        @r#"<div class="plans"><label for="plan-basic">Basic</label><input type="radio" name="plan" value="basic" id="plan-basic" required /><label for="plan-premium">Premium</label><input type="radio" name="plan" value="premium" id="plan-premium" checked required /></div>"#
    );
}

#[test]
fn test_mixed_form_controls() {
    let form = Div::new()
        .with_id("signup")
        .with_child(
            TextField::new()
                .with_name("email")
                .with_placeholder("you@example.com")
                .required(true),
        )
        .with_child(Checkbox::new().with_name("terms").with_value("yes"));
    assert_eq!(
        render_html(form).unwrap(),
        r#"<div id="signup"><input type="text" name="email" placeholder="you@example.com" required /><input type="checkbox" name="terms" value="yes" /></div>"#
    );
}

#[test]
fn test_text_is_escaped() {
    let label = Label::new().with_child(Text::new("Fish & <Chips>"));
    assert_eq!(
        render_html(label).unwrap(),
        "<label>Fish &amp; &lt;Chips&gt;</label>"
    );
}

#[test]
fn test_group_root_renders_siblings() {
    let group = Component::group(vec![
        Component::from(Radio::new().with_value("a")),
        Component::from(Radio::new().with_value("b")),
    ]);
    assert_eq!(
        render_html(group).unwrap(),
        r#"<input type="radio" value="a" /><input type="radio" value="b" />"#
    );
}

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

#[test]
fn test_form_disabled_applies_to_subtree_only() {
    let page = Div::new()
        .with_child(Component::compose(LockedSection {
            content: Radio::new().with_value("inside").into(),
        }))
        .with_child(Radio::new().with_value("outside"));
    assert_eq!(
        render_html(page).unwrap(),
        r#"<div><div class="locked"><input type="radio" value="inside" disabled /></div><input type="radio" value="outside" /></div>"#
    );
}

#[test]
fn test_with_environment_on_component() {
    let locked =
        Component::from(TextField::new().with_name("q")).with_environment::<FormDisabled>(true);
    let page = Div::new()
        .with_child(locked)
        .with_child(TextField::new().with_name("r"));
    assert_eq!(
        render_html(page).unwrap(),
        r#"<div><input type="text" name="q" disabled /><input type="text" name="r" /></div>"#
    );
}

#[test]
fn test_caller_environment_reaches_leaves() {
    let env = Environment::new().with::<FormDisabled>(true);
    let html = render_html_with(Checkbox::new().with_name("a"), &env).unwrap();
    assert_eq!(html, r#"<input type="checkbox" name="a" disabled />"#);
    // The caller's environment is unchanged by rendering.
    assert!(env.get::<FormDisabled>());
    assert!(!Environment::new().get::<FormDisabled>());
}

struct Locale;

impl EnvironmentKey for Locale {
    type Value = String;

    fn default_value() -> String {
        "en".to_owned()
    }
}

/// Greets in the locale read from the environment.
struct Greeting;

impl Compose for Greeting {
    fn component_type(&self) -> &str {
        "Greeting"
    }

    fn body(&self, env: &Environment) -> Component {
        let text = match env.get::<Locale>().as_str() {
            "fr" => "Bonjour",
            _ => "Hello",
        };
        Text::new(text).into()
    }
}

#[test]
fn test_custom_key_inherited_and_shadowed() {
    let page = Div::new()
        .with_child(Component::compose(Greeting))
        .with_child(Component::compose(Greeting).with_environment::<Locale>("fr".to_owned()))
        .with_child(Component::compose(Greeting));
    assert_eq!(render_html(page).unwrap(), "<div>HelloBonjourHello</div>");
}

// ---------------------------------------------------------------------------
// Renderer configuration
// ---------------------------------------------------------------------------

#[test]
fn test_renderer_with_doctype_and_html_voids() {
    let renderer = Renderer::new(
        RenderConfig::new()
            .with_doctype(true)
            .with_void_style(VoidStyle::Html),
    );
    let html = renderer
        .render_to_string(&Component::from(Radio::new().with_name("x")), &Environment::new())
        .unwrap();
    assert_eq!(html, r#"<!DOCTYPE html><input type="radio" name="x">"#);
}

// ---------------------------------------------------------------------------
// Style aggregation
// ---------------------------------------------------------------------------

#[test]
fn test_aggregate_styles_end_to_end() {
    let dir = scratch_dir("styles");
    let base = dir.join("base.css");
    fs::write(&base, "body { margin: 0; }").unwrap();
    let output = dir.join("dist").join("site.css");

    let option = PlanOption {
        value: "basic",
        title: "Basic",
        checked: false,
    };
    let instances = vec![
        StyledInstance::of(&option),
        StyledInstance::new("Hero", ".hero { padding: 2rem; }"),
    ];
    let report = aggregate_styles(&instances, &base, &output).unwrap();

    assert_eq!(report.components, 2);
    assert_eq!(report.to_string(), "Rendered styles: 2 components → site.css");
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "body { margin: 0; }\n\n/* Component-specific styles */\n/* PlanOption */\n.plan-option { display: flex; }\n\n/* Hero */\n.hero { padding: 2rem; }\n\n"
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_aggregate_with_custom_banner_overwrites() {
    let dir = scratch_dir("banner");
    let base = dir.join("base.css");
    fs::write(&base, "").unwrap();
    let output = dir.join("out.css");
    fs::write(&output, "stale").unwrap();

    let aggregator = StyleAggregator::new(StyleConfig::new().with_banner("/* widgets */"));
    let report = aggregator.aggregate(&[], &base, &output).unwrap();

    assert_eq!(report.components, 0);
    assert_eq!(fs::read_to_string(&output).unwrap(), "\n\n/* widgets */\n");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_aggregate_missing_base_writes_nothing() {
    let dir = scratch_dir("missing");
    let output = dir.join("nested").join("site.css");

    let err = aggregate_styles(
        &[StyledInstance::new("Hero", ".hero{}")],
        dir.join("absent.css"),
        &output,
    )
    .unwrap_err();

    assert!(matches!(err, StyleError::ReadBase { .. }));
    assert!(!output.exists());
    assert!(!dir.join("nested").exists());
    let _ = fs::remove_dir_all(&dir);
}
