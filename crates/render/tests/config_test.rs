use chrono::NaiveDate;
use std::collections::HashMap;
use timegrid_core::{calendar::ViewKind, labels::LabelStyle};
use timegrid_render::config::{OutputFormat, RenderConfig};
use tracing::Level;

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<RenderConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    RenderConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_when_unset() {
    let config = config_from(&[]).expect("defaults load");

    assert_eq!(config.view, ViewKind::Week);
    assert_eq!(config.anchor_date, None);
    assert_eq!(config.label_style, LabelStyle::English);
    assert_eq!(config.output, OutputFormat::Text);
    assert!(config.events.is_empty());
    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_all_values_set() {
    let config = config_from(&[
        ("TIMEGRID_VIEW", "day"),
        ("TIMEGRID_ANCHOR_DATE", "2026-10-19"),
        ("TIMEGRID_LABEL_STYLE", "korean"),
        ("TIMEGRID_OUTPUT", "json"),
        ("TIMEGRID_EVENTS", "click:25, next"),
        ("LOG_LEVEL", "debug"),
    ])
    .expect("config loads");

    assert_eq!(config.view, ViewKind::Day);
    assert_eq!(config.anchor_date, NaiveDate::from_ymd_opt(2026, 10, 19));
    assert_eq!(config.label_style, LabelStyle::Korean);
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.events.len(), 2);
    assert_eq!(config.log_level, Level::DEBUG);
}

#[test]
fn test_unknown_log_level_falls_back_to_info() {
    let config = config_from(&[("LOG_LEVEL", "loud")]).expect("config loads");

    assert_eq!(config.log_level, Level::INFO);
}

#[test]
fn test_invalid_values_are_errors() {
    let view = config_from(&[("TIMEGRID_VIEW", "year")]).unwrap_err();
    assert!(view.to_string().contains("TIMEGRID_VIEW"));

    let date = config_from(&[("TIMEGRID_ANCHOR_DATE", "19/10/2026")]).unwrap_err();
    assert!(date.to_string().contains("TIMEGRID_ANCHOR_DATE"));

    let events = config_from(&[("TIMEGRID_EVENTS", "click:48")]).unwrap_err();
    assert!(events.to_string().contains("TIMEGRID_EVENTS"));

    assert!(config_from(&[("TIMEGRID_OUTPUT", "yaml")]).is_err());
    assert!(config_from(&[("TIMEGRID_LABEL_STYLE", "french")]).is_err());
}
