//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use tesela::{records_from_json, ChartState, DrawCommand, Event, Point, Record};

const DATASET: &str = r#"{
    "name": "Video Game Sales",
    "children": [
        {
            "name": "Wii",
            "children": [
                {"name": "Wii Sports", "category": "Wii", "value": 82.53}
            ]
        },
        {
            "name": "NES",
            "children": [
                {"name": "Super Mario Bros.", "category": "NES", "value": 40.24}
            ]
        }
    ]
}"#;

// ============================================================================
// Chart Pipeline Tests (verify the pure core works in WASM)
// ============================================================================

#[wasm_bindgen_test]
fn test_chart_builds_in_wasm() {
    let records = records_from_json(DATASET).expect("dataset decodes");
    let chart = ChartState::new(records, 800.0).expect("chart builds");
    assert_eq!(chart.chart_rect().height, 480.0);
    assert_eq!(chart.tiles().len(), 2);
}

#[wasm_bindgen_test]
fn test_frame_renders_in_wasm() {
    let chart = ChartState::new(vec![Record::new("A", "X", 10.0)], 100.0).expect("chart builds");
    let frame = chart.render();
    assert!(frame
        .chart
        .iter()
        .any(|c| matches!(c, DrawCommand::Rect { .. })));
    assert_eq!(frame.legend.len(), 2);
}

#[wasm_bindgen_test]
fn test_hover_drives_tooltip_in_wasm() {
    let records = records_from_json(DATASET).expect("dataset decodes");
    let mut chart = ChartState::new(records, 800.0).expect("chart builds");
    let target = chart.tiles()[0].rect.center();
    chart.handle_event(&Event::PointerMove { position: target });
    assert!(chart.tooltip().is_visible());
    chart.handle_event(&Event::PointerLeave);
    assert!(!chart.tooltip().is_visible());
}

// ============================================================================
// JSON Boundary Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_event_json_roundtrip() {
    let event = Event::PointerMove {
        position: Point::new(12.0, 34.0),
    };
    let json = serde_json::to_string(&event).expect("serialize");
    let parsed: Event = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, event);
}

#[wasm_bindgen_test]
fn test_frame_json_serializes() {
    let chart = ChartState::new(vec![Record::new("A", "X", 10.0)], 100.0).expect("chart builds");
    let json = serde_json::to_string(&chart.render()).expect("serialize");
    assert!(json.contains("\"op\":\"rect\""));
}
