//! Host-independent canvas events for trace recording and replay.
//!
//! Touch hosts feed [`CanvasState`](super::CanvasState) directly through
//! its `on_touch_*` and tool-selection methods. For headless replay (the
//! CLI, integration tests, bug reports) the same inputs are expressed as a
//! serializable event stream.

use crate::draw::{FitMode, ShapeKind};
use serde::{Deserialize, Serialize};

/// One recorded canvas input: a touch sample or a toolbar action.
///
/// Serialized as JSON with an `event` tag, e.g.
/// `{"event": "touch_start", "x": 10.0, "y": 20.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CanvasEvent {
    /// Finger down at canvas-local coordinates
    TouchStart { x: f64, y: f64 },
    /// Finger moved while down
    TouchMove { x: f64, y: f64 },
    /// Finger lifted
    TouchEnd,
    /// Explicit color pick (hex string, e.g. `"#FF0000"`)
    SelectColor { color: String },
    /// Switch to the pencil, optionally changing the brush size
    SelectPencil {
        #[serde(default)]
        size: Option<f64>,
    },
    /// Switch to the eraser, optionally changing the brush size
    SelectEraser {
        #[serde(default)]
        size: Option<f64>,
    },
    /// Switch to shape mode with the given shape kind
    SelectShape { kind: ShapeKind },
    /// Change the brush size without changing tools
    SetBrushSize { size: f64 },
    /// Remove the most recent scene entity
    Undo,
    /// Wipe the whole scene
    Clear,
    /// Set or replace the background image
    SetBackground {
        uri: String,
        #[serde(default = "default_scale")]
        scale: f64,
        #[serde(default)]
        fit: FitMode,
    },
    /// Remove the background image
    ClearBackground,
}

fn default_scale() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_round_trip_through_json() {
        let events = vec![
            CanvasEvent::SelectColor {
                color: "#FF0000".into(),
            },
            CanvasEvent::TouchStart { x: 1.0, y: 2.0 },
            CanvasEvent::TouchEnd,
            CanvasEvent::SelectShape {
                kind: ShapeKind::Triangle,
            },
        ];

        let json = serde_json::to_string(&events).unwrap();
        let back: Vec<CanvasEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, events);
    }

    #[test]
    fn background_defaults_apply_when_fields_are_omitted() {
        let event: CanvasEvent =
            serde_json::from_str(r#"{"event": "set_background", "uri": "gallery://7"}"#).unwrap();
        assert_eq!(
            event,
            CanvasEvent::SetBackground {
                uri: "gallery://7".into(),
                scale: 1.0,
                fit: FitMode::Contain,
            }
        );
    }
}
