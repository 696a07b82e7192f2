use crate::draw::{Shape, StrokeBuffer};
use crate::input::tool::DrawMode;
use crate::util::Point;
use log::{debug, warn};

use super::{CanvasState, GestureState};

impl CanvasState {
    /// Processes a touch-down event, beginning a new gesture.
    ///
    /// # Behavior
    /// - Shape mode with a selected shape kind: begins a provisional shape
    ///   with `start == end` at the touch point and a fresh id
    /// - Pencil/eraser mode: begins a stroke buffer with this point as its
    ///   sole sample
    /// - Shape mode without a selected kind: the gesture is ignored
    ///
    /// A stale in-progress gesture (the host never delivered a touch-up)
    /// is discarded, never merged into the new one.
    pub fn on_touch_start(&mut self, point: Point) {
        if !matches!(self.state, GestureState::Idle) {
            warn!("Touch start while a gesture is in progress; discarding the stale buffer");
            self.state = GestureState::Idle;
        }

        match self.tools.mode {
            DrawMode::Shape => match self.tools.active_shape {
                Some(kind) => {
                    let id = self.allocate_shape_id();
                    let shape = Shape::begin(
                        id,
                        kind,
                        point,
                        self.tools.active_color,
                        self.tools.brush_size,
                    );
                    self.state = GestureState::Shaping { shape };
                    self.needs_redraw = true;
                }
                None => {
                    debug!("Shape mode with no shape selected; ignoring gesture");
                }
            },
            DrawMode::Pencil | DrawMode::Eraser => {
                self.state = GestureState::Stroking {
                    buffer: StrokeBuffer::begin(point),
                };
                self.needs_redraw = true;
            }
        }
    }

    /// Processes a touch-move event.
    ///
    /// # Behavior
    /// - Dragging a shape: the endpoint follows the finger verbatim (only
    ///   the final position matters for shape geometry)
    /// - Stroking: the sample runs through the interpolator; jitter below
    ///   the threshold leaves the buffer untouched
    pub fn on_touch_move(&mut self, point: Point) {
        match &mut self.state {
            GestureState::Shaping { shape } => {
                shape.drag(point);
                self.needs_redraw = true;
            }
            GestureState::Stroking { buffer } => {
                if buffer.extend(point) > 0 {
                    self.needs_redraw = true;
                }
            }
            GestureState::Idle => {}
        }
    }

    /// Processes a touch-up event, committing the gesture to the scene.
    ///
    /// A provisional shape is appended as-is; a non-empty stroke buffer is
    /// committed with the current color, brush size, and tool. Either way
    /// the provisional slot is cleared.
    pub fn on_touch_end(&mut self) {
        match std::mem::replace(&mut self.state, GestureState::Idle) {
            GestureState::Shaping { shape } => {
                self.scene.push_shape(shape);
                self.needs_redraw = true;
            }
            GestureState::Stroking { buffer } => {
                if !buffer.is_empty() {
                    let stroke = buffer.commit(
                        self.tools.active_color,
                        self.tools.brush_size,
                        self.tools.stroke_tool(),
                    );
                    self.scene.push_stroke(stroke);
                    self.needs_redraw = true;
                }
            }
            GestureState::Idle => {}
        }
    }
}
