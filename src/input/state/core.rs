//! Canvas session state and gesture dispatch.

use crate::draw::{
    Background, Color, FitMode, Provisional, Scene, Shape, ShapeId, StrokeBuffer, render,
};
use crate::input::events::CanvasEvent;
use crate::input::tool_state::ToolState;
use crate::util::Point;

/// Current gesture state machine.
///
/// At most one provisional entity exists at any time: a touch gesture is
/// either accumulating stroke samples, dragging a shape, or nothing.
#[derive(Debug)]
pub enum GestureState {
    /// No gesture in progress - waiting for a touch
    Idle,
    /// Accumulating freehand samples (pencil or eraser down)
    Stroking {
        /// Interpolated samples collected so far
        buffer: StrokeBuffer,
    },
    /// Dragging a provisional shape (shape mode, finger down)
    Shaping {
        /// The shape being dragged; only its endpoint changes
        shape: Shape,
    },
}

/// Main canvas state: the committed scene, tool selection, and the gesture
/// state machine routing touch events between them.
///
/// All methods are synchronous and run on the host's event thread; nothing
/// here blocks. Hosts that need the scene across an async boundary clone
/// it instead of holding the state locked.
pub struct CanvasState {
    /// All committed drawing entities
    pub scene: Scene,
    /// Tool selection shared with the renderer
    pub tools: ToolState,
    /// Gesture state machine
    pub state: GestureState,
    /// Canvas clear color; also the color eraser strokes paint in
    pub background_color: Color,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Lower bound applied to background image scale factors
    min_background_scale: f64,
    /// Source for gesture-start shape ids, unique within this session
    next_shape_id: u64,
}

impl CanvasState {
    /// Creates a canvas session with the given tool defaults.
    ///
    /// # Arguments
    /// * `tools` - Initial tool selection (color, brush size, recents)
    /// * `background_color` - Canvas clear color, used by the eraser
    /// * `min_background_scale` - Smallest accepted background image scale
    pub fn with_defaults(
        tools: ToolState,
        background_color: Color,
        min_background_scale: f64,
    ) -> Self {
        Self {
            scene: Scene::new(),
            tools,
            state: GestureState::Idle,
            background_color,
            needs_redraw: true,
            min_background_scale,
            next_shape_id: 1,
        }
    }

    pub(super) fn allocate_shape_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_shape_id);
        self.next_shape_id += 1;
        id
    }

    /// Removes the most recent scene entity (shape before stroke before
    /// background). No-op on an empty scene.
    pub fn undo(&mut self) {
        if self.scene.undo() {
            self.needs_redraw = true;
        }
    }

    /// Wipes the scene, including the background image.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.needs_redraw = true;
    }

    /// Sets or replaces the background image, clamping the scale factor to
    /// the configured minimum.
    pub fn set_background(&mut self, uri: impl Into<String>, scale: f64, fit: FitMode) {
        let scale = scale.max(self.min_background_scale);
        self.scene.set_background(Background::new(uri, scale, fit));
        self.needs_redraw = true;
    }

    /// Removes the background image if present.
    pub fn clear_background(&mut self) {
        if self.scene.clear_background() {
            self.needs_redraw = true;
        }
    }

    /// Picks an explicit drawing color (switches to pencil mode).
    pub fn select_color(&mut self, color: Color) {
        self.tools.select_color(color);
        self.needs_redraw = true;
    }

    /// Switches to the pencil, optionally updating the brush size.
    pub fn select_pencil(&mut self, size: Option<f64>) {
        self.tools.select_pencil();
        if let Some(size) = size {
            self.tools.set_brush_size(size);
        }
        self.needs_redraw = true;
    }

    /// Switches to the eraser, optionally updating the brush size.
    pub fn select_eraser(&mut self, size: Option<f64>) {
        self.tools.select_eraser(self.background_color);
        if let Some(size) = size {
            self.tools.set_brush_size(size);
        }
        self.needs_redraw = true;
    }

    /// Switches to shape mode with the given shape kind.
    pub fn select_shape(&mut self, kind: crate::draw::ShapeKind) {
        self.tools.select_shape(kind);
        self.needs_redraw = true;
    }

    /// Updates the brush size without changing tools.
    pub fn set_brush_size(&mut self, size: f64) {
        self.tools.set_brush_size(size);
        self.needs_redraw = true;
    }

    /// The live entity under the user's finger, for preview rendering.
    pub fn provisional(&self) -> Option<Provisional<'_>> {
        match &self.state {
            GestureState::Idle => None,
            GestureState::Stroking { buffer } => Some(Provisional::Stroke {
                points: buffer.points(),
                color: self.tools.active_color,
                thickness: self.tools.brush_size,
                tool: self.tools.stroke_tool(),
            }),
            GestureState::Shaping { shape } => Some(Provisional::Shape(shape)),
        }
    }

    /// Renders the scene plus any live preview into an SVG document.
    pub fn render_svg(&self, width: f64, height: f64) -> String {
        render::render_scene(
            &self.scene,
            self.background_color,
            width,
            height,
            self.provisional(),
        )
    }

    /// Applies one recorded event, dispatching to the matching method.
    ///
    /// Unknown color strings are logged and skipped rather than failing
    /// the replay.
    pub fn apply(&mut self, event: &CanvasEvent) {
        match event {
            CanvasEvent::TouchStart { x, y } => self.on_touch_start(Point::new(*x, *y)),
            CanvasEvent::TouchMove { x, y } => self.on_touch_move(Point::new(*x, *y)),
            CanvasEvent::TouchEnd => self.on_touch_end(),
            CanvasEvent::SelectColor { color } => match Color::from_hex(color) {
                Some(color) => self.select_color(color),
                None => log::warn!("Ignoring unparseable color '{color}' in trace"),
            },
            CanvasEvent::SelectPencil { size } => self.select_pencil(*size),
            CanvasEvent::SelectEraser { size } => self.select_eraser(*size),
            CanvasEvent::SelectShape { kind } => self.select_shape(*kind),
            CanvasEvent::SetBrushSize { size } => self.set_brush_size(*size),
            CanvasEvent::Undo => self.undo(),
            CanvasEvent::Clear => self.clear(),
            CanvasEvent::SetBackground { uri, scale, fit } => {
                self.set_background(uri.clone(), *scale, *fit)
            }
            CanvasEvent::ClearBackground => self.clear_background(),
        }
    }
}
