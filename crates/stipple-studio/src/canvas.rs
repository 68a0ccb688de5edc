use stipple_engine::coords::{Rect, Vec2};
use stipple_engine::core::{App, AppControl, FrameCtx, WindowCtx};
use stipple_engine::input::{
    to_normalized, ButtonState, InputEvent, InputState, KeyState, MouseButton, PointerButtonEvent,
    PointerMoveEvent,
};
use stipple_engine::render::{render_scene, GraphicsContext, PrimitiveRenderer, RenderStats};
use stipple_engine::scene::Scene;

use crate::config::CanvasConfig;
use crate::controls::{control_for_key, Control};
use crate::selection::Selection;

/// Scene plus brush; everything a session changes.
///
/// Every scene mutation made through [`handle_input`](Self::handle_input) or
/// [`apply`](Self::apply) is followed by a full redraw into the given
/// graphics context before the call returns.
#[derive(Debug, Clone)]
pub struct Canvas {
    scene: Scene,
    selection: Selection,
    config: CanvasConfig,
    last_stats: Option<RenderStats>,
}

impl Canvas {
    pub fn new(config: CanvasConfig) -> Self {
        Self {
            scene: Scene::new(),
            selection: config.selection,
            config,
            last_stats: None,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Stats of the most recent redraw.
    pub fn last_stats(&self) -> Option<RenderStats> {
        self.last_stats
    }

    /// Appends a shape at `pointer` (logical pixels inside `bounds`).
    pub fn stamp(&mut self, pointer: Vec2, bounds: Rect) {
        let position = to_normalized(pointer, bounds);
        let shape = self.selection.make_shape(position, self.config.circle_segments);
        log::trace!("stamp {} at ({:.3}, {:.3})", shape.kind(), position.x, position.y);
        self.scene.append(shape);
    }

    pub fn clear(&mut self) {
        log::debug!("clearing {} shapes", self.scene.len());
        self.scene.clear();
    }

    pub fn apply<G: GraphicsContext + ?Sized>(&mut self, control: Control, gfx: &mut G) -> AppControl {
        match control {
            Control::SetKind(kind) => self.selection.set_kind(kind),
            Control::SetColor(color) => self.selection.set_color(color),
            Control::AdjustChannel { channel, delta } => self.selection.adjust_channel(channel, delta),
            Control::AdjustSize(delta) => self.selection.adjust_size(delta),
            Control::Clear => {
                self.clear();
                self.redraw(gfx);
            }
            Control::Exit => return AppControl::Exit,
        }
        log::debug!("selection: {}", self.selection);

        // Present the frame and refresh the title with the new selection.
        AppControl::Redraw
    }

    /// Routes one input event. `input` already reflects `event`.
    pub fn handle_input<G: GraphicsContext + ?Sized>(
        &mut self,
        input: &InputState,
        event: &InputEvent,
        bounds: Rect,
        gfx: &mut G,
    ) -> AppControl {
        match event {
            InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: ButtonState::Pressed,
                x,
                y,
                ..
            }) => {
                self.stamp(Vec2::new(*x, *y), bounds);
                self.redraw(gfx);
                AppControl::Redraw
            }

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) if input.button_down(MouseButton::Left) => {
                self.stamp(Vec2::new(*x, *y), bounds);
                self.redraw(gfx);
                AppControl::Redraw
            }

            InputEvent::Key { key, state: KeyState::Pressed, modifiers, .. } => {
                match control_for_key(*key, *modifiers) {
                    Some(control) => self.apply(control, gfx),
                    None => AppControl::Continue,
                }
            }

            _ => AppControl::Continue,
        }
    }

    /// Clears to the background and replays the scene into `gfx`.
    pub fn redraw<G: GraphicsContext + ?Sized>(&mut self, gfx: &mut G) -> RenderStats {
        let stats = render_scene(&self.scene, gfx, self.config.background);
        log::debug!("{stats}");
        self.last_stats = Some(stats);
        stats
    }
}

/// Window-hosted canvas: GPU renderer plus status in the title bar.
pub struct CanvasApp {
    title: String,
    canvas: Canvas,
    renderer: PrimitiveRenderer,
}

impl CanvasApp {
    pub fn new(title: impl Into<String>, config: CanvasConfig) -> Self {
        Self {
            title: title.into(),
            canvas: Canvas::new(config),
            renderer: PrimitiveRenderer::new(),
        }
    }

    fn status_title(&self) -> String {
        match self.canvas.last_stats() {
            Some(stats) => format!("{} | {} | {}", self.title, self.canvas.selection(), stats),
            None => format!("{} | {}", self.title, self.canvas.selection()),
        }
    }
}

impl App for CanvasApp {
    fn on_input(&mut self, window: &WindowCtx<'_>, input: &InputState, event: &InputEvent) -> AppControl {
        self.canvas
            .handle_input(input, event, window.surface_bounds(), &mut self.renderer)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Startup, resize and title-only frames have no recorded pass yet.
        if !self.renderer.has_pending_pass() {
            self.canvas.redraw(&mut self.renderer);
        }

        let renderer = &mut self.renderer;
        let control = ctx.render(|rctx, target| renderer.flush(rctx, target));

        log::trace!("frame {} (dt {:.1} ms)", ctx.time.frame_index, ctx.time.dt * 1000.0);
        ctx.window.set_title(&self.status_title());

        control
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stipple_engine::coords::{ColorChannel, ColorRgba};
    use stipple_engine::input::{Key, Modifiers};
    use stipple_engine::render::{CommandRecorder, Primitive};
    use stipple_engine::scene::ShapeKind;

    fn bounds() -> Rect {
        Rect::new(0.0, 0.0, 800.0, 800.0)
    }

    fn press_left(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: ButtonState::Pressed,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn move_to(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn key(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }

    /// Canvas plus the state the runtime keeps around it.
    struct Session {
        canvas: Canvas,
        input: InputState,
        gfx: CommandRecorder,
    }

    impl Session {
        fn new(config: CanvasConfig) -> Self {
            Self { canvas: Canvas::new(config), input: InputState::default(), gfx: CommandRecorder::new() }
        }

        /// Folds `event` into the input state the way the runtime does, then routes it.
        fn feed(&mut self, event: InputEvent) -> AppControl {
            self.input.apply_event(&event);
            self.canvas.handle_input(&self.input, &event, bounds(), &mut self.gfx)
        }
    }

    // ── stamping ──────────────────────────────────────────────────────────

    #[test]
    fn click_at_center_stamps_point_at_origin() {
        let mut s = Session::new(CanvasConfig::default());

        assert_eq!(s.feed(press_left(400.0, 400.0)), AppControl::Redraw);

        let shapes = s.canvas.scene().all();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].kind(), ShapeKind::Point);
        assert_eq!(shapes[0].position(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn drag_stamps_once_per_move() {
        let mut s = Session::new(CanvasConfig::default());

        s.feed(press_left(0.0, 0.0));
        s.feed(move_to(800.0, 800.0));
        s.feed(move_to(400.0, 0.0));

        let positions: Vec<Vec2> = s.canvas.scene().iter().map(|sh| sh.position()).collect();
        assert_eq!(
            positions,
            vec![Vec2::new(-1.0, 1.0), Vec2::new(1.0, -1.0), Vec2::new(0.0, 1.0)]
        );
    }

    #[test]
    fn hover_without_button_does_not_stamp() {
        let mut s = Session::new(CanvasConfig::default());

        assert_eq!(s.feed(move_to(10.0, 10.0)), AppControl::Continue);
        assert!(s.canvas.scene().is_empty());
        assert_eq!(s.gfx.clear_count(), 0);
    }

    #[test]
    fn right_click_does_not_stamp() {
        let mut s = Session::new(CanvasConfig::default());

        let ev = InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Right,
            state: ButtonState::Pressed,
            x: 1.0,
            y: 1.0,
            modifiers: Modifiers::default(),
        });
        assert_eq!(s.feed(ev), AppControl::Continue);
        assert!(s.canvas.scene().is_empty());
    }

    #[test]
    fn drag_stops_when_pointer_leaves() {
        let mut s = Session::new(CanvasConfig::default());

        s.feed(press_left(100.0, 100.0));
        s.feed(InputEvent::PointerLeft);
        s.feed(move_to(200.0, 200.0));

        assert_eq!(s.canvas.scene().len(), 1);
    }

    // ── redraw per mutation ───────────────────────────────────────────────

    #[test]
    fn every_append_runs_its_own_pass() {
        let mut s = Session::new(CanvasConfig::default());

        s.feed(press_left(100.0, 100.0));
        s.feed(move_to(200.0, 200.0));
        s.feed(move_to(300.0, 300.0));

        assert_eq!(s.gfx.clear_count(), 3);
        assert_eq!(s.canvas.last_stats().map(|st| st.shape_count), Some(3));
    }

    #[test]
    fn clear_runs_a_pass_with_nothing_drawn() {
        let mut s = Session::new(CanvasConfig::default());

        for i in 0..3 {
            s.feed(press_left(i as f32 * 100.0, 50.0));
        }
        assert_eq!(s.canvas.scene().len(), 3);

        assert_eq!(s.feed(key(Key::Backspace)), AppControl::Redraw);
        assert!(s.canvas.scene().is_empty());
        assert_eq!(s.gfx.clear_count(), 4);
        assert!(s.gfx.submissions().is_empty());
        assert_eq!(s.canvas.last_stats().map(|st| st.shape_count), Some(0));
    }

    #[test]
    fn selection_edits_do_not_run_a_pass() {
        let mut s = Session::new(CanvasConfig::default());

        assert_eq!(s.feed(key(Key::T)), AppControl::Redraw);
        assert_eq!(s.feed(key(Key::R)), AppControl::Redraw);
        assert_eq!(s.gfx.clear_count(), 0);
        assert_eq!(s.canvas.last_stats(), None);
    }

    // ── controls ──────────────────────────────────────────────────────────

    #[test]
    fn keys_edit_selection_for_later_stamps_only() {
        let mut s = Session::new(CanvasConfig::default());

        s.feed(key(Key::Digit1));
        s.feed(press_left(400.0, 400.0));

        s.feed(key(Key::T));
        s.feed(key(Key::ArrowUp));
        s.feed(key(Key::B));
        s.feed(press_left(200.0, 200.0));

        let shapes = s.canvas.scene().all();
        assert_eq!(shapes[0].kind(), ShapeKind::Point);
        assert_eq!(shapes[0].color(), ColorRgba::red());
        assert_eq!(shapes[0].size(), 10.0);

        assert_eq!(shapes[1].kind(), ShapeKind::Triangle);
        assert_eq!(shapes[1].size(), 15.0);
        assert!((shapes[1].color().channel(ColorChannel::Blue) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn escape_exits() {
        let mut s = Session::new(CanvasConfig::default());
        assert_eq!(s.feed(key(Key::Escape)), AppControl::Exit);
    }

    // ── redraw ────────────────────────────────────────────────────────────

    #[test]
    fn red_point_at_center_draws_one_point() {
        let config = CanvasConfig {
            selection: Selection::new(ShapeKind::Point, ColorRgba::red(), 10.0),
            ..Default::default()
        };
        let mut canvas = Canvas::new(config);
        canvas.stamp(Vec2::new(400.0, 400.0), bounds());

        let mut gfx = CommandRecorder::new();
        let stats = canvas.redraw(&mut gfx);

        assert_eq!(stats.shape_count, 1);
        assert_eq!(gfx.clear_count(), 1);

        let subs = gfx.submissions();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs[0].primitive, Primitive::Points);
        assert_eq!(subs[0].vertices, vec![Vec2::new(0.0, 0.0)]);
        assert_eq!(subs[0].color, ColorRgba::red());
        assert_eq!(subs[0].point_size, 10.0);
    }

    #[test]
    fn redraw_after_clear_submits_nothing() {
        let mut canvas = Canvas::new(CanvasConfig::default());
        for i in 0..3 {
            canvas.stamp(Vec2::new(100.0 * i as f32, 100.0), bounds());
        }
        canvas.clear();

        let mut gfx = CommandRecorder::new();
        let stats = canvas.redraw(&mut gfx);

        assert_eq!(stats.shape_count, 0);
        assert!(gfx.submissions().is_empty());
    }

    #[test]
    fn circle_segments_follow_config() {
        let config = CanvasConfig {
            circle_segments: 5,
            selection: Selection::new(ShapeKind::Circle, ColorRgba::white(), 10.0),
            ..Default::default()
        };
        let mut canvas = Canvas::new(config);
        canvas.stamp(Vec2::new(400.0, 400.0), bounds());

        let mut gfx = CommandRecorder::new();
        canvas.redraw(&mut gfx);

        let subs = gfx.submissions();
        assert_eq!(subs.len(), 5);
        assert!(subs.iter().all(|sub| sub.primitive == Primitive::Triangles));
    }
}
