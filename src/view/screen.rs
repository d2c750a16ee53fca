use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, debug_span, info, trace, warn};

use super::base_component::{BoxElement, BoxModelSnapshot, ElementTrait, collect_box_models};
use super::render_command::RenderContext;
use crate::geometry::Vec2;
use crate::style::Color;
use crate::ui::{InputState, KeyEvent, MouseEvent, ScrollEvent};

pub type FrameCallback = Box<dyn FnOnce(&mut BoxElement)>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScreenError {
    #[error("screen has not been initialized")]
    NotInitialized,
    #[error("screen is already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Uninitialized,
    Running,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenConfig {
    /// Filled over the whole viewport before the tree draws.
    pub clear_color: Option<Color>,
    pub frame_stats: bool,
}

impl ScreenConfig {
    pub fn from_env() -> Self {
        Self {
            clear_color: None,
            frame_stats: std::env::var("BOXKIT_TRACE_FPS").is_ok(),
        }
    }

    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = Some(color);
        self
    }
}

#[derive(Default)]
struct FrameQueue {
    next: Vec<FrameCallback>,
}

/// Weak reference to a screen's callback queue, held by mounted elements.
#[derive(Clone, Default)]
pub struct ScreenHandle {
    queue: Weak<RefCell<FrameQueue>>,
}

impl ScreenHandle {
    /// Queues `callback` for the start of the next frame. Returns `false`
    /// once the screen has been dropped.
    pub fn execute_next_frame<F>(&self, callback: F) -> bool
    where
        F: FnOnce(&mut BoxElement) + 'static,
    {
        let Some(queue) = self.queue.upgrade() else {
            return false;
        };
        queue.borrow_mut().next.push(Box::new(callback));
        true
    }

    pub fn is_alive(&self) -> bool {
        self.queue.strong_count() > 0
    }
}

impl fmt::Debug for ScreenHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenHandle")
            .field("alive", &self.is_alive())
            .finish()
    }
}

struct FrameStats {
    enabled: bool,
    last_report_at: Instant,
    frames: u32,
    total_frame_time: Duration,
}

impl FrameStats {
    fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last_report_at: Instant::now(),
            frames: 0,
            total_frame_time: Duration::ZERO,
        }
    }

    fn record_frame(&mut self, frame_time: Duration) {
        if !self.enabled {
            return;
        }

        self.frames += 1;
        self.total_frame_time += frame_time;

        let elapsed = self.last_report_at.elapsed();
        if elapsed < Duration::from_secs(1) {
            return;
        }

        let secs = elapsed.as_secs_f64().max(f64::EPSILON);
        let fps = self.frames as f64 / secs;
        let avg_ms = (self.total_frame_time.as_secs_f64() * 1000.0) / self.frames as f64;

        info!(fps, frame_avg_ms = avg_ms, frames = self.frames, "frame stats");

        self.last_report_at = Instant::now();
        self.frames = 0;
        self.total_frame_time = Duration::ZERO;
    }
}

/// Owns the root box and drives one frame per [`Screen::render`].
pub struct Screen {
    state: ScreenState,
    root: BoxElement,
    viewport: Vec2,
    queue: Rc<RefCell<FrameQueue>>,
    input: InputState,
    config: ScreenConfig,
    stats: FrameStats,
    frame_index: u64,
    frame_box_models: Vec<BoxModelSnapshot>,
}

impl Screen {
    pub fn new(root: BoxElement) -> Self {
        Self::with_config(root, ScreenConfig::default())
    }

    pub fn with_config(root: BoxElement, config: ScreenConfig) -> Self {
        Self {
            state: ScreenState::Uninitialized,
            root,
            viewport: Vec2::ZERO,
            queue: Rc::new(RefCell::new(FrameQueue::default())),
            input: InputState::default(),
            config,
            stats: FrameStats::new(config.frame_stats),
            frame_index: 0,
            frame_box_models: Vec::new(),
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn handle(&self) -> ScreenHandle {
        ScreenHandle {
            queue: Rc::downgrade(&self.queue),
        }
    }

    pub fn init(&mut self) -> Result<(), ScreenError> {
        if self.state == ScreenState::Running {
            warn!("screen initialized twice");
            return Err(ScreenError::AlreadyInitialized);
        }
        debug!(root = self.root.id(), "mounting root");
        let handle = self.handle();
        self.root.mount(handle);
        self.state = ScreenState::Running;
        Ok(())
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        debug!(width, height, "resize");
        self.viewport = Vec2::new(width, height);
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    pub fn root(&self) -> &BoxElement {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut BoxElement {
        &mut self.root
    }

    /// Swaps in a new root, moving the mount over when running.
    pub fn set_root(&mut self, root: BoxElement) -> BoxElement {
        let mut previous = std::mem::replace(&mut self.root, root);
        if self.state == ScreenState::Running {
            previous.unmount();
            let handle = self.handle();
            self.root.mount(handle);
        }
        previous
    }

    pub fn execute_next_frame<F>(&self, callback: F)
    where
        F: FnOnce(&mut BoxElement) + 'static,
    {
        self.queue.borrow_mut().next.push(Box::new(callback));
    }

    pub fn frame_box_models(&self) -> &[BoxModelSnapshot] {
        &self.frame_box_models
    }

    fn is_running(&self, event: &str) -> bool {
        if self.state != ScreenState::Running {
            trace!(event, "input before init ignored");
            return false;
        }
        true
    }

    pub fn process_mouse_move(&mut self, event: MouseEvent) {
        if !self.is_running("mouse_move") {
            return;
        }
        let mut event = event;
        self.input.track_mouse(&event);
        event.buttons = self.input.buttons;
        self.root.process_mouse_move(&event);
    }

    pub fn process_mouse_down(&mut self, event: MouseEvent) {
        if !self.is_running("mouse_down") {
            return;
        }
        let mut event = event;
        self.input.track_press(&mut event);
        self.root.process_mouse_down(&event);
    }

    pub fn process_mouse_up(&mut self, event: MouseEvent) {
        if !self.is_running("mouse_up") {
            return;
        }
        let mut event = event;
        self.input.track_release(&mut event);
        self.root.process_mouse_up(&event);
    }

    pub fn process_mouse_scroll(&mut self, event: ScrollEvent) {
        if !self.is_running("scroll") {
            return;
        }
        self.input.mouse_position = event.position;
        self.input.modifiers = event.modifiers;
        self.root.process_mouse_scroll(&event);
    }

    pub fn process_keyboard_down(&mut self, event: KeyEvent) {
        if !self.is_running("key_down") {
            return;
        }
        self.input.track_key(&event);
        self.root.process_keyboard_down(&event);
    }

    pub fn process_keyboard_up(&mut self, event: KeyEvent) {
        if !self.is_running("key_up") {
            return;
        }
        self.input.track_key(&event);
        self.root.process_keyboard_up(&event);
    }

    /// Runs one frame into `ctx`, replacing whatever it held.
    pub fn render(&mut self, ctx: &mut RenderContext) -> Result<(), ScreenError> {
        if self.state != ScreenState::Running {
            warn!("render before init");
            return Err(ScreenError::NotInitialized);
        }

        let started = Instant::now();
        self.frame_index += 1;
        let _span = debug_span!("frame", index = self.frame_index).entered();

        let callbacks = std::mem::take(&mut self.queue.borrow_mut().next);
        if !callbacks.is_empty() {
            trace!(count = callbacks.len(), "deferred callbacks");
        }
        for callback in callbacks {
            callback(&mut self.root);
        }

        self.root.animate();
        self.root.layout(self.viewport);

        ctx.begin_frame();
        if let Some(color) = self.config.clear_color {
            ctx.set_color(color);
            ctx.fill_rectangle(Vec2::ZERO, self.viewport);
        }
        self.root.draw(ctx);

        self.frame_box_models = collect_box_models(&self.root);
        self.stats.record_frame(started.elapsed());
        Ok(())
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if self.state == ScreenState::Running {
            self.root.unmount();
        }
    }
}
