use tracing::trace;

use super::{ElementId, next_element_id};
use crate::geometry::{AlongAxis, Axis, Vec2};
use crate::style::{
    AxisSizingRule, Background, Border, ComputedStyleSheet, ImageBackground, PositioningRule,
    StyleRules, StyleSheet, TraitSet, TransparencyReference, compute_style,
};
use crate::ui::{InteractionState, KeyEvent, MouseEvent, ScrollEvent};
use crate::view::render_command::RenderContext;
use crate::view::screen::ScreenHandle;
use crate::view::BoxElement;

type LifecycleHandler = Box<dyn FnMut(&mut ElementControl<'_>)>;
type MouseHandler = Box<dyn FnMut(&mut ElementControl<'_>, &MouseEvent)>;
type ScrollHandler = Box<dyn FnMut(&mut ElementControl<'_>, &ScrollEvent)>;
type KeyHandler = Box<dyn FnMut(&mut ElementControl<'_>, &KeyEvent)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Mount,
    Unmount,
    Animate,
    Focus,
    Unfocus,
    MouseEnter,
    MouseLeave,
    MouseRelease,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MouseAction {
    Move,
    Down,
    Up,
    Click,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Down,
    Up,
}

#[derive(Default)]
pub(crate) struct EventHandlers {
    mount: Option<LifecycleHandler>,
    unmount: Option<LifecycleHandler>,
    animate: Option<LifecycleHandler>,
    focus: Option<LifecycleHandler>,
    unfocus: Option<LifecycleHandler>,
    mouse_enter: Option<LifecycleHandler>,
    mouse_leave: Option<LifecycleHandler>,
    mouse_release: Option<LifecycleHandler>,
    mouse_move: Option<MouseHandler>,
    mouse_down: Option<MouseHandler>,
    mouse_up: Option<MouseHandler>,
    click: Option<MouseHandler>,
    scroll: Option<ScrollHandler>,
    key_down: Option<KeyHandler>,
    key_up: Option<KeyHandler>,
}

impl EventHandlers {
    fn lifecycle(&mut self, kind: Lifecycle) -> &mut Option<LifecycleHandler> {
        match kind {
            Lifecycle::Mount => &mut self.mount,
            Lifecycle::Unmount => &mut self.unmount,
            Lifecycle::Animate => &mut self.animate,
            Lifecycle::Focus => &mut self.focus,
            Lifecycle::Unfocus => &mut self.unfocus,
            Lifecycle::MouseEnter => &mut self.mouse_enter,
            Lifecycle::MouseLeave => &mut self.mouse_leave,
            Lifecycle::MouseRelease => &mut self.mouse_release,
        }
    }

    fn mouse(&mut self, kind: MouseAction) -> &mut Option<MouseHandler> {
        match kind {
            MouseAction::Move => &mut self.mouse_move,
            MouseAction::Down => &mut self.mouse_down,
            MouseAction::Up => &mut self.mouse_up,
            MouseAction::Click => &mut self.click,
        }
    }

    fn key(&mut self, kind: KeyAction) -> &mut Option<KeyHandler> {
        match kind {
            KeyAction::Down => &mut self.key_down,
            KeyAction::Up => &mut self.key_up,
        }
    }
}

/// Everything an element owns apart from its handlers.
pub struct ElementState {
    id: ElementId,
    size: Vec2,
    position: Vec2,
    computed_style: ComputedStyleSheet,
    interaction: InteractionState,
    styles: StyleRules,
    traits: TraitSet,
    screen: Option<ScreenHandle>,
}

impl ElementState {
    fn new(id: ElementId) -> Self {
        Self {
            id,
            size: Vec2::ZERO,
            position: Vec2::ZERO,
            computed_style: ComputedStyleSheet::default(),
            interaction: InteractionState::empty(),
            styles: StyleRules::new(),
            traits: TraitSet::new(),
            screen: None,
        }
    }

    fn control(&mut self) -> ElementControl<'_> {
        ElementControl { state: self }
    }
}

/// Handle passed to event handlers. Gives access to the firing element only.
pub struct ElementControl<'a> {
    state: &'a mut ElementState,
}

impl ElementControl<'_> {
    pub fn id(&self) -> ElementId {
        self.state.id
    }

    pub fn size(&self) -> Vec2 {
        self.state.size
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn computed_style(&self) -> &ComputedStyleSheet {
        &self.state.computed_style
    }

    pub fn is_hovered(&self) -> bool {
        self.state.interaction.contains(InteractionState::HOVERED)
    }

    pub fn is_pressed(&self) -> bool {
        self.state.interaction.contains(InteractionState::PRESSED)
    }

    pub fn is_focused(&self) -> bool {
        self.state.interaction.contains(InteractionState::FOCUSED)
    }

    pub fn set_style(&mut self, selector: &str, sheet: StyleSheet) {
        self.state.styles.set(selector, sheet);
    }

    pub fn style(&self, selector: &str) -> Option<&StyleSheet> {
        self.state.styles.get(selector)
    }

    pub fn style_mut(&mut self, selector: &str) -> Option<&mut StyleSheet> {
        self.state.styles.get_mut(selector)
    }

    pub fn remove_style(&mut self, selector: &str) -> Option<StyleSheet> {
        self.state.styles.remove(selector)
    }

    pub fn enable_trait(&mut self, name: &str) -> bool {
        self.state.traits.enable(name)
    }

    pub fn disable_trait(&mut self, name: &str) -> bool {
        self.state.traits.disable(name)
    }

    pub fn toggle_trait(&mut self, name: &str) -> bool {
        self.state.traits.toggle(name)
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.state.traits.contains(name)
    }

    /// Schedules `callback` for the start of the next frame. Returns `false`
    /// when the element is not mounted on a live screen.
    pub fn execute_next_frame<F>(&self, callback: F) -> bool
    where
        F: FnOnce(&mut BoxElement) + 'static,
    {
        match &self.state.screen {
            Some(screen) => screen.execute_next_frame(callback),
            None => false,
        }
    }
}

pub struct ElementCore {
    state: ElementState,
    handlers: EventHandlers,
}

impl Default for ElementCore {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementCore {
    pub fn new() -> Self {
        Self::new_with_id(next_element_id())
    }

    pub fn new_with_id(id: ElementId) -> Self {
        Self {
            state: ElementState::new(id),
            handlers: EventHandlers::default(),
        }
    }

    pub fn id(&self) -> ElementId {
        self.state.id
    }

    pub fn size(&self) -> Vec2 {
        self.state.size
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.state.size = size;
    }

    pub fn set_size_along(&mut self, axis: Axis, value: f32) {
        self.state.size.set_along(axis, value);
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.state.position = position;
    }

    pub fn computed_style(&self) -> &ComputedStyleSheet {
        &self.state.computed_style
    }

    pub fn interaction(&self) -> InteractionState {
        self.state.interaction
    }

    pub fn is_hovered(&self) -> bool {
        self.state.interaction.contains(InteractionState::HOVERED)
    }

    pub fn is_pressed(&self) -> bool {
        self.state.interaction.contains(InteractionState::PRESSED)
    }

    pub fn is_focused(&self) -> bool {
        self.state.interaction.contains(InteractionState::FOCUSED)
    }

    pub fn is_mounted(&self) -> bool {
        self.state.screen.is_some()
    }

    pub(crate) fn screen(&self) -> Option<&ScreenHandle> {
        self.state.screen.as_ref()
    }

    pub fn control(&mut self) -> ElementControl<'_> {
        self.state.control()
    }

    pub fn set_style(&mut self, selector: &str, sheet: StyleSheet) {
        self.state.styles.set(selector, sheet);
    }

    pub fn style(&self, selector: &str) -> Option<&StyleSheet> {
        self.state.styles.get(selector)
    }

    pub fn style_mut(&mut self, selector: &str) -> Option<&mut StyleSheet> {
        self.state.styles.get_mut(selector)
    }

    pub fn remove_style(&mut self, selector: &str) -> Option<StyleSheet> {
        self.state.styles.remove(selector)
    }

    pub fn styles(&self) -> &StyleRules {
        &self.state.styles
    }

    pub fn enable_trait(&mut self, name: &str) -> bool {
        self.state.traits.enable(name)
    }

    pub fn disable_trait(&mut self, name: &str) -> bool {
        self.state.traits.disable(name)
    }

    pub fn toggle_trait(&mut self, name: &str) -> bool {
        self.state.traits.toggle(name)
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.state.traits.contains(name)
    }

    pub fn on_mount<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>) + 'static,
    {
        self.handlers.mount = Some(Box::new(handler));
    }

    pub fn on_unmount<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>) + 'static,
    {
        self.handlers.unmount = Some(Box::new(handler));
    }

    pub fn on_animate<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>) + 'static,
    {
        self.handlers.animate = Some(Box::new(handler));
    }

    pub fn on_focus<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>) + 'static,
    {
        self.handlers.focus = Some(Box::new(handler));
    }

    pub fn on_unfocus<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>) + 'static,
    {
        self.handlers.unfocus = Some(Box::new(handler));
    }

    pub fn on_mouse_enter<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>) + 'static,
    {
        self.handlers.mouse_enter = Some(Box::new(handler));
    }

    pub fn on_mouse_leave<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>) + 'static,
    {
        self.handlers.mouse_leave = Some(Box::new(handler));
    }

    pub fn on_mouse_release<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>) + 'static,
    {
        self.handlers.mouse_release = Some(Box::new(handler));
    }

    pub fn on_mouse_move<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>, &MouseEvent) + 'static,
    {
        self.handlers.mouse_move = Some(Box::new(handler));
    }

    pub fn on_mouse_down<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>, &MouseEvent) + 'static,
    {
        self.handlers.mouse_down = Some(Box::new(handler));
    }

    pub fn on_mouse_up<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>, &MouseEvent) + 'static,
    {
        self.handlers.mouse_up = Some(Box::new(handler));
    }

    pub fn on_click<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>, &MouseEvent) + 'static,
    {
        self.handlers.click = Some(Box::new(handler));
    }

    pub fn on_scroll<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>, &ScrollEvent) + 'static,
    {
        self.handlers.scroll = Some(Box::new(handler));
    }

    pub fn on_key_down<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>, &KeyEvent) + 'static,
    {
        self.handlers.key_down = Some(Box::new(handler));
    }

    pub fn on_key_up<F>(&mut self, handler: F)
    where
        F: FnMut(&mut ElementControl<'_>, &KeyEvent) + 'static,
    {
        self.handlers.key_up = Some(Box::new(handler));
    }

    fn fire(&mut self, kind: Lifecycle) {
        if let Some(handler) = self.handlers.lifecycle(kind).as_mut() {
            handler(&mut self.state.control());
        }
    }

    fn fire_mouse(&mut self, kind: MouseAction, event: &MouseEvent) {
        if let Some(handler) = self.handlers.mouse(kind).as_mut() {
            handler(&mut self.state.control(), event);
        }
    }

    fn fire_key(&mut self, kind: KeyAction, event: &KeyEvent) {
        if let Some(handler) = self.handlers.key(kind).as_mut() {
            handler(&mut self.state.control(), event);
        }
    }

    pub fn mount(&mut self, screen: ScreenHandle) {
        self.state.screen = Some(screen);
        self.fire(Lifecycle::Mount);
    }

    pub fn unmount(&mut self) {
        self.fire(Lifecycle::Unmount);
        self.state.screen = None;
        self.state.interaction = InteractionState::empty();
    }

    pub fn animate(&mut self) {
        self.fire(Lifecycle::Animate);
    }

    pub fn compute_style(&mut self, parent: Option<&ComputedStyleSheet>) {
        let state = &mut self.state;
        state.computed_style =
            compute_style(&state.styles, &state.traits, state.interaction, parent);

        if !state.computed_style.accepts_pointer() {
            self.release_pointer();
        }
    }

    fn release_pointer(&mut self) {
        if self.state.interaction.contains(InteractionState::HOVERED) {
            self.state.interaction.remove(InteractionState::HOVERED);
            self.fire(Lifecycle::MouseLeave);
        }
        if self.state.interaction.contains(InteractionState::PRESSED) {
            self.state.interaction.remove(InteractionState::PRESSED);
            self.fire(Lifecycle::MouseRelease);
        }
    }

    /// Leaf pass 1: Fixed axes take their literal, the rest collapse to zero.
    pub fn compute_independent_dimensions(&mut self) {
        let sizing = self.state.computed_style.sizing;
        for axis in Axis::ALL {
            let value = match sizing.along(axis) {
                AxisSizingRule::Fixed(value) => value,
                AxisSizingRule::Fit | AxisSizingRule::Fill => 0.0,
            };
            self.state.size.set_along(axis, value);
        }
    }

    /// Half-open rectangle test against the resolved box.
    pub fn intersects(&self, point: Vec2) -> bool {
        let min = self.state.position;
        let max = min + self.state.size;
        point.x >= min.x && point.y >= min.y && point.x < max.x && point.y < max.y
    }

    pub fn handle_mouse_move(&mut self, event: &MouseEvent) {
        if !self.state.computed_style.accepts_pointer() {
            return;
        }

        let inside = self.intersects(event.position);
        let was_hovered = self.is_hovered();
        self.state.interaction.set(InteractionState::HOVERED, inside);

        if inside && !was_hovered {
            trace!(id = self.state.id, "mouse enter");
            self.fire(Lifecycle::MouseEnter);
        } else if !inside && was_hovered {
            trace!(id = self.state.id, "mouse leave");
            self.fire(Lifecycle::MouseLeave);
        }

        if inside {
            self.fire_mouse(MouseAction::Move, event);
        }
    }

    pub fn handle_mouse_down(&mut self, event: &MouseEvent) {
        if !self.state.computed_style.accepts_pointer() {
            return;
        }

        if self.intersects(event.position) {
            self.state.interaction.insert(InteractionState::PRESSED);
            self.fire_mouse(MouseAction::Down, event);
            if !self.is_focused() {
                self.state.interaction.insert(InteractionState::FOCUSED);
                self.fire(Lifecycle::Focus);
            }
        } else if self.is_focused() {
            self.state.interaction.remove(InteractionState::FOCUSED);
            self.fire(Lifecycle::Unfocus);
        }
    }

    pub fn handle_mouse_up(&mut self, event: &MouseEvent) {
        if !self.state.computed_style.accepts_pointer() {
            return;
        }

        let inside = self.intersects(event.position);
        let was_pressed = self.is_pressed();
        self.state.interaction.remove(InteractionState::PRESSED);

        if inside {
            self.fire_mouse(MouseAction::Up, event);
        }
        if was_pressed {
            self.fire(Lifecycle::MouseRelease);
            if inside {
                self.fire_mouse(MouseAction::Click, event);
            }
        }
    }

    pub fn handle_scroll(&mut self, event: &ScrollEvent) {
        if !self.state.computed_style.accepts_pointer() || !self.intersects(event.position) {
            return;
        }
        if let Some(handler) = self.handlers.scroll.as_mut() {
            handler(&mut self.state.control(), event);
        }
    }

    pub fn handle_key_down(&mut self, event: &KeyEvent) {
        self.fire_key(KeyAction::Down, event);
    }

    pub fn handle_key_up(&mut self, event: &KeyEvent) {
        self.fire_key(KeyAction::Up, event);
    }

    /// Background then border. Hidden elements emit nothing.
    pub fn draw_decorations(&self, ctx: &mut RenderContext) {
        let style = &self.state.computed_style;
        if !style.is_visible() {
            return;
        }

        let position = self.state.position;
        let size = self.state.size;

        match &style.background {
            Background::None => {}
            Background::Solid(color) => {
                ctx.set_color(*color);
                ctx.fill_rectangle(position, size);
            }
            Background::Image(image) => draw_image_background(image, position, size, ctx),
        }

        if let Border::Solid { color, width } = style.border {
            ctx.set_color(color);
            ctx.stroke_rectangle(position, size, width);
        }
    }
}

fn draw_image_background(
    image: &ImageBackground,
    element_position: Vec2,
    element_size: Vec2,
    ctx: &mut RenderContext,
) {
    let bitmap = image.bitmap.as_ref();
    if bitmap.width() == 0 || bitmap.height() == 0 {
        return;
    }
    let pixels = Vec2::new(bitmap.width() as f32, bitmap.height() as f32);

    let mut size = Vec2::ZERO;
    for axis in Axis::ALL {
        let value = match image.sizing.along(axis) {
            AxisSizingRule::Fixed(value) => value,
            AxisSizingRule::Fit => pixels.along(axis),
            AxisSizingRule::Fill => element_size.along(axis),
        };
        size.set_along(axis, value);
    }

    let origin = match image.positioning {
        PositioningRule::Static => element_position,
        PositioningRule::Relative(offset) => element_position + offset,
        PositioningRule::Absolute(offset) => offset,
    };

    if let Some(reference) = image.transparency {
        draw_checkerboard(&reference, origin, size, element_position, element_size, ctx);
    }

    let scale = size / pixels;
    let single_point = scale == Vec2::ONE;
    for y in 0..bitmap.height() {
        for x in 0..bitmap.width() {
            let color = bitmap.pixel(x, y);
            if color.is_transparent() {
                continue;
            }
            let at = origin + Vec2::new(x as f32, y as f32) * scale;
            ctx.set_color(color);
            if single_point {
                ctx.fill_point(at);
            } else {
                ctx.fill_rectangle(at, scale);
            }
        }
    }
}

/// Checker cells under the image, clipped to the element's box. Cell parity
/// stays anchored at the image origin.
fn draw_checkerboard(
    reference: &TransparencyReference,
    origin: Vec2,
    size: Vec2,
    element_position: Vec2,
    element_size: Vec2,
    ctx: &mut RenderContext,
) {
    let cell_size = reference.cell_size;
    if cell_size.is_nan() || cell_size <= 0.0 {
        return;
    }
    let visible_min = (element_position - origin).max(Vec2::ZERO);
    let visible_max = (element_position + element_size - origin).min(size);
    if visible_min.x >= visible_max.x || visible_min.y >= visible_max.y {
        return;
    }

    let first = (visible_min / cell_size).floor();
    let last = (visible_max / cell_size).ceil();
    for row in first.y as u32..last.y as u32 {
        for column in first.x as u32..last.x as u32 {
            let offset = Vec2::new(column as f32, row as f32) * cell_size;
            let cell_min = offset.max(visible_min);
            let cell_max = (offset + Vec2::splat(cell_size)).min(visible_max);
            let color = if (row + column) % 2 == 0 {
                reference.light
            } else {
                reference.dark
            };
            ctx.set_color(color);
            ctx.fill_rectangle(origin + cell_min, cell_max - cell_min);
        }
    }
}
