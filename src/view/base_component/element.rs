use std::any::Any;

use tracing::trace;

use super::{ElementCore, ElementId};
use crate::geometry::{AlongAxis, Axis, Vec2, vec2_from_axes};
use crate::style::{Alignment, AxisSizingRule, ComputedStyleSheet, PositioningRule, StyleSheet};
use crate::ui::{KeyEvent, MouseEvent, ScrollEvent};
use crate::view::render_command::RenderContext;
use crate::view::screen::ScreenHandle;

/// The three sizing and placement passes.
pub trait Layoutable {
    /// Pass 1: resolve Fixed and Fit axes, children first.
    fn compute_independent_dimensions(&mut self);
    /// Pass 2: hand remaining space to Fill children, then recurse.
    fn compute_responsive_dimensions(&mut self);
    /// Pass 3: place children from this element's resolved position.
    fn compute_position(&mut self);
}

pub trait ElementTrait: Layoutable + Any {
    fn core(&self) -> &ElementCore;
    fn core_mut(&mut self) -> &mut ElementCore;
    fn children(&self) -> Option<&[Box<dyn ElementTrait>]>;
    /// Core and children borrowed at once, for passes that read one while
    /// walking the other.
    fn split_mut(&mut self) -> (&mut ElementCore, Option<&mut [Box<dyn ElementTrait>]>);

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn id(&self) -> ElementId {
        self.core().id()
    }

    fn children_mut(&mut self) -> Option<&mut [Box<dyn ElementTrait>]> {
        self.split_mut().1
    }

    fn mount(&mut self, screen: ScreenHandle) {
        let (core, children) = self.split_mut();
        core.mount(screen.clone());
        for child in children.into_iter().flatten() {
            child.mount(screen.clone());
        }
    }

    fn unmount(&mut self) {
        let (core, children) = self.split_mut();
        for child in children.into_iter().flatten() {
            child.unmount();
        }
        core.unmount();
    }

    fn animate(&mut self) {
        let (core, children) = self.split_mut();
        core.animate();
        for child in children.into_iter().flatten() {
            child.animate();
        }
    }

    fn compute_style(&mut self, parent: Option<&ComputedStyleSheet>) {
        let (core, children) = self.split_mut();
        core.compute_style(parent);
        for child in children.into_iter().flatten() {
            child.compute_style(Some(core.computed_style()));
        }
    }

    fn intersects(&self, point: Vec2) -> bool {
        self.core().intersects(point)
    }

    /// Own decorations first, then children in list order.
    fn draw(&self, ctx: &mut RenderContext) {
        self.core().draw_decorations(ctx);
        for child in self.children().into_iter().flatten() {
            child.draw(ctx);
        }
    }

    fn process_mouse_move(&mut self, event: &MouseEvent) {
        let (core, children) = self.split_mut();
        core.handle_mouse_move(event);
        for child in children.into_iter().flatten() {
            child.process_mouse_move(event);
        }
    }

    fn process_mouse_down(&mut self, event: &MouseEvent) {
        let (core, children) = self.split_mut();
        core.handle_mouse_down(event);
        for child in children.into_iter().flatten() {
            child.process_mouse_down(event);
        }
    }

    fn process_mouse_up(&mut self, event: &MouseEvent) {
        let (core, children) = self.split_mut();
        core.handle_mouse_up(event);
        for child in children.into_iter().flatten() {
            child.process_mouse_up(event);
        }
    }

    fn process_mouse_scroll(&mut self, event: &ScrollEvent) {
        let (core, children) = self.split_mut();
        core.handle_scroll(event);
        for child in children.into_iter().flatten() {
            child.process_mouse_scroll(event);
        }
    }

    fn process_keyboard_down(&mut self, event: &KeyEvent) {
        let (core, children) = self.split_mut();
        core.handle_key_down(event);
        for child in children.into_iter().flatten() {
            child.process_keyboard_down(event);
        }
    }

    fn process_keyboard_up(&mut self, event: &KeyEvent) {
        let (core, children) = self.split_mut();
        core.handle_key_up(event);
        for child in children.into_iter().flatten() {
            child.process_keyboard_up(event);
        }
    }
}

/// Container that lays its children out along one axis.
#[derive(Default)]
pub struct BoxElement {
    core: ElementCore,
    children: Vec<Box<dyn ElementTrait>>,
}

impl BoxElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_id(id: ElementId) -> Self {
        Self {
            core: ElementCore::new_with_id(id),
            children: Vec::new(),
        }
    }

    pub fn with_style(mut self, selector: &str, sheet: StyleSheet) -> Self {
        self.core.set_style(selector, sheet);
        self
    }

    pub fn with_child(mut self, child: Box<dyn ElementTrait>) -> Self {
        self.add_child(child);
        self
    }

    /// Appends `child`, mounting it when this box is already mounted.
    pub fn add_child(&mut self, mut child: Box<dyn ElementTrait>) -> ElementId {
        if let Some(screen) = self.core.screen() {
            child.mount(screen.clone());
        }
        let id = child.id();
        self.children.push(child);
        id
    }

    pub fn remove_child(&mut self, id: ElementId) -> Option<Box<dyn ElementTrait>> {
        let index = self.children.iter().position(|child| child.id() == id)?;
        let mut child = self.children.remove(index);
        if child.core().is_mounted() {
            child.unmount();
        }
        Some(child)
    }

    pub fn clear_children(&mut self) {
        for mut child in self.children.drain(..) {
            if child.core().is_mounted() {
                child.unmount();
            }
        }
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child(&self, index: usize) -> Option<&dyn ElementTrait> {
        self.children.get(index).map(|child| child.as_ref())
    }

    pub fn child_mut(&mut self, index: usize) -> Option<&mut (dyn ElementTrait + 'static)> {
        self.children.get_mut(index).map(|child| child.as_mut())
    }

    pub fn set_style(&mut self, selector: &str, sheet: StyleSheet) {
        self.core.set_style(selector, sheet);
    }

    pub fn style(&self, selector: &str) -> Option<&StyleSheet> {
        self.core.style(selector)
    }

    pub fn style_mut(&mut self, selector: &str) -> Option<&mut StyleSheet> {
        self.core.style_mut(selector)
    }

    pub fn remove_style(&mut self, selector: &str) -> Option<StyleSheet> {
        self.core.remove_style(selector)
    }

    pub fn enable_trait(&mut self, name: &str) -> bool {
        self.core.enable_trait(name)
    }

    pub fn disable_trait(&mut self, name: &str) -> bool {
        self.core.disable_trait(name)
    }

    pub fn toggle_trait(&mut self, name: &str) -> bool {
        self.core.toggle_trait(name)
    }

    pub fn has_trait(&self, name: &str) -> bool {
        self.core.has_trait(name)
    }

    /// Cascade plus the three passes with this box as the root. Fill axes
    /// take the viewport size and the position comes from the box's own
    /// positioning rule.
    pub fn layout(&mut self, viewport: Vec2) {
        self.compute_style(None);
        self.compute_independent_dimensions();

        let style = self.core.computed_style();
        let sizing = style.sizing;
        let positioning = style.positioning;
        for axis in Axis::ALL {
            if sizing.along(axis).is_fill() {
                self.core.set_size_along(axis, viewport.along(axis));
            }
        }
        self.compute_responsive_dimensions();

        let origin = match positioning {
            PositioningRule::Static => Vec2::ZERO,
            PositioningRule::Relative(offset) | PositioningRule::Absolute(offset) => offset,
        };
        self.core.set_position(origin);
        self.compute_position();
    }

    fn static_children(&self) -> impl Iterator<Item = &Box<dyn ElementTrait>> {
        self.children
            .iter()
            .filter(|child| child.core().computed_style().positioning.is_static())
    }

    /// Σ static primary sizes plus one gap per static child.
    fn static_content(&self, primary: Axis, gap: f32) -> f32 {
        self.static_children()
            .map(|child| child.core().size().along(primary) + gap)
            .sum()
    }
}

fn aligned_start(
    alignment: Alignment,
    position: f32,
    size: f32,
    content: f32,
    padding_start: f32,
    padding_end: f32,
) -> f32 {
    match alignment {
        Alignment::Start => position + padding_start,
        Alignment::Center => position + padding_start.max((size - content) / 2.0),
        Alignment::End => position + size - content - padding_end,
    }
}

impl Layoutable for BoxElement {
    fn compute_independent_dimensions(&mut self) {
        for child in self.children.iter_mut() {
            child.compute_independent_dimensions();
        }

        let style = self.core.computed_style();
        let primary = style.direction.primary_axis();
        let secondary = primary.complement();
        let sizing = style.sizing;
        let padding = style.padding;
        let gap = style.gap;

        let mut content_primary = 0.0;
        let mut content_secondary: f32 = 0.0;
        for child in self.static_children() {
            let child_sizing = child.core().computed_style().sizing;
            let child_size = child.core().size();
            if child_sizing.along(primary).contributes_to_content() {
                content_primary += child_size.along(primary);
            }
            content_primary += gap;
            if child_sizing.along(secondary).contributes_to_content() {
                content_secondary = content_secondary.max(child_size.along(secondary));
            }
        }
        let content = vec2_from_axes(primary, content_primary, content_secondary);

        for axis in Axis::ALL {
            let value = match sizing.along(axis) {
                AxisSizingRule::Fixed(value) => value,
                AxisSizingRule::Fit => content.along(axis) + padding.total(axis),
                AxisSizingRule::Fill => 0.0,
            };
            self.core.set_size_along(axis, value);
        }

        trace!(
            id = self.core.id(),
            width = self.core.size().x,
            height = self.core.size().y,
            "independent dimensions"
        );
    }

    fn compute_responsive_dimensions(&mut self) {
        let style = self.core.computed_style();
        let primary = style.direction.primary_axis();
        let secondary = primary.complement();
        let padding = style.padding;
        let gap = style.gap;
        let size = self.core.size();

        let remaining =
            size.along(primary) - padding.total(primary) - self.static_content(primary, gap);
        let fillable = self
            .static_children()
            .filter(|child| child.core().computed_style().sizing.along(primary).is_fill())
            .count();
        let share = remaining / fillable.max(1) as f32;
        let secondary_span = size.along(secondary) - padding.total(secondary);

        for child in self.children.iter_mut() {
            let child_style = child.core().computed_style();
            let child_sizing = child_style.sizing;
            if child_style.positioning.is_static() {
                if fillable > 0 && child_sizing.along(primary).is_fill() {
                    child.core_mut().set_size_along(primary, share);
                }
                if child_sizing.along(secondary).is_fill() {
                    child.core_mut().set_size_along(secondary, secondary_span);
                }
            } else {
                for axis in Axis::ALL {
                    if child_sizing.along(axis).is_fill() {
                        child.core_mut().set_size_along(axis, size.along(axis));
                    }
                }
            }
        }

        trace!(id = self.core.id(), remaining, fillable, "responsive dimensions");

        for child in self.children.iter_mut() {
            child.compute_responsive_dimensions();
        }
    }

    fn compute_position(&mut self) {
        let style = self.core.computed_style();
        let primary = style.direction.primary_axis();
        let secondary = primary.complement();
        let alignment = style.alignment;
        let padding = style.padding;
        let gap = style.gap;
        let position = self.core.position();
        let size = self.core.size();

        let content = self.static_content(primary, gap);
        let mut cursor = aligned_start(
            alignment.along(primary),
            position.along(primary),
            size.along(primary),
            content,
            padding.start(primary),
            padding.end(primary),
        );

        for child in self.children.iter_mut() {
            let child_size = child.core().size();
            let placed = match child.core().computed_style().positioning {
                PositioningRule::Static => {
                    let cross = aligned_start(
                        alignment.along(secondary),
                        position.along(secondary),
                        size.along(secondary),
                        child_size.along(secondary),
                        padding.start(secondary),
                        padding.end(secondary),
                    );
                    let at = vec2_from_axes(primary, cursor, cross);
                    cursor += child_size.along(primary) + gap;
                    at
                }
                PositioningRule::Relative(offset) => position + offset,
                PositioningRule::Absolute(offset) => offset,
            };
            child.core_mut().set_position(placed);
            trace!(id = child.id(), x = placed.x, y = placed.y, "position");
        }

        for child in self.children.iter_mut() {
            child.compute_position();
        }
    }
}

impl ElementTrait for BoxElement {
    fn core(&self) -> &ElementCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ElementCore {
        &mut self.core
    }

    fn children(&self) -> Option<&[Box<dyn ElementTrait>]> {
        Some(self.children.as_slice())
    }

    fn split_mut(&mut self) -> (&mut ElementCore, Option<&mut [Box<dyn ElementTrait>]>) {
        (&mut self.core, Some(self.children.as_mut_slice()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BoxAlignment, BoxDirection, BoxPadding, SizingRule};
    use crate::view::Text;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn fixed(width: f32, height: f32) -> BoxElement {
        let sheet = StyleSheet::new().with_sizing(SizingRule::fixed(width, height));
        BoxElement::new().with_style("", sheet)
    }

    fn sized(rule: SizingRule) -> BoxElement {
        BoxElement::new().with_style("", StyleSheet::new().with_sizing(rule))
    }

    fn child_position(parent: &BoxElement, index: usize) -> Vec2 {
        parent
            .child(index)
            .map(|child| child.core().position())
            .expect("child exists")
    }

    fn child_size(parent: &BoxElement, index: usize) -> Vec2 {
        parent
            .child(index)
            .map(|child| child.core().size())
            .expect("child exists")
    }

    #[test]
    fn fixed_axes_ignore_content() {
        let mut root = fixed(30.0, 20.0).with_child(Box::new(fixed(500.0, 500.0)));
        root.layout(Vec2::new(800.0, 600.0));
        assert_eq!(root.core().size(), Vec2::new(30.0, 20.0));
    }

    #[test]
    fn fit_width_accumulates_one_gap_per_child() {
        for count in [0usize, 1, 3] {
            let mut root = BoxElement::new().with_style("", StyleSheet::new().with_gap(4.0));
            for _ in 0..count {
                root.add_child(Box::new(fixed(10.0, 5.0)));
            }
            root.layout(Vec2::new(800.0, 600.0));
            assert_eq!(root.core().size().x, count as f32 * 10.0 + count as f32 * 4.0);
        }

        let mut no_gap = BoxElement::new();
        for _ in 0..3 {
            no_gap.add_child(Box::new(fixed(10.0, 5.0)));
        }
        no_gap.layout(Vec2::new(800.0, 600.0));
        assert_eq!(no_gap.core().size(), Vec2::new(30.0, 5.0));
    }

    #[test]
    fn gap_scenario_places_children_with_spacing() {
        let mut root = BoxElement::new().with_style(
            "",
            StyleSheet::new()
                .with_sizing(SizingRule::new(AxisSizingRule::Fixed(300.0), AxisSizingRule::Fit))
                .with_gap(10.0),
        );
        for _ in 0..3 {
            root.add_child(Box::new(fixed(50.0, 40.0)));
        }
        root.layout(Vec2::new(800.0, 600.0));

        assert_eq!(root.core().size(), Vec2::new(300.0, 40.0));
        let xs: Vec<f32> = (0..3).map(|index| child_position(&root, index).x).collect();
        assert_eq!(xs, vec![0.0, 60.0, 120.0]);
    }

    #[test]
    fn single_fill_child_takes_the_remainder() {
        let mut root = fixed(200.0, 50.0)
            .with_style(
                "",
                StyleSheet::new()
                    .with_sizing(SizingRule::fixed(200.0, 50.0))
                    .with_padding(BoxPadding::symmetric(5.0, 5.0))
                    .with_gap(2.0),
            )
            .with_child(Box::new(fixed(40.0, 10.0)))
            .with_child(Box::new(sized(SizingRule::fill())));
        root.layout(Vec2::new(800.0, 600.0));

        // 200 - 10 padding - 2 * 2 gap - 40
        assert_eq!(child_size(&root, 1), Vec2::new(146.0, 40.0));
        assert_eq!(child_position(&root, 1), Vec2::new(5.0 + 40.0 + 2.0, 5.0));
    }

    #[test]
    fn fill_children_split_evenly() {
        let mut root = fixed(90.0, 10.0)
            .with_child(Box::new(sized(SizingRule::new(AxisSizingRule::Fill, AxisSizingRule::Fit))))
            .with_child(Box::new(sized(SizingRule::new(AxisSizingRule::Fill, AxisSizingRule::Fit))))
            .with_child(Box::new(fixed(30.0, 10.0)));
        root.layout(Vec2::new(800.0, 600.0));

        assert_eq!(child_size(&root, 0).x, 30.0);
        assert_eq!(child_size(&root, 1).x, 30.0);
        assert_eq!(child_position(&root, 2).x, 60.0);
    }

    #[test]
    fn overflowing_fixed_children_give_negative_shares() {
        let mut root = fixed(50.0, 10.0)
            .with_child(Box::new(fixed(80.0, 10.0)))
            .with_child(Box::new(sized(SizingRule::fill())));
        root.layout(Vec2::new(800.0, 600.0));
        assert_eq!(child_size(&root, 1).x, -30.0);
    }

    #[test]
    fn left_padding_offsets_first_child() {
        let mut root = BoxElement::new()
            .with_style(
                "",
                StyleSheet::new()
                    .with_sizing(SizingRule::fixed(100.0, 100.0))
                    .with_padding(BoxPadding::new(0.0, 0.0, 0.0, 10.0)),
            )
            .with_child(Box::new(fixed(20.0, 20.0)));
        root.layout(Vec2::new(800.0, 600.0));
        assert_eq!(child_position(&root, 0).x, root.core().position().x + 10.0);
    }

    #[test]
    fn center_and_end_alignment() {
        let mut centered = BoxElement::new()
            .with_style(
                "",
                StyleSheet::new()
                    .with_sizing(SizingRule::fixed(100.0, 50.0))
                    .with_alignment(BoxAlignment::center()),
            )
            .with_child(Box::new(fixed(20.0, 10.0)));
        centered.layout(Vec2::new(800.0, 600.0));
        assert_eq!(child_position(&centered, 0), Vec2::new(40.0, 20.0));

        let mut ended = BoxElement::new()
            .with_style(
                "",
                StyleSheet::new()
                    .with_sizing(SizingRule::fixed(100.0, 50.0))
                    .with_padding(BoxPadding::uniform(5.0))
                    .with_alignment(BoxAlignment::new(Alignment::End, Alignment::End)),
            )
            .with_child(Box::new(fixed(20.0, 10.0)));
        ended.layout(Vec2::new(800.0, 600.0));
        assert_eq!(child_position(&ended, 0), Vec2::new(75.0, 35.0));
    }

    #[test]
    fn column_direction_stacks_vertically() {
        let mut root = BoxElement::new()
            .with_style(
                "",
                StyleSheet::new()
                    .with_direction(BoxDirection::Column)
                    .with_gap(5.0),
            )
            .with_child(Box::new(fixed(10.0, 20.0)))
            .with_child(Box::new(fixed(30.0, 20.0)));
        root.layout(Vec2::new(800.0, 600.0));

        assert_eq!(root.core().size(), Vec2::new(30.0, 50.0));
        assert_eq!(child_position(&root, 1), Vec2::new(0.0, 25.0));
    }

    #[test]
    fn out_of_flow_children_take_no_space() {
        let relative = BoxElement::new().with_style(
            "",
            StyleSheet::new()
                .with_sizing(SizingRule::fixed(5.0, 5.0))
                .with_positioning(PositioningRule::Relative(Vec2::new(3.0, 4.0))),
        );
        let absolute = BoxElement::new().with_style(
            "",
            StyleSheet::new()
                .with_sizing(SizingRule::fill())
                .with_positioning(PositioningRule::Absolute(Vec2::new(7.0, 8.0))),
        );
        let mut root = BoxElement::new()
            .with_style(
                "",
                StyleSheet::new()
                    .with_sizing(SizingRule::new(AxisSizingRule::Fit, AxisSizingRule::Fixed(40.0)))
                    .with_positioning(PositioningRule::Absolute(Vec2::new(100.0, 100.0)))
                    .with_padding(BoxPadding::uniform(2.0)),
            )
            .with_child(Box::new(relative))
            .with_child(Box::new(fixed(10.0, 10.0)))
            .with_child(Box::new(absolute));
        root.layout(Vec2::new(800.0, 600.0));

        assert_eq!(root.core().size(), Vec2::new(14.0, 40.0));
        assert_eq!(child_position(&root, 0), Vec2::new(103.0, 104.0));
        assert_eq!(child_position(&root, 1), Vec2::new(102.0, 102.0));
        assert_eq!(child_position(&root, 2), Vec2::new(7.0, 8.0));
        assert_eq!(child_size(&root, 2), Vec2::new(14.0, 40.0));
    }

    #[test]
    fn root_fill_takes_viewport() {
        let mut root = sized(SizingRule::fill()).with_child(Box::new(sized(SizingRule::fill())));
        root.layout(Vec2::new(640.0, 480.0));
        assert_eq!(root.core().size(), Vec2::new(640.0, 480.0));
        assert_eq!(child_size(&root, 0), Vec2::new(640.0, 480.0));
    }

    #[test]
    fn nested_fit_boxes_measure_text() {
        let inner = BoxElement::new()
            .with_style("", StyleSheet::new().with_padding(BoxPadding::uniform(1.0)))
            .with_child(Box::new(Text::new("abcd")));
        let mut root = BoxElement::new().with_child(Box::new(inner));
        root.layout(Vec2::new(800.0, 600.0));

        assert_eq!(child_size(&root, 0), Vec2::new(34.0, 18.0));
        assert_eq!(root.core().size(), Vec2::new(34.0, 18.0));
    }

    #[test]
    fn mount_runs_parent_first_and_unmount_children_first() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut child = fixed(1.0, 1.0);
        let mut root = fixed(1.0, 1.0);
        for (element, name) in [(&mut root, "root"), (&mut child, "child")] {
            let mounted = log.clone();
            element
                .core_mut()
                .on_mount(move |_| mounted.borrow_mut().push(format!("mount {name}")));
            let unmounted = log.clone();
            element
                .core_mut()
                .on_unmount(move |_| unmounted.borrow_mut().push(format!("unmount {name}")));
        }
        root.add_child(Box::new(child));

        root.mount(ScreenHandle::default());
        root.unmount();

        assert_eq!(
            *log.borrow(),
            vec!["mount root", "mount child", "unmount child", "unmount root"]
        );
    }

    #[test]
    fn children_added_to_a_mounted_box_are_mounted() {
        let mut root = BoxElement::new();
        root.mount(ScreenHandle::default());

        let id = root.add_child(Box::new(BoxElement::new()));
        assert!(root.child(0).is_some_and(|child| child.core().is_mounted()));

        let removed = root.remove_child(id).expect("child was added");
        assert!(!removed.core().is_mounted());
        assert_eq!(root.child_count(), 0);
        assert!(root.remove_child(id).is_none());
    }

    #[test]
    fn input_reaches_every_child() {
        let hits = Rc::new(RefCell::new(Vec::new()));
        let mut root = fixed(100.0, 100.0);
        for _ in 0..2 {
            let mut child = fixed(10.0, 10.0);
            let hits = hits.clone();
            child
                .core_mut()
                .on_key_down(move |control, _| hits.borrow_mut().push(control.id()));
            root.add_child(Box::new(child));
        }
        root.layout(Vec2::new(100.0, 100.0));
        root.process_keyboard_down(&KeyEvent::new("a"));
        assert_eq!(hits.borrow().len(), 2);
    }

    #[test]
    fn active_lasts_while_pressed_and_focus_outlives_the_release() {
        let mut root = fixed(100.0, 100.0);
        let button = fixed(20.0, 20.0)
            .with_style(":active", StyleSheet::new().with_gap(1.0))
            .with_style(":focus", StyleSheet::new().with_padding(BoxPadding::uniform(2.0)));
        root.add_child(Box::new(button));
        root.layout(Vec2::new(100.0, 100.0));

        let style = |root: &BoxElement| {
            let computed = root.child(0).expect("child exists").core().computed_style();
            (computed.gap, computed.padding.left)
        };
        assert_eq!(style(&root), (0.0, 0.0));

        root.process_mouse_down(&MouseEvent::new(Vec2::splat(5.0)));
        root.layout(Vec2::new(100.0, 100.0));
        assert_eq!(style(&root), (1.0, 2.0));

        root.process_mouse_up(&MouseEvent::new(Vec2::splat(5.0)));
        root.layout(Vec2::new(100.0, 100.0));
        assert_eq!(style(&root), (0.0, 2.0));

        root.process_mouse_down(&MouseEvent::new(Vec2::splat(50.0)));
        root.process_mouse_up(&MouseEvent::new(Vec2::splat(50.0)));
        root.layout(Vec2::new(100.0, 100.0));
        assert_eq!(style(&root), (0.0, 0.0));
    }

    #[test]
    fn children_inherit_foreground_through_the_cascade() {
        let mut root = BoxElement::new()
            .with_style("", StyleSheet::new().with_foreground(crate::style::Color::WHITE))
            .with_child(Box::new(BoxElement::new()));
        root.layout(Vec2::new(10.0, 10.0));
        let child = root.child(0).expect("child exists");
        assert_eq!(child.core().computed_style().foreground, crate::style::Color::WHITE);
    }
}
