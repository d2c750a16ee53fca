use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::Vec2;

mod core;
mod element;
mod text;

pub use self::core::*;
pub use element::*;
pub use text::*;

pub type ElementId = u64;

fn next_element_id() -> ElementId {
    static NEXT_ID: AtomicU64 = AtomicU64::new(1);
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Resolved geometry of one element after a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxModelSnapshot {
    pub id: ElementId,
    pub parent_id: Option<ElementId>,
    pub position: Vec2,
    pub size: Vec2,
}

impl BoxModelSnapshot {
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.position + self.size;
        point.x >= self.position.x
            && point.y >= self.position.y
            && point.x < max.x
            && point.y < max.y
    }
}

pub fn collect_box_models(root: &dyn ElementTrait) -> Vec<BoxModelSnapshot> {
    fn walk(
        node: &dyn ElementTrait,
        parent_id: Option<ElementId>,
        out: &mut Vec<BoxModelSnapshot>,
    ) {
        let core = node.core();
        out.push(BoxModelSnapshot {
            id: core.id(),
            parent_id,
            position: core.position(),
            size: core.size(),
        });
        if let Some(children) = node.children() {
            for child in children {
                walk(child.as_ref(), Some(core.id()), out);
            }
        }
    }

    let mut out = Vec::new();
    walk(root, None, &mut out);
    out
}

pub fn find_element(root: &dyn ElementTrait, id: ElementId) -> Option<&dyn ElementTrait> {
    if root.id() == id {
        return Some(root);
    }
    root.children()?
        .iter()
        .find_map(|child| find_element(child.as_ref(), id))
}

pub fn find_element_mut(
    root: &mut dyn ElementTrait,
    id: ElementId,
) -> Option<&mut dyn ElementTrait> {
    if root.id() != id {
        return root
            .children_mut()?
            .iter_mut()
            .find_map(|child| find_element_mut(child.as_mut(), id));
    }
    Some(root)
}

/// Topmost element under `point`, children painted later win.
pub fn hit_test(root: &dyn ElementTrait, point: Vec2) -> Option<ElementId> {
    if let Some(children) = root.children() {
        for child in children.iter().rev() {
            if let Some(id) = hit_test(child.as_ref(), point) {
                return Some(id);
            }
        }
    }
    root.core().intersects(point).then(|| root.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{SizingRule, StyleSheet};

    fn fixed_box(width: f32, height: f32) -> BoxElement {
        let sheet = StyleSheet::new().with_sizing(SizingRule::fixed(width, height));
        BoxElement::new().with_style("", sheet)
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(next_element_id(), next_element_id());
    }

    #[test]
    fn lookups_walk_the_whole_tree() {
        let mut root = BoxElement::new();
        let mut middle = BoxElement::new();
        let leaf = Text::new("deep");
        let leaf_id = leaf.id();
        middle.add_child(Box::new(leaf));
        let middle_id = root.add_child(Box::new(middle));

        assert_eq!(find_element(&root, leaf_id).map(|node| node.id()), Some(leaf_id));
        assert!(find_element(&root, 0).is_none());

        let found = find_element_mut(&mut root, middle_id)
            .and_then(|node| node.as_any_mut().downcast_mut::<BoxElement>());
        assert!(found.is_some());
    }

    #[test]
    fn snapshots_follow_paint_order_and_hit_test_prefers_topmost() {
        let mut root = fixed_box(100.0, 100.0);
        let back = root.add_child(Box::new(fixed_box(50.0, 50.0)));
        let front = root.add_child(Box::new(fixed_box(50.0, 50.0).with_style(
            "",
            StyleSheet::new()
                .with_sizing(SizingRule::fixed(50.0, 50.0))
                .with_positioning(crate::style::PositioningRule::Relative(Vec2::ZERO)),
        )));
        root.layout(Vec2::new(100.0, 100.0));

        let models = collect_box_models(&root);
        assert_eq!(models.len(), 3);
        assert_eq!(models[1].id, back);
        assert_eq!(models[2].parent_id, Some(root.id()));
        assert!(models[2].contains(Vec2::splat(10.0)));

        assert_eq!(hit_test(&root, Vec2::splat(10.0)), Some(front));
        assert_eq!(hit_test(&root, Vec2::splat(80.0)), Some(root.id()));
        assert_eq!(hit_test(&root, Vec2::splat(200.0)), None);
    }
}
