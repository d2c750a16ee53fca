use crate::style::color::Color;
use crate::style::layout_rules::{
    BoxAlignment, BoxDirection, BoxPadding, PositioningRule, SizingRule,
};
use crate::style::selector::{StyleRules, TraitSet};
use crate::style::style_sheet::{Background, Border, PointerEvents, StyleSheet, Visibility};
use crate::ui::InteractionState;

#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyleSheet {
    pub visibility: Visibility,
    pub pointer_events: PointerEvents,
    pub sizing: SizingRule,
    pub positioning: PositioningRule,
    pub foreground: Color,
    pub background: Background,
    pub border: Border,
    pub direction: BoxDirection,
    pub alignment: BoxAlignment,
    pub padding: BoxPadding,
    pub gap: f32,
}

impl Default for ComputedStyleSheet {
    fn default() -> Self {
        Self {
            visibility: Visibility::Visible,
            pointer_events: PointerEvents::Auto,
            sizing: SizingRule::fit(),
            positioning: PositioningRule::Static,
            foreground: Color::BLACK,
            background: Background::None,
            border: Border::None,
            direction: BoxDirection::Row,
            alignment: BoxAlignment::default(),
            padding: BoxPadding::default(),
            gap: 0.0,
        }
    }
}

impl ComputedStyleSheet {
    /// Copies the inherited properties from `parent`.
    pub fn inherit(&mut self, parent: &ComputedStyleSheet) {
        self.pointer_events = parent.pointer_events;
        self.visibility = parent.visibility;
        self.foreground = parent.foreground;
    }

    pub fn apply(&mut self, sheet: &StyleSheet) {
        if let Some(value) = sheet.visibility {
            self.visibility = value;
        }
        if let Some(value) = sheet.pointer_events {
            self.pointer_events = value;
        }
        if let Some(value) = sheet.sizing {
            self.sizing = value;
        }
        if let Some(value) = sheet.positioning {
            self.positioning = value;
        }
        if let Some(value) = sheet.foreground {
            self.foreground = value;
        }
        if let Some(value) = &sheet.background {
            self.background = value.clone();
        }
        if let Some(value) = sheet.border {
            self.border = value;
        }
        if let Some(value) = sheet.direction {
            self.direction = value;
        }
        if let Some(value) = sheet.alignment {
            self.alignment = value;
        }
        if let Some(value) = sheet.padding {
            self.padding = value;
        }
        if let Some(value) = sheet.gap {
            self.gap = value;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    pub fn accepts_pointer(&self) -> bool {
        self.pointer_events == PointerEvents::Auto
    }
}

/// Defaults, then inherited properties, then every matching entry in
/// registration order.
pub fn compute_style(
    rules: &StyleRules,
    traits: &TraitSet,
    interaction: InteractionState,
    parent: Option<&ComputedStyleSheet>,
) -> ComputedStyleSheet {
    let mut computed = ComputedStyleSheet::default();

    if let Some(parent) = parent {
        computed.inherit(parent);
    }

    for rule in rules.iter() {
        if rule.selector.matches(traits, interaction) {
            computed.apply(&rule.sheet);
        }
    }

    computed
}
