use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;

use crate::style::style_sheet::StyleSheet;
use crate::ui::InteractionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateCondition {
    Always,
    Hover,
    Active,
    Focus,
    /// Unrecognised pseudo-state. The entry never applies.
    Never,
}

impl StateCondition {
    fn parse(suffix: &str) -> Self {
        match suffix {
            "hover" => StateCondition::Hover,
            "active" => StateCondition::Active,
            "focus" => StateCondition::Focus,
            _ => StateCondition::Never,
        }
    }

    pub fn holds(self, interaction: InteractionState) -> bool {
        match self {
            StateCondition::Always => true,
            StateCondition::Hover => interaction.contains(InteractionState::HOVERED),
            StateCondition::Active => interaction.contains(InteractionState::PRESSED),
            StateCondition::Focus => interaction.contains(InteractionState::FOCUSED),
            StateCondition::Never => false,
        }
    }
}

/// `trait[":"state]`, split at the first colon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    pub trait_name: SmolStr,
    pub condition: StateCondition,
}

impl Selector {
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((trait_name, state)) => Self {
                trait_name: SmolStr::new(trait_name),
                condition: StateCondition::parse(state),
            },
            None => Self {
                trait_name: SmolStr::new(raw),
                condition: StateCondition::Always,
            },
        }
    }

    pub fn matches(&self, traits: &TraitSet, interaction: InteractionState) -> bool {
        (self.trait_name.is_empty() || traits.contains(&self.trait_name))
            && self.condition.holds(interaction)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub raw: SmolStr,
    pub selector: Selector,
    pub sheet: StyleSheet,
}

/// Registration-ordered style entries, one per selector string.
#[derive(Debug, Clone, Default)]
pub struct StyleRules {
    rules: Vec<StyleRule>,
    index: FxHashMap<SmolStr, usize>,
}

impl StyleRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replaces an existing entry in place, otherwise appends.
    pub fn set(&mut self, raw: &str, sheet: StyleSheet) {
        if let Some(&slot) = self.index.get(raw) {
            self.rules[slot].sheet = sheet;
            return;
        }
        let raw = SmolStr::new(raw);
        self.index.insert(raw.clone(), self.rules.len());
        self.rules.push(StyleRule {
            selector: Selector::parse(&raw),
            raw,
            sheet,
        });
    }

    pub fn get(&self, raw: &str) -> Option<&StyleSheet> {
        self.index.get(raw).map(|&slot| &self.rules[slot].sheet)
    }

    pub fn get_mut(&mut self, raw: &str) -> Option<&mut StyleSheet> {
        let slot = *self.index.get(raw)?;
        Some(&mut self.rules[slot].sheet)
    }

    pub fn remove(&mut self, raw: &str) -> Option<StyleSheet> {
        let slot = self.index.remove(raw)?;
        let removed = self.rules.remove(slot);
        for position in self.index.values_mut() {
            if *position > slot {
                *position -= 1;
            }
        }
        Some(removed.sheet)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitSet(FxHashSet<SmolStr>);

impl TraitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enable(&mut self, name: &str) -> bool {
        self.0.insert(SmolStr::new(name))
    }

    pub fn disable(&mut self, name: &str) -> bool {
        self.0.remove(name)
    }

    /// Returns whether the trait is present afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if self.0.remove(name) {
            false
        } else {
            self.0.insert(SmolStr::new(name));
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
