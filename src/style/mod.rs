mod color;
mod computed_style;
mod layout_rules;
mod selector;
mod style_sheet;

pub use color::*;
pub use computed_style::*;
pub use layout_rules::*;
pub use selector::*;
pub use style_sheet::*;
