//! Components: layout primitives and form controls

pub mod block;
pub mod checkbox;
pub mod control_box;
pub mod flex;
pub mod icon;
pub mod visually_hidden;

pub use block::{Block, BlockTag};
pub use checkbox::{checkbox_styles, Checkbox, CheckboxSize, CheckboxValue};
pub use control_box::{ControlBox, ControlBoxStyles};
pub use flex::{Flex, FlexTag};
pub use icon::{Icon, IconName};
pub use visually_hidden::{visually_hidden_style, VisuallyHidden, VisuallyHiddenInput};
