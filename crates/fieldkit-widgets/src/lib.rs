mod clearable;
mod icon;
mod password;
mod text_edit;
mod visuals;

pub use clearable::{ClearableOutput, ClearableState, ClearableTextEdit};
pub use icon::IconKind;
pub use password::{PasswordFieldState, PasswordOutput, PasswordTextEdit};
pub use visuals::{ALPHA_ICON_DISABLED, ALPHA_ICON_ENABLED, IconVisuals};

pub use fieldkit_core::{LayoutDirection, SavedState, StateError};
