//! State machines for text-input fields with inline action icons.
//!
//! This crate has no GUI dependency. It models the two indicators a text
//! field can carry at its trailing edge, a "clear" button and a password
//! "reveal" toggle, as plain state machines driven by the host toolkit's
//! focus, text-change and pointer callbacks. The widget layer decides how
//! icons are drawn and how text is masked; this crate decides *when*.

mod clear;
mod geometry;
mod reveal;
mod state;

pub use clear::{ClearAction, ClearIndicator, ClearOutcome};
pub use geometry::{
   EXTRA_TAPPABLE_AREA, FieldGeometry, LayoutDirection, PointerEvent, clear_icon_hit,
   reveal_icon_hit,
};
pub use reveal::{IconEffect, IconGlyph, RevealAction, RevealIndicator, RevealOutcome};
pub use state::{SavedState, StateError};
