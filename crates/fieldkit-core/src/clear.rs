use crate::geometry::{FieldGeometry, LayoutDirection, PointerEvent, clear_icon_hit};

/// What the host should do after a pointer event on a clear field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearAction {
   /// Event did not land on the icon, let default handling run.
   Ignored,
   /// Press landed on the icon, keep it rendered.
   Pressed,
   /// Release landed on the icon, the host must empty the text.
   ClearText,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearOutcome {
   pub action: ClearAction,
   /// When set, the host must skip its default reaction for this event
   /// (focus grab, cursor placement, on-screen keyboard).
   pub consumed: bool,
}

impl ClearOutcome {
   const IGNORED: Self = Self {
      action: ClearAction::Ignored,
      consumed: false,
   };
}

/// Visibility machine for the inline clear button.
///
/// The focus and text listeners each derive visibility from their own input
/// alone. There is intentionally no merged `focused || !empty` predicate:
/// the last listener to fire wins, and rapid interleavings of focus-loss
/// and text-emptying can leave the icon one step stale until the next
/// qualifying event, matching the long-standing field behavior.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearIndicator {
   icon_visible: bool,
   direction: LayoutDirection,
}

impl ClearIndicator {
   pub fn new(direction: LayoutDirection) -> Self {
      Self {
         icon_visible: false,
         direction,
      }
   }

   pub fn icon_visible(&self) -> bool {
      self.icon_visible
   }

   pub fn direction(&self) -> LayoutDirection {
      self.direction
   }

   /// Focus listener: visible while focused.
   pub fn on_focus_changed(&mut self, focused: bool) {
      self.icon_visible = focused;
   }

   /// Text listener: visible while non-empty.
   pub fn on_text_changed(&mut self, text_len: usize) {
      self.icon_visible = text_len > 0;
   }

   /// Pointer dispatch. Only evaluated while the icon is rendered; with the
   /// icon absent every event passes through untouched.
   pub fn on_pointer(
      &mut self,
      event: PointerEvent,
      geometry: FieldGeometry,
      icon_width: f32,
   ) -> ClearOutcome {
      if !self.icon_visible {
         return ClearOutcome::IGNORED;
      }
      if !clear_icon_hit(self.direction, geometry, icon_width, event.x()) {
         return ClearOutcome::IGNORED;
      }
      match event {
         PointerEvent::Press { .. } => {
            // No separate pressed visual, the icon is just re-shown.
            self.icon_visible = true;
            ClearOutcome {
               action: ClearAction::Pressed,
               consumed: false,
            }
         }
         PointerEvent::Release { .. } => {
            tracing::trace!("clear icon tapped");
            self.icon_visible = false;
            ClearOutcome {
               action: ClearAction::ClearText,
               consumed: true,
            }
         }
      }
   }
}
