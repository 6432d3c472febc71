use crate::geometry::{LayoutDirection, PointerEvent, reveal_icon_hit};
use crate::state::SavedState;

/// Which glyph the trailing icon should currently show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconGlyph {
   /// Password is masked, tapping reveals it.
   Reveal,
   /// Password is plaintext, tapping hides it.
   Hide,
}

/// Icon-slot update requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconEffect {
   None,
   /// Render the icon for the current [`IconGlyph`].
   Show,
   /// Remove the icon.
   Hide,
   /// Clear the icon slot first, then render. Compensates for the host
   /// error-indicator API clobbering the slot as a side effect.
   ForceShow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
   /// Event did not land on the icon, let default handling run.
   Ignored,
   /// Visibility was toggled; the host must re-apply the masking transform
   /// (preserving the selection range) and re-render the icon.
   Toggled,
   /// Release paired with an already-handled hover press; nothing to do,
   /// but the event stays consumed so it cannot double-toggle.
   Absorbed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealOutcome {
   pub action: RevealAction,
   /// When set, the host must suppress its default reaction for this event
   /// (focus grab, on-screen keyboard).
   pub consumed: bool,
}

impl RevealOutcome {
   const IGNORED: Self = Self {
      action: RevealAction::Ignored,
      consumed: false,
   };
}

/// Visibility-toggle machine for a password field.
///
/// Two orthogonal booleans: whether the text renders in plaintext and
/// whether the trailing icon renders at all. The layout direction is
/// captured at construction and kept for the life of the field.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RevealIndicator {
   password_visible: bool,
   icon_showing: bool,
   direction: LayoutDirection,
   error_was_set: bool,
   handling_hover_press: bool,
   hover_reveals: bool,
}

impl RevealIndicator {
   pub fn new(direction: LayoutDirection, hover_reveals: bool) -> Self {
      Self {
         password_visible: false,
         icon_showing: false,
         direction,
         error_was_set: false,
         handling_hover_press: false,
         hover_reveals,
      }
   }

   pub fn password_visible(&self) -> bool {
      self.password_visible
   }

   pub fn icon_showing(&self) -> bool {
      self.icon_showing
   }

   pub fn direction(&self) -> LayoutDirection {
      self.direction
   }

   pub fn glyph(&self) -> IconGlyph {
      if self.password_visible {
         IconGlyph::Hide
      } else {
         IconGlyph::Reveal
      }
   }

   pub fn set_hover_reveals(&mut self, hover_reveals: bool) {
      self.hover_reveals = hover_reveals;
   }

   /// Text listener. A change to non-empty shows the icon (and pays off a
   /// pending error compensation); emptying the field drops back to masked
   /// and hides the icon.
   pub fn on_text_changed(&mut self, text_len: usize) -> IconEffect {
      if text_len > 0 {
         if self.error_was_set {
            self.error_was_set = false;
            self.icon_showing = true;
            return IconEffect::ForceShow;
         }
         if !self.icon_showing {
            self.icon_showing = true;
            return IconEffect::Show;
         }
         IconEffect::None
      } else {
         self.password_visible = false;
         self.icon_showing = false;
         IconEffect::Hide
      }
   }

   /// Focus listener: the icon follows focus.
   pub fn on_focus_changed(&mut self, focused: bool) -> IconEffect {
      self.icon_showing = focused;
      if focused { IconEffect::Show } else { IconEffect::Hide }
   }

   /// The host's error-indicator API was invoked. Observed only; the next
   /// text-change to non-empty forces the icon back into the slot.
   pub fn on_error_set(&mut self) {
      self.error_was_set = true;
   }

   /// Pointer dispatch. With the icon absent every event passes through.
   pub fn on_pointer(
      &mut self,
      event: PointerEvent,
      field_width: f32,
      icon_width: f32,
   ) -> RevealOutcome {
      if !self.icon_showing {
         return RevealOutcome::IGNORED;
      }
      let hit = reveal_icon_hit(self.direction, field_width, icon_width, event.x());
      match event {
         PointerEvent::Press { .. } => {
            if self.hover_reveals && hit {
               self.toggle();
               self.handling_hover_press = true;
               return RevealOutcome {
                  action: RevealAction::Toggled,
                  consumed: true,
               };
            }
            RevealOutcome::IGNORED
         }
         PointerEvent::Release { .. } => {
            if self.handling_hover_press {
               // The press already toggled; swallow the paired release
               // wherever it lands.
               self.handling_hover_press = false;
               return RevealOutcome {
                  action: RevealAction::Absorbed,
                  consumed: true,
               };
            }
            if hit {
               self.toggle();
               return RevealOutcome {
                  action: RevealAction::Toggled,
                  consumed: true,
               };
            }
            RevealOutcome::IGNORED
         }
      }
   }

   fn toggle(&mut self) {
      self.password_visible = !self.password_visible;
      tracing::trace!(visible = self.password_visible, "password visibility toggled");
   }

   pub fn saved(&self) -> SavedState {
      SavedState {
         icon_showing: self.icon_showing,
         password_visible: self.password_visible,
      }
   }

   /// Re-apply a saved snapshot. `password_visible` lands first so the host
   /// can re-install the masking transform before the icon effect asks it
   /// to re-render the slot.
   pub fn restore(&mut self, saved: SavedState) -> IconEffect {
      self.password_visible = saved.password_visible;
      self.icon_showing = saved.icon_showing;
      if saved.icon_showing {
         IconEffect::ForceShow
      } else {
         IconEffect::Hide
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   const WIDTH: f32 = 300.0;
   const ICON: f32 = 18.0;
   const ON_ICON: f32 = 290.0;
   const OFF_ICON: f32 = 40.0;

   fn shown() -> RevealIndicator {
      let mut reveal = RevealIndicator::new(LayoutDirection::LeftToRight, false);
      reveal.on_text_changed(6);
      reveal
   }

   #[test]
   fn starts_masked_and_iconless() {
      let reveal = RevealIndicator::new(LayoutDirection::LeftToRight, false);
      assert!(!reveal.password_visible());
      assert!(!reveal.icon_showing());
      assert_eq!(reveal.glyph(), IconGlyph::Reveal);
   }

   #[test]
   fn text_shows_icon_once() {
      let mut reveal = RevealIndicator::new(LayoutDirection::LeftToRight, false);
      assert_eq!(reveal.on_text_changed(1), IconEffect::Show);
      assert_eq!(reveal.on_text_changed(2), IconEffect::None);
      assert!(reveal.icon_showing());
   }

   #[test]
   fn emptying_forces_masked_and_hides_icon() {
      let mut reveal = shown();
      reveal.on_pointer(PointerEvent::Release { x: ON_ICON }, WIDTH, ICON);
      assert!(reveal.password_visible());

      assert_eq!(reveal.on_text_changed(0), IconEffect::Hide);
      assert!(!reveal.password_visible());
      assert!(!reveal.icon_showing());

      // Next non-empty entry starts masked again.
      assert_eq!(reveal.on_text_changed(1), IconEffect::Show);
      assert_eq!(reveal.glyph(), IconGlyph::Reveal);
   }

   #[test]
   fn focus_shows_and_hides_icon() {
      let mut reveal = RevealIndicator::new(LayoutDirection::LeftToRight, false);
      assert_eq!(reveal.on_focus_changed(true), IconEffect::Show);
      assert!(reveal.icon_showing());
      assert_eq!(reveal.on_focus_changed(false), IconEffect::Hide);
      assert!(!reveal.icon_showing());
   }

   #[test]
   fn tap_toggles_and_consumes() {
      let mut reveal = shown();
      let outcome = reveal.on_pointer(PointerEvent::Release { x: ON_ICON }, WIDTH, ICON);
      assert_eq!(outcome.action, RevealAction::Toggled);
      assert!(outcome.consumed);
      assert!(reveal.password_visible());
      assert_eq!(reveal.glyph(), IconGlyph::Hide);

      let outcome = reveal.on_pointer(PointerEvent::Release { x: ON_ICON }, WIDTH, ICON);
      assert_eq!(outcome.action, RevealAction::Toggled);
      assert!(!reveal.password_visible());
   }

   #[test]
   fn press_without_hover_mode_does_not_toggle() {
      let mut reveal = shown();
      let outcome = reveal.on_pointer(PointerEvent::Press { x: ON_ICON }, WIDTH, ICON);
      assert_eq!(outcome, RevealOutcome::IGNORED);
      assert!(!reveal.password_visible());
   }

   #[test]
   fn hover_mode_press_toggles_once() {
      let mut reveal = RevealIndicator::new(LayoutDirection::LeftToRight, true);
      reveal.on_text_changed(6);

      let press = reveal.on_pointer(PointerEvent::Press { x: ON_ICON }, WIDTH, ICON);
      assert_eq!(press.action, RevealAction::Toggled);
      assert!(press.consumed);
      assert!(reveal.password_visible());

      let release = reveal.on_pointer(PointerEvent::Release { x: ON_ICON }, WIDTH, ICON);
      assert_eq!(release.action, RevealAction::Absorbed);
      assert!(release.consumed);
      assert!(reveal.password_visible(), "paired release must not toggle again");
   }

   #[test]
   fn hover_release_is_absorbed_wherever_it_lands() {
      let mut reveal = RevealIndicator::new(LayoutDirection::LeftToRight, true);
      reveal.on_text_changed(6);
      reveal.on_pointer(PointerEvent::Press { x: ON_ICON }, WIDTH, ICON);
      let release = reveal.on_pointer(PointerEvent::Release { x: OFF_ICON }, WIDTH, ICON);
      assert_eq!(release.action, RevealAction::Absorbed);
      assert!(reveal.password_visible());
   }

   #[test]
   fn events_pass_through_while_icon_hidden() {
      let mut reveal = RevealIndicator::new(LayoutDirection::LeftToRight, false);
      let outcome = reveal.on_pointer(PointerEvent::Release { x: ON_ICON }, WIDTH, ICON);
      assert_eq!(outcome, RevealOutcome::IGNORED);
   }

   #[test]
   fn events_off_the_icon_pass_through() {
      let mut reveal = shown();
      let outcome = reveal.on_pointer(PointerEvent::Release { x: OFF_ICON }, WIDTH, ICON);
      assert_eq!(outcome, RevealOutcome::IGNORED);
   }

   #[test]
   fn error_compensation_fires_on_next_nonempty_change_only() {
      let mut reveal = shown();
      reveal.on_error_set();
      assert_eq!(reveal.on_text_changed(7), IconEffect::ForceShow);
      // Paid off, the next change is ordinary.
      assert_eq!(reveal.on_text_changed(8), IconEffect::None);
   }

   #[test]
   fn error_compensation_survives_until_text_is_nonempty() {
      let mut reveal = shown();
      reveal.on_error_set();
      assert_eq!(reveal.on_text_changed(0), IconEffect::Hide);
      assert_eq!(reveal.on_text_changed(1), IconEffect::ForceShow);
   }

   #[test]
   fn saved_state_round_trips_through_restore() {
      let mut reveal = shown();
      reveal.on_pointer(PointerEvent::Release { x: ON_ICON }, WIDTH, ICON);
      let saved = reveal.saved();
      assert!(saved.icon_showing);
      assert!(saved.password_visible);

      let mut fresh = RevealIndicator::new(LayoutDirection::LeftToRight, false);
      let effect = fresh.restore(saved);
      assert_eq!(effect, IconEffect::ForceShow);
      assert!(fresh.password_visible());
      assert!(fresh.icon_showing());
      assert_eq!(fresh.glyph(), IconGlyph::Hide);
   }

   #[test]
   fn restore_of_hidden_icon_hides() {
      let mut fresh = RevealIndicator::new(LayoutDirection::LeftToRight, false);
      let effect = fresh.restore(SavedState {
         icon_showing: false,
         password_visible: false,
      });
      assert_eq!(effect, IconEffect::Hide);
      assert!(!fresh.icon_showing());
   }

   #[test]
   fn rtl_hit_region_sits_at_the_left_edge() {
      let mut reveal = RevealIndicator::new(LayoutDirection::RightToLeft, false);
      reveal.on_text_changed(6);
      let outcome = reveal.on_pointer(PointerEvent::Release { x: 30.0 }, WIDTH, ICON);
      assert_eq!(outcome.action, RevealAction::Toggled);
      let outcome = reveal.on_pointer(PointerEvent::Release { x: 290.0 }, WIDTH, ICON);
      assert_eq!(outcome.action, RevealAction::Ignored);
   }
}
