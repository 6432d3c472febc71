use egui::{Color32, FontSelection, Id, Response, RichText, TextStyle, Ui, Vec2, WidgetText};

use fieldkit_core::{
   IconEffect, IconGlyph, LayoutDirection, RevealAction, RevealIndicator, SavedState, StateError,
};

use crate::clearable::direction_of;
use crate::icon::IconKind;
use crate::text_edit::{IconTextEdit, PointerDisposition};
use crate::visuals::IconVisuals;

/// Per-field state, kept under the widget id across frames and usable for
/// host-level snapshots. The indicator's layout direction is resolved when
/// this is first created and kept from then on.
#[derive(Clone, Debug)]
pub struct PasswordFieldState {
   pub indicator: RevealIndicator,
   /// An error is currently displayed; a fresh `error(..)` edge latches the
   /// indicator's compensation flag.
   error_showing: bool,
}

impl PasswordFieldState {
   pub fn new(direction: LayoutDirection, hover_reveals: bool) -> Self {
      Self {
         indicator: RevealIndicator::new(direction, hover_reveals),
         error_showing: false,
      }
   }

   pub fn load(ctx: &egui::Context, id: Id) -> Option<Self> {
      ctx.data_mut(|d| d.get_persisted(id))
   }

   pub fn store(self, ctx: &egui::Context, id: Id) {
      ctx.data_mut(|d| d.insert_persisted(id, self));
   }

   /// Capture the two persisted flags appended to an opaque host snapshot.
   pub fn write_snapshot(&self, host_snapshot: &[u8]) -> Vec<u8> {
      self.indicator.saved().write_to(host_snapshot)
   }

   /// Re-apply a snapshot produced by [`Self::write_snapshot`], returning
   /// the host portion. Rejects malformed snapshots outright. The masking
   /// transform is re-applied (via `password_visible`) before the icon
   /// effect re-renders the slot.
   pub fn apply_snapshot<'b>(&mut self, bytes: &'b [u8]) -> Result<&'b [u8], StateError> {
      let (saved, host) = SavedState::read_from(bytes)?;
      let effect = self.indicator.restore(saved);
      tracing::debug!(?saved, ?effect, "password field state restored");
      Ok(host)
   }
}

pub struct PasswordOutput {
   pub response: Response,
   pub state: PasswordFieldState,
   /// Visibility was toggled via the icon this frame.
   pub toggled: bool,
   pub text_changed: bool,
}

/// A single-line password field with an inline reveal/hide eye icon.
///
/// The icon shows while the field is focused or has content; tapping it
/// flips between masked and plaintext rendering without touching the
/// underlying text or the selection. The two flags survive in egui's
/// persisted data, so the field reappears exactly as the user left it.
#[must_use = "You should put this widget in a ui with `.show(ui)`"]
pub struct PasswordTextEdit<'a> {
   text: &'a mut String,
   id_salt: Id,
   hint_text: WidgetText,
   font_selection: Option<FontSelection>,
   text_color: Option<Color32>,
   desired_width: Option<f32>,
   min_size: Vec2,
   char_limit: usize,
   icon_size: f32,
   icon_visuals: IconVisuals,
   hover_reveals: bool,
   monospace: bool,
   error: Option<WidgetText>,
}

impl<'a> PasswordTextEdit<'a> {
   pub fn new(id_salt: impl std::hash::Hash, text: &'a mut String) -> Self {
      Self {
         text,
         id_salt: Id::new(id_salt),
         hint_text: Default::default(),
         font_selection: None,
         text_color: None,
         desired_width: None,
         min_size: Vec2::ZERO,
         char_limit: usize::MAX,
         icon_size: 18.0,
         icon_visuals: IconVisuals::default(),
         hover_reveals: false,
         monospace: true,
         error: None,
      }
   }

   pub fn hint_text(mut self, hint_text: impl Into<WidgetText>) -> Self {
      self.hint_text = hint_text.into();
      self
   }

   pub fn font(mut self, font_selection: impl Into<FontSelection>) -> Self {
      self.font_selection = Some(font_selection.into());
      self
   }

   pub fn text_color(mut self, text_color: Color32) -> Self {
      self.text_color = Some(text_color);
      self
   }

   pub fn desired_width(mut self, desired_width: f32) -> Self {
      self.desired_width = Some(desired_width);
      self
   }

   pub fn min_size(mut self, min_size: Vec2) -> Self {
      self.min_size = min_size;
      self
   }

   pub fn char_limit(mut self, limit: usize) -> Self {
      self.char_limit = limit;
      self
   }

   pub fn icon_size(mut self, icon_size: f32) -> Self {
      self.icon_size = icon_size;
      self
   }

   pub fn icon_visuals(mut self, visuals: IconVisuals) -> Self {
      self.icon_visuals = visuals;
      self
   }

   /// Paint the icons at full opacity instead of the 54%/38% pair.
   pub fn disable_icon_alpha(mut self) -> Self {
      self.icon_visuals.disable_alpha = true;
      self
   }

   /// Pressing the icon reveals immediately, without waiting for release.
   pub fn hover_reveals(mut self, hover_reveals: bool) -> Self {
      self.hover_reveals = hover_reveals;
      self
   }

   /// Passwords default to the monospace font; opt out for the ui's
   /// proportional default.
   pub fn monospace(mut self, monospace: bool) -> Self {
      self.monospace = monospace;
      self
   }

   /// Show a validation error under the field. Setting a fresh error arms
   /// the icon-redisplay compensation on the next non-empty text change.
   pub fn error(mut self, error: Option<impl Into<WidgetText>>) -> Self {
      self.error = error.map(Into::into);
      self
   }

   pub fn show(self, ui: &mut Ui) -> PasswordOutput {
      let outer_id = ui.make_persistent_id(self.id_salt);
      let mut state = PasswordFieldState::load(ui.ctx(), outer_id)
         .unwrap_or_else(|| PasswordFieldState::new(direction_of(ui), self.hover_reveals));
      state.indicator.set_hover_reveals(self.hover_reveals);

      if self.error.is_some() {
         if !state.error_showing {
            state.indicator.on_error_set();
            state.error_showing = true;
         }
      } else {
         state.error_showing = false;
      }

      let font_selection = self.font_selection.unwrap_or_else(|| {
         if self.monospace {
            FontSelection::Style(TextStyle::Monospace)
         } else {
            FontSelection::default()
         }
      });

      let masked = !state.indicator.password_visible();
      let icon = state.indicator.icon_showing().then(|| {
         match state.indicator.glyph() {
            IconGlyph::Reveal => IconKind::Reveal,
            IconGlyph::Hide => IconKind::Hide,
         }
      });

      let mut toggled = false;
      let output = {
         let indicator = &mut state.indicator;
         let toggled = &mut toggled;
         let mut edit = IconTextEdit::singleline(self.text)
            .id_salt(self.id_salt.with("inner"))
            .hint_text(self.hint_text)
            .font(font_selection)
            .text_color_opt(self.text_color)
            .min_size(self.min_size)
            .char_limit(self.char_limit)
            .icon_size(self.icon_size)
            .masked(masked)
            .icon(icon)
            .icon_visuals(self.icon_visuals, !masked)
            .direction(indicator.direction())
            .on_pointer(Box::new(|event, geometry, icon_width| {
               let outcome = indicator.on_pointer(event, geometry.width, icon_width);
               match outcome.action {
                  RevealAction::Toggled => {
                     *toggled = true;
                     PointerDisposition::ConsumeAndSetMask(!indicator.password_visible())
                  }
                  RevealAction::Absorbed => PointerDisposition::Consume,
                  RevealAction::Ignored => {
                     if outcome.consumed {
                        PointerDisposition::Consume
                     } else {
                        PointerDisposition::PassThrough
                     }
                  }
               }
            }));
         if let Some(width) = self.desired_width {
            edit = edit.desired_width(width);
         }
         edit.show(ui)
      };

      if output.response.gained_focus() {
         state.indicator.on_focus_changed(true);
      } else if output.response.lost_focus() {
         state.indicator.on_focus_changed(false);
      }
      if output.text_changed {
         let effect = state.indicator.on_text_changed(output.char_len);
         if effect == IconEffect::ForceShow {
            tracing::trace!(id = ?outer_id, "icon slot re-rendered after error display");
         }
      }

      if let Some(error) = self.error {
         let color = ui.visuals().error_fg_color;
         ui.label(RichText::new(error.text()).color(color).small());
      }

      state.clone().store(ui.ctx(), outer_id);

      PasswordOutput {
         response: output.response,
         state,
         toggled,
         text_changed: output.text_changed,
      }
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use fieldkit_core::PointerEvent;

   fn revealed_state() -> PasswordFieldState {
      let mut state = PasswordFieldState::new(LayoutDirection::LeftToRight, false);
      state.indicator.on_text_changed(6);
      state.indicator.on_pointer(PointerEvent::Release { x: 290.0 }, 300.0, 18.0);
      state
   }

   #[test]
   fn snapshot_round_trips_into_a_fresh_state() {
      let state = revealed_state();
      let bytes = state.write_snapshot(b"host");

      let mut fresh = PasswordFieldState::new(LayoutDirection::LeftToRight, false);
      let host = fresh.apply_snapshot(&bytes).unwrap();
      assert_eq!(host, b"host");
      assert!(fresh.indicator.password_visible());
      assert!(fresh.indicator.icon_showing());
   }

   #[test]
   fn malformed_snapshot_is_rejected_and_state_untouched() {
      let mut state = PasswordFieldState::new(LayoutDirection::LeftToRight, false);
      assert_eq!(state.apply_snapshot(&[7]), Err(StateError::Truncated(1)));
      assert_eq!(state.apply_snapshot(&[0, 9]), Err(StateError::InvalidFlag(9)));
      assert!(!state.indicator.password_visible());
      assert!(!state.indicator.icon_showing());
   }
}
