use egui::Color32;

/// Icon opacity while the password is visible.
pub const ALPHA_ICON_ENABLED: u8 = (255.0 * 0.54) as u8;

/// Icon opacity while the password is masked.
pub const ALPHA_ICON_DISABLED: u8 = (255.0 * 0.38) as u8;

/// Per-instance icon appearance. Owned by each field so adjusting one
/// field's icon never bleeds into another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconVisuals {
   /// Base tint; falls back to the style's inactive text color.
   pub color: Option<Color32>,
   pub alpha_enabled: u8,
   pub alpha_disabled: u8,
   /// Skip the alpha adjustment entirely and paint at full opacity.
   pub disable_alpha: bool,
}

impl Default for IconVisuals {
   fn default() -> Self {
      Self {
         color: None,
         alpha_enabled: ALPHA_ICON_ENABLED,
         alpha_disabled: ALPHA_ICON_DISABLED,
         disable_alpha: false,
      }
   }
}

impl IconVisuals {
   /// Full-opacity visuals, used by the clear button which has no
   /// active/inactive distinction.
   pub fn opaque() -> Self {
      Self {
         disable_alpha: true,
         ..Default::default()
      }
   }

   pub fn apply(&self, base: Color32, active: bool) -> Color32 {
      if self.disable_alpha {
         return base;
      }
      let alpha = if active {
         self.alpha_enabled
      } else {
         self.alpha_disabled
      };
      Color32::from_rgba_unmultiplied(base.r(), base.g(), base.b(), alpha)
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn alpha_constants_match_the_material_percentages() {
      assert_eq!(ALPHA_ICON_ENABLED, 137);
      assert_eq!(ALPHA_ICON_DISABLED, 96);
   }

   #[test]
   fn apply_picks_alpha_by_active_state() {
      let visuals = IconVisuals::default();
      let base = Color32::from_rgb(10, 20, 30);
      assert_eq!(visuals.apply(base, true).a(), ALPHA_ICON_ENABLED);
      assert_eq!(visuals.apply(base, false).a(), ALPHA_ICON_DISABLED);
   }

   #[test]
   fn opaque_visuals_leave_the_color_untouched() {
      let base = Color32::from_rgb(10, 20, 30);
      assert_eq!(IconVisuals::opaque().apply(base, false), base);
   }
}
