/// Extra margin added to the reveal icon's tappable area, in
/// density-independent units, on the side facing the text.
pub const EXTRA_TAPPABLE_AREA: f32 = 50.0;

/// Resolved layout direction of the host field.
///
/// Resolved once when the per-field state is created and never re-queried,
/// so a live direction change after construction goes stale on purpose.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
   #[default]
   LeftToRight,
   RightToLeft,
}

impl LayoutDirection {
   pub fn is_rtl(self) -> bool {
      matches!(self, Self::RightToLeft)
   }
}

/// Host field measurements in field-local coordinates (x = 0 at the left edge).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldGeometry {
   pub width: f32,
   pub leading_padding: f32,
   pub trailing_padding: f32,
}

impl FieldGeometry {
   pub fn new(width: f32) -> Self {
      Self {
         width,
         leading_padding: 0.0,
         trailing_padding: 0.0,
      }
   }

   pub fn with_padding(width: f32, leading: f32, trailing: f32) -> Self {
      Self {
         width,
         leading_padding: leading,
         trailing_padding: trailing,
      }
   }
}

/// A primary-pointer transition delivered by the host, in field-local x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
   Press { x: f32 },
   Release { x: f32 },
}

impl PointerEvent {
   pub fn x(self) -> f32 {
      match self {
         Self::Press { x } | Self::Release { x } => x,
      }
   }
}

/// Whether `x` lands on the clear icon.
///
/// The icon occupies its intrinsic width at the trailing edge, inside the
/// field padding. LTR qualifies at or beyond the icon's start; RTL strictly
/// before the icon's end.
pub fn clear_icon_hit(
   direction: LayoutDirection,
   geometry: FieldGeometry,
   icon_width: f32,
   x: f32,
) -> bool {
   match direction {
      LayoutDirection::RightToLeft => x < geometry.leading_padding + icon_width,
      LayoutDirection::LeftToRight => {
         x >= geometry.width - geometry.trailing_padding - icon_width
      }
   }
}

/// Whether `x` lands on the reveal icon, including the extra tappable
/// margin. Both bounds are inclusive.
pub fn reveal_icon_hit(
   direction: LayoutDirection,
   field_width: f32,
   icon_width: f32,
   x: f32,
) -> bool {
   match direction {
      LayoutDirection::RightToLeft => x <= icon_width + EXTRA_TAPPABLE_AREA,
      LayoutDirection::LeftToRight => x >= field_width - icon_width - EXTRA_TAPPABLE_AREA,
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn clear_hit_ltr_boundary() {
      let geometry = FieldGeometry::with_padding(200.0, 4.0, 4.0);
      // bound = 200 - 4 - 16 = 180, inclusive
      assert!(clear_icon_hit(LayoutDirection::LeftToRight, geometry, 16.0, 180.0));
      assert!(clear_icon_hit(LayoutDirection::LeftToRight, geometry, 16.0, 181.0));
      assert!(!clear_icon_hit(LayoutDirection::LeftToRight, geometry, 16.0, 179.0));
   }

   #[test]
   fn clear_hit_rtl_boundary() {
      let geometry = FieldGeometry::with_padding(200.0, 4.0, 4.0);
      // bound = 4 + 16 = 20, exclusive
      assert!(!clear_icon_hit(LayoutDirection::RightToLeft, geometry, 16.0, 20.0));
      assert!(clear_icon_hit(LayoutDirection::RightToLeft, geometry, 16.0, 19.0));
      assert!(!clear_icon_hit(LayoutDirection::RightToLeft, geometry, 16.0, 21.0));
   }

   #[test]
   fn reveal_hit_ltr_boundary() {
      // bound = 300 - 18 - 50 = 232, inclusive
      assert!(reveal_icon_hit(LayoutDirection::LeftToRight, 300.0, 18.0, 232.0));
      assert!(reveal_icon_hit(LayoutDirection::LeftToRight, 300.0, 18.0, 233.0));
      assert!(!reveal_icon_hit(LayoutDirection::LeftToRight, 300.0, 18.0, 231.0));
   }

   #[test]
   fn reveal_hit_rtl_boundary() {
      // bound = 18 + 50 = 68, inclusive
      assert!(reveal_icon_hit(LayoutDirection::RightToLeft, 300.0, 18.0, 68.0));
      assert!(reveal_icon_hit(LayoutDirection::RightToLeft, 300.0, 18.0, 67.0));
      assert!(!reveal_icon_hit(LayoutDirection::RightToLeft, 300.0, 18.0, 69.0));
   }
}
