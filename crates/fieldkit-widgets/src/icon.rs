use egui::{Color32, Painter, Rect, Stroke, epaint, pos2};

/// Glyphs the trailing icon slot can render. Painted with the painter
/// rather than loaded from image assets, so every field instance gets its
/// own tint and alpha without sharing mutable resource state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
   /// An ✕ that empties the field.
   Clear,
   /// An open eye, tap to show the password.
   Reveal,
   /// The eye struck through, tap to hide it again.
   Hide,
}

pub fn paint_icon(painter: &Painter, rect: Rect, kind: IconKind, color: Color32) {
   let stroke = Stroke::new((rect.width() * 0.09).max(1.2), color);
   match kind {
      IconKind::Clear => {
         let r = rect.shrink(rect.width() * 0.24);
         painter.line_segment([r.left_top(), r.right_bottom()], stroke);
         painter.line_segment([r.left_bottom(), r.right_top()], stroke);
      }
      IconKind::Reveal => {
         eye(painter, rect, stroke);
      }
      IconKind::Hide => {
         eye(painter, rect, stroke);
         let r = rect.shrink(rect.width() * 0.12);
         painter.line_segment([r.left_bottom(), r.right_top()], stroke);
      }
   }
}

/// Almond outline from two mirrored béziers plus a filled pupil.
fn eye(painter: &Painter, rect: Rect, stroke: Stroke) {
   let c = rect.center();
   let w = rect.width();
   let corners = [pos2(c.x - w * 0.42, c.y), pos2(c.x + w * 0.42, c.y)];
   for lid in [-1.0, 1.0] {
      let bulge = c.y + lid * w * 0.38;
      painter.add(epaint::CubicBezierShape::from_points_stroke(
         [
            corners[0],
            pos2(c.x - w * 0.16, bulge),
            pos2(c.x + w * 0.16, bulge),
            corners[1],
         ],
         false,
         Color32::TRANSPARENT,
         stroke,
      ));
   }
   painter.circle_filled(c, w * 0.11, stroke.color);
}
