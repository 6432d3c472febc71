use egui::{
   Align, Align2, Color32, CursorIcon, Event, EventFilter, FontId, FontSelection, Galley, Id,
   Key, Margin, NumExt, PointerButton, Rect, Response, Sense, Shape, TextBuffer as _,
   TextWrapMode, Ui, Vec2, WidgetInfo, WidgetText, epaint, output, pos2,
   text::LayoutJob,
   text_selection::{self, CCursorRange},
   vec2,
};
use std::sync::Arc;

use fieldkit_core::{FieldGeometry, LayoutDirection, PointerEvent};

use crate::icon::{IconKind, paint_icon};
use crate::visuals::IconVisuals;

/// Gap between the text area and the icon slot.
const ICON_SLOT_GAP: f32 = 6.0;

/// Single-line text is always left-aligned within the field.
const ALIGN: Align2 = Align2::LEFT_CENTER;

/// What the icon hit handler wants done with a pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PointerDisposition {
   /// Off the icon, run default handling (focus, cursor placement).
   PassThrough,
   /// On the icon; suppress default handling for this event.
   Consume,
   /// On the clear icon's release: empty the text and suppress defaults.
   ConsumeAndClear,
   /// On the reveal icon: switch the masking transform, preserving the
   /// selection range, and suppress defaults.
   ConsumeAndSetMask(bool),
}

pub(crate) type PointerHandler<'a> =
   Box<dyn FnMut(PointerEvent, FieldGeometry, f32) -> PointerDisposition + 'a>;

#[derive(Clone, Debug, Default)]
pub struct IconTextEditState {
   pub cursor: text_selection::TextCursorState,
   pub singleline_offset: f32,
   pub last_interaction_time: f64,
   /// A consumed press on the icon owns the pointer stream until its
   /// paired release, even when that release lands outside the field.
   pub pointer_captured: bool,
}

impl IconTextEditState {
   pub fn load(ctx: &egui::Context, id: Id) -> Option<Self> {
      ctx.data_mut(|d| d.get_persisted(id))
   }

   pub fn store(self, ctx: &egui::Context, id: Id) {
      ctx.data_mut(|d| d.insert_persisted(id, self));
   }

   /// Re-applies the current selection across a masking change. The
   /// char-indexed range stays valid because the masked display has
   /// exactly one glyph per character.
   pub fn keep_selection_across_mask_change(&mut self) {
      let selection = self.cursor.char_range();
      self.cursor.set_char_range(selection);
   }
}

pub struct IconTextEditOutput {
   pub response: Response,
   pub state: IconTextEditState,
   pub text_changed: bool,
   pub char_len: usize,
}

/// Single-line text editor with an optional trailing icon slot.
///
/// The inner machinery both public widgets build on: galley layout with an
/// optional masking transform, keyboard editing, and pointer interception
/// that routes presses over the icon strip to a hit handler *before* the
/// default click-to-focus reaction runs, so a consumed tap never grabs
/// focus or moves the cursor.
#[must_use = "You should put this widget in a ui with `ui.add(widget);`"]
pub(crate) struct IconTextEdit<'a> {
   text: &'a mut String,
   hint_text: WidgetText,
   id_salt: Option<Id>,
   font_selection: FontSelection,
   text_color: Option<Color32>,
   masked: bool,
   margin: Margin,
   interactive: bool,
   desired_width: Option<f32>,
   min_size: Vec2,
   char_limit: usize,
   direction: LayoutDirection,
   icon: Option<IconKind>,
   icon_size: f32,
   icon_visuals: IconVisuals,
   icon_active: bool,
   on_pointer: Option<PointerHandler<'a>>,
}

impl<'a> IconTextEdit<'a> {
   pub fn singleline(text: &'a mut String) -> Self {
      Self {
         text,
         hint_text: Default::default(),
         id_salt: None,
         font_selection: FontSelection::default(),
         text_color: None,
         masked: false,
         margin: Margin::symmetric(8, 4),
         interactive: true,
         desired_width: None,
         min_size: Vec2::ZERO,
         char_limit: usize::MAX,
         direction: LayoutDirection::LeftToRight,
         icon: None,
         icon_size: 18.0,
         icon_visuals: IconVisuals::default(),
         icon_active: false,
         on_pointer: None,
      }
   }

   pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
      self.id_salt = Some(Id::new(id_salt));
      self
   }

   pub fn hint_text(mut self, hint_text: impl Into<WidgetText>) -> Self {
      self.hint_text = hint_text.into();
      self
   }

   pub fn font(mut self, font_selection: impl Into<FontSelection>) -> Self {
      self.font_selection = font_selection.into();
      self
   }

   pub fn text_color_opt(mut self, text_color: Option<Color32>) -> Self {
      self.text_color = text_color;
      self
   }

   pub fn masked(mut self, masked: bool) -> Self {
      self.masked = masked;
      self
   }

   pub fn margin(mut self, margin: impl Into<Margin>) -> Self {
      self.margin = margin.into();
      self
   }

   pub fn interactive(mut self, interactive: bool) -> Self {
      self.interactive = interactive;
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

   pub fn direction(mut self, direction: LayoutDirection) -> Self {
      self.direction = direction;
      self
   }

   /// Trailing icon for this frame, `None` leaves the slot empty.
   pub fn icon(mut self, icon: Option<IconKind>) -> Self {
      self.icon = icon;
      self
   }

   pub fn icon_size(mut self, icon_size: f32) -> Self {
      self.icon_size = icon_size;
      self
   }

   pub fn icon_visuals(mut self, visuals: IconVisuals, active: bool) -> Self {
      self.icon_visuals = visuals;
      self.icon_active = active;
      self
   }

   pub fn on_pointer(mut self, handler: PointerHandler<'a>) -> Self {
      self.on_pointer = Some(handler);
      self
   }

   #[allow(clippy::too_many_lines)]
   pub fn show(mut self, ui: &mut Ui) -> IconTextEditOutput {
      let where_to_put_background = ui.painter().add(Shape::Noop);

      let font_id = self.font_selection.resolve(ui.style());
      let text_color = self
         .text_color
         .or(ui.visuals().override_text_color)
         .unwrap_or_else(|| ui.visuals().widgets.inactive.text_color());

      let row_height = ui.fonts_mut(|f| f.row_height(&font_id));
      let available_width = (ui.available_width() - self.margin.sum().x).at_least(24.0);
      let desired_width = self.desired_width.unwrap_or_else(|| ui.spacing().text_edit_width);
      let wrap_width = if ui.layout().horizontal_justify() {
         available_width
      } else {
         desired_width.min(available_width)
      };

      let layout_display = |ui: &Ui, text: &str, masked: bool| -> Arc<Galley> {
         let display = if masked {
            mask_display(text)
         } else {
            text.to_owned()
         };
         let mut job = LayoutJob::simple_singleline(display, font_id.clone(), text_color);
         job.halign = Align::Min;
         ui.fonts_mut(|f| f.layout_job(job))
      };

      let mut masked = self.masked;
      let mut galley = layout_display(ui, self.text, masked);

      // --- Size & allocation ---
      let desired_inner_size = vec2(wrap_width, galley.size().y.max(row_height));
      let desired_outer_size = (desired_inner_size + self.margin.sum()).at_least(self.min_size);

      let (auto_id, outer_rect) = ui.allocate_space(desired_outer_size);
      let icon_strip = if self.icon.is_some() {
         self.icon_size + ICON_SLOT_GAP
      } else {
         0.0
      };
      let mut text_draw_rect = outer_rect - self.margin;
      match self.direction {
         LayoutDirection::LeftToRight => text_draw_rect.max.x -= icon_strip,
         LayoutDirection::RightToLeft => text_draw_rect.min.x += icon_strip,
      }

      let icon_rect = self.icon.map(|_| {
         let size = Vec2::splat(self.icon_size);
         let top = outer_rect.center().y - size.y * 0.5;
         let x = match self.direction {
            LayoutDirection::LeftToRight => {
               outer_rect.right() - self.margin.right as f32 - size.x
            }
            LayoutDirection::RightToLeft => outer_rect.left() + self.margin.left as f32,
         };
         Rect::from_min_size(pos2(x, top), size)
      });

      let id = self
         .id_salt
         .map_or(auto_id, |salt| ui.make_persistent_id(salt));
      let mut state = IconTextEditState::load(ui.ctx(), id).unwrap_or_default();

      // --- Interaction ---
      let allow_drag_to_select =
         ui.input(|i| !i.has_touch_screen()) || ui.memory(|mem| mem.has_focus(id));
      let sense = if self.interactive {
         if allow_drag_to_select {
            Sense::click_and_drag()
         } else {
            Sense::click()
         }
      } else {
         Sense::hover()
      };
      let mut response = ui.interact(outer_rect, id, sense);
      response.intrinsic_size = Some(vec2(desired_width, desired_outer_size.y));

      // Icon hit-testing runs before click-to-focus so a consumed tap never
      // grabs focus or opens the platform keyboard.
      let mut consumed_pointer = false;
      let mut text_changed = false;
      if self.interactive {
         if let Some(handler) = self.on_pointer.as_mut() {
            let geometry = FieldGeometry::with_padding(
               outer_rect.width(),
               self.margin.left as f32,
               self.margin.right as f32,
            );
            let button_events: Vec<_> = ui.input(|i| {
               i.events
                  .iter()
                  .filter_map(|event| match event {
                     Event::PointerButton {
                        pos,
                        button: PointerButton::Primary,
                        pressed,
                        ..
                     } => Some((*pressed, *pos)),
                     _ => None,
                  })
                  .collect()
            });
            for (pressed, pos) in button_events {
               let inside = outer_rect.contains(pos);
               if !should_route_pointer(pressed, inside, state.pointer_captured) {
                  continue;
               }
               let x = pos.x - outer_rect.left();
               let event = if pressed {
                  PointerEvent::Press { x }
               } else {
                  state.pointer_captured = false;
                  PointerEvent::Release { x }
               };
               let disposition = handler(event, geometry, self.icon_size);
               if pressed && disposition != PointerDisposition::PassThrough {
                  state.pointer_captured = true;
               }
               if disposition != PointerDisposition::PassThrough && inside {
                  consumed_pointer = true;
               }
               match disposition {
                  PointerDisposition::PassThrough | PointerDisposition::Consume => {}
                  PointerDisposition::ConsumeAndClear => {
                     if !self.text.is_empty() {
                        self.text.clear();
                        state.cursor.set_char_range(Some(CCursorRange::default()));
                        text_changed = true;
                     }
                  }
                  PointerDisposition::ConsumeAndSetMask(mask) => {
                     if masked != mask {
                        // Char indices are stable across the transform change
                        // because the mask glyph count equals the char count.
                        masked = mask;
                        state.keep_selection_across_mask_change();
                     }
                  }
               }
            }
            if text_changed || masked != self.masked {
               galley = layout_display(ui, self.text, masked);
            }
            if text_changed {
               response.mark_changed();
            }
         }
      }

      if self.interactive && !consumed_pointer {
         if let Some(pointer_pos) = ui.ctx().pointer_interact_pos() {
            if response.hovered() {
               ui.output_mut(|o| o.mutable_text_under_cursor = true);
            }
            let singleline_offset_vec = vec2(state.singleline_offset, 0.0);
            let cursor_at_pointer =
               galley.cursor_from_pos(pointer_pos - text_draw_rect.min + singleline_offset_vec);

            let is_being_dragged = ui.ctx().is_being_dragged(response.id);
            let did_interact_with_cursor = state.cursor.pointer_interaction(
               ui,
               &response,
               cursor_at_pointer,
               &galley,
               is_being_dragged,
            );

            if did_interact_with_cursor || response.clicked() {
               ui.memory_mut(|mem| mem.request_focus(response.id));
               state.last_interaction_time = ui.input(|i| i.time);
            }
         }
      }
      if self.interactive && response.hovered() {
         let over_icon = icon_rect
            .zip(ui.ctx().pointer_interact_pos())
            .is_some_and(|(rect, pos)| rect.contains(pos));
         ui.ctx().set_cursor_icon(if over_icon {
            CursorIcon::PointingHand
         } else {
            CursorIcon::Text
         });
      }

      // --- Keyboard events ---
      let mut cursor_range_after_events = None;
      if self.interactive && ui.memory(|mem| mem.has_focus(id)) {
         let event_filter = EventFilter {
            horizontal_arrows: true,
            vertical_arrows: true,
            tab: false,
            ..Default::default()
         };
         ui.memory_mut(|mem| mem.set_focus_lock_filter(id, event_filter));

         let default_cursor_range = CCursorRange::one(galley.end());
         let (changed_by_event, new_cursor_range, updated_galley) = icon_text_edit_events(
            ui,
            &mut state,
            self.text,
            &galley,
            id,
            masked,
            default_cursor_range,
            self.char_limit,
            event_filter,
            &font_id,
            text_color,
         );

         if changed_by_event {
            response.mark_changed();
            text_changed = true;
            galley = updated_galley;
         }
         cursor_range_after_events = Some(new_cursor_range);
         if !changed_by_event {
            state.cursor.set_char_range(Some(new_cursor_range));
         }
      }

      // --- Galley positioning & single-line clip offset ---
      let mut galley_pos = ALIGN.align_size_within_rect(galley.size(), text_draw_rect).min;
      {
         let current_cursor_primary_x =
            match cursor_range_after_events.or_else(|| state.cursor.range(&galley)) {
               Some(cr) => galley.pos_from_cursor(cr.primary).min.x,
               None => 0.0,
            };
         let visible_width = text_draw_rect.width();
         let mut offset_x = state.singleline_offset;
         if current_cursor_primary_x < offset_x {
            offset_x = current_cursor_primary_x;
         } else if current_cursor_primary_x > offset_x + visible_width {
            offset_x = current_cursor_primary_x - visible_width;
         }
         offset_x = offset_x.at_most(galley.size().x - visible_width).at_least(0.0);
         state.singleline_offset = offset_x;
         galley_pos.x -= offset_x;
      }

      // --- Painting ---
      if ui.is_rect_visible(outer_rect) {
         if self.text.is_empty() && !self.hint_text.is_empty() {
            let hint_color = ui.visuals().weak_text_color();
            let hint_galley = self.hint_text.clone().into_galley(
               ui,
               Some(TextWrapMode::Truncate),
               text_draw_rect.width(),
               FontSelection::default(),
            );
            let hint_pos = ALIGN.align_size_within_rect(hint_galley.size(), text_draw_rect).min;
            ui.painter_at(text_draw_rect).galley(hint_pos, hint_galley, hint_color);
         }

         let mut galley_for_paint = galley.clone();
         if ui.memory(|mem| mem.has_focus(id)) {
            if let Some(selection) = state.cursor.range(&galley_for_paint) {
               text_selection::visuals::paint_text_selection(
                  &mut galley_for_paint,
                  ui.visuals(),
                  &selection,
                  None,
               );
            }
         }
         ui.painter_at(text_draw_rect).galley(galley_pos, galley_for_paint, text_color);

         if self.interactive && ui.memory(|mem| mem.has_focus(id)) {
            if let Some(cursor_range) = state.cursor.range(&galley) {
               let primary_cursor_rect = text_selection::text_cursor_state::cursor_rect(
                  &galley,
                  &cursor_range.primary,
                  row_height,
               )
               .translate(galley_pos.to_vec2());

               if ui.ctx().input(|i| i.focused) {
                  let time_since_last_interaction =
                     ui.input(|i| i.time) - state.last_interaction_time;
                  text_selection::visuals::paint_text_cursor(
                     ui,
                     &ui.painter_at(text_draw_rect.expand(1.0)),
                     primary_cursor_rect,
                     time_since_last_interaction,
                  );
               }

               let to_global =
                  ui.ctx().layer_transform_to_global(ui.layer_id()).unwrap_or_default();
               ui.ctx().output_mut(|o| {
                  o.ime = Some(output::IMEOutput {
                     rect: to_global * text_draw_rect,
                     cursor_rect: to_global * primary_cursor_rect,
                  });
               });
            }
         }

         if let (Some(kind), Some(icon_rect)) = (self.icon, icon_rect) {
            let base = self
               .icon_visuals
               .color
               .unwrap_or_else(|| ui.visuals().widgets.inactive.text_color());
            let color = self.icon_visuals.apply(base, self.icon_active);
            paint_icon(ui.painter(), icon_rect, kind, color);
         }

         let visuals = ui.style().interact(&response);
         let frame_rect = outer_rect.expand(visuals.expansion);
         let stroke = if response.has_focus() {
            ui.visuals().selection.stroke
         } else {
            visuals.bg_stroke
         };
         ui.painter().set(
            where_to_put_background,
            epaint::RectShape::new(
               frame_rect,
               visuals.corner_radius,
               ui.visuals().extreme_bg_color,
               stroke,
               epaint::StrokeKind::Inside,
            ),
         );
      }

      let char_len = self.text.chars().count();
      state.clone().store(ui.ctx(), id);

      response.widget_info(|| {
         WidgetInfo::text_edit(ui.is_enabled(), String::new(), String::new(), String::new())
      });

      IconTextEditOutput {
         response,
         state,
         text_changed,
         char_len,
      }
   }
}

/// Whether a primary-button event reaches the icon hit handler. Presses
/// must land inside the field; a release is also routed while the pointer
/// is captured, so a stream that starts on the icon and ends outside the
/// field still delivers its release.
fn should_route_pointer(pressed: bool, inside_field: bool, captured: bool) -> bool {
   if pressed {
      inside_field
   } else {
      inside_field || captured
   }
}

/// Replacement text for masked rendering: one midline dot per character.
/// The underlying text is never touched.
pub(crate) fn mask_display(text: &str) -> String {
   std::iter::repeat(epaint::text::PASSWORD_REPLACEMENT_CHAR)
      .take(text.chars().count())
      .collect()
}

#[allow(clippy::too_many_arguments)]
fn icon_text_edit_events(
   ui: &Ui,
   state: &mut IconTextEditState,
   text: &mut String,
   initial_galley: &Arc<Galley>,
   id: Id,
   masked: bool,
   default_cursor_range: CCursorRange,
   char_limit: usize,
   event_filter: EventFilter,
   font_id: &FontId,
   text_color: Color32,
) -> (bool, CCursorRange, Arc<Galley>) {
   let os = ui.ctx().os();
   let mut current_galley = initial_galley.clone();
   let mut cursor_range = state.cursor.range(&current_galley).unwrap_or(default_cursor_range);
   let mut text_changed_in_total = false;

   let events = ui.input(|i| i.filtered_events(&event_filter));
   for event in events {
      let chars_before = text.chars().count();
      let mut text_mutated_this_event = false;

      if cursor_range.on_event(os, &event, &current_galley, id) {
         state.last_interaction_time = ui.input(|i| i.time);
         continue;
      }

      let new_ccursor_range: Option<CCursorRange> = match event {
         // Masked text never reaches the clipboard.
         Event::Copy => {
            if !masked {
               let [min, max] = cursor_range.sorted_cursors();
               if min.index < max.index {
                  ui.ctx().copy_text(text.char_range(min.index..max.index).to_owned());
               }
            }
            None
         }
         Event::Cut => {
            let [min, max] = cursor_range.sorted_cursors();
            if !masked && min.index < max.index {
               ui.ctx().copy_text(text.char_range(min.index..max.index).to_owned());
               text.delete_char_range(min.index..max.index);
               text_mutated_this_event = true;
               Some(CCursorRange::one(min))
            } else {
               None
            }
         }
         Event::Paste(text_to_paste) => {
            if !text_to_paste.is_empty() {
               let [min, max] = cursor_range.sorted_cursors();
               let selection_len = max.index - min.index;
               text.delete_char_range(min.index..max.index);

               let space_available =
                  char_limit.saturating_sub(chars_before.saturating_sub(selection_len));
               let to_insert: String = text_to_paste
                  .chars()
                  .filter(|c| *c != '\n' && *c != '\r')
                  .take(space_available)
                  .collect();

               let mut ccursor = min;
               ccursor.index += text.insert_text(&to_insert, ccursor.index);
               text_mutated_this_event = true;
               Some(CCursorRange::one(ccursor))
            } else {
               None
            }
         }
         Event::Text(text_to_insert) => {
            if !text_to_insert.is_empty() && text_to_insert != "\n" && text_to_insert != "\r" {
               let [min, max] = cursor_range.sorted_cursors();
               let selection_len = max.index - min.index;
               text.delete_char_range(min.index..max.index);

               let space_available =
                  char_limit.saturating_sub(chars_before.saturating_sub(selection_len));
               let to_insert: String = text_to_insert.chars().take(space_available).collect();

               let mut ccursor = min;
               ccursor.index += text.insert_text(&to_insert, ccursor.index);
               text_mutated_this_event = true;
               Some(CCursorRange::one(ccursor))
            } else {
               None
            }
         }
         Event::Key {
            key: Key::Enter,
            pressed: true,
            ..
         } => {
            ui.memory_mut(|mem| mem.surrender_focus(id));
            None
         }
         Event::Key {
            key: Key::Backspace,
            pressed: true,
            ..
         } => {
            let [min, max] = cursor_range.sorted_cursors();
            let mut new_cursor_idx = min.index;
            if min == max {
               if min.index > 0 {
                  text.delete_char_range(min.index - 1..min.index);
                  new_cursor_idx = min.index - 1;
                  text_mutated_this_event = true;
               }
            } else {
               text.delete_char_range(min.index..max.index);
               text_mutated_this_event = true;
            }
            if text_mutated_this_event {
               Some(CCursorRange::one(egui::text::CCursor::new(new_cursor_idx)))
            } else {
               None
            }
         }
         Event::Key {
            key: Key::Delete,
            pressed: true,
            ..
         } => {
            let [min, max] = cursor_range.sorted_cursors();
            if min == max {
               if min.index < chars_before {
                  text.delete_char_range(min.index..min.index + 1);
                  text_mutated_this_event = true;
               }
            } else {
               text.delete_char_range(min.index..max.index);
               text_mutated_this_event = true;
            }
            if text_mutated_this_event {
               Some(CCursorRange::one(min))
            } else {
               None
            }
         }
         _ => None,
      };

      if text_mutated_this_event {
         text_changed_in_total = true;

         let display = if masked {
            mask_display(text)
         } else {
            text.clone()
         };
         let mut job = LayoutJob::simple_singleline(display, font_id.clone(), text_color);
         job.halign = Align::Min;
         current_galley = ui.fonts_mut(|f| f.layout_job(job));
      }

      state.cursor.set_char_range(new_ccursor_range);
      if let Some(new_range) = new_ccursor_range {
         state.last_interaction_time = ui.input(|i| i.time);
         cursor_range = new_range;
      }
   }

   (text_changed_in_total, cursor_range, current_galley)
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn mask_display_replaces_every_char_and_leaves_text_alone() {
      let text = String::from("séc®et");
      let display = mask_display(&text);
      assert_eq!(display.chars().count(), text.chars().count());
      assert!(display.chars().all(|c| c == epaint::text::PASSWORD_REPLACEMENT_CHAR));
      assert_eq!(text, "séc®et");
   }

   #[test]
   fn mask_display_of_empty_text_is_empty() {
      assert_eq!(mask_display(""), "");
   }

   #[test]
   fn mask_toggle_keeps_the_selection_char_range() {
      let mut state = IconTextEditState::default();
      let range = CCursorRange::two(egui::text::CCursor::new(2), egui::text::CCursor::new(5));
      state.cursor.set_char_range(Some(range));

      // Reveal, then hide again.
      state.keep_selection_across_mask_change();
      state.keep_selection_across_mask_change();

      assert_eq!(state.cursor.char_range(), Some(range));
   }

   #[test]
   fn captured_release_is_routed_even_outside_the_field() {
      // Press must land inside.
      assert!(should_route_pointer(true, true, false));
      assert!(!should_route_pointer(true, false, false));
      assert!(!should_route_pointer(true, false, true));

      // Release follows the capture.
      assert!(should_route_pointer(false, true, false));
      assert!(should_route_pointer(false, false, true));
      assert!(!should_route_pointer(false, false, false));
   }

   #[test]
   fn hover_press_then_release_outside_does_not_leave_a_stale_latch() {
      use fieldkit_core::RevealIndicator;

      let width = 300.0;
      let icon = 18.0;
      let mut reveal = RevealIndicator::new(LayoutDirection::LeftToRight, true);
      reveal.on_text_changed(6);
      let mut captured = false;

      // Press on the icon toggles and captures the pointer stream.
      assert!(should_route_pointer(true, true, captured));
      let press = reveal.on_pointer(PointerEvent::Press { x: 290.0 }, width, icon);
      captured = press.consumed;
      assert!(reveal.password_visible());

      // The paired release lands outside the field but is still delivered,
      // paying off the hover latch.
      assert!(should_route_pointer(false, false, captured));
      let release = reveal.on_pointer(PointerEvent::Release { x: 350.0 }, width, icon);
      captured = false;
      assert!(release.consumed);
      assert!(reveal.password_visible());

      // A later click inside the field off the icon passes through, so it
      // can place the cursor and grab focus as usual.
      assert!(!should_route_pointer(false, false, captured));
      let click = reveal.on_pointer(PointerEvent::Release { x: 40.0 }, width, icon);
      assert_eq!(click.action, fieldkit_core::RevealAction::Ignored);
      assert!(!click.consumed);
   }
}
