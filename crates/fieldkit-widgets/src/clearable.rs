use egui::{Color32, FontSelection, Id, Response, Ui, Vec2, WidgetText};

use fieldkit_core::{ClearAction, ClearIndicator, LayoutDirection};

use crate::icon::IconKind;
use crate::text_edit::{IconTextEdit, PointerDisposition};
use crate::visuals::IconVisuals;

/// Per-field state, kept under the widget id across frames. The layout
/// direction inside the indicator is resolved when this is first created
/// and not re-evaluated afterwards.
#[derive(Clone, Debug)]
pub struct ClearableState {
   pub indicator: ClearIndicator,
}

impl ClearableState {
   pub fn load(ctx: &egui::Context, id: Id) -> Option<Self> {
      ctx.data_mut(|d| d.get_persisted(id))
   }

   pub fn store(self, ctx: &egui::Context, id: Id) {
      ctx.data_mut(|d| d.insert_persisted(id, self));
   }
}

pub struct ClearableOutput {
   pub response: Response,
   pub state: ClearableState,
   /// The clear icon was tapped this frame and the text emptied.
   pub cleared: bool,
   pub text_changed: bool,
}

/// A single-line text field with an inline clear ("✕") button.
///
/// The icon shows while the field is focused or has content; a tap squarely
/// on it empties the text, hides the icon and swallows the event so the
/// field does not refocus. The focus and text listeners drive visibility
/// independently (see [`ClearIndicator`]).
#[must_use = "You should put this widget in a ui with `.show(ui)`"]
pub struct ClearableTextEdit<'a> {
   text: &'a mut String,
   id_salt: Id,
   hint_text: WidgetText,
   font_selection: FontSelection,
   text_color: Option<Color32>,
   desired_width: Option<f32>,
   min_size: Vec2,
   char_limit: usize,
   icon_size: f32,
   icon_visuals: IconVisuals,
}

impl<'a> ClearableTextEdit<'a> {
   pub fn new(id_salt: impl std::hash::Hash, text: &'a mut String) -> Self {
      Self {
         text,
         id_salt: Id::new(id_salt),
         hint_text: Default::default(),
         font_selection: FontSelection::default(),
         text_color: None,
         desired_width: None,
         min_size: Vec2::ZERO,
         char_limit: usize::MAX,
         icon_size: 18.0,
         // The clear glyph has no active/inactive distinction, paint opaque.
         icon_visuals: IconVisuals::opaque(),
      }
   }

   pub fn hint_text(mut self, hint_text: impl Into<WidgetText>) -> Self {
      self.hint_text = hint_text.into();
      self
   }

   pub fn font(mut self, font_selection: impl Into<FontSelection>) -> Self {
      self.font_selection = font_selection.into();
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

   pub fn show(self, ui: &mut Ui) -> ClearableOutput {
      let outer_id = ui.make_persistent_id(self.id_salt);
      let mut state = ClearableState::load(ui.ctx(), outer_id).unwrap_or_else(|| ClearableState {
         indicator: ClearIndicator::new(direction_of(ui)),
      });

      let mut cleared = false;
      let output = {
         let indicator = &mut state.indicator;
         let cleared = &mut cleared;
         let mut edit = IconTextEdit::singleline(self.text)
            .id_salt(self.id_salt.with("inner"))
            .hint_text(self.hint_text)
            .font(self.font_selection)
            .text_color_opt(self.text_color)
            .min_size(self.min_size)
            .char_limit(self.char_limit)
            .icon_size(self.icon_size)
            .icon(indicator.icon_visible().then_some(IconKind::Clear))
            .icon_visuals(self.icon_visuals, true)
            .direction(indicator.direction())
            .on_pointer(Box::new(|event, geometry, icon_width| {
               let outcome = indicator.on_pointer(event, geometry, icon_width);
               match outcome.action {
                  ClearAction::ClearText => {
                     *cleared = true;
                     PointerDisposition::ConsumeAndClear
                  }
                  ClearAction::Pressed | ClearAction::Ignored => {
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

      // The two listeners fire independently, focus first, text second,
      // exactly like the two host callbacks they stand in for.
      if output.response.gained_focus() {
         state.indicator.on_focus_changed(true);
      } else if output.response.lost_focus() {
         state.indicator.on_focus_changed(false);
      }
      if output.text_changed {
         state.indicator.on_text_changed(output.char_len);
      }

      if cleared {
         tracing::debug!(id = ?outer_id, "text field cleared via icon");
      }

      state.clone().store(ui.ctx(), outer_id);

      ClearableOutput {
         response: output.response,
         state,
         cleared,
         text_changed: output.text_changed,
      }
   }
}

/// Resolve the ui's layout direction once; stored in the indicator after.
pub(crate) fn direction_of(ui: &Ui) -> LayoutDirection {
   if matches!(ui.layout().main_dir(), egui::Direction::RightToLeft) {
      LayoutDirection::RightToLeft
   } else {
      LayoutDirection::LeftToRight
   }
}
