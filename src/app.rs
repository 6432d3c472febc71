use eframe::egui::{self, Context, vec2};
use fieldkit_widgets::{ClearableTextEdit, PasswordTextEdit};

pub struct DemoApp {
   username: String,
   password: String,
   hover_reveals: bool,
   error: Option<String>,
   signed_in: bool,
}

impl DemoApp {
   pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
      Self {
         username: String::new(),
         password: String::new(),
         hover_reveals: false,
         error: None,
         signed_in: false,
      }
   }

   fn validate(&mut self) {
      if self.password.chars().count() < 8 {
         self.error = Some("Password must be at least 8 characters".into());
         self.signed_in = false;
         tracing::info!("validation failed");
      } else {
         self.error = None;
         self.signed_in = true;
         tracing::info!(user = %self.username, "signed in");
      }
   }
}

impl eframe::App for DemoApp {
   fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
      egui::CentralPanel::default().show(ctx, |ui| {
         ui.add_space(24.0);
         ui.vertical_centered(|ui| {
            ui.set_width(380.0);
            ui.spacing_mut().item_spacing = vec2(0.0, 12.0);

            ui.heading("fieldkit demo");
            ui.add_space(8.0);

            ui.label("Username");
            let username = ClearableTextEdit::new("demo.username", &mut self.username)
               .hint_text("Username")
               .desired_width(340.0)
               .show(ui);
            if username.cleared {
               self.signed_in = false;
            }

            ui.label("Password");
            let password = PasswordTextEdit::new("demo.password", &mut self.password)
               .hint_text("Password")
               .desired_width(340.0)
               .hover_reveals(self.hover_reveals)
               .error(self.error.as_deref())
               .show(ui);
            if password.text_changed {
               self.error = None;
               self.signed_in = false;
            }

            ui.checkbox(&mut self.hover_reveals, "Reveal while pressed");

            ui.add_space(8.0);
            if ui.button("Sign in").clicked() {
               self.validate();
            }

            if self.signed_in {
               ui.label(format!("Welcome, {}!", self.username));
            }
         });
      });
   }
}
