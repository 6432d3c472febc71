use eframe::egui::{self, vec2};
use fieldkit_widgets::{ClearableTextEdit, PasswordTextEdit};

pub struct MyApp {
   username: String,
   password: String,
   hover_reveals: bool,
   error: Option<String>,
}

impl MyApp {
   fn new(_cc: &eframe::CreationContext<'_>) -> Self {
      Self {
         username: String::new(),
         password: String::new(),
         hover_reveals: false,
         error: None,
      }
   }
}

impl eframe::App for MyApp {
   fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
      egui::CentralPanel::default().show(ctx, |ui| {
         ui.add_space(30.0);
         ui.vertical_centered(|ui| {
            ui.set_width(360.0);
            ui.spacing_mut().item_spacing = vec2(0.0, 12.0);

            ui.heading("Sign in");

            ui.label("Username");
            ClearableTextEdit::new("login.username", &mut self.username)
               .hint_text("you@example.com")
               .desired_width(320.0)
               .show(ui);

            ui.label("Password");
            let output = PasswordTextEdit::new("login.password", &mut self.password)
               .hint_text("Password")
               .desired_width(320.0)
               .hover_reveals(self.hover_reveals)
               .error(self.error.as_deref())
               .show(ui);
            if output.text_changed {
               self.error = None;
            }

            ui.checkbox(&mut self.hover_reveals, "Reveal on press");

            if ui.button("Sign in").clicked() && self.password.chars().count() < 8 {
               self.error = Some("Password must be at least 8 characters".into());
            }
         });
      });
   }
}

fn main() -> eframe::Result {
   let options = eframe::NativeOptions {
      viewport: egui::ViewportBuilder::default().with_inner_size([460.0, 320.0]),
      ..Default::default()
   };
   eframe::run_native(
      "Login Form",
      options,
      Box::new(|cc| Ok(Box::new(MyApp::new(cc)))),
   )
}
