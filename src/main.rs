use eframe::egui;

mod app;
mod trace;

use app::DemoApp;
use std::panic;
use trace::setup_tracing;

fn main() -> eframe::Result {
   panic::set_hook(Box::new(|panic_info| {
      let message = panic_info
         .payload()
         .downcast_ref::<&str>()
         .map_or("Unknown panic", |s| s);
      let location = panic_info
         .location()
         .map_or("Unknown location".to_string(), |loc| {
            format!("{}:{}:{}", loc.file(), loc.line(), loc.column())
         });
      tracing::error!("Panic occurred: '{}' at {}", message, location);
   }));

   let _tracing_guard = setup_tracing();

   let options = eframe::NativeOptions {
      viewport: egui::ViewportBuilder::default()
         .with_inner_size([520.0, 420.0])
         .with_min_inner_size([420.0, 360.0]),
      ..Default::default()
   };

   eframe::run_native(
      "fieldkit",
      options,
      Box::new(|cc| {
         let app = DemoApp::new(cc);
         Ok(Box::new(app))
      }),
   )
}
