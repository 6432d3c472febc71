use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Registry;

use tracing_subscriber::{
   EnvFilter, fmt, layer::SubscriberExt, prelude::*, util::SubscriberInitExt,
};

pub fn setup_tracing() -> WorkerGuard {
   let file_appender = tracing_appender::rolling::daily("./logs", "fieldkit.log");
   let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

   let console_filter = EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("fieldkit=info,fieldkit_widgets=info,warn"));
   let file_filter = EnvFilter::new("fieldkit=trace,fieldkit_widgets=trace,fieldkit_core=trace");

   let console_layer = fmt::layer()
      .with_writer(std::io::stdout)
      .with_filter(console_filter);

   let file_layer = fmt::layer()
      .with_writer(file_writer)
      .with_filter(file_filter);

   Registry::default()
      .with(file_layer)
      .with(console_layer)
      .init();

   file_guard
}
