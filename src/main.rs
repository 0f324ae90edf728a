use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use runepilot::app::App;
use runepilot::config::Config;
use runepilot::status::LogSink;

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "runepilot=info,warn".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config_path = std::env::args()
    .nth(1)
    .map(PathBuf::from)
    .unwrap_or_else(|| PathBuf::from("runepilot.json"));
  let config = Config::load(&config_path);
  info!("starting runepilot (config: {})", config_path.display());

  let (stop_tx, stop_rx) = watch::channel(false);
  tokio::spawn(async move {
    let _ = tokio::signal::ctrl_c().await;
    info!("stop requested");
    let _ = stop_tx.send(true);
  });

  let app = App::new(config, Arc::new(LogSink));
  app.run(stop_rx).await
}
