//! Route Viewer - headless playback of a vehicle's historical route.
//!
//! Loads the route for the configured range selector from the route proxy,
//! switches to the playback panel and plays the route back at the configured
//! speed, reporting the marker position and heading on every step.

mod playback;
mod source;
mod state;
mod viewer;

use anyhow::Result;
use route_common::{init_tracing, Config, RangeSelector};
use tokio::signal;

use crate::source::HttpRouteSource;
use crate::state::{Action, Phase};
use crate::viewer::Viewer;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Config and logs
    let config = Config::from_env()?;
    init_tracing("route-viewer", &config.log_level);

    let selector = RangeSelector::from(config.selector.as_str());
    let mut viewer = Viewer::new(HttpRouteSource::new(&config.proxy_url));

    // 2. Load the selected range
    tracing::info!("Loading route for {} from {}", selector, config.proxy_url);
    viewer.dispatch(Action::QueryChanged(selector));
    viewer.run_until(|s| !s.loading).await;

    let state = viewer.state();
    if state.path.is_empty() {
        tracing::warn!("No route available for {}", selector);
        return Ok(());
    }
    tracing::info!(
        start = ?state.start,
        end = ?state.end,
        "Loaded {} waypoints",
        state.path.len()
    );

    // 3. "Show" opens the playback panel
    viewer.dispatch(Action::TogglePanel);
    viewer.dispatch(Action::ToggleInfoWindow);
    viewer.dispatch(Action::SpeedChanged(config.playback_speed));
    viewer.dispatch(Action::PlayStarted);

    // 4. Play until the end or Ctrl+C
    tokio::select! {
        _ = viewer.run_until(|s| s.phase() != Phase::Running) => {
            tracing::info!("Playback finished");
        }
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for Ctrl+C: {}", e);
            }
            tracing::warn!("Received shutdown signal");
        }
    }
    viewer.dispatch(Action::PlayEnded);

    Ok(())
}
