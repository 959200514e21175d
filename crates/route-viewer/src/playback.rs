use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::viewer::Event;

/// The single repeating playback timer.
///
/// Sends `Event::Tick(id)` every `period` until dropped. Dropping aborts the
/// task, so replacing the handle cancels the previous timer.
pub struct PlaybackTimer {
    id: u64,
    task: JoinHandle<()>,
}

impl PlaybackTimer {
    pub fn start(id: u64, period: Duration, tx: UnboundedSender<Event>) -> Self {
        let task = tokio::spawn(async move {
            // First tick one period from now, not immediately
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                interval.tick().await;
                if tx.send(Event::Tick(id)).is_err() {
                    // Viewer is gone
                    break;
                }
            }
        });

        Self { id, task }
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Drop for PlaybackTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
