//! Event loop that owns the view state and executes reducer effects.
//!
//! User actions, fetch results and timer ticks all arrive on one queue and
//! are applied in order on a single task. The viewer owns at most one
//! [`PlaybackTimer`]; ticks from a timer that has since been replaced are
//! discarded.

use std::sync::Arc;

use route_common::RangeSelector;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

use crate::playback::PlaybackTimer;
use crate::source::RouteSource;
use crate::state::{Action, Effect, Phase, ViewState};

#[derive(Debug)]
pub enum Event {
    Action(Action),
    Tick(u64),
}

pub struct Viewer<S> {
    state: ViewState,
    source: Arc<S>,
    timer: Option<PlaybackTimer>,
    next_timer_id: u64,
    tx: UnboundedSender<Event>,
    rx: UnboundedReceiver<Event>,
}

impl<S: RouteSource> Viewer<S> {
    pub fn new(source: S) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: ViewState::default(),
            source: Arc::new(source),
            timer: None,
            next_timer_id: 0,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[cfg(test)]
    pub fn has_timer(&self) -> bool {
        self.timer.is_some()
    }

    /// Applies an action immediately and runs its effects.
    pub fn dispatch(&mut self, action: Action) {
        let effects = self.state.apply(action);
        for effect in effects {
            self.run_effect(effect);
        }
        self.render();
    }

    /// Processes queued events until `done` holds for the state.
    pub async fn run_until(&mut self, done: impl Fn(&ViewState) -> bool) {
        while !done(&self.state) {
            // The viewer keeps a sender, so the queue never closes
            let Some(event) = self.rx.recv().await else {
                return;
            };
            self.handle_event(event);
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Action(action) => self.dispatch(action),
            Event::Tick(id) => {
                if self.timer.as_ref().map(PlaybackTimer::id) == Some(id) {
                    self.dispatch(Action::Tick);
                } else {
                    debug!("Ignoring tick from canceled timer {}", id);
                }
            }
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Fetch(selector) => self.spawn_fetch(selector),
            Effect::StartTimer(period) => {
                // Drop the old handle before a new one exists
                self.timer = None;
                self.next_timer_id += 1;
                debug!("Starting playback timer {} every {:?}", self.next_timer_id, period);
                self.timer = Some(PlaybackTimer::start(self.next_timer_id, period, self.tx.clone()));
            }
            Effect::CancelTimer => {
                if let Some(timer) = self.timer.take() {
                    debug!("Canceled playback timer {}", timer.id());
                }
            }
        }
    }

    fn spawn_fetch(&self, selector: RangeSelector) {
        let source = self.source.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let action = match source.fetch(selector).await {
                Ok(path) => Action::DataLoaded {
                    query: selector,
                    path,
                },
                Err(e) => {
                    error!("Error fetching vehicle location for {}: {:#}", selector, e);
                    Action::LoadFailed(selector)
                }
            };
            let _ = tx.send(Event::Action(action));
        });
    }

    /// Stands in for the map widget: reports what it would draw.
    fn render(&self) {
        let state = &self.state;
        match state.phase() {
            Phase::Running | Phase::Finished => {
                info!(
                    lat = state.current.latitude,
                    lng = state.current.longitude,
                    heading = state.heading,
                    "🚗 Vehicle at step {}/{}",
                    state.playback.index + 1,
                    state.path.len()
                );
            }
            Phase::Idle => {
                debug!(
                    center = %state.center,
                    start = ?state.start,
                    end = ?state.end,
                    panel = ?state.panel,
                    "Map showing {} waypoints",
                    state.path.len()
                );
            }
        }

        if state.info_window {
            let info = state.info();
            debug!(
                position = %info.position,
                heading = info.heading,
                "Info: step {} of {}, route {:.2} km",
                info.step,
                info.total_steps,
                info.route_length_m / 1000.0
            );
        }
    }
}
