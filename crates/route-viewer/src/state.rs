//! Viewer state and the reducer that drives it.
//!
//! All UI state lives in one [`ViewState`] record. It only changes through
//! [`ViewState::apply`], which consumes a discrete [`Action`] and returns the
//! side effects the driver has to perform (fetching a route, starting or
//! canceling the playback timer). The reducer itself never does I/O.

use std::time::Duration;

use route_common::waypoint::{heading, path_length_m};
use route_common::{RangeSelector, Waypoint, DEFAULT_CENTER};
use tracing::debug;

pub const MIN_SPEED: f64 = 1.0;
pub const MAX_SPEED: f64 = 5.0;

/// Which of the two mutually exclusive control panels is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Range selector and the "show" action
    Selector,
    /// Speed control and the "play" action
    Playback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    /// Stopped on the last waypoint
    Finished,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub index: usize,
    pub speed: f64,
    pub running: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            index: 0,
            speed: MIN_SPEED,
            running: false,
        }
    }
}

impl PlaybackState {
    /// Tick period for the current speed: one second divided by the speed.
    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.speed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    QueryChanged(RangeSelector),
    DataLoaded {
        query: RangeSelector,
        path: Vec<Waypoint>,
    },
    /// The fetch for `query` failed before producing a response
    LoadFailed(RangeSelector),
    SpeedChanged(f64),
    PlayStarted,
    Tick,
    PlayEnded,
    TogglePanel,
    ToggleInfoWindow,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch(RangeSelector),
    StartTimer(Duration),
    CancelTimer,
}

/// Contents of the info window anchored at the vehicle marker.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoSummary {
    pub position: Waypoint,
    pub heading: f64,
    pub step: usize,
    pub total_steps: usize,
    pub route_length_m: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub selected: RangeSelector,
    pub loading: bool,
    pub path: Vec<Waypoint>,
    pub start: Option<Waypoint>,
    pub end: Option<Waypoint>,
    pub current: Waypoint,
    /// Only moves when a new path is loaded
    pub center: Waypoint,
    pub heading: f64,
    pub playback: PlaybackState,
    pub panel: Panel,
    pub info_window: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected: RangeSelector::default(),
            loading: false,
            path: Vec::new(),
            start: None,
            end: None,
            current: DEFAULT_CENTER,
            center: DEFAULT_CENTER,
            heading: 0.0,
            playback: PlaybackState::default(),
            panel: Panel::Selector,
            info_window: false,
        }
    }
}

impl ViewState {
    pub fn phase(&self) -> Phase {
        if self.playback.running {
            Phase::Running
        } else if self.path.len() > 1 && self.playback.index == self.path.len() - 1 {
            Phase::Finished
        } else {
            Phase::Idle
        }
    }

    pub fn info(&self) -> InfoSummary {
        InfoSummary {
            position: self.current,
            heading: self.heading,
            step: self.playback.index,
            total_steps: self.path.len(),
            route_length_m: path_length_m(&self.path),
        }
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::QueryChanged(query) => {
                self.selected = query;
                self.loading = true;
                vec![Effect::Fetch(query)]
            }
            Action::DataLoaded { query, path } => {
                if query != self.selected {
                    debug!("Dropping stale route for {} (selected {})", query, self.selected);
                    return Vec::new();
                }
                self.load(path);
                vec![Effect::CancelTimer]
            }
            Action::LoadFailed(query) => {
                if query == self.selected {
                    self.loading = false;
                }
                Vec::new()
            }
            Action::SpeedChanged(speed) => {
                if speed.is_finite() {
                    self.playback.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
                }
                Vec::new()
            }
            Action::PlayStarted => self.start_playback(),
            Action::Tick => self.tick(),
            Action::PlayEnded => {
                self.playback.running = false;
                vec![Effect::CancelTimer]
            }
            Action::TogglePanel => {
                self.panel = match self.panel {
                    Panel::Selector => Panel::Playback,
                    Panel::Playback => Panel::Selector,
                };
                Vec::new()
            }
            Action::ToggleInfoWindow => {
                self.info_window = !self.info_window;
                Vec::new()
            }
        }
    }

    fn load(&mut self, path: Vec<Waypoint>) {
        self.loading = false;
        self.playback.index = 0;
        self.playback.running = false;
        self.heading = 0.0;

        match (path.first().copied(), path.last().copied()) {
            (Some(first), Some(last)) => {
                self.start = Some(first);
                self.end = Some(last);
                self.current = first;
                self.center = first;
            }
            _ => {
                self.start = None;
                self.end = None;
                self.current = DEFAULT_CENTER;
                self.center = DEFAULT_CENTER;
            }
        }
        self.path = path;
    }

    fn start_playback(&mut self) -> Vec<Effect> {
        // Any running timer goes first, even if this start turns out to be a no-op
        let mut effects = vec![Effect::CancelTimer];

        self.playback.index = 0;
        self.playback.running = false;
        if let Some(first) = self.path.first() {
            self.current = *first;
        }
        if self.path.len() > 1 {
            self.playback.running = true;
            effects.push(Effect::StartTimer(self.playback.period()));
        }
        effects
    }

    fn tick(&mut self) -> Vec<Effect> {
        if !self.playback.running {
            return Vec::new();
        }

        let index = self.playback.index;
        if index + 1 < self.path.len() {
            self.heading = heading(self.path[index], self.path[index + 1]);
            self.playback.index = index + 1;
            self.current = self.path[index + 1];
        }

        if self.playback.index + 1 >= self.path.len() {
            self.playback.running = false;
            return vec![Effect::CancelTimer];
        }
        Vec::new()
    }
}
