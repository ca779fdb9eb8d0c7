//! Fear gauge: a clamped scalar with a one-shot saturation latch.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::FearConfig;
use crate::error::{Result, RulesError};

/// Receives `(current, max)` after every write to the fear gauge.
pub trait FearObserver: Send {
    fn on_fear_changed(&mut self, current: f32, max: f32);
}

impl<F> FearObserver for F
where
    F: FnMut(f32, f32) + Send,
{
    fn on_fear_changed(&mut self, current: f32, max: f32) {
        self(current, max)
    }
}

/// Point-in-time view of the fear gauge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FearState {
    pub current: f32,
    pub max: f32,
    /// Set once the gauge has saturated; never cleared within a session.
    pub triggered: bool,
}

impl FearState {
    /// Fill ratio of the gauge in `[0, 1]`.
    pub fn ratio(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }
}

/// What a fear write means for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FearTransition {
    Normal,
    /// The gauge saturated on this call. The caller shows the loss screen.
    JustSaturated,
    /// The latch was already set; the loss screen must not be shown again.
    AlreadySaturated,
}

/// Owns the fear value, its ceiling, the saturation latch and the single
/// display observer slot.
pub struct FearController {
    current: f32,
    max: f32,
    triggered: bool,
    observer: Option<Box<dyn FearObserver>>,
}

impl FearController {
    /// Create a controller. `initial` is clamped into `[0, max]`.
    pub fn new(initial: f32, max: f32) -> Result<Self> {
        if !max.is_finite() || max <= 0.0 {
            return Err(RulesError::InvalidFearMax { max });
        }
        if initial.is_nan() {
            return Err(RulesError::InvalidFearInitial { initial });
        }

        Ok(Self {
            current: initial.clamp(0.0, max),
            max,
            triggered: false,
            observer: None,
        })
    }

    /// Create a controller from configuration.
    pub fn from_config(config: &FearConfig) -> Result<Self> {
        Self::new(config.initial, config.max)
    }

    /// Set the fear value, clamped into `[0, max]`.
    ///
    /// NaN leaves the value unchanged. The observer is notified on every
    /// call, and the returned transition is `JustSaturated` at most once
    /// per controller.
    pub fn set_fear(&mut self, value: f32) -> FearTransition {
        if value.is_nan() {
            warn!("NaN fear value ignored");
        } else {
            self.current = value.clamp(0.0, self.max);
        }

        self.notify();

        if self.triggered {
            return FearTransition::AlreadySaturated;
        }

        if self.current >= self.max {
            self.triggered = true;
            info!(current = self.current, max = self.max, "Fear saturated");
            return FearTransition::JustSaturated;
        }

        FearTransition::Normal
    }

    /// Shift the fear value by `delta`, which may be negative.
    pub fn add_fear(&mut self, delta: f32) -> FearTransition {
        self.set_fear(self.current + delta)
    }

    /// Register the display observer, replacing any previous one.
    ///
    /// The new observer immediately receives the current value.
    pub fn register_observer(&mut self, observer: impl FearObserver + 'static) {
        if self.observer.is_some() {
            debug!("Replacing registered fear observer");
        }
        self.observer = Some(Box::new(observer));
        self.notify();
    }

    /// Drop the registered observer. Returns whether one was registered.
    pub fn clear_observer(&mut self) -> bool {
        self.observer.take().is_some()
    }

    pub fn has_observer(&self) -> bool {
        self.observer.is_some()
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Whether the saturation latch has fired.
    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn state(&self) -> FearState {
        FearState {
            current: self.current,
            max: self.max,
            triggered: self.triggered,
        }
    }

    fn notify(&mut self) {
        match self.observer.as_mut() {
            Some(observer) => {
                observer.on_fear_changed(self.current, self.max);
                debug!(current = self.current, max = self.max, "Pushed fear to display");
            }
            None => debug!("No fear display registered, skipping push"),
        }
    }
}

impl Default for FearController {
    fn default() -> Self {
        let config = FearConfig::default();
        Self {
            current: config.initial,
            max: config.max,
            triggered: false,
            observer: None,
        }
    }
}

impl std::fmt::Debug for FearController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FearController")
            .field("current", &self.current)
            .field("max", &self.max)
            .field("triggered", &self.triggered)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}
