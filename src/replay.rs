// SPDX-License-Identifier: MPL-2.0
//! Replay of recorded input traces.
//!
//! A trace is a TOML document describing a slide deck and a sequence of raw
//! input events. Replaying it drives a real [`Lightbox`] and reports every
//! navigation intent together with the index it produced.
//!
//! ```toml
//! slides = 3
//! start = 0
//! transition_ms = 250
//! hooks = 1
//! failing_hooks = 1
//!
//! [[events]]
//! kind = "key"
//! key = "ArrowRight"
//!
//! [[events]]
//! kind = "pointer_down"
//! x = 400.0
//! y = 300.0
//!
//! [[events]]
//! kind = "pointer_up"
//! x = 300.0
//! y = 300.0
//!
//! [[events]]
//! kind = "wheel"
//! dx = 120.0
//! at_ms = 2000
//! ```

use crate::application::port::{TimedTransition, ViewTransition};
use crate::config::Config;
use crate::domain::gesture::{
    GestureEvent, KeyCode, PointerId, PointerInput, PointerTarget, Position, WheelInput,
};
use crate::domain::lightbox::{NavigationIntent, Slide, SlideIndex};
use crate::error::{Error, Result};
use crate::ui::lightbox::{Effect, ExitHook, Lightbox, Message};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Recorded session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Trace {
    /// Number of slides in the deck.
    pub slides: usize,
    /// Position the lightbox opens at.
    #[serde(default)]
    pub start: usize,
    /// View transition length; zero disables transitions.
    #[serde(default)]
    pub transition_ms: u64,
    /// Exit hooks that succeed.
    #[serde(default)]
    pub hooks: usize,
    /// Exit hooks that fail.
    #[serde(default)]
    pub failing_hooks: usize,
    #[serde(default)]
    pub events: Vec<TraceEvent>,
}

/// One recorded input event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceEvent {
    Key {
        key: String,
    },
    PointerDown(TracePointer),
    PointerUp(TracePointer),
    PointerLeave(TracePointer),
    PointerCancel(TracePointer),
    Wheel {
        dx: f32,
        #[serde(default)]
        dy: f32,
        at_ms: u64,
    },
    /// Direct close request, as from a close button.
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TracePointer {
    pub x: f32,
    pub y: f32,
    /// Finger identifier; the mouse when absent.
    #[serde(default)]
    pub touch: Option<u64>,
    #[serde(default)]
    pub target: TraceTarget,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceTarget {
    #[default]
    Slide,
    Chrome,
}

impl TracePointer {
    fn input(self) -> PointerInput {
        let id = self.touch.map_or(PointerId::Mouse, PointerId::Touch);
        let target = match self.target {
            TraceTarget::Slide => PointerTarget::SlideSurface,
            TraceTarget::Chrome => PointerTarget::Chrome,
        };
        PointerInput::new(id, Position::new(self.x, self.y), target)
    }
}

impl TraceEvent {
    /// Raw input equivalent, or `None` for direct requests.
    fn gesture(&self) -> Option<GestureEvent> {
        Some(match self {
            TraceEvent::Key { key } => GestureEvent::KeyDown(KeyCode::from_name(key)),
            TraceEvent::PointerDown(pointer) => GestureEvent::PointerDown(pointer.input()),
            TraceEvent::PointerUp(pointer) => GestureEvent::PointerUp(pointer.input()),
            TraceEvent::PointerLeave(pointer) => GestureEvent::PointerLeave(pointer.input()),
            TraceEvent::PointerCancel(pointer) => GestureEvent::PointerCancel(pointer.input()),
            TraceEvent::Wheel { dx, dy, at_ms } => GestureEvent::Wheel(WheelInput::new(
                *dx,
                *dy,
                Duration::from_millis(*at_ms),
            )),
            TraceEvent::Close => return None,
        })
    }
}

impl Trace {
    /// Parses and validates a trace document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Replay`] for malformed TOML or an unusable deck.
    pub fn parse(source: &str) -> Result<Self> {
        let trace: Trace = toml::from_str(source).map_err(|err| Error::Replay(err.to_string()))?;
        trace.validate()?;
        Ok(trace)
    }

    /// Reads and parses a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, otherwise as
    /// [`Trace::parse`].
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }

    fn validate(&self) -> Result<()> {
        if self.slides == 0 {
            return Err(Error::Replay("trace needs at least one slide".into()));
        }
        if self.start >= self.slides {
            return Err(Error::Replay(format!(
                "start index {} is out of range for {} slides",
                self.start, self.slides
            )));
        }
        Ok(())
    }
}

/// A navigation intent produced while replaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStep {
    /// One-based position of the event in the trace.
    pub event: usize,
    pub intent: NavigationIntent,
    /// Index after the intent was carried out.
    pub index: SlideIndex,
}

impl fmt::Display for ReplayStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let intent = match self.intent {
            NavigationIntent::Previous => "prev",
            NavigationIntent::Next => "next",
            NavigationIntent::Close => "close",
        };
        match self.index {
            SlideIndex::Open(position) => {
                write!(f, "event {}: {intent} -> slide {position}", self.event)
            }
            SlideIndex::Closed => write!(f, "event {}: {intent} -> closed", self.event),
        }
    }
}

/// Replays `trace` through a lightbox tuned by `config`.
///
/// Transitions and exit hooks are awaited before the next event is fed.
///
/// # Errors
///
/// Returns [`Error::Replay`] if the trace describes an unusable deck.
pub async fn run(trace: &Trace, config: &Config) -> Result<Vec<ReplayStep>> {
    trace.validate()?;

    let slides = (0..trace.slides)
        .map(|i| Slide::image(format!("slide-{i}")))
        .collect();
    let transition = TimedTransition::new(Duration::from_millis(trace.transition_ms));
    let mut lightbox = Lightbox::new(slides, config, transition);

    let handle = lightbox.handle_for_collaborators();
    for _ in 0..trace.hooks {
        handle.add_exit_hook(ExitHook::sync(|| Ok(())))?;
    }
    for i in 0..trace.failing_hooks {
        handle.add_exit_hook(ExitHook::sync(move || {
            Err(Error::exit_hook(format!("replay hook {i} failed")))
        }))?;
    }

    lightbox.handle(Message::Open(trace.start));

    let mut steps = Vec::new();
    for (number, event) in trace.events.iter().enumerate() {
        let intent = match event.gesture() {
            Some(gesture) => lightbox.interpret(gesture),
            None => lightbox.is_open().then_some(NavigationIntent::Close),
        };
        let Some(intent) = intent else {
            continue;
        };

        let effect = lightbox.handle(Message::Intent(intent));
        settle(&mut lightbox, effect).await;
        steps.push(ReplayStep {
            event: number + 1,
            intent,
            index: lightbox.index(),
        });
    }

    Ok(steps)
}

async fn settle<T: ViewTransition>(lightbox: &mut Lightbox<T>, effect: Effect) {
    match effect {
        Effect::AwaitTransition(pending) => {
            let ticket = pending.settled().await;
            lightbox.handle(Message::TransitionSettled(ticket));
        }
        Effect::AwaitClose(drain) => {
            let ticket = drain.settled().await;
            lightbox.handle(Message::CloseSettled(ticket));
        }
        Effect::IndexChanged(_) | Effect::None => {}
    }
}
