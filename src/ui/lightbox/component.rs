// SPDX-License-Identifier: MPL-2.0
//! Lightbox component encapsulating slide state and update logic.
//!
//! Wires the event adapter, the gesture interpreter and the navigation
//! controller together. The host forwards runtime events as [`Message`]s and
//! acts on the returned [`Effect`]: awaited futures come back as
//! [`Message::TransitionSettled`] or [`Message::CloseSettled`].
//!
//! ```ignore
//! match lightbox.handle(message) {
//!     Effect::AwaitTransition(pending) => {
//!         Task::perform(pending.settled(), Message::TransitionSettled)
//!     }
//!     Effect::AwaitClose(drain) => Task::perform(drain.settled(), Message::CloseSettled),
//!     Effect::IndexChanged(_) | Effect::None => Task::none(),
//! }
//! ```

use super::controller::{
    CloseDrain, CloseTicket, Navigation, NavigationController, PendingTransition,
    TransitionTicket,
};
use super::events::EventAdapter;
use super::handle::ControllerHandle;
use super::sensors::GestureInterpreter;
use crate::application::port::{NoTransition, SlideHost, ViewTransition};
use crate::config::Config;
use crate::domain::gesture::GestureEvent;
use crate::domain::lightbox::{NavigationIntent, Slide, SlideIndex, TransitionDirection};
use std::time::Instant;

/// Slides shown in the lightbox and the current position.
#[derive(Debug, Clone, Default)]
pub struct SlideDeck {
    slides: Vec<Slide>,
    index: SlideIndex,
}

impl SlideDeck {
    #[must_use]
    pub fn new(slides: Vec<Slide>) -> Self {
        Self {
            slides,
            index: SlideIndex::Closed,
        }
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Slide at the current position, if the lightbox is open.
    #[must_use]
    pub fn current(&self) -> Option<&Slide> {
        self.index
            .position()
            .and_then(|position| self.slides.get(position))
    }

    /// Replaces the slides. An open position past the new end closes the
    /// lightbox.
    pub fn replace_slides(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        if matches!(self.index.position(), Some(position) if position >= self.slides.len()) {
            self.index = SlideIndex::Closed;
        }
    }
}

impl SlideHost for SlideDeck {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn index(&self) -> SlideIndex {
        self.index
    }

    fn set_index(&mut self, index: SlideIndex) {
        self.index = index;
    }
}

/// Messages handled by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw runtime event and the instant it was received.
    Event(iced_core::Event, Instant),
    /// Already decoded input, e.g. from a custom widget.
    Gesture(GestureEvent),
    /// Direct navigation request, e.g. from a button.
    Intent(NavigationIntent),
    /// Opens the lightbox at the given slide.
    Open(usize),
    TransitionSettled(TransitionTicket),
    CloseSettled(CloseTicket),
}

/// Side effects the host must carry out after [`Lightbox::handle`].
#[derive(Debug)]
pub enum Effect {
    None,
    /// The index changed and no further work is pending.
    IndexChanged(SlideIndex),
    /// Await [`PendingTransition::settled`] and send
    /// [`Message::TransitionSettled`].
    AwaitTransition(PendingTransition),
    /// Await [`CloseDrain::settled`] and send [`Message::CloseSettled`].
    AwaitClose(CloseDrain),
}

/// Complete lightbox state.
#[derive(Debug)]
pub struct Lightbox<T = NoTransition> {
    deck: SlideDeck,
    interpreter: GestureInterpreter,
    controller: NavigationController,
    adapter: EventAdapter,
    transition: T,
}

impl Lightbox<NoTransition> {
    /// Lightbox without view transitions.
    #[must_use]
    pub fn instant(slides: Vec<Slide>, config: &Config) -> Self {
        Self::new(slides, config, NoTransition)
    }
}

impl<T: ViewTransition> Lightbox<T> {
    #[must_use]
    pub fn new(slides: Vec<Slide>, config: &Config, transition: T) -> Self {
        Self {
            deck: SlideDeck::new(slides),
            interpreter: GestureInterpreter::new(config.thresholds()),
            controller: NavigationController::new(),
            adapter: EventAdapter::new(Instant::now(), config.wheel_line_height()),
            transition,
        }
    }

    #[must_use]
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn deck_mut(&mut self) -> &mut SlideDeck {
        &mut self.deck
    }

    #[must_use]
    pub fn index(&self) -> SlideIndex {
        self.deck.index()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.deck.index().is_closed()
    }

    #[must_use]
    pub fn controller(&self) -> &NavigationController {
        &self.controller
    }

    /// Adapter used for runtime events; layout code updates its bounds.
    pub fn adapter_mut(&mut self) -> &mut EventAdapter {
        &mut self.adapter
    }

    #[must_use]
    pub fn upcoming_transition(&self) -> Option<TransitionDirection> {
        self.controller.upcoming_transition()
    }

    /// Handle for zoom, video or custom controls living inside the lightbox.
    #[must_use]
    pub fn handle_for_collaborators(&self) -> ControllerHandle {
        self.controller.handle()
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Event(event, now) => match self.adapter.translate(&event, now) {
                Some(gesture) => self.handle_gesture(gesture),
                None => Effect::None,
            },
            Message::Gesture(gesture) => self.handle_gesture(gesture),
            Message::Intent(intent) => self.handle_intent(intent),
            Message::Open(position) => self.open(position),
            Message::TransitionSettled(ticket) => {
                self.controller.settle(ticket);
                Effect::None
            }
            Message::CloseSettled(ticket) => {
                self.controller.finish_close(ticket, &mut self.deck);
                Effect::IndexChanged(self.deck.index())
            }
        }
    }

    /// Decodes one input event without acting on it. Input is dropped while
    /// the lightbox is closed.
    pub fn interpret(&mut self, gesture: GestureEvent) -> Option<NavigationIntent> {
        if !self.is_open() {
            tracing::trace!(?gesture, "lightbox closed, input dropped");
            return None;
        }
        self.interpreter.handle(gesture)
    }

    fn handle_gesture(&mut self, gesture: GestureEvent) -> Effect {
        match self.interpret(gesture) {
            Some(intent) => self.handle_intent(intent),
            None => Effect::None,
        }
    }

    fn handle_intent(&mut self, intent: NavigationIntent) -> Effect {
        let direction = match intent {
            NavigationIntent::Previous => TransitionDirection::Previous,
            NavigationIntent::Next => TransitionDirection::Next,
            NavigationIntent::Close => return self.close(),
        };

        match self
            .controller
            .navigate(direction, &mut self.deck, &mut self.transition)
        {
            Navigation::Ignored => Effect::None,
            Navigation::Completed(index) => Effect::IndexChanged(index),
            Navigation::Pending(pending) => Effect::AwaitTransition(pending),
        }
    }

    fn close(&mut self) -> Effect {
        if !self.is_open() {
            return Effect::None;
        }
        match self.controller.close() {
            Some(drain) => {
                self.interpreter.reset();
                Effect::AwaitClose(drain)
            }
            None => Effect::None,
        }
    }

    fn open(&mut self, position: usize) -> Effect {
        if position >= self.deck.slide_count() {
            tracing::debug!(
                position,
                count = self.deck.slide_count(),
                "open request out of range"
            );
            return Effect::None;
        }
        self.interpreter.reset();
        let index = SlideIndex::Open(position);
        self.deck.set_index(index);
        Effect::IndexChanged(index)
    }
}
