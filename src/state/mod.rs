//! View state for the three pages.
//!
//! Each page keeps a plain state container with synchronous transitions. The
//! async drivers in the submodules run a transition, await the API call, then
//! apply the settlement in a second short update, so no borrow is ever held
//! across a suspend point.

use std::cell::RefCell;

use dioxus::prelude::*;

pub mod chat;
pub mod create;
pub mod list;

#[cfg(test)]
pub(crate) mod fake;

pub use chat::{ChatMessage, ChatSession, Sender};
pub use create::{CreateForm, SubmitOutcome};
pub use list::{ListPhase, ListState};

/// Somewhere a piece of view state lives: a signal in the UI, a `RefCell` in tests.
pub trait StateCell<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = *self;
        signal.with_mut(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn mutate<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}
