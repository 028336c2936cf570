//! Chip input widget: pick items from a candidate pool, render each pick as a
//! removable chip, and delete the most recent chip with a two-stage backspace
//! gesture.
//!
//! The crate is renderer-independent. All widget state lives in one
//! [`ChipInputState`] and every UI event enters through one of its handlers,
//! so the chip/input/highlight state machine can be driven and tested without
//! a terminal.

pub mod chip;
pub mod event;
pub mod input;
pub mod state;

pub use chip::{derive_address, Chip, ChipId};
pub use event::{Key, Modifiers};
pub use input::{FilterInput, TextEditResult};
pub use state::{ChipInputState, KeyOutcome};
