//! The chip input state machine.
//!
//! One struct owns everything the widget knows: the filter field, the chips
//! in insertion order, the remaining candidate pool, the cached filtered view,
//! and the armed-for-deletion highlight. Each UI event maps to exactly one
//! handler on [`ChipInputState`], so every transition is a single, atomic
//! update of the whole struct.
//!
//! Invariants maintained across all handlers:
//!
//! - a label is in `chips` or in `pool`, never both
//! - `filtered` is exactly the indices of pool labels containing the filter
//!   text as a case-insensitive substring, in pool order
//! - `armed`, when set, refers to the last chip
//! - removing a chip appends its label back to the pool exactly once

use crate::chip::{Chip, ChipId};
use crate::event::{Key, Modifiers};
use crate::input::{FilterInput, TextEditResult};

/// State for a chip input widget.
#[derive(Debug, Clone, Default)]
pub struct ChipInputState {
    /// Filter field text and cursor.
    input: FilterInput,
    /// Confirmed selections, in insertion order.
    chips: Vec<Chip>,
    /// Candidates not yet selected, in pool order.
    pool: Vec<String>,
    /// Cached filtered view: indices into `pool`.
    filtered: Vec<usize>,
    /// Chip armed for deletion by the backspace gesture. Always the last chip.
    armed: Option<ChipId>,
    /// Counter backing `ChipId` minting.
    next_id: u64,
}

impl ChipInputState {
    /// Create a widget over the given candidate pool.
    ///
    /// Labels are expected to be unique within the pool; the widget preserves
    /// the order they are given in.
    pub fn new(candidates: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let pool: Vec<String> = candidates.into_iter().map(Into::into).collect();
        let filtered = (0..pool.len()).collect();
        Self {
            input: FilterInput::new(),
            chips: Vec::new(),
            pool,
            filtered,
            armed: None,
            next_id: 0,
        }
    }

    /// Current filter text.
    pub fn filter_text(&self) -> &str {
        self.input.text()
    }

    /// Filter field, including cursor position.
    pub fn input(&self) -> &FilterInput {
        &self.input
    }

    /// Chips in insertion order.
    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    /// Candidate pool in pool order, selected labels excluded.
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// The filtered view: pool labels matching the filter text, in pool order.
    pub fn filtered_labels(&self) -> impl Iterator<Item = &str> {
        self.filtered.iter().map(|&i| self.pool[i].as_str())
    }

    /// Number of labels in the filtered view.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The chip currently armed for deletion, if any.
    pub fn armed(&self) -> Option<ChipId> {
        self.armed
    }

    /// Replace the filter text wholesale (cursor to end).
    ///
    /// Clears the armed highlight and recomputes the filtered view.
    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.input.set(text);
        self.armed = None;
        self.refilter();
    }

    /// Select a candidate by label, turning it into a chip.
    ///
    /// Idempotent: if a chip with this exact label already exists, nothing
    /// changes and `None` is returned. Otherwise the new chip's id is
    /// returned, the label leaves the pool, the filter text is cleared, and
    /// the caller should return focus to the text field.
    pub fn select(&mut self, label: &str) -> Option<ChipId> {
        if self.chips.iter().any(|chip| chip.label == label) {
            log::debug!("select: duplicate label {label:?}, ignoring");
            return None;
        }

        let id = ChipId(self.next_id);
        self.next_id += 1;
        self.chips.push(Chip::new(id, label));
        self.pool.retain(|candidate| candidate != label);
        self.input.clear();
        // A freshly appended chip displaces any previously armed chip from
        // the last position, so the highlight cannot survive a selection.
        self.armed = None;
        self.refilter();

        log::debug!(
            "select: {label:?} -> {id:?}, {} chips, {} in pool",
            self.chips.len(),
            self.pool.len()
        );
        Some(id)
    }

    /// Remove a chip by id, returning its label to the pool.
    ///
    /// Returns false for unknown ids. The label is appended to the pool
    /// rather than restored to its original position.
    pub fn remove(&mut self, id: ChipId) -> bool {
        self.take_chip(id).is_some()
    }

    /// Handle a key press on the text field.
    ///
    /// This is the single keyboard entry point: the backspace-at-empty-input
    /// gesture is matched first, and every other key explicitly disarms the
    /// highlight before being offered to the text editor.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> KeyOutcome {
        match key {
            Key::Backspace if modifiers.none() && self.input.is_empty() => {
                if let Some(armed) = self.armed.take() {
                    // Second press: the armed chip goes.
                    match self.take_chip(armed) {
                        Some(chip) => KeyOutcome::Removed(chip),
                        None => KeyOutcome::Handled,
                    }
                } else if let Some(last) = self.chips.last() {
                    // First press: arm the last chip, remove nothing yet.
                    let id = last.id;
                    self.armed = Some(id);
                    log::debug!("backspace gesture: armed {id:?}");
                    KeyOutcome::Armed(id)
                } else {
                    KeyOutcome::Handled
                }
            }

            // Any other key resets the gesture before anything else happens.
            _ => {
                self.armed = None;
                match self.input.handle_key(key, modifiers) {
                    TextEditResult::Changed => {
                        self.refilter();
                        KeyOutcome::FilterChanged
                    }
                    TextEditResult::Submitted => KeyOutcome::Submitted,
                    TextEditResult::Handled => KeyOutcome::Handled,
                    TextEditResult::Ignored => KeyOutcome::Ignored,
                }
            }
        }
    }

    /// Remove a chip and do all the bookkeeping. None for unknown ids.
    fn take_chip(&mut self, id: ChipId) -> Option<Chip> {
        let index = self.chips.iter().position(|chip| chip.id == id)?;
        let chip = self.chips.remove(index);
        self.pool.push(chip.label.clone());
        if self.armed == Some(id) {
            self.armed = None;
        }
        self.refilter();

        log::debug!(
            "remove: {:?} ({:?}), {} chips, {} in pool",
            chip.id,
            chip.label,
            self.chips.len(),
            self.pool.len()
        );
        Some(chip)
    }

    /// Recompute the filtered view from the pool and the filter text.
    fn refilter(&mut self) {
        let needle = self.input.text().to_lowercase();
        self.filtered = self
            .pool
            .iter()
            .enumerate()
            .filter(|(_, label)| label.to_lowercase().contains(&needle))
            .map(|(index, _)| index)
            .collect();
    }
}

/// What a key press did to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Filter text changed; the filtered view was recomputed.
    FilterChanged,
    /// The last chip was armed for deletion (first backspace press).
    Armed(ChipId),
    /// The armed chip was removed (second backspace press).
    Removed(Chip),
    /// Enter was pressed; the caller decides what to activate.
    Submitted,
    /// Key was handled with no visible text change (e.g., cursor movement).
    Handled,
    /// Key was not handled.
    Ignored,
}
