//! Paired range/entry control
//!
//! One bounded integer shown through two presentations: a draggable slider
//! and a typed numeric field. The slider value is the single source of
//! truth. Updates flow along two one-way edges:
//!
//! - entry commit -> parse (0 on failure) -> `set_value`
//! - value change -> entry text overwritten with the decimal value
//!
//! There is no edge from the entry text back to the value until the entry
//! is committed, so the two presentations cannot feed back into each other.

use std::fmt;

/// Callback fired with the new value whenever the slider value changes
pub type ChangeListener = Box<dyn FnMut(i64)>;

/// A slider with a label and a synchronized entry box
pub struct PairedControl {
    label: &'static str,
    value: i64,
    min: i64,
    max: i64,
    entry_text: String,
    listeners: Vec<ChangeListener>,
}

impl PairedControl {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: 0,
            min: 0,
            max: 0,
            entry_text: String::new(),
            listeners: Vec::new(),
        }
    }

    /// Set the slider's legal range.
    ///
    /// The current value is left untouched even if it now falls outside
    /// `[min, max]`.
    pub fn set_bounds(&mut self, min: i64, max: i64) {
        self.min = min;
        self.max = max;
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Current slider value
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Set both presentations to `value`.
    ///
    /// Like a slider widget, the value is clamped into the current bounds.
    /// Listeners fire only if the stored value actually changed.
    pub fn set_value(&mut self, value: i64) {
        let clamped = clamp_to(value, self.min, self.max);
        let changed = clamped != self.value;
        self.value = clamped;
        self.entry_text = clamped.to_string();
        if changed {
            self.notify();
        }
    }

    /// A drag tick on the slider
    pub fn drag_to(&mut self, value: i64) {
        self.set_value(value);
    }

    /// Register a callback for every value change (drag or programmatic)
    pub fn on_change(&mut self, listener: impl FnMut(i64) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Mutable access for a text edit widget; nothing is committed until
    /// [`commit_entry`](Self::commit_entry)
    pub fn entry_text_mut(&mut self) -> &mut String {
        &mut self.entry_text
    }

    /// Push the typed text into the slider (the "enter pressed" edge)
    pub fn commit_entry(&mut self) {
        let parsed = parse_entry(&self.entry_text);
        log::debug!("{}: entry {:?} -> {}", self.label, self.entry_text, parsed);
        self.set_value(parsed);
    }

    fn notify(&mut self) {
        let value = self.value;
        for listener in &mut self.listeners {
            listener(value);
        }
    }
}

impl fmt::Debug for PairedControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairedControl")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("entry_text", &self.entry_text)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Parse typed entry text; anything that is not an integer becomes 0
pub fn parse_entry(text: &str) -> i64 {
    text.trim().parse().unwrap_or(0)
}

// `i64::clamp` panics on min > max; a slider with an inverted range just
// pins to its minimum.
fn clamp_to(value: i64, min: i64, max: i64) -> i64 {
    value.min(max).max(min)
}
