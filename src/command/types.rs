use crate::display::DisplayStyle;

/// Which store threshold a `set` command changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    MinSize,
    TargetSize,
}

impl Setting {
    pub fn from_word(word: &str) -> Option<Self> {
        match word {
            "minstoresize" => Some(Setting::MinSize),
            "targetstoresize" => Some(Setting::TargetSize),
            _ => None,
        }
    }
}

/// A validated console command
///
/// Counts are byte counts. Malformed input never produces a value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch bytes and append them to the store
    Add(usize),
    /// Take bytes from the store and display them
    Observe(DisplayStyle, usize),
    /// Display bytes from the store without taking them
    Peek(DisplayStyle, usize),
    /// Display the whole store
    PeekAll(DisplayStyle),
    /// Fetch bytes and display them without touching the store
    Live(DisplayStyle, usize),
    /// Top the store up to the target size
    Fill,
    RestoreDefaults,
    /// Restore defaults and refill the store from scratch
    Reinitialize,
    Status,
    /// Write the raw store to a file
    Save(String),
    Set(Setting, usize),
    Help,
    Quit,
}
