/// Where the serialized view state lives (the shareable address).
///
/// `replace` overwrites the current entry; implementations must not keep a
/// growing history of past states.
pub trait LocationSink {
    fn replace(&mut self, query: &str);
    fn current(&self) -> &str;
}

/// In-memory address, shown on screen by the TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    query: String,
    replacements: usize,
}

impl MemoryLocation {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            query: initial.into(),
            replacements: 0,
        }
    }

    /// How many times the address has been rewritten.
    pub fn replacements(&self) -> usize {
        self.replacements
    }
}

impl LocationSink for MemoryLocation {
    fn replace(&mut self, query: &str) {
        self.query.clear();
        self.query.push_str(query);
        self.replacements += 1;
    }

    fn current(&self) -> &str {
        &self.query
    }
}
