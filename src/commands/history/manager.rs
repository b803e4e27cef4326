/// A finished command together with the text it printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub command: String,
    pub response: String,
    pub status_code: u16,
}

impl HistoryEntry {
    pub fn new(command: impl Into<String>, response: impl Into<String>, status_code: u16) -> Self {
        Self {
            command: command.into(),
            response: response.into(),
            status_code,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Up,
    Down,
}

/// In-memory command history with a recall cursor.
///
/// The cursor is `None` while the list is empty and points at the newest
/// entry after every append. Navigation never leaves the list bounds.
#[derive(Debug, Default)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    position: Option<usize>,
}

impl HistoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        log::debug!("History append: {} ({})", entry.command, entry.status_code);
        self.entries.push(entry);
        self.position = Some(self.entries.len() - 1);
    }

    /// Moves the cursor one step. Out-of-bounds moves change nothing.
    pub fn navigate(&mut self, direction: HistoryDirection) -> Option<&HistoryEntry> {
        let pos = self.position?;
        let next = match direction {
            HistoryDirection::Up if pos > 0 => pos - 1,
            HistoryDirection::Down if pos + 1 < self.entries.len() => pos + 1,
            _ => return None,
        };
        self.position = Some(next);
        self.entries.get(next)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.position = None;
        log::info!("History cleared");
    }

    pub fn cursor(&self) -> Option<usize> {
        self.position
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
