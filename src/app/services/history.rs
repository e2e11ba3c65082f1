/// Default number of edits kept before the oldest are dropped.
pub const DEFAULT_CAPACITY: usize = 1000;

/// A single reversible buffer change. Positions are byte offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Insert { pos: usize, text: String },
    Delete { pos: usize, text: String },
}

/// Bounded undo stack: push on edit, pop on undo.
#[derive(Debug, Clone)]
pub struct EditHistory {
    entries: Vec<Edit>,
    capacity: usize,
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl EditHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, edit: Edit) {
        self.entries.push(edit);
        if self.entries.len() > self.capacity {
            let excess = self.entries.len() - self.capacity;
            self.entries.drain(0..excess);
        }
    }

    pub fn pop(&mut self) -> Option<Edit> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
