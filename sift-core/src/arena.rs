//! Contiguous storage for document text.
//!
//! The flattened text of every document is appended to one `String` and
//! addressed by a [`Span`]. Substring scans then walk a single buffer, and
//! ingesting a corpus grows one allocation instead of making one per
//! document.
//!
//! ```text
//! buffer: budget car rentalrental price canadatoronto
//!         └──── 0,17 ────┘└───── 17,19 ─────┘└ 36,7 ┘
//! ```
//!
//! Offsets are `u32`, so the whole corpus is limited to 4 GiB of text.

/// `(offset, len)` byte range into a buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    offset: u32,
    len: u32,
}

impl Span {
    /// Creates a new span.
    #[inline(always)]
    pub const fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    /// Returns the byte offset in the arena.
    #[inline(always)]
    pub const fn offset(self) -> usize {
        self.offset as usize
    }

    /// Returns the byte length.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Returns true if the span covers no bytes.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Append-only text buffer indexed by insertion order.
#[derive(Debug, Clone)]
pub struct Arena {
    /// Every stored text back to back
    buffer: String,
    /// One span per stored text
    spans: Vec<Span>,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

impl Arena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self::with_capacity(64 * 1024, 64)
    }

    /// Creates a new arena with pre-allocated capacity.
    pub fn with_capacity(buffer_cap: usize, doc_cap: usize) -> Self {
        Self {
            buffer: String::with_capacity(buffer_cap),
            spans: Vec::with_capacity(doc_cap),
        }
    }

    /// Returns the number of texts stored.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if no texts are stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total bytes stored across all texts.
    #[inline(always)]
    pub fn bytes(&self) -> usize {
        self.buffer.len()
    }

    /// Clears all texts (keeps capacity).
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.spans.clear();
    }

    /// Appends a text and returns its index.
    ///
    /// Returns `None` if the buffer would grow past `u32::MAX` bytes.
    #[inline]
    pub fn push(&mut self, text: &str) -> Option<u32> {
        let offset = self.buffer.len();
        let end = offset.checked_add(text.len())?;
        if end > u32::MAX as usize {
            return None;
        }

        let index = u32::try_from(self.spans.len()).ok()?;
        self.buffer.push_str(text);
        self.spans.push(Span::new(offset as u32, text.len() as u32));
        Some(index)
    }

    /// Gets a text by index.
    #[inline(always)]
    pub fn get(&self, index: u32) -> Option<&str> {
        let span = self.spans.get(index as usize)?;
        self.buffer.get(span.offset()..span.offset() + span.len())
    }

    /// Iterates over all stored texts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.spans
            .iter()
            .map(move |span| &self.buffer[span.offset()..span.offset() + span.len()])
    }
}
