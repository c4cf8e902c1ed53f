use std::cell::Cell;
use std::fmt;

use crate::errors::OutOfBounds;
use crate::traits::Strand;
use crate::StrandKind;

/// Handle to a fragment stored in a [`FragmentArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FragmentId(u32);

/// One immutable text segment owned by a chain. Once attached, a fragment's
/// text is never mutated; reversal builds fresh fragments instead.
#[derive(Debug, Clone)]
struct Fragment {
    text: Box<str>,
    next: Option<FragmentId>,
}

/// Handle-indexed fragment storage.
///
/// Fragments live in one contiguous buffer and refer to each other through
/// indices rather than pointers, so a chain owns its fragments strictly
/// forward and drops them all together.
#[derive(Debug, Clone, Default)]
struct FragmentArena {
    fragments: Vec<Fragment>,
}

impl FragmentArena {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            fragments: Vec::with_capacity(capacity),
        }
    }

    fn alloc(&mut self, text: Box<str>, next: Option<FragmentId>) -> FragmentId {
        let id = FragmentId(self.fragments.len() as u32);
        self.fragments.push(Fragment { text, next });
        id
    }

    /// Access the fragment behind `id`.
    ///
    /// # Panics
    /// Panics if `id` was not allocated by this arena.
    #[inline]
    fn get(&self, id: FragmentId) -> &Fragment {
        &self.fragments[id.0 as usize]
    }

    fn set_next(&mut self, id: FragmentId, next: Option<FragmentId>) {
        self.fragments[id.0 as usize].next = next;
    }

    fn len(&self) -> usize {
        self.fragments.len()
    }
}

/// Cached scan position: the last index served by `char_at`, with the
/// fragment and in-fragment offset that hold the character at that index.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    index: usize,
    fragment: FragmentId,
    offset: usize,
}

impl Cursor {
    fn start(first: FragmentId) -> Self {
        Self {
            index: 0,
            fragment: first,
            offset: 0,
        }
    }
}

/// Strand backed by a linked chain of immutable fragments.
///
/// Appending creates one new terminal fragment and relinks the tail, so no
/// prior data is ever copied. Reversal rebuilds the chain with fragment
/// order and per-fragment text both reversed, without touching the source.
/// Indexed access keeps a scan cursor so that calls with non-decreasing
/// indices cost amortized O(1) each; a call at or before the previous index
/// rescans from the head.
///
/// The cursor is a cache, not part of the logical value: it lives in a
/// [`Cell`] and every result is identical with or without it.
#[derive(Debug, Clone)]
pub struct ChainStrand {
    arena: FragmentArena,
    first: FragmentId,
    last: FragmentId,
    size: usize,
    appends: usize,
    cursor: Cell<Cursor>,
}

impl ChainStrand {
    /// Create a chain holding `source` as its single initial fragment.
    /// No validation is performed.
    pub fn new(source: &str) -> Self {
        let mut arena = FragmentArena::default();
        let first = arena.alloc(source.into(), None);
        Self {
            arena,
            first,
            last: first,
            size: source.len(),
            appends: 0,
            cursor: Cell::new(Cursor::start(first)),
        }
    }

    /// Number of fragments in the chain: one for the initial text plus one
    /// per append since the last initialize.
    pub fn fragment_count(&self) -> usize {
        self.arena.len()
    }

    /// Move `cursor` forward past exhausted fragments so its offset lands
    /// inside a fragment whenever a character remains. Appends of "" leave
    /// zero-length fragments in the chain; the scan has to hop over them.
    fn settle(&self, cursor: &mut Cursor) {
        loop {
            let fragment = self.arena.get(cursor.fragment);
            if cursor.offset < fragment.text.len() {
                return;
            }
            match fragment.next {
                Some(next) => {
                    cursor.fragment = next;
                    cursor.offset = 0;
                }
                None => return,
            }
        }
    }
}

impl Default for ChainStrand {
    fn default() -> Self {
        Self::new("")
    }
}

impl Strand for ChainStrand {
    fn size(&self) -> usize {
        self.size
    }

    fn initialize(&mut self, source: &str) {
        let mut arena = FragmentArena::default();
        let first = arena.alloc(source.into(), None);
        self.arena = arena;
        self.first = first;
        self.last = first;
        self.size = source.len();
        self.appends = 0;
        self.cursor.set(Cursor::start(first));
    }

    fn char_at(&self, index: usize) -> Result<char, OutOfBounds> {
        if index >= self.size {
            return Err(OutOfBounds {
                index,
                len: self.size,
            });
        }
        let mut cursor = self.cursor.get();
        // Monotonically increasing requests keep riding the cached cursor;
        // anything at or before the last request restarts from the head.
        if index <= cursor.index {
            cursor = Cursor::start(self.first);
        }
        self.settle(&mut cursor);
        while cursor.index != index {
            cursor.index += 1;
            cursor.offset += 1;
            self.settle(&mut cursor);
        }
        let symbol = self.arena.get(cursor.fragment).text.as_bytes()[cursor.offset];
        self.cursor.set(cursor);
        Ok(symbol as char)
    }

    fn append(&mut self, text: &str) -> &mut Self {
        let id = self.arena.alloc(text.into(), None);
        self.arena.set_next(self.last, Some(id));
        self.last = id;
        self.size += text.len();
        self.appends += 1;
        self
    }

    fn instance(&self, source: &str) -> Self {
        Self::new(source)
    }

    fn reverse(&self) -> Self {
        let mut arena = FragmentArena::with_capacity(self.arena.len());
        let mut head: Option<FragmentId> = None;
        let mut tail: Option<FragmentId> = None;
        let mut walker = Some(self.first);
        // Each source fragment is re-created with reversed text and linked
        // in front of the chain built so far, reversing both the fragment
        // order and the text within each fragment.
        while let Some(id) = walker {
            let fragment = self.arena.get(id);
            let reversed: String = fragment.text.chars().rev().collect();
            let new_id = arena.alloc(reversed.into(), head);
            if tail.is_none() {
                tail = Some(new_id);
            }
            head = Some(new_id);
            walker = fragment.next;
        }
        let first = head.expect("chain always holds at least one fragment");
        let last = tail.expect("chain always holds at least one fragment");
        Self {
            arena,
            first,
            last,
            size: self.size,
            appends: self.appends,
            cursor: Cell::new(Cursor::start(first)),
        }
    }

    fn append_count(&self) -> usize {
        self.appends
    }

    fn kind(&self) -> StrandKind {
        StrandKind::Chain
    }

    fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.size);
        let mut walker = Some(self.first);
        while let Some(id) = walker {
            let fragment = self.arena.get(id);
            out.push_str(&fragment.text);
            walker = fragment.next;
        }
        out
    }
}

impl fmt::Display for ChainStrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
