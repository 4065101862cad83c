//! Chunked text interleaving.
use itertools::Itertools;

/// Characters per interleaving chunk.
pub const CHUNK_SIZE: usize = 1000;

/// Iterator over successive `size`-character slices of a string.
///
/// Slicing happens on char boundaries so multilingual UTF-8 input never gets
/// split mid-scalar.
struct CharChunks<'a> {
    rest: &'a str,
    size: usize,
}

impl<'a> CharChunks<'a> {
    fn new(text: &'a str, size: usize) -> Self {
        Self { rest: text, size }
    }
}

impl<'a> Iterator for CharChunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let split = self
            .rest
            .char_indices()
            .nth(self.size)
            .map_or(self.rest.len(), |(i, _)| i);
        let (head, tail) = self.rest.split_at(split);
        self.rest = tail;
        Some(head)
    }
}

/// Merge two texts by alternating `chunk_size`-character chunks.
///
/// Chunks alternate a, b, a, b; once one side runs out the rest of the other
/// passes through untouched. The output therefore contains every character of
/// both inputs, each source keeping its internal order.
pub fn interleave(a: &str, b: &str, chunk_size: usize) -> String {
    assert!(chunk_size > 0, "chunk_size must be nonzero");
    if a.is_empty() {
        return b.to_string();
    }
    if b.is_empty() {
        return a.to_string();
    }

    let mut out = String::with_capacity(a.len() + b.len());
    for chunk in CharChunks::new(a, chunk_size).interleave(CharChunks::new(b, chunk_size)) {
        out.push_str(chunk);
    }
    out
}
