//! Byte-offset to line/character conversion.

use tower_lsp::lsp_types::Position;

/// Line table for one document snapshot.
///
/// Character columns are counted in UTF-16 code units, matching what
/// the backend's protocol expects for positions.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset at which each line starts.
    line_starts: Vec<usize>,
    source: String,
}

impl LineIndex {
    pub fn new(source: String) -> Self {
        let mut line_starts = vec![0];
        for (i, c) in source.char_indices() {
            if c == '\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
            source,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Converts a byte offset into a position.
    ///
    /// Offsets past the end of the document clamp to the last position,
    /// and offsets inside a multi-byte character snap to its start.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next_line) => next_line - 1,
        };
        let line_start = self.line_starts[line];

        let mut character = 0u32;
        for (i, c) in self.source[line_start..].char_indices() {
            if line_start + i >= offset {
                break;
            }
            character += c.len_utf16() as u32;
        }

        Position::new(line as u32, character)
    }
}
