use log::warn;

use super::classify::{LineClass, LineRole};

/// What the pending block holds so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// Nothing but blank lines.
    Empty,
    /// Only the `(NHOM)` / `(DIENKHUYET)` line that announces the next unit.
    Header,
    Body,
}

/// Groups classified lines into question blocks.
///
/// Phase 2 of segmentation. Tracks whether the current line is inside a
/// `[<sg>] .. [</sg>]` unit so separators within a unit stay in the block.
pub struct BlockBuilder {
    lines: Vec<String>,
    pending: Pending,
    inside_unit: bool,
    out: Vec<String>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            lines: vec![],
            pending: Pending::Empty,
            inside_unit: false,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        match c.role {
            LineRole::UnitStart => {
                // A bare header line belongs to the unit it announces.
                if self.pending == Pending::Body {
                    self.flush();
                }
                self.inside_unit = true;
                self.append(c);
            }
            LineRole::UnitEnd => {
                self.append(c);
                self.flush();
                self.inside_unit = false;
            }
            LineRole::EndOfUnit(_) => {
                if self.pending != Pending::Empty {
                    self.append(c);
                    self.flush();
                }
                self.inside_unit = false;
            }
            // A bare marker line inside a unit means the unit was never closed.
            LineRole::TypeMarker(kind)
                if !self.inside_unit || c.text.trim() == kind.literal() =>
            {
                if self.inside_unit {
                    warn!("Unterminated unit closed by {}", kind.literal());
                    self.inside_unit = false;
                }
                self.flush();
                self.lines.push(c.text.to_string());
                self.pending = if kind.is_unit() {
                    Pending::Header
                } else {
                    Pending::Body
                };
            }
            LineRole::Separator if !self.inside_unit => self.flush(),
            _ => self.append(c),
        }
    }

    pub fn finish(mut self) -> Vec<String> {
        self.flush();
        self.out
    }

    pub fn inside_unit(&self) -> bool {
        self.inside_unit
    }

    fn append(&mut self, c: &LineClass) {
        if c.is_blank {
            if self.pending != Pending::Empty {
                self.lines.push(c.text.to_string());
            }
            return;
        }
        self.lines.push(c.text.to_string());
        self.pending = Pending::Body;
    }

    fn flush(&mut self) {
        let block = self.lines.join("\n");
        let block = block.trim();
        if !block.is_empty() {
            self.out.push(block.to_string());
        }
        self.lines.clear();
        self.pending = Pending::Empty;
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
