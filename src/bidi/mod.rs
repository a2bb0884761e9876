//! Bidirectional run resolution
//!
//! [`BidiContext`] runs the Unicode Bidirectional Algorithm (UAX #9) over
//! one paragraph at a time. `set_para` resolves an embedding level for
//! every code unit and coalesces adjacent equal-level spans into logical
//! runs; `count_runs` and `logical_run` read that derived state until the
//! next `set_para` replaces it.
//!
//! Working storage is reserved once at [`BidiContext::open`] for the
//! declared maximum paragraph length and run count. A longer paragraph
//! is rejected up front; a run table overflow is reported by
//! `count_runs`, and the caller reopens with larger bounds.

use crate::error::{BoundError, Result};
use crate::text::Utf16Buffer;
use unicode_bidi::{BidiInfo, Level};

/// Base embedding direction for a paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphDirection {
    /// Base level 0
    LeftToRight,
    /// Base level 1
    RightToLeft,
    /// Detect from the first strong character (falls back to LTR)
    Auto,
}

/// A maximal span of uniform resolved embedding level, in logical order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogicalRun {
    /// First code unit of the run
    pub start: usize,
    /// Exclusive end of the run
    pub limit: usize,
    /// Resolved embedding level (even = LTR, odd = RTL)
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
struct ParaState {
    level: u8,
}

/// Fixed-capacity paragraph context for bidi resolution
#[derive(Debug)]
pub struct BidiContext {
    max_length: usize,
    max_run_count: usize,
    /// Resolved level per code unit of the current paragraph
    levels: Vec<u8>,
    /// Logical runs, truncated at `max_run_count`
    runs: Vec<LogicalRun>,
    run_total: usize,
    para: Option<ParaState>,
}

impl BidiContext {
    /// Open a context able to process paragraphs up to `max_length` code
    /// units producing up to `max_run_count` runs
    ///
    /// The working storage is reserved here and never grows; fails with
    /// `AllocationFailed` if the reservation cannot be made.
    pub fn open(max_length: usize, max_run_count: usize) -> Result<Self> {
        let mut levels = Vec::new();
        levels
            .try_reserve_exact(max_length)
            .map_err(|_| BoundError::AllocationFailed)?;
        let mut runs = Vec::new();
        runs.try_reserve_exact(max_run_count)
            .map_err(|_| BoundError::AllocationFailed)?;
        Ok(BidiContext {
            max_length,
            max_run_count,
            levels,
            runs,
            run_total: 0,
            para: None,
        })
    }

    /// Resolve the embedding levels of one paragraph
    ///
    /// Replaces any previously installed paragraph. Fails with
    /// `InvalidParagraph` when the text exceeds the context's maximum
    /// length; the prior results are discarded either way.
    pub fn set_para(&mut self, text: &Utf16Buffer, direction: ParagraphDirection) -> Result<()> {
        self.levels.clear();
        self.runs.clear();
        self.run_total = 0;
        self.para = None;

        if text.len() > self.max_length {
            return Err(BoundError::InvalidParagraph {
                len: text.len(),
                max: self.max_length,
            });
        }

        let s = text.to_utf8()?;
        let default_level = match direction {
            ParagraphDirection::LeftToRight => Some(Level::ltr()),
            ParagraphDirection::RightToLeft => Some(Level::rtl()),
            ParagraphDirection::Auto => None,
        };
        let fallback = match direction {
            ParagraphDirection::RightToLeft => 1,
            _ => 0,
        };

        if s.is_empty() {
            self.para = Some(ParaState { level: fallback });
            return Ok(());
        }

        let info = BidiInfo::new(&s, default_level);
        for (byte, c) in s.char_indices() {
            let level = info.levels[byte].number();
            for _ in 0..c.len_utf16() {
                self.levels.push(level);
            }
        }

        let mut start = 0;
        while start < self.levels.len() {
            let level = self.levels[start];
            let mut limit = start + 1;
            while limit < self.levels.len() && self.levels[limit] == level {
                limit += 1;
            }
            self.run_total += 1;
            if self.runs.len() < self.max_run_count {
                self.runs.push(LogicalRun {
                    start,
                    limit,
                    level,
                });
            }
            start = limit;
        }

        let level = info
            .paragraphs
            .first()
            .map(|p| p.level.number())
            .unwrap_or(fallback);
        self.para = Some(ParaState { level });
        Ok(())
    }

    /// Number of logical runs in the current paragraph
    ///
    /// Fails with `NotBound` before `set_para`, and with
    /// `CapacityExceeded` when the paragraph produced more runs than the
    /// context was opened for.
    pub fn count_runs(&self) -> Result<usize> {
        if self.para.is_none() {
            return Err(BoundError::NotBound);
        }
        if self.run_total > self.max_run_count {
            return Err(BoundError::CapacityExceeded {
                needed: self.run_total,
                capacity: self.max_run_count,
            });
        }
        Ok(self.run_total)
    }

    /// The run containing the code unit at `position`
    ///
    /// Answered from the run table when the run was stored; positions in
    /// runs past the `max_run_count` truncation point are resolved by
    /// scanning the level array.
    pub fn logical_run(&self, position: usize) -> Result<LogicalRun> {
        if self.para.is_none() {
            return Err(BoundError::NotBound);
        }
        if position >= self.levels.len() {
            return Err(BoundError::OutOfRange {
                index: position,
                len: self.levels.len(),
            });
        }
        let found = self.runs.binary_search_by(|run| {
            if run.limit <= position {
                std::cmp::Ordering::Less
            } else if run.start > position {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });
        if let Ok(idx) = found {
            return Ok(self.runs[idx]);
        }
        let level = self.levels[position];
        let mut start = position;
        while start > 0 && self.levels[start - 1] == level {
            start -= 1;
        }
        let mut limit = position + 1;
        while limit < self.levels.len() && self.levels[limit] == level {
            limit += 1;
        }
        Ok(LogicalRun {
            start,
            limit,
            level,
        })
    }

    /// Resolved base level of the current paragraph
    pub fn paragraph_level(&self) -> Result<u8> {
        self.para
            .map(|p| p.level)
            .ok_or(BoundError::NotBound)
    }

    /// Length of the current paragraph in code units (0 when unbound)
    #[must_use]
    pub fn length(&self) -> usize {
        self.levels.len()
    }
}
