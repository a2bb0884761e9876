//! Boundary iteration over UTF-16 text
//!
//! [`BreakIterator`] is a stateful cursor over the boundaries of one
//! bound text. The rule type is fixed at construction: CHARACTER
//! boundaries fall at extended grapheme cluster edges (UAX #29), LINE
//! boundaries at positions where wrapping is permitted (UAX #14), with
//! mandatory breaks distinguished from optional ones.
//!
//! Binding text with [`BreakIterator::set_text`] snapshots the boundary
//! table; mutating the source buffer afterwards does not move boundaries
//! the cursor will report. All offsets are UTF-16 code-unit indices, and
//! no boundary ever falls between the halves of a surrogate pair.

use crate::constants::{cursor::DONE, status};
use crate::error::{BoundError, Result};
use crate::locale::Locale;
use crate::rules::{self, TailoringProfile};
use crate::text::Utf16Buffer;
use unicode_linebreak::{linebreaks, BreakOpportunity};
use unicode_segmentation::UnicodeSegmentation;

/// Which rule set an iterator applies, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakKind {
    /// Extended grapheme cluster boundaries
    Character,
    /// Line break opportunities
    Line,
}

/// Classification of the boundary a navigation call just produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleStatus {
    /// No special classification
    #[default]
    None,
    /// Optional line break: wrapping is permitted here
    Soft,
    /// Mandatory line break (hard newline)
    Hard,
}

impl RuleStatus {
    /// The integer tag of this status
    #[must_use]
    pub fn tag(self) -> i32 {
        match self {
            RuleStatus::None => status::NONE,
            RuleStatus::Soft => status::SOFT,
            RuleStatus::Hard => status::HARD,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Mark {
    offset: usize,
    status: RuleStatus,
}

/// Boundary table for one bound text, plus the cursor into it
#[derive(Debug)]
struct Snapshot {
    len: usize,
    marks: Vec<Mark>,
    pos: usize,
}

/// A boundary cursor bound to at most one text at a time
#[derive(Debug)]
pub struct BreakIterator {
    kind: BreakKind,
    profile: &'static TailoringProfile,
    snapshot: Option<Snapshot>,
    last_status: RuleStatus,
}

impl BreakIterator {
    /// Create an iterator over extended grapheme cluster boundaries
    ///
    /// Requires [`rules::load`] to have succeeded. A well-formed locale
    /// without tailored rules falls back to the root rules.
    pub fn character_instance(locale: &Locale) -> Result<Self> {
        Self::with_kind(BreakKind::Character, locale)
    }

    /// Create an iterator over line break opportunities
    pub fn line_instance(locale: &Locale) -> Result<Self> {
        Self::with_kind(BreakKind::Line, locale)
    }

    fn with_kind(kind: BreakKind, locale: &Locale) -> Result<Self> {
        let data = rules::get()?;
        Ok(BreakIterator {
            kind,
            profile: data.select(locale),
            snapshot: None,
            last_status: RuleStatus::None,
        })
    }

    /// The rule type this iterator was created with
    #[must_use]
    pub fn kind(&self) -> BreakKind {
        self.kind
    }

    /// The tailoring profile the iterator's locale resolved to
    #[must_use]
    pub fn profile(&self) -> &'static TailoringProfile {
        self.profile
    }

    /// Bind the iterator to a text, resetting the cursor to position 0
    ///
    /// Any previous binding and cursor position is discarded. The
    /// boundary table is computed here, once per binding.
    pub fn set_text(&mut self, text: &Utf16Buffer) -> Result<()> {
        let s = text.to_utf8()?;
        let marks = match self.kind {
            BreakKind::Character => character_marks(&s),
            BreakKind::Line => line_marks(&s),
        };
        self.snapshot = Some(Snapshot {
            len: text.len(),
            marks,
            pos: 0,
        });
        self.last_status = RuleStatus::None;
        Ok(())
    }

    fn bound_mut(&mut self) -> Result<&mut Snapshot> {
        self.snapshot.as_mut().ok_or(BoundError::NotBound)
    }

    fn check_offset(snap: &Snapshot, offset: usize) -> Result<()> {
        if offset > snap.len {
            return Err(BoundError::OutOfRange {
                index: offset,
                len: snap.len,
            });
        }
        Ok(())
    }

    /// Move to the first boundary (always position 0) and return it
    pub fn first(&mut self) -> Result<i32> {
        let snap = self.snapshot.as_mut().ok_or(BoundError::NotBound)?;
        snap.pos = 0;
        self.last_status = snap.marks[0].status;
        Ok(0)
    }

    /// Advance to the next boundary, or `DONE` at the end of text
    pub fn next(&mut self) -> Result<i32> {
        let snap = self.bound_mut()?;
        if snap.pos + 1 < snap.marks.len() {
            snap.pos += 1;
            let mark = snap.marks[snap.pos];
            self.last_status = mark.status;
            Ok(mark.offset as i32)
        } else {
            self.last_status = RuleStatus::None;
            Ok(DONE)
        }
    }

    /// Step back to the previous boundary, or `DONE` at position 0
    pub fn previous(&mut self) -> Result<i32> {
        let snap = self.bound_mut()?;
        if snap.pos > 0 {
            snap.pos -= 1;
            let mark = snap.marks[snap.pos];
            self.last_status = mark.status;
            Ok(mark.offset as i32)
        } else {
            self.last_status = RuleStatus::None;
            Ok(DONE)
        }
    }

    /// Move to the first boundary strictly after `offset` and return it
    ///
    /// Returns `DONE` when no boundary follows (the cursor then rests on
    /// the final boundary).
    pub fn following(&mut self, offset: usize) -> Result<i32> {
        let snap = self.bound_mut()?;
        Self::check_offset(snap, offset)?;
        let idx = snap.marks.partition_point(|m| m.offset <= offset);
        if idx < snap.marks.len() {
            snap.pos = idx;
            let mark = snap.marks[idx];
            self.last_status = mark.status;
            Ok(mark.offset as i32)
        } else {
            snap.pos = snap.marks.len() - 1;
            self.last_status = RuleStatus::None;
            Ok(DONE)
        }
    }

    /// Move to the last boundary strictly before `offset` and return it
    ///
    /// Returns `DONE` when no boundary precedes (the cursor then rests on
    /// position 0).
    pub fn preceding(&mut self, offset: usize) -> Result<i32> {
        let snap = self.bound_mut()?;
        Self::check_offset(snap, offset)?;
        let idx = snap.marks.partition_point(|m| m.offset < offset);
        if idx > 0 {
            snap.pos = idx - 1;
            let mark = snap.marks[idx - 1];
            self.last_status = mark.status;
            Ok(mark.offset as i32)
        } else {
            snap.pos = 0;
            self.last_status = RuleStatus::None;
            Ok(DONE)
        }
    }

    /// Check whether `offset` is a boundary under the active rule
    ///
    /// Repositions the cursor: onto `offset` when it is a boundary,
    /// otherwise onto the first boundary after it.
    pub fn is_boundary(&mut self, offset: usize) -> Result<bool> {
        let snap = self.bound_mut()?;
        Self::check_offset(snap, offset)?;
        match snap.marks.binary_search_by_key(&offset, |m| m.offset) {
            Ok(idx) => {
                snap.pos = idx;
                let mark = snap.marks[idx];
                self.last_status = mark.status;
                Ok(true)
            }
            Err(idx) => {
                if idx < snap.marks.len() {
                    snap.pos = idx;
                    let mark = snap.marks[idx];
                    self.last_status = mark.status;
                } else {
                    snap.pos = snap.marks.len() - 1;
                    self.last_status = RuleStatus::None;
                }
                Ok(false)
            }
        }
    }

    /// The boundary the cursor currently rests on
    pub fn current(&self) -> Result<i32> {
        let snap = self.snapshot.as_ref().ok_or(BoundError::NotBound)?;
        Ok(snap.marks[snap.pos].offset as i32)
    }

    /// Classification of the boundary the last navigation call produced
    ///
    /// Only meaningful immediately after `first`/`next`/`previous`/
    /// `following`/`preceding`/`is_boundary`.
    #[must_use]
    pub fn rule_status(&self) -> RuleStatus {
        self.last_status
    }
}

/// Byte-offset to code-unit-offset map: one entry per char start, plus a
/// terminal entry for the end of text.
fn unit_offsets(s: &str) -> Vec<(usize, usize)> {
    let mut map = Vec::new();
    let mut units = 0;
    for (byte, c) in s.char_indices() {
        map.push((byte, units));
        units += c.len_utf16();
    }
    map.push((s.len(), units));
    map
}

fn unit_at(map: &[(usize, usize)], byte: usize) -> usize {
    match map.binary_search_by_key(&byte, |&(b, _)| b) {
        Ok(idx) => map[idx].1,
        Err(idx) => map[idx.saturating_sub(1)].1,
    }
}

fn character_marks(s: &str) -> Vec<Mark> {
    let map = unit_offsets(s);
    let total = map[map.len() - 1].1;
    let mut marks: Vec<Mark> = s
        .grapheme_indices(true)
        .map(|(byte, _)| Mark {
            offset: unit_at(&map, byte),
            status: RuleStatus::None,
        })
        .collect();
    if marks.is_empty() {
        marks.push(Mark {
            offset: 0,
            status: RuleStatus::None,
        });
    }
    if marks[marks.len() - 1].offset != total {
        marks.push(Mark {
            offset: total,
            status: RuleStatus::None,
        });
    }
    marks
}

fn line_marks(s: &str) -> Vec<Mark> {
    let map = unit_offsets(s);
    let mut marks = vec![Mark {
        offset: 0,
        status: RuleStatus::None,
    }];
    for (byte, opportunity) in linebreaks(s) {
        let offset = unit_at(&map, byte);
        let status = match opportunity {
            BreakOpportunity::Mandatory => RuleStatus::Hard,
            BreakOpportunity::Allowed => RuleStatus::Soft,
        };
        if offset == 0 {
            marks[0].status = status;
        } else {
            marks.push(Mark { offset, status });
        }
    }
    marks
}
