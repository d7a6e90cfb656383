//! Animation frames for one haplogroup's temporally ordered rows.
//!
//! The renderer draws the first row (the origin) before playback starts. Frame `k`
//! therefore reveals the row at zero-based position `k`, and its path is the prefix
//! ending there:
//!
//! ```text
//! rows:    r0  r1  r2  r3
//! static:  r0
//! frame 1:     r1          path r0..=r1
//! frame 2:         r2      path r0..=r2
//! frame 3:             r3  path r0..=r3
//! ```

use crate::error::{TrackerError, TrackerResult};
use crate::pipeline::derive::DerivedRow;
use crate::pipeline::mode::Mode;
use std::iter::FusedIterator;

/// Rows drawn before the first frame. Frame indices start at this value and map to the
/// row with the same zero-based position.
pub const PRE_RENDERED_POINTS: usize = 1;

#[derive(Debug, Clone)]
pub struct FrameBuilder<'a> {
    target: String,
    rows: Vec<DerivedRow<'a>>,
}

impl<'a> FrameBuilder<'a> {
    /// `rows` must already be isolated to `target` and sequenced.
    pub fn new(mode: Mode, target: &str, rows: Vec<DerivedRow<'a>>) -> TrackerResult<Self> {
        if rows.is_empty() {
            return Err(TrackerError::EmptySelection {
                mode: mode.name().to_string(),
                labels: vec![target.to_string()],
            });
        }
        debug_assert!(rows.iter().all(|r| r.haplogroup() == target));
        Ok(Self {
            target: target.to_string(),
            rows,
        })
    }

    /// Picks `target`'s rows out of a sequenced selection, keeping their order.
    pub fn isolate(mode: Mode, target: &str, sequenced: &[DerivedRow<'a>]) -> TrackerResult<Self> {
        let rows = sequenced
            .iter()
            .filter(|r| r.haplogroup() == target)
            .cloned()
            .collect();
        Self::new(mode, target, rows)
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn rows(&self) -> &[DerivedRow<'a>] {
        &self.rows
    }

    /// The statically drawn starting point.
    pub fn origin(&self) -> &DerivedRow<'a> {
        &self.rows[0]
    }

    pub fn frame_count(&self) -> usize {
        self.rows.len().saturating_sub(PRE_RENDERED_POINTS)
    }

    /// A fresh pass over the frames. Each call starts again from the first frame.
    pub fn frames(&self) -> Frames<'_, 'a> {
        Frames {
            rows: &self.rows,
            next_index: PRE_RENDERED_POINTS,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Frame<'r, 'a> {
    pub index: usize,
    pub current_point: &'r DerivedRow<'a>,
    pub path_so_far: &'r [DerivedRow<'a>],
}

#[derive(Debug, Clone)]
pub struct Frames<'r, 'a> {
    rows: &'r [DerivedRow<'a>],
    next_index: usize,
}

impl<'r, 'a> Iterator for Frames<'r, 'a> {
    type Item = Frame<'r, 'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next_index;
        let current_point = self.rows.get(index)?;
        self.next_index += 1;
        Some(Frame {
            index,
            current_point,
            path_so_far: &self.rows[..=index],
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows.len().saturating_sub(self.next_index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_, '_> {}

impl FusedIterator for Frames<'_, '_> {}
