//! The coordinate bridge: the single data surface between the detection
//! side and the rendering side.
//!
//! The bridge holds the latest raw eye-line endpoints and ear points, not
//! the derived pose, so different renderers can apply their own pose policy
//! to the same record. The payload is replaced wholesale once per processed
//! frame; there is no partial-update API, so a reader always observes a
//! consistent snapshot of the most recently completed frame, possibly stale
//! by one frame.

use crate::eye_line::EyeLine;
use crate::landmarks::Point2;
use serde::Serialize;
use std::cell::Cell;

/// One frame's shared geometric outputs. Every field is absent until the
/// first successful detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Coordinates {
    pub left_ear: Option<Point2>,
    pub right_ear: Option<Point2>,
    pub left_eye: Option<Point2>,
    pub right_eye: Option<Point2>,
}

impl Coordinates {
    /// True when all four fields are present
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.left_ear.is_some()
            && self.right_ear.is_some()
            && self.left_eye.is_some()
            && self.right_eye.is_some()
    }

    /// The eye-line carried by this record, if both endpoints are present
    #[must_use]
    pub fn eye_line(&self) -> Option<EyeLine> {
        match (self.left_eye, self.right_eye) {
            (Some(left_eye), Some(right_eye)) => Some(EyeLine { left_eye, right_eye }),
            _ => None,
        }
    }
}

/// Process-wide shared record of the latest computed coordinates.
///
/// Mutation is whole-record only (`write` replaces all four fields at once),
/// so partial updates are inexpressible. `Cell` keeps the bridge `!Sync`,
/// which enforces the single-threaded frame-processing contract at the type
/// level: producer and consumers share one bridge via `Rc` on one thread,
/// and no locking is involved.
#[derive(Debug, Default)]
pub struct CoordinateBridge {
    current: Cell<Coordinates>,
}

impl CoordinateBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the most recently written record
    #[must_use]
    pub fn read(&self) -> Coordinates {
        self.current.get()
    }

    /// Replace the whole record
    pub fn write(&self, coordinates: Coordinates) {
        self.current.set(coordinates);
    }
}
