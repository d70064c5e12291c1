//! What a viewer is allowed to know about a board
//!
//! A [`Vision`] answers whether a vector is visible to its viewer and can
//! produce a redacted copy of a board holding only what the viewer knows.

mod fog;

pub use fog::Fog;

use crate::board::{Board, Vector};
use crate::core::types::PlayerId;

/// Per-viewer visibility over a board
pub trait Vision {
    fn current_viewer(&self) -> PlayerId;

    fn is_visible(&self, board: &Board, vector: Vector) -> bool;

    /// Copy of `board` stripped of everything the viewer cannot see
    fn apply(&self, board: &Board) -> Board;
}

/// Sees everything; used when fog of war is off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unrestricted {
    viewer: PlayerId,
}

impl Unrestricted {
    pub fn new(viewer: PlayerId) -> Self {
        Self { viewer }
    }
}

impl Vision for Unrestricted {
    fn current_viewer(&self) -> PlayerId {
        self.viewer
    }

    fn is_visible(&self, _board: &Board, _vector: Vector) -> bool {
        true
    }

    fn apply(&self, board: &Board) -> Board {
        board.clone()
    }
}

/// Vision matching the board's fog setting
pub fn vision_for(board: &Board, viewer: PlayerId) -> Box<dyn Vision> {
    if board.fog_enabled() {
        Box::new(Fog::new(viewer))
    } else {
        Box::new(Unrestricted::new(viewer))
    }
}

/// Boolean visibility per board vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityMap {
    width: i32,
    height: i32,
    cells: Vec<bool>,
}

impl VisibilityMap {
    /// Map for `board` with nothing visible
    pub fn hidden(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            cells: vec![false; (board.width() * board.height()) as usize],
        }
    }

    fn index(&self, vector: Vector) -> Option<usize> {
        if vector.x < 1 || vector.y < 1 || vector.x > self.width || vector.y > self.height {
            return None;
        }
        Some(((vector.y - 1) * self.width + (vector.x - 1)) as usize)
    }

    /// Mark a vector visible; out-of-bounds vectors are ignored
    pub fn reveal(&mut self, vector: Vector) {
        if let Some(index) = self.index(vector) {
            self.cells[index] = true;
        }
    }

    pub fn is_visible(&self, vector: Vector) -> bool {
        self.index(vector).is_some_and(|index| self.cells[index])
    }

    pub fn visible_count(&self) -> usize {
        self.cells.iter().filter(|cell| **cell).count()
    }
}
