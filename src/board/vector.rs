//! Square grid coordinates (1-based)
//!
//! Movement uses the 4-neighborhood, so the grid distance is Manhattan.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position on the board; (1, 1) is the top-left tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Grid distance (number of orthogonal steps)
    pub fn distance(&self, other: Vector) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Orthogonal neighbors in the order up, right, down, left
    pub fn adjacent(&self) -> [Vector; 4] {
        [
            Vector::new(self.x, self.y - 1),
            Vector::new(self.x + 1, self.y),
            Vector::new(self.x, self.y + 1),
            Vector::new(self.x - 1, self.y),
        ]
    }

    /// All 8 surrounding vectors, orthogonal first
    pub fn adjacent_with_diagonals(&self) -> [Vector; 8] {
        let [up, right, down, left] = self.adjacent();
        [
            up,
            right,
            down,
            left,
            Vector::new(self.x + 1, self.y - 1),
            Vector::new(self.x + 1, self.y + 1),
            Vector::new(self.x - 1, self.y + 1),
            Vector::new(self.x - 1, self.y - 1),
        ]
    }

    /// Self followed by the orthogonal neighbors
    pub fn expand(&self) -> [Vector; 5] {
        let [up, right, down, left] = self.adjacent();
        [*self, up, right, down, left]
    }

    /// Every vector at exactly `radius` steps
    pub fn ring(&self, radius: i32) -> Vec<Vector> {
        if radius <= 0 {
            return vec![*self];
        }

        let mut results = Vec::with_capacity((radius * 4) as usize);
        for dx in -radius..=radius {
            let dy = radius - dx.abs();
            results.push(Vector::new(self.x + dx, self.y + dy));
            if dy != 0 {
                results.push(Vector::new(self.x + dx, self.y - dy));
            }
        }
        results
    }

    /// Every vector within `radius` steps, self included
    pub fn within(&self, radius: i32) -> Vec<Vector> {
        (0..=radius.max(0)).flat_map(|r| self.ring(r)).collect()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Shorthand constructor
pub fn vec2(x: i32, y: i32) -> Vector {
    Vector::new(x, y)
}
