//! Bounded least-cost reachability search
//!
//! Dijkstra over the 4-neighborhood, capped by a radius and by the strategy's
//! resource ceiling. Produces the cheapest cost and predecessor for every
//! reachable vector.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::AHashSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Unit, Vector};
use crate::reach::strategy::CostStrategy;

/// Cheapest known way to reach a vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    pub vector: Vector,
    pub cost: i32,
    /// `None` only for the search origin
    pub parent: Option<Vector>,
}

impl SearchItem {
    pub fn new(vector: Vector, cost: i32, parent: Option<Vector>) -> Self {
        Self {
            vector,
            cost,
            parent,
        }
    }

    /// Item for a vector reached without moving
    pub fn origin(vector: Vector) -> Self {
        Self::new(vector, 0, None)
    }
}

/// Search results in discovery order
pub type SearchFields = IndexMap<Vector, SearchItem, ahash::RandomState>;

/// Entry in the open set
#[derive(Debug, Clone, Copy)]
struct QueueEntry {
    cost: i32,
    sequence: u64,
    vector: Vector,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Every vector `unit` can reach from `origin` within `radius`
///
/// The origin itself is never part of the result. A neighbor with a negative
/// tile cost or that the strategy deems inaccessible is closed for good: it
/// is a wall, not merely too far. Items sitting exactly at the cap are
/// recorded but not expanded.
pub fn reachable(
    board: &Board,
    unit: &Unit,
    origin: Vector,
    radius: i32,
    strategy: &dyn CostStrategy,
) -> SearchFields {
    let radius = radius.min(strategy.resource_ceiling(unit));
    let mut fields = SearchFields::default();
    let mut closed: AHashSet<Vector> = AHashSet::new();
    let mut queue = BinaryHeap::new();
    let mut sequence = 0u64;

    queue.push(QueueEntry {
        cost: 0,
        sequence,
        vector: origin,
    });

    while let Some(current) = queue.pop() {
        let is_stale = fields
            .get(&current.vector)
            .is_some_and(|item| item.cost < current.cost);
        if is_stale || !closed.insert(current.vector) {
            continue;
        }

        let Some(current_tile) = board.get_tile(current.vector) else {
            continue;
        };

        for neighbor in current.vector.adjacent() {
            if !board.contains(neighbor) || closed.contains(&neighbor) {
                continue;
            }

            let step_cost = strategy.tile_cost(board, unit, neighbor);
            if step_cost < 0 || !strategy.is_accessible(board, unit, neighbor) {
                closed.insert(neighbor);
                continue;
            }

            let neighbor_tile = board.tile(neighbor);
            let candidate = current.cost
                + step_cost
                + strategy.transition_cost(unit.kind, current_tile, neighbor_tile);
            if candidate > radius {
                continue;
            }

            let improves = fields
                .get(&neighbor)
                .map_or(true, |previous| candidate < previous.cost);
            if !improves {
                continue;
            }

            fields.insert(
                neighbor,
                SearchItem::new(neighbor, candidate, Some(current.vector)),
            );
            if candidate < radius {
                sequence += 1;
                queue.push(QueueEntry {
                    cost: candidate,
                    sequence,
                    vector: neighbor,
                });
            }
        }
    }

    tracing::trace!(
        "reachable from {} within {}: {} fields",
        origin,
        radius,
        fields.len()
    );

    fields
}
