//! The A* search algorithm.

use log::trace;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::collections::HashMap;

use crate::grid::{ Coord, Layout };

use super::{ Context, Path, Tree };

/// A node in the "open" list of the A* algorithm to prioritise the
/// search.
struct Open {
    coords: Coord,
    priority: f32,
}

impl PartialEq for Open {
    fn eq(&self, other: &Open) -> bool {
        self.priority.total_cmp(&other.priority) == Ordering::Equal
    }
}

impl Eq for Open {}

impl PartialOrd for Open {
    fn partial_cmp(&self, other: &Open) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Open {
    fn cmp(&self, other: &Open) -> Ordering {
        // Lower priorities (= estimated total costs)
        // are considered "greater" for the binary heap.
        other.priority.total_cmp(&self.priority)
    }
}

/// Beginning at the given start coordinates, perform a cost-aware
/// search across the grid, returning the resulting search tree from
/// which paths may be extracted.
///
/// The search stops when any of the following conditions is met:
///
///   * Goal coordinates are given and found.
///   * The coordinates the context gives a cost for have been
///     exhaustively searched.
pub fn tree(
    layout: &Layout,
    start: Coord,
    goal: Option<Coord>,
    ctx: &mut impl Context,
) -> Tree {
    let mut parents = HashMap::new();
    let mut costs = HashMap::new();
    let mut open = BinaryHeap::new();
    open.push(Open { coords: start, priority: 0.0 });
    costs.insert(start, 0.0);
    while let Some(parent) = open.pop() {
        let pc = parent.coords;
        if goal.map_or(false, |g| g == pc) {
            break
        }
        trace!("expanding {} at priority {}", pc, parent.priority);
        for child in layout.neighbours(pc) {
            let new_cost = if let Some(cost) = ctx.cost(pc, child) {
                *costs.get(&pc).unwrap_or(&0.0) + cost
            } else {
                continue
            };
            let improved = match costs.get(&child) {
                Some(&old_cost) => new_cost < old_cost,
                None => true,
            };
            if improved {
                parents.insert(child, pc);
                costs.insert(child, new_cost);
                let estimate = goal.map_or(0, |g| ctx.heuristic(child, g));
                let priority = new_cost + estimate as f32;
                open.push(Open { coords: child, priority });
            }
        }
    }
    Tree { root: start, parents, costs }
}

/// Beginning at the given start coordinates, perform a cost-aware
/// search for a path to the given goal coordinates across the grid.
///
/// This is equivalent to:
/// ```raw
/// tree(layout, start, Some(goal), ctx).path(goal)
/// ```
pub fn path(
    layout: &Layout,
    start: Coord,
    goal: Coord,
    ctx: &mut impl Context,
) -> Option<Path> {
    tree(layout, start, Some(goal), ctx).path(goal)
}
