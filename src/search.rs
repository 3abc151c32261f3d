//! Cost-aware searches on hexagonal grids.

pub mod astar;

use std::collections::HashMap;
use std::collections::VecDeque;

use crate::grid::Coord;

/// The context of a search defines the cost model of the search space.
pub trait Context {
    /// The cost of moving from a tile to an adjacent tile, or `None`
    /// if the target tile cannot be entered. The search space must be
    /// bounded through this function when no goal is given.
    fn cost(&mut self, from: Coord, to: Coord) -> Option<f32>;

    /// A lower bound on the remaining cost of any path between two
    /// coordinates, typically the grid distance. The default admits
    /// no estimate.
    fn heuristic(&mut self, _from: Coord, _to: Coord) -> u32 {
        0
    }
}

/// A path of a search tree, from the root to a goal.
pub type Path = VecDeque<Node>;

/// A tree constructed as the result of a search on a grid.
/// The root node of the tree is the start coordinates of the search
/// and the paths to the leaves are paths on the grid from the start
/// coordinates to other grid coordinates.
pub struct Tree {
    root: Coord,
    parents: HashMap<Coord, Coord>,
    costs: HashMap<Coord, f32>,
}

/// A node in a path of a search tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub coords: Coord,
    pub cost: f32,
}

impl Node {
    fn new(coords: Coord, cost: f32) -> Node {
        Node { coords, cost }
    }
}

impl Tree {
    pub fn root(&self) -> Coord {
        self.root
    }

    /// The cost of reaching the given coordinates from the root,
    /// `None` if they were not reached.
    pub fn cost(&self, c: Coord) -> Option<f32> {
        self.costs.get(&c).copied()
    }

    /// Trace a path from the given goal back to the root of the tree.
    /// The path is returned in the natural (i.e. reverse) order from
    /// start to goal, or not at all if the goal was never reached.
    pub fn path(&self, goal: Coord) -> Option<Path> {
        let mut path = VecDeque::new();
        let gnode = Node::new(goal, *self.costs.get(&goal).unwrap_or(&0.0));
        path.push_front(gnode);
        let mut current = &goal;
        while current != &self.root {
            if let Some(parent) = self.parents.get(current) {
                let cost = self.costs.get(parent).unwrap_or(&0.0);
                path.push_front(Node::new(*parent, *cost));
                current = parent;
            } else {
                return None
            }
        }
        Some(path)
    }
}
