use crate::coordinate::Coordinate;
use crate::movement::MovementMode;
use core::fmt;

/// One step of a resolved route: the tile reached and the movement mode used
/// to reach it. The mode is always one of the modes the caller allowed for
/// the search that produced the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PathNode {
    pub location: Coordinate,
    pub movement_method: MovementMode,
}

impl PathNode {
    pub fn new(location: Coordinate, movement_method: MovementMode) -> PathNode {
        PathNode {
            location,
            movement_method,
        }
    }
}

/// An ordered sequence of steps from the tile adjacent to the search start
/// through the tile the search ended on, together with the accumulated step
/// cost. A [Path] always holds at least one node; an unreachable goal is
/// reported as the absence of a path, never as an empty one.
///
/// Paths hold no references back into the search and can be shared read-only
/// across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<PathNode>,
    cost: i32,
}

impl Path {
    /// Builds a path from its steps. Panics if `nodes` is empty, which would
    /// violate the non-empty invariant.
    pub fn new(nodes: Vec<PathNode>, cost: i32) -> Path {
        assert!(!nodes.is_empty(), "a path holds at least one node");
        Path { nodes, cost }
    }

    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathNode> {
        self.nodes.iter()
    }

    /// Number of steps in the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always [false]; kept so the type plays nice with len-style APIs.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The first step, adjacent to the search start.
    pub fn first(&self) -> PathNode {
        self.nodes[0]
    }

    /// The tile the path ends on, within the approach distance of the goal.
    pub fn destination(&self) -> Coordinate {
        self.nodes[self.nodes.len() - 1].location
    }

    /// Total cost of all steps as priced by the cost provider.
    pub fn cost(&self) -> i32 {
        self.cost
    }
}

impl IntoIterator for Path {
    type Item = PathNode;
    type IntoIter = std::vec::IntoIter<PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathNode;
    type IntoIter = std::slice::Iter<'a, PathNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{} {}", node.movement_method, node.location)?;
        }
        write!(f, "] (cost {})", self.cost)
    }
}
