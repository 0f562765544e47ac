use fxhash::FxBuildHasher;
/// A variant of
/// [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html)
/// which tracks, for every expanded node, the edge label (movement mode) of
/// the cheapest edge leading into it, so that the reconstructed path carries
/// the mode to use per step.
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per estimated cost, then creates subordering
        // based on cost, favoring exploration of smallest cost nodes first
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Walks the parent chain back from `start` and collects the labelled steps
/// in forward order. The search start itself carries no edge label and is
/// left out: a path begins at the first actual step.
fn reverse_path<N, C, M>(
    parents: &FxIndexMap<N, (usize, C, Option<M>)>,
    start: usize,
) -> Vec<(N, M)>
where
    N: Eq + Hash + Clone,
    C: Copy,
    M: Copy,
{
    let mut path: Vec<(N, M)> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, &(parent, _, label))| {
            *i = parent;
            (node.clone(), label)
        })
    })
    .filter_map(|(node, label)| label.map(|label| (node, label)))
    .collect();
    path.reverse();
    path
}

/// Best-first search over a graph with labelled edges. `successors` yields
/// `(neighbour, label, cost)` triples; on success the returned steps pair each
/// visited node with the label of the edge that reached it, along with the
/// total cost.
///
/// Bookkeeping is keyed by node only: finding a cheaper route to an already
/// seen node replaces the dearer entry, label included. All state lives in
/// this invocation, so concurrent searches never interfere.
pub(crate) fn astar_labelled<N, C, M, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<(N, M)>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    M: Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, M, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: Zero::zero(),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C, Option<M>)> = FxIndexMap::default();
    parents.insert(start.clone(), (usize::MAX, Zero::zero(), None));
    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let (node, &(_, c, _)) = parents.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&parents, index);
                return Some((path, cost));
            }
            // We may have inserted a node several time into the binary heap if we found
            // a better way to access it. Ensure that we are currently dealing with the
            // best path and discard the others.
            if cost > c {
                continue;
            }
            successors(node)
        };
        for (successor, label, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // index for successor
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost, Some(label)));
                }
                Occupied(mut e) => {
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost, Some(label)));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!("Search frontier exhausted without reaching a goal node");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Line graph 0 - 1 - 2 - 3 where each edge carries its target as label.
    fn line_successors(node: &i32) -> Vec<(i32, i32, i32)> {
        let mut succ = Vec::new();
        if *node > 0 {
            succ.push((*node - 1, *node - 1, 1));
        }
        if *node < 3 {
            succ.push((*node + 1, *node + 1, 1));
        }
        succ
    }

    #[test]
    fn finds_labelled_line_path() {
        let (steps, cost) =
            astar_labelled(&0, line_successors, |n| (3 - *n).abs(), |n| *n == 3).unwrap();
        assert_eq!(cost, 3);
        assert_eq!(steps, vec![(1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn start_satisfying_goal_yields_no_steps() {
        let (steps, cost) = astar_labelled(&3, line_successors, |_| 0, |n| *n == 3).unwrap();
        assert_eq!(cost, 0);
        assert!(steps.is_empty());
    }

    #[test]
    fn exhausted_frontier_is_none() {
        let result = astar_labelled(&0, line_successors, |_| 0, |n| *n == 10);
        assert!(result.is_none());
    }

    #[test]
    fn cheaper_route_replaces_dearer_label() {
        // Two routes to node 2: direct edge labelled 'a' with cost 5, or via
        // node 1 with edges labelled 'b' costing 1 each.
        let successors = |node: &i32| -> Vec<(i32, char, i32)> {
            match *node {
                0 => vec![(2, 'a', 5), (1, 'b', 1)],
                1 => vec![(2, 'b', 1)],
                _ => vec![],
            }
        };
        let (steps, cost) = astar_labelled(&0, successors, |_| 0, |n| *n == 2).unwrap();
        assert_eq!(cost, 2);
        assert_eq!(steps, vec![(1, 'b'), (2, 'b')]);
    }
}
