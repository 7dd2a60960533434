use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::rc::Rc;

use log::debug;

use super::PuzzleState;

// Expansions between progress reports.
const LOG_INTERVAL: u64 = 4096;

/// A*-style best-first search from a puzzle state to its solved state.
///
/// Nodes are ordered by distance-from-start plus the state's own distance
/// estimate. Two caveats, kept deliberately: the estimate may
/// overestimate, and the only cycle avoidance is skipping the state the
/// current node just came from. Solutions are therefore real but not
/// guaranteed shortest-possible, and deep scrambles can expand a very
/// large number of nodes before finding one.
///
/// The search always terminates for states whose move graph actually
/// reaches a solved state (a real cube). Handing it a state that never
/// reaches one is a caller contract violation: `new` would never return.
/// Callers who want a budget instead of that contract can use
/// `with_expansion_limit`.
pub struct Solver<S> {
    solution: Vec<S>,
    num_moves: u32,
}

impl<S: PuzzleState> Solver<S> {
    /// Searches until a solution is found.
    pub fn new(initial: S) -> Solver<S> {
        match Solver::search(initial, u64::MAX) {
            Some(solver) => solver,
            None => unreachable!("the fringe of a solvable puzzle never empties"),
        }
    }

    /// Like `new`, but gives up with `None` after expanding
    /// `max_expansions` nodes without reaching a solution.
    pub fn with_expansion_limit(initial: S, max_expansions: u64) -> Option<Solver<S>> {
        Solver::search(initial, max_expansions)
    }

    fn search(initial: S, max_expansions: u64) -> Option<Solver<S>> {
        let mut fringe = BinaryHeap::new();
        fringe.push(FringeEntry(Rc::new(SearchNode {
            distance_to_solved: initial.distance_to_solved(),
            state: initial,
            distance_from_start: 0,
            predecessor: None,
        })));

        let mut expansions: u64 = 0;
        while let Some(FringeEntry(node)) = fringe.pop() {
            if node.state.is_solved() {
                return Some(Solver::reconstruct(&node));
            }
            if expansions == max_expansions {
                debug!("giving up after {} expansions", expansions);
                return None;
            }
            expansions += 1;
            if expansions % LOG_INTERVAL == 0 {
                debug!(
                    "expanded {} nodes, fringe holds {}, best priority {}",
                    expansions,
                    fringe.len(),
                    node.priority()
                );
            }

            for neighbor in node.state.neighbors() {
                // Skip the state this node just came from. Deeper cycles
                // are not detected; they only cost extra expansions.
                if let Some(predecessor) = &node.predecessor {
                    if predecessor.state == neighbor {
                        continue;
                    }
                }
                fringe.push(FringeEntry(Rc::new(SearchNode {
                    distance_from_start: node.distance_from_start + 1,
                    distance_to_solved: neighbor.distance_to_solved(),
                    state: neighbor,
                    predecessor: Some(Rc::clone(&node)),
                })));
            }
        }

        // Only reachable when a state's neighbor graph is finite and
        // contains no solved state at all.
        None
    }

    fn reconstruct(last: &Rc<SearchNode<S>>) -> Solver<S> {
        let mut solution = Vec::with_capacity(last.distance_from_start as usize + 1);
        let mut current = Some(Rc::clone(last));
        while let Some(node) = current {
            solution.push(node.state.clone());
            current = node.predecessor.clone();
        }
        solution.reverse();
        Solver {
            num_moves: last.distance_from_start,
            solution,
        }
    }

    /// The number of moves in the found solution.
    pub fn get_num_moves(&self) -> u32 {
        self.num_moves
    }

    /// The states along the solution, from the initial state to the
    /// solved state inclusive.
    pub fn get_solution(&self) -> &[S] {
        &self.solution
    }
}

struct SearchNode<S> {
    state: S,
    distance_from_start: u32,
    distance_to_solved: u32,
    predecessor: Option<Rc<SearchNode<S>>>,
}

impl<S> SearchNode<S> {
    fn priority(&self) -> u32 {
        self.distance_from_start + self.distance_to_solved
    }
}

// Orders the fringe as a min-heap on node priority. Entries with equal
// priority compare equal, so which of them pops first is up to the heap.
struct FringeEntry<S>(Rc<SearchNode<S>>);

impl<S> PartialEq for FringeEntry<S> {
    fn eq(&self, other: &FringeEntry<S>) -> bool {
        self.0.priority() == other.0.priority()
    }
}

impl<S> Eq for FringeEntry<S> {}

impl<S> PartialOrd for FringeEntry<S> {
    fn partial_cmp(&self, other: &FringeEntry<S>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for FringeEntry<S> {
    fn cmp(&self, other: &FringeEntry<S>) -> Ordering {
        other.0.priority().cmp(&self.0.priority())
    }
}
