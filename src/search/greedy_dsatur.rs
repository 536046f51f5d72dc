use std::cmp::{Ordering, Reverse, Ord};

use priority_queue::PriorityQueue;
use bit_set::BitSet;
use fastrand::Rng;
use tracing::debug;

use crate::color::{ColoringInstance, VertexId, name_ranks};

#[derive(PartialEq, Eq)]
struct DSatInfo {
    dsat: usize,
    degree: usize,
    /// smaller names first
    rank: Reverse<usize>,
}

impl Ord for DSatInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dsat.cmp(&other.dsat)
            .then_with(|| self.degree.cmp(&other.degree))
            .then_with(|| self.rank.cmp(&other.rank))
    }
}

// `PartialOrd` needs to be implemented as well.
impl PartialOrd for DSatInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR algorithm.
    1. choose an uncolored vertex that sees the most colors (break ties by the largest degree,
       then by name)
    2. give it the first color available
    3. mark all its neighbors seeing this color
    4. repeat until every vertex is colored
A vertex is only colored with a color none of its colored neighbors has, so the
result is always valid.

parameters:
 - inst: reference to an instance
 - rng: if given, the very first vertex is drawn uniformly instead

returns colors[v] for every vertex v.
*/
pub fn greedy_dsatur(inst:&dyn ColoringInstance, rng:Option<&mut Rng>) -> Vec<usize> {
    let n:usize = inst.nb_vertices();
    let ranks = name_ranks(inst);
    let mut remaining_vertices:PriorityQueue<VertexId, DSatInfo> = PriorityQueue::new();
    for i in 0..n {
        remaining_vertices.push(i, DSatInfo { dsat:0, degree:inst.degree(i), rank:Reverse(ranks[i]) });
    }
    let mut first_vertex:Option<VertexId> = match rng {
        Some(rng) if n > 0 => Some(rng.usize(0..n)),
        _ => None,
    };
    if let Some(v) = first_vertex {
        remaining_vertices.remove(&v);
    }
    let mut colors:Vec<Option<usize>> = vec![None ; n]; // colors[v] -> color assigned to vertex v
    let mut adj_colors:Vec<BitSet> = vec![BitSet::default() ; n]; // adj_colors[n] -> colors n sees
    let mut nb_colored:usize = 0;
    loop {
        // get current vertex
        let current_vertex = match first_vertex.take() {
            Some(v) => v,
            None => match remaining_vertices.pop() {
                None => break,
                Some(v) => v.0
            }
        };
        // assign it a color
        let mut color:usize = 0;
        while adj_colors[current_vertex].contains(color) { color += 1; }
        colors[current_vertex] = Some(color);
        nb_colored += 1;
        // update saturation degree information
        for conflict_vertex in inst.neighbors(current_vertex).iter()
        .filter(|conflict_vertex| colors[**conflict_vertex].is_none()) {
            if !adj_colors[*conflict_vertex].contains(color) {
                adj_colors[*conflict_vertex].insert(color);
                remaining_vertices.change_priority_by(conflict_vertex, |p| {p.dsat += 1;} );
            }
        }
    }
    debug!(nb_colored, "DSATUR finished");
    colors.into_iter().flatten().collect()
}
