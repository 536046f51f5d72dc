use bit_set::BitSet;
use tracing::debug;

use crate::color::{ColoringInstance, VertexId};

/** implements a greedy algorithm that finds a "large" size clique.
The algorithm chooses the vertex with the largest degree. It marks as "candidates" its neighbors.
Then, while the set of candidates is not empty, choose the candidate with the largest degree.

Every vertex of a clique needs its own color, so the size of the result is a
lower bound of the number of slots of any valid schedule.
*/
pub fn greedy_clique(inst:&dyn ColoringInstance) -> Vec<VertexId> {
    let n = inst.nb_vertices();
    let mut forbidden:BitSet = BitSet::default();
    let mut res = Vec::new();
    loop {
        // max_by_key keeps the last maximum, iterate backwards to keep the smallest id
        match (0..n).rev().filter(|v| !forbidden.contains(*v)).max_by_key(|v| inst.degree(*v)) {
            None => break,
            Some(current_vertex) => {
                // insert the current vertex as part of the clique solution
                res.push(current_vertex);
                // mark the non neighbors as forbidden
                for v in 0..n {
                    if !inst.are_adjacent(current_vertex, v) {
                        forbidden.insert(v);
                    }
                }
            }
        };
    }
    debug!(size = res.len(), "greedy clique");
    res
}
