use bit_set::BitSet;
use fastrand::Rng;
use tracing::{debug, error};

use crate::color::{ColoringInstance, VertexId, name_ranks};
use crate::error::{Error, Result};


/** smallest color not used by a colored neighbor of u (first-fit) */
pub fn first_fit(inst:&dyn ColoringInstance, colors:&[Option<usize>], u:VertexId) -> usize {
    let mut used:BitSet = BitSet::default();
    for v in inst.neighbors(u) {
        if let Some(c) = colors[v] { used.insert(c); }
    }
    let mut color:usize = 0;
    while used.contains(color) { color += 1; }
    color
}

/// number of edges whose endpoints are colored with the same color
pub fn nb_conflicts(edges:&[(VertexId,VertexId)], colors:&[Option<usize>]) -> usize {
    edges.iter()
        .filter(|(u,v)| colors[*u].is_some() && colors[*u] == colors[*v])
        .count()
}

/** scans the edges until no conflicting edge remains. When both endpoints
of an edge share a color, the second endpoint gets the first-fit color among
its colored neighbors.

Propagation already gives every vertex its first-fit color against all its
colored neighbors, so on a consistent instance this finds no conflict and
recolors nothing: it only guards the invariant. A recolored vertex no longer
conflicts with any colored neighbor and never creates a new conflict, so a
fixed point is reached after at most two scans. The number of scans is capped
to `edges.len()+1`; reaching the cap (an instance whose edges and neighbors
disagree) returns `Error::RepairStalled`.

returns the number of recolored vertices.
*/
pub fn repair(
    inst:&dyn ColoringInstance,
    colors:&mut [Option<usize>]
) -> Result<usize> {
    let edges = inst.edges();
    let max_passes = edges.len() + 1;
    let mut nb_recolored:usize = 0;
    for _ in 0..max_passes {
        let mut conflict_found = false;
        for (u,v) in edges {
            if colors[*u].is_some() && colors[*u] == colors[*v] {
                conflict_found = true;
                colors[*v] = Some(first_fit(inst, colors, *v));
                nb_recolored += 1;
            }
        }
        if !conflict_found {
            return Ok(nb_recolored);
        }
    }
    let conflicts = nb_conflicts(edges, colors);
    error!(passes = max_passes, conflicts, "conflict repair did not converge");
    Err(Error::RepairStalled { passes: max_passes, conflicts })
}

/** degree-first greedy with local propagation and repair.
    1. sort the vertices by decreasing degree (ties: name order)
    2. take the first uncolored vertex v and give it its first-fit color.
       If a random source is given, the very first vertex is drawn uniformly instead.
    3. every uncolored neighbor of v immediately gets its first-fit color
       (different from v's color since v is now a colored neighbor)
    4. repair conflicting edges until a fixed point is reached
    5. repeat until every vertex is colored

returns colors[v] for every vertex v.
*/
pub fn degree_propagation(
    inst:&dyn ColoringInstance,
    rng:Option<&mut Rng>
) -> Result<Vec<usize>> {
    let n:usize = inst.nb_vertices();
    let ranks = name_ranks(inst);
    let mut pending:Vec<VertexId> = (0..n).collect();
    pending.sort_by(|a,b| {
        inst.degree(*b).cmp(&inst.degree(*a)).then_with(|| ranks[*a].cmp(&ranks[*b]))
    });
    if let Some(rng) = rng {
        if n > 0 {
            let first = pending.remove(rng.usize(0..n));
            pending.insert(0, first);
        }
    }
    let mut colors:Vec<Option<usize>> = vec![None ; n];
    let mut nb_iter:usize = 0;
    while let Some(&current_vertex) = pending.first() {
        let color = first_fit(inst, &colors, current_vertex);
        colors[current_vertex] = Some(color);
        // propagate to the uncolored neighbors
        for neighbor in inst.neighbors(current_vertex) {
            if colors[neighbor].is_none() {
                colors[neighbor] = Some(first_fit(inst, &colors, neighbor));
            }
        }
        let nb_recolored = repair(inst, &mut colors)?;
        pending.retain(|v| colors[*v].is_none());
        nb_iter += 1;
        debug!(
            iter = nb_iter,
            vertex = inst.vertex_name(current_vertex),
            color,
            nb_recolored,
            remaining = pending.len(),
            "degree propagation step"
        );
    }
    Ok(colors.into_iter().flatten().collect())
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};
    use crate::graph::{ConflictGraph, random_graph};

    fn five_courses() -> ConflictGraph {
        let mut g = ConflictGraph::default();
        for (a,b) in [("A","B"), ("A","C"), ("A","D"), ("B","E"), ("C","E"), ("D","E")].iter() {
            g.add_edge(a, b);
        }
        g
    }

    fn to_options(colors:&[usize]) -> Vec<Option<usize>> {
        colors.iter().map(|c| Some(*c)).collect()
    }

    #[test]
    fn test_first_fit() {
        let g = five_courses();
        let a = g.id("A").unwrap();
        let mut colors = vec![None ; g.nb_vertices()];
        assert_eq!(first_fit(&g, &colors, a), 0);
        colors[g.id("B").unwrap()] = Some(0);
        colors[g.id("C").unwrap()] = Some(2);
        assert_eq!(first_fit(&g, &colors, a), 1);
        colors[g.id("D").unwrap()] = Some(1);
        assert_eq!(first_fit(&g, &colors, a), 3);
    }

    #[test]
    fn test_repair_fixes_conflicts() {
        let g = five_courses();
        let mut colors = vec![Some(0) ; g.nb_vertices()];
        assert!(nb_conflicts(g.edges(), &colors) > 0);
        let nb_recolored = repair(&g, &mut colors).unwrap();
        assert!(nb_recolored > 0);
        assert_eq!(nb_conflicts(g.edges(), &colors), 0);
        assert!(checker(&g, &colors).is_ok());
    }

    /// edge list and neighbor lists disagree: (0,1) is an edge nobody sees
    #[derive(Debug)]
    struct HiddenEdge {
        edges: Vec<(VertexId,VertexId)>,
    }

    impl ColoringInstance for HiddenEdge {
        fn nb_vertices(&self) -> usize { 2 }
        fn nb_edges(&self) -> usize { self.edges.len() }
        fn neighbors(&self, _u:VertexId) -> Vec<VertexId> { Vec::new() }
        fn degree(&self, _u:VertexId) -> usize { 0 }
        fn are_adjacent(&self, _u:VertexId, _v:VertexId) -> bool { false }
        fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }
        fn vertex_name(&self, u:VertexId) -> &str { if u == 0 { "A" } else { "B" } }
        fn display_statistics(&self) {}
    }

    #[test]
    fn test_repair_stalls() {
        let inst = HiddenEdge { edges: vec![(0,1)] };
        let mut colors = vec![Some(0), Some(0)];
        match repair(&inst, &mut colors) {
            Err(Error::RepairStalled { passes, conflicts }) => {
                assert_eq!(passes, inst.edges().len() + 1);
                assert_eq!(conflicts, 1);
            }
            other => panic!("expected a stalled repair, got {:?}", other),
        }
        // the stall is reported by the whole procedure as well
        assert!(matches!(degree_propagation(&inst, None), Err(Error::RepairStalled { .. })));
    }

    #[test]
    fn test_random_graphs_valid() {
        let rng = Rng::with_seed(2022);
        for _ in 0..300 {
            let n = rng.usize(0..40);
            let g = random_graph(&rng, n, rng.u32(0..=100));
            let colors = degree_propagation(&g, None).unwrap();
            assert!(checker(&g, &to_options(&colors)).is_ok(), "invalid coloring of {}", g);
            let colors = degree_propagation(&g, Some(&mut Rng::with_seed(rng.u64(..)))).unwrap();
            assert!(checker(&g, &to_options(&colors)).is_ok(), "invalid coloring of {}", g);
            // propagation never leaves a conflict behind
            let mut options = to_options(&colors);
            assert_eq!(repair(&g, &mut options).unwrap(), 0);
        }
    }

    #[test]
    fn test_repair_ignores_uncolored() {
        let g = five_courses();
        let mut colors = vec![None ; g.nb_vertices()];
        assert_eq!(repair(&g, &mut colors).unwrap(), 0);
        assert!(colors.iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_five_courses() {
        let g = five_courses();
        let colors = degree_propagation(&g, None).unwrap();
        let res = checker(&g, &to_options(&colors));
        match res {
            CheckerResult::Ok(nb_colors) => {
                assert!(nb_colors >= 2);
                assert!(nb_colors <= g.degree_of("A") + 1);
            }
            _ => panic!("invalid coloring: {:?}", res),
        }
    }

    #[test]
    fn test_highest_degree_first() {
        // star centered on "Z": the center is colored first and gets color 0
        let mut g = ConflictGraph::default();
        for leaf in ["a", "b", "c", "d"].iter() {
            g.add_edge(leaf, "Z");
        }
        let colors = degree_propagation(&g, None).unwrap();
        assert_eq!(colors[g.id("Z").unwrap()], 0);
        for leaf in ["a", "b", "c", "d"].iter() {
            assert_eq!(colors[g.id(leaf).unwrap()], 1);
        }
    }

    #[test]
    fn test_empty_graph() {
        let g = ConflictGraph::default();
        assert!(degree_propagation(&g, None).unwrap().is_empty());
        let mut rng = Rng::with_seed(7);
        assert!(degree_propagation(&g, Some(&mut rng)).unwrap().is_empty());
    }

    #[test]
    fn test_random_first_pick_is_valid_and_reproducible() {
        let mut g = five_courses();
        g.add_edge("E", "F");
        g.add_edge("F", "G");
        g.add_vertex("H");
        for seed in 0..20 {
            let c1 = degree_propagation(&g, Some(&mut Rng::with_seed(seed))).unwrap();
            let c2 = degree_propagation(&g, Some(&mut Rng::with_seed(seed))).unwrap();
            assert_eq!(c1, c2);
            assert!(checker(&g, &to_options(&c1)).is_ok());
        }
    }
}
