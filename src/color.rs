use std::collections::BTreeMap;

/** Vertex Id */
pub type VertexId = usize;

/** Solution of a graph coloring problem
(represented as a partition).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** read-only view of a graph that coloring algorithms work on.
Vertices are dense indices in `0..nb_vertices()`.
*/
pub trait ColoringInstance: std::fmt::Debug {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// number of edges (each edge counted once)
    fn nb_edges(&self) -> usize;

    /// list of vertices adjacent to u
    fn neighbors(&self, u:VertexId) -> Vec<VertexId>;

    /// number of vertices adjacent to u
    fn degree(&self, u:VertexId) -> usize;

    /// true iff u and v share an edge
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// edge list, every edge (u,v) is stored once with u < v
    fn edges(&self) -> &[(VertexId,VertexId)];

    /// human readable name of vertex u
    fn vertex_name(&self, u:VertexId) -> &str;

    /// prints some statistics about the instance
    fn display_statistics(&self);
}

/** result of the checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// valid coloring, number of distinct colors used
    Ok(usize),
    /// vertex has no color
    VertexNotColored(VertexId),
    /// both endpoints of the edge share a color
    ConflictingEdge(VertexId, VertexId),
}

impl CheckerResult {
    /// true iff the coloring is valid
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckerResult::Ok(_))
    }
}

/**
checks a (possibly partial) coloring. colors[v] is the color of v, a vertex
beyond the end of `colors` is considered uncolored.
Stops at the first violation.
*/
pub fn checker(inst:&dyn ColoringInstance, colors:&[Option<usize>]) -> CheckerResult {
    let color = |v:VertexId| colors.get(v).copied().flatten();
    for u in 0..inst.nb_vertices() {
        let cu = match color(u) {
            None => return CheckerResult::VertexNotColored(u),
            Some(c) => c,
        };
        for v in inst.neighbors(u) {
            match color(v) {
                None => return CheckerResult::VertexNotColored(v),
                Some(cv) if cv == cu => return CheckerResult::ConflictingEdge(u, v),
                Some(_) => {}
            }
        }
    }
    CheckerResult::Ok(colors_to_solution(colors).len())
}

/** groups vertices by color. Color values used by no vertex do not produce
an empty class, so the result length is the number of distinct colors. */
pub fn colors_to_solution(colors:&[Option<usize>]) -> Solution {
    color_groups(colors).into_iter().map(|(_,group)| group).collect()
}

/** color -> vertices having this color (vertices listed by increasing id) */
pub fn color_groups(colors:&[Option<usize>]) -> BTreeMap<usize, Vec<VertexId>> {
    let mut res:BTreeMap<usize, Vec<VertexId>> = BTreeMap::new();
    for (v,c) in colors.iter().enumerate() {
        if let Some(c) = c {
            res.entry(*c).or_default().push(v);
        }
    }
    res
}

/** rank[v]: position of v when vertices are sorted by name.
Used as the last tie-breaker so algorithms do not depend on insertion order. */
pub fn name_ranks(inst:&dyn ColoringInstance) -> Vec<usize> {
    let mut order:Vec<VertexId> = (0..inst.nb_vertices()).collect();
    order.sort_by(|a,b| inst.vertex_name(*a).cmp(inst.vertex_name(*b)));
    let mut res = vec![0 ; order.len()];
    for (rank,v) in order.into_iter().enumerate() {
        res[v] = rank;
    }
    res
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::graph::ConflictGraph;

    fn path_abc() -> ConflictGraph {
        let mut g = ConflictGraph::default();
        g.add_edge("A", "B");
        g.add_edge("B", "C");
        g
    }

    #[test]
    fn test_checker_ok() {
        let g = path_abc();
        assert_eq!(checker(&g, &[Some(0), Some(1), Some(0)]), CheckerResult::Ok(2));
    }

    #[test]
    fn test_checker_uncolored() {
        let g = path_abc();
        assert_eq!(checker(&g, &[Some(0), None, Some(0)]), CheckerResult::VertexNotColored(1));
        // colors shorter than the graph
        assert_eq!(checker(&g, &[Some(0), Some(1)]), CheckerResult::VertexNotColored(2));
    }

    #[test]
    fn test_checker_conflict() {
        let g = path_abc();
        let res = checker(&g, &[Some(0), Some(0), Some(1)]);
        assert_eq!(res, CheckerResult::ConflictingEdge(0, 1));
        assert!(!res.is_ok());
    }

    #[test]
    fn test_colors_to_solution_skips_unused_colors() {
        let sol = colors_to_solution(&[Some(0), Some(3), Some(0)]);
        assert_eq!(sol, vec![vec![0,2], vec![1]]);
    }

    #[test]
    fn test_name_ranks() {
        let mut g = ConflictGraph::default();
        g.add_vertex("c");
        g.add_vertex("a");
        g.add_vertex("b");
        assert_eq!(name_ranks(&g), vec![2,0,1]);
    }
}
