use std::collections::{BTreeSet, HashMap};
use std::fmt;

use bit_set::BitSet;

use crate::color::{ColoringInstance, VertexId};


/** conflict graph between courses.

Vertices are course names, interned to dense ids in insertion order.
Edges are stored once in `edges` and in both directions in the adjacency
structures, so the neighbor relation is always symmetric.
Queries by name never fail: an unknown name behaves as an isolated vertex
that is not part of the graph.
*/
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    /// names[i]: name of vertex i
    names: Vec<String>,
    /// ids[name]: id of the vertex called name
    ids: HashMap<String, VertexId>,
    /// edges of the graph (u < v)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i (insertion order)
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
}

impl ColoringInstance for ConflictGraph {
    fn nb_vertices(&self) -> usize { self.names.len() }

    fn nb_edges(&self) -> usize { self.edges.len() }

    fn neighbors(&self, u:VertexId) -> Vec<VertexId> { self.adj_list[u].clone() }

    fn degree(&self, u:VertexId) -> usize { self.adj_list[u].len() }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool { self.adj_matrix[u].contains(v) }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }

    fn vertex_name(&self, u:VertexId) -> &str { &self.names[u] }

    fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = (0..self.nb_vertices()).map(|i|{ self.degree(i) }).collect();
        println!("\t{} \t min degree", degrees.iter().min().unwrap_or(&0));
        println!("\t{} \t max degree", degrees.iter().max().unwrap_or(&0));
    }
}

impl ConflictGraph {

    /// id of the vertex called name (if it exists)
    pub fn id(&self, name:&str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    /** adds a vertex if not already present. Returns its id. */
    pub fn add_vertex(&mut self, name:&str) -> VertexId {
        if let Some(id) = self.id(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.adj_list.push(Vec::new());
        self.adj_matrix.push(BitSet::default());
        id
    }

    /** adds the edge a-b (and a, b if absent).
    Adding an existing edge does nothing. A self-edge (a == b) only adds
    the vertex: a course never conflicts with itself.
    */
    pub fn add_edge(&mut self, a:&str, b:&str) {
        let u = self.add_vertex(a);
        let v = self.add_vertex(b);
        if u == v || self.adj_matrix[u].contains(v) {
            return;
        }
        self.adj_matrix[u].insert(v);
        self.adj_matrix[v].insert(u);
        self.adj_list[u].push(v);
        self.adj_list[v].push(u);
        self.edges.push((u.min(v), u.max(v)));
    }

    /// names of the vertices adjacent to name (empty if name is unknown)
    pub fn neighbors_of(&self, name:&str) -> BTreeSet<&str> {
        match self.id(name) {
            None => BTreeSet::new(),
            Some(u) => self.adj_list[u].iter().map(|v| self.names[*v].as_str()).collect(),
        }
    }

    /// names of all vertices
    pub fn vertices(&self) -> BTreeSet<&str> {
        self.names.iter().map(|s| s.as_str()).collect()
    }

    /// number of neighbors of name (0 if unknown)
    pub fn degree_of(&self, name:&str) -> usize {
        self.id(name).map_or(0, |u| self.degree(u))
    }

    /// true iff the graph has no vertex
    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    /// number of vertices
    pub fn vertex_count(&self) -> usize { self.nb_vertices() }

    /// number of edges
    pub fn edge_count(&self) -> usize { self.nb_edges() }

    /// true iff a and b both exist and share an edge
    pub fn adjacent(&self, a:&str, b:&str) -> bool {
        match (self.id(a), self.id(b)) {
            (Some(u), Some(v)) => self.are_adjacent(u, v),
            _ => false,
        }
    }
}

impl fmt::Display for ConflictGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph with {} vertices and {} edges", self.vertex_count(), self.edge_count())
    }
}

/// graph with n courses, each pair conflicting with probability density/100
#[cfg(test)]
pub(crate) fn random_graph(rng:&fastrand::Rng, n:usize, density:u32) -> ConflictGraph {
    let mut g = ConflictGraph::default();
    for i in 0..n {
        g.add_vertex(&format!("C{}", i));
        for j in 0..i {
            if rng.u32(0..100) < density {
                g.add_edge(&format!("C{}", i), &format!("C{}", j));
            }
        }
    }
    g
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_vertex_idempotent() {
        let mut g = ConflictGraph::default();
        assert!(g.is_empty());
        let a = g.add_vertex("Math101");
        assert_eq!(g.add_vertex("Math101"), a);
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.degree_of("Math101"), 0);
        assert!(!g.is_empty());
    }

    #[test]
    fn test_add_edge_adds_endpoints() {
        let mut g = ConflictGraph::default();
        g.add_edge("A", "B");
        g.add_edge("B", "A");
        g.add_edge("A", "B");
        assert_eq!(g.vertex_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.adjacent("A", "B"));
        assert!(g.adjacent("B", "A"));
    }

    #[test]
    fn test_self_edge_ignored() {
        let mut g = ConflictGraph::default();
        g.add_edge("A", "A");
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
        assert!(!g.adjacent("A", "A"));
        assert!(g.neighbors_of("A").is_empty());
    }

    #[test]
    fn test_unknown_vertex_queries() {
        let mut g = ConflictGraph::default();
        g.add_edge("A", "B");
        assert!(g.neighbors_of("Z").is_empty());
        assert_eq!(g.degree_of("Z"), 0);
        assert!(!g.adjacent("A", "Z"));
        assert!(!g.adjacent("Z", "A"));
        assert_eq!(g.id("Z"), None);
    }

    #[test]
    fn test_symmetry_and_edge_count() {
        let mut g = ConflictGraph::default();
        let pairs = [("A","B"), ("A","C"), ("A","D"), ("B","E"), ("C","E"), ("D","E"), ("C","A")];
        for (a,b) in pairs.iter() {
            g.add_edge(a, b);
        }
        g.add_vertex("F");
        let mut sum_degrees = 0;
        for u in g.vertices() {
            for v in g.neighbors_of(u) {
                assert!(g.neighbors_of(v).contains(u), "{} -> {} is not symmetric", u, v);
            }
            sum_degrees += g.degree_of(u);
        }
        assert_eq!(g.edge_count(), 6);
        assert_eq!(g.edge_count(), sum_degrees / 2);
        assert_eq!(g.degree_of("A"), 3);
        assert_eq!(g.degree_of("F"), 0);
        for (u,v) in g.edges() {
            assert!(u < v);
        }
    }

    #[test]
    fn test_display() {
        let mut g = ConflictGraph::default();
        g.add_edge("A", "B");
        g.add_vertex("C");
        assert_eq!(g.to_string(), "Graph with 3 vertices and 1 edges");
        assert_eq!(
            g.vertices().into_iter().collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }
}
