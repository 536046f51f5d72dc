//! Coloring algorithms for the conflict graph.

/// degree-first greedy with propagation and conflict repair
pub mod degree_propagation;

/// greedy DSATUR algorithm
pub mod greedy_dsatur;

/// greedy that finds a clique of "large" size (lower bound on the number of colors)
pub mod greedy_clique;
