//! Exam timetabling as a Graph Coloring problem

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// coloring instance base trait, solutions and checker
pub mod color;

/// conflict graph between courses
pub mod graph;

/// error type of the crate
pub mod error;

/// coloring algorithms
pub mod search;

/// exam scheduler (conflict graph + coloring + schedule views)
pub mod scheduler;

/// read course registration files
pub mod registration;

/// repeated colorings keeping the smallest number of slots
pub mod trials;

/// helper and utility methods for executables
pub mod util;
