use std::collections::BTreeMap;
use std::fs;
use std::str::FromStr;

use fastrand::Rng;
use serde::{Serialize, Deserialize};
use tracing::info;

use crate::color::{ColoringInstance, VertexId, CheckerResult, checker, color_groups};
use crate::error::{Error, Result};
use crate::graph::ConflictGraph;
use crate::search::degree_propagation::degree_propagation;
use crate::search::greedy_dsatur::greedy_dsatur;
use crate::search::greedy_clique::greedy_clique;


/** coloring algorithm used by the scheduler */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColoringStrategy {
    /// degree-first greedy with propagation and conflict repair
    DegreePropagation,
    /// saturation degree greedy
    Dsatur,
}

impl Default for ColoringStrategy {
    fn default() -> Self { ColoringStrategy::DegreePropagation }
}

impl FromStr for ColoringStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "degree" => Ok(ColoringStrategy::DegreePropagation),
            "dsatur" => Ok(ColoringStrategy::Dsatur),
            _ => Err(Error::InvalidParameter { name: "strategy".to_string(), value: s.to_string() }),
        }
    }
}

/** a time slot of the schedule */
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// human readable name ("Time Slot 1" for color 0)
    pub label: String,
    /// courses having their exam in this slot
    pub courses: Vec<String>,
}

/** assigns exam slots to courses so that two courses sharing a student
never share a slot.
*/
#[derive(Debug, Default)]
pub struct Scheduler {
    /// conflict graph
    graph: ConflictGraph,
    /// algorithm used by color_graph
    strategy: ColoringStrategy,
    /// if set, the first colored vertex is drawn from it
    rng: Option<Rng>,
    /// colors[v]: slot of vertex v (empty until color_graph is called)
    colors: Vec<Option<usize>>,
    /// slot -> courses in this slot
    color_groups: BTreeMap<usize, Vec<VertexId>>,
}

impl Scheduler {
    /// creates an empty scheduler using the given algorithm
    pub fn new(strategy:ColoringStrategy) -> Self {
        Self { strategy, ..Self::default() }
    }

    /// draws the first colored course from rng
    pub fn with_rng(mut self, rng:Rng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// replaces (or removes) the random source. Returns the previous one.
    pub fn set_rng(&mut self, rng:Option<Rng>) -> Option<Rng> {
        std::mem::replace(&mut self.rng, rng)
    }

    /// algorithm used by color_graph
    pub fn strategy(&self) -> ColoringStrategy { self.strategy }

    /// conflict graph
    pub fn graph(&self) -> &ConflictGraph { &self.graph }

    /// adds a course
    pub fn add_class(&mut self, class_name:&str) {
        self.graph.add_vertex(class_name);
    }

    /// adds a conflict between two courses
    pub fn add_conflict(&mut self, class1:&str, class2:&str) {
        self.graph.add_edge(class1, class2);
    }

    /** colors the graph with the selected strategy.
    Any previous coloring is discarded. Returns course -> slot.
    */
    pub fn color_graph(&mut self) -> Result<BTreeMap<&str, usize>> {
        self.colors.clear();
        self.color_groups.clear();
        let colors = match self.strategy {
            ColoringStrategy::DegreePropagation => degree_propagation(&self.graph, self.rng.as_mut())?,
            ColoringStrategy::Dsatur => greedy_dsatur(&self.graph, self.rng.as_mut()),
        };
        self.colors = colors.into_iter().map(Some).collect();
        self.update_color_groups();
        info!(
            strategy = ?self.strategy,
            courses = self.graph.vertex_count(),
            conflicts = self.graph.edge_count(),
            slots = self.slot_count(),
            "graph colored"
        );
        Ok(self.colors())
    }

    /// recomputes slot -> courses from the colors
    fn update_color_groups(&mut self) {
        self.color_groups = color_groups(&self.colors);
    }

    /// slot of a course (None if unknown or not colored yet)
    pub fn color_of(&self, class_name:&str) -> Option<usize> {
        self.graph.id(class_name)
            .and_then(|v| self.colors.get(v).copied().flatten())
    }

    /// course -> slot for every colored course
    pub fn colors(&self) -> BTreeMap<&str, usize> {
        self.colors.iter().enumerate()
            .filter_map(|(v,c)| c.map(|c| (self.graph.vertex_name(v), c)))
            .collect()
    }

    /// number of slots used
    pub fn slot_count(&self) -> usize { self.color_groups.len() }

    /// checker result for the current coloring
    pub fn check(&self) -> CheckerResult {
        checker(&self.graph, &self.colors)
    }

    /// true iff every course has a slot and no conflicting courses share one
    pub fn is_valid_coloring(&self) -> bool {
        self.check().is_ok()
    }

    /** one entry per used slot, in slot order. */
    pub fn schedule_view(&self) -> Vec<TimeSlot> {
        self.color_groups.iter().map(|(c,group)| {
            TimeSlot {
                label: format!("Time Slot {}", c+1),
                courses: group.iter().map(|v| self.graph.vertex_name(*v).to_string()).collect(),
            }
        }).collect()
    }

    /** size of a clique found greedily: no valid schedule uses fewer slots */
    pub fn clique_lower_bound(&self) -> usize {
        greedy_clique(&self.graph).len()
    }

    /** writes a string encoding the schedule (one line per slot) */
    pub fn schedule_to_string(&self) -> String {
        let mut res = String::default();
        for slot in self.schedule_view() {
            res += format!("{}: {}\n", slot.label, slot.courses.join(", ")).as_str();
        }
        res
    }

    /** writes the schedule into a file. each line corresponds to a slot. */
    pub fn write_schedule(&self, filename:&str) -> Result<()> {
        fs::write(filename, self.schedule_to_string())
            .map_err(|source| Error::Export { path: filename.into(), source })
    }
}
