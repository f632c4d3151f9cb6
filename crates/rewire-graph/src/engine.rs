//! Randomized double edge swaps over a [`WorkingGraph`].

use rand::Rng;
use rewire_core::errors::{BudgetReport, ErrorInfo, RewireError};
use rewire_core::{AdjacencyMatrix, Matrix, VertexId};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::edges::{extract_edges, Edge, EdgeList, WorkingGraph};
use crate::limits::RewireLimits;

/// Result of a single sampling attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The two edges were swapped.
    Swapped(SwapEvent),
    /// The sampled edges share a vertex (or are the same edge).
    Overlapping,
    /// The constraint values of the old and new pairs differ.
    ConstraintMismatch,
    /// One of the new edges already exists.
    Occupied,
    /// The graph has no edges to sample; nothing was drawn.
    NoEdges,
}

/// Description of a successful double edge swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapEvent {
    /// Edge-list indices rewritten by the swap.
    pub indices: [usize; 2],
    /// Edges removed, as `(v1, v2)` and `(v3, v4)`.
    pub removed: [Edge; 2],
    /// Edges added, as `(v1, v3)` and `(v2, v4)`.
    pub added: [Edge; 2],
}

/// Receives every successful swap together with the matrix it produced.
pub trait SwapObserver {
    /// Called right after the swap has been written.
    fn on_swap(&mut self, event: &SwapEvent, graph: &AdjacencyMatrix);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SwapObserver for NoopObserver {
    fn on_swap(&mut self, _event: &SwapEvent, _graph: &AdjacencyMatrix) {}
}

/// Counters accumulated over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RewireStats {
    /// Attempts consumed, successful or not.
    pub attempts: u64,
    /// Successful swaps.
    pub rewires: u64,
    /// Successful swaps the run needs.
    pub required: u64,
    /// Attempts rejected because the sampled edges touch.
    pub overlapping: u64,
    /// Attempts rejected by the constraint matrix.
    pub constraint_skipped: u64,
    /// Attempts rejected because a new edge already existed.
    pub occupied: u64,
}

/// Finished run: the rewired matrix, its edge index and the run counters.
#[derive(Debug, Clone, PartialEq)]
pub struct RewireOutcome {
    /// Rewired adjacency matrix.
    pub graph: AdjacencyMatrix,
    /// Edge list matching `graph`.
    pub edges: EdgeList,
    /// Counters for the run.
    pub stats: RewireStats,
}

/// Stateful swap engine owning one working graph for the duration of a run.
#[derive(Debug)]
pub struct Rewirer<'a, C> {
    working: WorkingGraph,
    constraint: Option<&'a Matrix<C>>,
    stats: RewireStats,
}

impl<'a, C: PartialEq> Rewirer<'a, C> {
    /// Wraps a working graph; the constraint must have the graph's shape.
    pub fn new(
        working: WorkingGraph,
        constraint: Option<&'a Matrix<C>>,
    ) -> Result<Self, RewireError> {
        if let Some(constraint) = constraint {
            check_constraint_shape(working.matrix(), constraint)?;
        }
        Ok(Self {
            working,
            constraint,
            stats: RewireStats::default(),
        })
    }

    /// Counters accumulated so far.
    pub fn stats(&self) -> &RewireStats {
        &self.stats
    }

    /// Graph in its current state.
    pub fn working(&self) -> &WorkingGraph {
        &self.working
    }

    /// Releases the working graph.
    pub fn into_working(self) -> WorkingGraph {
        self.working
    }

    /// Samples two edges and swaps them if the swap is legal.
    pub fn attempt<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AttemptOutcome {
        self.stats.attempts += 1;
        let num_edges = self.working.edges().len();
        if num_edges == 0 {
            return AttemptOutcome::NoEdges;
        }
        let e1 = draw_index(rng, num_edges);
        let e2 = draw_index(rng, num_edges);
        let (matrix, edges) = self.working.parts_mut();
        let first = edges.as_slice()[e1];
        let second = edges.as_slice()[e2];
        let (v1, v2) = (first.u, first.v);
        let (mut v3, mut v4) = (second.u, second.v);

        if v1 == v3 || v1 == v4 || v2 == v4 || v2 == v3 {
            self.stats.overlapping += 1;
            return AttemptOutcome::Overlapping;
        }
        if rng.gen::<f64>() > 0.5 {
            std::mem::swap(&mut v3, &mut v4);
        }
        if let Some(constraint) = self.constraint {
            if !constraint_allows(constraint, v1, v2, v3, v4) {
                self.stats.constraint_skipped += 1;
                return AttemptOutcome::ConstraintMismatch;
            }
        }
        if matrix[(v1, v3)] != 0.0 || matrix[(v2, v4)] != 0.0 {
            self.stats.occupied += 1;
            return AttemptOutcome::Occupied;
        }

        let w12 = matrix[(v1, v2)];
        let w34 = matrix[(v4, v3)];
        set_symmetric(matrix, v1, v2, 0.0);
        set_symmetric(matrix, v3, v4, 0.0);
        set_symmetric(matrix, v1, v3, w12);
        set_symmetric(matrix, v2, v4, w34);
        let added = [Edge::new(v1, v3), Edge::new(v2, v4)];
        edges.replace(e1, added[0]);
        edges.replace(e2, added[1]);
        self.stats.rewires += 1;

        AttemptOutcome::Swapped(SwapEvent {
            indices: [e1, e2],
            removed: [Edge::new(v1, v2), Edge::new(v3, v4)],
            added,
        })
    }

    /// Attempts swaps until `required` succeed or the attempt budget runs out.
    ///
    /// A run that consumes the whole budget fails with
    /// [`RewireError::BudgetExhausted`], even when its last attempt reached the
    /// target. The graph is left in whatever state the last swap produced.
    pub fn run<R, O>(
        &mut self,
        required: u64,
        limits: &RewireLimits,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<(), RewireError>
    where
        R: Rng + ?Sized,
        O: SwapObserver + ?Sized,
    {
        self.stats.required = required;
        while self.stats.rewires < required && self.stats.attempts < limits.max_attempts {
            if let AttemptOutcome::Swapped(event) = self.attempt(rng) {
                observer.on_swap(&event, self.working.matrix());
            }
        }
        if self.stats.rewires < required || self.stats.attempts >= limits.max_attempts {
            let report = BudgetReport {
                achieved: self.stats.rewires,
                required,
                constraint_skipped: self.stats.constraint_skipped,
                attempts: self.stats.attempts,
                max_attempts: limits.max_attempts,
            };
            warn!(
                achieved = report.achieved,
                required = report.required,
                constraint_skipped = report.constraint_skipped,
                attempts = report.attempts,
                "attempt budget reached before the rewire target"
            );
            return Err(RewireError::BudgetExhausted(report));
        }
        Ok(())
    }
}

/// Rewires `graph` with the default limits and no constraint.
pub fn rewire<R: Rng + ?Sized>(
    graph: &AdjacencyMatrix,
    rewires_per_edge: u64,
    rng: &mut R,
) -> Result<AdjacencyMatrix, RewireError> {
    let outcome = rewire_with::<f64, R, NoopObserver>(
        graph,
        rewires_per_edge,
        None,
        &RewireLimits::default(),
        rng,
        &mut NoopObserver,
    )?;
    Ok(outcome.graph)
}

/// Rewires `graph`, only swapping edges whose constraint values agree.
pub fn rewire_constrained<C: PartialEq, R: Rng + ?Sized>(
    graph: &AdjacencyMatrix,
    rewires_per_edge: u64,
    constraint: &Matrix<C>,
    rng: &mut R,
) -> Result<AdjacencyMatrix, RewireError> {
    let outcome = rewire_with(
        graph,
        rewires_per_edge,
        Some(constraint),
        &RewireLimits::default(),
        rng,
        &mut NoopObserver,
    )?;
    Ok(outcome.graph)
}

/// Full rewiring entry point: validation, extraction, swaps, termination.
///
/// Shapes are validated before the RNG is touched. `rewires_per_edge == 0`
/// selects `limits.default_rewires_per_edge`.
#[instrument(
    name = "rewire.run",
    err,
    skip(graph, constraint, limits, rng, observer),
    fields(nodes = graph.rows(), constrained = constraint.is_some())
)]
pub fn rewire_with<C, R, O>(
    graph: &AdjacencyMatrix,
    rewires_per_edge: u64,
    constraint: Option<&Matrix<C>>,
    limits: &RewireLimits,
    rng: &mut R,
    observer: &mut O,
) -> Result<RewireOutcome, RewireError>
where
    C: PartialEq,
    R: Rng + ?Sized,
    O: SwapObserver + ?Sized,
{
    graph.ensure_square()?;
    if let Some(constraint) = constraint {
        check_constraint_shape(graph, constraint)?;
    }
    let working = extract_edges(graph)?;
    let required = limits.required_rewires(working.edges().len(), rewires_per_edge);
    debug!(
        edges = working.edges().len(),
        required,
        max_attempts = limits.max_attempts,
        "starting double edge swaps"
    );

    let mut rewirer = Rewirer::new(working, constraint)?;
    rewirer.run(required, limits, rng, observer)?;
    let stats = *rewirer.stats();
    debug!(
        attempts = stats.attempts,
        rewires = stats.rewires,
        constraint_skipped = stats.constraint_skipped,
        "rewiring finished"
    );
    let (graph, edges) = rewirer.into_working().into_parts();
    Ok(RewireOutcome {
        graph,
        edges,
        stats,
    })
}

pub(crate) fn check_constraint_shape<C>(
    graph: &AdjacencyMatrix,
    constraint: &Matrix<C>,
) -> Result<(), RewireError> {
    if constraint.shape() != graph.shape() {
        return Err(RewireError::Shape(
            ErrorInfo::new(
                "constraint-shape",
                "constraint matrix should be the same size as the graph matrix",
            )
            .with_context("graph", format!("{}x{}", graph.rows(), graph.cols()))
            .with_context(
                "constraint",
                format!("{}x{}", constraint.rows(), constraint.cols()),
            ),
        ));
    }
    Ok(())
}

fn constraint_allows<C: PartialEq>(
    constraint: &Matrix<C>,
    v1: VertexId,
    v2: VertexId,
    v3: VertexId,
    v4: VertexId,
) -> bool {
    constraint[(v1, v2)] == constraint[(v1, v3)] && constraint[(v3, v4)] == constraint[(v4, v2)]
}

fn draw_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    let u: f64 = rng.gen();
    ((len as f64 * u).floor() as usize).min(len - 1)
}

fn set_symmetric(matrix: &mut AdjacencyMatrix, a: VertexId, b: VertexId, weight: f64) {
    matrix[(a, b)] = weight;
    matrix[(b, a)] = weight;
}
