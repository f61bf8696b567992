//! Search controller: owns the frontier and closed set and drives the
//! expansion loop to a terminal outcome.
//!
//! One engine instance runs exactly one search. The driving loop builds a
//! fresh engine per accepted configuration, so frontier, closed set, and
//! tree never outlive a search.

use std::time::Instant;

use rustc_hash::FxHashSet;

use crate::events::{EventSink, SearchEvent, SearchReport};
use crate::grid::GridPos;

use super::config::SearchConfig;
use super::node::NodeId;
use super::problem::SearchProblem;
use super::stats::SearchStats;
use super::strategy::{GreedyBestFirst, SelectionStrategy};
use super::tree::SearchTree;

/// Informed graph-search engine.
///
/// Generic behavior lives behind the `SearchProblem` and
/// `SelectionStrategy` seams; the engine itself only sequences the loop:
/// select, emit, goal-test, expand.
pub struct SearchEngine {
    /// The search space.
    problem: Box<dyn SearchProblem>,

    /// Frontier selection policy.
    strategy: Box<dyn SelectionStrategy>,

    /// Engine configuration (pacing, start state).
    config: SearchConfig,

    /// Node arena for the current search.
    tree: SearchTree,

    /// Discovered-but-unexpanded nodes.
    frontier: Vec<NodeId>,

    /// States already expanded. Once closed, a state is never re-expanded,
    /// even if rediscovered via a cheaper path.
    closed: FxHashSet<GridPos>,

    /// Search statistics.
    stats: SearchStats,
}

impl SearchEngine {
    /// Create an engine with the default greedy best-first strategy.
    pub fn new<P: SearchProblem + 'static>(problem: P, config: SearchConfig) -> Self {
        let initial = problem.initial_state();
        Self {
            problem: Box::new(problem),
            strategy: Box::new(GreedyBestFirst),
            config,
            tree: SearchTree::new(initial),
            frontier: Vec::new(),
            closed: FxHashSet::default(),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom selection strategy.
    #[must_use]
    pub fn with_strategy<S: SelectionStrategy + 'static>(mut self, strategy: S) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    /// Run the search to a terminal outcome.
    ///
    /// Emits one progress event per selected node (paced by
    /// `config.step_delay`), then a single terminal event carrying the
    /// report that is also returned. Exhaustion is a normal `fail`
    /// outcome, never an error.
    pub fn run(&mut self, sink: &mut dyn EventSink) -> SearchReport {
        let start = Instant::now();
        self.stats.reset();

        self.tree = SearchTree::new(self.problem.initial_state());
        self.frontier.clear();
        self.closed.clear();
        self.frontier.push(self.tree.root());

        let report = loop {
            if self.frontier.is_empty() {
                break SearchReport::fail();
            }

            // Non-empty frontier was just checked, so a strategy returning
            // nothing is a defined terminal case, not a fault.
            let Some(node_id) = self
                .strategy
                .select(&mut self.frontier, &self.tree, self.problem.as_ref())
            else {
                break SearchReport::fail();
            };

            let state = self.tree.get(node_id).state;
            self.stats.steps += 1;
            self.stats.max_depth = self.stats.max_depth.max(self.tree.get(node_id).depth);

            sink.emit(SearchEvent::Progress { state });
            if !self.config.step_delay.is_zero() {
                std::thread::sleep(self.config.step_delay);
            }

            if self.problem.goal_test(state) {
                break SearchReport::success(self.tree.solution(node_id));
            }

            if self.closed.insert(state) {
                self.expand_into_frontier(node_id);
            }
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        log::info!(
            "Search finished: {:?} after {} steps ({} nodes expanded, {} duplicates suppressed)",
            report.outcome,
            self.stats.steps,
            self.stats.nodes_expanded,
            self.stats.duplicates_suppressed,
        );

        sink.emit(SearchEvent::Terminal(report.clone()));
        report
    }

    /// Expand a node and append children whose states are not already on
    /// the frontier.
    ///
    /// Duplicate suppression checks against the frontier snapshot taken
    /// before this expansion, not against siblings added within it.
    fn expand_into_frontier(&mut self, node_id: NodeId) {
        let frontier_states: FxHashSet<GridPos> = self
            .frontier
            .iter()
            .map(|&id| self.tree.get(id).state)
            .collect();

        for child in self.tree.expand(node_id, self.problem.as_ref()) {
            if frontier_states.contains(&self.tree.get(child).state) {
                self.stats.duplicates_suppressed += 1;
            } else {
                self.frontier.push(child);
            }
        }

        self.stats.nodes_expanded += 1;
    }

    /// Statistics from the most recent run.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The search tree from the most recent run.
    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
