// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{
    monitor::search_monitor::CrossingSearchMonitor, state::SearchState,
    stats::ExhaustiveSolverStatistics,
};
use cairn_model::{
    model::{Bridge, Roster},
    plan::CrossingPlan,
};
use cairn_search::num::CrossingNumeric;

/// A stdout progress monitor for debugging runs.
///
/// Prints the roster, bridge and search-space complexity on entry, every
/// improving move sequence as it is found, a throttled progress line while
/// the enumeration runs, and the statistics table on exit. The throttle
/// checks `nodes_explored` against a power-of-two mask so the hot loop only
/// pays for a print every `mask + 1` nodes.
#[derive(Debug, Clone)]
pub struct LogSearchMonitor<T> {
    node_mask: u64,
    best_cost: Option<T>,
}

impl<T> LogSearchMonitor<T> {
    /// Creates a new `LogSearchMonitor` printing a progress line every
    /// `node_mask + 1` nodes.
    pub fn new(node_mask: u64) -> Self {
        Self {
            node_mask,
            best_cost: None,
        }
    }
}

impl<T> Default for LogSearchMonitor<T> {
    fn default() -> Self {
        Self::new(4095)
    }
}

impl<T> CrossingSearchMonitor<T> for LogSearchMonitor<T>
where
    T: CrossingNumeric,
{
    fn name(&self) -> &str {
        "LogSearchMonitor"
    }

    fn on_enter_search(&mut self, roster: &Roster<T>, bridge: &Bridge<T>) {
        self.best_cost = None;
        println!("{}", roster);
        println!("{}, search space: {}", bridge, roster.complexity());
    }

    fn on_exit_search(&mut self, statistics: &ExhaustiveSolverStatistics) {
        println!("{}", statistics);
    }

    fn on_node(&mut self, state: &SearchState<T>, statistics: &ExhaustiveSolverStatistics) {
        if (statistics.nodes_explored & self.node_mask) == 0 {
            let best = match &self.best_cost {
                Some(cost) => format!("{}", cost),
                None => "Inf".to_string(),
            };
            println!(
                "nodes: {:<12} depth: {:<4} best: {:<12} pruned: {}",
                statistics.nodes_explored,
                state.depth(),
                best,
                statistics.prunings_bound
            );
        }
    }

    fn on_prune(&mut self, _state: &SearchState<T>, _statistics: &ExhaustiveSolverStatistics) {}

    fn on_leaf(&mut self, _cost: T, _statistics: &ExhaustiveSolverStatistics) {}

    fn on_incumbent(&mut self, plan: &CrossingPlan<T>, statistics: &ExhaustiveSolverStatistics) {
        self.best_cost = Some(plan.total_time());
        println!(
            "new best: {} ({} legs, leaf {} of the enumeration)",
            plan.total_time(),
            plan.num_legs(),
            statistics.leaf_paths
        );
    }
}

impl<T> std::fmt::Display for LogSearchMonitor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogSearchMonitor(node_mask: {})", self.node_mask)
    }
}
