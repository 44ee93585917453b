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

use std::time::Duration;

/// Statistics collected during one run of the exhaustive crossing engine.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExhaustiveSolverStatistics {
    /// Total search nodes visited (including leaves and pruned nodes).
    pub nodes_explored: u64,
    /// Complete move sequences reached (the enumeration's leaf count).
    pub leaf_paths: u64,
    /// Branches abandoned because their cost already met the incumbent.
    pub prunings_bound: u64,
    /// The deepest leg count reached on any branch.
    pub max_depth: u64,
    /// Number of distinct move sequences tied at the optimal cost.
    pub tied_optima: u64,
    /// Total time spent in the engine.
    pub time_total: Duration,
}

impl ExhaustiveSolverStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_leaf_path(&mut self) {
        self.leaf_paths = self.leaf_paths.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn set_tied_optima(&mut self, count: u64) {
        self.tied_optima = count;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for ExhaustiveSolverStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Cairn-BnB Solver Statistics:")?;
        writeln!(f, "  Nodes explored:   {}", self.nodes_explored)?;
        writeln!(f, "  Leaf paths:       {}", self.leaf_paths)?;
        writeln!(f, "  Prunings (bound): {}", self.prunings_bound)?;
        writeln!(f, "  Max depth:        {}", self.max_depth)?;
        writeln!(f, "  Tied optima:      {}", self.tied_optima)?;
        writeln!(f, "  Total time:       {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = ExhaustiveSolverStatistics::default();
        stats.on_node_explored();
        stats.on_node_explored();
        stats.on_leaf_path();
        stats.on_pruning_bound();
        stats.on_depth_update(3);
        stats.on_depth_update(2);
        stats.set_tied_optima(2);

        assert_eq!(stats.nodes_explored, 2);
        assert_eq!(stats.leaf_paths, 1);
        assert_eq!(stats.prunings_bound, 1);
        assert_eq!(stats.max_depth, 3);
        assert_eq!(stats.tied_optima, 2);
    }

    #[test]
    fn test_display_formats_all_fields() {
        let mut stats = ExhaustiveSolverStatistics::default();
        stats.on_node_explored();
        stats.set_total_time(Duration::from_millis(12));

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Cairn-BnB Solver Statistics:"));
        assert!(rendered.contains("Nodes explored:   1"));
        assert!(rendered.contains("Leaf paths:       0"));
        assert!(rendered.contains("Total time:"));
    }
}
