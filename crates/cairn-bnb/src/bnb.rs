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

//! Exhaustive enumeration of bridge-crossing move sequences.
//!
//! This module implements the brute-force crossing-time engine: a
//! depth-first enumeration of every legal move sequence for one bridge,
//! pruned against the best complete sequence found so far. Move sequences
//! strictly alternate outbound pair crossings with solo returns until the
//! near side is empty.
//!
//! The search is coordinated by a per-run session object holding the
//! incumbent cost, the set of tied-optimal plans, statistics, and the
//! attached monitor. The leaf check runs before the bound check at every
//! node, so equal-cost optima are collected rather than pruned; since every
//! leg has strictly positive cost, an interior branch that already matches
//! the incumbent can never extend into a tie and is safe to abandon.
//!
//! Complexity is combinatorial in the roster size. This engine exists as a
//! correctness oracle for `cairn_ferry` on small validation rosters and
//! must not be pointed at production-size input.

use crate::{
    monitor::search_monitor::CrossingSearchMonitor,
    result::ExhaustiveOutcome,
    state::SearchState,
    stats::ExhaustiveSolverStatistics,
};
use cairn_model::{
    model::{Bridge, Roster},
    plan::{CrossingLeg, CrossingPlan, LegDirection},
};
use cairn_search::num::CrossingNumeric;

/// The exhaustive crossing-time engine.
///
/// Enumerates every legal move sequence for one bridge and returns the
/// minimum total time together with every tied-optimal plan. Pruning
/// against the incumbent is enabled by default and can be disabled to
/// prove it is a performance optimization only.
///
/// # Examples
///
/// ```rust
/// # use cairn_bnb::bnb::ExhaustiveCrossingSolver;
/// # use cairn_bnb::monitor::no_op::NoOperationMonitor;
/// # use cairn_model::model::{Bridge, Hiker, Roster};
///
/// let mut roster = Roster::new();
/// roster.add(Hiker::new("A", 10.0f64));
/// roster.add(Hiker::new("B", 50.0));
///
/// let solver = ExhaustiveCrossingSolver::new();
/// let mut monitor = NoOperationMonitor::new();
/// let outcome = solver.solve(&roster, &Bridge::new("1st", 100.0), &mut monitor);
///
/// assert_eq!(outcome.crossing_time(), 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExhaustiveCrossingSolver {
    pruning: bool,
}

impl Default for ExhaustiveCrossingSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ExhaustiveCrossingSolver {
    /// Creates a new solver with pruning enabled.
    #[inline]
    pub fn new() -> Self {
        Self { pruning: true }
    }

    /// Configures whether branches are pruned against the incumbent.
    ///
    /// Disabling pruning never changes the returned crossing time; it only
    /// forces the full enumeration. Used by tests and benchmarks.
    #[inline]
    pub fn with_pruning(mut self, yes: bool) -> Self {
        self.pruning = yes;
        self
    }

    /// Returns `true` if pruning is enabled.
    #[inline]
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Returns the name of this engine.
    #[inline]
    pub fn name(&self) -> &str {
        "ExhaustiveCrossingSolver"
    }

    /// Enumerates every legal move sequence for the given bridge and
    /// returns the minimum crossing time, all tied-optimal plans, and the
    /// search statistics.
    ///
    /// Degenerate rosters have explicit policies: an empty roster crosses
    /// in zero time (the root is already terminal), a lone hiker crosses
    /// solo in `length / speed`.
    pub fn solve<T, M>(
        &self,
        roster: &Roster<T>,
        bridge: &Bridge<T>,
        monitor: &mut M,
    ) -> ExhaustiveOutcome<T>
    where
        T: CrossingNumeric,
        M: CrossingSearchMonitor<T>,
    {
        let session = SearchSession {
            roster,
            length: bridge.length(),
            pruning: self.pruning,
            state: SearchState::new(roster.len()),
            best_time: T::infinity(),
            best_plans: Vec::new(),
            stats: ExhaustiveSolverStatistics::default(),
            monitor,
            start_time: std::time::Instant::now(),
        };
        session.run(roster, bridge)
    }
}

impl std::fmt::Display for ExhaustiveCrossingSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ExhaustiveCrossingSolver(pruning: {})", self.pruning)
    }
}

/// A search session for the exhaustive engine. Encapsulates the state and
/// bookkeeping of a single enumeration run.
struct SearchSession<'a, T, M>
where
    T: CrossingNumeric,
{
    roster: &'a Roster<T>,
    length: T,
    pruning: bool,
    state: SearchState<T>,
    best_time: T,
    best_plans: Vec<CrossingPlan<T>>,
    stats: ExhaustiveSolverStatistics,
    monitor: &'a mut M,
    start_time: std::time::Instant,
}

impl<'a, T, M> SearchSession<'a, T, M>
where
    T: CrossingNumeric,
    M: CrossingSearchMonitor<T>,
{
    /// Runs the enumeration to completion and finalizes the outcome.
    fn run(mut self, roster: &Roster<T>, bridge: &Bridge<T>) -> ExhaustiveOutcome<T> {
        self.monitor.on_enter_search(roster, bridge);

        self.explore(T::zero());

        debug_assert!(
            self.best_time.is_finite(),
            "exhaustive enumeration terminated without reaching a complete move sequence"
        );

        self.stats.set_tied_optima(self.best_plans.len() as u64);
        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);

        ExhaustiveOutcome::new(self.best_time, self.best_plans, self.stats)
    }

    /// Visits one search node carrying the branch cost accumulated so far.
    ///
    /// The leaf check runs before the bound check so equal-cost optima are
    /// recorded instead of pruned.
    fn explore(&mut self, cost: T) {
        self.stats.on_node_explored();
        self.stats.on_depth_update(self.state.depth() as u64);
        self.monitor.on_node(&self.state, &self.stats);

        if self.state.is_complete() {
            self.record_leaf(cost);
            return;
        }

        if self.pruning && self.best_time <= cost {
            self.stats.on_pruning_bound();
            self.monitor.on_prune(&self.state, &self.stats);
            return;
        }

        match self.state.direction() {
            LegDirection::Outbound => self.expand_outbound(cost),
            LegDirection::Return => self.expand_return(cost),
        }
    }

    /// Branches on every unordered pair on the near side, or on a solo
    /// crossing when a single hiker remains there.
    fn expand_outbound(&mut self, cost: T) {
        let left = self.state.left_snapshot();

        if let [lone] = left.as_slice() {
            let duration = self.length / self.roster.speed(*lone);
            self.descend(CrossingLeg::outbound_solo(*lone, duration), cost);
            return;
        }

        for i in 0..left.len() - 1 {
            for j in (i + 1)..left.len() {
                let (a, b) = (left[i], left[j]);
                let speed_a = self.roster.speed(a);
                let speed_b = self.roster.speed(b);
                let slower = if speed_a <= speed_b { speed_a } else { speed_b };
                let duration = self.length / slower;
                self.descend(CrossingLeg::outbound_pair(a, b, duration), cost);
            }
        }
    }

    /// Branches on every single hiker on the far side walking the lantern
    /// back.
    fn expand_return(&mut self, cost: T) {
        let right = self.state.right_snapshot();

        for &hiker in right.iter() {
            let duration = self.length / self.roster.speed(hiker);
            self.descend(CrossingLeg::return_solo(hiker, duration), cost);
        }
    }

    /// Applies a leg, explores the child node, and restores the state.
    #[inline]
    fn descend(&mut self, leg: CrossingLeg<T>, cost: T) {
        let child_cost = cost + leg.duration();
        self.state.apply_leg(leg);
        self.explore(child_cost);
        self.state.undo_leg();
    }

    /// Records a complete move sequence. A strictly better cost replaces
    /// the incumbent and clears the tied set; an exact tie appends.
    fn record_leaf(&mut self, cost: T) {
        self.stats.on_leaf_path();
        self.monitor.on_leaf(cost, &self.stats);

        if cost < self.best_time {
            self.best_time = cost;
            self.best_plans.clear();
            let plan = CrossingPlan::new(self.state.path().to_vec(), cost);
            self.monitor.on_incumbent(&plan, &self.stats);
            self.best_plans.push(plan);
        } else if cost == self.best_time {
            self.best_plans
                .push(CrossingPlan::new(self.state.path().to_vec(), cost));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::no_op::NoOperationMonitor;
    use cairn_model::model::Hiker;
    use cairn_model::plan::LegCrew;

    fn roster(speeds: &[f64]) -> Roster<f64> {
        let mut roster = Roster::new();
        for (i, &speed) in speeds.iter().enumerate() {
            roster.add(Hiker::new(format!("H{}", i), speed));
        }
        roster
    }

    fn solve(speeds: &[f64], length: f64) -> ExhaustiveOutcome<f64> {
        let mut monitor = NoOperationMonitor::new();
        ExhaustiveCrossingSolver::new().solve(
            &roster(speeds),
            &Bridge::new("bridge", length),
            &mut monitor,
        )
    }

    fn solve_unpruned(speeds: &[f64], length: f64) -> ExhaustiveOutcome<f64> {
        let mut monitor = NoOperationMonitor::new();
        ExhaustiveCrossingSolver::new().with_pruning(false).solve(
            &roster(speeds),
            &Bridge::new("bridge", length),
            &mut monitor,
        )
    }

    #[test]
    fn test_empty_roster_crosses_in_zero_time() {
        let outcome = solve(&[], 100.0);
        assert_eq!(outcome.crossing_time(), 0.0);
        assert_eq!(outcome.plans().len(), 1);
        assert_eq!(outcome.plans()[0].num_legs(), 0);
        assert_eq!(outcome.statistics().leaf_paths, 1);
    }

    #[test]
    fn test_single_hiker_crosses_solo() {
        let outcome = solve(&[5.0], 100.0);
        assert_eq!(outcome.crossing_time(), 20.0);
        assert_eq!(outcome.plans().len(), 1);

        let plan = &outcome.plans()[0];
        assert_eq!(plan.num_legs(), 1);
        assert!(matches!(plan.legs()[0].crew(), LegCrew::Solo(_)));
    }

    #[test]
    fn test_pair_paces_at_the_slower_hiker() {
        let outcome = solve(&[10.0, 50.0], 100.0);
        assert_eq!(outcome.crossing_time(), 10.0);
        assert_eq!(outcome.plans().len(), 1);
        assert_eq!(outcome.plans()[0].num_legs(), 1);
    }

    #[test]
    fn test_three_hikers_optimum_and_ties() {
        // Speeds 10, 20, 40 over 60. Two optimal schedules exist: the
        // fastest hiker ferries each slower one in either order, for
        // 60/40 + 60/20 + 60/10 total.
        let outcome = solve(&[10.0, 20.0, 40.0], 60.0);
        assert_eq!(outcome.crossing_time(), 10.5);
        assert_eq!(outcome.plans().len(), 2);
        assert_eq!(outcome.statistics().tied_optima, 2);

        for plan in outcome.plans() {
            assert_eq!(plan.total_time(), 10.5);
            assert_eq!(plan.num_legs(), 3);
        }
    }

    #[test]
    fn test_four_hikers_reference_fixture() {
        // Speeds 10, 20, 40, 50 over 100: optimum 19.5.
        let outcome = solve(&[10.0, 20.0, 40.0, 50.0], 100.0);
        assert_eq!(outcome.crossing_time(), 19.5);
    }

    #[test]
    fn test_straggler_reference_fixture() {
        // Speeds 10, 120, 140, 150 over 100: the two fastest shuttle, the
        // two slowest cross together.
        let expected =
            100.0 / 140.0 + 100.0 / 150.0 + 100.0 / 10.0 + 100.0 / 140.0 + 100.0 / 140.0;
        let outcome = solve(&[10.0, 120.0, 140.0, 150.0], 100.0);
        assert_eq!(outcome.crossing_time(), expected);
    }

    #[test]
    fn test_search_counters_match_enumeration() {
        // Four distinct speeds: the full enumeration has exactly 108
        // complete sequences over 271 nodes; pruning cuts both.
        let unpruned = solve_unpruned(&[7.0, 13.0, 19.0, 25.0], 100.0);
        assert_eq!(unpruned.statistics().leaf_paths, 108);
        assert_eq!(unpruned.statistics().nodes_explored, 271);
        assert_eq!(unpruned.statistics().prunings_bound, 0);
        assert_eq!(unpruned.statistics().max_depth, 5);

        let pruned = solve(&[7.0, 13.0, 19.0, 25.0], 100.0);
        assert_eq!(pruned.statistics().leaf_paths, 67);
        assert_eq!(pruned.statistics().nodes_explored, 218);
        assert!(pruned.statistics().prunings_bound > 0);
    }

    #[test]
    fn test_pruning_never_changes_the_result() {
        let fixtures: [&[f64]; 4] = [
            &[10.0, 20.0, 40.0, 50.0],
            &[10.0, 120.0, 140.0, 150.0],
            &[7.0, 13.0, 29.0, 31.0, 37.0],
            &[12.0, 12.0, 12.0, 12.0],
        ];

        for speeds in fixtures {
            let pruned = solve(speeds, 100.0);
            let unpruned = solve_unpruned(speeds, 100.0);
            assert_eq!(
                pruned.crossing_time(),
                unpruned.crossing_time(),
                "pruning changed the optimum for {:?}",
                speeds
            );
            assert!(
                pruned.statistics().nodes_explored <= unpruned.statistics().nodes_explored
            );
        }
    }

    #[test]
    fn test_equal_speeds_tie_everywhere() {
        // With identical speeds every complete sequence costs the same, so
        // the whole enumeration ties: 108 plans for four hikers.
        let outcome = solve(&[12.0, 12.0, 12.0, 12.0], 90.0);
        assert_eq!(outcome.crossing_time(), 37.5);
        assert_eq!(outcome.plans().len(), 108);
        assert_eq!(outcome.statistics().tied_optima, 108);
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let a = solve(&[10.0, 20.0, 40.0, 50.0], 100.0);
        let b = solve(&[50.0, 40.0, 10.0, 20.0], 100.0);
        assert_eq!(a.crossing_time(), b.crossing_time());
    }

    #[test]
    fn test_time_grows_with_length() {
        let short = solve(&[10.0, 20.0, 40.0], 30.0);
        let long = solve(&[10.0, 20.0, 40.0], 120.0);
        assert!(short.crossing_time() < long.crossing_time());
    }

    #[test]
    fn test_plans_are_legal_move_sequences() {
        let outcome = solve(&[10.0, 20.0, 40.0, 50.0], 100.0);

        for plan in outcome.plans() {
            // Legs alternate outbound and return, starting outbound.
            for (i, leg) in plan.legs().iter().enumerate() {
                let expected = if i % 2 == 0 {
                    LegDirection::Outbound
                } else {
                    LegDirection::Return
                };
                assert_eq!(leg.direction(), expected);
            }

            // The plan total equals the sum of its leg durations.
            let sum: f64 = plan.legs().iter().map(|l| l.duration()).sum();
            assert!((sum - plan.total_time()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_agreement_with_ferry_engine() {
        use cairn_ferry::ferry::FerrySolver;

        let ferry = FerrySolver::new();

        // Reference fixtures agree exactly.
        let exact: [&[f64]; 4] = [
            &[10.0, 50.0],
            &[10.0, 20.0, 40.0],
            &[10.0, 20.0, 40.0, 50.0],
            &[10.0, 120.0, 140.0, 150.0],
        ];
        for speeds in exact {
            let group = roster(speeds);
            let bridge = Bridge::new("bridge", 100.0);
            let mut monitor = NoOperationMonitor::new();
            let exhaustive = ExhaustiveCrossingSolver::new()
                .solve(&group, &bridge, &mut monitor)
                .crossing_time();
            assert_eq!(exhaustive, ferry.solve(&group, &bridge));
        }

        // Arbitrary speed sets agree up to association of the float sums
        // along tied-optimal paths.
        let close: [&[f64]; 3] = [
            &[7.0, 13.0, 29.0, 31.0, 37.0],
            &[3.0, 11.0, 17.0, 23.0, 42.0, 55.0],
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        ];
        for speeds in close {
            let group = roster(speeds);
            let bridge = Bridge::new("bridge", 80.0);
            let mut monitor = NoOperationMonitor::new();
            let exhaustive = ExhaustiveCrossingSolver::new()
                .solve(&group, &bridge, &mut monitor)
                .crossing_time();
            let optimized = ferry.solve(&group, &bridge);
            let rel = (exhaustive - optimized).abs() / optimized;
            assert!(
                rel < 1e-9,
                "engines disagree for {:?}: {} vs {}",
                speeds,
                exhaustive,
                optimized
            );
        }
    }
}
