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

//! Search monitoring interface
//!
//! Declares the `CrossingSearchMonitor` trait for observing the exhaustive
//! enumeration. Callbacks track the engine lifecycle:
//! enter → {node | prune | leaf | incumbent}* → exit.
//! `ExhaustiveSolverStatistics` is provided to every callback for telemetry.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are single-threaded, like the
//!   search itself.
//! - Keep callbacks lightweight; they run inside the search hot loop.
//! - Monitors observe only. The enumeration is deterministic and runs to
//!   completion; there is no termination channel.

use crate::{state::SearchState, stats::ExhaustiveSolverStatistics};
use cairn_model::{
    model::{Bridge, Roster},
    plan::CrossingPlan,
};
use cairn_search::num::CrossingNumeric;

/// Trait for observing the search process of the exhaustive engine.
pub trait CrossingSearchMonitor<T>
where
    T: CrossingNumeric,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self, roster: &Roster<T>, bridge: &Bridge<T>);
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &ExhaustiveSolverStatistics);
    /// Called at every node of the search tree.
    fn on_node(&mut self, state: &SearchState<T>, statistics: &ExhaustiveSolverStatistics);
    /// Called when a branch is abandoned by the cost bound.
    fn on_prune(&mut self, state: &SearchState<T>, statistics: &ExhaustiveSolverStatistics);
    /// Called when a complete move sequence is reached.
    fn on_leaf(&mut self, cost: T, statistics: &ExhaustiveSolverStatistics);
    /// Called when a new best move sequence is found.
    fn on_incumbent(&mut self, plan: &CrossingPlan<T>, statistics: &ExhaustiveSolverStatistics);
}

impl<T> std::fmt::Debug for dyn CrossingSearchMonitor<T>
where
    T: CrossingNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CrossingSearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn CrossingSearchMonitor<T>
where
    T: CrossingNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CrossingSearchMonitor({})", self.name())
    }
}
