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

/// A monitor that ignores every search event. Used for silent runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    /// Creates a new `NoOperationMonitor`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> CrossingSearchMonitor<T> for NoOperationMonitor
where
    T: CrossingNumeric,
{
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    fn on_enter_search(&mut self, _roster: &Roster<T>, _bridge: &Bridge<T>) {}

    fn on_exit_search(&mut self, _statistics: &ExhaustiveSolverStatistics) {}

    fn on_node(&mut self, _state: &SearchState<T>, _statistics: &ExhaustiveSolverStatistics) {}

    fn on_prune(&mut self, _state: &SearchState<T>, _statistics: &ExhaustiveSolverStatistics) {}

    fn on_leaf(&mut self, _cost: T, _statistics: &ExhaustiveSolverStatistics) {}

    fn on_incumbent(
        &mut self,
        _plan: &CrossingPlan<T>,
        _statistics: &ExhaustiveSolverStatistics,
    ) {
    }
}
