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

use crate::stats::ExhaustiveSolverStatistics;
use cairn_model::plan::CrossingPlan;
use num_traits::Float;

/// Result of the exhaustive engine after a completed enumeration.
///
/// Carries the minimum crossing time, every move sequence tied at that
/// time (in discovery order), and the search statistics.
#[derive(Debug, Clone)]
pub struct ExhaustiveOutcome<T> {
    crossing_time: T,
    plans: Vec<CrossingPlan<T>>,
    statistics: ExhaustiveSolverStatistics,
}

impl<T> ExhaustiveOutcome<T>
where
    T: Float,
{
    /// Constructs a new outcome.
    #[inline]
    pub fn new(
        crossing_time: T,
        plans: Vec<CrossingPlan<T>>,
        statistics: ExhaustiveSolverStatistics,
    ) -> Self {
        Self {
            crossing_time,
            plans,
            statistics,
        }
    }

    /// Returns the minimum crossing time found.
    #[inline]
    pub fn crossing_time(&self) -> T {
        self.crossing_time
    }

    /// Returns every tied-optimal plan in discovery order.
    #[inline]
    pub fn plans(&self) -> &[CrossingPlan<T>] {
        &self.plans
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &ExhaustiveSolverStatistics {
        &self.statistics
    }
}

impl<T> std::fmt::Display for ExhaustiveOutcome<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ExhaustiveOutcome(crossing_time: {}, tied_plans: {})",
            self.crossing_time,
            self.plans.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_and_display() {
        let outcome: ExhaustiveOutcome<f64> = ExhaustiveOutcome::new(
            12.5,
            vec![CrossingPlan::new(Vec::new(), 12.5)],
            ExhaustiveSolverStatistics::default(),
        );

        assert_eq!(outcome.crossing_time(), 12.5);
        assert_eq!(outcome.plans().len(), 1);
        assert_eq!(outcome.statistics().nodes_explored, 0);
        assert_eq!(
            format!("{}", outcome),
            "ExhaustiveOutcome(crossing_time: 12.5, tied_plans: 1)"
        );
    }
}
