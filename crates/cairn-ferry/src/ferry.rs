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

//! Closed-form recursive crossing-time reduction.
//!
//! The engine sorts the roster by speed descending (fastest first) and then
//! reduces the sorted slice two hikers at a time. At every step with four
//! or more hikers remaining, the two slowest are moved across by one of two
//! shuttle strategies, and the cheaper one is taken:
//!
//! - **Fast-pair shuttle**: the two fastest cross together, the fastest
//!   returns, the two slowest cross together, the second-fastest returns.
//!   With `t_i = length / speed_i` on the fastest-first slice this costs
//!   `t_1 + t_0 + t_{k-1} + t_1`.
//! - **Fastest-escort**: the fastest escorts the slowest across and
//!   returns, then escorts the second-slowest across and returns again,
//!   costing `t_{k-1} + t_0 + t_{k-2} + t_0`.
//!
//! Both strategies leave the two slowest hikers across and the lantern with
//! the remaining group, so the recursion continues on the first `k - 2`
//! entries of the slice. Three or fewer hikers are handled by fixed base
//! cases. The summation follows the leg order of the winning move sequence
//! exactly, so on well-behaved inputs the result is bit-identical to the
//! exhaustive engine's optimum.

use cairn_model::model::{Bridge, Roster};
use cairn_search::num::CrossingNumeric;

/// The optimized crossing-time engine.
///
/// Stateless; one instance can serve any number of crossings.
///
/// # Examples
///
/// ```rust
/// # use cairn_ferry::ferry::FerrySolver;
/// # use cairn_model::model::{Bridge, Hiker, Roster};
///
/// let mut roster = Roster::new();
/// roster.add(Hiker::new("A", 10.0f64));
/// roster.add(Hiker::new("B", 50.0));
///
/// let solver = FerrySolver::new();
/// let time = solver.solve(&roster, &Bridge::new("1st", 100.0));
///
/// // The pair paces at the slower hiker.
/// assert_eq!(time, 10.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FerrySolver;

impl FerrySolver {
    /// Creates a new `FerrySolver`.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Returns the name of this engine.
    #[inline]
    pub fn name(&self) -> &str {
        "FerrySolver"
    }

    /// Computes the crossing time for one bridge with the full roster.
    ///
    /// The roster input order is irrelevant; the engine sorts internally.
    /// Degenerate rosters have explicit policies: an empty roster crosses
    /// in zero time, a lone hiker in `length / speed`.
    pub fn solve<T>(&self, roster: &Roster<T>, bridge: &Bridge<T>) -> T
    where
        T: CrossingNumeric,
    {
        let speeds = roster.speeds_descending();
        reduce(&speeds, bridge.length())
    }
}

impl std::fmt::Display for FerrySolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FerrySolver")
    }
}

/// Reduces a fastest-first speed slice to its crossing time.
///
/// Recursion depth is bounded by half the roster size; every step removes
/// the slice's two slowest entries.
fn reduce<T>(speeds: &[T], length: T) -> T
where
    T: CrossingNumeric,
{
    debug_assert!(
        speeds.windows(2).all(|w| w[0] >= w[1]),
        "called `reduce` with an unsorted speed slice"
    );

    let k = speeds.len();
    match k {
        0 => T::zero(),
        1 => length / speeds[0],
        // Two hikers cross together, paced by the slower one.
        2 => length / speeds[1],
        // Three hikers: the fastest shuttles the lantern, and every leg is
        // paced by a distinct hiker, so the total degenerates to three solo
        // crossings.
        3 => length / speeds[0] + length / speeds[1] + length / speeds[2],
        _ => {
            let fast_pair_shuttle = length / speeds[1]
                + length / speeds[0]
                + length / speeds[k - 1]
                + length / speeds[1];
            let fastest_escort = length / speeds[k - 1]
                + length / speeds[0]
                + length / speeds[k - 2]
                + length / speeds[0];

            let step = if fast_pair_shuttle <= fastest_escort {
                fast_pair_shuttle
            } else {
                fastest_escort
            };

            // The two slowest are across; the rest still have to cross.
            step + reduce(&speeds[..k - 2], length)
        }
    }
}
