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

//! Typed move sequences for one bridge crossing.
//!
//! A `CrossingLeg` records one directional movement across the bridge: an
//! outbound crew of one or two hikers, or a solo return walking the lantern
//! back. A `CrossingPlan` is a complete leg sequence together with its total
//! time, and can render a human-readable narrative against a roster for
//! diagnostics. The exhaustive engine reports every tied-optimal plan it
//! finds as a `CrossingPlan`.

use crate::index::HikerIndex;
use crate::model::Roster;
use num_traits::Float;

/// The direction of one leg.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LegDirection {
    /// Near side to far side (carries the lantern across).
    Outbound,
    /// Far side back to the near side (returns the lantern).
    Return,
}

impl std::fmt::Display for LegDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LegDirection::Outbound => write!(f, "Outbound"),
            LegDirection::Return => write!(f, "Return"),
        }
    }
}

/// The crew moving in one leg: an unordered pair, or a single hiker.
///
/// Returns are always solo. Outbound legs are pairs, except for the
/// degenerate solo crossing of a roster's last remaining hiker.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LegCrew {
    /// Two hikers crossing together, pacing at the slower one.
    Pair(HikerIndex, HikerIndex),
    /// A single hiker.
    Solo(HikerIndex),
}

impl LegCrew {
    /// Returns `true` if the given hiker is part of this crew.
    #[inline]
    pub fn contains(&self, hiker: HikerIndex) -> bool {
        match *self {
            LegCrew::Pair(a, b) => a == hiker || b == hiker,
            LegCrew::Solo(a) => a == hiker,
        }
    }

    /// Returns the number of hikers in this crew.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            LegCrew::Pair(_, _) => 2,
            LegCrew::Solo(_) => 1,
        }
    }

    /// Returns `true` if this crew is empty. A crew never is; this exists
    /// for symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// One directional movement of one or two hikers across the bridge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CrossingLeg<T> {
    direction: LegDirection,
    crew: LegCrew,
    duration: T,
}

impl<T> CrossingLeg<T>
where
    T: Float,
{
    /// Creates an outbound leg for a pair of hikers.
    #[inline]
    pub fn outbound_pair(first: HikerIndex, second: HikerIndex, duration: T) -> Self {
        debug_assert!(
            first != second,
            "called `CrossingLeg::outbound_pair` with a duplicated hiker index: {}",
            first.get()
        );

        Self {
            direction: LegDirection::Outbound,
            crew: LegCrew::Pair(first, second),
            duration,
        }
    }

    /// Creates an outbound leg for a single hiker (degenerate roster case).
    #[inline]
    pub fn outbound_solo(hiker: HikerIndex, duration: T) -> Self {
        Self {
            direction: LegDirection::Outbound,
            crew: LegCrew::Solo(hiker),
            duration,
        }
    }

    /// Creates a return leg for a single hiker walking the lantern back.
    #[inline]
    pub fn return_solo(hiker: HikerIndex, duration: T) -> Self {
        Self {
            direction: LegDirection::Return,
            crew: LegCrew::Solo(hiker),
            duration,
        }
    }

    /// Returns the direction of this leg.
    #[inline]
    pub fn direction(&self) -> LegDirection {
        self.direction
    }

    /// Returns the crew of this leg.
    #[inline]
    pub fn crew(&self) -> LegCrew {
        self.crew
    }

    /// Returns the duration of this leg.
    #[inline]
    pub fn duration(&self) -> T {
        self.duration
    }
}

/// A complete move sequence for one bridge, with its total time.
///
/// Plans are produced by the exhaustive engine; `total_time` equals the sum
/// of the leg durations in leg order.
#[derive(Clone, Debug, PartialEq)]
pub struct CrossingPlan<T> {
    legs: Vec<CrossingLeg<T>>,
    total_time: T,
}

impl<T> CrossingPlan<T>
where
    T: Float + std::fmt::Display,
{
    /// Constructs a new `CrossingPlan`.
    #[inline]
    pub fn new(legs: Vec<CrossingLeg<T>>, total_time: T) -> Self {
        Self { legs, total_time }
    }

    /// Returns the legs of this plan in move order.
    #[inline]
    pub fn legs(&self) -> &[CrossingLeg<T>] {
        &self.legs
    }

    /// Returns the number of legs in this plan.
    #[inline]
    pub fn num_legs(&self) -> usize {
        self.legs.len()
    }

    /// Returns the total time of this plan.
    #[inline]
    pub fn total_time(&self) -> T {
        self.total_time
    }

    /// Renders a human-readable narrative of this plan against a roster.
    ///
    /// Each line shows the near side, the moving crew with the leg duration,
    /// the far side, and the running cost, in the style of:
    ///
    /// ```text
    ///      C D -- A, B (5) -->  A B, cost: 5
    ///     A C D <-- A (10) --  B, cost: 15
    /// ```
    ///
    /// # Panics
    ///
    /// Panics in debug builds if a leg references a hiker outside the
    /// roster.
    pub fn describe(&self, roster: &Roster<T>) -> String {
        let mut crossed = vec![false; roster.len()];
        let mut cost = T::zero();
        let mut out = String::new();

        let names_for = |crossed: &[bool], side: bool| -> String {
            let mut names = String::new();
            for (i, &c) in crossed.iter().enumerate() {
                if c == side {
                    names.push(' ');
                    names.push_str(roster.hiker(HikerIndex::new(i)).name());
                }
            }
            names
        };

        let crew_names = |crew: LegCrew| -> String {
            match crew {
                LegCrew::Pair(a, b) => format!(
                    "{}, {}",
                    roster.hiker(a).name(),
                    roster.hiker(b).name()
                ),
                LegCrew::Solo(a) => roster.hiker(a).name().to_string(),
            }
        };

        for leg in &self.legs {
            cost = cost + leg.duration();
            match leg.direction() {
                LegDirection::Outbound => {
                    let left_before = names_for(&crossed, false);
                    match leg.crew() {
                        LegCrew::Pair(a, b) => {
                            debug_assert!(a.get() < roster.len() && b.get() < roster.len());
                            crossed[a.get()] = true;
                            crossed[b.get()] = true;
                        }
                        LegCrew::Solo(a) => {
                            debug_assert!(a.get() < roster.len());
                            crossed[a.get()] = true;
                        }
                    }
                    let right_after = names_for(&crossed, true);
                    out.push_str(&format!(
                        "   {} -- {} ({}) --> {}, cost: {}\n",
                        left_before,
                        crew_names(leg.crew()),
                        leg.duration(),
                        right_after,
                        cost
                    ));
                }
                LegDirection::Return => {
                    if let LegCrew::Solo(a) = leg.crew() {
                        debug_assert!(a.get() < roster.len());
                        crossed[a.get()] = false;
                    }
                    let left_after = names_for(&crossed, false);
                    let right_after = names_for(&crossed, true);
                    out.push_str(&format!(
                        "   {} <-- {} ({}) -- {}, cost: {}\n",
                        left_after,
                        crew_names(leg.crew()),
                        leg.duration(),
                        right_after,
                        cost
                    ));
                }
            }
        }

        out.push_str(&format!("   Total cost: {}\n", self.total_time));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Hiker;

    fn hi(i: usize) -> HikerIndex {
        HikerIndex::new(i)
    }

    fn roster() -> Roster<f64> {
        let mut roster = Roster::new();
        roster.add(Hiker::new("A", 10.0));
        roster.add(Hiker::new("B", 20.0));
        roster
    }

    #[test]
    fn test_leg_accessors() {
        let leg = CrossingLeg::outbound_pair(hi(0), hi(1), 5.0f64);
        assert_eq!(leg.direction(), LegDirection::Outbound);
        assert_eq!(leg.crew(), LegCrew::Pair(hi(0), hi(1)));
        assert_eq!(leg.duration(), 5.0);

        let back = CrossingLeg::return_solo(hi(0), 10.0f64);
        assert_eq!(back.direction(), LegDirection::Return);
        assert!(back.crew().contains(hi(0)));
        assert!(!back.crew().contains(hi(1)));
        assert_eq!(back.crew().len(), 1);
    }

    #[test]
    fn test_plan_totals() {
        let legs = vec![CrossingLeg::outbound_pair(hi(0), hi(1), 10.0f64)];
        let plan = CrossingPlan::new(legs, 10.0);
        assert_eq!(plan.num_legs(), 1);
        assert_eq!(plan.total_time(), 10.0);
    }

    #[test]
    fn test_describe_narrative() {
        // A and B cross, A walks back.
        let legs = vec![
            CrossingLeg::outbound_pair(hi(0), hi(1), 10.0f64),
            CrossingLeg::return_solo(hi(0), 10.0),
        ];
        let plan = CrossingPlan::new(legs, 20.0);
        let narrative = plan.describe(&roster());

        assert!(narrative.contains("-- A, B (10) -->  A B, cost: 10"));
        assert!(narrative.contains("A <-- A (10) --  B, cost: 20"));
        assert!(narrative.contains("Total cost: 20"));
    }

    #[test]
    fn test_describe_empty_plan() {
        let plan: CrossingPlan<f64> = CrossingPlan::new(Vec::new(), 0.0);
        assert_eq!(plan.describe(&roster()), "   Total cost: 0\n");
    }
}
