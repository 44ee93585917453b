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

//! Search state management for the exhaustive crossing engine.
//!
//! This module provides `SearchState`, a compact, mutable container for
//! tracking one in-progress enumeration branch: which hikers have crossed,
//! which direction the next leg moves, and the typed leg path taken so far.
//!
//! Key responsibilities:
//! - Maintain side membership per hiker via a `FixedBitSet`.
//! - Alternate the leg direction as legs are applied and undone.
//! - Record the branch's leg path for plan construction at leaves.
//!
//! The accumulated branch cost is deliberately NOT part of this state: it
//! is threaded by value down the recursion, so undoing a leg never has to
//! reverse float arithmetic.
//!
//! Debug assertions document the invariants (crew on the correct side,
//! direction matching the applied leg); callers uphold them in release
//! builds.

use cairn_model::{
    index::HikerIndex,
    plan::{CrossingLeg, LegCrew, LegDirection},
};
use fixedbitset::FixedBitSet;
use num_traits::Float;
use smallvec::SmallVec;

/// Inline capacity for side snapshots. Oracle rosters are small; larger
/// rosters spill to the heap transparently.
const SIDE_SNAPSHOT_INLINE: usize = 8;

/// A snapshot of the hikers on one side of the bridge.
pub type SideSnapshot = SmallVec<[HikerIndex; SIDE_SNAPSHOT_INLINE]>;

/// A compact, mutable container holding one enumeration branch of the
/// exhaustive crossing search.
///
/// The state tracks:
/// - `crossed`: bitset with one bit per roster position; set means the
///   hiker is on the far side.
/// - `direction`: the direction of the next leg.
/// - `path`: the legs applied on the current branch, in move order.
///
/// Invariants (debug-checked):
/// - `num_crossed` equals the number of set bits in `crossed`.
/// - Applied legs match `direction`, and their crew is on the moving side.
#[derive(Debug, Clone)]
pub struct SearchState<T> {
    crossed: FixedBitSet,
    path: Vec<CrossingLeg<T>>,
    direction: LegDirection,
    num_hikers: usize,
    num_crossed: usize,
}

impl<T> SearchState<T>
where
    T: Float,
{
    /// Creates a new `SearchState` with every hiker on the near side and
    /// the next leg outbound.
    #[inline]
    pub fn new(num_hikers: usize) -> Self {
        Self {
            crossed: FixedBitSet::with_capacity(num_hikers),
            path: Vec::new(),
            direction: LegDirection::Outbound,
            num_hikers,
            num_crossed: 0,
        }
    }

    /// Returns the number of hikers tracked by this state.
    #[inline]
    pub fn num_hikers(&self) -> usize {
        self.num_hikers
    }

    /// Returns the number of hikers on the near side.
    #[inline]
    pub fn num_left(&self) -> usize {
        self.num_hikers - self.num_crossed
    }

    /// Returns the number of hikers on the far side.
    #[inline]
    pub fn num_right(&self) -> usize {
        self.num_crossed
    }

    /// Returns `true` when every hiker has crossed.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.num_crossed == self.num_hikers
    }

    /// Returns the direction of the next leg.
    #[inline]
    pub fn direction(&self) -> LegDirection {
        self.direction
    }

    /// Returns the number of legs applied on the current branch.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Returns the legs applied on the current branch, in move order.
    #[inline]
    pub fn path(&self) -> &[CrossingLeg<T>] {
        &self.path
    }

    /// Returns `true` if the given hiker is on the far side.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `hiker` is out of bounds.
    #[inline]
    pub fn has_crossed(&self, hiker: HikerIndex) -> bool {
        debug_assert!(
            hiker.get() < self.num_hikers,
            "called `SearchState::has_crossed` with hiker index out of bounds: the len is {} but the index is {}",
            self.num_hikers,
            hiker.get()
        );

        self.crossed.contains(hiker.get())
    }

    /// Returns a snapshot of the hikers on the near side, ascending by
    /// roster position.
    pub fn left_snapshot(&self) -> SideSnapshot {
        (0..self.num_hikers)
            .filter(|&i| !self.crossed.contains(i))
            .map(HikerIndex::new)
            .collect()
    }

    /// Returns a snapshot of the hikers on the far side, ascending by
    /// roster position.
    pub fn right_snapshot(&self) -> SideSnapshot {
        self.crossed.ones().map(HikerIndex::new).collect()
    }

    /// Applies a leg to the state: moves its crew, records it on the path,
    /// and flips the direction.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the leg direction does not match the
    /// state's, or if a crew member is not on the moving side.
    pub fn apply_leg(&mut self, leg: CrossingLeg<T>) {
        debug_assert!(
            leg.direction() == self.direction,
            "called `SearchState::apply_leg` with a {} leg while the state expects {}",
            leg.direction(),
            self.direction
        );

        match (leg.direction(), leg.crew()) {
            (LegDirection::Outbound, LegCrew::Pair(a, b)) => {
                self.move_across(a);
                self.move_across(b);
            }
            (LegDirection::Outbound, LegCrew::Solo(a)) => {
                self.move_across(a);
            }
            (LegDirection::Return, LegCrew::Solo(a)) => {
                self.move_back(a);
            }
            (LegDirection::Return, LegCrew::Pair(_, _)) => {
                debug_assert!(false, "called `SearchState::apply_leg` with a paired return leg");
            }
        }

        self.direction = match self.direction {
            LegDirection::Outbound => LegDirection::Return,
            LegDirection::Return => LegDirection::Outbound,
        };
        self.path.push(leg);
    }

    /// Undoes the most recently applied leg, restoring crew positions and
    /// the previous direction.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if no leg has been applied.
    pub fn undo_leg(&mut self) {
        let leg = self.path.pop();
        debug_assert!(
            leg.is_some(),
            "called `SearchState::undo_leg` on a state with an empty path"
        );

        let Some(leg) = leg else {
            return;
        };

        match (leg.direction(), leg.crew()) {
            (LegDirection::Outbound, LegCrew::Pair(a, b)) => {
                self.move_back(a);
                self.move_back(b);
            }
            (LegDirection::Outbound, LegCrew::Solo(a)) => {
                self.move_back(a);
            }
            (LegDirection::Return, LegCrew::Solo(a)) => {
                self.move_across(a);
            }
            (LegDirection::Return, LegCrew::Pair(_, _)) => {}
        }

        self.direction = leg.direction();
    }

    #[inline]
    fn move_across(&mut self, hiker: HikerIndex) {
        debug_assert!(
            !self.crossed.contains(hiker.get()),
            "called `SearchState::move_across` with hiker {} already on the far side",
            hiker.get()
        );

        self.crossed.insert(hiker.get());
        self.num_crossed += 1;
    }

    #[inline]
    fn move_back(&mut self, hiker: HikerIndex) {
        debug_assert!(
            self.crossed.contains(hiker.get()),
            "called `SearchState::move_back` with hiker {} not on the far side",
            hiker.get()
        );

        self.crossed.set(hiker.get(), false);
        self.num_crossed -= 1;
    }
}

impl<T> std::fmt::Display for SearchState<T>
where
    T: Float,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchState(left: {}, right: {}, next: {}, depth: {})",
            self.num_left(),
            self.num_right(),
            self.direction,
            self.depth()
        )
    }
}
