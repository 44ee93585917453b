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

//! Domain data for the bridge-crossing problem.
//!
//! This module defines the validated value types consumed by the engines:
//! `Hiker` (a name and a positive crossing speed), `Bridge` (a name and a
//! positive length), and the session `Roster` that accumulates hikers over
//! the lifetime of a crossing session. A `Complexity` gauge estimates the
//! size of the exhaustive search space for a roster in logarithmic space.
//!
//! Invariants are enforced eagerly: constructors reject non-positive or
//! non-finite numeric values so that downstream engines can assume clean
//! inputs throughout.

use crate::index::HikerIndex;
use num_traits::Float;
use std::cmp::Ordering;

/// One member of the crossing group.
///
/// A hiker has a display `name` (used for diagnostics and move narratives
/// only) and a crossing `speed` expressed as distance per time unit. The
/// time a hiker needs for a bridge of length `L` is `L / speed`.
///
/// # Invariants
///
/// `speed` is strictly positive and finite, checked at construction.
///
/// # Examples
///
/// ```rust
/// # use cairn_model::model::Hiker;
///
/// let hiker = Hiker::new("A", 100.0f64);
/// assert_eq!(hiker.name(), "A");
/// assert_eq!(hiker.speed(), 100.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Hiker<T>
where
    T: Float,
{
    name: String,
    speed: T,
}

impl<T> Hiker<T>
where
    T: Float + std::fmt::Display,
{
    /// Creates a new `Hiker`.
    ///
    /// # Panics
    ///
    /// Panics if `speed` is not strictly positive and finite.
    pub fn new<S: Into<String>>(name: S, speed: T) -> Self {
        assert!(
            speed > T::zero() && speed.is_finite(),
            "called `Hiker::new` with a non-positive or non-finite speed: {}",
            speed
        );

        Self {
            name: name.into(),
            speed,
        }
    }

    /// Returns the hiker's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the hiker's crossing speed.
    #[inline]
    pub fn speed(&self) -> T {
        self.speed
    }
}

impl<T> std::fmt::Display for Hiker<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}:{})", self.name, self.speed)
    }
}

/// One bridge encountered by the crossing group.
///
/// A bridge has a display `name` and a `length` expressed in the same
/// distance unit as the hiker speeds. Bridges are ephemeral: one is
/// constructed per cross-event, consumed by the selected engine, and
/// discarded.
///
/// # Invariants
///
/// `length` is strictly positive and finite, checked at construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Bridge<T>
where
    T: Float,
{
    name: String,
    length: T,
}

impl<T> Bridge<T>
where
    T: Float + std::fmt::Display,
{
    /// Creates a new `Bridge`.
    ///
    /// # Panics
    ///
    /// Panics if `length` is not strictly positive and finite.
    pub fn new<S: Into<String>>(name: S, length: T) -> Self {
        assert!(
            length > T::zero() && length.is_finite(),
            "called `Bridge::new` with a non-positive or non-finite length: {}",
            length
        );

        Self {
            name: name.into(),
            length,
        }
    }

    /// Returns the bridge's name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bridge's length.
    #[inline]
    pub fn length(&self) -> T {
        self.length
    }
}

impl<T> std::fmt::Display for Bridge<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bridge({}, length: {})", self.name, self.length)
    }
}

/// The ordered collection of all hikers known to a session.
///
/// Hikers are appended in event order and never removed; engines address
/// them by `HikerIndex` (roster position). The roster also provides the
/// speed-descending ordering used by the optimized engine, stable for equal
/// speeds.
///
/// # Examples
///
/// ```rust
/// # use cairn_model::model::{Hiker, Roster};
/// # use cairn_model::index::HikerIndex;
///
/// let mut roster = Roster::new();
/// roster.add(Hiker::new("A", 10.0f64));
/// roster.add(Hiker::new("B", 50.0f64));
/// assert_eq!(roster.len(), 2);
/// assert_eq!(roster.hiker(HikerIndex::new(1)).name(), "B");
///
/// // Fastest first.
/// assert_eq!(roster.speeds_descending(), vec![50.0, 10.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster<T>
where
    T: Float,
{
    hikers: Vec<Hiker<T>>,
}

impl<T> Roster<T>
where
    T: Float + std::fmt::Display,
{
    /// Creates an empty roster.
    #[inline]
    pub fn new() -> Self {
        Self { hikers: Vec::new() }
    }

    /// Appends a hiker to the roster.
    #[inline]
    pub fn add(&mut self, hiker: Hiker<T>) {
        self.hikers.push(hiker);
    }

    /// Returns the number of hikers in the roster.
    #[inline]
    pub fn len(&self) -> usize {
        self.hikers.len()
    }

    /// Returns `true` if the roster holds no hikers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hikers.is_empty()
    }

    /// Returns the hiker at the given roster position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..len()`.
    #[inline]
    pub fn hiker(&self, index: HikerIndex) -> &Hiker<T> {
        debug_assert!(
            index.get() < self.len(),
            "called `Roster::hiker` with hiker index out of bounds: the len is {} but the index is {}",
            self.len(),
            index.get()
        );

        &self.hikers[index.get()]
    }

    /// Returns the speed of the hiker at the given roster position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..len()`.
    #[inline]
    pub fn speed(&self, index: HikerIndex) -> T {
        self.hiker(index).speed()
    }

    /// Returns an iterator over the hikers in roster order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Hiker<T>> {
        self.hikers.iter()
    }

    /// Returns all speeds sorted descending (fastest first).
    ///
    /// The sort is stable, so hikers with equal speeds keep their relative
    /// roster order.
    pub fn speeds_descending(&self) -> Vec<T> {
        let mut speeds: Vec<T> = self.hikers.iter().map(|h| h.speed()).collect();
        speeds.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        speeds
    }

    /// Returns roster positions ordered by speed descending (fastest first).
    ///
    /// The sort is stable, so hikers with equal speeds keep their relative
    /// roster order.
    pub fn indices_by_speed_descending(&self) -> Vec<HikerIndex> {
        let mut indices: Vec<HikerIndex> = (0..self.len()).map(HikerIndex::new).collect();
        indices.sort_by(|a, b| {
            self.hikers[b.get()]
                .speed()
                .partial_cmp(&self.hikers[a.get()].speed())
                .unwrap_or(Ordering::Equal)
        });
        indices
    }

    /// Returns the exhaustive search-space complexity for this roster.
    #[inline]
    pub fn complexity(&self) -> Complexity {
        Complexity::new(self.len())
    }

    /// Removes all hikers from the roster.
    #[inline]
    pub fn clear(&mut self) {
        self.hikers.clear();
    }
}

impl<T> std::fmt::Display for Roster<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Hikers:")?;
        for hiker in &self.hikers {
            write!(f, " {}", hiker)?;
        }
        Ok(())
    }
}

/// Represents the theoretical search space size of the exhaustive
/// crossing enumeration.
///
/// Move sequences strictly alternate between outbound pair crossings and
/// solo returns, so the branching factor at every tree level depends only
/// on the depth. The number of complete sequences is therefore the exact
/// product of per-level branching factors:
/// $\binom{l}{2}$ choices while $l \ge 2$ hikers remain on the near side,
/// one solo choice for a last lone hiker, and $r$ return choices with $r$
/// hikers across.
///
/// Since this product grows super-exponentially, the value is stored in
/// **Logarithmic Space** ($\log_{10}$).
///
/// # Examples
///
/// ```rust
/// # use cairn_model::model::Complexity;
///
/// // Four hikers admit exactly 108 complete move sequences.
/// let complexity = Complexity::new(4);
/// assert!((complexity.raw() - 108f64.log10()).abs() < 1e-12);
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct Complexity {
    /// The base-10 logarithm of the total number of complete move sequences.
    log_val: f64,
}

impl Complexity {
    /// Calculates the complexity for a given roster size.
    pub fn new(num_hikers: usize) -> Self {
        // Walk one outbound/return round at a time, accumulating the
        // branching factor of each level in log space.
        let mut total_log = 0.0;
        let mut left = num_hikers;
        let mut right = 0usize;

        while left > 0 {
            // Outbound: an unordered pair, or a final solo crossing.
            if left == 1 {
                left = 0;
                right += 1;
            } else {
                let pairs = (left * (left - 1) / 2) as f64;
                total_log += pairs.log10();
                left -= 2;
                right += 2;
            }

            // Return: any single hiker already across walks the lantern back.
            if left > 0 {
                total_log += (right as f64).log10();
                right -= 1;
                left += 1;
            }
        }

        Complexity { log_val: total_log }
    }

    /// Returns the percentage of the search space that was actually explored.
    /// Returns `None` if the space is too massive to represent as `f64`.
    pub fn coverage(&self, leaves_explored: u64) -> Option<f64> {
        if self.log_val > 15.0 {
            return Some(0.0);
        }

        let total_size = 10.0_f64.powf(self.log_val);
        if total_size == 0.0 {
            return None;
        }

        Some((leaves_explored as f64 / total_size) * 100.0)
    }

    /// Returns the exponent (order of magnitude).
    #[inline]
    pub fn exponent(&self) -> u64 {
        self.log_val.floor() as u64
    }

    /// Returns the mantissa (coefficient).
    #[inline]
    pub fn mantissa(&self) -> f64 {
        let fractional_part = self.log_val - self.log_val.floor();
        10.0_f64.powf(fractional_part)
    }

    /// Returns the raw log10 value.
    #[inline]
    pub fn raw(&self) -> f64 {
        self.log_val
    }
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} × 10^{}", self.mantissa(), self.exponent())
    }
}

impl std::fmt::Debug for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Complexity(log10={:.4})", self.log_val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hi(i: usize) -> HikerIndex {
        HikerIndex::new(i)
    }

    #[test]
    fn test_hiker_accessors() {
        let hiker = Hiker::new("A", 42.5f64);
        assert_eq!(hiker.name(), "A");
        assert_eq!(hiker.speed(), 42.5);
        assert_eq!(format!("{}", hiker), "(A:42.5)");
    }

    #[test]
    #[should_panic(expected = "called `Hiker::new` with a non-positive or non-finite speed")]
    fn test_hiker_rejects_zero_speed() {
        let _ = Hiker::new("A", 0.0f64);
    }

    #[test]
    #[should_panic(expected = "called `Hiker::new` with a non-positive or non-finite speed")]
    fn test_hiker_rejects_infinite_speed() {
        let _ = Hiker::new("A", f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "called `Bridge::new` with a non-positive or non-finite length")]
    fn test_bridge_rejects_negative_length() {
        let _ = Bridge::new("1st", -5.0f64);
    }

    #[test]
    fn test_roster_add_and_access() {
        let mut roster = Roster::new();
        assert!(roster.is_empty());

        roster.add(Hiker::new("A", 10.0f64));
        roster.add(Hiker::new("B", 50.0));
        roster.add(Hiker::new("C", 20.0));

        assert_eq!(roster.len(), 3);
        assert_eq!(roster.hiker(hi(0)).name(), "A");
        assert_eq!(roster.speed(hi(1)), 50.0);

        let names: Vec<&str> = roster.iter().map(|h| h.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        roster.clear();
        assert!(roster.is_empty());
    }

    #[test]
    fn test_speeds_descending_is_sorted_and_stable() {
        let mut roster = Roster::new();
        roster.add(Hiker::new("A", 10.0f64));
        roster.add(Hiker::new("B", 50.0));
        roster.add(Hiker::new("C", 50.0));
        roster.add(Hiker::new("D", 20.0));

        assert_eq!(roster.speeds_descending(), vec![50.0, 50.0, 20.0, 10.0]);

        // Equal speeds keep roster order: B before C.
        let order = roster.indices_by_speed_descending();
        assert_eq!(order, vec![hi(1), hi(2), hi(3), hi(0)]);
    }

    #[test]
    fn test_roster_display() {
        let mut roster = Roster::new();
        roster.add(Hiker::new("A", 10.0f64));
        roster.add(Hiker::new("B", 20.0));
        assert_eq!(format!("{}", roster), "Hikers: (A:10) (B:20)");
    }

    #[test]
    fn test_complexity_small_rosters() {
        // Zero, one or two hikers admit exactly one complete sequence.
        assert_eq!(Complexity::new(0).raw(), 0.0);
        assert_eq!(Complexity::new(1).raw(), 0.0);
        assert_eq!(Complexity::new(2).raw(), 0.0);

        // Three hikers: 3 pairs, 2 returns, 1 final pair -> 6 sequences.
        assert!((Complexity::new(3).raw() - 6f64.log10()).abs() < 1e-12);

        // Four hikers: 6 * 2 * 3 * 3 * 1 = 108 sequences.
        assert!((Complexity::new(4).raw() - 108f64.log10()).abs() < 1e-12);

        // Five hikers: 4320 sequences.
        assert!((Complexity::new(5).raw() - 4320f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn test_complexity_coverage() {
        let complexity = Complexity::new(4);
        let coverage = complexity.coverage(108).expect("coverage representable");
        assert!((coverage - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_complexity_display() {
        let complexity = Complexity::new(4);
        // 108 = 1.08 × 10^2
        assert_eq!(format!("{}", complexity), "1.08 × 10^2");
    }
}
