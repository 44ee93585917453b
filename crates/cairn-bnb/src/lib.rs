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

//! Cairn-BnB: exhaustive branch-and-bound crossing enumeration
//!
//! This crate implements the brute-force crossing-time engine: a
//! deterministic depth-first enumeration of every legal move sequence for
//! one bridge, pruned against the best complete sequence found so far. It
//! exists to validate the closed-form engine in `cairn_ferry`; its cost is
//! combinatorial in the roster size, so it is only ever pointed at small
//! validation rosters.
//!
//! Core flow
//! - Provide a `cairn_model::model::Roster<T>` and a `Bridge<T>`.
//! - Optionally attach a `monitor` to observe the search.
//! - Run `bnb::ExhaustiveCrossingSolver::solve`; the outcome carries the
//!   minimum crossing time, every tied-optimal `CrossingPlan`, and search
//!   statistics.
//!
//! Design highlights
//! - A search-session object encapsulates per-run state (incumbent,
//!   tied-plan set, statistics, timing); no global mutable state.
//! - Branch cost is threaded by value down the recursion, so backtracking
//!   never has to undo float arithmetic.
//! - Pruning is a performance optimization only and can be disabled to
//!   prove it never changes the result.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `state`: the per-bridge search state (crossed bitset, direction, path).
//! - `monitor`: search monitors (no-op, throttled log).
//! - `result`: the engine outcome.
//! - `stats`: lightweight counters and timing.

pub mod bnb;
pub mod monitor;
pub mod result;
pub mod state;
pub mod stats;
