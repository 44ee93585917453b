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

//! # Cairn Solver
//!
//! High-level orchestration for crossing computations. This crate owns the
//! crossing session: it consumes the ordered event stream (hikers joining,
//! bridges encountered), dispatches each crossing to the configured engine,
//! and accumulates the total elapsed time.
//!
//! ## Modules
//!
//! - `session`: `CrossingSession` with a builder, the engine-mode switch,
//!   trace gating, and session statistics.
//!
//! ## Motivation
//!
//! The two engines answer the same question at very different cost: the
//! ferry engine is linear after a sort, the exhaustive engine is
//! combinatorial but provably minimal. A session fixes one engine for its
//! lifetime, so a validation run (exhaustive) and a production run
//! (optimized) over the same events can be compared total for total.

pub mod session;
