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

//! # Cairn Model
//!
//! **The Core Domain Model for the Cairn Bridge-Crossing Solver.**
//!
//! This crate defines the fundamental data structures used to represent the
//! **bridge-and-torch crossing problem**: a roster of hikers with distinct
//! speeds must cross a sequence of bridges, at most two at a time, sharing a
//! single lantern that has to be walked back between crossings. It serves as
//! the data interchange layer between the problem definition (user input)
//! and the solving engines (`cairn_bnb`, `cairn_ferry`).
//!
//! ## Architecture
//!
//! * **`index`**: Strongly-typed roster positions (`HikerIndex`) to prevent
//!   logical indexing errors.
//! * **`model`**: `Hiker`, `Bridge` and the session `Roster`, plus the
//!   log-space `Complexity` gauge of the exhaustive search space.
//! * **`event`**: The `CrossingEvent` stream consumed by a session.
//! * **`plan`**: Typed move sequences (`CrossingLeg`, `CrossingPlan`) with a
//!   human-readable narrative renderer.
//! * **`loading`**: The `EventReader` text-config loader.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Roster positions are a distinct index type.
//! 2.  **Fail-Fast**: Constructors validate domain invariants eagerly
//!     (positive, finite speeds and lengths) so the engines never encounter
//!     an invalid value.
//! 3.  **Genericity**: All numeric data is generic over a float type, in
//!     practice `f64` or `f32`.

pub mod event;
pub mod index;
pub mod loading;
pub mod model;
pub mod plan;
