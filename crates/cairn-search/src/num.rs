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

//! # Crossing Numeric Trait
//!
//! Unified numeric bounds for the crossing engines. `CrossingNumeric`
//! specifies the float capabilities required by both engines: intrinsic
//! float operations (`Float`), plus formatting for diagnostics.
//!
//! ## Motivation
//!
//! Crossing times are quotients of lengths and speeds and are inherently
//! fractional, so the engines stay generic over a float type rather than an
//! integer type. This alias collects the necessary bounds into a single
//! name, simplifying generic signatures across the workspace. In practice
//! the type is `f64` (the default throughout the tests) or `f32`.

use num_traits::Float;

/// A trait alias for numeric types that can be used by the crossing
/// engines. These are the standard float types `f32` and `f64`.
pub trait CrossingNumeric: Float + std::fmt::Debug + std::fmt::Display {}

impl<T> CrossingNumeric for T where T: Float + std::fmt::Debug + std::fmt::Display {}
