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

//! Diagnostic trace gates for crossing sessions.
//!
//! `TraceConfig` is an explicit configuration value held by the session
//! (and handed to the engines it drives) instead of process-wide verbosity
//! state. Each gate independently enables one category of diagnostic
//! output; none of them has any effect on returned numeric results.

/// Gates for the diagnostic output of a crossing session.
///
/// * `roster`: roster contents on add/cross events, including the
///   speed-descending order used by the optimized engine.
/// * `intermediate`: per-bridge crossing time and the cumulative total.
/// * `steps`: exhaustive-engine search details, i.e. the number of explored
///   leaf paths and the narratives of all tied-optimal move sequences.
/// * `timing`: wall-clock compute duration per bridge.
///
/// # Examples
///
/// ```rust
/// # use cairn_search::trace::TraceConfig;
///
/// let trace = TraceConfig::silent().with_intermediate(true);
/// assert!(trace.intermediate());
/// assert!(!trace.roster());
/// assert!(TraceConfig::verbose().steps());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct TraceConfig {
    trace_roster: bool,
    trace_intermediate: bool,
    trace_steps: bool,
    trace_timing: bool,
}

impl TraceConfig {
    /// Creates a configuration with every gate disabled.
    #[inline]
    pub fn silent() -> Self {
        Self::default()
    }

    /// Creates a configuration with every gate enabled.
    #[inline]
    pub fn verbose() -> Self {
        Self {
            trace_roster: true,
            trace_intermediate: true,
            trace_steps: true,
            trace_timing: true,
        }
    }

    /// Sets the roster gate.
    #[inline]
    pub fn with_roster(mut self, yes: bool) -> Self {
        self.trace_roster = yes;
        self
    }

    /// Sets the intermediate-results gate.
    #[inline]
    pub fn with_intermediate(mut self, yes: bool) -> Self {
        self.trace_intermediate = yes;
        self
    }

    /// Sets the search-steps gate.
    #[inline]
    pub fn with_steps(mut self, yes: bool) -> Self {
        self.trace_steps = yes;
        self
    }

    /// Sets the timing gate.
    #[inline]
    pub fn with_timing(mut self, yes: bool) -> Self {
        self.trace_timing = yes;
        self
    }

    /// Returns `true` if roster tracing is enabled.
    #[inline]
    pub fn roster(&self) -> bool {
        self.trace_roster
    }

    /// Returns `true` if intermediate-result tracing is enabled.
    #[inline]
    pub fn intermediate(&self) -> bool {
        self.trace_intermediate
    }

    /// Returns `true` if search-step tracing is enabled.
    #[inline]
    pub fn steps(&self) -> bool {
        self.trace_steps
    }

    /// Returns `true` if timing tracing is enabled.
    #[inline]
    pub fn timing(&self) -> bool {
        self.trace_timing
    }
}

impl std::fmt::Display for TraceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "TraceConfig(roster: {}, intermediate: {}, steps: {}, timing: {})",
            self.trace_roster, self.trace_intermediate, self.trace_steps, self.trace_timing
        )
    }
}
