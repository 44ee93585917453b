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

//! Crossing-session orchestration.
//!
//! A `CrossingSession` owns the roster and the running total for one
//! sequence of crossing events. Hikers are appended as add-events arrive;
//! every cross-event dispatches the full roster accumulated so far to the
//! engine selected at construction and adds that bridge's time to the
//! total. The compute mode is fixed for the session's lifetime; `reset`
//! returns the session to its initial empty state without changing it.
//!
//! Sessions are single-threaded and synchronous: `cross_bridge` blocks
//! until the engine completes. Diagnostic output is gated by the session's
//! `TraceConfig` and never affects returned values.

use cairn_bnb::{
    bnb::ExhaustiveCrossingSolver,
    monitor::{log::LogSearchMonitor, no_op::NoOperationMonitor},
};
use cairn_ferry::ferry::FerrySolver;
use cairn_model::{
    event::CrossingEvent,
    model::{Bridge, Hiker, Roster},
};
use cairn_search::{num::CrossingNumeric, stats::SessionStatistics, trace::TraceConfig};

/// The engine a session dispatches crossings to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ComputeMode {
    /// The closed-form recursive engine (`cairn_ferry`). Linear after a
    /// sort; the production choice.
    #[default]
    Optimized,
    /// The exhaustive enumeration engine (`cairn_bnb`). Combinatorial;
    /// only for small validation rosters.
    Exhaustive,
}

impl std::fmt::Display for ComputeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComputeMode::Optimized => write!(f, "Optimized"),
            ComputeMode::Exhaustive => write!(f, "Exhaustive"),
        }
    }
}

/// One crossing session: a roster, a running total, and a fixed engine.
///
/// # Examples
///
/// ```rust
/// # use cairn_model::model::{Bridge, Hiker};
/// # use cairn_solver::session::{ComputeMode, CrossingSession};
///
/// let mut session: CrossingSession<f64> = CrossingSession::new(ComputeMode::Optimized);
/// session.add_hiker(Hiker::new("A", 10.0));
/// session.add_hiker(Hiker::new("B", 50.0));
///
/// let time = session.cross_bridge(&Bridge::new("1st", 100.0));
/// assert_eq!(time, 10.0);
/// assert_eq!(session.total_time(), 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct CrossingSession<T>
where
    T: CrossingNumeric,
{
    mode: ComputeMode,
    trace: TraceConfig,
    roster: Roster<T>,
    total_time: T,
    statistics: SessionStatistics,
    exhaustive: ExhaustiveCrossingSolver,
    ferry: FerrySolver,
}

impl<T> CrossingSession<T>
where
    T: CrossingNumeric,
{
    /// Creates a new session with the given compute mode, silent tracing,
    /// and pruning enabled.
    #[inline]
    pub fn new(mode: ComputeMode) -> Self {
        SessionBuilder::new().with_mode(mode).build()
    }

    /// Returns the session's compute mode.
    #[inline]
    pub fn mode(&self) -> ComputeMode {
        self.mode
    }

    /// Returns the session's trace configuration.
    #[inline]
    pub fn trace(&self) -> TraceConfig {
        self.trace
    }

    /// Returns the roster accumulated so far.
    #[inline]
    pub fn roster(&self) -> &Roster<T> {
        &self.roster
    }

    /// Returns the total crossing time accumulated over all bridges
    /// processed so far. Non-decreasing over the session's lifetime.
    #[inline]
    pub fn total_time(&self) -> T {
        self.total_time
    }

    /// Returns the session statistics.
    #[inline]
    pub fn statistics(&self) -> &SessionStatistics {
        &self.statistics
    }

    /// Appends a hiker to the roster.
    pub fn add_hiker(&mut self, hiker: Hiker<T>) {
        if self.trace.roster() {
            println!("ADD: {}", hiker);
        }
        self.roster.add(hiker);
        self.statistics.on_hiker_added();
    }

    /// Crosses one bridge with the roster accumulated so far, adds the
    /// computed time to the running total, and returns it.
    pub fn cross_bridge(&mut self, bridge: &Bridge<T>) -> T {
        if self.trace.roster() {
            println!("CROSS: {}", bridge);
            println!("{}", self.roster);

            let mut sorted = String::from("Sorted:");
            for index in self.roster.indices_by_speed_descending() {
                sorted.push(' ');
                sorted.push_str(&format!("{}", self.roster.hiker(index)));
            }
            println!("{}", sorted);
        }

        let start = std::time::Instant::now();
        let time = match self.mode {
            ComputeMode::Optimized => self.ferry.solve(&self.roster, bridge),
            ComputeMode::Exhaustive => self.cross_exhaustive(bridge),
        };
        let elapsed = start.elapsed();

        self.total_time = self.total_time + time;
        self.statistics.on_bridge_crossed();
        self.statistics.add_compute_duration(elapsed);

        if self.trace.intermediate() {
            println!("Time to cross bridge {}: {}", bridge.name(), time);
            println!("Total time to cross: {}", self.total_time);
        }
        if self.trace.timing() {
            println!("Bridge {} computed in {:.2?}", bridge.name(), elapsed);
        }

        time
    }

    /// Processes one event. Returns the bridge time for cross-events.
    pub fn process(&mut self, event: CrossingEvent<T>) -> Option<T> {
        match event {
            CrossingEvent::AddHiker(hiker) => {
                self.add_hiker(hiker);
                None
            }
            CrossingEvent::CrossBridge(bridge) => Some(self.cross_bridge(&bridge)),
        }
    }

    /// Processes an ordered stream of events.
    pub fn run<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = CrossingEvent<T>>,
    {
        for event in events {
            self.process(event);
        }
    }

    /// Clears the roster, the accumulated total, and the statistics,
    /// returning the session to its initial empty state. The compute mode
    /// and trace configuration are kept.
    pub fn reset(&mut self) {
        self.roster.clear();
        self.total_time = T::zero();
        self.statistics.reset();
    }

    fn cross_exhaustive(&mut self, bridge: &Bridge<T>) -> T {
        let outcome = if self.trace.steps() {
            let mut monitor = LogSearchMonitor::default();
            self.exhaustive.solve(&self.roster, bridge, &mut monitor)
        } else {
            let mut monitor = NoOperationMonitor::new();
            self.exhaustive.solve(&self.roster, bridge, &mut monitor)
        };

        if self.trace.steps() {
            println!(
                "Leaf paths explored: {}",
                outcome.statistics().leaf_paths
            );
            for plan in outcome.plans() {
                print!("{}", plan.describe(&self.roster));
            }
        }

        outcome.crossing_time()
    }
}

impl<T> std::fmt::Display for CrossingSession<T>
where
    T: CrossingNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "CrossingSession(mode: {}, hikers: {}, total_time: {})",
            self.mode,
            self.roster.len(),
            self.total_time
        )
    }
}

/// Builder for `CrossingSession`.
///
/// # Examples
///
/// ```rust
/// # use cairn_search::trace::TraceConfig;
/// # use cairn_solver::session::{ComputeMode, SessionBuilder};
///
/// let session = SessionBuilder::new()
///     .with_mode(ComputeMode::Exhaustive)
///     .with_trace(TraceConfig::silent())
///     .with_pruning(false)
///     .build::<f64>();
/// assert_eq!(session.mode(), ComputeMode::Exhaustive);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionBuilder {
    mode: ComputeMode,
    trace: TraceConfig,
    pruning: bool,
}

impl Default for SessionBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SessionBuilder {
    /// Creates a builder with the optimized mode, silent tracing, and
    /// pruning enabled.
    #[inline]
    pub fn new() -> Self {
        Self {
            mode: ComputeMode::Optimized,
            trace: TraceConfig::silent(),
            pruning: true,
        }
    }

    /// Sets the compute mode.
    #[inline]
    pub fn with_mode(mut self, mode: ComputeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the trace configuration.
    #[inline]
    pub fn with_trace(mut self, trace: TraceConfig) -> Self {
        self.trace = trace;
        self
    }

    /// Configures pruning for the exhaustive engine. No effect in
    /// optimized mode.
    #[inline]
    pub fn with_pruning(mut self, yes: bool) -> Self {
        self.pruning = yes;
        self
    }

    /// Builds the session.
    pub fn build<T>(self) -> CrossingSession<T>
    where
        T: CrossingNumeric,
    {
        CrossingSession {
            mode: self.mode,
            trace: self.trace,
            roster: Roster::new(),
            total_time: T::zero(),
            statistics: SessionStatistics::default(),
            exhaustive: ExhaustiveCrossingSolver::new().with_pruning(self.pruning),
            ferry: FerrySolver::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_model::loading::EventReader;

    fn session(mode: ComputeMode) -> CrossingSession<f64> {
        CrossingSession::new(mode)
    }

    fn add_speeds(session: &mut CrossingSession<f64>, speeds: &[f64]) {
        for (i, &speed) in speeds.iter().enumerate() {
            session.add_hiker(Hiker::new(format!("H{}", i), speed));
        }
    }

    #[test]
    fn test_two_hikers_pace_at_the_slower_one() {
        for mode in [ComputeMode::Optimized, ComputeMode::Exhaustive] {
            let mut session = session(mode);
            add_speeds(&mut session, &[10.0, 50.0]);
            let time = session.cross_bridge(&Bridge::new("1st", 100.0));
            assert_eq!(time, 10.0, "mode {}", mode);
            assert_eq!(session.total_time(), 10.0);
        }
    }

    #[test]
    fn test_reference_fixture_agrees_across_modes() {
        for (speeds, expected) in [
            (&[10.0, 20.0, 40.0, 50.0][..], 19.5),
            (
                &[10.0, 120.0, 140.0, 150.0][..],
                100.0 / 140.0 + 100.0 / 150.0 + 100.0 / 10.0 + 100.0 / 140.0 + 100.0 / 140.0,
            ),
        ] {
            let mut optimized = session(ComputeMode::Optimized);
            let mut exhaustive = session(ComputeMode::Exhaustive);
            add_speeds(&mut optimized, speeds);
            add_speeds(&mut exhaustive, speeds);

            let bridge = Bridge::new("1st", 100.0);
            assert_eq!(optimized.cross_bridge(&bridge), expected);
            assert_eq!(exhaustive.cross_bridge(&bridge), expected);
        }
    }

    #[test]
    fn test_total_accumulates_over_bridges() {
        // Two bridges in sequence: the total is the exact sum of the
        // per-bridge times, each computed against the roster at that point.
        let mut session = session(ComputeMode::Optimized);
        add_speeds(&mut session, &[10.0, 20.0, 40.0, 50.0]);

        let first = session.cross_bridge(&Bridge::new("first", 100.0));
        let second = session.cross_bridge(&Bridge::new("second", 250.0));

        assert_eq!(first, 19.5);
        assert_eq!(second, 250.0 / 100.0 * 19.5);
        assert_eq!(session.total_time(), first + second);
        assert_eq!(session.statistics().bridges_crossed, 2);
    }

    #[test]
    fn test_roster_grows_between_bridges() {
        let mut session = session(ComputeMode::Optimized);
        add_speeds(&mut session, &[10.0, 50.0]);
        let first = session.cross_bridge(&Bridge::new("first", 100.0));

        // A third hiker joins; the next crossing includes them.
        session.add_hiker(Hiker::new("late", 20.0));
        let second = session.cross_bridge(&Bridge::new("second", 100.0));

        assert_eq!(first, 10.0);
        assert_eq!(second, 100.0 / 50.0 + 100.0 / 20.0 + 100.0 / 10.0);
        assert_eq!(session.total_time(), first + second);
    }

    #[test]
    fn test_empty_roster_crosses_in_zero_time() {
        for mode in [ComputeMode::Optimized, ComputeMode::Exhaustive] {
            let mut session = session(mode);
            let time = session.cross_bridge(&Bridge::new("1st", 100.0));
            assert_eq!(time, 0.0, "mode {}", mode);
        }
    }

    #[test]
    fn test_single_hiker_policy() {
        for mode in [ComputeMode::Optimized, ComputeMode::Exhaustive] {
            let mut session = session(mode);
            session.add_hiker(Hiker::new("A", 5.0));
            let time = session.cross_bridge(&Bridge::new("1st", 100.0));
            assert_eq!(time, 20.0, "mode {}", mode);
        }
    }

    #[test]
    fn test_process_and_run_events() {
        let mut session = session(ComputeMode::Optimized);

        assert_eq!(
            session.process(CrossingEvent::AddHiker(Hiker::new("A", 10.0))),
            None
        );
        assert_eq!(
            session.process(CrossingEvent::AddHiker(Hiker::new("B", 50.0))),
            None
        );
        assert_eq!(
            session.process(CrossingEvent::CrossBridge(Bridge::new("1st", 100.0))),
            Some(10.0)
        );

        let mut batch_session = self::session(ComputeMode::Optimized);
        batch_session.run(vec![
            CrossingEvent::AddHiker(Hiker::new("A", 10.0)),
            CrossingEvent::AddHiker(Hiker::new("B", 50.0)),
            CrossingEvent::CrossBridge(Bridge::new("1st", 100.0)),
        ]);
        assert_eq!(batch_session.total_time(), session.total_time());
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = session(ComputeMode::Exhaustive);
        add_speeds(&mut session, &[10.0, 20.0]);
        session.cross_bridge(&Bridge::new("1st", 100.0));
        assert!(session.total_time() > 0.0);

        session.reset();
        assert_eq!(session.total_time(), 0.0);
        assert!(session.roster().is_empty());
        assert_eq!(session.statistics().bridges_crossed, 0);
        assert_eq!(session.mode(), ComputeMode::Exhaustive);
    }

    #[test]
    fn test_total_is_non_decreasing() {
        let mut session = session(ComputeMode::Optimized);
        add_speeds(&mut session, &[10.0, 20.0, 40.0]);

        let mut previous = session.total_time();
        for length in [30.0, 60.0, 90.0] {
            session.cross_bridge(&Bridge::new("bridge", length));
            assert!(session.total_time() >= previous);
            previous = session.total_time();
        }
    }

    #[test]
    fn test_add_order_does_not_change_totals() {
        let mut forward = session(ComputeMode::Optimized);
        let mut backward = session(ComputeMode::Optimized);
        add_speeds(&mut forward, &[10.0, 20.0, 40.0, 50.0]);
        add_speeds(&mut backward, &[50.0, 40.0, 20.0, 10.0]);

        let bridge = Bridge::new("1st", 100.0);
        assert_eq!(
            forward.cross_bridge(&bridge),
            backward.cross_bridge(&bridge)
        );
    }

    #[test]
    fn test_engines_agree_over_loaded_config() {
        // The validation pass of the original tool: both engines must
        // produce the same total for the same small config before the
        // optimized engine is trusted on its own.
        let config = "
hikers:
  - name: A
    speed: 10
  - name: B
    speed: 20
  - name: C
    speed: 40
  - name: D
    speed: 50
bridge:
  - name: first
    length: 100
hikers:
  - name: E
    speed: 30
bridge:
  - name: second
    length: 60
";
        let batch = EventReader::new().from_str::<f64>(config).expect("load");
        assert!(batch.skipped().is_empty());

        let mut optimized = session(ComputeMode::Optimized);
        let mut exhaustive = session(ComputeMode::Exhaustive);
        optimized.run(batch.events().to_vec());
        exhaustive.run(batch.events().to_vec());

        let rel = (optimized.total_time() - exhaustive.total_time()).abs()
            / exhaustive.total_time();
        assert!(
            rel < 1e-9,
            "engines disagree: {} vs {}",
            optimized.total_time(),
            exhaustive.total_time()
        );
        assert_eq!(optimized.statistics().hikers_added, 5);
        assert_eq!(optimized.statistics().bridges_crossed, 2);
    }

    #[test]
    fn test_verbose_tracing_does_not_change_results() {
        // Every trace gate on, both engines: diagnostics go to stdout and
        // must not affect the returned times.
        let mut silent = session(ComputeMode::Exhaustive);
        let mut verbose = SessionBuilder::new()
            .with_mode(ComputeMode::Exhaustive)
            .with_trace(TraceConfig::verbose())
            .build::<f64>();

        add_speeds(&mut silent, &[10.0, 20.0, 40.0]);
        add_speeds(&mut verbose, &[10.0, 20.0, 40.0]);

        let bridge = Bridge::new("1st", 60.0);
        assert_eq!(silent.cross_bridge(&bridge), verbose.cross_bridge(&bridge));
        assert_eq!(silent.total_time(), verbose.total_time());
    }

    #[test]
    fn test_builder_configuration() {
        let session = SessionBuilder::new()
            .with_mode(ComputeMode::Exhaustive)
            .with_trace(TraceConfig::silent().with_intermediate(true))
            .with_pruning(false)
            .build::<f64>();

        assert_eq!(session.mode(), ComputeMode::Exhaustive);
        assert!(session.trace().intermediate());
        assert!(!session.trace().roster());
    }

    #[test]
    fn test_display() {
        let mut session = session(ComputeMode::Optimized);
        add_speeds(&mut session, &[10.0, 50.0]);
        assert_eq!(
            format!("{}", session),
            "CrossingSession(mode: Optimized, hikers: 2, total_time: 0)"
        );
    }
}
