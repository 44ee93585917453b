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

use std::time::Duration;

/// Statistics collected over the lifetime of a crossing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatistics {
    /// Number of hikers added to the roster.
    pub hikers_added: u64,
    /// Number of bridges crossed.
    pub bridges_crossed: u64,
    /// Accumulated engine compute time across all crossings.
    pub compute_duration: Duration,
}

impl Default for SessionStatistics {
    fn default() -> Self {
        Self {
            hikers_added: 0,
            bridges_crossed: 0,
            compute_duration: Duration::ZERO,
        }
    }
}

impl SessionStatistics {
    #[inline]
    pub fn on_hiker_added(&mut self) {
        self.hikers_added = self.hikers_added.saturating_add(1);
    }

    #[inline]
    pub fn on_bridge_crossed(&mut self) {
        self.bridges_crossed = self.bridges_crossed.saturating_add(1);
    }

    #[inline]
    pub fn add_compute_duration(&mut self, duration: Duration) {
        self.compute_duration = self.compute_duration.saturating_add(duration);
    }

    /// Resets all counters to their initial values.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for SessionStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Session Statistics:")?;
        writeln!(f, "  Hikers added:    {}", self.hikers_added)?;
        writeln!(f, "  Bridges crossed: {}", self.bridges_crossed)?;
        writeln!(
            f,
            "  Compute time (secs): {:.3}",
            self.compute_duration.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = SessionStatistics::default();
        stats.on_hiker_added();
        stats.on_hiker_added();
        stats.on_bridge_crossed();
        stats.add_compute_duration(Duration::from_millis(250));

        assert_eq!(stats.hikers_added, 2);
        assert_eq!(stats.bridges_crossed, 1);
        assert_eq!(stats.compute_duration, Duration::from_millis(250));

        stats.reset();
        assert_eq!(stats, SessionStatistics::default());
    }

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SessionStatistics {
            hikers_added: 4,
            bridges_crossed: 2,
            compute_duration: Duration::from_millis(1234),
        };

        let rendered = format!("{}", stats);
        assert!(rendered.contains("Session Statistics:"));
        assert!(rendered.contains("Hikers added:    4"));
        assert!(rendered.contains("Bridges crossed: 2"));
        assert!(rendered.contains("Compute time (secs): 1.234"));
    }
}
