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

use crate::model::{Bridge, Hiker};
use num_traits::Float;

/// One event in the ordered stream a crossing session consumes.
///
/// Events arrive in happening order: a hiker joins the group, or the group
/// encounters a bridge and crosses it with the roster accumulated so far.
#[derive(Clone, Debug, PartialEq)]
pub enum CrossingEvent<T>
where
    T: Float,
{
    /// A hiker joins the group. Must precede any crossing that should
    /// include this hiker.
    AddHiker(Hiker<T>),
    /// The group crosses a bridge, triggering one crossing computation.
    CrossBridge(Bridge<T>),
}

impl<T> std::fmt::Display for CrossingEvent<T>
where
    T: Float + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CrossingEvent::AddHiker(hiker) => {
                write!(f, "AddHiker({}, speed: {})", hiker.name(), hiker.speed())
            }
            CrossingEvent::CrossBridge(bridge) => {
                write!(f, "CrossBridge({}, length: {})", bridge.name(), bridge.length())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let add: CrossingEvent<f64> = CrossingEvent::AddHiker(Hiker::new("A", 10.0));
        assert_eq!(format!("{}", add), "AddHiker(A, speed: 10)");

        let cross: CrossingEvent<f64> = CrossingEvent::CrossBridge(Bridge::new("1st", 100.0));
        assert_eq!(format!("{}", cross), "CrossBridge(1st, length: 100)");
    }
}
