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

//! Fan-out monitor
//!
//! `CompositeMergeMonitor` forwards every event to its children in insertion
//! order, so logging, recording and custom checks can be combined for a
//! single merge.

use crate::{
    appointment::Appointment, conflict::Conflict, monitor::merge_monitor::MergeMonitor,
    stats::MergeStatistics,
};
use num_traits::{PrimInt, Signed};

/// A merge monitor that forwards events to all of its children.
pub struct CompositeMergeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    monitors: Vec<Box<dyn MergeMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeMergeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeMergeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    /// Creates a new empty `CompositeMergeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeMergeMonitor` with room for `capacity`
    /// monitors.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a monitor; it receives events after every monitor added before it.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: MergeMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn MergeMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn MergeMonitor<T> + 'a>] {
        &self.monitors
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }
}

impl<'a, T> FromIterator<Box<dyn MergeMonitor<T> + 'a>> for CompositeMergeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn MergeMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> MergeMonitor<T> for CompositeMergeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeMergeMonitor"
    }

    #[inline(always)]
    fn on_enter_merge(&mut self, len_a: usize, len_b: usize) {
        for monitor in &mut self.monitors {
            monitor.on_enter_merge(len_a, len_b);
        }
    }

    #[inline(always)]
    fn on_admit(&mut self, appointment: &Appointment<T>) {
        for monitor in &mut self.monitors {
            monitor.on_admit(appointment);
        }
    }

    #[inline(always)]
    fn on_conflict(&mut self, conflict: &Conflict<T>) {
        for monitor in &mut self.monitors {
            monitor.on_conflict(conflict);
        }
    }

    #[inline(always)]
    fn on_exit_merge(&mut self, statistics: &MergeStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_exit_merge(statistics);
        }
    }
}

impl<'a, T> std::fmt::Debug for CompositeMergeMonitor<'a, T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.monitors.iter().map(|m| m.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{no_op::NoOperationMonitor, recorder::ConflictRecorder};
    use std::{cell::RefCell, rc::Rc};

    struct OrderProbe {
        label: &'static str,
        seen: Rc<RefCell<Vec<&'static str>>>,
    }

    impl MergeMonitor<i64> for OrderProbe {
        fn name(&self) -> &str {
            self.label
        }

        fn on_enter_merge(&mut self, _len_a: usize, _len_b: usize) {
            self.seen.borrow_mut().push(self.label);
        }

        fn on_admit(&mut self, _appointment: &Appointment<i64>) {}

        fn on_conflict(&mut self, _conflict: &Conflict<i64>) {}

        fn on_exit_merge(&mut self, _statistics: &MergeStatistics) {}
    }

    #[test]
    fn test_events_dispatch_in_insertion_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeMergeMonitor::new();
        composite.add_monitor(OrderProbe {
            label: "first",
            seen: Rc::clone(&seen),
        });
        composite.add_monitor(OrderProbe {
            label: "second",
            seen: Rc::clone(&seen),
        });
        assert_eq!(composite.len(), 2);

        composite.on_enter_merge(1, 1);
        assert_eq!(*seen.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_forwards_conflicts_to_every_child() {
        let mut first = ConflictRecorder::new();
        let mut second = ConflictRecorder::new();
        {
            let mut composite: CompositeMergeMonitor<'_, i64> = CompositeMergeMonitor::with_capacity(3);
            composite.add_monitor(&mut first);
            composite.add_monitor(NoOperationMonitor::new());
            composite.add_monitor(&mut second);

            let conflict = Conflict::Duplicate {
                id: "A".into(),
                doctor: "D1".into(),
                window: (0..5).into(),
            };
            composite.on_conflict(&conflict);
            assert_eq!(
                format!("{:?}", composite),
                "[\"ConflictRecorder\", \"NoOperationMonitor\", \"ConflictRecorder\"]"
            );
        }
        assert_eq!(first.conflicts().len(), 1);
        assert_eq!(second.conflicts().len(), 1);
    }
}
