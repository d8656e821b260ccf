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

//! Merge monitoring interface
//!
//! Lifecycle: enter → {admit | conflict} per candidate → exit. The
//! statistics passed to `on_exit_merge` are final.

use crate::{appointment::Appointment, conflict::Conflict, stats::MergeStatistics};
use num_traits::{PrimInt, Signed};

/// Trait for observing a schedule merge.
pub trait MergeMonitor<T>
where
    T: PrimInt + Signed,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once before the first candidate, with the input lengths.
    fn on_enter_merge(&mut self, len_a: usize, len_b: usize);
    /// Called when a candidate is written to the merged schedule.
    fn on_admit(&mut self, appointment: &Appointment<T>);
    /// Called when a candidate is rejected.
    fn on_conflict(&mut self, conflict: &Conflict<T>);
    /// Called once after the last candidate.
    fn on_exit_merge(&mut self, statistics: &MergeStatistics);
}

impl<T, M> MergeMonitor<T> for &mut M
where
    T: PrimInt + Signed,
    M: MergeMonitor<T> + ?Sized,
{
    #[inline(always)]
    fn name(&self) -> &str {
        (**self).name()
    }

    #[inline(always)]
    fn on_enter_merge(&mut self, len_a: usize, len_b: usize) {
        (**self).on_enter_merge(len_a, len_b);
    }

    #[inline(always)]
    fn on_admit(&mut self, appointment: &Appointment<T>) {
        (**self).on_admit(appointment);
    }

    #[inline(always)]
    fn on_conflict(&mut self, conflict: &Conflict<T>) {
        (**self).on_conflict(conflict);
    }

    #[inline(always)]
    fn on_exit_merge(&mut self, statistics: &MergeStatistics) {
        (**self).on_exit_merge(statistics);
    }
}

impl<T> std::fmt::Debug for dyn MergeMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MergeMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn MergeMonitor<T>
where
    T: PrimInt + Signed,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MergeMonitor({})", self.name())
    }
}
