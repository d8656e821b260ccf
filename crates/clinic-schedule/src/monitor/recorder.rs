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

use crate::{
    appointment::Appointment, conflict::Conflict, monitor::merge_monitor::MergeMonitor,
    stats::MergeStatistics,
};
use num_traits::{PrimInt, Signed};

/// Collects every conflict of the merges it observes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictRecorder<T>
where
    T: PrimInt + Signed,
{
    conflicts: Vec<Conflict<T>>,
    admitted: usize,
    merges: usize,
}

impl<T> Default for ConflictRecorder<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConflictRecorder<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub fn new() -> Self {
        Self {
            conflicts: Vec::new(),
            admitted: 0,
            merges: 0,
        }
    }

    /// Returns the recorded conflicts in the order they were reported.
    #[inline]
    pub fn conflicts(&self) -> &[Conflict<T>] {
        &self.conflicts
    }

    /// Returns the number of admissions observed.
    #[inline]
    pub fn admitted(&self) -> usize {
        self.admitted
    }

    /// Returns the number of merges that ran to completion.
    #[inline]
    pub fn merges(&self) -> usize {
        self.merges
    }

    /// Removes and returns the recorded conflicts.
    #[inline]
    pub fn take_conflicts(&mut self) -> Vec<Conflict<T>> {
        std::mem::take(&mut self.conflicts)
    }

    pub fn clear(&mut self) {
        self.conflicts.clear();
        self.admitted = 0;
        self.merges = 0;
    }
}

impl<T> MergeMonitor<T> for ConflictRecorder<T>
where
    T: PrimInt + Signed,
{
    fn name(&self) -> &str {
        "ConflictRecorder"
    }

    fn on_enter_merge(&mut self, _len_a: usize, _len_b: usize) {}

    fn on_admit(&mut self, _appointment: &Appointment<T>) {
        self.admitted += 1;
    }

    fn on_conflict(&mut self, conflict: &Conflict<T>) {
        self.conflicts.push(conflict.clone());
    }

    fn on_exit_merge(&mut self, _statistics: &MergeStatistics) {
        self.merges += 1;
    }
}
