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

use crate::{appointment::Appointment, conflict::Conflict, stats::MergeStatistics};
use clinic_collections::list::SequentialList;
use num_traits::{PrimInt, Signed};

/// The outcome of a merge: the consolidated schedule, the conflict log in
/// discovery order, and the statistics of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult<T>
where
    T: PrimInt + Signed,
{
    appointments: SequentialList<Appointment<T>>,
    conflicts: SequentialList<Conflict<T>>,
    statistics: MergeStatistics,
}

impl<T> MergeResult<T>
where
    T: PrimInt + Signed,
{
    #[inline]
    pub(crate) fn new(
        appointments: SequentialList<Appointment<T>>,
        conflicts: SequentialList<Conflict<T>>,
        statistics: MergeStatistics,
    ) -> Self {
        Self {
            appointments,
            conflicts,
            statistics,
        }
    }

    /// Returns the admitted appointments in chronological order.
    #[inline]
    pub fn appointments(&self) -> &SequentialList<Appointment<T>> {
        &self.appointments
    }

    /// Returns the rejected candidates in the order they were discovered.
    #[inline]
    pub fn conflicts(&self) -> &SequentialList<Conflict<T>> {
        &self.conflicts
    }

    #[inline]
    pub fn statistics(&self) -> &MergeStatistics {
        &self.statistics
    }

    #[inline]
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// Consumes the result and returns the schedule and the conflict log.
    #[inline]
    pub fn into_parts(
        self,
    ) -> (
        SequentialList<Appointment<T>>,
        SequentialList<Conflict<T>>,
    ) {
        (self.appointments, self.conflicts)
    }
}

impl<T> std::fmt::Display for MergeResult<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "MergeResult({} appointments, {} conflicts)",
            self.appointments.len(),
            self.conflicts.len()
        )?;
        for conflict in &self.conflicts {
            writeln!(f, "  {}", conflict)?;
        }
        Ok(())
    }
}
