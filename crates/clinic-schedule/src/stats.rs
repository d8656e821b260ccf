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

/// Counters collected during a single merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStatistics {
    /// Appointments taken from either input.
    pub candidates_examined: u64,
    /// Appointments written to the merged schedule.
    pub admitted: u64,
    /// Candidates discarded because their identifier was already admitted.
    pub duplicates: u64,
    /// Candidates discarded because they overlapped an admitted appointment.
    pub overlaps: u64,
    /// Window comparisons made while looking for overlaps.
    pub overlap_comparisons: u64,
    /// Wall-clock time spent in the merge.
    pub time_total: Duration,
}

impl MergeStatistics {
    #[inline]
    pub fn on_candidate(&mut self) {
        self.candidates_examined = self.candidates_examined.saturating_add(1);
    }

    #[inline]
    pub fn on_admit(&mut self) {
        self.admitted = self.admitted.saturating_add(1);
    }

    #[inline]
    pub fn on_duplicate(&mut self) {
        self.duplicates = self.duplicates.saturating_add(1);
    }

    #[inline]
    pub fn on_overlap(&mut self) {
        self.overlaps = self.overlaps.saturating_add(1);
    }

    #[inline]
    pub fn on_overlap_comparison(&mut self) {
        self.overlap_comparisons = self.overlap_comparisons.saturating_add(1);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }

    /// Returns the number of rejected candidates.
    #[inline]
    pub fn conflicts(&self) -> u64 {
        self.duplicates.saturating_add(self.overlaps)
    }
}

impl std::fmt::Display for MergeStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Schedule Merge Statistics:")?;
        writeln!(f, "  Candidates examined:  {}", self.candidates_examined)?;
        writeln!(f, "  Admitted:             {}", self.admitted)?;
        writeln!(f, "  Duplicates:           {}", self.duplicates)?;
        writeln!(f, "  Overlaps:             {}", self.overlaps)?;
        writeln!(f, "  Overlap comparisons:  {}", self.overlap_comparisons)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}
