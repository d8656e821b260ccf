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

//! Conflicts discovered while merging two schedules.

use crate::appointment::{AppointmentId, DoctorId};
use clinic_core::math::interval::ClosedOpenInterval;
use num_traits::{PrimInt, Signed};

/// A candidate appointment that was rejected during a merge.
///
/// The `Display` rendering is the human-readable conflict log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conflict<T>
where
    T: PrimInt + Signed,
{
    /// An appointment with the same identifier had already been admitted.
    Duplicate {
        id: AppointmentId,
        doctor: DoctorId,
        window: ClosedOpenInterval<T>,
    },
    /// The candidate overlaps an appointment already admitted for the same
    /// doctor.
    Overlap {
        doctor: DoctorId,
        candidate: AppointmentId,
        candidate_window: ClosedOpenInterval<T>,
        existing: AppointmentId,
        existing_window: ClosedOpenInterval<T>,
    },
}

impl<T> Conflict<T>
where
    T: PrimInt + Signed,
{
    /// Returns the doctor both appointments are booked with.
    #[inline]
    pub fn doctor(&self) -> &DoctorId {
        match self {
            Conflict::Duplicate { doctor, .. } | Conflict::Overlap { doctor, .. } => doctor,
        }
    }

    /// Returns the identifier of the discarded candidate.
    #[inline]
    pub fn discarded(&self) -> &AppointmentId {
        match self {
            Conflict::Duplicate { id, .. } => id,
            Conflict::Overlap { candidate, .. } => candidate,
        }
    }

    /// Returns the window of the discarded candidate.
    #[inline]
    pub fn discarded_window(&self) -> ClosedOpenInterval<T> {
        match self {
            Conflict::Duplicate { window, .. } => *window,
            Conflict::Overlap {
                candidate_window, ..
            } => *candidate_window,
        }
    }

    #[inline]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Conflict::Duplicate { .. })
    }

    #[inline]
    pub fn is_overlap(&self) -> bool {
        matches!(self, Conflict::Overlap { .. })
    }
}

impl<T> std::fmt::Display for Conflict<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conflict::Duplicate { id, doctor, window } => write!(
                f,
                "duplicate appointment {} for doctor {} at {} discarded (first occurrence kept)",
                id, doctor, window
            ),
            Conflict::Overlap {
                doctor,
                candidate,
                candidate_window,
                existing,
                existing_window,
            } => write!(
                f,
                "schedule conflict for doctor {}: {} {} overlaps {} {}",
                doctor, candidate, candidate_window, existing, existing_window
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_display() {
        let conflict = Conflict::Duplicate {
            id: AppointmentId::new("A"),
            doctor: DoctorId::new("D1"),
            window: ClosedOpenInterval::new(600i64, 630),
        };
        assert_eq!(
            conflict.to_string(),
            "duplicate appointment A for doctor D1 at [600, 630) discarded (first occurrence kept)"
        );
        assert!(conflict.is_duplicate());
        assert_eq!(conflict.discarded().as_str(), "A");
    }

    #[test]
    fn test_overlap_display() {
        let conflict = Conflict::Overlap {
            doctor: DoctorId::new("D1"),
            candidate: AppointmentId::new("Y"),
            candidate_window: ClosedOpenInterval::new(615i64, 645),
            existing: AppointmentId::new("X"),
            existing_window: ClosedOpenInterval::new(600, 630),
        };
        assert_eq!(
            conflict.to_string(),
            "schedule conflict for doctor D1: Y [615, 645) overlaps X [600, 630)"
        );
        assert!(conflict.is_overlap());
        assert_eq!(conflict.doctor().as_str(), "D1");
        assert_eq!(conflict.discarded_window(), ClosedOpenInterval::new(615, 645));
    }
}
