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

//! Appointments and their identifiers.

use clinic_core::{
    math::interval::ClosedOpenInterval,
    utils::id::{TypedId, TypedIdTag},
};
use num_traits::{PrimInt, Signed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AppointmentTag;

impl TypedIdTag for AppointmentTag {
    const NAME: &'static str = "AppointmentId";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DoctorTag;

impl TypedIdTag for DoctorTag {
    const NAME: &'static str = "DoctorId";
}

/// Identifier of a single appointment.
pub type AppointmentId = TypedId<AppointmentTag>;

/// Identifier of the doctor an appointment is booked with.
pub type DoctorId = TypedId<DoctorTag>;

/// The error type for constructing an [`Appointment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    /// The duration was below zero.
    #[error("appointment duration must not be negative")]
    NegativeDuration,
    /// `start + duration` does not fit in the timestamp type.
    #[error("appointment end overflows the timestamp type")]
    EndOverflow,
}

/// A booked time window with a doctor.
///
/// The window is the closed-open interval `[start, start + duration)`; its
/// end is computed once at construction with overflow checking.
///
/// # Examples
///
/// ```rust
/// # use clinic_schedule::appointment::Appointment;
///
/// // Minutes since midnight.
/// let checkup = Appointment::new("A-1", "D-7", 600_i64, 30, "checkup").unwrap();
/// assert_eq!(checkup.end(), 630);
///
/// let follow_up = Appointment::new("A-2", "D-7", 615_i64, 30, "follow-up").unwrap();
/// assert!(checkup.overlaps(&follow_up));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Appointment<T>
where
    T: PrimInt + Signed,
{
    id: AppointmentId,
    doctor: DoctorId,
    window: ClosedOpenInterval<T>,
    reason: String,
}

impl<T> Appointment<T>
where
    T: PrimInt + Signed,
{
    /// Creates an appointment starting at `start` and lasting `duration`.
    ///
    /// # Errors
    ///
    /// Returns [`AppointmentError::NegativeDuration`] if `duration < 0` and
    /// [`AppointmentError::EndOverflow`] if `start + duration` overflows.
    pub fn new(
        id: impl Into<AppointmentId>,
        doctor: impl Into<DoctorId>,
        start: T,
        duration: T,
        reason: impl Into<String>,
    ) -> Result<Self, AppointmentError> {
        if duration.is_negative() {
            return Err(AppointmentError::NegativeDuration);
        }
        let window =
            ClosedOpenInterval::with_length(start, duration).ok_or(AppointmentError::EndOverflow)?;

        Ok(Self {
            id: id.into(),
            doctor: doctor.into(),
            window,
            reason: reason.into(),
        })
    }

    #[inline]
    pub fn id(&self) -> &AppointmentId {
        &self.id
    }

    #[inline]
    pub fn doctor(&self) -> &DoctorId {
        &self.doctor
    }

    #[inline]
    pub fn start(&self) -> T {
        self.window.start()
    }

    #[inline]
    pub fn end(&self) -> T {
        self.window.end()
    }

    #[inline]
    pub fn duration(&self) -> T {
        self.window.len()
    }

    #[inline]
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the booked window `[start, end)`.
    #[inline]
    pub fn window(&self) -> ClosedOpenInterval<T> {
        self.window
    }

    /// Returns `true` if the two windows overlap, regardless of doctor.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.window.intersects(other.window)
    }
}

impl<T> std::fmt::Display for Appointment<T>
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with {} at {}", self.id, self.doctor, self.window)?;
        if !self.reason.is_empty() {
            write!(f, ": {}", self.reason)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_computes_end() {
        let a = Appointment::new("A", "D1", 600i64, 30, "checkup").unwrap();
        assert_eq!(a.id().as_str(), "A");
        assert_eq!(a.doctor().as_str(), "D1");
        assert_eq!(a.start(), 600);
        assert_eq!(a.end(), 630);
        assert_eq!(a.duration(), 30);
        assert_eq!(a.reason(), "checkup");
        assert_eq!(a.window(), ClosedOpenInterval::new(600, 630));
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        assert_eq!(
            Appointment::new("A", "D1", 600i32, -1, ""),
            Err(AppointmentError::NegativeDuration)
        );
    }

    #[test]
    fn test_end_overflow_is_rejected() {
        assert_eq!(
            Appointment::new("A", "D1", i64::MAX - 5, 10, ""),
            Err(AppointmentError::EndOverflow)
        );
        assert!(Appointment::new("A", "D1", i64::MAX - 5, 5, "").is_ok());
    }

    #[test]
    fn test_zero_duration_is_allowed() {
        let a = Appointment::new("A", "D1", 10i64, 0, "").unwrap();
        assert_eq!(a.end(), 10);
    }

    #[test]
    fn test_overlap_is_strict_on_both_ends() {
        let x = Appointment::new("X", "D1", 600i64, 30, "").unwrap();
        let y = Appointment::new("Y", "D1", 615i64, 30, "").unwrap();
        let z = Appointment::new("Z", "D1", 630i64, 30, "").unwrap();
        assert!(x.overlaps(&y));
        assert!(y.overlaps(&x));
        assert!(!x.overlaps(&z));
        assert!(!z.overlaps(&x));
    }

    #[test]
    fn test_display() {
        let a = Appointment::new("A", "D1", 600i64, 30, "checkup").unwrap();
        assert_eq!(format!("{}", a), "A with D1 at [600, 630): checkup");
        let b = Appointment::new("B", "D2", 0i64, 5, "").unwrap();
        assert_eq!(format!("{}", b), "B with D2 at [0, 5)");
        assert_eq!(
            AppointmentError::EndOverflow.to_string(),
            "appointment end overflows the timestamp type"
        );
    }
}
