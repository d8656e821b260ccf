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

//! # Clinic Schedule
//!
//! Appointment model and two-source schedule reconciliation built on
//! `clinic-collections`.
//!
//! ## Modules
//!
//! - `appointment`: `Appointment<T>` with typed `AppointmentId` / `DoctorId`
//!   and checked end computation.
//! - `conflict`: duplicate and overlap conflicts with their log rendering.
//! - `merger`: `ScheduleMerger`, the two-pointer merge with admission checks.
//! - `result`: `MergeResult`, the immutable output of a merge.
//! - `stats`: counters collected during a merge.
//! - `monitor`: observation hooks (`MergeMonitor`) and stock monitors.

pub mod appointment;
pub mod conflict;
pub mod merger;
pub mod monitor;
pub mod result;
pub mod stats;

pub use appointment::{Appointment, AppointmentError, AppointmentId, DoctorId};
pub use conflict::Conflict;
pub use merger::{MergeError, MergeInput, ScheduleMerger};
pub use result::MergeResult;
pub use stats::MergeStatistics;
