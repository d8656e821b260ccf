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

//! Two-source schedule merging
//!
//! `ScheduleMerger` reconciles two appointment lists, each sorted ascending
//! by start time, into one chronological schedule. Candidates are taken with
//! a two-pointer walk (ties go to the first list) and each one is admitted
//! only if
//!
//! 1. no appointment with the same identifier was admitted before, and
//! 2. no appointment already admitted for the same doctor overlaps it.
//!
//! Rejected candidates become [`Conflict`] entries in discovery order. The
//! first occurrence always wins. When several admitted appointments overlap a
//! candidate, the conflict names the earliest admitted one.
//!
//! Admitted windows are indexed per doctor, so the overlap check only visits
//! that doctor's admissions.

use crate::{
    appointment::{Appointment, AppointmentId, DoctorId},
    conflict::Conflict,
    monitor::{merge_monitor::MergeMonitor, no_op::NoOperationMonitor},
    result::MergeResult,
    stats::MergeStatistics,
};
use clinic_collections::{hash_table::HashTable, list::SequentialList};
use clinic_core::math::interval::ClosedOpenInterval;
use num_traits::{PrimInt, Signed};
use smallvec::SmallVec;
use std::time::Instant;

/// Number of identifier buckets allocated per merge unless configured.
pub const DEFAULT_INDEX_CAPACITY: usize = 64;

/// Which of the two merge inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MergeInput {
    First,
    Second,
}

impl std::fmt::Display for MergeInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MergeInput::First => write!(f, "first"),
            MergeInput::Second => write!(f, "second"),
        }
    }
}

/// The error type for [`ScheduleMerger::merge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MergeError {
    /// An input list is not sorted ascending by start time.
    #[error(
        "{list} input is not sorted by start time: appointment at position {position} starts before its predecessor"
    )]
    Unsorted {
        /// The offending input.
        list: MergeInput,
        /// 0-based position of the first appointment that starts earlier
        /// than the one before it.
        position: usize,
    },
}

type DoctorWindows<'l, T> = SmallVec<[(&'l AppointmentId, ClosedOpenInterval<T>); 4]>;

/// Merges two chronologically sorted appointment lists.
///
/// # Examples
///
/// ```rust
/// # use clinic_collections::list::SequentialList;
/// # use clinic_schedule::{appointment::Appointment, merger::ScheduleMerger};
///
/// let a: SequentialList<_> = [Appointment::new("X", "D1", 600_i64, 30, "").unwrap()]
///     .into_iter()
///     .collect();
/// let b: SequentialList<_> = [Appointment::new("Y", "D1", 615_i64, 30, "").unwrap()]
///     .into_iter()
///     .collect();
///
/// let result = ScheduleMerger::new().merge(&a, &b).unwrap();
/// assert_eq!(result.appointments().len(), 1);
/// assert_eq!(
///     result.conflicts().front().unwrap().to_string(),
///     "schedule conflict for doctor D1: Y [615, 645) overlaps X [600, 630)"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleMerger<T, M = NoOperationMonitor<T>>
where
    T: PrimInt + Signed,
    M: MergeMonitor<T>,
{
    monitor: M,
    index_capacity: usize,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> ScheduleMerger<T, NoOperationMonitor<T>>
where
    T: PrimInt + Signed,
{
    /// Creates a merger without monitoring.
    #[inline]
    pub fn new() -> Self {
        Self {
            monitor: NoOperationMonitor::new(),
            index_capacity: DEFAULT_INDEX_CAPACITY,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<T> Default for ScheduleMerger<T, NoOperationMonitor<T>>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, M> ScheduleMerger<T, M>
where
    T: PrimInt + Signed,
    M: MergeMonitor<T>,
{
    /// Replaces the monitor.
    #[inline]
    pub fn with_monitor<N>(self, monitor: N) -> ScheduleMerger<T, N>
    where
        N: MergeMonitor<T>,
    {
        ScheduleMerger {
            monitor,
            index_capacity: self.index_capacity,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Sets the initial bucket count of the per-merge lookup tables.
    /// Zero is raised to one.
    #[inline]
    pub fn with_index_capacity(mut self, capacity: usize) -> Self {
        self.index_capacity = capacity.max(1);
        self
    }

    #[inline]
    pub fn index_capacity(&self) -> usize {
        self.index_capacity
    }

    #[inline]
    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    #[inline]
    pub fn monitor_mut(&mut self) -> &mut M {
        &mut self.monitor
    }

    #[inline]
    pub fn into_monitor(self) -> M {
        self.monitor
    }

    /// Merges `first` and `second` into a single chronological schedule.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Unsorted`] if either input is not sorted
    /// ascending by start time. Validation runs before any candidate is
    /// examined, so the monitor sees no events in that case.
    pub fn merge(
        &mut self,
        first: &SequentialList<Appointment<T>>,
        second: &SequentialList<Appointment<T>>,
    ) -> Result<MergeResult<T>, MergeError> {
        ensure_sorted(first, MergeInput::First)?;
        ensure_sorted(second, MergeInput::Second)?;

        let start_time = Instant::now();
        let mut statistics = MergeStatistics::default();
        self.monitor.on_enter_merge(first.len(), second.len());

        let mut admitted_ids: HashTable<&AppointmentId, ()> =
            HashTable::with_capacity(self.index_capacity);
        let mut doctor_windows: HashTable<&DoctorId, DoctorWindows<'_, T>> =
            HashTable::with_capacity(self.index_capacity);
        let mut appointments = SequentialList::with_capacity(first.len() + second.len());
        let mut conflicts = SequentialList::new();

        let mut left = first.iter().peekable();
        let mut right = second.iter().peekable();
        loop {
            let take_right = match (left.peek(), right.peek()) {
                (Some(a), Some(b)) => b.start() < a.start(),
                (None, Some(_)) => true,
                (_, None) => false,
            };
            let next = if take_right { right.next() } else { left.next() };
            let Some(candidate) = next else {
                break;
            };
            statistics.on_candidate();

            if admitted_ids.contains_key(&candidate.id()) {
                statistics.on_duplicate();
                let conflict = Conflict::Duplicate {
                    id: candidate.id().clone(),
                    doctor: candidate.doctor().clone(),
                    window: candidate.window(),
                };
                self.monitor.on_conflict(&conflict);
                conflicts.push_back(conflict);
                continue;
            }

            let window = candidate.window();
            let clash = doctor_windows.get(&candidate.doctor()).and_then(|windows| {
                windows.iter().find(|(_, existing)| {
                    statistics.on_overlap_comparison();
                    existing.intersects(window)
                })
            });
            if let Some(&(existing, existing_window)) = clash {
                statistics.on_overlap();
                let conflict = Conflict::Overlap {
                    doctor: candidate.doctor().clone(),
                    candidate: candidate.id().clone(),
                    candidate_window: window,
                    existing: existing.clone(),
                    existing_window,
                };
                self.monitor.on_conflict(&conflict);
                conflicts.push_back(conflict);
                continue;
            }

            admitted_ids.put(candidate.id(), ());
            match doctor_windows.get_mut(&candidate.doctor()) {
                Some(windows) => windows.push((candidate.id(), window)),
                None => {
                    let mut windows = DoctorWindows::new();
                    windows.push((candidate.id(), window));
                    doctor_windows.put(candidate.doctor(), windows);
                }
            }
            statistics.on_admit();
            self.monitor.on_admit(candidate);
            appointments.push_back(candidate.clone());
        }

        statistics.set_total_time(start_time.elapsed());
        self.monitor.on_exit_merge(&statistics);
        Ok(MergeResult::new(appointments, conflicts, statistics))
    }
}

/// Checks that `list` is sorted ascending by start time.
fn ensure_sorted<T>(list: &SequentialList<Appointment<T>>, input: MergeInput) -> Result<(), MergeError>
where
    T: PrimInt + Signed,
{
    let mut previous: Option<T> = None;
    for (position, appointment) in list.iter().enumerate() {
        let start = appointment.start();
        if previous.is_some_and(|p| start < p) {
            return Err(MergeError::Unsorted {
                list: input,
                position,
            });
        }
        previous = Some(start);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::{log::LogMonitor, recorder::ConflictRecorder};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn appt(id: &str, doctor: &str, start: i64, duration: i64) -> Appointment<i64> {
        Appointment::new(id, doctor, start, duration, "").unwrap()
    }

    fn list(items: Vec<Appointment<i64>>) -> SequentialList<Appointment<i64>> {
        items.into_iter().collect()
    }

    fn ids(result: &MergeResult<i64>) -> Vec<&str> {
        result.appointments().iter().map(|a| a.id().as_str()).collect()
    }

    /// Reference admission rule: scan the whole output for every candidate.
    fn exhaustive_merge(
        first: &[Appointment<i64>],
        second: &[Appointment<i64>],
    ) -> (Vec<Appointment<i64>>, Vec<Conflict<i64>>) {
        let (mut i, mut j) = (0, 0);
        let mut output: Vec<Appointment<i64>> = Vec::new();
        let mut conflicts = Vec::new();
        while i < first.len() || j < second.len() {
            let candidate = if j >= second.len()
                || (i < first.len() && first[i].start() <= second[j].start())
            {
                i += 1;
                &first[i - 1]
            } else {
                j += 1;
                &second[j - 1]
            };
            if output.iter().any(|a| a.id() == candidate.id()) {
                conflicts.push(Conflict::Duplicate {
                    id: candidate.id().clone(),
                    doctor: candidate.doctor().clone(),
                    window: candidate.window(),
                });
            } else if let Some(existing) = output
                .iter()
                .find(|a| a.doctor() == candidate.doctor() && a.overlaps(candidate))
            {
                conflicts.push(Conflict::Overlap {
                    doctor: candidate.doctor().clone(),
                    candidate: candidate.id().clone(),
                    candidate_window: candidate.window(),
                    existing: existing.id().clone(),
                    existing_window: existing.window(),
                });
            } else {
                output.push(candidate.clone());
            }
        }
        (output, conflicts)
    }

    #[test]
    fn test_duplicate_keeps_first_occurrence() {
        let a = list(vec![Appointment::new("A", "D1", 600, 30, "from a").unwrap()]);
        let b = list(vec![Appointment::new("A", "D1", 600, 30, "from b").unwrap()]);

        let result = ScheduleMerger::new().merge(&a, &b).unwrap();
        assert_eq!(result.appointments().len(), 1);
        assert_eq!(result.appointments().front().unwrap().reason(), "from a");
        assert_eq!(result.conflicts().len(), 1);

        let conflict = result.conflicts().front().unwrap();
        assert!(conflict.is_duplicate());
        assert_eq!(
            conflict.to_string(),
            "duplicate appointment A for doctor D1 at [600, 630) discarded (first occurrence kept)"
        );
        assert_eq!(result.statistics().duplicates, 1);
    }

    #[test]
    fn test_overlap_names_both_appointments() {
        let a = list(vec![appt("X", "D1", 600, 30)]);
        let b = list(vec![appt("Y", "D1", 615, 30)]);

        let result = ScheduleMerger::new().merge(&a, &b).unwrap();
        assert_eq!(ids(&result), vec!["X"]);
        assert_eq!(result.conflicts().len(), 1);
        let text = result.conflicts().front().unwrap().to_string();
        assert!(text.contains('X') && text.contains('Y'));
        assert_eq!(
            text,
            "schedule conflict for doctor D1: Y [615, 645) overlaps X [600, 630)"
        );
    }

    #[test]
    fn test_overlap_with_other_doctor_is_admitted() {
        let a = list(vec![appt("X", "D1", 600, 30)]);
        let b = list(vec![appt("Y", "D2", 615, 30)]);
        let result = ScheduleMerger::new().merge(&a, &b).unwrap();
        assert_eq!(ids(&result), vec!["X", "Y"]);
        assert!(!result.has_conflicts());
    }

    #[test]
    fn test_back_to_back_appointments_do_not_conflict() {
        let a = list(vec![appt("X", "D1", 600, 30), appt("Z", "D1", 660, 30)]);
        let b = list(vec![appt("Y", "D1", 630, 30)]);
        let result = ScheduleMerger::new().merge(&a, &b).unwrap();
        assert_eq!(ids(&result), vec!["X", "Y", "Z"]);
        assert!(!result.has_conflicts());
    }

    #[test]
    fn test_ties_favour_first_list() {
        let a = list(vec![appt("A1", "D1", 600, 10)]);
        let b = list(vec![appt("B1", "D2", 600, 10)]);
        let result = ScheduleMerger::new().merge(&a, &b).unwrap();
        assert_eq!(ids(&result), vec!["A1", "B1"]);
    }

    #[test]
    fn test_disjoint_lists_interleave_without_conflicts() {
        let a = list(vec![
            appt("a1", "D1", 0, 10),
            appt("a2", "D1", 20, 10),
            appt("a3", "D2", 40, 10),
        ]);
        let b = list(vec![appt("b1", "D1", 10, 10), appt("b2", "D2", 30, 10)]);

        let result = ScheduleMerger::new().merge(&a, &b).unwrap();
        assert_eq!(ids(&result), vec!["a1", "b1", "a2", "b2", "a3"]);
        assert!(!result.has_conflicts());
        let starts: Vec<_> = result.appointments().iter().map(|a| a.start()).collect();
        assert!(starts.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(result.statistics().admitted, 5);
    }

    #[test]
    fn test_empty_side_does_not_change_outcome() {
        let a = list(vec![appt("a1", "D1", 0, 10), appt("a2", "D1", 5, 10)]);
        let empty = SequentialList::new();

        let mut merger = ScheduleMerger::new();
        let left = merger.merge(&a, &empty).unwrap();
        let right = merger.merge(&empty, &a).unwrap();

        // Overlaps within a single input are still detected.
        assert_eq!(ids(&left), vec!["a1"]);
        assert_eq!(ids(&left), ids(&right));
        assert_eq!(left.conflicts(), right.conflicts());
    }

    #[test]
    fn test_merge_with_empty_list_keeps_clean_input_unchanged() {
        let a = list(vec![
            appt("a1", "D1", 0, 10),
            appt("a2", "D2", 5, 10),
            appt("a3", "D1", 10, 10),
        ]);
        let empty = SequentialList::new();
        let result = ScheduleMerger::new().merge(&a, &empty).unwrap();
        assert_eq!(result.appointments(), &a);
        assert!(!result.has_conflicts());

        let both_empty = ScheduleMerger::<i64>::new()
            .merge(&empty, &empty)
            .unwrap();
        assert!(both_empty.appointments().is_empty());
    }

    #[test]
    fn test_unsorted_input_is_rejected() {
        let sorted = list(vec![appt("a", "D1", 0, 5)]);
        let unsorted = list(vec![
            appt("b", "D1", 10, 5),
            appt("c", "D1", 20, 5),
            appt("d", "D1", 15, 5),
        ]);

        let mut recorder = ConflictRecorder::new();
        let err = ScheduleMerger::new()
            .with_monitor(&mut recorder)
            .merge(&sorted, &unsorted)
            .unwrap_err();
        assert_eq!(
            err,
            MergeError::Unsorted {
                list: MergeInput::Second,
                position: 2
            }
        );
        assert_eq!(
            err.to_string(),
            "second input is not sorted by start time: appointment at position 2 starts before its predecessor"
        );
        assert_eq!(recorder.merges(), 0);

        let err = ScheduleMerger::new().merge(&unsorted, &sorted).unwrap_err();
        assert_eq!(
            err,
            MergeError::Unsorted {
                list: MergeInput::First,
                position: 2
            }
        );
    }

    #[test]
    fn test_conflict_names_earliest_admitted_overlap() {
        let a = list(vec![appt("early", "D1", 0, 30), appt("late", "D1", 30, 30)]);
        let b = list(vec![appt("wide", "D1", 10, 40)]);
        let result = ScheduleMerger::new().merge(&a, &b).unwrap();
        assert_eq!(ids(&result), vec!["early", "late"]);
        match result.conflicts().front().unwrap() {
            Conflict::Overlap { existing, .. } => assert_eq!(existing.as_str(), "early"),
            other => panic!("expected overlap, got {other:?}"),
        }
    }

    #[test]
    fn test_monitor_sees_every_event() {
        let a = list(vec![appt("A", "D1", 0, 10), appt("B", "D1", 5, 10)]);
        let b = list(vec![appt("A", "D1", 0, 10), appt("C", "D2", 5, 10)]);

        let mut merger = ScheduleMerger::new().with_monitor(ConflictRecorder::new());
        let result = merger.merge(&a, &b).unwrap();
        let recorder = merger.into_monitor();

        assert_eq!(recorder.merges(), 1);
        assert_eq!(recorder.admitted(), 2);
        assert_eq!(
            recorder.conflicts(),
            result.conflicts().iter().cloned().collect::<Vec<_>>().as_slice()
        );
        let stats = result.statistics();
        assert_eq!(stats.candidates_examined, 4);
        assert_eq!(stats.conflicts(), 2);
    }

    #[test]
    fn test_log_monitor_runs() {
        let a = list(vec![appt("X", "D1", 600, 30)]);
        let b = list(vec![appt("Y", "D1", 615, 30)]);
        let mut merger = ScheduleMerger::new()
            .with_monitor(LogMonitor::new(true))
            .with_index_capacity(0);
        assert_eq!(merger.index_capacity(), 1);
        let result = merger.merge(&a, &b).unwrap();
        assert_eq!(result.conflicts().len(), 1);
        assert_eq!(format!("{}", merger.monitor()), "LogMonitor(log_admissions: true)");
    }

    #[test]
    fn test_random_schedules_match_exhaustive_scan() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..50 {
            let mut make = |prefix: &str, n: usize| {
                let mut items: Vec<Appointment<i64>> = (0..n)
                    .map(|k| {
                        // Reuse a small id space so duplicates across lists occur.
                        let id = if rng.random_bool(0.2) {
                            format!("shared{}", rng.random_range(0..5))
                        } else {
                            format!("{prefix}{k}")
                        };
                        let doctor = format!("D{}", rng.random_range(0..3));
                        let start = rng.random_range(0..500);
                        let duration = rng.random_range(0..40);
                        Appointment::new(id, doctor, start, duration, "").unwrap()
                    })
                    .collect();
                items.sort_by_key(|a| a.start());
                items
            };
            let first = make("a", 30);
            let second = make("b", 30);

            let result = ScheduleMerger::new()
                .merge(&list(first.clone()), &list(second.clone()))
                .unwrap();
            let (expected, expected_conflicts) = exhaustive_merge(&first, &second);

            assert_eq!(
                result.appointments().iter().cloned().collect::<Vec<_>>(),
                expected
            );
            assert_eq!(
                result.conflicts().iter().cloned().collect::<Vec<_>>(),
                expected_conflicts
            );
        }
    }
}
