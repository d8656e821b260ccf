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
use std::time::Instant;

/// Prints one table row per conflict (and optionally per admission) and a
/// summary when the merge ends.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    start_time: Instant,
    log_admissions: bool,
}

impl LogMonitor {
    pub fn new(log_admissions: bool) -> Self {
        Self {
            start_time: Instant::now(),
            log_admissions,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<9} | {:<14} | {:<10} | {:<24}",
            "Elapsed", "Event", "Appointment", "Doctor", "Window"
        );
        println!("{}", "-".repeat(78));
    }

    #[inline(always)]
    fn log_line(&self, event: &str, appointment: &str, doctor: &str, window: &str) {
        let elapsed = format!("{:.3}s", self.start_time.elapsed().as_secs_f32());
        println!(
            "{:<9} | {:<9} | {:<14} | {:<10} | {:<24}",
            elapsed, event, appointment, doctor, window
        );
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(log_admissions: {})", self.log_admissions)
    }
}

impl<T> MergeMonitor<T> for LogMonitor
where
    T: PrimInt + Signed + std::fmt::Display,
{
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_merge(&mut self, len_a: usize, len_b: usize) {
        self.start_time = Instant::now();
        println!("Merging {} + {} appointments.", len_a, len_b);
        self.print_header();
    }

    fn on_admit(&mut self, appointment: &Appointment<T>) {
        if self.log_admissions {
            self.log_line(
                "admit",
                appointment.id().as_str(),
                appointment.doctor().as_str(),
                &appointment.window().to_string(),
            );
        }
    }

    fn on_conflict(&mut self, conflict: &Conflict<T>) {
        let event = if conflict.is_duplicate() {
            "duplicate"
        } else {
            "overlap"
        };
        self.log_line(
            event,
            conflict.discarded().as_str(),
            conflict.doctor().as_str(),
            &conflict.discarded_window().to_string(),
        );
    }

    fn on_exit_merge(&mut self, statistics: &MergeStatistics) {
        println!("{}", "-".repeat(78));
        println!("Merge finished.");
        print!("{}", statistics);
    }
}
