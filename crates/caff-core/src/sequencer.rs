//! Date sequencing across intake rows.
//!
//! Two reconciliation modes keep row timestamps coherent:
//! - day-rollover inference: rows carry bare clock times, and a row whose
//!   clock time fails to advance past the previous row's is placed on the
//!   next day;
//! - re-anchoring: rows carry full calendar dates, and moving the start date
//!   shifts every row while preserving the pairwise offsets between them.
//!
//! Rows are walked in row order, the order the user created them, not time
//! order. The rollover inference is an acknowledged heuristic: reordering
//! rows without reordering their times can misassign days, and no stronger
//! ordering is imposed here.

use chrono::{Days, NaiveDate, NaiveTime, Timelike};

use crate::intake::Intake;

/// Infers a day offset for every row from clock-time regressions.
///
/// The first timed row is pinned to day 0. Each later timed row compares its
/// minutes-of-day against the running previous value: no advance means the
/// next day. Untimed rows keep the running day and do not advance the
/// comparison point.
#[must_use]
pub fn infer_day_offsets(times: &[Option<NaiveTime>]) -> Vec<i64> {
    let mut offsets = Vec::with_capacity(times.len());
    let mut day = 0_i64;
    let mut previous: Option<u32> = None;

    for time in times {
        if let Some(t) = time {
            let minutes = minutes_of_day(*t);
            if previous.is_some_and(|p| minutes <= p) {
                day += 1;
            }
            previous = Some(minutes);
        }
        offsets.push(day);
    }

    offsets
}

/// Assigns calendar dates from row order: the rollover inference generalized
/// to actual dates.
///
/// The first row is pinned to `start_date`; each later timed row lands on the
/// running date, advanced a day whenever its clock time regresses. Untimed
/// rows past the first are left untouched.
pub fn assign_sequential_dates(intakes: &mut [Intake], start_date: NaiveDate) {
    let mut current = start_date;
    let mut previous: Option<u32> = None;

    for (index, intake) in intakes.iter_mut().enumerate() {
        if index == 0 {
            intake.date = Some(start_date);
            previous = intake.time.map(minutes_of_day);
            continue;
        }

        let (Some(time), Some(prev)) = (intake.time, previous) else {
            continue;
        };
        let minutes = minutes_of_day(time);
        if minutes <= prev {
            current = current.checked_add_days(Days::new(1)).unwrap_or(current);
        }
        intake.date = Some(current);
        previous = Some(minutes);
    }
}

/// Re-anchors every row to `new_start_date`, preserving pairwise offsets.
///
/// With a single row, or a first row that has never been dated, this is
/// first-time initialization: pin the first row and fall back to sequential
/// inference for the rest. Otherwise every row's offset from the first row's
/// original instant is captured *before* any row is mutated, then only the
/// date component of each row is shifted; clock times stay untouched, so
/// the set of pairwise deltas is preserved exactly.
pub fn reanchor(intakes: &mut [Intake], new_start_date: NaiveDate) {
    let anchor = intakes
        .first()
        .and_then(|first| Some((first.date?, first.time?)));

    let Some((first_date, first_time)) = anchor.filter(|_| intakes.len() > 1) else {
        assign_sequential_dates(intakes, new_start_date);
        return;
    };

    let original_first = first_date.and_time(first_time);

    // Capture all offsets before mutating any row: shifting the first row in
    // place first would corrupt the later offset calculations.
    let offsets: Vec<chrono::TimeDelta> = intakes
        .iter()
        .map(|intake| match (intake.date, intake.time) {
            (Some(date), Some(time)) => date.and_time(time) - original_first,
            _ => chrono::TimeDelta::zero(),
        })
        .collect();

    let new_first = new_start_date.and_time(first_time);
    for (intake, offset) in intakes.iter_mut().zip(offsets) {
        intake.date = Some((new_first + offset).date());
    }
}

fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}
