use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// One day in a habit's streak timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakPoint {
    pub date: NaiveDate,
    pub streak: u32,
}

/// Percentage of days completed since the habit's first recorded entry.
///
/// The span runs from the earliest history date through `today` inclusive,
/// so the rate decays over time when no new entries are added. Days flagged
/// false count toward the span but not the completions. An empty history
/// yields 0.
pub fn completion_rate(history: &BTreeMap<NaiveDate, bool>, today: NaiveDate) -> f64 {
    let Some((&earliest, _)) = history.iter().next() else {
        return 0.0;
    };

    // A hand-edited file can put the earliest entry in the future; clamp the
    // span so the rate stays finite.
    let span = ((today - earliest).num_days() + 1).max(1);
    let completed = history.values().filter(|&&done| done).count();

    (completed as f64 / span as f64) * 100.0
}

/// Length of the longest run of consecutive completed days.
///
/// A run is broken by a calendar gap between recorded dates or by a day
/// explicitly flagged false. Returns 0 when nothing was ever completed.
pub fn longest_streak(history: &BTreeMap<NaiveDate, bool>) -> u32 {
    let mut current = 0u32;
    let mut longest = 0u32;
    let mut prev_date: Option<NaiveDate> = None;

    for (&date, &done) in history {
        if done {
            current = match prev_date {
                Some(prev) if (date - prev).num_days() == 1 => {
                    if current == 0 {
                        1
                    } else {
                        current + 1
                    }
                }
                _ => 1,
            };
            longest = longest.max(current);
        } else {
            // An explicit miss ends the run even without a calendar gap.
            current = 0;
        }
        prev_date = Some(date);
    }

    longest
}

/// Day-by-day streak values between the first and last recorded dates.
///
/// Every calendar day in that range gets exactly one point, gap days
/// included: completed days extend the running streak, while missed or
/// unrecorded days reset it to zero. The maximum over the timeline equals
/// [`longest_streak`]. An empty history yields an empty timeline.
pub fn streak_timeline(history: &BTreeMap<NaiveDate, bool>) -> Vec<StreakPoint> {
    let (Some((&first, _)), Some((&last, _))) =
        (history.iter().next(), history.iter().next_back())
    else {
        return Vec::new();
    };

    let mut points = Vec::with_capacity((last - first).num_days() as usize + 1);
    let mut streak = 0u32;
    let mut date = first;

    while date <= last {
        streak = match history.get(&date) {
            Some(true) => streak + 1,
            Some(false) | None => 0,
        };
        points.push(StreakPoint { date, streak });
        date += Duration::days(1);
    }

    points
}
