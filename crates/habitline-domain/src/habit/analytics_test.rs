#[cfg(test)]
mod tests {
    use super::super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn history(entries: &[(u32, bool)]) -> BTreeMap<NaiveDate, bool> {
        entries
            .iter()
            .map(|&(d, done)| (date(2024, 1, d), done))
            .collect()
    }

    #[test]
    fn test_empty_history_yields_zeroes() {
        let empty = BTreeMap::new();

        assert_eq!(completion_rate(&empty, date(2024, 1, 15)), 0.0);
        assert_eq!(longest_streak(&empty), 0);
        assert!(streak_timeline(&empty).is_empty());
    }

    #[test]
    fn test_completion_rate_single_entry_today() {
        let history = history(&[(15, true)]);

        let rate = completion_rate(&history, date(2024, 1, 15));

        assert_eq!(rate, 100.0);
    }

    #[test]
    fn test_completion_rate_single_entry_nine_days_ago() {
        // Span is 10 days (first entry through today inclusive), one completed.
        let history = history(&[(1, true)]);

        let rate = completion_rate(&history, date(2024, 1, 10));

        assert_eq!(rate, 10.0);
    }

    #[test]
    fn test_completion_rate_counts_only_true_entries() {
        let history = history(&[(1, true), (2, false), (3, true)]);

        let rate = completion_rate(&history, date(2024, 1, 4));

        // 2 completions over a 4-day span
        assert_eq!(rate, 50.0);
    }

    #[test]
    fn test_completion_rate_false_entry_still_anchors_span() {
        // The earliest entry sets the span even when it is a miss.
        let history = history(&[(1, false), (10, true)]);

        let rate = completion_rate(&history, date(2024, 1, 10));

        assert_eq!(rate, 10.0);
    }

    #[test]
    fn test_completion_rate_clamps_future_dated_history() {
        // Hand-edited file whose earliest entry is after "today"
        let history = history(&[(20, true)]);

        let rate = completion_rate(&history, date(2024, 1, 10));

        assert_eq!(rate, 100.0);
    }

    #[test]
    fn test_completion_rate_full_consecutive_run_is_100() {
        let history = history(&[(1, true), (2, true), (3, true), (4, true)]);

        let rate = completion_rate(&history, date(2024, 1, 4));

        assert_eq!(rate, 100.0);
    }

    #[test]
    fn test_longest_streak_breaks_on_gap() {
        let history = history(&[(1, true), (2, true), (4, true)]);

        assert_eq!(longest_streak(&history), 2);
    }

    #[test]
    fn test_longest_streak_full_run() {
        let history = history(&[(1, true), (2, true), (3, true), (4, true), (5, true)]);

        assert_eq!(longest_streak(&history), 5);
    }

    #[test]
    fn test_longest_streak_breaks_on_explicit_miss() {
        // A false entry ends the run even though the dates are consecutive.
        let history = history(&[(1, true), (2, false), (3, true)]);

        assert_eq!(longest_streak(&history), 1);
    }

    #[test]
    fn test_longest_streak_resumes_after_miss() {
        let history = history(&[(1, true), (2, false), (3, true), (4, true), (5, true)]);

        assert_eq!(longest_streak(&history), 3);
    }

    #[test]
    fn test_longest_streak_all_false_is_zero() {
        let history = history(&[(1, false), (2, false)]);

        assert_eq!(longest_streak(&history), 0);
    }

    #[test]
    fn test_longest_streak_later_run_wins() {
        let history = history(&[(1, true), (3, true), (4, true), (5, true)]);

        assert_eq!(longest_streak(&history), 3);
    }

    #[test]
    fn test_timeline_emits_one_point_per_calendar_day() {
        let history = history(&[(1, true), (2, true), (4, true)]);

        let timeline = streak_timeline(&history);

        let expected = vec![
            StreakPoint { date: date(2024, 1, 1), streak: 1 },
            StreakPoint { date: date(2024, 1, 2), streak: 2 },
            StreakPoint { date: date(2024, 1, 3), streak: 0 },
            StreakPoint { date: date(2024, 1, 4), streak: 1 },
        ];
        assert_eq!(timeline, expected);
    }

    #[test]
    fn test_timeline_resets_on_explicit_miss() {
        let history = history(&[(1, true), (2, false), (3, true)]);

        let timeline = streak_timeline(&history);

        let expected = vec![
            StreakPoint { date: date(2024, 1, 1), streak: 1 },
            StreakPoint { date: date(2024, 1, 2), streak: 0 },
            StreakPoint { date: date(2024, 1, 3), streak: 1 },
        ];
        assert_eq!(timeline, expected);
    }

    #[test]
    fn test_timeline_single_entry() {
        let history = history(&[(7, true)]);

        let timeline = streak_timeline(&history);

        assert_eq!(
            timeline,
            vec![StreakPoint { date: date(2024, 1, 7), streak: 1 }]
        );
    }

    #[test]
    fn test_timeline_max_equals_longest_streak() {
        let cases = [
            history(&[(1, true), (2, true), (4, true)]),
            history(&[(1, true), (2, false), (3, true), (4, true)]),
            history(&[(2, false), (5, true), (6, true), (9, false)]),
            history(&[(1, false)]),
        ];

        for history in &cases {
            let max_point = streak_timeline(history)
                .iter()
                .map(|p| p.streak)
                .max()
                .unwrap_or(0);
            assert_eq!(max_point, longest_streak(history));
        }
    }

    #[test]
    fn test_timeline_spans_month_boundary() {
        let mut history = BTreeMap::new();
        history.insert(date(2024, 1, 31), true);
        history.insert(date(2024, 2, 1), true);

        let timeline = streak_timeline(&history);

        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[1].streak, 2);
    }
}
