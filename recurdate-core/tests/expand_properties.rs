use chrono::{Datelike, NaiveDate};
use recurdate_core::{
    DailyStep, Frequency, MAX_OCCURRENCES, MAX_SCAN_DAYS, RecurrenceSpec, expand,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A spread of rules covering every frequency and qualifier, bounded and not.
fn sample_specs() -> Vec<RecurrenceSpec> {
    let starts = [
        date(2024, 1, 1),
        date(2024, 1, 31),
        date(2024, 2, 29),
        date(2023, 12, 31),
        date(2025, 6, 14),
    ];
    let ends = [None, Some(date(2024, 3, 1)), Some(date(2026, 12, 31))];

    let mut specs = Vec::new();
    for start in starts {
        for end in ends {
            for interval in [0, 1, 2, 5] {
                let mut rules = vec![
                    RecurrenceSpec::new(Frequency::Daily, start),
                    RecurrenceSpec::new(Frequency::Daily, start).with_daily_step(DailyStep::Interval),
                    RecurrenceSpec::new(Frequency::Weekly, start),
                    RecurrenceSpec::new(Frequency::Weekly, start).with_days_of_week([0, 6]),
                    RecurrenceSpec::new(Frequency::Weekly, start).with_days_of_week(0..7),
                    RecurrenceSpec::new(Frequency::Monthly, start),
                    RecurrenceSpec::new(Frequency::Monthly, start).with_day_of_month(31),
                    RecurrenceSpec::new(Frequency::Monthly, start).with_nth_weekday(5, 2),
                    RecurrenceSpec::new(Frequency::Monthly, start).with_nth_weekday(1, 0),
                    RecurrenceSpec::new(Frequency::Yearly, start),
                ];
                for rule in &mut rules {
                    rule.interval = interval;
                    rule.end = end;
                }
                specs.extend(rules);
            }
        }
    }
    specs
}

#[test]
fn series_is_strictly_increasing() {
    for spec in sample_specs() {
        let series = expand(&spec);
        for pair in series.as_slice().windows(2) {
            assert!(pair[0] < pair[1], "not increasing for {:?}", spec);
        }
    }
}

#[test]
fn series_stays_within_bounds() {
    for spec in sample_specs() {
        let start = spec.start.unwrap();
        for d in &expand(&spec) {
            assert!(*d >= start, "{} precedes start for {:?}", d, spec);
            if let Some(end) = spec.end {
                assert!(*d <= end, "{} exceeds end for {:?}", d, spec);
            }
        }
    }
}

#[test]
fn series_never_exceeds_output_cap() {
    for spec in sample_specs() {
        assert!(expand(&spec).len() <= MAX_OCCURRENCES);
    }
}

#[test]
fn series_stays_within_scan_window() {
    for spec in sample_specs() {
        let start = spec.start.unwrap();
        if let Some(last) = expand(&spec).last() {
            // Jumps can skip days but the scan budget is counted in candidates,
            // so only every-day walks are bounded by the window itself.
            if spec.effective_interval() == 1 && spec.daily_step == DailyStep::EveryDay {
                assert!((last - start).num_days() < MAX_SCAN_DAYS as i64);
            }
        }
    }
}

#[test]
fn expansion_is_idempotent() {
    for spec in sample_specs() {
        assert_eq!(expand(&spec), expand(&spec));
    }
}

#[test]
fn expanding_does_not_change_the_spec() {
    let spec = RecurrenceSpec::new(Frequency::Monthly, date(2024, 1, 31)).with_day_of_month(31);
    let before = spec.clone();
    let _ = expand(&spec);
    assert_eq!(spec, before);
}

#[test]
fn zero_interval_behaves_like_one() {
    for frequency in [Frequency::Weekly, Frequency::Monthly, Frequency::Yearly] {
        let base = RecurrenceSpec::new(frequency, date(2024, 1, 10)).with_days_of_week([3]);
        assert_eq!(
            expand(&base.clone().with_interval(0)),
            expand(&base.with_interval(1))
        );
    }
}

#[test]
fn weekly_series_only_uses_selected_days() {
    let spec = RecurrenceSpec::new(Frequency::Weekly, date(2024, 1, 1))
        .with_interval(3)
        .with_days_of_week([2, 4]);
    let series = expand(&spec);
    assert!(!series.is_empty());
    for d in &series {
        let index = d.weekday().num_days_from_sunday();
        assert!(index == 2 || index == 4);
    }
}

#[test]
fn monthly_series_hits_one_day_per_active_month() {
    let spec = RecurrenceSpec::new(Frequency::Monthly, date(2024, 1, 1))
        .with_interval(2)
        .with_day_of_month(31)
        .with_end(date(2024, 12, 31));
    let months: Vec<u32> = expand(&spec).iter().map(|d| d.month()).collect();
    assert_eq!(months, vec![1, 3, 5, 7, 9, 11]);
    let days: Vec<u32> = expand(&spec).iter().map(|d| d.day()).collect();
    assert_eq!(days, vec![31, 31, 31, 31, 30, 30]);
}

#[test]
fn february_clamps_for_day_thirty_one() {
    let spec = RecurrenceSpec::new(Frequency::Monthly, date(2024, 1, 31)).with_day_of_month(31);
    let series = expand(&spec);
    assert!(series.contains(date(2024, 2, 29)));
    assert!(series.contains(date(2024, 4, 30)));
    assert!(series.contains(date(2025, 2, 28)));
}

#[test]
fn leap_day_yearly_skips_common_years() {
    let series = expand(&RecurrenceSpec::new(Frequency::Yearly, date(2024, 2, 29)));
    assert!(series.iter().all(|d| d.year() != 2025 && d.year() != 2026));
    assert_eq!(series.as_slice()[1], date(2028, 2, 29));
}

#[test]
fn empty_weekly_day_set_terminates() {
    let spec = RecurrenceSpec::new(Frequency::Weekly, date(2024, 1, 1)).with_interval(1);
    assert!(expand(&spec).is_empty());
}
