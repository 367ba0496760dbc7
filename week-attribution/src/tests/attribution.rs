use crate::attribution::{
    current_week, week_number_in_month, weeks_belonging_to_month, weeks_overlapping_month,
};
use crate::membership::month_for_week;
use crate::tests::keys;
use crate::{ctx, month, week};

#[test]
fn january_2024_starts_on_monday() {
    let weeks = weeks_belonging_to_month(month!("2024-01"), &ctx!("2024-06-01"));

    assert_eq!(
        keys(&weeks),
        ["2024-01-01", "2024-01-08", "2024-01-15", "2024-01-22", "2024-01-29"],
    );

    // The last week ends in February but still belongs to January
    let last = weeks.last().unwrap();
    assert_eq!(last.end(), crate::date!("2024-02-04"));
    assert_eq!(month_for_week("2024-01-29").unwrap(), month!("2024-01"));
    assert_eq!(weeks.month(), month!("2024-01"));
}

#[test]
fn overlapping_includes_previous_month_week() {
    let ctx = ctx!("2024-06-01");
    let overlapping = weeks_overlapping_month(month!("2024-02"), &ctx);
    let attributed = weeks_belonging_to_month(month!("2024-02"), &ctx);

    assert_eq!(
        keys(&overlapping),
        ["2024-01-29", "2024-02-05", "2024-02-12", "2024-02-19", "2024-02-26"],
    );

    assert_eq!(
        keys(&attributed),
        ["2024-02-05", "2024-02-12", "2024-02-19", "2024-02-26"],
    );

    assert!(overlapping.contains(week!("2024-01-29")));
    assert!(!attributed.contains(week!("2024-01-29")));
    assert_eq!(keys(overlapping.attributed_elsewhere()), ["2024-01-29"]);
}

#[test]
fn overlapping_equals_attributed_when_month_starts_on_monday() {
    let ctx = ctx!("2024-06-01");

    // February 2021 is exactly 4 weeks, from Monday 1st to Sunday 28th
    let overlapping = weeks_overlapping_month(month!("2021-02"), &ctx);
    let attributed = weeks_belonging_to_month(month!("2021-02"), &ctx);
    assert_eq!(overlapping.len(), 4);
    assert_eq!(keys(&overlapping), keys(&attributed));
    assert_eq!(overlapping.attributed_elsewhere().count(), 0);
}

#[test]
fn month_starting_on_sunday() {
    let ctx = ctx!("2024-06-01");

    // September 2024 starts on a Sunday and ends on a Monday
    let overlapping = weeks_overlapping_month(month!("2024-09"), &ctx);
    let attributed = weeks_belonging_to_month(month!("2024-09"), &ctx);

    assert_eq!(
        keys(&overlapping),
        ["2024-08-26", "2024-09-02", "2024-09-09", "2024-09-16", "2024-09-23", "2024-09-30"],
    );

    assert_eq!(
        keys(&attributed),
        ["2024-09-02", "2024-09-09", "2024-09-16", "2024-09-23", "2024-09-30"],
    );

    // The last week is attributed to September, even with 6 days in October
    assert_eq!(attributed.last().unwrap().label(), "Sep 30 - Oct 6");
    assert!(!weeks_belonging_to_month(month!("2024-10"), &ctx).contains(week!("2024-09-30")));
}

#[test]
fn attribution_across_years() {
    let ctx = ctx!("2025-06-01");
    let december = weeks_belonging_to_month(month!("2024-12"), &ctx);
    let january = weeks_belonging_to_month(month!("2025-01"), &ctx);

    assert_eq!(december.last().unwrap().week_key(), week!("2024-12-30"));
    assert_eq!(january.first().unwrap().week_key(), week!("2025-01-06"));
    assert_eq!(week_number_in_month(week!("2024-12-30"), month!("2024-12")), 5);
}

#[test]
fn week_numbers() {
    assert_eq!(week_number_in_month(week!("2024-01-01"), month!("2024-01")), 1);
    assert_eq!(week_number_in_month(week!("2024-01-15"), month!("2024-01")), 3);
    assert_eq!(week_number_in_month(week!("2024-01-29"), month!("2024-01")), 5);
    assert_eq!(week_number_in_month(week!("2024-02-05"), month!("2024-02")), 1);
    assert_eq!(week_number_in_month(week!("2024-02-26"), month!("2024-02")), 4);
}

#[test]
fn week_number_fallback() {
    // 2024-01-29 belongs to January, not to February
    assert_eq!(week_number_in_month(week!("2024-01-29"), month!("2024-02")), 1);
    assert_eq!(week_number_in_month(week!("2023-05-01"), month!("2024-02")), 1);

    let february = weeks_belonging_to_month(month!("2024-02"), &ctx!("2024-06-01"));
    assert_eq!(february.position(week!("2024-01-29")), None);
    assert_eq!(february.position(week!("2024-02-19")), Some(3));
}

#[test]
fn started_weeks() {
    let january = weeks_belonging_to_month(month!("2024-01"), &ctx!("2024-01-17"));
    let ctx = ctx!("2024-01-17");
    assert_eq!(keys(january.started(&ctx)), ["2024-01-01", "2024-01-08", "2024-01-15"]);

    let complete: Vec<_> = january.iter().filter(|week| week.is_complete()).collect();
    assert_eq!(keys(complete), ["2024-01-01", "2024-01-08"]);

    // Nothing has started yet
    assert_eq!(january.started(&ctx!("2023-12-31")).count(), 0);

    let overlapping = weeks_overlapping_month(month!("2024-02"), &ctx!("2024-02-01"));
    assert_eq!(keys(overlapping.started(&ctx!("2024-02-01"))), ["2024-01-29"]);
}

#[test]
fn current_week_follows_context() {
    let week = current_week(&ctx!("2024-02-04")).unwrap();
    assert_eq!(week.week_key(), week!("2024-01-29"));
    assert!(!week.is_complete());

    let week = current_week(&ctx!("2024-02-05")).unwrap();
    assert_eq!(week.week_key(), week!("2024-02-05"));

    assert!(current_week(&ctx!("0000-01-01")).is_none());
}

#[test]
fn owned_iteration() {
    let weeks = weeks_belonging_to_month(month!("2024-03"), &ctx!("2024-06-01"));
    let labels: Vec<String> = weeks
        .into_iter()
        .map(|week| week.label().to_string())
        .collect();

    assert_eq!(labels, ["Mar 4-10", "Mar 11-17", "Mar 18-24", "Mar 25-31"]);
}

#[test]
fn first_and_last_supported_months() {
    let ctx = ctx!("2024-01-01");

    // 0000-01-01 is a Saturday, its week started in year -1
    let first = weeks_belonging_to_month(month!("0000-01"), &ctx);
    assert_eq!(keys(&first), ["0000-01-03", "0000-01-10", "0000-01-17", "0000-01-24", "0000-01-31"]);
    let first = weeks_overlapping_month(month!("0000-01"), &ctx);
    assert_eq!(first[0].week_key(), week!("0000-01-03"));
    assert_eq!(first.len(), 5);

    // 9999-12-27 is the last week with a key
    let last = weeks_belonging_to_month(month!("9999-12"), &ctx);
    assert_eq!(keys(&last), ["9999-12-06", "9999-12-13", "9999-12-20", "9999-12-27"]);
    assert_eq!(week_number_in_month(week!("9999-12-27"), month!("9999-12")), 4);
}
