// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Comparison tests between chrono-tz and the compact zone table.
//!
//! The compact table only carries the rules currently in force, so the
//! comparison is limited to years in which every zone's rules were stable.

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz as ChronoTz;
use zonetime_tz::{list_timezones, Tz as CompactTz};

const YEARS: std::ops::RangeInclusive<i32> = 2012..=2024;

/// Get offset in minutes using chrono-tz
fn chrono_tz_offset(tz_name: &str, timestamp_secs: i64) -> i16 {
    let tz: ChronoTz = tz_name.parse().unwrap();
    let utc = DateTime::from_timestamp(timestamp_secs, 0).unwrap();
    let local = utc.with_timezone(&tz);
    (local.offset().fix().local_minus_utc() / 60) as i16
}

/// Get offset in minutes using the compact implementation
fn compact_tz_offset(tz_name: &str, timestamp_secs: i64) -> i16 {
    let tz: CompactTz = tz_name.parse().unwrap();
    tz.offset_at_timestamp(timestamp_secs)
}

fn assert_offsets_match(tz_name: &str, timestamp_secs: i64, label: &str) {
    let chrono_offset = chrono_tz_offset(tz_name, timestamp_secs);
    let compact_offset = compact_tz_offset(tz_name, timestamp_secs);

    assert_eq!(
        chrono_offset, compact_offset,
        "Offset mismatch for {} at {} (ts={}): chrono-tz={}, compact={}",
        tz_name, label, timestamp_secs, chrono_offset, compact_offset
    );
}

/// All offsets (in seconds) a local reading maps to, in ascending order.
fn local_offsets<Z: TimeZone>(tz: &Z, local: &NaiveDateTime) -> Vec<i32> {
    let mut offsets: Vec<i32> = match tz.offset_from_local_datetime(local) {
        LocalResult::Single(o) => vec![o.fix().local_minus_utc()],
        LocalResult::Ambiguous(a, b) => vec![a.fix().local_minus_utc(), b.fix().local_minus_utc()],
        LocalResult::None => vec![],
    };
    offsets.sort();
    offsets
}

/// Walk every day of the given years, probing around the usual transition hours.
fn for_each_probe(mut probe: impl FnMut(NaiveDateTime)) {
    for year in YEARS {
        let mut date = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
        while date.year() == year {
            for hour in [0, 1, 2, 3, 4, 12, 23] {
                for minute in [0, 30, 59] {
                    probe(date.and_hms_opt(hour, minute, 0).unwrap());
                }
            }
            date = date.succ_opt().unwrap();
        }
    }
}

#[test]
fn test_utc_offsets_match_chrono_tz() {
    for tz_name in list_timezones() {
        for_each_probe(|dt| {
            let ts = dt.and_utc().timestamp();
            assert_offsets_match(tz_name, ts, &format!("{} UTC", dt));
        });
    }
}

#[test]
fn test_local_mapping_matches_chrono_tz() {
    for tz_name in list_timezones() {
        let chrono_tz: ChronoTz = tz_name.parse().unwrap();
        let compact_tz: CompactTz = tz_name.parse().unwrap();
        for_each_probe(|dt| {
            assert_eq!(
                local_offsets(&chrono_tz, &dt),
                local_offsets(&compact_tz, &dt),
                "Local mapping mismatch for {} at {}",
                tz_name,
                dt
            );
        });
    }
}

#[test]
fn test_helsinki_transitions_with_second_precision() {
    // 2020-03-29 01:00:00 UTC and 2020-10-25 01:00:00 UTC
    for ts in [1585443600, 1603587600] {
        for delta in [-60, -1, 0, 1, 60] {
            assert_offsets_match("Europe/Helsinki", ts + delta, &format!("{:+}s", delta));
        }
    }
}
