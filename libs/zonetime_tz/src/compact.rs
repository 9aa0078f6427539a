// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Compact timezone representation using recurring DST rules instead of transition tables.
//!
//! Each zone is a standard offset plus at most one yearly DST rule. The rule is
//! applied to every year, so a zone is only exact for the period in which its
//! current rules hold.

// Time constants
const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_DAY: i64 = 86400;

// Calendar constants for Howard Hinnant's date algorithms
/// Days from March 1, year 0 to Unix epoch (January 1, 1970)
const DAYS_FROM_CIVIL_EPOCH_TO_UNIX_EPOCH: i64 = 719468;
/// Days in a 400-year era (146097 = 400*365 + 97 leap days)
const DAYS_PER_ERA: i64 = 146097;

/// A compact timezone with an optional DST rule.
#[derive(Debug, Clone, Copy)]
pub struct Timezone {
    /// IANA timezone name (e.g., "Europe/Helsinki")
    pub name: &'static str,
    /// Standard time UTC offset in minutes (e.g., 120 for UTC+2)
    pub std_offset: i16,
    /// DST rule, if this timezone observes daylight saving time
    pub dst_rule: Option<DstRule>,
}

/// Daylight Saving Time rule.
#[derive(Debug, Clone, Copy)]
pub struct DstRule {
    /// When DST starts, in local standard time
    pub start: TransitionRule,
    /// When DST ends, in local daylight time
    pub end: TransitionRule,
    /// Additional offset during DST in minutes (typically +60)
    pub dst_offset_delta: i16,
}

/// Rule for when a DST transition occurs.
/// Encodes patterns like "last Sunday of March at 3:00 AM".
#[derive(Debug, Clone, Copy)]
pub struct TransitionRule {
    /// Month (1-12)
    pub month: u8,
    /// Week of month (1-4 for "first" through "fourth", 5 for "last")
    pub week: u8,
    /// Day of week (0 = Sunday, 1 = Monday, ..., 6 = Saturday)
    pub weekday: u8,
    /// Time of day in minutes from midnight (e.g., 120 for 2:00 AM)
    pub time: u16,
}

impl Timezone {
    /// Get the UTC offset in minutes for a given Unix timestamp (in seconds).
    ///
    /// Returns positive values for timezones ahead of UTC (e.g., +120 for UTC+2)
    /// and negative values for timezones behind UTC (e.g., -300 for UTC-5).
    #[inline]
    pub fn offset_at(&self, timestamp_secs: i64) -> i16 {
        match &self.dst_rule {
            Some(rule) if self.is_dst_active(timestamp_secs, rule) => {
                self.std_offset + rule.dst_offset_delta
            },
            _ => self.std_offset,
        }
    }

    /// The offset in minutes while DST is active, if the zone observes DST.
    pub fn dst_offset(&self) -> Option<i16> {
        self.dst_rule
            .as_ref()
            .map(|rule| self.std_offset + rule.dst_offset_delta)
    }

    fn is_dst_active(&self, timestamp_secs: i64, rule: &DstRule) -> bool {
        // The transition year is taken in local standard time
        let year = local_year(timestamp_secs, self.std_offset);

        let dst_start_utc = transition_timestamp_utc(year, &rule.start, self.std_offset);
        let dst_end_utc =
            transition_timestamp_utc(year, &rule.end, self.std_offset + rule.dst_offset_delta);

        if dst_start_utc < dst_end_utc {
            // Northern hemisphere: DST is between start and end
            timestamp_secs >= dst_start_utc && timestamp_secs < dst_end_utc
        } else {
            // Southern hemisphere: DST wraps around the year end
            timestamp_secs >= dst_start_utc || timestamp_secs < dst_end_utc
        }
    }
}

/// Year of a Unix timestamp as seen from a fixed offset.
fn local_year(timestamp_secs: i64, offset_minutes: i16) -> i32 {
    let local_secs = timestamp_secs + (offset_minutes as i64) * SECONDS_PER_MINUTE;
    let days = local_secs.div_euclid(SECONDS_PER_DAY);
    let (year, _month, _day) = days_to_ymd(days + DAYS_FROM_CIVIL_EPOCH_TO_UNIX_EPOCH);
    year
}

/// Convert days since March 1, year 0 to year/month/day.
/// Based on Howard Hinnant's date algorithms.
fn days_to_ymd(days: i64) -> (i32, u8, u8) {
    let era = days.div_euclid(DAYS_PER_ERA);
    let doe = days.rem_euclid(DAYS_PER_ERA); // day of era
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // year of era
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // day of year
    let mp = (5 * doy + 2) / 153; // month index (0 = Mar, 11 = Feb)
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    let y = if m <= 2 { y + 1 } else { y };
    (y as i32, m, d)
}

/// Convert year/month/day to days since March 1, year 0.
fn ymd_to_days(year: i32, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year } as i64;
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe
}

/// Calculate the UTC Unix timestamp of a DST transition.
/// The rule.time is in local time (minutes from midnight), and offset_minutes
/// is the offset that is active at the moment of transition.
fn transition_timestamp_utc(year: i32, rule: &TransitionRule, offset_minutes: i16) -> i64 {
    let first_of_month = ymd_to_days(year, rule.month, 1) - DAYS_FROM_CIVIL_EPOCH_TO_UNIX_EPOCH;

    // Unix day 0 was a Thursday
    let first_dow = (first_of_month + 4).rem_euclid(7) as u8;

    let target_day = if rule.week == 5 {
        let last_of_month = first_of_month + days_in_month(year, rule.month) as i64 - 1;
        let last_dow = (last_of_month + 4).rem_euclid(7) as u8;
        let days_back = (last_dow + 7 - rule.weekday) % 7;
        last_of_month - days_back as i64
    } else {
        let days_forward = (rule.weekday + 7 - first_dow) % 7;
        first_of_month + days_forward as i64 + (rule.week as i64 - 1) * 7
    };

    let local_timestamp = target_day * SECONDS_PER_DAY + rule.time as i64 * SECONDS_PER_MINUTE;
    local_timestamp - (offset_minutes as i64) * SECONDS_PER_MINUTE
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        },
        _ => 30,
    }
}

const fn at(month: u8, week: u8, weekday: u8, time: u16) -> TransitionRule {
    TransitionRule {
        month,
        week,
        weekday,
        time,
    }
}

const fn fixed(name: &'static str, std_offset: i16) -> Timezone {
    Timezone {
        name,
        std_offset,
        dst_rule: None,
    }
}

const fn seasonal(
    name: &'static str,
    std_offset: i16,
    start: TransitionRule,
    end: TransitionRule,
) -> Timezone {
    Timezone {
        name,
        std_offset,
        dst_rule: Some(DstRule {
            start,
            end,
            dst_offset_delta: 60,
        }),
    }
}

/// All known zones, sorted by name.
pub static TZ_VARIANTS: &[Timezone] = &[
    fixed("Africa/Johannesburg", 120),
    seasonal("America/New_York", -300, at(3, 2, 0, 120), at(11, 1, 0, 120)),
    seasonal("America/St_Johns", -210, at(3, 2, 0, 120), at(11, 1, 0, 120)),
    fixed("Asia/Kathmandu", 345),
    fixed("Asia/Kolkata", 330),
    fixed("Asia/Tokyo", 540),
    seasonal("Australia/Sydney", 600, at(10, 1, 0, 120), at(4, 1, 0, 180)),
    seasonal("Europe/Helsinki", 120, at(3, 5, 0, 180), at(10, 5, 0, 240)),
    seasonal("Europe/London", 0, at(3, 5, 0, 60), at(10, 5, 0, 120)),
    fixed("UTC", 0),
];

/// Names of all zones in [`TZ_VARIANTS`], in the same order.
pub static TZ_NAMES: &[&str] = &[
    "Africa/Johannesburg",
    "America/New_York",
    "America/St_Johns",
    "Asia/Kathmandu",
    "Asia/Kolkata",
    "Asia/Tokyo",
    "Australia/Sydney",
    "Europe/Helsinki",
    "Europe/London",
    "UTC",
];

/// Get the UTC offset in minutes for a timezone at a given Unix timestamp (in seconds).
pub fn get_offset(timezone_name: &str, timestamp_secs: i64) -> Option<i16> {
    let tz = lookup_timezone(timezone_name)?;
    Some(tz.offset_at(timestamp_secs))
}

/// Look up a timezone by name.
pub fn lookup_timezone(name: &str) -> Option<&'static Timezone> {
    TZ_VARIANTS
        .binary_search_by(|tz| tz.name.cmp(name))
        .ok()
        .map(|idx| &TZ_VARIANTS[idx])
}

/// List all available timezone names.
pub fn list_timezones() -> &'static [&'static str] {
    TZ_NAMES
}
