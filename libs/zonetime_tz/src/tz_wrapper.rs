// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Chrono-compatible timezone wrapper.
//!
//! This module provides a `Tz` type that implements chrono's `TimeZone` trait,
//! including exact gap and overlap detection when mapping local readings.

use std::fmt;
use std::str::FromStr;

use chrono::{
    FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc,
};

use crate::compact::Timezone;

/// A timezone that can be used with chrono.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tz {
    /// UTC timezone (no offset, no DST)
    Utc,
    /// A named zone from the compact table
    Named(TzInner),
}

/// Index into TZ_VARIANTS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TzInner {
    index: u16,
}

impl Tz {
    /// Get the IANA name of this timezone.
    pub fn name(&self) -> &'static str {
        self.timezone().map(|tz| tz.name).unwrap_or("UTC")
    }

    /// The compact rules behind this zone. `None` for [`Tz::Utc`].
    pub fn timezone(&self) -> Option<&'static Timezone> {
        match self {
            Tz::Utc => None,
            Tz::Named(inner) => crate::TZ_VARIANTS.get(inner.index as usize),
        }
    }

    /// Get the UTC offset in minutes at a given Unix timestamp (in seconds).
    pub fn offset_at_timestamp(&self, timestamp_secs: i64) -> i16 {
        self.timezone()
            .map(|tz| tz.offset_at(timestamp_secs))
            .unwrap_or(0)
    }

    /// Get the UTC offset in seconds at a given Unix timestamp (in seconds).
    pub fn offset_seconds_at(&self, timestamp_secs: i64) -> i32 {
        self.offset_at_timestamp(timestamp_secs) as i32 * 60
    }

    fn offset_minutes(&self, minutes: i16) -> TzOffset {
        TzOffset {
            tz: *self,
            offset_secs: minutes as i32 * 60,
        }
    }
}

impl fmt::Display for Tz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Tz {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "UTC" || s == "Etc/UTC" || s == "Etc/GMT" {
            return Ok(Tz::Utc);
        }

        match crate::TZ_VARIANTS.binary_search_by(|tz| tz.name.cmp(s)) {
            Ok(idx) => Ok(Tz::Named(TzInner { index: idx as u16 })),
            Err(_) => Err(ParseError {
                name: s.to_string(),
            }),
        }
    }
}

/// Error returned when parsing an unknown timezone name.
#[derive(Debug, Clone)]
pub struct ParseError {
    name: String,
}

impl ParseError {
    /// The name that failed to resolve.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid timezone: {}", self.name)
    }
}

impl std::error::Error for ParseError {}

/// The UTC offset of a [`Tz`] at some instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TzOffset {
    tz: Tz,
    /// Offset in seconds from UTC
    offset_secs: i32,
}

impl TzOffset {
    /// Get the offset in seconds (positive = east of UTC).
    pub fn local_minus_utc(&self) -> i32 {
        self.offset_secs
    }

    /// Get the offset in minutes.
    pub fn local_minus_utc_minutes(&self) -> i16 {
        (self.offset_secs / 60) as i16
    }
}

impl fmt::Display for TzOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_mins = self.offset_secs / 60;
        let sign = if total_mins < 0 { '-' } else { '+' };
        let hours = (total_mins / 60).abs();
        let mins = (total_mins % 60).abs();
        write!(f, "{}{:02}:{:02}", sign, hours, mins)
    }
}

impl Offset for TzOffset {
    fn fix(&self) -> FixedOffset {
        FixedOffset::east_opt(self.offset_secs).unwrap_or_else(|| Utc.fix())
    }
}

impl TimeZone for Tz {
    type Offset = TzOffset;

    fn from_offset(offset: &Self::Offset) -> Self {
        offset.tz
    }

    fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<Self::Offset> {
        self.offset_from_local_datetime(&local.and_time(NaiveTime::default()))
    }

    fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<Self::Offset> {
        let Some(zone) = self.timezone() else {
            return LocalResult::Single(self.offset_minutes(0));
        };
        let Some(dst) = zone.dst_offset() else {
            return LocalResult::Single(self.offset_minutes(zone.std_offset));
        };

        // A candidate offset is valid when the instant it produces is
        // actually observed with that offset.
        let local_secs = local.and_utc().timestamp();
        let observed = |minutes: i16| zone.offset_at(local_secs - minutes as i64 * 60) == minutes;

        match (observed(dst), observed(zone.std_offset)) {
            // The larger offset yields the earlier instant
            (true, true) => LocalResult::Ambiguous(
                self.offset_minutes(dst),
                self.offset_minutes(zone.std_offset),
            ),
            (true, false) => LocalResult::Single(self.offset_minutes(dst)),
            (false, true) => LocalResult::Single(self.offset_minutes(zone.std_offset)),
            (false, false) => LocalResult::None,
        }
    }

    fn offset_from_utc_date(&self, utc: &NaiveDate) -> Self::Offset {
        self.offset_from_utc_datetime(&utc.and_time(NaiveTime::default()))
    }

    fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> Self::Offset {
        let timestamp = utc.and_utc().timestamp();
        TzOffset {
            tz: *self,
            offset_secs: self.offset_seconds_at(timestamp),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_utc() {
        assert_eq!("UTC".parse::<Tz>().unwrap(), Tz::Utc);
        assert_eq!("Etc/UTC".parse::<Tz>().unwrap(), Tz::Utc);
    }

    #[test]
    fn test_parse_named() {
        let tz: Tz = "Europe/Helsinki".parse().unwrap();
        assert_eq!(tz.name(), "Europe/Helsinki");
        assert_eq!(tz.to_string(), "Europe/Helsinki");
    }

    #[test]
    fn test_parse_invalid() {
        let err = "Invalid/Zone".parse::<Tz>().unwrap_err();
        assert_eq!(err.name(), "Invalid/Zone");
        assert_eq!(err.to_string(), "Invalid timezone: Invalid/Zone");
    }

    #[test]
    fn test_named_offset() {
        let tz: Tz = "Europe/Helsinki".parse().unwrap();
        // 2020-01-01 02:00:00 UTC, EET = UTC+2
        assert_eq!(tz.offset_at_timestamp(1577844000), 120);
        // 2020-07-01 00:00:00 UTC, EEST = UTC+3
        assert_eq!(tz.offset_at_timestamp(1593561600), 180);
    }

    #[test]
    fn test_offset_display() {
        let tz: Tz = "America/St_Johns".parse().unwrap();
        let offset = tz.offset_from_utc_datetime(&local(2024, 1, 1, 12, 0));
        assert_eq!(offset.to_string(), "-03:30");
        assert_eq!(offset.local_minus_utc_minutes(), -210);

        let tz: Tz = "Asia/Kathmandu".parse().unwrap();
        let offset = tz.offset_from_utc_datetime(&local(2024, 1, 1, 12, 0));
        assert_eq!(offset.to_string(), "+05:45");
    }

    #[test]
    fn test_from_offset_keeps_zone() {
        let tz: Tz = "Europe/London".parse().unwrap();
        let dt = tz.from_utc_datetime(&local(2024, 7, 1, 12, 0));
        assert_eq!(dt.timezone(), tz);
        assert_eq!(dt.naive_local(), local(2024, 7, 1, 13, 0));
    }

    #[test]
    fn test_local_gap_is_none() {
        let tz: Tz = "Europe/Helsinki".parse().unwrap();
        // Clocks jump from 03:00 to 04:00 on 2020-03-29
        assert_eq!(
            tz.offset_from_local_datetime(&local(2020, 3, 29, 3, 30)),
            LocalResult::None
        );
    }

    #[test]
    fn test_local_overlap_is_ambiguous() {
        let tz: Tz = "Europe/Helsinki".parse().unwrap();
        // Clocks fall back from 04:00 to 03:00 on 2020-10-25
        match tz.offset_from_local_datetime(&local(2020, 10, 25, 3, 30)) {
            LocalResult::Ambiguous(earlier, later) => {
                assert_eq!(earlier.local_minus_utc(), 3 * 3600);
                assert_eq!(later.local_minus_utc(), 2 * 3600);
            },
            other => panic!("expected an ambiguous mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_local_southern_hemisphere() {
        let tz: Tz = "Australia/Sydney".parse().unwrap();
        // January is summer time in Sydney
        let offset = tz.offset_from_local_datetime(&local(2024, 1, 15, 12, 0));
        assert_eq!(offset.single().map(|o| o.local_minus_utc_minutes()), Some(660));
        // Clocks jump from 02:00 to 03:00 on 2024-10-06
        assert_eq!(
            tz.offset_from_local_datetime(&local(2024, 10, 6, 2, 30)),
            LocalResult::None
        );
    }
}
