// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Timestamps tagged with the kind of clock their fields were read from.
//!
//! A [`Timestamp`] is a wall-clock reading between 0001-01-01T00:00:00 and
//! 9999-12-31T23:59:59.9999999 with a resolution of one tick (100 ns), plus a
//! [`Kind`] telling how the reading relates to an instant.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::error::{Error, Result};
use crate::round;

/// Number of ticks in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;
/// Number of nanoseconds in one tick.
pub const NANOS_PER_TICK: u32 = 100;

/// Seconds from 0001-01-01T00:00:00 to the Unix epoch
const SECONDS_FROM_CALENDAR_EPOCH_TO_UNIX_EPOCH: i64 = 62_135_596_800;
/// Unix timestamp of 9999-12-31T23:59:59
const MAX_UNIX_SECONDS: i64 = 253_402_300_799;
/// Ticks of 9999-12-31T23:59:59.9999999
pub const MAX_TICKS: i64 = 3_155_378_975_999_999_999;

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// How the calendar fields of a [`Timestamp`] are to be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A naive reading with no zone attached.
    #[default]
    Unspecified,
    /// A reading of the host's local clock.
    Local,
    /// A reading of a UTC clock.
    Utc,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Unspecified => "Unspecified",
            Kind::Local => "Local",
            Kind::Utc => "Utc",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Timestamp {
    naive: NaiveDateTime,
    kind: Kind,
}

impl Timestamp {
    /// Tag `naive` with `kind`. Precision below one tick is dropped and a
    /// leap second is folded into the last tick of its minute.
    pub fn new(naive: NaiveDateTime, kind: Kind) -> Result<Self> {
        let secs = naive.and_utc().timestamp();
        if !(-SECONDS_FROM_CALENDAR_EPOCH_TO_UNIX_EPOCH..=MAX_UNIX_SECONDS).contains(&secs) {
            return Err(Error::OutOfRange);
        }

        let nanos = naive.nanosecond().min(999_999_999);
        let naive = naive
            .with_nanosecond(nanos - nanos % NANOS_PER_TICK)
            .ok_or(Error::OutOfRange)?;
        Ok(Self { naive, kind })
    }

    pub fn unspecified(naive: NaiveDateTime) -> Result<Self> {
        Self::new(naive, Kind::Unspecified)
    }

    pub fn local(naive: NaiveDateTime) -> Result<Self> {
        Self::new(naive, Kind::Local)
    }

    pub fn utc(naive: NaiveDateTime) -> Result<Self> {
        Self::new(naive, Kind::Utc)
    }

    /// Build from calendar fields. Fields that do not form a valid date and
    /// time fail with [`Error::OutOfRange`].
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        kind: Kind,
    ) -> Result<Self> {
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .ok_or(Error::OutOfRange)?;
        Self::new(naive, kind)
    }

    /// Build from a tick count since 0001-01-01T00:00:00.
    pub fn from_ticks(ticks: i64, kind: Kind) -> Result<Self> {
        if !(0..=MAX_TICKS).contains(&ticks) {
            return Err(Error::OutOfRange);
        }

        let secs = ticks / TICKS_PER_SECOND - SECONDS_FROM_CALENDAR_EPOCH_TO_UNIX_EPOCH;
        let nanos = (ticks % TICKS_PER_SECOND) as u32 * NANOS_PER_TICK;
        let naive = DateTime::from_timestamp(secs, nanos)
            .ok_or(Error::OutOfRange)?
            .naive_utc();
        Ok(Self { naive, kind })
    }

    /// Ticks (100 ns) elapsed since 0001-01-01T00:00:00.
    pub fn ticks(&self) -> i64 {
        let secs = self.naive.and_utc().timestamp() + SECONDS_FROM_CALENDAR_EPOCH_TO_UNIX_EPOCH;
        secs * TICKS_PER_SECOND + (self.naive.nanosecond() / NANOS_PER_TICK) as i64
    }

    /// The calendar fields.
    pub fn naive(&self) -> NaiveDateTime {
        self.naive
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Same calendar fields, different kind.
    pub fn with_kind(self, kind: Kind) -> Self {
        Self { kind, ..self }
    }

    /// See [`crate::round_up`].
    pub fn round_up(self, unit: TimeDelta) -> Result<Self> {
        round::round_up(self, unit)
    }

    /// See [`crate::round_down`].
    pub fn round_down(self, unit: TimeDelta) -> Result<Self> {
        round::round_down(self, unit)
    }
}

/// ISO 8601 without offset; `Utc` readings carry a trailing `Z`.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.naive.format(FORMAT))?;
        if self.kind == Kind::Utc {
            f.write_str("Z")?;
        }
        Ok(())
    }
}

/// Parses `YYYY-MM-DDTHH:MM:SS[.fffffff][Z]`. A trailing `Z` yields a `Utc`
/// timestamp, anything else is `Unspecified`.
impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (fields, kind) = match s.strip_suffix('Z') {
            Some(fields) => (fields, Kind::Utc),
            None => (s, Kind::Unspecified),
        };
        let naive = NaiveDateTime::parse_from_str(fields, FORMAT).map_err(|_| {
            Error::InvalidFormat {
                input: s.to_string(),
            }
        })?;
        Self::new(naive, kind)
    }
}
