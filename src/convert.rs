// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Conversions between UTC and named zones.

use chrono::{FixedOffset, NaiveDateTime, Offset, TimeZone};
use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Error, Result};
use crate::timestamp::{Kind, Timestamp};
use crate::zone::{self, Tzdb, ZoneResolver};

const SECONDS_PER_HOUR: i32 = 3600;

static SYSTEM: Lazy<TimeConverter> = Lazy::new(TimeConverter::system);

/// Converts timestamps using zone rules from `R` and host rules from `H`.
///
/// `Local` timestamps are read against `H`; named zones are looked up through
/// `R` on every call.
#[derive(Debug, Clone)]
pub struct TimeConverter<R = Tzdb, H = chrono_tz::Tz> {
    resolver: R,
    host: H,
}

impl TimeConverter {
    /// The IANA database with the host zone of this process.
    pub fn system() -> Self {
        Self::new(Tzdb, zone::host_zone())
    }
}

impl<R, H> TimeConverter<R, H>
where
    R: ZoneResolver,
    H: TimeZone,
{
    pub fn new(resolver: R, host: H) -> Self {
        Self { resolver, host }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Wall-clock reading in `zone_id` at the instant denoted by `ts`.
    ///
    /// `Unspecified` fields are taken as UTC fields. The result is
    /// `Unspecified`.
    pub fn to_zoned_time(&self, ts: Timestamp, zone_id: &str) -> Result<Timestamp> {
        let instant = self.instant(ts);
        let zone = self.resolve(zone_id)?;
        let local = zone.from_utc_datetime(&instant).naive_local();
        Timestamp::new(local, Kind::Unspecified)
    }

    /// UTC instant of the wall-clock reading `ts` in `zone_id`.
    ///
    /// The fields of `ts` are always read as local to `zone_id`, whatever its
    /// kind. Readings skipped or repeated by a transition fail with
    /// [`Error::StrictZoneMapping`].
    pub fn to_utc_time(&self, ts: Timestamp, zone_id: &str) -> Result<Timestamp> {
        let zone = self.resolve(zone_id)?;
        let instant = zone::map_strict(&zone, zone_id, &ts.naive())?;
        Timestamp::new(instant, Kind::Utc)
    }

    /// Offset of `zone_id` from UTC at the instant denoted by `ts`, in whole
    /// hours truncated toward zero (+05:30 gives 5, -03:30 gives -3).
    pub fn offset_hours(&self, ts: Timestamp, zone_id: &str) -> Result<i32> {
        let offset = self.utc_offset(ts, zone_id)?;
        Ok(offset.local_minus_utc() / SECONDS_PER_HOUR)
    }

    /// Exact offset of `zone_id` from UTC at the instant denoted by `ts`.
    pub fn utc_offset(&self, ts: Timestamp, zone_id: &str) -> Result<FixedOffset> {
        let instant = self.instant(ts);
        let zone = self.resolve(zone_id)?;
        Ok(zone.offset_from_utc_datetime(&instant).fix())
    }

    /// UTC instant of `ts`, reading `Unspecified` fields as UTC.
    fn instant(&self, ts: Timestamp) -> NaiveDateTime {
        match ts.kind() {
            Kind::Utc | Kind::Unspecified => ts.naive(),
            Kind::Local => zone::map_lenient(&self.host, &ts.naive()),
        }
    }

    fn resolve(&self, zone_id: &str) -> Result<R::Zone> {
        self.resolver.resolve(zone_id).ok_or_else(|| {
            debug!("Invalid timezone: {}", zone_id);
            Error::InvalidTimeZone {
                zone_id: zone_id.to_string(),
            }
        })
    }
}

/// [`TimeConverter::to_zoned_time`] with the IANA database and host zone.
pub fn to_zoned_time(ts: Timestamp, zone_id: &str) -> Result<Timestamp> {
    SYSTEM.to_zoned_time(ts, zone_id)
}

/// [`TimeConverter::to_utc_time`] with the IANA database and host zone.
pub fn to_utc_time(ts: Timestamp, zone_id: &str) -> Result<Timestamp> {
    SYSTEM.to_utc_time(ts, zone_id)
}

/// [`TimeConverter::offset_hours`] with the IANA database and host zone.
pub fn offset_hours(ts: Timestamp, zone_id: &str) -> Result<i32> {
    SYSTEM.offset_hours(ts, zone_id)
}

/// [`TimeConverter::utc_offset`] with the IANA database and host zone.
pub fn utc_offset(ts: Timestamp, zone_id: &str) -> Result<FixedOffset> {
    SYSTEM.utc_offset(ts, zone_id)
}
