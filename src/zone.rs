// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Zone lookup and the mapping of wall-clock readings onto instants.

use chrono::{LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone};
use tracing::{debug, trace};

use crate::config;
use crate::error::{Error, MappingFailure, Result};

/// Resolves zone identifiers into zone rules.
pub trait ZoneResolver {
    type Zone: TimeZone;

    /// `None` when the identifier is unknown.
    fn resolve(&self, zone_id: &str) -> Option<Self::Zone>;
}

impl<R: ZoneResolver + ?Sized> ZoneResolver for &R {
    type Zone = R::Zone;

    fn resolve(&self, zone_id: &str) -> Option<Self::Zone> {
        (**self).resolve(zone_id)
    }
}

/// The IANA time zone database, as compiled into chrono-tz.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tzdb;

impl ZoneResolver for Tzdb {
    type Zone = chrono_tz::Tz;

    fn resolve(&self, zone_id: &str) -> Option<Self::Zone> {
        zone_id.parse().ok()
    }
}

/// The compact zone table of zonetime_tz. Holds a few zones with their current
/// rules only, which makes it deterministic across tzdata releases.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactTzdb;

impl ZoneResolver for CompactTzdb {
    type Zone = zonetime_tz::Tz;

    fn resolve(&self, zone_id: &str) -> Option<Self::Zone> {
        zone_id.parse().ok()
    }
}

/// Rules of the host's local zone.
///
/// Uses the zone named by [`config::HOST_TZ_ENV`] or the one reported by the
/// operating system, and UTC if neither resolves.
pub fn host_zone() -> chrono_tz::Tz {
    let name = config::host_timezone_name();
    match Tzdb.resolve(name) {
        Some(tz) => {
            trace!("Host timezone: {}", tz.name());
            tz
        },
        None => {
            debug!("Unknown host timezone {}, falling back to UTC", name);
            chrono_tz::Tz::UTC
        },
    }
}

/// Map a wall-clock reading in `zone` to its UTC instant, failing when the
/// reading is skipped or repeated by a transition.
pub(crate) fn map_strict<Z: TimeZone>(
    zone: &Z,
    zone_id: &str,
    local: &NaiveDateTime,
) -> Result<NaiveDateTime> {
    let failure = match zone.from_local_datetime(local) {
        LocalResult::Single(dt) => return Ok(dt.naive_utc()),
        LocalResult::None => MappingFailure::Skipped,
        LocalResult::Ambiguous(a, b) => {
            let (a, b) = (a.naive_utc(), b.naive_utc());
            MappingFailure::Ambiguous {
                earliest: a.min(b),
                latest: a.max(b),
            }
        },
    };

    debug!("Strict mapping of {} in {} failed: {:?}", local, zone_id, failure);
    Err(Error::StrictZoneMapping {
        local: *local,
        zone_id: zone_id.to_string(),
        failure,
    })
}

/// Map a wall-clock reading in `zone` to its UTC instant, never failing.
///
/// A repeated reading resolves to the later instant (standard time). A skipped
/// reading is shifted with the offset in effect before the gap.
pub(crate) fn map_lenient<Z: TimeZone>(zone: &Z, local: &NaiveDateTime) -> NaiveDateTime {
    match zone.from_local_datetime(local) {
        LocalResult::Single(dt) => dt.naive_utc(),
        LocalResult::Ambiguous(a, b) => a.naive_utc().max(b.naive_utc()),
        LocalResult::None => {
            // Zones do not transition twice within a day
            let before = local
                .checked_sub_signed(TimeDelta::days(1))
                .unwrap_or(*local);
            let offset = zone.offset_from_utc_datetime(&before).fix();
            *local - TimeDelta::seconds(offset.local_minus_utc() as i64)
        },
    }
}
