// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};

pub type Result<T> = std::result::Result<T, Error>;

/// Why a wall-clock reading has no single instant in a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingFailure {
    /// The reading falls into a gap (clocks moved forward past it).
    Skipped,
    /// The reading occurs twice (clocks moved back over it). Both candidate
    /// instants are given in UTC.
    Ambiguous {
        earliest: NaiveDateTime,
        latest: NaiveDateTime,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The zone identifier does not resolve in the zone database.
    InvalidTimeZone { zone_id: String },
    /// A wall-clock reading does not map to exactly one instant in the zone.
    StrictZoneMapping {
        local: NaiveDateTime,
        zone_id: String,
        failure: MappingFailure,
    },
    /// A rounding unit that is not a positive whole number of ticks.
    InvalidArgument { unit: TimeDelta },
    /// A value outside 0001-01-01T00:00:00 ..= 9999-12-31T23:59:59.9999999,
    /// or calendar fields that do not form a date.
    OutOfRange,
    /// A string that is not an ISO 8601 date and time.
    InvalidFormat { input: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTimeZone { zone_id } => write!(f, "Invalid timezone: {}", zone_id),
            Error::StrictZoneMapping {
                local,
                zone_id,
                failure: MappingFailure::Skipped,
            } => write!(
                f,
                "Local time {} does not exist in {}",
                local.format("%Y-%m-%dT%H:%M:%S%.f"),
                zone_id
            ),
            Error::StrictZoneMapping {
                local,
                zone_id,
                failure: MappingFailure::Ambiguous { earliest, latest },
            } => write!(
                f,
                "Local time {} is ambiguous in {}: {}Z or {}Z",
                local.format("%Y-%m-%dT%H:%M:%S%.f"),
                zone_id,
                earliest.format("%Y-%m-%dT%H:%M:%S%.f"),
                latest.format("%Y-%m-%dT%H:%M:%S%.f")
            ),
            Error::InvalidArgument { unit } => {
                write!(f, "Rounding unit must be a positive number of ticks, got {}", unit)
            },
            Error::OutOfRange => write!(f, "Timestamp is out of range"),
            Error::InvalidFormat { input } => write!(f, "Invalid timestamp: {}", input),
        }
    }
}

impl std::error::Error for Error {}
