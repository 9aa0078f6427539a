// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Timestamp conversion between UTC and named IANA time zones.
//!
//! Every [`Timestamp`] carries a [`Kind`] that decides how its calendar fields
//! are read:
//!
//! | Kind          | `to_zoned_time` / `offset_hours` | `to_utc_time`           |
//! |---------------|----------------------------------|-------------------------|
//! | `Utc`         | the instant itself               | digits local to the zone |
//! | `Unspecified` | digits read as UTC               | digits local to the zone |
//! | `Local`       | converted with host zone rules   | digits local to the zone |
//!
//! `to_utc_time` maps strictly: a reading that a DST transition skips or
//! repeats is reported as [`Error::StrictZoneMapping`] and left to the caller
//! to disambiguate.
//!
//! Zone rules come from a [`ZoneResolver`]. [`Tzdb`] is the full IANA database
//! and [`CompactTzdb`] a small fixed table. The free functions use a process
//! wide [`TimeConverter`] built on `Tzdb` and the host zone, which can be set
//! through the `ZONETIME_HOST_TZ` environment variable.
//!
//! Rounding with [`round_up`] and [`round_down`] works on ticks (100 ns) from
//! 0001-01-01T00:00:00 and never looks at zone rules.
//!
//! # Example
//!
//! ```
//! use chrono::TimeDelta;
//! use zonetime::{Kind, Timestamp};
//!
//! let ts: Timestamp = "2020-01-01T02:00:00Z".parse().unwrap();
//! let helsinki = zonetime::to_zoned_time(ts, "Europe/Helsinki").unwrap();
//! assert_eq!(helsinki.to_string(), "2020-01-01T04:00:00");
//! assert_eq!(helsinki.kind(), Kind::Unspecified);
//!
//! let back = zonetime::to_utc_time(helsinki, "Europe/Helsinki").unwrap();
//! assert_eq!(back, ts);
//!
//! let rounded = zonetime::round_up(ts, TimeDelta::minutes(45)).unwrap();
//! assert_eq!(rounded.to_string(), "2020-01-01T02:15:00Z");
//! ```

mod config;
mod convert;
mod error;
mod round;
mod timestamp;
mod zone;

pub use config::{host_timezone_name, HOST_TZ_ENV};
pub use convert::{offset_hours, to_utc_time, to_zoned_time, utc_offset, TimeConverter};
pub use error::{Error, MappingFailure, Result};
pub use round::{round_down, round_up};
pub use timestamp::{Kind, Timestamp, MAX_TICKS, NANOS_PER_TICK, TICKS_PER_SECOND};
pub use zone::{host_zone, CompactTzdb, Tzdb, ZoneResolver};
