// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Compact timezone table for zonetime.
//!
//! A handful of zones described by a standard offset and at most one recurring
//! DST rule, small enough to be embedded and fully deterministic. The table is
//! used where the full IANA database is unwanted, most notably in tests that
//! need a fixed set of zone rules.
//!
//! The rules of each zone are the ones currently in force and are applied to
//! every year; historical transitions are not represented.
//!
//! # Example
//!
//! ```
//! use zonetime_tz::Tz;
//!
//! let tz: Tz = "Europe/Helsinki".parse().unwrap();
//!
//! // Offset at a Unix timestamp (in minutes from UTC)
//! let offset = tz.offset_at_timestamp(1577844000); // 2020-01-01 02:00:00 UTC
//! assert_eq!(offset, 120); // EET = UTC+2:00
//! ```

mod compact;
mod tz_wrapper;

pub use compact::{
    get_offset, list_timezones, lookup_timezone, DstRule, Timezone, TransitionRule, TZ_NAMES,
    TZ_VARIANTS,
};
pub use tz_wrapper::{ParseError, Tz, TzOffset};

/// The UTC timezone.
pub const UTC: Tz = Tz::Utc;
