// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Rounding of timestamps to multiples of a duration.
//!
//! Multiples are counted in ticks from 0001-01-01T00:00:00. Only the calendar
//! fields take part; the kind is carried over unchanged and no zone rules are
//! consulted, so a rounded `Local` reading may land inside a DST gap.

use chrono::TimeDelta;

use crate::error::{Error, Result};
use crate::timestamp::{Timestamp, NANOS_PER_TICK, TICKS_PER_SECOND};

/// Smallest multiple of `unit` that is not before `ts`.
pub fn round_up(ts: Timestamp, unit: TimeDelta) -> Result<Timestamp> {
    let unit_ticks = unit_ticks(unit)?;
    let ticks = ts.ticks();
    let remainder = ticks % unit_ticks;
    let delta = if remainder != 0 {
        unit_ticks - remainder
    } else {
        0
    };
    let rounded = ticks.checked_add(delta).ok_or(Error::OutOfRange)?;
    Timestamp::from_ticks(rounded, ts.kind())
}

/// Largest multiple of `unit` that is not after `ts`.
pub fn round_down(ts: Timestamp, unit: TimeDelta) -> Result<Timestamp> {
    let unit_ticks = unit_ticks(unit)?;
    let ticks = ts.ticks();
    Timestamp::from_ticks(ticks - ticks % unit_ticks, ts.kind())
}

fn unit_ticks(unit: TimeDelta) -> Result<i64> {
    let nanos = unit.subsec_nanos();
    if unit <= TimeDelta::zero() || nanos % NANOS_PER_TICK as i32 != 0 {
        return Err(Error::InvalidArgument { unit });
    }

    // Units longer than the whole range saturate
    Ok(unit
        .num_seconds()
        .saturating_mul(TICKS_PER_SECOND)
        .saturating_add((nanos / NANOS_PER_TICK as i32) as i64))
}
