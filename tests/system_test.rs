// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! The process-wide functions. Only `Utc` and `Unspecified` readings are used
//! here since `Local` depends on the machine running the tests.

use zonetime::{Error, Kind, Timestamp, ZoneResolver};

#[test]
fn test_free_functions() {
    let ts: Timestamp = "2020-01-01T02:00:00".parse().unwrap();

    assert_eq!(
        zonetime::to_zoned_time(ts, "Europe/Helsinki").map(|t| t.to_string()),
        Ok("2020-01-01T04:00:00".to_string())
    );
    assert_eq!(
        zonetime::to_utc_time(ts, "Europe/Helsinki").map(|t| t.to_string()),
        Ok("2020-01-01T00:00:00Z".to_string())
    );
    assert_eq!(zonetime::offset_hours(ts.with_kind(Kind::Utc), "Europe/Helsinki"), Ok(2));
    assert_eq!(
        zonetime::utc_offset(ts, "Asia/Kolkata").map(|o| o.to_string()),
        Ok("+05:30".to_string())
    );
}

#[test]
fn test_free_functions_invalid_zone() {
    let ts: Timestamp = "2020-01-01T02:00:00Z".parse().unwrap();
    let invalid = "InvalidTimeZoneThatDoesNotExist";
    let expected = Error::InvalidTimeZone {
        zone_id: invalid.to_string(),
    };

    assert_eq!(zonetime::to_zoned_time(ts, invalid), Err(expected.clone()));
    assert_eq!(zonetime::to_utc_time(ts, invalid), Err(expected.clone()));
    assert_eq!(zonetime::offset_hours(ts, invalid), Err(expected));
}

#[test]
fn test_host_zone_resolves() {
    let name = zonetime::host_timezone_name();
    let host = zonetime::host_zone();
    if zonetime::Tzdb.resolve(name).is_some() {
        assert_eq!(host.name(), name);
    } else {
        assert_eq!(host, chrono_tz::Tz::UTC);
    }
}
