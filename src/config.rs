// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0
use std::env;

use once_cell::sync::Lazy;

/// Environment variable naming the IANA zone to use as the host zone.
pub const HOST_TZ_ENV: &str = "ZONETIME_HOST_TZ";

const FALLBACK_TZ: &str = "UTC";

static HOST_TZ: Lazy<String> = Lazy::new(|| {
    resolve_host_timezone(env::var(HOST_TZ_ENV).ok(), || {
        iana_time_zone::get_timezone().ok()
    })
});

/// Name of the host zone, read once per process.
pub fn host_timezone_name() -> &'static str {
    HOST_TZ.as_str()
}

fn resolve_host_timezone(
    configured: Option<String>,
    detect: impl FnOnce() -> Option<String>,
) -> String {
    configured
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .or_else(detect)
        .unwrap_or_else(|| FALLBACK_TZ.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_zone_wins() {
        let name = resolve_host_timezone(Some("Europe/Helsinki".into()), || {
            Some("America/New_York".into())
        });
        assert_eq!(name, "Europe/Helsinki");
    }

    #[test]
    fn test_blank_configuration_is_ignored() {
        let name = resolve_host_timezone(Some("  ".into()), || Some("Asia/Tokyo".into()));
        assert_eq!(name, "Asia/Tokyo");
    }

    #[test]
    fn test_falls_back_to_utc() {
        assert_eq!(resolve_host_timezone(None, || None), "UTC");
    }

    #[test]
    fn test_host_timezone_name_is_stable() {
        assert_eq!(host_timezone_name(), host_timezone_name());
        assert!(!host_timezone_name().is_empty());
    }
}
