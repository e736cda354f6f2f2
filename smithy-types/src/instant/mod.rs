/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

#[cfg(feature = "serde-epoch-seconds")]
pub mod epoch_seconds;

/// Instant in time, as seconds and sub-second nanos since the Unix epoch.
///
/// Storage Gateway sends timestamps as (possibly fractional) epoch seconds, eg. the creation
/// date of a tape or a cached volume.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: (fraction * 1_000_000_000_f64) as u32,
        }
    }

    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds,
            subsecond_nanos,
        }
    }

    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor() as i64;
        let rem = epoch_seconds - epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds, rem)
    }

    /// Times before the Unix epoch are clamped to the epoch.
    pub fn from_system_time(system_time: SystemTime) -> Self {
        let duration = system_time.duration_since(UNIX_EPOCH).unwrap_or_default();
        Instant {
            seconds: duration.as_secs() as i64,
            subsecond_nanos: duration.subsec_nanos(),
        }
    }

    fn to_chrono(self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.seconds, self.subsecond_nanos).single()
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + self.subsecond_nanos as f64 / 1_000_000_000_f64
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn fmt(&self, format: Format) -> String {
        match format {
            Format::DateTime => match self.to_chrono() {
                Some(datetime) if self.has_nanos() => {
                    let rfc3339 = datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true);
                    // chrono pads the fraction to millis/micros/nanos
                    let mut rfc3339 = rfc3339
                        .trim_end_matches('Z')
                        .trim_end_matches('0')
                        .to_owned();
                    rfc3339.push('Z');
                    rfc3339
                }
                Some(datetime) => datetime.to_rfc3339_opts(SecondsFormat::Secs, true),
                // out of chrono's range: fall back to the raw epoch value
                None => self.fmt(Format::EpochSeconds),
            },
            Format::EpochSeconds => {
                if self.subsecond_nanos == 0 {
                    format!("{}", self.seconds)
                } else {
                    let fraction = format!("{:0>9}", self.subsecond_nanos);
                    format!("{}.{}", self.seconds, fraction.trim_end_matches('0'))
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    DateTime,
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use super::{Format, Instant};
    use proptest::prelude::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn from_f64_splits_fraction() {
        let instant = Instant::from_f64(1586290800.5);
        assert_eq!(instant.epoch_seconds(), 1586290800);
        assert!(instant.has_nanos());
        assert_eq!(instant.fmt(Format::EpochSeconds), "1586290800.5");
    }

    #[test]
    fn from_system_time() {
        let instant = Instant::from_system_time(UNIX_EPOCH + Duration::from_millis(1_500));
        assert_eq!(instant, Instant::from_secs_and_nanos(1, 500_000_000));
    }

    proptest! {
        #[test]
        fn whole_seconds_roundtrip_through_f64(secs in 0i64..253_402_300_799) {
            let instant = Instant::from_epoch_seconds(secs);
            prop_assert_eq!(Instant::from_f64(instant.epoch_fractional_seconds()), instant);
        }
    }
}
