/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use chrono::{DateTime, Utc};
use std::time::SystemTime;

const DATE_FORMAT: &str = "%Y%m%d";
const DATE_TIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Formats a time as `YYYYMMDD`, the date used in the credential scope
pub(crate) fn format_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).format(DATE_FORMAT).to_string()
}

/// Formats a time as `YYYYMMDD'T'HHMMSS'Z'`, the value of `x-amz-date`
pub(crate) fn format_date_time(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format(DATE_TIME_FORMAT)
        .to_string()
}

#[cfg(test)]
mod test {
    use super::{format_date, format_date_time};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn date_formats() {
        let time = UNIX_EPOCH + Duration::from_secs(1440938160);
        assert_eq!(format_date(time), "20150830");
        assert_eq!(format_date_time(time), "20150830T123600Z");
    }
}
