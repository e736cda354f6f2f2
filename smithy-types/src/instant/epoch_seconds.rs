/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! serde `with` module for optional timestamps sent as epoch seconds
//!
//! ```rust
//! use serde::Deserialize;
//! use smithy_types::Instant;
//!
//! #[derive(Deserialize)]
//! struct Tape {
//!     #[serde(rename = "TapeCreatedDate", default, with = "smithy_types::instant::epoch_seconds")]
//!     tape_created_date: Option<Instant>,
//! }
//! let tape: Tape = serde_json::from_str(r#"{"TapeCreatedDate": 1586290800.5}"#).unwrap();
//! assert_eq!(tape.tape_created_date, Some(Instant::from_f64(1586290800.5)));
//! ```

use crate::Instant;
use serde::{Deserialize, Deserializer, Serializer};

pub fn serialize<S>(instant: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match instant {
        Some(instant) if instant.has_nanos() => {
            serializer.serialize_f64(instant.epoch_fractional_seconds())
        }
        Some(instant) => serializer.serialize_i64(instant.epoch_seconds()),
        None => serializer.serialize_none(),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
where
    D: Deserializer<'de>,
{
    let seconds: Option<f64> = Option::deserialize(deserializer)?;
    Ok(seconds.map(Instant::from_f64))
}

#[cfg(test)]
mod test {
    use crate::Instant;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Holder {
        #[serde(
            rename = "CreatedDate",
            default,
            with = "crate::instant::epoch_seconds",
            skip_serializing_if = "Option::is_none"
        )]
        created_date: Option<Instant>,
    }

    #[test]
    fn integers_and_floats_parse() {
        let whole: Holder = serde_json::from_str(r#"{"CreatedDate": 1586290800}"#).unwrap();
        assert_eq!(whole.created_date, Some(Instant::from_epoch_seconds(1586290800)));
        let missing: Holder = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.created_date, None);
    }

    #[test]
    fn whole_seconds_serialize_as_integers() {
        let holder = Holder {
            created_date: Some(Instant::from_epoch_seconds(1586290800)),
        };
        assert_eq!(
            serde_json::to_string(&holder).unwrap(),
            r#"{"CreatedDate":1586290800}"#
        );
        assert_eq!(
            serde_json::to_string(&Holder { created_date: None }).unwrap(),
            "{}"
        );
    }
}
