/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Key derivation and HMAC primitives.

use crate::date_fmt::format_date;
use hmac::{Hmac, Mac, NewMac};
use sha2::{Digest, Sha256};
use std::time::SystemTime;

type HmacSha256 = Hmac<Sha256>;

/// Lowercase hex SHA-256 of `bytes`.
pub fn sha256_hex_string(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(bytes.as_ref()))
}

fn hmac(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = match HmacSha256::new_from_slice(key) {
        Ok(mac) => mac,
        Err(_) => unreachable!("HMAC accepts keys of any length"),
    };
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

/// Hex HMAC of the string to sign under the derived key.
pub fn calculate_signature(signing_key: impl AsRef<[u8]>, string_to_sign: &[u8]) -> String {
    hex::encode(hmac(signing_key.as_ref(), string_to_sign))
}

/// Derives the signing key scoped to one day, region and service.
pub fn generate_signing_key(
    secret: &str,
    time: SystemTime,
    region: &str,
    service: &str,
) -> impl AsRef<[u8]> {
    let seed = format!("AWS4{}", secret).into_bytes();
    let date = format_date(time);
    [date.as_bytes(), region.as_bytes(), service.as_bytes(), &b"aws4_request"[..]]
        .iter()
        .fold(seed, |key, scope| hmac(&key, scope))
}

#[cfg(test)]
mod test {
    use super::{calculate_signature, generate_signing_key, sha256_hex_string};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn empty_payload_hash() {
        assert_eq!(
            sha256_hex_string(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn sign_vanilla_string_to_sign() {
        let time = UNIX_EPOCH + Duration::from_secs(1440938160);
        let creq_hash = "bb579772317eb040ac9ed261061d46c1f17a8133879d6129b6e1c25292927e63";
        let string_to_sign = format!(
            "AWS4-HMAC-SHA256\n20150830T123600Z\n20150830/us-east-1/service/aws4_request\n{}",
            creq_hash
        );
        let key = generate_signing_key(
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            time,
            "us-east-1",
            "service",
        );
        assert_eq!(
            calculate_signature(key, string_to_sign.as_bytes()),
            "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
    }
}
