/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Client request tokens for `StartChangeSet`

use std::fmt;
use std::sync::Mutex;

/// Format 128 random bits as a version 4 UUID, eg. `5d5bcd42-4e6d-4f3a-9b1b-0a8e2c13f6d0`
pub(crate) fn v4(random: u128) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(36);
    let mut nibbles = (0..32).map(|idx| ((random >> (idx * 4)) & 0xf) as usize);
    for pos in 0..36 {
        match pos {
            8 | 13 | 18 | 23 => out.push('-'),
            14 => out.push('4'),
            // variant: the two high bits are `10`
            19 => out.push(HEX[(nibbles.next().unwrap_or(0) & 0x3) | 0x8] as char),
            _ => out.push(HEX[nibbles.next().unwrap_or(0)] as char),
        }
    }
    out
}

/// Source of idempotency tokens
///
/// Tokens are random v4 UUIDs unless a static token was configured, which tests rely on to get a
/// stable request body.
pub struct IdempotencyTokenProvider {
    inner: Inner,
}

enum Inner {
    Static(&'static str),
    Random(Mutex<fastrand::Rng>),
}

pub fn default_provider() -> IdempotencyTokenProvider {
    IdempotencyTokenProvider::random()
}

impl From<&'static str> for IdempotencyTokenProvider {
    fn from(token: &'static str) -> Self {
        Self {
            inner: Inner::Static(token),
        }
    }
}

impl IdempotencyTokenProvider {
    pub fn random() -> Self {
        Self {
            inner: Inner::Random(Mutex::new(fastrand::Rng::new())),
        }
    }

    /// Deterministic token sequence
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: Inner::Random(Mutex::new(fastrand::Rng::with_seed(seed))),
        }
    }

    pub fn make_idempotency_token(&self) -> String {
        match &self.inner {
            Inner::Static(token) => token.to_string(),
            Inner::Random(rng) => v4(rng.lock().unwrap().u128(..)),
        }
    }
}

impl fmt::Debug for IdempotencyTokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Static(token) => f.debug_tuple("Static").field(token).finish(),
            Inner::Random(_) => f.write_str("Random"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::idempotency_token::{v4, IdempotencyTokenProvider};
    use proptest::prelude::*;

    #[test]
    fn fixed_bits() {
        assert_eq!(v4(0), "00000000-0000-4000-8000-000000000000");
        assert_eq!(v4(u128::MAX), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    }

    #[test]
    fn static_tokens_repeat() {
        let provider = IdempotencyTokenProvider::from("00000000-0000-4000-8000-000000000000");
        assert_eq!(
            provider.make_idempotency_token(),
            provider.make_idempotency_token()
        );
    }

    #[test]
    fn seeded_tokens_are_reproducible() {
        let a = IdempotencyTokenProvider::with_seed(7);
        let b = IdempotencyTokenProvider::with_seed(7);
        let first = a.make_idempotency_token();
        assert_eq!(first, b.make_idempotency_token());
        assert_ne!(first, a.make_idempotency_token());
    }

    proptest! {
        #[test]
        fn tokens_are_v4_uuids(random: u128) {
            let token = v4(random);
            prop_assert_eq!(token.len(), 36);
            let groups = token.split('-').map(str::len).collect::<Vec<_>>();
            prop_assert_eq!(groups, vec![8, 4, 4, 4, 12]);
            prop_assert_eq!(&token[14..15], "4");
            prop_assert!("89ab".contains(&token[19..20]));
            prop_assert!(token.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
        }
    }
}
