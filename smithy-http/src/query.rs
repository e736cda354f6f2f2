/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Formatting values into the query string of a request URI

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Every character outside of the RFC 3986 unreserved set is percent encoded
const BASE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b':')
    .add(b',')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'@')
    .add(b'!')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b';')
    .add(b'=')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'"')
    .add(b'^')
    .add(b'`')
    .add(b'\\');

pub fn fmt_string<T: AsRef<str>>(t: T) -> String {
    utf8_percent_encode(t.as_ref(), BASE_SET).to_string()
}

/// Appends `key=value` pairs to a path, starting the query string on the first push
///
/// ```rust
/// use smithy_http::query::Writer;
/// let mut uri = String::from("/DescribeEntity");
/// let mut query = Writer::new(&mut uri);
/// query.push_kv("catalog", "AWSMarketplace");
/// query.push_kv("entityId", "a b");
/// assert_eq!(uri, "/DescribeEntity?catalog=AWSMarketplace&entityId=a%20b");
/// ```
pub struct Writer<'a> {
    out: &'a mut String,
    prefix: char,
}

impl<'a> Writer<'a> {
    pub fn new(out: &'a mut String) -> Self {
        Writer { out, prefix: '?' }
    }

    pub fn push_kv(&mut self, k: &str, v: &str) {
        self.out.push(self.prefix);
        self.out.push_str(&fmt_string(k));
        self.out.push('=');
        self.out.push_str(&fmt_string(v));
        self.prefix = '&';
    }
}

#[cfg(test)]
mod test {
    use crate::query::fmt_string;
    use proptest::prelude::*;

    #[test]
    fn url_encode() {
        assert_eq!(fmt_string("y̆").as_str(), "y%CC%86");
        assert_eq!(fmt_string(" ").as_str(), "%20");
        assert_eq!(fmt_string("foo/baz%20").as_str(), "foo%2Fbaz%2520");
        assert_eq!(fmt_string("&=").as_str(), "%26%3D");
        assert_eq!(fmt_string("a-b_c.d~e").as_str(), "a-b_c.d~e");
    }

    proptest! {
        #[test]
        fn encoded_values_are_valid_uris(s: String) {
            let uri = format!("https://example.com/?v={}", fmt_string(&s));
            prop_assert!(uri.parse::<http::Uri>().is_ok());
        }
    }
}
