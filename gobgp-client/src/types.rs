// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An IPv4 network prefix in `value/length` form, e.g. `50.30.20.0/20`.
#[derive(
    Debug, Copy, Clone, Serialize, Deserialize, Eq, Hash, PartialEq,
)]
pub struct Prefix4 {
    pub value: Ipv4Addr,
    pub length: u8,
}

impl fmt::Display for Prefix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value, self.length)
    }
}

impl FromStr for Prefix4 {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, length) =
            s.split_once('/').ok_or("malformed prefix".to_string())?;

        Ok(Self {
            value: value
                .parse()
                .map_err(|_| "malformed ip addr".to_string())?,
            length: length
                .parse()
                .map_err(|_| "malformed length".to_string())?,
        })
    }
}

/// A standard BGP community (RFC 1997). Rendered as `asn:value`, the two
/// 16-bit halves of the wire value.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub struct Community(pub u32);

impl Community {
    pub fn asn(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    pub fn value(&self) -> u16 {
        (self.0 & 0xffff) as u16
    }
}

impl From<u32> for Community {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<Community> for u32 {
    fn from(c: Community) -> Self {
        c.0
    }
}

impl fmt::Display for Community {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.asn(), self.value())
    }
}

impl FromStr for Community {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (asn, value) =
            s.split_once(':').ok_or("malformed community".to_string())?;
        let asn: u16 =
            asn.parse().map_err(|_| "malformed asn".to_string())?;
        let value: u16 =
            value.parse().map_err(|_| "malformed value".to_string())?;
        Ok(Self(((asn as u32) << 16) | value as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn prefix4_parse_display() {
        let p: Prefix4 = "50.30.20.0/20".parse().expect("parse prefix");
        assert_eq!(p.value, Ipv4Addr::new(50, 30, 20, 0));
        assert_eq!(p.length, 20);
        assert_eq!(p.to_string(), "50.30.20.0/20");

        assert!("50.30.20.0".parse::<Prefix4>().is_err());
        assert!("bunk/20".parse::<Prefix4>().is_err());
        assert!("50.30.20.0/x".parse::<Prefix4>().is_err());
    }

    #[test]
    fn community_halves() {
        let c = Community(0xfafa_ffff);
        assert_eq!(c.asn(), 64250);
        assert_eq!(c.value(), 65535);
        assert_eq!(c.to_string(), "64250:65535");
        assert_eq!("64250:65535".parse::<Community>().expect("parse"), c);
        assert!("64250".parse::<Community>().is_err());
    }
}
