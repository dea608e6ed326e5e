// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BGP path attribute decoding.
//!
//! GoBGP v1.25 returns the attributes of a RIB path (`Path.pattrs`) as raw
//! BGP UPDATE path attribute TLVs, one attribute per element. This module
//! decodes the attribute types the simplified route view carries and skips
//! the rest.

use crate::error::Error;
use crate::types::Community;
use nom::{
    bytes::complete::take,
    number::complete::{be_u16, be_u32, u8 as parse_u8},
};
use num_enum::TryFromPrimitive;
use std::net::Ipv4Addr;

/// Decode a GoBGP `pattrs` list. Attributes with a type code or value this
/// module does not model are dropped, not errors; a truncated attribute is.
pub fn path_attrs_from_wire(
    pattrs: &[Vec<u8>],
) -> Result<Vec<PathAttribute>, Error> {
    let mut result = Vec::new();
    for attr in pattrs {
        let (_, pa) = PathAttribute::from_wire(attr)?;
        if let Some(pa) = pa {
            result.push(pa);
        }
    }
    Ok(result)
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PathAttribute {
    pub typ: PathAttributeType,
    pub value: PathAttributeValue,
}

impl PathAttribute {
    pub fn to_wire(&self, extended_length: bool) -> Result<Vec<u8>, Error> {
        let mut buf = self.typ.to_wire();
        let val = &self.value.to_wire()?;
        if extended_length {
            if val.len() > u16::MAX as usize {
                return Err(Error::TooLarge("extended path attribute".into()));
            }
            let len = val.len() as u16;
            buf.extend_from_slice(&len.to_be_bytes())
        } else {
            if val.len() > u8::MAX as usize {
                return Err(Error::TooLarge("path attribute".into()));
            }
            buf.push(val.len() as u8);
        }
        buf.extend_from_slice(val);
        Ok(buf)
    }

    fn from_wire(input: &[u8]) -> Result<(&[u8], Option<PathAttribute>), Error> {
        let (input, flags) = parse_u8(input)?;
        let (input, type_code) = parse_u8(input)?;

        let (input, len) =
            if flags & path_attribute_flags::EXTENDED_LENGTH != 0 {
                let (input, len) = be_u16(input)?;
                (input, len as usize)
            } else {
                let (input, len) = parse_u8(input)?;
                (input, len as usize)
            };
        let (input, pa_input) = take(len)(input)?;

        let type_code = match PathAttributeTypeCode::try_from(type_code) {
            Ok(tc) => tc,
            Err(_) => return Ok((input, None)),
        };
        let value = match PathAttributeValue::from_wire(pa_input, type_code)? {
            Some(value) => value,
            None => return Ok((input, None)),
        };
        Ok((
            input,
            Some(PathAttribute {
                typ: PathAttributeType { flags, type_code },
                value,
            }),
        ))
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct PathAttributeType {
    pub flags: u8,
    pub type_code: PathAttributeTypeCode,
}

impl PathAttributeType {
    pub fn to_wire(&self) -> Vec<u8> {
        vec![self.flags, self.type_code as u8]
    }
}

pub mod path_attribute_flags {
    pub const OPTIONAL: u8 = 0b10000000;
    pub const TRANSITIVE: u8 = 0b01000000;
    pub const PARTIAL: u8 = 0b00100000;
    pub const EXTENDED_LENGTH: u8 = 0b00010000;
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, TryFromPrimitive)]
#[repr(u8)]
pub enum PathAttributeTypeCode {
    /// RFC 4271
    Origin = 1,
    AsPath = 2,
    NextHop = 3,
    MultiExitDisc = 4,
    LocalPref = 5,
    AtomicAggregate = 6,
    Aggregator = 7,
    Communities = 8,

    /// RFC 6793
    As4Path = 17,
    As4Aggregator = 18,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum PathAttributeValue {
    Origin(PathOrigin),
    AsPath(Vec<AsPathSegment>),
    NextHop(Ipv4Addr),
    MultiExitDisc(u32),
    LocalPref(u32),
    Communities(Vec<Community>),
}

impl PathAttributeValue {
    pub fn to_wire(&self) -> Result<Vec<u8>, Error> {
        match self {
            Self::Origin(x) => Ok(vec![*x as u8]),
            Self::AsPath(segments) => {
                let mut buf = Vec::new();
                for s in segments {
                    buf.extend_from_slice(&s.to_wire()?);
                }
                Ok(buf)
            }
            Self::NextHop(addr) => Ok(addr.octets().into()),
            Self::MultiExitDisc(v) => Ok(v.to_be_bytes().into()),
            Self::LocalPref(v) => Ok(v.to_be_bytes().into()),
            Self::Communities(communities) => {
                let mut buf = Vec::new();
                for community in communities {
                    buf.extend_from_slice(&u32::from(*community).to_be_bytes());
                }
                Ok(buf)
            }
        }
    }

    pub fn from_wire(
        mut input: &[u8],
        type_code: PathAttributeTypeCode,
    ) -> Result<Option<PathAttributeValue>, Error> {
        match type_code {
            PathAttributeTypeCode::Origin => {
                let (_input, origin) = parse_u8(input)?;
                match PathOrigin::try_from(origin) {
                    Ok(origin) => {
                        Ok(Some(PathAttributeValue::Origin(origin)))
                    }
                    Err(_) => Ok(None),
                }
            }
            // The daemon negotiates the four-octet ASN capability, so both
            // AS_PATH and AS4_PATH carry 32-bit ASNs on this API.
            PathAttributeTypeCode::AsPath | PathAttributeTypeCode::As4Path => {
                let mut segments = Vec::new();
                loop {
                    if input.is_empty() {
                        break;
                    }
                    let (out, seg) = match AsPathSegment::from_wire(input)? {
                        (out, Some(seg)) => (out, seg),
                        // Confederation segment types and the like: drop
                        // the whole attribute rather than misread it.
                        (_, None) => return Ok(None),
                    };
                    segments.push(seg);
                    input = out;
                }
                Ok(Some(PathAttributeValue::AsPath(segments)))
            }
            PathAttributeTypeCode::NextHop => {
                let (_input, b) = take(4usize)(input)?;
                Ok(Some(PathAttributeValue::NextHop(Ipv4Addr::new(
                    b[0], b[1], b[2], b[3],
                ))))
            }
            PathAttributeTypeCode::MultiExitDisc => {
                let (_input, v) = be_u32(input)?;
                Ok(Some(PathAttributeValue::MultiExitDisc(v)))
            }
            PathAttributeTypeCode::LocalPref => {
                let (_input, v) = be_u32(input)?;
                Ok(Some(PathAttributeValue::LocalPref(v)))
            }
            PathAttributeTypeCode::Communities => {
                let mut communities = Vec::new();
                loop {
                    if input.is_empty() {
                        break;
                    }
                    let (out, v) = be_u32(input)?;
                    communities.push(Community::from(v));
                    input = out;
                }
                Ok(Some(PathAttributeValue::Communities(communities)))
            }
            _ => Ok(None),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, TryFromPrimitive)]
#[repr(u8)]
pub enum PathOrigin {
    Igp = 0,
    Egp = 1,
    Incomplete = 2,
}

impl std::fmt::Display for PathOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Igp => write!(f, "igp"),
            Self::Egp => write!(f, "egp"),
            Self::Incomplete => write!(f, "incomplete"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone, TryFromPrimitive)]
#[repr(u8)]
pub enum AsPathType {
    AsSet = 1,
    AsSequence = 2,
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct AsPathSegment {
    pub typ: AsPathType,
    pub value: Vec<u32>,
}

impl AsPathSegment {
    pub fn to_wire(&self) -> Result<Vec<u8>, Error> {
        if self.value.len() > u8::MAX as usize {
            return Err(Error::TooLarge("AS path segment".into()));
        }
        let mut buf = vec![self.typ as u8, self.value.len() as u8];
        for v in &self.value {
            buf.extend_from_slice(&v.to_be_bytes());
        }
        Ok(buf)
    }

    fn from_wire(input: &[u8]) -> Result<(&[u8], Option<AsPathSegment>), Error> {
        let (input, typ) = parse_u8(input)?;
        let typ = match AsPathType::try_from(typ) {
            Ok(typ) => typ,
            Err(_) => return Ok((input, None)),
        };
        let (input, count) = parse_u8(input)?;
        let (input, value_input) = take(count as usize * 4)(input)?;

        let mut segment = AsPathSegment {
            typ,
            value: Vec::new(),
        };
        let mut value_input = value_input;
        for _ in 0..count {
            let (out, asn) = be_u32(value_input)?;
            segment.value.push(asn);
            value_input = out;
        }
        Ok((input, Some(segment)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use pretty_hex::*;

    // Wire captures from a GoBGP v1.25 global RIB entry added with
    //   gobgp global rib add 50.30.20.0/20 origin igp nexthop 60.1.2.3 \
    //     community 64250:65535,61166:56797 aspath 52428,170 med 48059 -a ipv4
    const AS_PATH: [u8; 13] = [
        0x40, 0x02, 0x0a, 0x02, 0x02, 0x00, 0x00, 0xcc, 0xcc, 0x00, 0x00,
        0x00, 0xaa,
    ];
    const NEXT_HOP: [u8; 7] = [0x40, 0x03, 0x04, 0x3c, 0x01, 0x02, 0x03];
    const MED: [u8; 7] = [0x80, 0x04, 0x04, 0x00, 0x00, 0xbb, 0xbb];
    const COMMUNITIES: [u8; 11] = [
        0xc0, 0x08, 0x08, 0xfa, 0xfa, 0xff, 0xff, 0xee, 0xee, 0xdd, 0xdd,
    ];

    #[test]
    fn as_path_from_wire() {
        let (rest, pa) =
            PathAttribute::from_wire(&AS_PATH).expect("as path from wire");
        assert!(rest.is_empty());
        let pa = pa.expect("as path attribute");
        assert_eq!(pa.typ.type_code, PathAttributeTypeCode::AsPath);
        assert_eq!(
            pa.value,
            PathAttributeValue::AsPath(vec![AsPathSegment {
                typ: AsPathType::AsSequence,
                value: vec![52428, 170],
            }])
        );
    }

    #[test]
    fn next_hop_from_wire() {
        let (_, pa) =
            PathAttribute::from_wire(&NEXT_HOP).expect("next hop from wire");
        assert_eq!(
            pa.expect("next hop attribute").value,
            PathAttributeValue::NextHop(Ipv4Addr::new(60, 1, 2, 3))
        );
    }

    #[test]
    fn med_from_wire() {
        let (_, pa) = PathAttribute::from_wire(&MED).expect("med from wire");
        assert_eq!(
            pa.expect("med attribute").value,
            PathAttributeValue::MultiExitDisc(48059)
        );
    }

    #[test]
    fn communities_from_wire() {
        let (_, pa) = PathAttribute::from_wire(&COMMUNITIES)
            .expect("communities from wire");
        assert_eq!(
            pa.expect("communities attribute").value,
            PathAttributeValue::Communities(vec![
                Community(0xfafa_ffff),
                Community(0xeeee_dddd),
            ])
        );
    }

    #[test]
    fn attr_round_trip() {
        for attr in [
            AS_PATH.as_slice(),
            NEXT_HOP.as_slice(),
            MED.as_slice(),
            COMMUNITIES.as_slice(),
        ] {
            let (_, pa) = PathAttribute::from_wire(attr).expect("from wire");
            let buf =
                pa.expect("supported attribute").to_wire(false).expect("to wire");
            println!("buf: {}", buf.hex_dump());
            assert_eq!(buf, attr);
        }
    }

    #[test]
    fn extended_length_attr() {
        let pa = PathAttribute {
            typ: PathAttributeType {
                flags: path_attribute_flags::TRANSITIVE
                    | path_attribute_flags::EXTENDED_LENGTH,
                type_code: PathAttributeTypeCode::AsPath,
            },
            value: PathAttributeValue::AsPath(vec![AsPathSegment {
                typ: AsPathType::AsSequence,
                value: vec![395849, 123456, 987654, 111111],
            }]),
        };

        let buf = pa.to_wire(true).expect("to wire");
        let (rest, parsed) =
            PathAttribute::from_wire(&buf).expect("from wire");
        assert!(rest.is_empty());
        assert_eq!(parsed.expect("as path attribute"), pa);
    }

    #[test]
    fn unmodeled_attrs_skipped() {
        // AGGREGATOR: modeled type code, unmodeled value.
        let aggregator = [0xc0, 0x07, 0x06, 0x00, 0x00, 0xfd, 0xe8, 0x0a, 0x00];
        // Type code 99 is not assigned at all.
        let unknown = [0xc0, 0x63, 0x02, 0xab, 0xcd];

        let pattrs = vec![
            aggregator.to_vec(),
            unknown.to_vec(),
            NEXT_HOP.to_vec(),
        ];
        let attrs = path_attrs_from_wire(&pattrs).expect("pattrs from wire");
        assert_eq!(attrs.len(), 1);
        assert_eq!(
            attrs[0].value,
            PathAttributeValue::NextHop(Ipv4Addr::new(60, 1, 2, 3))
        );
    }

    #[test]
    fn confed_as_path_segment_skipped() {
        // AS_CONFED_SEQUENCE (segment type 3, RFC 5065) is valid on the
        // wire; the attribute is dropped, not an error, and the rest of the
        // list still decodes.
        let confed_as_path = [
            0x40, 0x02, 0x06, 0x03, 0x01, 0x00, 0x00, 0xcc, 0xcc,
        ];
        let pattrs = vec![confed_as_path.to_vec(), NEXT_HOP.to_vec()];
        let attrs = path_attrs_from_wire(&pattrs).expect("pattrs from wire");
        assert_eq!(attrs.len(), 1);
        assert_eq!(
            attrs[0].value,
            PathAttributeValue::NextHop(Ipv4Addr::new(60, 1, 2, 3))
        );
    }

    #[test]
    fn out_of_range_origin_skipped() {
        // ORIGIN only defines octets 0-2.
        let bad_origin = [0x40, 0x01, 0x01, 0x63];
        let pattrs = vec![bad_origin.to_vec(), MED.to_vec()];
        let attrs = path_attrs_from_wire(&pattrs).expect("pattrs from wire");
        assert_eq!(attrs.len(), 1);
        assert_eq!(
            attrs[0].value,
            PathAttributeValue::MultiExitDisc(48059)
        );
    }

    #[test]
    fn truncated_attr_is_error() {
        // NEXT_HOP claiming 4 bytes of value but carrying 2.
        let truncated = vec![vec![0x40, 0x03, 0x04, 0x3c, 0x01]];
        assert!(path_attrs_from_wire(&truncated).is_err());
    }
}
