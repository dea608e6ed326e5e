// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::net::Ipv4Addr;

use gobgp_api as api;

use crate::attr::{self, PathAttributeValue, PathOrigin};
use crate::error::Error;
use crate::types::{Community, Prefix4};

/// A route from the daemon's global RIB, reduced to the prefix and the
/// attributes of its best path.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Route {
    pub prefix: Prefix4,
    /// ASNs of the AS_PATH attribute, flattened across segments in wire
    /// order.
    pub as_path: Vec<u32>,
    pub next_hop: Option<Ipv4Addr>,
    pub med: Option<u32>,
    pub local_pref: Option<u32>,
    pub communities: Vec<Community>,
    pub origin: Option<PathOrigin>,
    pub best: bool,
}

impl Route {
    /// Reduce one RIB destination to a `Route`. GoBGP orders paths with the
    /// selected path first, so only `paths[0]` is inspected. A destination
    /// with no paths yields `None`.
    pub fn from_destination(
        destination: &api::Destination,
    ) -> Result<Option<Route>, Error> {
        let Some(path) = destination.paths.first() else {
            return Ok(None);
        };
        let prefix = destination
            .prefix
            .parse()
            .map_err(Error::InvalidPrefix)?;

        let mut route = Route {
            prefix,
            as_path: Vec::new(),
            next_hop: None,
            med: None,
            local_pref: None,
            communities: Vec::new(),
            origin: None,
            best: path.best,
        };
        for pa in attr::path_attrs_from_wire(&path.pattrs)? {
            match pa.value {
                PathAttributeValue::Origin(origin) => {
                    route.origin = Some(origin);
                }
                PathAttributeValue::AsPath(segments) => {
                    for segment in &segments {
                        route.as_path.extend_from_slice(&segment.value);
                    }
                }
                PathAttributeValue::NextHop(addr) => {
                    route.next_hop = Some(addr);
                }
                PathAttributeValue::MultiExitDisc(med) => {
                    route.med = Some(med);
                }
                PathAttributeValue::LocalPref(pref) => {
                    route.local_pref = Some(pref);
                }
                PathAttributeValue::Communities(communities) => {
                    route.communities = communities;
                }
            }
        }
        Ok(Some(route))
    }
}

/// Reduce a RIB table to routes, one per destination that has any paths.
pub fn routes_from_table(table: &api::Table) -> Result<Vec<Route>, Error> {
    let mut routes = Vec::new();
    for destination in &table.destinations {
        if let Some(route) = Route::from_destination(destination)? {
            routes.push(route);
        }
    }
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn destination(prefix: &str, pattrs: Vec<Vec<u8>>) -> api::Destination {
        api::Destination {
            prefix: prefix.into(),
            paths: vec![api::Path {
                pattrs,
                best: true,
                family: crate::FAMILY_IPV4_UNICAST,
                ..Default::default()
            }],
        }
    }

    #[test]
    fn route_from_destination() {
        // The 50.30.20.0/20 example route: as path 52428 170, next hop
        // 60.1.2.3, communities 64250:65535 61166:56797, med 48059.
        let d = destination(
            "50.30.20.0/20",
            vec![
                vec![0x40, 0x01, 0x01, 0x00],
                vec![
                    0x40, 0x02, 0x0a, 0x02, 0x02, 0x00, 0x00, 0xcc, 0xcc,
                    0x00, 0x00, 0x00, 0xaa,
                ],
                vec![0x40, 0x03, 0x04, 0x3c, 0x01, 0x02, 0x03],
                vec![0x80, 0x04, 0x04, 0x00, 0x00, 0xbb, 0xbb],
                vec![
                    0xc0, 0x08, 0x08, 0xfa, 0xfa, 0xff, 0xff, 0xee, 0xee,
                    0xdd, 0xdd,
                ],
            ],
        );

        let route = Route::from_destination(&d)
            .expect("route from destination")
            .expect("destination has a path");

        assert_eq!(
            route,
            Route {
                prefix: "50.30.20.0/20".parse().expect("parse prefix"),
                as_path: vec![52428, 170],
                next_hop: Some(Ipv4Addr::new(60, 1, 2, 3)),
                med: Some(48059),
                local_pref: None,
                communities: vec![
                    Community(0xfafa_ffff),
                    Community(0xeeee_dddd),
                ],
                origin: Some(PathOrigin::Igp),
                best: true,
            }
        );
    }

    #[test]
    fn destination_without_paths_skipped() {
        let d = api::Destination {
            prefix: "10.0.0.0/8".into(),
            paths: vec![],
        };
        assert_eq!(Route::from_destination(&d).expect("no error"), None);
    }

    #[test]
    fn bad_prefix_is_error() {
        let d = destination("not-a-prefix", vec![]);
        assert!(matches!(
            Route::from_destination(&d),
            Err(Error::InvalidPrefix(_))
        ));
    }

    #[test]
    fn table_reduction() {
        let table = api::Table {
            r#type: api::Resource::Global as i32,
            family: crate::FAMILY_IPV4_UNICAST,
            destinations: vec![
                destination(
                    "192.0.2.0/24",
                    vec![vec![0x40, 0x03, 0x04, 0x0a, 0x00, 0x00, 0x01]],
                ),
                api::Destination {
                    prefix: "198.51.100.0/24".into(),
                    paths: vec![],
                },
            ],
            ..Default::default()
        };

        let routes = routes_from_table(&table).expect("routes from table");
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].prefix.to_string(), "192.0.2.0/24");
        assert_eq!(routes[0].next_hop, Some(Ipv4Addr::new(10, 0, 0, 1)));
    }
}
