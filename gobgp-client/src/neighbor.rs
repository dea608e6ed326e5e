// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::net::Ipv4Addr;

use gobgp_api as api;
use num_enum::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::FAMILY_IPV4_UNICAST;

/// Default eBGP multihop TTL. Unlike most router defaults this is 255, not 1,
/// so multihop peerings work without extra configuration.
pub const DEFAULT_EBGP_MULTIHOP_TTL: u32 = 255;

/// Configuration for one IPv4 BGP peering, the add-neighbor request in
/// friendly form. Only the addresses and ASNs are required; everything else
/// has a serviceable default.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct NeighborConfig {
    /// Local IPv4 address for the peering.
    pub local_address: Ipv4Addr,

    /// Remote router IPv4 address for the peering.
    pub neighbor_address: Ipv4Addr,

    /// Local autonomous system number.
    pub local_as: u32,

    /// Remote autonomous system number.
    pub peer_as: u32,

    /// Source address for outgoing BGP messages. Defaults to
    /// `local_address`.
    #[serde(default)]
    pub transport_address: Option<Ipv4Addr>,

    #[serde(default = "ebgp_multihop_default")]
    pub ebgp_multihop: bool,

    #[serde(default = "ebgp_multihop_ttl_default")]
    pub ebgp_multihop_ttl: u32,

    /// BGP MD5 password.
    #[serde(default)]
    pub auth_password: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

fn ebgp_multihop_default() -> bool {
    true
}

fn ebgp_multihop_ttl_default() -> u32 {
    DEFAULT_EBGP_MULTIHOP_TTL
}

impl NeighborConfig {
    pub fn new(
        local_address: Ipv4Addr,
        neighbor_address: Ipv4Addr,
        local_as: u32,
        peer_as: u32,
    ) -> Self {
        Self {
            local_address,
            neighbor_address,
            local_as,
            peer_as,
            transport_address: None,
            ebgp_multihop: ebgp_multihop_default(),
            ebgp_multihop_ttl: ebgp_multihop_ttl_default(),
            auth_password: None,
            description: None,
        }
    }
}

impl From<&NeighborConfig> for api::Peer {
    fn from(n: &NeighborConfig) -> api::Peer {
        api::Peer {
            families: vec![FAMILY_IPV4_UNICAST],
            conf: Some(api::PeerConf {
                local_as: n.local_as,
                peer_as: n.peer_as,
                local_address: n.local_address.to_string(),
                neighbor_address: n.neighbor_address.to_string(),
                auth_password: n.auth_password.clone().unwrap_or_default(),
                description: n.description.clone().unwrap_or_default(),
                ..Default::default()
            }),
            ebgp_multihop: Some(api::EbgpMultihop {
                enabled: n.ebgp_multihop,
                multihop_ttl: n.ebgp_multihop_ttl,
            }),
            transport: Some(api::Transport {
                local_address: n
                    .transport_address
                    .unwrap_or(n.local_address)
                    .to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

/// Session state of a configured peer, as reported by the daemon.
#[derive(Debug, PartialEq, Eq, Copy, Clone, FromPrimitive)]
#[repr(u32)]
pub enum SessionState {
    Idle = 0,
    Connect = 1,
    Active = 2,
    OpenSent = 3,
    OpenConfirm = 4,
    Established = 5,
    #[num_enum(default)]
    Unknown = 6,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Connect => write!(f, "connect"),
            Self::Active => write!(f, "active"),
            Self::OpenSent => write!(f, "open-sent"),
            Self::OpenConfirm => write!(f, "open-confirm"),
            Self::Established => write!(f, "established"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A configured peer, reduced to the fields automation scripts act on.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NeighborInfo {
    pub address: Ipv4Addr,
    pub local_as: u32,
    pub peer_as: u32,
    pub description: String,
    pub state: SessionState,
    /// Unix timestamp of session establishment. Zero when the session has
    /// never established.
    pub uptime: u64,
}

impl TryFrom<&api::Peer> for NeighborInfo {
    type Error = Error;

    fn try_from(peer: &api::Peer) -> Result<Self, Error> {
        let conf = peer.conf.as_ref().ok_or_else(|| {
            Error::MalformedResponse("peer without conf".into())
        })?;
        let address = conf.neighbor_address.parse().map_err(|_| {
            Error::InvalidAddress(conf.neighbor_address.clone())
        })?;
        let state = peer
            .info
            .as_ref()
            .map(|info| SessionState::from(info.session_state))
            .unwrap_or(SessionState::Unknown);
        let uptime = peer
            .timers
            .as_ref()
            .and_then(|timers| timers.state.as_ref())
            .map(|state| state.uptime)
            .unwrap_or(0);

        Ok(NeighborInfo {
            address,
            local_as: conf.local_as,
            peer_as: conf.peer_as,
            description: conf.description.clone(),
            state,
            uptime,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_defaults() {
        let n = NeighborConfig::new(
            Ipv4Addr::new(10, 0, 255, 2),
            Ipv4Addr::new(10, 0, 255, 3),
            64512,
            65001,
        );
        assert!(n.ebgp_multihop);
        assert_eq!(n.ebgp_multihop_ttl, 255);
        assert_eq!(n.transport_address, None);
        assert_eq!(n.auth_password, None);
    }

    #[test]
    fn config_defaults_from_json() {
        let n: NeighborConfig = serde_json::from_str(
            r#"{
                "local_address": "10.0.255.2",
                "neighbor_address": "10.0.255.3",
                "local_as": 64512,
                "peer_as": 65001
            }"#,
        )
        .expect("parse neighbor config");
        assert_eq!(
            n,
            NeighborConfig::new(
                Ipv4Addr::new(10, 0, 255, 2),
                Ipv4Addr::new(10, 0, 255, 3),
                64512,
                65001,
            )
        );
    }

    #[test]
    fn config_to_peer() {
        let mut n = NeighborConfig::new(
            Ipv4Addr::new(10, 0, 255, 2),
            Ipv4Addr::new(10, 0, 255, 3),
            64512,
            65001,
        );
        n.description = Some("transit".into());

        let peer = api::Peer::from(&n);
        assert_eq!(peer.families, vec![FAMILY_IPV4_UNICAST]);

        let conf = peer.conf.expect("peer conf");
        assert_eq!(conf.local_address, "10.0.255.2");
        assert_eq!(conf.neighbor_address, "10.0.255.3");
        assert_eq!(conf.local_as, 64512);
        assert_eq!(conf.peer_as, 65001);
        assert_eq!(conf.description, "transit");
        assert_eq!(conf.auth_password, "");

        // Transport address falls back to the local address.
        let transport = peer.transport.expect("peer transport");
        assert_eq!(transport.local_address, "10.0.255.2");

        let multihop = peer.ebgp_multihop.expect("peer ebgp multihop");
        assert!(multihop.enabled);
        assert_eq!(multihop.multihop_ttl, 255);
    }

    #[test]
    fn explicit_transport_address() {
        let mut n = NeighborConfig::new(
            Ipv4Addr::new(10, 0, 255, 2),
            Ipv4Addr::new(10, 0, 255, 3),
            64512,
            65001,
        );
        n.transport_address = Some(Ipv4Addr::new(10, 0, 255, 4));

        let peer = api::Peer::from(&n);
        let transport = peer.transport.expect("peer transport");
        assert_eq!(transport.local_address, "10.0.255.4");
    }

    #[test]
    fn info_from_peer() {
        let peer = api::Peer {
            families: vec![FAMILY_IPV4_UNICAST],
            conf: Some(api::PeerConf {
                local_as: 64512,
                peer_as: 65001,
                neighbor_address: "10.0.255.3".into(),
                ..Default::default()
            }),
            info: Some(api::PeerState {
                session_state: 5,
                ..Default::default()
            }),
            timers: Some(api::Timers {
                state: Some(api::TimersState {
                    uptime: 1700000000,
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        };

        let info = NeighborInfo::try_from(&peer).expect("info from peer");
        assert_eq!(info.address, Ipv4Addr::new(10, 0, 255, 3));
        assert_eq!(info.state, SessionState::Established);
        assert_eq!(info.uptime, 1700000000);
    }

    #[test]
    fn peer_without_conf_is_error() {
        let peer = api::Peer::default();
        assert!(matches!(
            NeighborInfo::try_from(&peer),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn unknown_session_state() {
        assert_eq!(SessionState::from(17u32), SessionState::Unknown);
        assert_eq!(SessionState::from(2u32), SessionState::Active);
    }
}
