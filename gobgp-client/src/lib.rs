// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Convenience client for the GoBGP v1.25 gRPC API.
//!
//! All BGP semantics live in the daemon; this crate marshals the four RPCs
//! automation scripts need (neighbor get/add/delete, global RIB read) and
//! reduces the responses to plain data structures. IPv4 unicast only, like
//! the API surface it wraps.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use slog::{trace, Logger};
use tonic::transport::Channel;

use gobgp_api as api;
use gobgp_api::gobgp_api_client::GobgpApiClient;

pub mod attr;
pub mod error;
pub mod neighbor;
pub mod rib;
pub mod types;

pub use error::Error;
pub use neighbor::{NeighborConfig, NeighborInfo, SessionState};
pub use rib::Route;

/// Default gRPC port of the daemon.
pub const GOBGP_PORT: u16 = 50051;

const AFI_IPV4: u32 = 1;
const SAFI_UNICAST: u32 = 1;

/// The route family value GoBGP uses for IPv4 unicast: AFI in the upper
/// 16 bits, SAFI in the lower.
pub const FAMILY_IPV4_UNICAST: u32 = (AFI_IPV4 << 16) | SAFI_UNICAST;

/// Handle on one daemon's API.
pub struct GoBgp {
    stub: GobgpApiClient<Channel>,
    log: Logger,
}

impl GoBgp {
    /// Connect to the daemon's gRPC endpoint. The channel is plaintext; the
    /// GoBGP API offers no authentication.
    pub async fn connect(
        addr: IpAddr,
        port: u16,
        log: Logger,
    ) -> Result<Self, Error> {
        let endpoint = format!("http://{}", SocketAddr::new(addr, port));
        trace!(log, "connecting"; "endpoint" => %endpoint);
        let stub = GobgpApiClient::connect(endpoint).await?;
        Ok(Self { stub, log })
    }

    /// Read the global IPv4 unicast RIB, reduced to one `Route` per
    /// destination.
    pub async fn get_rib(&mut self) -> Result<Vec<Route>, Error> {
        let request = api::GetRibRequest {
            table: Some(api::Table {
                r#type: api::Resource::Global as i32,
                family: FAMILY_IPV4_UNICAST,
                ..Default::default()
            }),
        };
        trace!(self.log, "client request";
            "method" => "GetRib",
            "body" => ?request,
        );
        let response = self.stub.get_rib(request).await?.into_inner();
        trace!(self.log, "client response";
            "method" => "GetRib",
            "body" => ?response,
        );

        let table = response.table.ok_or_else(|| {
            Error::MalformedResponse("get rib response without table".into())
        })?;
        rib::routes_from_table(&table)
    }

    /// All configured peers.
    pub async fn get_neighbors(&mut self) -> Result<Vec<NeighborInfo>, Error> {
        let peers = self.get_peers().await?;
        peers.iter().map(NeighborInfo::try_from).collect()
    }

    /// One peer, looked up by its configured neighbor address.
    pub async fn get_neighbor(
        &mut self,
        addr: Ipv4Addr,
    ) -> Result<NeighborInfo, Error> {
        let needle = addr.to_string();
        for peer in self.get_peers().await? {
            let found = peer
                .conf
                .as_ref()
                .map(|conf| conf.neighbor_address == needle)
                .unwrap_or(false);
            if found {
                return NeighborInfo::try_from(&peer);
            }
        }
        Err(Error::PeerNotFound(addr))
    }

    async fn get_peers(&mut self) -> Result<Vec<api::Peer>, Error> {
        let request = api::GetNeighborRequest::default();
        trace!(self.log, "client request";
            "method" => "GetNeighbor",
            "body" => ?request,
        );
        let response = self.stub.get_neighbor(request).await?.into_inner();
        trace!(self.log, "client response";
            "method" => "GetNeighbor",
            "body" => ?response,
        );
        Ok(response.peers)
    }

    /// Configure a new peering on the daemon.
    pub async fn add_neighbor(
        &mut self,
        neighbor: &NeighborConfig,
    ) -> Result<(), Error> {
        let request = api::AddNeighborRequest {
            peer: Some(neighbor.into()),
        };
        trace!(self.log, "client request";
            "method" => "AddNeighbor",
            "body" => ?request,
        );
        self.stub.add_neighbor(request).await?;
        Ok(())
    }

    /// Remove a peering. The daemon identifies the peer by its neighbor
    /// address alone.
    pub async fn delete_neighbor(
        &mut self,
        addr: Ipv4Addr,
    ) -> Result<(), Error> {
        let request = api::DeleteNeighborRequest {
            peer: Some(api::Peer {
                families: vec![FAMILY_IPV4_UNICAST],
                conf: Some(api::PeerConf {
                    neighbor_address: addr.to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
        };
        trace!(self.log, "client request";
            "method" => "DeleteNeighbor",
            "body" => ?request,
        );
        self.stub.delete_neighbor(request).await?;
        Ok(())
    }
}
