// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fs::read_to_string;
use std::io::{stdout, Write};
use std::net::Ipv4Addr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::*;
use gobgp_client::neighbor::DEFAULT_EBGP_MULTIHOP_TTL;
use gobgp_client::{GoBgp, NeighborConfig};
use tabwriter::TabWriter;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all configured neighbors.
    List,
    /// Show one neighbor.
    Get { addr: Ipv4Addr },
    /// Configure a new neighbor.
    Add(Neighbor),
    /// Remove a neighbor.
    Delete { addr: Ipv4Addr },
    /// Configure a neighbor from a JSON file.
    Apply { filename: String },
}

#[derive(Args, Debug)]
pub struct Neighbor {
    /// Local IPv4 address for the peering.
    local_address: Ipv4Addr,

    /// Remote router IPv4 address for the peering.
    neighbor_address: Ipv4Addr,

    /// Local autonomous system number.
    local_as: u32,

    /// Remote autonomous system number.
    peer_as: u32,

    /// Source address for outgoing BGP messages, defaults to the local
    /// address.
    #[arg(long)]
    transport_address: Option<Ipv4Addr>,

    /// Disable eBGP multihop.
    #[arg(long)]
    no_ebgp_multihop: bool,

    /// TTL for eBGP multihop sessions.
    #[arg(long, default_value_t = DEFAULT_EBGP_MULTIHOP_TTL)]
    ebgp_multihop_ttl: u32,

    /// BGP MD5 password.
    #[arg(long)]
    auth_password: Option<String>,

    /// Neighbor description, free text.
    #[arg(long)]
    description: Option<String>,
}

impl From<Neighbor> for NeighborConfig {
    fn from(n: Neighbor) -> NeighborConfig {
        NeighborConfig {
            local_address: n.local_address,
            neighbor_address: n.neighbor_address,
            local_as: n.local_as,
            peer_as: n.peer_as,
            transport_address: n.transport_address,
            ebgp_multihop: !n.no_ebgp_multihop,
            ebgp_multihop_ttl: n.ebgp_multihop_ttl,
            auth_password: n.auth_password,
            description: n.description,
        }
    }
}

pub async fn commands(command: Commands, client: GoBgp) -> Result<()> {
    match command {
        Commands::List => list(client).await,
        Commands::Get { addr } => get(addr, client).await,
        Commands::Add(nbr) => add(nbr, client).await,
        Commands::Delete { addr } => delete(addr, client).await,
        Commands::Apply { filename } => apply(filename, client).await,
    }
}

async fn list(mut c: GoBgp) -> Result<()> {
    let neighbors = c.get_neighbors().await?;

    let mut tw = TabWriter::new(stdout());
    writeln!(
        &mut tw,
        "{}\t{}\t{}\t{}\t{}",
        "Neighbor Address".dimmed(),
        "Local AS".dimmed(),
        "Peer AS".dimmed(),
        "State".dimmed(),
        "Uptime".dimmed(),
    )?;
    for n in &neighbors {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}\t{}",
            n.address,
            n.local_as,
            n.peer_as,
            n.state,
            format_uptime(n.uptime),
        )?;
    }
    tw.flush()?;
    Ok(())
}

async fn get(addr: Ipv4Addr, mut c: GoBgp) -> Result<()> {
    let n = c.get_neighbor(addr).await?;
    println!("{}: {}", "Neighbor Address".dimmed(), n.address);
    println!("{}: {}", "Local AS".dimmed(), n.local_as);
    println!("{}: {}", "Peer AS".dimmed(), n.peer_as);
    println!("{}: {}", "State".dimmed(), n.state);
    println!("{}: {}", "Uptime".dimmed(), format_uptime(n.uptime));
    if !n.description.is_empty() {
        println!("{}: {}", "Description".dimmed(), n.description);
    }
    Ok(())
}

async fn add(nbr: Neighbor, mut c: GoBgp) -> Result<()> {
    c.add_neighbor(&nbr.into()).await?;
    Ok(())
}

async fn delete(addr: Ipv4Addr, mut c: GoBgp) -> Result<()> {
    c.delete_neighbor(addr).await?;
    Ok(())
}

async fn apply(filename: String, mut c: GoBgp) -> Result<()> {
    let contents = read_to_string(filename)?;
    let neighbor: NeighborConfig = serde_json::from_str(&contents)?;
    c.add_neighbor(&neighbor).await?;
    Ok(())
}

/// The daemon reports uptime as the unix timestamp of session establishment,
/// zero when the session never established.
fn format_uptime(uptime: u64) -> String {
    if uptime == 0 {
        return "-".to_string();
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    humantime::Duration::from(Duration::from_secs(now.saturating_sub(uptime)))
        .to_string()
}
