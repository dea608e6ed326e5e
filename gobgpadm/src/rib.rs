// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::{stdout, Write};

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use gobgp_client::GoBgp;
use tabwriter::TabWriter;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get the global IPv4 unicast RIB.
    Get,
}

pub async fn commands(command: Commands, client: GoBgp) -> Result<()> {
    match command {
        Commands::Get => get_rib(client).await,
    }
}

async fn get_rib(mut c: GoBgp) -> Result<()> {
    let routes = c.get_rib().await?;

    let mut tw = TabWriter::new(stdout());
    writeln!(
        &mut tw,
        "{}\t{}\t{}\t{}\t{}\t{}",
        "Prefix".dimmed(),
        "Next Hop".dimmed(),
        "MED".dimmed(),
        "Local Pref".dimmed(),
        "AS Path".dimmed(),
        "Communities".dimmed(),
    )?;
    for r in &routes {
        writeln!(
            &mut tw,
            "{}\t{}\t{}\t{}\t{}\t{}",
            r.prefix,
            r.next_hop
                .map(|nh| nh.to_string())
                .unwrap_or_else(|| "-".to_string()),
            r.med.map(|m| m.to_string()).unwrap_or_else(|| "-".to_string()),
            r.local_pref
                .map(|lp| lp.to_string())
                .unwrap_or_else(|| "-".to_string()),
            r.as_path
                .iter()
                .map(|asn| asn.to_string())
                .collect::<Vec<_>>()
                .join(" "),
            r.communities
                .iter()
                .map(|community| community.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        )?;
    }
    tw.flush()?;
    Ok(())
}
