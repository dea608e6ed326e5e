// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::Result;
use clap::{Parser, Subcommand};
use gobgp_client::{GoBgp, GOBGP_PORT};
use slog::Drain;
use slog::Logger;
use std::net::IpAddr;

mod neighbor;
mod rib;

#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = None,
    infer_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Address of the daemon's gRPC interface
    #[arg(short, env, long, default_value = "127.0.0.1")]
    address: IpAddr,

    /// TCP port for the daemon's gRPC interface
    #[arg(short, long, default_value_t = GOBGP_PORT)]
    port: u16,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Neighbor management commands.
    #[command(subcommand)]
    Neighbor(neighbor::Commands),

    /// RIB query commands.
    #[command(subcommand)]
    Rib(rib::Commands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log = init_logger();

    let client = GoBgp::connect(cli.address, cli.port, log.clone()).await?;

    match cli.command {
        Commands::Neighbor(command) => {
            neighbor::commands(command, client).await?
        }
        Commands::Rib(command) => rib::commands(command, client).await?,
    }
    Ok(())
}

fn init_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_envlogger::new(drain).fuse();
    let drain = slog_async::Async::new(drain)
        .chan_size(0x2000)
        .build()
        .fuse();
    slog::Logger::root(drain, slog::o!())
}
