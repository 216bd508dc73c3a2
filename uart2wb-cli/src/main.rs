//! CLI for poking Wishbone registers over a UART bridge.

#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::missing_docs_in_private_items
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use uart2wb::Client;

#[derive(Parser)]
#[command(name = "uart2wb", version, about = "Read and write Wishbone registers over a UART bridge")]
struct Cli {
    /// Serial port of the bridge (e.g. /dev/ttyUSB0 or COM1).
    #[arg(short, long)]
    port: String,

    /// Baud rate of the serial line.
    #[arg(short, long, default_value_t = 9600)]
    baud: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read a 32-bit register.
    Read {
        /// Register address (decimal or 0x-prefixed hex).
        #[arg(value_parser = parse_u16)]
        addr: u16,
    },

    /// Write a 32-bit register.
    Write {
        /// Register address (decimal or 0x-prefixed hex).
        #[arg(value_parser = parse_u16)]
        addr: u16,

        /// Value to store (decimal or 0x-prefixed hex).
        #[arg(value_parser = parse_u32)]
        data: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut bus = Client::open(&cli.port, cli.baud)
        .with_context(|| format!("cannot reach the bridge on {}", cli.port))?;

    match cli.command {
        Command::Read { addr } => {
            let data = bus.read(addr).context("register read failed")?;
            println!("0x{data:08X}");
        }
        Command::Write { addr, data } => {
            bus.write(addr, data).context("register write failed")?;
        }
    }

    bus.close();
    Ok(())
}

fn parse_u16(s: &str) -> Result<u16, String> {
    parse_int(s).map_err(|e| e.to_string())
}

fn parse_u32(s: &str) -> Result<u32, String> {
    parse_int(s).map_err(|e| e.to_string())
}

/// Parses a decimal or `0x`-prefixed hex integer.
fn parse_int<T: TryFrom<u64>>(s: &str) -> Result<T> {
    let value = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16)?,
        None => s.parse::<u64>()?,
    };
    T::try_from(value).map_err(|_| anyhow::anyhow!("value {s} is out of range"))
}
