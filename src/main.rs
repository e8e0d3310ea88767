use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rpc_cli::domain::amount::{Btc, Satoshis, is_valid_amount};
use rpc_cli::interfaces::console::kvp_writer::{Palette, kvp_print};
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a BTC amount to satoshis
    ToSats {
        /// Amount in BTC, at most 8 decimal places
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
    /// Convert satoshis to a BTC amount
    ToBtc {
        #[arg(allow_negative_numbers = true)]
        satoshis: i64,
    },
    /// Check whether a BTC amount survives conversion to whole satoshis
    Verify {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let palette = if cli.no_color {
        Palette::Plain
    } else {
        Palette::Colored
    };

    match cli.command {
        Command::ToSats { amount } => {
            let btc = amount.parse::<Btc>().into_diagnostic()?;
            let sats = btc.to_sats().into_diagnostic()?;
            tracing::debug!(%btc, %sats, "converted to satoshis");
            kvp_print(&[&"amount: ", &btc, &"satoshis: ", &sats], palette).into_diagnostic()?;
        }
        Command::ToBtc { satoshis } => {
            let sats = Satoshis(satoshis);
            let btc = sats.to_btc();
            tracing::debug!(%sats, %btc, "converted to btc");
            kvp_print(&[&"satoshis: ", &sats, &"amount: ", &btc], palette).into_diagnostic()?;
        }
        Command::Verify { amount } => {
            let valid = is_valid_amount(amount);
            if !valid {
                tracing::warn!(amount, "amount does not survive satoshi conversion");
            }
            kvp_print(&[&"amount: ", &amount, &"valid: ", &valid], palette).into_diagnostic()?;
        }
    }

    Ok(())
}
