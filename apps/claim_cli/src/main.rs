use std::sync::Arc;

use alloy::primitives::Address;
use anyhow::{Context, Result};
use chain_integration::{Erc20Gateway, LocalKeyWallet, TokenGateway};
use claim_core::{
    ClaimClient, ClaimError, ConnectOutcome, MissingTokenGateway, WalletCapability, WalletSession,
};
use clap::Parser;
use shared::domain::{Notification, TOKEN_SYMBOL};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;
use url::Url;

mod config;

use config::{load_settings, Settings};

#[derive(Parser, Debug)]
struct Args {
    /// JSON-RPC endpoint of the chain.
    #[arg(long)]
    rpc_url: Option<String>,
    /// Address of the token contract.
    #[arg(long)]
    token_address: Option<String>,
    /// Default whole-token amount claimed per `claim`.
    #[arg(long)]
    claim_amount: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Connect,
    Balance,
    Claim(Option<String>),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let command = match parts.next()? {
        "connect" => Command::Connect,
        "balance" => Command::Balance,
        "claim" => Command::Claim(parts.next().map(str::to_string)),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = load_settings();
    if let Some(v) = args.rpc_url {
        settings.rpc_url = v;
    }
    if let Some(v) = args.token_address {
        settings.token_address = v;
    }
    if let Some(v) = args.claim_amount {
        settings.claim_amount = v;
    }

    let rpc_url: Url = settings
        .rpc_url
        .parse()
        .with_context(|| format!("invalid rpc url: {}", settings.rpc_url))?;
    let token_address: Address = settings
        .token_address
        .parse()
        .with_context(|| format!("invalid token address: {}", settings.token_address))?;

    let (wallet, gateway): (WalletCapability, Arc<dyn TokenGateway>) =
        match LocalKeyWallet::from_env(&settings.wallet_key_env) {
            Some(discovered) => {
                let discovered = Arc::new(discovered);
                let gateway = Erc20Gateway::new(rpc_url, token_address, Arc::clone(&discovered));
                (
                    WalletCapability::Available(discovered),
                    Arc::new(gateway),
                )
            }
            None => (WalletCapability::Absent, Arc::new(MissingTokenGateway)),
        };

    let client = ClaimClient::new(wallet, gateway);
    run(&client, &settings).await
}

async fn run(client: &ClaimClient, settings: &Settings) -> Result<()> {
    println!("{TOKEN_SYMBOL} claim console. Type `help` for commands.");

    let mut session: Option<WalletSession> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        {
            use std::io::Write as _;
            print!("> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Some(Command::Connect) => handle_connect(client, &mut session).await,
            Some(Command::Balance) => match &session {
                Some(session) => refresh_balance(client, session).await,
                None => println!("Connect a wallet first."),
            },
            Some(Command::Claim(amount)) => {
                let amount = amount.as_deref().unwrap_or(&settings.claim_amount);
                handle_claim(client, &session, amount).await;
            }
            Some(Command::Help) => print_help(&settings.claim_amount),
            Some(Command::Quit) => break,
            None => println!("Unknown command: {line}. Type `help` for commands."),
        }
    }

    Ok(())
}

async fn handle_connect(client: &ClaimClient, session: &mut Option<WalletSession>) {
    match client.connect_wallet().await {
        ConnectOutcome::Connected(connected) => {
            println!("Connected: {}", connected.address);
            refresh_balance(client, &connected).await;
            *session = Some(connected);
        }
        ConnectOutcome::NoWallet => println!("{}", Notification::WalletMissing),
        ConnectOutcome::Failed => println!("{}", Notification::ConnectFailed),
    }
}

async fn handle_claim(client: &ClaimClient, session: &Option<WalletSession>, amount: &str) {
    let Some(session) = session else {
        println!("Connect a wallet before claiming.");
        return;
    };

    match client.claim(session, amount).await {
        Ok(_) => println!(
            "{}",
            Notification::ClaimSucceeded {
                amount: amount.to_string(),
            }
        ),
        Err(ClaimError::AlreadyInFlight) => println!("{}", Notification::ClaimInProgress),
        Err(err) => {
            error!("claim: {err:?}");
            println!("{}", Notification::ClaimFailed);
        }
    }

    // Re-read actual chain state after every attempt; the display is never
    // updated optimistically.
    refresh_balance(client, session).await;
}

async fn refresh_balance(client: &ClaimClient, session: &WalletSession) {
    match client.display_balance(session).await {
        Ok(balance) => println!("{balance} {TOKEN_SYMBOL}"),
        Err(err) => {
            error!("balance: read failed: {err:#}");
            println!("Balance unavailable: {err}");
        }
    }
}

fn print_help(default_amount: &str) {
    println!("Commands:");
    println!("  connect          request account access from the wallet");
    println!("  balance          re-read the connected account's token balance");
    println!("  claim [amount]   claim tokens via self-transfer (default {default_amount})");
    println!("  quit             exit");
}
