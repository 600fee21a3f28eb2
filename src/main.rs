use clap::{Parser, Subcommand};
use std::io::{self, BufRead};
use std::process::ExitCode;

use waves_identity::utils::config::default_scheme;
use waves_identity::{generate_seed_phrase, validate_address, Account, IdentityError, Scheme};

#[derive(Parser)]
#[command(name = "waves-identity", version, about = "Seed phrases, key pairs and addresses")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a new seed phrase and derive its account
    Generate {
        #[arg(long, default_value_t = 0)]
        nonce: u32,
        /// Network scheme: a single character or mainnet/testnet/stagenet
        #[arg(long)]
        scheme: Option<Scheme>,
        #[arg(long)]
        json: bool,
    },
    /// Derive an account from an existing seed phrase (read from stdin if omitted)
    Derive {
        #[arg(long)]
        seed: Option<String>,
        #[arg(long, default_value_t = 0)]
        nonce: u32,
        #[arg(long)]
        scheme: Option<Scheme>,
        #[arg(long)]
        json: bool,
    },
    /// Check an address against a network scheme
    Validate {
        address: String,
        #[arg(long)]
        scheme: Option<Scheme>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(command: Command) -> Result<ExitCode, IdentityError> {
    match command {
        Command::Generate { nonce, scheme, json } => {
            let scheme = scheme.unwrap_or_else(default_scheme);
            let mnemonic = generate_seed_phrase()?;
            let account = Account::from_seed(mnemonic.as_bytes(), nonce, scheme)?;
            print_account(&account, nonce, Some(mnemonic.as_str()), json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Derive { seed, nonce, scheme, json } => {
            let scheme = scheme.unwrap_or_else(default_scheme);
            let seed = match seed {
                Some(seed) => seed,
                None => read_seed_line()?,
            };
            let account = Account::from_seed_phrase(&seed, nonce, scheme)?;
            print_account(&account, nonce, None, json)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { address, scheme } => {
            let scheme = scheme.unwrap_or_else(default_scheme);
            if validate_address(address.trim(), scheme) {
                println!("valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("invalid");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn read_seed_line() -> Result<String, IdentityError> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_account(account: &Account, nonce: u32, phrase: Option<&str>, json: bool) -> Result<(), IdentityError> {
    if json {
        let keys = account.to_keys(nonce, phrase);
        println!("{}", serde_json::to_string_pretty(&keys)?);
        return Ok(());
    }

    if let Some(phrase) = phrase {
        println!("Seed phrase: {}", phrase);
    }
    println!("Scheme:      {} ({})", account.scheme(), account.scheme().name());
    println!("Nonce:       {}", nonce);
    println!("Address:     {}", account.address());
    println!("Public key:  {}", account.public_key());
    println!("Private key: {}", account.private_key().to_base58());
    Ok(())
}
