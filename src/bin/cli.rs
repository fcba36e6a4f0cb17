use checkin::checkin_auth::{IdentityClaims, Role, issue_token_at, verify_token_at};
use checkin::checkin_config::TokenConfig;
use clap::{Parser, Subcommand};
use dialoguer::Password;
use dotenvy::dotenv;
use rand::RngCore;
use rand::rngs::OsRng;

#[derive(Parser)]
#[command(name = "checkin-cli")]
#[command(about = "Checkin CLI - Operator tools for session credentials", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Issue a session credential
    Issue {
        #[arg(short = 'f', long)]
        first_name: String,

        #[arg(short = 'l', long)]
        last_name: String,

        /// admin, teamlead or volunteer
        #[arg(short = 'r', long)]
        role: Role,

        /// Issue time in epoch milliseconds (defaults to now)
        #[arg(long)]
        at: Option<i64>,
    },
    /// Verify a credential and print its claims
    Verify {
        token: String,

        /// Verification time in epoch milliseconds (defaults to now)
        #[arg(long)]
        at: Option<i64>,
    },
    /// Print a random hex secret suitable for TOKEN_SECRET
    GenerateSecret {
        #[arg(short = 'b', long, default_value = "32")]
        bytes: usize,
    },
}

fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Issue {
            first_name,
            last_name,
            role,
            at,
        } => handle_issue(first_name, last_name, role, at),
        Commands::Verify { token, at } => handle_verify(&token, at),
        Commands::GenerateSecret { bytes } => handle_generate_secret(bytes),
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Reads the secret from `TOKEN_SECRET`, prompting when it is not set.
fn load_token_config() -> TokenConfig {
    if let Ok(config) = TokenConfig::from_env() {
        return config;
    }

    let secret = match Password::new().with_prompt("Token secret").interact() {
        Ok(secret) => secret,
        Err(e) => {
            eprintln!("❌ Failed to read token secret: {}", e);
            std::process::exit(1);
        }
    };

    match TokenConfig::new(secret) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}

fn handle_issue(first_name: String, last_name: String, role: Role, at: Option<i64>) {
    if first_name.is_empty() || last_name.is_empty() {
        eprintln!("❌ First and last name are required");
        std::process::exit(1);
    }
    if first_name.contains(':') || last_name.contains(':') {
        eprintln!("❌ Names must not contain ':'");
        std::process::exit(1);
    }

    let config = load_token_config();
    let claims = IdentityClaims::new(first_name, last_name, role);
    let token = issue_token_at(&claims, &config, at.unwrap_or_else(now_millis));

    println!("{}", token);
}

fn handle_verify(token: &str, at: Option<i64>) {
    let config = load_token_config();

    match verify_token_at(token, &config, at.unwrap_or_else(now_millis)) {
        Ok(claims) => {
            println!("✅ Valid credential");
            println!("   Name: {}", claims.full_name());
            println!("   Role: {}", claims.role);
        }
        Err(e) => {
            eprintln!("❌ Invalid or expired token ({})", e.reason());
            std::process::exit(1);
        }
    }
}

fn handle_generate_secret(bytes: usize) {
    if bytes < 16 {
        eprintln!("❌ Use at least 16 bytes of entropy");
        std::process::exit(1);
    }

    let mut secret = vec![0u8; bytes];
    OsRng.fill_bytes(&mut secret);
    println!("{}", hex::encode(secret));
}
