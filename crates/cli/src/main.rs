//! Somahar CLI - Order tracking from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Connect to a real server (validates the key against /app-config)
//! somahar login --url my-site.com/wp-json/fbbot/v1 --key SECRET
//!
//! # Connection blocked by server policy but the settings are known-good
//! somahar login --url my-site.com/wp-json/fbbot/v1 --key SECRET --force
//!
//! # Work offline against generated sample data
//! somahar demo
//!
//! # Browse orders
//! somahar orders --page 2
//!
//! # Create and update orders
//! somahar add --buyer "Rahim Khan" --phone 01712345678 --address "House 12, Dhaka"
//! somahar set-status --order 8 --status "Out for Delivery"
//! somahar set-details --order 8 --rider-name "Rider 3" --delivery-partner RedX
//! ```
//!
//! # Environment Variables
//!
//! - `SOMAHAR_SETTINGS_PATH` - Overrides the settings file location
//! - `RUST_LOG` - Log filter (default level: info)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use somahar_client::{Session, SettingsStore};

mod commands;

#[derive(Parser)]
#[command(name = "somahar")]
#[command(author, version, about = "Somahar logistics order tracking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Connect to a server, validating the key first
    Login {
        /// Server base URL (https:// is assumed when no scheme is given)
        #[arg(short, long)]
        url: String,

        /// API key for the credentialed endpoints
        #[arg(short, long)]
        key: String,

        /// Do not persist the connection across runs
        #[arg(long)]
        no_remember: bool,

        /// Commit the settings without the validating call
        #[arg(long)]
        force: bool,
    },
    /// Switch to demo mode (generated sample data, no network)
    Demo,
    /// Clear the session and erase persisted settings
    Logout,
    /// Show the session state and active settings
    Status,
    /// Show the server-defined partners and quick statuses
    Config {
        /// Re-fetch from the server instead of showing the cached copy
        #[arg(long)]
        refresh: bool,
    },
    /// List one page of orders
    Orders {
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,
    },
    /// Create a new order
    Add {
        /// Buyer full name (required)
        #[arg(long)]
        buyer: String,

        /// Buyer phone number (required)
        #[arg(long)]
        phone: String,

        /// Delivery address (required)
        #[arg(long)]
        address: String,

        /// Police station / area
        #[arg(long)]
        police_station: Option<String>,

        /// Amount as a display string, e.g. "1200 BDT"
        #[arg(long)]
        amount: Option<String>,

        /// Rider name
        #[arg(long)]
        rider_name: Option<String>,

        /// Rider phone
        #[arg(long)]
        rider_phone: Option<String>,

        /// Delivery partner name
        #[arg(long)]
        delivery_partner: Option<String>,
    },
    /// Update the latest status of an order
    SetStatus {
        /// Order id
        #[arg(short, long)]
        order: u64,

        /// New status message
        #[arg(short, long)]
        status: String,
    },
    /// Update delivery metadata of an order (status is updated separately)
    SetDetails {
        /// Order id
        #[arg(short, long)]
        order: u64,

        #[arg(long)]
        rider_name: Option<String>,

        #[arg(long)]
        rider_phone: Option<String>,

        #[arg(long)]
        police_station: Option<String>,

        /// Estimated delivery date, e.g. 2025-12-10
        #[arg(long)]
        estimated_delivery: Option<String>,

        #[arg(long)]
        delivery_partner: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = SettingsStore::at_default_path()?;
    let mut session = Session::restore(store);

    match cli.command {
        Commands::Login {
            url,
            key,
            no_remember,
            force,
        } => commands::session::login(&mut session, &url, &key, !no_remember, force).await?,
        Commands::Demo => commands::session::demo(&mut session).await,
        Commands::Logout => commands::session::logout(&mut session),
        Commands::Status => commands::session::status(&session),
        Commands::Config { refresh } => commands::config::show(&mut session, refresh).await?,
        Commands::Orders { page } => commands::orders::list(&session, page).await?,
        Commands::Add {
            buyer,
            phone,
            address,
            police_station,
            amount,
            rider_name,
            rider_phone,
            delivery_partner,
        } => {
            let payload = somahar_core::CreateOrderPayload {
                buyer_name: buyer,
                phone,
                address,
                police_station,
                amount,
                rider_name,
                rider_phone,
                delivery_partner,
            };
            commands::order::add(&session, &payload).await?;
        }
        Commands::SetStatus { order, status } => {
            commands::order::set_status(&session, order, &status).await?;
        }
        Commands::SetDetails {
            order,
            rider_name,
            rider_phone,
            police_station,
            estimated_delivery,
            delivery_partner,
        } => {
            let payload = somahar_core::UpdateDetailsPayload {
                order_id: order,
                rider_name,
                rider_phone,
                police_station,
                estimated_delivery,
                delivery_partner,
            };
            commands::order::set_details(&session, &payload).await?;
        }
    }
    Ok(())
}
