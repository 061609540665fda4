//! Provenance CLI - register and verify ledger products from the terminal.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use provenance_portal::app::{consumer_lookup, verify_product, Lookup, ProducerForm, SubmitOutcome};
use provenance_portal::infra::qr;
use provenance_portal::{integrity_hash, LedgerClient, Product, ProductLedger, Settings};

/// Provenance - product registration and verification against the ledger backend
#[derive(Parser, Debug)]
#[command(name = "provenance")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Ledger backend base URL (overrides LEDGER_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Producer identity for new products (overrides PRODUCER_ID)
    #[arg(long, global = true)]
    producer_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Register a new product
    Create {
        /// Product id, e.g. P-1001
        #[arg(long)]
        id: String,
        /// Product name
        #[arg(long)]
        name: String,
        /// Manufacture date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,
        /// Initial status label
        #[arg(long)]
        status: Option<String>,
    },

    /// Look up a product the way a consumer does
    Get {
        /// Product id
        id: String,
        /// Show the backend's own error message on failure
        #[arg(long)]
        verify: bool,
    },

    /// List every product on the ledger
    List,

    /// Print the integrity hash of a draft without submitting it
    Hash {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        /// Manufacture date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },

    /// Print the verification QR code of a product
    Qr {
        /// Product id
        id: String,
        /// Emit an SVG document instead of terminal blocks
        #[arg(long)]
        svg: bool,
    },
}

fn print_product(product: &Product) {
    println!("  id:               {}", product.id);
    println!("  name:             {}", product.name);
    println!("  producer:         {}", product.producer_id);
    println!("  manufacture date: {}", product.manufacture_date);
    println!("  status:           {}", product.status);
    if let Some(hash) = &product.integrity_hash {
        println!("  integrity hash:   {hash}");
    }
    if let Some(tx) = &product.blockchain_tx_id {
        println!("  ledger tx:        {tx}");
    }
    if let Some(owner) = &product.owner {
        println!("  owner:            {owner}");
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::from_env()?.with_overrides(cli.api_url, cli.producer_id)?;

    match cli.command {
        Commands::Create {
            id,
            name,
            date,
            status,
        } => {
            let client = LedgerClient::new(&settings.ledger_api_url)?;
            let mut form = ProducerForm::new(settings.producer_id.clone());
            if let Some(date) = date {
                form.set_manufacture_date(date);
            }
            if let Some(status) = status {
                form.set_status(status);
            }
            form.set_id(id);
            form.set_name(name);
            println!("> Integrity hash: {}", form.integrity_hash());

            match form.submit(&client).await? {
                SubmitOutcome::Created {
                    product_id,
                    message,
                    response,
                } => {
                    println!("> {message}");
                    println!("{}", serde_json::to_string_pretty(response)?);
                    let url = qr::verification_url(&settings.public_url, product_id)?;
                    println!("> Verification link: {url}");
                    println!("{}", qr::render_terminal(&url)?);
                    Ok(())
                }
                SubmitOutcome::Failed { message } => Err(anyhow::anyhow!("{message}")),
            }
        }
        Commands::Get { id, verify } => {
            let client = LedgerClient::new(&settings.ledger_api_url)?;
            let lookup = if verify {
                verify_product(&client, &id).await
            } else {
                consumer_lookup(&client, &id).await
            };
            match lookup {
                Lookup::Found(product) => {
                    println!("> Authentic product found on ledger:");
                    print_product(&product);
                    Ok(())
                }
                Lookup::Failed { message } => Err(anyhow::anyhow!("{message}")),
                Lookup::Idle => Err(anyhow::anyhow!("product id is required")),
            }
        }
        Commands::List => {
            let client = LedgerClient::new(&settings.ledger_api_url)?;
            let products = client
                .get_all_products()
                .await
                .context("transaction list unavailable")?;
            if products.is_empty() {
                println!("> No products recorded yet.");
            }
            for product in &products {
                println!(
                    "{:<16} {:<24} {:<12} {:<12} {}",
                    product.id,
                    product.name,
                    product.producer_id,
                    product.manufacture_date,
                    product.status
                );
            }
            Ok(())
        }
        Commands::Hash { id, name, date } => {
            let hash = integrity_hash(&id, &name, &settings.producer_id, &date);
            if hash.is_empty() {
                return Err(anyhow::anyhow!("id and name are required to derive a hash"));
            }
            println!("{hash}");
            Ok(())
        }
        Commands::Qr { id, svg } => {
            let url = qr::verification_url(&settings.public_url, &id)?;
            if svg {
                println!("{}", qr::render_svg(&url)?);
            } else {
                println!("{}", qr::render_terminal(&url)?);
                println!("{url}");
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("provenance_portal={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
