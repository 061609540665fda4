use provenance_portal::infra::config::{self, Settings};
use provenance_portal::{LedgerClient, ProductLedger, StatusTone};

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight\n\
         \n\
         Reads env vars (or .env):\n\
           LEDGER_API_URL, PRODUCER_ID, PORTAL_BIND_ADDR, PORTAL_PUBLIC_URL\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    // Force-read config (nice error messages if something is malformed)
    let settings = Settings::from_env()?;

    println!("> Preflight:");
    println!("  LEDGER_API_URL={}", settings.ledger_api_url);
    println!("  PRODUCER_ID={}", settings.producer_id);
    println!("  PORTAL_BIND_ADDR={}", settings.bind_addr);
    println!("  PORTAL_PUBLIC_URL={}", settings.public_url);
    if settings.producer_id == config::DEFAULT_PRODUCER_ID {
        eprintln!("  Warning: PRODUCER_ID is the placeholder default.");
    }

    // Backend reachability via the list endpoint
    let client = LedgerClient::new(&settings.ledger_api_url)?;
    let products = client
        .get_all_products()
        .await
        .map_err(|e| anyhow::anyhow!("Ledger backend not usable at {}: {}", settings.ledger_api_url, e))?;

    let verified = products
        .iter()
        .filter(|p| p.tone() == StatusTone::Verified)
        .count();
    let failed = products
        .iter()
        .filter(|p| p.tone() == StatusTone::Failed)
        .count();
    println!(
        "  Backend reachable: {} products ({} verified, {} failed, {} pending)",
        products.len(),
        verified,
        failed,
        products.len() - verified - failed
    );

    println!("> Preflight OK.");
    Ok(())
}
