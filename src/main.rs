use cinema_tickets::{Config, PurchaseOrder, TicketService};
use std::io::Read;
use std::path::Path;
use tracing::info;

const CONFIG_PATH: &str = "config/default.toml";

/// Reads one purchase order as JSON from stdin, runs it through the ticket
/// service with the logging collaborators, and prints the outcome as JSON.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    // Fall back to the built-in prices and limits when there is no config file.
    let config = if Path::new(CONFIG_PATH).exists() {
        Config::load(CONFIG_PATH)?
    } else {
        Config::default()
    };
    info!("Ticket service starting with config: {:?}", config);

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let order: PurchaseOrder = serde_json::from_str(&input)?;

    let service = TicketService::with_logging(config);
    let outcome = service.purchase(order.account_id, &order.requests)?;

    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}
