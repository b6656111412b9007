use assetdesk::cli::commands::{Cli, Commands};
use assetdesk::config::AppConfig;
use assetdesk::domain::ports::market_data::HistoryRange;
use assetdesk::AssetDesk;
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let desk = AssetDesk::new(AppConfig::from_env());

    if let Err(e) = run_command(desk, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(desk: AssetDesk, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Quote { ticker } => {
            let quote = desk.quote(&ticker).await?;
            println!("{}", serde_json::to_string_pretty(&quote)?);
        }
        Commands::History { ticker, range } => {
            let range: HistoryRange = range.parse().map_err(|e: String| e)?;
            let bars = desk.history(&ticker, range).await?;
            println!("{}", serde_json::to_string_pretty(&bars)?);
        }
        Commands::News { ticker } => {
            let items = desk.news(&ticker).await?;
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        Commands::Watch => {
            let rows = desk.watchlist_scan().await?;
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        Commands::WatchAdd { ticker } => {
            let entry = desk.watchlist_add(&ticker)?;
            println!("Added {} to the watchlist", entry.ticker);
        }
        Commands::WatchRemove { ticker } => {
            desk.watchlist_remove(&ticker)?;
            println!("Removed {} from the watchlist", ticker.to_uppercase());
        }
        Commands::Scan { export } => {
            let report = desk.scan().await;
            match export {
                Some(path) => {
                    desk.export_scan(&report, &path)?;
                    println!("Exported {} rows to {}", report.rows.len(), path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }
        Commands::Portfolio => {
            let report = desk.portfolio_report().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::PortfolioAdd {
            ticker,
            quantity,
            avg_price,
        } => {
            let position = desk.portfolio_add(&ticker, quantity, avg_price)?;
            println!("{}", serde_json::to_string_pretty(&position)?);
        }
        Commands::PortfolioClear => {
            desk.portfolio_clear()?;
            println!("Portfolio cleared");
        }
        Commands::Trackers => {
            let cards = desk.trackers().await;
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
        Commands::Sip {
            monthly,
            annual_return,
            years,
        } => {
            let projection = desk.sip_projection(monthly, annual_return, years)?;
            println!("{}", serde_json::to_string_pretty(&projection)?);
        }
    }
    Ok(())
}
