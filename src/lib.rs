pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::application::portfolio::{PortfolioReport, PortfolioUseCase};
use crate::application::quotes::QuoteUseCase;
use crate::application::scanner::{ScanReport, ScanUseCase};
use crate::application::trackers::{TrackerCard, TrackerUseCase};
use crate::application::watchlist::WatchlistUseCase;
use crate::config::AppConfig;
use crate::domain::entities::position::PortfolioPosition;
use crate::domain::entities::quote::InstrumentQuote;
use crate::domain::entities::watchlist::WatchlistEntry;
use crate::domain::error::DomainError;
use crate::domain::ports::market_data::{HistoryRange, MarketData, NewsItem, OhlcBar};
use crate::domain::ports::portfolio_store::PortfolioStore;
use crate::domain::ports::watchlist_store::WatchlistStore;
use crate::domain::values::sip::{self, SipProjection};
use crate::infrastructure::cache::CachedMarketData;
use crate::infrastructure::csv_store::{write_quotes_csv, CsvPortfolioStore, CsvWatchlistStore};
use crate::infrastructure::yahoo::YahooMarketData;
use std::path::Path;
use std::sync::Arc;

pub struct AssetDesk {
    quote_uc: QuoteUseCase,
    watchlist_uc: WatchlistUseCase,
    scan_uc: ScanUseCase,
    portfolio_uc: PortfolioUseCase,
    tracker_uc: TrackerUseCase,
}

impl AssetDesk {
    pub fn new(config: AppConfig) -> Self {
        let market: Arc<dyn MarketData> = Arc::new(CachedMarketData::new(
            Arc::new(YahooMarketData::new()),
            config.cache_ttl,
        ));
        let watchlist_store: Arc<dyn WatchlistStore> =
            Arc::new(CsvWatchlistStore::new(&config.watchlist_path));
        let portfolio_store: Arc<dyn PortfolioStore> =
            Arc::new(CsvPortfolioStore::new(&config.portfolio_path));

        Self::with_providers(config, market, watchlist_store, portfolio_store)
    }

    pub fn with_providers(
        config: AppConfig,
        market: Arc<dyn MarketData>,
        watchlist_store: Arc<dyn WatchlistStore>,
        portfolio_store: Arc<dyn PortfolioStore>,
    ) -> Self {
        let summary_max = config.summary_max_chars;
        Self {
            quote_uc: QuoteUseCase::new(market.clone(), summary_max),
            watchlist_uc: WatchlistUseCase::new(watchlist_store, market.clone(), summary_max),
            scan_uc: ScanUseCase::new(market.clone(), config.universe, summary_max),
            portfolio_uc: PortfolioUseCase::new(portfolio_store, market.clone(), summary_max),
            tracker_uc: TrackerUseCase::new(market, config.trackers, summary_max),
        }
    }

    // Delegating methods
    pub async fn quote(&self, ticker: &str) -> Result<InstrumentQuote, DomainError> {
        self.quote_uc.snapshot(ticker).await
    }

    pub async fn history(
        &self,
        ticker: &str,
        range: HistoryRange,
    ) -> Result<Vec<OhlcBar>, DomainError> {
        self.quote_uc.history(ticker, range).await
    }

    pub async fn news(&self, ticker: &str) -> Result<Vec<NewsItem>, DomainError> {
        self.quote_uc.news(ticker).await
    }

    pub fn watchlist(&self) -> Result<Vec<WatchlistEntry>, DomainError> {
        self.watchlist_uc.list()
    }

    pub fn watchlist_add(&self, ticker: &str) -> Result<WatchlistEntry, DomainError> {
        self.watchlist_uc.add(ticker)
    }

    pub fn watchlist_remove(&self, ticker: &str) -> Result<(), DomainError> {
        self.watchlist_uc.remove(ticker)
    }

    pub async fn watchlist_scan(&self) -> Result<Vec<InstrumentQuote>, DomainError> {
        self.watchlist_uc.scan().await
    }

    pub async fn scan(&self) -> ScanReport {
        self.scan_uc.run().await
    }

    pub fn export_scan(&self, report: &ScanReport, path: &Path) -> Result<(), DomainError> {
        write_quotes_csv(path, &report.rows)
    }

    pub fn portfolio_positions(&self) -> Result<Vec<PortfolioPosition>, DomainError> {
        self.portfolio_uc.list()
    }

    pub fn portfolio_add(
        &self,
        ticker: &str,
        quantity: u32,
        avg_price: f64,
    ) -> Result<PortfolioPosition, DomainError> {
        self.portfolio_uc.add_position(ticker, quantity, avg_price)
    }

    pub fn portfolio_clear(&self) -> Result<(), DomainError> {
        self.portfolio_uc.clear()
    }

    pub async fn portfolio_report(&self) -> Result<PortfolioReport, DomainError> {
        self.portfolio_uc.report().await
    }

    pub async fn trackers(&self) -> Vec<TrackerCard> {
        self.tracker_uc.run().await
    }

    pub fn sip_projection(
        &self,
        monthly_amount: f64,
        annual_return_pct: f64,
        years: u32,
    ) -> Result<SipProjection, DomainError> {
        sip::project(monthly_amount, annual_return_pct, years).map_err(DomainError::InvalidInput)
    }
}
