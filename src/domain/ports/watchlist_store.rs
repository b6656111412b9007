use crate::domain::entities::watchlist::WatchlistEntry;
use crate::domain::error::DomainError;

pub trait WatchlistStore: Send + Sync {
    fn load(&self) -> Result<Vec<WatchlistEntry>, DomainError>;
    fn save(&self, entries: &[WatchlistEntry]) -> Result<(), DomainError>;
}
