use crate::domain::entities::position::PortfolioPosition;
use crate::domain::error::DomainError;

pub trait PortfolioStore: Send + Sync {
    fn load(&self) -> Result<Vec<PortfolioPosition>, DomainError>;
    fn save(&self, positions: &[PortfolioPosition]) -> Result<(), DomainError>;
}
