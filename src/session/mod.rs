pub mod id_generator;
pub mod portfolio_session;
pub mod sample_data;

pub use id_generator::IdGenerator;
pub use portfolio_session::{PortfolioDocument, PortfolioSession};
