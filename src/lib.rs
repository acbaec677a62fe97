// Public library interface for banking-rewards-fees
pub mod accounts;
pub mod api;
pub mod calculations;
pub mod schema;
pub mod utils;
