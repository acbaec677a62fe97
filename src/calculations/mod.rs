pub mod fees;
pub mod rewards;
