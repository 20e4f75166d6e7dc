pub mod activity;
pub mod points;
pub mod rankings;
pub mod reports;
pub mod stats;
pub mod students;
pub mod transactions;
