pub mod deals;
pub mod emails;
pub mod health_check;
pub mod stats;
