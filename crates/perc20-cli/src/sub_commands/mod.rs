pub mod mint;
pub mod transfer;
