//! Accounts, wallets and the coin exchange

pub use crypton_accounts::*;
