//! Site settings loaded from TOML and `CRYPTON_*` environment variables

pub use crypton_conf::*;
