//! Reactive form binding and server-rendered pages
//!
//! Re-exports `crypton-pages`: signals, form bindings, the submission flow,
//! routing and the RTL document layout.

pub use crypton_pages::*;
