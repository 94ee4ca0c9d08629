//! Top-level facade crate for the prediction monitoring service.
//!
//! Re-exports the core model and the HTTP service so users can depend on a single crate.

pub mod core {
    pub use monitoring_core::*;
}

pub mod service {
    pub use monitoring_service::*;
}
