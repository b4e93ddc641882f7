//! Top-level facade crate for rovertel.
//!
//! Re-exports the state core and the HTTP gateway so users can depend on a single crate.

pub mod core {
    pub use rovertel_core::*;
}

pub mod gateway {
    pub use rovertel_gateway::*;
}
