//! Ports (trait boundaries) for external collaborators.
//!
//! The simulation core has no dependency on any presentation layer; it only
//! emits events through the traits defined here. Adapters (progress bars,
//! metrics, JSONL export) implement these ports.

pub mod observer;

pub use observer::Observer;
