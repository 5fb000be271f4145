//! Adapters - Implementations of the outward-facing surfaces.

pub mod http;
