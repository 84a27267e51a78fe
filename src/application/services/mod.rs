//! Business logic services for the application layer.

pub mod link_store;

pub use link_store::LinkStore;
