//! Database layer - connection pool, schema bootstrap and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - One statement per repository call, no multi-statement transactions
//! - No caching: every read goes to the store

pub mod migrations;
pub mod pool;
pub mod repos;

#[cfg(test)]
pub(crate) mod memory;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
