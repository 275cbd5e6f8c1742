//! Model types for data contracts
//!
//! Defines the contract structures consumed by the export operations:
//! the root contract, its models (tables), their fields, and server
//! (dialect) descriptors.

pub mod contract;
pub mod model;
pub mod server;

pub use contract::{ContractInfo, DataContract};
pub use model::{Field, Model};
pub use server::Server;
