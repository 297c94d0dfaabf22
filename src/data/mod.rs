//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and keep
//! query logic out of the service layer; domain rules (uniqueness, cooldowns, state
//! transitions) live in the services that call them.

pub mod idol;
pub mod nomination;
pub mod settings;
pub mod winner;

#[cfg(test)]
mod test;
