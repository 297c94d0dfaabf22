//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let settings = factory::guild_settings::create_settings(&db, 100).await?;
//!     let nomination = factory::nomination::create_nomination(&db, 100, 200).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory::nomination::NominationFactory;
//!
//! let nomination = NominationFactory::new(&db)
//!     .guild_id(100)
//!     .member_id(200)
//!     .idol("Aespa", "Karina")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `guild_settings` - Create guild settings entities
//! - `nomination` - Create nomination entities
//! - `botw_winner` - Create winner history entities
//! - `idol` - Create idol catalog entities
//! - `helpers` - Unique ID generation

pub mod botw_winner;
pub mod guild_settings;
pub mod helpers;
pub mod idol;
pub mod nomination;

// Re-export commonly used factory functions for concise usage
pub use botw_winner::create_winner;
pub use guild_settings::create_settings;
pub use idol::create_idol;
pub use nomination::create_nomination;
