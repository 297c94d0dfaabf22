//! Business logic layer.
//!
//! Services coordinate between the repositories (data layer) and the chat
//! platform. All Discord side effects go through the `ChatTransport`
//! capability so the election logic can be exercised without a gateway
//! connection.

pub mod botw;
pub mod catalog;
pub mod locks;
pub mod nomination;
pub mod transport;
