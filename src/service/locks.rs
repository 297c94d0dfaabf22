//! Per-guild serialization of mutating work.
//!
//! Operator commands and scheduled ticks both mutate per-guild state; each
//! read-modify-write cycle holds the guild's lock so no two mutations
//! overlap on the same guild. Guilds are independent, so cross-guild work
//! proceeds in parallel.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct GuildLocks {
    locks: Arc<DashMap<u64, Arc<Mutex<()>>>>,
}

impl GuildLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets (or creates) the lock guarding a guild's state.
    ///
    /// Hold the guard across the in-memory mutation and its database
    /// commit; release it before non-critical outbound chat I/O.
    pub fn for_guild(&self, guild_id: u64) -> Arc<Mutex<()>> {
        self.locks
            .entry(guild_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_guild_returns_same_lock() {
        let locks = GuildLocks::new();

        let a = locks.for_guild(1);
        let b = locks.for_guild(1);

        let _guard = a.lock().await;
        assert!(b.try_lock().is_err());
    }

    #[tokio::test]
    async fn different_guilds_are_independent() {
        let locks = GuildLocks::new();

        let a = locks.for_guild(1);
        let b = locks.for_guild(2);

        let _guard = a.lock().await;
        assert!(b.try_lock().is_ok());
    }
}
