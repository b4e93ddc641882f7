//! Fixed-capacity client registry.
//!
//! Clients announce themselves by name through `/api/auth`; the registry
//! remembers the name and the peer address seen at that moment. Entries are
//! never removed during a device session.
//!
//! # Slot assignment
//! Older firmware bumped its occupancy counter before writing, so slot 0 was
//! never used and the first client could not be looked up. Here entries are
//! appended at index `len` and the count grows afterwards: all `capacity`
//! slots are usable and every registered client is retrievable.

use std::net::IpAddr;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{Result, RoverError};

/// One registered client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEntry {
    /// Identity key (case-sensitive).
    pub name: String,
    /// Peer address at registration time.
    pub ip: IpAddr,
}

impl ClientEntry {
    pub fn new(name: impl Into<String>, ip: IpAddr) -> Self {
        Self { name: name.into(), ip }
    }
}

/// Bounded, append-only set of clients keyed by name.
#[derive(Debug)]
pub struct ClientRegistry {
    slots: Mutex<Vec<ClientEntry>>,
    capacity: usize,
}

impl ClientRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Mutex::new(Vec::with_capacity(capacity)),
            capacity,
        }
    }

    // Entries are plain values and every mutation is a single push.
    fn slots(&self) -> MutexGuard<'_, Vec<ClientEntry>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots().is_empty()
    }

    /// Registered clients in registration order.
    pub fn entries(&self) -> Vec<ClientEntry> {
        self.slots().clone()
    }

    /// First entry whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<ClientEntry> {
        self.slots().iter().find(|c| c.name == name).cloned()
    }

    /// Append a client. Fails with `RegistryFull` once `capacity` entries exist.
    ///
    /// Does not check for duplicate names; use [`ClientRegistry::authenticate`]
    /// for the check-then-insert sequence.
    pub fn register(&self, entry: ClientEntry) -> Result<()> {
        let mut slots = self.slots();
        push_bounded(&mut slots, self.capacity, entry)
    }

    /// Register `name` unless it is already taken or the registry is full.
    ///
    /// Lookup and insert happen under one lock acquisition, so two concurrent
    /// callers can never both claim the last slot or the same name.
    pub fn authenticate(&self, name: &str, ip: IpAddr) -> Result<()> {
        let mut slots = self.slots();
        if slots.iter().any(|c| c.name == name) {
            tracing::debug!(%ip, client = name, "client name already registered");
            return Err(RoverError::DuplicateClient(name.to_string()));
        }
        push_bounded(&mut slots, self.capacity, ClientEntry::new(name, ip))
    }
}

fn push_bounded(slots: &mut Vec<ClientEntry>, capacity: usize, entry: ClientEntry) -> Result<()> {
    if slots.len() + 1 > capacity {
        tracing::debug!(ip = %entry.ip, client = %entry.name, capacity, "client registry full");
        return Err(RoverError::RegistryFull);
    }
    tracing::debug!(ip = %entry.ip, client = %entry.name, "new client registered");
    slots.push(entry);
    Ok(())
}
