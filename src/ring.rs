//! Consistent hashing over a 32-bit ring with virtual nodes.
//!
//! Each real node owns `replicas` positions on the ring; a key is served by
//! the node owning the nearest position clockwise from the key's hash. More
//! replicas give a smoother distribution at the cost of memory and a larger
//! sorted index.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Stable 32-bit position hash (CRC32/IEEE). The same input maps to the same
/// position on every platform and across process restarts.
pub fn hash(input: &str) -> u32 {
    crc32fast::hash(input.as_bytes())
}

pub struct HashRing {
    replicas: usize,
    /// Ring position -> owning node. BTreeMap keeps positions sorted, so
    /// clockwise lookup is a range query.
    ring: BTreeMap<u32, String>,
    /// Node -> positions it inserted, for O(replicas) removal.
    membership: HashMap<String, Vec<u32>>,
}

impl HashRing {
    /// Creates an empty ring with `replicas` virtual nodes per real node.
    pub fn new(replicas: usize) -> Result<Self> {
        if replicas == 0 {
            return Err(Error::InvalidReplicas);
        }

        Ok(Self {
            replicas,
            ring: BTreeMap::new(),
            membership: HashMap::new(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn replicas(&self) -> usize {
        self.replicas
    }

    /// Registers a node under all of its virtual positions.
    ///
    /// If two virtual nodes of different real nodes collide on a position,
    /// the later insertion owns the ring entry while both nodes keep the
    /// position in their membership set. Known limitation of the scheme;
    /// kept as-is so key assignment matches the reference behavior.
    pub fn add_node(&mut self, addr: &str) -> Result<()> {
        if addr.is_empty() {
            return Err(Error::EmptyNodeId);
        }
        if self.membership.contains_key(addr) {
            return Err(Error::DuplicateNode(addr.to_owned()));
        }

        let mut positions = Vec::with_capacity(self.replicas);
        for i in 0..self.replicas {
            let h = hash(&format!("{i}-{addr}"));
            self.ring.insert(h, addr.to_owned());
            positions.push(h);
        }
        self.membership.insert(addr.to_owned(), positions);

        debug!(addr, replicas = self.replicas, "added node to ring");

        Ok(())
    }

    /// Unregisters a node and all of its virtual positions. Removing a node
    /// that was never added is not an error.
    pub fn remove_node(&mut self, addr: &str) {
        let Some(positions) = self.membership.remove(addr) else {
            return;
        };

        for h in positions {
            self.ring.remove(&h);
        }

        debug!(addr, "removed node from ring");
    }

    /// Maps a key to its owning node: the node at the smallest ring position
    /// `>= hash(key)`, wrapping around to the smallest position overall.
    pub fn lookup(&self, key: &str) -> Result<&str> {
        if self.ring.is_empty() {
            return Err(Error::EmptyRing);
        }

        self.locate(hash(key)).ok_or(Error::EmptyRing)
    }

    /// Registered real nodes, in no particular order.
    pub fn nodes(&self) -> Vec<&str> {
        self.membership.keys().map(String::as_str).collect()
    }

    /// Read-only export of the full ring state for diagnostics. Not meant
    /// for the lookup path.
    pub fn snapshot(&self) -> RingSnapshot {
        RingSnapshot {
            replicas: self.replicas,
            ring: self
                .ring
                .iter()
                .map(|(&h, addr)| (h, addr.clone()))
                .collect(),
            membership: self.membership.clone(),
        }
    }

    fn locate(&self, position: u32) -> Option<&str> {
        self.ring
            .range(position..)
            .next()
            .or_else(|| self.ring.iter().next())
            .map(|(_, addr)| addr.as_str())
    }
}

/// Point-in-time copy of the ring's state. `ring` is sorted ascending by
/// position.
#[derive(Clone, Debug, Serialize)]
pub struct RingSnapshot {
    pub replicas: usize,
    pub ring: Vec<(u32, String)>,
    pub membership: HashMap<String, Vec<u32>>,
}
