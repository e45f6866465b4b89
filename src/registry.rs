//! Core proxy registry implementation.

use crate::error::Error;
use crate::proxy::{Protocol, ProxyDescriptor, ProxyStatus};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// An in-memory pool of proxy descriptors with coarse liveness bookkeeping.
///
/// The registry is single-threaded by design: it holds no internal locks,
/// so callers sharing one across threads must serialize access externally.
/// Selection uses an RNG owned by the registry; seed it via
/// [`ProxyRegistry::with_seed`] for deterministic behavior in tests.
pub struct ProxyRegistry {
    /// All proxies, in insertion order. Order is irrelevant to selection.
    proxies: Vec<ProxyDescriptor>,
    /// While locked, [`ProxyRegistry::pick_random`] refuses immediately
    /// with [`Error::PoolLocked`] instead of handing out proxies.
    locked: bool,
    rng: StdRng,
}

impl ProxyRegistry {
    /// Create an empty registry with an OS-entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            proxies: Vec::new(),
            locked: false,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create an empty registry with a fixed RNG seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            proxies: Vec::new(),
            locked: false,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Append one proxy with status [`ProxyStatus::Alive`].
    /// Duplicates are allowed; no dedup is performed.
    pub fn append(
        &mut self,
        protocol: Protocol,
        host: impl Into<String>,
        port: impl Into<String>,
    ) {
        self.push(ProxyDescriptor::new(protocol, host, port));
    }

    /// Append a pre-built descriptor, keeping whatever status it carries.
    pub fn push(&mut self, proxy: ProxyDescriptor) {
        debug!("Adding proxy {} ({})", proxy, proxy.protocol);
        self.proxies.push(proxy);
    }

    /// The alive subset of the pool.
    ///
    /// Fails with [`Error::EmptyPool`] whenever the subset is empty, whether
    /// the pool itself is empty or every entry is busy or bad.
    pub fn alive(&self) -> Result<Vec<&ProxyDescriptor>, Error> {
        let alive: Vec<&ProxyDescriptor> = self
            .proxies
            .iter()
            .filter(|p| p.status == ProxyStatus::Alive)
            .collect();
        if alive.is_empty() {
            return Err(Error::EmptyPool);
        }
        Ok(alive)
    }

    /// Select one alive proxy uniformly at random.
    ///
    /// Fails with [`Error::PoolLocked`] while the registry is locked and
    /// with [`Error::EmptyPool`] when no proxy is alive. There is no
    /// internal waiting or retrying; the retry policy belongs to the caller.
    pub fn pick_random(&mut self) -> Result<ProxyDescriptor, Error> {
        if self.locked {
            return Err(Error::PoolLocked);
        }
        let alive: Vec<usize> = self
            .proxies
            .iter()
            .enumerate()
            .filter(|(_, p)| p.status == ProxyStatus::Alive)
            .map(|(i, _)| i)
            .collect();
        if alive.is_empty() {
            return Err(Error::EmptyPool);
        }
        let idx = alive[self.rng.random_range(0..alive.len())];
        debug!("Picked proxy {}", self.proxies[idx]);
        Ok(self.proxies[idx].clone())
    }

    /// Drop every proxy with status [`ProxyStatus::Bad`], preserving the
    /// relative order of the survivors. Alive and busy proxies stay.
    pub fn remove_bad(&mut self) {
        let before = self.proxies.len();
        self.proxies.retain(|p| p.status != ProxyStatus::Bad);
        let removed = before - self.proxies.len();
        if removed > 0 {
            info!("Removed {} bad proxies, {} remain", removed, self.proxies.len());
        }
    }

    /// Refuse proxy selection until [`ProxyRegistry::unlock`] is called.
    pub fn lock(&mut self) {
        self.locked = true;
    }

    /// Allow proxy selection again.
    pub fn unlock(&mut self) {
        self.locked = false;
    }

    /// Whether selection is currently refused.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// All proxies, in insertion order.
    pub fn proxies(&self) -> &[ProxyDescriptor] {
        &self.proxies
    }

    /// Mutable view of all proxies. Status is set externally (there is no
    /// prober in this crate), so callers flip it through this.
    pub fn proxies_mut(&mut self) -> &mut [ProxyDescriptor] {
        &mut self.proxies
    }

    /// Total and alive proxy counts.
    pub fn stats(&self) -> (usize, usize) {
        let alive = self
            .proxies
            .iter()
            .filter(|p| p.status == ProxyStatus::Alive)
            .count();
        (self.proxies.len(), alive)
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }
}

impl Default for ProxyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
