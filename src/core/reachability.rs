//! # Reachability
//!
//! This module contains the [`Reachability`] capability consulted
//! before every request attempt, and [`ConnectionMonitor`], a shared
//! handle a background monitor can drive.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Read-only view of network availability.
///
/// The [`Client`] consults this before every attempt, including
/// replays; while it reports `false`, no request reaches the transport
/// and calls fail with [`NetworkError::reachability`].
///
/// [`Client`]: crate::client::Client
/// [`NetworkError::reachability`]: crate::core::NetworkError::reachability
pub trait Reachability: Send + Sync {
    /// Whether the network is currently usable.
    fn is_connected(&self) -> bool;
}

/// Shared connectivity flag.
///
/// Clones are cheap and all observe the same flag, so one clone can be
/// handed to a platform network monitor while another lives inside the
/// client:
///
/// ```
/// use courier::core::{ConnectionMonitor, Reachability};
///
/// let monitor = ConnectionMonitor::online();
/// let view = monitor.clone();
///
/// monitor.set_online(false);
/// assert!(!view.is_connected());
/// ```
///
/// Reads and writes are atomic; readers always observe a consistent
/// snapshot.
#[derive(Debug, Clone)]
pub struct ConnectionMonitor {
    connected: Arc<AtomicBool>,
}

impl ConnectionMonitor {
    /// A monitor that starts in the connected state.
    pub fn online() -> Self {
        Self::with_state(true)
    }

    /// A monitor that starts in the disconnected state.
    ///
    /// Useful when a background monitor reports the real state shortly
    /// after startup and requests must not race it.
    pub fn offline() -> Self {
        Self::with_state(false)
    }

    fn with_state(connected: bool) -> Self {
        Self {
            connected: Arc::new(AtomicBool::new(connected)),
        }
    }

    /// Record a connectivity change.
    pub fn set_online(&self, online: bool) {
        self.connected.store(online, Ordering::Release);
    }
}

impl Default for ConnectionMonitor {
    fn default() -> Self {
        Self::online()
    }
}

impl Reachability for ConnectionMonitor {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Acquire)
    }
}
