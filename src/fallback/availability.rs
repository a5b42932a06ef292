use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use crate::api::ApiClient;
use crate::constants::REPROBE_COOLDOWN_SECS;

/// Anything that can answer "is the backend up right now?".
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn check(&self) -> bool;
}

#[async_trait]
impl HealthProbe for ApiClient {
    async fn check(&self) -> bool {
        self.health_check().await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    Unknown,
    Available,
    Unavailable,
}

enum GateState {
    Unknown,
    Available,
    Unavailable { since: Instant },
}

/// Cached backend-availability flag shared by the resilient services.
///
/// The health endpoint is probed once on first use; a later live-call
/// failure downgrades the gate so every subsequent operation goes straight
/// to the demo data. After a cooldown the gate probes again, giving the
/// backend a chance to come back within the same session.
pub struct AvailabilityGate {
    probe: Arc<dyn HealthProbe>,
    state: Mutex<GateState>,
    reprobe_after: Option<Duration>,
}

impl AvailabilityGate {
    pub fn new(probe: Arc<dyn HealthProbe>) -> Self {
        Self::with_reprobe_after(probe, Duration::from_secs(REPROBE_COOLDOWN_SECS))
    }

    pub fn with_reprobe_after(probe: Arc<dyn HealthProbe>, cooldown: Duration) -> Self {
        Self {
            probe,
            state: Mutex::new(GateState::Unknown),
            reprobe_after: Some(cooldown),
        }
    }

    /// A gate that never probes again once downgraded.
    pub fn without_reprobe(probe: Arc<dyn HealthProbe>) -> Self {
        Self {
            probe,
            state: Mutex::new(GateState::Unknown),
            reprobe_after: None,
        }
    }

    /// Returns whether the live backend should be attempted, probing health
    /// when the cached state does not already answer the question.
    pub async fn ensure(&self) -> bool {
        let mut state = self.state.lock().await;
        match &*state {
            GateState::Available => true,
            GateState::Unknown => {
                let up = self.probe.check().await;
                if up {
                    info!("Backend health probe succeeded");
                    *state = GateState::Available;
                } else {
                    warn!("Backend health probe failed, serving demo data");
                    *state = GateState::Unavailable {
                        since: Instant::now(),
                    };
                }
                up
            }
            GateState::Unavailable { since } => {
                let cooldown_elapsed = self
                    .reprobe_after
                    .map(|cooldown| since.elapsed() >= cooldown)
                    .unwrap_or(false);
                if !cooldown_elapsed {
                    return false;
                }
                let up = self.probe.check().await;
                if up {
                    info!("Backend recovered, leaving demo mode");
                    *state = GateState::Available;
                } else {
                    *state = GateState::Unavailable {
                        since: Instant::now(),
                    };
                }
                up
            }
        }
    }

    /// Marks the backend unreachable after a live call failed.
    pub async fn downgrade(&self) {
        let mut state = self.state.lock().await;
        if matches!(*state, GateState::Unavailable { .. }) {
            return;
        }
        warn!("Live call failed, downgrading backend to unavailable");
        *state = GateState::Unavailable {
            since: Instant::now(),
        };
    }

    pub async fn availability(&self) -> Availability {
        let state = self.state.lock().await;
        match &*state {
            GateState::Unknown => Availability::Unknown,
            GateState::Available => Availability::Available,
            GateState::Unavailable { .. } => Availability::Unavailable,
        }
    }

    /// True once the gate has downgraded; the shell uses this to render the
    /// demo-mode indicator.
    pub async fn is_demo_mode(&self) -> bool {
        self.availability().await == Availability::Unavailable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    struct StubProbe {
        up: AtomicBool,
        calls: AtomicUsize,
    }

    impl StubProbe {
        fn new(up: bool) -> Arc<Self> {
            Arc::new(Self {
                up: AtomicBool::new(up),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HealthProbe for StubProbe {
        async fn check(&self) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.up.load(Ordering::SeqCst)
        }
    }

    #[tokio::test]
    async fn probes_once_and_caches_available() {
        let probe = StubProbe::new(true);
        let gate = AvailabilityGate::new(probe.clone());

        assert!(gate.ensure().await);
        assert!(gate.ensure().await);
        assert!(gate.ensure().await);
        assert_eq!(probe.calls(), 1);
        assert_eq!(gate.availability().await, Availability::Available);
    }

    #[tokio::test]
    async fn failed_probe_goes_unavailable_without_reprobe() {
        let probe = StubProbe::new(false);
        let gate = AvailabilityGate::without_reprobe(probe.clone());

        assert!(!gate.ensure().await);
        assert!(!gate.ensure().await);
        assert_eq!(probe.calls(), 1);
        assert!(gate.is_demo_mode().await);
    }

    #[tokio::test]
    async fn downgrade_sticks_until_cooldown() {
        let probe = StubProbe::new(true);
        let gate = AvailabilityGate::new(probe.clone());

        assert!(gate.ensure().await);
        gate.downgrade().await;
        assert_eq!(gate.availability().await, Availability::Unavailable);
        // Cooldown has not elapsed, so no re-probe happens
        assert!(!gate.ensure().await);
        assert_eq!(probe.calls(), 1);
    }

    #[tokio::test]
    async fn reprobe_after_cooldown_recovers() {
        let probe = StubProbe::new(false);
        let gate = AvailabilityGate::with_reprobe_after(probe.clone(), Duration::from_millis(0));

        assert!(!gate.ensure().await);
        probe.up.store(true, Ordering::SeqCst);
        assert!(gate.ensure().await);
        assert_eq!(gate.availability().await, Availability::Available);
        assert_eq!(probe.calls(), 2);
    }
}
