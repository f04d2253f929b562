use std::time::{Duration, Instant};

use tracing::{info, warn};

/// Tuning knobs for the backend circuit breaker
#[derive(Debug, Clone, Copy)]
pub struct BreakerConfig {
    /// Consecutive transient failures before the circuit opens
    pub failure_threshold: u32,
    /// How long the circuit stays open before the next probe is let through
    pub cooldown: Duration,
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 3,
            cooldown: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakerState {
    Closed,
    Open,
    HalfOpen,
}

/// Closed/open/half-open circuit breaker for the backend path.
///
/// Closed: requests flow. Open: requests are refused until the cooldown
/// elapses, then the next request is admitted as a probe (half-open). A
/// successful probe closes the circuit; a failed one reopens it and
/// restarts the cooldown. The service keeps this behind a mutex, so state
/// changes are atomic; concurrent half-open probes are tolerated since any
/// success closes the circuit.
#[derive(Debug)]
pub struct CircuitBreaker {
    config: BreakerConfig,
    state: BreakerState,
    consecutive_failures: u32,
    opened_at: Option<Instant>,
}

impl CircuitBreaker {
    pub fn new(config: BreakerConfig) -> Self {
        Self {
            config,
            state: BreakerState::Closed,
            consecutive_failures: 0,
            opened_at: None,
        }
    }

    pub fn state(&self) -> BreakerState {
        self.state
    }

    /// Whether a backend request may be attempted right now. Transitions
    /// open -> half-open once the cooldown has elapsed.
    pub fn allow_request(&mut self) -> bool {
        match self.state {
            BreakerState::Closed | BreakerState::HalfOpen => true,
            BreakerState::Open => {
                let elapsed = self
                    .opened_at
                    .map(|at| at.elapsed())
                    .unwrap_or(Duration::MAX);
                if elapsed >= self.config.cooldown {
                    info!("breaker cooldown elapsed, probing backend");
                    self.state = BreakerState::HalfOpen;
                    true
                } else {
                    false
                }
            }
        }
    }

    pub fn record_success(&mut self) {
        if self.state != BreakerState::Closed {
            info!("backend recovered, closing circuit");
        }
        self.state = BreakerState::Closed;
        self.consecutive_failures = 0;
        self.opened_at = None;
    }

    pub fn record_failure(&mut self) {
        match self.state {
            BreakerState::HalfOpen => {
                warn!("backend probe failed, reopening circuit");
                self.open();
            }
            BreakerState::Closed => {
                self.consecutive_failures += 1;
                if self.consecutive_failures >= self.config.failure_threshold {
                    warn!(
                        failures = self.consecutive_failures,
                        "failure threshold reached, opening circuit"
                    );
                    self.open();
                }
            }
            BreakerState::Open => {}
        }
    }

    /// Open the circuit immediately, e.g. after a failed startup health probe.
    pub fn trip(&mut self) {
        self.open();
    }

    fn open(&mut self) {
        self.state = BreakerState::Open;
        self.consecutive_failures = 0;
        self.opened_at = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaker(threshold: u32, cooldown: Duration) -> CircuitBreaker {
        CircuitBreaker::new(BreakerConfig {
            failure_threshold: threshold,
            cooldown,
        })
    }

    #[test]
    fn opens_after_threshold_failures() {
        let mut b = breaker(3, Duration::from_secs(60));
        b.record_failure();
        b.record_failure();
        assert_eq!(b.state(), BreakerState::Closed);
        b.record_failure();
        assert_eq!(b.state(), BreakerState::Open);
        assert!(!b.allow_request());
    }

    #[test]
    fn success_resets_the_failure_streak() {
        let mut b = breaker(2, Duration::from_secs(60));
        b.record_failure();
        b.record_success();
        b.record_failure();
        assert_eq!(b.state(), BreakerState::Closed);
    }

    #[test]
    fn half_open_probe_closes_on_success() {
        let mut b = breaker(1, Duration::ZERO);
        b.record_failure();
        assert_eq!(b.state(), BreakerState::Open);
        // zero cooldown: the very next request is admitted as a probe
        assert!(b.allow_request());
        assert_eq!(b.state(), BreakerState::HalfOpen);
        b.record_success();
        assert_eq!(b.state(), BreakerState::Closed);
    }

    #[test]
    fn half_open_probe_reopens_on_failure() {
        let mut b = breaker(1, Duration::ZERO);
        b.record_failure();
        assert!(b.allow_request());
        b.record_failure();
        assert_eq!(b.state(), BreakerState::Open);
    }

    #[test]
    fn stays_open_within_cooldown() {
        let mut b = breaker(1, Duration::from_secs(3600));
        b.record_failure();
        assert!(!b.allow_request());
        assert!(!b.allow_request());
        assert_eq!(b.state(), BreakerState::Open);
    }
}
