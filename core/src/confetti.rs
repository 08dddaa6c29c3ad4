//! Confetti planning for the confirmation page.
//!
//! The emitter only decides *what* to spawn and *when* to remove it. The
//! page is reached through two traits so the same code drives the browser
//! and the tests:
//!
//! - [`ConfettiHost`] inserts a particle and hands back a [`ConfettiPiece`]
//! - [`Scheduler`] runs a task after a delay
//!
//! Every piece gets its own removal task and that task owns nothing else.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{
    CONFETTI_COUNT, CONFETTI_LAUNCH_DELAY_MS, CONFETTI_LIFETIME_MS, CONFETTI_MAX_DELAY_SECS,
    CONFETTI_PALETTE,
};
use crate::error::ConfettiResult;

// =============================================================================
// Particle
// =============================================================================

/// Placement of a single confetti piece.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Particle {
    /// One of [`CONFETTI_PALETTE`].
    pub color: String,
    /// Horizontal position, `0.0..100.0` percent of the container width.
    pub left_percent: f64,
    /// Animation start delay, `0.0..0.7` seconds.
    pub delay_secs: f64,
}

impl Particle {
    /// Draws color, position and delay uniformly from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let color = CONFETTI_PALETTE[rng.gen_range(0..CONFETTI_PALETTE.len())];
        Self {
            color: color.to_string(),
            left_percent: rng.gen_range(0.0..100.0),
            delay_secs: rng.gen_range(0.0..CONFETTI_MAX_DELAY_SECS),
        }
    }

    /// CSS `left` value.
    pub fn left_css(&self) -> String {
        format!("{}%", self.left_percent)
    }

    /// CSS `animation-delay` value.
    pub fn delay_css(&self) -> String {
        format!("{}s", self.delay_secs)
    }
}

// =============================================================================
// Host traits
// =============================================================================

/// A particle living in the page.
pub trait ConfettiPiece: 'static {
    /// Takes the particle out of the page.
    ///
    /// Must be a silent no-op when the particle or its container is already
    /// gone.
    fn detach(self);
}

/// Where particles are inserted.
pub trait ConfettiHost {
    type Piece: ConfettiPiece;

    fn insert(&self, particle: &Particle) -> ConfettiResult<Self::Piece>;
}

/// Delayed one-shot execution.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

// =============================================================================
// Emitter
// =============================================================================

/// Spawns a burst of particles with an injected random source.
pub struct ConfettiEmitter<R> {
    rng: R,
}

impl<R: Rng> ConfettiEmitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Inserts [`CONFETTI_COUNT`] particles and schedules the removal of
    /// each one [`CONFETTI_LIFETIME_MS`] after its insertion.
    ///
    /// Returns how many particles made it into the page.
    pub fn launch<H, S>(&mut self, host: &H, scheduler: &S) -> usize
    where
        H: ConfettiHost,
        S: Scheduler,
    {
        let mut spawned = 0;
        for _ in 0..CONFETTI_COUNT {
            let particle = Particle::random(&mut self.rng);
            match host.insert(&particle) {
                Ok(piece) => {
                    scheduler.schedule(CONFETTI_LIFETIME_MS, Box::new(move || piece.detach()));
                    spawned += 1;
                }
                Err(e) => log::warn!("Skipping confetti particle: {}", e),
            }
        }
        log::debug!("Launched {} confetti particles", spawned);
        spawned
    }
}

/// Schedules a launch [`CONFETTI_LAUNCH_DELAY_MS`] from now.
///
/// `locate` runs when the timer fires; if it finds no container the launch
/// is silently skipped.
pub fn schedule_launch<S, H, R, F>(scheduler: S, rng: R, locate: F)
where
    S: Scheduler + Clone + 'static,
    H: ConfettiHost,
    R: Rng + 'static,
    F: FnOnce() -> Option<H> + 'static,
{
    let inner = scheduler.clone();
    scheduler.schedule(
        CONFETTI_LAUNCH_DELAY_MS,
        Box::new(move || match locate() {
            Some(host) => {
                ConfettiEmitter::new(rng).launch(&host, &inner);
            }
            None => log::debug!("No confetti container, skipping launch"),
        }),
    );
}
