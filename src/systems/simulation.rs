//! Simulation frame loop
//!
//! One redraw is one frame: the host takes exactly one fixed step and then
//! culls bodies that left the viewport. The loop runs until [`SimulationSystem::stop`]
//! is called; after that every tick is a no-op.

use sandbox_core::{SimulationHost, StepReport};

/// Drives the host once per frame
pub struct SimulationSystem {
    running: bool,
    frames: u64,
    culled_total: usize,
}

impl SimulationSystem {
    /// Create a running simulation system
    pub fn new() -> Self {
        Self {
            running: true,
            frames: 0,
            culled_total: 0,
        }
    }

    /// Run one frame
    ///
    /// Returns `None` once the loop has been stopped.
    pub fn tick(&mut self, host: &mut SimulationHost) -> Option<StepReport> {
        if !self.running {
            return None;
        }

        let report = host.step();
        self.frames += 1;
        if !report.culled.is_empty() {
            self.culled_total += report.culled.len();
            log::debug!(
                "Frame {}: culled {} bodies, {} remain",
                self.frames,
                report.culled.len(),
                host.registry().len()
            );
        }
        Some(report)
    }

    /// Stop the loop; further ticks do nothing
    pub fn stop(&mut self) {
        if self.running {
            log::info!(
                "Simulation stopped after {} frames ({} bodies culled)",
                self.frames,
                self.culled_total
            );
        }
        self.running = false;
    }

    /// Whether the loop is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames stepped so far
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}
