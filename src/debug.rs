/*
 * Debug Information Module
 *
 * This module defines the DebugInfo struct that contains performance metrics
 * and simulation state to be displayed in the UI and the debug overlay.
 */

use std::time::Duration;

// Debug information to display
#[derive(Clone, Debug)]
pub struct DebugInfo {
    pub fps: f32,
    pub frame_time: Duration,
    pub physics_updates_per_frame: usize,
    pub frame_count: u64,
    pub guide_length: f32,
}

impl Default for DebugInfo {
    fn default() -> Self {
        Self {
            fps: 0.0,
            frame_time: Duration::ZERO,
            physics_updates_per_frame: 0,
            frame_count: 0,
            guide_length: 0.0,
        }
    }
}
