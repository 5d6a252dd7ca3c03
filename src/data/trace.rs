//! The phosphor trace: a sliding window of recent beam positions.

use std::collections::VecDeque;

use egui::Pos2;

/// Bounded FIFO of screen-space beam positions, oldest first.
///
/// Capacity tracks the live persistence parameter: shrinking it evicts
/// surplus points immediately, not lazily over later frames.
#[derive(Debug, Clone)]
pub struct TraceBuffer {
    points: VecDeque<Pos2>,
    capacity: usize,
}

impl TraceBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest-to-newest iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Pos2> {
        self.points.iter()
    }

    pub fn newest(&self) -> Option<Pos2> {
        self.points.back().copied()
    }

    /// Append this frame's beam position and evict anything past capacity.
    pub fn push(&mut self, point: Pos2) {
        self.points.push_back(point);
        self.evict();
    }

    /// Track the live persistence parameter, evicting immediately on shrink.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.evict();
    }

    fn evict(&mut self) {
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    /// Recency fraction for the point at `index`: oldest → dimmest, newest
    /// → brightest. A single-point buffer reads as fully bright.
    pub fn brightness_fraction(&self, index: usize) -> f32 {
        (index + 1) as f32 / self.points.len().max(1) as f32
    }
}

/// Base trace brightness (0–255) from the accelerating-anode voltage.
pub fn base_brightness(acceleration_voltage: f32) -> f32 {
    (acceleration_voltage / 1000.0 * 255.0).clamp(0.0, 255.0)
}
