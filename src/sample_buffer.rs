// src/sample_buffer.rs

use crate::types::Point;
use std::collections::VecDeque;

/// Rolling history of the last few pointer locations, oldest evicted first.
pub struct SampleBuffer {
    samples: VecDeque<Point>,
    capacity: usize,
}

impl SampleBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, p: Point) {
        self.samples.push_back(p);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Most recently recorded sample.
    pub fn latest(&self) -> Option<Point> {
        self.samples.back().copied()
    }

    /// Earliest retained sample. Stands in for the pointer's previous
    /// position when comparing slope trends.
    pub fn oldest(&self) -> Option<Point> {
        self.samples.front().copied()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
