use crate::math::Point;

/// The two sides of a stroke, stored point for point.
///
/// The forward buffer holds one side of the outline in path order and the rewind
/// buffer holds the opposite side. Both buffers always have the same length: the
/// only way to add points is to add the same number to each.
///
/// Both buffers share a logical capacity. It starts at `INITIAL_CAPACITY` points and
/// when an append would not fit, both buffers are reallocated together to the previous
/// capacity plus `GROWTH_STEP`.
#[derive(Clone, Debug)]
pub struct PairedBuffers {
    forward: Vec<Point>,
    rewind: Vec<Point>,
    capacity: usize,
    reallocations: u32,
}

impl Default for PairedBuffers {
    fn default() -> Self {
        Self::new()
    }
}

impl PairedBuffers {
    pub const INITIAL_CAPACITY: usize = 256;
    pub const GROWTH_STEP: usize = 128;

    pub fn new() -> Self {
        Self::with_capacity(Self::INITIAL_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PairedBuffers {
            forward: Vec::with_capacity(capacity),
            rewind: Vec::with_capacity(capacity),
            capacity,
            reallocations: 0,
        }
    }

    /// Appends one point to each buffer.
    pub fn push_pair(&mut self, forward: Point, rewind: Point) {
        self.reserve(1);
        self.forward.push(forward);
        self.rewind.push(rewind);
    }

    /// Appends an offset segment: its two forward points and its two rewind points.
    pub fn push_segment(&mut self, forward: [Point; 2], rewind: [Point; 2]) {
        self.reserve(2);
        self.forward.extend_from_slice(&forward);
        self.rewind.extend_from_slice(&rewind);
    }

    /// Appends the first pair again, so that both sides end where they started.
    ///
    /// Does nothing if the buffers are empty.
    pub fn close(&mut self) {
        if let (Some(&forward), Some(&rewind)) = (self.forward.first(), self.rewind.first()) {
            self.push_pair(forward, rewind);
        }
    }

    #[inline]
    pub fn forward(&self) -> &[Point] {
        &self.forward
    }

    #[inline]
    pub fn rewind(&self) -> &[Point] {
        &self.rewind
    }

    /// Number of points in each of the buffers.
    #[inline]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// The shared capacity of the two buffers, in points.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many times the buffers were grown since they were created.
    #[inline]
    pub fn reallocations(&self) -> u32 {
        self.reallocations
    }

    /// Removes all points, keeping the allocations.
    pub fn clear(&mut self) {
        self.forward.clear();
        self.rewind.clear();
    }

    fn reserve(&mut self, additional: usize) {
        while self.forward.len() + additional > self.capacity {
            let capacity = self.capacity + Self::GROWTH_STEP;
            self.forward = grow(&self.forward, capacity);
            self.rewind = grow(&self.rewind, capacity);
            self.capacity = capacity;
            self.reallocations += 1;

            log::trace!(
                "stroke buffers grown to {} points ({} in use)",
                capacity,
                self.forward.len()
            );
        }

        debug_assert_eq!(self.forward.len(), self.rewind.len());
    }
}

fn grow(points: &[Point], capacity: usize) -> Vec<Point> {
    let mut storage = Vec::with_capacity(capacity);
    storage.extend_from_slice(points);

    storage
}
