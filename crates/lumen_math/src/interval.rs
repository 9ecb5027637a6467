#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Expands the interval by delta/2 on each side.
    pub fn expand(&self, delta: f32) -> Interval {
        let padding = delta / 2.0;
        Interval::new(self.min - padding, self.max + padding)
    }

    /// Creates an interval that surrounds two other intervals.
    pub fn surrounding(a: &Interval, b: &Interval) -> Interval {
        Interval::new(a.min.min(b.min), a.max.max(b.max))
    }

    /// An empty interval (min > max, contains nothing).
    pub const EMPTY: Interval = Interval {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_size() {
        let interval = Interval::new(2.0, 7.0);
        assert_eq!(interval.size(), 5.0);
    }

    #[test]
    fn test_interval_surrounding() {
        let a = Interval::new(0.0, 5.0);
        let b = Interval::new(3.0, 10.0);
        let s = Interval::surrounding(&a, &b);

        assert_eq!(s.min, 0.0);
        assert_eq!(s.max, 10.0);
    }

    #[test]
    fn test_interval_empty() {
        // Inverted bounds: surrounding anything with it is a no-op
        let empty = Interval::EMPTY;
        assert!(empty.min > empty.max);

        let a = Interval::new(1.0, 2.0);
        assert_eq!(Interval::surrounding(&empty, &a), a);
    }
}
