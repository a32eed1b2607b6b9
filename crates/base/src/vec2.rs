use std::fmt;

/// Two-component vector, used for frame sizes and pixel coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T: fmt::Debug> fmt::Debug for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec2")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vec2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.y)
    }
}

impl<T: Default> Default for Vec2<T> {
    fn default() -> Self {
        Self {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Default> Vec2<T> {
    pub fn zero() -> Self {
        Self::default()
    }
}

impl Vec2<usize> {
    /// Number of cells in a `x` by `y` grid.
    pub fn area(&self) -> usize {
        self.x * self.y
    }

    /// `area`, or `None` if the product does not fit in `usize`.
    pub fn checked_area(&self) -> Option<usize> {
        self.x.checked_mul(self.y)
    }

    /// Size after dividing each axis by `1 << shift`, rounding up.
    pub fn shr_ceil(&self, shift: Vec2<u32>) -> Self {
        Self {
            x: self.x.div_ceil(1 << shift.x),
            y: self.y.div_ceil(1 << shift.y),
        }
    }
}
