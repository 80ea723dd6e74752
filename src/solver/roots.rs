use std::fmt;

/// Maximum number of real roots a biquadratic can have.
pub const MAX_ROOTS: usize = 4;

/// Number of solutions reported by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootCount {
    /// Every real x is a solution (`0 = 0`).
    Infinite,
    Finite(usize),
}

impl RootCount {
    /// Integer encoding where `-1` stands for infinitely many solutions.
    pub fn as_i32(self) -> i32 {
        match self {
            RootCount::Infinite => -1,
            RootCount::Finite(n) => n as i32,
        }
    }

    /// Inverse of [`RootCount::as_i32`]. Returns `None` outside `-1..=4`.
    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            -1 => Some(RootCount::Infinite),
            0..=4 => Some(RootCount::Finite(value as usize)),
            _ => None,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, RootCount::Infinite)
    }
}

impl fmt::Display for RootCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

/// Up to four real roots stored inline. Only the first `len` slots are valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootSet {
    buf: [f64; MAX_ROOTS],
    len: usize,
}

impl RootSet {
    pub fn from_buffer(buf: [f64; MAX_ROOTS], len: usize) -> Self {
        debug_assert!(len <= MAX_ROOTS);
        Self {
            buf,
            len: len.min(MAX_ROOTS),
        }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.buf[..self.len]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.as_slice().iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }
}

impl<'a> IntoIterator for &'a RootSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owned result of a single solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
    Infinite,
    Roots(RootSet),
}

impl Solution {
    pub fn count(&self) -> RootCount {
        match self {
            Solution::Infinite => RootCount::Infinite,
            Solution::Roots(roots) => RootCount::Finite(roots.len()),
        }
    }

    /// Reported roots. Empty for the infinite case.
    pub fn roots(&self) -> &[f64] {
        match self {
            Solution::Infinite => &[],
            Solution::Roots(roots) => roots.as_slice(),
        }
    }
}
