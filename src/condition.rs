//! Condition - a single-feature threshold test that doubles as one digit of
//! the rule counter.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::FeatureDomains;

/// # Overview
///
/// Comparison direction of a threshold test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// `x[dim] > value`
    Greater,
    /// `x[dim] <= value`
    LessEqual
}

/// # Overview
///
/// Tests `x[dim] <= value` or `x[dim] > value`, where `value` is the
/// `pos`-th entry of the dimension's domain.
///
/// As a counter digit the state advances direction first, then position,
/// then dimension:
///
/// ```text
/// (d, p, >) -> (d, p, <=) -> (d, p+1, >) -> ... -> (d+1, 0, >) -> ... -> wrap
/// ```
///
/// # Examples
///
/// ```
/// use rulemine_rs::{Condition, Direction, FeatureDomains};
///
/// let domains = FeatureDomains::from_values(vec![vec![1.0, 2.0]]).unwrap();
/// let mut c = Condition::first(&domains);
///
/// assert_eq!(c.direction(), Direction::Greater);
/// assert!(!c.advance(&domains));
/// assert_eq!(c.direction(), Direction::LessEqual);
/// assert!(c.satisfies(&[1.0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Condition {
    dim:       usize,
    pos:       usize,
    value:     f32,
    direction: Direction
}

impl Condition {
    /// # Overview
    ///
    /// The counter's minimum: dimension 0, position 0, `>`.
    #[inline]
    pub fn first(domains: &FeatureDomains) -> Self {
        Self {
            dim:       0,
            pos:       0,
            value:     domains.value(0, 0),
            direction: Direction::Greater
        }
    }

    /// # Overview
    ///
    /// Creates a condition at an explicit state. Returns `None` if `dim` or
    /// `pos` is outside the domains.
    pub fn new(
        domains: &FeatureDomains,
        dim: usize,
        pos: usize,
        direction: Direction
    ) -> Option<Self> {
        if dim >= domains.n_dims() {
            return None;
        }
        let value = *domains.values(dim).get(pos)?;
        Some(Self {
            dim,
            pos,
            value,
            direction
        })
    }

    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline(always)]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline(always)]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline(always)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// # Overview
    ///
    /// Evaluates the test. A missing feature never satisfies.
    #[inline(always)]
    pub fn satisfies(&self, x: &[f32]) -> bool {
        match (x.get(self.dim), self.direction) {
            (Some(&v), Direction::LessEqual) => v <= self.value,
            (Some(&v), Direction::Greater) => v > self.value,
            (None, _) => false
        }
    }

    /// # Overview
    ///
    /// Moves to the next state. Returns `true` when the digit wrapped back to
    /// its first state, i.e. the carry must propagate.
    ///
    /// `domains` must be the ones the condition was created from.
    #[inline]
    pub fn advance(&mut self, domains: &FeatureDomains) -> bool {
        debug_assert!(self.dim < domains.n_dims());
        debug_assert!(self.pos < domains.len(self.dim));
        if self.direction == Direction::Greater {
            self.direction = Direction::LessEqual;
            return false;
        }
        self.direction = Direction::Greater;

        self.pos += 1;
        if self.pos < domains.len(self.dim) {
            self.value = domains.value(self.dim, self.pos);
            return false;
        }
        self.pos = 0;

        self.dim += 1;
        let wrapped = self.dim >= domains.n_dims();
        if wrapped {
            self.dim = 0;
        }
        self.value = domains.value(self.dim, 0);
        wrapped
    }

    /// # Overview
    ///
    /// Coarse progress through the dimensions, in `[0, 1)`.
    #[inline]
    pub fn progress(&self, domains: &FeatureDomains) -> f32 {
        self.dim as f32 / domains.n_dims() as f32
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.direction {
            Direction::Greater => ">",
            Direction::LessEqual => "<="
        };
        write!(f, "x[{}] {op} {}", self.dim, self.value)
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    fn domains() -> FeatureDomains {
        FeatureDomains::from_values(vec![vec![1.0, 2.0], vec![5.0]]).unwrap()
    }

    #[test]
    fn first_state() {
        let d = domains();
        let c = Condition::first(&d);

        assert_eq!((c.dim(), c.pos(), c.direction()), (0, 0, Direction::Greater));
        assert_eq!(c.value(), 1.0);
    }

    #[test]
    fn advance_order() {
        let d = domains();
        let mut c = Condition::first(&d);
        let mut states = vec![(c.dim(), c.pos(), c.direction())];

        while !c.advance(&d) {
            states.push((c.dim(), c.pos(), c.direction()));
        }

        assert_eq!(
            states,
            vec![
                (0, 0, Direction::Greater),
                (0, 0, Direction::LessEqual),
                (0, 1, Direction::Greater),
                (0, 1, Direction::LessEqual),
                (1, 0, Direction::Greater),
                (1, 0, Direction::LessEqual),
            ]
        );
    }

    #[test]
    fn carry_out_resets_state() {
        let d = domains();
        let mut c = Condition::new(&d, 1, 0, Direction::LessEqual).unwrap();

        assert!(c.advance(&d));
        assert_eq!(c, Condition::first(&d));
    }

    #[test]
    fn value_tracks_position() {
        let d = domains();
        let mut c = Condition::first(&d);
        for _ in 0..2 {
            c.advance(&d);
        }
        assert_eq!(c.value(), 2.0);
        for _ in 0..2 {
            c.advance(&d);
        }
        assert_eq!(c.value(), 5.0);
    }

    #[test]
    fn satisfies_directions() {
        let d = domains();
        let gt = Condition::new(&d, 0, 0, Direction::Greater).unwrap();
        let le = Condition::new(&d, 0, 0, Direction::LessEqual).unwrap();

        assert!(gt.satisfies(&[1.5, 0.0]));
        assert!(!gt.satisfies(&[1.0, 0.0]));
        assert!(le.satisfies(&[1.0, 0.0]));
        assert!(!le.satisfies(&[1.5, 0.0]));
        assert!(!le.satisfies(&[]));
    }

    #[test]
    fn new_rejects_out_of_range() {
        let d = domains();
        assert!(Condition::new(&d, 2, 0, Direction::Greater).is_none());
        assert!(Condition::new(&d, 1, 1, Direction::Greater).is_none());
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn advance_with_foreign_domains() {
        let d = domains();
        let narrower = FeatureDomains::from_values(vec![vec![1.0]]).unwrap();
        let mut c = Condition::new(&d, 1, 0, Direction::LessEqual).unwrap();

        c.advance(&narrower);
    }

    #[test]
    fn display() {
        let d = domains();
        let c = Condition::new(&d, 0, 1, Direction::LessEqual).unwrap();
        assert_eq!(c.to_string(), "x[0] <= 2");
    }
}
