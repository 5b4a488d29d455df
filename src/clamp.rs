use crate::constants::GHOST_THICKNESS;

/// Admissible range for the live drag position, in viewport cells.
///
/// Both ends are exclusive: a candidate equal to `min` or `max` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: u16,
    pub max: u16,
}

impl Bounds {
    /// Resolve configured bounds against the container extent along the
    /// active axis.
    pub fn resolve(min: Option<u16>, max: Option<u16>, container_extent: u16) -> Self {
        let min = min.unwrap_or(0).max(GHOST_THICKNESS);
        let max = max.unwrap_or_else(|| container_extent.saturating_sub(GHOST_THICKNESS));
        Self { min, max }
    }

    /// Returns the new ghost position for `candidate`, or `None` when the
    /// candidate must be ignored and the previous position kept.
    ///
    /// Out-of-range candidates are not pulled back to the edge; the ghost
    /// stays wherever the last admissible candidate left it.
    pub fn admit(&self, candidate: u16) -> Option<u16> {
        if candidate > self.min && candidate < self.max {
            Some(candidate.min(self.max))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_bounds_win_over_container() {
        let bounds = Bounds::resolve(Some(10), Some(300), 400);
        assert_eq!(bounds, Bounds { min: 10, max: 300 });
    }

    #[test]
    fn min_never_drops_below_threshold() {
        let bounds = Bounds::resolve(Some(0), None, 80);
        assert_eq!(bounds.min, GHOST_THICKNESS);
        assert_eq!(bounds.max, 80 - GHOST_THICKNESS);
    }

    #[test]
    fn tiny_container_admits_nothing() {
        let bounds = Bounds::resolve(None, None, 0);
        assert_eq!(bounds.max, 0);
        for candidate in 0..4 {
            assert_eq!(bounds.admit(candidate), None);
        }
    }

    #[test]
    fn admission_is_strict_on_both_ends() {
        let bounds = Bounds { min: 10, max: 300 };
        assert_eq!(bounds.admit(10), None);
        assert_eq!(bounds.admit(300), None);
        assert_eq!(bounds.admit(305), None);
        assert_eq!(bounds.admit(11), Some(11));
        assert_eq!(bounds.admit(299), Some(299));
    }
}
