//! Axis-aligned collision primitives
//!
//! Everything in this world is an axis-aligned rectangle. Collision
//! direction is classified from the moving rectangle's edge position
//! *before* this tick's vertical displacement: if the bottom edge was at
//! or above the solid's top (within a tolerance band) it is a landing,
//! the mirror case is a ceiling hit, and everything else resolves
//! horizontally. The tolerance band is an approximation carried over from
//! the reference behavior; it is not a swept test and can misclassify
//! very fast diagonal contacts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CONTACT_TOLERANCE;

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

/// Strict AABB intersection test. Rectangles that merely share an edge
/// (zero-area contact) do not overlap.
#[inline]
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// The three mutually exclusive collision outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Top contact: snap bottom edge to the solid's top, stop falling.
    Landing,
    /// Bottom-of-solid contact from below: snap top edge to the solid's
    /// bottom, stop rising.
    Ceiling,
    /// Neither vertical case applies; resolve along x by velocity sign.
    Side,
}

/// Classify an overlap between a moving rectangle and a solid.
///
/// `vel` is the displacement already applied this tick; the pre-step edge
/// positions are recovered by subtracting `vel.y`.
pub fn classify_contact(mover: &Aabb, vel: Vec2, solid: &Aabb) -> Contact {
    if vel.y > 0.0 && mover.bottom() - vel.y <= solid.top() + CONTACT_TOLERANCE {
        Contact::Landing
    } else if vel.y < 0.0 && mover.top() - vel.y >= solid.bottom() - CONTACT_TOLERANCE {
        Contact::Ceiling
    } else {
        Contact::Side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlaps_basic() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        let c = Aabb::new(20.0, 20.0, 5.0, 5.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_overlaps_edge_contact_is_not_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x=10 edge only
        let right = Aabb::new(10.0, 0.0, 10.0, 10.0);
        // Shares the y=10 edge only
        let below = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &right));
        assert!(!overlaps(&a, &below));
    }

    #[test]
    fn test_classify_landing() {
        let solid = Aabb::new(0.0, 100.0, 200.0, 20.0);
        // Falling at 8/tick, bottom edge ended up at 104 (was 96, above top)
        let mover = Aabb::new(50.0, 104.0 - 32.0, 32.0, 32.0);
        let vel = Vec2::new(0.0, 8.0);
        assert_eq!(classify_contact(&mover, vel, &solid), Contact::Landing);
    }

    #[test]
    fn test_classify_landing_rejected_when_too_deep() {
        let solid = Aabb::new(0.0, 100.0, 200.0, 20.0);
        // Bottom edge was already at 115 before the step, well past the
        // top surface plus tolerance; classified as a side hit instead.
        let mover = Aabb::new(50.0, 117.0 - 32.0, 32.0, 32.0);
        let vel = Vec2::new(3.0, 2.0);
        assert_eq!(classify_contact(&mover, vel, &solid), Contact::Side);
    }

    #[test]
    fn test_classify_ceiling() {
        let solid = Aabb::new(0.0, 100.0, 200.0, 20.0);
        // Rising at 9/tick, top edge ended at 115 (was 124, below bottom=120
        // minus tolerance)
        let mover = Aabb::new(50.0, 115.0, 32.0, 32.0);
        let vel = Vec2::new(0.0, -9.0);
        assert_eq!(classify_contact(&mover, vel, &solid), Contact::Ceiling);
    }

    #[test]
    fn test_classify_side_when_moving_horizontally() {
        let solid = Aabb::new(100.0, 0.0, 50.0, 200.0);
        let mover = Aabb::new(95.0, 80.0, 32.0, 32.0);
        let vel = Vec2::new(5.0, 0.0);
        assert_eq!(classify_contact(&mover, vel, &solid), Contact::Side);
    }
}
