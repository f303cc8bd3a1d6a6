use super::*;

mod ball;
mod hit;

pub use ball::Ball;
pub use hit::{Hit, Surface};

//
// Solid
//

pub trait Solid: Send + Sync {
    /// Nearest intersection with parameter strictly greater than `after_time`.
    fn first_hit(&self, ray: &Ray, after_time: f32) -> Intersection<'_>;
}

//
// Intersection
//

#[derive(Clone, Copy, Debug)]
pub enum Intersection<'a> {
    Hit(Hit<'a>),
    AtInfinity(AtInfinity),
}

impl<'a> Intersection<'a> {
    pub fn t(&self) -> f32 {
        match self {
            Self::Hit(hit) => hit.t(),
            Self::AtInfinity(_) => f32::INFINITY,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    pub fn hit(self) -> Option<Hit<'a>> {
        match self {
            Self::Hit(hit) => Some(hit),
            Self::AtInfinity(_) => None,
        }
    }
}

/// No finite intersection. Keeps the ray direction and whether the solid
/// was inverted, so callers combining solids can tell which side the ray
/// ends up on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AtInfinity {
    pub dir: Vec3,
    pub inverted: bool,
}

impl AtInfinity {
    pub fn new(dir: Vec3, inverted: bool) -> Self {
        Self { dir, inverted }
    }
}
