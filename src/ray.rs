use super::*;

/// Half-line `origin + t * dir`. `dir` does not have to be unit length; hit
/// parameters are always in units of `dir`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Point3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Point3 {
        self.origin + self.dir * t
    }
}
