use super::*;

//
// Linear algebra
//

pub use na::{point, vector};

pub type Vec3 = na::Vector3<f32>;

pub type Point2 = na::Point2<f32>;
pub type Point3 = na::Point3<f32>;

pub type Normal = na::UnitVector3<f32>;

pub const X_AXIS: Vec3 = vector![1.0, 0.0, 0.0];
pub const Y_AXIS: Vec3 = vector![0.0, 1.0, 0.0];
pub const Z_AXIS: Vec3 = vector![0.0, 0.0, 1.0];

#[macro_export]
macro_rules! normal {
    ($v:expr) => {
        nalgebra::Unit::new_normalize($v)
    };

    ($x:expr, $y:expr, $z:expr) => {
        nalgebra::Unit::new_normalize(nalgebra::Vector3::<f32>::new($x, $y, $z))
    };
}

//
// Spherical
//

/// Maps a unit normal to `[0,1] x [0,1]`. `u` follows the azimuth around the
/// y-axis, `v` runs from the north pole (0) to the south pole (1).
pub fn spherical_uv(n: &Normal) -> Point2 {
    // Rounding can push |n.y| slightly over 1, which makes asin return NaN.
    let y = n.y.clamp(-1.0, 1.0);
    let u = 0.5 + f32::atan2(n.z, n.x) / TAU;
    let v = 0.5 - f32::asin(y) / PI;
    point![u, v]
}

//
// Tangent space
//

/// Tangent frame around `n`, with the tangent following increasing `u` of
/// [`spherical_uv`].
pub struct TangentFrame {
    pub tangent: Normal,
    pub bitangent: Normal,
    pub normal: Normal,
}

impl TangentFrame {
    const MIN_TANGENT_NORM: f32 = 1e-6;

    pub fn new(n: &Normal) -> Self {
        // (-n.z, 0, n.x) collapses at the poles.
        let tangent = na::Unit::try_new(vector![-n.z, 0.0, n.x], Self::MIN_TANGENT_NORM)
            .unwrap_or_else(|| {
                let fallback = X_AXIS - n.into_inner() * n.x;
                na::Unit::try_new(fallback, Self::MIN_TANGENT_NORM)
                    .unwrap_or_else(|| na::Unit::new_normalize(Z_AXIS))
            });
        let bitangent = normal!(n.cross(&tangent));
        Self {
            tangent,
            bitangent,
            normal: *n,
        }
    }

    pub fn world_from_local(&self, local: &Vec3) -> Normal {
        normal!(
            self.tangent.into_inner() * local.x
                + self.bitangent.into_inner() * local.y
                + self.normal.into_inner() * local.z
        )
    }
}

//
// Tests
//
