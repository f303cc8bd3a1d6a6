use super::*;

/// Ray/ball intersection at parameter `t`. Everything else is derived on
/// demand from the ray and the ball.
#[derive(Clone, Copy, Debug)]
pub struct Hit<'a> {
    ray: Ray,
    t: f32,
    ball: &'a Ball,
}

/// All shading inputs of a hit, evaluated once.
#[derive(Clone, Debug)]
pub struct Surface {
    pub point: Point3,
    pub n: Normal,
    pub shading_normal: Normal,
    pub uv: Point2,
    pub material: Material,
}

impl<'a> Hit<'a> {
    const MIN_NORMAL_NORM: f32 = 1e-12;

    pub(super) fn new(ray: Ray, t: f32, ball: &'a Ball) -> Self {
        Self { ray, t, ball }
    }

    #[inline]
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    #[inline]
    pub fn t(&self) -> f32 {
        self.t
    }

    #[inline]
    pub fn ball(&self) -> &'a Ball {
        self.ball
    }

    pub fn point(&self) -> Point3 {
        self.ray.at(self.t)
    }

    /// Geometric normal. Dividing by the signed radius flips it inwards for
    /// inverted balls.
    pub fn n(&self) -> Normal {
        let n = (self.point() - self.ball.c()) / self.ball.r();
        // Zero radius: face the incoming ray.
        Some(n)
            .filter(|n| n.iter().all(|c| c.is_finite()))
            .and_then(|n| na::Unit::try_new(n, Self::MIN_NORMAL_NORM))
            .unwrap_or_else(|| normal!(-self.ray.dir))
    }

    pub fn uv(&self) -> Point2 {
        spherical_uv(&self.n())
    }

    pub fn material(&self) -> Material {
        self.ball.material_map().at(self.uv())
    }

    /// Geometric normal perturbed by the material's normal map, if any.
    pub fn shading_normal(&self) -> Normal {
        let n = self.n();
        let uv = spherical_uv(&n);
        let material = self.ball.material_map().at(uv);
        perturb(&n, uv, &material)
    }

    pub fn surface(&self) -> Surface {
        let n = self.n();
        let uv = spherical_uv(&n);
        let material = self.ball.material_map().at(uv);
        let shading_normal = perturb(&n, uv, &material);
        Surface {
            point: self.point(),
            n,
            shading_normal,
            uv,
            material,
        }
    }
}

fn perturb(n: &Normal, uv: Point2, material: &Material) -> Normal {
    match material.normal_map() {
        Some(normal_map) => {
            let local = normal_map.sample_normal(uv);
            TangentFrame::new(n).world_from_local(&local)
        }
        None => *n,
    }
}
