use super::*;

/// Sphere with center `c` and radius `r`. A negative radius gives the
/// complement of the sphere: same surface, normals pointing inwards.
pub struct Ball {
    c: Point3,
    r: f32,
    r_sqr: f32,
    inverted: bool,
    material_map: Arc<dyn MaterialMap>,
}

impl Ball {
    pub fn new<M: MaterialMap + 'static>(c: Point3, r: f32, material_map: M) -> Self {
        Self::with_shared_map(c, r, Arc::new(material_map))
    }

    pub fn with_shared_map(c: Point3, r: f32, material_map: Arc<dyn MaterialMap>) -> Self {
        Self {
            c,
            r,
            r_sqr: r * r,
            inverted: r < 0.0,
            material_map,
        }
    }

    pub fn with_default_material(c: Point3, r: f32) -> Self {
        Self::new(c, r, Material::default())
    }

    #[inline]
    pub fn c(&self) -> Point3 {
        self.c
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.r
    }

    #[inline]
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    pub fn material_map(&self) -> &dyn MaterialMap {
        self.material_map.as_ref()
    }
}

impl Solid for Ball {
    fn first_hit(&self, ray: &Ray, after_time: f32) -> Intersection<'_> {
        // Center relative to the ray origin, projected onto the ray in units
        // of `ray.dir`. `m` is the half chord length in the same units.
        let e = self.c - ray.origin;
        let d_sqr = ray.dir.norm_squared();
        let l = e.dot(&ray.dir) / d_sqr;
        let m_sqr = l * l - (e.norm_squared() - self.r_sqr) / d_sqr;

        if m_sqr > 0.0 {
            let m = m_sqr.sqrt();
            for t in [l - m, l + m] {
                if t > after_time {
                    return Intersection::Hit(Hit::new(*ray, t, self));
                }
            }
        }
        Intersection::AtInfinity(AtInfinity::new(ray.dir, self.inverted))
    }
}

impl fmt::Debug for Ball {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ball")
            .field("c", &self.c)
            .field("r", &self.r)
            .finish_non_exhaustive()
    }
}
