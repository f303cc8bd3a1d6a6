use super::*;

//
// Material
//

/// Local shading description. Lighting models live outside of this crate, so
/// this is plain data plus an optional normal map.
#[derive(Clone, Debug)]
pub struct Material {
    pub diffuse: ColorRgb,
    pub specular: ColorRgb,
    pub shininess: f32,
    pub emission: ColorRgb,
    normal_map: Option<Arc<ImageTexture>>,
}

impl Material {
    pub const DEFAULT_SHININESS: f32 = 32.0;

    pub fn matte(color: ColorRgb) -> Self {
        Self {
            diffuse: color,
            specular: ColorRgb::BLACK,
            shininess: Self::DEFAULT_SHININESS,
            emission: ColorRgb::BLACK,
            normal_map: None,
        }
    }

    pub fn light(color: ColorRgb) -> Self {
        Self {
            emission: color,
            ..Self::matte(ColorRgb::BLACK)
        }
    }

    #[must_use]
    pub fn with_specular(self, specular: ColorRgb) -> Self {
        Self { specular, ..self }
    }

    #[must_use]
    pub fn with_shininess(self, shininess: f32) -> Self {
        Self { shininess, ..self }
    }

    #[must_use]
    pub fn with_normal_map(self, texture: Arc<ImageTexture>) -> Self {
        Self {
            normal_map: Some(texture),
            ..self
        }
    }

    pub fn normal_map(&self) -> Option<&ImageTexture> {
        self.normal_map.as_deref()
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte(ColorRgb::gray(0.5))
    }
}

//
// Material map
//

/// Material as a function of surface UV. Shared between render threads.
pub trait MaterialMap: Send + Sync {
    fn at(&self, uv: Point2) -> Material;
}

impl<F> MaterialMap for F
where
    F: Fn(Point2) -> Material + Send + Sync,
{
    fn at(&self, uv: Point2) -> Material {
        self(uv)
    }
}

impl MaterialMap for Material {
    fn at(&self, _: Point2) -> Material {
        self.clone()
    }
}

impl MaterialMap for ImageTexture {
    fn at(&self, uv: Point2) -> Material {
        ImageTexture::at(self, uv)
    }
}

/// Attaches `normal_map` to every material produced by `inner`.
pub struct NormalMapped<M> {
    inner: M,
    normal_map: Arc<ImageTexture>,
}

impl<M: MaterialMap> NormalMapped<M> {
    pub fn new(inner: M, normal_map: Arc<ImageTexture>) -> Self {
        Self { inner, normal_map }
    }
}

impl<M: MaterialMap> MaterialMap for NormalMapped<M> {
    fn at(&self, uv: Point2) -> Material {
        self.inner.at(uv).with_normal_map(Arc::clone(&self.normal_map))
    }
}
