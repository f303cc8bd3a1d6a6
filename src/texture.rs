use super::*;

/// Immutable RGB8 grid sampled by UV with tiling. Row 0 is the top of the
/// image, which is where `v = 0` lands.
pub struct ImageTexture {
    image: imagelib::RgbImage,
}

impl ImageTexture {
    /// Decoded channels shorter than this are treated as a flat normal.
    const MIN_NORMAL_NORM: f32 = 1e-2;

    pub fn load<L: RasterLoader + ?Sized>(loader: &L, path: &str) -> Result<Self> {
        let image = loader
            .load_raster(path)
            .with_context(|| format!("Loading texture: {path}"))?;
        let texture = Self::from_image(image).with_context(|| format!("Texture: {path}"))?;
        info!(
            "Loaded texture {path} ({}x{})",
            texture.width(),
            texture.height()
        );
        Ok(texture)
    }

    pub fn from_image(image: imagelib::RgbImage) -> Result<Self> {
        ensure!(
            image.width() > 0 && image.height() > 0,
            "Texture must not be empty, got {}x{}",
            image.width(),
            image.height()
        );
        Ok(Self { image })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(column, row)` of the cell under `uv`.
    pub fn cell(&self, uv: Point2) -> (u32, u32) {
        // Negative coordinates mirror instead of wrapping.
        let x = (uv.x % 1.0).abs();
        let y = (uv.y % 1.0).abs();
        let column = (x * self.width() as f32) as u32;
        let row = (y * self.height() as f32) as u32;
        (column.min(self.width() - 1), row.min(self.height() - 1))
    }

    fn texel(&self, uv: Point2) -> [u8; 3] {
        let (column, row) = self.cell(uv);
        self.image.get_pixel(column, row).0
    }

    /// Linear base color under `uv`.
    pub fn color(&self, uv: Point2) -> ColorRgb {
        ColorRgb::from_srgb8(self.texel(uv))
    }

    /// Matte material of the cell under `uv`.
    pub fn at(&self, uv: Point2) -> Material {
        Material::matte(self.color(uv))
    }

    /// Tangent-space normal encoded in the cell under `uv`. Channels map from
    /// `[0,1]` to `[-1,1]`; near-black or mid-gray cells give `+Z`.
    pub fn sample_normal(&self, uv: Point2) -> Normal {
        let c = ColorRgb::from_unorm8(self.texel(uv));
        let decoded = vector![2.0 * c.r() - 1.0, 2.0 * c.g() - 1.0, 2.0 * c.b() - 1.0];
        na::Unit::try_new(decoded, Self::MIN_NORMAL_NORM)
            .unwrap_or_else(|| na::Unit::new_normalize(Z_AXIS))
    }
}

impl fmt::Debug for ImageTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageTexture")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
