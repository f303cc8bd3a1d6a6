use std::ops;

use super::*;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorRgb([f32; 3]);

impl ColorRgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    pub const fn gray(k: f32) -> Self {
        Self::new(k, k, k)
    }

    pub const fn r(&self) -> f32 {
        self.0[0]
    }

    pub const fn g(&self) -> f32 {
        self.0[1]
    }

    pub const fn b(&self) -> f32 {
        self.0[2]
    }

    pub fn clamp(self) -> Self {
        Self::new(
            self.r().clamp(0.0, 1.0),
            self.g().clamp(0.0, 1.0),
            self.b().clamp(0.0, 1.0),
        )
    }

    /// Raw channels scaled to `[0,1]`, without any transfer function. Used
    /// for data textures such as normal maps.
    pub fn from_unorm8([r, g, b]: [u8; 3]) -> Self {
        let unorm = |c: u8| f32::from(c) / 255.0;
        Self::new(unorm(r), unorm(g), unorm(b))
    }

    /// Decodes an 8-bit sRGB color into linear RGB.
    pub fn from_srgb8([r, g, b]: [u8; 3]) -> Self {
        use palette::{LinSrgb, Srgb};
        let linear: LinSrgb<f32> = Srgb::<u8>::new(r, g, b).into_format::<f32>().into_linear();
        Self::new(linear.red, linear.green, linear.blue)
    }

    pub fn into_srgb8(self) -> [u8; 3] {
        use palette::{LinSrgb, Srgb};
        assert!((0.0..=1.0).contains(&self.r()));
        assert!((0.0..=1.0).contains(&self.g()));
        assert!((0.0..=1.0).contains(&self.b()));
        let linear = LinSrgb::<f32>::new(self.r(), self.g(), self.b());
        let srgb = Srgb::<f32>::from_linear(linear);
        srgb.into_format().into()
    }
}

impl From<ColorRgb> for [f32; 3] {
    fn from(value: ColorRgb) -> Self {
        value.0
    }
}

impl ops::Add for ColorRgb {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.r() + rhs.r(), self.g() + rhs.g(), self.b() + rhs.b())
    }
}

impl ops::Mul for ColorRgb {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.r() * rhs.r(), self.g() * rhs.g(), self.b() * rhs.b())
    }
}

impl ops::Mul<f32> for ColorRgb {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self::new(self.r() * rhs, self.g() * rhs, self.b() * rhs)
    }
}

impl ops::Mul<ColorRgb> for f32 {
    type Output = ColorRgb;

    fn mul(self, rhs: ColorRgb) -> Self::Output {
        ColorRgb::new(self * rhs.r(), self * rhs.g(), self * rhs.b())
    }
}

impl fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(precision) = f.precision() {
            write!(
                f,
                "{:.precision$},{:.precision$},{:.precision$}",
                self.r(),
                self.g(),
                self.b(),
            )
        } else {
            write!(f, "{},{},{}", self.r(), self.g(), self.b())
        }
    }
}
