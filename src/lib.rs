#![deny(future_incompatible)]
#![deny(nonstandard_style)]
#![deny(clippy::pedantic)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::wildcard_imports
)]

use std::{
    f32::consts::{PI, TAU},
    fmt,
    fs::File,
    io::{BufReader, BufWriter},
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{ensure, Context, Result};
use bytemuck::{Pod, Zeroable};
use nalgebra as na;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[macro_use]
extern crate log;

#[macro_use]
pub mod math;

pub mod assets;
pub mod cfg;
pub mod color;
pub mod material;
pub mod preview;
pub mod ray;
pub mod solid;
pub mod texture;

pub use assets::{AssetDir, RasterLoader};
pub use color::ColorRgb;
pub use material::{Material, MaterialMap, NormalMapped};
pub use math::*;
pub use ray::Ray;
pub use solid::{AtInfinity, Ball, Hit, Intersection, Solid, Surface};
pub use texture::ImageTexture;
