use super::*;

//
// Raster loading
//

/// Resolves a resource path into a decoded RGB8 raster.
pub trait RasterLoader {
    fn load_raster(&self, path: &str) -> Result<imagelib::RgbImage>;
}

/// Resource paths such as `/images/textures/wood.jpg` resolved against a
/// directory on disk.
#[derive(Clone, Debug)]
pub struct AssetDir {
    root: PathBuf,
}

impl AssetDir {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_owned(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        // Resource paths are rooted at the asset directory, not the filesystem.
        self.root.join(path.trim_start_matches(&['/', '\\'][..]))
    }
}

impl RasterLoader for AssetDir {
    fn load_raster(&self, path: &str) -> Result<imagelib::RgbImage> {
        let file_path = self.resolve(path);
        let reader = imagelib::io::Reader::new(BufReader::new(
            File::open(&file_path)
                .with_context(|| format!("Opening raster: {}", file_path.display()))?,
        ))
        .with_guessed_format()
        .with_context(|| format!("Guessing raster format: {}", file_path.display()))?;
        let image = reader
            .decode()
            .with_context(|| format!("Decoding raster: {}", file_path.display()))?;
        debug!(
            "Decoded {} ({}x{})",
            file_path.display(),
            image.width(),
            image.height()
        );
        Ok(image.into_rgb8())
    }
}
