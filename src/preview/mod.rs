use super::*;

use std::time::Instant;

//
// Configs
//

#[derive(clap::Args)]
pub struct Args {
    /// RON scene description.
    #[arg(long)]
    scene: PathBuf,

    /// Directory that texture resource paths are resolved against.
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    #[arg(long, default_value = "preview.png")]
    output: PathBuf,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    pub image_size: (u32, u32),
    pub camera_position: [f32; 3],
    pub camera_fov_deg: f32,
    pub light_direction: [f32; 3],
    pub background: ColorRgb,
    pub ball: BallConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub struct BallConfig {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: MaterialConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
pub enum MaterialConfig {
    Matte(ColorRgb),
    Light(ColorRgb),
    Textured {
        texture: String,
        normal_map: Option<String>,
    },
    NormalMapped {
        color: ColorRgb,
        shininess: f32,
        normal_map: String,
    },
}

impl BallConfig {
    /// Loads every texture the ball needs. Any failure aborts the whole scene.
    pub fn build<L: RasterLoader + ?Sized>(&self, loader: &L) -> Result<Ball> {
        let center = Point3::from(self.center);
        let material_map: Arc<dyn MaterialMap> = match &self.material {
            MaterialConfig::Matte(color) => Arc::new(Material::matte(*color)),
            MaterialConfig::Light(color) => Arc::new(Material::light(*color)),
            MaterialConfig::Textured {
                texture,
                normal_map: None,
            } => Arc::new(ImageTexture::load(loader, texture)?),
            MaterialConfig::Textured {
                texture,
                normal_map: Some(normal_map),
            } => Arc::new(NormalMapped::new(
                ImageTexture::load(loader, texture)?,
                Arc::new(ImageTexture::load(loader, normal_map)?),
            )),
            MaterialConfig::NormalMapped {
                color,
                shininess,
                normal_map,
            } => Arc::new(NormalMapped::new(
                Material::matte(*color)
                    .with_specular(ColorRgb::WHITE)
                    .with_shininess(*shininess),
                Arc::new(ImageTexture::load(loader, normal_map)?),
            )),
        };
        Ok(Ball::with_shared_map(center, self.radius, material_map))
    }
}

//
// Camera
//

struct Camera {
    position: Point3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    image_size: (u32, u32),
}

impl Camera {
    fn looking_at(
        position: Point3,
        target: Point3,
        fov_deg: f32,
        image_size: (u32, u32),
    ) -> Result<Self> {
        let forward = (target - position)
            .try_normalize(1e-6)
            .with_context(|| format!("Camera at {position} has no direction to {target}"))?;
        // Looking straight up or down has no horizon; fall back to +X.
        let right = forward.cross(&Y_AXIS).try_normalize(1e-6).unwrap_or(X_AXIS);
        let up = right.cross(&forward);
        let scale = (0.5 * fov_deg.to_radians()).tan();
        let aspect = image_size.0 as f32 / image_size.1 as f32;
        Ok(Self {
            position,
            forward,
            right: right * scale * aspect,
            up: up * scale,
            image_size,
        })
    }

    /// Single ray through the pixel center.
    fn primary_ray(&self, x: u32, y: u32) -> Ray {
        let s = 2.0 * (x as f32 + 0.5) / self.image_size.0 as f32 - 1.0;
        let t = 1.0 - 2.0 * (y as f32 + 0.5) / self.image_size.1 as f32;
        Ray::new(self.position, self.forward + self.right * s + self.up * t)
    }
}

//
// Shading
//

const AMBIENT: f32 = 0.1;

fn shade(surface: &Surface, view_dir: &Vec3, light_dir: &Normal) -> ColorRgb {
    let material = &surface.material;
    let n = surface.shading_normal;
    let lambert = n.dot(light_dir).max(0.0);
    let half = (light_dir.into_inner() - view_dir.normalize()).normalize();
    let phong = if lambert > 0.0 {
        n.dot(&half).max(0.0).powf(material.shininess)
    } else {
        0.0
    };
    material.diffuse * (AMBIENT + lambert) + material.specular * phong + material.emission
}

fn trace(ball: &Ball, ray: &Ray, light_dir: &Normal, background: ColorRgb) -> ColorRgb {
    match ball.first_hit(ray, 0.0) {
        Intersection::Hit(hit) => shade(&hit.surface(), &ray.dir, light_dir),
        Intersection::AtInfinity(_) => background,
    }
}

pub fn render(scene: &SceneConfig, ball: &Ball) -> Result<imagelib::RgbImage> {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let (width, height) = scene.image_size;
    ensure!(
        width > 0 && height > 0,
        "Image size must be positive, got {width}x{height}"
    );
    let light_dir = na::Unit::try_new(Vec3::from(scene.light_direction), 1e-6)
        .context("Light direction must not be zero")?;
    let camera = Camera::looking_at(
        Point3::from(scene.camera_position),
        ball.c(),
        scene.camera_fov_deg,
        scene.image_size,
    )?;

    let pb = ProgressBar::new(u64::from(height)).with_style(ProgressStyle::with_template(
        "{wide_bar} elapsed={elapsed_precise} eta={eta_precise}",
    )?);
    let rows = (0..height)
        .into_par_iter()
        .map(|y| {
            let row = (0..width)
                .map(|x| {
                    let ray = camera.primary_ray(x, y);
                    trace(ball, &ray, &light_dir, scene.background)
                        .clamp()
                        .into_srgb8()
                })
                .collect::<Vec<_>>();
            pb.inc(1);
            row
        })
        .collect::<Vec<_>>();
    pb.finish_and_clear();

    let mut image = imagelib::RgbImage::new(width, height);
    for (y, row) in rows.into_iter().enumerate() {
        for (x, rgb) in row.into_iter().enumerate() {
            image.put_pixel(x as u32, y as u32, imagelib::Rgb(rgb));
        }
    }
    Ok(image)
}

//
// Runner
//

pub fn run(args: Args) -> Result<()> {
    // Load scene.
    let scene: SceneConfig = cfg::read_from_file(&args.scene)?;
    let assets = AssetDir::new(&args.assets);
    info!("Assets from {}", assets.root().display());
    let ball = scene.ball.build(&assets)?;
    debug!("{ball:?}");

    // Render.
    info!(
        "Rendering image {}x{}",
        scene.image_size.0, scene.image_size.1
    );
    let timer = Instant::now();
    let image = render(&scene, &ball)?;
    info!("Rendering took {:.03} s", timer.elapsed().as_secs_f64());

    // Write image and the scene it came from.
    image
        .save(&args.output)
        .with_context(|| format!("Writing image: {}", args.output.display()))?;
    info!("Wrote to {}", args.output.display());
    let scene_backup = args.output.with_extension("ron");
    cfg::write_to_file(&scene_backup, &scene)?;
    info!("Wrote to {}", scene_backup.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_ulps_eq;
    use std::collections::HashMap;

    struct MemoryLoader(HashMap<&'static str, imagelib::RgbImage>);

    impl RasterLoader for MemoryLoader {
        fn load_raster(&self, path: &str) -> Result<imagelib::RgbImage> {
            self.0
                .get(path)
                .cloned()
                .with_context(|| format!("No such raster: {path}"))
        }
    }

    fn loader() -> MemoryLoader {
        MemoryLoader(HashMap::from([
            (
                "/images/textures/denim.jpg",
                imagelib::RgbImage::from_pixel(8, 8, imagelib::Rgb([40, 60, 160])),
            ),
            (
                "/images/normalMaps/bumps.jpg",
                imagelib::RgbImage::from_fn(8, 8, |x, _| {
                    imagelib::Rgb([100 + 10 * x as u8, 128, 230])
                }),
            ),
        ]))
    }

    const SCENE: &str = r#"(
        image_size: (24, 16),
        camera_position: (0.0, 0.0, 3.0),
        camera_fov_deg: 40.0,
        light_direction: (-1.0, 1.0, 1.0),
        background: (0.0, 0.0, 0.0),
        ball: (
            center: (0.0, 0.0, 0.0),
            radius: 0.7,
            material: Textured(
                texture: "/images/textures/denim.jpg",
                normal_map: Some("/images/normalMaps/bumps.jpg"),
            ),
        ),
    )"#;

    #[test]
    fn test_scene_parses_and_builds() {
        let scene: SceneConfig = cfg::from_reader(SCENE.as_bytes()).unwrap();
        assert_eq!(scene.image_size, (24, 16));
        let ball = scene.ball.build(&loader()).unwrap();
        assert_ulps_eq!(ball.r(), 0.7, max_ulps = 1);
        let material = ball.material_map().at(point![0.5, 0.5]);
        assert!(material.normal_map().is_some());
    }

    #[test]
    fn test_bundled_scenes_parse() {
        for name in ["denim_ball.ron", "bumpy_white.ron"] {
            let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes").join(name);
            let scene: SceneConfig = cfg::read_from_file(&path).unwrap();
            assert_eq!(scene.image_size, (640, 480));
        }
    }

    #[test]
    fn test_missing_texture_aborts_build() {
        let config = BallConfig {
            center: [0.0; 3],
            radius: 1.0,
            material: MaterialConfig::NormalMapped {
                color: ColorRgb::WHITE,
                shininess: 16.0,
                normal_map: "/images/normalMaps/missing.jpg".to_owned(),
            },
        };
        let err = config.build(&loader()).unwrap_err();
        assert!(format!("{err:#}").contains("missing.jpg"));
    }

    #[test]
    fn test_render_center_hits_and_corner_misses() {
        let mut scene: SceneConfig = cfg::from_reader(SCENE.as_bytes()).unwrap();
        scene.background = ColorRgb::new(0.0, 1.0, 0.0);
        let ball = scene.ball.build(&loader()).unwrap();
        let image = render(&scene, &ball).unwrap();
        assert_eq!(image.dimensions(), (24, 16));
        assert_eq!(image.get_pixel(0, 0).0, [0, 255, 0]);
        assert_ne!(image.get_pixel(12, 8).0, [0, 255, 0]);
    }

    #[test]
    fn test_primary_ray_through_center_points_forward() {
        let camera = Camera::looking_at(point![0.0, 0.0, 3.0], Point3::origin(), 40.0, (2, 2)).unwrap();
        let ray = Ray::new(camera.position, camera.forward);
        let ball = Ball::with_default_material(Point3::origin(), 1.0);
        let Intersection::Hit(hit) = ball.first_hit(&ray, 0.0) else {
            panic!("Expected a hit");
        };
        assert!(hit.t() > 0.0);
        let corner = camera.primary_ray(0, 0);
        assert!(corner.dir.x < 0.0 && corner.dir.y > 0.0);
    }

    #[test]
    fn test_zero_light_direction_is_rejected() {
        let mut scene: SceneConfig = cfg::from_reader(SCENE.as_bytes()).unwrap();
        scene.light_direction = [0.0; 3];
        let ball = Ball::with_default_material(Point3::origin(), 1.0);
        assert!(render(&scene, &ball).is_err());
    }

    #[test]
    fn test_camera_at_ball_center_is_rejected() {
        let mut scene: SceneConfig = cfg::from_reader(SCENE.as_bytes()).unwrap();
        scene.camera_position = [0.0; 3];
        scene.ball.radius = -1.0;
        scene.ball.material = MaterialConfig::Matte(ColorRgb::WHITE);
        let ball = scene.ball.build(&loader()).unwrap();
        let err = render(&scene, &ball).unwrap_err();
        assert!(format!("{err:#}").contains("no direction"));
    }

    #[test]
    fn test_light_material_renders_emission() {
        let mut scene: SceneConfig = cfg::from_reader(SCENE.as_bytes()).unwrap();
        scene.ball.material = MaterialConfig::Light(ColorRgb::new(1.0, 0.0, 0.0));
        scene.light_direction = [0.0, 0.0, -1.0];
        let ball = scene.ball.build(&loader()).unwrap();
        let material = ball.material_map().at(point![0.5, 0.5]);
        assert_eq!(material.diffuse, ColorRgb::BLACK);
        assert_eq!(material.emission, ColorRgb::new(1.0, 0.0, 0.0));

        let image = render(&scene, &ball).unwrap();
        assert_eq!(image.get_pixel(12, 8).0, [255, 0, 0]);
    }
}
