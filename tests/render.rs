use std::io::{self, Write};

use indicatif::ProgressBar;
use pretty_assertions::assert_eq;

use ppm_tracer::config::RenderConfig;
use ppm_tracer::hittable::Hittable;
use ppm_tracer::interval::Interval;
use ppm_tracer::output::{to_rgb8, PpmWriter};
use ppm_tracer::random::Jitter;
use ppm_tracer::render::{ray_colour, Renderer};
use ppm_tracer::scene::Scene;

fn render_to_string(renderer: &Renderer, scene: &Scene) -> String {
    let mut out = PpmWriter::new(Vec::new());
    renderer
        .render(scene, &mut out, &ProgressBar::hidden())
        .expect("rendering into memory cannot fail");
    String::from_utf8(out.finish().unwrap()).unwrap()
}

fn config(image_width: u32, aspect_ratio: f32, samples_per_pixel: u32, jitter: Jitter, seed: u64) -> RenderConfig {
    let config = RenderConfig {
        image_width,
        aspect_ratio,
        samples_per_pixel,
        jitter: Some(jitter),
        seed,
        ..RenderConfig::default()
    };
    config.validate().unwrap();
    config
}

fn pixel_line(renderer: &Renderer, scene: &Scene, i: u32, j: u32) -> String {
    let r = renderer.camera().pixel_ray(i, j, 0.0, 0.0);
    let [red, green, blue] = to_rgb8(ray_colour(&r, scene));
    format!("{red} {green} {blue}")
}

#[test]
fn two_by_one_render() {
    let renderer = config(2, 2.0, 1, Jitter::None, 0).renderer();
    let image = render_to_string(&renderer, &Scene::single_sphere());

    // A single row maps to v = 0 and two columns to u = 0 and u = 1, so both
    // pixels look through the bottom viewport corners and see only sky.
    assert_eq!(image, "P3\n2 1\n255\n218 233 255\n218 233 255\n");
}

#[test]
fn several_samples_jitter_by_default() {
    let base = RenderConfig {
        image_width: 32,
        ..RenderConfig::default()
    };
    let many = RenderConfig {
        samples_per_pixel: 16,
        ..base.clone()
    };
    base.validate().unwrap();
    many.validate().unwrap();
    assert_eq!(many.jitter, None);

    let scene = base.scene();
    let single_image = render_to_string(&base.renderer(), &scene);
    let sampled_image = render_to_string(&many.renderer(), &scene);
    assert_ne!(single_image, sampled_image);
}

#[test]
fn single_sphere_center_and_corners() {
    let scene = Scene::single_sphere();
    let renderer = config(20, 2.0, 1, Jitter::None, 0).renderer();
    let (width, height) = (20, 10);
    assert_eq!(renderer.camera().image_height(), height);

    let image = render_to_string(&renderer, &scene);
    let lines: Vec<&str> = image.lines().collect();
    assert_eq!(lines[..3], ["P3", "20 10", "255"]);
    let pixels = &lines[3..];
    assert_eq!(pixels.len(), (width * height) as usize);

    // Rows are written top first, so row j lands at (height - 1 - j) * width
    let line_of = |i: u32, j: u32| pixels[((height - 1 - j) * width + i) as usize];

    let center = renderer.camera().pixel_ray(10, 5, 0.0, 0.0);
    assert!(scene.hit(&center, Interval::NON_NEGATIVE).is_some());
    assert_eq!(line_of(10, 5), pixel_line(&renderer, &scene, 10, 5));
    assert_ne!(line_of(10, 5), {
        let [r, g, b] = to_rgb8(center.background_colour());
        format!("{r} {g} {b}")
    });

    for (i, j) in [(0, 0), (width - 1, 0), (0, height - 1), (width - 1, height - 1)] {
        let corner = renderer.camera().pixel_ray(i, j, 0.0, 0.0);
        assert!(scene.hit(&corner, Interval::NON_NEGATIVE).is_none());
        let [r, g, b] = to_rgb8(corner.background_colour());
        assert_eq!(line_of(i, j), format!("{r} {g} {b}"));
    }
}

#[test]
fn fixed_seed_is_reproducible() {
    let scene = Scene::default_scene();
    let renderer = config(24, 1.5, 4, Jitter::Independent, 7).renderer();

    let first = render_to_string(&renderer, &scene);
    let second = render_to_string(&renderer, &scene);
    assert_eq!(first, second);

    let reseeded = config(24, 1.5, 4, Jitter::Independent, 8).renderer();
    assert_ne!(first, render_to_string(&reseeded, &scene));
}

#[test]
fn parallel_matches_serial() {
    let scene = Scene::default_scene();
    for jitter in [Jitter::None, Jitter::Independent, Jitter::Shared] {
        let serial = config(32, 16.0 / 9.0, 3, jitter, 1234).renderer();
        let parallel = serial.clone().parallel(true);
        assert_eq!(render_to_string(&serial, &scene), render_to_string(&parallel, &scene));
    }
}

#[test]
fn config_file_drives_render() {
    let config = RenderConfig::from_toml_str(
        r#"
        image_width = 4
        aspect_ratio = 2.0
        spheres = []
        "#,
    )
    .unwrap();
    config.validate().unwrap();

    let image = render_to_string(&config.renderer(), &config.scene());
    let lines: Vec<&str> = image.lines().collect();
    assert_eq!(lines.len(), 3 + 4 * 2);
    // Empty scene: the top row is bluer than the bottom row
    assert_ne!(lines[3], lines[7]);
}

/// Sink that accepts a fixed number of bytes, then fails every write.
struct FailingSink {
    remaining: usize,
    failed_writes: usize,
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.remaining == 0 {
            self.failed_writes += 1;
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let n = buf.len().min(self.remaining);
        self.remaining -= n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn sink_failure_aborts_render() {
    let renderer = config(40, 2.0, 1, Jitter::None, 0).renderer();
    let mut sink = FailingSink {
        remaining: 64,
        failed_writes: 0,
    };
    let mut out = PpmWriter::new(&mut sink);

    let err = renderer
        .render(&Scene::default_scene(), &mut out, &ProgressBar::hidden())
        .unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    drop(out);
    assert_eq!(sink.failed_writes, 1);
}
