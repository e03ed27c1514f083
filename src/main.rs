//! `scanmark` command-line checker.
//!
//! Loads an optional TOML preset, validates it, composes and validates every
//! marker shader permutation, and logs what the configured ramp and fade do
//! over a range of distances.

use std::path::Path;

use glam::{Vec2, Vec3};
use scanmark::{
    camera::{core::CameraBlock, frustum::Frustum},
    error::ScanmarkError,
    gpu::shader_composer::ShaderComposer,
    marker::{
        shade_fragment, transform_vertex, InstanceRecord, ModelInstance,
        QUAD_CORNERS,
    },
    options::Options,
    renderer::MarkerShader,
    scene::MarkOctree,
};

const SAMPLE_DISTANCES: [f32; 9] =
    [0.0, 50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 400.0, 600.0];

fn load_options(arg: Option<String>) -> Result<Options, ScanmarkError> {
    let options = match arg {
        Some(path) => Options::load(Path::new(&path))?,
        None => {
            log::info!("No preset given, using defaults");
            Options::default()
        }
    };
    options.marker.validate()?;
    Ok(options)
}

fn check_shaders() -> Result<(), ScanmarkError> {
    let mut composer = ShaderComposer::new()?;
    for shader in MarkerShader::ALL {
        let module = shader.compose_naga(&mut composer)?;
        let _ = ShaderComposer::validate(&module)?;
        log::info!("{}: ok", shader.label());
    }
    Ok(())
}

fn log_ramp(options: &Options) {
    let bands = options.marker.bands();
    let fade = options.marker.style().fade;
    log::info!("distance -> tint (r, g, b), fade scale");
    for d in SAMPLE_DISTANCES {
        let c = bands.sample(d, options.marker.ramp_policy);
        log::info!(
            "{d:>7.1} -> ({:.3}, {:.3}, {:.3}), {:.4}",
            c.x,
            c.y,
            c.z,
            fade.scale(d)
        );
    }
}

/// Fill a mark store with a lattice, query it from a corner of the volume
/// and run the last-drawn (front-most) mark through both stages.
fn sample_scene(options: &Options) {
    let mut marks = MarkOctree::new(&options.scene);
    let extent = options.scene.extent;
    let step = extent / 4.0;
    for i in -4..4 {
        for j in -4..4 {
            for k in -4..4 {
                let p = Vec3::new(i as f32, j as f32, k as f32) * step;
                let record = InstanceRecord::Position(p);
                let _ = marks.insert(ModelInstance::from(&record));
            }
        }
    }

    let eye = Vec3::splat(extent * 1.5);
    let camera = CameraBlock::look_at(
        eye,
        Vec3::ZERO,
        Vec3::Y,
        60.0,
        16.0 / 9.0,
        0.1,
        extent * 10.0,
    );
    let frustum = Frustum::from_view_projection(camera.view_projection());
    let mut visible = Vec::new();
    marks.visible(&mut visible, eye, &frustum);
    log::info!(
        "{} of {} marks visible across {} octants",
        visible.len(),
        marks.len(),
        marks.octant_count()
    );

    let style = options.marker.style();
    if let Some(front) = visible.last() {
        let record = InstanceRecord::from(front);
        let out = transform_vertex(&camera, &record, QUAD_CORNERS[0], &style);
        let center = transform_vertex(&camera, &record, Vec2::ZERO, &style);
        let rgba = shade_fragment(&(&center).into(), &style);
        log::info!(
            "front-most mark at {:?}: corner clip {:?}, center rgba {:?}",
            record.position(),
            out.clip,
            rgba
        );
    }
}

fn main() {
    env_logger::init();

    let options = match load_options(std::env::args().nth(1)) {
        Ok(options) => options,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = check_shaders() {
        log::error!("{e}");
        std::process::exit(1);
    }

    log_ramp(&options);
    sample_scene(&options);
}
