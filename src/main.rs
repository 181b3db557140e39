//! Headless driver for the color blob volume.
//!
//! Steps the sphere animation at 60 Hz and logs the params block each
//! frame. With `--gpu` every frame is also uploaded to a headless device.
//! `--save-preset` writes the resolved options as TOML and
//! `--list-presets` prints the presets found in a directory.

use std::{
    io::Write,
    path::{Path, PathBuf},
    process::ExitCode,
};

use colorblob::{
    error::BlobError,
    gpu::{bindings, buffers::BlobBuffers, context::GpuContext},
    layout::encode_params,
    options::Options,
    scene::BlobScene,
};

const FRAME_DT: f32 = 1.0 / 60.0;

struct Args {
    options: Option<PathBuf>,
    frames: u32,
    gpu: bool,
    schema: bool,
    save_preset: Option<PathBuf>,
    list_presets: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        options: None,
        frames: 60,
        gpu: false,
        schema: false,
        save_preset: None,
        list_presets: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--gpu" => args.gpu = true,
            "--schema" => args.schema = true,
            "--frames" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--frames needs a value".to_owned())?;
                args.frames = value
                    .parse()
                    .map_err(|e| format!("bad frame count '{value}': {e}"))?;
            }
            "--save-preset" => {
                let value = iter
                    .next()
                    .ok_or_else(|| "--save-preset needs a path".to_owned())?;
                args.save_preset = Some(PathBuf::from(value));
            }
            "--list-presets" => {
                let value = iter.next().ok_or_else(|| {
                    "--list-presets needs a directory".to_owned()
                })?;
                args.list_presets = Some(PathBuf::from(value));
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag {flag}"));
            }
            path => args.options = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

fn write_schema() -> Result<(), BlobError> {
    let schema = serde_json::to_string_pretty(&Options::json_schema())
        .map_err(|e| BlobError::OptionsParse(e.to_string()))?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{schema}")?;
    Ok(())
}

fn write_presets(dir: &Path) -> Result<(), BlobError> {
    let mut out = std::io::stdout().lock();
    for name in Options::list_presets(dir) {
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), BlobError> {
    let options = match &args.options {
        Some(path) => {
            let opts = Options::load(path)?;
            log::info!("loaded options from {}", path.display());
            opts
        }
        None => Options::default(),
    };
    if let Some(path) = &args.save_preset {
        options.save(path)?;
        log::info!("saved options to {}", path.display());
    }
    let material = options.material.clamped();
    log::info!(
        "surface material: roughness {:.2}, metallic {:.2}, specular {:.2}",
        material.roughness,
        material.metallic,
        material.specular
    );
    let max_spheres = options.spheres.max_spheres;
    let mut scene = BlobScene::new(options)?;

    let gpu = if args.gpu {
        let context = pollster::block_on(GpuContext::new_headless())?;
        let buffers =
            BlobBuffers::new(&context.device, scene.grid(), max_spheres);
        let layout = bindings::create_bind_group_layout(&context.device);
        let _bind_group = buffers.bind_group(&context.device, &layout);
        Some((context, buffers))
    } else {
        None
    };

    for index in 0..args.frames {
        scene.step(FRAME_DT);
        let frame = scene.frame()?;
        log::debug!(
            "frame {index}: {} param bytes, first sphere {:?}",
            encode_params(&frame.params).len(),
            frame.spheres.first().map(|s| s.center)
        );
        if let Some((context, buffers)) = &gpu {
            buffers.upload(&context.queue, &frame)?;
            let _ = context.queue.submit([]);
        }
    }

    let capacity = scene.grid().mesh_capacity();
    log::info!(
        "ran {} frames: {} spheres over {} cells, vertex capacity {}",
        args.frames,
        scene.field().len(),
        scene.grid().cell_count(),
        capacity.vertex_capacity
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            log::error!("{e}");
            log::error!(
                "Usage: colorblob [options.toml] [--frames N] [--gpu] \
                 [--schema] [--save-preset PATH] [--list-presets DIR]"
            );
            return ExitCode::FAILURE;
        }
    };

    let result = if args.schema {
        write_schema()
    } else if let Some(dir) = &args.list_presets {
        write_presets(dir)
    } else {
        run(&args)
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
