// SPDX-License-Identifier: MPL-2.0
use gallery_lens::config::{self, ViewerSettings};
use gallery_lens::error::{ManifestError, Result};
use gallery_lens::gallery::Gallery;
use gallery_lens::i18n::I18n;
use gallery_lens::replay::{self, Script};
use gallery_lens::viewer::{Effect, Viewer};
use iced_core::Size;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: gallery_lens [OPTIONS] MANIFEST

Replays a gesture script against a gallery and prints the image counter
and CSS transform after every step.

Options:
  --lang LANG        Interface language (en-US, ru)
  --viewport WxH     Viewer container size in pixels [default: 800x600]
  --start INDEX      Image shown first [default: 0]
  --script FILE      Gesture script to replay
  -v, --verbose      Log gesture and navigation events
  -h, --help         Print this help";

struct Args {
    lang: Option<String>,
    viewport: Size,
    start: usize,
    script: Option<PathBuf>,
    verbose: bool,
    manifest: PathBuf,
}

fn parse_size(value: &str) -> std::result::Result<Size, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{value}'"))?;
    let width: f32 = width.trim().parse().map_err(|_| format!("invalid width '{width}'"))?;
    let height: f32 = height.trim().parse().map_err(|_| format!("invalid height '{height}'"))?;
    if width > 0.0 && height > 0.0 {
        Ok(Size::new(width, height))
    } else {
        Err(format!("viewport must be positive, got '{value}'"))
    }
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        lang: args.opt_value_from_str("--lang")?,
        viewport: args
            .opt_value_from_fn("--viewport", parse_size)?
            .unwrap_or(Size::new(800.0, 600.0)),
        start: args.opt_value_from_str("--start")?.unwrap_or(0),
        script: args.opt_value_from_str("--script")?,
        verbose: args.contains(["-v", "--verbose"]),
        manifest: args.free_from_str()?,
    };
    Ok(Some(parsed))
}

fn run(args: &Args, config: &config::Config, i18n: &I18n) -> Result<()> {
    let settings = ViewerSettings::from(config);

    let gallery = Gallery::load_from_path(&args.manifest, &settings.placeholder_url)?;
    let script = match &args.script {
        Some(path) => Script::load_from_path(path)?,
        None => Script::default(),
    };

    let mut viewer = Viewer::from_gallery(gallery, args.start, args.viewport, settings)
        .ok_or(ManifestError::Empty)?;

    println!(
        "open\t{}\t{}\t{}",
        viewer.counter_label(i18n),
        viewer.current_image().url,
        viewer.transform()
    );

    for frame in replay::replay(&mut viewer, &script)? {
        let note = match &frame.effect {
            Effect::None => String::new(),
            Effect::TransformChanged(_) => "transform".to_string(),
            Effect::ImageChanged { image, .. } => format!("image {}", image.url),
            Effect::ShowPlaceholder(image) => {
                format!("{} ({})", i18n.tr("viewer-placeholder-notice"), image.url)
            }
            Effect::Close => i18n.tr("viewer-close"),
        };
        let (current, total) = frame.counter;
        println!(
            "#{}\t{}\t{}\t{}",
            frame.step,
            i18n.tr_with_args(
                "viewer-counter",
                &[("current", &current.to_string()), ("total", &total.to_string())],
            ),
            frame.transform,
            note
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let filter = if args.verbose {
        EnvFilter::new("gallery_lens=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "could not read settings, using defaults");
        config::Config::default()
    });
    let i18n = I18n::new(args.lang.clone(), &config);

    match run(&args, &config, &i18n) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "gallery_lens failed");
            eprintln!("error: {}", err.localized(&i18n));
            ExitCode::FAILURE
        }
    }
}
