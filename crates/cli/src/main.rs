use std::path::PathBuf;
use std::process;

use clap::Parser;

use rainbow_border_core::animation::border_animator::BorderAnimator;
use rainbow_border_core::animation::infrastructure::headless_window::HeadlessWindow;
use rainbow_border_core::animation::infrastructure::manual_scheduler::ManualScheduler;
use rainbow_border_core::border::domain::border_settings::BorderSettings;
use rainbow_border_core::border::infrastructure::settings_file::load_settings;
use rainbow_border_core::render::domain::frame_writer::FrameWriter;
use rainbow_border_core::render::domain::persistent_item::PersistentItem;
use rainbow_border_core::render::infrastructure::item_painter::text_size;
use rainbow_border_core::render::infrastructure::png_frame_writer::{load_image, PngFrameWriter};
use rainbow_border_core::render::infrastructure::raster_overlay::RasterOverlay;
use rainbow_border_core::render::render_frames_use_case::RenderFramesUseCase;
use rainbow_border_core::shared::color::Rgb;
use rainbow_border_core::shared::constants::MAX_OVERLAY_DIMENSION;
use rainbow_border_core::shared::size::Size;

/// Renders an animated rainbow border to a sequence of PNG frames.
#[derive(Parser)]
#[command(name = "rainbow-border")]
struct Cli {
    /// Directory the frames are written to.
    output_dir: PathBuf,

    /// Window width in pixels.
    #[arg(long, default_value = "400")]
    width: u32,

    /// Window height in pixels.
    #[arg(long, default_value = "300")]
    height: u32,

    /// Border thickness in pixels.
    #[arg(long)]
    border_width: Option<u32>,

    /// Tick interval in milliseconds.
    #[arg(long, conflicts_with = "fps")]
    interval_ms: Option<u64>,

    /// Tick rate in frames per second.
    #[arg(long)]
    fps: Option<u32>,

    /// Corner radius in pixels (0 = square corners).
    #[arg(long)]
    corner_radius: Option<u32>,

    /// Hue advance per tick in degrees (default follows the interval).
    #[arg(long)]
    phase_step: Option<f32>,

    /// Background color as #rrggbb.
    #[arg(long)]
    background: Option<String>,

    /// Image drawn beneath the border, scaled to the window.
    #[arg(long)]
    backdrop: Option<PathBuf>,

    /// Persistent text centered at X,Y (repeatable; "\n" breaks lines).
    #[arg(long = "text", value_name = "X,Y,TEXT", value_parser = parse_placement)]
    texts: Vec<Placement>,

    /// Color of persistent text as #rrggbb.
    #[arg(long, default_value = "#ffffff")]
    text_color: String,

    /// Pixel scale of the 8x8 text glyphs.
    #[arg(long, default_value = "2")]
    text_scale: u32,

    /// Persistent image with its top-left corner at X,Y (repeatable).
    #[arg(long = "overlay-image", value_name = "X,Y,PATH", value_parser = parse_placement)]
    overlay_images: Vec<Placement>,

    /// JSON settings file; flags override its values.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Number of frames to render.
    #[arg(long, default_value = "36")]
    frames: usize,
}

/// A command-line value anchored at an overlay position.
#[derive(Clone, Debug, PartialEq)]
struct Placement {
    x: i32,
    y: i32,
    value: String,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let file_settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => BorderSettings::default(),
    };
    let config = file_settings.merged_with(flag_settings(&cli)).to_config()?;
    let text_color: Rgb = cli.text_color.parse()?;

    let window = HeadlessWindow::new(Size::new(cli.width, cli.height));
    let overlay = RasterOverlay::new(config.background());
    let mut animator = BorderAnimator::attach(window, overlay, ManualScheduler::new(), config);

    if let Some(path) = &cli.backdrop {
        let backdrop = load_image(path)?;
        log::info!("Backdrop {} ({})", path.display(), backdrop.size());
        animator.overlay_mut().set_backdrop(backdrop);
    }
    for placement in &cli.overlay_images {
        let image = load_image(&PathBuf::from(&placement.value))?;
        animator
            .overlay_mut()
            .add_item(PersistentItem::image(placement.x, placement.y, image));
    }
    for placement in &cli.texts {
        animator
            .overlay_mut()
            .add_item(centered_text(placement, text_color, cli.text_scale));
    }

    let items = animator.overlay().item_count();
    if items > 0 {
        log::info!("{items} persistent overlay items");
    }

    let total = cli.frames;
    let progress: Box<dyn Fn(usize, usize) -> bool + Send> = Box::new(move |current, _| {
        eprint!("\rWriting frame {current}/{total}");
        true
    });
    let writer: Box<dyn FrameWriter> = Box::new(PngFrameWriter::new());
    let use_case = RenderFramesUseCase::new(writer, Some(progress));

    let result = use_case.execute(&mut animator, cli.frames, &cli.output_dir);
    eprintln!();
    animator.teardown();

    let written = result?;
    log::info!("Wrote {written} frames to {}", cli.output_dir.display());
    Ok(())
}

fn flag_settings(cli: &Cli) -> BorderSettings {
    BorderSettings {
        border_width: cli.border_width,
        interval_ms: cli.interval_ms,
        fps: cli.fps,
        corner_radius: cli.corner_radius,
        phase_step: cli.phase_step,
        background: cli.background.clone(),
    }
}

/// Text item whose bounding box is centered on the placement point.
fn centered_text(placement: &Placement, color: Rgb, scale: u32) -> PersistentItem {
    let text = placement.value.replace("\\n", "\n");
    let size = text_size(&text, scale);
    PersistentItem::text(
        placement.x - (size.width / 2) as i32,
        placement.y - (size.height / 2) as i32,
        text,
        color,
        scale,
    )
}

fn parse_placement(s: &str) -> Result<Placement, String> {
    let mut parts = s.splitn(3, ',');
    let (Some(x), Some(y), Some(value)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected X,Y,VALUE, got '{s}'"));
    };
    let x = x
        .trim()
        .parse()
        .map_err(|_| format!("invalid x coordinate '{x}'"))?;
    let y = y
        .trim()
        .parse()
        .map_err(|_| format!("invalid y coordinate '{y}'"))?;
    if value.is_empty() {
        return Err(format!("missing value in '{s}'"));
    }
    Ok(Placement {
        x,
        y,
        value: value.to_string(),
    })
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.width == 0 || cli.height == 0 {
        return Err(format!(
            "Window size must be positive, got {}x{}",
            cli.width, cli.height
        )
        .into());
    }
    if cli.width > MAX_OVERLAY_DIMENSION || cli.height > MAX_OVERLAY_DIMENSION {
        return Err(format!(
            "Window size must not exceed {MAX_OVERLAY_DIMENSION}px per side, got {}x{}",
            cli.width, cli.height
        )
        .into());
    }
    if cli.frames == 0 {
        return Err("Frame count must be at least 1".into());
    }
    if cli.text_scale == 0 {
        return Err("Text scale must be at least 1".into());
    }
    if let Some(path) = &cli.backdrop {
        if !path.exists() {
            return Err(format!("Backdrop file not found: {}", path.display()).into());
        }
    }
    for placement in &cli.overlay_images {
        if !PathBuf::from(&placement.value).exists() {
            return Err(format!("Overlay image not found: {}", placement.value).into());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_placement() {
        assert_eq!(
            parse_placement("450, -20,Welcome, back").unwrap(),
            Placement {
                x: 450,
                y: -20,
                value: "Welcome, back".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_placement_rejects_malformed() {
        assert!(parse_placement("10,20").is_err());
        assert!(parse_placement("a,20,hi").is_err());
        assert!(parse_placement("10,20,").is_err());
    }

    #[test]
    fn test_centered_text_box() {
        let placement = Placement {
            x: 100,
            y: 50,
            value: "ab\\ncd".to_string(),
        };
        match centered_text(&placement, Rgb::BLACK, 2) {
            PersistentItem::Text { x, y, text, .. } => {
                assert_eq!((x, y), (100 - 16, 50 - 16));
                assert_eq!(text, "ab\ncd");
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_collects_repeated_items() {
        let cli = Cli::try_parse_from([
            "rainbow-border",
            "out",
            "--text",
            "10,10,one",
            "--text",
            "20,20,two",
            "--overlay-image",
            "0,0,logo.png",
        ])
        .unwrap();
        assert_eq!(cli.texts.len(), 2);
        assert_eq!(cli.overlay_images[0].value, "logo.png");
    }
}
