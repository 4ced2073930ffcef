use std::time::{Duration, Instant};

use anyhow::{ensure, Context, Result};
use log::info;
use sheen_engine::geom::Path;
use sheen_engine::logging::{init_logging, LoggingConfig};
use sheen_engine::paint::FillStyle;
use sheen_engine::surface::SurfaceOp;
use sheen_engine::time::FrameClock;
use sheen_ui::prelude::*;

const FRAME: Duration = Duration::from_millis(16);
const FRAMES: u32 = 180;

fn main() -> Result<()> {
    init_logging(LoggingConfig { timestamps: false, ..LoggingConfig::default() });

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          SHEEN STUDIO v0.1             ║");
    println!("  ║   rounded card  ·  shimmer placeholder ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let card_attrs = Attributes::parse_pairs([
        ("topLeftRadius", "18px"),
        ("bottomRightRadius", "18px"),
        ("strokeWidth", "1.5px"),
        ("strokeColor", "#FF3A4A5C"),
        ("dashWidth", "6px"),
        ("dashGap", "4px"),
        ("fillColor", "#FFF2F4F7"),
    ])
    .context("parsing card attributes")?;
    let mut card = RoundedView::from_attributes(&card_attrs).context("building card")?;
    card.on_layout(true, Rect::from_ltrb(24.0, 24.0, 344.0, 204.0));

    let shimmer_attrs = Attributes::parse_pairs([
        ("shimmerAngle", "20"),
        ("shimmerAnimationDuration", "1200ms"),
        ("maskWidth", "0.6"),
        ("shimmerAutoStart", "true"),
    ])
    .context("parsing shimmer attributes")?;
    let mut shimmer = ShimmerLayout::from_attributes(&shimmer_attrs).context("building shimmer layout")?;
    shimmer.on_attach();
    shimmer.on_layout(Size::new(320.0, 180.0));
    info!("shimmer state after layout: {:?}", shimmer.state());

    // Grey placeholder blocks standing in for not-yet-loaded content.
    let placeholders = [
        Rect::new(16.0, 16.0, 64.0, 64.0),
        Rect::new(96.0, 24.0, 200.0, 14.0),
        Rect::new(96.0, 52.0, 140.0, 14.0),
        Rect::new(16.0, 100.0, 288.0, 60.0),
    ]
    .map(|r| Path::rounded_rect(r, &[6.0; 8]));
    let block = FillStyle::new(Color::rgb(0xD8, 0xDC, 0xE2));

    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);
    let mut surface = RecordingSurface::new();
    let mut redraws = 0u32;

    for i in 1..=FRAMES {
        let frame = clock.tick_at(start + FRAME * i);
        if shimmer.tick(frame.dt) {
            redraws += 1;
        }

        if i == FRAMES / 2 {
            info!("switching card to right-to-left");
            card.set_layout_direction(LayoutDirection::Rtl);
        }

        surface.clear_items();
        shimmer.draw(&mut surface, &mut |s: &mut dyn DrawingSurface| {
            card.draw(s, &mut |c: &mut dyn DrawingSurface| {
                for path in &placeholders {
                    let _ = c.fill_path(path, &block);
                }
            });
        });

        if i % 30 == 0 {
            info!(
                "frame {:>3}: offset={:>4} cmds={:>2} highlight={} live_offscreens={}",
                frame.frame_index,
                shimmer.engine().offset(),
                surface.items().len(),
                surface.count(SurfaceOp::DrawRect),
                surface.live_offscreens(),
            );
        }
    }

    shimmer.on_detach();
    ensure!(surface.live_offscreens() == 0, "shimmer mask still allocated after detach");

    println!();
    println!("  Frames rendered : {FRAMES}");
    println!("  Redraw requests : {redraws}");
    println!("  Mask allocations: {}", surface.total_offscreens());
    println!();

    Ok(())
}
