//! Day/night world map in the terminal
//!
//! Renders the heliomap frame as braille blocks, ticks it against the
//! wall clock and shows the home sunrise/sunset line under the map.

mod braille;
mod mask;
mod store;

use std::io::{stdout, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Timelike, Utc};
use clap::Parser;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode},
    execute, queue,
    style::Print,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use heliomap_core::astro::WallClock;
use heliomap_core::sun::ClockStyle;
use heliomap_core::Renderer;

use store::StoredSettings;

/// Day/night world map in the terminal
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Render a single frame to stdout and exit
    #[arg(long)]
    once: bool,

    /// Seconds between clock ticks
    #[arg(long, default_value_t = 60)]
    interval: u64,

    /// Home latitude in degrees, -90..=90
    #[arg(long)]
    lat: Option<i16>,

    /// Home longitude in degrees, -180..=180
    #[arg(long)]
    lon: Option<i16>,

    /// Home timezone in half hours from UTC, -24..=24
    #[arg(long)]
    tz: Option<i8>,

    /// Show sunrise/sunset on a 12-hour clock
    #[arg(long)]
    twelve_hour: bool,

    /// Hide the sunrise/sunset line
    #[arg(long)]
    no_overlay: bool,

    /// Load a 216x168 binary PBM world mask instead of the built-in one
    #[arg(long)]
    map: Option<PathBuf>,

    /// Write the rendered frame as binary PBM to this path and exit
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Persist the effective settings for future runs
    #[arg(long)]
    save: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let paths = store::project_paths()?;
    let mut stored = store::load_settings(&paths.settings_path);
    if let Some(lat) = args.lat {
        stored.home.latitude = lat;
    }
    if let Some(lon) = args.lon {
        stored.home.longitude = lon;
    }
    if let Some(tz) = args.tz {
        stored.home.timezone_half_hours = tz;
    }
    if args.twelve_hour {
        stored.style = ClockStyle::H12;
    }
    stored
        .home
        .validate()
        .map_err(|err| anyhow::anyhow!("invalid home settings: {err:?}"))?;

    if args.save {
        store::save_settings(&paths.settings_path, &stored).context("saving settings")?;
        log::info!("settings saved to {}", paths.settings_path.display());
    }

    let mask = match &args.map {
        Some(path) => {
            mask::load_pbm(path).with_context(|| format!("loading mask {}", path.display()))?
        }
        None => mask::demo_world(),
    };

    let overlay = stored.home.show_sun_times && !args.no_overlay;
    let mut renderer = Renderer::new(mask, stored.home);
    renderer.update_time(home_wall_clock(stored.home.timezone_half_hours));
    log::debug!(
        "home {:?} at tz {} half hours",
        renderer.home(),
        stored.home.timezone_half_hours
    );

    if let Some(path) = &args.snapshot {
        let (frame, report) = renderer.render(overlay);
        mask::write_pbm(path, frame)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
        if let Some(report) = report {
            println!("{}", report.format(stored.style));
        }
        return Ok(());
    }

    if args.once {
        let (frame, report) = renderer.render(overlay);
        let mut out = stdout().lock();
        for line in braille::frame_lines(frame) {
            writeln!(out, "{line}")?;
        }
        if let Some(report) = report {
            writeln!(out, "{}", report.format(stored.style))?;
        }
        return Ok(());
    }

    run_interactive(renderer, stored, overlay, args.interval)
}

/// Current wall clock in the home timezone, derived from UTC plus the
/// fixed half-hour offset (daylight saving is deliberately ignored, as
/// on the reference device)
fn home_wall_clock(timezone_half_hours: i8) -> WallClock {
    let home = Utc::now() + chrono::Duration::minutes(timezone_half_hours as i64 * 30);
    WallClock::new(
        home.hour() as u8,
        home.minute() as u8,
        home.ordinal0() as u16,
    )
}

fn run_interactive(
    renderer: Renderer,
    stored: StoredSettings,
    overlay: bool,
    interval: u64,
) -> Result<()> {
    let mut out = stdout();
    execute!(
        out,
        EnterAlternateScreen,
        terminal::Clear(ClearType::All),
        cursor::Hide
    )
    .context("entering alternate screen")?;
    terminal::enable_raw_mode().context("enabling raw mode")?;

    let result = event_loop(renderer, stored, overlay, interval, &mut out);

    let _ = terminal::disable_raw_mode();
    let _ = execute!(out, cursor::Show, LeaveAlternateScreen);
    result
}

fn event_loop(
    mut renderer: Renderer,
    stored: StoredSettings,
    mut overlay: bool,
    interval: u64,
    out: &mut impl Write,
) -> Result<()> {
    let tick = Duration::from_secs(interval.max(1));
    let mut last_tick = Instant::now();
    let mut repaint = true;

    loop {
        if event::poll(Duration::from_millis(200))? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('t') => {
                        overlay = !overlay;
                        repaint = true;
                    }
                    KeyCode::Char('r') => {
                        renderer.mark_dirty();
                        repaint = true;
                    }
                    KeyCode::Char('s') => {
                        let name = format!(
                            "heliomap-{}.pbm",
                            Local::now().format("%Y%m%d-%H%M%S")
                        );
                        mask::write_pbm(Path::new(&name), renderer.frame())?;
                        log::info!("snapshot written to {name}");
                    }
                    _ => {}
                },
                Event::Resize(_, _) => repaint = true,
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick {
            last_tick = Instant::now();
            renderer.update_time(home_wall_clock(renderer.settings().timezone_half_hours));
        }

        if renderer.is_dirty() || repaint {
            draw(&mut renderer, overlay, stored.style, out)?;
            repaint = false;
        }
    }
    Ok(())
}

fn draw(
    renderer: &mut Renderer,
    overlay: bool,
    style: ClockStyle,
    out: &mut impl Write,
) -> Result<()> {
    let settings = *renderer.settings();
    let (frame, report) = renderer.render(overlay);

    queue!(out, cursor::MoveTo(0, 0))?;
    for line in braille::frame_lines(frame) {
        queue!(out, Print(line), Print("\r\n"))?;
    }

    let mut status = format!(
        "home {}{} {}{}   q quit  t times  r redraw  s snapshot",
        settings.latitude.abs(),
        if settings.latitude >= 0 { "N" } else { "S" },
        settings.longitude.abs(),
        if settings.longitude >= 0 { "E" } else { "W" },
    );
    if let Some(report) = report {
        status.push_str("   ");
        status.push_str(report.format(style).as_str());
    }
    queue!(out, terminal::Clear(ClearType::CurrentLine), Print(status))?;
    out.flush()?;
    Ok(())
}
