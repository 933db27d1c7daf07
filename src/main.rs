//! livescore: show what is played on a MIDI keyboard as staff notation.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;

use livescore::device::{find_midi_device, run_line_input, run_reader};
use livescore::{
    frame_to_json, render_frame_to_svg, Config, Decoder, Error, FrameSnapshot, LiveState, Session,
};

#[derive(Parser)]
#[command(name = "livescore")]
#[command(about = "Render live MIDI keyboard input as staff notation")]
struct Cli {
    /// Echo (note) input back to the MIDI source
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    echo: bool,

    /// Velocity to use for the echo
    #[arg(long = "echovel", default_value_t = 2)]
    echo_velocity: i32,

    /// How many accidentals the key signature has (A major has 3 sharps)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    key: i32,

    /// Use flats instead of sharps
    #[arg(long, visible_alias = "flat")]
    flats: bool,

    /// Don't write SVG frames
    #[arg(long)]
    nogui: bool,

    /// MIDI device node; discovered automatically when omitted
    #[arg(long)]
    device: Option<PathBuf>,

    /// Directory scanned for `midi*` device nodes
    #[arg(long = "dev-dir", default_value = "/dev")]
    dev_dir: PathBuf,

    /// File the current frame is written to
    #[arg(long, default_value = "livescore.svg")]
    svg: PathBuf,

    /// Frames per second
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Print each changed frame as one line of JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let config = Config::new(cli.echo, cli.echo_velocity, cli.key, cli.flats);

    let path = match cli.device.clone() {
        Some(path) => path,
        None => wait_for_device(&cli.dev_dir)?,
    };
    let device = OpenOptions::new()
        .read(true)
        .write(true)
        .open(&path)
        .with_context(|| format!("Failed to open MIDI device {}", path.display()))?;
    let mut device_out = device
        .try_clone()
        .context("Failed to duplicate MIDI device handle")?;
    log::info!("# Found MIDI device {} #", path.display());

    let (inputs, mut session) = Session::new(LiveState::new(config.key_signature()));
    let (injected_tx, injected_rx) = crossbeam_channel::unbounded();

    let line_inputs = inputs.clone();
    thread::spawn(move || {
        if let Err(e) = run_line_input(io::stdin().lock(), &injected_tx, &line_inputs) {
            log::warn!("Standard input closed: {}", e);
        }
    });

    let echo_velocity = config.echo.then_some(config.echo_velocity);
    let reader = thread::spawn(move || {
        let mut decoder = Decoder::new(BufReader::new(device));
        run_reader(&mut decoder, &mut device_out, &injected_rx, &inputs, echo_velocity)
    });

    let frame_time = Duration::from_secs_f64(1.0 / cli.fps.max(1) as f64);
    let mut last = Instant::now();
    let mut shown: Option<FrameSnapshot> = None;

    loop {
        if reader.is_finished() {
            return match reader.join() {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(e).context("MIDI stream failed"),
                Err(_) => bail!("MIDI reader thread panicked"),
            };
        }

        let now = Instant::now();
        let frame = session.next_frame((now - last).as_secs_f32());
        last = now;

        if shown.as_ref() != Some(&frame) {
            if cli.json {
                println!("{}", frame_to_json(&frame)?);
            }
            if !cli.nogui {
                write_svg(&cli.svg, &frame)?;
            }
            shown = Some(frame);
        }

        thread::sleep(frame_time.saturating_sub(now.elapsed()));
    }
}

/// Keep asking until a device shows up in `dir`.
fn wait_for_device(dir: &Path) -> Result<PathBuf> {
    loop {
        match find_midi_device(dir) {
            Ok(path) => return Ok(path),
            Err(Error::DeviceNotFound(_)) => {
                println!("Unable to find any midi devices in {}.", dir.display());
                println!("Check connection to device, then press enter to try again, or ^C to cancel.");
                let mut line = String::new();
                if io::stdin().lock().read_line(&mut line)? == 0 {
                    bail!("no MIDI device found in {}", dir.display());
                }
            }
            Err(e) => return Err(e).context(format!("Failed to scan {}", dir.display())),
        }
    }
}

/// Replace the frame file in one step so viewers never see half a document.
fn write_svg(path: &Path, frame: &FrameSnapshot) -> Result<()> {
    let tmp = path.with_extension("svg.tmp");
    fs::write(&tmp, render_frame_to_svg(frame))
        .with_context(|| format!("Failed to write {}", tmp.display()))?;
    fs::rename(&tmp, path).with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}
