use clap::{Args, Parser, Subcommand};
use rondo_dial::control::{ControlCommand, SOCKET_PATH};
use rondo_dial::{DialConfig, DialController, Frame, GestureSample, Point, RouteId, RouteTable};
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "rondoctl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Show the Rondo window
    Show,
    /// Hide the Rondo window
    Hide,
    /// Rotate the dial to a button
    Select { index: usize },
    /// Rotate to the next button
    Next,
    /// Rotate to the previous button
    Prev,
    /// Run a dial headlessly and print where it settles
    Simulate(SimulateArgs),
}

#[derive(Args, Debug, Clone)]
struct SimulateArgs {
    /// Number of buttons on the dial
    #[arg(short = 'n', long, default_value_t = 4)]
    buttons: usize,

    /// Dial ring radius in pixels
    #[arg(short, long, default_value_t = 100.0)]
    radius: f64,

    /// Horizontal drag distance in pixels
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    drag: f64,

    /// Horizontal release velocity in px/s
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    velocity: f64,

    /// Velocity retained per millisecond of decay
    #[arg(long)]
    rate: Option<f64>,

    /// Tap this button instead of dragging
    #[arg(long, conflicts_with_all = ["drag", "velocity"])]
    tap: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show => send_command(ControlCommand::Show),
        Commands::Hide => send_command(ControlCommand::Hide),
        Commands::Select { index } => send_command(ControlCommand::Select(index)),
        Commands::Next => send_command(ControlCommand::Next),
        Commands::Prev => send_command(ControlCommand::Prev),
        Commands::Simulate(args) => simulate(args),
    }
}

fn simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let mut config = DialConfig::new(args.buttons, args.radius);
    if let Some(rate) = args.rate {
        config.deceleration_rate = rate;
    }
    let interval = config.frame_interval;
    let routes: RouteTable = (0..args.buttons)
        .map(|i| RouteId::new(format!("route-{i}")))
        .collect();

    let mut dial = DialController::new(config, routes, |route: &RouteId| {
        println!("navigate -> {route}");
    })?;

    match args.tap {
        Some(index) => dial.tap(index),
        None => {
            let release = Duration::from_millis(16);
            dial.pointer_down(Point::new(0.0, -args.radius), Duration::ZERO);
            dial.pointer_move(
                &GestureSample::horizontal(args.drag, release).with_velocity(args.velocity, 0.0),
            );
            dial.pointer_up(release);
        }
    }

    let mut ticks = 0u32;
    let settled = loop {
        match dial.tick(interval) {
            Frame::Running => ticks += 1,
            Frame::Settled { index } => break Some(index),
            Frame::Stale => break None,
        }
    };

    match settled {
        Some(index) => println!(
            "settled on index {index} at {:.2} degrees after {} frames",
            dial.angle(),
            ticks + 1
        ),
        None => println!(
            "already at rest on index {} at {:.2} degrees",
            dial.selected_index(),
            dial.angle()
        ),
    }
    Ok(())
}

fn send_command(command: ControlCommand) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to rondo at {}: {}. Is rondo running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", command)?;
    Ok(())
}
