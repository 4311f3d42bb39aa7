use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use stoplight::config::LightConfig;
use stoplight::control::{Command, Controller, Reply, MENU};
use stoplight::machine::{RestartPolicy, ShutdownPolicy};
use stoplight::sink::{LineSink, WriterSink};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Interactive traffic light simulation.
#[derive(Debug, Parser)]
#[command(name = "stoplight", version, about)]
struct Args {
    /// Light name shown in every observation line
    #[arg(long)]
    name: Option<String>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Length of one time unit in milliseconds
    #[arg(long)]
    time_unit_ms: Option<u64>,

    /// Let stop interrupt the current wait instead of finishing it
    #[arg(long)]
    interruptible: bool,

    /// Re-enter at RED on every start instead of resuming
    #[arg(long)]
    reset_on_restart: bool,

    /// Verbose lifecycle logging on stderr
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn into_config(self) -> anyhow::Result<LightConfig> {
        let mut config = match &self.config {
            Some(path) => LightConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => LightConfig::default(),
        };

        if let Some(name) = self.name {
            config.name = name;
        }
        if let Some(ms) = self.time_unit_ms {
            config.time_unit_ms = ms;
        }
        if self.interruptible {
            config.shutdown = ShutdownPolicy::Interruptible;
        }
        if self.reset_on_restart {
            config.restart = RestartPolicy::Reset;
        }
        Ok(config)
    }
}

fn init_tracing(debug: bool) {
    let default_directive = if debug { "stoplight=debug" } else { "stoplight=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)))
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let config = args.into_config()?;
    info!(light = %config.name, unit_ms = config.time_unit_ms, "starting simulation");

    let console = Arc::new(WriterSink::stdout());
    let machine = config
        .into_machine(console.clone())
        .context("building traffic light")?;
    let mut controller = Controller::new(machine);

    let mut input = io::stdin().lock().lines();
    loop {
        console.write_text(MENU)?;

        let command = match input.next() {
            None => Command::Exit,
            Some(line) => match line?.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    warn!(input = %err.0, "unrecognised command");
                    console.write_line(&err.to_string())?;
                    continue;
                }
            },
        };

        let reply = controller.handle(command)?;
        if let Some(message) = reply.message() {
            console.write_line(message)?;
        }
        if reply == Reply::Exit {
            break;
        }
    }

    info!("simulation exited");
    Ok(())
}
