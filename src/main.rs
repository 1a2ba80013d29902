use std::error::Error;
use std::process::{Command, ExitStatus};

use clap::Parser;

use elapsed_timer::{ElapsedTimer, InfoLogger, Style};

#[derive(Parser, Debug)]
#[command(version, about = "Run a command and report how long it took.")]
struct Cli {
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Only log reports that took at least this many seconds."
    )]
    min_seconds: f64,

    #[arg(long, help = "Report raw seconds instead of the human readable form.")]
    seconds: bool,

    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "The command to run."
    )]
    command: Vec<String>,
}

fn main() {
    simple_logger::init_with_level(log::Level::Info).unwrap();

    match run() {
        Ok(status) => std::process::exit(status.code().unwrap_or(1)),
        Err(err) => {
            log::error!("Error: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<ExitStatus, Box<dyn Error>> {
    let args = Cli::parse();
    let style = if args.seconds {
        Style::Seconds
    } else {
        Style::Pretty
    };
    let program = &args.command[0];

    // The timer reports the total run time when it goes out of scope,
    // before the exit code is handed to std::process::exit above.
    let mut timer = ElapsedTimer::with_logger(
        args.command.join(" "),
        args.min_seconds,
        InfoLogger::new(style),
    );
    let mut child = Command::new(program).args(&args.command[1..]).spawn()?;
    timer.report_fmt(format_args!("spawned {program}"));
    let status = child.wait()?;
    Ok(status)
}
