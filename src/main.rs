//! Text front end: load a batch, simulate one policy, print the results.

use std::path::PathBuf;
use std::process::ExitCode;

use tracing::warn;
use tracing_subscriber::EnvFilter;
use u_procsched::io::{read_processes, write_results};
use u_procsched::preferences::Preferences;
use u_procsched::report::{render_gantt, render_kpi, render_results, MAX_ZOOM, MIN_ZOOM};
use u_procsched::scheduler::{PolicyKind, Scheduler, SchedulerConfig, SimulationKpi};
use u_procsched::ScheduleError;

const PREFERENCES_FILE: &str = ".u-procsched.json";
const POLICY_KEY: &str = "policy";
const DEFAULT_INPUT: &str = "SampleTest.txt";
const DEFAULT_OUTPUT: &str = "Output.txt";
const DEFAULT_ZOOM: i64 = 2;

const USAGE: &str = "\
usage: u-procsched [OPTIONS] [INPUT] [OUTPUT]

  INPUT                  process file, one `name arrival burst` per line (default: SampleTest.txt)
  OUTPUT                 result file, one `name response waiting` per line (default: Output.txt)

options:
  -p, --policy NAME      fcfs | rr | spn | srt | hrrn (default: last used, else fcfs)
  -q, --quantum N        Round Robin time slice
  -s, --change-time N    Round Robin context-switch overhead
  -c, --config FILE      JSON configuration file
  -z, --zoom N           gantt chart scale, 1..=50 (default: 2)
  -h, --help             show this message";

#[derive(Debug)]
struct Args {
    policy: Option<PolicyKind>,
    quantum: Option<i64>,
    change_time: Option<i64>,
    config: Option<PathBuf>,
    zoom: i64,
    input: PathBuf,
    output: PathBuf,
}

enum Command {
    Run(Args),
    Help,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut parsed = Args {
        policy: None,
        quantum: None,
        change_time: None,
        config: None,
        zoom: DEFAULT_ZOOM,
        input: PathBuf::from(DEFAULT_INPUT),
        output: PathBuf::from(DEFAULT_OUTPUT),
    };
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-p" | "--policy" => parsed.policy = Some(value(&arg)?.parse()?),
            "-q" | "--quantum" => parsed.quantum = Some(parse_int(&arg, &value(&arg)?)?),
            "-s" | "--change-time" => {
                parsed.change_time = Some(parse_int(&arg, &value(&arg)?)?)
            }
            "-c" | "--config" => parsed.config = Some(PathBuf::from(value(&arg)?)),
            "-z" | "--zoom" => parsed.zoom = parse_int(&arg, &value(&arg)?)?,
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            _ => positional.push(arg.clone()),
        }
    }

    if !(MIN_ZOOM..=MAX_ZOOM).contains(&parsed.zoom) {
        return Err(format!("zoom must be between {MIN_ZOOM} and {MAX_ZOOM}"));
    }

    let mut positional = positional.into_iter();
    if let Some(input) = positional.next() {
        parsed.input = PathBuf::from(input);
    }
    if let Some(output) = positional.next() {
        parsed.output = PathBuf::from(output);
    }
    if let Some(extra) = positional.next() {
        return Err(format!("unexpected argument '{extra}'"));
    }

    Ok(Command::Run(parsed))
}

fn parse_int(flag: &str, value: &str) -> Result<i64, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects an integer, got '{value}'"))
}

fn run(args: Args) -> Result<(), ScheduleError> {
    let mut preferences = Preferences::open(PREFERENCES_FILE)?;

    let policy = match args.policy {
        Some(policy) => policy,
        None => match preferences.get::<PolicyKind>(POLICY_KEY) {
            Ok(stored) => stored.unwrap_or(PolicyKind::Fcfs),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable stored policy");
                PolicyKind::Fcfs
            }
        },
    };

    let mut config = match &args.config {
        Some(path) => SchedulerConfig::from_json_file(path)?,
        None => SchedulerConfig::default(),
    };
    if let Some(quantum) = args.quantum {
        config.quantum = quantum;
    }
    if let Some(change_time) = args.change_time {
        config.change_time = change_time;
    }

    let processes = read_processes(&args.input)?;
    let mut scheduler = policy.build(&config);
    for process in processes {
        scheduler.add(process);
    }

    let timeline = scheduler.timeline()?.clone();
    let results = scheduler.results()?;
    write_results(&args.output, results)?;

    println!("{} ({})", policy.description(), scheduler.name());
    println!("{}", "-".repeat(50));
    print!("{}", render_gantt(&timeline, args.zoom));
    println!("{}", "-".repeat(50));
    let results = scheduler.results()?;
    print!("{}", render_results(results));
    println!("{}", "-".repeat(50));
    print!("{}", render_kpi(&SimulationKpi::calculate(results, &timeline)));

    preferences.set(POLICY_KEY, policy)?;
    preferences.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Run(args)) => args,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(message) => {
            eprintln!("error: {message}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
