use anyhow::Result;
use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;
use std::process::exit;
use std::time::Duration;

// Use modules from the library
use check_proliant::core::engine::{evaluate, CheckOptions};
use check_proliant::core::rules::{RedundancyPolicy, WARN_TEMP_PCT};
use check_proliant::core::subsystem::parse_request;
use check_proliant::error::CheckError;
use check_proliant::plugin;
use check_proliant::source::HpasmcliSource;
use check_proliant::Config;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn build_cli() -> Command {
    Command::new("check_proliant")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_version_flag(true)
        .about("Nagios plugin: checks HP ProLiant hardware health via hpasmcli")
        .arg(
            Arg::new("type")
                .long("type")
                .value_name("SUBSYSTEM")
                .required(true)
                .help("What to check: fan, power-supply (ps), temperature (temp), processor (proc), memory-module (dimm), or all")
        )
        .arg(
            Arg::new("ignore-redundant")
                .long("ignore-redundant")
                .help("Do not treat non-redundant fans/power supplies as critical")
                .action(clap::ArgAction::SetTrue)
        )
        .arg(
            Arg::new("timeout")
                .long("timeout")
                .value_name("SECONDS")
                .help("Timeout for each hpasmcli query [default: 30]")
                .value_parser(clap::value_parser!(u64))
        )
        .arg(
            Arg::new("hpasmcli")
                .long("hpasmcli")
                .value_name("PATH")
                .help("Path to the hpasmcli binary (default: search PATH)")
        )
        .arg(
            Arg::new("warn-temp-pct")
                .long("warn-temp-pct")
                .value_name("PCT")
                .help("Warning-band divisor: warn once a temperature reaches threshold - threshold/PCT [default: 10, i.e. 90% of the threshold]")
                .value_parser(clap::value_parser!(u32))
        )
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version")
                .action(clap::ArgAction::Version)
        )
}

fn main() {
    check_proliant::init_logging();

    // A monitoring plugin must never exit with clap's default error code:
    // anything that prevents a check from running is UNKNOWN (3).
    let matches = match build_cli().try_get_matches() {
        Ok(matches) => matches,
        Err(err) => {
            let _ = err.print();
            exit(plugin::ServiceState::Unknown.exit_code());
        }
    };

    match run(&matches) {
        Ok(result) => plugin::print_and_exit(&result),
        Err(err) => {
            println!("UNKNOWN: {}", err);
            exit(plugin::ServiceState::Unknown.exit_code());
        }
    }
}

fn run(matches: &ArgMatches) -> Result<check_proliant::core::aggregate::OverallResult> {
    let config = Config::load().unwrap_or_default();

    let requested = parse_request(matches.get_one::<String>("type").unwrap())?;

    let redundancy = if matches.get_flag("ignore-redundant") {
        RedundancyPolicy::Ignore
    } else {
        RedundancyPolicy::Enforce
    };

    let timeout_secs = matches
        .get_one::<u64>("timeout")
        .copied()
        .or(config.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let warn_temp_pct = matches
        .get_one::<u32>("warn-temp-pct")
        .copied()
        .or(config.warn_temp_pct)
        .unwrap_or(WARN_TEMP_PCT);
    if warn_temp_pct == 0 {
        return Err(CheckError::config("--warn-temp-pct must be greater than zero").into());
    }

    let binary = matches
        .get_one::<String>("hpasmcli")
        .cloned()
        .or(config.hpasmcli_path)
        .map(PathBuf::from);

    let source = HpasmcliSource::new(binary, Duration::from_secs(timeout_secs))?;
    let opts = CheckOptions {
        redundancy,
        warn_temp_pct,
    };

    Ok(evaluate(&source, &requested, opts))
}
