#[cfg(test)]
#[path = "../../tests/unit/commands/check_test.rs"]
mod check_test;

use super::*;
use clap::{Arg, Command};
use grader_cli::extensions::check::{check_input, write_check_result};
use grader_cli::extensions::config::{GraderConfig, create_timeout_guard, read_config};
use grader_core::utils::{create_stderr_logger, create_stdout_logger};
use std::io::BufReader;

const FORMAT_ARG_NAME: &str = "FORMAT";
const INPUT_ARG_NAME: &str = "INPUT";
const TIME_ARG_NAME: &str = "max-time";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_check_app() -> Command {
    Command::new("check")
        .about("Checks homework answers bounding each check with a timeout guard")
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies input type")
                .required(true)
                .value_parser(["independent-set", "tour"])
                .index(1),
        )
        .arg(Arg::new(INPUT_ARG_NAME).help("Sets input file which contains an answer to check").required(true).index(2))
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of the check in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to grader configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_check<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let input_format = matches.get_one::<String>(FORMAT_ARG_NAME).ok_or("input format is not specified")?;
    let input_path = matches.get_one::<String>(INPUT_ARG_NAME).ok_or("input file is not specified")?;
    let max_time = parse_int_value::<u64>(matches, TIME_ARG_NAME, "max time")?;

    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))
            .map_err(|err| format!("cannot read config file '{path}': '{err}'"))?,
        None => GraderConfig::default(),
    };

    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    // NOTE standard output is reserved for json result when no out file is given
    let logger = if out_file.is_some() { create_stdout_logger() } else { create_stderr_logger() };
    let guard = create_timeout_guard(&config, max_time, logger);

    let input = BufReader::new(open_file(input_path, "input")?);
    let result = check_input(input_format, input, &guard).map_err(|err| format!("cannot check input: '{err}'"))?;

    write_check_result(out_writer_func(out_file), &result).map_err(|err| format!("cannot write result: '{err}'"))
}
