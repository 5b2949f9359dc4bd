use authn_time::{
    parse_duration_string, unix_nano_to_win32_epoch, win32_epoch_to_time, Unit,
};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::UNIX_EPOCH;

const USAGE: &str = "usage:
  authn-time duration <string>
  authn-time to-win32 <unix-nanos>
  authn-time from-win32 <ticks>
  authn-time now";

fn parse_arg<T>(name: &str, input: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    input
        .parse()
        .map_err(|e| log::error!("invalid {name} {input:?}: {e}"))
        .ok()
}

fn run(command: &str, arg: Option<&str>) -> Option<authn_time::Result<()>> {
    let result = match (command, arg) {
        ("duration", Some(input)) => parse_duration_string(input).map(|duration| {
            println!("{}s ({}ns)", duration.as_secs(), duration.as_nanos());
        }),
        ("to-win32", Some(input)) => {
            let nanos = parse_arg::<i64>("unix nanoseconds", input)?;
            println!("{}", unix_nano_to_win32_epoch(nanos));
            Ok(())
        }
        ("from-win32", Some(input)) => {
            let ticks = parse_arg::<u64>("win32 epoch", input)?;
            win32_epoch_to_time(ticks).map(|time| {
                let secs = time
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or_default();
                println!("{secs}");
            })
        }
        ("now", None) => {
            let now = authn_time::timestamp();
            let nanos = i64::try_from(now)
                .map_err(|e| log::error!("current time {now} is out of range: {e}"))
                .ok()?;
            println!("{now} {}", unix_nano_to_win32_epoch(nanos));
            Ok(())
        }
        _ => return None,
    };

    Some(result)
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_module("authn_time", log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();

    let Some(command) = args.first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    if args.len() > 2 {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    log::debug!("running {command:?} with {:?}", args.get(1));

    match run(command, args.get(1).map(String::as_str)) {
        Some(Ok(())) => ExitCode::SUCCESS,
        Some(Err(e)) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
        None => {
            eprintln!("{USAGE}");
            eprintln!("duration units: {}", Unit::SYMBOLS);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn parse_arg_valid() {
        assert_eq!(Some(-100), parse_arg::<i64>("unix nanoseconds", "-100"));
        assert_eq!(Some(0), parse_arg::<u64>("win32 epoch", "0"));
    }

    #[test]
    fn parse_arg_invalid() {
        assert_eq!(None, parse_arg::<i64>("unix nanoseconds", "1.5"));
        assert_eq!(None, parse_arg::<u64>("win32 epoch", "-1"));
    }

    #[test]
    fn run_rejects_bad_number() {
        assert!(run("to-win32", Some("abc")).is_none());
        assert!(run("from-win32", Some("")).is_none());
        assert!(run("to-win32", Some("0")).is_some());
    }
}
