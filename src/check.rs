use std::io::{stdin, stdout, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use thiserror::Error;
use times::entry::CandidateEntry;
use times::report::Report;
use times::verdict::Verdict;
use times::verify::verify;
use times::Date;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON file holding one entry, `-` reads from stdin
    path: PathBuf,

    /// Reference date for the future date exemption, defaults to today
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<Date>,

    /// Print the verdict as the API would return it
    #[arg(long)]
    json: bool,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read entry: {0}")]
    Input(std::io::Error),
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("Failed to encode verdict: {0}")]
    Encode(#[from] serde_json::Error),
}

fn read_input(path: &Path) -> std::io::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs_err::read(path)
    }
}

/// Validates one entry and prints the outcome. Returns whether the entry was accepted.
pub fn run(CheckArgs { path, today, json }: CheckArgs) -> Result<bool, Error> {
    let body = read_input(&path).map_err(Error::Input)?;
    let entry = CandidateEntry::from_json(&body);
    let result = verify(&entry, today.unwrap_or_else(Date::today));
    let accepted = result.is_ok();

    let mut out = stdout().lock();
    if json {
        serde_json::to_writer(&mut out, &Verdict::from(result))?;
        writeln!(out)?;
    } else {
        write!(out, "{}", Report(&result))?;
    }
    Ok(accepted)
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use clap::Parser;

    use crate::check::{run, CheckArgs, Error};

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        args: CheckArgs,
    }

    fn args(argv: &[&str]) -> CheckArgs {
        Wrapper::parse_from(std::iter::once("check").chain(argv.iter().copied())).args
    }

    fn entry_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_today() {
        assert_eq!(
            args(&["entry.json", "--today", "2024-06-15"])
                .today
                .map(|d| d.to_string()),
            Some("2024-06-15".to_owned())
        );
        assert!(Wrapper::try_parse_from(["check", "entry.json", "--today", "2024-02-30"]).is_err());
    }

    #[test]
    fn test_run() {
        let file = entry_file(concat!(
            r#"{"work_date":"2024-01-10","start_time":"09:00","#,
            r#""end_time":"18:00","break_minutes":60}"#,
        ));
        let path = file.path().to_str().unwrap();
        assert!(run(args(&[path, "--today", "2024-06-15"])).unwrap());

        let file = entry_file(r#"{"work_date":"2024-01-10","start_time":"09:00"}"#);
        let path = file.path().to_str().unwrap();
        assert!(!run(args(&[path, "--today", "2024-06-15", "--json"])).unwrap());
        assert!(run(args(&[path, "--today", "2024-01-09"])).unwrap());
    }

    #[test]
    fn test_missing_file() {
        let result = run(args(&["/nonexistent/entry.json"]));
        assert!(matches!(result, Err(Error::Input(_))));
    }
}
