use std::path::Path;
use std::time::Duration;

use crate::input::IStr;

use super::error::pos_from;
use super::{check, error_context, LineCol, Mode, Opts, Output, OutputKind, Report};

#[test]
fn test_parse_opts() {
    let opts = Opts::parse_from([
        "--bench",
        "--count",
        "10",
        "--warmup",
        "0",
        "--input",
        "puzzle.txt",
        "--json",
        "--",
        "ignored",
    ])
    .unwrap();

    assert_eq!(opts.mode, Mode::Bench);
    assert_eq!(opts.count, Some(10));
    assert_eq!(opts.warmup, Duration::ZERO);
    assert_eq!(opts.time_limit, Duration::from_millis(400));
    assert_eq!(opts.input(), Some(Path::new("puzzle.txt")));
    assert!(opts.json);
    assert!(!opts.verbose);
}

#[test]
fn test_parse_opts_errors() {
    assert!(Opts::parse_from(["--bench", "--bench"]).is_err());
    assert!(Opts::parse_from(["--warmup"]).is_err());
    assert!(Opts::parse_from(["--time-limit", "soon"]).is_err());
    assert!(Opts::parse_from(["--count", "-1"]).is_err());
    assert!(Opts::parse_from(["--frobnicate"]).is_err());
}

#[test]
fn test_report() {
    let samples = (1..=100).map(Duration::from_millis).collect::<Vec<_>>();
    let report = Report::from_sorted(&samples);

    assert_eq!(report.count, 100);
    assert_eq!(report.min, Duration::from_millis(1));
    assert_eq!(report.max, Duration::from_millis(100));
    assert_eq!(report.p50, Duration::from_millis(51));
    assert_eq!(report.p99, Duration::from_millis(100));
    assert_eq!(report.avg, Duration::from_micros(50500));

    let empty = Report::from_sorted(&[]);
    assert_eq!(empty.count, 0);
    assert_eq!(empty.avg, Duration::ZERO);
    assert_eq!(empty.p99, Duration::ZERO);

    let mut total = Report::default();
    total += &report;
    total += &report;
    assert_eq!(total.count, 200);
    assert_eq!(total.max, Duration::from_millis(200));
}

#[test]
fn test_pos_from() {
    let data = b"abc\ndef ghi\n";

    assert_eq!(pos_from(data, 0..0), LineCol::new(0, 0, 0));
    assert_eq!(pos_from(data, 8..11), LineCol::new(1, 4, 7));
    assert_eq!(pos_from(data, 100..101), LineCol::new(0, 0, 0));
    assert_eq!(LineCol::new(1, 4, 7).to_string(), "2:4-7");
}

#[test]
fn test_error_context() {
    let mut input = IStr::new(b"1 2\n3 x\n");
    let data = input;

    input.line::<(u32, u32)>().unwrap();
    let error = input.line::<(u32, u32)>().unwrap_err();

    let error = error_context("inputs/test.txt", data, error);
    assert_eq!(error.to_string(), "inputs/test.txt:2:2-3");
}

#[test]
fn test_check() {
    assert!(check(&(1u32, 2u64), Some(&(1, 2))).is_ok());
    assert!(check(&(1u32, 2u64), None).is_ok());

    let error = check(&(1u32, 2u64), Some(&(1, 3))).unwrap_err();
    assert_eq!(error.to_string(), "(1, 2) (value) != (1, 3) (expected)");
}

#[test]
fn test_json_output() {
    let mut out = Vec::new();
    let mut o = Output::new(&mut out, OutputKind::Json);
    o.result("inputs/d03.txt", &(4361u64, 467835u64)).unwrap();
    o.error("boom").unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        concat!(
            "{\"type\":\"result\",\"data\":{\"path\":\"inputs/d03.txt\",\"output\":\"(4361, 467835)\"}}\n",
            "{\"type\":\"message\",\"data\":{\"level\":\"error\",\"text\":\"boom\"}}\n",
        )
    );
}

#[test]
fn test_human_output() {
    let mut out = Vec::new();
    let mut o = Output::new(&mut out, OutputKind::Human);
    o.result("inputs/d01.txt", &(1u32, 2u32)).unwrap();
    o.info("warming up").unwrap();
    o.report("inputs/d01.txt", &Report::default()).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        concat!(
            "inputs/d01.txt: (1, 2)\n",
            "info: warming up\n",
            "inputs/d01.txt: count: 0, min: 0ns, max: 0ns, avg: 0ns, 50th: 0ns, 95th: 0ns, 99th: 0ns\n",
        )
    );
}
