//! Integration tests for the daily report import over an on-disk CSSE tree
//!
//! These tests build a temporary repository layout, run the importer end to
//! end, and assert on the emitted protocol lines and run statistics.

use std::fs;
use std::io::Read;
use std::net::TcpListener;

use chrono::NaiveDate;
use tempfile::TempDir;

use csse_importer::app::models::DataPoint;
use csse_importer::app::services::carbon::CarbonEmitter;
use csse_importer::app::services::daily_report::DailyReportImporter;
use csse_importer::{Config, Error};

const GERMANY_EPOCH: i64 = 1583020800;

/// Build a CSSE checkout with the daily reports directory populated
fn csse_tree(reports: &[(&str, &str)]) -> TempDir {
    let root = tempfile::tempdir().unwrap();
    let reports_dir = root
        .path()
        .join("csse_covid_19_data")
        .join("csse_covid_19_daily_reports");
    fs::create_dir_all(&reports_dir).unwrap();
    for (filename, content) in reports {
        fs::write(reports_dir.join(filename), content).unwrap();
    }
    root
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn emitted_lines(emitter: CarbonEmitter<Vec<u8>>) -> Vec<String> {
    String::from_utf8(emitter.into_inner())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_full_scan_with_gap_and_degraded_rows() {
    let tree = csse_tree(&[
        (
            "02-29-2020.csv",
            "Province/State,Country/Region,Last Update,Confirmed,Deaths,Recovered\n\
             ,Germany,2020-03-01T00:00:00,10,1,0\n\
             Hubei,Mainland China,bad-timestamp,100,10,20\n\
             short,row,only\n",
        ),
        // 03-01-2020.csv intentionally missing
        ("03-02-2020.csv", ",Italy,3/2/2020 0:00,20,2,1\n"),
    ]);

    let config = Config::new(tree.path(), "localhost:2003");
    let importer = DailyReportImporter::new(
        config.daily_reports_dir(),
        date(2020, 2, 29),
        date(2020, 3, 2).and_hms_opt(12, 0, 0).unwrap(),
    );

    let mut emitter = CarbonEmitter::new(Vec::new());
    let stats = importer.run(&mut emitter).unwrap();

    // Scan covered Feb 29 through Mar 2; Mar 1 had no file
    assert_eq!(stats.files_processed, 2);
    assert_eq!(stats.files_missing, 1);

    // Header and short row skipped, two good rows plus one degraded row
    assert_eq!(stats.records_read, 5);
    assert_eq!(stats.records_skipped, 2);
    assert_eq!(stats.metrics_emitted, 9);
    assert_eq!(stats.timestamps_defaulted, 1);

    let lines = emitted_lines(emitter);
    assert_eq!(lines.len(), 9);

    // The degraded row was emitted at the epoch start, not dropped
    assert!(lines.contains(&"covid-19.mainland_china.hubei.confirmed 100 0".to_string()));

    // The file after the gap was still processed
    assert!(lines.iter().any(|line| line.starts_with("covid-19.italy.none.")));
}

#[test]
fn test_germany_acceptance_row() {
    let tree = csse_tree(&[("03-01-2020.csv", ",Germany,2020-03-01T00:00:00,10,1,0\n")]);

    let config = Config::new(tree.path(), "localhost:2003");
    let importer = DailyReportImporter::new(
        config.daily_reports_dir(),
        date(2020, 3, 1),
        date(2020, 3, 1).and_hms_opt(18, 0, 0).unwrap(),
    );

    let mut emitter = CarbonEmitter::new(Vec::new());
    let stats = importer.run(&mut emitter).unwrap();

    assert_eq!(stats.metrics_emitted, 3);
    assert_eq!(
        emitted_lines(emitter),
        vec![
            format!("covid-19.germany.none.confirmed 10 {GERMANY_EPOCH}"),
            format!("covid-19.germany.none.deaths 1 {GERMANY_EPOCH}"),
            format!("covid-19.germany.none.recovered 0 {GERMANY_EPOCH}"),
        ]
    );
}

#[test]
fn test_emitter_writes_over_tcp() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();

    let mut emitter = CarbonEmitter::connect(&address).unwrap();
    emitter
        .send(&DataPoint::new(
            "covid-19.germany.none.confirmed",
            "10",
            GERMANY_EPOCH,
        ))
        .unwrap();
    drop(emitter);

    let (mut socket, _) = listener.accept().unwrap();
    let mut received = String::new();
    socket.read_to_string(&mut received).unwrap();
    assert_eq!(
        received,
        format!("covid-19.germany.none.confirmed 10 {GERMANY_EPOCH}\n")
    );
}

#[test]
fn test_connect_failure_is_a_connection_error() {
    // Bind and immediately drop a listener so the port is closed
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap().to_string();
    drop(listener);

    let result = CarbonEmitter::connect(&address);
    assert!(matches!(result, Err(Error::Connection { .. })));
}
