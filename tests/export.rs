use std::fs;

use chrono::{Local, TimeZone};
use flparser::error::ExportError;
use flparser::export::{
    generated_base_name, render_csv, render_json, ExportRequest, Exporter, OutputFormat,
};
use flparser::models::{ExportDocument, Project, QueryParameters};
use flparser::scrapers::{build_search_url, FilterConfig};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn sample_projects() -> Vec<Project> {
    (1..=3)
        .map(|i| Project {
            title: format!("Project {i}"),
            link: format!("https://www.freelancer.com/projects/p{i}"),
            budget: format!("${i}00 USD"),
            average_bid: format!("${i}00 USD"),
            bids_count: format!("{i} bids"),
            time_left: format!("{i} days left"),
            description: format!("Description number {i}"),
        })
        .collect()
}

fn sample_params() -> QueryParameters {
    [("types", "hourly,fixed"), ("projectSkills", "all")]
        .into_iter()
        .collect()
}

fn request(output: Option<&str>, format: Option<&str>) -> ExportRequest {
    ExportRequest::new(output.map(str::to_string), format.map(str::to_string))
}

fn files_in(dir: &TempDir) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn json_round_trips_records_and_parameters() {
    let projects = sample_projects();
    let params = sample_params();

    let bytes = render_json(&projects, &params).unwrap();
    let parsed: ExportDocument = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(parsed.projects, projects);
    assert_eq!(parsed.parameters, params);
}

#[test]
fn json_uses_record_field_names_and_two_space_indent() {
    let bytes = render_json(&sample_projects()[..1], &sample_params()).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.starts_with("{\n  \"parameters\": {\n    \"types\": \"hourly,fixed\","));
    for key in [
        "title",
        "link",
        "budget",
        "average_bid",
        "bids_count",
        "time_left",
        "description",
    ] {
        assert!(text.contains(&format!("\"{key}\"")), "missing {key}");
    }
}

#[test]
fn default_dispatch_writes_markdown_and_csv() {
    let temp = TempDir::new().unwrap();
    let now = Local.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap();
    let projects = sample_projects();

    let report = Exporter::new(temp.path()).dispatch(
        &projects,
        &sample_params(),
        &ExportRequest::default(),
        &now,
    );

    assert!(report.is_complete());
    let base = generated_base_name(&now);
    let names: Vec<_> = report.written.iter().map(|w| w.filename.clone()).collect();
    assert_eq!(names, vec![format!("{base}.md"), format!("{base}.csv")]);
    assert_eq!(files_in(&temp), vec![format!("{base}.csv"), format!("{base}.md")]);

    let markdown = fs::read_to_string(temp.path().join(format!("{base}.md"))).unwrap();
    let csv = fs::read_to_string(temp.path().join(format!("{base}.csv"))).unwrap();
    for project in &projects {
        assert!(markdown.contains(&format!("## [{}]({})", project.title, project.link)));
        assert!(csv.contains(&project.link));
    }
}

#[test]
fn explicit_json_filename_uses_json_serializer() {
    let temp = TempDir::new().unwrap();
    let report = Exporter::new(temp.path()).dispatch(
        &sample_projects(),
        &sample_params(),
        &request(Some("out.json"), None),
        &Local::now(),
    );

    assert_eq!(report.written.len(), 1);
    assert_eq!(report.written[0].format, OutputFormat::Json);
    assert_eq!(files_in(&temp), vec!["out.json"]);

    let parsed: ExportDocument =
        serde_json::from_slice(&fs::read(temp.path().join("out.json")).unwrap()).unwrap();
    assert_eq!(parsed.projects, sample_projects());
}

#[test]
fn bare_filename_with_format_gets_extension() {
    let temp = TempDir::new().unwrap();
    let report = Exporter::new(temp.path()).dispatch(
        &sample_projects(),
        &sample_params(),
        &request(Some("out"), Some("json")),
        &Local::now(),
    );

    assert!(report.is_complete());
    assert_eq!(files_in(&temp), vec!["out.json"]);
}

#[test]
fn bare_filename_defaults_to_csv() {
    let temp = TempDir::new().unwrap();
    Exporter::new(temp.path()).dispatch(
        &sample_projects(),
        &sample_params(),
        &request(Some("out"), None),
        &Local::now(),
    );

    assert_eq!(files_in(&temp), vec!["out.csv"]);
    let csv = fs::read_to_string(temp.path().join("out.csv")).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "# Parameters Used:");
    assert_eq!(lines[1], "# types: hourly,fixed");
    assert_eq!(lines[2], "# projectSkills: all");
    assert_eq!(lines[3], "Title,Time Left,Bids,Price/AvgBid,Link,Description");
    assert_eq!(
        lines[4],
        "Project 1,1 days left,1 bids,$100 USD,https://www.freelancer.com/projects/p1,Description number 1"
    );
    assert_eq!(lines.len(), 7);
}

#[test]
fn unknown_format_is_reported_and_skipped() {
    let temp = TempDir::new().unwrap();
    let report = Exporter::new(temp.path()).dispatch(
        &sample_projects(),
        &sample_params(),
        &request(None, Some("xml")),
        &Local::now(),
    );

    assert!(report.written.is_empty());
    assert_eq!(report.failed.len(), 1);
    assert!(matches!(
        report.failed[0].error,
        ExportError::UnrecognizedFormat(ref f) if f == "xml"
    ));
    assert!(files_in(&temp).is_empty());
}

#[test]
fn write_failure_does_not_stop_other_formats() {
    let temp = TempDir::new().unwrap();
    let now = Local.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap();
    let base = generated_base_name(&now);
    // A directory squatting on the Markdown target makes that write fail.
    fs::create_dir(temp.path().join(format!("{base}.md"))).unwrap();

    let report = Exporter::new(temp.path()).dispatch(
        &sample_projects(),
        &sample_params(),
        &ExportRequest::default(),
        &now,
    );

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].filename, format!("{base}.md"));
    assert!(matches!(report.failed[0].error, ExportError::Io { .. }));
    assert_eq!(report.written.len(), 1);
    assert_eq!(report.written[0].format, OutputFormat::Csv);
    assert!(temp.path().join(format!("{base}.csv")).is_file());
}

#[test]
fn multi_line_query_keeps_csv_preamble_commented() {
    let config = FilterConfig {
        query: "rust\nscraper".into(),
        ..FilterConfig::default()
    };
    let params = build_search_url(&config).parameters;

    let csv = String::from_utf8(render_csv(&sample_projects(), &params).unwrap()).unwrap();
    let preamble: Vec<_> = csv
        .lines()
        .take_while(|line| !line.starts_with("Title,"))
        .collect();

    assert_eq!(preamble.len(), params.len() + 1);
    assert!(preamble.iter().all(|line| line.starts_with("# ")), "{preamble:?}");
    assert!(preamble.contains(&"# q: rust scraper"));
}
