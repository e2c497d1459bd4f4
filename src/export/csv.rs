use crate::error::ExportError;
use crate::models::{Project, QueryParameters};

pub const HEADER: [&str; 6] = ["Title", "Time Left", "Bids", "Price/AvgBid", "Link", "Description"];

/// Parameter comment lines followed by one CSV row per project.
///
/// Comment lines bypass the CSV writer so they always start with `# `.
pub fn render_csv(projects: &[Project], params: &QueryParameters) -> Result<Vec<u8>, ExportError> {
    let mut buffer = String::from("# Parameters Used:\n");
    for (key, value) in params.iter() {
        buffer.push_str(&format!("# {}: {}\n", single_line(key), single_line(value)));
    }

    let mut writer = csv::WriterBuilder::new().from_writer(buffer.into_bytes());
    writer.write_record(HEADER)?;

    for project in projects {
        let description = project.description.replace('\n', " ");
        writer.write_record([
            project.title.as_str(),
            project.time_left.as_str(),
            project.bids_count.as_str(),
            project.budget.as_str(),
            project.link.as_str(),
            description.as_str(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))
}

/// Comment lines must not spill onto a second line.
fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_newlines_are_flattened() {
        let project = Project {
            title: "Scraper".into(),
            description: "first\nsecond".into(),
            ..Project::default()
        };
        let params: QueryParameters = [("q", "rust")].into_iter().collect();

        let text = String::from_utf8(render_csv(&[project], &params).unwrap()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "# Parameters Used:",
                "# q: rust",
                "Title,Time Left,Bids,Price/AvgBid,Link,Description",
                "Scraper,,,,,first second",
            ]
        );
    }

    #[test]
    fn multi_line_parameter_stays_in_one_comment() {
        let params: QueryParameters = [("q", "rust\nscraper"), ("types", "hourly\r\nfixed")]
            .into_iter()
            .collect();

        let text = String::from_utf8(render_csv(&[], &params).unwrap()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "# Parameters Used:",
                "# q: rust scraper",
                "# types: hourly  fixed",
                "Title,Time Left,Bids,Price/AvgBid,Link,Description",
            ]
        );
    }
}
