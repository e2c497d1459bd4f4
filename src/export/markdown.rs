use chrono::{DateTime, Local};

use crate::models::{Project, QueryParameters};

/// Human readable report: parameter table, then one section per project.
pub fn render_markdown(
    projects: &[Project],
    params: &QueryParameters,
    generated_at: &DateTime<Local>,
) -> Vec<u8> {
    let mut out = String::new();

    out.push_str("# Freelancer.com Projects\n\n");
    out.push_str(&format!("**Generated:** {}\n\n", generated_at.to_rfc2822()));

    out.push_str("### Search Parameters\n");
    out.push_str("| Parameter | Value |\n| --- | --- |\n");
    for (key, value) in params.iter() {
        out.push_str(&format!("| {} | {} |\n", table_cell(key), table_cell(value)));
    }
    out.push_str("\n---\n\n");

    for project in projects {
        out.push_str(&format!("## [{}]({})\n", project.title.trim(), project.link));
        out.push_str(&format!("- **Budget/Price:** {}\n", project.budget));
        out.push_str(&format!("- **Bids:** {}\n", project.bids_count));
        out.push_str(&format!("- **Time:** {}\n", project.time_left));
        out.push_str(&format!("\n> {}\n\n", project.description));
        out.push_str("---\n");
    }

    out.into_bytes()
}

/// Table rows must stay on one line.
fn table_cell(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}
