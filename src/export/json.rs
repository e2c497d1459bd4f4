use crate::error::ExportError;
use crate::models::{ExportDocument, Project, QueryParameters};

/// Pretty-printed `{"parameters": .., "projects": [..]}` document.
pub fn render_json(projects: &[Project], params: &QueryParameters) -> Result<Vec<u8>, ExportError> {
    let document = ExportDocument {
        parameters: params.clone(),
        projects: projects.to_vec(),
    };
    Ok(serde_json::to_vec_pretty(&document)?)
}
