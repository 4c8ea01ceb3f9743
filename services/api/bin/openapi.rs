use intervue_api::router::ApiDoc;
use utoipa::OpenApi;

/// Writes the OpenAPI specification to disk. The output path defaults to
/// `openapi.json` and can be overridden with the first CLI argument.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "openapi.json".to_string());
    let spec_json = ApiDoc::openapi().to_pretty_json()?;
    std::fs::write(&path, spec_json)?;
    println!("OpenAPI specification written to {path}");
    Ok(())
}
