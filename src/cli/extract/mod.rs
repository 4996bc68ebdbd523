//! Extract command - runs one document through the extraction service

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::config::AppConfig;
use crate::domain::ExtractionResult;
use crate::infrastructure::extraction::ExtractionService;
use crate::infrastructure::logging;

#[derive(Args, Clone, Debug)]
pub struct ExtractArgs {
    /// Document to extract (.pdf, .docx or .txt)
    pub path: PathBuf,

    /// Print the full result as JSON instead of the bare text
    #[arg(long)]
    pub json: bool,
}

/// Extract a local document and print it to stdout
pub async fn run(args: ExtractArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let result = extract_file(&ExtractionService::new(), &args.path).await?;

    println!("{}", render(&result, args.json)?);

    Ok(())
}

async fn extract_file(service: &ExtractionService, path: &Path) -> anyhow::Result<ExtractionResult> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let result = service
        .extract_text(bytes, &filename)
        .await
        .with_context(|| format!("Failed to extract {}", path.display()))?;

    Ok(result)
}

fn render(result: &ExtractionResult, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.text.clone())
    }
}
