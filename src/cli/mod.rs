//! CLI module for doc-intake
//!
//! - `serve`: run the HTTP API
//! - `extract`: extract text from a local file

pub mod extract;
pub mod serve;

use clap::{Parser, Subcommand};

/// Document ingestion and text extraction
#[derive(Parser)]
#[command(name = "doc-intake")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Extract text from a local document and print it
    Extract(extract::ExtractArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["doc-intake", "serve"]).unwrap();
        assert!(matches!(cli.command, Command::Serve));
    }

    #[test]
    fn test_parse_extract_with_json() {
        let cli = Cli::try_parse_from(["doc-intake", "extract", "cv.pdf", "--json"]).unwrap();

        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.path, std::path::PathBuf::from("cv.pdf"));
                assert!(args.json);
            }
            Command::Serve => panic!("expected extract"),
        }
    }

    #[test]
    fn test_extract_requires_path() {
        assert!(Cli::try_parse_from(["doc-intake", "extract"]).is_err());
    }
}
