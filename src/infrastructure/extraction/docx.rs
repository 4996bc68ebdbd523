//! DOCX format handler backed by `docx-rs`

use async_trait::async_trait;
use bytes::Bytes;
use docx_rs::{
    DocumentChild, InsertChild, MoveToChild, Paragraph, ParagraphChild, Run, RunChild,
    StructuredDataTag, StructuredDataTagChild, Table, TableCellContent, TableChild,
    TableRowChild,
};
use tracing::debug;

use crate::domain::extraction::{DocumentFormat, ExtractionError, FormatHandler, RawExtraction};

use super::blocking::run_blocking;

/// Handler for Office Open XML word processing documents
#[derive(Debug, Clone, Default)]
pub struct DocxHandler;

impl DocxHandler {
    /// Create a new DOCX handler
    pub fn new() -> Self {
        Self
    }

    /// Read the document body as raw text, one line per paragraph.
    ///
    /// Content controls and tracked insertions are read like ordinary
    /// content; tracked deletions are skipped.
    fn read_text(bytes: &[u8]) -> Result<String, ExtractionError> {
        let docx = docx_rs::read_docx(bytes)
            .map_err(|e| ExtractionError::failed(DocumentFormat::Docx, e.to_string()))?;

        let mut lines = Vec::new();

        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => lines.push(paragraph_text(paragraph)),
                DocumentChild::Table(table) => collect_table(table, &mut lines),
                DocumentChild::StructuredDataTag(sdt) => collect_block_sdt(sdt, &mut lines),
                _ => {}
            }
        }

        Ok(lines.join("\n"))
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    push_paragraph_children(&paragraph.children, &mut text);
    text
}

fn push_run(run: &Run, text: &mut String) {
    for run_child in &run.children {
        match run_child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

fn push_paragraph_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, text),
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, text),
            ParagraphChild::Insert(insert) => {
                for inserted in &insert.children {
                    if let InsertChild::Run(run) = inserted {
                        push_run(run, text);
                    }
                }
            }
            ParagraphChild::MoveTo(moved) => {
                for moved_child in &moved.children {
                    if let MoveToChild::Run(run) = moved_child {
                        push_run(run, text);
                    }
                }
            }
            ParagraphChild::StructuredDataTag(sdt) => push_inline_sdt(sdt, text),
            // Deletions, move sources, bookmarks and comment anchors
            _ => {}
        }
    }
}

/// Content control inside a paragraph; its text joins the paragraph line
fn push_inline_sdt(sdt: &StructuredDataTag, text: &mut String) {
    for child in &sdt.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run(run, text),
            StructuredDataTagChild::Paragraph(paragraph) => {
                push_paragraph_children(&paragraph.children, text)
            }
            StructuredDataTagChild::Table(table) => {
                let mut lines = Vec::new();
                collect_table(table, &mut lines);
                text.push_str(&lines.join("\n"));
            }
            StructuredDataTagChild::StructuredDataTag(nested) => push_inline_sdt(nested, text),
            _ => {}
        }
    }
}

/// Content control at block level; paragraphs and tables become lines
fn collect_block_sdt(sdt: &StructuredDataTag, lines: &mut Vec<String>) {
    let mut pending = String::new();

    for child in &sdt.children {
        match child {
            StructuredDataTagChild::Run(run) => push_run(run, &mut pending),
            StructuredDataTagChild::Paragraph(paragraph) => {
                flush(&mut pending, lines);
                lines.push(paragraph_text(paragraph));
            }
            StructuredDataTagChild::Table(table) => {
                flush(&mut pending, lines);
                collect_table(table, lines);
            }
            StructuredDataTagChild::StructuredDataTag(nested) => {
                flush(&mut pending, lines);
                collect_block_sdt(nested, lines);
            }
            _ => {}
        }
    }

    flush(&mut pending, lines);
}

fn flush(pending: &mut String, lines: &mut Vec<String>) {
    if !pending.is_empty() {
        lines.push(std::mem::take(pending));
    }
}

fn collect_table(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        #[allow(irrefutable_let_patterns)]
        let TableChild::TableRow(row) = row else {
            continue;
        };

        for cell in &row.cells {
            #[allow(irrefutable_let_patterns)]
            let TableRowChild::TableCell(cell) = cell else {
                continue;
            };

            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => {
                        lines.push(paragraph_text(paragraph))
                    }
                    TableCellContent::Table(nested) => collect_table(nested, lines),
                    TableCellContent::StructuredDataTag(sdt) => collect_block_sdt(sdt, lines),
                    _ => {}
                }
            }
        }
    }
}

#[async_trait]
impl FormatHandler for DocxHandler {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    async fn extract(&self, bytes: Bytes) -> Result<RawExtraction, ExtractionError> {
        if bytes.is_empty() {
            return Err(ExtractionError::failed(
                DocumentFormat::Docx,
                "Empty document buffer",
            ));
        }

        debug!(bytes = bytes.len(), "Reading DOCX document");

        let text = run_blocking(DocumentFormat::Docx, move || Self::read_text(&bytes)).await?;

        Ok(RawExtraction::new(text))
    }
}
