//! Report configuration.
//!
//! Everything a renderer needs travels in a [`ReportContext`] passed to each
//! call; there is no shared document or style state between renders.
//!
//! # Example
//!
//! ```ignore
//! let ctx = ReportContext::new("resultado").with_format(OutputFormat::Csv);
//! let path = write_consolidated(&result, &ctx)?;
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "resultado";

/// File stem of the consolidated sheet.
pub const CONSOLIDATED_STEM: &str = "resultado_geral";

/// Sheet name of the consolidated workbook.
pub const CONSOLIDATED_SHEET: &str = "Geral";

/// File format for written reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Csv,
    #[default]
    Xlsx,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Column widths in spreadsheet character units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnWidths {
    pub name: f64,
    pub quantity: f64,
    /// Applied to every column after the quantity.
    pub value: f64,
    pub header_height: f64,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            name: 60.0,
            quantity: 8.0,
            value: 14.0,
            header_height: 30.0,
        }
    }
}

/// Header labels used by both layouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLabels {
    pub product: String,
    pub quantity: String,
    pub price: String,
    pub best_price: String,
    pub best_supplier: String,
    pub worst_price: String,
    pub spread: String,
    pub spread_percent: String,
    pub band: String,
}

impl Default for ColumnLabels {
    fn default() -> Self {
        Self {
            product: "PRODUTO".to_string(),
            quantity: "QTD".to_string(),
            price: "PREÇO".to_string(),
            best_price: "Melhor Preço".to_string(),
            best_supplier: "Fornecedor".to_string(),
            worst_price: "Pior Preço".to_string(),
            spread: "Diferença".to_string(),
            spread_percent: "% Diferença".to_string(),
            band: "Faixa".to_string(),
        }
    }
}

/// Output settings shared by every render call.
#[derive(Debug, Clone)]
pub struct ReportContext {
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub consolidated_stem: String,
    pub consolidated_sheet: String,
    pub widths: ColumnWidths,
    pub labels: ColumnLabels,
}

impl Default for ReportContext {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR)
    }
}

impl ReportContext {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            format: OutputFormat::default(),
            consolidated_stem: CONSOLIDATED_STEM.to_string(),
            consolidated_sheet: CONSOLIDATED_SHEET.to_string(),
            widths: ColumnWidths::default(),
            labels: ColumnLabels::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_consolidated_sheet(mut self, name: impl Into<String>) -> Self {
        self.consolidated_sheet = name.into();
        self
    }

    pub fn with_labels(mut self, labels: ColumnLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Path of the consolidated sheet in the current format.
    pub fn consolidated_path(&self) -> PathBuf {
        self.output_path(&self.consolidated_stem)
    }

    /// File stem for a report named `name`.
    ///
    /// Path separators are replaced so every report stays inside the output
    /// directory.
    pub fn file_stem(&self, name: &str) -> String {
        name.chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect()
    }

    /// Path of a report file named after `stem`.
    pub fn output_path(&self, stem: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.file_stem(stem), self.format.extension()))
    }

    /// Returns true when `path` is a consolidated sheet in any format.
    pub fn is_consolidated_file(&self, path: &Path) -> bool {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| stem == self.consolidated_stem)
            && pricelist_ingest::is_supported_document(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths() {
        let ctx = ReportContext::new("out");
        assert_eq!(ctx.consolidated_path(), Path::new("out/resultado_geral.xlsx"));

        let ctx = ctx.with_format(OutputFormat::Csv);
        assert_eq!(ctx.output_path("Atacado"), Path::new("out/Atacado.csv"));
        assert_eq!(ctx.output_path("a/b"), Path::new("out/a_b.csv"));
    }

    #[test]
    fn test_consolidated_file_detection() {
        let ctx = ReportContext::default();
        assert!(ctx.is_consolidated_file(Path::new("resultado/resultado_geral.xlsx")));
        assert!(ctx.is_consolidated_file(Path::new("resultado/resultado_geral.csv")));
        assert!(!ctx.is_consolidated_file(Path::new("resultado/resultado_geral.txt")));
        assert!(!ctx.is_consolidated_file(Path::new("resultado/Atacado.xlsx")));
    }
}
