//! Sheet layouts.
//!
//! Maps results onto rows and columns independently of the file format.
//! The consolidated layout is:
//!
//! | columns | content |
//! |---------|---------|
//! | 0, 1 | product, quantity |
//! | 2 .. 2+N | one price column per supplier |
//! | next 2 | empty separators |
//! | last 6 | best price, best supplier, worst price, spread, spread %, band |
//!
//! The empty separator header closes the supplier block, which is what lets
//! the consolidated sheet be read back for regrouping.
//!
//! Summary cells carry spreadsheet formulas over the supplier block together
//! with their computed values. Workbooks keep the formulas so edited prices
//! update the summary; CSV gets the values.

use rust_xlsxwriter::{cell_range, cell_range_absolute, column_number_to_name, row_col_to_cell};

use pricelist_ingest::{FIRST_SUPPLIER_COLUMN, format_number};
use pricelist_model::{
    ConsolidationResult, HIGH_SPREAD_PERCENT, MEDIUM_SPREAD_PERCENT, NO_SUPPLIER_BUCKET, Product,
    ProductComparison, SeverityBand,
};

use crate::context::ReportContext;

/// Number of empty columns between the supplier block and the summary.
pub const SEPARATOR_COLUMNS: usize = 2;

/// A single output cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    /// A price, written exactly so it reads back unchanged.
    Price(f64),
    /// A derived amount, shown with two decimals.
    Amount(f64),
    /// A spreadsheet formula and the value it evaluates to now.
    Formula { formula: String, value: Box<Cell> },
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn price(value: Option<f64>) -> Self {
        value.map_or(Self::Empty, Self::Price)
    }

    fn formula(formula: String, value: Cell) -> Self {
        Self::Formula {
            formula,
            value: Box::new(value),
        }
    }

    /// Plain-text rendering, as written to CSV.
    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(value) => value.clone(),
            Self::Price(value) => format_number(*value),
            Self::Amount(value) => format!("{value:.2}"),
            Self::Formula { value, .. } => value.to_text(),
        }
    }

    /// Computed value as written into a workbook's formula cache.
    pub fn cached_result(&self) -> String {
        match self {
            Self::Amount(value) => format_number(*value),
            Self::Formula { value, .. } => value.cached_result(),
            other => other.to_text(),
        }
    }
}

/// Band highlighting rules for one column.
///
/// Each rule is a spreadsheet formula written relative to the first data
/// row; it holds when the row's product falls in the band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandHighlight {
    pub column: usize,
    pub rules: Vec<(SeverityBand, String)>,
}

/// A rendered sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub sheet_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub autofilter: bool,
    pub highlight: Option<BandHighlight>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

/// Lays out the consolidated comparison sheet.
pub fn consolidated_table(result: &ConsolidationResult, ctx: &ReportContext) -> Table {
    let labels = &ctx.labels;

    let mut headers = Vec::with_capacity(result.suppliers.len() + SEPARATOR_COLUMNS + 8);
    headers.push(labels.product.clone());
    headers.push(labels.quantity.clone());
    headers.extend(result.suppliers.iter().cloned());
    headers.extend(std::iter::repeat_n(String::new(), SEPARATOR_COLUMNS));
    headers.extend([
        labels.best_price.clone(),
        labels.best_supplier.clone(),
        labels.worst_price.clone(),
        labels.spread.clone(),
        labels.spread_percent.clone(),
        labels.band.clone(),
    ]);

    let supplier_block = SupplierBlock::new(result.suppliers.len());
    let rows = result
        .products
        .iter()
        .enumerate()
        .map(|(idx, product)| {
            let mut row = Vec::with_capacity(headers.len());
            row.push(Cell::text(&product.name));
            row.push(Cell::text(&product.quantity));
            row.extend(product.prices.iter().map(|p| Cell::price(p.price)));
            row.extend(std::iter::repeat_n(Cell::Empty, SEPARATOR_COLUMNS));
            let summary = summary_cells(product);
            match &supplier_block {
                Some(block) => row.extend(block.with_formulas(summary, (idx + 1) as u32)),
                None => row.extend(summary),
            }
            row
        })
        .collect();

    Table {
        sheet_name: ctx.consolidated_sheet.clone(),
        headers,
        rows,
        autofilter: true,
        highlight: supplier_block.as_ref().map(SupplierBlock::highlight),
    }
}

/// Summary values in column order.
fn summary_cells(product: &ProductComparison) -> [Cell; SUMMARY_COLUMNS] {
    [
        Cell::price(product.best_price),
        Cell::text(
            product
                .best_supplier
                .as_deref()
                .unwrap_or(NO_SUPPLIER_BUCKET),
        ),
        Cell::price(product.worst_price),
        product.spread.map_or(Cell::Empty, Cell::Amount),
        product.spread_percent.map_or(Cell::Empty, Cell::Amount),
        product
            .band
            .map_or(Cell::Empty, |band| Cell::text(band.as_str())),
    ]
}

/// Number of summary columns after the separators.
const SUMMARY_COLUMNS: usize = 6;

/// Position of the supplier price columns in the consolidated sheet.
struct SupplierBlock {
    first: u16,
    last: u16,
    percent: u16,
}

impl SupplierBlock {
    fn new(suppliers: usize) -> Option<Self> {
        if suppliers == 0 {
            return None;
        }
        let last = FIRST_SUPPLIER_COLUMN + suppliers - 1;
        Some(Self {
            first: FIRST_SUPPLIER_COLUMN as u16,
            last: last as u16,
            // Spread % is the fifth summary column.
            percent: (last + SEPARATOR_COLUMNS + 5) as u16,
        })
    }

    /// Wraps a row's summary values in formulas over that row's prices.
    fn with_formulas(&self, values: [Cell; SUMMARY_COLUMNS], row: u32) -> Vec<Cell> {
        let prices = cell_range(row, self.first, row, self.last);
        let names = cell_range_absolute(0, self.first, 0, self.last);
        let percent = row_col_to_cell(row, self.percent);
        let unpriced = format!("COUNT({prices})=0");

        let formulas = [
            format!(r#"IF({unpriced},"",MIN({prices}))"#),
            format!(
                r#"IF({unpriced},"{NO_SUPPLIER_BUCKET}",INDEX({names},MATCH(MIN({prices}),{prices},0)))"#
            ),
            format!(r#"IF({unpriced},"",MAX({prices}))"#),
            format!(r#"IF({unpriced},"",MAX({prices})-MIN({prices}))"#),
            format!(r#"IF({unpriced},"",100*(MAX({prices})-MIN({prices}))/MIN({prices}))"#),
            format!(
                r#"IF(COUNT({prices})<2,"",IF({percent}>{HIGH_SPREAD_PERCENT},"{}",IF({percent}>{MEDIUM_SPREAD_PERCENT},"{}","{}")))"#,
                SeverityBand::High,
                SeverityBand::Medium,
                SeverityBand::Low,
            ),
        ];
        values
            .into_iter()
            .zip(formulas)
            .map(|(value, formula)| Cell::formula(formula, value))
            .collect()
    }

    /// Band rules for the spread percentage column; a band needs two prices.
    fn highlight(&self) -> BandHighlight {
        let prices = format!(
            "${}2:${}2",
            column_number_to_name(self.first),
            column_number_to_name(self.last)
        );
        let percent = format!("${}2", column_number_to_name(self.percent));
        let priced = format!("COUNT({prices})>=2");
        BandHighlight {
            column: usize::from(self.percent),
            rules: vec![
                (
                    SeverityBand::High,
                    format!("AND({priced},{percent}>{HIGH_SPREAD_PERCENT})"),
                ),
                (
                    SeverityBand::Medium,
                    format!(
                        "AND({priced},{percent}>{MEDIUM_SPREAD_PERCENT},{percent}<={HIGH_SPREAD_PERCENT})"
                    ),
                ),
                (
                    SeverityBand::Low,
                    format!("AND({priced},{percent}<={MEDIUM_SPREAD_PERCENT})"),
                ),
            ],
        }
    }
}

/// Lays out one supplier's regrouped products.
pub fn supplier_table(bucket: &str, products: &[Product], ctx: &ReportContext) -> Table {
    let labels = &ctx.labels;
    let rows = products
        .iter()
        .map(|p| {
            vec![
                Cell::text(&p.name),
                Cell::text(&p.quantity),
                Cell::Price(p.price),
            ]
        })
        .collect();

    Table {
        sheet_name: bucket.to_string(),
        headers: vec![
            labels.product.clone(),
            labels.quantity.clone(),
            labels.price.clone(),
        ],
        rows,
        autofilter: false,
        highlight: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricelist_model::SupplierPrice;

    fn comparison(name: &str, prices: &[(&str, Option<f64>)]) -> ProductComparison {
        ProductComparison {
            name: name.to_string(),
            quantity: "1 un".to_string(),
            prices: prices
                .iter()
                .map(|(s, p)| SupplierPrice {
                    supplier: s.to_string(),
                    price: *p,
                })
                .collect(),
            best_price: None,
            best_supplier: None,
            worst_price: None,
            spread: None,
            spread_percent: None,
            band: None,
        }
    }

    #[test]
    fn test_consolidated_columns() {
        let result = ConsolidationResult {
            suppliers: vec!["A".to_string(), "B".to_string()],
            products: vec![comparison("Sal", &[("A", None), ("B", None)])],
            warnings: Vec::new(),
        };
        let table = consolidated_table(&result, &ReportContext::default());

        assert_eq!(table.column_count(), 2 + 2 + SEPARATOR_COLUMNS + 6);
        assert_eq!(table.headers[2], "A");
        assert_eq!(table.headers[4], "");
        assert_eq!(table.headers[6], "Melhor Preço");
        assert_eq!(table.rows[0].len(), table.column_count());
        assert_eq!(table.rows[0][7].to_text(), NO_SUPPLIER_BUCKET);
        assert!(table.autofilter);
    }

    #[test]
    fn test_summary_formulas_follow_supplier_block() {
        let mut arroz = comparison("Arroz", &[("A", Some(10.0)), ("B", Some(8.0))]);
        arroz.best_price = Some(8.0);
        arroz.best_supplier = Some("B".to_string());
        arroz.spread_percent = Some(25.0);
        arroz.band = Some(SeverityBand::Medium);
        let result = ConsolidationResult {
            suppliers: vec!["A".to_string(), "B".to_string()],
            products: vec![arroz],
            warnings: Vec::new(),
        };
        let table = consolidated_table(&result, &ReportContext::default());
        let row = &table.rows[0];

        let Cell::Formula { formula, value } = &row[7] else {
            panic!("best supplier should be a formula, got {:?}", row[7]);
        };
        assert_eq!(
            formula,
            r#"IF(COUNT(C2:D2)=0,"sem_fornecedor",INDEX($C$1:$D$1,MATCH(MIN(C2:D2),C2:D2,0)))"#
        );
        assert_eq!(**value, Cell::Text("B".to_string()));

        let Cell::Formula { formula, .. } = &row[11] else {
            panic!("band should be a formula, got {:?}", row[11]);
        };
        assert_eq!(
            formula,
            r#"IF(COUNT(C2:D2)<2,"",IF(K2>50,"HIGH",IF(K2>20,"MEDIUM","LOW")))"#
        );
        assert_eq!(row[6].to_text(), "8");
        assert_eq!(row[10].to_text(), "25.00");
        assert_eq!(row[11].to_text(), "MEDIUM");

        let highlight = table.highlight.expect("consolidated sheet is highlighted");
        assert_eq!(highlight.column, 10);
        assert_eq!(
            highlight.rules[0],
            (SeverityBand::High, "AND(COUNT($C2:$D2)>=2,$K2>50)".to_string())
        );
    }

    #[test]
    fn test_supplier_table_has_no_formulas() {
        let table = supplier_table("A", &[Product::new("Sal", "1 kg", 2.0)], &ReportContext::default());
        assert_eq!(table.rows[0][2], Cell::Price(2.0));
        assert!(table.highlight.is_none());
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(Cell::Price(8.5).to_text(), "8.5");
        assert_eq!(Cell::Price(10.0).to_text(), "10");
        assert_eq!(Cell::Amount(0.6000000000000014).to_text(), "0.60");
        let spread = Cell::formula("MAX(C2:D2)-MIN(C2:D2)".to_string(), Cell::Amount(2.5));
        assert_eq!(spread.to_text(), "2.50");
        assert_eq!(spread.cached_result(), "2.5");
        assert_eq!(Cell::Empty.to_text(), "");
    }
}
