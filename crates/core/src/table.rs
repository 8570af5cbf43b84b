//! Table builder: dimensions, pagination, and per-cell style directives.

use crate::document::{Cell, TableGrid};
use crate::error::{Error, Result};
use crate::geometry::{self, clamp_to_canvas, Rect};
use crate::theme::Theme;
use crate::types::TableSpec;

/// Fixed cap on data rows per physical table.
///
/// Rows beyond the cap are silently dropped; no continuation slide is
/// generated.
pub const MAX_ROWS_PER_TABLE: usize = 10;

/// Height of one table row in inches.
const ROW_HEIGHT: f64 = 0.4;

/// Compute a styled table and its on-slide position from a table spec.
///
/// The column count is fixed from `headers`; each data row is sliced to
/// that width, with missing cells left blank. Body rows alternate shading
/// starting shaded at row 0. Returns `MalformedTable` when headers or rows
/// are missing, which callers treat as "skip the table".
pub fn build_table(spec: &TableSpec, theme: &Theme) -> Result<(Rect, TableGrid)> {
    if spec.headers.is_empty() {
        return Err(Error::MalformedTable("no headers".into()));
    }
    if spec.rows.is_empty() {
        return Err(Error::MalformedTable("no rows".into()));
    }

    let num_cols = spec.headers.len();
    let num_rows = spec.rows.len().min(MAX_ROWS_PER_TABLE) + 1;

    let width = geometry::CONTENT_MAX_WIDTH * 0.8;
    let height = ROW_HEIGHT * num_rows as f64;
    let left = geometry::SLIDE_MARGIN + (geometry::CONTENT_MAX_WIDTH - width) / 2.0;
    let top = geometry::CONTENT_TOP + 0.5;
    let rect = clamp_to_canvas(Rect::new(left, top, width, height));

    let mut rows = Vec::with_capacity(num_rows);

    let header_row: Vec<Cell> = spec
        .headers
        .iter()
        .map(|h| Cell {
            text: h.clone(),
            size_pt: theme.table_size,
            bold: true,
            color: theme.text_color,
            fill: Some(theme.title_bar_color),
        })
        .collect();
    rows.push(header_row);

    for (row_idx, row) in spec.rows.iter().take(MAX_ROWS_PER_TABLE).enumerate() {
        let shaded = row_idx % 2 == 0;
        let cells: Vec<Cell> = (0..num_cols)
            .map(|col| Cell {
                text: row.get(col).map(|v| v.as_text()).unwrap_or_default(),
                size_pt: theme.table_size,
                bold: false,
                color: theme.text_color,
                fill: shaded.then_some(theme.table_row_fill),
            })
            .collect();
        rows.push(cells);
    }

    Ok((
        rect,
        TableGrid {
            columns: num_cols,
            rows,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellValue;

    fn spec(headers: &[&str], rows: Vec<Vec<CellValue>>) -> TableSpec {
        TableSpec {
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows,
        }
    }

    fn two_cell_rows(count: usize) -> Vec<Vec<CellValue>> {
        (0..count)
            .map(|i| vec![CellValue::from(format!("r{i}").as_str()), CellValue::from(i as f64)])
            .collect()
    }

    #[test]
    fn missing_headers_or_rows_skips_table() {
        let theme = Theme::default();
        assert!(build_table(&spec(&[], two_cell_rows(2)), &theme).is_err());
        assert!(build_table(&spec(&["A"], vec![]), &theme).is_err());
    }

    #[test]
    fn row_count_is_capped_at_ten_plus_header() {
        let theme = Theme::default();
        let (_, grid) = build_table(&spec(&["A", "B"], two_cell_rows(15)), &theme).unwrap();
        assert_eq!(grid.rows.len(), MAX_ROWS_PER_TABLE + 1);
        assert_eq!(grid.columns, 2);
        // Last kept row is input row 9; row 10..14 dropped.
        assert_eq!(grid.rows.last().unwrap()[0].text, "r9");
    }

    #[test]
    fn short_table_keeps_all_rows() {
        let theme = Theme::default();
        let (_, grid) = build_table(&spec(&["A", "B"], two_cell_rows(3)), &theme).unwrap();
        assert_eq!(grid.rows.len(), 4);
    }

    #[test]
    fn rows_are_sliced_to_header_width() {
        let theme = Theme::default();
        let rows = vec![
            vec!["a".into(), "b".into(), "surplus".into()],
            vec!["only".into()],
        ];
        let (_, grid) = build_table(&spec(&["H1", "H2"], rows), &theme).unwrap();
        assert_eq!(grid.rows[1].len(), 2);
        assert_eq!(grid.rows[1][1].text, "b");
        // Missing cell is blank, not an error.
        assert_eq!(grid.rows[2][1].text, "");
    }

    #[test]
    fn shading_alternates_from_first_data_row() {
        let theme = Theme::default();
        let (_, grid) = build_table(&spec(&["A"], two_cell_rows(4)), &theme).unwrap();
        // Header always uses the header fill.
        assert_eq!(grid.rows[0][0].fill, Some(theme.title_bar_color));
        assert!(grid.rows[0][0].bold);
        // Data row 0 shaded, row 1 not, row 2 shaded again.
        assert_eq!(grid.rows[1][0].fill, Some(theme.table_row_fill));
        assert_eq!(grid.rows[2][0].fill, None);
        assert_eq!(grid.rows[3][0].fill, Some(theme.table_row_fill));
    }

    #[test]
    fn table_is_centered_in_eighty_percent_band() {
        let theme = Theme::default();
        let (rect, _) = build_table(&spec(&["A"], two_cell_rows(2)), &theme).unwrap();
        let expected_width = geometry::CONTENT_MAX_WIDTH * 0.8;
        assert!((rect.width - expected_width).abs() < 1e-9);
        let centered_left =
            geometry::SLIDE_MARGIN + (geometry::CONTENT_MAX_WIDTH - expected_width) / 2.0;
        assert!((rect.left - centered_left).abs() < 1e-9);
        assert!((rect.top - (geometry::CONTENT_TOP + 0.5)).abs() < 1e-9);
    }
}
