//! Text rendering and writing of the finished matrix.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::matrix::Matrix;

/// Render the matrix as a pipe-delimited table with padded columns.
pub fn render(matrix: &Matrix) -> String {
    let mut widths: Vec<usize> = matrix.headers.iter().map(String::len).collect();
    for row in &matrix.rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let mut output = String::new();
    output.push_str(&render_row(&matrix.headers, &widths));
    output.push('\n');
    output.push_str(&render_separator(&widths));
    output.push('\n');
    for row in &matrix.rows {
        output.push_str(&render_row(row, &widths));
        output.push('\n');
    }

    output
}

/// Render the matrix and write it to `path`.
pub fn write(matrix: &Matrix, path: &Path) -> Result<()> {
    fs::write(path, render(matrix))?;
    tracing::info!("Wrote report to {}", path.display());
    Ok(())
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, width) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push_str(&format!(" {:width$} |", cell, width = width));
    }
    line
}

fn render_separator(widths: &[usize]) -> String {
    let mut line = String::from("|");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('|');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_matrix() -> Matrix {
        Matrix {
            headers: vec!["OS".to_string(), "apache".to_string(), "mysql".to_string()],
            rows: vec![
                vec![
                    "Ubuntu-22".to_string(),
                    "used".to_string(),
                    "incomplete".to_string(),
                ],
                vec![
                    "Archlinux".to_string(),
                    "not used".to_string(),
                    "used".to_string(),
                ],
            ],
        }
    }

    #[test]
    fn renders_header_separator_and_rows() {
        let output = render(&sample_matrix());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("apache"));
        assert!(lines[1].chars().all(|c| c == '|' || c == '-'));
        assert!(lines[2].contains("Ubuntu-22"));
        assert!(lines[3].contains("Archlinux"));
    }

    #[test]
    fn columns_are_padded_to_equal_width() {
        let output = render(&sample_matrix());
        let lines: Vec<_> = output.lines().collect();

        let lengths: Vec<_> = lines.iter().map(|l| l.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(&sample_matrix()), render(&sample_matrix()));
    }

    #[test]
    fn header_only_matrix_renders_without_rows() {
        let matrix = Matrix {
            headers: vec!["OS".to_string()],
            rows: Vec::new(),
        };

        let output = render(&matrix);

        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("OS"));
    }

    #[test]
    fn write_creates_the_report_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("module_matrix.txt");

        write(&sample_matrix(), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Ubuntu-22"));
        assert!(content.contains("not used"));
    }
}
