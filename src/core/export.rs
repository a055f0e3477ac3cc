use rust_xlsxwriter::Workbook;

use crate::domain::ports::Storage;
use crate::utils::error::Result;
use crate::utils::slug::slugify;

pub const FILE_EXTENSION: &str = ".xlsx";
const SHEET_NAME: &str = "data";
const FALLBACK_SLUG: &str = "territory";

/// Serializes a grid into an xlsx workbook with a single `data` sheet. The
/// header row is written as plain string cells like every other row.
pub fn grid_to_xlsx(grid: &[Vec<String>]) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (row, cells) in grid.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            sheet.write_string(row as u32, col as u16, cell)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Slugified territory name plus the fixed extension. An all-symbols or empty
/// name would slug to nothing, so it falls back to a usable stem.
pub fn export_filename(territory_name: &str) -> String {
    let slug = slugify(territory_name);
    if slug.is_empty() {
        format!("{FALLBACK_SLUG}{FILE_EXTENSION}")
    } else {
        format!("{slug}{FILE_EXTENSION}")
    }
}

/// Writes the grid through the storage port and returns the filename used.
pub fn export_to_file<S: Storage>(
    storage: &S,
    grid: &[Vec<String>],
    territory_name: &str,
) -> Result<String> {
    let filename = export_filename(territory_name);
    tracing::debug!(filename = %filename, rows = grid.len(), "serializing export grid");
    let buffer = grid_to_xlsx(grid)?;
    storage.write_file(&filename, &buffer)?;
    Ok(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_slugs_territory_name() {
        assert_eq!(export_filename("Nord Straße 1"), "nord-strasse-1.xlsx");
    }

    #[test]
    fn test_export_filename_falls_back_when_empty() {
        assert_eq!(export_filename(""), "territory.xlsx");
        assert_eq!(export_filename("!!!"), "territory.xlsx");
    }

    #[test]
    fn test_grid_to_xlsx_produces_zip_container() {
        let grid = vec![
            vec!["A".to_string(), "B".to_string()],
            vec!["1".to_string(), String::new()],
        ];
        let buffer = grid_to_xlsx(&grid).unwrap();
        // xlsx is a zip archive; check the magic bytes.
        assert_eq!(&buffer[..2], b"PK");
    }
}
