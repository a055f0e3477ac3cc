use crate::domain::model::Street;

/// Transposes the street list into a rectangular grid: one header row of
/// street names, then one row per house index, short columns padded with
/// empty cells. Column order is street insertion order; row order is list
/// index order, so variants stay next to their base number.
pub fn build_grid(streets: &[Street]) -> Vec<Vec<String>> {
    let height = streets.iter().map(|s| s.numbers.len()).max().unwrap_or(0);

    let mut grid = Vec::with_capacity(height + 1);
    grid.push(streets.iter().map(|s| s.name.clone()).collect());

    for row in 0..height {
        grid.push(
            streets
                .iter()
                .map(|s| s.numbers.get(row).cloned().unwrap_or_default())
                .collect(),
        );
    }

    grid
}
