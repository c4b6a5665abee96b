use std::path::Path;
use std::str::FromStr;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{FiligreeError, FiligreeResult};
use crate::render::FrameRGBA;

/// Grid edge length of a fresh editor.
pub const DEFAULT_GRID_SIZE: u32 = 10;
/// Smallest and largest allowed grid edge length.
pub const GRID_SIZE_RANGE: (u32, u32) = (1, 64);

/// Editing tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Turn cells on.
    Pen,
    /// Turn cells off.
    Eraser,
    /// Flip a connected region.
    Fill,
}

impl FromStr for Tool {
    type Err = FiligreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pen" => Ok(Tool::Pen),
            "eraser" | "erase" => Ok(Tool::Eraser),
            "fill" => Ok(Tool::Fill),
            other => Err(FiligreeError::validation(format!("unknown tool '{other}'"))),
        }
    }
}

/// Mirror axes applied on every cell write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Symmetry {
    /// Mirror across the horizontal axis: row `y` pairs with `n - 1 - y`.
    pub horizontal: bool,
    /// Mirror across the vertical axis: column `x` pairs with `n - 1 - x`.
    pub vertical: bool,
    /// Point mirror through the center.
    pub diagonal: bool,
}

impl Symmetry {
    /// All three mirrors on.
    pub const ALL: Symmetry = Symmetry {
        horizontal: true,
        vertical: true,
        diagonal: true,
    };

    /// Cells written together with `(x, y)` on an `n × n` grid, the original first.
    ///
    /// Duplicates are possible on the center row/column.
    pub fn orbit(self, x: u32, y: u32, n: u32) -> Vec<(u32, u32)> {
        let (mx, my) = (n - 1 - x, n - 1 - y);
        let mut out = vec![(x, y)];
        if self.horizontal {
            out.push((x, my));
        }
        if self.vertical {
            out.push((mx, y));
        }
        if self.diagonal {
            out.push((mx, my));
        }
        if self.horizontal && self.vertical {
            out.push((x, my));
            out.push((mx, y));
        }
        out
    }
}

/// Square on/off sketch grid with mirror-symmetric editing.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "GridFile", into = "GridFile")]
pub struct GridState {
    size: u32,
    cells: Vec<bool>,
    /// Mirrors applied by [`GridState::set_cell`].
    pub symmetry: Symmetry,
}

impl Default for GridState {
    fn default() -> Self {
        Self::blank(DEFAULT_GRID_SIZE, Symmetry::default())
    }
}

impl GridState {
    /// Empty `size × size` grid.
    pub fn new(size: u32) -> FiligreeResult<Self> {
        check_size(size)?;
        Ok(Self::blank(size, Symmetry::default()))
    }

    fn blank(size: u32, symmetry: Symmetry) -> Self {
        Self {
            size,
            cells: vec![false; (size * size) as usize],
            symmetry,
        }
    }

    /// Edge length.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of filled cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Whether `(x, y)` is filled; out-of-range cells read as empty.
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.size && y < self.size && self.cells[self.index(x, y)]
    }

    /// Set `(x, y)` and its mirror images.
    pub fn set_cell(&mut self, x: u32, y: u32, value: bool) -> FiligreeResult<()> {
        self.check(x, y)?;
        for (cx, cy) in self.symmetry.orbit(x, y, self.size) {
            let i = self.index(cx, cy);
            self.cells[i] = value;
        }
        Ok(())
    }

    /// Set the 4-connected region sharing `(x, y)`'s state to `value`. Mirrors are not applied.
    pub fn flood_fill(&mut self, x: u32, y: u32, value: bool) -> FiligreeResult<()> {
        self.check(x, y)?;
        let target = self.cells[self.index(x, y)];
        if target == value {
            return Ok(());
        }

        let n = self.size;
        let mut stack = vec![(x, y)];
        while let Some((cx, cy)) = stack.pop() {
            let i = self.index(cx, cy);
            if self.cells[i] != target {
                continue;
            }
            self.cells[i] = value;
            if cx + 1 < n {
                stack.push((cx + 1, cy));
            }
            if cx > 0 {
                stack.push((cx - 1, cy));
            }
            if cy + 1 < n {
                stack.push((cx, cy + 1));
            }
            if cy > 0 {
                stack.push((cx, cy - 1));
            }
        }
        Ok(())
    }

    /// A click with `tool` on `(x, y)`.
    pub fn apply(&mut self, tool: Tool, x: u32, y: u32) -> FiligreeResult<()> {
        match tool {
            Tool::Pen => self.set_cell(x, y, true),
            Tool::Eraser => self.set_cell(x, y, false),
            Tool::Fill => {
                self.check(x, y)?;
                let current = self.get(x, y);
                self.flood_fill(x, y, !current)
            }
        }
    }

    /// Pointer moved onto `(x, y)` with the button held. Fill ignores drags.
    pub fn drag(&mut self, tool: Tool, x: u32, y: u32) -> FiligreeResult<()> {
        match tool {
            Tool::Pen | Tool::Eraser => self.apply(tool, x, y),
            Tool::Fill => Ok(()),
        }
    }

    /// Empty every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Replace the grid with an empty one of the new size. Symmetry settings are kept.
    pub fn resize(&mut self, size: u32) -> FiligreeResult<()> {
        check_size(size)?;
        *self = Self::blank(size, self.symmetry);
        Ok(())
    }

    /// Rasterize: filled cells in `ink`, the rest transparent.
    pub fn to_rgba(&self, cell_px: u32, ink: Rgb8) -> FiligreeResult<FrameRGBA> {
        let side = self.pixel_side(cell_px)?;
        let mut data = vec![0u8; side as usize * side as usize * 4];
        let ink = ink.to_rgba8();
        for py in 0..side {
            for px in 0..side {
                if self.cells[self.index(px / cell_px, py / cell_px)] {
                    let o = (py as usize * side as usize + px as usize) * 4;
                    data[o..o + 4].copy_from_slice(&ink);
                }
            }
        }
        Ok(FrameRGBA {
            width: side,
            height: side,
            data,
            premultiplied: true,
        })
    }

    /// SVG document with one `<rect>` per filled cell.
    pub fn to_svg(&self, cell_px: u32, ink: Rgb8) -> FiligreeResult<String> {
        let side = self.pixel_side(cell_px)?;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{side}" height="{side}" viewBox="0 0 {side} {side}">"#
        );
        svg.push('\n');
        for y in 0..self.size {
            for x in 0..self.size {
                if self.cells[self.index(x, y)] {
                    svg.push_str(&format!(
                        r#"  <rect x="{}" y="{}" width="{cell_px}" height="{cell_px}" fill="{ink}"/>"#,
                        x * cell_px,
                        y * cell_px,
                    ));
                    svg.push('\n');
                }
            }
        }
        svg.push_str("</svg>\n");
        Ok(svg)
    }

    /// Parse a saved design.
    pub fn from_json(s: &str) -> FiligreeResult<Self> {
        serde_json::from_str(s).map_err(|e| FiligreeError::serde(format!("parse grid JSON: {e}")))
    }

    /// Read a saved design from disk.
    pub fn from_path(path: impl AsRef<Path>) -> FiligreeResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path).map_err(|e| {
            FiligreeError::validation(format!("open grid '{}': {e}", path.display()))
        })?;
        Self::from_json(&s)
    }

    /// Pretty JSON form: one string per row, `#` for filled cells.
    pub fn to_json_pretty(&self) -> FiligreeResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| FiligreeError::serde(format!("serialize grid: {e}")))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size as usize + x as usize
    }

    fn check(&self, x: u32, y: u32) -> FiligreeResult<()> {
        if x >= self.size || y >= self.size {
            return Err(FiligreeError::validation(format!(
                "cell ({x}, {y}) is outside the {n}x{n} grid",
                n = self.size
            )));
        }
        Ok(())
    }

    fn pixel_side(&self, cell_px: u32) -> FiligreeResult<u32> {
        self.size
            .checked_mul(cell_px)
            .filter(|&s| s > 0 && s <= 16_384)
            .ok_or_else(|| {
                FiligreeError::validation(format!(
                    "cell size {cell_px}px is unusable for a {n}x{n} grid",
                    n = self.size
                ))
            })
    }
}

fn check_size(size: u32) -> FiligreeResult<()> {
    let (lo, hi) = GRID_SIZE_RANGE;
    if !(lo..=hi).contains(&size) {
        return Err(FiligreeError::validation(format!(
            "grid size must be in [{lo}, {hi}], got {size}"
        )));
    }
    Ok(())
}

#[derive(Clone, serde::Serialize, serde::Deserialize)]
struct GridFile {
    #[serde(default)]
    symmetry: Symmetry,
    rows: Vec<String>,
}

impl From<GridState> for GridFile {
    fn from(grid: GridState) -> Self {
        let rows = grid
            .cells
            .chunks(grid.size as usize)
            .map(|row| row.iter().map(|&c| if c { '#' } else { '.' }).collect())
            .collect();
        Self {
            symmetry: grid.symmetry,
            rows,
        }
    }
}

impl TryFrom<GridFile> for GridState {
    type Error = FiligreeError;

    fn try_from(file: GridFile) -> Result<Self, Self::Error> {
        let size = u32::try_from(file.rows.len())
            .map_err(|_| FiligreeError::validation("grid has too many rows"))?;
        check_size(size)?;

        let mut cells = Vec::with_capacity((size * size) as usize);
        for (y, row) in file.rows.iter().enumerate() {
            let before = cells.len();
            for ch in row.chars() {
                match ch {
                    '#' => cells.push(true),
                    '.' => cells.push(false),
                    other => {
                        return Err(FiligreeError::validation(format!(
                            "row {y}: unexpected cell '{other}' (use '#' or '.')"
                        )));
                    }
                }
            }
            if cells.len() - before != size as usize {
                return Err(FiligreeError::validation(format!(
                    "row {y} has {} cells, expected {size}",
                    cells.len() - before
                )));
            }
        }
        Ok(Self {
            size,
            cells,
            symmetry: file.symmetry,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/symmetry/grid.rs"]
mod tests;
