//! Row storage
//!
//! One terminal line: UTF-16 code units for the visible text plus a
//! per-column style array. Each column owns a contiguous run of code
//! units - one unit for a narrow BMP character, a surrogate pair for a
//! supplementary-plane character, plus any appended zero-width combining
//! units. The trailing column of a wide character holds a single
//! [`WIDE_PLACEHOLDER`] unit so column arithmetic stays uniform.
//!
//! While every column holds exactly one unit (the overwhelmingly common
//! case), column index equals code-unit index and lookups are O(1); the
//! first surrogate pair or combining mark switches the row to run-walking.

use crate::style::Style;
use crate::wcwidth;

/// Code unit stored in the trailing column of a wide character. NUL never
/// reaches the write path (controls are dispatched by the state machine),
/// so the marker is unambiguous in row text.
pub const WIDE_PLACEHOLDER: u16 = 0x0000;

const BLANK: u16 = 0x0020;

/// One column's content, used by splice operations and reflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) units: Vec<u16>,
    pub(crate) style: Style,
}

impl Cell {
    pub(crate) fn blank(style: Style) -> Cell {
        Cell {
            units: vec![BLANK],
            style,
        }
    }

    pub(crate) fn is_placeholder(&self) -> bool {
        self.units.first() == Some(&WIDE_PLACEHOLDER)
    }

    /// Columns the cell's leading code point occupies (placeholders are 1).
    pub(crate) fn width(&self) -> usize {
        if self.is_placeholder() {
            1
        } else {
            wcwidth::width(decode_code_point(&self.units, 0).0).max(1)
        }
    }

    fn is_wide_lead(&self) -> bool {
        !self.is_placeholder() && wcwidth::width(decode_code_point(&self.units, 0).0) == 2
    }
}

/// Decode the code point starting at `index`, returning it and the number
/// of units it spans. Lone surrogates decode to U+FFFD.
fn decode_code_point(units: &[u16], index: usize) -> (char, usize) {
    let unit = units[index];
    if (0xd800..0xdc00).contains(&unit) {
        if let Some(&low) = units.get(index + 1) {
            if (0xdc00..0xe000).contains(&low) {
                let cp =
                    0x10000 + ((u32::from(unit) - 0xd800) << 10) + (u32::from(low) - 0xdc00);
                return (char::from_u32(cp).unwrap_or('\u{fffd}'), 2);
            }
        }
    }
    (char::from_u32(u32::from(unit)).unwrap_or('\u{fffd}'), 1)
}

fn encode_code_point(code_point: char) -> Vec<u16> {
    let mut buf = [0u16; 2];
    code_point.encode_utf16(&mut buf).to_vec()
}

/// One terminal line: text units, per-column styles, and the autowrap
/// continuation flag consumed by reflow and text export.
#[derive(Debug, Clone)]
pub struct Row {
    text: Vec<u16>,
    styles: Vec<Style>,
    columns: usize,
    wrapped: bool,
    /// False while every column holds exactly one code unit.
    has_complex: bool,
}

impl Row {
    /// A full-width blank row carrying `style` in every column.
    pub fn new(columns: usize, style: Style) -> Row {
        Row {
            text: vec![BLANK; columns],
            styles: vec![style; columns],
            columns,
            wrapped: false,
            has_complex: false,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Code units materially in use.
    pub fn space_used(&self) -> usize {
        self.text.len()
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrapped
    }

    pub fn set_wrapped(&mut self, wrapped: bool) {
        self.wrapped = wrapped;
    }

    /// Grow to at least `columns` logical width, padding with
    /// default-styled blanks. Idempotent; never shrinks.
    pub fn ensure_capacity(&mut self, columns: usize) {
        if columns <= self.columns {
            return;
        }
        let extra = columns - self.columns;
        self.text.extend(std::iter::repeat(BLANK).take(extra));
        self.styles
            .extend(std::iter::repeat(Style::default()).take(extra));
        self.columns = columns;
    }

    /// Code-unit index where `column`'s run starts. `column == columns`
    /// yields the end of the text.
    fn find_column_start(&self, column: usize) -> usize {
        if !self.has_complex {
            return column.min(self.text.len());
        }
        let mut index = 0;
        let mut col = 0;
        while col < column && index < self.text.len() {
            index += self.run_len(index);
            col += 1;
        }
        index
    }

    /// Units in the run starting at `start`: a placeholder, or one code
    /// point plus its zero-width continuations.
    fn run_len(&self, start: usize) -> usize {
        if self.text[start] == WIDE_PLACEHOLDER {
            return 1;
        }
        let (_, mut len) = decode_code_point(&self.text, start);
        let mut index = start + len;
        while index < self.text.len() && self.text[index] != WIDE_PLACEHOLDER {
            let (cp, n) = decode_code_point(&self.text, index);
            if wcwidth::width(cp) != 0 {
                break;
            }
            len += n;
            index += n;
        }
        len
    }

    /// The code units occupying one column.
    pub fn column_units(&self, column: usize) -> &[u16] {
        if column >= self.columns {
            return &[];
        }
        let start = self.find_column_start(column);
        if start >= self.text.len() {
            return &[];
        }
        &self.text[start..start + self.run_len(start)]
    }

    /// The primary code point at a column (placeholder columns yield NUL).
    pub fn char_at(&self, column: usize) -> char {
        let units = self.column_units(column);
        if units.is_empty() {
            return ' ';
        }
        if units[0] == WIDE_PLACEHOLDER {
            return '\u{0}';
        }
        decode_code_point(units, 0).0
    }

    /// Whether the column holds the trailing half of a wide character.
    pub fn is_wide_placeholder(&self, column: usize) -> bool {
        self.column_units(column).first() == Some(&WIDE_PLACEHOLDER)
    }

    /// Whether the column holds the leading half of a wide character.
    pub fn is_wide_char(&self, column: usize) -> bool {
        let units = self.column_units(column);
        !units.is_empty()
            && units[0] != WIDE_PLACEHOLDER
            && wcwidth::width(decode_code_point(units, 0).0) == 2
    }

    pub fn style(&self, column: usize) -> Style {
        self.styles
            .get(column)
            .copied()
            .unwrap_or_default()
    }

    pub fn set_style(&mut self, column: usize, style: Style) {
        if let Some(slot) = self.styles.get_mut(column) {
            *slot = style;
        }
    }

    /// Patch styles over `[start_column, end_column)` without touching text.
    pub fn set_style_range(&mut self, start_column: usize, end_column: usize, style: Style) {
        let end = end_column.min(self.columns);
        for slot in self.styles.iter_mut().take(end).skip(start_column) {
            *slot = style;
        }
    }

    fn replace_run(&mut self, column: usize, units: &[u16]) {
        if !self.has_complex && units.len() == 1 {
            self.text[column] = units[0];
            return;
        }
        if !self.has_complex {
            self.has_complex = true;
        }
        let start = self.find_column_start(column);
        if start >= self.text.len() {
            self.text.extend_from_slice(units);
            return;
        }
        let old_len = self.run_len_or_placeholder(start);
        self.text.splice(start..start + old_len, units.iter().copied());
    }

    fn run_len_or_placeholder(&self, start: usize) -> usize {
        if self.text[start] == WIDE_PLACEHOLDER {
            1
        } else {
            self.run_len(start)
        }
    }

    /// Write one code point at a column with a style.
    ///
    /// Width-2 code points also claim the following column with a
    /// placeholder; zero-width code points append to the column's content
    /// (or to the wide character owning the column). Overwriting either
    /// half of an existing wide character blanks the orphaned half,
    /// keeping its style. A wide code point aimed at the final column
    /// stores a blank instead - the caller wraps first when autowrap is
    /// active.
    pub fn set_char(&mut self, column: usize, code_point: char, style: Style) {
        if column >= self.columns {
            return;
        }

        let width = wcwidth::width(code_point);
        if width == 0 {
            self.append_combining(column, code_point, style);
            return;
        }

        // Overwriting the trailing half of a wide character orphans its
        // leading half.
        if self.is_wide_placeholder(column) && column > 0 {
            self.replace_run(column - 1, &[BLANK]);
        }

        let was_wide_lead = self.is_wide_char(column);

        if width == 2 {
            if column + 1 >= self.columns {
                self.replace_run(column, &[BLANK]);
                self.styles[column] = style;
                return;
            }
            // The claimed trailing column may itself hold a wide lead
            // whose own placeholder then dangles.
            if self.is_wide_char(column + 1) && column + 2 < self.columns {
                self.replace_run(column + 2, &[BLANK]);
            }
            let units = encode_code_point(code_point);
            self.replace_run(column, &units);
            self.styles[column] = style;
            self.replace_run(column + 1, &[WIDE_PLACEHOLDER]);
            self.styles[column + 1] = style;
            self.has_complex = true;
        } else {
            if was_wide_lead && column + 1 < self.columns {
                self.replace_run(column + 1, &[BLANK]);
            }
            let units = encode_code_point(code_point);
            if units.len() > 1 {
                self.has_complex = true;
            }
            self.replace_run(column, &units);
            self.styles[column] = style;
        }
    }

    /// Attach a zero-width code point to a column's run. Placeholder
    /// columns redirect to the wide character that owns them.
    fn append_combining(&mut self, column: usize, code_point: char, style: Style) {
        let target = if self.is_wide_placeholder(column) && column > 0 {
            column - 1
        } else {
            column
        };
        self.has_complex = true;
        let start = self.find_column_start(target);
        if start >= self.text.len() {
            return;
        }
        let insert_at = start + self.run_len_or_placeholder(start);
        let units = encode_code_point(code_point);
        self.text.splice(insert_at..insert_at, units.iter().copied());
        self.styles[target] = style;
    }

    /// Blank `[start_column, end_column)` with a style, mending any wide
    /// character cut at either edge.
    pub fn clear_range(&mut self, start_column: usize, end_column: usize, style: Style) {
        let start = start_column.min(self.columns);
        let end = end_column.min(self.columns);
        if start >= end {
            return;
        }
        if !self.has_complex {
            for column in start..end {
                self.text[column] = BLANK;
                self.styles[column] = style;
            }
            return;
        }
        // A wide character straddling an edge loses one half; blank the
        // surviving half too.
        if start > 0 && self.is_wide_placeholder(start) {
            self.replace_run(start - 1, &[BLANK]);
        }
        if end < self.columns && self.is_wide_placeholder(end) {
            self.replace_run(end, &[BLANK]);
        }
        for column in start..end {
            self.replace_run(column, &[BLANK]);
            self.styles[column] = style;
        }
    }

    /// Fill the whole row with blanks carrying `style`.
    pub fn clear(&mut self, style: Style) {
        self.text.clear();
        self.text.extend(std::iter::repeat(BLANK).take(self.columns));
        self.styles.clear();
        self.styles
            .extend(std::iter::repeat(style).take(self.columns));
        self.wrapped = false;
        self.has_complex = false;
    }

    /// Shift `[column, ..)` right by `count`, dropping cells off the end
    /// and filling the gap with blanks (ICH).
    pub fn insert_blanks(&mut self, column: usize, count: usize, style: Style) {
        if column >= self.columns || count == 0 {
            return;
        }
        let count = count.min(self.columns - column);
        let mut cells = self.cells();
        let tail: Vec<Cell> = cells.drain(column..).collect();
        cells.extend((0..count).map(|_| Cell::blank(style)));
        cells.extend(tail.into_iter().take(self.columns - column - count));
        Self::sanitize(&mut cells);
        self.set_cells(cells);
    }

    /// Remove `count` cells at `column`, shifting the rest left and
    /// filling the vacated tail with blanks (DCH).
    pub fn delete_chars(&mut self, column: usize, count: usize, style: Style) {
        if column >= self.columns || count == 0 {
            return;
        }
        let count = count.min(self.columns - column);
        let mut cells = self.cells();
        cells.drain(column..column + count);
        cells.extend((0..count).map(|_| Cell::blank(style)));
        Self::sanitize(&mut cells);
        self.set_cells(cells);
    }

    /// Decompose into per-column cells.
    pub(crate) fn cells(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.columns);
        if !self.has_complex {
            for column in 0..self.columns {
                cells.push(Cell {
                    units: vec![self.text[column]],
                    style: self.styles[column],
                });
            }
            return cells;
        }
        let mut index = 0;
        for column in 0..self.columns {
            if index >= self.text.len() {
                cells.push(Cell::blank(self.styles[column]));
                continue;
            }
            let len = self.run_len_or_placeholder(index);
            cells.push(Cell {
                units: self.text[index..index + len].to_vec(),
                style: self.styles[column],
            });
            index += len;
        }
        cells
    }

    /// Repair wide-character pairing: every placeholder must follow a wide
    /// lead and every wide lead must precede a placeholder.
    pub(crate) fn sanitize(cells: &mut [Cell]) {
        let n = cells.len();
        for i in 0..n {
            if cells[i].is_placeholder() {
                let paired = i > 0 && cells[i - 1].is_wide_lead();
                if !paired {
                    cells[i] = Cell::blank(cells[i].style);
                }
            } else if cells[i].is_wide_lead() {
                let paired = i + 1 < n && cells[i + 1].is_placeholder();
                if !paired {
                    cells[i] = Cell::blank(cells[i].style);
                }
            }
        }
    }

    fn set_cells(&mut self, cells: Vec<Cell>) {
        self.text.clear();
        self.styles.clear();
        let mut has_complex = false;
        for cell in &cells {
            if cell.units.len() != 1 {
                has_complex = true;
            }
            self.text.extend_from_slice(&cell.units);
            self.styles.push(cell.style);
        }
        debug_assert_eq!(self.styles.len(), self.columns);
        self.has_complex = has_complex;
    }

    /// Rebuild a row from cells, padding or truncating to `columns`.
    pub(crate) fn from_cells(columns: usize, mut cells: Vec<Cell>, wrapped: bool) -> Row {
        cells.truncate(columns);
        while cells.len() < columns {
            cells.push(Cell::blank(Style::default()));
        }
        Self::sanitize(&mut cells);
        let mut row = Row::new(columns, Style::default());
        row.set_cells(cells);
        row.wrapped = wrapped;
        row
    }

    /// Visible text over `[start_column, end_column)`: placeholders are
    /// skipped, combining marks included.
    pub fn text_range(&self, start_column: usize, end_column: usize) -> String {
        let end = end_column.min(self.columns);
        let mut out = String::new();
        let mut column = start_column;
        while column < end {
            let units = self.column_units(column);
            if units.first() != Some(&WIDE_PLACEHOLDER) {
                out.extend(
                    char::decode_utf16(units.iter().copied())
                        .map(|r| r.unwrap_or('\u{fffd}')),
                );
            }
            column += 1;
        }
        out
    }

    /// The full visible text of the row.
    pub fn text(&self) -> String {
        self.text_range(0, self.columns)
    }
}
