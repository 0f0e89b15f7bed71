// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

/// A table of `data`, one row per item and one cell per column.
pub struct Table<'a, S, C, T> {
    style: S,
    columns: &'a [C],
    data: &'a [T],
}

impl<'a, S: TableStyle, C: TableColumn<T>, T> Table<'a, S, C, T> {
    pub fn new(style: S, columns: &'a [C], data: &'a [T]) -> Self {
        Self {
            style,
            columns,
            data,
        }
    }
}

impl<S: TableStyle, C: TableColumn<T>, T> fmt::Display for Table<'_, S, C, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<_> = self.columns.iter().map(|col| col.name()).collect();
        let rows: Vec<Vec<_>> = self
            .data
            .iter()
            .map(|row| self.columns.iter().map(|col| col.format(row)).collect())
            .collect();
        let directions: Vec<_> = self
            .columns
            .iter()
            .map(|col| col.padding_direction())
            .collect();
        self.style.write(f, &header, &directions, &rows)
    }
}

pub trait TableColumn<T> {
    fn name(&self) -> Cow<'_, str>;
    fn format<'a>(&self, data: &'a T) -> Cow<'a, str>;

    fn padding_direction(&self) -> PaddingDirection {
        PaddingDirection::Left
    }
}

pub trait TableStyle {
    fn write(
        &self,
        f: &mut fmt::Formatter<'_>,
        header: &[Cow<'_, str>],
        directions: &[PaddingDirection],
        rows: &[Vec<Cow<'_, str>>],
    ) -> fmt::Result;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingDirection {
    Left,
    Right,
}

/// Plain aligned columns with a bold header.
#[derive(Debug, Clone)]
pub struct TableStyleBasic {
    separator: &'static str,
}

impl TableStyleBasic {
    pub fn new() -> Self {
        Self { separator: "  " }
    }
}

impl TableStyle for TableStyleBasic {
    fn write(
        &self,
        f: &mut fmt::Formatter<'_>,
        header: &[Cow<'_, str>],
        directions: &[PaddingDirection],
        rows: &[Vec<Cow<'_, str>>],
    ) -> fmt::Result {
        let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
        for row in rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.width());
            }
        }

        self.write_row(f, header, &widths, directions, true)?;
        for row in rows {
            self.write_row(f, row, &widths, directions, false)?;
        }
        Ok(())
    }
}

impl TableStyleBasic {
    fn write_row(
        &self,
        f: &mut fmt::Formatter<'_>,
        cells: &[Cow<'_, str>],
        widths: &[usize],
        directions: &[PaddingDirection],
        bold: bool,
    ) -> fmt::Result {
        let last = cells.len().saturating_sub(1);
        for (i, ((cell, width), dir)) in cells.iter().zip(widths).zip(directions).enumerate() {
            let pad = width.saturating_sub(cell.width());
            let padded = match dir {
                // the last left-aligned column needs no padding
                PaddingDirection::Left if i == last => cell.to_string(),
                PaddingDirection::Left => format!("{cell}{}", " ".repeat(pad)),
                PaddingDirection::Right => format!("{}{cell}", " ".repeat(pad)),
            };
            match bold {
                true => write!(f, "{}", padded.bold())?,
                false => write!(f, "{padded}")?,
            }
            if i < last {
                write!(f, "{}", self.separator)?;
            }
        }
        writeln!(f)
    }
}

/// A JSON array of objects keyed by column name.
#[derive(Debug, Clone, Copy)]
pub struct TableStyleJson;

impl TableStyleJson {
    pub fn new() -> Self {
        Self
    }
}

impl TableStyle for TableStyleJson {
    fn write(
        &self,
        f: &mut fmt::Formatter<'_>,
        header: &[Cow<'_, str>],
        _directions: &[PaddingDirection],
        rows: &[Vec<Cow<'_, str>>],
    ) -> fmt::Result {
        let items: Vec<serde_json::Map<String, serde_json::Value>> = rows
            .iter()
            .map(|row| {
                header
                    .iter()
                    .zip(row)
                    .map(|(k, v)| (k.to_string(), serde_json::Value::from(v.as_ref())))
                    .collect()
            })
            .collect();
        let json = serde_json::to_string_pretty(&items).map_err(|_| fmt::Error)?;
        writeln!(f, "{json}")
    }
}
