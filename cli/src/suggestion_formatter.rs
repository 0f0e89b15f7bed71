// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use evently_core::Suggestion;

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::ArgOutputFormat;

/// A suggestion with its 1-based display number, as accepted by `--select`.
#[derive(Debug, Clone)]
pub struct NumberedSuggestion {
    pub number: usize,
    pub inner: Suggestion,
}

impl NumberedSuggestion {
    pub fn from_list(suggestions: Vec<Suggestion>) -> Vec<Self> {
        suggestions
            .into_iter()
            .enumerate()
            .map(|(i, inner)| Self { number: i + 1, inner })
            .collect()
    }
}

#[derive(Debug)]
pub struct SuggestionFormatter {
    columns: Vec<SuggestionColumn>,
    format: ArgOutputFormat,
}

impl SuggestionFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                SuggestionColumn::Number,
                SuggestionColumn::Label,
                SuggestionColumn::Region,
                SuggestionColumn::Coordinates,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        if format == ArgOutputFormat::Json {
            self.columns.push(SuggestionColumn::Id);
        }
        self
    }

    pub fn format<'a>(&'a self, suggestions: &'a [NumberedSuggestion]) -> Display<'a> {
        Display {
            suggestions,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    suggestions: &'a [NumberedSuggestion],
    formatter: &'a SuggestionFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            ArgOutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.suggestions)
            ),
            ArgOutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.suggestions)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionColumn {
    Number,
    Label,
    Region,
    Coordinates,
    Id,
}

impl TableColumn<NumberedSuggestion> for SuggestionColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Number => "#",
            Self::Label => "Label",
            Self::Region => "Region",
            Self::Coordinates => "Coordinates",
            Self::Id => "ID",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a NumberedSuggestion) -> Cow<'a, str> {
        let s = &data.inner;
        match self {
            Self::Number => data.number.to_string().into(),
            Self::Label => s.formatted.as_str().into(),
            Self::Region => s.region.as_deref().unwrap_or("-").into(),
            Self::Coordinates => match s.position() {
                Some(p) => p.to_string().into(),
                None => "-".into(),
            },
            Self::Id => s.id.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            Self::Number => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }
}
