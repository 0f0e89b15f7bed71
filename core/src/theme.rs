// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Visual theme of an event page.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[strum(ascii_case_insensitive)]
pub enum Theme {
    /// Plain light gray.
    Minimal,
    /// Purple, pink and yellow.
    Confetti,
    /// Blues and cyan.
    Ocean,
    /// Red, orange and yellow.
    Sunset,
    /// Deep purple fading to black.
    Galaxy,
}

impl Theme {
    /// Gradient stops of the theme swatch, as RGB triples.
    #[must_use]
    pub const fn gradient(self) -> &'static [(u8, u8, u8)] {
        match self {
            Self::Minimal => &[(229, 231, 235)],
            Self::Confetti => &[(168, 85, 247), (244, 114, 182), (253, 224, 71)],
            Self::Ocean => &[(37, 99, 235), (34, 211, 238), (147, 197, 253)],
            Self::Sunset => &[(239, 68, 68), (251, 146, 60), (253, 224, 71)],
            Self::Galaxy => &[(107, 33, 168), (29, 78, 216), (0, 0, 0)],
        }
    }
}

/// Holds the theme picked in the theme selector.
///
/// Only [`set_theme`](Self::set_theme) and [`clear_theme`](Self::clear_theme)
/// change it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeStore {
    selected: Option<Theme>,
}

impl ThemeStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Selects a theme, replacing any previous one.
    pub const fn set_theme(&mut self, theme: Theme) {
        self.selected = Some(theme);
    }

    /// Clears the selection.
    pub const fn clear_theme(&mut self) {
        self.selected = None;
    }

    /// The selected theme, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<Theme> {
        self.selected
    }
}
