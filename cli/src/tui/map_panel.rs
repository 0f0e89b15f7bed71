// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use evently_core::{MapView, Theme};
use ratatui::prelude::*;
use ratatui::symbols::{Marker, border};
use ratatui::widgets::canvas::{Canvas, Map, MapResolution};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::Component;
use crate::tui::event_store::EventStore;

const S_MARKER: &str = "●";

/// World map around the selected location, with the theme swatch below.
pub struct MapPanel;

impl MapPanel {
    fn render_map(view: &MapView, area: Rect, buf: &mut Buffer) {
        let title = format!(" Map · zoom {} · tile {} ", view.zoom, view.center_tile());
        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(title).centered());

        // a terminal cell is about twice as tall as it is wide
        let inner = block.inner(area);
        let aspect = f64::from(inner.width) / (f64::from(inner.height.max(1)) * 2.0);
        let bounds = view.bounds(aspect);

        let marker = view.marker;
        Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([bounds.west, bounds.east])
            .y_bounds([bounds.south, bounds.north])
            .paint(move |ctx| {
                ctx.draw(&Map {
                    color: Color::DarkGray,
                    resolution: MapResolution::High,
                });
                if let Some(p) = marker {
                    ctx.layer();
                    ctx.print(p.lng, p.lat, S_MARKER.red().bold());
                }
            })
            .render(area, buf);
    }

    fn render_theme(theme: Option<Theme>, area: Rect, buf: &mut Buffer) {
        let line = match theme {
            Some(theme) => {
                let mut spans = vec![format!("Theme: {theme} ").bold()];
                spans.extend(
                    theme
                        .gradient()
                        .iter()
                        .map(|&(r, g, b)| Span::styled("███", Style::new().fg(Color::Rgb(r, g, b)))),
                );
                Line::from(spans)
            }
            None => Line::from(vec!["Theme: ".bold(), "none".dark_gray()]),
        };
        Paragraph::new(line).render(area, buf);
    }
}

impl Component<EventStore> for MapPanel {
    fn render(&self, store: &RefCell<EventStore>, area: Rect, buf: &mut Buffer) {
        let [map_area, theme_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);

        let (view, theme) = {
            let s = store.borrow();
            (s.map_view(), s.themes.selected())
        };
        Self::render_map(&view, map_area, buf);
        Self::render_theme(theme, theme_area, buf);
    }
}
