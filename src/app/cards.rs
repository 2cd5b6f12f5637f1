//! Summary metric cards.
//!
//! Purely presentational: the fixture below is the whole data model. The
//! journal backend does not feed these yet.

use crate::utils::color;
use eframe::egui::{self, RichText, Ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    fn glyph(self) -> &'static str {
        match self {
            Self::Up => "⬆",
            Self::Down => "⬇",
        }
    }
}

pub struct MetricCard {
    pub title: &'static str,
    pub value: &'static str,
    /// P&L dollar values are tinted green.
    pub highlighted: bool,
    pub delta: &'static str,
    pub trend: Trend,
    pub headline: &'static str,
    pub detail: &'static str,
}

pub fn summary_cards() -> [MetricCard; 4] {
    [
        MetricCard {
            title: "Daily P&L",
            value: "$1,250.00",
            highlighted: true,
            delta: "+12.5%",
            trend: Trend::Up,
            headline: "Trending up this month",
            detail: "Acquisition needs attention",
        },
        MetricCard {
            title: "Net P&L",
            value: "$1,234.00",
            highlighted: true,
            delta: "+20%",
            trend: Trend::Up,
            headline: "Up 20% this period",
            detail: "Acquisition needs attention",
        },
        MetricCard {
            title: "Trade Win Percentage",
            value: "48.8%",
            highlighted: false,
            delta: "+12.5%",
            trend: Trend::Up,
            headline: "Strong user retention",
            detail: "Engagement exceed targets",
        },
        MetricCard {
            title: "Trade Expectancy",
            value: "$32.20",
            highlighted: false,
            delta: "+4.5%",
            trend: Trend::Up,
            headline: "Steady performance increase",
            detail: "Meets growth projections",
        },
    ]
}

pub fn render_summary(ui: &mut Ui) {
    let cards = summary_cards();
    ui.columns(cards.len(), |columns| {
        for (column, card) in columns.iter_mut().zip(cards.iter()) {
            render_card(column, card);
        }
    });
}

fn render_card(ui: &mut Ui, card: &MetricCard) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(card.title).color(color::MUTED));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("{} {}", card.trend.glyph(), card.delta)).small(),
                    );
                });
            });
            ui.add_space(4.0);

            let value = RichText::new(card.value).size(24.0).strong();
            let value = if card.highlighted {
                value.color(color::POSITIVE)
            } else {
                value
            };
            ui.label(value);

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("{} {}", card.headline, card.trend.glyph())).strong(),
            );
            ui.label(RichText::new(card.detail).color(color::MUTED));
        });
    });
}
