//! Plain-text rendering of dashboard views.

use chrono::Local;
use std::fmt::Write;
use weather_core::{
    LocationWeather, SavedLocations,
    display::{self, ChartBar},
    units::format_fixed,
};

const CHART_WIDTH: usize = 40;

pub fn banner(message: &str) -> String {
    format!("! {message}\n")
}

pub fn results(results: &[LocationWeather]) -> String {
    let mut out = String::from("Search Results\n");
    for (i, location) in results.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {:>2}. {} [{}]",
            i + 1,
            display::result_row(location),
            display::condition_icon(&location.condition().category)
        );
    }
    out
}

pub fn saved_grid(saved: &SavedLocations) -> String {
    if saved.is_empty() {
        return "No saved locations.\n".to_string();
    }

    let mut out = String::from("Saved Locations\n");
    for location in saved {
        let card = display::saved_card(location);
        let _ = writeln!(
            out,
            "  {:>6}  {:<24} {:>6}  {:<16} {}",
            card.temperature, card.title, card.icon, card.description, card.id
        );
    }
    out
}

pub fn detail(location: &LocationWeather, save_label: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}    [{}]", location.display_name(), save_label);
    if let Some(observed) = location.observed_at {
        let _ = writeln!(
            out,
            "Observed {}",
            observed.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        );
    }

    out.push_str("\nTemperature Overview\n");
    out.push_str(&chart(&display::temperature_chart(location)));

    for card in display::detail_cards(location) {
        let _ = writeln!(out, "\n{} ({})", card.title, card.icon);
        for line in &card.lines {
            let _ = writeln!(out, "  {line}");
        }
    }
    out
}

/// Horizontal bars scaled to the largest magnitude.
fn chart(bars: &[ChartBar]) -> String {
    let max = bars
        .iter()
        .map(|b| b.fahrenheit.abs())
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for bar in bars {
        let len = if max > 0.0 {
            ((bar.fahrenheit.abs() / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        let _ = writeln!(
            out,
            "  {:<10} {:<width$} {}°F",
            bar.label,
            "█".repeat(len),
            format_fixed(bar.fahrenheit, 1),
            width = CHART_WIDTH
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_scales_longest_bar_to_full_width() {
        let bars = [
            ChartBar { label: "Current", fahrenheit: 59.0 },
            ChartBar { label: "Max", fahrenheit: 118.0 },
            ChartBar { label: "Min", fahrenheit: 0.0 },
        ];

        let text = chart(&bars);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0].matches('█').count(), CHART_WIDTH / 2);
        assert_eq!(lines[1].matches('█').count(), CHART_WIDTH);
        assert_eq!(lines[2].matches('█').count(), 0);
        assert!(lines[0].ends_with("59.0°F"));
    }

    #[test]
    fn empty_saved_grid_says_so() {
        assert_eq!(saved_grid(&SavedLocations::new()), "No saved locations.\n");
    }

    #[test]
    fn banner_is_single_line() {
        assert_eq!(banner("Please enter a city name"), "! Please enter a city name\n");
    }
}
