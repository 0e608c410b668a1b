//! Text the dashboard shows for result rows, bookmark cards and the detail view.
//!
//! Everything here is a pure function of a stored record; conversion to
//! Fahrenheit and mph happens on the way out.

use crate::{
    model::{LocationId, LocationWeather},
    units::{celsius_to_fahrenheit, format_fixed, mps_to_mph},
};

/// Condition category → icon identifier.
const CONDITION_ICONS: &[(&str, &str)] = &[
    ("Clear", "sun"),
    ("Clouds", "cloud"),
    ("Rain", "cloud_rain"),
    ("Drizzle", "cloud_drizzle"),
    ("Thunderstorm", "cloud_lightning"),
    ("Snow", "cloud_snow"),
    ("Mist", "cloud_fog"),
    ("Fog", "cloud_fog"),
    ("Haze", "cloud_fog"),
];

const DEFAULT_ICON: &str = "cloud";

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

pub fn condition_icon(category: &str) -> &'static str {
    CONDITION_ICONS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, icon)| *icon)
        .unwrap_or(DEFAULT_ICON)
}

/// Eight-point compass name for a meteorological wind direction.
pub fn compass_point(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let sector = ((normalized / 45.0).round() as usize) % COMPASS_POINTS.len();
    COMPASS_POINTS[sector]
}

/// "59.0°F"
pub fn fahrenheit(celsius: f64, decimals: u32) -> String {
    format!("{}°F", format_fixed(celsius_to_fahrenheit(celsius), decimals))
}

/// "22.4 mph"
pub fn wind_speed(mps: f64) -> String {
    format!("{} mph", format_fixed(mps_to_mph(mps), 1))
}

/// One row of the search results list: "Paris, FR - 59.0°F".
pub fn result_row(location: &LocationWeather) -> String {
    format!(
        "{} - {}",
        location.display_name(),
        fahrenheit(location.temperature.current_c, 1)
    )
}

pub fn save_label(saved: bool) -> &'static str {
    if saved { "Saved" } else { "Save" }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedCard {
    pub id: LocationId,
    pub title: String,
    pub temperature: String,
    pub icon: &'static str,
    pub description: String,
}

/// Bookmark card with the large whole-degree readout.
pub fn saved_card(location: &LocationWeather) -> SavedCard {
    let condition = location.condition();
    SavedCard {
        id: location.id,
        title: location.display_name(),
        temperature: fahrenheit(location.temperature.current_c, 0),
        icon: condition_icon(&condition.category),
        description: condition.description.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBar {
    pub label: &'static str,
    pub fahrenheit: f64,
}

/// The four bars of the temperature overview, in display order.
pub fn temperature_chart(location: &LocationWeather) -> [ChartBar; 4] {
    let t = &location.temperature;
    [
        ChartBar { label: "Current", fahrenheit: celsius_to_fahrenheit(t.current_c) },
        ChartBar { label: "Feels Like", fahrenheit: celsius_to_fahrenheit(t.feels_like_c) },
        ChartBar { label: "Min", fahrenheit: celsius_to_fahrenheit(t.min_c) },
        ChartBar { label: "Max", fahrenheit: celsius_to_fahrenheit(t.max_c) },
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoCard {
    pub title: &'static str,
    pub icon: &'static str,
    pub lines: Vec<String>,
}

/// Temperature, weather, humidity and wind cards of the detail view.
pub fn detail_cards(location: &LocationWeather) -> [InfoCard; 4] {
    let condition = location.condition();
    [
        InfoCard {
            title: "Temperature",
            icon: "thermometer",
            lines: vec![
                format!("Current: {}", fahrenheit(location.temperature.current_c, 1)),
                format!("Feels like: {}", fahrenheit(location.temperature.feels_like_c, 1)),
            ],
        },
        InfoCard {
            title: "Weather",
            icon: condition_icon(&condition.category),
            lines: vec![
                condition.category.clone(),
                condition.description.clone(),
                format!("Cloud cover: {}%", location.cloud_cover_pct),
            ],
        },
        InfoCard {
            title: "Humidity",
            icon: "droplets",
            lines: vec![
                format!("{}%", location.humidity_pct),
                format!("Pressure: {} hPa", format_fixed(location.pressure_hpa, 0)),
            ],
        },
        InfoCard {
            title: "Wind",
            icon: "wind",
            lines: vec![
                format!("Speed: {}", wind_speed(location.wind.speed_mps)),
                format!(
                    "Direction: {}° ({})",
                    format_fixed(location.wind.direction_deg, 0),
                    compass_point(location.wind.direction_deg)
                ),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::location;

    #[test]
    fn known_categories_map_to_icons() {
        assert_eq!(condition_icon("Clear"), "sun");
        assert_eq!(condition_icon("Rain"), "cloud_rain");
        assert_eq!(condition_icon("Snow"), "cloud_snow");
        assert_eq!(condition_icon("Clouds"), "cloud");
    }

    #[test]
    fn unknown_category_uses_default_icon() {
        assert_eq!(condition_icon("Tornado"), DEFAULT_ICON);
        assert_eq!(condition_icon(""), DEFAULT_ICON);
    }

    #[test]
    fn compass_points_wrap_around() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(350.0), "N");
        assert_eq!(compass_point(225.0), "SW");
        assert_eq!(compass_point(90.0), "E");
        assert_eq!(compass_point(-90.0), "W");
        assert_eq!(compass_point(720.0), "N");
    }

    #[test]
    fn result_row_shows_name_country_and_fahrenheit() {
        let paris = location(42, "Paris", "FR", 15.0);
        assert_eq!(result_row(&paris), "Paris, FR - 59.0°F");
    }

    #[test]
    fn saved_card_uses_whole_degrees() {
        let card = saved_card(&location(42, "Paris", "FR", 15.3));
        assert_eq!(card.id, 42);
        assert_eq!(card.title, "Paris, FR");
        assert_eq!(card.temperature, "60°F");
        assert_eq!(card.icon, "sun");
        assert_eq!(card.description, "clear sky");
    }

    #[test]
    fn chart_has_four_fahrenheit_bars_in_order() {
        let chart = temperature_chart(&location(42, "Paris", "FR", 15.0));

        let labels: Vec<_> = chart.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Current", "Feels Like", "Min", "Max"]);
        assert_eq!(chart[0].fahrenheit, 59.0);
        // fixture: min is 3 C below current
        assert_eq!(format_fixed(chart[2].fahrenheit, 1), "53.6");
    }

    #[test]
    fn detail_cards_render_converted_values() {
        let cards = detail_cards(&location(42, "Paris", "FR", 15.0));

        assert_eq!(cards[0].title, "Temperature");
        assert_eq!(cards[0].lines[0], "Current: 59.0°F");
        assert_eq!(cards[0].lines[1], "Feels like: 57.2°F");
        assert_eq!(cards[1].lines[0], "Clear");
        assert_eq!(cards[1].lines[1], "clear sky");
        assert_eq!(cards[2].lines[0], "72%");
        assert_eq!(cards[3].lines[0], "Speed: 22.4 mph");
        assert_eq!(cards[3].lines[1], "Direction: 225° (SW)");
    }

    #[test]
    fn save_label_reflects_bookmark_state() {
        assert_eq!(save_label(false), "Save");
        assert_eq!(save_label(true), "Saved");
    }
}
