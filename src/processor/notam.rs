//! NOTAM text layout and the weather safety rules behind it.

use chrono::{DateTime, Datelike, Duration, Utc};
use rand::Rng;

use crate::models::weather::WeatherSnapshot;

pub const NOT_ADVISED: &str = "NOT ADVISED to take flight due to severe weather conditions.";
pub const SAFE: &str = "Safe to take flight. Weather conditions are stable.";
pub const DELAY_LINE: &str = "E) EXPECT DELAY AND OPERATIONAL LIMITATIONS.";

/// Wind above this many m/s is severe.
const STRONG_WIND: f64 = 10.0;
const VALIDITY_DAYS: i64 = 3;
const TIMESTAMP_FORMAT: &str = "%y%m%d%H%M";

/// Serial number and issue time of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeStamp {
    pub number: u16,
    pub issued_at: DateTime<Utc>,
}

impl NoticeStamp {
    pub fn random(issued_at: DateTime<Utc>) -> Self {
        Self {
            number: rand::thread_rng().gen_range(1000..=9999),
            issued_at,
        }
    }
}

/// Flight recommendation. Expects a lower-cased description.
pub fn recommendation(description: &str, wind_speed: f64) -> &'static str {
    if description.contains("storm") || wind_speed > STRONG_WIND {
        NOT_ADVISED
    } else {
        SAFE
    }
}

/// Whether the delay line is printed. Expects a lower-cased description.
///
/// Wider than [`recommendation`]: "thunder" alone triggers it.
pub fn expects_delay(description: &str, wind_speed: f64) -> bool {
    description.contains("storm") || description.contains("thunder") || wind_speed > STRONG_WIND
}

/// Renders the full notice text, trailing newline included.
///
/// The E)/F) labels are fixed literals; both weather lines may carry "F)".
pub fn format_notice(iata_code: &str, weather: &WeatherSnapshot, stamp: &NoticeStamp) -> String {
    let description = weather.description.to_lowercase();
    let wind = weather.wind_speed_mps;
    let valid_until = stamp.issued_at + Duration::days(VALIDITY_DAYS);

    let mut lines = vec![
        format!("NOTAM {}/{}", stamp.number, stamp.issued_at.year()),
        format!("A) {}", iata_code),
        format!("B) {}Z", stamp.issued_at.format(TIMESTAMP_FORMAT)),
        format!("C) {}Z", valid_until.format(TIMESTAMP_FORMAT)),
    ];

    if expects_delay(&description, wind) {
        lines.push(DELAY_LINE.to_string());
        lines.push(format!(
            "F) Severe weather: {} (Wind: {} knots).",
            capitalize(&description),
            wind
        ));
    } else {
        lines.push(format!(
            "E) Current weather: {} (Wind: {} knots).",
            capitalize(&description),
            wind
        ));
    }

    lines.push(format!(
        "F) Weather Report: {}. Wind: {} m/s. {}",
        weather.description,
        wind,
        recommendation(&description, wind)
    ));

    let mut message = lines.join("\n");
    message.push('\n');
    message
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp() -> NoticeStamp {
        NoticeStamp {
            number: 4821,
            issued_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 0).unwrap(),
        }
    }

    fn weather(description: &str, wind_speed_mps: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            description: description.to_string(),
            wind_speed_mps,
        }
    }

    #[test]
    fn test_stable_weather_layout() {
        let message = format_notice("CEB", &weather("clear sky", 3.0), &stamp());
        assert_eq!(
            message,
            "NOTAM 4821/2025\n\
             A) CEB\n\
             B) 2503140926Z\n\
             C) 2503170926Z\n\
             E) Current weather: Clear sky (Wind: 3 knots).\n\
             F) Weather Report: clear sky. Wind: 3 m/s. Safe to take flight. Weather conditions are stable.\n"
        );
    }

    #[test]
    fn test_severe_weather_layout() {
        let message = format_notice("MNL", &weather("Thunderstorm", 12.35), &stamp());
        assert_eq!(
            message,
            "NOTAM 4821/2025\n\
             A) MNL\n\
             B) 2503140926Z\n\
             C) 2503170926Z\n\
             E) EXPECT DELAY AND OPERATIONAL LIMITATIONS.\n\
             F) Severe weather: Thunderstorm (Wind: 12.35 knots).\n\
             F) Weather Report: Thunderstorm. Wind: 12.35 m/s. NOT ADVISED to take flight due to severe weather conditions.\n"
        );
    }

    #[test]
    fn test_storm_match_ignores_case() {
        let message = format_notice("DVO", &weather("Heavy STORM Cells", 2.0), &stamp());
        assert!(message.contains(DELAY_LINE));
        assert!(message.contains("NOT ADVISED to take flight"));
        assert!(message.contains("Weather Report: Heavy STORM Cells."));
        assert!(message.contains("Severe weather: Heavy storm cells"));
    }

    #[test]
    fn test_strong_wind_alone_is_severe() {
        let calm = format_notice("ILO", &weather("few clouds", 10.0), &stamp());
        assert!(!calm.contains(DELAY_LINE));
        assert!(calm.contains(SAFE));

        let windy = format_notice("ILO", &weather("few clouds", 10.5), &stamp());
        assert!(windy.contains(DELAY_LINE));
        assert!(windy.contains(NOT_ADVISED));
    }

    #[test]
    fn test_thunder_without_storm_delays_but_stays_safe() {
        let message = format_notice("BCD", &weather("distant thunder", 4.0), &stamp());
        assert!(message.contains(DELAY_LINE));
        assert!(message.contains("F) Severe weather: Distant thunder (Wind: 4 knots)."));
        assert!(message.contains(SAFE));
    }

    #[test]
    fn test_validity_window_crosses_month_and_year() {
        let stamp = NoticeStamp {
            number: 1000,
            issued_at: Utc.with_ymd_and_hms(2024, 12, 30, 23, 5, 0).unwrap(),
        };
        let message = format_notice("MNL", &weather("mist", 0.0), &stamp);
        assert!(message.starts_with("NOTAM 1000/2024\n"));
        assert!(message.contains("B) 2412302305Z\n"));
        assert!(message.contains("C) 2501022305Z\n"));
    }

    #[test]
    fn test_random_number_stays_four_digits() {
        let now = Utc::now();
        for _ in 0..200 {
            let stamp = NoticeStamp::random(now);
            assert!((1000..=9999).contains(&stamp.number));
        }
    }
}
