//! Renders a location-info record as a two-column text table.

use log::debug;

use crate::{
    display::{
        Coordinates, Languages, LocalTime, Measure, NewsBlock, OffsetSign, Population, Rates,
        Table,
    },
    error::Result,
    models::LocationInfo,
};

/// Column headers of the report.
pub const HEADERS: [&str; 2] = ["Параметр", "Значение"];

/// Options that change how a record is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whether negative `UTC-HH:MM` offsets move the clock back
    pub offset_sign: OffsetSign,
}

/// Formats one [`LocationInfo`] record into the report table.
///
/// The renderer only borrows the record; it holds no other state and may be
/// used any number of times.
///
/// # Examples
///
/// ```rust,no_run
/// use atlas_core::{LocationInfo, Renderer};
///
/// # fn example() -> atlas_core::Result<()> {
/// let info = LocationInfo::from_path("russia.json")?;
/// for line in Renderer::new(&info).render()? {
///     println!("{line}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    info: &'a LocationInfo,
    options: RenderOptions,
}

impl<'a> Renderer<'a> {
    /// Create a renderer with default options.
    pub fn new(info: &'a LocationInfo) -> Self {
        Self {
            info,
            options: RenderOptions::default(),
        }
    }

    /// Replace the rendering options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Builds the fourteen `[label, value]` rows of the report.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidNumericInput` if the record fails
    /// validation, `RenderError::MissingTimezone` if it has no timezone and
    /// `RenderError::MalformedTimezone` if the first timezone is not
    /// `UTC±HH:MM`
    pub fn rows(&self) -> Result<Vec<[String; 2]>> {
        self.info.validate()?;

        let location = &self.info.location;
        let weather = &self.info.weather;
        let timezone = location.primary_timezone()?;
        let local_time = LocalTime::at(self.info.timestamp, timezone, self.options.offset_sign)?;
        let coordinates = Coordinates {
            latitude: location.latitude,
            longitude: location.longitude,
        };

        Ok(vec![
            row("Страна:", &location.name),
            row("Столица:", &location.capital),
            row("Регион:", &location.subregion),
            row("Языки:", Languages(&location.languages)),
            row("Население страны:", format!("{} чел.", Population(location.population))),
            row("Курсы валют:", Rates(&self.info.currency_rates)),
            row("Погода:", format!("{} °C", Measure(weather.temp))),
            row("Описание погоды:", &weather.description),
            row("Скорость ветра:", &weather.wind_speed),
            row("Видимость:", &weather.visibility),
            row("Площадь:", format!("{} км^2", Measure(location.area))),
            row("Широта и долгота:", coordinates),
            row("Местное время:", format!("{local_time} ({timezone})")),
            row("Новости:", NewsBlock(&self.info.news)),
        ])
    }

    /// Renders the report as individual text lines: header, rule, then rows.
    ///
    /// Rendering either succeeds completely or returns the first error; no
    /// partial table is produced.
    pub fn render(&self) -> Result<Vec<String>> {
        debug!("Rendering location info for {}", self.info.location.name);
        let mut table = Table::new(HEADERS);
        for cells in self.rows()? {
            table.push_row(cells);
        }
        Ok(table.lines())
    }
}

fn row(label: &str, value: impl ToString) -> [String; 2] {
    [label.to_string(), value.to_string()]
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use jiff::Timestamp;
    use rust_decimal::Decimal;

    use super::*;
    use crate::{
        error::RenderError,
        models::{CurrencyRates, Language, Location, NewsItem, Reading, Weather},
    };

    fn create_test_info() -> LocationInfo {
        LocationInfo {
            location: Location {
                name: "Spain".to_string(),
                capital: "Madrid".to_string(),
                subregion: "Southern Europe".to_string(),
                population: 47351567,
                area: 505992.0,
                latitude: 40.0,
                longitude: -4.0,
                timezones: vec!["UTC+01:00".to_string(), "UTC".to_string()],
                languages: vec![Language::new("Spanish", "Español")],
            },
            weather: Weather {
                temp: 21.5,
                description: "clear sky".to_string(),
                wind_speed: Reading::Text("3.1 m/s".to_string()),
                visibility: Reading::Text("10000 m".to_string()),
            },
            currency_rates: CurrencyRates::new([("EUR", Decimal::from_str("99.875").unwrap())])
                .unwrap(),
            news: vec![NewsItem::new("Headline", Some("Summary"))],
            timestamp: Timestamp::from_second(1672567200).unwrap(), // 2023-01-01 10:00:00 UTC
        }
    }

    #[test]
    fn test_rows_fixed_order() {
        let info = create_test_info();
        let rows = Renderer::new(&info).rows().unwrap();
        let labels: Vec<&str> = rows.iter().map(|[label, _]| label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Страна:",
                "Столица:",
                "Регион:",
                "Языки:",
                "Население страны:",
                "Курсы валют:",
                "Погода:",
                "Описание погоды:",
                "Скорость ветра:",
                "Видимость:",
                "Площадь:",
                "Широта и долгота:",
                "Местное время:",
                "Новости:",
            ]
        );
    }

    #[test]
    fn test_rows_values() {
        let info = create_test_info();
        let rows = Renderer::new(&info).rows().unwrap();
        let values: Vec<&str> = rows.iter().map(|[_, value]| value.as_str()).collect();
        assert_eq!(values[0], "Spain");
        assert_eq!(values[3], "Spanish (Español)");
        assert_eq!(values[4], "47.351.567 чел.");
        assert_eq!(values[5], "EUR = 99.88 руб.");
        assert_eq!(values[6], "21.5 °C");
        assert_eq!(values[8], "3.1 m/s");
        assert_eq!(values[10], "505992.0 км^2");
        assert_eq!(values[11], "(40.0, -4.0)");
        assert_eq!(values[12], "11:00:00 (UTC+01:00)");
        assert_eq!(values[13], "\n1) \"Headline\". Summary\n");
    }

    #[test]
    fn test_render_line_count() {
        let mut info = create_test_info();
        info.news.clear();
        let lines = Renderer::new(&info).render().unwrap();
        // header + rule + 14 single-line rows
        assert_eq!(lines.len(), 16);
        assert!(lines[0].starts_with("Параметр"));
        assert!(lines[1].starts_with("---"));
        assert_eq!(lines[15], "Новости:");
    }

    #[test]
    fn test_render_honors_offset_sign_option() {
        let mut info = create_test_info();
        info.location.timezones = vec!["UTC-05:00".to_string()];

        let legacy = Renderer::new(&info).rows().unwrap();
        assert_eq!(legacy[12][1], "15:00:00 (UTC-05:00)");

        let options = RenderOptions {
            offset_sign: OffsetSign::Honor,
        };
        let honored = Renderer::new(&info).with_options(options).rows().unwrap();
        assert_eq!(honored[12][1], "05:00:00 (UTC-05:00)");
    }

    #[test]
    fn test_render_fails_on_malformed_timezone() {
        let mut info = create_test_info();
        info.location.timezones = vec!["GMT+3".to_string()];
        let err = Renderer::new(&info).render().unwrap_err();
        assert!(matches!(err, RenderError::MalformedTimezone { .. }));
    }

    #[test]
    fn test_render_fails_without_timezone() {
        let mut info = create_test_info();
        info.location.timezones.clear();
        let err = Renderer::new(&info).render().unwrap_err();
        assert!(matches!(err, RenderError::MissingTimezone));
    }

    #[test]
    fn test_render_fails_on_negative_area() {
        let mut info = create_test_info();
        info.location.area = -1.0;
        let err = Renderer::new(&info).render().unwrap_err();
        assert!(matches!(err, RenderError::InvalidNumericInput { ref field, .. } if field == "location.area"));
    }
}
