//! Convert pollutant concentrations to US EPA Air Quality Index values.
//!
//! The AQI is a table of ranges: a concentration is located in its row,
//! then linearly scaled onto that row's AQI range.
//! The input is expected to be already averaged, e.g. by
//! [NowCast](https://www.airnow.gov/faqs/how-nowcast-algorithm-used-report/);
//! this crate only does the conversion.
//!
//! ```
//! let (value, category) = aqi::lookup("PM2.5", 12.1).unwrap();
//! assert_eq!(value, 51);
//! assert_eq!(category, "Moderate");
//! ```

pub mod breakpoint;
pub mod tables;

#[cfg(feature = "web")]
pub mod web;

pub use breakpoint::{Breakpoint, Pollutant};

/// An error in converting a concentration.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// No table for the named pollutant.
    UnknownPollutant {
        name: String,
        supported: Vec<&'static str>,
    },
    /// The concentration is outside every breakpoint of the pollutant's table.
    ConcentrationOutOfRange {
        pollutant: &'static str,
        concentration: f64,
    },
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::UnknownPollutant { name, supported } => write!(
                f,
                "pollutant named {} not found in table; supported pollutants are: {}",
                name,
                supported.join(", ")
            ),
            Error::ConcentrationOutOfRange {
                pollutant,
                concentration,
            } => write!(
                f,
                "concentration of {:.1} not found in {} breakpoints",
                concentration, pollutant
            ),
        }
    }
}

impl core::error::Error for Error {}

/// Converts concentrations using a fixed set of pollutant tables.
#[derive(Clone, Copy, Debug)]
pub struct Converter {
    tables: &'static [(&'static str, Pollutant)],
}

impl Converter {
    /// Create a converter over the given tables.
    pub const fn new(tables: &'static [(&'static str, Pollutant)]) -> Self {
        Converter { tables }
    }

    /// Names of the pollutants this converter knows about.
    pub fn pollutants(&self) -> impl Iterator<Item = &'static str> {
        self.tables.iter().map(|(name, _)| *name)
    }

    /// The table for the named pollutant, if there is one.
    pub fn table(&self, name: &str) -> Option<(&'static str, &'static Pollutant)> {
        self.tables
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(n, p)| (*n, p))
    }

    /// Convert a concentration of the named pollutant to an AQI value.
    ///
    /// Returns the value and the name of the category it falls into.
    pub fn lookup(&self, name: &str, concentration: f64) -> Result<(i32, &'static str), Error> {
        let Some((pollutant, table)) = self.table(name) else {
            tracing::debug!("no table for pollutant {:?}", name);
            return Err(Error::UnknownPollutant {
                name: name.to_owned(),
                supported: self.pollutants().collect(),
            });
        };
        match table.aqi(concentration) {
            Some((value, category)) => {
                tracing::trace!("{} {} -> {} ({})", pollutant, concentration, value, category);
                Ok((value, category))
            }
            None => {
                tracing::debug!(
                    "{} concentration {} outside table range {:?}",
                    pollutant,
                    concentration,
                    table.range()
                );
                Err(Error::ConcentrationOutOfRange {
                    pollutant,
                    concentration,
                })
            }
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(tables::REGISTRY)
    }
}

/// Convert a concentration of the named pollutant to an AQI value, using the EPA tables.
///
/// Returns the value and the name of the category it falls into.
pub fn lookup(name: &str, concentration: f64) -> Result<(i32, &'static str), Error> {
    Converter::default().lookup(name, concentration)
}

/// Names of the pollutants supported by [lookup].
pub fn supported_pollutants() -> impl Iterator<Item = &'static str> {
    Converter::default().pollutants()
}
