//! JavaScript bindings, for running conversions in the browser.
use log::MakeConsoleWriter;
use wasm_bindgen::prelude::*;

/// Set up logging to the browser console.
#[wasm_bindgen(start)]
fn start() {
    let _ = tracing_subscriber::fmt::fmt()
        .with_writer(MakeConsoleWriter)
        .without_time()
        .try_init();
}

/// An AQI value and the category it falls into.
#[wasm_bindgen(getter_with_clone)]
#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub aqi: i32,
    pub category: String,
}

/// Convert a concentration of the named pollutant to an AQI reading.
///
/// Throws with the error's description if the pollutant or concentration is not in the tables.
#[wasm_bindgen(js_name = aqiLookup)]
pub fn aqi_lookup(pollutant: &str, concentration: f64) -> Result<Reading, JsError> {
    let (aqi, category) = crate::lookup(pollutant, concentration)?;
    Ok(Reading {
        aqi,
        category: category.to_owned(),
    })
}

/// Names accepted by `aqiLookup`.
#[wasm_bindgen(js_name = supportedPollutants)]
pub fn supported_pollutants() -> Vec<String> {
    crate::supported_pollutants().map(str::to_owned).collect()
}

/// Console writer installed by `start`.
mod log {
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Makes a writer to the web_sys console.
    pub struct MakeConsoleWriter;

    impl MakeWriter<'_> for MakeConsoleWriter {
        type Writer = MakeConsoleWriter;

        fn make_writer(&'_ self) -> Self::Writer {
            MakeConsoleWriter
        }
    }

    impl std::io::Write for MakeConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let s = core::str::from_utf8(buf)
                .map(|s| JsValue::from_str(s.trim_end()))
                .unwrap_or_else(|_| {
                    JsValue::from_str(&format!("non-string log message: {:?}", buf))
                });
            web_sys::console::log_1(&s);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_reading() {
        let Ok(reading) = aqi_lookup("PM10", 203.0) else {
            panic!("203 should be in the PM10 table");
        };
        assert_eq!(
            reading,
            Reading {
                aqi: 125,
                category: "Unhealthy for Sensitive Groups".to_owned(),
            }
        );
    }

    #[test]
    fn lists_pollutants() {
        let names = supported_pollutants();
        assert!(names.iter().any(|n| n == "PM2.5"));
        assert!(names.iter().any(|n| n == "PM10"));
    }
}
