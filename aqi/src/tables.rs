//! US EPA breakpoint tables.
//!
//! From the EPA's [Technical Assistance Document for the Reporting of Daily Air Quality](https://nepis.epa.gov/Exe/ZyPDF.cgi/P100W5UG.PDF?Dockey=P100W5UG.PDF).
//! The PM2.5 rows share the 12.0 bound and skip from 35.4 to 35.5 and so on,
//! as published; inputs are truncated to the table's precision before lookup.

use crate::breakpoint::{Breakpoint, Pollutant};

/// Fine particulate matter, 24-hour average, in ug/m3. One decimal place.
pub const PM2_5: Pollutant = Pollutant {
    breakpoints: &[
        Breakpoint::new(0, 120, 0, 50, "Good"),
        Breakpoint::new(120, 354, 51, 100, "Moderate"),
        Breakpoint::new(355, 554, 101, 150, "Unhealthy for Sensitive Groups"),
        Breakpoint::new(555, 1504, 151, 200, "Unhealthy"),
        Breakpoint::new(1505, 2504, 201, 300, "Very Unhealthy"),
        Breakpoint::new(2505, 3504, 301, 400, "Hazardous"),
        Breakpoint::new(3505, 5004, 401, 500, "Hazardous"),
    ],
    places: 1,
};

/// Coarse particulate matter, 24-hour average, in ug/m3. Whole numbers.
pub const PM10: Pollutant = Pollutant {
    breakpoints: &[
        Breakpoint::new(0, 54, 0, 50, "Good"),
        Breakpoint::new(55, 154, 51, 100, "Moderate"),
        Breakpoint::new(155, 254, 101, 150, "Unhealthy for Sensitive Groups"),
        Breakpoint::new(255, 354, 151, 200, "Unhealthy"),
        Breakpoint::new(355, 424, 201, 300, "Very Unhealthy"),
        Breakpoint::new(425, 504, 301, 400, "Hazardous"),
        Breakpoint::new(505, 604, 401, 500, "Hazardous"),
    ],
    places: 0,
};

/// Supported pollutants, by name.
pub static REGISTRY: &[(&str, Pollutant)] = &[("PM2.5", PM2_5), ("PM10", PM10)];
