//! Package: a raw sensor reading, before it is known to be a valid workout.

/// A workout tag plus its positional values, exactly as the sensor sent them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Package<'a> {
    pub tag: &'a str,
    pub values: &'a [f64],
}

/// The built-in readings processed by `fitness report`.
pub const DEMO_PACKAGES: [Package<'static>; 3] = [
    Package {
        tag: "SWM",
        values: &[720.0, 1.0, 80.0, 25.0, 40.0],
    },
    Package {
        tag: "RUN",
        values: &[15_000.0, 1.0, 75.0],
    },
    Package {
        tag: "WLK",
        values: &[9000.0, 1.0, 75.0, 180.0],
    },
];
