use crate::models::Vector2D;

/// Unit convention of a simulation mode.
///
/// The physics frame is always y-up. The scale only decides how many world units
/// make up one meter, which in turn scales gravity. Spring stiffness per unit mass
/// is scale-free (`k / m` has units of 1/s²), so only gravity is converted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateScale {
    /// World units are meters.
    Metric,
    /// World units are display pixels, `pixels_per_meter` of them per meter.
    ///
    /// `Pixels { pixels_per_meter: 1.0 }` treats pixels as meters, which reproduces
    /// the unscaled projectile game; `100.0` reproduces the vertical spring demo.
    Pixels { pixels_per_meter: f64 },
}

impl Default for CoordinateScale {
    fn default() -> Self {
        CoordinateScale::Metric
    }
}

impl CoordinateScale {
    pub fn units_per_meter(&self) -> f64 {
        match *self {
            CoordinateScale::Metric => 1.0,
            CoordinateScale::Pixels { pixels_per_meter } => pixels_per_meter,
        }
    }

    /// Converts an acceleration given in m/s² into world units per second squared.
    ///
    /// # Example
    /// ```
    /// use rs_particle_lab::models::CoordinateScale;
    ///
    /// assert_eq!(CoordinateScale::Metric.scale_acceleration(9.81), 9.81);
    /// let pixels = CoordinateScale::Pixels { pixels_per_meter: 100.0 };
    /// assert!((pixels.scale_acceleration(9.81) - 981.0).abs() < 1e-9);
    /// ```
    pub fn scale_acceleration(&self, meters_per_second_squared: f64) -> f64 {
        meters_per_second_squared * self.units_per_meter()
    }

    /// Builds the world-to-screen transform for a display `display_height` pixels tall.
    ///
    /// `pixels_per_meter` is only consulted for [`CoordinateScale::Metric`]; a pixel-scaled
    /// world maps one unit to one pixel.
    pub fn display_transform(&self, display_height: f64, pixels_per_meter: f64) -> DisplayTransform {
        let pixels_per_unit = match *self {
            CoordinateScale::Metric => pixels_per_meter,
            CoordinateScale::Pixels { .. } => 1.0,
        };
        DisplayTransform {
            pixels_per_unit,
            display_height,
        }
    }
}

/// Maps y-up world coordinates onto a y-down screen.
///
/// The physics core never performs this flip itself; it is handed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayTransform {
    pub pixels_per_unit: f64,
    pub display_height: f64,
}

impl DisplayTransform {
    /// # Example
    /// ```
    /// use rs_particle_lab::models::{DisplayTransform, Vector2D};
    ///
    /// let transform = DisplayTransform { pixels_per_unit: 50.0, display_height: 600.0 };
    /// assert_eq!(transform.to_screen(Vector2D::new(1.0, 1.0)), (50.0, 550.0));
    /// assert_eq!(transform.to_world((50.0, 550.0)), Vector2D::new(1.0, 1.0));
    /// ```
    pub fn to_screen(&self, point: Vector2D) -> (f64, f64) {
        (
            point.x * self.pixels_per_unit,
            self.display_height - point.y * self.pixels_per_unit,
        )
    }

    pub fn to_world(&self, screen: (f64, f64)) -> Vector2D {
        Vector2D::new(
            screen.0 / self.pixels_per_unit,
            (self.display_height - screen.1) / self.pixels_per_unit,
        )
    }

    pub fn length_to_screen(&self, length: f64) -> f64 {
        length * self.pixels_per_unit
    }
}
