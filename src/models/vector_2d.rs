use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

pub trait FromCoordinates<T> {
    /// Creates a new instance of the struct from the given coordinates.
    /// # Example
    /// ```
    /// use rs_particle_lab::models::{FromCoordinates, Vector2D};
    ///
    /// let v = Vector2D::from_coord((1.0, 2.0));
    /// assert_eq!(v.x, 1.0);
    /// assert_eq!(v.y, 2.0);
    /// ```
    fn from_coord(position: T) -> Self;
}

pub trait ToCoordinates<T> {
    /// Converts the struct to a tuple of coordinates.
    /// # Example
    /// ```
    /// use rs_particle_lab::models::{ToCoordinates, Vector2D};
    ///
    /// let v = Vector2D::new(1.0, 2.0);
    /// assert_eq!(v.to_coord(), (1.0, 2.0));
    /// ```
    fn to_coord(&self) -> T;
}

/// A 2D vector in the physics frame (x to the right, y up).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Builds a vector of the given length pointing along `angle` (radians, counter-clockwise from +x).
    pub fn from_polar(length: f64, angle: f64) -> Self {
        Vector2D {
            x: length * angle.cos(),
            y: length * angle.sin(),
        }
    }

    pub fn dot(&self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(*self)
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Rotates the vector by +90 degrees.
    pub fn perpendicular(&self) -> Self {
        Vector2D { x: -self.y, y: self.x }
    }

    /// Returns the unit vector in the same direction, or `None` for the zero vector.
    ///
    /// # Example
    /// ```
    /// use rs_particle_lab::models::Vector2D;
    ///
    /// let unit = Vector2D::new(3.0, 4.0).normalized().unwrap();
    /// assert!((unit.x - 0.6).abs() < 1e-12);
    /// assert!(Vector2D::ZERO.normalized().is_none());
    /// ```
    pub fn normalized(&self) -> Option<Self> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        Some(*self * (1.0 / length))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl FromCoordinates<(f64, f64)> for Vector2D {
    fn from_coord(position: (f64, f64)) -> Self {
        Vector2D {
            x: position.0,
            y: position.1,
        }
    }
}

impl ToCoordinates<(f64, f64)> for Vector2D {
    fn to_coord(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Vector2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, rhs: Vector2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Vector2D {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f64> for Vector2D {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }
}
