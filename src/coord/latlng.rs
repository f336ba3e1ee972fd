use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use crate::coord::error::GeoError;

pub type NanoDegree = i64;
pub type Degree = f64;

/// `LatLng`
/// The latitude, longitude pair structure, geotags a marker with a location.
///
/// Positions are held at a fixed 1e-7 degree resolution so two
/// reports of the same drop point compare equal.
///
/// ```rust
/// use dragroute::coord::LatLng;
/// let latlng = LatLng::from_degree(-1.2831, 36.8225).unwrap();
/// println!("Position: {}", latlng);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatLng {
    lat: NanoDegree,
    lng: NanoDegree,
}

impl LatLng {
    pub fn from_degree(lat: Degree, lng: Degree) -> Result<Self, GeoError> {
        if !(lat > -90f64 && lat < 90f64) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Latitude must be greater than -90 and less than 90. Given: {}",
                lat
            )));
        }

        if !(lng < 180f64 && lng > -180f64) {
            return Err(GeoError::InvalidCoordinate(format!(
                "Longitude must be greater than -180 and less than 180. Given: {}",
                lng
            )));
        }

        Ok(Self::from_degree_unchecked(lat, lng))
    }

    pub fn from_degree_unchecked(lat: Degree, lng: Degree) -> Self {
        LatLng {
            lat: (lat * 1e7).round() as NanoDegree,
            lng: (lng * 1e7).round() as NanoDegree,
        }
    }

    pub fn lat(&self) -> Degree {
        self.lat as f64 * 1e-7
    }

    pub fn lng(&self) -> Degree {
        self.lng as f64 * 1e-7
    }
}

impl From<LatLng> for geo::Coord {
    fn from(value: LatLng) -> Self {
        geo::coord! { x: value.lng(), y: value.lat() }
    }
}

impl From<LatLng> for geo::Point {
    fn from(value: LatLng) -> Self {
        geo::Point(value.into())
    }
}

impl TryFrom<geo::Point> for LatLng {
    type Error = GeoError;

    fn try_from(point: geo::Point) -> Result<Self, Self::Error> {
        LatLng::from_degree(point.y(), point.x())
    }
}

impl FromStr for LatLng {
    type Err = GeoError;

    /// Format is: `lat,lng`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| GeoError::Unparseable(s.to_string()))?;

        let lat = lat
            .trim()
            .parse::<Degree>()
            .map_err(|_| GeoError::Unparseable(s.to_string()))?;
        let lng = lng
            .trim()
            .parse::<Degree>()
            .map_err(|_| GeoError::Unparseable(s.to_string()))?;

        LatLng::from_degree(lat, lng)
    }
}

impl Debug for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "POINT({} {})", self.lng(), self.lat())
    }
}

impl Display for LatLng {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LatLng({}, {})", self.lat(), self.lng())
    }
}
