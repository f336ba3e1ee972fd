use crate::coord::{GeoError, LatLng};

use approx::assert_relative_eq;
use geo::Point;

#[test]
fn rejects_out_of_range() {
    assert!(matches!(
        LatLng::from_degree(91.0, 0.0),
        Err(GeoError::InvalidCoordinate(_))
    ));
    assert!(matches!(
        LatLng::from_degree(0.0, -180.0),
        Err(GeoError::InvalidCoordinate(_))
    ));
}

#[test]
fn same_drop_point_compares_equal() {
    let a = LatLng::from_degree(-1.283147351126288, 36.822524070739746).unwrap();
    let b = LatLng::from_degree(-1.2831473511, 36.8225240707).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn geo_point_is_lng_lat() {
    let latlng = LatLng::from_degree(-1.2861, 36.8345).unwrap();
    let point = Point::from(latlng);

    assert_relative_eq!(point.x(), 36.8345, epsilon = 1e-7);
    assert_relative_eq!(point.y(), -1.2861, epsilon = 1e-7);
    assert_eq!(LatLng::try_from(point).unwrap(), latlng);
}

#[test]
fn parses_lat_lng_pair() {
    let latlng: LatLng = " -1.286107765621784 , 36.83449745178223".parse().unwrap();
    assert_relative_eq!(latlng.lat(), -1.2861078, epsilon = 1e-7);
    assert_relative_eq!(latlng.lng(), 36.8344975, epsilon = 1e-7);

    assert!(matches!(
        "36.83".parse::<LatLng>(),
        Err(GeoError::Unparseable(_))
    ));
    assert!(matches!(
        "north,east".parse::<LatLng>(),
        Err(GeoError::Unparseable(_))
    ));
}
