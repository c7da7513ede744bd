use glam::DVec3;

/// A marker coordinate in source map pixel space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    pub x: f64,
    pub y: f64,
}

/// Half-extents of the source map image.
///
/// The projection normalizes against HALF the image dimensions, so callers
/// must not pass the raw asset size. `of_image` keeps the halving in one
/// place.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MapSize {
    pub width: f64,
    pub height: f64,
}

impl MapSize {
    pub fn new(half_width: f64, half_height: f64) -> Self {
        Self {
            width: half_width,
            height: half_height,
        }
    }

    /// Derive the half-extents from the raw source image dimensions.
    pub fn of_image(image_width: f64, image_height: f64) -> Self {
        Self::new(image_width / 2.0, image_height / 2.0)
    }
}

/// Project a map coordinate onto a sphere of the given radius.
///
/// The map x axis spans a latitude-like angle in `[-180°, 180°]` and the
/// y axis a longitude-like angle in `[-90°, 90°]`; the horizontal radius is
/// foreshortened by the longitude band. Pure and deterministic; NaN inputs
/// propagate to the output.
pub fn project(geo: GeoPoint, map: MapSize, sphere_radius: f64) -> DVec3 {
    let lat_deg = ((geo.x - map.width) / map.width) * -180.0;
    let lon_deg = ((geo.y - map.height) / map.height) * -90.0;

    let lat = lat_deg.to_radians();
    let lon = lon_deg.to_radians();

    let horizontal_radius = lon.cos() * sphere_radius;
    DVec3::new(
        lat.cos() * horizontal_radius,
        lon.sin() * sphere_radius,
        lat.sin() * horizontal_radius,
    )
}
