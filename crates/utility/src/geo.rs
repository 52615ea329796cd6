pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Rectangular latitude/longitude bounds, used to prefilter rows before an
/// exact distance calculation.
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_latitude
            && latitude <= self.max_latitude
            && longitude >= self.min_longitude
            && longitude <= self.max_longitude
    }
}

/// Bounding box around a center point, sized so every point within
/// `radius_km` of the center lies inside it.
pub fn bounding_box(latitude: f64, longitude: f64, radius_km: f64) -> BoundingBox {
    let latitude_rad = latitude.to_radians();
    let longitude_rad = longitude.to_radians();

    let delta_lat = radius_km / EARTH_RADIUS_KM;
    // longitude degrees shrink towards the poles
    let delta_lon = radius_km / (EARTH_RADIUS_KM * latitude_rad.cos());

    BoundingBox {
        min_latitude: (latitude_rad - delta_lat).to_degrees(),
        max_latitude: (latitude_rad + delta_lat).to_degrees(),
        min_longitude: (longitude_rad - delta_lon).to_degrees(),
        max_longitude: (longitude_rad + delta_lon).to_degrees(),
    }
}

/// Great-circle distance between two points in kilometers.
pub fn haversine_distance_km(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let lat_1 = latitude_1.to_radians();
    let lat_2 = latitude_2.to_radians();
    let delta_lat = (latitude_2 - latitude_1).to_radians();
    let delta_lon = (longitude_2 - longitude_1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat_1.cos() * lat_2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}
