//! Persisted key layout.

/// Key holding the latitude of region `id`.
pub fn lat_key(namespace: &str, id: &str) -> String {
    format!("{namespace}.region.coordinates.{id}.lat")
}

/// Key holding the longitude of region `id`.
pub fn long_key(namespace: &str, id: &str) -> String {
    format!("{namespace}.region.coordinates.{id}.long")
}

/// Key holding the radius of region `id`.
pub fn radius_key(namespace: &str, id: &str) -> String {
    format!("{namespace}.region.{id}.radius")
}
