//! Static CF term knowledge: canonical units and documented defaults.

use gridmeta_units::Units;

/// Canonical unit spellings for standard CF coordinate-conversion terms.
///
/// Terms absent from this table (for example `ptop`) have no canonical
/// units.
const CANONICAL_UNITS: &[(&str, &str)] = &[
    ("earth_radius", "m"),
    ("false_easting", "m"),
    ("false_northing", "m"),
    ("grid_north_pole_latitude", "degrees_north"),
    ("grid_north_pole_longitude", "degrees_east"),
    ("inverse_flattening", "1"),
    ("latitude_of_projection_origin", "degrees_north"),
    ("longitude_of_central_meridian", "degrees_east"),
    ("longitude_of_prime_meridian", "degrees_east"),
    ("longitude_of_projection_origin", "degrees_east"),
    ("north_pole_grid_longitude", "degrees"),
    ("perspective_point_height", "m"),
    ("scale_factor_at_central_meridian", "1"),
    ("scale_factor_at_projection_origin", "1"),
    ("semi_major_axis", "m"),
    ("semi_minor_axis", "m"),
    ("standard_parallel", "degrees_north"),
    ("straight_vertical_longitude_from_pole", "degrees"),
];

/// Terms with a documented default value. The conventions happen to
/// document zero for every listed term, but the table carries the value
/// so a future non-zero default is a one-line change.
const DEFAULTED_TERMS: &[(&str, f64)] = &[
    ("a", 0.0),
    ("b", 0.0),
    ("depth", 0.0),
    ("eta", 0.0),
    ("false_easting", 0.0),
    ("false_northing", 0.0),
    ("longitude_of_prime_meridian", 0.0),
    ("north_pole_grid_longitude", 0.0),
    ("nsigma", 0.0),
    ("p0", 0.0),
    ("ps", 0.0),
    ("ptop", 0.0),
    ("s", 0.0),
    ("sigma", 0.0),
    ("zlev", 0.0),
    ("ztop", 0.0),
];

/// Return the canonical units for a standard CF coordinate-conversion
/// term, or `None` if there are not any.
///
/// # Examples
///
/// ```
/// use gridmeta_ref::knowledge::canonical_units;
/// use gridmeta_units::Units;
///
/// let height = canonical_units("perspective_point_height").unwrap();
/// assert!(height.equals(&Units::parse("m").unwrap()));
/// assert!(canonical_units("ptop").is_none());
/// ```
pub fn canonical_units(term: &str) -> Option<Units> {
    let spec = CANONICAL_UNITS
        .iter()
        .find(|(name, _)| *name == term)
        .map(|(_, spec)| *spec)?;
    Units::parse(spec).ok()
}

/// Return the default value for an unset standard CF coordinate-
/// conversion term, or 0.0 if one is not documented. Use
/// [`has_documented_default`] to tell the two cases apart.
pub fn default_value(term: &str) -> f64 {
    DEFAULTED_TERMS
        .iter()
        .find(|(name, _)| *name == term)
        .map(|(_, value)| *value)
        .unwrap_or(0.0)
}

/// True when the conventions document a default for this term.
pub fn has_documented_default(term: &str) -> bool {
    DEFAULTED_TERMS.iter().any(|(name, _)| *name == term)
}
