//! Parsed physical unit values: equivalence, equality, and conversion.

use crate::error::UnitError;
use std::f64::consts::PI;
use std::fmt;

/// Number of base dimensions tracked by [`Units`].
const NDIMS: usize = 5;

/// Names of the base atoms, indexed in the same order as the exponent
/// vector: length, mass, time, temperature, plane angle.
const BASE_ATOMS: [&str; NDIMS] = ["m", "kg", "s", "K", "rad"];

/// A physical unit: a scale factor to coherent base units plus an
/// exponent over each base dimension.
///
/// Two units are *equivalent* when they measure the same physical
/// dimension (`degrees` and `radians`), and *equal* when they are
/// equivalent and denote the same magnitude (`degrees` and
/// `0.017453292519943295 rad`). Values can be converted between
/// equivalent units.
///
/// The supported vocabulary covers the unit spellings that appear as
/// canonical units of CF grid-mapping and formula terms: metres with
/// common SI prefixes, seconds through days, pascals and bars, kelvin,
/// radians and the `degrees`/`degrees_north`/`degrees_east` family,
/// dimensionless `1`, and percent.
///
/// # Examples
///
/// ```
/// use gridmeta_units::Units;
///
/// let km = Units::parse("km").unwrap();
/// let m = Units::parse("m").unwrap();
/// assert!(km.equivalent(&m));
/// assert!(!km.equals(&m));
/// assert_eq!(km.convert(2.0, &m), Some(2000.0));
/// ```
#[derive(Clone)]
pub struct Units {
    scale: f64,
    dims: [i8; NDIMS],
}

impl Units {
    /// The dimensionless unit `1`.
    pub fn one() -> Self {
        Self {
            scale: 1.0,
            dims: [0; NDIMS],
        }
    }

    /// Parse a unit specification string.
    ///
    /// Grammar: an optional leading numeric factor, followed by atoms
    /// separated by whitespace or `.`, each with an optional signed
    /// integer exponent (`m2`, `s-1`, `m^2`). The empty string and `"1"`
    /// denote the dimensionless unit.
    pub fn parse(spec: &str) -> Result<Self, UnitError> {
        let spec = spec.trim();
        if spec.is_empty() || spec == "1" {
            return Ok(Self::one());
        }

        let mut out = Self::one();
        let mut tokens = spec.split_whitespace().peekable();

        if let Some(first) = tokens.peek() {
            if let Ok(factor) = first.parse::<f64>() {
                if !factor.is_finite() || factor <= 0.0 {
                    return Err(UnitError::Malformed {
                        input: spec.to_string(),
                    });
                }
                out.scale *= factor;
                tokens.next();
            }
        }

        let mut seen_atom = false;
        for token in tokens {
            for piece in token.split('.').filter(|p| !p.is_empty()) {
                let (scale, dims, exponent) = parse_atom(piece, spec)?;
                out.scale *= scale.powi(exponent);
                for (d, base) in out.dims.iter_mut().zip(dims) {
                    *d = checked_dim(*d as i32 + base as i32 * exponent, spec)?;
                }
                seen_atom = true;
            }
        }

        if !seen_atom && out.scale == 1.0 {
            // Nothing but separators.
            return Err(UnitError::Malformed {
                input: spec.to_string(),
            });
        }
        Ok(out)
    }

    /// True when `self` and `other` measure the same physical dimension,
    /// ignoring scale.
    pub fn equivalent(&self, other: &Units) -> bool {
        self.dims == other.dims
    }

    /// True when `self` and `other` are equivalent and have the same
    /// magnitude, within floating-point round-off.
    pub fn equals(&self, other: &Units) -> bool {
        self.equivalent(other) && scales_close(self.scale, other.scale)
    }

    /// Convert a value expressed in `self` into `to`.
    ///
    /// Returns `None` when the units are not equivalent.
    pub fn convert(&self, value: f64, to: &Units) -> Option<f64> {
        if !self.equivalent(to) {
            return None;
        }
        Some(value * self.scale / to.scale)
    }

    /// True for the dimensionless unit.
    pub fn is_dimensionless(&self) -> bool {
        self.dims == [0; NDIMS]
    }

    /// Canonical definition string: the scale factor (omitted when 1)
    /// followed by base atoms with exponents, e.g. `"m"`, `"1000 m"`,
    /// `"0.017453292519943295 rad"`. Physically-equal spellings produce
    /// the same definition, which makes it usable as an intern-cache key.
    pub fn definition(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !scales_close(self.scale, 1.0) {
            parts.push(format!("{}", self.scale));
        }
        for (atom, &exp) in BASE_ATOMS.iter().zip(&self.dims) {
            match exp {
                0 => {}
                1 => parts.push((*atom).to_string()),
                e => parts.push(format!("{atom}{e}")),
            }
        }
        if parts.is_empty() {
            "1".to_string()
        } else {
            parts.join(" ")
        }
    }
}

impl fmt::Debug for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Units({})", self.definition())
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition())
    }
}

impl PartialEq for Units {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// Relative scale comparison tolerating accumulated round-off from
/// factor multiplication during parsing.
fn scales_close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 4.0 * f64::EPSILON * a.abs().max(b.abs())
}

/// Clamp a dimension exponent into the `i8` storage range.
fn checked_dim(value: i32, spec: &str) -> Result<i8, UnitError> {
    i8::try_from(value).map_err(|_| UnitError::Malformed {
        input: spec.to_string(),
    })
}

/// Split an atom token into its name and optional integer exponent,
/// then look the name up in the vocabulary.
fn parse_atom(piece: &str, spec: &str) -> Result<(f64, [i8; NDIMS], i32), UnitError> {
    let (name, exponent) = split_exponent(piece);
    let exponent = match exponent {
        Some(text) => text.parse::<i32>().map_err(|_| UnitError::Malformed {
            input: spec.to_string(),
        })?,
        None => 1,
    };
    if name.is_empty() {
        return Err(UnitError::Malformed {
            input: spec.to_string(),
        });
    }
    let (scale, dims) = atom(name).ok_or_else(|| UnitError::UnknownUnit {
        name: name.to_string(),
    })?;
    Ok((scale, dims, exponent))
}

/// Separate a trailing signed integer exponent (with optional `^`) from
/// the atom name, e.g. `"s-1"` → `("s", Some("-1"))`.
fn split_exponent(token: &str) -> (&str, Option<&str>) {
    let digits_start = token
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);
    let Some(mut start) = digits_start else {
        return (token, None);
    };
    if start == 0 {
        // Purely numeric tokens are not atoms.
        return (token, None);
    }
    let bytes = token.as_bytes();
    if bytes[start - 1] == b'-' || bytes[start - 1] == b'+' {
        if start == 1 {
            return (token, None);
        }
        start -= 1;
    }
    let (mut name, exp) = (&token[..start], Some(&token[start..]));
    name = name.strip_suffix('^').unwrap_or(name);
    (name, exp)
}

/// The supported unit vocabulary: atom name to (scale, dimension exponents).
/// Dimension order: length, mass, time, temperature, plane angle.
fn atom(name: &str) -> Option<(f64, [i8; NDIMS])> {
    const L: [i8; NDIMS] = [1, 0, 0, 0, 0];
    const M: [i8; NDIMS] = [0, 1, 0, 0, 0];
    const T: [i8; NDIMS] = [0, 0, 1, 0, 0];
    const K: [i8; NDIMS] = [0, 0, 0, 1, 0];
    const A: [i8; NDIMS] = [0, 0, 0, 0, 1];
    const ONE: [i8; NDIMS] = [0; NDIMS];
    // Pa = kg m-1 s-2
    const PRESSURE: [i8; NDIMS] = [-1, 1, -2, 0, 0];

    let entry = match name {
        "m" | "meter" | "meters" | "metre" | "metres" => (1.0, L),
        "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => (1000.0, L),
        "cm" => (0.01, L),
        "mm" => (0.001, L),
        "kg" => (1.0, M),
        "g" | "gram" | "grams" => (1e-3, M),
        "s" | "sec" | "second" | "seconds" => (1.0, T),
        "min" | "minute" | "minutes" => (60.0, T),
        "h" | "hr" | "hour" | "hours" => (3600.0, T),
        "day" | "days" => (86400.0, T),
        "K" | "kelvin" => (1.0, K),
        "Pa" | "pascal" | "pascals" => (1.0, PRESSURE),
        "hPa" | "mbar" | "millibar" | "millibars" => (100.0, PRESSURE),
        "bar" => (1e5, PRESSURE),
        "rad" | "radian" | "radians" => (1.0, A),
        "degree" | "degrees" | "deg" | "degree_north" | "degrees_north" | "degree_N"
        | "degrees_N" | "degree_east" | "degrees_east" | "degree_E" | "degrees_E" => {
            (PI / 180.0, A)
        }
        "percent" | "%" => (0.01, ONE),
        _ => return None,
    };
    Some(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_dimensionless() {
        assert!(Units::parse("").unwrap().is_dimensionless());
        assert!(Units::parse("1").unwrap().is_dimensionless());
        assert_eq!(Units::parse("1").unwrap().definition(), "1");
    }

    #[test]
    fn parse_metre_spellings_equal() {
        let m = Units::parse("m").unwrap();
        for spelling in ["meter", "meters", "metre", "metres"] {
            assert!(Units::parse(spelling).unwrap().equals(&m), "{spelling}");
        }
    }

    #[test]
    fn km_equivalent_not_equal_to_m() {
        let km = Units::parse("km").unwrap();
        let m = Units::parse("m").unwrap();
        assert!(km.equivalent(&m));
        assert!(!km.equals(&m));
    }

    #[test]
    fn convert_km_to_m() {
        let km = Units::parse("km").unwrap();
        let m = Units::parse("m").unwrap();
        assert_eq!(km.convert(2.0, &m), Some(2000.0));
        assert_eq!(m.convert(500.0, &km), Some(0.5));
    }

    #[test]
    fn convert_degrees_to_radians() {
        let deg = Units::parse("degrees").unwrap();
        let rad = Units::parse("radians").unwrap();
        let value = deg.convert(180.0, &rad).unwrap();
        assert!((value - PI).abs() < 1e-12);
    }

    #[test]
    fn convert_rejects_inequivalent() {
        let m = Units::parse("m").unwrap();
        let s = Units::parse("s").unwrap();
        assert_eq!(m.convert(1.0, &s), None);
    }

    #[test]
    fn degrees_north_and_east_are_equivalent_angles() {
        let north = Units::parse("degrees_north").unwrap();
        let east = Units::parse("degrees_east").unwrap();
        let rad = Units::parse("rad").unwrap();
        assert!(north.equals(&east));
        assert!(north.equivalent(&rad));
    }

    #[test]
    fn definition_round_trips_through_parse() {
        for spec in ["m", "km", "degrees_north", "hPa", "m s-1", "m2"] {
            let u = Units::parse(spec).unwrap();
            let reparsed = Units::parse(&u.definition()).unwrap();
            assert!(u.equals(&reparsed), "{spec} -> {}", u.definition());
        }
    }

    #[test]
    fn compound_with_exponents() {
        let speed = Units::parse("m s-1").unwrap();
        let speed_caret = Units::parse("m.s^-1").unwrap();
        assert!(speed.equals(&speed_caret));
        assert_eq!(speed.definition(), "m s-1");
    }

    #[test]
    fn leading_factor() {
        let u = Units::parse("0.017453292519943295 rad").unwrap();
        let deg = Units::parse("degrees").unwrap();
        assert!(u.equals(&deg));
    }

    #[test]
    fn hpa_versus_pa() {
        let hpa = Units::parse("hPa").unwrap();
        let pa = Units::parse("Pa").unwrap();
        assert!(hpa.equivalent(&pa));
        assert_eq!(hpa.convert(10.0, &pa), Some(1000.0));
    }

    #[test]
    fn unknown_atom_is_an_error() {
        assert!(matches!(
            Units::parse("furlong"),
            Err(UnitError::UnknownUnit { .. })
        ));
    }

    #[test]
    fn malformed_inputs_are_errors() {
        assert!(matches!(
            Units::parse("-3 m"),
            Err(UnitError::Malformed { .. })
        ));
        assert!(Units::parse("...").is_err());
    }

    proptest! {
        #[test]
        fn conversion_round_trip(value in -1e6f64..1e6) {
            let km = Units::parse("km").unwrap();
            let m = Units::parse("m").unwrap();
            let there = km.convert(value, &m).unwrap();
            let back = m.convert(there, &km).unwrap();
            prop_assert!((back - value).abs() <= 1e-9 * value.abs().max(1.0));
        }

        #[test]
        fn equals_implies_equivalent(spec in prop_oneof![
            Just("m"), Just("km"), Just("degrees"), Just("rad"), Just("hPa"), Just("1"),
        ]) {
            let a = Units::parse(spec).unwrap();
            let b = Units::parse(spec).unwrap();
            prop_assert!(a.equals(&b));
            prop_assert!(a.equivalent(&b));
        }
    }
}
