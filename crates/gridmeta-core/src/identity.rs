//! Canonical identity resolution over construct properties.

use crate::property::PropertyMap;

/// A construct whose canonical identity can be resolved from its
/// properties.
///
/// The identity is the first found of:
///
/// 1. the `standard_name` property;
/// 2. the `cf_role` property, as `"cf_role=<value>"`;
/// 3. the `long_name` property, as `"long_name=<value>"`;
/// 4. the persisted variable name, as `"ncvar%<name>"`;
/// 5. the caller-supplied default.
///
/// Properties include any inherited from an owning construct: inherited
/// values are merged underneath the construct's own before the chain is
/// evaluated, so an explicit property always wins over an inherited one
/// of the same name. The merge produces a scratch copy; the construct is
/// never mutated.
pub trait Identified {
    /// The construct's own explicit properties.
    fn properties(&self) -> &PropertyMap;

    /// Properties inherited from an owning construct, if any.
    fn inherited_properties(&self) -> Option<&PropertyMap> {
        None
    }

    /// The persisted external variable name, if any.
    fn nc_variable(&self) -> Option<&str> {
        None
    }

    /// Resolve the canonical identity via the fallback chain.
    fn identity(&self, default: &str) -> String {
        let merged;
        let props = match self.inherited_properties() {
            Some(inherited) if !inherited.is_empty() => {
                merged = self.properties().merge_under(inherited);
                &merged
            }
            _ => self.properties(),
        };

        if let Some(value) = props.get("standard_name") {
            return value.to_string();
        }
        if let Some(value) = props.get("cf_role") {
            return format!("cf_role={value}");
        }
        if let Some(value) = props.get("long_name") {
            return format!("long_name={value}");
        }
        if let Some(name) = self.nc_variable() {
            return format!("ncvar%{name}");
        }
        default.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Construct {
        properties: PropertyMap,
        inherited: Option<PropertyMap>,
        ncvar: Option<String>,
    }

    impl Identified for Construct {
        fn properties(&self) -> &PropertyMap {
            &self.properties
        }
        fn inherited_properties(&self) -> Option<&PropertyMap> {
            self.inherited.as_ref()
        }
        fn nc_variable(&self) -> Option<&str> {
            self.ncvar.as_deref()
        }
    }

    fn construct(props: &[(&str, &str)]) -> Construct {
        Construct {
            properties: props.iter().copied().collect(),
            inherited: None,
            ncvar: None,
        }
    }

    #[test]
    fn standard_name_wins() {
        let c = construct(&[
            ("standard_name", "air_temperature"),
            ("long_name", "Temperature"),
        ]);
        assert_eq!(c.identity(""), "air_temperature");
    }

    #[test]
    fn cf_role_before_long_name() {
        let c = construct(&[("cf_role", "timeseries_id"), ("long_name", "Station")]);
        assert_eq!(c.identity(""), "cf_role=timeseries_id");
    }

    #[test]
    fn long_name_is_prefixed() {
        let c = construct(&[("long_name", "Longitude")]);
        assert_eq!(c.identity(""), "long_name=Longitude");
    }

    #[test]
    fn ncvar_fallback_then_default() {
        let mut c = construct(&[]);
        c.ncvar = Some("lon_bnds".to_string());
        assert_eq!(c.identity(""), "ncvar%lon_bnds");
        c.ncvar = None;
        assert_eq!(c.identity("fallback"), "fallback");
    }

    #[test]
    fn explicit_property_wins_over_inherited() {
        let mut c = construct(&[("long_name", "A different long name")]);
        c.inherited = Some(
            [("foo", "bar"), ("long_name", "Longitude")]
                .into_iter()
                .collect(),
        );
        assert_eq!(c.identity(""), "long_name=A different long name");

        // Removing the explicit property exposes the inherited one.
        c.properties.del("long_name");
        assert_eq!(c.identity(""), "long_name=Longitude");
    }

    #[test]
    fn inherited_standard_name_outranks_own_long_name() {
        let mut c = construct(&[("long_name", "Station count")]);
        c.inherited = Some([("standard_name", "latitude")].into_iter().collect());
        assert_eq!(c.identity(""), "latitude");
    }
}
