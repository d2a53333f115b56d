//! Positional/keyword argument marshaling driven by task parameter definitions.

use indexmap::IndexMap;
use serde_json::Value;

use jobdesk_protocols::{Kwargs, Parameters};

/// Task values split into positional and keyword buckets.
///
/// A `None` slot is a parameter the operator left unset. It still occupies its place in
/// whichever bucket it belongs to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitArgs {
    pub args: Vec<Option<Value>>,
    pub kwargs: IndexMap<String, Option<Value>>,
}

impl SplitArgs {
    /// Wire form: unset positional slots become `null`, unset keyword entries are left out.
    pub fn into_wire(self) -> (Vec<Value>, Kwargs) {
        let args = self
            .args
            .into_iter()
            .map(|v| v.unwrap_or(Value::Null))
            .collect();
        let kwargs = self
            .kwargs
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect();
        (args, kwargs)
    }
}

/// Maps between a keyed value map and positional/keyword argument lists.
pub struct ParameterMarshaler;

impl ParameterMarshaler {
    /// Walk `parameters` in order: `list` parameters go to `args`, everything else to `kwargs`.
    pub fn split(parameters: &Parameters, values: &Kwargs) -> SplitArgs {
        let mut split = SplitArgs::default();
        for (name, spec) in parameters {
            let value = values.get(name).cloned();
            if spec.is_positional() {
                split.args.push(value);
            } else {
                split.kwargs.insert(name.clone(), value);
            }
        }
        split
    }

    /// Rebuild a keyed value map from a stored job.
    ///
    /// Positional value `i` is assigned to the `i`-th parameter name; values past the last
    /// parameter are dropped. `explicit` is laid over the result and wins on shared keys.
    /// If the task's parameters changed since the job was stored the mapping is stale; it
    /// is not corrected.
    pub fn rejoin(parameters: &Parameters, positional: &[Value], explicit: &Kwargs) -> Kwargs {
        let mut kwargs: Kwargs = parameters
            .keys()
            .zip(positional)
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        for (name, value) in explicit {
            kwargs.insert(name.clone(), value.clone());
        }
        kwargs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobdesk_protocols::ParamSpec;
    use serde_json::json;

    fn params(spec: &[(&str, &str)]) -> Parameters {
        spec.iter()
            .map(|(name, ty)| (name.to_string(), ParamSpec::new(*name, *ty)))
            .collect()
    }

    fn kwargs(value: Value) -> Kwargs {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_split_list_and_scalar() {
        let parameters = params(&[("a", "list"), ("b", "int")]);
        let split = ParameterMarshaler::split(&parameters, &kwargs(json!({"a": [1, 2], "b": 5})));
        assert_eq!(split.args, vec![Some(json!([1, 2]))]);
        assert_eq!(split.kwargs.len(), 1);
        assert_eq!(split.kwargs["b"], Some(json!(5)));

        let (args, kw) = split.into_wire();
        assert_eq!(args, vec![json!([1, 2])]);
        assert_eq!(Value::Object(kw), json!({"b": 5}));
    }

    #[test]
    fn test_split_follows_parameter_order() {
        let parameters = params(&[("second", "list"), ("first", "list"), ("z", "string")]);
        let values = kwargs(json!({"first": [1], "z": "zz", "second": [2]}));
        let split = ParameterMarshaler::split(&parameters, &values);
        assert_eq!(split.args, vec![Some(json!([2])), Some(json!([1]))]);
    }

    #[test]
    fn test_split_keeps_unset_parameters() {
        let parameters = params(&[("hosts", "list"), ("zone", "string"), ("ports", "list")]);
        let split = ParameterMarshaler::split(&parameters, &kwargs(json!({"ports": [22]})));
        assert_eq!(split.args, vec![None, Some(json!([22]))]);
        assert_eq!(split.kwargs.get("zone"), Some(&None));

        let (args, kw) = split.into_wire();
        assert_eq!(args, vec![Value::Null, json!([22])]);
        assert!(kw.is_empty());
    }

    #[test]
    fn test_split_ignores_values_without_parameter() {
        let parameters = params(&[("b", "int")]);
        let split = ParameterMarshaler::split(&parameters, &kwargs(json!({"b": 1, "stray": 2})));
        assert!(split.args.is_empty());
        assert!(!split.kwargs.contains_key("stray"));
    }

    #[test]
    fn test_split_partitions_parameter_keys() {
        let parameters = params(&[("a", "list"), ("b", "int"), ("c", "list"), ("d", "dict")]);
        let split = ParameterMarshaler::split(&parameters, &Kwargs::new());
        assert_eq!(split.args.len() + split.kwargs.len(), parameters.len());
        assert!(!split.kwargs.contains_key("a"));
        assert!(!split.kwargs.contains_key("c"));
    }

    #[test]
    fn test_rejoin_positional_then_explicit() {
        let parameters = params(&[("a", "string"), ("b", "int")]);
        let rejoined = ParameterMarshaler::rejoin(&parameters, &[json!("foo")], &kwargs(json!({"b": 5})));
        assert_eq!(Value::Object(rejoined), json!({"a": "foo", "b": 5}));
    }

    #[test]
    fn test_rejoin_explicit_wins_on_overlap() {
        let parameters = params(&[("a", "list"), ("b", "int")]);
        let rejoined = ParameterMarshaler::rejoin(
            &parameters,
            &[json!([1]), json!(2)],
            &kwargs(json!({"b": 9})),
        );
        assert_eq!(rejoined["a"], json!([1]));
        assert_eq!(rejoined["b"], json!(9));
    }

    #[test]
    fn test_rejoin_drops_positions_past_parameters() {
        let parameters = params(&[("a", "list")]);
        let rejoined = ParameterMarshaler::rejoin(&parameters, &[json!(1), json!(2)], &Kwargs::new());
        assert_eq!(Value::Object(rejoined), json!({"a": 1}));
    }

    #[test]
    fn test_rejoin_without_parameters_keeps_explicit_only() {
        let rejoined = ParameterMarshaler::rejoin(
            &Parameters::new(),
            &[json!("lost")],
            &kwargs(json!({"kept": true})),
        );
        assert_eq!(Value::Object(rejoined), json!({"kept": true}));
    }
}
