// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::HashMap;

use crate::Value;

/// Values bound to `$1`-style positional or `$name`-style named parameters of a statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Params {
	#[default]
	None,
	Positional(Vec<Value>),
	Named(HashMap<String, Value>),
}

impl Params {
	/// `$1` resolves to index 1, so positions are one-based.
	pub fn get_positional(&self, position: usize) -> Option<&Value> {
		match self {
			Params::Positional(values) if position > 0 => values.get(position - 1),
			_ => None,
		}
	}

	pub fn get_named(&self, name: &str) -> Option<&Value> {
		match self {
			Params::Named(map) => map.get(name),
			_ => None,
		}
	}

	pub fn is_empty(&self) -> bool {
		match self {
			Params::None => true,
			Params::Positional(values) => values.is_empty(),
			Params::Named(map) => map.is_empty(),
		}
	}
}

impl From<()> for Params {
	fn from(_: ()) -> Self {
		Params::None
	}
}

impl From<Vec<Value>> for Params {
	fn from(values: Vec<Value>) -> Self {
		Params::Positional(values)
	}
}

impl From<HashMap<String, Value>> for Params {
	fn from(map: HashMap<String, Value>) -> Self {
		Params::Named(map)
	}
}

impl<const N: usize> From<[Value; N]> for Params {
	fn from(values: [Value; N]) -> Self {
		Params::Positional(values.to_vec())
	}
}

#[macro_export]
macro_rules! params {
    () => {
        $crate::Params::None
    };

    {} => {
        $crate::Params::None
    };

    { $($key:ident : $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::new();
            $(
                map.insert(stringify!($key).to_string(), $crate::value::IntoValue::into_value($value));
            )*
            $crate::Params::Named(map)
        }
    };

    [] => {
        $crate::Params::None
    };

    [ $($value:expr),+ $(,)? ] => {
        {
            let values = vec![
                $($crate::value::IntoValue::into_value($value)),*
            ];
            $crate::Params::Positional(values)
        }
    };
}
