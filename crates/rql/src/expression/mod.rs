// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod compile;

use std::fmt::{self, Display, Formatter};

pub use compile::compile_expression;
use reifydb_type::Fragment;

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Alias(AliasExpression),

	Add(AddExpression),

	And(AndExpression),

	Column(ColumnExpression),

	Constant(ConstantExpression),

	Div(DivExpression),

	Equal(EqualExpression),

	GreaterThan(GreaterThanExpression),

	GreaterThanEqual(GreaterThanEqualExpression),

	LessThan(LessThanExpression),

	LessThanEqual(LessThanEqualExpression),

	Mul(MulExpression),

	NotEqual(NotEqualExpression),

	Or(OrExpression),

	Parameter(ParameterExpression),

	Prefix(PrefixExpression),

	Rem(RemExpression),

	Sub(SubExpression),

	Xor(XorExpression),
}

impl Expression {
	pub fn fragment(&self) -> Fragment {
		match self {
			Expression::Alias(expr) => expr.fragment.clone(),
			Expression::Add(expr) => expr.fragment.clone(),
			Expression::And(expr) => expr.fragment.clone(),
			Expression::Column(expr) => expr.0.clone(),
			Expression::Constant(expr) => expr.fragment(),
			Expression::Div(expr) => expr.fragment.clone(),
			Expression::Equal(expr) => expr.fragment.clone(),
			Expression::GreaterThan(expr) => expr.fragment.clone(),
			Expression::GreaterThanEqual(expr) => expr.fragment.clone(),
			Expression::LessThan(expr) => expr.fragment.clone(),
			Expression::LessThanEqual(expr) => expr.fragment.clone(),
			Expression::Mul(expr) => expr.fragment.clone(),
			Expression::NotEqual(expr) => expr.fragment.clone(),
			Expression::Or(expr) => expr.fragment.clone(),
			Expression::Parameter(expr) => expr.fragment(),
			Expression::Prefix(expr) => expr.fragment.clone(),
			Expression::Rem(expr) => expr.fragment.clone(),
			Expression::Sub(expr) => expr.fragment.clone(),
			Expression::Xor(expr) => expr.fragment.clone(),
		}
	}

	/// Name of the column this expression produces when projected.
	pub fn column_name(&self) -> String {
		match self {
			Expression::Alias(alias) => alias.alias.name().to_string(),
			expr => expr.fragment().text().to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConstantExpression {
	Undefined {
		fragment: Fragment,
	},
	Bool {
		fragment: Fragment,
	},
	// any number
	Number {
		fragment: Fragment,
	},
	// any textual representation
	Text {
		fragment: Fragment,
	},
}

impl ConstantExpression {
	pub fn fragment(&self) -> Fragment {
		match self {
			ConstantExpression::Undefined {
				fragment,
			}
			| ConstantExpression::Bool {
				fragment,
			}
			| ConstantExpression::Number {
				fragment,
			}
			| ConstantExpression::Text {
				fragment,
			} => fragment.clone(),
		}
	}
}

impl Display for ConstantExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ConstantExpression::Undefined {
				..
			} => write!(f, "undefined"),
			ConstantExpression::Bool {
				fragment,
			} => write!(f, "{}", fragment.text()),
			ConstantExpression::Number {
				fragment,
			} => write!(f, "{}", fragment.text()),
			ConstantExpression::Text {
				fragment,
			} => write!(f, "\"{}\"", fragment.text()),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnExpression(pub Fragment);

impl ColumnExpression {
	pub fn name(&self) -> &str {
		self.0.text()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentExpression(pub Fragment);

impl IdentExpression {
	pub fn name(&self) -> &str {
		self.0.text()
	}
}

impl Display for IdentExpression {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.text())
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterExpression {
	/// `$1` is position 1
	Positional {
		fragment: Fragment,
		position: usize,
	},
	Named {
		fragment: Fragment,
		name: String,
	},
}

impl ParameterExpression {
	pub fn fragment(&self) -> Fragment {
		match self {
			ParameterExpression::Positional {
				fragment,
				..
			}
			| ParameterExpression::Named {
				fragment,
				..
			} => fragment.clone(),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AliasExpression {
	pub alias: IdentExpression,
	pub expression: Box<Expression>,
	pub fragment: Fragment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PrefixOperator {
	Minus(Fragment),
	Plus(Fragment),
	Not(Fragment),
}

impl Display for PrefixOperator {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			PrefixOperator::Minus(_) => write!(f, "-"),
			PrefixOperator::Plus(_) => write!(f, "+"),
			PrefixOperator::Not(_) => write!(f, "not "),
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
	pub operator: PrefixOperator,
	pub expression: Box<Expression>,
	pub fragment: Fragment,
}

macro_rules! binary_expression {
	(
		$( $name:ident => $symbol:literal ),*
	) => {
		$(
			#[derive(Debug, Clone, PartialEq)]
			pub struct $name {
				pub left: Box<Expression>,
				pub right: Box<Expression>,
				pub fragment: Fragment,
			}

			impl $name {
				pub const SYMBOL: &'static str = $symbol;
			}

			impl Display for $name {
				fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
					write!(f, "({} {} {})", self.left, $symbol, self.right)
				}
			}
		)*
	};
}

binary_expression! {
	AddExpression => "+",
	SubExpression => "-",
	MulExpression => "*",
	DivExpression => "/",
	RemExpression => "%",
	EqualExpression => "==",
	NotEqualExpression => "!=",
	LessThanExpression => "<",
	LessThanEqualExpression => "<=",
	GreaterThanExpression => ">",
	GreaterThanEqualExpression => ">=",
	AndExpression => "and",
	OrExpression => "or",
	XorExpression => "xor"
}

impl Display for Expression {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Expression::Alias(AliasExpression {
				alias,
				expression,
				..
			}) => write!(f, "{} as {}", expression, alias),
			Expression::Add(expr) => Display::fmt(expr, f),
			Expression::And(expr) => Display::fmt(expr, f),
			Expression::Column(ColumnExpression(fragment)) => write!(f, "{}", fragment.text()),
			Expression::Constant(constant) => Display::fmt(constant, f),
			Expression::Div(expr) => Display::fmt(expr, f),
			Expression::Equal(expr) => Display::fmt(expr, f),
			Expression::GreaterThan(expr) => Display::fmt(expr, f),
			Expression::GreaterThanEqual(expr) => Display::fmt(expr, f),
			Expression::LessThan(expr) => Display::fmt(expr, f),
			Expression::LessThanEqual(expr) => Display::fmt(expr, f),
			Expression::Mul(expr) => Display::fmt(expr, f),
			Expression::NotEqual(expr) => Display::fmt(expr, f),
			Expression::Or(expr) => Display::fmt(expr, f),
			Expression::Parameter(param) => write!(f, "{}", param.fragment().text()),
			Expression::Prefix(PrefixExpression {
				operator,
				expression,
				..
			}) => write!(f, "({}{})", operator, expression),
			Expression::Rem(expr) => Display::fmt(expr, f),
			Expression::Sub(expr) => Display::fmt(expr, f),
			Expression::Xor(expr) => Display::fmt(expr, f),
		}
	}
}
