// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::{Deref, Index};

use reifydb_type::Fragment;

use crate::ast::tokenize::Token;

#[derive(Debug, Clone, PartialEq)]
pub struct AstStatement {
	pub nodes: Vec<Ast>,
}

impl AstStatement {
	pub fn first_unchecked(&self) -> &Ast {
		&self.nodes[0]
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

impl Index<usize> for AstStatement {
	type Output = Ast;

	fn index(&self, index: usize) -> &Self::Output {
		&self.nodes[index]
	}
}

impl IntoIterator for AstStatement {
	type Item = Ast;
	type IntoIter = std::vec::IntoIter<Ast>;

	fn into_iter(self) -> Self::IntoIter {
		self.nodes.into_iter()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum Ast {
	Extend(AstExtend),
	Filter(AstFilter),
	From(AstFrom),
	Identifier(AstIdentifier),
	Infix(AstInfix),
	Literal(AstLiteral),
	Map(AstMap),
	Parameter(AstParameter),
	Prefix(AstPrefix),
	Sort(AstSort),
	Take(AstTake),
	Tuple(AstTuple),
}

impl Ast {
	pub fn token(&self) -> &Token {
		match self {
			Ast::Extend(node) => &node.token,
			Ast::Filter(node) => &node.token,
			Ast::From(node) => &node.token,
			Ast::Identifier(node) => &node.token,
			Ast::Infix(node) => &node.token,
			Ast::Literal(node) => node.token(),
			Ast::Map(node) => &node.token,
			Ast::Parameter(node) => &node.0,
			Ast::Prefix(node) => node.operator.token(),
			Ast::Sort(node) => &node.token,
			Ast::Take(node) => &node.token,
			Ast::Tuple(node) => &node.token,
		}
	}

	/// Source text the node covers. Infix and prefix nodes span both operands.
	pub fn fragment(&self) -> Fragment {
		match self {
			Ast::Infix(node) => node.fragment.clone(),
			Ast::Prefix(node) => node.fragment.clone(),
			Ast::Tuple(node) => node.fragment.clone(),
			node => node.token().fragment.clone(),
		}
	}

	pub fn value(&self) -> &str {
		self.token().value()
	}
}

impl Ast {
	pub fn is_identifier(&self) -> bool {
		matches!(self, Ast::Identifier(_))
	}

	pub fn as_identifier(&self) -> &AstIdentifier {
		if let Ast::Identifier(result) = self {
			result
		} else {
			panic!("not identifier")
		}
	}

	pub fn is_infix(&self) -> bool {
		matches!(self, Ast::Infix(_))
	}

	pub fn as_infix(&self) -> &AstInfix {
		if let Ast::Infix(result) = self {
			result
		} else {
			panic!("not infix")
		}
	}

	pub fn is_literal(&self) -> bool {
		matches!(self, Ast::Literal(_))
	}

	pub fn as_literal(&self) -> &AstLiteral {
		if let Ast::Literal(result) = self {
			result
		} else {
			panic!("not literal")
		}
	}

	pub fn as_map(&self) -> &AstMap {
		if let Ast::Map(result) = self {
			result
		} else {
			panic!("not map")
		}
	}

	pub fn as_extend(&self) -> &AstExtend {
		if let Ast::Extend(result) = self {
			result
		} else {
			panic!("not extend")
		}
	}

	pub fn as_filter(&self) -> &AstFilter {
		if let Ast::Filter(result) = self {
			result
		} else {
			panic!("not filter")
		}
	}

	pub fn as_from(&self) -> &AstFrom {
		if let Ast::From(result) = self {
			result
		} else {
			panic!("not from")
		}
	}

	pub fn as_prefix(&self) -> &AstPrefix {
		if let Ast::Prefix(result) = self {
			result
		} else {
			panic!("not prefix")
		}
	}

	pub fn as_sort(&self) -> &AstSort {
		if let Ast::Sort(result) = self {
			result
		} else {
			panic!("not sort")
		}
	}

	pub fn as_take(&self) -> &AstTake {
		if let Ast::Take(result) = self {
			result
		} else {
			panic!("not take")
		}
	}

	pub fn as_tuple(&self) -> &AstTuple {
		if let Ast::Tuple(result) = self {
			result
		} else {
			panic!("not tuple")
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstIdentifier {
	pub token: Token,
}

impl AstIdentifier {
	pub fn name(&self) -> &str {
		self.token.value()
	}

	pub fn fragment(&self) -> Fragment {
		self.token.fragment.clone()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstParameter(pub Token);

#[derive(Debug, Clone, PartialEq)]
pub enum AstLiteral {
	Boolean(AstLiteralBoolean),
	Number(AstLiteralNumber),
	Text(AstLiteralText),
	Undefined(AstLiteralUndefined),
}

impl AstLiteral {
	pub fn token(&self) -> &Token {
		match self {
			AstLiteral::Boolean(literal) => &literal.0,
			AstLiteral::Number(literal) => &literal.0,
			AstLiteral::Text(literal) => &literal.0,
			AstLiteral::Undefined(literal) => &literal.0,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstLiteralBoolean(pub Token);

impl AstLiteralBoolean {
	pub fn value(&self) -> bool {
		self.0.value().eq_ignore_ascii_case("true")
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstLiteralNumber(pub Token);

impl AstLiteralNumber {
	pub fn value(&self) -> &str {
		self.0.value()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstLiteralText(pub Token);

impl AstLiteralText {
	pub fn value(&self) -> &str {
		self.0.value()
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstLiteralUndefined(pub Token);

#[derive(Debug, Clone, PartialEq)]
pub struct AstInfix {
	pub token: Token,
	pub left: Box<Ast>,
	pub operator: InfixOperator,
	pub right: Box<Ast>,
	pub fragment: Fragment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InfixOperator {
	Add(Token),
	As(Token),
	Subtract(Token),
	Multiply(Token),
	Divide(Token),
	Rem(Token),
	Equal(Token),
	NotEqual(Token),
	LessThan(Token),
	LessThanEqual(Token),
	GreaterThan(Token),
	GreaterThanEqual(Token),
	And(Token),
	Or(Token),
	Xor(Token),
}

impl InfixOperator {
	pub fn token(&self) -> &Token {
		match self {
			InfixOperator::Add(token)
			| InfixOperator::As(token)
			| InfixOperator::Subtract(token)
			| InfixOperator::Multiply(token)
			| InfixOperator::Divide(token)
			| InfixOperator::Rem(token)
			| InfixOperator::Equal(token)
			| InfixOperator::NotEqual(token)
			| InfixOperator::LessThan(token)
			| InfixOperator::LessThanEqual(token)
			| InfixOperator::GreaterThan(token)
			| InfixOperator::GreaterThanEqual(token)
			| InfixOperator::And(token)
			| InfixOperator::Or(token)
			| InfixOperator::Xor(token) => token,
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			InfixOperator::Add(_) => "Add",
			InfixOperator::As(_) => "As",
			InfixOperator::Subtract(_) => "Subtract",
			InfixOperator::Multiply(_) => "Multiply",
			InfixOperator::Divide(_) => "Divide",
			InfixOperator::Rem(_) => "Rem",
			InfixOperator::Equal(_) => "Equal",
			InfixOperator::NotEqual(_) => "NotEqual",
			InfixOperator::LessThan(_) => "LessThan",
			InfixOperator::LessThanEqual(_) => "LessThanEqual",
			InfixOperator::GreaterThan(_) => "GreaterThan",
			InfixOperator::GreaterThanEqual(_) => "GreaterThanEqual",
			InfixOperator::And(_) => "And",
			InfixOperator::Or(_) => "Or",
			InfixOperator::Xor(_) => "Xor",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstPrefix {
	pub operator: AstPrefixOperator,
	pub node: Box<Ast>,
	pub fragment: Fragment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AstPrefixOperator {
	Plus(Token),
	Negate(Token),
	Not(Token),
}

impl AstPrefixOperator {
	pub fn token(&self) -> &Token {
		match self {
			AstPrefixOperator::Plus(token) | AstPrefixOperator::Negate(token) | AstPrefixOperator::Not(token) => {
				token
			}
		}
	}

	pub fn name(&self) -> &'static str {
		match self {
			AstPrefixOperator::Plus(_) => "Plus",
			AstPrefixOperator::Negate(_) => "Negate",
			AstPrefixOperator::Not(_) => "Not",
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstTuple {
	pub token: Token,
	pub nodes: Vec<Ast>,
	pub fragment: Fragment,
}

impl AstTuple {
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}

impl Deref for AstTuple {
	type Target = [Ast];

	fn deref(&self) -> &Self::Target {
		&self.nodes
	}
}

/// `map` and `select` share this node.
#[derive(Debug, Clone, PartialEq)]
pub struct AstMap {
	pub token: Token,
	pub nodes: Vec<Ast>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstExtend {
	pub token: Token,
	pub nodes: Vec<Ast>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstFilter {
	pub token: Token,
	pub node: Box<Ast>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstTake {
	pub token: Token,
	pub take: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstSort {
	pub token: Token,
	pub columns: Vec<AstIdentifier>,
	pub directions: Vec<Option<Token>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstFrom {
	pub token: Token,
	pub rows: Vec<AstInline>,
}

/// One `{ key: value, ... }` row of inline data.
#[derive(Debug, Clone, PartialEq)]
pub struct AstInline {
	pub token: Token,
	pub keyed_values: Vec<AstInlineKeyedValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AstInlineKeyedValue {
	pub key: AstIdentifier,
	pub value: Box<Ast>,
}
