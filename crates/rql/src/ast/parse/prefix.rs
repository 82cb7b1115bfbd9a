// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_type::{Fragment, diagnostic::ast, return_error};

use crate::ast::{
	Ast, AstLiteral, AstLiteralNumber, AstPrefix, AstPrefixOperator,
	parse::{Parser, Precedence},
	tokenize::{Operator, Token, TokenKind},
};

impl Parser<'_> {
	pub(crate) fn parse_prefix(&mut self) -> crate::Result<AstPrefix> {
		let operator = self.parse_prefix_operator()?;
		let node = self.parse_node(Precedence::Prefix)?;

		let operator_fragment = operator.token().fragment.clone();
		let fragment = operator_fragment.merge(&node.fragment(), self.source);

		Ok(AstPrefix {
			operator,
			node: Box::new(node),
			fragment,
		})
	}

	fn parse_prefix_operator(&mut self) -> crate::Result<AstPrefixOperator> {
		let token = self.advance()?;
		match &token.kind {
			TokenKind::Operator(Operator::Plus) => Ok(AstPrefixOperator::Plus(token)),
			TokenKind::Operator(Operator::Minus) => Ok(AstPrefixOperator::Negate(token)),
			TokenKind::Operator(Operator::Bang | Operator::Not) => Ok(AstPrefixOperator::Not(token)),
			_ => return_error!(ast::unsupported_token_error(token.fragment)),
		}
	}
}

/// Folds a `-` written directly against a number literal into the literal itself,
/// so `-128` is typed as a single literal instead of a negated `128`.
///
/// `- 5` and `- -1` stay prefix expressions, their source text names the column.
pub(crate) fn fold_negation(prefix: AstPrefix) -> Ast {
	let AstPrefix {
		operator,
		node,
		fragment,
	} = prefix;

	let adjacent = match (&operator, node.as_ref()) {
		(AstPrefixOperator::Negate(token), Ast::Literal(AstLiteral::Number(literal))) => {
			token.fragment.end() == literal.0.fragment.offset && !literal.value().starts_with('-')
		}
		_ => false,
	};

	match *node {
		Ast::Literal(AstLiteral::Number(literal)) if adjacent => {
			let text = format!("-{}", literal.value());
			Ast::Literal(AstLiteral::Number(AstLiteralNumber(Token {
				kind: literal.0.kind,
				fragment: Fragment {
					text,
					..fragment
				},
			})))
		}
		node => Ast::Prefix(AstPrefix {
			operator,
			node: Box::new(node),
			fragment,
		}),
	}
}
