pub mod ast;
mod parse;
pub mod symbol_table;
mod validate_grammar;

use peg::error::ParseError;
use peg::str::LineCol;
use serde_derive::Serialize;

use crate::log::log;
use parse::grammar_parser::document;

pub use ast::Document;
pub use symbol_table::{build_symbol_table, SymbolTable};
pub use validate_grammar::{verify_references, UnknownIdentifier};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GrammarError {
    #[error("syntax error at {}: expected {}", .0.location, .0.expected)]
    Syntax(#[from] ParseError<LineCol>),

    #[error(transparent)]
    UnknownIdentifier(#[from] UnknownIdentifier),
}

/// A grammar whose terminal references all resolve.
#[derive(Debug, Serialize)]
pub struct CompiledGrammar {
    pub document: Document,
    pub symbols: SymbolTable,
}

pub fn parse_grammar(content: &str) -> Result<Document, ParseError<LineCol>> {
    let parsed = document(content)?;

    log!("parsed {} statements", parsed.statements.len());
    Ok(parsed)
}

pub fn compile_grammar(content: &str) -> Result<CompiledGrammar, GrammarError> {
    let document = parse_grammar(content)?;
    let symbols = build_symbol_table(&document);

    verify_references(&document, &symbols)?;
    log!("all terminal references resolved");

    Ok(CompiledGrammar { document, symbols })
}
