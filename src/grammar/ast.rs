use std::fmt::Display;

use serde_derive::Serialize;

/// Single character of a set definition or a bare rule atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Atom {
    Plain(char),
    /// Written as `\c` in the source.
    Escaped(char),
}

impl Atom {
    pub fn decode(&self) -> char {
        match self {
            Atom::Plain(c) | Atom::Escaped(c) => *c,
        }
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Atom::Plain(c) => write!(f, "{c}"),
            Atom::Escaped(c) => write!(f, "\\{c}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum TerminalKind {
    Plain,
    /// `*NAME`
    Starred,
    /// `NAME@ATOM`
    Epsilon(Atom),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TerminalReference {
    pub name: String,
    pub kind: TerminalKind,
}

impl TerminalReference {
    pub fn new(name: String, kind: TerminalKind) -> Self {
        TerminalReference { name, kind }
    }

    /// One-character names can't be told apart from bare atoms by the parser,
    /// so they are read as literal characters.
    pub fn is_single_character(&self) -> bool {
        self.name.chars().count() == 1
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RuleAtom {
    Character(Atom),
    Terminal(TerminalReference),
    String(String),
    NonTerminal(String),
    SemanticAction(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Alternative {
    /// `label:` prefixes, kept but otherwise unused
    pub labels: Vec<String>,
    pub atoms: Vec<RuleAtom>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleStatement {
    pub name: String,
    pub alternatives: Vec<Alternative>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SetDefinition {
    pub name: String,
    pub sigma_minus: bool,
    pub atoms: Vec<Atom>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    Rule(RuleStatement),
    Set(SetDefinition),
    Comment { text: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub statements: Vec<Statement>,
}

impl Document {
    pub fn rules(&self) -> impl Iterator<Item = &RuleStatement> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Rule(rule) => Some(rule),
            _ => None,
        })
    }

    pub fn set_definitions(&self) -> impl Iterator<Item = &SetDefinition> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Set(definition) => Some(definition),
            _ => None,
        })
    }
}
