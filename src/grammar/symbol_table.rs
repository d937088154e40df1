use serde::{Serialize, Serializer};
use vector_map::VecMap;

use super::ast::{Atom, Document};
use crate::log::log;

/// Terminal names every grammar may use without defining them.
pub const BUILTIN_TERMINALS: [&str; 2] = ["epsilon", "other"];

/// Terminal name to literal value, kept in declaration order.
pub struct SymbolTable {
    terminals: VecMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let mut table = SymbolTable {
            terminals: VecMap::new(),
        };
        for name in BUILTIN_TERMINALS {
            table.define(name.to_string(), String::new());
        }
        table
    }

    /// Inserts or replaces a terminal, returning the value it replaced.
    pub fn define(&mut self, name: String, value: String) -> Option<String> {
        if let Some(existing) = self.terminals.get_mut(&name) {
            Some(std::mem::replace(existing, value))
        } else {
            self.terminals.insert(name, value);
            None
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.terminals.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terminals
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SymbolTable {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl std::fmt::Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl Serialize for SymbolTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

pub fn build_symbol_table(document: &Document) -> SymbolTable {
    let mut table = SymbolTable::new();

    // rule names are never registered, so references to them stay unchecked
    for definition in document.set_definitions() {
        let value: String = definition.atoms.iter().map(Atom::decode).collect();

        if let Some(previous) = table.define(definition.name.clone(), value) {
            log!(
                "terminal `{}` redefined, dropping previous value {:?}",
                definition.name,
                previous
            );
        }
    }

    log!("symbol table holds {} terminals", table.len());
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse_grammar;

    fn table_for(text: &str) -> SymbolTable {
        build_symbol_table(&parse_grammar(text).unwrap())
    }

    #[test]
    fn seeded_with_builtins() {
        let table = SymbolTable::new();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("epsilon"), Some(""));
        assert_eq!(table.get("other"), Some(""));
        assert!(!table.contains("EPSILON"));
    }

    #[test]
    fn set_definition_concatenates_atoms() {
        let table = table_for("DIGIT = {0,1,2,3,4,5,6,7,8,9}\nNUM -> DIGIT");
        assert_eq!(table.get("DIGIT"), Some("0123456789"));
        assert!(!table.contains("NUM"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn escaped_atoms_decode_to_their_character() {
        let table = table_for("S = {\\,,a,b}");
        assert_eq!(table.get("S"), Some(",ab"));

        let table = table_for("Q = sigma - {\\\\, \\n, \\}}");
        assert_eq!(table.get("Q"), Some("\\n}"));
    }

    #[test]
    fn later_definition_wins() {
        let table = table_for("A = {x,y}\nB = {b}\nA = {z}");
        assert_eq!(table.get("A"), Some("z"));
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![("epsilon", ""), ("other", ""), ("A", "z"), ("B", "b")]
        );
    }

    #[test]
    fn builtins_can_be_overwritten() {
        let table = table_for("epsilon = {e}");
        assert_eq!(table.get("epsilon"), Some("e"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn comments_leave_only_builtins() {
        let table = table_for("# a comment\n\n\n");
        assert_eq!(table, SymbolTable::new());
    }

    #[test]
    fn define_reports_replaced_value() {
        let mut table = SymbolTable::new();
        assert_eq!(table.define("X".to_string(), "1".to_string()), None);
        assert_eq!(
            table.define("X".to_string(), "2".to_string()),
            Some("1".to_string())
        );
    }

    #[test]
    fn serializes_as_ordered_map() {
        let table = table_for("BRACES = {\\{,\\}}");
        assert_eq!(
            serde_json::to_string(&table).unwrap(),
            r#"{"epsilon":"","other":"","BRACES":"{}"}"#
        );
    }
}
