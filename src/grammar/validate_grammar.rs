use super::ast::{Document, RuleAtom, TerminalReference};
use super::symbol_table::SymbolTable;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown identifier `{name}` (referenced in rule `{rule}`)")]
pub struct UnknownIdentifier {
    pub name: String,
    pub rule: String,
}

type ValidateResult = Result<(), UnknownIdentifier>;

/// Checks every terminal used in a rule body against `symbols`, stopping at
/// the first one that isn't defined.
pub fn verify_references(document: &Document, symbols: &SymbolTable) -> ValidateResult {
    for rule in document.rules() {
        for alternative in &rule.alternatives {
            for atom in &alternative.atoms {
                match atom {
                    RuleAtom::Terminal(terminal) => {
                        if !resolves(terminal, symbols) {
                            return Err(UnknownIdentifier {
                                name: terminal.name.clone(),
                                rule: rule.name.clone(),
                            });
                        }
                    }
                    // no table of rule names exists, so these pass unchecked
                    RuleAtom::NonTerminal(_) => {}
                    RuleAtom::Character(_) | RuleAtom::String(_) | RuleAtom::SemanticAction(_) => {}
                }
            }
        }
    }

    Ok(())
}

fn resolves(terminal: &TerminalReference, symbols: &SymbolTable) -> bool {
    terminal.is_single_character() || symbols.contains(&terminal.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::parse_grammar;
    use crate::grammar::symbol_table::build_symbol_table;

    fn verify(text: &str) -> ValidateResult {
        let document = parse_grammar(text).unwrap();
        let symbols = build_symbol_table(&document);
        verify_references(&document, &symbols)
    }

    #[test]
    fn defined_terminal_resolves() {
        assert_eq!(verify("DIGIT = {0,1,2,3,4,5,6,7,8,9}\nNUM -> DIGIT"), Ok(()));
    }

    #[test]
    fn undefined_terminal_is_reported() {
        assert_eq!(
            verify("NUM -> FOO"),
            Err(UnknownIdentifier {
                name: "FOO".to_string(),
                rule: "NUM".to_string()
            })
        );
    }

    #[test]
    fn single_character_names_skip_lookup() {
        assert_eq!(verify("r -> a, *b, c@x, 9"), Ok(()));
    }

    #[test]
    fn non_terminals_are_never_checked() {
        assert_eq!(verify("r -> <undefined_rule>, [action], \"text\", +"), Ok(()));
    }

    #[test]
    fn builtin_terminals_resolve() {
        assert_eq!(verify("r -> epsilon | other | *other"), Ok(()));
    }

    #[test]
    fn starred_and_epsilon_forms_are_checked_by_name() {
        let error = verify("ID = {a}\nr -> *ID, ID@x, NAME@y").unwrap_err();
        assert_eq!(error.name, "NAME");

        let error = verify("r -> *MISSING").unwrap_err();
        assert_eq!(error.name, "MISSING");
    }

    #[test]
    fn definition_order_does_not_matter() {
        assert_eq!(verify("r -> LATE\nLATE = {l}"), Ok(()));
    }

    #[test]
    fn first_unknown_identifier_wins() {
        let error = verify("a -> ONE | TWO\nb -> THREE").unwrap_err();
        assert_eq!(error.name, "ONE");
        assert_eq!(error.rule, "a");
        assert_eq!(
            error.to_string(),
            "Unknown identifier `ONE` (referenced in rule `a`)"
        );
    }

    #[test]
    fn comments_only_verifies_trivially() {
        assert_eq!(verify("# a comment\n\n# another\n"), Ok(()));
    }
}
