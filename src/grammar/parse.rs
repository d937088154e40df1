use super::ast::{
    Alternative, Atom, Document, RuleAtom, RuleStatement, SetDefinition, Statement,
    TerminalKind, TerminalReference,
};

peg::parser! {

    pub grammar grammar_parser() for str {

        rule name() -> String =
            s:$(['a'..='z'|'A'..='Z'|'0'..='9'|'_']+) {
                s.to_string()
            }

        rule atom() -> Atom =
            "\\" c:[ch if !ch.is_whitespace()] {
                Atom::Escaped(c)
            }
            /
            c:[ch if !ch.is_whitespace()] {
                Atom::Plain(c)
            }

        // a bare `,` or `}` is a member only when another separator or the
        // closing brace follows it
        rule set_atom() -> Atom =
            "\\" c:[ch if !ch.is_whitespace()] {
                Atom::Escaped(c)
            }
            /
            c:[ch if !ch.is_whitespace() && ch != ',' && ch != '}'] {
                Atom::Plain(c)
            }
            /
            c:[',' | '}'] &(_ ("," / "}")) {
                Atom::Plain(c)
            }

        rule terminal() -> TerminalReference =
            n:name() _ "@" _ a:atom() {
                TerminalReference::new(n, TerminalKind::Epsilon(a))
            }/
            n:name() {
                TerminalReference::new(n, TerminalKind::Plain)
            }/
            "*" _ n:name() {
                TerminalReference::new(n, TerminalKind::Starred)
            }

        rule stringchar() =
            "\\" [^'\n']
            /
            [^'"']

        rule string() -> String =
            "\"" s:$(stringchar()+) "\"" {
                s.to_string()
            }

        rule non_terminal() -> String =
            "<" _ n:name() _ ">" {n}

        rule semantic_action() -> String =
            "[" _ n:name() _ "]" {n}

        rule rule_atom() -> RuleAtom =
            t:terminal() {
                RuleAtom::Terminal(t)
            }/
            s:string() {
                RuleAtom::String(s)
            }/
            n:non_terminal() {
                RuleAtom::NonTerminal(n)
            }/
            a:semantic_action() {
                RuleAtom::SemanticAction(a)
            }/
            a:atom() {
                RuleAtom::Character(a)
            }

        rule statement_head() =
            name() _ ("->" / "=")

        // after a comma, `#` starts a comment unless another atom follows it
        rule comment_ahead() =
            "#" !([' ' | '\t']* ("," / "|"))

        rule more_atoms() -> RuleAtom =
            _ "," _ !statement_head() !comment_ahead() a:rule_atom() {a}

        rule rule_content() -> Vec<RuleAtom> =
            first:rule_atom() rest:more_atoms()* (_ ",")? {
                let mut rest = rest;
                rest.insert(0, first);
                rest
            }

        rule label() -> String =
            l:name() _ ":" _ {l}

        rule alternative() -> Alternative =
            labels:label()* atoms:rule_content() {
                Alternative { labels, atoms }
            }

        rule more_alternatives() -> Alternative =
            _ "|" _ a:alternative() {a}

        rule rule_statement() -> RuleStatement =
            name:name() _ "->" _ first:alternative() rest:more_alternatives()* {
                let mut rest = rest;
                rest.insert(0, first);
                RuleStatement { name, alternatives: rest }
            }

        rule more_set_atoms() -> Atom =
            _ "," _ a:set_atom() {a}

        rule set_definition() -> SetDefinition =
            name:name() _ "=" _ sigma:("sigma" _ "-" _)? "{" _ first:set_atom() rest:more_set_atoms()* (_ ",")? _ "}" {
                let mut atoms = rest;
                atoms.insert(0, first);
                SetDefinition { name, sigma_minus: sigma.is_some(), atoms }
            }

        rule comment() -> String =
            "#" text:$([^'\n']*) {
                text.to_string()
            }

        rule statement() -> Statement =
            r:rule_statement() {
                Statement::Rule(r)
            }/
            s:set_definition() {
                Statement::Set(s)
            }/
            c:comment() {
                Statement::Comment { text: c }
            }

        pub rule document() -> Document =
            _ statements:(s:statement() _ {s})* {
                Document { statements }
            }

        rule _() = quiet!{[c if c.is_whitespace()]*}

    }
}
