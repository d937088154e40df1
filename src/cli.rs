use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(version, about = "Desatomat is a parser compiler which outputs C++")]
pub struct Cli {
    /// Grammar file, or `-` for stdin
    #[arg(long, value_name = "PATH")]
    pub input: String,

    /// Output directory
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Generator to use
    #[arg(long, value_name = "BACKEND")]
    pub generator: Option<String>,

    /// Disable the ll flag
    #[arg(long = "ll", action = ArgAction::SetFalse)]
    pub ll: bool,

    /// Disable the q flag
    #[arg(long = "q", action = ArgAction::SetFalse)]
    pub q: bool,

    /// Output filename
    #[arg(long = "cfg:fname", value_name = "NAME")]
    pub fname: Option<String>,

    /// C++ namespace to put the grammar in
    #[arg(long = "cfg:namespace", value_name = "NAME")]
    pub namespace: Option<String>,

    /// C++ header guard name
    #[arg(long = "cfg:guard", value_name = "NAME")]
    pub guard: Option<String>,

    /// C++ grammar struct name
    #[arg(long = "cfg:grammar_name", value_name = "NAME")]
    pub grammar_name: Option<String>,

    /// TOML file with generator settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the verified grammar and symbol table as JSON
    #[arg(long)]
    pub dump: bool,

    /// Print the trace log to stderr when done
    #[arg(long)]
    pub trace: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_default_to_enabled() {
        let cli = Cli::try_parse_from(["desatomat", "--input", "grammar.txt"]).unwrap();
        assert_eq!(cli.input, "grammar.txt");
        assert!(cli.ll);
        assert!(cli.q);
        assert!(!cli.dump);
        assert_eq!(cli.output, None);
    }

    #[test]
    fn flags_switch_toggles_off() {
        let cli = Cli::try_parse_from(["desatomat", "--input", "-", "--ll", "--q"]).unwrap();
        assert_eq!(cli.input, "-");
        assert!(!cli.ll);
        assert!(!cli.q);
    }

    #[test]
    fn generator_settings() {
        let cli = Cli::try_parse_from([
            "desatomat",
            "--input",
            "g.txt",
            "--output",
            "out",
            "--generator",
            "cpp_ctll_v2",
            "--cfg:namespace",
            "Calc",
            "--cfg:guard",
            "CALC_HPP",
            "--cfg:grammar_name",
            "CalcGrammar",
        ])
        .unwrap();

        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert_eq!(cli.generator.as_deref(), Some("cpp_ctll_v2"));
        assert_eq!(cli.namespace.as_deref(), Some("Calc"));
        assert_eq!(cli.guard.as_deref(), Some("CALC_HPP"));
        assert_eq!(cli.grammar_name.as_deref(), Some("CalcGrammar"));
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["desatomat"]).is_err());
    }
}
