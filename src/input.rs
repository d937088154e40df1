use std::io::Read;

use anyhow::Context;

/// Path value that selects standard input.
pub const STDIN: &str = "-";

pub fn read_grammar(source: &str) -> Result<String, anyhow::Error> {
    if source == STDIN {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("trying to read grammar from stdin")?;
        return Ok(content);
    }

    if std::fs::metadata(source)
        .context(format!("trying to get info about grammar path {source}"))?
        .is_dir()
    {
        anyhow::bail!("grammar path {source} is a directory");
    }

    std::fs::read_to_string(source).context(format!("trying to read grammar file {source}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_grammar_file() {
        let path = std::env::temp_dir().join(format!("desatomat-input-{}.txt", std::process::id()));
        std::fs::write(&path, "NUM -> DIGIT\n").unwrap();

        let content = read_grammar(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();

        assert_eq!(content.unwrap(), "NUM -> DIGIT\n");
    }

    #[test]
    fn missing_file_and_directory_are_errors() {
        let error = read_grammar("/nonexistent/grammar.txt").unwrap_err();
        assert!(error.to_string().contains("/nonexistent/grammar.txt"));

        let dir = std::env::temp_dir();
        let error = read_grammar(dir.to_str().unwrap()).unwrap_err();
        assert!(error.to_string().contains("is a directory"));
    }
}
