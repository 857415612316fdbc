use std::io::IsTerminal;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

use crate::GenerationOutcome;

use super::super::Container;

const CODE_HEADER: &str = "AI-Generated JavaScript Code:";
const THEME: &str = "base16-ocean.dark";

pub struct GenerateController<'a> {
    container: &'a Container,
}

impl<'a> GenerateController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn generate(&self, query: String, plain: bool) -> Result<String> {
        let use_case = self.container.generate_use_case();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("Generating response...");
        spinner.enable_steady_tick(Duration::from_millis(100));

        let outcome = use_case.execute(&query).await;

        spinner.finish_and_clear();

        let highlight = !plain && std::io::stdout().is_terminal();
        Ok(self.format_outcome(&outcome, highlight))
    }

    fn format_outcome(&self, outcome: &GenerationOutcome, highlight: bool) -> String {
        match outcome {
            GenerationOutcome::Code { language, text } => {
                let body = if highlight {
                    highlight_javascript(text).unwrap_or_else(|| text.clone())
                } else {
                    format!("```{language}\n{text}\n```")
                };
                format!("{CODE_HEADER}\n\n{body}")
            }
            GenerationOutcome::Warning { message } => format!("Warning: {message}"),
            GenerationOutcome::Error { message } => format!("Error: {message}"),
        }
    }
}

/// Colour `code` for a 24-bit terminal. `None` when the bundled syntax or
/// theme is unavailable, in which case the caller prints it uncoloured.
fn highlight_javascript(code: &str) -> Option<String> {
    let syntax_set = SyntaxSet::load_defaults_newlines();
    let theme_set = ThemeSet::load_defaults();
    let syntax = syntax_set.find_syntax_by_extension("js")?;
    let theme = theme_set.themes.get(THEME)?;

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut output = String::with_capacity(code.len() * 2);
    for line in LinesWithEndings::from(code) {
        let ranges = highlighter.highlight_line(line, &syntax_set).ok()?;
        output.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
    }
    output.push_str("\x1b[0m");
    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::api::ContainerConfig;
    use crate::connector::adapter::HuggingFaceConfig;

    fn mock_container() -> Container {
        Container::new(ContainerConfig {
            mock_llm: true,
            inference: HuggingFaceConfig::default(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn plain_output_wraps_code_in_javascript_fence() {
        let container = mock_container();
        let controller = GenerateController::new(&container);

        let output = controller
            .generate("reverse a string".to_string(), true)
            .await
            .unwrap();

        assert!(output.starts_with(CODE_HEADER));
        assert!(output.contains("```javascript\n"));
        assert!(output.contains("reverseString"));
    }

    #[tokio::test]
    async fn blank_query_reports_warning() {
        let container = mock_container();
        let controller = GenerateController::new(&container);

        let output = controller.generate("  ".to_string(), true).await.unwrap();

        assert_eq!(output, "Warning: Please enter a non-empty query.");
    }

    #[test]
    fn highlighting_keeps_source_text() {
        let code = "const x = 1;\n";
        let coloured = highlight_javascript(code).unwrap();
        assert!(coloured.contains("const"));
        assert!(coloured.contains("\x1b["));
    }
}
