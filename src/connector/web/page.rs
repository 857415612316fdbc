//! Server-side rendering of the single form page.

use crate::domain::GenerationOutcome;

pub const TITLE: &str = "JavaScript Coding Bot";
pub const INTRO: &str =
    "Enter your coding query below, and the AI will generate JavaScript code based on your request.";
pub const QUERY_LABEL: &str = "Your Query:";
pub const QUERY_PLACEHOLDER: &str = "e.g., create a function to reverse a string";
pub const SUBMIT_LABEL: &str = "Generate Code";
pub const BUSY_MESSAGE: &str = "Generating response...";
pub const CODE_HEADING: &str = "AI-Generated JavaScript Code:";

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; margin: 0; background: #fafafa; color: #262730; }
main { max-width: 760px; margin: 0 auto; padding: 3rem 1rem; }
textarea { width: 100%; box-sizing: border-box; font: inherit; padding: .5rem; }
button { margin-top: .75rem; padding: .5rem 1rem; font: inherit; cursor: pointer; }
button[disabled] { cursor: progress; opacity: .6; }
pre { background: #f0f2f6; padding: 1rem; overflow-x: auto; border-radius: .25rem; }
.busy { margin-top: .75rem; color: #555; }
.warning { background: #fffce7; border-left: 4px solid #e6b800; padding: .75rem 1rem; margin-top: 1rem; }
.error { background: #ffeded; border-left: 4px solid #ff4b4b; padding: .75rem 1rem; margin-top: 1rem; }
.deploy { margin-top: 3rem; border-top: 1px solid #ddd; }";

const SCRIPT: &str = "\
document.getElementById('generate-form').addEventListener('submit', function () {
  document.getElementById('generate').disabled = true;
  document.getElementById('busy').hidden = false;
});";

const DEPLOY_INSTRUCTIONS: &str = "\
<section class=\"deploy\">
<h3>How to Deploy</h3>
<ol>
<li>Build the server: <code>cargo build --release</code></li>
<li>Provide your Hugging Face API key as <code>HF_TOKEN</code>, either in the environment or in a <code>.env</code> file next to the binary.</li>
<li>Run the app locally: <code>jscodebot serve</code>, then open <code>http://127.0.0.1:8501</code>.</li>
<li>To serve other machines, run <code>jscodebot serve --public --port 8501</code> behind a TLS-terminating reverse proxy.</li>
<li>Keep the API key in your platform's secret store; never commit the <code>.env</code> file.</li>
</ol>
</section>";

/// Render the page with `query` pre-filled and, after a submission, its outcome.
pub fn render_page(query: &str, outcome: Option<&GenerationOutcome>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{TITLE}</title>\n<style>\n{STYLE}\n</style>\n"));
    html.push_str("</head>\n<body>\n<main>\n");

    html.push_str(&format!("<h1>{TITLE}</h1>\n<p>{INTRO}</p>\n"));
    html.push_str("<form method=\"post\" action=\"/\" id=\"generate-form\">\n");
    html.push_str(&format!("<label for=\"query\">{QUERY_LABEL}</label>\n"));
    // The newline after the opening tag is swallowed by the HTML parser, so a
    // query that itself starts with a newline survives the round-trip.
    html.push_str(&format!(
        "<textarea id=\"query\" name=\"query\" rows=\"6\" placeholder=\"{}\">\n{}</textarea>\n",
        escape_html(QUERY_PLACEHOLDER),
        escape_html(query)
    ));
    html.push_str(&format!(
        "<button type=\"submit\" id=\"generate\">{SUBMIT_LABEL}</button>\n"
    ));
    html.push_str(&format!(
        "<div id=\"busy\" class=\"busy\" hidden>{BUSY_MESSAGE}</div>\n"
    ));
    html.push_str("</form>\n");

    if let Some(outcome) = outcome {
        html.push_str(&render_outcome(outcome));
    }

    html.push_str(DEPLOY_INSTRUCTIONS);
    html.push_str(&format!("\n</main>\n<script>\n{SCRIPT}\n</script>\n</body>\n</html>\n"));
    html
}

fn render_outcome(outcome: &GenerationOutcome) -> String {
    match outcome {
        GenerationOutcome::Code { language, text } => format!(
            "<section class=\"result\">\n<h2>{CODE_HEADING}</h2>\n<pre><code class=\"language-{}\" data-language=\"{}\">{}</code></pre>\n</section>\n",
            escape_html(language),
            escape_html(language),
            escape_html(text)
        ),
        GenerationOutcome::Warning { message } => format!(
            "<div class=\"warning\" role=\"alert\">{}</div>\n",
            escape_html(message)
        ),
        GenerationOutcome::Error { message } => format!(
            "<div class=\"error\" role=\"alert\">{}</div>\n",
            escape_html(message)
        ),
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
