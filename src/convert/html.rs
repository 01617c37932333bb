//! Keep-styled HTML rendering of plain note bodies.

use std::fmt::Write;

use minijinja::{Environment, Error, Output, State, Value, context, escape_formatter};

/// Paragraph template matching the markup Keep itself produces for plain text.
///
/// Each line is HTML-escaped before embedding.
pub const PARAGRAPH_TEMPLATE: &str = r#"{% for line in lines %}<p dir="ltr" style="line-height:1.38;margin-top:0.0pt;margin-bottom:0.0pt;"><span style="font-size:7.2pt;font-family:'Google Sans';color:#000000;background-color:transparent;font-weight:400;font-style:normal;font-variant:normal;text-decoration:none;vertical-align:baseline;white-space:pre;white-space:pre-wrap;">{{ line }}</span></p>{% endfor %}"#;

const TEMPLATE_NAME: &str = "paragraphs.html";

/// Renders note bodies with a compiled paragraph template.
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Compiles the paragraph template.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_formatter(format_escaped);
        env.add_template(TEMPLATE_NAME, PARAGRAPH_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders a body as one paragraph block per line.
    ///
    /// A trailing CR on each line is dropped. An empty body renders a single
    /// empty block.
    pub fn render(&self, body: &str) -> Result<String, minijinja::Error> {
        let lines: Vec<&str> = body
            .trim()
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let tmpl = self.env.get_template(TEMPLATE_NAME)?;
        tmpl.render(context! { lines => lines })
    }
}

/// Escapes `&`, `<`, `>`, `"` and `'` for embedding in HTML. Everything else,
/// `/` included, passes through unchanged.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn format_escaped(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> Result<(), Error> {
    match value.as_str() {
        Some(text) if !value.is_safe() => {
            out.write_str(&escape_html(text))?;
            Ok(())
        }
        _ => escape_formatter(out, state, value),
    }
}

/// Renders a single body with a freshly compiled template.
///
/// # Example
///
/// ```
/// use keepport::convert::body_to_html;
///
/// let html = body_to_html("a < b").unwrap();
/// assert!(html.starts_with("<p dir=\"ltr\""));
/// assert!(html.contains("a &lt; b</span></p>"));
/// ```
pub fn body_to_html(body: &str) -> Result<String, minijinja::Error> {
    HtmlRenderer::new()?.render(body)
}
