//! Plain-text rendering of signature HTML
//!
//! Used for the `text/plain` half of a clipboard payload. The markup is
//! lexed with logos rather than parsed: signatures are flat tables and only
//! line breaks matter.

use logos::Logos;

/// Markup tokens
#[derive(Logos, Debug, Clone, PartialEq)]
enum Token<'a> {
    #[regex(r"<!--([^-]|-[^-])*-->")]
    Comment,

    #[regex(r"</[a-zA-Z][^>]*>", |lex| lex.slice())]
    CloseTag(&'a str),

    #[regex(r"<[a-zA-Z][^>]*>", |lex| lex.slice())]
    OpenTag(&'a str),

    #[regex(r"&[a-zA-Z0-9#]+;", |lex| lex.slice())]
    Entity(&'a str),

    #[regex(r"[^<&]+", |lex| lex.slice())]
    Text(&'a str),

    #[token("<")]
    Lt,

    #[token("&")]
    Amp,
}

/// Tags that end the current line
const BLOCK_TAGS: &[&str] = &[
    "table", "tr", "div", "p", "br", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6",
];

/// Tags whose edges separate words, such as cells and the bullet separator
const SPACED_TAGS: &[&str] = &["td", "th", "span"];

/// Lowercased element name of an open or close tag
fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

#[derive(Default)]
struct Lines {
    done: Vec<String>,
    current: String,
}

impl Lines {
    fn push(&mut self, text: &str) {
        self.current.push_str(text);
    }

    fn flush(&mut self) {
        let line = self.current.split_whitespace().collect::<Vec<_>>().join(" ");
        if !line.is_empty() {
            self.done.push(line);
        }
        self.current.clear();
    }

    fn finish(mut self) -> String {
        self.flush();
        self.done.join("\n")
    }
}

/// Strip markup, keeping one line per block element
///
/// `<style>` contents and comments are dropped and entities are decoded.
pub fn html_to_plain_text(html: &str) -> String {
    let mut lines = Lines::default();
    let mut in_style = false;

    for token in Token::lexer(html).filter_map(Result::ok) {
        match token {
            Token::Comment => {}
            Token::OpenTag(tag) => {
                let name = tag_name(tag);
                if name == "style" {
                    in_style = !tag.ends_with("/>");
                } else if BLOCK_TAGS.contains(&name.as_str()) {
                    lines.flush();
                } else if SPACED_TAGS.contains(&name.as_str()) {
                    lines.push(" ");
                }
            }
            Token::CloseTag(tag) => {
                let name = tag_name(tag);
                if name == "style" {
                    in_style = false;
                } else if BLOCK_TAGS.contains(&name.as_str()) {
                    lines.flush();
                } else if SPACED_TAGS.contains(&name.as_str()) {
                    lines.push(" ");
                }
            }
            _ if in_style => {}
            Token::Entity(entity) => lines.push(&htmlize::unescape(entity)),
            Token::Text(text) => lines.push(text),
            Token::Lt => lines.push("<"),
            Token::Amp => lines.push("&"),
        }
    }

    lines.finish()
}
