//! Reusable `<symbol>` fragments declared once in `<defs>`.
//!
//! The set is fixed. States reference these with `<use href="#id">` instead of
//! repeating the markup.

use super::layout::Layout;

/// The pre-declared fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommonSymbol {
    /// A lone `>` prompt
    Prompt,
    /// `> echo`
    PromptEcho,
    /// Blinking cursor block
    Cursor,
}

impl CommonSymbol {
    pub const ALL: [CommonSymbol; 3] = [Self::Prompt, Self::PromptEcho, Self::Cursor];

    /// Element id used in `href="#..."`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Prompt => "prompt",
            Self::PromptEcho => "prompt-echo",
            Self::Cursor => "cursor-sym",
        }
    }

    /// Screen text this symbol stands for, if it is a text fragment.
    pub fn text(&self) -> Option<&'static str> {
        match self {
            Self::Prompt => Some(">"),
            Self::PromptEcho => Some("> echo"),
            Self::Cursor => None,
        }
    }
}

/// Renders the `<defs>` block for a given layout.
#[derive(Debug, Clone, Copy)]
pub struct SymbolTable {
    cursor_width: f64,
    cursor_height: f64,
}

impl SymbolTable {
    pub fn new(layout: &Layout) -> Self {
        let (cursor_width, cursor_height) = layout.cursor_size();
        Self {
            cursor_width,
            cursor_height,
        }
    }

    fn definition(&self, symbol: CommonSymbol) -> String {
        match symbol.text() {
            Some(text) => format!(
                "<symbol id=\"{}\"><text class=\"f\">{}</text></symbol>\n",
                symbol.id(),
                super::escape::escape(text)
            ),
            None => format!(
                "<symbol id=\"{}\"><rect class=\"cursor\" width=\"{:.3}\" height=\"{:.3}\" style=\"animation: blink 1s infinite\"/></symbol>\n",
                symbol.id(),
                self.cursor_width,
                self.cursor_height
            ),
        }
    }

    /// The complete `<defs>` section.
    pub fn render_defs(&self) -> String {
        let mut output = String::from("<defs>\n");
        for symbol in CommonSymbol::ALL {
            output.push_str(&self.definition(symbol));
        }
        output.push_str("</defs>\n");
        output
    }
}
