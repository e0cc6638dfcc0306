// Whitespace tokenization of page text

/// Kind of a text token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// A maximal run of non-whitespace characters.
    Word,
    /// A maximal run of whitespace characters.
    Whitespace,
}

/// A slice of the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub token_type: TokenType,
    pub text: &'a str,
    /// Byte offset of the token within the input.
    pub pos: usize,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.token_type == TokenType::Word
    }
}

/// Split text into alternating word and whitespace tokens.
///
/// Concatenating the token texts in order reproduces the input exactly.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<TokenType> = None;

    for (idx, c) in text.char_indices() {
        let kind = if c.is_whitespace() {
            TokenType::Whitespace
        } else {
            TokenType::Word
        };
        match current {
            Some(prev) if prev == kind => {}
            Some(prev) => {
                tokens.push(Token {
                    token_type: prev,
                    text: &text[start..idx],
                    pos: start,
                });
                start = idx;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
    }

    if let Some(kind) = current {
        tokens.push(Token {
            token_type: kind,
            text: &text[start..],
            pos: start,
        });
    }

    tokens
}
