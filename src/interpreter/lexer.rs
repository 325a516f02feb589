use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens: decimal numeric literals, bare
/// identifiers, the seven named unary functions as reserved words, and the
/// operator/punctuation set of the expression language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14` or `4.0`.
    ///
    /// The raw lexeme is kept as a string; conversion to a float happens
    /// exactly once, in the evaluator's constant-folding pass.
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().to_string())]
    Number(String),
    /// `exp`
    #[token("exp")]
    Exp,
    /// `sin`
    #[token("sin")]
    Sin,
    /// `cos`
    #[token("cos")]
    Cos,
    /// `tan`
    #[token("tan")]
    Tan,
    /// `arcsin`
    #[token("arcsin")]
    Arcsin,
    /// `arccos`
    #[token("arccos")]
    Arccos,
    /// `arctan`
    #[token("arctan")]
    Arctan,
    /// Identifier tokens; variable names such as `a` or `price`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,

    /// End-of-input sentinel, produced only by [`TokenStream`]. A literal
    /// NUL byte in the source is rejected like any other unrecognized input
    /// instead of lexing as this variant.
    #[token("\0", reject_nul)]
    Eof,

    /// Line feeds bump the line counter and are otherwise skipped.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

fn reject_nul(_: &mut logos::Lexer<'_, Token>) -> logos::FilterResult<(), ()> {
    logos::FilterResult::Error(())
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

static EOF_TOKEN: Token = Token::Eof;

/// A fully lexed token stream with bounded lookahead.
///
/// The whole source is tokenized up front, which gives the parser two things
/// a streaming lexer would not: arbitrary `peek(k)` lookahead for the
/// function-declaration heuristic, and [`token_count`](Self::token_count) as
/// an upper bound for sizing the AST arena. Reading past the end yields the
/// [`Token::Eof`] sentinel, whose precedence of `-1` guarantees the
/// precedence climb terminates.
pub struct TokenStream {
    tokens:   Vec<(Token, usize)>,
    position: usize,
    eof_line: usize,
}

impl TokenStream {
    /// Tokenizes `source` in one pass.
    ///
    /// # Errors
    /// Returns [`ParseError::UnexpectedCharacter`] when the lexer hits input
    /// it does not recognize.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut tokens = Vec::new();
        let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

        while let Some(token) = lexer.next() {
            match token {
                Ok(tok) => tokens.push((tok, lexer.extras.line)),
                Err(()) => {
                    return Err(ParseError::UnexpectedCharacter { lexeme: lexer.slice()
                                                                             .to_string(),
                                                                 line:   lexer.extras.line, });
                },
            }
        }

        let eof_line = lexer.extras.line;
        Ok(Self { tokens,
                  position: 0,
                  eof_line })
    }

    /// Number of tokens lexed from the source, excluding the EOF sentinel.
    ///
    /// Used as an upper bound on the AST node count when sizing the arena.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Consumes and returns the next token together with its line number.
    ///
    /// Once the stream is exhausted every call returns [`Token::Eof`] with
    /// the line of the last piece of input.
    pub fn next(&mut self) -> (Token, usize) {
        match self.tokens.get(self.position) {
            Some(entry) => {
                self.position += 1;
                entry.clone()
            },
            None => (Token::Eof, self.eof_line),
        }
    }

    /// Non-consuming lookahead, `k` tokens ahead (1-based).
    ///
    /// `peek(1)` is the token [`next`](Self::next) would return; `k` is
    /// clamped to at least 1. Peeking past the end of input yields the EOF
    /// sentinel.
    #[must_use]
    pub fn peek(&self, k: usize) -> &Token {
        self.tokens
            .get(self.position + k.saturating_sub(1))
            .map_or(&EOF_TOKEN, |(token, _)| token)
    }

    /// The line number of the token `peek(1)` would return.
    #[must_use]
    pub fn peek_line(&self) -> usize {
        self.tokens
            .get(self.position)
            .map_or(self.eof_line, |(_, line)| *line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_literals_operators_and_identifiers() {
        let mut stream = TokenStream::new("4.0*price + 2").unwrap();
        assert_eq!(stream.token_count(), 5);
        assert_eq!(stream.next().0, Token::Number("4.0".to_string()));
        assert_eq!(stream.next().0, Token::Star);
        assert_eq!(stream.next().0, Token::Identifier("price".to_string()));
        assert_eq!(stream.next().0, Token::Plus);
        assert_eq!(stream.next().0, Token::Number("2".to_string()));
        assert_eq!(stream.next().0, Token::Eof);
        // Exhausted streams keep yielding the sentinel.
        assert_eq!(stream.next().0, Token::Eof);
    }

    #[test]
    fn function_keywords_are_reserved_words() {
        let mut stream = TokenStream::new("sin cos tan arcsin arccos arctan exp").unwrap();
        for expected in [Token::Sin,
                         Token::Cos,
                         Token::Tan,
                         Token::Arcsin,
                         Token::Arccos,
                         Token::Arctan,
                         Token::Exp]
        {
            assert_eq!(stream.next().0, expected);
        }
    }

    #[test]
    fn keyword_prefix_still_lexes_as_identifier() {
        let mut stream = TokenStream::new("sinister").unwrap();
        assert_eq!(stream.next().0, Token::Identifier("sinister".to_string()));
    }

    #[test]
    fn peek_is_non_consuming_and_eof_padded() {
        let stream = TokenStream::new("a + b").unwrap();
        assert_eq!(stream.peek(1), &Token::Identifier("a".to_string()));
        assert_eq!(stream.peek(2), &Token::Plus);
        assert_eq!(stream.peek(3), &Token::Identifier("b".to_string()));
        assert_eq!(stream.peek(4), &Token::Eof);
        assert_eq!(stream.peek(100), &Token::Eof);
        // Peeking never advances the stream.
        assert_eq!(stream.peek(1), &Token::Identifier("a".to_string()));
    }

    #[test]
    fn peek_zero_is_clamped_instead_of_panicking() {
        let stream = TokenStream::new("a + b").unwrap();
        assert_eq!(stream.peek(0), stream.peek(1));

        let empty = TokenStream::new("").unwrap();
        assert_eq!(empty.peek(0), &Token::Eof);
    }

    #[test]
    fn nul_byte_is_a_lex_error_not_end_of_input() {
        let result = TokenStream::new("2\0+3");
        assert!(matches!(result,
                         Err(ParseError::UnexpectedCharacter { ref lexeme, line: 1 }) if lexeme == "\0"));
    }

    #[test]
    fn unrecognized_character_is_a_lex_error() {
        let result = TokenStream::new("2 @ 3");
        assert!(matches!(result,
                         Err(ParseError::UnexpectedCharacter { ref lexeme, line: 1 }) if lexeme == "@"));
    }

    #[test]
    fn newlines_advance_the_line_counter() {
        let mut stream = TokenStream::new("1 +\n2").unwrap();
        assert_eq!(stream.next().1, 1);
        assert_eq!(stream.next().1, 1);
        assert_eq!(stream.next(), (Token::Number("2".to_string()), 2));
    }
}
