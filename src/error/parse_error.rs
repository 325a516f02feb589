#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing, parsing, or the
/// constant-folding step of evaluator construction.
pub enum ParseError {
    /// The lexer hit a character sequence it does not recognize.
    UnexpectedCharacter {
        /// The offending source slice.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// What the parser was looking for at this position.
        expected: String,
        /// The token actually encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input in the middle of an expression.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing bracket `]` was expected but not found.
    ExpectedClosingBracket {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The optional function-declaration prefix was malformed.
    InvalidFunctionDeclaration {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after the expression was fully parsed.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A numeric literal survived lexing but could not be converted to a
    /// float. Raised by the constant-folding pass, which makes evaluator
    /// construction fail atomically.
    InvalidNumericLiteral {
        /// The literal text as written.
        lexeme: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { lexeme, line } => {
                write!(f, "Error on line {line}: Unrecognized character sequence '{lexeme}'.")
            },

            Self::UnexpectedToken { expected,
                                    found,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, but found {found}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { line } => {
                write!(f, "Error on line {line}: Expected closing parenthesis ')' but none found.")
            },

            Self::ExpectedClosingBracket { line } => {
                write!(f, "Error on line {line}: Expected closing bracket ']' but none found.")
            },

            Self::InvalidFunctionDeclaration { line } => {
                write!(f,
                       "Error on line {line}: Invalid function declaration syntax. Example: f(a, b) = a * b")
            },

            Self::UnexpectedTrailingTokens { token, line } => {
                write!(f, "Error on line {line}: Extra tokens after expression: {token}")
            },

            Self::InvalidNumericLiteral { lexeme } => {
                write!(f, "Numeric literal '{lexeme}' cannot be represented as a float.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
