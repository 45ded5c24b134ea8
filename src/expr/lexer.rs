use crate::error::ExpressionError;

/// Tokens of the condition expression grammar.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Token {
    Ident(String),
    Str(String),
    Num(f64),
    True,
    False,
    Null,
    AndAnd,
    OrOr,
    Bang,
    EqEq,
    NotEq,
    Lt,
    Le,
    Gt,
    Ge,
    LParen,
    RParen,
    Dot,
    Comma,
}

impl Token {
    pub(super) fn describe(&self) -> String {
        match self {
            Token::Ident(s) => s.clone(),
            Token::Str(s) => format!("'{}'", s),
            Token::Num(n) => n.to_string(),
            Token::True => "true".to_string(),
            Token::False => "false".to_string(),
            Token::Null => "null".to_string(),
            Token::AndAnd => "&&".to_string(),
            Token::OrOr => "||".to_string(),
            Token::Bang => "!".to_string(),
            Token::EqEq => "==".to_string(),
            Token::NotEq => "!=".to_string(),
            Token::Lt => "<".to_string(),
            Token::Le => "<=".to_string(),
            Token::Gt => ">".to_string(),
            Token::Ge => ">=".to_string(),
            Token::LParen => "(".to_string(),
            Token::RParen => ")".to_string(),
            Token::Dot => ".".to_string(),
            Token::Comma => ",".to_string(),
        }
    }
}

/// Splits an expression string into tokens.
///
/// `===`/`!==` are accepted as synonyms of `==`/`!=` since operators tend
/// to write the JavaScript forms. Strings take single or double quotes.
pub(super) fn tokenize(source: &str) -> Result<Vec<Token>, ExpressionError> {
    let chars: Vec<char> = source.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        match ch {
            c if c.is_whitespace() => i += 1,
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            '.' => {
                tokens.push(Token::Dot);
                i += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            '&' => {
                if chars.get(i + 1) == Some(&'&') {
                    tokens.push(Token::AndAnd);
                    i += 2;
                } else {
                    return Err(ExpressionError::UnexpectedChar { ch, pos: i });
                }
            }
            '|' => {
                if chars.get(i + 1) == Some(&'|') {
                    tokens.push(Token::OrOr);
                    i += 2;
                } else {
                    return Err(ExpressionError::UnexpectedChar { ch, pos: i });
                }
            }
            '=' => {
                if chars.get(i + 1) == Some(&'=') {
                    // Both == and === compare equal.
                    i += if chars.get(i + 2) == Some(&'=') { 3 } else { 2 };
                    tokens.push(Token::EqEq);
                } else {
                    return Err(ExpressionError::UnexpectedChar { ch, pos: i });
                }
            }
            '!' => {
                if chars.get(i + 1) == Some(&'=') {
                    i += if chars.get(i + 2) == Some(&'=') { 3 } else { 2 };
                    tokens.push(Token::NotEq);
                } else {
                    tokens.push(Token::Bang);
                    i += 1;
                }
            }
            '<' => {
                if chars.get(i + 1) == Some(&'=') {
                    tokens.push(Token::Le);
                    i += 2;
                } else {
                    tokens.push(Token::Lt);
                    i += 1;
                }
            }
            '>' => {
                if chars.get(i + 1) == Some(&'=') {
                    tokens.push(Token::Ge);
                    i += 2;
                } else {
                    tokens.push(Token::Gt);
                    i += 1;
                }
            }
            '\'' | '"' => {
                let quote = ch;
                let start = i;
                i += 1;
                let mut literal = String::new();
                loop {
                    match chars.get(i) {
                        Some(&c) if c == quote => {
                            i += 1;
                            break;
                        }
                        Some(&c) => {
                            literal.push(c);
                            i += 1;
                        }
                        None => {
                            return Err(ExpressionError::UnterminatedString { pos: start });
                        }
                    }
                }
                tokens.push(Token::Str(literal));
            }
            c if c.is_ascii_digit() => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse()
                    .map_err(|_| ExpressionError::InvalidNumber { pos: start })?;
                tokens.push(Token::Num(value));
            }
            c if c.is_alphabetic() || c == '_' => {
                let start = i;
                while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                tokens.push(match word.as_str() {
                    "true" => Token::True,
                    "false" => Token::False,
                    "null" => Token::Null,
                    _ => Token::Ident(word),
                });
            }
            _ => return Err(ExpressionError::UnexpectedChar { ch, pos: i }),
        }
    }

    Ok(tokens)
}
