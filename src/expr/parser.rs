use super::lexer::{tokenize, Token};
use super::{Binding, Expr};
use super::value::Value;
use crate::error::ExpressionError;

/// Recursive-descent parser for the condition grammar.
///
/// Precedence, loosest to tightest: `||`, `&&`, `!`, comparison, postfix
/// (field access and string predicates), primary.
pub(super) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub(super) fn parse(source: &str) -> Result<Expr, ExpressionError> {
        let mut parser = Parser {
            tokens: tokenize(source)?,
            pos: 0,
        };
        let expr = parser.parse_or()?;
        if let Some(token) = parser.peek() {
            return Err(ExpressionError::TrailingInput(token.describe()));
        }
        Ok(expr)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, expected: &Token) -> Result<(), ExpressionError> {
        match self.advance() {
            Some(token) if &token == expected => Ok(()),
            Some(token) => Err(ExpressionError::UnexpectedToken(token.describe())),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }

    /// True when the next token is the given word operator (`and`, `or`, `not`).
    fn at_word(&self, word: &str) -> bool {
        matches!(self.peek(), Some(Token::Ident(w)) if w == word)
    }

    fn parse_or(&mut self) -> Result<Expr, ExpressionError> {
        let mut left = self.parse_and()?;
        while matches!(self.peek(), Some(Token::OrOr)) || self.at_word("or") {
            self.advance();
            let right = self.parse_and()?;
            left = Expr::Or(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, ExpressionError> {
        let mut left = self.parse_unary()?;
        while matches!(self.peek(), Some(Token::AndAnd)) || self.at_word("and") {
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::And(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExpressionError> {
        if matches!(self.peek(), Some(Token::Bang)) || self.at_word("not") {
            self.advance();
            let inner = self.parse_unary()?;
            return Ok(Expr::Not(Box::new(inner)));
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expr, ExpressionError> {
        let left = self.parse_postfix()?;
        let op = match self.peek() {
            Some(Token::EqEq) => Expr::Equal as fn(Box<Expr>, Box<Expr>) -> Expr,
            Some(Token::NotEq) => Expr::NotEqual,
            Some(Token::Gt) => Expr::GreaterThan,
            Some(Token::Ge) => Expr::GreaterThanOrEqual,
            Some(Token::Lt) => Expr::SmallerThan,
            Some(Token::Le) => Expr::SmallerThanOrEqual,
            _ => return Ok(left),
        };
        self.advance();
        let right = self.parse_postfix()?;
        Ok(op(Box::new(left), Box::new(right)))
    }

    fn parse_postfix(&mut self) -> Result<Expr, ExpressionError> {
        let mut expr = self.parse_primary()?;
        while matches!(self.peek(), Some(Token::Dot)) {
            self.advance();
            let name = match self.advance() {
                Some(Token::Ident(name)) => name,
                Some(token) => return Err(ExpressionError::UnexpectedToken(token.describe())),
                None => return Err(ExpressionError::UnexpectedEnd),
            };
            if matches!(self.peek(), Some(Token::LParen)) {
                expr = self.parse_call(expr, name)?;
            } else {
                // Plain field access digs into the opaque apiResult value.
                match &mut expr {
                    Expr::Binding(Binding::ApiResult(path)) => path.push(name),
                    _ => return Err(ExpressionError::BadFieldAccess),
                }
            }
        }
        Ok(expr)
    }

    fn parse_call(&mut self, subject: Expr, name: String) -> Result<Expr, ExpressionError> {
        self.expect(&Token::LParen)?;
        let mut args = Vec::new();
        if !matches!(self.peek(), Some(Token::RParen)) {
            args.push(self.parse_or()?);
            while matches!(self.peek(), Some(Token::Comma)) {
                self.advance();
                args.push(self.parse_or()?);
            }
        }
        self.expect(&Token::RParen)?;

        let op = match name.as_str() {
            "contains" => Expr::Contains as fn(Box<Expr>, Box<Expr>) -> Expr,
            "startsWith" => Expr::StartsWith,
            "endsWith" => Expr::EndsWith,
            _ => return Err(ExpressionError::UnknownFunction(name)),
        };
        if args.len() != 1 {
            return Err(ExpressionError::BadArity {
                function: name,
                expected: 1,
            });
        }
        let arg = args.remove(0);
        Ok(op(Box::new(subject), Box::new(arg)))
    }

    fn parse_primary(&mut self) -> Result<Expr, ExpressionError> {
        match self.advance() {
            Some(Token::Str(s)) => Ok(Expr::Literal(Value::Str(s))),
            Some(Token::Num(n)) => Ok(Expr::Literal(Value::Num(n))),
            Some(Token::True) => Ok(Expr::Literal(Value::Bool(true))),
            Some(Token::False) => Ok(Expr::Literal(Value::Bool(false))),
            Some(Token::Null) => Ok(Expr::Literal(Value::Null)),
            Some(Token::LParen) => {
                let inner = self.parse_or()?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            Some(Token::Ident(name)) => match name.as_str() {
                "input" => Ok(Expr::Binding(Binding::Input)),
                "apiResult" => Ok(Expr::Binding(Binding::ApiResult(Vec::new()))),
                "vars" => {
                    if !matches!(self.peek(), Some(Token::Dot)) {
                        return Err(ExpressionError::BareVars);
                    }
                    self.advance();
                    match self.advance() {
                        Some(Token::Ident(field)) => Ok(Expr::Binding(Binding::Var(field))),
                        Some(token) => Err(ExpressionError::UnexpectedToken(token.describe())),
                        None => Err(ExpressionError::UnexpectedEnd),
                    }
                }
                _ => Err(ExpressionError::UnknownIdentifier(name)),
            },
            Some(token) => Err(ExpressionError::UnexpectedToken(token.describe())),
            None => Err(ExpressionError::UnexpectedEnd),
        }
    }
}
