use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{char, digit0, digit1, multispace0, one_of, satisfy},
    combinator::{cut, map, map_res, opt, recognize},
    error::{VerboseError, VerboseErrorKind, context},
    multi::fold_many0,
    sequence::{pair, preceded, terminated, tuple},
};

use crate::{
    ast::{BinaryOp, Constant, Expr, Func},
    error::ParseError,
};

type Res<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Syntax tree before names are resolved against the free variable.
#[derive(Debug, Clone)]
enum ParseNode {
    Number(f64),
    Name(String),
    Neg(Box<ParseNode>),
    Binary(BinaryOp, Box<ParseNode>, Box<ParseNode>),
    Call(String, Box<ParseNode>),
}

impl ParseNode {
    fn binary(op: BinaryOp, lhs: ParseNode, rhs: ParseNode) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    fn resolve(self, variable: &str) -> Result<Expr, ParseError> {
        match self {
            Self::Number(value) => Ok(Expr::Number(value)),
            Self::Name(name) => {
                if name == variable {
                    Ok(Expr::Variable(name))
                } else if let Some(constant) = Constant::from_name(&name) {
                    Ok(Expr::Constant(constant))
                } else {
                    Err(ParseError::UnknownIdentifier { name })
                }
            }
            Self::Neg(inner) => Ok(Expr::Neg(Box::new(inner.resolve(variable)?))),
            Self::Binary(op, lhs, rhs) => Ok(Expr::binary(
                op,
                lhs.resolve(variable)?,
                rhs.resolve(variable)?,
            )),
            Self::Call(name, arg) => match Func::from_name(&name) {
                Some(func) => Ok(Expr::Call {
                    func,
                    arg: Box::new(arg.resolve(variable)?),
                }),
                None if name == variable || Constant::from_name(&name).is_some() => {
                    Err(ParseError::NotCallable { name })
                }
                None => Err(ParseError::UnknownFunction { name }),
            },
        }
    }
}

/// Parses `source` and resolves identifiers against `variable`.
///
/// An equation `lhs = rhs` is returned as the residual `lhs - rhs`.
pub(crate) fn parse(source: &str, variable: &str) -> Result<Expr, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let node = match statement(source) {
        Ok((rest, node)) => {
            let rest = rest.trim_start();
            if !rest.is_empty() {
                return Err(ParseError::TrailingInput {
                    position: source.len() - rest.len(),
                    remaining: rest.trim_end().to_owned(),
                });
            }
            node
        }
        Err(nom::Err::Error(err) | nom::Err::Failure(err)) => {
            return Err(syntax_error(source, &err));
        }
        Err(nom::Err::Incomplete(_)) => {
            return Err(ParseError::Syntax {
                position: source.len(),
                expected: "more input",
            });
        }
    };

    node.resolve(variable)
}

/// Returns true if `name` is a well-formed identifier.
pub(crate) fn is_identifier(name: &str) -> bool {
    matches!(identifier(name), Ok(("", _)))
}

fn syntax_error(source: &str, err: &VerboseError<&str>) -> ParseError {
    // The first entry is the innermost failure.
    let position = err
        .errors
        .first()
        .map_or(source.len(), |(rest, _)| source.len() - rest.len());
    let expected = err
        .errors
        .iter()
        .find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(label) => Some(*label),
            _ => None,
        })
        .unwrap_or("expression");

    ParseError::Syntax { position, expected }
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> Res<'a, O>
where
    F: FnMut(&'a str) -> Res<'a, O>,
{
    preceded(multispace0, inner)
}

fn statement(input: &str) -> Res<'_, ParseNode> {
    let (input, lhs) = expr(input)?;
    let (input, rhs) = opt(preceded(
        ws(char('=')),
        cut(context("right-hand side", expr)),
    ))(input)?;

    match rhs {
        Some(rhs) => Ok((input, ParseNode::binary(BinaryOp::Sub, lhs, rhs))),
        None => Ok((input, lhs)),
    }
}

fn expr(input: &str) -> Res<'_, ParseNode> {
    let (input, first) = term(input)?;
    fold_many0(
        pair(
            ws(one_of("+-")),
            cut(context("operand", term)),
        ),
        move || first.clone(),
        |acc, (op, rhs)| {
            let op = if op == '+' {
                BinaryOp::Add
            } else {
                BinaryOp::Sub
            };
            ParseNode::binary(op, acc, rhs)
        },
    )(input)
}

fn term(input: &str) -> Res<'_, ParseNode> {
    let (input, first) = unary(input)?;
    fold_many0(
        pair(
            ws(one_of("*/")),
            cut(context("operand", unary)),
        ),
        move || first.clone(),
        |acc, (op, rhs)| {
            let op = if op == '*' {
                BinaryOp::Mul
            } else {
                BinaryOp::Div
            };
            ParseNode::binary(op, acc, rhs)
        },
    )(input)
}

// `-x**2` is `-(x**2)`, and exponents may carry their own sign (`2**-1`).
fn unary(input: &str) -> Res<'_, ParseNode> {
    alt((
        map(
            preceded(ws(char('-')), cut(context("operand", unary))),
            |inner| ParseNode::Neg(Box::new(inner)),
        ),
        preceded(ws(char('+')), cut(context("operand", unary))),
        power,
    ))(input)
}

// Right-associative: `2**3**2` is `2**(3**2)`.
fn power(input: &str) -> Res<'_, ParseNode> {
    let (input, base) = atom(input)?;
    let (input, op) = opt(ws(alt((tag("**"), tag("^")))))(input)?;

    if op.is_none() {
        return Ok((input, base));
    }

    let (input, exponent) = cut(context("exponent", unary))(input)?;
    Ok((input, ParseNode::binary(BinaryOp::Pow, base, exponent)))
}

fn atom(input: &str) -> Res<'_, ParseNode> {
    context(
        "operand",
        ws(alt((
            number,
            call,
            map(identifier, |name| ParseNode::Name(name.to_owned())),
            parens,
        ))),
    )(input)
}

fn number(input: &str) -> Res<'_, ParseNode> {
    let mantissa = alt((
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        recognize(pair(char('.'), digit1)),
    ));
    let exponent = recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)));

    map_res(recognize(pair(mantissa, opt(exponent))), |text: &str| {
        text.parse::<f64>().map(ParseNode::Number)
    })(input)
}

fn identifier(input: &str) -> Res<'_, &str> {
    recognize(pair(
        satisfy(|c| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

fn call(input: &str) -> Res<'_, ParseNode> {
    let (input, name) = identifier(input)?;
    let (input, _) = ws(char('('))(input)?;
    let (input, arg) = cut(terminated(
        context("function argument", expr),
        context("closing parenthesis", ws(char(')'))),
    ))(input)?;

    Ok((input, ParseNode::Call(name.to_owned(), Box::new(arg))))
}

fn parens(input: &str) -> Res<'_, ParseNode> {
    preceded(
        char('('),
        cut(terminated(
            context("expression", expr),
            context("closing parenthesis", ws(char(')'))),
        )),
    )(input)
}
