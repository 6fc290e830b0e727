use anyhow::Result;
use sexpr_indent::parse::ParseError;
use sexpr_indent::print::indent_value;
use sexpr_indent::settings::{Format, DEFAULT_FORMAT};
use sexpr_indent::value::QuoteKind;
use sexpr_indent::{format, parse, Value};

fn width(indent_width: usize) -> Format {
    Format { indent_width, ..DEFAULT_FORMAT }
}

#[test]
fn atom_round_trip() -> Result<()> {
    let v = parse("foo")?;
    assert_eq!(v, Value::atom("foo"));
    assert_eq!(indent_value(&v, &width(0)), "foo\n");
    Ok(())
}

#[test]
fn string_is_not_atom() -> Result<()> {
    let s = parse("\"abc\"")?;
    let a = parse("abc")?;
    assert_ne!(s, a);
    assert_eq!(s.as_string(), Some("abc"));
    assert_eq!(a.as_atom(), Some("abc"));
    assert_eq!(indent_value(&s, &width(2)), "\"abc\"\n");
    assert_eq!(indent_value(&a, &width(2)), "abc\n");
    Ok(())
}

#[test]
fn escapes_are_resolved() -> Result<()> {
    let v = parse(r#""a\nb""#)?;
    let s = v.as_string().unwrap();
    assert_eq!(s, "a\nb");
    assert_eq!(s.len(), 3);
    Ok(())
}

#[test]
fn balanced_list() -> Result<()> {
    let v = parse("(a b (c d))")?;
    let vals = v.as_list().unwrap();
    assert_eq!(vals.len(), 3);
    assert_eq!(vals[2], Value::list([Value::atom("c"), Value::atom("d")]));
    let out = format("(a b (c d))", 2)?;
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, ["(", "  a", "  b", "  (", "    c", "    d", "  )", ")"]);
    Ok(())
}

#[test]
fn quote_shorthand() -> Result<()> {
    assert_eq!(parse("'x")?, Value::quoted(QuoteKind::Quote, Value::atom("x")));
    assert_eq!(parse(",@x")?,
               Value::quoted(QuoteKind::UnquoteSplicing, Value::atom("x")));
    Ok(())
}

#[test]
fn unterminated_string() {
    let e = parse("\"abc").unwrap_err();
    assert_eq!(e.err, ParseError::UnterminatedString);
    assert_eq!(e.message(), "Unterminated string literal");
    assert_eq!((e.line(), e.column()), (1, 5));
    assert_eq!(e.pos.offset, 4);
}

#[test]
fn trailing_garbage() {
    let e = parse("(a) b").unwrap_err();
    assert_eq!(e.err, ParseError::Superfluous('b'));
    assert_eq!(e.message(), "Superfluous characters after expression: `b`");
    assert_eq!((e.line(), e.column()), (1, 5));

    let e = parse("(a)\n\n  'b").unwrap_err();
    assert_eq!((e.line(), e.column()), (3, 3));
}

#[test]
fn empty_list() -> Result<()> {
    let v = parse("()")?;
    assert_eq!(v.as_list().map(|l| l.len()), Some(0));
    assert_eq!(format("()", 2)?, "(\n)\n");
    Ok(())
}

#[test]
fn format_is_idempotent() -> Result<()> {
    let src = "(let ((x \"a\\\"b\") (y 'z)) `(,x ,@y)  \"\\\\\" a\\(b)";
    let once = format(src, 2)?;
    assert_eq!(format(&once, 2)?, once);
    let wide = format(src, 4)?;
    assert_eq!(format(&wide, 4)?, wide);
    Ok(())
}

#[test]
fn format_propagates_errors() {
    assert_eq!(format("(a", 2).unwrap_err(), parse("(a").unwrap_err());
}
