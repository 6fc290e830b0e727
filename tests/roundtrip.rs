use proptest::prelude::*;
use sexpr_indent::parse::parse_with;
use sexpr_indent::print::indent_value;
use sexpr_indent::settings::{Format, QuoteStyle, DEFAULT_FORMAT, DEFAULT_LIMITS};
use sexpr_indent::value::{QuoteKind, Value};

fn quote_kind() -> impl Strategy<Value = QuoteKind> {
    prop_oneof![
        Just(QuoteKind::Quote),
        Just(QuoteKind::Quasiquote),
        Just(QuoteKind::Unquote),
        Just(QuoteKind::UnquoteSplicing),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        "[a-z0-9@.+-][a-z0-9 ()'\",@\\\\.+-]{0,7}".prop_map(|s| Value::atom(&s)),
        "[a-z \"\\\\\\n\\t\\r\\x08\\x0C]{0,10}".prop_map(|s| Value::string(&s)),
    ];
    leaf.prop_recursive(6, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::List),
            (quote_kind(), inner).prop_map(|(k, v)| Value::quoted(k, v)),
        ]
    })
}

proptest! {
    #[test]
    fn shorthand_reads_back(v in value()) {
        let format = Format { quote_style: QuoteStyle::Shorthand, ..DEFAULT_FORMAT };
        let printed = indent_value(&v, &format);
        prop_assert_eq!(parse_with(&printed, &DEFAULT_LIMITS).unwrap(), v);
    }

    #[test]
    fn printing_is_idempotent(v in value(), width in 0usize..5) {
        let format = Format { indent_width: width, ..DEFAULT_FORMAT };
        let printed = indent_value(&v, &format);
        let reprinted = indent_value(&parse_with(&printed, &DEFAULT_LIMITS).unwrap(), &format);
        prop_assert_eq!(reprinted, printed);
    }
}
