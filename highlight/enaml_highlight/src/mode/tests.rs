use pretty_assertions::assert_eq;

use super::*;
use enaml_highlight_core::Token;

fn rules() -> RuleSet<Scope> {
    mode().expect("mode table compiles")
}

fn parts(source: &str) -> Vec<(Scope, String)> {
    rules()
        .scan(source)
        .map(|t| (t.label(), t.text().to_owned()))
        .collect()
}

/// Scan `source` and assert it produced exactly one token.
fn single(source: &str) -> (Scope, String) {
    let mut tokens = parts(source);
    assert_eq!(tokens.len(), 1, "expected one token for {source:?}: {tokens:?}");
    tokens.remove(0)
}

#[test]
fn mode_compiles() {
    let rules = rules();
    assert_eq!(rules.state_name(&rules.start()), "start");
}

// === Keywords and identifiers ===

#[test]
fn reserved_word_is_a_keyword() {
    assert_eq!(single("class"), (Scope::Keyword, "class".to_owned()));
}

#[test]
fn unknown_name_is_an_identifier() {
    assert_eq!(single("frobulate"), (Scope::Identifier, "frobulate".to_owned()));
}

#[test]
fn declarative_forms_are_keywords() {
    assert_eq!(single("enamldef"), (Scope::Keyword, "enamldef".to_owned()));
    assert_eq!(single("attr"), (Scope::Keyword, "attr".to_owned()));
}

#[test]
fn classifier_scopes_flow_through_scanning() {
    assert_eq!(single("print"), (Scope::Keyword, "print".to_owned()));
    assert_eq!(single("True"), (Scope::BuiltinConstant, "True".to_owned()));
    assert_eq!(single("len"), (Scope::BuiltinFunction, "len".to_owned()));
    assert_eq!(single("debugger"), (Scope::Deprecated, "debugger".to_owned()));
}

#[test]
fn dollar_names_are_identifiers() {
    assert_eq!(single("$ident"), (Scope::Identifier, "$ident".to_owned()));
}

// === Rule-order tie-breaks (kept, not fixed) ===

#[test]
fn attr_matches_as_a_bare_prefix() {
    assert_eq!(
        parts("attrx"),
        vec![
            (Scope::Keyword, "attr".to_owned()),
            (Scope::Identifier, "x".to_owned()),
        ]
    );
}

#[test]
fn star_star_lexes_as_two_operators() {
    assert_eq!(
        parts("**"),
        vec![
            (Scope::Operator, "*".to_owned()),
            (Scope::Operator, "*".to_owned()),
        ]
    );
}

#[test]
fn less_equal_lexes_as_two_operators() {
    assert_eq!(
        parts("<="),
        vec![
            (Scope::Operator, "<".to_owned()),
            (Scope::Operator, "=".to_owned()),
        ]
    );
}

#[test]
fn shift_and_comparison_operators_lex_whole() {
    assert_eq!(single("<<"), (Scope::Operator, "<<".to_owned()));
    assert_eq!(single(">>"), (Scope::Operator, ">>".to_owned()));
    assert_eq!(single("=="), (Scope::Operator, "==".to_owned()));
    assert_eq!(single("!="), (Scope::Operator, "!=".to_owned()));
    assert_eq!(single("<>"), (Scope::Operator, "<>".to_owned()));
}

// === Numeric literals ===

#[test]
fn hex_integer_is_one_numeric_token() {
    assert_eq!(single("0x1A"), (Scope::Numeric, "0x1A".to_owned()));
}

#[test]
fn exponent_float_is_one_numeric_token() {
    assert_eq!(single("3.14e10"), (Scope::Numeric, "3.14e10".to_owned()));
}

#[test]
fn long_integer_is_one_numeric_token() {
    assert_eq!(single("10L"), (Scope::Numeric, "10L".to_owned()));
}

#[test]
fn imaginary_literal_is_one_numeric_token() {
    assert_eq!(single("3j"), (Scope::Numeric, "3j".to_owned()));
    assert_eq!(single("2.5J"), (Scope::Numeric, "2.5J".to_owned()));
}

#[test]
fn leading_zero_run_takes_the_octal_branch() {
    assert_eq!(single("007"), (Scope::Numeric, "007".to_owned()));
}

#[test]
fn radix_forms_are_single_tokens() {
    assert_eq!(single("0o17"), (Scope::Numeric, "0o17".to_owned()));
    assert_eq!(single("0b101"), (Scope::Numeric, "0b101".to_owned()));
    assert_eq!(single("42"), (Scope::Numeric, "42".to_owned()));
}

// === String literals ===

#[test]
fn single_line_strings_are_one_token() {
    assert_eq!(single(r#""abc""#), (Scope::String, r#""abc""#.to_owned()));
    assert_eq!(single("'abc'"), (Scope::String, "'abc'".to_owned()));
    assert_eq!(single(r#"r"abc""#), (Scope::String, r#"r"abc""#.to_owned()));
    assert_eq!(single(r#""""abc""""#), (Scope::String, r#""""abc""""#.to_owned()));
    assert_eq!(single("u'''abc'''"), (Scope::String, "u'''abc'''".to_owned()));
}

#[test]
fn escaped_quotes_do_not_close_a_string() {
    assert_eq!(
        single(r#""a\"b""#),
        (Scope::String, r#""a\"b""#.to_owned())
    );
}

#[test]
fn unterminated_single_line_string_degrades_to_error() {
    assert_eq!(
        parts(r#""abc"#),
        vec![
            (Scope::Error, "\"".to_owned()),
            (Scope::Identifier, "abc".to_owned()),
        ]
    );
}

// === Multi-line strings ===

#[test]
fn open_triple_quote_merges_across_chunks() {
    let rules = rules();
    let mut scan = rules.start();

    assert_eq!(rules.scan_chunk(&mut scan, r#""""abc"#), Vec::new());
    assert!(scan.has_pending());
    assert_eq!(rules.state_name(&scan), "qqstring");

    let tokens = rules.scan_chunk(&mut scan, r#"def""""#);
    assert_eq!(
        tokens,
        vec![Token::new(Scope::String, r#""""abcdef""""#)]
    );
    assert_eq!(rules.state_name(&scan), "start");
}

#[test]
fn document_scan_stitches_triple_quoted_strings() {
    assert_eq!(
        parts("\"\"\"abc\ndef\"\"\" x"),
        vec![
            (Scope::String, "\"\"\"abc\ndef\"\"\"".to_owned()),
            (Scope::Text, " ".to_owned()),
            (Scope::Identifier, "x".to_owned()),
        ]
    );
}

#[test]
fn single_quoted_flavor_uses_its_own_state() {
    let rules = rules();
    let mut scan = rules.start();
    assert!(rules.scan_chunk(&mut scan, "'''abc").is_empty());
    assert_eq!(rules.state_name(&scan), "qstring");
    let tokens = rules.scan_chunk(&mut scan, "def'''");
    assert_eq!(tokens[0].text(), "'''abcdef'''");
}

#[test]
fn unterminated_triple_quote_is_flushed_at_end() {
    assert_eq!(
        parts("\"\"\"abc\nxyz"),
        vec![(Scope::String, "\"\"\"abc\nxyz".to_owned())]
    );
}

// === Robustness ===

#[test]
fn stray_character_becomes_an_error_token_and_scanning_continues() {
    assert_eq!(
        parts("a @ b"),
        vec![
            (Scope::Identifier, "a".to_owned()),
            (Scope::Text, " ".to_owned()),
            (Scope::Error, "@".to_owned()),
            (Scope::Text, " ".to_owned()),
            (Scope::Identifier, "b".to_owned()),
        ]
    );
}

#[test]
fn comments_run_to_end_of_line() {
    assert_eq!(
        parts("x # hi\ny"),
        vec![
            (Scope::Identifier, "x".to_owned()),
            (Scope::Text, " ".to_owned()),
            (Scope::Comment, "# hi".to_owned()),
            (Scope::Text, "\n".to_owned()),
            (Scope::Identifier, "y".to_owned()),
        ]
    );
}

#[test]
fn rescanning_a_buffer_is_idempotent() {
    let source = "enamldef Main(Window):\n    attr x = \"\"\"a\nb\"\"\"\n";
    assert_eq!(parts(source), parts(source));
}

#[test]
fn token_text_reproduces_the_source() {
    let source = concat!(
        "enamldef EmployeeView(Window):\n",
        "    attr employee\n",
        "    title << \"Employee: \" + employee.name\n",
        "    doc = '''multi\n",
        "    line'''\n",
        "    count = 0x1F + 3.5e2\n",
    );
    let rebuilt: String = rules().scan(source).map(|t| t.text().to_owned()).collect();
    assert_eq!(rebuilt, source);
}
