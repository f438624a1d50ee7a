use super::*;
use crate::color::codec::Rgb;

const VIBRANT: &str = "\
(line0)
(line1)
#ff0000
#00ff00
#0000ff
#ffffff
Scheme Vibrant Light:
primary: Color #6750a4
onPrimary: Color #ffffff
Scheme Vibrant Dark:
primary: Color #d0bcff
";

#[test]
fn end_to_end_scenario() {
    let doc = parse_str(VIBRANT);

    let extracted: Vec<&str> = doc.extracted().iter().map(|h| h.as_str()).collect();
    assert_eq!(extracted, ["#ff0000", "#00ff00", "#0000ff", "#ffffff"]);

    assert_eq!(doc.schemes().len(), 1);
    let vibrant = doc.scheme("Vibrant").unwrap();
    assert_eq!(vibrant.light.len(), 2);
    assert_eq!(vibrant.light.get("primary").unwrap().as_str(), "#6750a4");
    assert_eq!(vibrant.light.get("onPrimary").unwrap().as_str(), "#ffffff");
    assert_eq!(vibrant.dark.len(), 1);
    assert_eq!(vibrant.dark.get("primary").unwrap().as_str(), "#d0bcff");
    assert!(!vibrant.dark.contains("onPrimary"));
}

#[test]
fn parsing_is_idempotent() {
    assert_eq!(parse_str(VIBRANT), parse_str(VIBRANT));
    assert_eq!(parse_lines(VIBRANT.lines()), parse_lines(VIBRANT.lines()));
}

#[test]
fn last_token_write_wins() {
    let parsed = parse_lines([
        "",
        "",
        "Scheme X Light:",
        "primary: Color #111111",
        "primary: Color #222222",
    ]);
    let x = parsed.document.scheme("X").unwrap();
    assert_eq!(x.light.get("primary").unwrap().as_str(), "#222222");
    assert_eq!(parsed.diagnostics.len(), 1);
    assert!(!parsed.diagnostics[0].kind.is_error());
}

#[test]
fn variants_are_isolated() {
    let doc = parse_str(
        "a\nb\nc\nd\ne\nf\n\
         Scheme X Dark:\nsurface: Color #101010\n\
         Scheme X Light:\nbackground: Color #fefefe\n",
    );
    let x = doc.scheme("X").unwrap();
    assert!(x.light.contains("background"));
    assert!(!x.light.contains("surface"));
    assert!(x.dark.contains("surface"));
    assert!(!x.dark.contains("background"));
}

#[test]
fn schemes_keep_first_seen_order() {
    let doc = parse_str(
        "\n\n\n\n\n\nScheme Zeta Light:\nScheme Alpha Light:\nScheme Zeta Dark:\n",
    );
    let names: Vec<&str> = doc.scheme_names().collect();
    assert_eq!(names, ["Zeta", "Alpha"]);
}

#[test]
fn extracted_colors_only_come_from_header_window() {
    let doc = parse_str("#000001\n#000002\n#000003\nnot a color\n#000005\n#000006\n#000007\n");
    let extracted: Vec<&str> = doc.extracted().iter().map(|h| h.as_str()).collect();
    assert_eq!(extracted, ["#000003", "#000005", "#000006"]);
}

#[test]
fn header_is_case_sensitive_and_exact() {
    let doc = parse_str(
        "\n\n\n\n\n\n\
         Scheme X light:\n\
         Scheme Two Words Light:\n\
         Scheme Y Dark\n\
         primary: Color #123456\n\
           Scheme   Z Light:\n",
    );
    assert!(doc.is_empty());
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let doc = parse_str("\n\n\n\n\n\n   Scheme Tonal Light:   \n\t primary  : Color #ABCDEF  \n");
    let tonal = doc.scheme("Tonal").unwrap();
    assert_eq!(tonal.light.get("primary").unwrap().as_str(), "#ABCDEF");
    let primary = tonal.light.role(crate::color::role::Role::Primary);
    assert_eq!(primary, Rgb::new(171.0 / 255.0, 205.0 / 255.0, 239.0 / 255.0));
}

#[test]
fn token_line_splits_on_first_separator() {
    let doc = parse_str("\n\n\n\n\n\nScheme S Light:\nodd: Color #abc: Color #def\n");
    let s = doc.scheme("S").unwrap();
    assert_eq!(s.light.get("odd").unwrap().as_str(), "#abc: Color #def");
    assert_eq!(s.light.color_or("odd", Rgb::WHITE), Rgb::BLACK);
}

#[test]
fn unrecognized_lines_are_ignored() {
    let parsed = parse_lines([
        "header",
        "",
        "Scheme S Light:",
        "=== decoration ===",
        "primary = #ffffff",
        "primary: Color #ffffff",
        "",
    ]);
    let s = parsed.document.scheme("S").unwrap();
    assert_eq!(s.light.len(), 1);
    assert!(parsed.diagnostics.is_empty());
}

#[test]
fn degradations_are_reported_as_diagnostics() {
    let parsed = parse_lines([
        "",
        "",
        "orphan: Color #ffffff",
        "Scheme S Light:",
        ": Color #ffffff",
        "bad: Color #12",
    ]);
    let kinds: Vec<&DiagnosticKind> = parsed.diagnostics.iter().map(|d| &d.kind).collect();
    assert_eq!(kinds[0], &DiagnosticKind::TokenOutsideScheme);
    assert_eq!(parsed.diagnostics[0].line, 3);
    assert_eq!(kinds[1], &DiagnosticKind::EmptyTokenName);
    assert!(matches!(kinds[2], DiagnosticKind::MalformedHex { token, .. } if token == "bad"));

    // lenient: the malformed value is still stored and decodes to black
    let s = parsed.document.scheme("S").unwrap();
    assert_eq!(s.light.color_or("bad", Rgb::WHITE), Rgb::BLACK);
}

#[test]
fn strict_mode_rejects_error_diagnostics() {
    let text = "\n\n\n\n\n\nScheme S Light:\nbad: Color #12\n";
    assert!(parse_with(text, ParseOptions::default()).is_ok());
    let err = parse_with(text, ParseOptions { strict: true }).unwrap_err();
    assert!(matches!(err, SwatchError::Parse(_)));
    assert!(err.to_string().contains("line 8"));
}

#[test]
fn strict_mode_tolerates_overwrites() {
    let text = "\n\n\n\n\n\nScheme S Light:\nprimary: Color #111111\nprimary: Color #222222\n";
    let parsed = parse_with(text, ParseOptions { strict: true }).unwrap();
    assert_eq!(parsed.diagnostics.len(), 1);
}

#[test]
fn empty_document_parses_to_nothing() {
    let doc = parse_str("");
    assert!(doc.is_empty());
    assert!(doc.extracted().is_empty());
}
