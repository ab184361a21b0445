use super::*;
use crate::number::scan_numbers;
use proptest::prelude::*;

/// Literals in the scanner's own grammar: optional minus, digits, optional
/// fraction (possibly empty)
fn literal() -> impl Strategy<Value = String> {
    "-?[0-9]{1,6}(\\.[0-9]{0,4})?"
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(","), Just(" "), Just("\t"), Just("\n"), Just("+"), Just("")]
}

/// A run of literals where every literal that is followed by another one
/// is separated from it unambiguously
fn numeric_run() -> impl Strategy<Value = (Vec<String>, String)> {
    prop::collection::vec((literal(), separator()), 1..12).prop_map(|tokens| {
        let mut run = String::new();
        let mut literals = Vec::new();
        for (i, (literal, sep)) in tokens.iter().enumerate() {
            run.push_str(literal);
            literals.push(literal.clone());
            let next_is_negative = tokens.get(i + 1).is_some_and(|(next, _)| next.starts_with('-'));
            // Two unsigned literals can only be told apart by a separator
            run.push_str(if sep.is_empty() && !next_is_negative { "," } else { *sep });
        }
        (literals, run)
    })
}

// Property: a run scans to exactly its literals, in order
proptest! {
    #[test]
    fn prop_run_scans_to_literals((literals, run) in numeric_run()) {
        let expected: Vec<f64> = literals.iter().map(|l| l.parse::<f64>().unwrap()).collect();
        prop_assert_eq!(scan_numbers(&run).unwrap(), expected);
    }
}

// Property: re-scanning re-serialized values yields the same values
proptest! {
    #[test]
    fn prop_scanner_idempotent((_literals, run) in numeric_run()) {
        let first = scan_numbers(&run).unwrap();
        let reserialized = first
            .iter()
            .map(|v| format!("{v}"))
            .collect::<Vec<_>>()
            .join(",");
        prop_assert_eq!(scan_numbers(&reserialized).unwrap(), first);
    }
}

// Property: `<letter><n1>,...,<nk>` is exactly one step with those operands
proptest! {
    #[test]
    fn prop_single_command_step(
        letter in prop::sample::select("MmLlHhVvCcSsQqTtAa".chars().collect::<Vec<_>>()),
        values in prop::collection::vec(-100_000i32..100_000, 1..10),
    ) {
        let operands: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let d = format!("{letter}{}", operands.join(","));
        let parsed = parse_path(&d).unwrap();

        prop_assert_eq!(parsed.steps.len(), 1);
        prop_assert_eq!(parsed.steps[0].letter(), letter);
        let expected: Vec<f64> = values.iter().map(|&v| f64::from(v)).collect();
        prop_assert_eq!(parsed.steps[0].parameters(), expected.as_slice());
    }
}

// Property: close-only input yields that many close steps and warns only above one
proptest! {
    #[test]
    fn prop_close_only(closes in prop::collection::vec(("[zZ]", "[ \t\n]{0,3}"), 0..8)) {
        let d: String = closes.iter().map(|(z, ws)| format!("{z}{ws}")).collect();
        let sink = CollectDiagnostics::new();
        let steps = GlyphPath::new(&d).parse(&sink).unwrap();

        prop_assert_eq!(steps.len(), closes.len());
        prop_assert!(steps.iter().all(|s| s.is_close() && s.parameters().is_empty()));
        prop_assert_eq!(sink.polarity_mismatches(), usize::from(closes.len() > 1));
    }
}

// Property: the parser never panics, whatever the input
proptest! {
    #[test]
    fn prop_parser_total(d in "\\PC{0,64}") {
        let _ = parse_path(&d);
    }
}
