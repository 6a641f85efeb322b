use dav_core::{
    ConstructKind, DavSettings, Diagnostic, DiagnosticCode, DiagnosticRange, DiagnosticSeverity, ElseCheck,
    LineIndex, Validator, ValidatorOptions, validate,
};
use pretty_assertions::assert_eq;

fn validate_text(text: &str) -> Vec<Diagnostic> {
    validate(&LineIndex::from_text(text).lines())
}

fn errors(diagnostics: &[Diagnostic]) -> Vec<&Diagnostic> {
    diagnostics.iter().filter(|d| d.is_error()).collect()
}

#[test]
fn test_closed_conditional_has_no_errors() {
    let diagnostics = validate_text("Si x > 5.\n    Affiche x.\nFinSi.");
    assert!(errors(&diagnostics).is_empty(), "{diagnostics:?}");
}

#[test]
fn test_unclosed_conditional_is_reported_at_last_line() {
    let diagnostics = validate_text("Si x > 5.\n    Affiche x.");
    assert_eq!(diagnostics.len(), 1);

    let d = &diagnostics[0];
    assert_eq!(d.code, DiagnosticCode::UnclosedConstruct);
    assert_eq!(d.severity, DiagnosticSeverity::Error);
    assert_eq!(d.range, DiagnosticRange::on_line(1, 0, 14));
    assert!(d.message.starts_with("1 bloc(s) Si/If non fermé(s)"), "{}", d.message);
    assert!(d.message.contains("FinSi.") && d.message.contains("EndIf."));
}

#[test]
fn test_closer_without_opener() {
    let diagnostics = validate_text("FinSi.");
    assert_eq!(
        diagnostics,
        vec![Diagnostic {
            range: DiagnosticRange::on_line(0, 0, 6),
            severity: DiagnosticSeverity::Error,
            code: DiagnosticCode::UnmatchedCloser,
            message: "FinSi/EndIf sans Si/If correspondant.".to_string(),
        }]
    );
}

#[test]
fn test_for_loop_header_needs_range() {
    assert!(errors(&validate_text("Pour i de 1 à 10.\nFinPour.")).is_empty());

    let diagnostics = validate_text("Pour i de 1.\nFinPour.");
    let errs = errors(&diagnostics);
    assert_eq!(errs.len(), 1);
    assert_eq!(errs[0].code, DiagnosticCode::MalformedForLoop);
    assert!(errs[0].message.contains("Pour/For"));
    assert_eq!(errs[0].range.start_line, 0);
}

#[test]
fn test_residue_reported_once_per_kind_with_count() {
    let text = "\
Si a.
Si b.
TantQue c.
Affiche a.";
    let diagnostics = validate_text(text);
    let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::UnclosedConstruct,
            DiagnosticCode::UnclosedConstruct
        ]
    );
    assert!(diagnostics[0].message.starts_with("2 bloc(s) Si/If"));
    assert!(diagnostics[1].message.starts_with("1 bloc(s) TantQue/While"));
    assert!(diagnostics.iter().all(|d| d.range.start_line == 3));
}

#[test]
fn test_mixed_languages_nest() {
    let text = "\
Create a function named total that takes items.
    Pour i de 1 à 3.
        If i > 1.
            Display i line.
        Sinon.
            Affiche 0.
        FinSi.
    EndFor.
FinFonction.";
    assert_eq!(validate_text(text), Vec::new());
}

#[test]
fn test_closer_before_opener_is_not_cancelled_later() {
    let diagnostics = validate_text("EndWhile.\nWhile x.\nFinTantQue.");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::UnmatchedCloser);
    assert_eq!(diagnostics[0].range.start_line, 0);
}

#[test]
fn test_within_line_order_is_shape_then_parentheses() {
    let diagnostics = validate_text("J'ai un nombre (x.");
    let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::MalformedDeclaration,
            DiagnosticCode::UnbalancedParentheses
        ]
    );
    assert_eq!(diagnostics[1].severity, DiagnosticSeverity::Warning);
}

#[test]
fn test_warnings_do_not_count_as_errors() {
    let diagnostics = validate_text("Si x.\n    Affiche (x\nFinSi.");
    assert!(errors(&diagnostics).is_empty());
    let codes: Vec<_> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            DiagnosticCode::DisplayTerminator,
            DiagnosticCode::UnbalancedParentheses
        ]
    );
}

#[test]
fn test_blank_and_comment_lines_are_skipped() {
    let text = "// FinSi.\n\n   \n// Si (x.";
    assert!(validate_text(text).is_empty());
}

#[test]
fn test_ranges_use_trimmed_columns() {
    let diagnostics = validate_text("Si x.\n      EndFor.  \nFinSi.");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].range, DiagnosticRange::on_line(1, 6, 13));
}

#[test]
fn test_empty_document() {
    assert!(validate_text("").is_empty());
    let lines: Vec<String> = Vec::new();
    assert!(validate(&lines).is_empty());
}

#[test]
fn test_stray_else_is_unchecked_by_default() {
    assert!(validate_text("Sinon.").is_empty());
}

#[test]
fn test_stray_else_warns_when_enabled() {
    let validator = Validator::new(ValidatorOptions {
        else_check: ElseCheck::Warn,
    });
    let lines = LineIndex::from_text("Else.\nSi x.\nSinon.\nFinSi.").lines();
    let diagnostics = validator.validate(&lines);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, DiagnosticCode::StrayElse);
    assert_eq!(diagnostics[0].severity, DiagnosticSeverity::Warning);
    assert_eq!(diagnostics[0].range.start_line, 0);
}

#[test]
fn test_report_exposes_residue() {
    let lines = ["Pour i de 1 à 2.", "Pour j de 1 à 2.", "FinPour."];
    let report = Validator::default().run(&lines);
    assert_eq!(report.residue.depth(ConstructKind::ForLoop), 1);
    assert_eq!(report.error_count(), 1);
    assert_eq!(report.warning_count(), 0);
    assert!(report.has_errors());
}

#[test]
fn test_options_follow_settings() {
    let settings = DavSettings {
        else_check: ElseCheck::Warn,
        ..DavSettings::default()
    };
    let validator = Validator::new(ValidatorOptions::from(&settings));
    assert_eq!(validator.options().else_check, ElseCheck::Warn);
    assert_eq!(Validator::default().options(), ValidatorOptions::default());
    assert_eq!(validator.validate(&["Sinon."]).len(), 1);
}
