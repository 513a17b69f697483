use super::*;
use crate::kernel::editor::config::FontSize;
use crate::kernel::language::LanguageId;
use crate::kernel::services::ports::settings::Settings;

fn surface_with(doc: &str, lang: LanguageId) -> RopeSurface {
    let mut surface = RopeSurface::new();
    surface.set_state(doc, &SessionConfig::initial(lang, &Settings::default()));
    surface
}

#[test]
fn line_ranges_exclude_line_breaks() {
    let surface = surface_with("ab\r\ncde\n\nf", LanguageId::Python);

    assert_eq!(surface.line_count(), 4);
    assert_eq!(surface.line(0), None);
    assert_eq!(surface.line(1), Some(LineInfo { number: 1, from: 0, to: 2 }));
    assert_eq!(surface.line(2), Some(LineInfo { number: 2, from: 4, to: 7 }));
    assert_eq!(surface.line(3), Some(LineInfo { number: 3, from: 8, to: 8 }));
    assert_eq!(surface.line(4), Some(LineInfo { number: 4, from: 9, to: 10 }));
    assert_eq!(surface.line(5), None);
}

#[test]
fn empty_document_has_one_empty_line() {
    let surface = surface_with("", LanguageId::Python);
    assert_eq!(surface.line_count(), 1);
    assert_eq!(surface.line(1), Some(LineInfo { number: 1, from: 0, to: 0 }));
}

#[test]
fn dispatch_applies_edits_and_reports_changes() {
    let mut surface = surface_with("hello world", LanguageId::Python);

    let changed = surface.dispatch(Transaction {
        changes: vec![TextEdit::delete(0, 6), TextEdit::insert(11, "!")],
        effects: Vec::new(),
    });
    assert!(changed);
    assert_eq!(surface.text(), "world!");
    assert_eq!(surface.version(), 1);

    assert!(!surface.dispatch(Transaction::edit(TextEdit::delete(3, 3))));
    assert!(!surface.dispatch(Transaction::diagnostics(Vec::new())));
    assert_eq!(surface.version(), 1);
}

#[test]
fn out_of_range_edits_are_clamped() {
    let mut surface = surface_with("abc", LanguageId::Python);
    assert!(surface.dispatch(Transaction::edit(TextEdit::delete(1, 99))));
    assert_eq!(surface.text(), "a");
}

#[test]
fn syntax_tree_follows_language_support_entry() {
    let mut surface = surface_with("print(1)\n", LanguageId::Python);
    assert_eq!(surface.syntax().map(|doc| doc.language()), Some(LanguageId::Python));

    let mut config = surface.config().clone();
    config.remove_language_support();
    surface.dispatch(Transaction::reconfigure(&config));
    assert!(surface.syntax().is_none());

    config.restore_language_support(2, LanguageId::Java);
    surface.dispatch(Transaction::reconfigure(&config));
    assert_eq!(surface.syntax().map(|doc| doc.language()), Some(LanguageId::Java));
}

#[test]
fn diagnostics_are_replaced_wholesale_and_clamped_on_edit() {
    let mut surface = surface_with("one\ntwo\n", LanguageId::Python);
    surface.dispatch(Transaction::diagnostics(vec![
        Diagnostic::error(0, 3, "a"),
        Diagnostic::error(4, 7, "b"),
    ]));
    surface.dispatch(Transaction::diagnostics(vec![Diagnostic::error(4, 7, "c")]));
    assert_eq!(surface.diagnostics(), &[Diagnostic::error(4, 7, "c")]);

    surface.dispatch(Transaction::edit(TextEdit::delete(2, 8)));
    assert_eq!(surface.diagnostics(), &[Diagnostic::error(2, 2, "c")]);
}

#[test]
fn font_px_reads_font_size_entry() {
    let mut surface = surface_with("", LanguageId::Python);
    assert_eq!(surface.font_px(14.0), 14.0);

    let mut config = surface.config().clone();
    config.set_font_size(FontSize::Scaled(2.0));
    surface.dispatch(Transaction::reconfigure(&config));
    assert_eq!(surface.font_px(14.0), 28.0);
}

#[test]
fn set_state_clears_diagnostics() {
    let mut surface = surface_with("x", LanguageId::Python);
    surface.dispatch(Transaction::diagnostics(vec![Diagnostic::error(0, 1, "e")]));
    let config = surface.config().clone();
    surface.set_state("y", &config);
    assert!(surface.diagnostics().is_empty());
    assert_eq!(surface.text(), "y");
}
