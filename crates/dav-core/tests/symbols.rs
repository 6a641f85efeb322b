use dav_core::{LineIndex, SymbolKind, SymbolRange, outline};
use pretty_assertions::assert_eq;

fn outline_text(text: &str) -> dav_core::DocumentOutline {
    outline(&LineIndex::from_text(text).lines())
}

#[test]
fn test_functions_own_their_declarations() {
    let text = "\
J'ai un nombre appelé total.
Crée une fonction nommée ajoute qui prend a et b.
    I have a number called sum.
    Affiche sum.
FinFonction.
J'ai une liste appelée notes.";
    let outline = outline_text(text);

    let names: Vec<_> = outline.symbols.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["total", "ajoute", "notes"]);

    let function = &outline.symbols[1];
    assert_eq!(function.kind, SymbolKind::Function);
    assert_eq!(function.detail.as_deref(), Some("a et b"));
    assert_eq!(function.range, SymbolRange::new(1, 0, 4, 12));
    assert_eq!(function.selection_range, SymbolRange::new(1, 25, 1, 31));
    assert_eq!(function.children.len(), 1);

    let sum = &function.children[0];
    assert_eq!(sum.kind, SymbolKind::Variable);
    assert_eq!(sum.detail.as_deref(), Some("a number"));
    assert_eq!(sum.selection_range, SymbolRange::new(2, 27, 2, 30));

    assert_eq!(outline.symbols[2].detail.as_deref(), Some("une liste"));
}

#[test]
fn test_unclosed_function_extends_to_last_line() {
    let outline = outline_text("Create a function named main.\n    Display 1.\n");
    assert_eq!(outline.top_level_count(), 1);
    let main = &outline.symbols[0];
    assert_eq!(main.name, "main");
    assert_eq!(main.detail, None);
    assert_eq!(main.range.end_line, 2);
}

#[test]
fn test_nested_functions_and_lookup() {
    let text = "\
Create a function named outer.
    Create a function named inner.
        I have a flag called done.
    EndFunction.
EndFunction.";
    let outline = outline_text(text);
    assert_eq!(outline.top_level_count(), 1);

    let flat: Vec<_> = outline
        .flatten_preorder()
        .into_iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(flat, vec!["outer", "inner", "done"]);
    assert_eq!(outline.find_by_name("done").len(), 1);
    assert_eq!(outline.symbols[0].children[0].range.end_line, 3);
}

#[test]
fn test_nameless_lines_produce_no_symbols() {
    let outline = outline_text("Crée une fonction nommée.\nJ'ai un nombre.\nFinFonction.");
    assert!(outline.is_empty());
}
