//! Bilingual keyword tables.
//!
//! Every keyword exists once per [`Language`]; the two spellings are synonyms for the same
//! grammatical role. Matching is case-sensitive and anchored at the start of the trimmed line.

use serde::{Deserialize, Serialize};

/// A surface language of DAV source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// French keywords (`Si`, `FinSi.`, `Affiche` ...).
    French,
    /// English keywords (`If`, `EndIf.`, `Display` ...).
    English,
}

impl Language {
    /// Both languages, French first.
    pub const ALL: [Language; 2] = [Language::French, Language::English];
}

/// Which keyword set a suggestion component should offer.
///
/// This never restricts what the classifier *accepts*: both sets are always recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguagePreference {
    /// Offer only French keywords.
    French,
    /// Offer only English keywords.
    English,
    /// Offer both keyword sets.
    #[default]
    Both,
}

impl LanguagePreference {
    /// Returns `true` if keywords of `language` should be offered.
    pub fn includes(self, language: Language) -> bool {
        matches!(
            (self, language),
            (Self::Both, _)
                | (Self::French, Language::French)
                | (Self::English, Language::English)
        )
    }

    /// Languages selected by this preference, French first.
    pub fn languages(self) -> impl Iterator<Item = Language> {
        Language::ALL.into_iter().filter(move |l| self.includes(*l))
    }
}

/// A keyword spelled once per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    /// French spelling.
    pub french: &'static str,
    /// English spelling.
    pub english: &'static str,
}

impl Bilingual {
    const fn new(french: &'static str, english: &'static str) -> Self {
        Self { french, english }
    }

    /// The spelling for `language`.
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::French => self.french,
            Language::English => self.english,
        }
    }

    /// Both spellings, French first.
    pub fn both(&self) -> [&'static str; 2] {
        [self.french, self.english]
    }
}

/// Block-structured constructs that need an opener line and a matching closer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructKind {
    /// `Crée une fonction nommée ...` / `Create a function named ...`
    Function,
    /// `Si ...` / `If ...`
    Conditional,
    /// `TantQue ...` / `While ...`
    WhileLoop,
    /// `Pour ... de ... à ...` / `For ... from ... to ...`
    ForLoop,
}

impl ConstructKind {
    /// Number of construct kinds.
    pub const COUNT: usize = 4;

    /// All construct kinds, in reporting order.
    pub const ALL: [ConstructKind; Self::COUNT] = [
        ConstructKind::Function,
        ConstructKind::Conditional,
        ConstructKind::WhileLoop,
        ConstructKind::ForLoop,
    ];

    /// Dense index in `0..4`, matching the order of [`ConstructKind::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Function => 0,
            Self::Conditional => 1,
            Self::WhileLoop => 2,
            Self::ForLoop => 3,
        }
    }

    /// Opener and closer keywords for this construct.
    pub fn keywords(self) -> &'static ConstructKeywords {
        match self {
            Self::Function => &FUNCTION,
            Self::Conditional => &CONDITIONAL,
            Self::WhileLoop => &WHILE_LOOP,
            Self::ForLoop => &FOR_LOOP,
        }
    }

    /// Short bilingual label used in messages, e.g. `Si/If`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Function => "Fonction/Function",
            Self::Conditional => "Si/If",
            Self::WhileLoop => "TantQue/While",
            Self::ForLoop => "Pour/For",
        }
    }

    /// Bilingual closer label without the terminator, e.g. `FinSi/EndIf`.
    pub fn closer_label(self) -> &'static str {
        match self {
            Self::Function => "FinFonction/EndFunction",
            Self::Conditional => "FinSi/EndIf",
            Self::WhileLoop => "FinTantQue/EndWhile",
            Self::ForLoop => "FinPour/EndFor",
        }
    }
}

/// Opener prefix and exact closer line of one construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructKeywords {
    /// Keyword prefix that opens the construct.
    pub opener: Bilingual,
    /// Exact closer line, terminator included.
    pub closer: Bilingual,
}

const FUNCTION: ConstructKeywords = ConstructKeywords {
    opener: Bilingual::new("Crée une fonction nommée", "Create a function named"),
    closer: Bilingual::new("FinFonction.", "EndFunction."),
};

const CONDITIONAL: ConstructKeywords = ConstructKeywords {
    opener: Bilingual::new("Si", "If"),
    closer: Bilingual::new("FinSi.", "EndIf."),
};

const WHILE_LOOP: ConstructKeywords = ConstructKeywords {
    opener: Bilingual::new("TantQue", "While"),
    closer: Bilingual::new("FinTantQue.", "EndWhile."),
};

const FOR_LOOP: ConstructKeywords = ConstructKeywords {
    opener: Bilingual::new("Pour", "For"),
    closer: Bilingual::new("FinPour.", "EndFor."),
};

/// Else marker inside a conditional.
pub const ELSE: Bilingual = Bilingual::new("Sinon", "Else");
/// Variable declaration prefix.
pub const DECLARATION: Bilingual = Bilingual::new("J'ai", "I have");
/// Assignment prefix.
pub const ASSIGNMENT: Bilingual = Bilingual::new("Assigne", "Set");
/// Display/output prefix.
pub const DISPLAY: Bilingual = Bilingual::new("Affiche", "Display");

/// Connective introducing a function's parameters.
pub const TAKES_PARAMETERS: Bilingual = Bilingual::new("qui prend", "that takes");
/// Connective naming a declared variable (`appelé` also covers `appelée`).
pub const CALLED: Bilingual = Bilingual::new("appelé", "called");
/// Connective introducing an assigned value.
pub const ASSIGN_TO: Bilingual = Bilingual::new("à", "to");
/// Lower bound connective of a for-loop header.
pub const RANGE_FROM: Bilingual = Bilingual::new("de", "from");
/// Upper bound connective of a for-loop header.
pub const RANGE_TO: Bilingual = Bilingual::new("à", "to");

/// Accepted suffixes of a display statement.
pub const DISPLAY_TERMINATORS: [&str; 3] = ["line.", "continue.", "."];
/// Line comment marker.
pub const COMMENT_MARKER: &str = "//";
/// Statement terminator.
pub const TERMINATOR: char = '.';

/// Keywords a suggestion component should offer for `preference`.
///
/// Openers and statement prefixes come first, then the else marker and closers, one language
/// at a time (French before English when both are selected).
pub fn offered_keywords(preference: LanguagePreference) -> Vec<&'static str> {
    let mut out = Vec::new();
    for language in preference.languages() {
        for kind in ConstructKind::ALL {
            out.push(kind.keywords().opener.get(language));
        }
        for statement in [DECLARATION, ASSIGNMENT, DISPLAY] {
            out.push(statement.get(language));
        }
        out.push(ELSE.get(language));
        for kind in ConstructKind::ALL {
            out.push(kind.keywords().closer.get(language));
        }
    }
    out
}
