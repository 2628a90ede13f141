use crate::error::Error;

/// One pre-uploaded opinion the tool knows how to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseEntry {
    /// Opaque numeric string accepted on the command line.
    pub identifier: &'static str,
    pub case_name: &'static str,
    /// Document reference inserted into the scholar fetch URL.
    pub scholar_id: &'static str,
}

/// The cases pre-uploaded to the scholar index. This table is the only
/// source of valid identifiers; anything else fails resolution before
/// any network call is made.
const KNOWN_CASES: &[CaseEntry] = &[
    CaseEntry {
        identifier: "8560467914430638671",
        case_name: "Littlejohn v. State",
        scholar_id: "8560467914430638671",
    },
    CaseEntry {
        identifier: "4924998297704337602",
        case_name: "Tilden v. State",
        scholar_id: "4924998297704337602",
    },
    CaseEntry {
        identifier: "1796093055325152237",
        case_name: "Beckham v. State",
        scholar_id: "1796093055325152237",
    },
    CaseEntry {
        identifier: "6613686394624308708",
        case_name: "Gideon v. Wainwright",
        scholar_id: "6613686394624308708",
    },
    CaseEntry {
        identifier: "3256336941708014729",
        case_name: "Miranda v. Arizona",
        scholar_id: "3256336941708014729",
    },
];

/// Fixed identifier → case lookup. No side effects.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaseRegistry;

impl CaseRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, identifier: &str) -> Result<&'static CaseEntry, Error> {
        KNOWN_CASES
            .iter()
            .find(|c| c.identifier == identifier)
            .ok_or_else(|| Error::UnknownCase(identifier.to_string()))
    }

    pub fn entries(&self) -> impl Iterator<Item = &'static CaseEntry> {
        KNOWN_CASES.iter()
    }
}
