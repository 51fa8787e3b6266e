//! Curriculum table: which courses each term requires.
//!
//! The built-in table mirrors the program's published course list. Lookups
//! key on the term's `"{year}-{label}"` form; the order of each course list
//! is the order validation reports missing courses in.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::{CourseCode, Term};

/// Ordered course requirements per term.
#[derive(Debug, Clone)]
pub struct Curriculum {
    terms: HashMap<String, Vec<CourseCode>>,
}

static BUILTIN: Lazy<Curriculum> = Lazy::new(|| {
    let table: [(&str, &[&str]); 9] = [
        (
            "1-1st Sem",
            &[
                "UNDS111", "STAS111", "TCWD111", "ENGL111", "VRTS111", "FOPR111", "ICOM111",
                "PCAS111",
            ],
        ),
        (
            "1-2nd Sem",
            &[
                "PURC111", "MATM111", "RIPH111", "CRWT111", "VRTS112", "INPR111", "WBDV111",
                "DLOG111",
            ],
        ),
        ("1-Summer", &["NSTP111", "NSTP112", "PHED111", "PHED112"]),
        (
            "2-1st Sem",
            &[
                "ETIC211", "PHED213", "DSAA211", "IMGT211", "WBDV112", "DSCR211", "OOPR211",
                "VRTS113", "VRTS114",
            ],
        ),
        (
            "2-2nd Sem",
            &[
                "PPGC211", "PHED214", "LFAD211", "ADET211", "DBSA211", "MADS211", "QMET211",
                "OOPR212",
            ],
        ),
        (
            "3-1st Sem",
            &[
                "SEPC311", "ITPM311", "HCIN311", "IAAS311", "IPTC311", "NETW311", "SIAA311",
                "SFCR311",
            ],
        ),
        (
            "3-2nd Sem",
            &["HCIN312", "IAAS312", "IPTC312", "NETW312", "SIAA312", "ITCP311"],
        ),
        (
            "4-1st Sem",
            &[
                "CTIC411", "BUSM311", "ITCP312", "ITEL311", "ITEL312", "SADM411", "ARTA111",
                "RIZL111",
            ],
        ),
        ("4-2nd Sem", &["ITM411", "ITEL313", "ITEL314"]),
    ];

    let terms = table
        .into_iter()
        .map(|(key, codes)| {
            (
                key.to_string(),
                codes.iter().map(|c| CourseCode::from(*c)).collect(),
            )
        })
        .collect();

    Curriculum { terms }
});

impl Curriculum {
    /// Build a curriculum from explicit term entries.
    pub fn new(terms: HashMap<String, Vec<CourseCode>>) -> Self {
        Self { terms }
    }

    /// The built-in program curriculum shared by the whole process.
    pub fn builtin() -> &'static Curriculum {
        &BUILTIN
    }

    /// Required courses for a term, in reporting order.
    ///
    /// Terms without an entry (e.g. a summer term with no offerings) have no
    /// requirements, so an empty slice is returned rather than an error.
    pub fn required_courses(&self, term: &Term) -> &[CourseCode] {
        self.terms
            .get(&term.curriculum_key())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the table has an entry for this term.
    pub fn has_term(&self, term: &Term) -> bool {
        self.terms.contains_key(&term.curriculum_key())
    }

    /// Number of terms with entries.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }
}
