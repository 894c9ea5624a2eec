//! Locale-style string collation for textual column sorting.
//!
//! A [`Collator`] ranks characters by the alphabets registered on it, so the
//! covered scripts are configuration rather than a hard-coded locale pair.
//! Uppercase and lowercase of the same letter share a primary rank; the
//! [`CaseFirst`] setting decides which wins when two strings differ only in
//! case.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Latin alphabet as upper/lower pairs, in collation order.
pub const LATIN: &str = "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZz";

/// Cyrillic alphabet as upper/lower pairs, in collation order.
pub const CYRILLIC: &str =
    "АаБбВвГгДдЕеЁёЖжЗзИиЙйКкЛлМмНнОоПпРрСсТтУуФфХхЦцЧчШшЩщЪъЫыЬьЭэЮюЯя";

/// Which case wins when two strings differ only in letter case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseFirst {
    #[default]
    Upper,
    Lower,
}

#[derive(Debug, Clone)]
pub struct Collator {
    case_first: CaseFirst,
    ranks: HashMap<char, u32>,
    next_rank: u32,
}

impl Default for Collator {
    fn default() -> Self {
        Self::new()
    }
}

impl Collator {
    pub fn new() -> Self {
        Self {
            case_first: CaseFirst::default(),
            ranks: HashMap::new(),
            next_rank: 0,
        }
    }

    pub fn case_first(mut self, case_first: CaseFirst) -> Self {
        self.case_first = case_first;
        self
    }

    /// Register an alphabet given as "AaBbCc..." upper/lower pairs.
    /// Letters of earlier alphabets rank before letters of later ones.
    pub fn with_alphabet(mut self, pairs: &str) -> Self {
        let mut chars = pairs.chars();
        while let (Some(upper), Some(lower)) = (chars.next(), chars.next()) {
            self.ranks.insert(upper, self.next_rank);
            self.ranks.insert(lower, self.next_rank);
            self.next_rank += 1;
        }
        self
    }

    /// Compare two strings: primary letter ranks first, then length,
    /// then the first case difference, then raw code points.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let mut tiebreak = Ordering::Equal;
        let mut a_chars = a.chars();
        let mut b_chars = b.chars();

        loop {
            match (a_chars.next(), b_chars.next()) {
                (Some(ca), Some(cb)) => {
                    let primary = self.primary(ca).cmp(&self.primary(cb));
                    if primary != Ordering::Equal {
                        return primary;
                    }
                    if tiebreak == Ordering::Equal && ca != cb {
                        tiebreak = self
                            .case_rank(ca)
                            .cmp(&self.case_rank(cb))
                            .then(ca.cmp(&cb));
                    }
                }
                (None, None) => return tiebreak,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
            }
        }
    }

    /// Primary weight of a character. Registered letters rank by alphabet
    /// position; everything else ranks after them by code point.
    fn primary(&self, c: char) -> u64 {
        match self.ranks.get(&c) {
            Some(rank) => *rank as u64,
            None => (1 << 32) + c as u64,
        }
    }

    fn case_rank(&self, c: char) -> u8 {
        let upper_wins = self.case_first == CaseFirst::Upper;
        if c.is_uppercase() {
            u8::from(!upper_wins)
        } else if c.is_lowercase() {
            u8::from(upper_wins)
        } else {
            0
        }
    }
}

/// Shared collator covering Latin and Cyrillic with uppercase-first
/// semantics, built once and reused.
pub fn default_collator() -> &'static Collator {
    static COLLATOR: OnceLock<Collator> = OnceLock::new();
    COLLATOR.get_or_init(|| Collator::new().with_alphabet(LATIN).with_alphabet(CYRILLIC))
}
