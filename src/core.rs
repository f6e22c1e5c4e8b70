//! Core tables and types for Ukrainian collation.
//!
//! This module defines:
//! - [`ALPHABET`]: The canonical Ukrainian alphabet order.
//! - [`rank_of`] and [`normalize`]: The building blocks of the comparison.
//! - [`CollationKey`]: A precomputed, owned sort key.
//! - [`KeyAccessor`]: The trait users implement to sort their custom collections.
//! - RankTable: Internal dense lookup from letter to rank.

use cuneiform::cuneiform;
use std::collections::VecDeque;
use unicode_general_category::{GeneralCategory, get_general_category};

/// The Ukrainian alphabet in canonical order. The rank of a letter is its index.
pub const ALPHABET: [char; 33] = [
    'а', 'б', 'в', 'г', 'ґ', 'д', 'е', 'є', 'ж', 'з', 'и', 'і', 'ї', 'й', 'к', 'л', 'м', 'н', 'о',
    'п', 'р', 'с', 'т', 'у', 'ф', 'х', 'ц', 'ч', 'ш', 'щ', 'ь', 'ю', 'я',
];

/// Offset added to the code point of any letter outside [`ALPHABET`].
///
/// Keeps every foreign letter strictly after `я` while ordering foreign letters
/// among themselves by code point.
pub const FOREIGN_RANK_OFFSET: u32 = 1000;

/// First code point covered by the rank table (`а`, U+0430).
const WINDOW_START: u32 = 0x0430;

/// Width of the rank table. Covers U+0430..U+04AF, which includes `ґ` (U+0491).
const WINDOW_LEN: usize = 128;

/// Marks table slots that do not hold a Ukrainian letter.
const UNRANKED: u8 = u8::MAX;

/// Dense letter-to-rank lookup over a fixed Cyrillic window.
///
/// Built at compile time; the build fails if the alphabet contains a duplicate
/// or a letter outside the window.
#[cuneiform]
#[derive(Debug)]
pub(crate) struct RankTable {
    data: [u8; WINDOW_LEN],
}

impl RankTable {
    const fn build() -> Self {
        let mut data = [UNRANKED; WINDOW_LEN];
        let mut i = 0;
        while i < ALPHABET.len() {
            let code = ALPHABET[i] as u32;
            assert!(
                code >= WINDOW_START && code < WINDOW_START + WINDOW_LEN as u32,
                "alphabet letter outside rank window"
            );
            let slot = (code - WINDOW_START) as usize;
            assert!(data[slot] == UNRANKED, "duplicate letter in alphabet");
            data[slot] = i as u8;
            i += 1;
        }
        RankTable { data }
    }

    /// Rank of `c` if it is one of the alphabet letters.
    #[inline(always)]
    pub(crate) fn get(&self, c: char) -> Option<u32> {
        let slot = (c as u32).wrapping_sub(WINDOW_START) as usize;
        match self.data.get(slot) {
            Some(&rank) if rank != UNRANKED => Some(rank as u32),
            _ => None,
        }
    }

    /// Rank of `c`, falling back to `FOREIGN_RANK_OFFSET + code point`.
    #[inline(always)]
    pub(crate) fn rank(&self, c: char) -> u32 {
        self.get(c).unwrap_or(FOREIGN_RANK_OFFSET + c as u32)
    }
}

pub(crate) static RANKS: RankTable = RankTable::build();

/// Returns the sort rank of a lowercase letter.
///
/// Alphabet letters map to `0..=32`. Any other character maps to
/// `1000 + code point`, so it sorts after every Ukrainian letter.
///
/// # Examples
///
/// ```
/// use ukrsort::core::rank_of;
///
/// assert_eq!(rank_of('а'), 0);
/// assert_eq!(rank_of('ґ'), 4);
/// assert_eq!(rank_of('я'), 32);
/// assert_eq!(rank_of('a'), 1000 + 'a' as u32);
/// ```
#[inline]
pub fn rank_of(c: char) -> u32 {
    RANKS.rank(c)
}

/// Returns `true` if `c` is a Unicode letter (general category `L*`).
///
/// Combining marks, letter-like numbers, digits and punctuation are not letters.
#[inline]
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Lowercases `s` and yields only its letters, in order.
///
/// Lowercasing is per character, so a trailing `Σ` becomes `σ`, not `ς`.
///
/// # Examples
///
/// ```
/// use ukrsort::core::normalize;
///
/// let letters: String = normalize("М'ясо-2").collect();
/// assert_eq!(letters, "мясо");
/// ```
pub fn normalize(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase).filter(|&c| is_letter(c))
}

/// A precomputed sort key: the ranks of a string's normalized letters.
///
/// Ordering two keys gives the same result as [`compare`](crate::compare) on
/// the strings they were built from, so keys can be cached, stored in ordered
/// maps, or used with [`slice::sort_by_cached_key`].
///
/// ```
/// use ukrsort::CollationKey;
///
/// assert!(CollationKey::new("груша") < CollationKey::new("ґава"));
/// assert_eq!(CollationKey::new("Кіт-123"), CollationKey::new("кіт"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CollationKey(Vec<u32>);

impl CollationKey {
    pub fn new(s: &str) -> Self {
        Self(normalize(s).map(|c| RANKS.rank(c)).collect())
    }

    /// The letter ranks making up this key.
    pub fn ranks(&self) -> &[u32] {
        &self.0
    }

    /// Number of letters that took part in the key.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for CollationKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// An item index paired with its precomputed key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SortEntry {
    pub index: usize,
    pub key: CollationKey,
}

/// A trait for accessing string keys from a collection without copying.
///
/// This allows [`sort_indices`](crate::sort_indices) to order any collection
/// whose elements can be viewed as `&str` (e.g. `Vec<String>`, `VecDeque<&str>`,
/// or flat buffers with an offsets array).
///
/// # Examples
///
/// ```
/// use ukrsort::core::KeyAccessor;
///
/// struct Cities {
///     names: Vec<String>,
/// }
///
/// impl KeyAccessor for Cities {
///     fn get_key(&self, index: usize) -> &str {
///         &self.names[index]
///     }
///
///     fn len(&self) -> usize {
///         self.names.len()
///     }
/// }
/// ```
pub trait KeyAccessor {
    /// Returns the string key at the given index.
    fn get_key(&self, index: usize) -> &str;

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns `true` if the collection is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: AsRef<str>> KeyAccessor for [T] {
    fn get_key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl so callers can pass `&vec` directly.
impl<T: AsRef<str>> KeyAccessor for Vec<T> {
    fn get_key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}

impl<T: AsRef<str>> KeyAccessor for VecDeque<T> {
    fn get_key(&self, index: usize) -> &str {
        self[index].as_ref()
    }

    fn len(&self) -> usize {
        self.len()
    }
}
