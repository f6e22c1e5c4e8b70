//! Comparison and sorting in Ukrainian alphabet order.
//!
//! Everything here is built on a single three-way comparison, [`compare`]:
//! - **Comparator sorts** ([`sort`], [`sort_mut`], ...): standard library sorts driven by [`compare`].
//! - **Keyed sorts** ([`sort_indices`], [`sort_cached`]): each element is normalized once into a
//!   [`CollationKey`] and the keys are sorted instead.
//! - **Parallel sorts** (feature `parallel`): rayon's parallel stable sort with the same comparator.
//!
//! All sorts are stable: elements that compare equal keep their input order.

use crate::core::{CollationKey, KeyAccessor, RANKS, RankTable, SortEntry};
use std::cmp::Ordering;

/// Compares strings by the Ukrainian alphabet.
///
/// A `Collator` is a cheap, copyable handle on the process-wide rank table.
/// The free functions in this module ([`compare`], [`sort`], ...) are shorthands
/// for calling the same methods on `Collator::new()`.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use ukrsort::Collator;
///
/// let collator = Collator::new();
/// assert_eq!(collator.compare("ґава", "груша"), Ordering::Greater);
/// assert_eq!(collator.sort(&["яблуко", "апельсин", "банан"]), ["апельсин", "банан", "яблуко"]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Collator {
    ranks: &'static RankTable,
}

impl Default for Collator {
    fn default() -> Self {
        Self::new()
    }
}

impl Collator {
    pub fn new() -> Self {
        Self { ranks: &RANKS }
    }

    /// Sort rank of a single lowercase letter. See [`core::rank_of`](crate::core::rank_of).
    #[inline]
    pub fn rank_of(&self, c: char) -> u32 {
        self.ranks.rank(c)
    }

    /// The letters of `s` that take part in comparison.
    /// See [`core::normalize`](crate::core::normalize).
    pub fn normalize<'a>(&self, s: &'a str) -> impl Iterator<Item = char> + 'a {
        crate::core::normalize(s)
    }

    /// Precomputes the sort key of `s`.
    pub fn key(&self, s: &str) -> CollationKey {
        CollationKey::new(s)
    }

    /// Three-way comparison of `a` and `b` in Ukrainian alphabet order.
    ///
    /// Case and every non-letter character (digits, apostrophes, hyphens,
    /// whitespace) are ignored. The first differing letter decides by rank; if
    /// one letter sequence is a prefix of the other, the shorter one sorts first.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }

        let mut left = self.normalize(a);
        let mut right = self.normalize(b);

        loop {
            match (left.next(), right.next()) {
                (Some(x), Some(y)) => {
                    let (rank_x, rank_y) = (self.rank_of(x), self.rank_of(y));
                    if rank_x != rank_y {
                        return rank_x.cmp(&rank_y);
                    }
                }
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
            }
        }
    }

    /// Returns a new vector holding `items` in ascending order.
    pub fn sort<S: AsRef<str> + Clone>(&self, items: &[S]) -> Vec<S> {
        let mut sorted = items.to_vec();
        sorted.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
        sorted
    }

    /// Returns a new vector holding `items` in descending order.
    pub fn sort_desc<S: AsRef<str> + Clone>(&self, items: &[S]) -> Vec<S> {
        let mut sorted = items.to_vec();
        sorted.sort_by(|a, b| self.compare(b.as_ref(), a.as_ref()));
        sorted
    }
}

/// Compares two strings in Ukrainian alphabet order.
///
/// Usable directly as a comparator for any `sort_by`-style facility.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use ukrsort::compare;
///
/// assert_eq!(compare("кіт", "кітер"), Ordering::Less);
/// assert_eq!(compare("м'ясо", "мясо"), Ordering::Equal);
/// assert_eq!(compare("apple", "яблуко"), Ordering::Greater);
///
/// let mut words = vec!["ї", "й", "і"];
/// words.sort_by(|a, b| compare(a, b));
/// assert_eq!(words, ["і", "ї", "й"]);
/// ```
#[inline]
pub fn compare(a: &str, b: &str) -> Ordering {
    Collator::new().compare(a, b)
}

/// Returns a new vector with `items` in ascending Ukrainian order.
///
/// The input is left untouched; the output holds the original strings, with
/// their casing and punctuation intact.
///
/// # Examples
///
/// ```
/// use ukrsort::sort;
///
/// let words = ["яблуко", "апельсин", "ґава", "груша"];
/// assert_eq!(sort(&words), ["апельсин", "груша", "ґава", "яблуко"]);
/// ```
pub fn sort<S: AsRef<str> + Clone>(items: &[S]) -> Vec<S> {
    Collator::new().sort(items)
}

/// Returns a new vector with `items` in descending Ukrainian order.
///
/// Elements that compare equal keep their input order.
pub fn sort_desc<S: AsRef<str> + Clone>(items: &[S]) -> Vec<S> {
    Collator::new().sort_desc(items)
}

/// Sorts a mutable slice in place, ascending.
///
/// # Examples
///
/// ```
/// use ukrsort::sort_mut;
///
/// let mut data = vec![String::from("Яблуко"), String::from("апельсин"), String::from("Ґрунт")];
/// sort_mut(&mut data);
///
/// assert_eq!(data, ["апельсин", "Ґрунт", "Яблуко"]);
/// ```
pub fn sort_mut<S: AsRef<str>>(data: &mut [S]) {
    data.sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
}

/// Sorts a mutable slice in place, descending.
pub fn sort_desc_mut<S: AsRef<str>>(data: &mut [S]) {
    data.sort_by(|a, b| compare(b.as_ref(), a.as_ref()));
}

/// Sorts records in place by a string field.
///
/// # Examples
///
/// ```
/// use ukrsort::sort_by_key;
///
/// struct City {
///     name: String,
///     population: u32,
/// }
///
/// let mut cities = vec![
///     City { name: "Ужгород".into(), population: 115_000 },
///     City { name: "Івано-Франківськ".into(), population: 238_000 },
///     City { name: "Житомир".into(), population: 261_000 },
/// ];
/// sort_by_key(&mut cities, |c| c.name.as_str());
///
/// let names: Vec<&str> = cities.iter().map(|c| c.name.as_str()).collect();
/// assert_eq!(names, ["Житомир", "Івано-Франківськ", "Ужгород"]);
/// ```
pub fn sort_by_key<T, F>(data: &mut [T], key: F)
where
    F: Fn(&T) -> &str,
{
    data.sort_by(|a, b| compare(key(a), key(b)));
}

/// Performs an index-based sort on the provided collection.
///
/// This function does not modify the input collection. Instead, it returns a `Vec<usize>`
/// containing the indices that would order the collection. Each key is normalized exactly
/// once, and equal keys keep their relative order.
///
/// # Examples
///
/// ```
/// use ukrsort::sort_indices;
///
/// let data = vec!["ґава", "груша", "апельсин"];
/// let indices = sort_indices(&data);
///
/// assert_eq!(indices, vec![2, 1, 0]); // апельсин, груша, ґава
/// ```
pub fn sort_indices<T: KeyAccessor + ?Sized>(provider: &T) -> Vec<usize> {
    let len = provider.len();
    if len == 0 {
        return vec![];
    }

    let mut entries: Vec<SortEntry> = (0..len)
        .map(|index| SortEntry {
            index,
            key: CollationKey::new(provider.get_key(index)),
        })
        .collect();

    entries.sort_by(|a, b| a.key.cmp(&b.key));

    entries.into_iter().map(|e| e.index).collect()
}

/// Sorts a mutable slice in place, normalizing each element only once.
///
/// Produces the same order as [`sort_mut`]. Prefer it for large inputs or long
/// strings, where normalizing on every comparison dominates.
pub fn sort_cached<S: AsRef<str>>(data: &mut [S]) {
    let indices = sort_indices(&*data);
    apply_permutation(data, indices);
}

/// Moves `data[indices[i]]` to position `i` for every `i`, following cycles with swaps.
fn apply_permutation<T>(data: &mut [T], mut indices: Vec<usize>) {
    for i in 0..data.len() {
        let mut current = i;
        while indices[current] != i {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current;
            current = next;
        }
        indices[current] = current;
    }
}

/// Sorts a mutable slice in place, ascending, on the rayon thread pool.
///
/// Same result as [`sort_mut`].
#[cfg(feature = "parallel")]
pub fn par_sort_mut<S: AsRef<str> + Send>(data: &mut [S]) {
    use rayon::slice::ParallelSliceMut;

    data.par_sort_by(|a, b| compare(a.as_ref(), b.as_ref()));
}

/// Sorts a mutable slice in place, descending, on the rayon thread pool.
///
/// Same result as [`sort_desc_mut`].
#[cfg(feature = "parallel")]
pub fn par_sort_desc_mut<S: AsRef<str> + Send>(data: &mut [S]) {
    use rayon::slice::ParallelSliceMut;

    data.par_sort_by(|a, b| compare(b.as_ref(), a.as_ref()));
}
