//! # ukrsort
//!
//! `ukrsort` orders strings by the Ukrainian alphabet:
//!
//! > а б в г ґ д е є ж з и і ї й к л м н о п р с т у ф х ц ч ш щ ь ю я
//!
//! Unicode code-point order gets this wrong: `ґ` (U+0491), `є` (U+0454), `і` (U+0456) and
//! `ї` (U+0457) all sit after `я` (U+044F), so a plain `slice::sort` puts `ґава` after `яблуко`.
//!
//! ## Key Features
//!
//! - **Alphabet-aware comparison**: [`compare`] ranks letters by their position in the alphabet
//!   and is usable as a comparator in any `sort_by`-style facility.
//! - **Normalized keys**: comparison ignores case and every non-letter character, so
//!   `"м'ясо"`, `"мясо"` and `"М-ЯСО"` compare equal. The returned strings are never altered.
//! - **Deterministic fallback**: letters outside the Ukrainian alphabet sort after all Ukrainian
//!   letters, ordered among themselves by code point.
//! - **Keyed sorting**: [`CollationKey`] and [`sort_indices`] normalize each element once, and
//!   the [`KeyAccessor`] trait lets custom collections be sorted by index without copying.
//! - **Parallel sorting**: with the `parallel` feature, [`par_sort_mut`] sorts on the rayon pool.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use ukrsort::{sort, sort_desc};
//!
//! let words = ["яблуко", "апельсин", "ґава", "груша"];
//!
//! assert_eq!(sort(&words), ["апельсин", "груша", "ґава", "яблуко"]);
//! assert_eq!(sort_desc(&words), ["яблуко", "ґава", "груша", "апельсин"]);
//! ```
//!
//! ### In-Place and Custom Types
//!
//! ```rust
//! use ukrsort::{sort_by_key, sort_mut};
//!
//! let mut data = vec!["їжак", "іржа", "йогурт"];
//! sort_mut(&mut data);
//! assert_eq!(data, ["іржа", "їжак", "йогурт"]);
//!
//! struct Entry {
//!     word: &'static str,
//! }
//!
//! let mut entries = vec![Entry { word: "щавель" }, Entry { word: "юка" }, Entry { word: "єнот" }];
//! sort_by_key(&mut entries, |e| e.word);
//! assert_eq!(entries[0].word, "єнот");
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Comparison**: O(min(len(a), len(b))), no allocation.
//! - **Comparator sort**: O(N log N) comparisons, each re-normalizing both operands.
//! - **Keyed sort**: O(total length) to build keys once, then O(N log N) key comparisons.
//!   Memory overhead is one `u32` per letter plus one index per item.

pub mod algo;
pub mod core;
pub use algo::{
    Collator, compare, sort, sort_by_key, sort_cached, sort_desc, sort_desc_mut, sort_indices,
    sort_mut,
};
#[cfg(feature = "parallel")]
pub use algo::{par_sort_desc_mut, par_sort_mut};
pub use core::{CollationKey, KeyAccessor};

pub mod prelude {
    pub use crate::algo::{
        Collator, compare, sort, sort_by_key, sort_cached, sort_desc, sort_desc_mut,
        sort_indices, sort_mut,
    };
    #[cfg(feature = "parallel")]
    pub use crate::algo::{par_sort_desc_mut, par_sort_mut};
    pub use crate::core::{CollationKey, KeyAccessor};
}
