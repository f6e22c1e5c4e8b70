use std::cmp::Ordering;
use ukrsort::core::ALPHABET;
use ukrsort::prelude::*;

fn words() -> Vec<&'static str> {
    vec![
        "яблуко", "апельсин", "банан", "виноград", "груша", "ґава", "дуб", "ель", "єдинорог",
        "жито", "зерно", "ирій", "іржа", "їжак", "йогурт", "капуста", "лимон", "мандарин",
        "насіння", "огірок", "папая", "редис", "слива", "томат", "уряд", "фініки", "хурма",
        "цибуля", "чорниця", "шпинат", "щавель", "м'ясо", "юкка", "ялина",
    ]
}

fn expected_order() -> Vec<&'static str> {
    vec![
        "апельсин", "банан", "виноград", "груша", "ґава", "дуб", "ель", "єдинорог", "жито",
        "зерно", "ирій", "іржа", "їжак", "йогурт", "капуста", "лимон", "мандарин", "м'ясо",
        "насіння", "огірок", "папая", "редис", "слива", "томат", "уряд", "фініки", "хурма",
        "цибуля", "чорниця", "шпинат", "щавель", "юкка", "яблуко", "ялина",
    ]
}

#[test]
fn test_sort_words() {
    assert_eq!(sort(&words()), expected_order());
}

#[test]
fn test_sort_desc_words() {
    let mut expected = expected_order();
    expected.reverse();
    assert_eq!(sort_desc(&words()), expected);
}

#[test]
fn test_end_to_end_scenario() {
    let input = vec!["яблуко", "апельсин", "ґава", "груша"];
    assert_eq!(sort(&input), vec!["апельсин", "груша", "ґава", "яблуко"]);
    // Input is untouched.
    assert_eq!(input, vec!["яблуко", "апельсин", "ґава", "груша"]);
}

#[test]
fn test_special_letters() {
    let input = ["ґ", "г", "є", "е", "і", "и", "ї", "й"];
    assert_eq!(sort(&input), ["г", "ґ", "е", "є", "и", "і", "ї", "й"]);
}

#[test]
fn test_alphabet_is_sorted_by_itself() {
    let letters: Vec<String> = ALPHABET.iter().map(|c| c.to_string()).collect();
    let mut shuffled = letters.clone();
    shuffled.reverse();
    assert_eq!(sort(&shuffled), letters);

    for pair in ALPHABET.windows(2) {
        let (a, b) = (pair[0].to_string(), pair[1].to_string());
        assert_eq!(compare(&a, &b), Ordering::Less, "{a} < {b}");
    }
}

#[test]
fn test_apostrophes_ignored() {
    let input = ["м'ясо", "мед", "молоко", "м'ята"];
    assert_eq!(sort(&input), ["мед", "молоко", "м'ясо", "м'ята"]);
}

#[test]
fn test_mixed_punctuation() {
    // кіт and кіт123 compare equal and keep their input order.
    let input = ["кіт-собака", "кіт", "кітер", "кіт123"];
    assert_eq!(sort(&input), ["кіт", "кіт123", "кітер", "кіт-собака"]);
}

#[test]
fn test_mixed_case() {
    let input = ["Яблуко", "апельсин", "Банан", "виноград"];
    assert_eq!(sort(&input), ["апельсин", "Банан", "виноград", "Яблуко"]);

    let input = ["Яблуко", "апельсин", "Ґрунт", "єдинорог", "виноград"];
    assert_eq!(
        sort(&input),
        ["апельсин", "виноград", "Ґрунт", "єдинорог", "Яблуко"]
    );
}

#[test]
fn test_empty_and_singleton() {
    let empty: Vec<String> = vec![];
    assert!(sort(&empty).is_empty());
    assert!(sort_desc(&empty).is_empty());
    assert_eq!(sort(&["яблуко"]), ["яблуко"]);
    assert_eq!(sort_desc(&["яблуко"]), ["яблуко"]);
}

#[test]
fn test_compare_basic() {
    assert_eq!(compare("апельсин", "банан"), Ordering::Less);
    assert_eq!(compare("банан", "апельсин"), Ordering::Greater);
    assert_eq!(compare("яблуко", "яблуко"), Ordering::Equal);
}

#[test]
fn test_compare_special_letters() {
    assert_eq!(compare("ґава", "груша"), Ordering::Greater);
    assert_eq!(compare("їжак", "йогурт"), Ordering::Less);
    assert_eq!(compare("єдинорог", "жито"), Ordering::Less);
    assert_eq!(compare("іржа", "їжак"), Ordering::Less);
}

#[test]
fn test_compare_prefix() {
    assert_eq!(compare("кіт", "кітер"), Ordering::Less);
    assert_eq!(compare("кітер", "кіт"), Ordering::Greater);
}

#[test]
fn test_compare_ignores_case_and_non_letters() {
    assert_eq!(compare("Яблуко", "яблуко"), Ordering::Equal);
    assert_eq!(compare("м'ясо", "мясо"), Ordering::Equal);
    assert_eq!(compare("кіт-собака", "кітсобака"), Ordering::Equal);
    assert_eq!(compare("test123", "test"), Ordering::Equal);
    assert_eq!(compare("яблуко", "яблуко1"), Ordering::Equal);
    assert_eq!(compare("", ""), Ordering::Equal);
    assert_eq!(compare("123", "-- !"), Ordering::Equal);
    assert_eq!(compare("", "а"), Ordering::Less);
}

#[test]
fn test_foreign_letters_after_ukrainian() {
    assert_eq!(compare("apple", "яблуко"), Ordering::Greater);
    assert_eq!(compare("я", "a"), Ordering::Less);
    // Russian letters are foreign too.
    assert_eq!(compare("ы", "я"), Ordering::Greater);
    // Foreign letters order among themselves by code point.
    assert_eq!(compare("z", "ä"), Ordering::Less);
    assert_eq!(compare("Zebra", "apple"), Ordering::Greater);
}

#[test]
fn test_combining_marks_ignored() {
    // Stress accent (U+0301) is not a letter.
    assert_eq!(compare("за\u{0301}мок", "замок"), Ordering::Equal);
}

#[test]
fn test_collator_matches_free_functions() {
    let collator = Collator::new();
    let input = words();
    assert_eq!(collator.sort(&input), sort(&input));
    assert_eq!(collator.sort_desc(&input), sort_desc(&input));
    assert_eq!(collator.compare("ґ", "г"), compare("ґ", "г"));
    assert_eq!(collator.rank_of('ї'), 12);
    assert_eq!(collator.normalize("Ї-жак").collect::<String>(), "їжак");
    assert_eq!(collator.key("ЇЖАК"), CollationKey::new("їжак"));
}

#[test]
fn test_in_place_variants() {
    let mut data: Vec<String> = words().into_iter().map(String::from).collect();
    sort_mut(&mut data);
    assert_eq!(data, expected_order());

    let mut data: Vec<String> = words().into_iter().map(String::from).collect();
    sort_cached(&mut data);
    assert_eq!(data, expected_order());

    let mut expected = expected_order();
    expected.reverse();
    let mut data = words();
    sort_desc_mut(&mut data);
    assert_eq!(data, expected);
}

#[test]
fn test_sort_indices() {
    let input = words();
    let indices = sort_indices(&input);
    let sorted: Vec<&str> = indices.iter().map(|&i| input[i]).collect();
    assert_eq!(sorted, expected_order());

    let empty: Vec<&str> = vec![];
    assert!(sort_indices(&empty).is_empty());
}

#[test]
fn test_vec_deque() {
    use std::collections::VecDeque;
    let input: VecDeque<String> = VecDeque::from(vec![
        "щавель".to_string(),
        "єнот".to_string(),
        "ґудзик".to_string(),
    ]);

    let indices = sort_indices(&input);

    let sorted: Vec<&String> = indices.iter().map(|&i| &input[i]).collect();
    assert_eq!(sorted, vec!["ґудзик", "єнот", "щавель"]);
}

#[test]
fn test_collation_key_order() {
    assert!(CollationKey::new("г") < CollationKey::new("ґ"));
    assert!(CollationKey::new("кіт") < CollationKey::new("кітер"));
    assert!(CollationKey::new("яблуко") < CollationKey::new("apple"));
    assert!(CollationKey::new("?!").is_empty());
    assert_eq!(CollationKey::new("Ґа").ranks(), &[4, 0]);
    assert_eq!(CollationKey::from("м'ясо").len(), 4);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    let mut data = words();
    par_sort_mut(&mut data);
    assert_eq!(data, expected_order());

    let mut expected = expected_order();
    expected.reverse();
    par_sort_desc_mut(&mut data);
    assert_eq!(data, expected);
}
