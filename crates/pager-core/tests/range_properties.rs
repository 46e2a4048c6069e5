use pager_core::{compute_range, total_slots, PageNavigator, RangeToken};

const MAX_TOTAL: usize = 60;
const MAX_SIBLINGS: usize = 5;

fn all_inputs() -> impl Iterator<Item = (usize, usize, usize)> {
    (0..=MAX_SIBLINGS).flat_map(|siblings| {
        (1..=MAX_TOTAL)
            .flat_map(move |total| (1..=total).map(move |current| (total, current, siblings)))
    })
}

fn pages(tokens: &[RangeToken]) -> Vec<usize> {
    tokens.iter().filter_map(RangeToken::page).collect()
}

#[test]
fn test_small_totals_list_every_page() {
    for siblings in 0..=MAX_SIBLINGS {
        for total in 1..=total_slots(siblings) {
            for current in 1..=total {
                let tokens = compute_range(total, current, siblings);
                assert_eq!(pages(&tokens), (1..=total).collect::<Vec<_>>());
                assert!(tokens.iter().all(|t| !t.is_ellipsis()));
            }
        }
    }
}

#[test]
fn test_first_and_last_are_boundary_pages() {
    for (total, current, siblings) in all_inputs() {
        let tokens = compute_range(total, current, siblings);
        assert_eq!(tokens.first(), Some(&RangeToken::Page(1)));
        assert_eq!(tokens.last(), Some(&RangeToken::Page(total)));
    }
}

#[test]
fn test_ellipses_are_few_and_separated() {
    for (total, current, siblings) in all_inputs() {
        let tokens = compute_range(total, current, siblings);
        let ellipses = tokens.iter().filter(|t| t.is_ellipsis()).count();
        assert!(ellipses <= 2, "{total}/{current}/{siblings}: {tokens:?}");
        assert!(tokens
            .windows(2)
            .all(|pair| !(pair[0].is_ellipsis() && pair[1].is_ellipsis())));
    }
}

#[test]
fn test_pages_strictly_increase() {
    for (total, current, siblings) in all_inputs() {
        let numbers = pages(&compute_range(total, current, siblings));
        assert!(numbers.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[test]
fn test_ellipsis_always_hides_a_page() {
    for (total, current, siblings) in all_inputs() {
        let tokens = compute_range(total, current, siblings);
        for (idx, token) in tokens.iter().enumerate() {
            if token.is_ellipsis() {
                let before = tokens[idx - 1].page().unwrap();
                let after = tokens[idx + 1].page().unwrap();
                assert!(after - before >= 2, "{total}/{current}/{siblings}: {tokens:?}");
            }
        }
    }
}

#[test]
fn test_current_page_is_always_visible() {
    for (total, current, siblings) in all_inputs() {
        let tokens = compute_range(total, current, siblings);
        assert!(tokens.contains(&RangeToken::Page(current)));
    }
}

#[test]
fn test_never_empty_for_valid_input() {
    for (total, current, siblings) in all_inputs() {
        assert!(!compute_range(total, current, siblings).is_empty());
    }
}

#[test]
fn test_repeated_calls_agree() {
    for (total, current, siblings) in all_inputs() {
        assert_eq!(
            compute_range(total, current, siblings),
            compute_range(total, current, siblings)
        );
    }
}

#[test]
fn test_navigating_every_page_matches_calculator() {
    let mut nav = PageNavigator::new(25).with_sibling_count(2);
    for page in 1..=25 {
        nav.go_to(page);
        assert_eq!(nav.tokens(), compute_range(25, page, 2));
    }
}
