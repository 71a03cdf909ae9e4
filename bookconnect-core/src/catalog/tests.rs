//! Integration tests for the catalog module

#[cfg(test)]
mod integration_tests {
    use crate::catalog::{
        select_options, CatalogStore, Dataset, Filter, FilterForm, Selector, ALL_AUTHORS_LABEL,
    };
    use pretty_assertions::assert_eq;

    const TOLKIEN: &str = "1a07325e-d424-53af-8045-552fc112030e";
    const STEPHEN_KING: &str = "0aa92b4d-492e-59c8-936e-e0395ebece5b";
    const HORROR: &str = "53acee40-32c5-5f97-96d8-ca8b6375e0ea";
    const THE_HOBBIT: &str = "19e5206e-c23d-5f5e-8f60-926f7cd1aced";

    fn bundled_store(page_size: usize) -> CatalogStore {
        CatalogStore::new(Dataset::bundled().unwrap(), page_size).unwrap()
    }

    fn sample_filters() -> Vec<Filter> {
        vec![
            Filter::any(),
            Filter::any().with_title("the"),
            Filter::any().with_title("DUNE"),
            Filter::any().with_author(Selector::id(TOLKIEN)),
            Filter::any().with_genre(Selector::id(HORROR)),
            Filter::any()
                .with_author(Selector::id(STEPHEN_KING))
                .with_genre(Selector::id(HORROR)),
            Filter::any().with_title("zzz-no-such-title"),
        ]
    }

    /// Applying the same filter twice yields the same result set
    #[test]
    fn test_apply_filter_is_idempotent() {
        let mut store = bundled_store(5);

        for filter in sample_filters() {
            let first: Vec<String> = store
                .apply_filter(filter.clone())
                .results
                .iter()
                .map(|b| b.id.clone())
                .collect();
            store.reveal_next_page();

            let second: Vec<String> = store
                .apply_filter(filter.clone())
                .results
                .iter()
                .map(|b| b.id.clone())
                .collect();

            assert_eq!(first, second, "filter {filter:?}");
            assert_eq!(store.revealed_pages(), 1);
        }
    }

    /// Results satisfy the predicate and excluded books fail it
    #[test]
    fn test_result_set_is_exactly_the_matching_books() {
        let mut store = bundled_store(10);
        let all = store.dataset().books.clone();

        for filter in sample_filters() {
            let included: Vec<String> = store
                .apply_filter(filter.clone())
                .results
                .iter()
                .map(|b| b.id.clone())
                .collect();

            for book in &all {
                assert_eq!(
                    included.contains(&book.id),
                    filter.matches(book),
                    "book {} with filter {filter:?}",
                    book.title
                );
            }
        }
    }

    #[test]
    fn test_identity_filter_returns_dataset_in_order() {
        let mut store = bundled_store(10);
        let expected: Vec<String> = store.dataset().books.iter().map(|b| b.id.clone()).collect();

        let form = FilterForm {
            title: Some(String::new()),
            author: Some("any".into()),
            genre: Some("any".into()),
        };
        let actual: Vec<String> = store
            .apply_filter(form.into())
            .results
            .iter()
            .map(|b| b.id.clone())
            .collect();

        assert_eq!(actual, expected);
    }

    /// Revealing every page exposes each result exactly once
    #[test]
    fn test_reveal_sums_to_result_len() {
        for page_size in [1, 3, 7, 36, 100] {
            let mut store = bundled_store(page_size);
            store.apply_filter(Filter::any().with_title("the"));
            let total = store.result_len();

            let mut seen: Vec<String> =
                store.visible_slice().iter().map(|b| b.id.clone()).collect();
            while store.remaining_count() > 0 {
                let reveal = store.reveal_next_page();
                seen.extend(reveal.items.iter().map(|b| b.id.clone()));
            }

            assert_eq!(seen.len(), total, "page size {page_size}");
            let expected_pages = if total <= page_size {
                1
            } else {
                total.div_ceil(page_size)
            };
            assert_eq!(store.revealed_pages(), expected_pages);

            let expected: Vec<String> = store.results().iter().map(|b| b.id.clone()).collect();
            assert_eq!(seen, expected);
        }
    }

    #[test]
    fn test_detail_lookup_survives_narrow_filter() {
        let mut store = bundled_store(36);
        let outcome = store.apply_filter(Filter::any().with_author(Selector::id(STEPHEN_KING)));
        assert!(outcome.results.iter().all(|b| b.id != THE_HOBBIT));

        let hobbit = store.find_by_id(THE_HOBBIT).unwrap();
        assert_eq!(hobbit.title, "The Hobbit");
        assert_eq!(store.author_name(hobbit), Some("J.R.R. Tolkien"));
    }

    #[test]
    fn test_author_options_cover_every_author() {
        let store = bundled_store(36);
        let options = select_options(store.authors(), ALL_AUTHORS_LABEL);
        assert_eq!(options.len(), store.authors().len() + 1);
        assert_eq!(options[0].value, "any");
        assert_eq!(options[1].value, TOLKIEN);
    }
}
