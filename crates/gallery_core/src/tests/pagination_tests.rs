use super::*;

fn pages(labels: &[PageLabel]) -> Vec<usize> {
    labels
        .iter()
        .filter_map(|label| match label {
            PageLabel::Page(page) => Some(*page),
            PageLabel::Ellipsis => None,
        })
        .collect()
}

#[test]
fn page_count_rounds_up_and_is_zero_only_when_empty() {
    assert_eq!(page_count(0, 6), 0);
    assert_eq!(page_count(1, 6), 1);
    assert_eq!(page_count(6, 6), 1);
    assert_eq!(page_count(7, 6), 2);
    assert_eq!(page_count(11, 6), 2);
    assert_eq!(page_count(12, 6), 2);
    assert_eq!(page_count(13, 6), 3);
    assert_eq!(page_count(100, 6), 17);

    for visible in 1..=50 {
        assert!(page_count(visible, 6) > 0, "visible={visible}");
    }
}

#[test]
fn page_items_slices_exactly_and_never_panics_out_of_range() {
    let items: Vec<i64> = (0..11).collect();

    assert_eq!(page_items(&items, 1, 6), &items[0..6]);
    assert_eq!(page_items(&items, 2, 6), &items[6..11]);
    assert_eq!(page_items(&items, 3, 6), &[] as &[i64]);
    assert_eq!(page_items(&items, 100, 6), &[] as &[i64]);
    assert_eq!(page_items(&items, 0, 6), &items[0..6]);
    assert_eq!(page_items::<i64>(&[], 1, 6), &[] as &[i64]);
}

#[test]
fn pages_partition_the_visible_list_in_order() {
    let items: Vec<i64> = (0..23).collect();
    let page_size = 6;
    let count = page_count(items.len(), page_size);

    let mut reassembled = Vec::new();
    for page in 1..=count {
        let slice = page_items(&items, page, page_size);
        let expected_len = page_size.min(items.len() - (page - 1) * page_size);
        assert_eq!(slice.len(), expected_len, "page={page}");
        reassembled.extend_from_slice(slice);
    }
    assert_eq!(reassembled, items);
}

#[test]
fn small_page_counts_show_every_page() {
    assert_eq!(page_window(1, 0), vec![]);
    for count in 1..=5 {
        let expected: Vec<PageLabel> = (1..=count).map(PageLabel::Page).collect();
        assert_eq!(page_window(1, count), expected, "count={count}");
        assert_eq!(page_window(count, count), expected, "count={count}");
    }
}

#[test]
fn window_keeps_boundaries_and_current_page_neighbors() {
    use PageLabel::{Ellipsis, Page};

    assert_eq!(
        page_window(1, 10),
        vec![Page(1), Page(2), Ellipsis, Page(10)]
    );
    assert_eq!(
        page_window(2, 10),
        vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
    );
    assert_eq!(
        page_window(3, 10),
        vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
    );
    assert_eq!(
        page_window(5, 10),
        vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
    );
    assert_eq!(
        page_window(8, 10),
        vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
    );
    assert_eq!(
        page_window(10, 10),
        vec![Page(1), Ellipsis, Page(9), Page(10)]
    );
}

#[test]
fn window_labels_are_strictly_increasing_with_one_ellipsis_per_gap() {
    for count in 6..=40 {
        for current in 1..=count {
            let labels = page_window(current, count);
            let shown = pages(&labels);
            assert_eq!(shown.first(), Some(&1), "current={current} count={count}");
            assert_eq!(shown.last(), Some(&count), "current={current} count={count}");
            assert!(
                shown.windows(2).all(|pair| pair[0] < pair[1]),
                "current={current} count={count}"
            );
            assert!(
                !labels
                    .windows(2)
                    .any(|pair| pair[0] == PageLabel::Ellipsis && pair[1] == PageLabel::Ellipsis),
                "doubled ellipsis at current={current} count={count}"
            );
            // Every ellipsis stands in for a real gap: adjacent page labels
            // never have one between them.
            for (index, pair) in labels.windows(2).enumerate() {
                if let (PageLabel::Page(a), PageLabel::Ellipsis) = (pair[0], pair[1]) {
                    let after = labels[index + 2..]
                        .iter()
                        .find_map(|label| match label {
                            PageLabel::Page(page) => Some(*page),
                            PageLabel::Ellipsis => None,
                        })
                        .unwrap_or(a);
                    assert!(
                        after > a + 1,
                        "pointless ellipsis at current={current} count={count}"
                    );
                }
            }
        }
    }
}

#[test]
fn window_degrades_gracefully_when_current_page_exceeds_count() {
    use PageLabel::{Ellipsis, Page};
    assert_eq!(page_window(9, 6), vec![Page(1), Ellipsis, Page(6)]);
}
