use super::*;
use crate::Error;

#[test]
fn predicates_over_empty_slices() {
    let empty: [i32; 0] = [];
    assert!(all(&empty, |_| false));
    assert!(!any(&empty, |_| true));
    assert_eq!(count(&empty, |_| true), 0);
    assert_eq!(index(&empty, |_| true), None);
}

#[test]
fn count_and_index_use_the_predicate() {
    let values = [1, 2, 3, 4];
    assert_eq!(count(&values, |v| v % 2 == 0), 2);
    assert_eq!(index(&values, |v| *v > 2), Some(2));
    assert_eq!(index(&values, |v| *v > 10), None);
    assert!(contains(&values, &4));
    assert!(!contains(&values, &5));
}

#[test]
fn map_changes_element_type() {
    assert_eq!(map(&["asd", "qwe!"], |s| s.len()), [3, 4]);
}

#[test]
fn limit_never_exceeds_length() {
    let values = ["a", "b", "c"];
    assert_eq!(limit(&values, 2), ["a", "b"]);
    assert_eq!(limit(&values, 10), values);
    assert!(limit(&values, 0).is_empty());
}

#[test]
fn chunks_rejects_zero_size() {
    assert!(matches!(chunks(&[1, 2], 0), Err(Error::InvalidArgument { .. })));
    assert!(chunks::<i32>(&[], 3).unwrap().is_empty());
}

#[test]
fn cartesian_edge_cases() {
    assert_eq!(cartesian::<i32>(&[]), vec![Vec::<i32>::new()]);
    assert!(cartesian(&[vec![1, 2], vec![]]).is_empty());
    assert_eq!(
        cartesian(&[vec!['a'], vec!['b', 'c'], vec!['d']]),
        [vec!['a', 'b', 'd'], vec!['a', 'c', 'd']]
    );
}

#[test]
fn unique_keeps_first_occurrence_order() {
    assert_eq!(unique(&[3, 1, 3, 2, 1]), [3, 1, 2]);
}

#[test]
fn range_is_inclusive() {
    assert_eq!(range(-1, 1), [-1, 0, 1]);
    assert_eq!(range(3, 3), [3]);
    assert!(range(5, 1).is_empty());
}

#[test]
fn first_and_last() {
    assert_eq!(first(&[1, 2, 3]), Some(&1));
    assert_eq!(last(&[1, 2, 3]), Some(&3));
    assert_eq!(last::<u8>(&[]), None);
}

#[test]
fn pop_out_of_range() {
    let mut values = vec![1];
    assert_eq!(
        pop(&mut values, Some(1)),
        Err(Error::IndexOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(pop(&mut values, None), Ok(1));
    assert_eq!(
        pop(&mut values, None),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    );
}

#[test]
fn insert_at_front_middle_and_end() {
    let mut values = vec!["b", "d"];
    insert(&mut values, 0, "a").unwrap();
    insert(&mut values, 2, "c").unwrap();
    insert(&mut values, 4, "e").unwrap();
    assert_eq!(values, ["a", "b", "c", "d", "e"]);
    assert_eq!(
        insert(&mut values, 9, "z"),
        Err(Error::IndexOutOfRange { index: 9, len: 5 })
    );
}
