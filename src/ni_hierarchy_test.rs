use super::*;

fn fixture() -> NiHierarchy<u32, &'static str> {
    // seed from spec: {(1,1,8), (2,3,4), (3,6,7), (4,2,5), (5,9,10), (6,11,12)}
    let mut values: IndexedSeq<u32, &'static str> = IndexedSeq::new();
    for k in 1u32..=6 {
        values.insert(k, "v");
    }
    let seed = vec![
        NiEdge::new(1u32, 1, 8),
        NiEdge::new(2u32, 3, 4),
        NiEdge::new(3u32, 6, 7),
        NiEdge::new(4u32, 2, 5),
        NiEdge::new(5u32, 9, 10),
        NiEdge::new(6u32, 11, 12),
    ];
    NiHierarchy::seed(values, seed)
}

#[test]
fn test_is_ancestor_over_ni_edges() {
    let h = fixture();
    assert!(h.is_ancestor(&1, &4).unwrap());
    assert!(h.is_ancestor(&4, &2).unwrap());
    assert!(h.is_ancestor(&1, &2).unwrap());
    assert!(!h.is_ancestor(&2, &4).unwrap());
    assert!(!h.is_ancestor(&1, &5).unwrap());
}

#[test]
fn test_is_ancestor_unknown_key_fails() {
    let h = fixture();
    assert_eq!(h.is_ancestor(&1, &99), Err(Error::KeyNotFound("99".to_string())));
}

#[test]
fn test_children_and_num_childs() {
    let h = fixture();
    let mut kids = h.children(&1).unwrap();
    kids.sort_unstable();
    assert_eq!(kids, vec![4]);
    assert_eq!(h.num_childs(&1).unwrap(), 1);

    let mut kids4 = h.children(&4).unwrap();
    kids4.sort_unstable();
    assert_eq!(kids4, vec![2, 3]);
    assert_eq!(h.num_childs(&4).unwrap(), 2);

    assert_eq!(h.children(&2).unwrap(), Vec::<u32>::new());
}

#[test]
fn test_exists_tracks_value_map_only() {
    let h = fixture();
    assert!(h.exists(&1));
    assert!(!h.exists(&99));
}

#[test]
fn test_edits_are_no_ops() {
    let mut h = fixture();
    h.insert(&1, 7, "new").unwrap();
    assert!(!h.exists(&7));
    h.remove(&2).unwrap();
    assert!(h.exists(&2));
    assert_eq!(h.commit(), 0);
}
