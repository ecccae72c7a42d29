use sparse_splice::Slot;

#[test]
fn inspection() {
    assert!(Slot::Value(1).is_value());
    assert!(!Slot::Value(1).is_hole());
    assert!(Slot::<i32>::Hole.is_hole());

    assert_eq!(Slot::Value(1).value(), Some(&1));
    assert_eq!(Slot::<i32>::Hole.value(), None);
}

#[test]
fn conversions() {
    assert_eq!(Slot::from(1), Slot::Value(1));
    assert_eq!(Slot::from(Some(1)), Slot::Value(1));
    assert_eq!(Slot::<i32>::from(None), Slot::Hole);

    assert_eq!(Slot::Value(1).into_value(), Some(1));
    assert_eq!(Slot::<i32>::Hole.into_value(), None);
}

#[test]
fn map_and_as_ref() {
    assert_eq!(Slot::Value(2).map(|x| x * 10), Slot::Value(20));
    assert_eq!(Slot::<i32>::Hole.map(|x| x * 10), Slot::Hole);

    let slot = Slot::Value(String::from("a"));
    assert_eq!(slot.as_ref().map(|s| s.len()), Slot::Value(1));
    assert!(slot.is_value());
}

#[test]
fn defaults_and_fallbacks() {
    assert_eq!(Slot::<i32>::default(), Slot::Hole);

    assert_eq!(Slot::Value(1).value_or(9), 1);
    assert_eq!(Slot::Hole.value_or(9), 9);

    assert_eq!(Slot::Value(1).unwrap_value(), 1);
}

#[test]
#[should_panic(expected = "Tried to unwrap the value out of a hole")]
fn unwrap_value_panics_on_a_hole() {
    Slot::<i32>::Hole.unwrap_value();
}

#[test]
fn holes_sort_before_values() {
    assert!(Slot::<i32>::Hole < Slot::Value(i32::MIN));
    assert!(Slot::Value(1) < Slot::Value(2));
}
