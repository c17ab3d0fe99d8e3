use growvec::{growvec, Cursor, GrowVec};

#[test]
fn test_cursor_increment_and_decrement() {
    let vec = growvec![1, 2, 3];
    let mut cursor = vec.begin();
    assert_eq!(*cursor, 1);

    cursor.inc().inc();
    assert_eq!(*cursor, 3);

    cursor.dec();
    assert_eq!(*cursor, 2);
}

#[test]
fn test_cursor_post_increment_returns_previous() {
    let vec = growvec![1, 2, 3];
    let mut cursor = vec.begin();

    let previous = cursor.post_inc();
    assert_eq!(*previous, 1);
    assert_eq!(*cursor, 2);

    let previous = cursor.post_dec();
    assert_eq!(*previous, 2);
    assert_eq!(*cursor, 1);
}

#[test]
fn test_cursor_offset_arithmetic() {
    let vec = growvec![10, 20, 30, 40, 50];
    let begin = vec.begin();

    assert_eq!(*(begin + 3), 40);
    assert_eq!(*(vec.end() - 1), 50);

    let mut cursor = begin;
    cursor += 4;
    assert_eq!(*cursor, 50);
    cursor -= 2;
    assert_eq!(*cursor, 30);
    assert_eq!(*(cursor + -1), 20);
}

#[test]
fn test_cursor_relative_subscript() {
    let vec = growvec![10, 20, 30, 40];
    let cursor = vec.begin() + 2;
    assert_eq!(cursor[0], 30);
    assert_eq!(cursor[1], 40);
    assert_eq!(cursor[-2], 10);
    assert_eq!(cursor.at_offset(2), None);
    assert_eq!(cursor.at_offset(-1), Some(&20));
}

#[test]
fn test_cursor_difference() {
    let vec = growvec![1, 2, 3, 4, 5, 6];
    let begin = vec.begin();
    let end = vec.end();
    assert_eq!(end - begin, 6);
    assert_eq!(begin - end, -6);
    assert_eq!((begin + 4) - (begin + 1), 3);
}

#[test]
fn test_cursor_equality_and_ordering() {
    let vec = growvec![1, 2, 3];
    let begin = vec.begin();
    let end = vec.end();

    assert_eq!(begin + 3, end);
    assert_ne!(begin, end);
    assert!(begin < end);
    assert!(end > begin + 2);
    assert!(begin <= begin);
    assert!(end >= end - 1);
}

#[test]
fn test_cursors_over_different_vectors_are_unordered() {
    let left = growvec![1, 2];
    let right = growvec![1, 2];
    assert_ne!(left.begin(), right.begin());
    assert_eq!(left.begin().partial_cmp(&right.begin()), None);
}

#[test]
fn test_cursor_get_outside_live_region() {
    let vec = growvec![1];
    assert_eq!(vec.begin().get(), Some(&1));
    assert_eq!(vec.end().get(), None);
    assert_eq!((vec.begin() - 1).get(), None);
}

#[test]
fn test_empty_vector_begin_equals_end() {
    let vec = GrowVec::<String>::new();
    assert_eq!(vec.begin(), vec.end());
    assert_eq!(vec.end() - vec.begin(), 0);
    assert_eq!(vec.begin().until(vec.end()).count(), 0);
}

#[test]
#[should_panic(expected = "cursor at slot 3 is outside the live region of length 3")]
fn test_deref_end_cursor_panics() {
    let vec = growvec![1, 2, 3];
    let _value: i32 = *vec.end();
}

#[test]
#[should_panic(expected = "cursor at slot -1 is outside the live region of length 2")]
fn test_subscript_before_front_panics() {
    let vec = growvec![1, 2];
    let _value: i32 = vec.begin()[-1];
}

#[test]
#[should_panic(expected = "cursor span ends before it starts")]
fn test_until_backwards_panics() {
    let vec = growvec![1, 2, 3];
    let _ = vec.end().until(vec.begin());
}

#[test]
#[should_panic(expected = "cursor span endpoints belong to different buffers")]
fn test_until_across_vectors_panics() {
    let left = growvec![1, 2, 3];
    let right = growvec![1, 2, 3];
    let _ = left.begin().until(right.end());
}

#[test]
#[should_panic(expected = "outside the live region")]
fn test_until_past_end_panics() {
    let vec = growvec![1, 2, 3];
    let _ = vec.begin().until(vec.end() + 1);
}

#[test]
fn test_mut_cursor_writes_through() {
    let mut vec = growvec![1, 2, 3];
    let mut cursor = vec.begin_mut();
    *cursor = 100;
    cursor += 1;
    cursor[1] = 300;
    if let Some(value) = cursor.get_mut() {
        *value = 200;
    }
    assert_eq!(vec, [100, 200, 300]);
}

#[test]
fn test_mut_cursor_into_mut_keeps_borrow() {
    let mut vec = growvec![String::from("a"), String::from("b")];
    let element = (vec.begin_mut() + 1).into_mut();
    if let Some(element) = element {
        element.push('!');
    }
    assert_eq!(vec, ["a", "b!"]);

    assert!(vec.end_mut().into_mut().is_none());
}

#[test]
fn test_mut_cursor_converts_to_const() {
    let mut vec = growvec![1, 2, 3];
    let mut cursor = vec.begin_mut();
    cursor.inc();
    assert_eq!(*cursor.as_const(), 2);
    assert_eq!(cursor.as_const() - cursor.as_const(), 0);

    let read_only: Cursor<'_, i32> = Cursor::from(cursor);
    assert_eq!(read_only.slot(), 1);
    assert_eq!(read_only[1], 3);
}

#[test]
fn test_mut_cursor_end_and_slot() {
    let mut vec = growvec![1, 2];
    let end = vec.end_mut();
    assert_eq!(end.slot(), 2);
    assert_eq!(end.index(), Some(2));
    assert!(end.get().is_none());

    let rend = vec.rend_mut();
    assert_eq!(rend.index(), None);
}

#[test]
fn test_cursor_debug() {
    let vec = growvec![1, 2];
    let debug = format!("{:?}", vec.begin() + 1);
    assert!(debug.contains("slot: 1"));
    assert!(debug.contains("len: 2"));
    assert!(debug.contains("Forward"));
}

#[test]
fn test_cursors_over_two_empty_vectors_are_indistinguishable() {
    let left = GrowVec::<u8>::new();
    let right = GrowVec::<u8>::new();
    assert_eq!(left.begin(), right.begin());
    assert_eq!(
        left.begin().partial_cmp(&right.end()),
        Some(std::cmp::Ordering::Equal)
    );
    assert!(GrowVec::from_cursors(left.begin(), right.end()).is_empty());
}

#[test]
fn test_mut_cursor_measures_through_const_view() {
    let mut vec = growvec![1, 2, 3, 4];
    let mut cursor = vec.begin_mut();
    cursor += 3;

    let view = cursor.as_const();
    let mut walker = view - 3;
    assert_eq!(view - walker, 3);
    assert!(walker < view);
    assert_eq!(*walker.post_inc(), 1);
    assert_eq!(*walker, 2);

    *cursor = 40;
    assert_eq!(vec, [1, 2, 3, 40]);
}
