use growvec::{growvec, GrowVec, GrowVecError};

#[test]
fn test_at_within_bounds() {
    let vec = growvec![10, 20, 30];
    assert_eq!(vec.at(0), Ok(&10));
    assert_eq!(vec.at(vec.len() - 1), Ok(&30));
}

#[test]
fn test_at_out_of_bounds() {
    let vec = growvec![10, 20, 30];
    for k in 0..4 {
        let index = vec.len() + k;
        assert_eq!(
            vec.at(index),
            Err(GrowVecError::IndexOutOfBounds { index, length: 3 })
        );
    }
}

#[test]
fn test_at_on_empty_vector() {
    let vec = GrowVec::<u8>::new();
    assert_eq!(
        vec.at(0),
        Err(GrowVecError::IndexOutOfBounds {
            index: 0,
            length: 0
        })
    );
}

#[test]
fn test_at_mut_modifies() {
    let mut vec = growvec![1, 2];
    *vec.at_mut(1).unwrap() = 7;
    assert_eq!(vec, [1, 7]);
    assert!(matches!(
        vec.at_mut(2),
        Err(GrowVecError::IndexOutOfBounds { index: 2, length: 2 })
    ));
}

#[test]
fn test_try_front_and_back() {
    let vec = growvec!['a', 'b'];
    assert_eq!(vec.try_front(), Ok(&'a'));
    assert_eq!(vec.try_back(), Ok(&'b'));

    let empty = GrowVec::<char>::new();
    assert_eq!(empty.try_front(), Err(GrowVecError::EmptyVector));
    assert_eq!(empty.try_back(), Err(GrowVecError::EmptyVector));
}

#[test]
#[should_panic(expected = "front() called on an empty GrowVec")]
fn test_front_on_empty_panics() {
    let vec = GrowVec::<u8>::new();
    let _ = vec.front();
}

#[test]
#[should_panic(expected = "back_mut() called on an empty GrowVec")]
fn test_back_mut_on_empty_panics() {
    let mut vec = GrowVec::<u8>::new();
    let _ = vec.back_mut();
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_subscript_past_end_panics() {
    let vec = growvec![1, 2, 3];
    let _value: i32 = vec[3];
}

#[test]
fn test_error_display() {
    let error = GrowVecError::IndexOutOfBounds {
        index: 5,
        length: 3,
    };
    assert_eq!(
        error.to_string(),
        "Index out of bounds: index 5 is beyond vector length 3"
    );
    assert_eq!(
        GrowVecError::EmptyVector.to_string(),
        "Operation on empty vector"
    );
}

#[test]
fn test_error_propagates_with_question_mark() {
    fn sum_first_and_third(vec: &GrowVec<i32>) -> Result<i32, GrowVecError> {
        Ok(vec.at(0)? + vec.at(2)?)
    }

    assert_eq!(sum_first_and_third(&growvec![1, 2, 3]), Ok(4));
    assert_eq!(
        sum_first_and_third(&growvec![1, 2]),
        Err(GrowVecError::IndexOutOfBounds {
            index: 2,
            length: 2
        })
    );
}
