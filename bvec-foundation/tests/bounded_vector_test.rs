//! Behavioural tests for BoundedVector construction, access, assignment,
//! comparison and arithmetic

use bvec_foundation::{BoundedVector, ErrorKind, MAX_VECTOR_SIZE};
use bvec_error::Result;

fn iota(len: isize) -> Result<BoundedVector<i32>> {
    let mut v = BoundedVector::new(len)?;
    for i in 0..len {
        v.set(i, i as i32)?;
    }
    Ok(v)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn can_create_vector_with_positive_length() {
    assert!(BoundedVector::<i32>::new(5).is_ok());
}

#[test]
fn cant_create_too_large_vector() {
    let err = BoundedVector::<i32>::new(MAX_VECTOR_SIZE as isize + 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLength);
}

#[test]
fn throws_when_create_vector_with_negative_length() {
    let err = BoundedVector::<i32>::new(-5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLength);
}

#[test]
fn throws_when_create_vector_with_zero_length() {
    let err = BoundedVector::<i32>::new(0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLength);
}

#[test]
fn throws_when_create_vector_with_negative_startindex() {
    let err = BoundedVector::<i32>::with_start_index(5, -2).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidStartIndex);
}

#[test]
fn can_create_copied_vector() -> Result<()> {
    let v = BoundedVector::<i32>::new(10)?;
    let copy = v.clone();
    assert_eq!(copy.len(), 10);
    Ok(())
}

#[test]
fn copied_vector_is_equal_to_source_one() -> Result<()> {
    let v = iota(5)?;
    let w = v.clone();
    assert_eq!(v, w);
    assert_eq!(v.start_index(), w.start_index());
    Ok(())
}

#[test]
fn copied_vector_has_its_own_memory() -> Result<()> {
    let v = iota(5)?;
    let w = v.clone();
    assert!(!core::ptr::eq(v.get(0)?, w.get(0)?));
    Ok(())
}

#[test]
fn copied_vector_is_independent_of_source() -> Result<()> {
    let v = iota(5)?;
    let mut w = v.clone();
    w.set(0, 100)?;
    assert_eq!(*v.get(0)?, 0);
    assert_eq!(*w.get(0)?, 100);
    Ok(())
}

// ============================================================================
// Accessors and indexing
// ============================================================================

#[test]
fn can_get_size() -> Result<()> {
    let v = BoundedVector::<i32>::new(4)?;
    assert_eq!(v.len(), 4);
    Ok(())
}

#[test]
fn can_get_start_index() -> Result<()> {
    let v = BoundedVector::<i32>::with_start_index(4, 2)?;
    assert_eq!(v.start_index(), 2);
    Ok(())
}

#[test]
fn can_set_and_get_element() -> Result<()> {
    let mut v = BoundedVector::<i32>::new(4)?;
    v.set(0, 4)?;
    assert_eq!(*v.get(0)?, 4);
    Ok(())
}

#[test]
fn can_write_through_get_mut() -> Result<()> {
    let mut v = BoundedVector::<i32>::new(4)?;
    *v.get_mut(3)? = 9;
    assert_eq!(*v.get(3)?, 9);
    Ok(())
}

#[test]
fn throws_when_set_element_with_negative_index() -> Result<()> {
    let mut v = BoundedVector::<i32>::new(5)?;
    assert_eq!(v.set(-1, 1).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    Ok(())
}

#[test]
fn throws_when_set_element_with_too_large_index() -> Result<()> {
    let mut v = BoundedVector::<i32>::new(5)?;
    assert_eq!(v.set(7, 1).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(v.set(5, 1).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    Ok(())
}

#[test]
fn indexing_is_offset_by_start_index() -> Result<()> {
    let mut v = BoundedVector::<i32>::with_start_index(3, 2)?;
    assert_eq!(v.get(0).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(v.get(1).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    v.set(2, 20)?;
    v.set(4, 40)?;
    assert_eq!(v.get(5).unwrap_err().kind(), ErrorKind::IndexOutOfRange);
    assert_eq!(v.as_slice(), &[20, 0, 40]);
    Ok(())
}

// ============================================================================
// Assignment
// ============================================================================

#[test]
fn can_assign_vector_to_itself() -> Result<()> {
    let mut v = iota(5)?;
    let before = v.clone();

    v = v.clone();
    assert_eq!(v, before);

    let snapshot = v.clone();
    v.clone_from(&snapshot);
    assert_eq!(v, before);
    Ok(())
}

#[test]
fn can_assign_vectors_of_equal_size() -> Result<()> {
    let mut v = iota(5)?;
    let w = BoundedVector::<i32>::new(5)?;
    v.assign_from(&w);
    assert_eq!(v, w);
    Ok(())
}

#[test]
fn assign_operator_change_vector_size() -> Result<()> {
    let mut v = BoundedVector::<i32>::new(3)?;
    let w = BoundedVector::<i32>::new(5)?;
    v.assign_from(&w);
    assert_eq!(v.len(), w.len());
    Ok(())
}

#[test]
fn can_assign_vectors_of_different_size() -> Result<()> {
    let mut v = BoundedVector::<i32>::new(5)?;
    for i in 0..5 {
        v.set(i, i as i32 + 1)?;
    }
    let mut w = BoundedVector::<i32>::new(3)?;
    w.assign_from(&v);
    assert_eq!(w, v);
    assert_eq!(w.as_slice(), &[1, 2, 3, 4, 5]);
    Ok(())
}

#[test]
fn assignment_copies_start_index() -> Result<()> {
    let source = BoundedVector::<i32>::with_start_index(2, 6)?;
    let mut target = BoundedVector::<i32>::new(2)?;
    target.assign_from(&source);
    assert_eq!(target.start_index(), 6);
    Ok(())
}

// ============================================================================
// Comparison
// ============================================================================

#[test]
fn compare_equal_vectors_return_true() -> Result<()> {
    let v = iota(5)?;
    let w = v.clone();
    assert!(v == w);
    Ok(())
}

#[test]
fn compare_vector_with_itself_return_true() -> Result<()> {
    let v = iota(5)?;
    #[allow(clippy::eq_op)]
    let same = v == v;
    assert!(same);
    Ok(())
}

#[test]
fn vectors_with_different_size_are_not_equal() -> Result<()> {
    let v = BoundedVector::<i32>::new(3)?;
    let w = BoundedVector::<i32>::new(5)?;
    assert!(v != w);
    Ok(())
}

#[test]
fn vectors_with_different_elements_are_not_equal() -> Result<()> {
    let v = iota(5)?;
    let mut w = v.clone();
    w.set(4, -1)?;
    assert_ne!(v, w);
    Ok(())
}

// ============================================================================
// Scalar arithmetic
// ============================================================================

#[test]
fn can_add_scalar_to_vector() -> Result<()> {
    let v = iota(5)?;
    let mut w = BoundedVector::<i32>::new(5)?;
    for i in 0..5 {
        w.set(i, *v.get(i)? + 3)?;
    }
    assert_eq!(w, &v + 3);
    assert_eq!(w, v.add_scalar(3));
    Ok(())
}

#[test]
fn can_subtract_scalar_from_vector() -> Result<()> {
    let v = iota(5)?;
    let mut w = BoundedVector::<i32>::new(5)?;
    for i in 0..5 {
        w.set(i, *v.get(i)? - 3)?;
    }
    assert_eq!(w, &v - 3);
    assert_eq!(w, v.sub_scalar(3));
    Ok(())
}

#[test]
fn can_multiply_scalar_by_vector() -> Result<()> {
    let v = iota(5)?;
    let mut w = BoundedVector::<i32>::new(5)?;
    for i in 0..5 {
        w.set(i, *v.get(i)? * 3)?;
    }
    assert_eq!(w, &v * 3);
    assert_eq!(w, v.mul_scalar(3));
    Ok(())
}

// ============================================================================
// Vector arithmetic
// ============================================================================

#[test]
fn can_add_vectors_with_equal_size() -> Result<()> {
    let v = iota(5)?;
    let w = iota(5)?;
    let sum = v.add_vector(&w)?;
    for i in 0..5 {
        assert_eq!(*sum.get(i)?, *v.get(i)? + *w.get(i)?);
    }
    Ok(())
}

#[test]
fn cant_add_vectors_with_not_equal_size() -> Result<()> {
    let v = BoundedVector::<i32>::new(3)?;
    let w = BoundedVector::<i32>::new(5)?;
    assert_eq!(v.add_vector(&w).unwrap_err().kind(), ErrorKind::SizeMismatch);
    Ok(())
}

#[test]
fn can_subtract_vectors_with_equal_size() -> Result<()> {
    let v = iota(5)?;
    let w = iota(5)?;
    let difference = v.sub_vector(&w)?;
    assert_eq!(difference, BoundedVector::<i32>::new(5)?);
    Ok(())
}

#[test]
fn cant_subtract_vectors_with_not_equal_size() -> Result<()> {
    let v = BoundedVector::<i32>::new(3)?;
    let w = BoundedVector::<i32>::new(5)?;
    assert_eq!(v.sub_vector(&w).unwrap_err().kind(), ErrorKind::SizeMismatch);
    Ok(())
}

#[test]
fn can_multiply_vectors_with_equal_size() -> Result<()> {
    let v = iota(5)?;
    let w = iota(5)?;
    assert_eq!(v.dot(&w)?, 30);
    Ok(())
}

#[test]
fn cant_multiply_vectors_with_not_equal_size() -> Result<()> {
    let v = BoundedVector::<i32>::new(5)?;
    let w = BoundedVector::<i32>::new(10)?;
    assert_eq!(v.dot(&w).unwrap_err().kind(), ErrorKind::SizeMismatch);
    Ok(())
}

// ============================================================================
// Text input and output
// ============================================================================

#[test]
fn display_then_read_restores_elements() -> Result<()> {
    let v = BoundedVector::from_slice(&[3, -1, 4, 1, -5], 0)?;
    let text = v.to_string();
    assert_eq!(text, "3 -1 4 1 -5");

    let mut w = BoundedVector::<i32>::new(5)?;
    w.read_from_str(&text)?;
    assert_eq!(v, w);
    Ok(())
}

#[test]
fn read_reports_short_input() -> Result<()> {
    let mut v = BoundedVector::<i32>::new(3)?;
    assert_eq!(v.read_from_str("1 2").unwrap_err().kind(), ErrorKind::Parse);
    Ok(())
}
