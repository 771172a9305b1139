//! Custom assertions for tests
//!
//! Expressive helpers with better failure messages than a bare `unwrap`.

use std::fmt::Debug;
use std::sync::Arc;

/// Assert that a Result is Ok and return the value
pub fn assert_ok<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("Expected Ok, got Err: {:?}", e),
    }
}

/// Assert that a Result is Err and return the error
pub fn assert_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
        Err(e) => e,
    }
}

/// Assert that an Option is Some and return the value
pub fn assert_some<T>(option: Option<T>) -> T {
    match option {
        Some(value) => value,
        None => panic!("Expected Some, got None"),
    }
}

/// Assert that an Option is None
pub fn assert_none<T: Debug>(option: Option<T>) {
    if let Some(value) = option {
        panic!("Expected None, got Some({:?})", value);
    }
}

/// Assert that two handles point at the same entity, not just equal ones
pub fn assert_same_handle<T: Debug>(a: &Arc<T>, b: &Arc<T>) {
    if !Arc::ptr_eq(a, b) {
        panic!("Expected the same handle, got {:?} and {:?}", a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_ok() {
        let result: Result<i32, &str> = Ok(42);
        assert_eq!(assert_ok(result), 42);
    }

    #[test]
    #[should_panic(expected = "Expected Ok, got Err")]
    fn test_assert_ok_panics_on_err() {
        let result: Result<i32, &str> = Err("error");
        let _ = assert_ok(result);
    }

    #[test]
    fn test_assert_err() {
        let result: Result<i32, &str> = Err("error");
        assert_eq!(assert_err(result), "error");
    }

    #[test]
    fn test_assert_some_and_none() {
        assert_eq!(assert_some(Some(42)), 42);
        assert_none::<i32>(None);
    }

    #[test]
    #[should_panic(expected = "Expected the same handle")]
    fn test_assert_same_handle_rejects_equal_copies() {
        let a = Arc::new(1);
        let b = Arc::new(1);
        assert_same_handle(&a, &b);
    }
}
