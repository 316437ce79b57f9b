//! Header shape checks.
//!
//! Both checks compare lower-cased names.

use crate::shape::RecordShape;
use crate::util::CaseInsensitiveSet;

/// True when every shape field appears among the header columns.
pub fn all_columns_present<R>(shape: &RecordShape<R>, headers: &[String]) -> bool {
    let columns: CaseInsensitiveSet = headers.iter().collect();
    shape.names().iter().all(|name| columns.contains(name))
}

/// True when the header lists exactly the shape fields, in shape order.
pub fn is_canonical_order<R>(shape: &RecordShape<R>, headers: &[String]) -> bool {
    let names = shape.names();
    headers.len() == names.len()
        && headers
            .iter()
            .zip(names)
            .all(|(header, name)| header.to_lowercase() == name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Row;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn shape() -> RecordShape<Row> {
        RecordShape::from_columns(["id", "name", "active"])
    }

    #[test]
    fn test_all_present_any_case_and_order() {
        assert!(all_columns_present(&shape(), &headers(&["ACTIVE", "Id", "name"])));
        assert!(all_columns_present(
            &shape(),
            &headers(&["id", "name", "active", "extra"])
        ));
        assert!(!all_columns_present(&shape(), &headers(&["id", "name"])));
        assert!(!all_columns_present(&shape(), &[]));
    }

    #[test]
    fn test_canonical_order() {
        assert!(is_canonical_order(&shape(), &headers(&["ID", "Name", "active"])));
        assert!(!is_canonical_order(&shape(), &headers(&["name", "id", "active"])));
        assert!(!is_canonical_order(
            &shape(),
            &headers(&["id", "name", "active", "extra"])
        ));
    }

    #[test]
    fn test_empty_shape() {
        let empty = RecordShape::<Row>::new();
        assert!(all_columns_present(&empty, &headers(&["anything"])));
        assert!(is_canonical_order(&empty, &[]));
    }
}
