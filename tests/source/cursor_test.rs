#[cfg(test)]
mod tests {
    use schemascope::source::{MetadataCursor, MetadataRows};
    use serde_json::{json, Value};

    fn sample_rows() -> MetadataRows {
        let mut rows = MetadataRows::new(["TABLE_NAME", "ORDINAL_POSITION", "REMARKS", "EXTRA"]);
        rows.push_row(vec![
            json!("orders"),
            json!(1),
            json!("the orders table"),
            json!("kept"),
        ]);
        rows.push_row(vec![json!("customers"), json!("2"), Value::Null, json!(7)]);
        rows
    }

    #[test]
    fn test_typed_access() {
        let mut cursor = MetadataCursor::new(sample_rows());

        assert!(cursor.next_row());
        assert_eq!(cursor.get_string("TABLE_NAME").as_deref(), Some("orders"));
        assert_eq!(cursor.get_int("ORDINAL_POSITION"), Some(1));

        assert!(cursor.next_row());
        // Column names are case-insensitive, numeric strings parse.
        assert_eq!(cursor.get_string("table_name").as_deref(), Some("customers"));
        assert_eq!(cursor.get_int("ORDINAL_POSITION"), Some(2));
        assert_eq!(cursor.get_string("REMARKS"), None);

        assert!(!cursor.next_row());
    }

    #[test]
    fn test_unread_columns_become_attributes() {
        let mut cursor = MetadataCursor::new(sample_rows());

        assert!(cursor.next_row());
        let _ = cursor.get_string("TABLE_NAME");
        let _ = cursor.get_int("ORDINAL_POSITION");

        let attributes = cursor.take_attributes();
        // A column read through a typed accessor never doubles as an
        // attribute; nulls are dropped.
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes.get("REMARKS"), Some(&json!("the orders table")));
        assert_eq!(attributes.get("EXTRA"), Some(&json!("kept")));
        assert!(!attributes.contains_key("TABLE_NAME"));
    }

    #[test]
    fn test_read_tracking_resets_per_row() {
        let mut cursor = MetadataCursor::new(sample_rows());

        assert!(cursor.next_row());
        let _ = cursor.get_string("TABLE_NAME");
        let _ = cursor.get_string("REMARKS");
        let _ = cursor.get_string("EXTRA");

        assert!(cursor.next_row());
        let _ = cursor.get_string("TABLE_NAME");
        let attributes = cursor.take_attributes();
        // Second row: only TABLE_NAME was consumed here.
        assert_eq!(attributes.get("ORDINAL_POSITION"), Some(&json!("2")));
        assert_eq!(attributes.get("EXTRA"), Some(&json!(7)));
    }

    #[test]
    fn test_lenient_booleans() {
        let mut rows = MetadataRows::new(["A", "B", "C", "D", "E"]);
        rows.push_row(vec![
            json!("YES"),
            json!("true"),
            json!(1),
            json!("NO"),
            Value::Null,
        ]);
        let mut cursor = MetadataCursor::new(rows);

        assert!(cursor.next_row());
        assert!(cursor.get_bool("A"));
        assert!(cursor.get_bool("B"));
        assert!(cursor.get_bool("C"));
        assert!(!cursor.get_bool("D"));
        assert!(!cursor.get_bool("E"));
        assert!(!cursor.get_bool("MISSING"));
    }

    #[test]
    fn test_get_name_trims_blanks() {
        let mut rows = MetadataRows::new(["NAME", "BLANK"]);
        rows.push_row(vec![json!("  orders  "), json!("   ")]);
        let mut cursor = MetadataCursor::new(rows);

        assert!(cursor.next_row());
        assert_eq!(cursor.get_name("NAME").as_deref(), Some("orders"));
        assert_eq!(cursor.get_name("BLANK"), None);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let mut rows = MetadataRows::new(["A", "B"]);
        rows.push_row(vec![json!("only")]);
        let mut cursor = MetadataCursor::new(rows);

        assert!(cursor.next_row());
        assert_eq!(cursor.get_string("A").as_deref(), Some("only"));
        assert_eq!(cursor.get_string("B"), None);
    }

    #[test]
    fn test_unparseable_int_is_none() {
        let mut rows = MetadataRows::new(["N"]);
        rows.push_row(vec![json!("not a number")]);
        let mut cursor = MetadataCursor::new(rows);

        assert!(cursor.next_row());
        assert_eq!(cursor.get_int("N"), None);
        assert_eq!(cursor.get_int_or("N", -1), -1);
    }
}
