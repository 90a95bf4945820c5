#[cfg(test)]
mod tests {
    use schemascope::schema::{
        join_key, NamedObject, NamedObjectList, SchemaRef, Table, TableKind,
    };

    fn schema() -> SchemaRef {
        SchemaRef::new(Some("main".to_string()), None)
    }

    #[test]
    fn test_add_and_lookup() {
        let mut tables: NamedObjectList<Table> = NamedObjectList::new();
        tables.add(Table::new(schema(), "orders", TableKind::Table));

        assert_eq!(tables.len(), 1);
        assert!(tables.contains("main.orders"));
        let table = tables.lookup("main.orders").unwrap();
        assert_eq!(table.name(), "orders");
        assert!(tables.lookup("main.customers").is_none());
    }

    #[test]
    fn test_lookup_or_create_merges() {
        let mut tables: NamedObjectList<Table> = NamedObjectList::new();

        let table = tables.lookup_or_create_with("main.orders", || {
            Table::new(schema(), "orders", TableKind::Table)
        });
        table.remarks = Some("first pass".to_string());

        // A second pass with the same key lands on the same object.
        let table = tables.lookup_or_create_with("main.orders", || {
            Table::new(schema(), "orders", TableKind::Table)
        });
        assert_eq!(table.remarks.as_deref(), Some("first pass"));
        assert_eq!(tables.len(), 1);
    }

    #[test]
    fn test_iteration_is_ordered() {
        let mut tables: NamedObjectList<Table> = NamedObjectList::new();
        for name in ["zebra", "alpha", "monkey"] {
            tables.add(Table::new(schema(), name, TableKind::Table));
        }

        let names: Vec<&str> = tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "monkey", "zebra"]);
    }

    #[test]
    fn test_retain_and_remove() {
        let mut tables: NamedObjectList<Table> = NamedObjectList::new();
        for name in ["orders", "customers", "audit_log"] {
            tables.add(Table::new(schema(), name, TableKind::Table));
        }

        tables.retain(|t| !t.name.starts_with("audit"));
        assert_eq!(tables.len(), 2);

        let removed = tables.remove("main.orders");
        assert!(removed.is_some());
        assert_eq!(tables.len(), 1);
    }

    #[test]
    fn test_join_key_skips_empty_parent() {
        assert_eq!(join_key("", "orders"), "orders");
        assert_eq!(join_key("main", "orders"), "main.orders");
        assert_eq!(join_key("main.orders", "id"), "main.orders.id");
    }

    #[test]
    fn test_schema_ref_names() {
        let both = SchemaRef::new(Some("cat".to_string()), Some("dbo".to_string()));
        assert_eq!(both.full_name(), "cat.dbo");
        assert_eq!(both.name(), "dbo");

        let catalog_only = SchemaRef::new(Some("main".to_string()), None);
        assert_eq!(catalog_only.full_name(), "main");
        assert_eq!(catalog_only.name(), "main");

        let blank = SchemaRef::new(Some("  ".to_string()), None);
        assert_eq!(blank.full_name(), "");
    }
}
