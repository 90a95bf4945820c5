#[cfg(test)]
mod tests {
    use schemascope::schema::{
        Catalog, Column, ColumnRef, ForeignKey, ForeignKeyColumnPair, Index, IndexColumn,
        PrimaryKey, SchemaRef, Table, TableKind, TableRelationship,
    };

    fn schema() -> SchemaRef {
        SchemaRef::new(Some("main".to_string()), None)
    }

    fn add_table(catalog: &mut Catalog, name: &str) {
        catalog
            .tables
            .add(Table::new(schema(), name, TableKind::Table));
    }

    fn add_fk(catalog: &mut Catalog, name: &str, child: (&str, &str), parent: (&str, &str)) {
        let mut fk = ForeignKey::new(name);
        fk.add_column_pair(ForeignKeyColumnPair {
            key_seq: 1,
            foreign: ColumnRef::new(schema(), child.0, child.1),
            primary: ColumnRef::new(schema(), parent.0, parent.1),
        });
        catalog.foreign_keys.add(fk);
    }

    #[test]
    fn test_lookup_table() {
        let mut catalog = Catalog::new();
        add_table(&mut catalog, "orders");

        assert!(catalog.lookup_table(&schema(), "orders").is_some());
        assert!(catalog.lookup_table(&schema(), "missing").is_none());
    }

    #[test]
    fn test_imported_and_exported_foreign_keys() {
        let mut catalog = Catalog::new();
        add_table(&mut catalog, "orders");
        add_table(&mut catalog, "customers");
        add_fk(
            &mut catalog,
            "fk_orders_customers",
            ("orders", "customer_id"),
            ("customers", "id"),
        );

        let imported = catalog.imported_foreign_keys("main.orders");
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].name, "fk_orders_customers");

        let exported = catalog.exported_foreign_keys("main.customers");
        assert_eq!(exported.len(), 1);

        assert!(catalog.imported_foreign_keys("main.customers").is_empty());
    }

    #[test]
    fn test_related_table_keys() {
        let mut catalog = Catalog::new();
        add_table(&mut catalog, "orders");
        add_table(&mut catalog, "customers");
        add_table(&mut catalog, "order_lines");
        add_fk(
            &mut catalog,
            "fk_orders_customers",
            ("orders", "customer_id"),
            ("customers", "id"),
        );
        add_fk(
            &mut catalog,
            "fk_lines_orders",
            ("order_lines", "order_id"),
            ("orders", "id"),
        );

        let parents = catalog.related_table_keys("main.orders", TableRelationship::Parent);
        assert_eq!(parents, vec!["main.customers".to_string()]);

        let children = catalog.related_table_keys("main.orders", TableRelationship::Child);
        assert_eq!(children, vec!["main.order_lines".to_string()]);
    }

    #[test]
    fn test_natural_order_falls_back_to_name() {
        let mut catalog = Catalog::new();
        add_table(&mut catalog, "zebra");
        add_table(&mut catalog, "alpha");

        // No sort indices assigned: alphabetical by key.
        let names: Vec<&str> = catalog
            .tables_natural_order()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["alpha", "zebra"]);

        // Sort indices win over names.
        catalog.tables.lookup_mut("main.zebra").unwrap().sort_index = Some(0);
        catalog.tables.lookup_mut("main.alpha").unwrap().sort_index = Some(1);
        let names: Vec<&str> = catalog
            .tables_natural_order()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["zebra", "alpha"]);
    }

    #[test]
    fn test_replace_primary_key_with_matching_index() {
        let mut table = Table::new(schema(), "orders", TableKind::Table);
        table.columns.add(Column::new("id"));

        let mut pk = PrimaryKey::new("pk_orders");
        pk.add_column(IndexColumn::new("id", 1));
        table.primary_key = Some(pk);

        let mut index = Index::new("pk_orders", true);
        index.add_column(IndexColumn::new("id", 1));
        index.cardinality = Some(42);
        table.indexes.add(index);

        table.replace_primary_key();

        // The index is folded into the primary key and dropped.
        assert!(table.indexes.lookup("pk_orders").is_none());
        let pk = table.primary_key.as_ref().unwrap();
        assert_eq!(pk.name, "pk_orders");
        assert_eq!(pk.column_names(), vec!["id"]);
        // The index statistics travel along.
        assert_eq!(
            pk.attributes.get("CARDINALITY"),
            Some(&serde_json::json!(42))
        );
    }

    #[test]
    fn test_replace_primary_key_ignores_different_columns() {
        let mut table = Table::new(schema(), "orders", TableKind::Table);

        let mut pk = PrimaryKey::new("pk_orders");
        pk.add_column(IndexColumn::new("id", 1));
        table.primary_key = Some(pk);

        let mut index = Index::new("pk_orders", true);
        index.add_column(IndexColumn::new("customer_id", 1));
        table.indexes.add(index);

        table.replace_primary_key();

        // Same name but different columns: nothing changes.
        assert!(table.indexes.lookup("pk_orders").is_some());
        assert_eq!(
            table.primary_key.as_ref().unwrap().column_names(),
            vec!["id"]
        );
    }

    #[test]
    fn test_table_kind_from_metadata() {
        assert_eq!(TableKind::from_metadata(Some("TABLE")), TableKind::Table);
        assert_eq!(TableKind::from_metadata(Some("view")), TableKind::View);
        assert_eq!(
            TableKind::from_metadata(Some("MATERIALIZED VIEW")),
            TableKind::View
        );
        assert_eq!(TableKind::from_metadata(None), TableKind::Table);
        assert_eq!(
            TableKind::from_metadata(Some("SEQUENCE")),
            TableKind::Other("SEQUENCE".to_string())
        );
    }
}
