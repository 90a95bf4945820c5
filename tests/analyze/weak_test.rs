#[cfg(test)]
mod tests {
    use schemascope::analyze::infer_weak_associations;
    use schemascope::schema::{
        Catalog, Column, ColumnRef, ForeignKey, ForeignKeyColumnPair, IndexColumn, PrimaryKey,
        SchemaRef, Table, TableKind,
    };

    fn schema() -> SchemaRef {
        SchemaRef::new(Some("main".to_string()), None)
    }

    fn add_table(catalog: &mut Catalog, name: &str, pk: Option<&str>, columns: &[&str]) {
        let mut table = Table::new(schema(), name, TableKind::Table);
        for column in columns {
            table.columns.add(Column::new(*column));
        }
        if let Some(pk_column) = pk {
            let mut primary_key = PrimaryKey::new(format!("pk_{name}"));
            primary_key.add_column(IndexColumn::new(pk_column, 1));
            table.primary_key = Some(primary_key);
        }
        catalog.tables.add(table);
    }

    #[test]
    fn test_infers_plural_table_from_id_suffix() {
        let mut catalog = Catalog::new();
        add_table(&mut catalog, "customers", Some("id"), &["id", "name"]);
        add_table(&mut catalog, "orders", Some("id"), &["id", "customer_id"]);

        infer_weak_associations(&mut catalog);

        assert_eq!(catalog.weak_associations.len(), 1);
        let assoc = &catalog.weak_associations[0];
        assert_eq!(assoc.foreign.full_name(), "main.orders.customer_id");
        assert_eq!(assoc.primary.full_name(), "main.customers.id");
    }

    #[test]
    fn test_declared_fk_suppresses_inference() {
        let mut catalog = Catalog::new();
        add_table(&mut catalog, "customers", Some("id"), &["id"]);
        add_table(&mut catalog, "orders", Some("id"), &["id", "customer_id"]);

        // The same pair as a declared foreign key.
        let mut fk = ForeignKey::new("fk_orders_customers");
        fk.add_column_pair(ForeignKeyColumnPair {
            key_seq: 1,
            foreign: ColumnRef::new(schema(), "orders", "customer_id"),
            primary: ColumnRef::new(schema(), "customers", "id"),
        });
        catalog.foreign_keys.add(fk);
        catalog
            .tables
            .lookup_mut("main.orders")
            .unwrap()
            .lookup_column_mut("customer_id")
            .unwrap()
            .part_of_foreign_key = true;

        infer_weak_associations(&mut catalog);
        assert!(catalog.weak_associations.is_empty());
    }

    #[test]
    fn test_composite_primary_key_is_not_a_target() {
        let mut catalog = Catalog::new();

        let mut pairs = Table::new(schema(), "pairs", TableKind::Table);
        let mut pk = PrimaryKey::new("pk_pairs");
        pk.add_column(IndexColumn::new("left_id", 1));
        pk.add_column(IndexColumn::new("right_id", 2));
        pairs.primary_key = Some(pk);
        catalog.tables.add(pairs);

        add_table(&mut catalog, "links", Some("id"), &["id", "pair_id"]);

        infer_weak_associations(&mut catalog);
        assert!(catalog.weak_associations.is_empty());
    }

    #[test]
    fn test_self_reference_is_not_inferred() {
        let mut catalog = Catalog::new();
        add_table(&mut catalog, "orders", Some("id"), &["id", "order_id"]);

        infer_weak_associations(&mut catalog);
        assert!(catalog.weak_associations.is_empty());
    }

    #[test]
    fn test_no_match_without_target_table() {
        let mut catalog = Catalog::new();
        add_table(&mut catalog, "orders", Some("id"), &["id", "warehouse_id"]);

        infer_weak_associations(&mut catalog);
        assert!(catalog.weak_associations.is_empty());
    }
}
