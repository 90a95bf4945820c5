#[cfg(test)]
mod tests {
    use schemascope::analyze::{assign_natural_sort_order, TableGraph};
    use schemascope::schema::{
        Catalog, ColumnRef, ForeignKey, ForeignKeyColumnPair, SchemaRef, Table, TableKind,
    };

    fn schema() -> SchemaRef {
        SchemaRef::new(Some("main".to_string()), None)
    }

    fn add_table(catalog: &mut Catalog, name: &str) {
        catalog
            .tables
            .add(Table::new(schema(), name, TableKind::Table));
    }

    fn add_fk(catalog: &mut Catalog, name: &str, child: &str, parent: &str) {
        let mut fk = ForeignKey::new(name);
        fk.add_column_pair(ForeignKeyColumnPair {
            key_seq: 1,
            foreign: ColumnRef::new(schema(), child, format!("{parent}_id")),
            primary: ColumnRef::new(schema(), parent, "id"),
        });
        catalog.foreign_keys.add(fk);
    }

    #[test]
    fn test_natural_order_parents_first() {
        let mut catalog = Catalog::new();
        for name in ["order_lines", "orders", "customers"] {
            add_table(&mut catalog, name);
        }
        add_fk(&mut catalog, "fk1", "orders", "customers");
        add_fk(&mut catalog, "fk2", "order_lines", "orders");

        let graph = TableGraph::from_catalog(&catalog);
        assert!(!graph.is_cyclic());
        let order = graph.natural_order().unwrap();
        assert_eq!(
            order,
            vec![
                "main.customers".to_string(),
                "main.orders".to_string(),
                "main.order_lines".to_string(),
            ]
        );
    }

    #[test]
    fn test_natural_order_alphabetical_within_level() {
        let mut catalog = Catalog::new();
        for name in ["zebra", "alpha", "child"] {
            add_table(&mut catalog, name);
        }
        // Both roots export into child; roots sort alphabetically.
        add_fk(&mut catalog, "fk1", "child", "zebra");
        add_fk(&mut catalog, "fk2", "child", "alpha");

        let order = TableGraph::from_catalog(&catalog).natural_order().unwrap();
        assert_eq!(
            order,
            vec![
                "main.alpha".to_string(),
                "main.zebra".to_string(),
                "main.child".to_string(),
            ]
        );
    }

    #[test]
    fn test_cycle_detection() {
        let mut catalog = Catalog::new();
        add_table(&mut catalog, "a");
        add_table(&mut catalog, "b");
        add_fk(&mut catalog, "fk1", "a", "b");
        add_fk(&mut catalog, "fk2", "b", "a");

        let graph = TableGraph::from_catalog(&catalog);
        assert!(graph.is_cyclic());
        assert!(graph.natural_order().is_none());
    }

    #[test]
    fn test_self_reference_is_ignored() {
        let mut catalog = Catalog::new();
        add_table(&mut catalog, "employees");
        add_fk(&mut catalog, "fk_manager", "employees", "employees");

        let graph = TableGraph::from_catalog(&catalog);
        assert!(!graph.is_cyclic());
        assert_eq!(
            graph.natural_order().unwrap(),
            vec!["main.employees".to_string()]
        );
    }

    #[test]
    fn test_assign_sort_indices() {
        let mut catalog = Catalog::new();
        for name in ["orders", "customers"] {
            add_table(&mut catalog, name);
        }
        add_fk(&mut catalog, "fk1", "orders", "customers");

        assign_natural_sort_order(&mut catalog);

        let customers = catalog.tables.lookup("main.customers").unwrap();
        let orders = catalog.tables.lookup("main.orders").unwrap();
        assert_eq!(customers.sort_index, Some(0));
        assert_eq!(orders.sort_index, Some(1));

        let names: Vec<&str> = catalog
            .tables_natural_order()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["customers", "orders"]);
    }

    #[test]
    fn test_cyclic_graph_leaves_indices_unset() {
        let mut catalog = Catalog::new();
        add_table(&mut catalog, "a");
        add_table(&mut catalog, "b");
        add_fk(&mut catalog, "fk1", "a", "b");
        add_fk(&mut catalog, "fk2", "b", "a");

        assign_natural_sort_order(&mut catalog);

        assert!(catalog
            .tables
            .iter()
            .all(|table| table.sort_index.is_none()));
    }
}
