#[cfg(test)]
mod tests {
    use schemascope::filter::{GrepOptions, InclusionRule};
    use schemascope::schema::{
        Column, Routine, RoutineKind, RoutineParameter, SchemaRef, Table, TableKind,
    };

    fn schema() -> SchemaRef {
        SchemaRef::new(Some("main".to_string()), None)
    }

    fn table_with_columns(name: &str, columns: &[&str]) -> Table {
        let mut table = Table::new(schema(), name, TableKind::Table);
        for column in columns {
            table.columns.add(Column::new(*column));
        }
        table
    }

    #[test]
    fn test_inactive_grep_matches_everything() {
        let grep = GrepOptions::default();
        assert!(!grep.is_active());
        assert!(grep.table_matches(&table_with_columns("orders", &["id"])));
    }

    #[test]
    fn test_column_grep() {
        let grep = GrepOptions {
            column_rule: Some(InclusionRule::include(r".*\.price$").unwrap()),
            ..GrepOptions::default()
        };

        assert!(grep.table_matches(&table_with_columns("books", &["id", "price"])));
        assert!(!grep.table_matches(&table_with_columns("authors", &["id", "name"])));
    }

    #[test]
    fn test_definition_grep() {
        let grep = GrepOptions {
            definition_rule: Some(InclusionRule::include("billing").unwrap()),
            ..GrepOptions::default()
        };

        let mut table = table_with_columns("orders", &["id"]);
        assert!(!grep.table_matches(&table));

        table.remarks = Some("part of the billing pipeline".to_string());
        assert!(grep.table_matches(&table));
    }

    #[test]
    fn test_invert_match() {
        let grep = GrepOptions {
            column_rule: Some(InclusionRule::include(r".*\.price$").unwrap()),
            invert_match: true,
            ..GrepOptions::default()
        };

        assert!(!grep.table_matches(&table_with_columns("books", &["price"])));
        assert!(grep.table_matches(&table_with_columns("authors", &["name"])));
    }

    #[test]
    fn test_routine_parameter_grep() {
        let grep = GrepOptions {
            routine_parameter_rule: Some(InclusionRule::include(r".*\.customer_id$").unwrap()),
            ..GrepOptions::default()
        };

        let mut routine = Routine::new(schema(), "find_customer", RoutineKind::Procedure);
        routine
            .parameters
            .add(RoutineParameter::new("customer_id"));
        assert!(grep.routine_matches(&routine));

        let other = Routine::new(schema(), "cleanup", RoutineKind::Procedure);
        assert!(!grep.routine_matches(&other));
    }
}
