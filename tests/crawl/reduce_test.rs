#[cfg(test)]
mod tests {
    use schemascope::crawl::{crawl, CrawlOptions};
    use schemascope::filter::{GrepOptions, InclusionRule};
    use schemascope::source::{SourceConnection, SqliteSource};

    const FIXTURE: &str = "
        CREATE TABLE authors (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL
        );
        CREATE TABLE books (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            author_id INTEGER NOT NULL REFERENCES authors(id),
            price NUMERIC(10,2)
        );
        CREATE TABLE sales (
            id INTEGER PRIMARY KEY,
            book_id INTEGER REFERENCES books(id),
            qty INTEGER NOT NULL
        );
    ";

    fn bookshop() -> SourceConnection {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(FIXTURE).unwrap();
        SqliteSource::from_connection(conn).into_connection()
    }

    #[tokio::test]
    async fn test_table_rule_prunes_the_graph() {
        let conn = bookshop();
        let options = CrawlOptions {
            table_rule: InclusionRule::include(r"main\.books$").unwrap(),
            ..CrawlOptions::default()
        };
        let catalog = crawl(&conn, &options).await.unwrap();

        let names: Vec<&str> = catalog.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["books"]);
    }

    #[tokio::test]
    async fn test_child_table_depth_keeps_referencing_tables() {
        let conn = bookshop();
        let options = CrawlOptions {
            grep: GrepOptions {
                column_rule: Some(InclusionRule::include(r".*\.price$").unwrap()),
                ..GrepOptions::default()
            },
            child_table_depth: 1,
            ..CrawlOptions::default()
        };
        let catalog = crawl(&conn, &options).await.unwrap();

        // Grep matches books; one level of referencing tables rides
        // along.
        let names: Vec<&str> = catalog.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["books", "sales"]);

        // The key into the dropped parent is flagged and its far side
        // marked partial; the kept relationship is untouched.
        let fk = catalog.foreign_keys.lookup("fk_books_authors_1").unwrap();
        assert!(fk.column_pairs[0].primary.partial);
        assert!(fk.attributes.contains_key("filtered"));

        let fk = catalog.foreign_keys.lookup("fk_sales_books_1").unwrap();
        assert!(!fk.column_pairs[0].primary.partial);
        assert!(!fk.attributes.contains_key("filtered"));
    }

    #[tokio::test]
    async fn test_parent_table_depth_keeps_referenced_tables() {
        let conn = bookshop();
        let options = CrawlOptions {
            grep: GrepOptions {
                column_rule: Some(InclusionRule::include(r".*\.qty$").unwrap()),
                ..GrepOptions::default()
            },
            parent_table_depth: 2,
            ..CrawlOptions::default()
        };
        let catalog = crawl(&conn, &options).await.unwrap();

        // Two levels up from the grep match: sales -> books -> authors.
        let names: Vec<&str> = catalog.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["authors", "books", "sales"]);
    }

    #[tokio::test]
    async fn test_grep_columns() {
        let conn = bookshop();
        let options = CrawlOptions {
            grep: GrepOptions {
                column_rule: Some(InclusionRule::include(r".*\.price$").unwrap()),
                ..GrepOptions::default()
            },
            ..CrawlOptions::default()
        };
        let catalog = crawl(&conn, &options).await.unwrap();

        let names: Vec<&str> = catalog.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["books"]);
    }

    #[tokio::test]
    async fn test_grep_invert_match() {
        let conn = bookshop();
        let options = CrawlOptions {
            grep: GrepOptions {
                column_rule: Some(InclusionRule::include(r".*\.price$").unwrap()),
                invert_match: true,
                ..GrepOptions::default()
            },
            ..CrawlOptions::default()
        };
        let catalog = crawl(&conn, &options).await.unwrap();

        let names: Vec<&str> = catalog.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["authors", "sales"]);
    }

    #[tokio::test]
    async fn test_grep_only_matching_skips_related_tables() {
        let conn = bookshop();
        let options = CrawlOptions {
            grep: GrepOptions {
                column_rule: Some(InclusionRule::include(r".*\.price$").unwrap()),
                only_matching: true,
                ..GrepOptions::default()
            },
            child_table_depth: 1,
            ..CrawlOptions::default()
        };
        let catalog = crawl(&conn, &options).await.unwrap();

        // only_matching wins over the expansion depths.
        let names: Vec<&str> = catalog.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["books"]);
    }

    #[test]
    fn test_reduce_schemas_keeps_unnamed_default() {
        use schemascope::filter::reduce_schemas;
        use schemascope::schema::{Catalog, SchemaRef};

        let mut catalog = Catalog::new();
        catalog.schemas.add(SchemaRef::default());
        catalog
            .schemas
            .add(SchemaRef::new(Some("main".to_string()), None));
        catalog
            .schemas
            .add(SchemaRef::new(Some("temp".to_string()), None));

        reduce_schemas(&mut catalog, &InclusionRule::include("main").unwrap());

        // The named schema outside the rule goes; the unnamed default
        // schema always stays.
        assert!(catalog.schemas.lookup("main").is_some());
        assert!(catalog.schemas.lookup("temp").is_none());
        assert!(catalog.schemas.lookup("").is_some());
    }

    #[tokio::test]
    async fn test_exclude_pattern() {
        let conn = bookshop();
        let options = CrawlOptions {
            table_rule: InclusionRule::from_patterns(None, Some(r".*\.sales$")).unwrap(),
            ..CrawlOptions::default()
        };
        let catalog = crawl(&conn, &options).await.unwrap();

        let names: Vec<&str> = catalog.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["authors", "books"]);

        // The exported-keys pass still sees the excluded child; its key
        // survives as a flagged, partial reference.
        let fk = catalog.foreign_keys.lookup("fk_sales_books_1").unwrap();
        assert!(fk.column_pairs[0].foreign.partial);
        assert!(fk.attributes.contains_key("filtered"));
        let fk = catalog.foreign_keys.lookup("fk_books_authors_1").unwrap();
        assert!(!fk.column_pairs[0].primary.partial);
    }
}
