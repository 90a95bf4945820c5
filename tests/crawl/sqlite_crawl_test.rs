#[cfg(test)]
mod tests {
    use schemascope::crawl::{crawl, CrawlOptions, InfoLevel};
    use schemascope::schema::{FkRule, TriggerEvent};
    use schemascope::source::{SourceConnection, SqliteSource};

    /// A small bookshop schema covering tables, a view, foreign keys,
    /// indexes, a trigger, and a convention-named column with no
    /// declared foreign key.
    const FIXTURE: &str = "
        CREATE TABLE authors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            country VARCHAR(50)
        );
        CREATE TABLE books (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            author_id INTEGER NOT NULL REFERENCES authors(id) ON DELETE CASCADE,
            price NUMERIC(10,2) DEFAULT 0
        );
        CREATE TABLE sales (
            id INTEGER PRIMARY KEY,
            book_id INTEGER REFERENCES books(id),
            author_id INTEGER,
            sold_on TEXT,
            qty INTEGER NOT NULL DEFAULT 1
        );
        CREATE UNIQUE INDEX idx_books_title ON books(title);
        CREATE INDEX idx_sales_book ON sales(book_id);
        CREATE VIEW best_sellers AS
            SELECT b.title, count(*) AS n
            FROM sales s JOIN books b ON s.book_id = b.id
            GROUP BY b.title;
        CREATE TRIGGER trg_sales_audit AFTER INSERT ON sales
        BEGIN
            UPDATE books SET price = price WHERE id = NEW.book_id;
        END;
    ";

    fn bookshop() -> SourceConnection {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(FIXTURE).unwrap();
        SqliteSource::from_connection(conn).into_connection()
    }

    #[tokio::test]
    async fn test_standard_crawl_builds_the_graph() {
        let conn = bookshop();
        let catalog = crawl(&conn, &CrawlOptions::default()).await.unwrap();

        assert!(catalog.schemas.lookup("main").is_some());
        assert_eq!(catalog.tables.len(), 4);

        let books = catalog.tables.lookup("main.books").unwrap();
        assert_eq!(books.columns.len(), 4);

        let title = books.lookup_column("title").unwrap();
        assert_eq!(title.type_name.as_deref(), Some("TEXT"));
        assert_eq!(title.nullable, Some(false));

        let price = books.lookup_column("price").unwrap();
        assert_eq!(price.type_name.as_deref(), Some("NUMERIC"));
        assert_eq!(price.size, Some(10));
        assert_eq!(price.decimal_digits, Some(2));
        assert_eq!(price.default_value.as_deref(), Some("0"));

        let id = books.lookup_column("id").unwrap();
        assert!(id.part_of_primary_key);

        let author_id = books.lookup_column("author_id").unwrap();
        assert!(author_id.part_of_foreign_key);
    }

    #[tokio::test]
    async fn test_primary_keys_and_indexes() {
        let conn = bookshop();
        let catalog = crawl(&conn, &CrawlOptions::default()).await.unwrap();

        let books = catalog.tables.lookup("main.books").unwrap();
        let pk = books.primary_key.as_ref().unwrap();
        assert_eq!(pk.name, "pk_books");
        assert_eq!(pk.column_names(), vec!["id"]);

        let index = books.indexes.lookup("idx_books_title").unwrap();
        assert!(index.unique);
        assert_eq!(index.column_names(), vec!["title"]);

        let sales = catalog.tables.lookup("main.sales").unwrap();
        let index = sales.indexes.lookup("idx_sales_book").unwrap();
        assert!(!index.unique);
    }

    #[tokio::test]
    async fn test_foreign_keys_merge_by_name() {
        let conn = bookshop();
        let catalog = crawl(&conn, &CrawlOptions::default()).await.unwrap();

        // One constraint each, even though both the imported and the
        // exported halves were retrieved.
        assert_eq!(catalog.foreign_keys.len(), 2);

        let fk = catalog.foreign_keys.lookup("fk_books_authors_1").unwrap();
        assert_eq!(fk.delete_rule, FkRule::Cascade);
        assert_eq!(fk.column_pairs.len(), 1);
        let pair = &fk.column_pairs[0];
        assert_eq!(pair.foreign.full_name(), "main.books.author_id");
        assert_eq!(pair.primary.full_name(), "main.authors.id");
        assert!(!pair.foreign.partial);
        assert!(!pair.primary.partial);

        let imported = catalog.imported_foreign_keys("main.sales");
        assert_eq!(imported.len(), 1);
        assert_eq!(imported[0].name, "fk_sales_books_1");

        let exported = catalog.exported_foreign_keys("main.books");
        assert_eq!(exported.len(), 1);
    }

    #[tokio::test]
    async fn test_natural_table_order() {
        let conn = bookshop();
        let catalog = crawl(&conn, &CrawlOptions::default()).await.unwrap();

        let names: Vec<&str> = catalog
            .tables_natural_order()
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        // Parents precede dependents; the unconnected view sorts with
        // the first level, alphabetically.
        assert_eq!(names, vec!["authors", "best_sellers", "books", "sales"]);
    }

    #[tokio::test]
    async fn test_detailed_crawl_retrieves_triggers_and_definitions() {
        let conn = bookshop();
        let options = CrawlOptions::with_info_level(InfoLevel::detailed());
        let catalog = crawl(&conn, &options).await.unwrap();

        let sales = catalog.tables.lookup("main.sales").unwrap();
        let trigger = sales.triggers.lookup("trg_sales_audit").unwrap();
        assert_eq!(trigger.event, TriggerEvent::Insert);
        assert!(trigger
            .action_statement
            .as_deref()
            .unwrap()
            .contains("UPDATE books"));

        let view = catalog.tables.lookup("main.best_sellers").unwrap();
        assert!(view.is_view());
        assert!(view
            .definition
            .as_deref()
            .unwrap()
            .to_uppercase()
            .contains("CREATE VIEW"));

        let books = catalog.tables.lookup("main.books").unwrap();
        assert!(books
            .definition
            .as_deref()
            .unwrap()
            .to_uppercase()
            .contains("CREATE TABLE"));
    }

    #[tokio::test]
    async fn test_database_info_and_data_types() {
        let conn = bookshop();
        let catalog = crawl(&conn, &CrawlOptions::default()).await.unwrap();

        let info = &catalog.database_info;
        assert_eq!(info.product_name.as_deref(), Some("SQLite"));
        assert!(info.product_version.is_some());
        // Source-specific extras land in attributes.
        assert!(info.attributes.contains_key("ENCODING"));

        assert!(catalog.data_types.lookup("system.INTEGER").is_some());
        // Declared types seen on columns are registered as they appear.
        assert!(catalog.data_types.lookup("system.VARCHAR").is_some());
    }

    #[tokio::test]
    async fn test_autoincrement_detection() {
        let conn = bookshop();
        let catalog = crawl(&conn, &CrawlOptions::default()).await.unwrap();

        let authors = catalog.tables.lookup("main.authors").unwrap();
        assert!(authors.lookup_column("id").unwrap().auto_incremented);

        let books = catalog.tables.lookup("main.books").unwrap();
        assert!(!books.lookup_column("id").unwrap().auto_incremented);
    }

    #[tokio::test]
    async fn test_maximum_crawl_infers_weak_associations() {
        let conn = bookshop();
        let options = CrawlOptions::with_info_level(InfoLevel::maximum());
        let catalog = crawl(&conn, &options).await.unwrap();

        // sales.author_id has no declared foreign key, but matches
        // authors.id by convention.
        assert_eq!(catalog.weak_associations.len(), 1);
        let assoc = &catalog.weak_associations[0];
        assert_eq!(assoc.foreign.full_name(), "main.sales.author_id");
        assert_eq!(assoc.primary.full_name(), "main.authors.id");
    }

    #[tokio::test]
    async fn test_minimum_crawl_retrieves_names_only() {
        let conn = bookshop();
        let options = CrawlOptions::with_info_level(InfoLevel::minimum());
        let catalog = crawl(&conn, &options).await.unwrap();

        assert_eq!(catalog.tables.len(), 4);
        let books = catalog.tables.lookup("main.books").unwrap();
        assert!(books.columns.is_empty());
        assert!(books.primary_key.is_none());
        assert!(catalog.foreign_keys.is_empty());
    }

    #[tokio::test]
    async fn test_unread_metadata_becomes_attributes() {
        let conn = bookshop();
        let catalog = crawl(&conn, &CrawlOptions::default()).await.unwrap();

        // The SQLite source reports a HIDDEN column the retriever does
        // not map explicitly.
        let books = catalog.tables.lookup("main.books").unwrap();
        let id = books.lookup_column("id").unwrap();
        assert!(id.attributes.contains_key("HIDDEN"));
    }

    #[tokio::test]
    async fn test_table_name_pattern() {
        let conn = bookshop();
        let options = CrawlOptions {
            table_name_pattern: Some("b%".to_string()),
            ..CrawlOptions::default()
        };
        let catalog = crawl(&conn, &options).await.unwrap();

        let names: Vec<&str> = catalog.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["best_sellers", "books"]);
    }
}
