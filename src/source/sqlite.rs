//! SQLite metadata source.
//!
//! The bundled reference implementation of [`MetadataSource`], built on
//! the SQLite pragma tables: `database_list`, `sqlite_master`,
//! `table_xinfo`, `index_list`, `index_info`, `foreign_key_list`. Pragma
//! output is mapped into the shared column vocabulary the retrievers
//! consume, so nothing above this file is SQLite-specific.

use async_trait::async_trait;
use rusqlite::types::ValueRef;
use rusqlite::Connection;
use serde_json::Value;
use tokio::sync::Mutex;

use super::connection::SourceConnection;
use super::error::{SourceError, SourceResult};
use super::provider::MetadataSource;
use super::rows::MetadataRows;
use super::views::{InformationSchemaKey, InformationSchemaViews};

/// Quote an identifier for interpolation into pragma statements, which
/// cannot take bound parameters.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Map one driver value into the loose metadata value space.
fn to_value(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(text) => Value::String(String::from_utf8_lossy(text).into_owned()),
        ValueRef::Blob(blob) => Value::String(format!("<blob {} bytes>", blob.len())),
    }
}

/// Run a query and map the whole result generically, keeping the
/// statement's own column names.
fn query_all<P: rusqlite::Params>(
    conn: &Connection,
    sql: &str,
    params: P,
) -> SourceResult<MetadataRows> {
    let mut stmt = conn.prepare(sql)?;
    let column_names: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();
    let mut result = MetadataRows::new(&column_names);

    let mut rows = stmt.query(params)?;
    while let Some(row) = rows.next()? {
        let mut values = Vec::with_capacity(column_names.len());
        for index in 0..column_names.len() {
            values.push(to_value(row.get_ref(index)?));
        }
        result.push_row(values);
    }
    Ok(result)
}

/// Parse "VARCHAR(30)" / "DECIMAL(10,2)" style declared types into the
/// bare type name, size, and decimal digits.
fn parse_declared_type(declared: &str) -> (String, Option<i64>, Option<i64>) {
    let declared = declared.trim();
    let Some(open) = declared.find('(') else {
        return (declared.to_string(), None, None);
    };
    let name = declared[..open].trim().to_string();
    let args = declared[open + 1..].trim_end_matches(')');
    let mut parts = args.split(',').map(|p| p.trim().parse::<i64>().ok());
    let size = parts.next().flatten();
    let digits = parts.next().flatten();
    (name, size, digits)
}

/// A [`MetadataSource`] over one SQLite database file (or an in-memory
/// database), including all attached databases.
pub struct SqliteSource {
    conn: Mutex<Connection>,
}

impl SqliteSource {
    pub fn open(path: &str) -> SourceResult<Self> {
        let conn = Connection::open(path).map_err(SourceError::Open)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> SourceResult<Self> {
        let conn = Connection::open_in_memory().map_err(SourceError::Open)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Wrap an already open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// The information-schema views SQLite can answer from
    /// `sqlite_master`.
    pub fn information_schema_views() -> InformationSchemaViews {
        InformationSchemaViews::new()
            .with_view(
                InformationSchemaKey::Triggers,
                "WITH trig AS ( \
                   SELECT name, tbl_name, sql, \
                          upper(substr(sql, 1, instr(upper(sql), ' ON '))) AS header \
                   FROM main.sqlite_master WHERE type = 'trigger' AND sql IS NOT NULL \
                 ) \
                 SELECT NULL AS TRIGGER_CAT, NULL AS TRIGGER_SCHEM, \
                        name AS TRIGGER_NAME, tbl_name AS TABLE_NAME, \
                        CASE WHEN header LIKE '%INSTEAD OF%' THEN 'INSTEAD OF' \
                             WHEN header LIKE '%BEFORE%' THEN 'BEFORE' \
                             WHEN header LIKE '%AFTER%' THEN 'AFTER' \
                        END AS CONDITION_TIMING, \
                        CASE WHEN header LIKE '%INSERT%' THEN 'INSERT' \
                             WHEN header LIKE '%DELETE%' THEN 'DELETE' \
                             WHEN header LIKE '%UPDATE%' THEN 'UPDATE' \
                        END AS EVENT_MANIPULATION, \
                        'ROW' AS ACTION_ORIENTATION, \
                        sql AS ACTION_STATEMENT \
                 FROM trig ORDER BY name",
            )
            .with_view(
                InformationSchemaKey::ViewDefinitions,
                "SELECT NULL AS TABLE_CAT, NULL AS TABLE_SCHEM, \
                        name AS TABLE_NAME, sql AS VIEW_DEFINITION \
                 FROM main.sqlite_master WHERE type = 'view' ORDER BY name",
            )
            .with_view(
                InformationSchemaKey::AdditionalTableAttributes,
                "SELECT NULL AS TABLE_CAT, NULL AS TABLE_SCHEM, \
                        name AS TABLE_NAME, sql AS TABLE_DEFINITION \
                 FROM main.sqlite_master WHERE type = 'table' ORDER BY name",
            )
    }

    /// Package this source as a [`SourceConnection`] with the SQLite
    /// information-schema views attached.
    pub fn into_connection(self) -> SourceConnection {
        SourceConnection::new(Box::new(self)).with_views(Self::information_schema_views())
    }

    /// The CREATE statement of one table, from `sqlite_master`.
    fn table_ddl(conn: &Connection, catalog: &str, table: &str) -> SourceResult<Option<String>> {
        let sql = format!(
            "SELECT sql FROM {}.sqlite_master WHERE type = 'table' AND name = ?1",
            quote_ident(catalog)
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([table])?;
        match rows.next()? {
            Some(row) => Ok(row.get::<_, Option<String>>(0)?),
            None => Ok(None),
        }
    }

    /// Primary key column names of one table, in key order. Used to fill
    /// in foreign keys that reference an implicit primary key.
    fn primary_key_columns(
        conn: &Connection,
        catalog: &str,
        table: &str,
    ) -> SourceResult<Vec<String>> {
        let sql = format!(
            "PRAGMA {}.table_info({})",
            quote_ident(catalog),
            quote_ident(table)
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut pk_columns: Vec<(i64, String)> = Vec::new();
        while let Some(row) = rows.next()? {
            let name: String = row.get("name")?;
            let pk: i64 = row.get("pk")?;
            if pk > 0 {
                pk_columns.push((pk, name));
            }
        }
        pk_columns.sort_by_key(|(seq, _)| *seq);
        Ok(pk_columns.into_iter().map(|(_, name)| name).collect())
    }

    /// All user table names in one attached database.
    fn table_names(conn: &Connection, catalog: &str) -> SourceResult<Vec<String>> {
        let sql = format!(
            "SELECT name FROM {}.sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite!_%' ESCAPE '!' ORDER BY name",
            quote_ident(catalog)
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        let mut names = Vec::new();
        while let Some(row) = rows.next()? {
            names.push(row.get::<_, String>(0)?);
        }
        Ok(names)
    }

    /// Foreign-key rows of one child table, in the shared vocabulary.
    fn foreign_key_rows(
        conn: &Connection,
        catalog: &str,
        child_table: &str,
        result: &mut MetadataRows,
    ) -> SourceResult<()> {
        let sql = format!(
            "PRAGMA {}.foreign_key_list({})",
            quote_ident(catalog),
            quote_ident(child_table)
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let id: i64 = row.get("id")?;
            let seq: i64 = row.get("seq")?;
            let parent_table: String = row.get("table")?;
            let from_column: String = row.get("from")?;
            let to_column: Option<String> = row.get("to")?;
            let on_update: Option<String> = row.get("on_update")?;
            let on_delete: Option<String> = row.get("on_delete")?;

            // An omitted referenced column means the parent's primary key.
            let to_column = match to_column {
                Some(column) => column,
                None => {
                    let pk = Self::primary_key_columns(conn, catalog, &parent_table)?;
                    pk.get(seq as usize).cloned().unwrap_or_default()
                }
            };

            let fk_name = format!("fk_{}_{}_{}", child_table, parent_table, id + 1);
            result.push_row(vec![
                Value::String(fk_name),
                Value::from(seq + 1),
                Value::String(catalog.to_string()),
                Value::Null,
                Value::String(parent_table),
                Value::String(to_column),
                Value::String(catalog.to_string()),
                Value::Null,
                Value::String(child_table.to_string()),
                Value::String(from_column),
                on_update.map(Value::String).unwrap_or(Value::Null),
                on_delete.map(Value::String).unwrap_or(Value::Null),
                Value::Null,
            ]);
        }
        Ok(())
    }

    fn foreign_key_result() -> MetadataRows {
        MetadataRows::new([
            "FK_NAME",
            "KEY_SEQ",
            "PKTABLE_CAT",
            "PKTABLE_SCHEM",
            "PKTABLE_NAME",
            "PKCOLUMN_NAME",
            "FKTABLE_CAT",
            "FKTABLE_SCHEM",
            "FKTABLE_NAME",
            "FKCOLUMN_NAME",
            "UPDATE_RULE",
            "DELETE_RULE",
            "DEFERRABILITY",
        ])
    }
}

#[async_trait]
impl MetadataSource for SqliteSource {
    async fn database_info(&self) -> SourceResult<MetadataRows> {
        let conn = self.conn.lock().await;
        let mut result = MetadataRows::new([
            "PRODUCT_NAME",
            "PRODUCT_VERSION",
            "USER_NAME",
            "ENCODING",
            "PAGE_SIZE",
            "JOURNAL_MODE",
        ]);
        let encoding: Option<String> = conn
            .query_row("PRAGMA encoding", [], |row| row.get(0))
            .ok();
        let page_size: Option<i64> = conn
            .query_row("PRAGMA page_size", [], |row| row.get(0))
            .ok();
        let journal_mode: Option<String> = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .ok();
        result.push_row(vec![
            Value::String("SQLite".to_string()),
            Value::String(rusqlite::version().to_string()),
            Value::Null,
            encoding.map(Value::String).unwrap_or(Value::Null),
            page_size.map(Value::from).unwrap_or(Value::Null),
            journal_mode.map(Value::String).unwrap_or(Value::Null),
        ]);
        Ok(result)
    }

    async fn schemas(&self) -> SourceResult<MetadataRows> {
        let conn = self.conn.lock().await;
        let mut result = MetadataRows::new(["TABLE_CAT", "TABLE_SCHEM"]);
        let mut stmt = conn.prepare("PRAGMA database_list")?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let name: String = row.get("name")?;
            result.push_row(vec![Value::String(name), Value::Null]);
        }
        Ok(result)
    }

    async fn tables(
        &self,
        catalog: Option<&str>,
        _schema: Option<&str>,
        name_pattern: Option<&str>,
        types: &[String],
    ) -> SourceResult<MetadataRows> {
        let conn = self.conn.lock().await;
        let catalog = catalog.unwrap_or("main");

        let mut wanted = Vec::new();
        for table_type in types {
            match table_type.to_ascii_uppercase().as_str() {
                "TABLE" => wanted.push("'table'"),
                "VIEW" => wanted.push("'view'"),
                _ => {}
            }
        }
        if wanted.is_empty() {
            wanted = vec!["'table'", "'view'"];
        }

        let mut sql = format!(
            "SELECT ?1 AS TABLE_CAT, NULL AS TABLE_SCHEM, name AS TABLE_NAME, \
                    CASE type WHEN 'view' THEN 'VIEW' ELSE 'TABLE' END AS TABLE_TYPE, \
                    NULL AS REMARKS \
             FROM {}.sqlite_master \
             WHERE type IN ({}) AND name NOT LIKE 'sqlite!_%' ESCAPE '!'",
            quote_ident(catalog),
            wanted.join(", ")
        );
        let mut params: Vec<String> = vec![catalog.to_string()];
        if let Some(pattern) = name_pattern {
            sql.push_str(" AND name LIKE ?2");
            params.push(pattern.to_string());
        }
        sql.push_str(" ORDER BY name");

        query_all(&conn, &sql, rusqlite::params_from_iter(params.iter()))
    }

    async fn columns(
        &self,
        catalog: Option<&str>,
        _schema: Option<&str>,
        table: &str,
    ) -> SourceResult<MetadataRows> {
        let conn = self.conn.lock().await;
        let catalog = catalog.unwrap_or("main");

        let ddl = Self::table_ddl(&conn, catalog, table)?;
        let has_autoincrement = ddl
            .as_deref()
            .is_some_and(|sql| sql.to_ascii_uppercase().contains("AUTOINCREMENT"));

        let pragma = format!(
            "PRAGMA {}.table_xinfo({})",
            quote_ident(catalog),
            quote_ident(table)
        );
        let mut result = MetadataRows::new([
            "TABLE_CAT",
            "TABLE_SCHEM",
            "TABLE_NAME",
            "COLUMN_NAME",
            "ORDINAL_POSITION",
            "TYPE_NAME",
            "COLUMN_SIZE",
            "DECIMAL_DIGITS",
            "NULLABLE",
            "COLUMN_DEF",
            "IS_AUTOINCREMENT",
            "IS_GENERATEDCOLUMN",
            "REMARKS",
            "HIDDEN",
        ]);

        let mut stmt = conn.prepare(&pragma)?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let cid: i64 = row.get("cid")?;
            let name: String = row.get("name")?;
            let declared: Option<String> = row.get("type")?;
            let notnull: i64 = row.get("notnull")?;
            let default_value: Option<String> = row.get("dflt_value")?;
            let pk: i64 = row.get("pk")?;
            let hidden: i64 = row.get("hidden").unwrap_or(0);

            // Hidden rows of table_xinfo are generated columns (2, 3) or
            // internal columns (1); internal ones are skipped.
            if hidden == 1 {
                continue;
            }
            let generated = hidden == 2 || hidden == 3;

            let (type_name, size, digits) = declared
                .as_deref()
                .map(parse_declared_type)
                .unwrap_or_else(|| (String::new(), None, None));
            let auto_increment = has_autoincrement
                && pk > 0
                && type_name.eq_ignore_ascii_case("integer");

            result.push_row(vec![
                Value::String(catalog.to_string()),
                Value::Null,
                Value::String(table.to_string()),
                Value::String(name),
                Value::from(cid + 1),
                if type_name.is_empty() {
                    Value::Null
                } else {
                    Value::String(type_name)
                },
                size.map(Value::from).unwrap_or(Value::Null),
                digits.map(Value::from).unwrap_or(Value::Null),
                Value::String(if notnull == 0 { "YES" } else { "NO" }.to_string()),
                default_value.map(Value::String).unwrap_or(Value::Null),
                Value::String(if auto_increment { "YES" } else { "NO" }.to_string()),
                Value::String(if generated { "YES" } else { "NO" }.to_string()),
                Value::Null,
                Value::from(hidden),
            ]);
        }
        Ok(result)
    }

    async fn primary_key(
        &self,
        catalog: Option<&str>,
        _schema: Option<&str>,
        table: &str,
    ) -> SourceResult<MetadataRows> {
        let conn = self.conn.lock().await;
        let catalog = catalog.unwrap_or("main");
        let pragma = format!(
            "PRAGMA {}.table_info({})",
            quote_ident(catalog),
            quote_ident(table)
        );
        let mut result = MetadataRows::new(["COLUMN_NAME", "KEY_SEQ", "PK_NAME"]);
        let mut stmt = conn.prepare(&pragma)?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let name: String = row.get("name")?;
            let pk: i64 = row.get("pk")?;
            if pk > 0 {
                result.push_row(vec![Value::String(name), Value::from(pk), Value::Null]);
            }
        }
        Ok(result)
    }

    async fn indexes(
        &self,
        catalog: Option<&str>,
        _schema: Option<&str>,
        table: &str,
        unique_only: bool,
    ) -> SourceResult<MetadataRows> {
        let conn = self.conn.lock().await;
        let catalog = catalog.unwrap_or("main");
        let list_pragma = format!(
            "PRAGMA {}.index_list({})",
            quote_ident(catalog),
            quote_ident(table)
        );
        let mut result = MetadataRows::new([
            "INDEX_NAME",
            "NON_UNIQUE",
            "TYPE",
            "ORDINAL_POSITION",
            "COLUMN_NAME",
            "ASC_OR_DESC",
            "CARDINALITY",
            "PAGES",
            "PARTIAL",
        ]);

        let mut indexes: Vec<(String, bool, String, bool)> = Vec::new();
        {
            let mut stmt = conn.prepare(&list_pragma)?;
            let mut rows = stmt.query([])?;
            while let Some(row) = rows.next()? {
                let name: String = row.get("name")?;
                let unique: i64 = row.get("unique")?;
                let origin: String = row.get("origin")?;
                let partial: i64 = row.get("partial").unwrap_or(0);
                indexes.push((name, unique != 0, origin, partial != 0));
            }
        }

        for (index_name, unique, origin, partial) in indexes {
            if unique_only && !unique {
                continue;
            }
            let info_pragma = format!(
                "PRAGMA {}.index_info({})",
                quote_ident(catalog),
                quote_ident(&index_name)
            );
            let mut stmt = conn.prepare(&info_pragma)?;
            let mut rows = stmt.query([])?;
            while let Some(row) = rows.next()? {
                let seqno: i64 = row.get("seqno")?;
                let column_name: Option<String> = row.get("name")?;
                result.push_row(vec![
                    Value::String(index_name.clone()),
                    Value::from(i64::from(!unique)),
                    Value::String(origin.clone()),
                    Value::from(seqno + 1),
                    column_name.map(Value::String).unwrap_or(Value::Null),
                    Value::Null,
                    Value::Null,
                    Value::Null,
                    Value::from(i64::from(partial)),
                ]);
            }
        }
        Ok(result)
    }

    async fn imported_keys(
        &self,
        catalog: Option<&str>,
        _schema: Option<&str>,
        table: &str,
    ) -> SourceResult<MetadataRows> {
        let conn = self.conn.lock().await;
        let catalog = catalog.unwrap_or("main");
        let mut result = Self::foreign_key_result();
        Self::foreign_key_rows(&conn, catalog, table, &mut result)?;
        Ok(result)
    }

    async fn exported_keys(
        &self,
        catalog: Option<&str>,
        _schema: Option<&str>,
        table: &str,
    ) -> SourceResult<MetadataRows> {
        let conn = self.conn.lock().await;
        let catalog = catalog.unwrap_or("main");

        // SQLite has no reverse lookup; scan every child table's foreign
        // keys and keep the ones pointing at this table.
        let mut all = Self::foreign_key_result();
        for child in Self::table_names(&conn, catalog)? {
            Self::foreign_key_rows(&conn, catalog, &child, &mut all)?;
        }

        let mut result = Self::foreign_key_result();
        let mut cursor = super::rows::MetadataCursor::new(all);
        while cursor.next_row() {
            let parent = cursor.get_string("PKTABLE_NAME").unwrap_or_default();
            if !parent.eq_ignore_ascii_case(table) {
                continue;
            }
            result.push_row(vec![
                cursor
                    .get_string("FK_NAME")
                    .map(Value::String)
                    .unwrap_or(Value::Null),
                cursor
                    .get_int("KEY_SEQ")
                    .map(Value::from)
                    .unwrap_or(Value::Null),
                Value::String(catalog.to_string()),
                Value::Null,
                Value::String(parent),
                cursor
                    .get_string("PKCOLUMN_NAME")
                    .map(Value::String)
                    .unwrap_or(Value::Null),
                Value::String(catalog.to_string()),
                Value::Null,
                cursor
                    .get_string("FKTABLE_NAME")
                    .map(Value::String)
                    .unwrap_or(Value::Null),
                cursor
                    .get_string("FKCOLUMN_NAME")
                    .map(Value::String)
                    .unwrap_or(Value::Null),
                cursor
                    .get_string("UPDATE_RULE")
                    .map(Value::String)
                    .unwrap_or(Value::Null),
                cursor
                    .get_string("DELETE_RULE")
                    .map(Value::String)
                    .unwrap_or(Value::Null),
                Value::Null,
            ]);
        }
        Ok(result)
    }

    async fn type_info(&self) -> SourceResult<MetadataRows> {
        let mut result = MetadataRows::new([
            "TYPE_NAME",
            "DATA_TYPE",
            "PRECISION",
            "LITERAL_PREFIX",
            "LITERAL_SUFFIX",
            "CREATE_PARAMS",
            "NULLABLE",
            "CASE_SENSITIVE",
        ]);
        // The five SQLite storage classes.
        let types: [(&str, Option<&str>, Option<&str>); 5] = [
            ("INTEGER", None, None),
            ("REAL", None, None),
            ("TEXT", Some("'"), Some("'")),
            ("BLOB", Some("x'"), Some("'")),
            ("NUMERIC", None, None),
        ];
        for (name, prefix, suffix) in types {
            result.push_row(vec![
                Value::String(name.to_string()),
                Value::Null,
                Value::Null,
                prefix.map(|p| Value::String(p.to_string())).unwrap_or(Value::Null),
                suffix.map(|s| Value::String(s.to_string())).unwrap_or(Value::Null),
                Value::Null,
                Value::String("YES".to_string()),
                Value::from(i64::from(name == "TEXT")),
            ]);
        }
        Ok(result)
    }

    async fn query(&self, sql: &str) -> SourceResult<MetadataRows> {
        let conn = self.conn.lock().await;
        query_all(&conn, sql, [])
    }
}
