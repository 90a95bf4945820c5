//! The metadata source trait: the narrow capability interface retrievers
//! talk through.
//!
//! One method per metadata endpoint, each returning a tabular
//! [`MetadataRows`] result in the shared upper-case column vocabulary
//! (`TABLE_CAT`, `TABLE_SCHEM`, `TABLE_NAME`, `COLUMN_NAME`, ...).
//! Endpoints a database cannot serve have default implementations that
//! return no rows, so retrievers can probe capabilities without special
//! cases.

use async_trait::async_trait;

use super::error::SourceResult;
use super::rows::MetadataRows;

/// Capability interface over one live database connection.
///
/// Implementations run the actual driver queries; everything above this
/// trait is database-agnostic.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Database product facts: `PRODUCT_NAME`, `PRODUCT_VERSION`,
    /// `USER_NAME`, plus any source-specific extras.
    async fn database_info(&self) -> SourceResult<MetadataRows>;

    /// Catalog and schema name pairs: `TABLE_CAT`, `TABLE_SCHEM`.
    async fn schemas(&self) -> SourceResult<MetadataRows>;

    /// Tables and views: `TABLE_CAT`, `TABLE_SCHEM`, `TABLE_NAME`,
    /// `TABLE_TYPE`, `REMARKS`.
    ///
    /// `name_pattern` uses SQL LIKE wildcards; `types` restricts to the
    /// given table-type strings (empty means all).
    async fn tables(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        name_pattern: Option<&str>,
        types: &[String],
    ) -> SourceResult<MetadataRows>;

    /// Columns of one table: `COLUMN_NAME`, `ORDINAL_POSITION`,
    /// `TYPE_NAME`, `COLUMN_SIZE`, `DECIMAL_DIGITS`, `NULLABLE`,
    /// `COLUMN_DEF`, `IS_AUTOINCREMENT`, `IS_GENERATEDCOLUMN`, `REMARKS`.
    async fn columns(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
    ) -> SourceResult<MetadataRows>;

    /// Primary key columns: `COLUMN_NAME`, `KEY_SEQ`, `PK_NAME`.
    async fn primary_key(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
    ) -> SourceResult<MetadataRows>;

    /// Indexes: `INDEX_NAME`, `NON_UNIQUE`, `TYPE`, `ORDINAL_POSITION`,
    /// `COLUMN_NAME`, `ASC_OR_DESC`, `CARDINALITY`, `PAGES`.
    async fn indexes(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
        unique_only: bool,
    ) -> SourceResult<MetadataRows>;

    /// Foreign keys importing into this table (this table is the child):
    /// `FK_NAME`, `KEY_SEQ`, `PKTABLE_CAT`, `PKTABLE_SCHEM`,
    /// `PKTABLE_NAME`, `PKCOLUMN_NAME`, `FKTABLE_CAT`, `FKTABLE_SCHEM`,
    /// `FKTABLE_NAME`, `FKCOLUMN_NAME`, `UPDATE_RULE`, `DELETE_RULE`,
    /// `DEFERRABILITY`.
    async fn imported_keys(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
    ) -> SourceResult<MetadataRows>;

    /// Foreign keys exported by this table (this table is the parent);
    /// same vocabulary as [`imported_keys`](Self::imported_keys).
    async fn exported_keys(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
    ) -> SourceResult<MetadataRows> {
        let _ = (catalog, schema, table);
        Ok(MetadataRows::empty())
    }

    /// System data types: `TYPE_NAME`, `DATA_TYPE`, `PRECISION`,
    /// `LITERAL_PREFIX`, `LITERAL_SUFFIX`, `CREATE_PARAMS`, `NULLABLE`,
    /// `CASE_SENSITIVE`.
    async fn type_info(&self) -> SourceResult<MetadataRows> {
        Ok(MetadataRows::empty())
    }

    /// User-defined types in one schema: `TYPE_NAME`, `DATA_TYPE`,
    /// `BASE_TYPE_NAME`, `REMARKS`.
    async fn user_defined_types(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
    ) -> SourceResult<MetadataRows> {
        let _ = (catalog, schema);
        Ok(MetadataRows::empty())
    }

    /// Procedures and functions: `ROUTINE_NAME`, `SPECIFIC_NAME`,
    /// `ROUTINE_TYPE` ("PROCEDURE"/"FUNCTION"), `RETURN_KIND`, `REMARKS`.
    async fn routines(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        name_pattern: Option<&str>,
    ) -> SourceResult<MetadataRows> {
        let _ = (catalog, schema, name_pattern);
        Ok(MetadataRows::empty())
    }

    /// Parameters of one routine: `PARAMETER_NAME`, `ORDINAL_POSITION`,
    /// `PARAMETER_MODE`, `TYPE_NAME`, `LENGTH`, `SCALE`, `NULLABLE`,
    /// `REMARKS`.
    async fn routine_parameters(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        routine: &str,
    ) -> SourceResult<MetadataRows> {
        let _ = (catalog, schema, routine);
        Ok(MetadataRows::empty())
    }

    /// Grants on one table: `PRIVILEGE`, `GRANTOR`, `GRANTEE`,
    /// `IS_GRANTABLE`.
    async fn table_privileges(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
    ) -> SourceResult<MetadataRows> {
        let _ = (catalog, schema, table);
        Ok(MetadataRows::empty())
    }

    /// Grants on the columns of one table: adds `COLUMN_NAME` to the
    /// table-privilege vocabulary.
    async fn column_privileges(
        &self,
        catalog: Option<&str>,
        schema: Option<&str>,
        table: &str,
    ) -> SourceResult<MetadataRows> {
        let _ = (catalog, schema, table);
        Ok(MetadataRows::empty())
    }

    /// Run an information-schema view query (see
    /// [`InformationSchemaViews`](super::InformationSchemaViews)) and
    /// return its rows.
    async fn query(&self, sql: &str) -> SourceResult<MetadataRows>;

    /// Table-type strings this source can report.
    fn table_types(&self) -> Vec<String> {
        vec!["TABLE".to_string(), "VIEW".to_string()]
    }

    /// The identifier quote string of this database.
    fn quote_string(&self) -> &'static str {
        "\""
    }
}
