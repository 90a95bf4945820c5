//! Identifier quoting rules and reserved words.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// SQL:2003 reserved words, plus the handful every mainstream database
/// adds on top. Matching is case-insensitive.
static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "ABSOLUTE", "ACTION", "ADD", "ALL", "ALLOCATE", "ALTER", "AND", "ANY", "ARE", "AS", "ASC",
        "ASSERTION", "AT", "AUTHORIZATION", "AVG", "BEGIN", "BETWEEN", "BIT", "BOTH", "BY",
        "CASCADE", "CASCADED", "CASE", "CAST", "CATALOG", "CHAR", "CHARACTER", "CHECK", "CLOSE",
        "COALESCE", "COLLATE", "COLLATION", "COLUMN", "COMMIT", "CONNECT", "CONNECTION",
        "CONSTRAINT", "CONSTRAINTS", "CONTINUE", "CONVERT", "CORRESPONDING", "COUNT", "CREATE",
        "CROSS", "CURRENT", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER",
        "CURSOR", "DATE", "DAY", "DEALLOCATE", "DECIMAL", "DECLARE", "DEFAULT", "DEFERRABLE",
        "DEFERRED", "DELETE", "DESC", "DESCRIBE", "DESCRIPTOR", "DIAGNOSTICS", "DISCONNECT",
        "DISTINCT", "DOMAIN", "DOUBLE", "DROP", "ELSE", "END", "ESCAPE", "EXCEPT", "EXCEPTION",
        "EXEC", "EXECUTE", "EXISTS", "EXTERNAL", "EXTRACT", "FALSE", "FETCH", "FIRST", "FLOAT",
        "FOR", "FOREIGN", "FOUND", "FROM", "FULL", "GET", "GLOBAL", "GO", "GOTO", "GRANT",
        "GROUP", "HAVING", "HOUR", "IDENTITY", "IMMEDIATE", "IN", "INDICATOR", "INDEX",
        "INITIALLY", "INNER", "INPUT", "INSENSITIVE", "INSERT", "INT", "INTEGER", "INTERSECT",
        "INTERVAL", "INTO", "IS", "ISOLATION", "JOIN", "KEY", "LANGUAGE", "LAST", "LEADING",
        "LEFT", "LEVEL", "LIKE", "LIMIT", "LOCAL", "LOWER", "MATCH", "MAX", "MIN", "MINUTE",
        "MODULE", "MONTH", "NAMES", "NATIONAL", "NATURAL", "NCHAR", "NEXT", "NO", "NOT", "NULL",
        "NULLIF", "NUMERIC", "OCTET_LENGTH", "OF", "ON", "ONLY", "OPEN", "OPTION", "OR", "ORDER",
        "OUTER", "OUTPUT", "OVERLAPS", "PAD", "PARTIAL", "POSITION", "PRECISION", "PREPARE",
        "PRESERVE", "PRIMARY", "PRIOR", "PRIVILEGES", "PROCEDURE", "PUBLIC", "READ", "REAL",
        "REFERENCES", "RELATIVE", "RESTRICT", "REVOKE", "RIGHT", "ROLLBACK", "ROWS", "SCHEMA",
        "SCROLL", "SECOND", "SECTION", "SELECT", "SESSION", "SESSION_USER", "SET", "SIZE",
        "SMALLINT", "SOME", "SPACE", "SQL", "SQLCODE", "SQLERROR", "SQLSTATE", "SUBSTRING",
        "SUM", "SYSTEM_USER", "TABLE", "TEMPORARY", "THEN", "TIME", "TIMESTAMP",
        "TIMEZONE_HOUR", "TIMEZONE_MINUTE", "TO", "TRAILING", "TRANSACTION", "TRANSLATE",
        "TRANSLATION", "TRIGGER", "TRIM", "TRUE", "UNION", "UNIQUE", "UNKNOWN", "UPDATE",
        "UPPER", "USAGE", "USER", "USING", "VALUE", "VALUES", "VARCHAR", "VARYING", "VIEW",
        "WHEN", "WHENEVER", "WHERE", "WITH", "WORK", "WRITE", "YEAR", "ZONE",
    ]
    .into_iter()
    .collect()
});

/// Quoting and reserved-word rules for a connection, cached once at
/// connect time.
#[derive(Debug, Clone)]
pub struct Identifiers {
    quote: String,
}

impl Identifiers {
    pub fn new(quote: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
        }
    }

    pub fn quote_string(&self) -> &str {
        &self.quote
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        RESERVED_WORDS.contains(word.trim().to_ascii_uppercase().as_str())
    }

    /// Whether the name must be quoted to be used as an identifier: it is
    /// reserved, starts with a digit, or contains anything outside
    /// `[A-Za-z0-9_]`.
    pub fn needs_quoting(&self, name: &str) -> bool {
        if name.is_empty() || self.quote.is_empty() {
            return false;
        }
        if self.is_reserved(name) {
            return true;
        }
        if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return true;
        }
        !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Quote the name if it needs it, doubling embedded quote characters.
    pub fn quote_name(&self, name: &str) -> String {
        if !self.needs_quoting(name) {
            return name.to_string();
        }
        let doubled = name.replace(&self.quote, &format!("{0}{0}", self.quote));
        format!("{0}{1}{0}", self.quote, doubled)
    }

    /// Strip surrounding quotes, if present, undoing doubled quote
    /// characters.
    pub fn unquote_name(&self, name: &str) -> String {
        if self.quote.is_empty() {
            return name.to_string();
        }
        let trimmed = name.trim();
        if trimmed.len() >= 2 * self.quote.len()
            && trimmed.starts_with(&self.quote)
            && trimmed.ends_with(&self.quote)
        {
            let inner = &trimmed[self.quote.len()..trimmed.len() - self.quote.len()];
            inner.replace(&format!("{0}{0}", self.quote), &self.quote)
        } else {
            name.to_string()
        }
    }
}

impl Default for Identifiers {
    fn default() -> Self {
        Self::new("\"")
    }
}
