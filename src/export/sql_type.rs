//! Logical-to-physical type mapping for SQL dialects.
//!
//! Maps the contract type vocabulary (`string`, `integer`, `timestamp`, ...)
//! to the physical types of a named dialect. Unknown dialects and unmapped
//! logical types fall back to the logical type unchanged.

use crate::models::Field;

/// Resolve a field's logical type against the named dialect.
///
/// Dialect matching is case-insensitive. Contract types carry no precision
/// or scale, so parameterized physical types are emitted without arguments.
pub fn convert_to_sql_type(field: &Field, dialect: &str) -> String {
    let logical = &field.logical_type;
    match dialect.to_lowercase().as_str() {
        "postgres" | "postgresql" => to_postgres(logical),
        "snowflake" => to_snowflake(logical),
        "databricks" => to_databricks(logical),
        "sqlserver" | "mssql" => to_sqlserver(logical),
        "mysql" => to_mysql(logical),
        "duckdb" => to_duckdb(logical),
        _ => logical.to_string(),
    }
}

/// Map a logical type to PostgreSQL.
fn to_postgres(logical: &str) -> String {
    let mapped = match logical.to_lowercase().as_str() {
        "string" | "varchar" | "text" => "text",
        // timestamp without a suffix means "with time zone" in the contract vocabulary
        "timestamp" | "timestamp_tz" => "timestamptz",
        "timestamp_ntz" => "timestamp",
        "date" => "date",
        "time" => "time",
        "number" | "decimal" | "numeric" => "numeric",
        "int" | "integer" => "integer",
        "long" | "bigint" => "bigint",
        "float" => "real",
        "double" => "double precision",
        "boolean" => "boolean",
        "object" | "record" | "struct" => "jsonb",
        "bytes" => "bytea",
        "array" => "array",
        _ => return logical.to_string(),
    };
    mapped.to_string()
}

/// Map a logical type to Snowflake.
fn to_snowflake(logical: &str) -> String {
    let mapped = match logical.to_lowercase().as_str() {
        // TEXT and VARCHAR are the same type in Snowflake
        "string" | "varchar" | "text" => "TEXT",
        "timestamp" | "timestamp_tz" => "TIMESTAMP_TZ",
        "timestamp_ntz" => "TIMESTAMP_NTZ",
        "date" => "DATE",
        "time" => "TIME",
        "number" | "decimal" | "numeric" => "NUMBER",
        // integers are NUMBER(38,0) in Snowflake
        "int" | "integer" | "long" | "bigint" => "NUMBER",
        "float" | "double" => "FLOAT",
        "boolean" => "BOOLEAN",
        "object" | "record" | "struct" => "OBJECT",
        "bytes" => "BINARY",
        "array" => "ARRAY",
        _ => return logical.to_string(),
    };
    mapped.to_string()
}

/// Map a logical type to Databricks SQL.
fn to_databricks(logical: &str) -> String {
    let mapped = match logical.to_lowercase().as_str() {
        "string" | "varchar" | "text" => "STRING",
        "timestamp" | "timestamp_tz" => "TIMESTAMP",
        "timestamp_ntz" => "TIMESTAMP_NTZ",
        "date" => "DATE",
        // no TIME type in Databricks
        "time" => "STRING",
        "number" | "decimal" | "numeric" => "DECIMAL",
        "int" | "integer" => "INT",
        "long" | "bigint" => "BIGINT",
        "float" => "FLOAT",
        "double" => "DOUBLE",
        "boolean" => "BOOLEAN",
        "object" | "record" | "struct" => "STRUCT",
        "bytes" => "BINARY",
        "array" => "ARRAY",
        _ => return logical.to_string(),
    };
    mapped.to_string()
}

/// Map a logical type to SQL Server.
fn to_sqlserver(logical: &str) -> String {
    let mapped = match logical.to_lowercase().as_str() {
        "string" | "varchar" | "text" => "nvarchar",
        "timestamp" | "timestamp_tz" => "datetimeoffset",
        "timestamp_ntz" => "datetime2",
        "date" => "date",
        "time" => "time",
        "number" | "decimal" | "numeric" => "numeric",
        "int" | "integer" => "int",
        "long" | "bigint" => "bigint",
        "float" => "real",
        "double" => "float",
        "boolean" => "bit",
        // no native document type; JSON is stored as text
        "object" | "record" | "struct" => "nvarchar",
        "bytes" => "varbinary",
        _ => return logical.to_string(),
    };
    mapped.to_string()
}

/// Map a logical type to MySQL.
fn to_mysql(logical: &str) -> String {
    let mapped = match logical.to_lowercase().as_str() {
        "string" | "text" => "text",
        "varchar" => "varchar",
        "timestamp" | "timestamp_tz" => "timestamp",
        "timestamp_ntz" => "datetime",
        "date" => "date",
        "time" => "time",
        "number" | "decimal" | "numeric" => "decimal",
        "int" | "integer" => "int",
        "long" | "bigint" => "bigint",
        "float" => "float",
        "double" => "double",
        "boolean" => "boolean",
        "object" | "record" | "struct" => "json",
        "bytes" => "blob",
        "array" => "json",
        _ => return logical.to_string(),
    };
    mapped.to_string()
}

/// Map a logical type to DuckDB.
fn to_duckdb(logical: &str) -> String {
    let mapped = match logical.to_lowercase().as_str() {
        "string" | "varchar" | "text" => "VARCHAR",
        "timestamp" | "timestamp_tz" => "TIMESTAMP WITH TIME ZONE",
        "timestamp_ntz" => "TIMESTAMP",
        "date" => "DATE",
        "time" => "TIME",
        "number" | "decimal" | "numeric" => "DECIMAL",
        "int" | "integer" => "INTEGER",
        "long" | "bigint" => "BIGINT",
        "float" => "FLOAT",
        "double" => "DOUBLE",
        "boolean" => "BOOLEAN",
        "object" | "record" | "struct" => "STRUCT",
        "bytes" => "BLOB",
        "array" => "ARRAY",
        _ => return logical.to_string(),
    };
    mapped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(logical_type: &str) -> Field {
        Field::new("f", logical_type)
    }

    #[test]
    fn test_postgres_types() {
        assert_eq!(convert_to_sql_type(&field("string"), "postgres"), "text");
        assert_eq!(convert_to_sql_type(&field("integer"), "postgres"), "integer");
        assert_eq!(convert_to_sql_type(&field("long"), "postgres"), "bigint");
        assert_eq!(
            convert_to_sql_type(&field("timestamp"), "postgres"),
            "timestamptz"
        );
        assert_eq!(
            convert_to_sql_type(&field("timestamp_ntz"), "postgres"),
            "timestamp"
        );
        assert_eq!(convert_to_sql_type(&field("struct"), "postgres"), "jsonb");
        assert_eq!(convert_to_sql_type(&field("bytes"), "postgres"), "bytea");
    }

    #[test]
    fn test_snowflake_types() {
        assert_eq!(convert_to_sql_type(&field("string"), "snowflake"), "TEXT");
        assert_eq!(convert_to_sql_type(&field("integer"), "snowflake"), "NUMBER");
        assert_eq!(convert_to_sql_type(&field("decimal"), "snowflake"), "NUMBER");
        assert_eq!(
            convert_to_sql_type(&field("timestamp"), "snowflake"),
            "TIMESTAMP_TZ"
        );
        assert_eq!(convert_to_sql_type(&field("double"), "snowflake"), "FLOAT");
        assert_eq!(convert_to_sql_type(&field("object"), "snowflake"), "OBJECT");
    }

    #[test]
    fn test_databricks_types() {
        assert_eq!(
            convert_to_sql_type(&field("string"), "databricks"),
            "STRING"
        );
        assert_eq!(convert_to_sql_type(&field("integer"), "databricks"), "INT");
        assert_eq!(
            convert_to_sql_type(&field("timestamp"), "databricks"),
            "TIMESTAMP"
        );
        assert_eq!(convert_to_sql_type(&field("time"), "databricks"), "STRING");
        assert_eq!(
            convert_to_sql_type(&field("record"), "databricks"),
            "STRUCT"
        );
    }

    #[test]
    fn test_sqlserver_types() {
        assert_eq!(
            convert_to_sql_type(&field("string"), "sqlserver"),
            "nvarchar"
        );
        assert_eq!(convert_to_sql_type(&field("boolean"), "sqlserver"), "bit");
        assert_eq!(
            convert_to_sql_type(&field("timestamp"), "sqlserver"),
            "datetimeoffset"
        );
        // mssql is an alias for sqlserver
        assert_eq!(convert_to_sql_type(&field("boolean"), "mssql"), "bit");
    }

    #[test]
    fn test_mysql_types() {
        assert_eq!(convert_to_sql_type(&field("string"), "mysql"), "text");
        assert_eq!(convert_to_sql_type(&field("varchar"), "mysql"), "varchar");
        assert_eq!(convert_to_sql_type(&field("struct"), "mysql"), "json");
        assert_eq!(
            convert_to_sql_type(&field("timestamp_ntz"), "mysql"),
            "datetime"
        );
    }

    #[test]
    fn test_duckdb_types() {
        assert_eq!(convert_to_sql_type(&field("string"), "duckdb"), "VARCHAR");
        assert_eq!(
            convert_to_sql_type(&field("timestamp"), "duckdb"),
            "TIMESTAMP WITH TIME ZONE"
        );
        assert_eq!(convert_to_sql_type(&field("bytes"), "duckdb"), "BLOB");
    }

    #[test]
    fn test_dialect_matching_is_case_insensitive() {
        assert_eq!(convert_to_sql_type(&field("string"), "Postgres"), "text");
        assert_eq!(convert_to_sql_type(&field("STRING"), "snowflake"), "TEXT");
    }

    #[test]
    fn test_unknown_dialect_falls_back_to_logical_type() {
        assert_eq!(convert_to_sql_type(&field("string"), "oracle"), "string");
        assert_eq!(convert_to_sql_type(&field("integer"), ""), "integer");
    }

    #[test]
    fn test_unmapped_logical_type_falls_back_unchanged() {
        assert_eq!(
            convert_to_sql_type(&field("geometry"), "postgres"),
            "geometry"
        );
        assert_eq!(
            convert_to_sql_type(&field("geometry"), "snowflake"),
            "geometry"
        );
    }
}
