//! Cosmetic SQL reformatting.
//!
//! Purely textual: string literals and comments are not recognized, so the
//! result is only meant for display and editing.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static COMMA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*,\s*").unwrap());
static CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\s*\b(LEFT JOIN|RIGHT JOIN|INNER JOIN|GROUP BY|ORDER BY|SELECT|FROM|WHERE|JOIN|HAVING)\s+",
    )
    .unwrap()
});
static OPEN_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]*\([ \t]*").unwrap());
static CLOSE_PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]*\)[ \t]*").unwrap());

pub fn format_sql(sql: &str) -> Result<String> {
    if sql.trim().is_empty() {
        return Err(Error::InvalidInput("Enter some SQL to format".to_string()));
    }

    let text = WHITESPACE.replace_all(sql, " ");
    let text = COMMA.replace_all(&text, ",\n    ");
    let text = CLAUSE.replace_all(&text, "\n$1 ");
    let text = OPEN_PAREN.replace_all(&text, " (");
    let text = CLOSE_PAREN.replace_all(&text, ") ");

    let lines: Vec<&str> = text.trim().lines().map(str::trim_end).collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(format_sql("   \n\t").is_err());
    }

    #[test]
    fn test_breaks_clauses_and_columns() {
        let input = "select id,name from users u left join orders o on u.id=o.uid \
                     where u.active=1 order by name";
        let formatted = format_sql(input).unwrap();
        insta::assert_snapshot!(formatted, @r"
        select id,
            name
        from users u
        left join orders o on u.id=o.uid
        where u.active=1
        order by name
        ");
    }

    #[test]
    fn test_parentheses_spacing() {
        let formatted = format_sql("SELECT COUNT(  * ) FROM t").unwrap();
        assert_eq!(formatted, "SELECT COUNT (*)\nFROM t");
    }
}
