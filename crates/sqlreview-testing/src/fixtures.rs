//! Service payloads for tests.

use serde_json::{Value, json};

pub fn connection(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "db_type": "mysql",
        "host": "db.internal",
        "port": 3306,
        "database_name": "shop",
        "username": "reviewer",
        "description": null,
        "created_at": "2024-05-01T10:00:00"
    })
}

pub fn llm_config(id: i64, name: &str, is_default: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "provider": "openai",
        "model_name": "gpt-4o",
        "base_url": null,
        "temperature": 0.2,
        "max_tokens": 2048,
        "is_default": is_default,
        "description": null,
        "created_at": "2024-05-01T10:00:00"
    })
}

pub fn statement(id: i64, title: &str, sql: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "sql_content": sql,
        "description": "",
        "status": "draft",
        "db_connection_id": 1,
        "version": 1,
        "tags": null,
        "category": null,
        "created_at": "2024-05-02T08:00:00",
        "updated_at": null,
        "last_reviewed_at": null
    })
}

/// A page of `statement` fixtures with ids `first_id..`
pub fn statement_page(page: u32, pages: u32, total: u64, count: usize) -> Value {
    let first_id = (page as i64 - 1) * 10 + 1;
    let items: Vec<Value> = (0..count as i64)
        .map(|offset| {
            let id = first_id + offset;
            statement(id, &format!("Query {}", id), "SELECT 1")
        })
        .collect();
    json!({
        "items": items,
        "page": page,
        "page_size": 10,
        "pages": pages,
        "total": total
    })
}

/// Newest-first history; `versions` are `(id, ordinal, sql)`.
pub fn versions(versions: &[(i64, u32, &str)]) -> Value {
    let list: Vec<Value> = versions
        .iter()
        .enumerate()
        .map(|(index, (id, version, sql))| {
            json!({
                "id": id,
                "version": version,
                "title": format!("v{}", version),
                "description": null,
                "sql_content": sql,
                "created_at": "2024-05-03T12:00:00",
                "is_current": index == 0
            })
        })
        .collect();
    Value::Array(list)
}

/// A report without a `security` section
pub fn report(id: i64, sql_id: i64) -> Value {
    json!({
        "id": id,
        "sql_statement_id": sql_id,
        "overall_assessment": {"status": "good", "score": 80, "summary": "Solid query"},
        "consistency": {"status": "excellent", "score": 95, "details": "Matches schema"},
        "conventions": {"status": "needs_improvement", "score": 79, "suggestions": ["Avoid SELECT *"]},
        "performance": {"status": "has_issues", "score": 45, "details": "Full table scan"},
        "readability": {"status": "good", "score": 88},
        "maintainability": {"status": "good", "score": 82},
        "llm_info": {"provider": "openai", "model": "gpt-4o"},
        "optimized_sql": "SELECT id, name FROM users WHERE active = 1",
        "created_at": "2024-05-04T09:30:00"
    })
}

pub fn history(report_ids: &[i64]) -> Value {
    let list: Vec<Value> = report_ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "overall_status": "good",
                "overall_score": 80,
                "llm_provider": "openai",
                "llm_model": "gpt-4o",
                "created_at": "2024-05-04T09:30:00"
            })
        })
        .collect();
    Value::Array(list)
}

pub fn message(text: &str) -> Value {
    json!({"message": text})
}

pub fn created(id: i64) -> Value {
    json!({"id": id, "message": "created"})
}
