use sqlreview_types::{ConnectionForm, LlmConfigForm, StatementForm};

use crate::error::{Error, Result};
use crate::state::EditorBuffer;

/// Request body for saving the editor, trimmed.
pub fn statement_form(editor: &EditorBuffer) -> Result<StatementForm> {
    let title = editor.title.trim();
    let content = editor.content.trim();

    if title.is_empty() {
        return Err(Error::InvalidInput("Please enter a SQL title".to_string()));
    }
    if content.is_empty() {
        return Err(Error::InvalidInput("Please enter SQL content".to_string()));
    }

    Ok(StatementForm {
        title: title.to_string(),
        sql_content: content.to_string(),
        description: editor.description.trim().to_string(),
        db_connection_id: editor.db_connection_id,
    })
}

pub fn connection_form(form: &ConnectionForm) -> Result<()> {
    if form.name.trim().is_empty() {
        return Err(Error::InvalidInput("Connection name is required".to_string()));
    }
    if form.db_type.is_none() {
        return Err(Error::InvalidInput("Database type is required".to_string()));
    }
    Ok(())
}

pub fn llm_config_form(form: &LlmConfigForm) -> Result<()> {
    if form.name.trim().is_empty() {
        return Err(Error::InvalidInput("Config name is required".to_string()));
    }
    if form.provider.is_none() {
        return Err(Error::InvalidInput("Provider is required".to_string()));
    }
    if form.model_name.trim().is_empty() {
        return Err(Error::InvalidInput("Model name is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_title_or_content_is_rejected() {
        let editor = EditorBuffer {
            title: "   ".to_string(),
            content: "SELECT 1".to_string(),
            ..Default::default()
        };
        assert!(statement_form(&editor).is_err());

        let editor = EditorBuffer {
            title: "t".to_string(),
            content: "\n\t".to_string(),
            ..Default::default()
        };
        assert!(statement_form(&editor).is_err());
    }

    #[test]
    fn test_form_is_trimmed() {
        let editor = EditorBuffer {
            title: "  Orders  ".to_string(),
            content: "\nSELECT 1\n".to_string(),
            description: String::new(),
            db_connection_id: None,
        };
        let form = statement_form(&editor).unwrap();
        assert_eq!(form.title, "Orders");
        assert_eq!(form.sql_content, "SELECT 1");
    }

    #[test]
    fn test_connection_needs_name_and_type() {
        let form = ConnectionForm {
            name: "prod".to_string(),
            ..Default::default()
        };
        assert!(connection_form(&form).is_err());
    }
}
