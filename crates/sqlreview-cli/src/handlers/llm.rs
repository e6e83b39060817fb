use super::HandlerContext;
use crate::args::LlmFields;
use crate::presentation::presenters;
use anyhow::Result;
use sqlreview_sdk::Controller;
use sqlreview_types::{LlmConfigForm, LlmConfigId};

pub async fn list(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    let configs = ctrl.list_llm_configs().await;
    let view_model = presenters::present_llm_list(
        configs,
        ctrl.state().current_llm_config_id,
        ctrl.notices(),
    );
    hctx.render(view_model)
}

pub fn new(ctrl: &mut Controller, hctx: &HandlerContext) -> Result<()> {
    ctrl.new_llm_config();
    render_draft(ctrl, hctx)
}

pub async fn edit(ctrl: &mut Controller, id: LlmConfigId, hctx: &HandlerContext) -> Result<()> {
    if ctrl.edit_llm_config(id).await.is_none() {
        return hctx.render(presenters::present_llm_list(
            None,
            ctrl.state().current_llm_config_id,
            ctrl.notices(),
        ));
    }
    render_draft(ctrl, hctx)
}

pub async fn save(ctrl: &mut Controller, fields: LlmFields, hctx: &HandlerContext) -> Result<()> {
    let form = merge_fields(ctrl.state().llm_draft.as_ref(), fields);
    let mutation = ctrl.save_llm_config(&form).await;
    let view_model = presenters::present_llm_mutation(
        mutation,
        ctrl.state().current_llm_config_id,
        ctrl.notices(),
    );
    hctx.render(view_model)
}

pub async fn set_default(
    ctrl: &mut Controller,
    id: LlmConfigId,
    hctx: &HandlerContext,
) -> Result<()> {
    let mutation = ctrl.set_default_llm_config(id).await;
    let view_model = presenters::present_llm_mutation(
        mutation,
        ctrl.state().current_llm_config_id,
        ctrl.notices(),
    );
    hctx.render(view_model)
}

pub async fn test(ctrl: &mut Controller, id: LlmConfigId, hctx: &HandlerContext) -> Result<()> {
    let outcome = ctrl.test_llm_config(id).await;
    hctx.render(presenters::present_llm_test(id, outcome, ctrl.notices()))
}

pub async fn delete(ctrl: &mut Controller, id: LlmConfigId, hctx: &HandlerContext) -> Result<()> {
    let mutation = ctrl.delete_llm_config(id).await;
    let view_model = presenters::present_llm_mutation(
        mutation,
        ctrl.state().current_llm_config_id,
        ctrl.notices(),
    );
    hctx.render(view_model)
}

fn render_draft(ctrl: &Controller, hctx: &HandlerContext) -> Result<()> {
    let state = ctrl.state();
    let view_model = presenters::present_llm_draft(
        state.current_llm_config_id,
        state.llm_draft.as_ref(),
        ctrl.notices(),
    );
    hctx.render(view_model)
}

/// Same rules as connection drafts; the API key only comes from the flag.
fn merge_fields(draft: Option<&LlmConfigForm>, fields: LlmFields) -> LlmConfigForm {
    let mut form = draft.map(LlmConfigForm::without_secret).unwrap_or_default();
    if let Some(name) = fields.name {
        form.name = name;
    }
    if fields.provider.is_some() {
        form.provider = fields.provider;
    }
    if let Some(model) = fields.model_name {
        form.model_name = model;
    }
    if fields.base_url.is_some() {
        form.base_url = fields.base_url;
    }
    if fields.temperature.is_some() {
        form.temperature = fields.temperature;
    }
    if fields.max_tokens.is_some() {
        form.max_tokens = fields.max_tokens;
    }
    if fields.description.is_some() {
        form.description = fields.description;
    }
    form.api_key = fields.api_key;
    form
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlreview_types::LlmProvider;

    #[test]
    fn test_blank_draft_takes_flags() {
        let fields = LlmFields {
            name: Some("reviewer".to_string()),
            provider: Some(LlmProvider::Deepseek),
            model_name: Some("deepseek-chat".to_string()),
            api_key: Some("sk-123".to_string()),
            ..Default::default()
        };

        let form = merge_fields(None, fields);
        assert_eq!(form.provider, Some(LlmProvider::Deepseek));
        assert_eq!(form.model_name, "deepseek-chat");
        assert_eq!(form.api_key.as_deref(), Some("sk-123"));
    }

    #[test]
    fn test_edit_keeps_unset_fields() {
        let draft = LlmConfigForm {
            name: "local".to_string(),
            provider: Some(LlmProvider::Ollama),
            model_name: "qwen2.5-coder".to_string(),
            base_url: Some("http://localhost:11434".to_string()),
            temperature: Some(0.2),
            ..Default::default()
        };
        let fields = LlmFields {
            temperature: Some(0.7),
            ..Default::default()
        };

        let form = merge_fields(Some(&draft), fields);
        assert_eq!(form.base_url.as_deref(), Some("http://localhost:11434"));
        assert_eq!(form.temperature, Some(0.7));
        assert_eq!(form.api_key, None);
    }
}
