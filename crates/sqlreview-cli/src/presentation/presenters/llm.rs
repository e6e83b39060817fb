use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, LlmConfigEntryViewModel, LlmConfigListViewModel,
    LlmDraftViewModel, LlmTestViewModel, MutationViewModel, StatusBadge,
};
use sqlreview_core::Notice;
use sqlreview_sdk::Mutation;
use sqlreview_types::{LlmConfig, LlmConfigForm, LlmConfigId, MessageResponse, default_config};

pub fn llm_list_view_model(
    configs: Vec<LlmConfig>,
    selected: Option<LlmConfigId>,
) -> LlmConfigListViewModel {
    let default_id = default_config(&configs).map(|c| c.id.get());
    let configs = configs
        .into_iter()
        .map(|c| LlmConfigEntryViewModel {
            is_selected: Some(c.id) == selected,
            id: c.id.get(),
            name: c.name,
            provider: c.provider,
            model_name: c.model_name,
            base_url: c.base_url,
            temperature: c.temperature,
            max_tokens: c.max_tokens,
            description: c.description,
            is_default: c.is_default,
        })
        .collect();

    LlmConfigListViewModel {
        configs,
        default_id,
        selected_id: selected.map(|id| id.get()),
    }
}

pub fn present_llm_list(
    configs: Option<Vec<LlmConfig>>,
    selected: Option<LlmConfigId>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<LlmConfigListViewModel>> {
    let content = configs.map(|list| llm_list_view_model(list, selected));
    let mut result = CommandResultViewModel::new(content).with_notices(notices);

    if let Some(list) = &result.content {
        if list.configs.is_empty() {
            result = result
                .with_badge(StatusBadge::info("No model configurations"))
                .with_suggestion(
                    Guidance::new("Add a model configuration").with_command(cmd::LLM_SAVE),
                );
        } else {
            let missing_default = list.default_id.is_none();
            let count = list.configs.len();
            if result.badge.is_none() {
                result = result.with_badge(StatusBadge::success(format!(
                    "{} model configuration(s)",
                    count
                )));
            }
            if missing_default {
                result = result.with_suggestion(
                    Guidance::new("No default model; reviews will use the service's choice")
                        .with_command(cmd::LLM_SET_DEFAULT),
                );
            }
        }
    }
    result
}

pub fn present_llm_draft(
    selected: Option<LlmConfigId>,
    draft: Option<&LlmConfigForm>,
    notices: &[Notice],
) -> CommandResultViewModel<LlmDraftViewModel> {
    let content = LlmDraftViewModel {
        selected_id: selected.map(|id| id.get()),
        draft: draft.map(|d| d.without_secret()).unwrap_or_default(),
    };

    let mut result = CommandResultViewModel::new(content).with_notices(notices);
    if result.badge.is_none() {
        let label = match selected {
            Some(id) => format!("Editing model configuration {}", id),
            None => "New model configuration draft".to_string(),
        };
        result = result.with_badge(StatusBadge::info(label));
    }
    result.with_suggestion(Guidance::new("Fill in and save the draft").with_command(cmd::LLM_SAVE))
}

pub fn present_llm_mutation(
    mutation: Option<Mutation<Vec<LlmConfig>>>,
    selected: Option<LlmConfigId>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<MutationViewModel<LlmConfigListViewModel>>> {
    let content = mutation.map(|m| MutationViewModel {
        id: m.id,
        created: m.created,
        refreshed: m.refreshed.map(|list| llm_list_view_model(list, selected)),
    });
    CommandResultViewModel::new(content).with_notices(notices)
}

pub fn present_llm_test(
    id: LlmConfigId,
    outcome: Option<MessageResponse>,
    notices: &[Notice],
) -> CommandResultViewModel<Option<LlmTestViewModel>> {
    let content = outcome.map(|o| LlmTestViewModel {
        id: id.get(),
        success: o.success.unwrap_or(true),
        message: o.message,
    });
    CommandResultViewModel::new(content).with_notices(notices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlreview_types::LlmProvider;

    fn config(id: i64, is_default: bool) -> LlmConfig {
        LlmConfig {
            id: LlmConfigId::new(id),
            name: format!("cfg-{}", id),
            provider: LlmProvider::Deepseek,
            model_name: "deepseek-chat".to_string(),
            base_url: None,
            temperature: None,
            max_tokens: None,
            is_default,
            description: None,
            created_at: None,
        }
    }

    #[test]
    fn test_default_comes_from_server_flag() {
        let result = present_llm_list(Some(vec![config(1, false), config(2, true)]), None, &[]);
        let list = result.content.unwrap();
        assert_eq!(list.default_id, Some(2));
        assert!(list.configs[1].is_default);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_no_default_is_pointed_out() {
        let result = present_llm_list(Some(vec![config(1, false)]), None, &[]);
        assert_eq!(result.content.as_ref().unwrap().default_id, None);
        assert_eq!(result.suggestions.len(), 1);
    }
}
