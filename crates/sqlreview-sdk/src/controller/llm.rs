use sqlreview_core::{Notice, validation};
use sqlreview_types::{LlmConfig, LlmConfigForm, LlmConfigId, MessageResponse, default_config};

use super::{Controller, Mutation, logged};

impl Controller {
    pub async fn list_llm_configs(&mut self) -> Option<Vec<LlmConfig>> {
        let result = self.client.llm_configs().list().await;
        self.settle(result)
    }

    pub fn new_llm_config(&mut self) {
        self.state.new_llm_config();
    }

    /// Selects a config and fills the draft from it (API key left empty).
    pub async fn edit_llm_config(&mut self, id: LlmConfigId) -> Option<LlmConfig> {
        let result = self.client.llm_configs().get(id).await;
        let record = self.settle(result)?;
        self.state.edit_llm_config(&record);
        Some(record)
    }

    pub async fn save_llm_config(
        &mut self,
        form: &LlmConfigForm,
    ) -> Option<Mutation<Vec<LlmConfig>>> {
        if let Err(err) = validation::llm_config_form(form) {
            self.state.keep_llm_draft(form);
            return self.fail(err.into());
        }

        let (id, created) = match self.state.current_llm_config_id {
            Some(id) => {
                let result = self.client.llm_configs().update(id, form).await;
                self.settle(result)?;
                (id.get(), false)
            }
            None => {
                let result = self.client.llm_configs().create(form).await;
                (self.settle(result)?.id, true)
            }
        };

        let message = if created {
            "Model config created"
        } else {
            "Model config updated"
        };
        self.notify(Notice::success(message));
        self.state.new_llm_config();

        let refreshed = logged("model configs", self.client.llm_configs().list().await);
        Some(Mutation {
            id: Some(id),
            created,
            message: message.to_string(),
            refreshed,
        })
    }

    pub async fn delete_llm_config(
        &mut self,
        id: LlmConfigId,
    ) -> Option<Mutation<Vec<LlmConfig>>> {
        if !self.confirm(&format!("Delete model config {}?", id)) {
            return None;
        }

        let result = self.client.llm_configs().delete(id).await;
        self.settle(result)?;

        let message = "Model config deleted";
        self.notify(Notice::success(message));
        self.state.forget_llm_config(id);

        let refreshed = logged("model configs", self.client.llm_configs().list().await);
        Some(Mutation {
            id: Some(id.get()),
            created: false,
            message: message.to_string(),
            refreshed,
        })
    }

    pub async fn set_default_llm_config(
        &mut self,
        id: LlmConfigId,
    ) -> Option<Mutation<Vec<LlmConfig>>> {
        let result = self.client.llm_configs().set_default(id).await;
        self.settle(result)?;

        let message = "Default model config set";
        self.notify(Notice::success(message));

        let refreshed = logged("model configs", self.client.llm_configs().list().await);
        Some(Mutation {
            id: Some(id.get()),
            created: false,
            message: message.to_string(),
            refreshed,
        })
    }

    pub async fn test_llm_config(&mut self, id: LlmConfigId) -> Option<MessageResponse> {
        let result = self.client.llm_configs().test(id).await;
        let outcome = self.settle(result)?;

        let message = outcome
            .message
            .clone()
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Model config test succeeded".to_string());
        if outcome.success.unwrap_or(true) {
            self.notify(Notice::success(message));
        } else {
            self.notify(Notice::error(message));
        }
        Some(outcome)
    }

    /// Model for a review: the explicit choice, else whatever the service
    /// flags as default. `None` lets the service pick.
    pub(super) async fn review_model(
        &mut self,
        explicit: Option<LlmConfigId>,
    ) -> Option<LlmConfigId> {
        if explicit.is_some() {
            return explicit;
        }
        let configs = logged("model configs", self.client.llm_configs().list().await)?;
        default_config(&configs).map(|config| config.id)
    }
}
