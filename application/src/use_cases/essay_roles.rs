//! Writer and Reviewer operations
//!
//! Shapes each pipeline task into a chat-completion call. The persona prompts
//! come from the injected [`RolePrompts`]; this module only pairs them with
//! the gateway.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use draftsmith_domain::{ChatMessage, Model, RolePrompts, Stage};
use std::sync::Arc;
use tracing::debug;

/// The two personas of the pipeline, bound to a gateway
pub struct EssayRoles<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    prompts: RolePrompts,
    logger: Arc<dyn ConversationLogger>,
}

impl<G: LlmGateway + 'static> EssayRoles<G> {
    pub fn new(gateway: Arc<G>, prompts: RolePrompts) -> Self {
        Self {
            gateway,
            prompts,
            logger: Arc::new(NoConversationLogger),
        }
    }

    /// Record every request and reply to `logger`
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Writer: produce a first draft on `topic`
    pub async fn draft(&self, writer: &Model, topic: &str) -> Result<String, GatewayError> {
        let messages = self.prompts.draft_messages(topic);
        self.send(Stage::Draft, writer, &messages).await
    }

    /// Reviewer: structured feedback on `essay`
    pub async fn review(&self, reviewer: &Model, essay: &str) -> Result<String, GatewayError> {
        let messages = self.prompts.review_messages(essay);
        self.send(Stage::Review, reviewer, &messages).await
    }

    /// Writer: rewrite `draft` to address `review`
    pub async fn revise(
        &self,
        writer: &Model,
        draft: &str,
        review: &str,
    ) -> Result<String, GatewayError> {
        let messages = self.prompts.revise_messages(draft, review);
        self.send(Stage::Revise, writer, &messages).await
    }

    async fn send(
        &self,
        stage: Stage,
        model: &Model,
        messages: &[ChatMessage],
    ) -> Result<String, GatewayError> {
        let bytes: usize = messages.iter().map(|m| m.content().len()).sum();
        debug!(
            stage = stage.as_str(),
            model = %model,
            messages = messages.len(),
            bytes,
            "Sending completion request"
        );
        self.logger.log(ConversationEvent::stage_request(
            stage,
            model,
            messages.len(),
            bytes,
        ));

        match self.gateway.complete(model, messages).await {
            Ok(text) => {
                debug!(stage = stage.as_str(), bytes = text.len(), "Completion received");
                self.logger
                    .log(ConversationEvent::stage_response(stage, model, &text));
                Ok(text)
            }
            Err(e) => {
                self.logger
                    .log(ConversationEvent::stage_failed(stage, model, &e.to_string()));
                Err(e)
            }
        }
    }
}
