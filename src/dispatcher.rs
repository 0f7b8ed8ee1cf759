use log::{error, info};

use crate::model::{GenerateText, GenerationContext};

/// Instruction sent with every idea-generation call.
pub const IDEA_INSTRUCTION: &str = "You are a business expert in identifying startup ideas in \
emerging markets. Based on the provided interests and industry, generate a unique startup idea \
that combines current market trends, data analysis, and emerging technologies.";

/// Builds the instruction for a feedback call, embedding the full text of
/// the idea the user selected.
pub fn feedback_instruction(selected_idea: &str) -> String {
    format!(
        "You are an experienced startup advisor. Provide detailed feedback on how the following \
startup idea could be improved: {}",
        selected_idea
    )
}

/// Issues calls to the text-generation service and collects the responses
/// in order. Calls are independent: each one carries the identical context,
/// so any variety between ideas comes from the service's own sampling.
pub struct IdeaDispatcher<G: GenerateText> {
    service: G,
}

impl<G: GenerateText> IdeaDispatcher<G> {
    pub fn new(service: G) -> Self {
        Self { service }
    }

    /// Calls the service `count` times sequentially and returns the raw
    /// responses in generation order.
    ///
    /// Fail-soft: if any call fails, the whole batch collapses to a single
    /// human-readable error string and ideas already gathered in this cycle
    /// are discarded. The caller always gets something displayable.
    pub async fn generate_batch(&self, ctx: &GenerationContext, count: usize) -> Vec<String> {
        info!("Dispatching {} generation call(s)", count);

        let mut ideas = Vec::with_capacity(count);
        for i in 0..count {
            match self.service.generate(ctx).await {
                Ok(text) => ideas.push(text),
                Err(e) => {
                    error!("Generation call {} of {} failed: {}", i + 1, count, e);
                    return vec![format!("Error generating startup ideas: {}", e)];
                }
            }
        }
        ideas
    }
}
