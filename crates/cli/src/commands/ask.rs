use pricey_agent::CostAgent;
use pricey_core::config::{AppConfig, LoadOptions};

use super::CommandResult;

/// Answer one question and exit. Plain output is the bare answer text;
/// `--json` wraps it in the standard command envelope.
pub fn run(question: &str, json_output: bool) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure("ask", "config_validation", error.to_string(), 2)
        }
    };

    let agent = match CostAgent::from_config(&config) {
        Ok(agent) => agent,
        Err(error) => return CommandResult::failure("ask", "agent_wiring", error.to_string(), 2),
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "ask",
                "runtime",
                format!("failed to initialize async runtime: {error}"),
                2,
            );
        }
    };

    match runtime.block_on(agent.answer(question)) {
        Ok(answer) => {
            if json_output {
                CommandResult::success("ask", answer)
            } else {
                CommandResult { exit_code: 0, output: answer }
            }
        }
        Err(error) => CommandResult::failure("ask", "tool_execution", error.to_string(), 1),
    }
}
