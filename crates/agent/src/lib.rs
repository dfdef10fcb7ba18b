//! Cost Agent - question routing and tool orchestration
//!
//! This crate provides the "brain" of the pricey system - the agent that:
//! - Classifies a question's intent (cost vs. anything else)
//! - Extracts the part number the question refers to
//! - Routes cost questions to the matching cost tool
//! - Returns the tool's answer (or a fixed refusal) as plain text
//!
//! # Architecture
//!
//! The agent is a linear conditional dispatch, not a graph:
//! 1. **Intent** (`pricey-core::intent`) - cost or other
//! 2. **Extraction** (`llm`) - pluggable strategy producing a part number
//! 3. **Routing** (`pricey-core::route`) - latest cost vs. cost analysis
//! 4. **Tool Execution** (`tools`) - stubbed cost lookups
//!
//! # Key Types
//!
//! - `CostAgent` - Main orchestrator (see `runtime` module)
//! - `ExtractionStrategy` - Deterministic digit-run extraction or an
//!   LLM-backed variant behind the same contract
//! - `CostTool` - The two external collaborators, swappable for tests
//!
//! # Safety Principle
//!
//! The LLM, when enabled, is strictly a token extractor. It NEVER decides
//! routing, answers, or refusals. Those are deterministic.

pub mod llm;
pub mod runtime;
pub mod tools;

pub use llm::{DigitRunStrategy, ExtractionStrategy, HttpLlmClient, LlmClient, LlmStrategy};
pub use runtime::{CostAgent, REFUSAL_MESSAGE};
pub use tools::{CostAnalysisTool, CostTool, LatestCostTool, Toolbox};
