//! The calculator state machine.

use tracing::{debug, trace, warn};

use super::error::CalcError;
use super::function::{Constant, Evaluation, OperandRequest, ScientificFunction};
use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::config::{CalculatorConfig, ConfigError};
use crate::core::{
    AngleMode, EngineState, HistoryLog, Operator, PendingOperation, Phase, INITIAL_OPERAND,
};
use crate::format::{parse_integer_prefix, parse_operand, render_number, NumberFormatter};
use crate::math;

/// Result of an engine operation that did not fail.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Outcome {
    /// State or history changed; the display should be refreshed
    Updated,
    /// Nothing changed
    Unchanged,
    /// A second operand is needed; answer with `supply_operand`
    AwaitingOperand(OperandRequest),
}

/// Calculator engine owning the operands, angle mode and history of one
/// session.
///
/// Operations either complete fully, do nothing, or (for division by zero)
/// reset the engine. They never leave partial state behind.
///
/// # Example
///
/// ```rust
/// use tally::core::Operator;
/// use tally::engine::CalculatorEngine;
///
/// let mut engine = CalculatorEngine::new();
/// engine.append_digit('1');
/// engine.append_digit('2');
/// engine.choose_operator(Operator::Add).unwrap();
/// engine.append_digit('3');
/// engine.compute().unwrap();
///
/// assert_eq!(engine.current_operand(), "15");
/// assert_eq!(engine.history().latest().unwrap().expression, "12 + 3");
/// ```
#[derive(Clone, Debug)]
pub struct CalculatorEngine {
    state: EngineState,
    angle_mode: AngleMode,
    history: HistoryLog,
    config: CalculatorConfig,
    formatter: NumberFormatter,
    operand_request: Option<OperandRequest>,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::from_valid_config(CalculatorConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Rebuild an engine from a checkpoint.
    ///
    /// History entries beyond the configured capacity are dropped, oldest
    /// first.
    pub fn from_checkpoint(
        checkpoint: Checkpoint,
        config: CalculatorConfig,
    ) -> Result<Self, CheckpointError> {
        config
            .validate()
            .map_err(|e| CheckpointError::InvalidSession(e.to_string()))?;
        let mut engine = Self::from_valid_config(config);
        engine.restore(checkpoint)?;
        Ok(engine)
    }

    fn from_valid_config(config: CalculatorConfig) -> Self {
        Self {
            state: EngineState::default(),
            angle_mode: config.angle_mode,
            history: HistoryLog::with_capacity(config.history_capacity),
            formatter: config.formatter(),
            config,
            operand_request: None,
        }
    }

    // Accessors

    pub fn current_operand(&self) -> &str {
        self.state.current()
    }

    /// Previous operand text, or `""` when no operation is pending.
    pub fn previous_operand(&self) -> &str {
        self.state.previous()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.state.pending().map(|pending| pending.operator)
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        if self.operand_request.is_some() {
            Phase::AwaitingOperand
        } else if self.state.pending().is_some() {
            Phase::OperatorPending
        } else if self.state.current() == INITIAL_OPERAND {
            Phase::Initial
        } else {
            Phase::Entering
        }
    }

    pub fn operand_request(&self) -> Option<&OperandRequest> {
        self.operand_request.as_ref()
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.angle_mode
    }

    pub fn set_angle_mode(&mut self, mode: AngleMode) {
        if self.angle_mode != mode {
            debug!(mode = ?mode, "angle mode changed");
        }
        self.angle_mode = mode;
    }

    pub fn toggle_angle_mode(&mut self) -> AngleMode {
        self.set_angle_mode(self.angle_mode.toggled());
        self.angle_mode
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Current operand formatted for display.
    pub fn current_display(&self) -> String {
        self.formatter.format(self.state.current())
    }

    /// Previous operand and operator formatted for display, e.g. `1 234 +`.
    pub fn previous_display(&self) -> String {
        match self.state.pending() {
            Some(pending) => format!(
                "{} {}",
                self.formatter.format(&pending.operand),
                pending.operator.symbol()
            ),
            None => String::new(),
        }
    }

    // Entry

    /// Return to the initial state. History is kept.
    pub fn reset(&mut self) {
        let from = self.phase();
        self.state = EngineState::default();
        self.operand_request = None;
        self.log_transition("reset", from);
    }

    /// Remove the last character of the current operand.
    pub fn delete_last_char(&mut self) -> Outcome {
        self.operand_request = None;
        let current = &mut self.state.current;
        if current.as_str() == INITIAL_OPERAND {
            return Outcome::Unchanged;
        }
        if current.chars().count() <= 1 {
            *current = INITIAL_OPERAND.to_string();
        } else {
            current.pop();
        }
        Outcome::Updated
    }

    /// Append a digit or decimal point to the current operand.
    ///
    /// Other characters and a second decimal point are ignored. A leading
    /// `0` is replaced rather than extended.
    pub fn append_digit(&mut self, token: char) -> Outcome {
        self.operand_request = None;
        if !(token.is_ascii_digit() || token == '.') {
            trace!(token = %token, "ignored non-digit token");
            return Outcome::Unchanged;
        }

        let from = self.phase();
        let current = &mut self.state.current;
        if token == '.' && current.contains('.') {
            return Outcome::Unchanged;
        }
        if current.as_str() == INITIAL_OPERAND && token != '.' {
            current.clear();
        }
        current.push(token);
        self.log_transition("append_digit", from);
        Outcome::Updated
    }

    /// Select the operator applied between the current operand and the next.
    ///
    /// A pending operation is computed first, so `5 + 3 +` shows `8 +`. If
    /// that computation divides by zero the engine resets and the new
    /// operator is not applied.
    pub fn choose_operator(&mut self, operator: Operator) -> Result<Outcome, CalcError> {
        self.operand_request = None;
        if self.state.current.is_empty() {
            return Ok(Outcome::Unchanged);
        }

        let from = self.phase();
        if self.state.pending.is_some() {
            self.compute_pending()?;
        }

        let operand = std::mem::replace(&mut self.state.current, INITIAL_OPERAND.to_string());
        self.state.pending = Some(PendingOperation { operator, operand });
        self.log_transition("choose_operator", from);
        Ok(Outcome::Updated)
    }

    /// Apply the pending operator to the previous and current operands.
    pub fn compute(&mut self) -> Result<Outcome, CalcError> {
        self.operand_request = None;
        self.compute_pending()
    }

    fn compute_pending(&mut self) -> Result<Outcome, CalcError> {
        let Some(pending) = self.state.pending.as_ref() else {
            return Ok(Outcome::Unchanged);
        };
        let (Ok(lhs), Ok(rhs)) = (
            parse_operand(&pending.operand),
            parse_operand(&self.state.current),
        ) else {
            trace!("operands did not parse, compute skipped");
            return Ok(Outcome::Unchanged);
        };

        let from = self.phase();
        let operator = pending.operator;
        let value = match operator.apply(lhs, rhs) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, lhs, rhs, "compute failed, resetting");
                self.reset();
                return Err(error);
            }
        };

        let result = self.settle(operator.expression(lhs, rhs), value);
        self.state.current = result;
        self.state.pending = None;
        self.log_transition("compute", from);
        Ok(Outcome::Updated)
    }

    // Scientific functions

    /// Apply a scientific function to the current operand.
    ///
    /// Combination and permutation return [`Outcome::AwaitingOperand`]; the
    /// UI then collects `k` and calls [`supply_operand`](Self::supply_operand).
    pub fn apply_scientific_function(
        &mut self,
        function: ScientificFunction,
    ) -> Result<Outcome, CalcError> {
        self.operand_request = None;
        let Ok(value) = parse_operand(&self.state.current) else {
            trace!(function = %function, "operand did not parse, function skipped");
            return Ok(Outcome::Unchanged);
        };

        let from = self.phase();
        let evaluation = function.evaluate(value, self.angle_mode).map_err(|error| {
            warn!(%error, "domain error");
            CalcError::from(error)
        })?;

        match evaluation {
            Evaluation::Value(result) => {
                let result = self.settle(function.expression(value), result);
                self.state.current = result;
                self.log_transition(function.name(), from);
                Ok(Outcome::Updated)
            }
            Evaluation::NeedsOperand(selection) => {
                let request = OperandRequest {
                    selection,
                    n: value,
                };
                self.operand_request = Some(request);
                self.log_transition(function.name(), from);
                Ok(Outcome::AwaitingOperand(request))
            }
        }
    }

    /// Answer an outstanding [`OperandRequest`] with the user's `k`.
    ///
    /// The text is read up to its first non-digit. Missing or non-numeric
    /// input drops the request without changing anything else.
    pub fn supply_operand(&mut self, input: Option<&str>) -> Result<Outcome, CalcError> {
        let Some(request) = self.operand_request.take() else {
            return Ok(Outcome::Unchanged);
        };
        let Some(k) = input.and_then(parse_integer_prefix) else {
            trace!("no usable second operand, request dropped");
            return Ok(Outcome::Unchanged);
        };

        let selection = request.selection;
        let result = selection.apply(request.n, k).map_err(|error| {
            warn!(%error, "domain error");
            CalcError::from(error)
        })?;

        let result = self.settle(selection.expression(request.n, k), result);
        self.state.current = result;
        self.log_transition(selection.function().name(), Phase::AwaitingOperand);
        Ok(Outcome::Updated)
    }

    /// Apply a function, supplying `k` immediately if it needs one.
    pub fn apply_with_operand(
        &mut self,
        function: ScientificFunction,
        k: Option<&str>,
    ) -> Result<Outcome, CalcError> {
        match self.apply_scientific_function(function)? {
            Outcome::AwaitingOperand(_) => self.supply_operand(k),
            outcome => Ok(outcome),
        }
    }

    pub fn insert_constant(&mut self, constant: Constant) -> Outcome {
        self.operand_request = None;
        self.state.current = render_number(constant.value());
        Outcome::Updated
    }

    // History

    /// Put a previous result back into the current operand.
    ///
    /// Empty text is ignored so the current operand is never empty.
    pub fn load_from_history(&mut self, result: &str) -> Outcome {
        self.operand_request = None;
        if result.is_empty() {
            return Outcome::Unchanged;
        }
        self.state.current = result.to_string();
        Outcome::Updated
    }

    /// Load the result of the `index`-th newest history entry.
    pub fn recall(&mut self, index: usize) -> Outcome {
        match self.history.get(index).map(|entry| entry.result.clone()) {
            Some(result) => self.load_from_history(&result),
            None => Outcome::Unchanged,
        }
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // Checkpoints

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::new(self.state.clone(), self.angle_mode, self.history.clone())
    }

    /// Replace the session with the contents of a checkpoint.
    pub fn restore(&mut self, checkpoint: Checkpoint) -> Result<(), CheckpointError> {
        checkpoint.validate()?;

        let mut history = HistoryLog::with_capacity(self.config.history_capacity);
        for entry in checkpoint.history.entries().rev() {
            history.push(entry.clone());
        }

        self.state = checkpoint.state;
        self.angle_mode = checkpoint.angle_mode;
        self.history = history;
        self.operand_request = None;
        debug!(checkpoint = %checkpoint.id, "session restored");
        Ok(())
    }

    /// Round, record in history, and return the result text.
    fn settle(&mut self, expression: String, value: f64) -> String {
        let result = render_number(math::round_to(value, self.config.precision));
        debug!(expression = %expression, result = %result, "calculation recorded");
        self.history.record(expression, result.clone());
        result
    }

    fn log_transition(&self, operation: &str, from: Phase) {
        let to = self.phase();
        if from != to {
            debug!(operation, from = from.name(), to = to.name(), "phase transition");
        }
    }
}
