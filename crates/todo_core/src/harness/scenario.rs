//! Scenario model and runner.
//!
//! # Responsibility
//! - Describe a scenario as ordered actions and expectations.
//! - Execute scenarios against any `TodoDriver` and report the first
//!   failing step.
//!
//! # Invariants
//! - Steps run strictly in order; a scenario stops at its first failure.
//! - Every scenario gets a fresh driver from the suite factory.

use crate::harness::driver::{HarnessResult, TodoDriver};
use crate::model::filter::Filter;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

static COUNTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+) items? left$").expect("valid counter regex"));

/// Extracts the remaining count from a counter label.
pub fn parse_remaining_count(label: &str) -> Option<usize> {
    COUNTER_RE
        .captures(label.trim())
        .and_then(|captures| captures.get(1))
        .and_then(|count| count.as_str().parse().ok())
}

/// A user gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Toggle(usize),
    SetAll(bool),
    BeginEdit(usize),
    TypeEdit(String),
    CommitEdit,
    CancelEdit,
    Destroy(usize),
    ClearCompleted,
    SelectFilter(Filter),
    Back,
    Forward,
    Reload,
}

/// An assertion on observable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expectation {
    /// Visible titles, in order.
    Labels(Vec<String>),
    LabelAt { index: usize, title: String },
    ItemCount(usize),
    CompletedAt { index: usize, completed: bool },
    /// Every visible row has the given completion state.
    EveryVisible { completed: bool },
    CounterText(String),
    /// Count parsed from the counter label.
    RemainingCount(usize),
    ClearCompletedVisible(bool),
    ToggleAllChecked(bool),
    SelectedFilter(Filter),
    NewTodoValue(String),
    EditingIndex(Option<usize>),
    PersistedLen(usize),
    PersistedCompleted(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Act(Action),
    Expect(Expectation),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub suite: &'static str,
    pub name: &'static str,
    pub steps: Vec<Step>,
}

impl Scenario {
    pub fn new(suite: &'static str, name: &'static str) -> Self {
        Self {
            suite,
            name,
            steps: Vec::new(),
        }
    }

    /// Adds each title in order, like a suite's per-test setup.
    pub fn given_items(mut self, titles: &[&str]) -> Self {
        for title in titles {
            self = self.act(Action::Add((*title).to_string()));
        }
        self
    }

    pub fn act(mut self, action: Action) -> Self {
        self.steps.push(Step::Act(action));
        self
    }

    pub fn expect(mut self, expectation: Expectation) -> Self {
        self.steps.push(Step::Expect(expectation));
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} > {}", self.suite, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFailure {
    /// Zero-based index into `Scenario::steps`.
    pub step: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    pub name: String,
    pub steps_run: usize,
    pub failure: Option<StepFailure>,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuiteReport {
    pub reports: Vec<ScenarioReport>,
}

impl SuiteReport {
    pub fn passed_count(&self) -> usize {
        self.reports.iter().filter(|report| report.passed()).count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &ScenarioReport> {
        self.reports.iter().filter(|report| !report.passed())
    }

    pub fn is_success(&self) -> bool {
        self.reports.iter().all(ScenarioReport::passed)
    }
}

/// Runs one scenario to completion or first failure.
pub fn run_scenario<D: TodoDriver + ?Sized>(driver: &mut D, scenario: &Scenario) -> ScenarioReport {
    let mut steps_run = 0;
    let mut failure = None;

    for (index, step) in scenario.steps.iter().enumerate() {
        steps_run += 1;
        let result = match step {
            Step::Act(action) => perform(driver, action).map_err(|err| err.to_string()),
            Step::Expect(expectation) => check(driver, expectation),
        };
        if let Err(message) = result {
            failure = Some(StepFailure {
                step: index,
                message,
            });
            break;
        }
    }

    match &failure {
        None => info!(
            "event=scenario_run module=harness status=passed steps={steps_run} scenario=\"{}\"",
            scenario.full_name()
        ),
        Some(failed) => warn!(
            "event=scenario_run module=harness status=failed step={} scenario=\"{}\"",
            failed.step,
            scenario.full_name()
        ),
    }

    ScenarioReport {
        name: scenario.full_name(),
        steps_run,
        failure,
    }
}

/// Runs every scenario against a fresh driver from `make_driver`.
pub fn run_suite<D, F>(scenarios: &[Scenario], mut make_driver: F) -> SuiteReport
where
    D: TodoDriver,
    F: FnMut() -> D,
{
    let reports = scenarios
        .iter()
        .map(|scenario| {
            let mut driver = make_driver();
            run_scenario(&mut driver, scenario)
        })
        .collect();
    SuiteReport { reports }
}

fn perform<D: TodoDriver + ?Sized>(driver: &mut D, action: &Action) -> HarnessResult<()> {
    match action {
        Action::Add(text) => driver.add(text),
        Action::Toggle(index) => driver.toggle_at(*index),
        Action::SetAll(completed) => driver.set_all(*completed),
        Action::BeginEdit(index) => driver.begin_edit_at(*index),
        Action::TypeEdit(text) => driver.type_edit(text),
        Action::CommitEdit => driver.commit_edit(),
        Action::CancelEdit => driver.cancel_edit(),
        Action::Destroy(index) => driver.destroy_at(*index),
        Action::ClearCompleted => driver.clear_completed(),
        Action::SelectFilter(filter) => driver.select_filter(*filter),
        Action::Back => driver.back(),
        Action::Forward => driver.forward(),
        Action::Reload => driver.reload(),
    }
}

fn check<D: TodoDriver + ?Sized>(driver: &D, expectation: &Expectation) -> Result<(), String> {
    let observed = observe(driver, expectation).map_err(|err| err.to_string())?;
    match observed {
        Some(message) => Err(message),
        None => Ok(()),
    }
}

/// Returns `Some(message)` when the expectation does not hold.
fn observe<D: TodoDriver + ?Sized>(
    driver: &D,
    expectation: &Expectation,
) -> HarnessResult<Option<String>> {
    let mismatch = |what: &str, expected: String, actual: String| {
        (expected != actual).then(|| format!("{what}: expected {expected}, got {actual}"))
    };

    let result = match expectation {
        Expectation::Labels(expected) => {
            mismatch("labels", format!("{expected:?}"), format!("{:?}", driver.labels()?))
        }
        Expectation::LabelAt { index, title } => mismatch(
            &format!("label at {index}"),
            format!("{:?}", Some(title)),
            format!("{:?}", driver.labels()?.get(*index)),
        ),
        Expectation::ItemCount(expected) => mismatch(
            "item count",
            expected.to_string(),
            driver.labels()?.len().to_string(),
        ),
        Expectation::CompletedAt { index, completed } => mismatch(
            &format!("completed at {index}"),
            format!("{:?}", Some(completed)),
            format!("{:?}", driver.completed_flags()?.get(*index)),
        ),
        Expectation::EveryVisible { completed } => {
            let flags = driver.completed_flags()?;
            flags
                .iter()
                .position(|flag| flag != completed)
                .map(|index| format!("row {index}: expected completed={completed}"))
        }
        Expectation::CounterText(expected) => mismatch(
            "counter",
            format!("{:?}", Some(expected)),
            format!("{:?}", driver.counter_text()?),
        ),
        Expectation::RemainingCount(expected) => {
            let label = driver.counter_text()?;
            let parsed = label.as_deref().and_then(parse_remaining_count);
            mismatch(
                "remaining count",
                format!("{:?}", Some(expected)),
                format!("{parsed:?}"),
            )
        }
        Expectation::ClearCompletedVisible(expected) => mismatch(
            "clear completed visible",
            expected.to_string(),
            driver.clear_completed_visible()?.to_string(),
        ),
        Expectation::ToggleAllChecked(expected) => mismatch(
            "toggle all checked",
            expected.to_string(),
            driver.toggle_all_checked()?.to_string(),
        ),
        Expectation::SelectedFilter(expected) => mismatch(
            "selected filter",
            expected.to_string(),
            driver.selected_filter()?.to_string(),
        ),
        Expectation::NewTodoValue(expected) => mismatch(
            "new todo value",
            format!("{expected:?}"),
            format!("{:?}", driver.new_todo_value()?),
        ),
        Expectation::EditingIndex(expected) => mismatch(
            "editing index",
            format!("{expected:?}"),
            format!("{:?}", driver.editing_index()?),
        ),
        Expectation::PersistedLen(expected) => mismatch(
            "persisted length",
            expected.to_string(),
            driver.persisted_items()?.len().to_string(),
        ),
        Expectation::PersistedCompleted(expected) => mismatch(
            "persisted completed",
            expected.to_string(),
            driver
                .persisted_items()?
                .iter()
                .filter(|item| item.completed)
                .count()
                .to_string(),
        ),
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{parse_remaining_count, run_scenario, Action, Expectation, Scenario};
    use crate::harness::model_driver::ModelDriver;

    #[test]
    fn counter_regex_accepts_both_plural_forms() {
        assert_eq!(parse_remaining_count("1 item left"), Some(1));
        assert_eq!(parse_remaining_count("12 items left"), Some(12));
        assert_eq!(parse_remaining_count("items left"), None);
    }

    #[test]
    fn runner_stops_at_first_failed_expectation() {
        let scenario = Scenario::new("runner", "stops early")
            .given_items(&["a"])
            .expect(Expectation::ItemCount(2))
            .act(Action::Add("b".to_string()))
            .expect(Expectation::ItemCount(2));

        let mut driver = ModelDriver::in_memory("todos");
        let report = run_scenario(&mut driver, &scenario);

        let failure = report.failure.expect("scenario should fail");
        assert_eq!(failure.step, 1);
        assert!(failure.message.contains("item count"), "{}", failure.message);
        assert_eq!(report.steps_run, 2);
    }

    #[test]
    fn driver_errors_fail_the_step() {
        let scenario = Scenario::new("runner", "bad index").act(Action::Toggle(3));
        let mut driver = ModelDriver::in_memory("todos");
        let report = run_scenario(&mut driver, &scenario);
        assert_eq!(report.failure.map(|failure| failure.step), Some(0));
    }
}
