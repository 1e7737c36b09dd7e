//! The report tree checkers assemble their findings into.

use std::fmt::{self, Display};

/// Outcome of a single scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every expectation in the scenario held.
    Passed,
    /// An expectation failed; the message carries the first counterexample.
    Failed(String),
}

impl Verdict {
    /// Whether this verdict is [`Verdict::Passed`].
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// A named check together with its verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scenario {
    description: String,
    verdict: Verdict,
}

impl Scenario {
    /// Runs `body` immediately and records its outcome under `description`.
    #[must_use]
    pub fn run(description: impl Into<String>, body: impl FnOnce() -> Result<(), String>) -> Self {
        let verdict = match body() {
            Ok(()) => Verdict::Passed,
            Err(message) => Verdict::Failed(message),
        };
        Self {
            description: description.into(),
            verdict,
        }
    }

    /// The scenario description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The recorded verdict.
    #[must_use]
    pub const fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Whether the scenario passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.verdict.passed()
    }

    /// The failure message, when there is one.
    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match &self.verdict {
            Verdict::Passed => None,
            Verdict::Failed(message) => Some(message),
        }
    }
}

impl Display for Scenario {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            Verdict::Passed => write!(formatter, "ok {}", self.description),
            Verdict::Failed(message) => {
                write!(formatter, "FAILED {}: {message}", self.description)
            }
        }
    }
}

/// A named node in the report tree.
///
/// Nested suites render before the suite's own scenarios, matching the
/// order checkers assemble them in: the stronger structure records its law
/// after the weaker structure's suite it embeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawSuite {
    name: String,
    nested: Vec<LawSuite>,
    scenarios: Vec<Scenario>,
}

impl LawSuite {
    /// Creates an empty suite named `name`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nested: Vec::new(),
            scenarios: Vec::new(),
        }
    }

    /// Appends a scenario to this suite.
    pub fn record(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    /// Nests a child suite under this one.
    pub fn nest(&mut self, suite: Self) {
        self.nested.push(suite);
    }

    /// The suite name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scenarios recorded directly on this suite.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Suites nested under this one.
    #[must_use]
    pub fn nested(&self) -> &[Self] {
        &self.nested
    }

    /// Whether every scenario in this suite and all nested suites passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.nested.iter().all(Self::passed) && self.scenarios.iter().all(Scenario::passed)
    }

    /// Total number of scenarios in this suite, nested suites included.
    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
            + self
                .nested
                .iter()
                .map(Self::scenario_count)
                .sum::<usize>()
    }

    fn render(&self, formatter: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        writeln!(formatter, "{indent}{}", self.name)?;
        for suite in &self.nested {
            suite.render(formatter, depth + 1)?;
        }
        for scenario in &self.scenarios {
            writeln!(formatter, "{indent}  {scenario}")?;
        }
        Ok(())
    }
}

impl Display for LawSuite {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(formatter, 0)
    }
}

/// Ordered top-level sections produced by one checker invocation.
///
/// The contract-confirmation suite (when this run was the type's first)
/// comes before the structure suite.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    sections: Vec<LawSuite>,
}

impl Report {
    /// Wraps pre-assembled sections into a report.
    #[must_use]
    pub const fn from_sections(sections: Vec<LawSuite>) -> Self {
        Self { sections }
    }

    /// The top-level sections in assembly order.
    #[must_use]
    pub fn sections(&self) -> &[LawSuite] {
        &self.sections
    }

    /// Whether every scenario in every section passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.sections.iter().all(LawSuite::passed)
    }

    /// Total number of scenarios across all sections.
    #[must_use]
    pub fn scenario_count(&self) -> usize {
        self.sections.iter().map(LawSuite::scenario_count).sum()
    }
}

impl Display for Report {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            section.render(formatter, 0)?;
        }
        Ok(())
    }
}
