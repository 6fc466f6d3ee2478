//! In-memory stand-ins for the remote and the gate.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use triage_github::{ChangedFile, Comparison, Error, Issue, Label, PullRequest, Result};

use crate::gate::Gate;
use crate::remote::Remote;

#[derive(Default)]
struct State {
    issues: Vec<Issue>,
    pull_requests: Vec<(PullRequest, Vec<u64>)>,
    labels: BTreeMap<u64, Vec<String>>,
    compare_failures: HashMap<u64, Error>,
    mutation_failures: HashMap<u64, Error>,
    mutations: Vec<String>,
}

/// A repository held in memory. Label changes are visible to later listings.
#[derive(Default)]
pub struct FakeRemote {
    state: Mutex<State>,
}

impl FakeRemote {
    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub fn with_issues(self, issues: Vec<Issue>) -> Self {
        {
            let mut state = self.state();
            for issue in &issues {
                state.labels.insert(
                    issue.number,
                    issue.labels.iter().map(|l| l.name.clone()).collect(),
                );
            }
            state.issues.extend(issues);
        }
        self
    }

    /// Add an open PR whose head is `pr-<number>` and whose diff touches one
    /// file per entry in `changes`.
    pub fn with_pull_request(self, number: u64, labels: &[&str], changes: &[u64]) -> Self {
        {
            let mut state = self.state();
            state
                .labels
                .insert(number, labels.iter().map(ToString::to_string).collect());
            state.pull_requests.push((
                PullRequest {
                    number,
                    title: format!("PR {number}"),
                    labels: Vec::new(),
                    head_ref: format!("pr-{number}"),
                    base_ref: "main".to_string(),
                },
                changes.to_vec(),
            ));
        }
        self
    }

    pub fn failing_compare(self, number: u64, error: Error) -> Self {
        self.state().compare_failures.insert(number, error);
        self
    }

    pub fn failing_mutation(self, number: u64, error: Error) -> Self {
        self.state().mutation_failures.insert(number, error);
        self
    }

    pub fn labels_of(&self, number: u64) -> Vec<String> {
        self.state().labels.get(&number).cloned().unwrap_or_default()
    }

    /// Successful mutations, as `"<add|remove> <label> #<number>"`.
    pub fn mutations(&self) -> Vec<String> {
        self.state().mutations.clone()
    }

    fn current_labels(state: &State, number: u64) -> Vec<Label> {
        state
            .labels
            .get(&number)
            .map(|names| names.iter().map(Label::new).collect())
            .unwrap_or_default()
    }

    fn mutate(&self, number: u64, label: &str, add: bool) -> Result<()> {
        let mut state = self.state();
        if let Some(error) = state.mutation_failures.remove(&number) {
            return Err(error);
        }

        let labels = state.labels.entry(number).or_default();
        if add {
            if !labels.iter().any(|l| l == label) {
                labels.push(label.to_string());
            }
        } else {
            labels.retain(|l| l != label);
        }

        let verb = if add { "add" } else { "remove" };
        state.mutations.push(format!("{verb} {label} #{number}"));
        Ok(())
    }
}

#[async_trait]
impl Remote for FakeRemote {
    async fn list_issues(&self, _owner: &str, _repo: &str) -> Result<Vec<Issue>> {
        let state = self.state();
        Ok(state
            .issues
            .iter()
            .map(|issue| Issue {
                labels: Self::current_labels(&state, issue.number),
                ..issue.clone()
            })
            .collect())
    }

    async fn list_pull_requests(&self, _owner: &str, _repo: &str) -> Result<Vec<PullRequest>> {
        let state = self.state();
        Ok(state
            .pull_requests
            .iter()
            .map(|(pr, _)| PullRequest {
                labels: Self::current_labels(&state, pr.number),
                ..pr.clone()
            })
            .collect())
    }

    async fn compare(
        &self,
        _owner: &str,
        _repo: &str,
        _base: &str,
        head: &str,
    ) -> Result<Comparison> {
        let mut state = self.state();
        let Some((pr, changes)) = state
            .pull_requests
            .iter()
            .find(|(pr, _)| pr.head_ref == head)
            .cloned()
        else {
            return Err(Error::ApiError {
                status: 404,
                message: format!("unknown ref {head}"),
            });
        };

        if let Some(error) = state.compare_failures.remove(&pr.number) {
            return Err(error);
        }

        Ok(Comparison {
            files: changes
                .iter()
                .enumerate()
                .map(|(i, &changes)| ChangedFile {
                    filename: format!("src/file{i}.rs"),
                    changes,
                })
                .collect(),
        })
    }

    async fn add_label(&self, _owner: &str, _repo: &str, number: u64, label: &str) -> Result<()> {
        self.mutate(number, label, true)
    }

    async fn remove_label(
        &self,
        _owner: &str,
        _repo: &str,
        number: u64,
        label: &str,
    ) -> Result<()> {
        self.mutate(number, label, false)
    }
}

/// Answers every question the same way.
#[derive(Debug, Clone, Copy)]
pub struct FixedGate(pub bool);

impl Gate for FixedGate {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Answers from a script, then "no" once the script runs out.
pub struct ScriptedGate {
    answers: RefCell<VecDeque<bool>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedGate {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    /// Every question asked so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl Gate for ScriptedGate {
    fn confirm(&self, message: &str) -> bool {
        self.asked.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}
