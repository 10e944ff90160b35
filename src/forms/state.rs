//! Per-form field state with change notification

use std::collections::{HashMap, HashSet};

use tokio::sync::watch;

use super::node::{FormNode, form_data_object};

/// Value held by a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    Text(String),
    List(Vec<String>),
}

impl FormValue {
    /// First textual value, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FormValue::Text(value) => Some(value),
            FormValue::List(values) => values.first().map(String::as_str),
        }
    }
}

impl Default for FormValue {
    fn default() -> Self {
        FormValue::Text(String::new())
    }
}

impl From<&str> for FormValue {
    fn from(value: &str) -> Self {
        FormValue::Text(value.to_string())
    }
}

impl From<String> for FormValue {
    fn from(value: String) -> Self {
        FormValue::Text(value)
    }
}

impl From<Vec<String>> for FormValue {
    fn from(values: Vec<String>) -> Self {
        FormValue::List(values)
    }
}

/// Point-in-time view of every field in a form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    order: Vec<String>,
    values: HashMap<String, FormValue>,
    initial_values: HashMap<String, FormValue>,
    errors: HashMap<String, Option<String>>,
}

impl FormSnapshot {
    pub fn value(&self, name: &str) -> Option<&FormValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        self.value(name).and_then(FormValue::as_text).unwrap_or("")
    }

    pub fn initial_value(&self, name: &str) -> Option<&FormValue> {
        self.initial_values.get(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).and_then(|e| e.as_deref())
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(Option::is_some)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
            || self.initial_values.contains_key(name)
            || self.errors.contains_key(name)
    }

    fn track(&mut self, name: &str) {
        if !self.order.iter().any(|n| n == name) {
            self.order.push(name.to_string());
        }
    }

    fn untrack(&mut self, name: &str) {
        self.order.retain(|n| n != name);
    }
}

/// Mutable state for one form, owned for the form's lifetime.
///
/// Every mutation publishes a fresh [`FormSnapshot`] to subscribers.
#[derive(Debug)]
pub struct FormStore {
    id: String,
    state: FormSnapshot,
    /// Raw pairs of the last submission, in the order they were sent
    submitted: Vec<(String, String)>,
    sender: watch::Sender<FormSnapshot>,
}

impl FormStore {
    pub fn new(id: impl Into<String>) -> Self {
        let (sender, _) = watch::channel(FormSnapshot::default());
        Self {
            id: id.into(),
            state: FormSnapshot::default(),
            submitted: Vec::new(),
            sender,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn snapshot(&self) -> &FormSnapshot {
        &self.state
    }

    pub fn subscribe(&self) -> watch::Receiver<FormSnapshot> {
        self.sender.subscribe()
    }

    /// Register a field. Existing value, initial value and error entries are
    /// left as they are.
    pub fn add_field(
        &mut self,
        name: &str,
        default_value: impl Into<FormValue>,
        initial_value: impl Into<FormValue>,
    ) {
        self.state.track(name);
        self.state
            .values
            .entry(name.to_string())
            .or_insert_with(|| default_value.into());
        self.state
            .initial_values
            .entry(name.to_string())
            .or_insert_with(|| initial_value.into());
        self.state.errors.entry(name.to_string()).or_insert(None);
        self.publish();
    }

    pub fn change_value(&mut self, name: &str, value: impl Into<FormValue>) {
        self.forget_submitted(name);
        self.state.track(name);
        self.state.values.insert(name.to_string(), value.into());
        self.publish();
    }

    pub fn delete_value(&mut self, name: &str) {
        self.forget_submitted(name);
        self.state.untrack(name);
        self.state.values.remove(name);
        self.state.initial_values.remove(name);
        self.state.errors.remove(name);
        self.publish();
    }

    /// Restore one field to its initial value and clear its error
    pub fn reset_value(&mut self, name: &str) {
        if !self.state.values.contains_key(name) {
            return;
        }
        self.forget_submitted(name);
        match self.state.initial_values.get(name).cloned() {
            Some(initial) => {
                self.state.values.insert(name.to_string(), initial);
            }
            None => {
                self.state.values.remove(name);
            }
        }
        self.state.errors.insert(name.to_string(), None);
        self.publish();
    }

    pub fn reset_values(&mut self) {
        self.submitted.clear();
        for (name, initial) in &self.state.initial_values {
            self.state.values.insert(name.clone(), initial.clone());
        }
        for error in self.state.errors.values_mut() {
            *error = None;
        }
        self.publish();
    }

    pub fn set_error(&mut self, name: &str, message: impl Into<String>) {
        self.state.track(name);
        self.state
            .errors
            .insert(name.to_string(), Some(message.into()));
        self.publish();
    }

    /// Take a browser submission. Each named field gets the submitted
    /// value, repeated names becoming a list. The pairs themselves are kept
    /// so [`entries`](Self::entries) replays them in the order they were sent.
    pub fn apply_submission<I, K, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect();

        let mut grouped: HashMap<&str, Vec<String>> = HashMap::new();
        for (name, value) in &pairs {
            grouped.entry(name.as_str()).or_default().push(value.clone());
        }
        for (name, _) in &pairs {
            if let Some(mut values) = grouped.remove(name.as_str()) {
                let value = if values.len() == 1 {
                    FormValue::Text(values.remove(0))
                } else {
                    FormValue::List(values)
                };
                self.state.track(name);
                self.state.values.insert(name.clone(), value);
            }
        }
        drop(grouped);

        self.submitted = pairs;
        self.publish();
    }

    /// `(name, value)` pairs to fold: fields the last submission did not
    /// carry in declaration order, one pair per list item, then the
    /// submitted pairs in the order they were sent.
    pub fn entries(&self) -> Vec<(String, String)> {
        let sent: HashSet<&str> = self.submitted.iter().map(|(n, _)| n.as_str()).collect();
        let mut entries = Vec::new();
        for name in self.state.order.iter().filter(|n| !sent.contains(n.as_str())) {
            match self.state.values.get(name) {
                Some(FormValue::Text(value)) => entries.push((name.clone(), value.clone())),
                Some(FormValue::List(values)) => {
                    entries.extend(values.iter().map(|v| (name.clone(), v.clone())))
                }
                None => {}
            }
        }
        entries.extend(self.submitted.iter().cloned());
        entries
    }

    /// Fold the current values into a nested tree
    pub fn submit(&self) -> FormNode {
        form_data_object(self.entries())
    }

    fn forget_submitted(&mut self, name: &str) {
        self.submitted.retain(|(n, _)| n != name);
    }

    fn publish(&self) {
        self.sender.send_replace(self.state.clone());
    }
}
