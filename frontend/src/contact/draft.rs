//! In-progress contact form state.
//!
//! Every edit is mirrored to storage under `contact_<field>` so a reload
//! brings the draft back. The stored values are removed only after a
//! successful submit.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::contact::validation::{validate_field, FieldError, FieldKind};
use crate::storage::KeyValueStore;

pub const STORAGE_PREFIX: &str = "contact_";
pub const PLATFORM_FIELD: &str = "platform";
pub const NEWSLETTER_FIELD: &str = "newsletter";

pub const NO_PLATFORM_MESSAGE: &str = "Please select at least one platform";
pub const INVALID_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you within 24 hours.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub const FIELDS: &[FieldSpec] = &[
    FieldSpec { name: "name", kind: FieldKind::Text, required: true },
    FieldSpec { name: "email", kind: FieldKind::Email, required: true },
    FieldSpec { name: "phone", kind: FieldKind::Tel, required: false },
    FieldSpec { name: "company", kind: FieldKind::Text, required: false },
    FieldSpec { name: "projectType", kind: FieldKind::Text, required: true },
    FieldSpec { name: "budget", kind: FieldKind::Text, required: false },
    FieldSpec { name: "timeline", kind: FieldKind::Text, required: false },
    FieldSpec { name: "message", kind: FieldKind::Text, required: true },
];

pub const PLATFORMS: &[(&str, &str)] = &[
    ("ios", "iOS"),
    ("android", "Android"),
    ("cross-platform", "Cross-platform"),
    ("web", "Web app"),
];

pub const PROJECT_TYPES: &[(&str, &str)] = &[
    ("new-app", "New App Development"),
    ("app-update", "App Update / Redesign"),
    ("app-support", "Maintenance & Support"),
    ("consulting", "Consulting"),
];

pub const TIMELINES: &[(&str, &str)] = &[
    ("asap", "As soon as possible"),
    ("1-3-months", "1-3 months"),
    ("3-6-months", "3-6 months"),
    ("flexible", "Flexible"),
];

const ALL_BUDGETS: &[(&str, &str)] = &[
    ("under-5k", "Under $5,000"),
    ("5k-15k", "$5,000 - $15,000"),
    ("15k-30k", "$15,000 - $30,000"),
    ("30k-50k", "$30,000 - $50,000"),
    ("over-50k", "Over $50,000"),
];

/// Budget ranges offered for a project type. Unknown or empty types
/// offer every range.
pub fn budget_options(project_type: &str) -> &'static [(&'static str, &'static str)] {
    match project_type {
        "new-app" => &[
            ("5k-15k", "$5,000 - $15,000"),
            ("15k-30k", "$15,000 - $30,000"),
            ("30k-50k", "$30,000 - $50,000"),
            ("over-50k", "Over $50,000"),
        ],
        "app-update" => &[
            ("under-5k", "Under $5,000"),
            ("5k-15k", "$5,000 - $15,000"),
            ("15k-30k", "$15,000 - $30,000"),
        ],
        "app-support" | "consulting" => &[
            ("under-5k", "Under $5,000"),
            ("5k-15k", "$5,000 - $15,000"),
        ],
        _ => ALL_BUDGETS,
    }
}

pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name == name)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    Invalid {
        fields: BTreeMap<&'static str, FieldError>,
        missing_platform: bool,
    },
}

impl SubmitError {
    pub fn user_message(&self) -> &'static str {
        match self {
            SubmitError::Invalid { missing_platform: true, .. } => NO_PLATFORM_MESSAGE,
            SubmitError::Invalid { .. } => INVALID_FIELDS_MESSAGE,
        }
    }
}

pub struct ContactDraft<S: KeyValueStore> {
    values: BTreeMap<&'static str, String>,
    platforms: Vec<String>,
    newsletter: bool,
    errors: BTreeMap<&'static str, FieldError>,
    store: S,
}

impl<S: KeyValueStore> ContactDraft<S> {
    /// Rehydrates whatever the visitor typed before the last reload.
    pub fn load(store: S) -> Self {
        let values: BTreeMap<_, _> = FIELDS
            .iter()
            .filter_map(|spec| {
                store
                    .get(&storage_key(spec.name))
                    .map(|value| (spec.name, value))
            })
            .collect();
        let platforms = store
            .get(&storage_key(PLATFORM_FIELD))
            .map(|raw| {
                raw.split(',')
                    .filter(|p| PLATFORMS.iter().any(|(value, _)| value == p))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let newsletter = store
            .get(&storage_key(NEWSLETTER_FIELD))
            .map_or(false, |raw| raw == "true");
        debug!("Contact draft restored with {} fields", values.len());
        Self {
            values,
            platforms,
            newsletter,
            errors: BTreeMap::new(),
            store,
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map_or("", String::as_str)
    }

    pub fn error(&self, field: &str) -> Option<FieldError> {
        self.errors.get(field).copied()
    }

    /// Filled in and not currently flagged.
    pub fn is_valid(&self, field: &str) -> bool {
        self.values.contains_key(field) && !self.errors.contains_key(field)
    }

    pub fn has_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }

    #[cfg(test)]
    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    pub fn newsletter(&self) -> bool {
        self.newsletter
    }

    /// Stores an edit. A field already marked invalid is re-checked so the
    /// error clears as soon as the input is fixed.
    pub fn set_value(&mut self, field: &str, value: String) {
        let Some(spec) = field_spec(field) else {
            warn!("Ignoring edit to unknown contact field {}", field);
            return;
        };
        self.persist(spec.name, &value);
        self.values.insert(spec.name, value);
        if spec.name == "projectType" {
            self.drop_unoffered_budget();
        }
        if self.errors.contains_key(spec.name) {
            let _ = self.validate(spec.name);
        }
    }

    /// Blur handler.
    pub fn validate(&mut self, field: &str) -> Result<(), FieldError> {
        let Some(spec) = field_spec(field) else {
            return Ok(());
        };
        let result = validate_field(spec.kind, spec.required, self.value(spec.name));
        match result {
            Ok(()) => {
                self.errors.remove(spec.name);
            }
            Err(e) => {
                self.errors.insert(spec.name, e);
            }
        }
        result
    }

    pub fn toggle_platform(&mut self, platform: &str, checked: bool) {
        self.platforms.retain(|p| p != platform);
        if checked {
            self.platforms.push(platform.to_string());
        }
        let joined = self.platforms.join(",");
        self.persist(PLATFORM_FIELD, &joined);
    }

    pub fn set_newsletter(&mut self, checked: bool) {
        self.newsletter = checked;
        self.persist(NEWSLETTER_FIELD, if checked { "true" } else { "false" });
    }

    /// Validates everything. Nothing is cleared here; call `reset` once the
    /// submission went through.
    pub fn check_submission(&mut self) -> Result<(), SubmitError> {
        for spec in FIELDS {
            let _ = self.validate(spec.name);
        }
        let missing_platform = self.platforms.is_empty();
        if self.errors.is_empty() && !missing_platform {
            Ok(())
        } else {
            Err(SubmitError::Invalid {
                fields: self.errors.clone(),
                missing_platform,
            })
        }
    }

    /// Empties the form and every stored value.
    pub fn reset(&mut self) {
        self.values.clear();
        self.platforms.clear();
        self.newsletter = false;
        self.errors.clear();
        for spec in FIELDS {
            self.store.remove(&storage_key(spec.name));
        }
        self.store.remove(&storage_key(PLATFORM_FIELD));
        self.store.remove(&storage_key(NEWSLETTER_FIELD));
    }

    fn drop_unoffered_budget(&mut self) {
        let offered = budget_options(self.value("projectType"));
        let budget = self.value("budget");
        if !budget.is_empty() && !offered.iter().any(|(value, _)| *value == budget) {
            self.values.remove("budget");
            self.store.remove(&storage_key("budget"));
        }
    }

    fn persist(&self, field: &str, value: &str) {
        if let Err(e) = self.store.set(&storage_key(field), value) {
            warn!("Contact draft not saved: {}", e);
        }
    }
}

pub fn storage_key(field: &str) -> String {
    format!("{}{}", STORAGE_PREFIX, field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn fill_required(draft: &mut ContactDraft<MemoryStore>) {
        draft.set_value("name", "Ada Lovelace".to_string());
        draft.set_value("email", "ada@example.com".to_string());
        draft.set_value("projectType", "new-app".to_string());
        draft.set_value("message", "I need an app".to_string());
    }

    #[test]
    fn reload_restores_exact_values() {
        let store = MemoryStore::default();
        {
            let mut draft = ContactDraft::load(store.clone());
            draft.set_value("name", "  Ada ".to_string());
            draft.set_value("phone", "+1 555 0100".to_string());
            draft.toggle_platform("ios", true);
            draft.toggle_platform("web", true);
            draft.set_newsletter(true);
        }

        let draft = ContactDraft::load(store);
        assert_eq!(draft.value("name"), "  Ada ");
        assert_eq!(draft.value("phone"), "+1 555 0100");
        assert!(draft.has_platform("ios"));
        assert!(draft.has_platform("web"));
        assert!(!draft.has_platform("android"));
        assert!(draft.newsletter());
    }

    #[test]
    fn values_are_stored_under_prefixed_keys() {
        let store = MemoryStore::default();
        let mut draft = ContactDraft::load(store.clone());
        draft.set_value("email", "a@b.co".to_string());
        draft.toggle_platform("android", true);

        assert_eq!(store.get("contact_email").as_deref(), Some("a@b.co"));
        assert_eq!(store.get("contact_platform").as_deref(), Some("android"));
    }

    #[test]
    fn valid_submission_then_reset_clears_storage() {
        let store = MemoryStore::default();
        let mut draft = ContactDraft::load(store.clone());
        fill_required(&mut draft);
        draft.toggle_platform("ios", true);

        assert_eq!(draft.check_submission(), Ok(()));
        draft.reset();

        assert_eq!(store.len(), 0);
        assert_eq!(draft.value("name"), "");
        assert!(draft.platforms().is_empty());
        let reloaded = ContactDraft::load(store);
        assert_eq!(reloaded.value("email"), "");
    }

    #[test]
    fn missing_platform_blocks_and_keeps_storage() {
        let store = MemoryStore::default();
        let mut draft = ContactDraft::load(store.clone());
        fill_required(&mut draft);
        let stored_before = store.len();

        let err = draft.check_submission().unwrap_err();
        assert_eq!(err.user_message(), NO_PLATFORM_MESSAGE);
        assert_eq!(store.len(), stored_before);
        assert_eq!(store.get("contact_name").as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn invalid_fields_are_marked() {
        let mut draft = ContactDraft::load(MemoryStore::default());
        draft.set_value("email", "not-an-email".to_string());
        draft.toggle_platform("ios", true);

        let SubmitError::Invalid { fields, missing_platform } =
            draft.check_submission().unwrap_err();
        assert!(!missing_platform);
        assert_eq!(fields.get("email"), Some(&FieldError::InvalidEmail));
        assert_eq!(fields.get("name"), Some(&FieldError::Required));
        assert_eq!(draft.error("message"), Some(FieldError::Required));
        assert_eq!(fields.get("phone"), None);
    }

    #[test]
    fn errors_clear_on_input_once_fixed() {
        let mut draft = ContactDraft::load(MemoryStore::default());
        assert_eq!(draft.validate("email"), Err(FieldError::Required));

        draft.set_value("email", "ada@".to_string());
        assert_eq!(draft.error("email"), Some(FieldError::InvalidEmail));

        draft.set_value("email", "ada@example.com".to_string());
        assert_eq!(draft.error("email"), None);
        assert!(draft.is_valid("email"));
    }

    #[test]
    fn untouched_fields_are_not_validated_on_input() {
        let mut draft = ContactDraft::load(MemoryStore::default());
        draft.set_value("email", "ada@".to_string());
        assert_eq!(draft.error("email"), None);
    }

    #[test]
    fn changing_project_type_drops_unoffered_budget() {
        let store = MemoryStore::default();
        let mut draft = ContactDraft::load(store.clone());
        draft.set_value("projectType", "app-update".to_string());
        draft.set_value("budget", "under-5k".to_string());

        draft.set_value("projectType", "new-app".to_string());
        assert_eq!(draft.value("budget"), "");
        assert_eq!(store.get("contact_budget"), None);

        draft.set_value("budget", "15k-30k".to_string());
        draft.set_value("projectType", "app-update".to_string());
        assert_eq!(draft.value("budget"), "15k-30k");
    }

    #[test]
    fn budget_table() {
        assert_eq!(budget_options("new-app").len(), 4);
        assert_eq!(budget_options("app-update").len(), 3);
        assert_eq!(budget_options("consulting").len(), 2);
        assert_eq!(budget_options("").len(), 5);
    }

    #[test]
    fn unticking_a_platform_removes_it() {
        let mut draft = ContactDraft::load(MemoryStore::default());
        draft.toggle_platform("ios", true);
        draft.toggle_platform("ios", true);
        assert_eq!(draft.platforms(), &["ios".to_string()]);
        draft.toggle_platform("ios", false);
        assert!(draft.platforms().is_empty());
    }
}
