// SPDX-License-Identifier: MIT OR Apache-2.0

//! Investor enquiry form with a simulated submission.
//!
//! `Editing -> Submitting -> Submitted -> Editing`. The component arms a
//! timer on entering each of the two middle phases; nothing is sent anywhere.

use std::rc::Rc;

use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub investor_type: String,
    pub message: String,
}

impl ContactForm {
    /// Name, email and message are required.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::InvestorType => &self.investor_type,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::InvestorType => &mut self.investor_type,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Company,
    Email,
    Phone,
    InvestorType,
    Message,
}

impl Field {
    /// The `name` attribute of the matching form control.
    pub fn attr(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Company => "company",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::InvestorType => "investorType",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug)]
pub enum ContactAction {
    Edit(Field, String),
    Submit,
    /// The simulated delivery finished.
    Delivered,
    /// The confirmation has been shown long enough; start over.
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub phase: SubmitPhase,
}

impl ContactState {
    pub fn can_submit(&self) -> bool {
        self.phase == SubmitPhase::Editing && self.form.is_complete()
    }

    /// Applies `action`. Actions that do not fit the current phase are
    /// ignored.
    pub fn apply(mut self, action: ContactAction) -> Self {
        match (self.phase, action) {
            (SubmitPhase::Editing, ContactAction::Edit(field, value)) => {
                self.form.set(field, value);
                self
            }
            (SubmitPhase::Editing, ContactAction::Submit) if self.form.is_complete() => {
                log::info!("contact enquiry submitted by {}", self.form.email);
                Self {
                    phase: SubmitPhase::Submitting,
                    ..self
                }
            }
            (SubmitPhase::Submitting, ContactAction::Delivered) => Self {
                phase: SubmitPhase::Submitted,
                ..self
            },
            (SubmitPhase::Submitted, ContactAction::Reset) => Self::default(),
            (phase, action) => {
                log::debug!("ignoring {action:?} while {phase:?}");
                self
            }
        }
    }
}

impl Reducible for ContactState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        [
            (Field::Name, "陈静"),
            (Field::Email, "chen@example.com"),
            (Field::Message, "希望了解A轮细节"),
        ]
        .into_iter()
        .fold(ContactState::default(), |state, (field, value)| {
            state.apply(ContactAction::Edit(field, value.to_string()))
        })
    }

    #[test]
    fn required_fields_gate_submission() {
        let state = ContactState::default()
            .apply(ContactAction::Edit(Field::Name, "陈静".into()))
            .apply(ContactAction::Edit(Field::Company, "某基金".into()));
        assert!(!state.can_submit());

        let state = state.apply(ContactAction::Submit);
        assert_eq!(state.phase, SubmitPhase::Editing);
    }

    #[test]
    fn whitespace_does_not_count_as_filled() {
        let state = filled().apply(ContactAction::Edit(Field::Message, "   ".into()));
        assert!(!state.can_submit());
    }

    #[test]
    fn full_cycle_clears_the_form() {
        let state = filled();
        assert!(state.can_submit());

        let state = state.apply(ContactAction::Submit);
        assert_eq!(state.phase, SubmitPhase::Submitting);
        assert!(!state.can_submit());

        let state = state.apply(ContactAction::Delivered);
        assert_eq!(state.phase, SubmitPhase::Submitted);
        assert_eq!(state.form.get(Field::Name), "陈静");

        let state = state.apply(ContactAction::Reset);
        assert_eq!(state, ContactState::default());
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let state = filled()
            .apply(ContactAction::Submit)
            .apply(ContactAction::Edit(Field::Name, "someone else".into()));
        assert_eq!(state.form.name, "陈静");
    }

    #[test]
    fn out_of_order_timers_are_ignored() {
        let state = filled().apply(ContactAction::Reset);
        assert_eq!(state.phase, SubmitPhase::Editing);
        assert_eq!(state.form, filled().form);

        let state = filled().apply(ContactAction::Delivered);
        assert_eq!(state.phase, SubmitPhase::Editing);
    }
}
