use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::clipboard::copy_to_clipboard_with_callback;

const SEND_DELAY_MS: u32 = 1_500;
const SENT_NOTICE_MS: u32 = 3_000;
const COPIED_NOTICE_MS: u32 = 2_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Please enter your name");
        }
        if !looks_like_email(self.email.trim()) {
            return Err("Please enter a valid email address");
        }
        if self.subject.trim().is_empty() {
            return Err("Please enter a subject");
        }
        if self.message.trim().is_empty() {
            return Err("Please enter a message");
        }
        Ok(())
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
}

impl SubmitStatus {
    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Sending => "Sending...",
            SubmitStatus::Sent => "Message Sent!",
        }
    }
}

/// ViewModel for the contact page
#[derive(Clone, Copy)]
pub struct ContactViewModel {
    pub form: RwSignal<ContactForm>,
    pub status: RwSignal<SubmitStatus>,
    pub error: RwSignal<Option<&'static str>>,
    /// Title of the channel whose value was just copied.
    pub copied: RwSignal<Option<&'static str>>,
}

impl ContactViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ContactForm::default()),
            status: RwSignal::new(SubmitStatus::Idle),
            error: RwSignal::new(None),
            copied: RwSignal::new(None),
        }
    }

    /// There is no delivery backend; the send is simulated.
    pub fn submit_command(&self) {
        if self.status.get_untracked() == SubmitStatus::Sending {
            return;
        }
        if let Err(msg) = self.form.with_untracked(ContactForm::validate) {
            self.error.set(Some(msg));
            return;
        }

        self.error.set(None);
        self.status.set(SubmitStatus::Sending);

        let form = self.form;
        let status = self.status;
        spawn_local(async move {
            TimeoutFuture::new(SEND_DELAY_MS).await;
            form.try_set(ContactForm::default());
            if status.try_set(SubmitStatus::Sent).is_some() {
                return;
            }
            log::info!("contact message sent");

            TimeoutFuture::new(SENT_NOTICE_MS).await;
            status.try_update(|s| {
                if *s == SubmitStatus::Sent {
                    *s = SubmitStatus::Idle;
                }
            });
        });
    }

    pub fn copy_command(&self, title: &'static str, value: &str) {
        let copied = self.copied;
        copy_to_clipboard_with_callback(value, move || {
            copied.try_set(Some(title));
            spawn_local(async move {
                TimeoutFuture::new(COPIED_NOTICE_MS).await;
                copied.try_update(|c| {
                    if *c == Some(title) {
                        *c = None;
                    }
                });
            });
        });
    }
}

impl Default for ContactViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana".into(),
            email: "ana@example.my".into(),
            subject: "Group visit".into(),
            message: "Do you offer school rates?".into(),
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_blank_fields_are_rejected() {
        let form = ContactForm {
            name: "   ".into(),
            ..filled()
        };
        assert_eq!(form.validate(), Err("Please enter your name"));

        let form = ContactForm {
            message: String::new(),
            ..filled()
        };
        assert_eq!(form.validate(), Err("Please enter a message"));
    }

    #[test]
    fn test_email_shape() {
        assert!(looks_like_email("info@dinosaurencounter.my"));
        assert!(!looks_like_email("info.dinosaurencounter.my"));
        assert!(!looks_like_email("@dinosaurencounter.my"));
        assert!(!looks_like_email("info@localhost"));
        assert!(!looks_like_email("info@site."));
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(SubmitStatus::default().button_label(), "Send Message");
        assert_eq!(SubmitStatus::Sending.button_label(), "Sending...");
        assert_eq!(SubmitStatus::Sent.button_label(), "Message Sent!");
    }
}
