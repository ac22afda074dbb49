#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use pere_noel::mailer::{deliver_all, Mailer};
use pere_noel::notification::Message;

/// Mailer de test : garde une trace des envois et échoue à partir d'un
/// rang donné.
struct FlakyMailer {
    sent: Vec<String>,
    fail_from: usize,
}

impl FlakyMailer {
    fn new(fail_from: usize) -> Self {
        Self {
            sent: Vec::new(),
            fail_from,
        }
    }
}

impl Mailer for FlakyMailer {
    fn send(&mut self, message: &Message) -> Result<()> {
        if self.sent.len() >= self.fail_from {
            bail!("connection lost");
        }
        self.sent.push(message.recipient.clone());
        Ok(())
    }
}

fn messages(names: &[&str]) -> Vec<Message> {
    names
        .iter()
        .map(|n| Message {
            recipient: n.to_string(),
            email: format!("{}@exemple.fr", n.to_lowercase()),
            subject: "test".to_string(),
            body: "test".to_string(),
        })
        .collect()
}

#[test]
fn all_messages_delivered_in_order() {
    let mut mailer = FlakyMailer::new(usize::MAX);
    let notified = deliver_all(&mut mailer, &messages(&["Alice", "Bob", "Carol"])).unwrap();

    assert_eq!(notified, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(mailer.sent, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn first_failure_aborts_the_rest() {
    let mut mailer = FlakyMailer::new(1);
    let err = deliver_all(&mut mailer, &messages(&["Alice", "Bob", "Carol"])).unwrap_err();

    assert_eq!(err.notified, vec!["Alice"]);
    assert_eq!(err.pending, vec!["Bob", "Carol"]);
    assert_eq!(mailer.sent, vec!["Alice"]);
    assert!(err.to_string().contains("1/3"));
}

#[test]
fn immediate_failure_notifies_nobody() {
    let mut mailer = FlakyMailer::new(0);
    let err = deliver_all(&mut mailer, &messages(&["Alice", "Bob"])).unwrap_err();

    assert!(err.notified.is_empty());
    assert_eq!(err.pending, vec!["Alice", "Bob"]);
}
