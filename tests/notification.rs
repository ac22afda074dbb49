#![forbid(unsafe_code)]
use pere_noel::config::MessageConfig;
use pere_noel::matcher::{DrawOptions, Matcher};
use pere_noel::model::{Assignment, Pairing, Participant, ParticipantId, Roster};
use pere_noel::notification::{prepare_messages, MessageRenderer, TemplateMessage};

fn small_roster() -> Roster {
    Roster {
        participants: vec![
            Participant::new("Alice", "alice@exemple.fr"),
            Participant::new("Bob", "bob@exemple.fr"),
            Participant::new("Carol", "carol@exemple.fr"),
        ],
        couples: Vec::new(),
    }
}

#[test]
fn default_template_interpolates_both_names() {
    let giver = Participant::new("Alice", "alice@exemple.fr");
    let receiver = Participant::new("Bob", "bob@exemple.fr");
    let tpl = TemplateMessage::default();

    let subject = tpl.subject(&giver, &receiver);
    let body = tpl.body(&giver, &receiver);

    assert!(subject.contains("Alice"));
    assert!(body.contains("Alice"));
    assert!(body.contains("Bob"));
    assert!(!body.contains("{giver}"));
    assert!(!body.contains("{receiver}"));
}

#[test]
fn message_config_overrides_the_template() {
    let config = MessageConfig {
        subject: Some("Tirage pour {giver}".to_string()),
        body: Some("{giver} offre à {receiver}.".to_string()),
    };
    let tpl = config.renderer();
    let giver = Participant::new("Carol", "carol@exemple.fr");
    let receiver = Participant::new("Dave", "dave@exemple.fr");

    assert_eq!(tpl.subject(&giver, &receiver), "Tirage pour Carol");
    assert_eq!(tpl.body(&giver, &receiver), "Carol offre à Dave.");
}

#[test]
fn one_message_per_giver_addressed_to_the_giver() {
    let roster = small_roster();
    let matcher = Matcher::new(roster.clone());
    let assignment = matcher
        .draw(DrawOptions {
            seed: Some(11),
            ..DrawOptions::default()
        })
        .unwrap();

    let messages = prepare_messages(&roster, &assignment, &TemplateMessage::default()).unwrap();
    assert_eq!(messages.len(), 3);

    for message in &messages {
        let giver = roster.find_by_name(&message.recipient).unwrap();
        assert_eq!(message.email, giver.email);

        let receiver = assignment.receiver_for(&giver.id).unwrap();
        assert!(message.body.contains(receiver.as_str()));
    }
}

#[test]
fn unknown_id_in_assignment_is_reported() {
    let roster = small_roster();
    let assignment = Assignment::new(vec![Pairing {
        giver: ParticipantId::new("Zorro"),
        receiver: ParticipantId::new("Alice"),
    }]);

    let err = prepare_messages(&roster, &assignment, &TemplateMessage::default()).unwrap_err();
    assert!(err.to_string().contains("Zorro"));
}
