#![forbid(unsafe_code)]
use pere_noel::config::Config;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const VALID: &str = r#"{
  "smtp": {
    "host": "smtp.exemple.fr",
    "port": 587,
    "username": "noel",
    "password": "hohoho",
    "from": "Père Noël <noel@exemple.fr>"
  },
  "participants": [
    { "name": "Alice", "email": "alice@exemple.fr" },
    { "name": "Bob", "email": "bob@exemple.fr" },
    { "name": "Carol", "email": "carol@exemple.fr" },
    { "name": "Dave", "email": "dave@exemple.fr" }
  ],
  "couples": [["Alice", "Bob"]],
  "message": { "subject": "Tirage {giver}" }
}"#;

#[test]
fn valid_document_loads_and_builds_the_roster() {
    let file = write_config(VALID);
    let config = Config::load(file.path()).unwrap();

    assert_eq!(config.smtp.port, 587);
    assert_eq!(config.smtp.password(), Some("hohoho".to_string()));

    let roster = config.build_roster();
    assert_eq!(roster.participants.len(), 4);
    assert_eq!(roster.couples.len(), 1);

    // link_partners a posé les références croisées
    let alice = roster.find_by_name("Alice").unwrap();
    let bob = roster.find_by_name("Bob").unwrap();
    assert_eq!(alice.partner.as_ref().map(|p| p.as_str()), Some("Bob"));
    assert_eq!(bob.partner.as_ref().map(|p| p.as_str()), Some("Alice"));
}

#[test]
fn message_section_is_optional() {
    let json = VALID.replace(r#""message": { "subject": "Tirage {giver}" }"#, r#""message": {}"#);
    let file = write_config(&json);
    let config = Config::load(file.path()).unwrap();
    let tpl = config.message.renderer();
    assert!(tpl.subject.contains("{giver}"));
}

#[test]
fn missing_file_is_an_error() {
    let err = Config::load("n-existe-pas.json").unwrap_err();
    assert!(err.to_string().contains("n-existe-pas.json"));
}

#[test]
fn malformed_json_is_an_error() {
    let file = write_config("{ pas du json");
    assert!(Config::load(file.path()).is_err());
}

#[test]
fn port_zero_is_rejected() {
    let file = write_config(&VALID.replace("587", "0"));
    let err = Config::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("port"));
}

#[test]
fn empty_participant_list_is_rejected() {
    let json = r#"{
      "smtp": { "host": "smtp.exemple.fr", "port": 587, "username": "noel", "from": "noel@exemple.fr" },
      "participants": []
    }"#;
    let file = write_config(json);
    let err = Config::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("participant"));
}

#[test]
fn blank_email_is_rejected() {
    let json = VALID.replace("alice@exemple.fr", "  ");
    let file = write_config(&json);
    assert!(Config::load(file.path()).is_err());
}
