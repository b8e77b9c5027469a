//! CSV roster import.

use force_sports::{read_roster_csv, RosterError};
use uuid::Uuid;

#[test]
fn reads_names_teams_and_users() {
    let user = Uuid::new_v4();
    let csv = format!("name,team_name,user\nAlice,Smashers,{user}\nBob,,\n");
    let roster = read_roster_csv(csv.as_bytes()).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].user, user);
    assert_eq!(roster[0].display_name(), "Smashers");
    assert_eq!(roster[1].name, "Bob");
    assert_eq!(roster[1].team_name, None);
    assert_ne!(roster[1].user, user);
}

#[test]
fn user_and_team_columns_are_optional() {
    let roster = read_roster_csv("name\n Carol \nDave\n".as_bytes()).unwrap();
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].name, "Carol");
    assert_ne!(roster[0].user, roster[1].user);
}

#[test]
fn empty_name_is_rejected_with_row_number() {
    let err = read_roster_csv("name,team_name\nEve,\n,Hawks\n".as_bytes()).unwrap_err();
    assert!(matches!(err, RosterError::MissingName { row: 2 }));
}

#[test]
fn bad_user_id_is_a_csv_error() {
    let err = read_roster_csv("name,user\nFrank,not-a-uuid\n".as_bytes()).unwrap_err();
    assert!(matches!(err, RosterError::Csv(_)));
}
