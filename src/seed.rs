//! Fixed demo data: the roster and the first-run homework assignments.

use crate::types::{Client, Homework, Therapist};

const SEED_ASSIGNED_DATE: &str = "2025-12-20";
const SEED_DUE_DATE: &str = "2025-12-27";

pub fn therapists() -> Vec<Therapist> {
    vec![Therapist {
        id: "t1".to_owned(),
        name: "Dr. Maria Virtanen".to_owned(),
        email: "maria.virtanen@example.com".to_owned(),
    }]
}

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "c1".to_owned(),
            name: "Matti Meikäläinen".to_owned(),
            email: "matti@example.com".to_owned(),
            therapist_id: "t1".to_owned(),
        },
        Client {
            id: "c2".to_owned(),
            name: "Anna Korhonen".to_owned(),
            email: "anna@example.com".to_owned(),
            therapist_id: "t1".to_owned(),
        },
    ]
}

/// Homework written to storage the first time any homework is read.
pub fn initial_homework() -> Vec<Homework> {
    [
        ("h1", "c1", "Ajatuspäiväkirja", "Kirjoita kolme negatiivista ajatusta ja haasta ne", false),
        ("h2", "c1", "Rentoutusharjoitus", "Harjoittele syvähengitystä 10 minuuttia päivässä", false),
        ("h3", "c1", "Sosiaalinen aktiviteetti", "Tapaa ystävä kahville tai kävelylenkille", false),
        ("h4", "c2", "Unipäiväkirja", "Kirjaa nukkumaanmenoaika ja heräämisaika joka päivä", false),
        ("h5", "c2", "Liikuntaharjoitus", "Kävele vähintään 30 minuuttia päivässä", true),
    ]
    .into_iter()
    .map(|(id, client_id, title, description, completed)| Homework {
        id: id.to_owned(),
        client_id: client_id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        completed,
        assigned_date: SEED_ASSIGNED_DATE.to_owned(),
        due_date: Some(SEED_DUE_DATE.to_owned()),
    })
    .collect()
}
