//! Fixture records inserted by the seeding routine.

use chrono::{DateTime, Duration, Utc};

use crate::server::model::{
    crew::{CreateCrewParams, Sea},
    event::{CreateEventParams, EventResultItem, EventStatus},
    marine::CreateMarineParams,
};

/// Member fixture whose crew is referenced by name and resolved at seed time.
pub struct MemberFixture {
    pub crew_name: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub bounty: i64,
}

pub fn marines() -> Vec<CreateMarineParams> {
    [
        ("Monkey D. Garp", "Vice Admiral", "Hero of the Marines."),
        ("Sengoku", "Fleet Admiral", "Former Fleet Admiral, known as the Buddha."),
        ("Smoker", "Vice Admiral", "Commander of G-5, user of the Smoke-Smoke Fruit."),
        ("Tashigi", "Captain", "Swordswoman serving under Smoker."),
    ]
    .into_iter()
    .map(|(name, rank, bio)| CreateMarineParams {
        name: name.to_string(),
        rank: rank.to_string(),
        bio: Some(bio.to_string()),
        avatar_url: None,
    })
    .collect()
}

pub fn crews() -> Vec<CreateCrewParams> {
    [
        (
            "Straw Hat Pirates",
            Sea::EastBlue,
            "Crew captained by Monkey D. Luffy.",
            true,
        ),
        (
            "Red Hair Pirates",
            Sea::GrandLine,
            "Crew of the Emperor Shanks.",
            false,
        ),
        (
            "Buggy Pirates",
            Sea::EastBlue,
            "Crew of Buggy the Clown.",
            false,
        ),
    ]
    .into_iter()
    .map(|(name, sea, description, crew_of_month)| CreateCrewParams {
        name: name.to_string(),
        sea,
        description: Some(description.to_string()),
        emblem_url: None,
        crew_of_month,
    })
    .collect()
}

pub const MEMBERS: [MemberFixture; 6] = [
    MemberFixture {
        crew_name: "Straw Hat Pirates",
        name: "Monkey D. Luffy",
        role: "Captain",
        bounty: 3_000_000_000,
    },
    MemberFixture {
        crew_name: "Straw Hat Pirates",
        name: "Roronoa Zoro",
        role: "Swordsman",
        bounty: 1_111_000_000,
    },
    MemberFixture {
        crew_name: "Straw Hat Pirates",
        name: "Sanji",
        role: "Cook",
        bounty: 1_032_000_000,
    },
    MemberFixture {
        crew_name: "Straw Hat Pirates",
        name: "Nami",
        role: "Navigator",
        bounty: 366_000_000,
    },
    MemberFixture {
        crew_name: "Red Hair Pirates",
        name: "Shanks",
        role: "Captain",
        bounty: 4_048_900_000,
    },
    MemberFixture {
        crew_name: "Buggy Pirates",
        name: "Buggy",
        role: "Captain",
        bounty: 3_189_000_000,
    },
];

/// Event fixtures dated relative to `now`: one upcoming, one completed with results.
pub fn events(now: DateTime<Utc>) -> Vec<CreateEventParams> {
    vec![
        CreateEventParams {
            title: "Wano Arc Watch Party".to_string(),
            description: Some("Community rewatch of the Wano finale.".to_string()),
            date: now + Duration::days(30),
            status: EventStatus::Upcoming,
            banner_url: None,
            results: None,
        },
        CreateEventParams {
            title: "Best Devil Fruit Poll".to_string(),
            description: Some("Fans voted for their favourite Devil Fruit.".to_string()),
            date: now - Duration::days(30),
            status: EventStatus::Completed,
            banner_url: None,
            results: Some(vec![
                EventResultItem {
                    category: "Paramecia".to_string(),
                    winner: "Gum-Gum Fruit".to_string(),
                    runner_up: Some("Op-Op Fruit".to_string()),
                    notes: None,
                },
                EventResultItem {
                    category: "Logia".to_string(),
                    winner: "Magu-Magu Fruit".to_string(),
                    runner_up: Some("Smoke-Smoke Fruit".to_string()),
                    notes: Some("Closest vote of the poll.".to_string()),
                },
            ]),
        },
    ]
}
