use crate::modules::activities::core::activity::Activity;

pub fn make_chess_club() -> Activity {
    Activity {
        name: "Chess Club".to_string(),
        description: "Learn strategies and compete in chess tournaments".to_string(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants: 12,
        participants: vec![
            "michael@mergington.edu".to_string(),
            "daniel@mergington.edu".to_string(),
        ],
    }
}

pub fn make_empty_activity(name: &str) -> Activity {
    Activity {
        name: name.to_string(),
        description: "Fixture activity".to_string(),
        schedule: "Never".to_string(),
        max_participants: 1,
        participants: Vec::new(),
    }
}
