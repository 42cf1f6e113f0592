use crate::modules::activities::core::activity::Activity;

struct SeedActivity {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: u32,
    participants: &'static [&'static str],
}

const SEED: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Practice drills and play in the inter-school league",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 15,
        participants: &["liam@mergington.edu"],
    },
    SeedActivity {
        name: "Swimming Club",
        description: "Improve technique and train for swim meets",
        schedule: "Tuesdays, 5:00 PM - 6:00 PM",
        max_participants: 18,
        participants: &["ava@mergington.edu"],
    },
    SeedActivity {
        name: "Art Studio",
        description: "Explore painting, drawing and mixed media",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 16,
        participants: &["mia@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Rehearse and stage the school's seasonal productions",
        schedule: "Wednesdays, 3:30 PM - 5:30 PM",
        max_participants: 25,
        participants: &["isabella@mergington.edu"],
    },
    SeedActivity {
        name: "Math Olympiad",
        description: "Solve competition problems and prepare for olympiads",
        schedule: "Mondays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["lucas@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Build argumentation skills and compete in debates",
        schedule: "Fridays, 2:00 PM - 3:30 PM",
        max_participants: 12,
        participants: &["amelia@mergington.edu", "ethan@mergington.edu"],
    },
];

/// The built-in activity catalogue the directory starts from.
pub fn activities() -> Vec<Activity> {
    SEED.iter()
        .map(|s| Activity {
            name: s.name.to_string(),
            description: s.description.to_string(),
            schedule: s.schedule.to_string(),
            max_participants: s.max_participants,
            participants: s.participants.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}
