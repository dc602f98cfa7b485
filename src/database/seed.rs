use crate::models::{Activity, ActivityMap};

/// Activities available when the process starts. Order is preserved in listings.
pub fn seed_activities() -> ActivityMap {
    let mut activities = ActivityMap::new();

    activities.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    activities.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    activities.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
    );
    activities.insert(
        "Basketball Team".to_string(),
        Activity::new(
            "Competitive basketball training and games",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            15,
        ),
    );
    activities.insert(
        "Swimming Club".to_string(),
        Activity::new(
            "Swimming lessons and competitive swim training",
            "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
            20,
        ),
    );
    activities.insert(
        "Art Studio".to_string(),
        Activity::new(
            "Express creativity through painting, drawing, and sculpture",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
        ),
    );
    activities.insert(
        "Drama Club".to_string(),
        Activity::new(
            "Perform in plays and develop acting skills",
            "Thursdays, 3:30 PM - 5:30 PM",
            25,
        ),
    );
    activities.insert(
        "Science Club".to_string(),
        Activity::new(
            "Conduct experiments and explore scientific concepts",
            "Fridays, 4:00 PM - 5:30 PM",
            16,
        ),
    );
    activities.insert(
        "Debate Team".to_string(),
        Activity::new(
            "Develop public speaking and argumentation skills",
            "Tuesdays, 4:00 PM - 5:30 PM",
            12,
        ),
    );

    activities
}
