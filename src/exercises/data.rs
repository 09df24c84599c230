use serde::Serialize;

/// A single exercise suggestion. The catalog is built in, read-only, and
/// identical on every call.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub category: &'static str,
    pub benefits: &'static str,
    pub instructions: &'static str,
    pub difficulty: &'static str,
    pub calories_per_half_hour: i32,
}

/// Category names in display order.
pub const CATEGORIES: [&str; 4] = [
    "Cardio",
    "Strength Training",
    "Flexibility & Balance",
    "HIIT Workouts",
];

pub const SUGGESTIONS: [Exercise; 16] = [
    Exercise {
        name: "Running",
        category: "Cardio",
        benefits: "Improves cardiovascular health and builds endurance",
        instructions: "Start with 10-15 minutes of jogging and gradually increase. Aim for 150 minutes per week.",
        difficulty: "Beginner to Advanced",
        calories_per_half_hour: 300,
    },
    Exercise {
        name: "Cycling",
        category: "Cardio",
        benefits: "Low-impact cardio that strengthens the lower body",
        instructions: "30-60 minutes of moderate cycling, 3-5 times per week.",
        difficulty: "Beginner to Advanced",
        calories_per_half_hour: 250,
    },
    Exercise {
        name: "Swimming",
        category: "Cardio",
        benefits: "Full-body workout with minimal joint impact",
        instructions: "Start with 20 minutes and build up to 30-45 minutes, 2-3 times per week.",
        difficulty: "Beginner to Advanced",
        calories_per_half_hour: 350,
    },
    Exercise {
        name: "Jump Rope",
        category: "Cardio",
        benefits: "Improves coordination and burns calories quickly",
        instructions: "Begin with 5-10 minutes and work up to 15-20 minutes.",
        difficulty: "Beginner to Advanced",
        calories_per_half_hour: 320,
    },
    Exercise {
        name: "Push-ups",
        category: "Strength Training",
        benefits: "Builds upper body and core strength",
        instructions: "Start with 3 sets of 5-10 push-ups, gradually increasing reps as you get stronger.",
        difficulty: "Beginner to Advanced",
        calories_per_half_hour: 100,
    },
    Exercise {
        name: "Squats",
        category: "Strength Training",
        benefits: "Strengthens legs, glutes, and core",
        instructions: "3 sets of 12-15 reps. Add weights as you progress.",
        difficulty: "Beginner to Advanced",
        calories_per_half_hour: 150,
    },
    Exercise {
        name: "Deadlifts",
        category: "Strength Training",
        benefits: "Works the entire posterior chain",
        instructions: "3 sets of 8-12 reps with proper form. Start with light weights.",
        difficulty: "Intermediate to Advanced",
        calories_per_half_hour: 180,
    },
    Exercise {
        name: "Dumbbell Rows",
        category: "Strength Training",
        benefits: "Targets back and biceps",
        instructions: "3 sets of 10-12 reps on each side with appropriate weight.",
        difficulty: "Beginner to Advanced",
        calories_per_half_hour: 120,
    },
    Exercise {
        name: "Yoga",
        category: "Flexibility & Balance",
        benefits: "Improves flexibility, balance, and mental well-being",
        instructions: "15-60 minute sessions, 2-5 times per week. Start with beginner-friendly poses.",
        difficulty: "Beginner to Advanced",
        calories_per_half_hour: 180,
    },
    Exercise {
        name: "Pilates",
        category: "Flexibility & Balance",
        benefits: "Focuses on core strength and body alignment",
        instructions: "30-45 minute sessions, 2-3 times per week.",
        difficulty: "Beginner to Advanced",
        calories_per_half_hour: 200,
    },
    Exercise {
        name: "Dynamic Stretching",
        category: "Flexibility & Balance",
        benefits: "Prepares the body for exercise",
        instructions: "5-10 minutes before workouts. Include arm circles, hip rotations, and walking lunges.",
        difficulty: "Beginner",
        calories_per_half_hour: 80,
    },
    Exercise {
        name: "Static Stretching",
        category: "Flexibility & Balance",
        benefits: "Improves overall flexibility",
        instructions: "Hold each stretch for 15-30 seconds, 2-3 times. Best after workouts.",
        difficulty: "Beginner",
        calories_per_half_hour: 60,
    },
    Exercise {
        name: "Tabata Protocol",
        category: "HIIT Workouts",
        benefits: "Intense intervals that boost metabolism",
        instructions: "20 seconds of max effort followed by 10 seconds of rest, repeated 8 times (4 minutes total).",
        difficulty: "Intermediate to Advanced",
        calories_per_half_hour: 240,
    },
    Exercise {
        name: "Circuit Training",
        category: "HIIT Workouts",
        benefits: "Combines strength and cardio elements",
        instructions: "Perform 6-10 exercises in sequence with minimal rest, then repeat 2-3 times.",
        difficulty: "Beginner to Advanced",
        calories_per_half_hour: 300,
    },
    Exercise {
        name: "Burpees",
        category: "HIIT Workouts",
        benefits: "Full-body exercise that builds strength and endurance",
        instructions: "Start with 3 sets of 8-10 reps with rest between sets.",
        difficulty: "Intermediate",
        calories_per_half_hour: 200,
    },
    Exercise {
        name: "Mountain Climbers",
        category: "HIIT Workouts",
        benefits: "Works core while elevating heart rate",
        instructions: "30 seconds on, 15 seconds rest. Repeat 4-6 times.",
        difficulty: "Beginner to Intermediate",
        calories_per_half_hour: 160,
    },
];

/// The suggestions visible under a category selection. `None` and the
/// "All Categories" sentinel both mean no restriction; an unknown
/// category simply matches nothing.
pub fn suggestions_for(category: Option<&str>) -> Vec<Exercise> {
    match category {
        None | Some("All Categories") => SUGGESTIONS.to_vec(),
        Some(wanted) => SUGGESTIONS
            .iter()
            .filter(|e| e.category == wanted)
            .copied()
            .collect(),
    }
}
