//! Seed data for the mock collections.

use chrono::NaiveDate;
use ypg_core::{Assignment, CareerCategory, CareerPath, College, Interest, MemberRecord};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn member(
    id: &str,
    name: &str,
    email: &str,
    college: College,
    interest: Interest,
    (email_verified, onboarding_completed): (bool, bool),
    joined_date: NaiveDate,
) -> MemberRecord {
    MemberRecord {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        college,
        interest,
        email_verified,
        onboarding_completed,
        joined_date,
    }
}

pub fn members() -> Vec<MemberRecord> {
    vec![
        member(
            "student-1",
            "Jamie Smith",
            "jamie.smith@example.com",
            College::Harlow,
            Interest::Chef,
            (true, true),
            date(2023, 5, 10),
        ),
        member(
            "student-2",
            "Sarah Johnson",
            "sarah.johnson@example.com",
            College::Westminster,
            Interest::Baker,
            (true, false),
            date(2023, 5, 9),
        ),
        member(
            "student-3",
            "Michael Brown",
            "michael.brown@example.com",
            College::Southend,
            Interest::Hotel,
            (true, true),
            date(2023, 5, 7),
        ),
        member(
            "student-4",
            "Olivia Wilson",
            "olivia.wilson@example.com",
            College::Colchester,
            Interest::Events,
            (false, false),
            date(2023, 5, 5),
        ),
        member(
            "student-5",
            "David Taylor",
            "david.taylor@example.com",
            College::Harlow,
            Interest::Chef,
            (true, true),
            date(2023, 5, 5),
        ),
    ]
}

fn career(
    id: &str,
    title: &str,
    description: &str,
    (salary, education, growth): (&str, &str, &str),
    category: CareerCategory,
    active: bool,
) -> CareerPath {
    CareerPath {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        salary: salary.to_string(),
        education: education.to_string(),
        growth: growth.to_string(),
        category,
        active,
    }
}

pub fn careers() -> Vec<CareerPath> {
    vec![
        career(
            "career-1",
            "Executive Chef",
            "Lead the kitchen operations, create menus, and oversee food preparation.",
            (
                "£40,000 - £70,000",
                "Culinary degree + 5-10 years experience",
                "Moderate growth expected through 2030",
            ),
            CareerCategory::Cooking,
            true,
        ),
        career(
            "career-2",
            "Sous Chef",
            "Second in command in the kitchen, assists executive chef and manages staff.",
            (
                "£28,000 - £40,000",
                "Culinary degree + 3-5 years experience",
                "Moderate growth expected through 2030",
            ),
            CareerCategory::Cooking,
            true,
        ),
        career(
            "career-3",
            "Hotel Manager",
            "Oversee all aspects of hotel operations and guest satisfaction.",
            (
                "£35,000 - £65,000",
                "Hospitality degree + 5+ years experience",
                "Steady growth expected through 2030",
            ),
            CareerCategory::Hotel,
            true,
        ),
        career(
            "career-4",
            "Pastry Chef",
            "Create desserts, pastries, and baked goods for restaurants or bakeries.",
            (
                "£25,000 - £40,000",
                "Baking/Pastry certification + experience",
                "Steady growth expected through 2030",
            ),
            CareerCategory::Bakery,
            true,
        ),
        career(
            "career-5",
            "Event Coordinator",
            "Plan and execute hospitality events from concept to completion.",
            (
                "£24,000 - £38,000",
                "Events or hospitality qualification",
                "Steady growth expected through 2030",
            ),
            CareerCategory::Events,
            false,
        ),
    ]
}

pub fn assignments() -> Vec<Assignment> {
    vec![
        Assignment {
            id: "assignment-1".to_string(),
            title: "Classic French Cuisine".to_string(),
            description: "Prepare a three-course French meal including appetizer, main course, and dessert.".to_string(),
            due_date: date(2023, 6, 15),
            category: CareerCategory::Cooking,
            active: true,
        },
        Assignment {
            id: "assignment-2".to_string(),
            title: "Hotel Revenue Management".to_string(),
            description: "Create a pricing strategy for a boutique hotel during high and low seasons.".to_string(),
            due_date: date(2023, 6, 20),
            category: CareerCategory::Hotel,
            active: true,
        },
        Assignment {
            id: "assignment-3".to_string(),
            title: "Artisan Bread Techniques".to_string(),
            description: "Demonstrate three different artisan bread-making methods with documentation.".to_string(),
            due_date: date(2023, 6, 10),
            category: CareerCategory::Bakery,
            active: true,
        },
    ]
}
