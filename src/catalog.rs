//! Curated "ways to be kind" suggestions shown on the ideas page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub category: &'static str,
    pub suggestions: &'static [&'static str],
}

pub const CATEGORIES: &[Category] = &[
    Category {
        category: "Simple Daily Acts",
        suggestions: &[
            "Hold the door open for someone",
            "Say thank you to a service worker",
            "Give a genuine compliment",
            "Let someone go ahead of you in line",
            "Smile at a stranger",
            "Send a thoughtful text to a friend",
            "Leave a positive review for a local business",
            "Return a lost item you found",
        ],
    },
    Category {
        category: "Community & Neighbors",
        suggestions: &[
            "Shovel snow from a neighbor's walkway",
            "Offer to pick up groceries for elderly neighbors",
            "Volunteer at a local food bank",
            "Participate in community cleanup events",
            "Help someone carry heavy items",
            "Offer your skills (tutoring, repairs, etc.)",
            "Donate clothes or household items",
            "Join or organize a neighborhood watch",
        ],
    },
    Category {
        category: "At Home & Family",
        suggestions: &[
            "Do an extra chore without being asked",
            "Cook a meal for someone who's stressed",
            "Listen without trying to fix their problems",
            "Offer to babysit for overwhelmed parents",
            "Help with homework or projects",
            "Share your favorite book or movie",
            "Give someone your full attention",
            "Write a heartfelt thank you note",
        ],
    },
    Category {
        category: "Digital Kindness",
        suggestions: &[
            "Share someone's small business on social media",
            "Send an encouraging message to someone struggling",
            "Post something uplifting instead of complaining",
            "Help someone learn new technology",
            "Connect two people who should know each other",
            "Leave kind comments on people's posts",
            "Share helpful resources or articles",
            "Offer to help with someone's online presence",
        ],
    },
    Category {
        category: "Professional & Work",
        suggestions: &[
            "Bring coffee or treats for your team",
            "Offer to help a struggling colleague",
            "Share credit for successes generously",
            "Mentor someone new to your field",
            "Write a LinkedIn recommendation",
            "Introduce someone to job opportunities",
            "Help with a presentation or project",
            "Cover for someone who needs time off",
        ],
    },
    Category {
        category: "Random Acts of Service",
        suggestions: &[
            "Pay for someone's coffee behind you",
            "Leave quarters at a laundromat",
            "Give up your parking spot to someone circling",
            "Help someone with directions",
            "Carry someone's luggage up stairs",
            "Offer your phone charger to someone in need",
            "Help someone change a flat tire",
            "Give your umbrella to someone in the rain",
        ],
    },
    Category {
        category: "Learning & Growth",
        suggestions: &[
            "Teach someone a skill you know",
            "Share educational resources freely",
            "Help someone practice for an interview",
            "Offer to be a study buddy",
            "Share your professional experience",
            "Help someone with their resume",
            "Recommend books or courses",
            "Be patient with someone learning",
        ],
    },
    Category {
        category: "Transportation & Travel",
        suggestions: &[
            "Give someone a ride when they need it",
            "Help someone load/unload their car",
            "Share parking tips or good spots",
            "Let someone merge in traffic gracefully",
            "Help with directions or navigation",
            "Offer to pick up something for someone",
            "Help carry groceries to someone's car",
            "Share travel tips and recommendations",
        ],
    },
];
