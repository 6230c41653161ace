use super::domain::{Article, ArticleId, Audience, Catalog};
use chrono::NaiveDate;

struct SeedArticle {
    id: &'static str,
    title: &'static str,
    audience: Audience,
    tags: &'static [&'static str],
    summary: &'static str,
    body: SeedBody,
    image: &'static str,
    alt_text: &'static str,
    author: &'static str,
    read_time_minutes: u16,
    published: (i32, u32, u32),
}

struct SeedBody {
    standard: &'static str,
    beginner: &'static str,
    advanced: &'static str,
}

macro_rules! seed_body {
    ($id:literal) => {
        SeedBody {
            standard: include_str!(concat!("../../content/", $id, "/standard.md")),
            beginner: include_str!(concat!("../../content/", $id, "/beginner.md")),
            advanced: include_str!(concat!("../../content/", $id, "/advanced.md")),
        }
    };
}

const IMAGE_BASE: &str = "https://images.unsplash.com/";
const IMAGE_PARAMS: &str = "?auto=format&fit=crop&w=1200&q=80";

const STANDARD_ARTICLES: &[SeedArticle] = &[
    SeedArticle {
        id: "1",
        title: "Mastering the Art of Password Hygiene",
        audience: Audience::Student,
        tags: &["Passwords", "MFA", "Basics"],
        summary: "Stop using \"password123\". Learn how to create unbreakable passwords and why MFA is your best friend.",
        body: seed_body!("1"),
        image: "photo-1563986768609-322da13575f3",
        alt_text: "Password manager interface displaying strong, unique passwords with security lock symbol.",
        author: "Sarah Jenkins",
        read_time_minutes: 6,
        published: (2023, 10, 12),
    },
    SeedArticle {
        id: "2",
        title: "Ransomware & Resilience: A Business Guide",
        audience: Audience::Business,
        tags: &["Ransomware", "Cloud Security", "Compliance"],
        summary: "An executive overview of modern ransomware threats and how cloud security posture management (CSPM) reduces risk.",
        body: seed_body!("2"),
        image: "photo-1551288049-bebda4e38f71",
        alt_text: "Business dashboard illustrating ransomware response and resilience planning.",
        author: "Dr. Aris Thorne",
        read_time_minutes: 8,
        published: (2023, 11, 5),
    },
    SeedArticle {
        id: "3",
        title: "Keeping Kids Safe: A Parent’s Guide to Social Media",
        audience: Audience::Parent,
        tags: &["Cyberbullying", "Parental Controls", "Social Media"],
        summary: "Practical tips for managing screen time, spotting cyberbullying, and configuring privacy settings for your children.",
        body: seed_body!("3"),
        image: "photo-1543269865-cbf427effbad",
        alt_text: "Parent helping child adjust social media privacy settings on a laptop.",
        author: "Maria Gonzales",
        read_time_minutes: 7,
        published: (2023, 9, 28),
    },
    SeedArticle {
        id: "4",
        title: "Teaching Digital Citizenship in Schools",
        audience: Audience::Educator,
        tags: &["Education", "Digital Citizenship", "Resources"],
        summary: "Lesson plans and interactive activities to engage students in conversations about their digital footprint and safety.",
        body: seed_body!("4"),
        image: "photo-1524178232363-1fb2b075b655",
        alt_text: "Teacher guiding students in a classroom digital citizenship lesson with safety posters.",
        author: "James Wilson",
        read_time_minutes: 6,
        published: (2024, 1, 15),
    },
    SeedArticle {
        id: "7",
        title: "What is Multi-Factor Authentication (MFA)?",
        audience: Audience::All,
        tags: &["MFA", "Basics", "Security Tools"],
        summary: "Passwords aren't enough anymore. Learn how MFA adds a second lock to your digital door and why you need it enabled everywhere.",
        body: seed_body!("7"),
        image: "photo-1618060932014-4deda4932554",
        alt_text: "Login interface demonstrating multi-factor authentication with password and phone verification.",
        author: "Vidacyberinsights Team",
        read_time_minutes: 5,
        published: (2024, 3, 10),
    },
    SeedArticle {
        id: "5",
        title: "Phishing 101: Don't Take the Bait",
        audience: Audience::Student,
        tags: &["Phishing", "Email", "Scams"],
        summary: "Learn how to spot fake emails and texts that try to steal your login info. If it looks too good to be true, it probably is.",
        body: seed_body!("5"),
        image: "photo-1526374965328-7f61d4dc18c5",
        alt_text: "Silhouette of a person in a hoodie typing on a laptop with digital code overlays.",
        author: "Tech Team",
        read_time_minutes: 3,
        published: (2024, 2, 2),
    },
    SeedArticle {
        id: "6",
        title: "Small Business Cyber Defense Checklist",
        audience: Audience::Business,
        tags: &["Basics", "Checklist", "Strategy"],
        summary: "A step-by-step checklist to secure your small business assets without breaking the bank.",
        body: seed_body!("6"),
        image: "photo-1600880292203-757bb62b4baf",
        alt_text: "Business professionals having a meeting in a conference room.",
        author: "Dr. Aris Thorne",
        read_time_minutes: 8,
        published: (2024, 2, 10),
    },
];

impl Catalog {
    /// The built-in catalog served when no catalog file is configured.
    pub fn standard() -> Self {
        let articles = STANDARD_ARTICLES.iter().filter_map(seed_article).collect();
        Catalog::new(articles).unwrap_or_default()
    }
}

fn seed_article(seed: &SeedArticle) -> Option<Article> {
    let (year, month, day) = seed.published;
    let publish_date = NaiveDate::from_ymd_opt(year, month, day)?;

    Some(Article {
        id: ArticleId::from(seed.id),
        title: seed.title.to_string(),
        audience: seed.audience,
        tags: seed.tags.iter().map(|tag| tag.to_string()).collect(),
        summary: seed.summary.to_string(),
        content: seed.body.standard.to_string(),
        content_beginner: non_empty(seed.body.beginner),
        content_advanced: non_empty(seed.body.advanced),
        image_url: format!("{IMAGE_BASE}{}{IMAGE_PARAMS}", seed.image),
        alt_text: seed.alt_text.to_string(),
        author: seed.author.to_string(),
        read_time_minutes: seed.read_time_minutes,
        publish_date,
        series: None,
    })
}

fn non_empty(body: &str) -> Option<String> {
    (!body.trim().is_empty()).then(|| body.to_string())
}
