//! Static content used when the CMS is unreachable, unconfigured, or empty.

use foundation::LatLng;

use crate::records::{
    AboutContent, Achievement, Category, ContentRecord, DEFAULT_POINT_COLOR, FooterContent,
    HeroContent, LocationRecord, Platform, SocialLink,
};

const PLAYLIST: &str = "PL0_fxxZ-lFiTl8tXrMhDtUx4jgBq-t0i3";

pub fn hero() -> HeroContent {
    HeroContent {
        title: "Hi, I'm Ravikant 👋".to_string(),
        subtitle: "AI & Web3 Growth Strategy Leader. Building the future of decentralized \
                   identity and AI-driven ecosystems"
            .to_string(),
        background_image: None,
        button_text: "Learn about my journey".to_string(),
        button_link: "#about".to_string(),
    }
}

pub fn about() -> AboutContent {
    AboutContent {
        title: "A bit about my journey".to_string(),
        paragraphs: vec![
            "I believe in the power of authentic connections and genuine growth. Over the \
             years, I've learned that the most meaningful achievements come from staying \
             curious and being willing to step outside my comfort zone."
                .to_string(),
            "Whether it's through professional projects, personal challenges, or simple \
             everyday moments, I'm always looking for ways to make a positive impact and \
             learn something new."
                .to_string(),
            "This space is my way of sharing that journey with you - the wins, the lessons, \
             and everything in between."
                .to_string(),
        ],
        image: None,
    }
}

fn point(
    id: u32,
    title: &str,
    location: &str,
    description: &str,
    year: &str,
    icon: &str,
    coordinates: LatLng,
) -> LocationRecord {
    LocationRecord {
        id: id.to_string(),
        title: title.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        year: year.to_string(),
        icon: icon.to_string(),
        coordinates,
        color: DEFAULT_POINT_COLOR.to_string(),
        order: id as i32,
    }
}

/// Career stops in order. The last one is the (0, 0) "global" stop.
pub fn journey_points() -> Vec<LocationRecord> {
    vec![
        point(
            1,
            "The Beginning",
            "Maharashtra, India",
            "Started my journey in the heart of India, laying the foundation for my future \
             endeavors in technology and innovation.",
            "2016",
            "🚀",
            LatLng::new(19.7515, 75.7139),
        ),
        point(
            2,
            "Business Strategy Consultant",
            "Texas, USA",
            "Worked as a Business and Strategy consultant for financial institutions, gaining \
             deep insights into the financial sector.",
            "2018",
            "💼",
            LatLng::new(31.9686, -99.9018),
        ),
        point(
            3,
            "Banking Innovation",
            "Ottawa, Canada",
            "Expanded my expertise as a Business and Strategy consultant for retail banks, \
             focusing on digital transformation.",
            "2019",
            "🏦",
            LatLng::new(45.4215, -75.6972),
        ),
        point(
            4,
            "Emerging Tech Explorer",
            "London, UK",
            "Served as an Emerging Tech consultant for consumer lenders, where my journey into \
             Blockchain technology began.",
            "2020",
            "🔗",
            LatLng::new(51.5074, -0.1278),
        ),
        point(
            5,
            "Blockchain Deep Dive",
            "Dubai, UAE",
            "Went through the blockchain rabbit hole with Polygon, immersing myself in the \
             world of Web3 and decentralized technologies.",
            "2022",
            "⛓️",
            LatLng::new(25.2048, 55.2708),
        ),
        point(
            6,
            "AI & Web3 Convergence",
            "Global",
            "Working at the intersection of AI and Web3, exploring how these technologies can \
             reshape our digital future.",
            "Present",
            "🌐",
            LatLng::ORIGIN,
        ),
    ]
}

pub fn achievements() -> Vec<Achievement> {
    let items = [
        (
            "Leadership Recognition",
            "Led a team of 12 people through a challenging project that changed how we work together.",
            "2024",
            "award",
        ),
        (
            "Completed Marathon",
            "Ran my first marathon after 8 months of training. Learned more about persistence than I ever imagined.",
            "2023",
            "book",
        ),
        (
            "Community Impact",
            "Started a local initiative that helped 50+ families during difficult times. Small actions, big hearts.",
            "2023",
            "star",
        ),
        (
            "Published Article",
            "Wrote about finding balance in a fast-paced world. It resonated with more people than I expected.",
            "2022",
            "book",
        ),
    ];
    items
        .into_iter()
        .enumerate()
        .map(|(i, (title, description, year, icon))| Achievement {
            id: format!("achievement-{}", i + 1),
            title: title.to_string(),
            description: description.to_string(),
            year: year.to_string(),
            icon: icon.to_string(),
            order: i as i32 + 1,
        })
        .collect()
}

fn talk(order: i32, video_id: &str, index: u32, title: &str) -> ContentRecord {
    let mut record = ContentRecord::new(
        format!("talk-{video_id}"),
        title,
        Category::Talk,
        format!("https://www.youtube.com/watch?v={video_id}&list={PLAYLIST}&index={index}"),
    );
    record.platform = Some(Platform::Youtube);
    record.video_id = Some(video_id.to_string());
    record.thumbnail = Some(format!("https://img.youtube.com/vi/{video_id}/maxresdefault.jpg"));
    record.order = order;
    record
}

struct Authored<'a> {
    id: &'a str,
    title: &'a str,
    description: &'a str,
    url: &'a str,
    thumbnail: &'a str,
    embed_url: Option<&'a str>,
    publish_date: &'a str,
}

fn authored(
    order: i32,
    category: Category,
    platform: Platform,
    item: Authored<'_>,
) -> ContentRecord {
    let mut record = ContentRecord::new(item.id, item.title, category, item.url);
    record.platform = Some(platform);
    record.description = Some(item.description.to_string());
    record.thumbnail = Some(item.thumbnail.to_string());
    record.embed_url = item.embed_url.map(str::to_string);
    record.publish_date = Some(item.publish_date.to_string());
    record.order = order;
    record
}

/// Posts, articles and documents shown after the talks.
fn written_items() -> Vec<ContentRecord> {
    vec![
        authored(
            10,
            Category::Linkedin,
            Platform::Linkedin,
            Authored {
                id: "linkedin-123456789",
                title: "Career Growth in Tech",
                description: "Essential tips for advancing your career in technology",
                url: "https://www.linkedin.com/posts/ravikantagrawal_activity-123456789",
                thumbnail: "https://media.licdn.com/...",
                embed_url: None,
                publish_date: "2024-03-20",
            },
        ),
        authored(
            11,
            Category::Linkedin,
            Platform::Linkedin,
            Authored {
                id: "linkedin-987654321",
                title: "Tech Interview Preparation",
                description: "How to prepare for technical interviews at top tech companies",
                url: "https://www.linkedin.com/posts/ravikantagrawal_activity-987654321",
                thumbnail: "https://media.licdn.com/...",
                embed_url: None,
                publish_date: "2024-03-18",
            },
        ),
        authored(
            12,
            Category::Twitter,
            Platform::Twitter,
            Authored {
                id: "tweet-123456789",
                title: "Coding Best Practices",
                description: "Thread on essential coding best practices every developer should know",
                url: "https://twitter.com/ravikantagrawal/status/123456789",
                thumbnail: "https://pbs.twimg.com/...",
                embed_url: None,
                publish_date: "2024-03-19",
            },
        ),
        authored(
            13,
            Category::Twitter,
            Platform::Twitter,
            Authored {
                id: "tweet-987654321",
                title: "Tech Stack Recommendations",
                description: "Recommended tech stack for modern web applications",
                url: "https://twitter.com/ravikantagrawal/status/987654321",
                thumbnail: "https://pbs.twimg.com/...",
                embed_url: None,
                publish_date: "2024-03-17",
            },
        ),
        authored(
            14,
            Category::Article,
            Platform::Medium,
            Authored {
                id: "article-scalable-applications",
                title: "Building Scalable Applications",
                description: "Comprehensive guide to building scalable web applications",
                url: "https://medium.com/@ravikantagrawal/...",
                thumbnail: "https://miro.medium.com/...",
                embed_url: None,
                publish_date: "2024-03-16",
            },
        ),
        authored(
            15,
            Category::Article,
            Platform::DevTo,
            Authored {
                id: "article-react-performance",
                title: "React Performance Optimization",
                description: "Tips and tricks for optimizing React applications",
                url: "https://dev.to/ravikantagrawal/...",
                thumbnail: "https://dev.to/...",
                embed_url: None,
                publish_date: "2024-03-14",
            },
        ),
        authored(
            16,
            Category::Document,
            Platform::Pdf,
            Authored {
                id: "doc-system-design-patterns",
                title: "System Design Patterns",
                description: "Comprehensive guide to common system design patterns",
                url: "https://.../system-design-patterns.pdf",
                thumbnail: "https://...",
                embed_url: Some("https://docs.google.com/viewer?url=..."),
                publish_date: "2024-03-13",
            },
        ),
        authored(
            17,
            Category::Document,
            Platform::GoogleDocs,
            Authored {
                id: "doc-cloud-architecture",
                title: "Cloud Architecture Best Practices",
                description: "Best practices for designing cloud-native applications",
                url: "https://docs.google.com/document/...",
                thumbnail: "https://...",
                embed_url: Some("https://docs.google.com/document/d/.../preview"),
                publish_date: "2024-03-12",
            },
        ),
    ]
}

/// Recorded talks from the public playlist, then posts, articles and
/// documents. The first two talks are featured.
pub fn media_items() -> Vec<ContentRecord> {
    let mut items = vec![
        talk(1, "4OkySZO-G2Q", 4, "WEF Davos 2022 Polygon Ecosystem"),
        talk(
            2,
            "nsfIl7PKKyQ",
            22,
            "Blockchain, AI & The Future of Tech | Ravikant Agrawal (Director at Privado id (prev Polygon id))",
        ),
        talk(
            3,
            "mjYnzN8Iu74",
            21,
            "How Decentralized AI Agents Are Shaping the Data Economy – Insights from Ravi Agrawal",
        ),
        talk(
            4,
            "0zHX5yzJ_Ng",
            19,
            "The growth of AI, Blockchain & Digital Identity with Ravikant Agrawal Privado ID (Prev Polygon ID)",
        ),
        talk(
            5,
            "ZwV2lAFPU0M",
            18,
            "Autonomous Hackathon Day 4: Workshop: Verifiable Identity for AI Agents with Privado ID",
        ),
        talk(
            6,
            "-mtaS8zPvng",
            13,
            "In Conversation With Ravikant Agrawal, Director of Growth, Polygon Labs | ABC-Conclave | 3.0 TV",
        ),
        talk(7, "8rlK1H7V0vo", 11, "Blockchain Startup Show – Ep 24 | ET Now | Polygon Labs"),
        talk(8, "NBsxrELFRKk", 6, "Living with Web 3.0 and the Metaverse"),
        talk(
            9,
            "7NkhQTrxX-A",
            9,
            "Upgrading Ethereum | Ravikant Agrawal, VP-Strategy at Polygon | Hub Culture Davos 2022",
        ),
    ];
    for item in items.iter_mut().take(2) {
        item.featured = true;
    }
    items.extend(written_items());
    items
}

pub fn footer() -> FooterContent {
    FooterContent {
        title: "Let's connect and build the future together".to_string(),
        subtitle: "I'm always excited to discuss AI, Web3, and emerging technologies. Whether \
                   you want to collaborate on research, explore new ideas, or just have a \
                   meaningful conversation about tech - let's connect."
            .to_string(),
        contact_cards: Vec::new(),
        social_links: vec![
            SocialLink {
                platform: "Twitter".to_string(),
                url: "https://x.com/ravikantagrawal".to_string(),
                icon: "twitter".to_string(),
            },
            SocialLink {
                platform: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/ravikantagrawal/".to_string(),
                icon: "linkedin".to_string(),
            },
            SocialLink {
                platform: "YouTube".to_string(),
                url: format!("https://youtube.com/playlist?list={PLAYLIST}"),
                icon: "youtube".to_string(),
            },
        ],
        copyright_text: "Exploring AI & Web3 • Sharing insights on emerging tech".to_string(),
    }
}
