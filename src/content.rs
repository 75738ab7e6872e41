use thiserror::Error;

/// One navigable section of the page: a stable element id plus the label
/// shown in the nav strip. The declared order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        id: "home",
        label: "Home",
    },
    NavItem {
        id: "about",
        label: "About",
    },
    NavItem {
        id: "projects",
        label: "Projects",
    },
    NavItem {
        id: "experience",
        label: "Experience",
    },
    NavItem {
        id: "gallery",
        label: "My Photos",
    },
    NavItem {
        id: "contact",
        label: "Contact",
    },
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct UnknownSection(pub String);

/// Looks up a declared nav item by id. Used by tab deep links, where an
/// unknown id is recoverable (the caller keeps its current tab).
pub fn find_item(id: &str) -> Result<&'static NavItem, UnknownSection> {
    NAV_ITEMS
        .iter()
        .find(|item| item.id == id)
        .ok_or_else(|| UnknownSection(id.to_string()))
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub href: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        title: "BugTracker+",
        blurb: "Spring Boot and React platform for teams to triage issues, automate reporting, and ship faster.",
        tags: &["Spring Boot", "React", "SQL", "Docker"],
        image: "https://images.unsplash.com/photo-1517433456452-f9633a875f6f?auto=format&fit=crop&w=1200&q=80",
        href: "https://github.com/1juho1?tab=repositories",
    },
    Project {
        title: "FinGen Agents",
        blurb: "Multi-agent LLM assistant that evaluates financial portfolios, runs backtests, and drafts insights.",
        tags: &["Python", "LLM", "RAG", "RL"],
        image: "https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=1200&q=80",
        href: "https://github.com/1juho1?tab=repositories",
    },
    Project {
        title: "Icy Boba Digital",
        blurb: "Immersive storefront experience with menu management, gallery, and automated catering requests.",
        tags: &["HTML", "CSS", "JavaScript"],
        image: "https://images.unsplash.com/photo-1489515217757-5fd1be406fef?auto=format&fit=crop&w=1200&q=80",
        href: "https://github.com/1juho1?tab=repositories",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub role: &'static str,
    pub org: &'static str,
    pub time: &'static str,
    pub bullets: &'static [&'static str],
}

pub static EXPERIENCE: [Experience; 2] = [
    Experience {
        role: "Web Developer & IT Specialist",
        org: "Icy Boba",
        time: "2024 – Present",
        bullets: &[
            "Designed and launched a performant multi-page site with menu, gallery, and contact flows.",
            "Automated daily tasks around inventory and reporting, improving turnaround time for the team.",
            "Maintain POS hardware, troubleshoot devices, and keep the environment reliable during rush hours.",
        ],
    },
    Experience {
        role: "Academic Projects",
        org: "Stockton University",
        time: "2023 – Present",
        bullets: &[
            "Developed data structure visualizers and algorithmic problem sets to strengthen fundamentals.",
            "Led group programming assignments, coordinating Git workflows and peer reviews.",
            "Explored cybersecurity labs covering network hardening, threat modeling, and incident response drills.",
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

pub static HERO_STATS: [Stat; 3] = [
    Stat {
        label: "Focus",
        value: "Human-centered full-stack",
    },
    Stat {
        label: "Toolbox",
        value: "Java • Python • React • SQL",
    },
    Stat {
        label: "Mindset",
        value: "Learn, iterate, refine",
    },
];

pub static ABOUT_HIGHLIGHTS: [&str; 4] = [
    "GPA 3.15 · Junior · Class of 2027",
    "Comfortable with Java, Python, TypeScript, C++, SQL",
    "React, Spring Boot, Tailwind, Git, Framer Motion",
    "Interests in quant finance, data science, and security",
];

pub static MOODBOARD_IMAGES: [&str; 4] = [
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1501973801540-537f08ccae7b?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1476041800959-2f6bb412c8ce?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1520420097861-7a29d3d06fa4?auto=format&fit=crop&w=800&q=80",
];

pub const HERO_BACKDROP: &str =
    "https://images.unsplash.com/photo-1501785888041-af3ef285b470?auto=format&fit=crop&w=2000&q=80";

pub const CONTACT_EMAIL: &str = "justinhoang710@gmail.com";
pub const GITHUB_URL: &str = "https://github.com/1juho1";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_ids_unique_and_home_first() {
        let mut seen = Vec::new();
        for item in &NAV_ITEMS {
            assert!(!seen.contains(&item.id), "duplicate nav id {}", item.id);
            seen.push(item.id);
        }
        assert_eq!(NAV_ITEMS[0].id, "home");
    }

    #[test]
    fn test_find_item() {
        assert_eq!(find_item("projects").map(|i| i.label), Ok("Projects"));
        assert_eq!(
            find_item("blog"),
            Err(UnknownSection("blog".to_string()))
        );
    }
}
