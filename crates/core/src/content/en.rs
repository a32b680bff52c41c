use super::{
    Content, ExperienceItem, ExperienceSection, Footer, Hero, HeroStats, NavLabels, ProjectItem,
    ProjectsSection, SkillCategories, SkillsSection,
};

pub(super) static CONTENT: Content = Content {
    nav: NavLabels {
        brand: "Alihsnnzhd",
        home: "Home",
        experience: "Experience",
        projects: "Projects",
        skills: "Skills",
        contact: "Contact",
    },
    hero: Hero {
        title: "Android Developer",
        roles: &[
            "Aliasghar Hassannezhad",
            "Android Developer",
            "Java Programmer",
            "Mobile UX Designer",
        ],
        description: "Building native Android apps with Java & XML, crafting responsive web interfaces, focused on software engineering fundamentals and user experience.",
        stats: HeroStats {
            experience: "Years Experience",
            projects: "Shipped Projects",
        },
        cta: "Download Resume",
    },
    experience: ExperienceSection {
        title: "Professional Experience",
        items: &[
            ExperienceItem {
                date: "2025 - Present",
                title: "Android Developer",
                description: "Develop and maintain native apps with Java & XML, implement responsive UI/UX, manage data persistence, and optimize performance using Android SDK.",
                tags: &["Java", "XML", "Android SDK", "Material Design"],
            },
            ExperienceItem {
                date: "2025 - Present",
                title: "Computer Network Simulation",
                description: "Designing and simulating multi-layered network infrastructures using Cisco Packet Tracer. LAN/WAN config, Subnetting, Routing and Switching protocols.",
                tags: &["Cisco Packet Tracer", "IoT", "Routing", "Switching"],
            },
            ExperienceItem {
                date: "2022 - 2023",
                title: "Web Developer (Learning)",
                description: "Build responsive web UIs with HTML, CSS, and JavaScript, learning best practices and modern interactive experiences.",
                tags: &["HTML", "CSS", "JavaScript"],
            },
        ],
    },
    projects: ProjectsSection {
        title: "Projects",
        items: &[
            ProjectItem {
                title: "Tourismo",
                description: "Smart travel companion for Iran with offline access to attractions, full city guides, navigation, and a friendly interface.",
                tags: &["Java", "XML", "Room DB"],
                link: "https://cafebazaar.ir/app/com.example.tourismo",
                code_snippet: None,
            },
            ProjectItem {
                title: "NeuroBeats",
                description: "Minimal, fast music player with striking UI, instant search, local library management, and smooth playback controls.",
                tags: &["Java", "XML", "Media API"],
                link: "https://cafebazaar.ir/app/com.example.neurobeats",
                code_snippet: None,
            },
            ProjectItem {
                title: "Photo Studio",
                description: "Modern responsive portfolio to showcase projects and skills with interactive animations and a clean, professional design.",
                tags: &["HTML", "CSS", "JS"],
                link: "http://alihsnnzhd.ir/PhotoArt/",
                code_snippet: None,
            },
        ],
    },
    skills: SkillsSection {
        title: "Skills & Stack",
        categories: SkillCategories {
            mobile: "Mobile Development",
            web: "Web Development",
            programming: "Programming Languages",
        },
    },
    footer: Footer {
        text: "2025 | Built with love & code",
    },
};
