// static site content
//
// everything the sections render that is not layout lives here.  none of it changes at
// runtime, so it is all &'static

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub source_url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillItem {
    pub name: &'static str,
    // 0..=100, drives the width of the progress bar
    pub proficiency: u8,
}

impl SkillItem {
    pub fn width_css(&self) -> String {
        format!("{}%", self.proficiency.min(100))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub items: &'static [SkillItem],
}

// the icon chips shown above the categories on narrow screens
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub level: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub label: &'static str,
    pub icon: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const OWNER: &str = "Harsh Patil";
pub const GITHUB_URL: &str = "https://github.com/Guten-Morgen1302";
pub const ALL_PROJECTS_URL: &str = "https://github.com/Guten-Morgen1302?tab=repositories";

pub const ROLES: [&str; 2] = ["UI/UX Designer", "Web Developer"];

pub const HERO_BLURB: &str = "Hello, I'm Harsh Patil. I'm a passionate Web Developer & UI/UX Designer \
    focusing on creating intuitive and visually appealing interfaces with smooth user experiences.";

pub const BIO: [&str; 4] = [
    "Hello, I'm Harsh Patil, a passionate Web Developer and Designer based in Mumbai, India.",
    "I create user-friendly and visually stunning websites that deliver exceptional user experiences.",
    "With a keen eye for detail and a commitment to staying at the forefront of technology trends, \
     I develop solutions that are not only beautiful but also functionally robust and scalable.",
    "I'm constantly learning and exploring new technologies to enhance my skills and create better \
     digital experiences for my clients and users.",
];

pub const STATS: [Stat; 4] = [
    Stat { value: "7+", label: "Years Experience" },
    Stat { value: "50+", label: "Projects Completed" },
    Stat { value: "30+", label: "Happy Clients" },
    Stat { value: "12", label: "Awards Won" },
];

// labels for the badges that circle the hero portrait
pub const ORBIT_BADGES: [&str; 6] = ["JS", "TS", "React", "Node", "CSS", "UI"];

pub static PROJECTS: &[Project] = &[
    Project {
        title: "AR Visualization App",
        description: "An augmented reality application that transforms architectural blueprints into interactive 3D models.",
        image_url: "https://images.unsplash.com/photo-1558655146-d09347e92766?auto=format&fit=crop&w=600&h=400",
        technologies: &["Three.js", "WebXR", "React"],
        live_url: GITHUB_URL,
        source_url: GITHUB_URL,
    },
    Project {
        title: "Interactive Music Experience",
        description: "A 3D audio visualization platform that transforms music into stunning visual experiences.",
        image_url: "https://images.unsplash.com/photo-1611162617213-7d7a39e9b1d7?auto=format&fit=crop&w=600&h=400",
        technologies: &["WebGL", "Web Audio API", "GSAP"],
        live_url: GITHUB_URL,
        source_url: GITHUB_URL,
    },
    Project {
        title: "E-commerce 3D Configurator",
        description: "Custom product configurator allowing users to customize products in real-time 3D visualization.",
        image_url: "https://images.unsplash.com/photo-1616091093714-c64882e9ab55?auto=format&fit=crop&w=600&h=400",
        technologies: &["Three.js", "Next.js", "Shopify"],
        live_url: GITHUB_URL,
        source_url: GITHUB_URL,
    },
    Project {
        title: "Virtual Reality Gallery",
        description: "An immersive VR art gallery showcasing digital artwork in a custom-designed virtual space.",
        image_url: "https://images.unsplash.com/photo-1626544827763-d516dce335e2?auto=format&fit=crop&w=600&h=400",
        technologies: &["A-Frame", "WebVR", "Blender"],
        live_url: GITHUB_URL,
        source_url: GITHUB_URL,
    },
    Project {
        title: "Interactive Data Visualization",
        description: "3D data visualization dashboard that makes complex information intuitive and engaging.",
        image_url: "https://images.unsplash.com/photo-1593720213428-28a5b9e94613?auto=format&fit=crop&w=600&h=400",
        technologies: &["D3.js", "Three.js", "Vue.js"],
        live_url: GITHUB_URL,
        source_url: GITHUB_URL,
    },
    Project {
        title: "Interactive Game World",
        description: "A browser-based 3D game world with physics and interactive elements created with WebGL.",
        image_url: "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?auto=format&fit=crop&w=600&h=400",
        technologies: &["Three.js", "Cannon.js", "JavaScript"],
        live_url: GITHUB_URL,
        source_url: GITHUB_URL,
    },
];

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Development",
        icon: "fas fa-code",
        items: &[
            SkillItem { name: "JavaScript/TypeScript", proficiency: 95 },
            SkillItem { name: "React/Next.js", proficiency: 90 },
            SkillItem { name: "Node.js", proficiency: 85 },
            SkillItem { name: "Vue.js", proficiency: 75 },
        ],
    },
    SkillCategory {
        name: "3D & Graphics",
        icon: "fas fa-cube",
        items: &[
            SkillItem { name: "Three.js/WebGL", proficiency: 90 },
            SkillItem { name: "Blender", proficiency: 80 },
            SkillItem { name: "WebXR/VR", proficiency: 85 },
            SkillItem { name: "GSAP Animations", proficiency: 90 },
        ],
    },
    SkillCategory {
        name: "Design & Tools",
        icon: "fas fa-palette",
        items: &[
            SkillItem { name: "Figma", proficiency: 85 },
            SkillItem { name: "Adobe Creative Suite", proficiency: 80 },
            SkillItem { name: "UI/UX Design", proficiency: 90 },
            SkillItem { name: "Design Systems", proficiency: 75 },
        ],
    },
];

pub static SKILLS: &[Skill] = &[
    Skill { name: "JavaScript", icon: "fab fa-js", color: "skill-yellow", level: "Expert (5+ years)" },
    Skill { name: "React", icon: "fab fa-react", color: "skill-blue", level: "Advanced (4 years)" },
    Skill { name: "Node.js", icon: "fab fa-node-js", color: "skill-green", level: "Intermediate (3 years)" },
    Skill { name: "Three.js", icon: "fas fa-cube", color: "skill-purple", level: "Expert (4 years)" },
    Skill { name: "WebXR", icon: "fas fa-vr-cardboard", color: "skill-red", level: "Advanced (3 years)" },
    Skill { name: "Unity", icon: "fab fa-unity", color: "skill-gray", level: "Intermediate (2 years)" },
    Skill { name: "Blender", icon: "fas fa-paint-brush", color: "skill-orange", level: "Advanced (3 years)" },
    Skill { name: "Vue.js", icon: "fab fa-vuejs", color: "skill-green", level: "Intermediate (2 years)" },
];

pub static SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "GitHub", icon: "fab fa-github", url: GITHUB_URL },
    SocialLink { name: "LinkedIn", icon: "fab fa-linkedin-in", url: "https://www.linkedin.com/in/harshpatil13" },
    SocialLink { name: "Instagram", icon: "fab fa-instagram", url: "https://www.instagram.com/harsh_patil1302/" },
    SocialLink { name: "Discord", icon: "fab fa-discord", url: "https://discordapp.com/users/941729896550502420" },
];

pub static CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        label: "Email",
        icon: "fas fa-envelope",
        value: "harshpatil1302@gmail.com",
        href: Some("mailto:harshpatil1302@gmail.com"),
    },
    ContactInfo {
        label: "GitHub",
        icon: "fas fa-code-branch",
        value: "Guten-Morgen1302",
        href: Some(GITHUB_URL),
    },
    ContactInfo {
        label: "Location",
        icon: "fas fa-map-marker-alt",
        value: "Mumbai, India",
        href: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proficiencies_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.items.is_empty(), "{} has no items", category.name);
            for item in category.items {
                assert!(item.proficiency <= 100, "{} is {}", item.name, item.proficiency);
            }
        }
        assert_eq!(SKILL_CATEGORIES[0].items[0].width_css(), "95%");
    }

    #[test]
    fn every_project_lists_its_stack() {
        for project in PROJECTS {
            assert!(!project.technologies.is_empty(), "{}", project.title);
            assert!(project.image_url.starts_with("https://"));
        }
    }

    #[test]
    fn external_links_are_absolute() {
        for link in SOCIAL_LINKS {
            assert!(link.url.starts_with("https://"), "{}", link.name);
        }
        assert!(ALL_PROJECTS_URL.starts_with(GITHUB_URL));
    }
}
